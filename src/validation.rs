//! Boolean-returning validation of [literals](https://www.w3.org/TR/rdf11-concepts/#dfn-literal)
//! against their datatypes.
//!
//! [`oxrdf`] guarantees well-formed IRIs and (through the checked
//! constructors) language tags, but deliberately accepts any lexical form for
//! any datatype: `"abc"^^xsd:int` is a perfectly constructible literal. These
//! checks answer whether such a literal is in the
//! [lexical space](https://www.w3.org/TR/xmlschema11-2/#lexical-space) of its
//! datatype, without ever raising.

use oxilangtag::LanguageTag;
use oxrdf::vocab::xsd;
use oxrdf::{LiteralRef, NamedNodeRef};
use oxsdatatypes::{Boolean, Date, DateTime, Decimal, Double, Float, Integer, Time};

/// Checks that the literal's lexical form is valid for its datatype, and
/// that its language tag (if any) is a well-formed
/// [BCP47](https://tools.ietf.org/html/bcp47) tag.
///
/// Datatypes outside the checked set (see [`is_lexical_form_valid`]) are
/// considered valid; this is a lexical sanity check, not schema validation.
///
/// Usage example:
/// ```
/// use oxrdf::vocab::xsd;
/// use oxrdf::Literal;
/// use oxrdfutils::is_literal_valid;
///
/// assert!(is_literal_valid(&Literal::from(42)));
/// assert!(is_literal_valid(&Literal::new_typed_literal("-0042", xsd::INT)));
/// assert!(!is_literal_valid(&Literal::new_typed_literal("abc", xsd::INT)));
/// assert!(!is_literal_valid(&Literal::new_typed_literal("yes", xsd::BOOLEAN)));
/// ```
pub fn is_literal_valid<'a>(literal: impl Into<LiteralRef<'a>>) -> bool {
    let literal = literal.into();
    if let Some(tag) = literal.language() {
        // the datatype is rdf:langString, nothing else to check
        return LanguageTag::parse(tag).is_ok();
    }
    is_lexical_form_valid(literal.value(), literal.datatype())
}

/// Checks that `value` is in the lexical space of `datatype`.
///
/// The checked datatypes are `xsd:boolean`, `xsd:dateTime`, `xsd:date`,
/// `xsd:time`, `xsd:float`, `xsd:double`, `xsd:decimal`, `xsd:integer` and
/// the bounded integer types (`xsd:long`, `xsd:int`, `xsd:short`,
/// `xsd:byte` and their unsigned counterparts). Any other datatype is
/// considered valid.
pub fn is_lexical_form_valid<'a>(value: &str, datatype: impl Into<NamedNodeRef<'a>>) -> bool {
    let datatype = datatype.into();
    if datatype == xsd::BOOLEAN {
        value.parse::<Boolean>().is_ok()
    } else if datatype == xsd::DATE_TIME {
        value.parse::<DateTime>().is_ok()
    } else if datatype == xsd::DATE {
        value.parse::<Date>().is_ok()
    } else if datatype == xsd::TIME {
        value.parse::<Time>().is_ok()
    } else if datatype == xsd::FLOAT {
        value.parse::<Float>().is_ok()
    } else if datatype == xsd::DOUBLE {
        value.parse::<Double>().is_ok()
    } else if datatype == xsd::DECIMAL {
        value.parse::<Decimal>().is_ok()
    } else if datatype == xsd::INTEGER || datatype == xsd::LONG {
        value.parse::<Integer>().is_ok()
    } else if datatype == xsd::INT {
        is_integer_in_range(value, i64::from(i32::MIN), i64::from(i32::MAX))
    } else if datatype == xsd::SHORT {
        is_integer_in_range(value, i64::from(i16::MIN), i64::from(i16::MAX))
    } else if datatype == xsd::BYTE {
        is_integer_in_range(value, i64::from(i8::MIN), i64::from(i8::MAX))
    } else if datatype == xsd::UNSIGNED_LONG {
        // above the i64 range, so not expressible as an Integer
        value.parse::<u64>().is_ok()
    } else if datatype == xsd::UNSIGNED_INT {
        is_integer_in_range(value, 0, i64::from(u32::MAX))
    } else if datatype == xsd::UNSIGNED_SHORT {
        is_integer_in_range(value, 0, i64::from(u16::MAX))
    } else if datatype == xsd::UNSIGNED_BYTE {
        is_integer_in_range(value, 0, i64::from(u8::MAX))
    } else {
        true
    }
}

fn is_integer_in_range(value: &str, min: i64, max: i64) -> bool {
    value
        .parse::<Integer>()
        .is_ok_and(|i| (min..=max).contains(&i64::from(i)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::Literal;

    #[test]
    fn typed_conversions_are_valid() {
        for literal in [
            Literal::from(true),
            Literal::from(-42),
            Literal::from(42_i64),
            Literal::from(1.5_f32),
            Literal::from(f64::NEG_INFINITY),
            Literal::from("anything"),
        ] {
            assert!(is_literal_valid(&literal), "{literal}");
        }
    }

    #[test]
    fn bounded_integers() {
        assert!(is_lexical_form_valid("+0042", xsd::INT));
        assert!(is_lexical_form_valid("-128", xsd::BYTE));
        assert!(!is_lexical_form_valid("128", xsd::BYTE));
        assert!(!is_lexical_form_valid("40000", xsd::SHORT));
        assert!(is_lexical_form_valid("40000", xsd::UNSIGNED_SHORT));
        assert!(!is_lexical_form_valid("-1", xsd::UNSIGNED_INT));
        assert!(is_lexical_form_valid("18446744073709551615", xsd::UNSIGNED_LONG));
        assert!(!is_lexical_form_valid("2147483648", xsd::INT));
        assert!(!is_lexical_form_valid("1.0", xsd::INT));
    }

    #[test]
    fn floating_point_special_values() {
        assert!(is_lexical_form_valid("INF", xsd::FLOAT));
        assert!(is_lexical_form_valid("-INF", xsd::DOUBLE));
        assert!(is_lexical_form_valid("NaN", xsd::DOUBLE));
        assert!(is_lexical_form_valid("1.0E5", xsd::DOUBLE));
        assert!(!is_lexical_form_valid("one", xsd::DOUBLE));
    }

    #[test]
    fn dates_and_times() {
        assert!(is_lexical_form_valid("2024-02-29T12:00:00Z", xsd::DATE_TIME));
        assert!(!is_lexical_form_valid("2023-02-29T12:00:00Z", xsd::DATE_TIME));
        assert!(is_lexical_form_valid("2024-02-29", xsd::DATE));
        assert!(is_lexical_form_valid("12:00:00", xsd::TIME));
        assert!(!is_lexical_form_valid("noon", xsd::TIME));
    }

    #[test]
    fn unknown_datatypes_are_valid() {
        assert!(is_lexical_form_valid("anything", xsd::STRING));
        assert!(is_literal_valid(&Literal::new_typed_literal(
            "anything",
            oxrdf::NamedNode::new("http://example.com/dt").unwrap()
        )));
    }

    #[test]
    fn language_tags() {
        assert!(is_literal_valid(
            &Literal::new_language_tagged_literal("foo", "en-US").unwrap()
        ));
        assert!(!is_literal_valid(
            &Literal::new_language_tagged_literal_unchecked("foo", "12-not-a-tag")
        ));
    }
}
