//! Decoders for fields whose wire shape is not fixed.
//!
//! - [`Category`]: a single string or an array of strings, always held as a
//!   sequence.
//! - [`FlexInt`]: an integer sent either as a JSON number or as a numeric
//!   string.
//!
//! Both reject every other shape instead of coercing it.

use std::fmt;
use std::ops::Deref;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Category labels attached to a message by the sender.
///
/// Decodes from `"label"` (one-element sequence) or `["a", "b"]` (verbatim).
/// Always serializes as an array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Category(Vec<String>);

impl Category {
    /// Labels in wire order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consume into the underlying labels.
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for Category {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for Category {
    fn from(labels: Vec<String>) -> Self {
        Self(labels)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self(vec![label.to_string()])
    }
}

impl<'a> IntoIterator for &'a Category {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

struct CategoryVisitor;

impl<'de> Visitor<'de> for CategoryVisitor {
    type Value = Category;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or an array of strings")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Category(vec![v.to_string()]))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Category(vec![v]))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut labels = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(label) = seq.next_element::<String>()? {
            labels.push(label);
        }
        Ok(Category(labels))
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CategoryVisitor)
    }
}

/// An integer that may arrive as a JSON number or as a decimal string.
///
/// Strings accept ASCII digits with an optional leading `+` or `-`; floats,
/// booleans, objects and non-numeric strings are rejected. Serializes as a
/// JSON number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FlexInt(pub i64);

impl FlexInt {
    /// The decoded integer.
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<FlexInt> for i64 {
    fn from(v: FlexInt) -> Self {
        v.0
    }
}

impl From<i64> for FlexInt {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

struct FlexIntVisitor;

impl Visitor<'_> for FlexIntVisitor {
    type Value = FlexInt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string containing an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(FlexInt(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(FlexInt)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse::<i64>()
            .map(FlexInt)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for FlexInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FlexIntVisitor)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── Category ────────────────────────────────────────────────────

    #[test]
    fn category_from_single_string() {
        let c: Category = serde_json::from_value(json!("cat facts")).unwrap();
        assert_eq!(c.as_slice(), ["cat facts"]);
    }

    #[test]
    fn category_from_array() {
        let c: Category = serde_json::from_value(json!(["cat", "facts"])).unwrap();
        assert_eq!(c.as_slice(), ["cat", "facts"]);
    }

    #[test]
    fn category_from_empty_array() {
        let c: Category = serde_json::from_str("[]").unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn category_rejects_number() {
        assert!(serde_json::from_value::<Category>(json!(42)).is_err());
    }

    #[test]
    fn category_rejects_other_shapes() {
        for bad in [json!(null), json!(true), json!({"a": "b"}), json!(["cat", 1])] {
            assert!(
                serde_json::from_value::<Category>(bad.clone()).is_err(),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn category_serializes_as_array() {
        let c = Category::from("cat facts");
        assert_eq!(serde_json::to_value(&c).unwrap(), json!(["cat facts"]));
    }

    #[test]
    fn category_iterates_in_order() {
        let c = Category::from(vec!["a".to_string(), "b".to_string()]);
        let collected: Vec<&String> = (&c).into_iter().collect();
        assert_eq!(collected, ["a", "b"]);
        assert_eq!(c.into_inner(), vec!["a", "b"]);
    }

    // ── FlexInt ─────────────────────────────────────────────────────

    #[test]
    fn flex_int_from_string() {
        let v: FlexInt = serde_json::from_value(json!("5")).unwrap();
        assert_eq!(v.value(), 5);
    }

    #[test]
    fn flex_int_from_number() {
        let v: FlexInt = serde_json::from_value(json!(5)).unwrap();
        assert_eq!(v, FlexInt(5));
    }

    #[test]
    fn flex_int_signed_strings() {
        let neg: FlexInt = serde_json::from_value(json!("-12")).unwrap();
        let pos: FlexInt = serde_json::from_value(json!("+12")).unwrap();
        assert_eq!(i64::from(neg), -12);
        assert_eq!(i64::from(pos), 12);
    }

    #[test]
    fn flex_int_rejects_non_numeric_string() {
        assert!(serde_json::from_value::<FlexInt>(json!("abc")).is_err());
        assert!(serde_json::from_value::<FlexInt>(json!(" 5")).is_err());
        assert!(serde_json::from_value::<FlexInt>(json!("5.0")).is_err());
        assert!(serde_json::from_value::<FlexInt>(json!("")).is_err());
    }

    #[test]
    fn flex_int_rejects_other_shapes() {
        for bad in [json!(1.5), json!(true), json!(null), json!([1]), json!({"n": 1})] {
            assert!(
                serde_json::from_value::<FlexInt>(bad.clone()).is_err(),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn flex_int_rejects_out_of_range() {
        assert!(serde_json::from_value::<FlexInt>(json!(u64::MAX)).is_err());
        assert!(serde_json::from_value::<FlexInt>(json!("99999999999999999999")).is_err());
    }

    #[test]
    fn flex_int_serializes_as_number() {
        assert_eq!(serde_json::to_value(FlexInt(7)).unwrap(), json!(7));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn flex_int_string_and_number_agree(n in any::<i64>()) {
                let from_num: FlexInt = serde_json::from_value(json!(n)).unwrap();
                let from_str: FlexInt = serde_json::from_value(json!(n.to_string())).unwrap();
                prop_assert_eq!(from_num, from_str);
                prop_assert_eq!(from_num.value(), n);
            }

            #[test]
            fn category_array_is_verbatim(labels in proptest::collection::vec(".*", 0..8)) {
                let c: Category = serde_json::from_value(json!(labels.clone())).unwrap();
                prop_assert_eq!(c.into_inner(), labels);
            }

            #[test]
            fn category_string_is_singleton(label in ".*") {
                let c: Category = serde_json::from_value(json!(label.clone())).unwrap();
                prop_assert_eq!(c.into_inner(), vec![label]);
            }
        }
    }
}
