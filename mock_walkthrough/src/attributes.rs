// vim: tw=80
//! A fluent attribute builder.
//!
//! [`AttributeBuilder`] collects up to four attributes through chained calls
//! and hands back an [`Attributes`] snapshot from its terminal call.
//!
//! ```
//! # use mock_walkthrough::{AttributeBuilder, Value};
//! let attributes = AttributeBuilder::new()
//!     .add_number(10)
//!     .add_string("Ali")
//!     .add_bool(true)
//!     .finalize("Wow");
//! assert_eq!(Some(10), attributes.number);
//! assert_eq!(Some(Value::from("Wow")), attributes.last);
//! ```

use serde_derive::Serialize;

use crate::value::Value;

/// The attribute names, in snapshot order.
pub const KEYS: [&str; 4] = ["number", "string", "bool", "final"];

/// A snapshot of the attributes gathered by an [`AttributeBuilder`].
///
/// An attribute that was never assigned is `None`.  It is left out of
/// [`Attributes::keys`] and of the serialized form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Attributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
    #[serde(rename = "bool", skip_serializing_if = "Option::is_none")]
    pub flag: Option<bool>,
    #[serde(rename = "final", skip_serializing_if = "Option::is_none")]
    pub last: Option<Value>,
}

impl Attributes {
    /// Look up an attribute by its name.
    pub fn get(&self, key: &str) -> Option<Value> {
        match key {
            "number" => self.number.map(Value::from),
            "string" => self.string.clone().map(Value::from),
            "bool" => self.flag.map(Value::from),
            "final" => self.last.clone(),
            _ => None,
        }
    }

    /// Names of the assigned attributes.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        KEYS.into_iter().filter(move |k| self.get(k).is_some())
    }

    pub fn len(&self) -> usize {
        self.keys().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accumulates attributes one chained call at a time.
///
/// Every non-terminal method stores one attribute, overwriting any earlier
/// value for the same key, and returns the same builder.
#[derive(Clone, Debug, Default)]
pub struct AttributeBuilder {
    attributes: Attributes,
}

impl AttributeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_number(&mut self, number: i64) -> &mut Self {
        self.attributes.number = Some(number);
        self
    }

    pub fn add_string<S: Into<String>>(&mut self, string: S) -> &mut Self {
        self.attributes.string = Some(string.into());
        self
    }

    pub fn add_bool(&mut self, flag: bool) -> &mut Self {
        self.attributes.flag = Some(flag);
        self
    }

    /// Store the `final` attribute and return everything gathered so far.
    pub fn finalize<V: Into<Value>>(&mut self, last: V) -> Attributes {
        self.attributes.last = Some(last.into());
        self.attributes.clone()
    }

    /// The attributes gathered so far.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// Multiply `number` by ten, in place.
///
/// The result wraps on overflow, so every `i64` is a valid input.
pub fn multiple_by_ten(number: &mut i64) {
    *number = number.wrapping_mul(10);
}
