// vim: tw=80
//! The collaborator of [`MainTwo`](crate::MainTwo).
//!
//! Its fluent methods take and return `self` by value: each step hands the
//! same, exclusively owned object on to the next.  That lets a test double
//! answer a step with the double for the following step.

#[cfg(any(test, feature = "mock"))]
use mockall::automock;

use crate::{
    attributes::{self, AttributeBuilder, Attributes},
    value::Value,
};

#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait DependencyThree {
    /// Multiply `number` by ten, in place.
    fn multiple_by_ten(&self, number: &mut i64);
    fn add_number(self, number: i64) -> Self;
    fn add_string(self, string: &str) -> Self;
    fn add_bool(self, flag: bool) -> Self;
    /// Store the `final` attribute and return the snapshot.
    fn finalize(self, last: Value) -> Attributes;
    /// Answer an operation this type doesn't define.
    fn dispatch(&self, name: &str, args: &[Value]) -> String;
}

#[derive(Clone, Debug, Default)]
pub struct RealDependencyThree {
    builder: AttributeBuilder,
}

impl RealDependencyThree {
    /// The attributes gathered so far.
    pub fn attributes(&self) -> &Attributes {
        self.builder.attributes()
    }
}

impl DependencyThree for RealDependencyThree {
    fn multiple_by_ten(&self, number: &mut i64) {
        attributes::multiple_by_ten(number);
    }

    fn add_number(mut self, number: i64) -> Self {
        self.builder.add_number(number);
        self
    }

    fn add_string(mut self, string: &str) -> Self {
        self.builder.add_string(string);
        self
    }

    fn add_bool(mut self, flag: bool) -> Self {
        self.builder.add_bool(flag);
        self
    }

    fn finalize(mut self, last: Value) -> Attributes {
        self.builder.finalize(last)
    }

    fn dispatch(&self, name: &str, args: &[Value]) -> String {
        self.builder.dispatch(name, args)
    }
}
