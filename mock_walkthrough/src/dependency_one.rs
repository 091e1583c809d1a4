// vim: tw=80
//! The first collaborator of [`Main`](crate::Main).

#[cfg(any(test, feature = "mock"))]
use mockall::automock;

use crate::value::Value;

/// The name a fresh [`RealDependencyOne`] answers with.
pub const DEFAULT_NAME: &str = "default_name";

/// Numbers and a settable name.
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait DependencyOne {
    /// Echo `number` back.  Untyped, so a double may answer with anything.
    fn passed_number(&self, number: i64) -> Value;
    fn one_hundred(&self) -> i64;
    /// Store `name` and return it.
    fn set_name(&mut self, name: &str) -> String;
    fn name(&self) -> String;
}

#[derive(Clone, Debug)]
pub struct RealDependencyOne {
    name: String,
}

impl Default for RealDependencyOne {
    fn default() -> Self {
        RealDependencyOne { name: DEFAULT_NAME.to_owned() }
    }
}

impl DependencyOne for RealDependencyOne {
    fn passed_number(&self, number: i64) -> Value {
        Value::Int(number)
    }

    fn one_hundred(&self) -> i64 {
        100
    }

    fn set_name(&mut self, name: &str) -> String {
        self.name = name.to_owned();
        self.name.clone()
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}
