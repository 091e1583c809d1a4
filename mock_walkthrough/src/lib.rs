// vim: tw=80
//! A guided tour of test doubles with Mockall.
//!
//! This crate contains a handful of deliberately tiny fixtures.  They exist so
//! that the integration tests, each of which covers one topic, have something
//! to replace with doubles.  Read the tests in `tests/` in this order:
//!
//! * `creating_doubles`: full mocks, partial behavior, one-line mocks, spies
//! * `expectations`: argument expectations and return values
//! * `call_counts`: how many times a method may be called
//! * `sequences`: the order in which methods are called
//! * `argument_matching`: predicates and their combinators
//! * `pass_by_reference`: methods that write through `&mut` arguments
//! * `fluent_chain`: mocking a chain of builder calls
//! * `open_dispatch`: calling operations by name
//!
//! # The fixtures
//!
//! [`Main`] talks to a [`DependencyOne`] and a [`DependencyTwo`].  [`MainTwo`]
//! talks to a [`DependencyThree`].  Each dependency is a trait with a real
//! implementation (`RealDependencyOne` and so on) and, with the `mock`
//! feature, a Mockall double (`MockDependencyOne` and so on).
//!
//! ```
//! use mock_walkthrough::*;
//!
//! let mut main = Main::new(RealDependencyOne::default(), RealDependencyTwo);
//! let report = main.run();
//! assert_eq!(Some(&Value::Int(100)), report.get("dependency_one.one_hundred()"));
//! ```
//!
//! The same driver, with a double in place of the first dependency:
//!
#![cfg_attr(feature = "mock", doc = "```")]
#![cfg_attr(not(feature = "mock"), doc = "```ignore")]
//! # use mock_walkthrough::*;
//! let mut one = MockDependencyOne::new();
//! one.expect_passed_number().return_const(Value::Int(10));
//! one.expect_one_hundred().return_const(20);
//! one.expect_set_name().return_const("Someone else".to_owned());
//! one.expect_name().return_const("Yavari".to_owned());
//!
//! let mut main = Main::new(one, RealDependencyTwo);
//! let report = main.run();
//! assert_eq!(Some(&Value::Int(20)), report.get("dependency_one.one_hundred()"));
//! ```
//!
//! # The attribute builder
//!
//! [`AttributeBuilder`] is the only fixture with any structure.  It gathers
//! up to four attributes through chained calls and returns an [`Attributes`]
//! snapshot from [`AttributeBuilder::finalize`].  Operations it doesn't define
//! can still be invoked through [`AttributeBuilder::dispatch`], which answers
//! with the operation's name.  See the [`dispatch`] module for the typed
//! [`Call`] interface.
//!
//! # Crate features
//!
//! * **mock** (default): derive `Mock*` doubles for the dependency traits.

mod app;
mod attributes;
pub mod dispatch;
mod error;
mod report;
mod value;

pub mod dependency_one;
pub mod dependency_three;
pub mod dependency_two;

pub use app::{Main, MainTwo, DEFAULT_NUMBER};
pub use attributes::{multiple_by_ten, AttributeBuilder, Attributes, KEYS};
pub use dependency_one::{DependencyOne, RealDependencyOne};
pub use dependency_three::{DependencyThree, RealDependencyThree};
pub use dependency_two::{DependencyTwo, RealDependencyTwo};
pub use dispatch::{Call, OpenDispatch, Outcome};
pub use error::DispatchError;
pub use report::Report;
pub use value::Value;

cfg_if::cfg_if! {
    if #[cfg(any(test, feature = "mock"))] {
        pub use dependency_one::MockDependencyOne;
        pub use dependency_three::MockDependencyThree;
        pub use dependency_two::MockDependencyTwo;
    }
}
