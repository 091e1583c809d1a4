// vim: tw=80
//! The code under test.
//!
//! [`Main`] and [`MainTwo`] only call their collaborators and report what came
//! back.  They are generic over the collaborator traits so that a test can
//! hand them either the real types or test doubles.

use tracing::instrument;

use crate::{
    attributes::Attributes,
    dependency_one::DependencyOne,
    dependency_three::DependencyThree,
    dependency_two::DependencyTwo,
    report::Report,
    value::Value,
};

/// The number [`Main::repeated_default_calls`] passes along.
pub const DEFAULT_NUMBER: i64 = 123;

const ORDINALS: [&str; 4] = ["first", "second", "third", "fourth"];

#[derive(Debug)]
pub struct Main<One, Two> {
    one: One,
    two: Two,
}

impl<One: DependencyOne, Two: DependencyTwo> Main<One, Two> {
    pub fn new(one: One, two: Two) -> Self {
        Main { one, two }
    }

    /// Call every collaborator method once.
    ///
    /// The calls are made in this order: `passed_number(123)`,
    /// `one_hundred()`, `set_name("Ali")`, `name()`, `two_hundred()` and
    /// `set_person("Ali", "Yavari", 34)`.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> Report {
        let mut report = Report::new();
        report.push(
            "dependency_one.passed_number(123)",
            self.one.passed_number(DEFAULT_NUMBER),
        );
        report.push("dependency_one.one_hundred()", self.one.one_hundred());
        report.push(
            "dependency_one.set_name(\"Ali\")",
            self.one.set_name("Ali"),
        );
        report.push("dependency_one.name()", self.one.name());
        report.push("dependency_two.two_hundred()", self.two.two_hundred());
        report.push(
            "dependency_two.set_person()",
            self.two.set_person("Ali", "Yavari", 34),
        );
        report
    }

    /// Call `passed_number` once for each of `numbers`, then `one_hundred`
    /// three times.
    #[instrument(level = "debug", skip(self))]
    pub fn repeated_method_calls(&self, numbers: [i64; 4]) -> Report {
        let mut report = Report::new();
        for (n, ordinal) in numbers.into_iter().zip(ORDINALS) {
            report.push(
                format!("dependency_one.passed_number({n})-{ordinal}"),
                self.one.passed_number(n),
            );
        }
        for ordinal in &ORDINALS[..3] {
            report.push(
                format!("dependency_one.one_hundred()-{ordinal}"),
                self.one.one_hundred(),
            );
        }
        report
    }

    /// [`Main::repeated_method_calls`] with [`DEFAULT_NUMBER`] throughout.
    pub fn repeated_default_calls(&self) -> Report {
        self.repeated_method_calls([DEFAULT_NUMBER; 4])
    }

    pub fn into_inner(self) -> (One, Two) {
        (self.one, self.two)
    }
}

#[derive(Debug)]
pub struct MainTwo<Three> {
    three: Three,
}

impl<Three: DependencyThree> MainTwo<Three> {
    pub fn new(three: Three) -> Self {
        MainTwo { three }
    }

    /// Let the collaborator multiply a local variable in place.
    ///
    /// With the real collaborator the reported value is 40.
    #[instrument(level = "debug", skip(self))]
    pub fn passed_by_reference(&self) -> Report {
        let mut number = 4;
        self.three.multiple_by_ten(&mut number);
        let mut report = Report::new();
        report.push("dependency_three.multiple_by_ten(4)", number);
        report
    }

    /// Run the whole fluent chain and return its snapshot.
    ///
    /// The chain consumes the collaborator.
    #[instrument(level = "debug", skip(self))]
    pub fn chained_methods(self) -> Attributes {
        self.three
            .add_number(10)
            .add_string("Ali")
            .add_bool(true)
            .finalize(Value::from("Wow"))
    }

    /// Call an operation the collaborator doesn't define.
    #[instrument(level = "debug", skip(self))]
    pub fn magic_or_virtual_method(&self) -> Report {
        let args = [Value::Int(123), Value::from("Ali")];
        let mut report = Report::new();
        report.push(
            "dependency_three.not_existed_method(123, \"Ali\")",
            self.three.dispatch("not_existed_method", &args),
        );
        report
    }

    pub fn into_inner(self) -> Three {
        self.three
    }
}
