// vim: tw=80
//! Creating test doubles.
//!
//! A Mockall double answers only the calls it has expectations for.  Anything
//! else panics.  Partial behavior, "ignore missing" and spies are not built
//! in, but each is a few lines of ordinary code.
#![deny(warnings)]

use std::sync::Mutex;

use mock_walkthrough::*;
use mockall::*;

/// A double for every method of `DependencyOne`.
fn full_mock() -> MockDependencyOne {
    let mut one = MockDependencyOne::new();
    one.expect_passed_number()
        .return_const(Value::Int(10));
    one.expect_one_hundred()
        .return_const(20);
    one.expect_set_name()
        .return_const("Someone else".to_owned());
    one.expect_name()
        .return_const("Yavari".to_owned());
    one
}

mod full {
    use super::*;

    #[test]
    fn every_method_expected() {
        let mut main = Main::new(full_mock(), RealDependencyTwo);
        let report = main.run();
        assert_eq!(Some(&Value::Int(10)),
                   report.get("dependency_one.passed_number(123)"));
        assert_eq!(Some(&Value::Int(20)),
                   report.get("dependency_one.one_hundred()"));
        assert_eq!(Some(&Value::from("Someone else")),
                   report.get("dependency_one.set_name(\"Ali\")"));
        assert_eq!(Some(&Value::from("Yavari")),
                   report.get("dependency_one.name()"));
        // The second dependency is real
        assert_eq!(Some(&Value::Int(200)),
                   report.get("dependency_two.two_hundred()"));
    }

    #[test]
    #[should_panic(expected = "No matching expectation found")]
    fn missing_expectation() {
        let mut one = MockDependencyOne::new();
        one.expect_passed_number()
            .return_const(Value::Int(10));
        one.expect_one_hundred()
            .return_const(20);
        one.expect_set_name()
            .return_const("Someone else".to_owned());
        // No expectation for name()
        Main::new(one, RealDependencyTwo).run();
    }
}

/// There is no switch for ignoring unexpected calls.  Instead, expect them
/// with any arguments and return the type's default.
mod ignore_missing {
    use super::*;

    fn lenient() -> MockDependencyOne {
        let mut one = MockDependencyOne::new();
        one.expect_passed_number()
            .return_const(Value::default());
        one.expect_one_hundred()
            .return_const(i64::default());
        one.expect_set_name()
            .return_const(String::default());
        one.expect_name()
            .return_const(String::default());
        one
    }

    #[test]
    fn defaults() {
        let mut main = Main::new(lenient(), RealDependencyTwo);
        let report = main.run();
        assert_eq!(Some(&Value::Null),
                   report.get("dependency_one.passed_number(123)"));
        assert_eq!(Some(&Value::Int(0)),
                   report.get("dependency_one.one_hundred()"));
        assert_eq!(Some(&Value::from("")),
                   report.get("dependency_one.name()"));
    }

    /// Specific expectations can still override some of the defaults, as
    /// long as they are declared first.
    #[test]
    fn specific_first() {
        let mut one = MockDependencyOne::new();
        one.expect_one_hundred()
            .times(1)
            .return_const(99);
        one.expect_one_hundred()
            .return_const(0);
        assert_eq!(99, one.one_hundred());
        assert_eq!(0, one.one_hundred());
        assert_eq!(0, one.one_hundred());
    }
}

/// Partial doubles: some methods canned, the rest forwarded to a real object.
mod partial {
    use super::*;

    #[test]
    fn passthrough() {
        let real = RealDependencyOne::default();
        let mut one = MockDependencyOne::new();
        one.expect_passed_number()
            .returning(move |n| real.passed_number(n));
        one.expect_one_hundred()
            .return_const(20);
        let mut real = RealDependencyOne::default();
        one.expect_set_name()
            .returning(move |name| real.set_name(name));
        one.expect_name()
            .returning(|| RealDependencyOne::default().name());

        let mut main = Main::new(one, RealDependencyTwo);
        let report = main.run();
        assert_eq!(Some(&Value::Int(123)),
                   report.get("dependency_one.passed_number(123)"));
        assert_eq!(Some(&Value::Int(20)),
                   report.get("dependency_one.one_hundred()"));
        assert_eq!(Some(&Value::from("Ali")),
                   report.get("dependency_one.set_name(\"Ali\")"));
        // Each real object has its own state
        assert_eq!(Some(&Value::from("default_name")),
                   report.get("dependency_one.name()"));
    }

    /// Forwarding to one shared object keeps setter and getter consistent.
    #[test]
    fn shared_real_object() {
        let real = std::sync::Arc::new(Mutex::new(RealDependencyOne::default()));
        let mut one = MockDependencyOne::new();
        one.expect_passed_number()
            .return_const(Value::Null);
        one.expect_one_hundred()
            .return_const(0);
        let r = real.clone();
        one.expect_set_name()
            .returning(move |name| r.lock().unwrap().set_name(name));
        let r = real.clone();
        one.expect_name()
            .returning(move || r.lock().unwrap().name());

        let report = Main::new(one, RealDependencyTwo).run();
        assert_eq!(Some(&Value::from("Ali")),
                   report.get("dependency_one.name()"));
        assert_eq!("Ali", real.lock().unwrap().name());
    }
}

/// A mock that only needs one expectation fits in a helper expression.
#[test]
fn one_liner() {
    let one = {
        let mut m = MockDependencyOne::new();
        m.expect_passed_number().return_const(Value::Null);
        m.expect_one_hundred().return_const(10);
        m
    };
    let report = Main::new(one, RealDependencyTwo).repeated_default_calls();
    assert_eq!(Some(&Value::Int(10)),
               report.get("dependency_one.one_hundred()-third"));
    assert_eq!(Some(&Value::Null),
               report.get("dependency_one.passed_number(123)-first"));
}

mock! {
    pub One {}
    impl DependencyOne for One {
        fn passed_number(&self, number: i64) -> Value;
        fn one_hundred(&self) -> i64;
        fn set_name(&mut self, name: &str) -> String;
        fn name(&self) -> String;
    }
}

/// `mock!` spells the double out by hand, for when `#[automock]` isn't
/// available on the trait.
#[test]
fn mock_macro() {
    let mut one = MockOne::new();
    one.expect_passed_number()
        .returning(|n| Value::Int(n * 2));
    one.expect_one_hundred()
        .return_const(1);
    one.expect_set_name()
        .returning(|name| name.to_uppercase());
    one.expect_name()
        .return_const(String::new());
    let report = Main::new(one, RealDependencyTwo).run();
    assert_eq!(Some(&Value::Int(246)),
               report.get("dependency_one.passed_number(123)"));
    assert_eq!(Some(&Value::from("ALI")),
               report.get("dependency_one.set_name(\"Ali\")"));
}

/// A spy answers every call with a default and records it.  Assertions come
/// after the code under test has run.
mod spy {
    use super::*;

    #[derive(Default)]
    struct SpyOne {
        calls: Mutex<Vec<String>>,
    }

    impl SpyOne {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn received(&self, call: &str) -> usize {
            self.calls.lock().unwrap().iter().filter(|c| *c == call).count()
        }
    }

    impl DependencyOne for SpyOne {
        fn passed_number(&self, number: i64) -> Value {
            self.record(format!("passed_number({number})"));
            Value::Null
        }

        fn one_hundred(&self) -> i64 {
            self.record("one_hundred()".to_owned());
            0
        }

        fn set_name(&mut self, name: &str) -> String {
            self.record(format!("set_name({name:?})"));
            String::new()
        }

        fn name(&self) -> String {
            self.record("name()".to_owned());
            String::new()
        }
    }

    #[test]
    fn should_have_received() {
        let mut main = Main::new(SpyOne::default(), RealDependencyTwo);
        let report = main.run();
        let (spy, _) = main.into_inner();

        assert_eq!(1, spy.received("passed_number(123)"));
        assert_eq!(1, spy.received("one_hundred()"));
        assert_eq!(1, spy.received("set_name(\"Ali\")"));
        assert_eq!(1, spy.received("name()"));
        assert_eq!(0, spy.received("set_name(\"Bob\")"));
        assert_eq!(Some(&Value::Null),
                   report.get("dependency_one.passed_number(123)"));
    }

    #[test]
    fn repeated_calls() {
        let main = Main::new(SpyOne::default(), RealDependencyTwo);
        main.repeated_default_calls();
        let (spy, _) = main.into_inner();
        assert_eq!(4, spy.received("passed_number(123)"));
        assert_eq!(3, spy.received("one_hundred()"));
    }
}

/// A double stands in wherever the trait is accepted; it can also be checked
/// early with `checkpoint`.
#[test]
fn checkpoint() {
    let mut one = MockDependencyOne::new();
    one.expect_one_hundred()
        .times(1)
        .return_const(5);
    assert_eq!(5, one.one_hundred());
    one.checkpoint();
    one.expect_one_hundred()
        .return_const(6);
    assert_eq!(6, one.one_hundred());
}
