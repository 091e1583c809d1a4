// vim: tw=80
//! The second collaborator of [`Main`](crate::Main).

#[cfg(any(test, feature = "mock"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait DependencyTwo {
    fn two_hundred(&self) -> i64;
    /// Describe a person as `"{name} {last_name} age: {age}"`.
    fn set_person(&self, name: &str, last_name: &str, age: u32) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RealDependencyTwo;

impl DependencyTwo for RealDependencyTwo {
    fn two_hundred(&self) -> i64 {
        200
    }

    fn set_person(&self, name: &str, last_name: &str, age: u32) -> String {
        format!("{name} {last_name} age: {age}")
    }
}
