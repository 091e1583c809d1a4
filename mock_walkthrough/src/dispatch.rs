// vim: tw=80
//! Open dispatch: calling builder operations by name.
//!
//! Operations that the builder defines are parsed into a typed [`Call`].
//! Anything else lands in [`Call::Unknown`], which the builder answers with
//! the operation's own name instead of failing.
//!
//! ```
//! # use mock_walkthrough::{AttributeBuilder, Value};
//! let builder = AttributeBuilder::new();
//! let args = [Value::from(123), Value::from("Ali")];
//! assert_eq!("notExistedMethod", builder.dispatch("notExistedMethod", &args));
//! ```

use tracing::{debug, trace};

use crate::{
    attributes::{AttributeBuilder, Attributes},
    error::DispatchError,
    value::Value,
};

/// Receivers that may be asked to run operations they don't define.
///
/// The provided method rejects every such call.  Types that want to stay
/// open override it.
pub trait OpenDispatch {
    fn invoke_unknown(&self, name: &str, args: &[Value])
        -> Result<String, DispatchError>
    {
        Err(DispatchError::UnknownOperation {
            name: name.to_owned(),
            arity: args.len(),
        })
    }
}

impl OpenDispatch for AttributeBuilder {
    fn invoke_unknown(&self, name: &str, args: &[Value])
        -> Result<String, DispatchError>
    {
        Ok(self.dispatch(name, args))
    }
}

/// One operation on an [`AttributeBuilder`].
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    AddNumber(i64),
    AddString(String),
    AddBool(bool),
    Finalize(Value),
    /// Any operation the builder doesn't define.
    Unknown { name: String, args: Vec<Value> },
}

impl Call {
    /// Build a `Call` from an operation name and its arguments.
    ///
    /// Unrecognized names are never an error; they become [`Call::Unknown`].
    /// A recognized name is held to its signature.
    pub fn parse(name: &str, args: Vec<Value>) -> Result<Self, DispatchError> {
        let call = match name {
            "add_number" => {
                let arg = single("add_number", args)?;
                let n = arg.as_int().ok_or(DispatchError::ArgumentType {
                    operation: "add_number",
                    expected: "int",
                    found: arg.kind(),
                })?;
                Call::AddNumber(n)
            }
            "add_string" => match single("add_string", args)? {
                Value::Str(s) => Call::AddString(s),
                other => return Err(DispatchError::ArgumentType {
                    operation: "add_string",
                    expected: "string",
                    found: other.kind(),
                }),
            },
            "add_bool" => {
                let arg = single("add_bool", args)?;
                let b = arg.as_bool().ok_or(DispatchError::ArgumentType {
                    operation: "add_bool",
                    expected: "bool",
                    found: arg.kind(),
                })?;
                Call::AddBool(b)
            }
            "finalize" => Call::Finalize(single("finalize", args)?),
            _ => Call::Unknown { name: name.to_owned(), args },
        };
        Ok(call)
    }

    /// The operation's name.
    pub fn name(&self) -> &str {
        match self {
            Call::AddNumber(_) => "add_number",
            Call::AddString(_) => "add_string",
            Call::AddBool(_) => "add_bool",
            Call::Finalize(_) => "finalize",
            Call::Unknown { name, .. } => name.as_str(),
        }
    }
}

fn single(operation: &'static str, args: Vec<Value>)
    -> Result<Value, DispatchError>
{
    let found = args.len();
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(arg), None) => Ok(arg),
        _ => Err(DispatchError::Arity { operation, expected: 1, found }),
    }
}

/// What a [`Call`] produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The builder was updated and may be chained further.
    Chained,
    /// The terminal call's snapshot.
    Finalized(Attributes),
    /// An unknown operation, answered with its own name.
    Fallback(String),
}

impl AttributeBuilder {
    /// Answer an operation the builder doesn't define.
    ///
    /// Always returns `name`, whatever the arguments.
    pub fn dispatch(&self, name: &str, args: &[Value]) -> String {
        trace!(operation = name, arity = args.len(), "open dispatch fallback");
        name.to_owned()
    }

    pub fn invoke(&mut self, call: Call) -> Outcome {
        match call {
            Call::AddNumber(n) => {
                self.add_number(n);
                Outcome::Chained
            }
            Call::AddString(s) => {
                self.add_string(s);
                Outcome::Chained
            }
            Call::AddBool(b) => {
                self.add_bool(b);
                Outcome::Chained
            }
            Call::Finalize(v) => Outcome::Finalized(self.finalize(v)),
            Call::Unknown { name, args } => {
                Outcome::Fallback(self.dispatch(&name, &args))
            }
        }
    }

    /// Parse and run an operation given by name.
    pub fn invoke_by_name(&mut self, name: &str, args: Vec<Value>)
        -> Result<Outcome, DispatchError>
    {
        let call = Call::parse(name, args).map_err(|e| {
            debug!(operation = name, error = %e, "rejected invocation");
            e
        })?;
        Ok(self.invoke(call))
    }
}
