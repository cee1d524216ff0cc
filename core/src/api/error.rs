//! Error types reported by bound methods and the class binder.

use alloc::string::String;
use bindery_types::{StringName, VariantType};

/// Why a dynamic call was rejected.
///
/// Only the dynamic `call` path reports these. The trusted paths treat the
/// same conditions as contract violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallErrorKind {
    /// Fewer arguments than the method requires, even after defaults.
    /// `expected` is the minimum number of arguments the caller must supply.
    #[error("expected at least {expected} arguments, got {supplied}")]
    TooFewArguments { expected: usize, supplied: usize },

    /// More arguments than the method declares.
    #[error("expected at most {expected} arguments, got {supplied}")]
    TooManyArguments { expected: usize, supplied: usize },

    /// The argument at `index` (zero-based) does not convert strictly.
    #[error("cannot convert argument {index} from {found} to {expected}")]
    InvalidArgument {
        index: usize,
        expected: VariantType,
        found: VariantType,
    },

    /// The receiver is an extension placeholder of the method's own class.
    #[error("cannot call a method on a placeholder instance")]
    InstanceUnavailable,

    /// An instance method was called without a receiver.
    #[error("instance is null")]
    InstanceIsNull,

    /// The receiver is not an instance of the method's class.
    #[error("instance of class '{found}' is not a '{expected}'")]
    InvalidInstance {
        expected: StringName,
        found: StringName,
    },

    /// No method with this name is registered on the class.
    #[error("no method named '{0}'")]
    InvalidMethod(StringName),

    /// The native implementation reported a failure (vararg methods only).
    #[error("{0}")]
    Native(String),
}

/// A rejected dynamic call, tagged with the method that rejected it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("error calling method '{method}': {kind}")]
pub struct CallError {
    pub method: StringName,
    pub kind: CallErrorKind,
}

impl CallError {
    pub fn new(method: StringName, kind: CallErrorKind) -> Self {
        Self { method, kind }
    }
}

/// Problems found while configuring or registering a bound method.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("method '{method}' has {defaults} default arguments but only {arguments} arguments")]
    TooManyDefaults {
        method: StringName,
        defaults: usize,
        arguments: usize,
    },

    #[error("method '{method}' takes {expected} arguments but {supplied} names were given")]
    ArgumentNameCount {
        method: StringName,
        expected: usize,
        supplied: usize,
    },

    #[error("duplicate binding for '{class}.{method}'")]
    DuplicateMethod {
        class: StringName,
        method: StringName,
    },
}
