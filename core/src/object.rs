//! Receivers of bound instance methods.
//!
//! Bound methods are stored type-erased, so their receiver arrives as a
//! `dyn Object` and is downcast back to the concrete class at call time.

use core::any::Any;

use bindery_types::StringName;

use crate::CallErrorKind;

/// An object instance that can receive bound method calls.
pub trait Object: Any {
    /// Name of the instance's class.
    fn class_name(&self) -> StringName;

    /// Whether this instance stands in for an extension class that is not
    /// loaded. Calls through a bind of the same class are refused.
    fn is_extension_placeholder(&self) -> bool {
        false
    }
}

/// A concrete class whose methods can be bound.
pub trait Class: Object + Sized {
    const CLASS_NAME: &'static str;

    fn class_name_atom() -> StringName {
        StringName::from(Self::CLASS_NAME)
    }
}

/// The receiver argument of every call path. `None` is a null receiver.
pub type Receiver<'a> = Option<&'a mut (dyn Object + 'static)>;

/// Downcast a receiver to the class `T`.
///
/// The receiver's class name is only looked up when the downcast fails.
pub fn downcast_receiver<T: Class>(object: Receiver<'_>) -> Result<&mut T, CallErrorKind> {
    let object = object.ok_or(CallErrorKind::InstanceIsNull)?;
    if !(&*object as &(dyn Any + 'static)).is::<T>() {
        return Err(CallErrorKind::InvalidInstance {
            expected: T::class_name_atom(),
            found: object.class_name(),
        });
    }
    let any: &mut (dyn Any + 'static) = object;
    match any.downcast_mut::<T>() {
        Some(this) => Ok(this),
        None => unreachable!("type checked above"),
    }
}

#[cfg(test)]
#[path = "object_test.rs"]
mod object_test;
