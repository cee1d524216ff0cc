#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

pub mod api;
pub mod bind;
pub mod object;

pub use api::{BindError, BindOptions, CallError, CallErrorKind};
pub use bind::{
    ClassBinder, ClassMethods, MethodBind, MethodInfo,
    function::{Const, MethodFn, Mut, StaticFn, VarArgFn},
    signature::{ArgList, BindType, Signature},
};
pub use object::{Class, Object, Receiver};
