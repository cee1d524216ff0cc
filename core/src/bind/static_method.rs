//! Fixed-arity methods without a receiver.

use alloc::boxed::Box;
use core::marker::PhantomData;

use bindery_types::StringName;
use bindery_values::Variant;

use super::call::{call_with_ptr_args, call_with_validated_args, call_with_variant_args_dv};
use super::function::StaticFn;
use super::method_bind::{MethodBind, MethodDispatch, Shape};
use super::signature::{ArgList, BindType, Signature};
use crate::CallErrorKind;
use crate::object::Receiver;

/// Dispatch for a static function. Any receiver passed in is ignored.
struct StaticMethodBind<A, R, F> {
    function: F,
    _marker: PhantomData<fn() -> (A, R)>,
}

impl<A, R, F> MethodDispatch for StaticMethodBind<A, R, F>
where
    A: ArgList,
    R: BindType,
    F: StaticFn<A, R>,
{
    fn call(
        &self,
        _object: Receiver<'_>,
        args: &[&Variant],
        defaults: &[Variant],
    ) -> Result<Variant, CallErrorKind> {
        call_with_variant_args_dv::<A, R>(args, defaults, |a| self.function.invoke(a))
    }

    fn validated_call(
        &self,
        _method: &StringName,
        _object: Receiver<'_>,
        args: &[&Variant],
        ret: &mut Variant,
    ) {
        call_with_validated_args::<A, R>(args, ret, |a| self.function.invoke(a));
    }

    unsafe fn ptrcall(
        &self,
        _method: &StringName,
        _object: Receiver<'_>,
        args: &[*const ()],
        ret: *mut (),
    ) {
        // SAFETY: forwarded from `MethodBind::ptrcall`.
        unsafe { call_with_ptr_args::<A, R>(args, ret, |a| self.function.invoke(a)) };
    }
}

impl MethodBind {
    /// Bind a function without a receiver. Static binds are never const.
    pub fn static_fn<A, R, F>(function: F) -> Self
    where
        A: ArgList,
        R: BindType,
        F: StaticFn<A, R>,
    {
        let shape = Shape {
            argument_count: A::COUNT,
            is_static: true,
            is_const: false,
            returns: !R::IS_VOID,
            is_vararg: false,
        };
        let dispatch = StaticMethodBind::<A, R, F> {
            function,
            _marker: PhantomData,
        };
        Self::from_parts(
            StringName::default(),
            shape,
            Signature::<A, R>::descriptors(),
            Box::new(dispatch),
        )
    }
}
