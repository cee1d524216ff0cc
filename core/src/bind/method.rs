//! Fixed-arity instance methods.

use alloc::boxed::Box;
use core::marker::PhantomData;

use bindery_types::StringName;
use bindery_values::Variant;

use super::call::{call_with_ptr_args, call_with_validated_args, call_with_variant_args_dv};
use super::function::MethodFn;
use super::method_bind::{MethodBind, MethodDispatch, Shape, expect_receiver};
use super::signature::{ArgList, BindType, Signature};
use crate::CallErrorKind;
use crate::object::{Class, Receiver, downcast_receiver};

/// Dispatch for a method of `T` with parameters `A` and return type `R`.
struct MethodBindT<T, A, R, K, F> {
    method: F,
    _marker: PhantomData<fn() -> (T, A, R, K)>,
}

impl<T, A, R, K, F> MethodDispatch for MethodBindT<T, A, R, K, F>
where
    T: Class,
    A: ArgList,
    R: BindType,
    K: 'static,
    F: MethodFn<T, A, R, K>,
{
    fn call(
        &self,
        object: Receiver<'_>,
        args: &[&Variant],
        defaults: &[Variant],
    ) -> Result<Variant, CallErrorKind> {
        let this = downcast_receiver::<T>(object)?;
        call_with_variant_args_dv::<A, R>(args, defaults, |a| self.method.invoke(this, a))
    }

    fn validated_call(
        &self,
        method: &StringName,
        object: Receiver<'_>,
        args: &[&Variant],
        ret: &mut Variant,
    ) {
        let this = expect_receiver::<T>(method, object);
        call_with_validated_args::<A, R>(args, ret, |a| self.method.invoke(this, a));
    }

    unsafe fn ptrcall(
        &self,
        method: &StringName,
        object: Receiver<'_>,
        args: &[*const ()],
        ret: *mut (),
    ) {
        let this = expect_receiver::<T>(method, object);
        // SAFETY: forwarded from `MethodBind::ptrcall`.
        unsafe { call_with_ptr_args::<A, R>(args, ret, |a| self.method.invoke(this, a)) };
    }
}

impl MethodBind {
    /// Bind an instance method of `T`.
    ///
    /// Methods taking `&T` are const. The bind is unnamed until registered
    /// with a [`ClassBinder`](super::ClassBinder) or named with `set_name`.
    ///
    /// ```
    /// use bindery_core::{Class, MethodBind, Object};
    /// use bindery_types::StringName;
    /// use bindery_values::Variant;
    ///
    /// struct Counter(i64);
    ///
    /// impl Object for Counter {
    ///     fn class_name(&self) -> StringName {
    ///         StringName::from(Self::CLASS_NAME)
    ///     }
    /// }
    ///
    /// impl Class for Counter {
    ///     const CLASS_NAME: &'static str = "Counter";
    /// }
    ///
    /// let add = MethodBind::method(|c: &mut Counter, n: i64| {
    ///     c.0 += n;
    ///     c.0
    /// });
    ///
    /// let mut counter = Counter(1);
    /// let result = add.call(Some(&mut counter), &[&Variant::Int(2)]).unwrap();
    /// assert_eq!(result, Variant::Int(3));
    /// assert!(!add.is_const());
    /// ```
    pub fn method<T, A, R, K, F>(method: F) -> Self
    where
        T: Class,
        A: ArgList,
        R: BindType,
        K: 'static,
        F: MethodFn<T, A, R, K>,
    {
        let shape = Shape {
            argument_count: A::COUNT,
            is_static: false,
            is_const: <F as MethodFn<T, A, R, K>>::IS_CONST,
            returns: !R::IS_VOID,
            is_vararg: false,
        };
        let dispatch = MethodBindT::<T, A, R, K, F> {
            method,
            _marker: PhantomData,
        };
        Self::from_parts(
            T::class_name_atom(),
            shape,
            Signature::<A, R>::descriptors(),
            Box::new(dispatch),
        )
    }
}
