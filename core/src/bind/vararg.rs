//! Variable-argument methods.
//!
//! A vararg method receives the caller's argument list as is. Its declared
//! arguments come from a [`MethodInfo`] and serve introspection only: the
//! dynamic call path does no arity or type checking, and the trusted paths
//! are not available at all.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::marker::PhantomData;

use bindery_types::{ArgumentDescriptor, PropertyUsage, StringName, TypeMetadata};
use bindery_values::{Variant, typed::Marshal};

use super::function::VarArgFn;
use super::method_bind::{MethodBind, MethodDispatch, Shape, contract_violation};
use super::method_info::MethodInfo;
use super::signature::BindType;
use crate::{BindError, CallErrorKind};
use crate::object::{Class, Receiver, downcast_receiver};

struct VarArgMethodBind<T, R, F> {
    method: F,
    _marker: PhantomData<fn() -> (T, R)>,
}

impl<T, R, F> MethodDispatch for VarArgMethodBind<T, R, F>
where
    T: Class,
    R: BindType,
    F: VarArgFn<T, R>,
{
    fn call(
        &self,
        object: Receiver<'_>,
        args: &[&Variant],
        _defaults: &[Variant],
    ) -> Result<Variant, CallErrorKind> {
        let this = downcast_receiver::<T>(object)?;
        self.method.invoke(this, args).map(Marshal::to_variant)
    }

    fn validated_call(
        &self,
        method: &StringName,
        _object: Receiver<'_>,
        _args: &[&Variant],
        _ret: &mut Variant,
    ) {
        contract_violation(method, &"validated call can't be used with vararg methods")
    }

    unsafe fn ptrcall(
        &self,
        method: &StringName,
        _object: Receiver<'_>,
        _args: &[*const ()],
        _ret: *mut (),
    ) {
        contract_violation(method, &"ptrcall can't be used with vararg methods")
    }
}

impl MethodBind {
    /// Bind a variable-argument method of `T`.
    ///
    /// `info` supplies the name and the declared arguments. With
    /// `return_nil_is_variant` a `Nil` return descriptor means "any value".
    /// Vararg binds are never const and report no argument metadata.
    ///
    /// Fails if `info` declares more defaults than arguments.
    pub fn vararg<T, R, F>(
        method: F,
        info: MethodInfo,
        return_nil_is_variant: bool,
    ) -> Result<Self, BindError>
    where
        T: Class,
        R: BindType,
        F: VarArgFn<T, R>,
    {
        let mut return_info = R::property_info();
        if return_nil_is_variant {
            return_info.usage |= PropertyUsage::NIL_IS_VARIANT;
        }

        let mut descriptors = Vec::with_capacity(info.arguments.len() + 1);
        descriptors.push(ArgumentDescriptor::new(return_info, TypeMetadata::None));
        descriptors.extend(
            info.arguments
                .iter()
                .map(|arg| ArgumentDescriptor::new(arg.clone(), TypeMetadata::None)),
        );

        let shape = Shape {
            argument_count: info.arguments.len(),
            is_static: false,
            is_const: false,
            returns: !R::IS_VOID,
            is_vararg: true,
        };
        let dispatch = VarArgMethodBind::<T, R, F> {
            method,
            _marker: PhantomData,
        };

        let mut bind = Self::from_parts(
            T::class_name_atom(),
            shape,
            descriptors.into_boxed_slice(),
            Box::new(dispatch),
        );
        bind.set_name(info.name);
        bind.set_hint_flags(info.flags);
        bind.set_default_arguments(info.default_arguments)?;
        Ok(bind)
    }
}
