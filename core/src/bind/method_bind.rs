//! The type-erased bound method handle.
//!
//! A [`MethodBind`] owns everything callers can ask about a method (name,
//! class, parameter descriptors, defaults, flags) and forwards the three call
//! paths to a [`MethodDispatch`] strategy chosen at construction:
//!
//! - `call` checks arity and argument types and reports a [`CallError`].
//! - `validated_call` trusts the caller and writes the result into a
//!   `Variant`.
//! - `ptrcall` trusts the caller and passes raw slots both ways.
//!
//! Descriptors are computed once when the bind is built; introspection never
//! touches the strategy.

use alloc::boxed::Box;
use alloc::format;
use alloc::vec::Vec;
use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use bindery_types::{
    ArgumentDescriptor, MethodFlags, PropertyInfo, StringName, TypeMetadata, VariantType,
    hash::{HASH_SEED, fmix32, murmur3_bytes, murmur3_one_32},
};
use bindery_values::Variant;
use static_assertions::assert_impl_all;

use super::method_info::MethodInfo;
use crate::object::{Class, Object, Receiver, downcast_receiver};
use crate::{BindError, BindOptions, CallError, CallErrorKind};

static NEXT_METHOD_ID: AtomicU32 = AtomicU32::new(0);

/// A call strategy behind a [`MethodBind`].
///
/// Implementations never see defaults they did not ask for and never perform
/// the placeholder check; both are handled by the bind.
pub(crate) trait MethodDispatch: Send + Sync {
    fn call(
        &self,
        object: Receiver<'_>,
        args: &[&Variant],
        defaults: &[Variant],
    ) -> Result<Variant, CallErrorKind>;

    fn validated_call(
        &self,
        method: &StringName,
        object: Receiver<'_>,
        args: &[&Variant],
        ret: &mut Variant,
    );

    /// # Safety
    ///
    /// See [`MethodBind::ptrcall`].
    unsafe fn ptrcall(
        &self,
        method: &StringName,
        object: Receiver<'_>,
        args: &[*const ()],
        ret: *mut (),
    );
}

/// Shape facts a strategy reports when a bind is built.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Shape {
    pub argument_count: usize,
    pub is_static: bool,
    pub is_const: bool,
    pub returns: bool,
    pub is_vararg: bool,
}

/// A bound method.
pub struct MethodBind {
    method_id: u32,
    name: StringName,
    instance_class: StringName,
    hint_flags: MethodFlags,
    default_arguments: Vec<Variant>,
    shape: Shape,
    /// Slot 0 describes the return value, slot `i + 1` argument `i`.
    descriptors: Box<[ArgumentDescriptor]>,
    argument_names: Vec<StringName>,
    returns_raw_object_ptr: bool,
    options: BindOptions,
    /// Set once the caller chose options; a binder then leaves them alone.
    options_explicit: bool,
    dispatch: Box<dyn MethodDispatch>,
}

assert_impl_all!(MethodBind: Send, Sync);

impl MethodBind {
    pub(crate) fn from_parts(
        instance_class: StringName,
        shape: Shape,
        descriptors: Box<[ArgumentDescriptor]>,
        dispatch: Box<dyn MethodDispatch>,
    ) -> Self {
        debug_assert_eq!(descriptors.len(), shape.argument_count + 1);

        let bind = Self {
            method_id: NEXT_METHOD_ID.fetch_add(1, Ordering::Relaxed),
            name: StringName::default(),
            instance_class,
            hint_flags: MethodFlags::DEFAULT,
            default_arguments: Vec::new(),
            shape,
            descriptors,
            argument_names: Vec::new(),
            returns_raw_object_ptr: false,
            options: BindOptions::default(),
            options_explicit: false,
            dispatch,
        };

        tracing::debug!(
            method_id = bind.method_id,
            class = %bind.instance_class,
            argument_count = shape.argument_count,
            is_static = shape.is_static,
            is_const = shape.is_const,
            is_vararg = shape.is_vararg,
            "Created method bind"
        );
        bind
    }

    // =========================================================================
    // Call paths
    // =========================================================================

    /// Dynamic call: checks the receiver, the argument count and every
    /// argument type, substitutes defaults for missing trailing arguments,
    /// and converts the result to a `Variant` (`Nil` for methods without a
    /// return value).
    ///
    /// The native method runs only if all checks pass.
    pub fn call(&self, object: Receiver<'_>, args: &[&Variant]) -> Result<Variant, CallError> {
        if object.as_deref().is_some_and(|o| self.is_placeholder(o)) {
            return Err(self.reject(CallErrorKind::InstanceUnavailable));
        }
        self.dispatch
            .call(object, args, &self.default_arguments)
            .map_err(|kind| self.reject(kind))
    }

    /// Trusted call with validated arguments.
    ///
    /// `args` must hold exactly `argument_count()` values, each convertible
    /// to its parameter type, and the receiver must be an instance of the
    /// bind's class. Violations panic. The result is written into `ret`;
    /// `ret` is left untouched if the method returns nothing.
    ///
    /// Panics for vararg binds.
    pub fn validated_call(&self, object: Receiver<'_>, args: &[&Variant], ret: &mut Variant) {
        if self.shape.is_vararg {
            contract_violation(&self.name, &"validated call can't be used with vararg methods");
        }
        if object.as_deref().is_some_and(|o| self.is_placeholder(o)) {
            tracing::error!(method = %self.name, "Validated call on placeholder instance ignored");
            return;
        }
        self.dispatch.validated_call(&self.name, object, args, ret);
    }

    /// Trusted call through raw slot pointers.
    ///
    /// Panics for vararg binds.
    ///
    /// # Safety
    ///
    /// `args` must hold `argument_count()` pointers, each pointing to a live
    /// slot of the matching parameter's slot type (`i64` for every integer,
    /// `f64` for every real, the native type otherwise). `ret` must point to
    /// a live slot of the return type's slot type; it may be null if the
    /// method returns nothing.
    pub unsafe fn ptrcall(&self, object: Receiver<'_>, args: &[*const ()], ret: *mut ()) {
        if self.shape.is_vararg {
            contract_violation(&self.name, &"ptrcall can't be used with vararg methods");
        }
        if object.as_deref().is_some_and(|o| self.is_placeholder(o)) {
            tracing::error!(method = %self.name, "Pointer call on placeholder instance ignored");
            return;
        }
        // SAFETY: forwarded from the caller.
        unsafe { self.dispatch.ptrcall(&self.name, object, args, ret) };
    }

    fn is_placeholder(&self, object: &dyn Object) -> bool {
        self.options.placeholder_checks
            && !self.shape.is_static
            && object.is_extension_placeholder()
            && object.class_name() == self.instance_class
    }

    fn reject(&self, kind: CallErrorKind) -> CallError {
        tracing::trace!(method = %self.name, error = %kind, "Dynamic call rejected");
        CallError::new(self.name.clone(), kind)
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    pub fn method_id(&self) -> u32 {
        self.method_id
    }

    pub fn name(&self) -> &StringName {
        &self.name
    }

    pub fn instance_class(&self) -> &StringName {
        &self.instance_class
    }

    pub fn argument_count(&self) -> usize {
        self.shape.argument_count
    }

    pub fn is_static(&self) -> bool {
        self.shape.is_static
    }

    pub fn is_const(&self) -> bool {
        self.shape.is_const
    }

    pub fn is_vararg(&self) -> bool {
        self.shape.is_vararg
    }

    pub fn has_return(&self) -> bool {
        self.shape.returns
    }

    pub fn is_return_type_raw_object_ptr(&self) -> bool {
        self.returns_raw_object_ptr
    }

    pub fn options(&self) -> BindOptions {
        self.options
    }

    /// Hint flags with the `CONST`, `VARARG` and `STATIC` bits implied by the
    /// bind's shape.
    pub fn hint_flags(&self) -> MethodFlags {
        let mut flags = self.hint_flags;
        flags.set(MethodFlags::CONST, self.shape.is_const);
        flags.set(MethodFlags::VARARG, self.shape.is_vararg);
        flags.set(MethodFlags::STATIC, self.shape.is_static);
        flags
    }

    fn descriptor(&self, index: i32) -> Option<&ArgumentDescriptor> {
        let slot = usize::try_from(index.checked_add(1)?).ok()?;
        self.descriptors.get(slot)
    }

    /// Dynamic tag of argument `index`; `-1` is the return value. Slots out
    /// of range answer `Nil`.
    pub fn argument_type(&self, index: i32) -> VariantType {
        self.descriptor(index)
            .map(|d| d.variant_type)
            .unwrap_or(VariantType::Nil)
    }

    /// Full descriptor of argument `index`, named after the registered
    /// argument name. Vararg binds describe slots past their declared
    /// arguments as wildcards.
    pub fn argument_info(&self, index: usize) -> PropertyInfo {
        let Some(descriptor) = i32::try_from(index).ok().and_then(|i| self.descriptor(i)) else {
            return if self.shape.is_vararg {
                PropertyInfo::any().with_name(format!("arg_{index}"))
            } else {
                PropertyInfo::default()
            };
        };

        let mut info = descriptor.info.clone();
        if info.name.is_empty() {
            info.name = match self.argument_names.get(index) {
                Some(name) => name.clone(),
                None => StringName::from(format!("_unnamed_arg{index}")),
            };
        }
        info
    }

    pub fn return_info(&self) -> PropertyInfo {
        self.descriptors
            .first()
            .map(|d| d.info.clone())
            .unwrap_or_default()
    }

    /// Metadata code of argument `index` (`-1` for the return value).
    ///
    /// Always `None` unless argument metadata is enabled in the bind's
    /// options.
    pub fn argument_meta(&self, index: i32) -> TypeMetadata {
        if !self.options.argument_metadata {
            return TypeMetadata::None;
        }
        self.descriptor(index)
            .map(|d| d.metadata)
            .unwrap_or(TypeMetadata::None)
    }

    pub fn argument_names(&self) -> &[StringName] {
        &self.argument_names
    }

    pub fn default_arguments(&self) -> &[Variant] {
        &self.default_arguments
    }

    pub fn default_argument_count(&self) -> usize {
        self.default_arguments.len()
    }

    /// Index into the default list for argument `index`, if one covers it.
    fn default_slot(&self, index: usize) -> Option<usize> {
        let first = self
            .shape
            .argument_count
            .checked_sub(self.default_arguments.len())?;
        let slot = index.checked_sub(first)?;
        (slot < self.default_arguments.len()).then_some(slot)
    }

    pub fn has_default_argument(&self, index: usize) -> bool {
        self.default_slot(index).is_some()
    }

    /// Default value for argument `index`, or `Nil` if it has none.
    pub fn default_argument(&self, index: usize) -> Variant {
        self.default_slot(index)
            .map(|slot| self.default_arguments[slot].clone())
            .unwrap_or_default()
    }

    /// A hash of the method's shape, stable across builds.
    ///
    /// Covers the return flag, arity, every slot's type and class name, the
    /// default values, constness and the vararg flag. Names are not part of
    /// the hash.
    pub fn hash(&self) -> u32 {
        let mut h = murmur3_one_32(self.shape.returns as u32, HASH_SEED);
        h = murmur3_one_32(self.shape.argument_count as u32, h);

        let first = if self.shape.returns { -1 } else { 0 };
        for index in first..self.shape.argument_count as i32 {
            let Some(descriptor) = self.descriptor(index) else {
                continue;
            };
            h = murmur3_one_32(descriptor.variant_type as u32, h);
            if !descriptor.info.class_name.is_empty() {
                h = murmur3_one_32(
                    murmur3_bytes(descriptor.info.class_name.as_bytes(), HASH_SEED),
                    h,
                );
            }
        }

        h = murmur3_one_32(self.default_arguments.len() as u32, h);
        for value in &self.default_arguments {
            h = murmur3_one_32(value.stable_hash(), h);
        }

        h = murmur3_one_32(self.shape.is_const as u32, h);
        h = murmur3_one_32(self.shape.is_vararg as u32, h);
        fmix32(h)
    }

    /// Describe the method for a class's method list.
    pub fn method_info(&self) -> MethodInfo {
        MethodInfo {
            name: self.name.clone(),
            id: self.method_id,
            return_val: self.return_info(),
            arguments: (0..self.shape.argument_count)
                .map(|i| self.argument_info(i))
                .collect(),
            default_arguments: self.default_arguments.clone(),
            flags: self.hint_flags(),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub fn set_name(&mut self, name: impl Into<StringName>) {
        self.name = name.into();
    }

    pub fn set_instance_class(&mut self, class: impl Into<StringName>) {
        self.instance_class = class.into();
    }

    pub fn set_hint_flags(&mut self, flags: MethodFlags) {
        self.hint_flags = flags;
    }

    pub fn set_options(&mut self, options: BindOptions) {
        self.options = options;
        self.options_explicit = true;
    }

    /// Apply a binder's options unless the caller already chose some.
    pub(crate) fn inherit_options(&mut self, options: BindOptions) {
        if !self.options_explicit {
            self.options = options;
        }
    }

    pub fn set_return_type_is_raw_object_ptr(&mut self, value: bool) {
        self.returns_raw_object_ptr = value;
    }

    /// Name the arguments. The list must be empty or name every argument.
    pub fn set_argument_names(&mut self, names: Vec<StringName>) -> Result<(), BindError> {
        if !names.is_empty() && names.len() != self.shape.argument_count {
            return Err(BindError::ArgumentNameCount {
                method: self.name.clone(),
                expected: self.shape.argument_count,
                supplied: names.len(),
            });
        }
        self.argument_names = names;
        Ok(())
    }

    /// Set defaults for the trailing arguments. There can be at most one
    /// default per argument; for vararg binds that means per declared
    /// argument.
    pub fn set_default_arguments(&mut self, defaults: Vec<Variant>) -> Result<(), BindError> {
        if defaults.len() > self.shape.argument_count {
            return Err(BindError::TooManyDefaults {
                method: self.name.clone(),
                defaults: defaults.len(),
                arguments: self.shape.argument_count,
            });
        }
        self.default_arguments = defaults;
        Ok(())
    }

    pub fn with_defaults(mut self, defaults: Vec<Variant>) -> Result<Self, BindError> {
        self.set_default_arguments(defaults)?;
        Ok(self)
    }

    pub fn with_options(mut self, options: BindOptions) -> Self {
        self.set_options(options);
        self
    }
}

impl fmt::Debug for MethodBind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodBind")
            .field("method_id", &self.method_id)
            .field("name", &self.name)
            .field("instance_class", &self.instance_class)
            .field("argument_count", &self.shape.argument_count)
            .field("flags", &self.hint_flags())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Receiver checks for the trusted paths
// =============================================================================

/// Downcast the receiver of a trusted call. A missing or foreign receiver
/// is a contract violation.
pub(crate) fn expect_receiver<'a, T: Class>(
    method: &StringName,
    object: Receiver<'a>,
) -> &'a mut T {
    match downcast_receiver::<T>(object) {
        Ok(this) => this,
        Err(kind) => contract_violation(method, &kind),
    }
}

#[cold]
#[track_caller]
pub(crate) fn contract_violation(method: &StringName, reason: &dyn fmt::Display) -> ! {
    tracing::error!(method = %method, %reason, "Trusted call contract violated");
    panic!("trusted call to '{method}' violated its contract: {reason}")
}

#[cfg(test)]
#[path = "method_bind_test.rs"]
mod method_bind_test;
