//! Call adapters shared by the fixed-arity specializations.
//!
//! Each adapter turns one call-path representation of the arguments into a
//! native argument tuple, runs the invocation and stores the result:
//!
//! - [`call_with_variant_args`]: exact arity, full checking.
//! - [`call_with_variant_args_dv`]: defaults fill missing trailing arguments.
//! - [`call_with_validated_args`]: no checking, result into a `Variant`.
//! - [`call_with_ptr_args`]: raw slots in, raw slot out.

use smallvec::SmallVec;

use bindery_values::Variant;

use super::signature::{ArgList, BindType};
use crate::CallErrorKind;

/// Argument lists up to this length are assembled on the stack.
const INLINE_ARGS: usize = 8;

/// Check arity and append the defaults that cover missing trailing
/// arguments.
///
/// With `n` declared parameters, `k` supplied arguments and `d` defaults,
/// parameter `i >= k` takes `defaults[i - n + d]`: defaults align with the
/// trailing parameters.
pub fn fill_defaults<'a>(
    args: &[&'a Variant],
    expected: usize,
    defaults: &'a [Variant],
) -> Result<SmallVec<[&'a Variant; INLINE_ARGS]>, CallErrorKind> {
    let supplied = args.len();
    if supplied > expected {
        return Err(CallErrorKind::TooManyArguments { expected, supplied });
    }

    let missing = expected - supplied;
    if missing > defaults.len() {
        return Err(CallErrorKind::TooFewArguments {
            expected: expected.saturating_sub(defaults.len()),
            supplied,
        });
    }

    let mut full = SmallVec::with_capacity(expected);
    full.extend_from_slice(args);
    full.extend(defaults[defaults.len() - missing..].iter());
    Ok(full)
}

/// Dynamic call without defaults: the argument count must match exactly.
pub fn call_with_variant_args<A, R>(
    args: &[&Variant],
    invoke: impl FnOnce(A) -> R,
) -> Result<Variant, CallErrorKind>
where
    A: ArgList,
    R: BindType,
{
    let supplied = args.len();
    if supplied < A::COUNT {
        return Err(CallErrorKind::TooFewArguments {
            expected: A::COUNT,
            supplied,
        });
    }
    if supplied > A::COUNT {
        return Err(CallErrorKind::TooManyArguments {
            expected: A::COUNT,
            supplied,
        });
    }
    let native = A::from_variants(args)?;
    Ok(invoke(native).to_variant())
}

/// Dynamic call with default substitution.
///
/// Nothing is invoked unless every argument, supplied or defaulted, converts.
pub fn call_with_variant_args_dv<A, R>(
    args: &[&Variant],
    defaults: &[Variant],
    invoke: impl FnOnce(A) -> R,
) -> Result<Variant, CallErrorKind>
where
    A: ArgList,
    R: BindType,
{
    if defaults.is_empty() || args.len() >= A::COUNT {
        return call_with_variant_args(args, invoke);
    }
    let full = fill_defaults(args, A::COUNT, defaults)?;
    let native = A::from_variants(&full)?;
    Ok(invoke(native).to_variant())
}

/// Trusted call from already validated dynamic values.
///
/// `ret` is left untouched when `R` is `()`.
pub fn call_with_validated_args<A, R>(
    args: &[&Variant],
    ret: &mut Variant,
    invoke: impl FnOnce(A) -> R,
)
where
    A: ArgList,
    R: BindType,
{
    let result = invoke(A::from_validated(args));
    if !R::IS_VOID {
        *ret = result.to_variant();
    }
}

/// Trusted call through raw slot pointers.
///
/// # Safety
///
/// Every pointer in `args` must point to a valid slot of the matching
/// parameter type, and `ret` must point to a valid slot of `R`'s slot type
/// unless `R` is `()`, in which case it may be null.
pub unsafe fn call_with_ptr_args<A, R>(
    args: &[*const ()],
    ret: *mut (),
    invoke: impl FnOnce(A) -> R,
)
where
    A: ArgList,
    R: BindType,
{
    // SAFETY: argument slots are guaranteed by the caller.
    let native = unsafe { A::from_ptrs(args) };
    let result = invoke(native);
    if !R::IS_VOID {
        // SAFETY: the return slot is guaranteed by the caller.
        unsafe { result.write_to_ptr(ret) };
    }
}

#[cfg(test)]
#[path = "call_test.rs"]
mod call_test;
