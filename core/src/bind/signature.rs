//! Parameter type descriptors generated from native signatures.
//!
//! An argument list is a tuple of native types. [`ArgList`] answers, for any
//! slot of the tuple, its dynamic tag, its property descriptor and its
//! metadata code, and converts a list of call arguments into the tuple for
//! each of the three call paths. [`Signature`] adds the return type, which
//! lives at slot `-1`.
//!
//! Slot lookups outside the list answer `Nil` / an empty descriptor /
//! `TypeMetadata::None` instead of failing.

use alloc::boxed::Box;
use core::marker::PhantomData;

use bindery_types::{ArgumentDescriptor, PropertyInfo, TypeMetadata, VariantType};
use bindery_values::{Variant, raw::RawConvertible, typed::Marshal};

use crate::CallErrorKind;

/// A native type usable as a parameter or return type of a bound method.
pub trait BindType: Marshal + RawConvertible + 'static {}

impl<T: Marshal + RawConvertible + 'static> BindType for T {}

/// A tuple of parameter types.
pub trait ArgList: Sized + 'static {
    /// Number of parameters.
    const COUNT: usize;

    fn variant_type(index: usize) -> VariantType;

    fn property_info(index: usize) -> PropertyInfo;

    fn metadata(index: usize) -> TypeMetadata;

    /// Convert exactly `COUNT` dynamic arguments, checking each one.
    ///
    /// The first argument that does not convert strictly is reported with its
    /// index and both types.
    fn from_variants(args: &[&Variant]) -> Result<Self, CallErrorKind>;

    /// Convert exactly `COUNT` dynamic arguments the caller has already
    /// validated. Panics if one does not convert.
    fn from_validated(args: &[&Variant]) -> Self;

    /// Read `COUNT` arguments through raw slot pointers.
    ///
    /// # Safety
    ///
    /// `args` must hold at least `COUNT` pointers, each pointing to a valid
    /// slot of the corresponding parameter's `RawConvertible::Slot` type.
    unsafe fn from_ptrs(args: &[*const ()]) -> Self;
}

/// Check and convert a single dynamic argument.
#[inline]
pub fn convert_argument<P: BindType>(value: &Variant, index: usize) -> Result<P, CallErrorKind> {
    let found = value.variant_type();
    if !VariantType::can_convert_strict(found, P::VARIANT_TYPE) {
        return Err(CallErrorKind::InvalidArgument {
            index,
            expected: P::VARIANT_TYPE,
            found,
        });
    }
    P::try_from_variant(value).ok_or(CallErrorKind::InvalidArgument {
        index,
        expected: P::VARIANT_TYPE,
        found,
    })
}

/// Invoke `$m!` once per supported arity, passing `(index Type binding)`
/// triples for every parameter.
macro_rules! for_each_arity {
    ($m:ident) => {
        $m!(0;);
        $m!(1; (0 P0 p0));
        $m!(2; (0 P0 p0), (1 P1 p1));
        $m!(3; (0 P0 p0), (1 P1 p1), (2 P2 p2));
        $m!(4; (0 P0 p0), (1 P1 p1), (2 P2 p2), (3 P3 p3));
        $m!(5; (0 P0 p0), (1 P1 p1), (2 P2 p2), (3 P3 p3), (4 P4 p4));
        $m!(6; (0 P0 p0), (1 P1 p1), (2 P2 p2), (3 P3 p3), (4 P4 p4), (5 P5 p5));
        $m!(7; (0 P0 p0), (1 P1 p1), (2 P2 p2), (3 P3 p3), (4 P4 p4), (5 P5 p5), (6 P6 p6));
        $m!(8; (0 P0 p0), (1 P1 p1), (2 P2 p2), (3 P3 p3), (4 P4 p4), (5 P5 p5), (6 P6 p6),
            (7 P7 p7));
        $m!(9; (0 P0 p0), (1 P1 p1), (2 P2 p2), (3 P3 p3), (4 P4 p4), (5 P5 p5), (6 P6 p6),
            (7 P7 p7), (8 P8 p8));
        $m!(10; (0 P0 p0), (1 P1 p1), (2 P2 p2), (3 P3 p3), (4 P4 p4), (5 P5 p5), (6 P6 p6),
            (7 P7 p7), (8 P8 p8), (9 P9 p9));
    };
}

pub(crate) use for_each_arity;

macro_rules! impl_arg_list {
    ($count:literal; $(($idx:tt $P:ident $p:ident)),*) => {
        impl<$($P: BindType),*> ArgList for ($($P,)*) {
            const COUNT: usize = $count;

            #[allow(clippy::match_single_binding)]
            fn variant_type(index: usize) -> VariantType {
                match index {
                    $($idx => $P::VARIANT_TYPE,)*
                    _ => VariantType::Nil,
                }
            }

            #[allow(clippy::match_single_binding)]
            fn property_info(index: usize) -> PropertyInfo {
                match index {
                    $($idx => $P::property_info(),)*
                    _ => PropertyInfo::default(),
                }
            }

            #[allow(clippy::match_single_binding)]
            fn metadata(index: usize) -> TypeMetadata {
                match index {
                    $($idx => $P::METADATA,)*
                    _ => TypeMetadata::None,
                }
            }

            #[allow(unused_variables)]
            fn from_variants(args: &[&Variant]) -> Result<Self, CallErrorKind> {
                debug_assert_eq!(args.len(), $count);
                Ok(($(convert_argument::<$P>(args[$idx], $idx)?,)*))
            }

            #[allow(unused_variables)]
            fn from_validated(args: &[&Variant]) -> Self {
                debug_assert_eq!(args.len(), $count);
                ($($P::from_validated(args[$idx]),)*)
            }

            #[allow(unused_variables)]
            unsafe fn from_ptrs(args: &[*const ()]) -> Self {
                // SAFETY: slot types are guaranteed by the caller.
                ($(unsafe { $P::from_ptr(args[$idx]) },)*)
            }
        }
    };
}

for_each_arity!(impl_arg_list);

/// Full signature of a bound method: parameters `A` and return type `R`.
pub struct Signature<A, R>(PhantomData<fn() -> (A, R)>);

impl<A: ArgList, R: BindType> Signature<A, R> {
    /// Dynamic tag of slot `index`; `-1` is the return type.
    pub fn type_at(index: i32) -> VariantType {
        match usize::try_from(index) {
            Ok(i) => A::variant_type(i),
            Err(_) if index == -1 => R::VARIANT_TYPE,
            Err(_) => VariantType::Nil,
        }
    }

    /// Property descriptor of slot `index`; `-1` is the return type.
    pub fn info_at(index: i32) -> PropertyInfo {
        match usize::try_from(index) {
            Ok(i) => A::property_info(i),
            Err(_) if index == -1 => R::property_info(),
            Err(_) => PropertyInfo::default(),
        }
    }

    /// Metadata code of slot `index`; `-1` is the return type.
    pub fn metadata_at(index: i32) -> TypeMetadata {
        match usize::try_from(index) {
            Ok(i) => A::metadata(i),
            Err(_) if index == -1 => R::METADATA,
            Err(_) => TypeMetadata::None,
        }
    }

    /// Descriptors for every slot, return type first.
    pub fn descriptors() -> Box<[ArgumentDescriptor]> {
        (-1..A::COUNT as i32)
            .map(|i| ArgumentDescriptor::new(Self::info_at(i), Self::metadata_at(i)))
            .collect()
    }
}

#[cfg(test)]
#[path = "signature_test.rs"]
mod signature_test;
