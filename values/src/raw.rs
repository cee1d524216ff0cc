//! Raw-pointer conversion protocol.
//!
//! The raw-pointer call path passes every argument as an untyped pointer to a
//! *slot* and writes the return value into a caller-provided slot. Slots are
//! not always the native type itself: every integer width travels as an
//! `i64` slot and every real as an `f64` slot, and `Vec<Face3>` travels as a
//! flat `Vec<Vector3>`. [`TypeMetadata`](bindery_types::TypeMetadata) tells a
//! caller which native width hides behind a numeric slot.
//!
//! Implementations only describe how to read and write a typed slot; the
//! pointer casts live in the provided methods.

#![allow(unsafe_code)]

use alloc::string::String;
use alloc::vec::Vec;

use crate::dynamic::Variant;
use crate::math::Vector3;

/// Conversion between a native type and its raw-pointer slot.
pub trait RawConvertible: Sized {
    /// The in-memory representation a pointer refers to.
    type Slot;

    /// Read a native value out of a slot.
    fn from_raw_slot(slot: &Self::Slot) -> Self;

    /// Store this value into an existing slot, replacing its contents.
    fn write_raw_slot(self, slot: &mut Self::Slot);

    /// Read a native value through an opaque pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, aligned, and point to an initialized
    /// `Self::Slot` that stays valid for the duration of the call.
    unsafe fn from_ptr(ptr: *const ()) -> Self {
        // SAFETY: guaranteed by the caller.
        let slot = unsafe { &*ptr.cast::<Self::Slot>() };
        Self::from_raw_slot(slot)
    }

    /// Write this value through an opaque pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, aligned, and point to an initialized
    /// `Self::Slot` that nothing else accesses for the duration of the call.
    unsafe fn write_to_ptr(self, ptr: *mut ()) {
        // SAFETY: guaranteed by the caller.
        let slot = unsafe { &mut *ptr.cast::<Self::Slot>() };
        self.write_raw_slot(slot)
    }
}

/// Erase a reference into the pointer form the raw call path expects.
#[inline]
pub fn slot_ptr<T>(slot: &T) -> *const () {
    (slot as *const T).cast()
}

/// Erase a mutable reference into a return slot pointer.
#[inline]
pub fn slot_ptr_mut<T>(slot: &mut T) -> *mut () {
    (slot as *mut T).cast()
}

// =============================================================================
// Numeric slots
// =============================================================================

macro_rules! impl_raw_numeric {
    ($slot:ty => $($ty:ty),*) => {
        $(
            impl RawConvertible for $ty {
                type Slot = $slot;

                fn from_raw_slot(slot: &$slot) -> Self {
                    *slot as $ty
                }

                fn write_raw_slot(self, slot: &mut $slot) {
                    *slot = self as $slot;
                }
            }
        )*
    };
}

impl_raw_numeric!(i64 => i8, i16, i32, i64, u8, u16, u32, u64);
impl_raw_numeric!(f64 => f32, f64);

// =============================================================================
// Slots holding the native type itself
// =============================================================================

macro_rules! impl_raw_identity {
    ($($ty:ty),*) => {
        $(
            impl RawConvertible for $ty {
                type Slot = $ty;

                fn from_raw_slot(slot: &$ty) -> Self {
                    slot.clone()
                }

                fn write_raw_slot(self, slot: &mut $ty) {
                    *slot = self;
                }
            }
        )*
    };
}

impl_raw_identity!(bool, String, Vector3, Vec<Variant>, Vec<Vector3>, Variant);

impl RawConvertible for () {
    type Slot = ();

    fn from_raw_slot(_slot: &()) -> Self {}

    fn write_raw_slot(self, _slot: &mut ()) {}

    /// Nothing is read; `ptr` may be null.
    unsafe fn from_ptr(_ptr: *const ()) -> Self {}

    /// Nothing is written; `ptr` may be null.
    unsafe fn write_to_ptr(self, _ptr: *mut ()) {}
}
