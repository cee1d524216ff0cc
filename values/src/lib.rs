//! Dynamic values and the conversion protocols of the Bindery binding layer.
//!
//! Two independent protocols move native values across the static/dynamic
//! boundary:
//!
//! - [`typed::Marshal`] converts between a native type and a [`dynamic::Variant`],
//!   with the strict coercions the dynamic call path allows.
//! - [`raw::RawConvertible`] reads and writes a native type through an opaque
//!   pointer, for the raw-pointer call path that never builds a `Variant`.
//!
//! [`typed::Bridge`] maps each native type to its dynamic type tag, its
//! metadata code and its property descriptor.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod dynamic;
pub mod math;
pub mod raw;
pub mod typed;

pub use dynamic::Variant;
pub use math::{Face3, Vector3};
