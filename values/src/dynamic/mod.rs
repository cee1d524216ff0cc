//! The dynamic value type.

mod variant;

pub use variant::Variant;
