//! Options applied to bound methods at registration time.

/// Capability switches for a [`MethodBind`](crate::bind::MethodBind).
///
/// Options are fixed once the bind is registered; they never change while
/// calls are being dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindOptions {
    /// Report fine-grained [`TypeMetadata`](bindery_types::TypeMetadata) from
    /// `argument_meta`. When off every slot reports `TypeMetadata::None`.
    ///
    /// Defaults to on in debug builds.
    pub argument_metadata: bool,

    /// Refuse calls on receivers that are placeholder instances of the bind's
    /// own class.
    pub placeholder_checks: bool,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            argument_metadata: cfg!(debug_assertions),
            placeholder_checks: true,
        }
    }
}
