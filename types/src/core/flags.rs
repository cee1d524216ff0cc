use bitflags::bitflags;

bitflags! {
    /// Flags describing how a bound method may be called.
    ///
    /// The registrar supplies the hint bits (`NORMAL`, `EDITOR`, `VIRTUAL`);
    /// `CONST`, `VARARG` and `STATIC` are derived from the bind's shape when the
    /// effective flags are queried.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MethodFlags: u32 {
        const NORMAL = 1;
        const EDITOR = 1 << 1;
        const CONST = 1 << 2;
        const VIRTUAL = 1 << 3;
        const VARARG = 1 << 4;
        const STATIC = 1 << 5;
    }
}

impl MethodFlags {
    /// Flags a method gets when the registrar says nothing else.
    pub const DEFAULT: MethodFlags = MethodFlags::NORMAL;
}

impl Default for MethodFlags {
    fn default() -> Self {
        MethodFlags::DEFAULT
    }
}

bitflags! {
    /// Usage flags attached to a [`PropertyInfo`](super::PropertyInfo).
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PropertyUsage: u32 {
        const STORAGE = 1 << 1;
        const EDITOR = 1 << 2;
        /// The enclosing class name names an enum.
        const CLASS_IS_ENUM = 1 << 16;
        /// A `Nil` type means "any value" rather than "no value".
        const NIL_IS_VARIANT = 1 << 17;
        /// The enclosing class name names a bitfield.
        const CLASS_IS_BITFIELD = 1 << 22;
    }
}

impl PropertyUsage {
    pub const DEFAULT: PropertyUsage = PropertyUsage::STORAGE.union(PropertyUsage::EDITOR);
}

impl Default for PropertyUsage {
    fn default() -> Self {
        PropertyUsage::DEFAULT
    }
}
