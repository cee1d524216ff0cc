//! Face lists as flat vector arrays.
//!
//! A list of [`Face3`] has no dynamic type of its own. Both call paths carry it
//! as a flat array of vertices where every three consecutive vectors form one
//! face: a `PackedVector3Array` on the dynamic path and a `Vec<Vector3>` slot
//! on the raw-pointer path. This is not a reinterpretation of memory, so the
//! mapping is spelled out by [`widen`] and [`narrow`].
//!
//! # Truncation
//!
//! [`widen`] drops a trailing group of one or two vectors. A flat array whose
//! length is not a multiple of three is accepted, not rejected.

use alloc::vec::Vec;

use bindery_types::{PropertyHint, PropertyInfo, VariantType};

use crate::dynamic::Variant;
use crate::math::{Face3, Vector3};
use crate::raw::RawConvertible;

use super::{Bridge, Marshal};

/// Group a flat vertex list into faces, three vertices per face.
pub fn widen(vertices: &[Vector3]) -> Vec<Face3> {
    vertices
        .chunks_exact(3)
        .map(|v| Face3::new(v[0], v[1], v[2]))
        .collect()
}

/// Flatten faces into a vertex list of length `3 * faces.len()`.
pub fn narrow(faces: &[Face3]) -> Vec<Vector3> {
    let mut vertices = Vec::with_capacity(faces.len() * 3);
    for face in faces {
        vertices.extend_from_slice(&face.vertex);
    }
    vertices
}

impl Bridge for Vec<Face3> {
    const VARIANT_TYPE: VariantType = VariantType::PackedVector3Array;

    fn property_info() -> PropertyInfo {
        PropertyInfo::new(VariantType::PackedVector3Array)
            .with_hint(PropertyHint::ArrayType, "Face3")
    }
}

impl Marshal for Vec<Face3> {
    fn try_from_variant(value: &Variant) -> Option<Self> {
        match value {
            Variant::PackedVector3Array(vertices) => Some(widen(vertices)),
            _ => <Vec<Vector3> as Marshal>::try_from_variant(value).map(|v| widen(&v)),
        }
    }

    fn to_variant(self) -> Variant {
        Variant::PackedVector3Array(narrow(&self))
    }
}

impl RawConvertible for Vec<Face3> {
    type Slot = Vec<Vector3>;

    fn from_raw_slot(slot: &Vec<Vector3>) -> Self {
        widen(slot)
    }

    fn write_raw_slot(self, slot: &mut Vec<Vector3>) {
        slot.clear();
        slot.reserve(self.len() * 3);
        for face in &self {
            slot.extend_from_slice(&face.vertex);
        }
    }
}
