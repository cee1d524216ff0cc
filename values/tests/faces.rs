use bindery_types::{PropertyHint, VariantType};
use bindery_values::{
    Face3, Variant, Vector3,
    raw::{RawConvertible, slot_ptr, slot_ptr_mut},
    typed::{
        Bridge, Marshal,
        faces::{narrow, widen},
    },
};
use pretty_assertions::assert_eq;

fn flat(n: usize) -> Vec<Vector3> {
    (0..n)
        .map(|i| {
            let base = (i * 3) as f32;
            Vector3::new(base, base + 1.0, base + 2.0)
        })
        .collect()
}

#[test]
fn test_widen_groups_three_vertices_per_face() {
    let vertices = flat(6);
    let faces = widen(&vertices);

    assert_eq!(faces.len(), 2);
    assert_eq!(faces[0].vertex, [vertices[0], vertices[1], vertices[2]]);
    assert_eq!(faces[1].vertex, [vertices[3], vertices[4], vertices[5]]);
}

#[test]
fn test_nine_scalars_survive_widen_then_narrow() {
    let vertices = flat(3);
    let scalars: Vec<f32> = vertices.iter().flat_map(|v| [v.x, v.y, v.z]).collect();
    assert_eq!(scalars, (0..9).map(|i| i as f32).collect::<Vec<_>>());

    let back = narrow(&widen(&vertices));
    let back_scalars: Vec<f32> = back.iter().flat_map(|v| [v.x, v.y, v.z]).collect();
    assert_eq!(back_scalars, scalars);
}

#[test]
fn test_widen_truncates_partial_face() {
    assert_eq!(widen(&flat(4)).len(), 1);
    assert_eq!(widen(&flat(5)).len(), 1);
    assert_eq!(widen(&flat(2)).len(), 0);
    assert!(widen(&[]).is_empty());

    // The dropped tail does not come back.
    assert_eq!(narrow(&widen(&flat(5))), flat(3));
}

#[test]
fn test_narrow_length_is_three_per_face() {
    let faces = vec![Face3::default(); 4];
    assert_eq!(narrow(&faces).len(), 12);
    assert!(narrow(&[]).is_empty());
}

#[test]
fn test_faces_travel_as_packed_array() {
    assert_eq!(<Vec<Face3> as Bridge>::VARIANT_TYPE, VariantType::PackedVector3Array);
    assert_eq!(<Vec<Face3> as Bridge>::property_info().hint, PropertyHint::ArrayType);

    let faces = widen(&flat(6));
    let variant = faces.clone().to_variant();
    assert_eq!(variant, Variant::PackedVector3Array(flat(6)));
    assert_eq!(Vec::<Face3>::try_from_variant(&variant), Some(faces));
}

#[test]
fn test_faces_accept_plain_array_of_vectors() {
    let array = Variant::Array(flat(3).into_iter().map(Variant::Vector3).collect());
    let faces = Vec::<Face3>::try_from_variant(&array).unwrap();
    assert_eq!(faces.len(), 1);
}

#[test]
fn test_faces_through_raw_slot() {
    let slot = flat(9);
    let faces = unsafe { <Vec<Face3> as RawConvertible>::from_ptr(slot_ptr(&slot)) };
    assert_eq!(faces.len(), 3);

    let mut out: Vec<Vector3> = vec![Vector3::ONE; 2];
    unsafe { faces.write_to_ptr(slot_ptr_mut(&mut out)) };
    assert_eq!(out, slot);
}
