//! Integration tests for the validated and raw-pointer call paths.

mod common;

use bindery_core::MethodBind;
use bindery_values::{
    Variant, Vector3,
    raw::{slot_ptr, slot_ptr_mut},
    typed::faces::widen,
};
use common::{Light, Node3D};
use pretty_assertions::assert_eq;

fn grid(n: usize) -> Vec<Vector3> {
    (0..n).map(|i| Vector3::new(i as f32, 0.0, 0.0)).collect()
}

#[test]
fn test_all_paths_agree() {
    let bind = MethodBind::method(Node3D::move_by);

    let mut by_call = Node3D::default();
    let dynamic = bind
        .call(
            Some(&mut by_call),
            &[&Variant::Float(1.0), &Variant::Float(2.0), &Variant::Float(3.0)],
        )
        .unwrap();

    let mut by_validated = Node3D::default();
    let mut validated = Variant::Nil;
    bind.validated_call(
        Some(&mut by_validated),
        &[&Variant::Float(1.0), &Variant::Float(2.0), &Variant::Float(3.0)],
        &mut validated,
    );

    let mut by_ptr = Node3D::default();
    let (x, y, z) = (1.0f64, 2.0f64, 3.0f64);
    let mut raw = Vector3::ZERO;
    unsafe {
        bind.ptrcall(
            Some(&mut by_ptr),
            &[slot_ptr(&x), slot_ptr(&y), slot_ptr(&z)],
            slot_ptr_mut(&mut raw),
        );
    }

    assert_eq!(dynamic, validated);
    assert_eq!(dynamic, Variant::Vector3(raw));
    assert_eq!(by_call.position, by_ptr.position);
    assert_eq!(by_validated.position, by_ptr.position);
}

#[test]
fn test_void_paths_leave_ret_alone() {
    let bind = MethodBind::method(Node3D::set_layer);
    let mut node = Node3D::default();

    let mut ret = Variant::from("untouched");
    bind.validated_call(
        Some(&mut node),
        &[&Variant::Int(3), &Variant::Bool(true)],
        &mut ret,
    );
    assert_eq!(ret, Variant::from("untouched"));

    let layer: i64 = 1;
    let enabled = true;
    unsafe {
        bind.ptrcall(
            Some(&mut node),
            &[slot_ptr(&layer), slot_ptr(&enabled)],
            core::ptr::null_mut(),
        );
    }
    assert_eq!(node.layers, 0b1010);
}

#[test]
fn test_integer_return_uses_wide_slot() {
    let bind = MethodBind::method(Node3D::layers);
    let mut node = Node3D {
        layers: u32::MAX,
        ..Node3D::default()
    };

    let mut ret: i64 = 0;
    unsafe { bind.ptrcall(Some(&mut node), &[], slot_ptr_mut(&mut ret)) };
    assert_eq!(ret, u32::MAX as i64);
}

#[test]
fn test_faces_through_pointer_path() {
    let set = MethodBind::method(Node3D::set_faces);
    let get = MethodBind::method(Node3D::faces);
    let mut node = Node3D::default();

    // Nine vertices in, three faces stored.
    let flat = grid(9);
    unsafe { set.ptrcall(Some(&mut node), &[slot_ptr(&flat)], core::ptr::null_mut()) };
    assert_eq!(node.faces, widen(&flat));
    assert_eq!(node.faces.len(), 3);

    let mut out: Vec<Vector3> = Vec::new();
    unsafe { get.ptrcall(Some(&mut node), &[], slot_ptr_mut(&mut out)) };
    assert_eq!(out, flat);
}

#[test]
fn test_faces_through_dynamic_path_truncate() {
    let set = MethodBind::method(Node3D::set_faces);
    let mut node = Node3D::default();

    let packed = Variant::PackedVector3Array(grid(7));
    set.call(Some(&mut node), &[&packed]).unwrap();
    assert_eq!(node.faces.len(), 2);

    let get = MethodBind::method(Node3D::faces);
    let back = get.call(Some(&mut node), &[]).unwrap();
    assert_eq!(back, Variant::PackedVector3Array(grid(6)));
    assert_eq!(get.return_info().hint_string, "Face3");
}

#[test]
#[should_panic(expected = "violated its contract")]
fn test_validated_call_with_foreign_receiver_panics() {
    let bind = MethodBind::method(Node3D::layers);
    let mut light = Light;
    let mut ret = Variant::Nil;
    bind.validated_call(Some(&mut light), &[], &mut ret);
}

#[test]
#[should_panic(expected = "violated its contract")]
fn test_ptrcall_without_receiver_panics() {
    let bind = MethodBind::method(Node3D::layers);
    let mut ret: i64 = 0;
    unsafe { bind.ptrcall(None, &[], slot_ptr_mut(&mut ret)) };
}

#[test]
#[should_panic(expected = "does not convert")]
fn test_validated_call_with_wrong_argument_panics() {
    let bind = MethodBind::method(Node3D::set_layer);
    let mut node = Node3D::default();
    let mut ret = Variant::Nil;
    bind.validated_call(
        Some(&mut node),
        &[&Variant::from("three"), &Variant::Bool(true)],
        &mut ret,
    );
}
