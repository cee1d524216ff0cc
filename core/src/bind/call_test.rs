//! Tests for the call adapters

use core::cell::Cell;

use super::*;
use bindery_types::VariantType;
use bindery_values::raw::{slot_ptr, slot_ptr_mut};
use pretty_assertions::assert_eq;

fn ints(values: &[i64]) -> Vec<Variant> {
    values.iter().copied().map(Variant::Int).collect()
}

#[test]
fn test_fill_defaults_aligns_with_trailing_parameters() {
    let defaults = ints(&[10, 20]);
    let one = Variant::Int(1);
    let two = Variant::Int(2);

    let full = fill_defaults(&[&one], 3, &defaults).unwrap();
    assert_eq!(full.iter().map(|v| (*v).clone()).collect::<Vec<_>>(), ints(&[1, 10, 20]));

    let full = fill_defaults(&[&one, &two], 3, &defaults).unwrap();
    assert_eq!(full.iter().map(|v| (*v).clone()).collect::<Vec<_>>(), ints(&[1, 2, 20]));
}

#[test]
fn test_fill_defaults_arity_errors() {
    let defaults = ints(&[10]);
    let v = Variant::Int(0);

    assert_eq!(
        fill_defaults(&[], 3, &defaults).unwrap_err(),
        CallErrorKind::TooFewArguments {
            expected: 2,
            supplied: 0
        }
    );
    assert_eq!(
        fill_defaults(&[&v, &v, &v, &v], 3, &defaults).unwrap_err(),
        CallErrorKind::TooManyArguments {
            expected: 3,
            supplied: 4
        }
    );
}

#[test]
fn test_exact_arity_without_defaults() {
    let v = Variant::Int(1);
    let err = call_with_variant_args::<(i64, i64), i64>(&[&v], |(a, b)| a + b).unwrap_err();
    assert_eq!(
        err,
        CallErrorKind::TooFewArguments {
            expected: 2,
            supplied: 1
        }
    );

    let result = call_with_variant_args::<(i64, i64), i64>(&[&v, &v], |(a, b)| a + b);
    assert_eq!(result, Ok(Variant::Int(2)));
}

#[test]
fn test_no_invocation_when_a_default_fails_to_convert() {
    let calls = Cell::new(0);
    let defaults = vec![Variant::from("not a number")];
    let v = Variant::Int(1);

    let err = call_with_variant_args_dv::<(i64, i64), ()>(&[&v], &defaults, |_| {
        calls.set(calls.get() + 1);
    })
    .unwrap_err();

    assert_eq!(
        err,
        CallErrorKind::InvalidArgument {
            index: 1,
            expected: VariantType::Int,
            found: VariantType::String,
        }
    );
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_void_result_is_nil() {
    let result = call_with_variant_args_dv::<(), ()>(&[], &[], |()| ());
    assert_eq!(result, Ok(Variant::Nil));
}

#[test]
fn test_validated_leaves_ret_untouched_for_void() {
    let mut ret = Variant::Int(99);
    call_with_validated_args::<(i64,), ()>(&[&Variant::Int(1)], &mut ret, |_| ());
    assert_eq!(ret, Variant::Int(99));

    call_with_validated_args::<(i64,), i64>(&[&Variant::Int(1)], &mut ret, |(x,)| x * 2);
    assert_eq!(ret, Variant::Int(2));
}

#[test]
fn test_ptr_args_use_wide_slots() {
    let x: i64 = 20;
    let y: f64 = 0.5;
    let mut ret: i64 = 0;

    unsafe {
        call_with_ptr_args::<(i32, f32), i32>(
            &[slot_ptr(&x), slot_ptr(&y)],
            slot_ptr_mut(&mut ret),
            |(x, y)| (x as f32 * y) as i32,
        );
    }
    assert_eq!(ret, 10);
}

#[test]
fn test_ptr_void_accepts_null_ret() {
    let calls = Cell::new(0);
    unsafe {
        call_with_ptr_args::<(), ()>(&[], core::ptr::null_mut(), |()| calls.set(1));
    }
    assert_eq!(calls.get(), 1);
}
