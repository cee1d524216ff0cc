//! Tests for receiver downcasting

use super::*;
use core::cell::Cell;
use pretty_assertions::assert_eq;

#[derive(Debug, Default)]
struct Sprite {
    lookups: Cell<usize>,
}

impl Object for Sprite {
    fn class_name(&self) -> StringName {
        self.lookups.set(self.lookups.get() + 1);
        StringName::from(Self::CLASS_NAME)
    }
}

impl Class for Sprite {
    const CLASS_NAME: &'static str = "Sprite";
}

#[derive(Default)]
struct Camera {
    lookups: Cell<usize>,
}

impl Object for Camera {
    fn class_name(&self) -> StringName {
        self.lookups.set(self.lookups.get() + 1);
        StringName::from(Self::CLASS_NAME)
    }
}

impl Class for Camera {
    const CLASS_NAME: &'static str = "Camera";
}

#[test]
fn test_matching_receiver_skips_class_lookup() {
    let mut sprite = Sprite::default();
    let this = downcast_receiver::<Sprite>(Some(&mut sprite)).unwrap();
    assert_eq!(this.lookups.get(), 0);
}

#[test]
fn test_foreign_receiver_reports_its_class() {
    let mut camera = Camera::default();
    let err = downcast_receiver::<Sprite>(Some(&mut camera)).unwrap_err();
    assert_eq!(
        err,
        CallErrorKind::InvalidInstance {
            expected: StringName::from("Sprite"),
            found: StringName::from("Camera"),
        }
    );
    assert_eq!(camera.lookups.get(), 1);
}

#[test]
fn test_null_receiver() {
    let err = downcast_receiver::<Sprite>(None).unwrap_err();
    assert_eq!(err, CallErrorKind::InstanceIsNull);
}
