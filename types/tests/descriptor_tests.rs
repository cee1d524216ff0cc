use bindery_types::{
    ArgumentDescriptor, MethodFlags, PropertyHint, PropertyInfo, PropertyUsage, StringName,
    TypeMetadata, VariantType,
};
use pretty_assertions::assert_eq;

// ============================================================================
// VariantType
// ============================================================================

#[test]
fn test_every_type_converts_to_itself() {
    for ty in VariantType::ALL {
        assert!(VariantType::can_convert_strict(ty, ty), "{ty} -> {ty}");
    }
}

#[test]
fn test_nil_target_accepts_everything() {
    for ty in VariantType::ALL {
        assert!(VariantType::can_convert_strict(ty, VariantType::Nil));
    }
}

#[test]
fn test_numeric_tags_convert_between_each_other() {
    use VariantType::*;
    for (from, to) in [(Int, Float), (Float, Int), (Bool, Int), (Int, Bool), (Float, Bool)] {
        assert!(VariantType::can_convert_strict(from, to), "{from} -> {to}");
    }
}

#[test]
fn test_string_is_not_coerced() {
    use VariantType::*;
    assert!(!VariantType::can_convert_strict(String, Int));
    assert!(!VariantType::can_convert_strict(Int, String));
    assert!(!VariantType::can_convert_strict(Nil, Int));
    assert!(!VariantType::can_convert_strict(Vector3, Float));
}

#[test]
fn test_arrays_convert_to_packed_form() {
    use VariantType::*;
    assert!(VariantType::can_convert_strict(Array, PackedVector3Array));
    assert!(VariantType::can_convert_strict(PackedVector3Array, Array));
    assert!(!VariantType::can_convert_strict(Vector3, PackedVector3Array));
}

#[test]
fn test_variant_type_display() {
    assert_eq!(VariantType::Int.to_string(), "int");
    assert_eq!(VariantType::PackedVector3Array.to_string(), "PackedVector3Array");
}

// ============================================================================
// TypeMetadata
// ============================================================================

#[test]
fn test_metadata_widths() {
    assert_eq!(TypeMetadata::None.native_width(), None);
    assert_eq!(TypeMetadata::IntIsInt8.native_width(), Some(1));
    assert_eq!(TypeMetadata::IntIsUint16.native_width(), Some(2));
    assert_eq!(TypeMetadata::RealIsFloat.native_width(), Some(4));
    assert_eq!(TypeMetadata::IntIsUint64.native_width(), Some(8));
    assert!(TypeMetadata::IntIsUint32.is_unsigned());
    assert!(!TypeMetadata::IntIsInt32.is_unsigned());
}

// ============================================================================
// PropertyInfo
// ============================================================================

#[test]
fn test_property_info_builder() {
    let info = PropertyInfo::new(VariantType::Float)
        .with_name("angle")
        .with_hint(PropertyHint::Range, "-360,360,0.1");

    assert_eq!(info.variant_type, VariantType::Float);
    assert_eq!(info.name, StringName::from("angle"));
    assert_eq!(info.hint, PropertyHint::Range);
    assert_eq!(info.hint_string, "-360,360,0.1");
    assert_eq!(info.usage, PropertyUsage::DEFAULT);
    assert_eq!(info.to_string(), "angle: float");
}

#[test]
fn test_any_property_is_variant() {
    let info = PropertyInfo::any().with_name("arg0");
    assert!(info.is_variant());
    assert_eq!(info.to_string(), "arg0: Variant");
    assert!(!PropertyInfo::new(VariantType::Nil).is_variant());
}

#[test]
fn test_class_name_shadows_type_name_in_display() {
    let info = PropertyInfo::new(VariantType::Int).with_class_name("Axis");
    assert_eq!(info.to_string(), "Axis");
}

#[test]
fn test_descriptor_copies_type_from_info() {
    let desc = ArgumentDescriptor::new(
        PropertyInfo::new(VariantType::Int),
        TypeMetadata::IntIsInt32,
    );
    assert_eq!(desc.variant_type, VariantType::Int);
    assert_eq!(desc.metadata, TypeMetadata::IntIsInt32);
    assert_eq!(ArgumentDescriptor::any().variant_type, VariantType::Nil);
}

// ============================================================================
// MethodFlags
// ============================================================================

#[test]
fn test_method_flags_default() {
    assert_eq!(MethodFlags::default(), MethodFlags::NORMAL);
    let flags = MethodFlags::DEFAULT | MethodFlags::CONST;
    assert!(flags.contains(MethodFlags::CONST));
    assert!(!flags.contains(MethodFlags::VARARG));
}
