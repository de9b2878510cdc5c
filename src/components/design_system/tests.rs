//! Design System Component Tests
//!
//! Unit tests for design system enums, variants, and styling logic.

use crate::components::design_system::button::ButtonVariant;

#[test]
fn test_button_variant_default() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
}

#[test]
fn test_button_variant_classes_non_empty() {
    let variants = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Ghost,
    ];

    for variant in variants {
        let class = variant.class();
        assert!(!class.is_empty(), "Variant {:?} should have class", variant);
    }
}

#[test]
fn test_button_variant_classes_unique() {
    let primary = ButtonVariant::Primary.class();
    let secondary = ButtonVariant::Secondary.class();
    let ghost = ButtonVariant::Ghost.class();

    assert_ne!(primary, secondary);
    assert_ne!(primary, ghost);
    assert_ne!(secondary, ghost);
}

#[test]
fn test_button_variant_ghost_has_hover() {
    let class = ButtonVariant::Ghost.class();
    assert!(class.contains("hover:"), "Ghost variant should have hover styles");
}
