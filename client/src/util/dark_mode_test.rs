#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}

#[test]
fn theme_attribute_name_is_stable() {
    assert_eq!(THEME_ATTRIBUTE, "data-theme");
}
