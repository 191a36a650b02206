use super::*;

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_literals_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn theme_parse_rejects_unknown_and_case_variants() {
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("true"), None);
}

#[test]
fn theme_toggle_flips_and_double_toggle_restores() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn theme_toggle_label_names_the_target_theme() {
    assert_eq!(Theme::Light.toggle_label(), "Switch to Dark Mode");
    assert_eq!(Theme::Dark.toggle_label(), "Switch to Light Mode");
}
