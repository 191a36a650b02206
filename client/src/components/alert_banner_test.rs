use super::*;

#[test]
fn breach_maps_to_danger_and_warning_to_warning() {
    assert_eq!(AlertTone::for_alert(AlertKind::Breach), AlertTone::Danger);
    assert_eq!(AlertTone::for_alert(AlertKind::Warning), AlertTone::Warning);
}

#[test]
fn every_tone_has_a_distinct_class() {
    let tones = [AlertTone::Danger, AlertTone::Warning, AlertTone::Info, AlertTone::Success];
    for (i, a) in tones.iter().enumerate() {
        assert!(a.class().starts_with("alert "));
        for b in &tones[i + 1..] {
            assert_ne!(a.class(), b.class());
        }
    }
}
