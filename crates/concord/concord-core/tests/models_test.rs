use concord_core::models::*;
use proptest::prelude::*;

#[test]
fn default_thresholds_are_valid() {
    assert!(Thresholds::default().validate().is_ok());
}

#[test]
fn inverted_thresholds_are_rejected() {
    let t = Thresholds {
        auto_merge: 0.2,
        ask_user: 0.6,
        auto_separate: 0.9,
    };
    let err = t.validate().unwrap_err();
    assert_eq!(err.code(), "INVALID_THRESHOLD");
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let t = Thresholds {
        auto_merge: 1.2,
        ..Thresholds::default()
    };
    assert!(t.validate().is_err());

    let nan = Thresholds {
        ask_user: f64::NAN,
        ..Thresholds::default()
    };
    assert!(nan.validate().is_err());
}

#[test]
fn word_validation_rejects_blank_fields() {
    let word = Word {
        id: "w1".into(),
        text: "  ".into(),
        language: "fr".into(),
        category_id: None,
        meanings: vec![],
    };
    assert_eq!(word.validate().unwrap_err().code(), "INVALID_WORD");
}

#[test]
fn category_match_requires_both_sides() {
    let mut a = Word {
        id: "a".into(),
        text: "chat".into(),
        language: "fr".into(),
        category_id: Some("animals".into()),
        meanings: vec![],
    };
    let mut b = a.clone();
    b.id = "b".into();
    assert!(a.shares_category_with(&b));

    b.category_id = None;
    assert!(!a.shares_category_with(&b));

    a.category_id = None;
    assert!(!a.shares_category_with(&b));
}

#[test]
fn pair_key_ignores_case_and_spacing() {
    let a = Translation::pair_key("w1", "EN", "Domestic  Cat");
    let b = Translation::pair_key("w1", "en", "domestic cat");
    assert_eq!(a, b);
    assert_ne!(a, Translation::pair_key("w2", "en", "domestic cat"));
}

#[test]
fn pair_key_collapses_regional_variants() {
    let plain = Translation::pair_key("w1", "en", "kitty");
    assert_eq!(plain, Translation::pair_key("w1", "en-GB", "kitty"));
    assert_eq!(plain, Translation::pair_key("w1", "EN_us", "Kitty"));
    assert_ne!(plain, Translation::pair_key("w1", "es", "kitty"));
}

#[test]
fn vote_value_maps_signed_values() {
    assert_eq!(VoteValue::from_signed(1), Some(VoteValue::Up));
    assert_eq!(VoteValue::from_signed(-1), Some(VoteValue::Down));
    assert_eq!(VoteValue::from_signed(0), None);
    assert_eq!(VoteValue::Down.delta(), -1);
}

proptest! {
    #[test]
    fn prop_confidence_always_clamped(value in proptest::num::f64::ANY) {
        let c = Confidence::new(value);
        prop_assert!((0.0..=1.0).contains(&c.value()));
    }

    #[test]
    fn prop_confidence_arithmetic_stays_bounded(start in 0.0f64..=1.0, delta in -5.0f64..5.0) {
        let c = Confidence::new(start) + delta;
        prop_assert!((0.0..=1.0).contains(&c.value()));
    }
}

#[test]
fn language_match_uses_primary_subtag() {
    assert!(same_language("en-GB", "en"));
    assert!(same_language("EN_us", "en-gb"));
    assert!(!same_language("en", "es"));
    assert_eq!(primary_subtag(" pt-BR "), "pt");
}
