//! Property tests for threshold decisions.

use proptest::prelude::*;

use concord_consensus::decide;
use concord_core::models::{SuggestedAction, Thresholds};

fn arb_thresholds() -> impl Strategy<Value = Thresholds> {
    (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(|(a, b, c)| {
        let mut v = [a, b, c];
        v.sort_by(|x, y| x.partial_cmp(y).unwrap());
        Thresholds {
            auto_separate: v[0],
            ask_user: v[1],
            auto_merge: v[2],
        }
    })
}

fn rank(action: SuggestedAction) -> u8 {
    match action {
        SuggestedAction::Separate => 0,
        SuggestedAction::Uncertain => 1,
        SuggestedAction::Merge => 2,
    }
}

proptest! {
    #[test]
    fn prop_decision_is_monotonic(t in arb_thresholds(), a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(decide(lo, &t)) <= rank(decide(hi, &t)));
    }

    #[test]
    fn prop_generated_thresholds_validate(t in arb_thresholds()) {
        prop_assert!(t.validate().is_ok());
    }

    #[test]
    fn prop_ask_user_never_changes_the_decision(t in arb_thresholds(), score in 0.0f64..=1.0, ask in 0.0f64..=1.0) {
        let moved = Thresholds { ask_user: ask, ..t };
        prop_assert_eq!(decide(score, &t), decide(score, &moved));
    }
}
