#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]

use foucault::{
    DEFAULT_STEP, MAX_TIME_SCALE, MIN_TIME_SCALE, Pendulum, PendulumConfig, SLOW_DOWN_FACTOR,
    SPEED_UP_FACTOR,
};
use proptest::prelude::*;

fn scaled_pendulum(ups: usize, downs: usize) -> Pendulum {
    let mut p = Pendulum::default();
    for _ in 0..ups {
        p.adjust_time_scale(SPEED_UP_FACTOR);
    }
    for _ in 0..downs {
        p.adjust_time_scale(SLOW_DOWN_FACTOR);
    }
    p
}

// =============================================================================
// Time conservation and trail growth
// =============================================================================

proptest! {
    #[test]
    fn advance_conserves_scaled_time(
        elapsed in 0.0001f64..2.0,
        ups in 0usize..12,
        downs in 0usize..12,
        warmup in 0.0f64..1.0,
    ) {
        let mut p = scaled_pendulum(ups, downs);
        p.advance(warmup);

        let before = p.time();
        let scaled = elapsed * p.time_scale();
        p.advance(elapsed);

        let gained = p.time() - before;
        let tolerance = 1e-9 * scaled.max(1.0);
        prop_assert!(
            (gained - scaled).abs() < tolerance,
            "gained {} s, expected {} s", gained, scaled
        );
    }

    #[test]
    fn trail_grows_by_one_per_sub_step(
        elapsed in 0.0001f64..2.0,
        ups in 0usize..10,
    ) {
        let mut p = scaled_pendulum(ups, 0);
        let before = p.trail().len();
        let whole = (elapsed * p.time_scale() / DEFAULT_STEP).floor() as usize;

        let taken = p.advance(elapsed);

        prop_assert_eq!(p.trail().len(), before + taken);
        prop_assert!(
            taken == whole || taken == whole + 1,
            "took {} steps for {} whole steps", taken, whole
        );
    }

    #[test]
    fn time_never_decreases(
        deltas in prop::collection::vec(-0.5f64..0.5, 1..60),
    ) {
        let mut p = Pendulum::default();
        let mut last = p.time();
        let mut last_len = p.trail().len();

        for delta in deltas {
            p.advance(delta);
            prop_assert!(p.time() >= last);
            prop_assert!(p.trail().len() >= last_len);
            last = p.time();
            last_len = p.trail().len();
        }
    }
}

// =============================================================================
// Determinism and state consistency
// =============================================================================

proptest! {
    #[test]
    fn identical_inputs_give_identical_states(
        deltas in prop::collection::vec(0.0f64..0.2, 1..50),
        ups in 0usize..6,
    ) {
        let mut a = scaled_pendulum(ups, 0);
        let mut b = scaled_pendulum(ups, 0);

        for delta in &deltas {
            a.advance(*delta);
            b.advance(*delta);
            prop_assert_eq!(&a, &b);
        }
    }

    #[test]
    fn acceleration_never_stale(
        deltas in prop::collection::vec(0.0f64..0.1, 1..30),
    ) {
        let mut p = Pendulum::default();
        for delta in deltas {
            p.advance(delta);
            let expected = p.acceleration_at(p.position(), p.velocity());
            prop_assert_eq!(p.acceleration(), expected);
            prop_assert_eq!(
                p.trail().last().map(|t| t.position),
                Some(p.position())
            );
        }
    }
}

// =============================================================================
// Time scale clamp and reset
// =============================================================================

proptest! {
    #[test]
    fn time_scale_stays_clamped(
        factors in prop::collection::vec(0.001f64..1000.0, 1..100),
    ) {
        let mut p = Pendulum::default();
        for factor in factors {
            let scale = p.adjust_time_scale(factor);
            prop_assert!((MIN_TIME_SCALE..=MAX_TIME_SCALE).contains(&scale));
            prop_assert_eq!(scale, p.time_scale());
        }
    }

    #[test]
    fn reset_always_matches_fresh(
        deltas in prop::collection::vec(0.0f64..0.5, 0..20),
        ups in 0usize..15,
    ) {
        let mut p = scaled_pendulum(ups, 0);
        for delta in deltas {
            p.advance(delta);
        }
        p.reset();

        prop_assert_eq!(p.trail().len(), 1);
        prop_assert_eq!(p, Pendulum::default());
    }

    #[test]
    fn trail_limit_always_respected(
        limit in 1usize..64,
        deltas in prop::collection::vec(0.0f64..0.5, 1..20),
    ) {
        let mut p = Pendulum::new(PendulumConfig {
            trail_limit: Some(limit),
            ..PendulumConfig::default()
        })
        .unwrap();

        for delta in deltas {
            p.advance(delta);
            prop_assert!(!p.trail().is_empty());
            prop_assert!(p.trail().len() <= limit);
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

proptest! {
    #[test]
    fn valid_constants_always_construct(
        length in prop_oneof![0.01f64..100.0, -100.0f64..-0.01],
        gravity in -50.0f64..50.0,
        rotation_rate in -1.0f64..1.0,
        latitude in -90.0f64..90.0,
        step in 0.0001f64..1.0,
    ) {
        let config = PendulumConfig {
            length,
            gravity,
            rotation_rate,
            latitude,
            step,
            ..PendulumConfig::default()
        };
        let p = Pendulum::new(config);
        prop_assert!(p.is_ok());
    }

    #[test]
    fn initial_acceleration_is_restoring(
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
    ) {
        let config = PendulumConfig {
            initial_position: foucault::Point::new(x, y),
            ..PendulumConfig::default()
        };
        let p = Pendulum::new(config).unwrap();
        let k = config.gravity / config.length;

        prop_assert!((p.acceleration().x + k * x).abs() < 1e-9);
        prop_assert!((p.acceleration().y + k * y).abs() < 1e-9);
    }
}
