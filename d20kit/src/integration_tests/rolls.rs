use rand_xoshiro::Xoshiro256StarStar;

use crate::math::quaternion::rotate;
use crate::math::view_axis;
use crate::render::RecordingSurface;
use crate::roll::{Phase, RollState};
use crate::types::*;
use crate::{ConfigError, EngineBuilder, Outcome, Progress, RollEngine, Settings};

fn quiet_builder() -> EngineBuilder {
    // Log to nowhere.
    let log = slog::Logger::root(slog::Discard, o!());
    EngineBuilder::new().with_logger(log)
}

fn seeded_engine(seed: u64) -> RollEngine<Xoshiro256StarStar> {
    quiet_builder()
        .with_viewport(1280.0, 720.0, 2.0)
        .build_seeded(seed)
        .expect("Default settings should be valid")
}

/// Run whatever roll is in flight to completion, starting its clock at `now`.
fn finish_roll(engine: &mut RollEngine<Xoshiro256StarStar>, now: TimeMs) -> Outcome {
    let duration = engine.settings().roll_duration;
    engine.advance(now);
    match engine.advance(now + duration).progress {
        Progress::Settled(outcome) => outcome,
        other => panic!("Roll should have settled, but got {:?}", other),
    }
}

fn assert_face_toward_camera(engine: &RollEngine<Xoshiro256StarStar>, value: u8) {
    let face = engine
        .mesh()
        .face_for_label(value)
        .expect("Every value should have a face");
    let turned = rotate(&engine.orientation(), &face.normal);
    assert!(
        (turned.dot(&view_axis()) - 1.0).abs() < 1e-6,
        "Face {} ended up pointing along {:?}",
        value,
        turned
    );
}

#[test]
fn forced_twenty_settles_face_up_and_critical() {
    let mut engine = seeded_engine(20);
    assert!(engine.roll_to(20));
    let outcome = finish_roll(&mut engine, 0.0);

    assert_eq!(outcome.value, 20);
    assert!(outcome.critical_high);
    assert!(!outcome.critical_low);
    assert_face_toward_camera(&engine, 20);

    // The final pose is exactly the roll's target, not an interpolation of it.
    let mut surface = RecordingSurface::new();
    engine.draw(&mut surface);
    assert_eq!(surface.labels().last(), Some(&"20"));
}

#[test]
fn every_value_can_be_rolled_and_shown() {
    let mut engine = seeded_engine(1);
    for value in 1..=20 {
        assert!(engine.roll_to(value));
        let outcome = finish_roll(&mut engine, value as TimeMs * 10_000.0);
        assert_eq!(outcome, Outcome::new(value));
        assert_face_toward_camera(&engine, value);
    }
}

#[test]
fn random_rolls_settle_on_their_outcome() {
    let mut engine = seeded_engine(2);
    let mut saw_twenty = false;
    for i in 0..200 {
        assert!(engine.roll());
        let outcome = finish_roll(&mut engine, i as TimeMs * 10_000.0);
        assert_face_toward_camera(&engine, outcome.value);
        if outcome.value == 20 {
            saw_twenty = true;
            assert!(outcome.critical_high);
        }
    }
    assert!(saw_twenty);
}

#[test]
fn outcomes_are_uniform() {
    const ROLLS: usize = 2000;
    let mut engine = seeded_engine(2024);
    let mut counts = [0usize; 20];
    for i in 0..ROLLS {
        assert!(engine.roll());
        let outcome = finish_roll(&mut engine, i as TimeMs * 10_000.0);
        counts[outcome.value as usize - 1] += 1;
    }

    let expected = ROLLS as Real / 20.0;
    let chi_square: Real = counts
        .iter()
        .map(|&count| {
            let delta = count as Real - expected;
            delta * delta / expected
        })
        .sum();
    // 19 degrees of freedom; 43.82 is the 0.1% critical value.
    assert!(chi_square < 43.82, "chi-square {} for counts {:?}", chi_square, counts);
    assert!(counts.iter().all(|&count| count > 0));
}

#[test]
fn same_seed_same_rolls() {
    let mut a = seeded_engine(99);
    let mut b = seeded_engine(99);
    assert_eq!(a.orientation(), b.orientation());
    for i in 0..20 {
        a.roll();
        b.roll();
        let now = i as TimeMs * 10_000.0;
        assert_eq!(finish_roll(&mut a, now), finish_roll(&mut b, now));
        assert_eq!(a.orientation(), b.orientation());
    }
}

#[test]
fn second_roll_while_rolling_is_ignored() {
    let mut engine = seeded_engine(3);
    assert!(engine.roll());
    let first = match engine.state() {
        RollState::Rolling(roll) => roll.clone(),
        RollState::Idle => panic!("Roll should be in flight"),
    };

    assert!(!engine.roll());
    assert!(!engine.roll_to(1));
    engine.advance(0.0);
    engine.advance(2500.0);
    assert!(!engine.roll());

    match engine.state() {
        RollState::Rolling(roll) => {
            assert_eq!(roll.outcome, first.outcome);
            assert_eq!(roll.target, first.target);
            assert_eq!(roll.start, first.start);
            assert_eq!(roll.spin_axis, first.spin_axis);
        }
        RollState::Idle => panic!("Roll should still be in flight"),
    }

    match engine.advance(5000.0).progress {
        Progress::Settled(outcome) => assert_eq!(outcome, first.outcome),
        other => panic!("Expected the original roll to settle, got {:?}", other),
    }
    // Free to roll again.
    assert!(engine.roll());
}

#[test]
fn resize_rescales_without_touching_the_roll() {
    let mut engine = seeded_engine(4);
    assert!(engine.roll_to(12));
    engine.advance(0.0);
    engine.advance(1000.0);
    let orientation = engine.orientation();

    let items = engine.resize(400.0, 700.0, 1.0);
    assert_eq!(engine.viewport().scale(), 0.9);
    assert_eq!(items.len(), 20);
    assert_eq!(engine.orientation(), orientation);
    assert_eq!(engine.phase(), Phase::Rolling);

    engine.resize(1200.0, 700.0, 1.0);
    assert_eq!(engine.viewport().scale(), 0.7);
    assert_eq!(engine.phase(), Phase::Rolling);

    match engine.advance(5000.0).progress {
        Progress::Settled(outcome) => assert_eq!(outcome.value, 12),
        other => panic!("Expected roll to settle, got {:?}", other),
    }
}

#[test]
fn progress_is_monotonic_with_a_jittery_clock() {
    let mut engine = seeded_engine(5);
    assert!(engine.roll());
    let times = [100.0, 90.0, 400.0, 399.0, 2600.0, 1000.0, 5099.0, 5100.0];
    let mut last = 0.0;
    let mut settled = false;
    for &now in &times {
        match engine.advance(now).progress {
            Progress::Rolling(t) => {
                assert!(!settled);
                assert!(t >= last);
                last = t;
            }
            Progress::Settled(_) => settled = true,
            Progress::Idle => assert!(settled),
        }
    }
    assert!(settled);
}

#[test]
fn builder_rejects_invalid_settings() {
    let settings = Settings {
        roll_duration: 0.0,
        ..Settings::default()
    };
    match quiet_builder().with_settings(settings).build_seeded(1) {
        Err(ConfigError::Invalid(_)) => {}
        Err(other) => panic!("Expected invalid settings, got {:?}", other),
        Ok(_) => panic!("Expected invalid settings to be rejected"),
    }
}

#[test]
fn settings_drive_the_engine() {
    let settings = Settings {
        roll_duration: 1000.0,
        theme_color: [1, 2, 3],
        ..Settings::default()
    };
    let mut engine = quiet_builder()
        .with_settings(settings)
        .build_seeded(6)
        .expect("Settings should be valid");
    assert_eq!(engine.theme().base(), [1, 2, 3]);
    assert!(engine.roll_to(2));
    engine.advance(0.0);
    assert_eq!(engine.advance(1000.0).progress, Progress::Settled(Outcome::new(2)));
}
