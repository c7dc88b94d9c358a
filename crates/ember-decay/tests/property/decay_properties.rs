use std::collections::HashMap;

use ember_core::config::DecayConfig;
use ember_decay::{DecayCollection, DecayCurve};
use proptest::prelude::*;

fn make_collection(max_size: usize, half_life_ms: i64) -> DecayCollection<()> {
    DecayCollection::new(DecayConfig::new("prop", max_size, 1.0, 1.0, half_life_ms)).unwrap()
}

fn priorities(c: &DecayCollection<()>) -> HashMap<i64, i64> {
    c.queue().iter().map(|e| (e.key, e.priority)).collect()
}

proptest! {
    // Float error can land the offset a hair either side of the exact value;
    // truncation then moves it by at most one millisecond.
    #[test]
    fn kill_time_energy_roundtrip(
        half_life in 1i64..1_000_000,
        threshold in 0.01f64..100.0,
        now in -1_000_000_000i64..1_000_000_000,
        half_lives in -30.0f64..30.0,
    ) {
        let curve = DecayCurve::new(threshold, half_life);
        let kill_time = now + (half_lives * half_life as f64) as i64;
        let energy = curve.energy_from_kill_time(kill_time, now);
        let back = curve.kill_time_from_energy(energy, now);
        prop_assert!((back - kill_time).abs() <= 1, "{} -> {} -> {}", kill_time, energy, back);
    }

    #[test]
    fn distinct_keys_within_capacity_are_retained(
        max_size in 1usize..64,
        keys in prop::collection::vec(0i64..1_000, 0..200),
    ) {
        let mut c = make_collection(max_size, 1000);
        let mut distinct = std::collections::HashSet::new();
        for key in keys {
            if distinct.len() == max_size && !distinct.contains(&key) {
                continue;
            }
            distinct.insert(key);
            // A single instant: nothing expires.
            c.update(key, 0).unwrap();
        }
        prop_assert_eq!(c.len(), distinct.len());
        prop_assert_eq!(c.num_overflow_warnings(), 0);
    }

    #[test]
    fn update_of_existing_key_never_lowers_kill_time(
        half_life in 1_000i64..100_000,
        steps in prop::collection::vec(0i64..5_000, 1..50),
    ) {
        let mut c = make_collection(4, half_life);
        let mut now = 0i64;
        let mut previous = c.update(1, now).unwrap().priority;
        for step in steps {
            now += step;
            let next = c.update(1, now).unwrap().priority;
            prop_assert!(next >= previous, "{} < {} at {}", next, previous, now);
            previous = next;
        }
    }

    #[test]
    fn bounded_size_and_minimum_eviction(
        max_size in 1usize..16,
        ops in prop::collection::vec((0i64..48, 0i64..400), 1..300),
    ) {
        let mut c = make_collection(max_size, 1000);
        let mut now = 0i64;
        for (key, step) in ops {
            now += step;
            let before = priorities(&c);
            c.update(key, now).unwrap();
            let after = priorities(&c);

            prop_assert!(c.len() <= max_size);
            prop_assert!(c.queue().validate().is_ok());

            let evicted: Vec<i64> = before.keys().filter(|k| !after.contains_key(k)).copied().collect();
            prop_assert!(evicted.len() <= 1);
            if let Some(gone) = evicted.first() {
                prop_assert!(!before.contains_key(&key), "existing key update evicted {}", gone);
                let min = before.values().copied().min().unwrap();
                prop_assert_eq!(before[gone], min);
            }
            if before.len() == max_size && !before.contains_key(&key) {
                prop_assert_eq!(c.len(), max_size);
            }

            let scan_min = c.queue().iter().map(|e| e.priority).min();
            prop_assert_eq!(c.queue().peek().map(|e| e.priority), scan_min);
        }
    }
}
