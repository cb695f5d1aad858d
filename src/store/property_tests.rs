//! Property-Based Tests for the Store Module
//!
//! Drives a `TtlStore` and a plain model side by side with proptest.

use proptest::prelude::*;
use std::collections::BTreeMap;

use crate::clock::ManualClock;
use crate::store::TtlStore;

// == Model ==
/// Reference model: key -> (value, deadline in seconds since start).
type Model = BTreeMap<String, (String, Option<u64>)>;

fn model_is_live(deadline: Option<u64>, now: u64) -> bool {
    deadline.map_or(true, |at| now < at)
}

// == Strategies ==
/// Small key alphabet so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-e]{1,2}".prop_map(|s| s)
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,16}".prop_map(|s| s)
}

fn ttl_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![Just(0u32), 1u32..20]
}

#[derive(Debug, Clone)]
enum StoreOp {
    Set { key: String, value: String, ttl: u32 },
    Remove { key: String },
    Get { key: String },
    Scan { start: String, count: u32 },
    ReclaimOne,
    Advance { secs: u32 },
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        (key_strategy(), value_strategy(), ttl_strategy())
            .prop_map(|(key, value, ttl)| StoreOp::Set { key, value, ttl }),
        key_strategy().prop_map(|key| StoreOp::Remove { key }),
        key_strategy().prop_map(|key| StoreOp::Get { key }),
        (key_strategy(), 0u32..8).prop_map(|(start, count)| StoreOp::Scan { start, count }),
        Just(StoreOp::ReclaimOne),
        (0u32..10).prop_map(|secs| StoreOp::Advance { secs }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // **Property 1: Model Agreement**
    // *For any* sequence of operations, every observable result of the store
    // SHALL match a plain sorted-map model evaluated at the same time.
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(store_op_strategy(), 1..60)) {
        let clock = ManualClock::new();
        let mut store = TtlStore::empty(&clock);
        let mut model = Model::new();
        let mut now: u64 = 0;

        for op in ops {
            match op {
                StoreOp::Set { key, value, ttl } => {
                    let deadline = (ttl > 0).then(|| now + u64::from(ttl));
                    model.insert(key.clone(), (value.clone(), deadline));
                    store.set(key, value, ttl);
                }
                StoreOp::Remove { key } => {
                    let expected = model.remove(&key).is_some();
                    prop_assert_eq!(store.remove(&key), expected);
                    prop_assert_eq!(store.get(&key), None);
                }
                StoreOp::Get { key } => {
                    let expected = model
                        .get(&key)
                        .filter(|(_, deadline)| model_is_live(*deadline, now))
                        .map(|(value, _)| value.as_str());
                    prop_assert_eq!(store.get(&key), expected);
                }
                StoreOp::Scan { start, count } => {
                    let expected: Vec<(String, String)> = model
                        .range(start.clone()..)
                        .filter(|(_, (_, deadline))| model_is_live(*deadline, now))
                        .take(count as usize)
                        .map(|(k, (v, _))| (k.clone(), v.clone()))
                        .collect();
                    prop_assert_eq!(store.get_many_sorted(&start, count), expected);
                }
                StoreOp::ReclaimOne => {
                    let before = store.len();
                    match store.remove_one_expired_entry() {
                        Some((key, value)) => {
                            let (model_value, deadline) = model
                                .remove(&key)
                                .expect("reclaimed key must exist in model");
                            prop_assert_eq!(value, model_value);
                            prop_assert!(!model_is_live(deadline, now), "Reclaimed a live entry");
                            prop_assert_eq!(store.len(), before - 1);
                        }
                        None => {
                            let any_expired = model
                                .values()
                                .any(|(_, deadline)| !model_is_live(*deadline, now));
                            prop_assert!(!any_expired, "Expired entry left unreclaimed");
                        }
                    }
                }
                StoreOp::Advance { secs } => {
                    clock.advance_secs(secs);
                    now += u64::from(secs);
                }
            }

            prop_assert_eq!(store.len(), model.len(), "Entry count mismatch");
        }
    }

    // **Property 2: TTL Window**
    // *For any* TTL t > 0, the value SHALL be visible for every offset in
    // [0, t) and invisible from t onwards.
    #[test]
    fn prop_ttl_window(ttl in 1u32..50, probe in 0u32..100) {
        let clock = ManualClock::new();
        let store = TtlStore::new([("k", "v", ttl)], &clock);

        clock.advance_secs(probe);
        if probe < ttl {
            prop_assert_eq!(store.get("k"), Some("v"));
        } else {
            prop_assert_eq!(store.get("k"), None);
        }
    }

    // **Property 3: Sorted Scan Shape**
    // *For any* contents, a scan SHALL return at most `count` strictly
    // increasing live keys, all at or after the start key.
    #[test]
    fn prop_scan_shape(
        seed in prop::collection::vec((key_strategy(), value_strategy(), ttl_strategy()), 0..30),
        start in key_strategy(),
        count in 0u32..10,
        elapsed in 0u32..25
    ) {
        let clock = ManualClock::new();
        let store = TtlStore::new(seed, &clock);
        clock.advance_secs(elapsed);

        let result = store.get_many_sorted(&start, count);
        prop_assert!(result.len() <= count as usize);
        for (key, value) in &result {
            prop_assert!(key.as_str() >= start.as_str());
            prop_assert_eq!(store.get(key), Some(value.as_str()));
        }
        for pair in result.windows(2) {
            prop_assert!(pair[0].0 < pair[1].0, "Keys not strictly increasing");
        }
    }

    // **Property 4: Reclamation Drains Only Expired Entries**
    // *For any* contents, repeated reclamation SHALL terminate and leave
    // exactly the live entries behind.
    #[test]
    fn prop_reclaim_drains_expired(
        seed in prop::collection::vec((key_strategy(), value_strategy(), ttl_strategy()), 0..30),
        elapsed in 0u32..25
    ) {
        let clock = ManualClock::new();
        let mut store = TtlStore::new(seed, &clock);
        clock.advance_secs(elapsed);

        let live_before = store.get_many_sorted("", u32::MAX);
        let total_before = store.len();

        let mut reclaimed = 0;
        while let Some((key, _)) = store.remove_one_expired_entry() {
            prop_assert_eq!(store.get(&key), None);
            reclaimed += 1;
            prop_assert!(reclaimed <= total_before, "Reclamation did not terminate");
        }

        prop_assert_eq!(store.len(), live_before.len());
        prop_assert_eq!(store.get_many_sorted("", u32::MAX), live_before);
    }
}
