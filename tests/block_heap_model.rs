use bmssp_core::BlockHeap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const GLOBAL_BOUND: u64 = u64::MAX;

/// Reference model: an ordered set of (value, key) plus the per-key value.
#[derive(Default)]
struct Model {
    by_value: BTreeSet<(u64, usize)>,
    by_key: std::collections::HashMap<usize, u64>,
}

impl Model {
    fn insert(&mut self, key: usize, value: u64) {
        if let Some(&old) = self.by_key.get(&key) {
            if value >= old {
                return;
            }
            self.by_value.remove(&(old, key));
        }
        self.by_key.insert(key, value);
        self.by_value.insert((value, key));
    }

    fn remove(&mut self, key: usize) {
        if let Some(old) = self.by_key.remove(&key) {
            self.by_value.remove(&(old, key));
        }
    }

    fn min_value(&self) -> Option<u64> {
        self.by_value.iter().next().map(|&(v, _)| v)
    }
}

/// Validates one pull against the model and applies it.
///
/// The contract: no more than M keys; every returned value strictly below
/// the separator unless the whole batch is a single tied value; nothing
/// left behind is smaller than a returned value; the separator never
/// exceeds the smallest remaining strictly-larger value.
fn check_pull(heap: &mut BlockHeap<usize, u64>, model: &mut Model, capacity: usize) {
    let before = model.by_key.len();
    let (keys, separator) = heap.pull();

    if before == 0 {
        assert!(keys.is_empty());
        assert_eq!(separator, GLOBAL_BOUND);
        return;
    }

    assert!(!keys.is_empty(), "pull on a non-empty heap returns entries");
    assert!(keys.len() <= capacity.max(1));
    if before <= capacity {
        assert_eq!(keys.len(), before, "small populations drain in one pull");
        assert_eq!(separator, GLOBAL_BOUND);
    }

    let mut returned_max = 0;
    let mut unique = BTreeSet::new();
    for &key in &keys {
        assert!(unique.insert(key), "duplicate key {} in one pull", key);
        let value = *model.by_key.get(&key).expect("pulled key must be live");
        returned_max = returned_max.max(value);
        assert!(heap.get(&key).is_none(), "pulled key {} still stored", key);
    }

    for &key in &keys {
        let value = model.by_key[&key];
        model.remove(key);
        // Track tied batches: every returned value below the separator, or
        // the batch is one tied value and the separator sits strictly above.
        assert!(value < separator, "returned value {} not below separator {}", value, separator);
    }

    if let Some(remaining_min) = model.min_value() {
        assert!(
            remaining_min >= returned_max,
            "remaining value {} undercuts returned {}",
            remaining_min,
            returned_max
        );
        assert!(
            separator <= remaining_min || remaining_min == returned_max,
            "separator {} skips over remaining value {}",
            separator,
            remaining_min
        );
    }

    assert_eq!(heap.len(), model.by_key.len());
}

#[test]
fn randomized_interleavings_hold_the_contract() {
    for seed in 0..8u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let capacity = rng.gen_range(1..=8);
        let mut heap: BlockHeap<usize, u64> = BlockHeap::new(capacity, GLOBAL_BOUND);
        let mut model = Model::default();

        for _ in 0..600 {
            match rng.gen_range(0..100) {
                0..=54 => {
                    let key = rng.gen_range(0..120);
                    let value = rng.gen_range(1_000..1_050);
                    heap.insert(key, value);
                    model.insert(key, value);
                }
                55..=69 => {
                    // Honor the batch-prepend precondition: values strictly
                    // below everything currently stored.
                    let floor = model.min_value().unwrap_or(1_000);
                    if floor == 0 {
                        continue;
                    }
                    let low = floor.saturating_sub(40);
                    let count = rng.gen_range(1..=2 * capacity + 2);
                    let batch: Vec<(usize, u64)> = (0..count)
                        .map(|_| (rng.gen_range(120..200), rng.gen_range(low..floor)))
                        .collect();
                    for &(key, value) in &batch {
                        model.insert(key, value);
                    }
                    heap.batch_prepend(batch);
                }
                70..=79 => {
                    let key = rng.gen_range(0..200);
                    heap.remove(&key);
                    model.remove(key);
                }
                _ => check_pull(&mut heap, &mut model, capacity),
            }

            assert_eq!(heap.len(), model.by_key.len());
            let probe = rng.gen_range(0..200);
            assert_eq!(heap.get(&probe), model.by_key.get(&probe).copied());
        }

        // Drain what is left; separators must be non-decreasing.
        let mut last_separator = None;
        while !heap.is_empty() {
            let before = heap.len();
            let (keys, separator) = heap.pull();
            for key in keys {
                model.remove(key);
            }
            assert!(heap.len() < before, "pull must make progress");
            if let Some(last) = last_separator {
                assert!(separator >= last, "separators went backwards");
            }
            last_separator = Some(separator);
        }
        assert!(model.by_key.is_empty());
    }
}

#[test]
fn uniqueness_across_both_sequences() {
    let mut heap: BlockHeap<usize, u64> = BlockHeap::new(3, GLOBAL_BOUND);
    heap.insert(1, 100);
    heap.insert(2, 200);
    // A prepend of already-present keys with smaller values must relocate
    // them, not duplicate them.
    heap.batch_prepend(vec![(1, 10), (2, 20), (3, 30)]);
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.get(&1), Some(10));
    assert_eq!(heap.get(&2), Some(20));

    let (keys, _) = heap.pull();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), keys.len());
    assert_eq!(sorted, vec![1, 2, 3]);
}
