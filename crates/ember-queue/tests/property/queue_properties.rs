use std::collections::HashMap;

use ember_queue::{Entry, IndexedPriorityQueue};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(i64, i64),
    SetPriority(i64, i64),
    Pop,
    Remove(i64),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0i64..24, -1_000i64..1_000).prop_map(|(k, p)| Op::Add(k, p)),
        3 => (0i64..24, -1_000i64..1_000).prop_map(|(k, p)| Op::SetPriority(k, p)),
        1 => Just(Op::Pop),
        1 => (0i64..24).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn heap_sort_matches_std_sort(priorities in prop::collection::vec(any::<i64>(), 0..200)) {
        let mut queue = IndexedPriorityQueue::with_capacity(priorities.len());
        for (key, &p) in priorities.iter().enumerate() {
            queue.add(Entry::new(key as i64, (), p)).unwrap();
        }
        let mut popped = Vec::with_capacity(priorities.len());
        while let Ok(entry) = queue.pop() {
            popped.push(entry.priority);
        }
        let mut expected = priorities.clone();
        expected.sort_unstable();
        prop_assert_eq!(popped, expected);
    }

    #[test]
    fn interleaved_operations_track_a_linear_scan_model(ops in prop::collection::vec(arb_op(), 1..300)) {
        let mut queue = IndexedPriorityQueue::new();
        let mut model: HashMap<i64, i64> = HashMap::new();

        for op in ops {
            match op {
                Op::Add(key, priority) => {
                    let result = queue.add(Entry::new(key, (), priority));
                    prop_assert_eq!(result.is_ok(), !model.contains_key(&key));
                    model.entry(key).or_insert(priority);
                }
                Op::SetPriority(key, priority) => {
                    let result = queue.set_priority(key, priority);
                    prop_assert_eq!(result.is_ok(), model.contains_key(&key));
                    if let Some(p) = model.get_mut(&key) {
                        *p = priority;
                    }
                }
                Op::Pop => match queue.pop() {
                    Ok(entry) => {
                        let min = model.values().copied().min();
                        prop_assert_eq!(Some(entry.priority), min);
                        prop_assert_eq!(model.remove(&entry.key), Some(entry.priority));
                    }
                    Err(_) => {
                        prop_assert!(model.is_empty());
                    }
                },
                Op::Remove(key) => {
                    let removed = queue.remove(key).map(|e| e.priority);
                    prop_assert_eq!(removed, model.remove(&key));
                }
            }

            prop_assert!(queue.validate().is_ok(), "{:?}", queue.validate());
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.peek().map(|e| e.priority), model.values().copied().min());
            for (&key, &priority) in &model {
                prop_assert_eq!(queue.get(key).map(|e| e.priority), Some(priority));
            }
        }
    }
}
