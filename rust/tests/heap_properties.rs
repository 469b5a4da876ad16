use pqbench::{ConstructionMode, Orientation, PriorityQueue};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

const SEED: u64 = 42;
const MODES: [ConstructionMode; 2] = [ConstructionMode::Floyd, ConstructionMode::Incremental];
const ORIENTATIONS: [Orientation; 2] = [Orientation::Min, Orientation::Max];

fn natural(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

fn shuffled(n: i32, rng: &mut StdRng) -> Vec<i32> {
    let mut xs: Vec<i32> = (1..=n).collect();
    xs.shuffle(rng);
    xs
}

fn sorted_for(orientation: Orientation, mut xs: Vec<i32>) -> Vec<i32> {
    xs.sort();
    if orientation == Orientation::Max {
        xs.reverse();
    }
    xs
}

#[test]
fn test_invariant_holds_after_every_mutation() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for orientation in ORIENTATIONS {
        for mode in MODES {
            let mut pq = PriorityQueue::new(64, orientation, mode, natural).unwrap();
            for _ in 0..5_000 {
                if !pq.is_full() && (pq.is_empty() || rng.gen_bool(0.6)) {
                    pq.insert(rng.gen_range(-100..100)).unwrap();
                } else {
                    pq.extract().unwrap();
                }
                assert!(pq.validate().is_ok(), "{:?}", pq.validate());
            }
        }
    }
}

#[test]
fn test_extraction_order_of_permutation() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let n = 500;

    for orientation in ORIENTATIONS {
        for mode in MODES {
            let mut pq = PriorityQueue::new(n as usize, orientation, mode, natural).unwrap();
            for x in shuffled(n, &mut rng) {
                pq.insert(x).unwrap();
            }
            let drained: Vec<i32> = pq.drain_ordered().collect();
            let expected: Vec<i32> = match orientation {
                Orientation::Min => (1..=n).collect(),
                Orientation::Max => (1..=n).rev().collect(),
            };
            assert_eq!(drained, expected);
        }
    }
}

#[test]
fn test_construction_modes_drain_identically() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for orientation in ORIENTATIONS {
        for n in [1, 2, 3, 7, 8, 100, 1_023, 1_024] {
            let items: Vec<i32> = (0..n).map(|_| rng.gen_range(0..50)).collect();

            let floyd = PriorityQueue::from_items(
                n,
                items.clone(),
                orientation,
                ConstructionMode::Floyd,
                natural,
            )
            .unwrap();
            let incremental = PriorityQueue::from_items(
                n,
                items.clone(),
                orientation,
                ConstructionMode::Incremental,
                natural,
            )
            .unwrap();

            assert!(floyd.check_invariants());
            assert!(incremental.check_invariants());

            let from_floyd = floyd.into_sorted_vec();
            let from_incremental = incremental.into_sorted_vec();
            assert_eq!(from_floyd, from_incremental);
            assert_eq!(from_floyd, sorted_for(orientation, items));
        }
    }
}

#[test]
fn test_floyd_bulk_build_is_linear() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for n in [1_000usize, 10_000, 100_000] {
        let items: Vec<i32> = (0..n).map(|_| rng.gen()).collect();
        let pq = PriorityQueue::from_items(n, items, Orientation::Min, ConstructionMode::Floyd, natural)
            .unwrap();
        // Each level-h node costs at most 2h compares, summing to under 2n.
        assert!(pq.stats().compares <= 2 * n as u64);
        assert!(pq.stats().swaps <= n as u64);
    }
}

#[test]
fn test_capacity_boundaries() {
    for mode in MODES {
        let mut pq = PriorityQueue::new(3, Orientation::Min, mode, natural).unwrap();
        assert!(pq.extract().unwrap_err().is_underflow());
        assert_eq!(pq.len(), 0);

        for x in [3, 1, 2] {
            pq.insert(x).unwrap();
        }
        let err = pq.insert(0).unwrap_err();
        assert!(err.is_overflow());
        assert_eq!(pq.len(), 3);
        assert_eq!(pq.peek(), Ok(&1));

        for _ in 0..3 {
            pq.extract().unwrap();
        }
        assert!(pq.extract().unwrap_err().is_underflow());
        assert!(pq.peek().unwrap_err().is_underflow());
        assert_eq!(pq.len(), 0);
    }
}

#[test]
fn test_round_trip_multiset() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let items: Vec<i32> = (0..300).map(|_| rng.gen_range(0..20)).collect();

    for orientation in ORIENTATIONS {
        for mode in MODES {
            let mut pq = PriorityQueue::new(items.len(), orientation, mode, natural).unwrap();
            for &x in &items {
                pq.insert(x).unwrap();
            }
            assert!(pq.is_full());

            let mut out = Vec::new();
            for _ in 0..items.len() {
                out.push(pq.extract().unwrap());
            }
            assert_eq!(pq.len(), 0);
            assert!(pq.is_empty());
            assert_eq!(out, sorted_for(orientation, items.clone()));
        }
    }
}

#[test]
fn test_floyd_concrete_scenario() {
    let mut pq = PriorityQueue::from_items(
        5,
        vec![5, 3, 4, 1, 2],
        Orientation::Min,
        ConstructionMode::Floyd,
        natural,
    )
    .unwrap();

    let mut out = Vec::new();
    for _ in 0..5 {
        out.push(pq.extract().unwrap());
    }
    assert_eq!(out, vec![1, 2, 3, 4, 5]);
    assert!(pq.is_empty());
}

#[test]
fn test_reverse_comparator_with_min_orientation_acts_as_max() {
    let mut pq = PriorityQueue::from_items(
        6,
        vec![4, 9, 1, 7, 3, 8],
        Orientation::Min,
        ConstructionMode::Floyd,
        |a: &i32, b: &i32| b.cmp(a),
    )
    .unwrap();
    assert_eq!(pq.extract(), Ok(9));
    assert_eq!(pq.extract(), Ok(8));
    assert_eq!(pq.extract(), Ok(7));
}

#[derive(Debug, Clone, PartialEq)]
struct Job {
    priority: u8,
    name: &'static str,
}

#[test]
fn test_key_comparator_on_composite_elements() {
    let jobs = vec![
        Job { priority: 2, name: "compact" },
        Job { priority: 9, name: "flush" },
        Job { priority: 5, name: "index" },
        Job { priority: 1, name: "vacuum" },
    ];
    let pq = PriorityQueue::from_items(
        4,
        jobs,
        Orientation::Max,
        ConstructionMode::Incremental,
        |a: &Job, b: &Job| a.priority.cmp(&b.priority),
    )
    .unwrap();

    let names: Vec<&str> = pq.into_sorted_vec().into_iter().map(|j| j.name).collect();
    assert_eq!(names, vec!["flush", "index", "compact", "vacuum"]);
}

#[test]
fn test_string_elements() {
    let words = vec!["delta", "alpha", "echo", "charlie", "bravo"]
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();

    for mode in MODES {
        let pq = PriorityQueue::min_heap_from(5, words.clone(), mode).unwrap();
        assert_eq!(
            pq.into_sorted_vec(),
            vec!["alpha", "bravo", "charlie", "delta", "echo"]
        );
    }
}

#[test]
fn test_counters_only_grow() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut pq = PriorityQueue::max_heap(128, ConstructionMode::Incremental).unwrap();
    let mut last = pq.stats();

    for _ in 0..1_000 {
        if pq.is_full() || (!pq.is_empty() && rng.gen_bool(0.5)) {
            pq.extract().unwrap();
        } else {
            pq.insert(rng.gen::<u16>()).unwrap();
        }
        let now = pq.stats();
        assert!(now.compares >= last.compares);
        assert!(now.swaps >= last.swaps);
        last = now;
    }
}
