//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Each index n > 0 depends on n - 1; value is the running sum 0 + 1 + ... + n.
struct Triangular;

impl DpProblem<u32, u64> for Triangular {
    fn deps(&self, n: &u32) -> Option<Vec<u32>> {
        Some(if *n == 0 { vec![] } else { vec![n - 1] })
    }

    fn compute(&self, n: &u32, deps: Vec<u64>) -> u64 {
        u64::from(*n) + deps.first().copied().unwrap_or(0)
    }
}

#[test]
fn linear_chain() {
    let cache: DpCache<u32, u64, _, _> = DpCache::with_problem(HashMapBackend::new(), Triangular);
    assert_eq!(cache.get(&0).unwrap(), 0);
    assert_eq!(cache.get(&4).unwrap(), 10);
    assert_eq!(cache.get(&100).unwrap(), 5050);
}

#[test]
fn diamond_dependency_is_computed_once() {
    // 0 depends on 1 and 2, both depend on 3
    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Option<Vec<usize>> {
            Some(match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            })
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 10,
            }
        }
    }

    let count = Rc::new(Cell::new(0));
    let cache: DpCache<usize, i32, _, _> = DpCache::with_problem(
        HashMapBackend::new(),
        Diamond {
            count: count.clone(),
        },
    );

    assert_eq!(cache.get(&0).unwrap(), 50);
    assert_eq!(count.get(), 4);

    let _ = cache.get(&0).unwrap();
    assert_eq!(count.get(), 4);
}

/// Named nodes: "loop" feeds itself through "other", "dangling" refers to "nowhere".
struct Broken;

impl DpProblem<&'static str, u8> for Broken {
    fn deps(&self, name: &&'static str) -> Option<Vec<&'static str>> {
        match *name {
            "loop" => Some(vec!["other"]),
            "other" => Some(vec!["loop"]),
            "dangling" => Some(vec!["nowhere"]),
            "leaf" => Some(vec![]),
            _ => None,
        }
    }

    fn compute(&self, _name: &&'static str, deps: Vec<u8>) -> u8 {
        deps.into_iter().sum::<u8>() + 1
    }
}

#[test]
fn cycles_are_reported() {
    let cache: DpCache<&str, u8, _, _> = DpCache::with_problem(HashMapBackend::new(), Broken);
    assert_eq!(cache.get(&"loop"), Err(DpError::Cycle("loop")));
}

#[test]
fn undefined_dependencies_are_reported() {
    let cache: DpCache<&str, u8, _, _> = DpCache::with_problem(HashMapBackend::new(), Broken);
    assert_eq!(cache.get(&"dangling"), Err(DpError::Undefined("nowhere")));
}

#[test]
fn failures_do_not_poison_the_cache() {
    let cache: DpCache<&str, u8, _, _> = DpCache::with_problem(HashMapBackend::new(), Broken);
    assert!(cache.get(&"loop").is_err());
    assert_eq!(cache.get(&"leaf"), Ok(1));
    assert!(cache.get(&"loop").is_err());
}

#[test]
fn hashmap_backend_get_or_insert() {
    let mut backend: HashMapBackend<String, i32> = HashMapBackend::new();

    assert_eq!(*backend.get_or_insert("key1".to_string(), || 42), 42);
    assert_eq!(*backend.get_or_insert("key1".to_string(), || 999), 42);
    assert_eq!(backend.get(&"key1".to_string()), Some(&42));
    assert_eq!(backend.get(&"key2".to_string()), None);
}
