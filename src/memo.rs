//! Optional memoization of pure binary operations.
//!
//! A process-wide toggle wraps multiplication and division of `f64`-based
//! elements in a bounded LRU cache keyed by the operand coefficient values
//! (bit patterns, never identity). Caching is advisory: with the toggle off
//! the wrappers call the raw operators directly, and results are
//! bit-identical either way.
//!
//! The cache sits behind a single mutex; concurrent users serialize on it.
//! A poisoned lock silently falls back to the raw operation.
//!
//! ```
//! use hypercomplex::{CayleyDickson, Quaternion, memo};
//! let i = Quaternion::<f64>::basis(1).unwrap();
//! let j = Quaternion::<f64>::basis(2).unwrap();
//! assert_eq!(memo::mul(&i, &j), i * j);
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex};

use rustc_hash::FxHashMap;

use crate::core::CayleyDickson;

/// Number of cached results kept per process.
pub const CAPACITY: usize = 128;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Operation {
    Multiply,
    Divide,
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct MemoKey {
    operation: Operation,
    level: u32,
    lhs: Vec<u64>,
    rhs: Vec<u64>,
}

struct MemoCache {
    entries: FxHashMap<MemoKey, Vec<u64>>,
    order: VecDeque<MemoKey>,
}

impl MemoCache {
    fn new() -> Self {
        MemoCache {
            entries: FxHashMap::default(),
            order: VecDeque::with_capacity(CAPACITY),
        }
    }

    fn get(&mut self, key: &MemoKey) -> Option<Vec<u64>> {
        let value = self.entries.get(key)?.clone();
        if let Some(position) = self.order.iter().position(|k| k == key) {
            if let Some(recent) = self.order.remove(position) {
                self.order.push_back(recent);
            }
        }
        Some(value)
    }

    fn insert(&mut self, key: MemoKey, value: Vec<u64>) {
        if self.entries.contains_key(&key) {
            return;
        }
        if self.entries.len() >= CAPACITY {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, value);
    }
}

static ENABLED: AtomicBool = AtomicBool::new(true);
static CACHE: LazyLock<Mutex<MemoCache>> = LazyLock::new(|| Mutex::new(MemoCache::new()));

/// Turn memoization on or off. Disabling must not change any observable
/// result; it only routes the wrappers to the raw operators.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether memoization is currently enabled (the default).
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Drop every cached result.
pub fn clear() {
    if let Ok(mut cache) = CACHE.lock() {
        cache.entries.clear();
        cache.order.clear();
    }
}

/// Number of cached results.
pub fn len() -> usize {
    CACHE.lock().map(|cache| cache.entries.len()).unwrap_or(0)
}

/// Whether the cache holds no results.
pub fn is_empty() -> bool {
    len() == 0
}

fn to_bits<A: CayleyDickson<Scalar = f64>>(value: &A) -> Vec<u64> {
    value.coefficients().iter().map(|c| c.to_bits()).collect()
}

fn from_bits<A: CayleyDickson<Scalar = f64>>(bits: &[u64]) -> A {
    let coefficients: Vec<f64> = bits.iter().map(|&b| f64::from_bits(b)).collect();
    A::read_coefficients(&coefficients)
}

fn cached<A, F>(operation: Operation, lhs: &A, rhs: &A, compute: F) -> A
where
    A: CayleyDickson<Scalar = f64>,
    F: FnOnce() -> A,
{
    if !is_enabled() {
        return compute();
    }

    let key = MemoKey {
        operation,
        level: A::LEVEL,
        lhs: to_bits(lhs),
        rhs: to_bits(rhs),
    };

    if let Ok(mut cache) = CACHE.lock() {
        if let Some(bits) = cache.get(&key) {
            return from_bits(&bits);
        }
    }

    let result = compute();
    if let Ok(mut cache) = CACHE.lock() {
        cache.insert(key, to_bits(&result));
    }
    result
}

/// Memoized multiplication: identical to `lhs * rhs`.
pub fn mul<A: CayleyDickson<Scalar = f64>>(lhs: &A, rhs: &A) -> A {
    cached(Operation::Multiply, lhs, rhs, || lhs.clone() * rhs.clone())
}

/// Memoized division: identical to `lhs / rhs`.
pub fn div<A: CayleyDickson<Scalar = f64>>(lhs: &A, rhs: &A) -> A {
    cached(Operation::Divide, lhs, rhs, || lhs.clone() / rhs.clone())
}
