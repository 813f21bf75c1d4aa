//! Iterator: a range-like type that hands out Fibonacci numbers through the
//! standard `Iterator` protocol, so `for` loops and adapters just work.

use itertools::Itertools;

use crate::console::Console;

pub const DEFAULT_LIMIT: u64 = 100;

/// Fibonacci numbers strictly below `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibonacciRange {
    limit: u64,
}

impl FibonacciRange {
    pub fn new(limit: u64) -> Self {
        FibonacciRange { limit }
    }

    pub fn iter(&self) -> Fibonacci {
        Fibonacci {
            current: 0,
            next: 1,
            limit: self.limit,
        }
    }
}

impl Default for FibonacciRange {
    fn default() -> Self {
        FibonacciRange::new(DEFAULT_LIMIT)
    }
}

impl IntoIterator for FibonacciRange {
    type Item = u64;
    type IntoIter = Fibonacci;

    fn into_iter(self) -> Fibonacci {
        self.iter()
    }
}

impl IntoIterator for &FibonacciRange {
    type Item = u64;
    type IntoIter = Fibonacci;

    fn into_iter(self) -> Fibonacci {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: u64,
    next: u64,
    limit: u64,
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.current >= self.limit {
            return None;
        }
        let value = self.current;
        // Once the sum would overflow there is nothing left below any u64 limit.
        let following = self.current.checked_add(self.next).unwrap_or(u64::MAX);
        self.current = self.next;
        self.next = following;
        Some(value)
    }
}

pub fn demo(out: &dyn Console) {
    let range = FibonacciRange::default();
    out.line(&range.iter().join(" "));

    let even: Vec<u64> = range.iter().filter(|n| n % 2 == 0).collect();
    out.line(&format!("Even terms: {}", even.iter().join(" ")));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;

    #[test]
    fn test_default_range_stops_below_100() {
        let values: Vec<u64> = FibonacciRange::default().into_iter().collect();
        assert_eq!(values, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
    }

    #[test]
    fn test_zero_limit_is_empty() {
        assert_eq!(FibonacciRange::new(0).iter().count(), 0);
        assert_eq!(FibonacciRange::new(1).iter().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_huge_limit_terminates() {
        let count = FibonacciRange::new(u64::MAX).iter().count();
        assert!(count > 90);
    }

    #[test]
    fn test_range_is_reusable_by_reference() {
        let range = FibonacciRange::new(10);
        let first: u64 = (&range).into_iter().sum();
        let second: u64 = range.iter().sum();
        assert_eq!(first, 20);
        assert_eq!(first, second);
    }

    #[test]
    fn test_demo_output() {
        let out = MemoryConsole::new();
        demo(&out);
        assert_eq!(
            out.lines(),
            vec!["0 1 1 2 3 5 8 13 21 34 55 89", "Even terms: 0 2 8 34"]
        );
    }
}
