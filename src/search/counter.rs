//! Mixed-radix combination counter.
//!
//! [`CombinationCounter`] enumerates every integer vector bounded by a limit
//! vector, the way an odometer does: the last position turns fastest and
//! carries into its left neighbour when it wraps. It is lazy, uses O(n) memory
//! no matter how large the product of the limits is, and cannot be restarted.
//!
//! # Examples
//!
//! ```
//! use haikuify::search::counter::CombinationCounter;
//!
//! let mut counter = CombinationCounter::new(vec![2, 3]).unwrap();
//! assert_eq!(counter.advance(), Some(&[0, 0][..]));
//! assert_eq!(counter.advance(), Some(&[0, 1][..]));
//! assert_eq!(counter.advance(), Some(&[0, 2][..]));
//! assert_eq!(counter.advance(), Some(&[1, 0][..]));
//!
//! // The remaining two vectors, then exhaustion.
//! assert_eq!(counter.count(), 2);
//! ```

use crate::error::{HaikuError, Result};

/// Odometer over `[0, limits[0]) x ... x [0, limits[n-1])`.
#[derive(Debug, Clone)]
pub struct CombinationCounter {
    limits: Vec<usize>,
    digits: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl CombinationCounter {
    /// Create a counter for the given limit vector.
    ///
    /// Every limit must be at least 1. An empty limit vector is accepted and
    /// produces no vectors at all.
    pub fn new(limits: Vec<usize>) -> Result<Self> {
        if let Some(position) = limits.iter().position(|&limit| limit == 0) {
            return Err(HaikuError::invalid_limits(format!(
                "limit at position {position} is zero in {limits:?}"
            )));
        }

        Ok(CombinationCounter {
            digits: vec![0; limits.len()],
            exhausted: limits.is_empty(),
            started: false,
            limits,
        })
    }

    /// The immutable limit vector.
    pub fn limits(&self) -> &[usize] {
        &self.limits
    }

    /// Number of vectors the counter produces over its whole life, or `None`
    /// if the product overflows.
    pub fn total(&self) -> Option<u128> {
        if self.limits.is_empty() {
            return Some(0);
        }
        self.limits
            .iter()
            .try_fold(1u128, |acc, &limit| acc.checked_mul(limit as u128))
    }

    /// Whether the counter has produced its last vector.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Step to the next vector and borrow it.
    ///
    /// The first call returns the all-zero vector. Once every vector has been
    /// produced this returns `None`, and keeps returning `None`.
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(&self.digits);
        }

        // Scan from the least significant (last) digit leftward.
        for position in (0..self.digits.len()).rev() {
            if self.digits[position] + 1 < self.limits[position] {
                self.digits[position] += 1;
                return Some(&self.digits);
            }
            self.digits[position] = 0;
        }

        self.exhausted = true;
        None
    }
}

impl Iterator for CombinationCounter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|digits| digits.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_counter_visits_every_vector_once() {
        let cases: Vec<Vec<usize>> = vec![
            vec![1, 2, 3],
            vec![2, 2],
            vec![1, 1, 1, 1],
            vec![2, 2, 3],
            vec![4],
            vec![3, 1, 2, 5],
        ];

        for limits in cases {
            let expected: usize = limits.iter().product();
            let counter = CombinationCounter::new(limits.clone()).unwrap();
            assert_eq!(counter.total(), Some(expected as u128));

            let vectors: Vec<Vec<usize>> = counter.collect();
            assert_eq!(vectors.len(), expected, "{limits:?}");

            let distinct: HashSet<&Vec<usize>> = vectors.iter().collect();
            assert_eq!(distinct.len(), expected, "{limits:?}");

            for vector in &vectors {
                assert_eq!(vector.len(), limits.len());
                for (digit, limit) in vector.iter().zip(&limits) {
                    assert!(digit < limit, "{vector:?} exceeds {limits:?}");
                }
            }
        }
    }

    #[test]
    fn test_counter_order_is_odometer() {
        let vectors: Vec<Vec<usize>> = CombinationCounter::new(vec![2, 2, 3]).unwrap().collect();

        assert_eq!(vectors.len(), 12);
        assert_eq!(vectors[0], vec![0, 0, 0]);
        assert_eq!(vectors[1], vec![0, 0, 1]);
        assert_eq!(vectors[2], vec![0, 0, 2]);
        assert_eq!(vectors[3], vec![0, 1, 0]);
        assert_eq!(vectors[6], vec![1, 0, 0]);
        assert_eq!(vectors[11], vec![1, 1, 2]);

        for pair in vectors.windows(2) {
            assert!(pair[0] < pair[1], "{:?} !< {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_counter_exhaustion_is_idempotent() {
        let mut counter = CombinationCounter::new(vec![1, 2]).unwrap();
        assert!(counter.advance().is_some());
        assert!(counter.advance().is_some());
        assert!(counter.advance().is_none());
        assert!(counter.is_exhausted());
        assert!(counter.advance().is_none());
        assert!(counter.next().is_none());
    }

    #[test]
    fn test_counter_empty_limits() {
        let mut counter = CombinationCounter::new(Vec::new()).unwrap();
        assert_eq!(counter.total(), Some(0));
        assert!(counter.advance().is_none());
        assert!(counter.advance().is_none());
    }

    #[test]
    fn test_counter_rejects_zero_limit() {
        let err = CombinationCounter::new(vec![2, 0, 3]).unwrap_err();
        match err {
            HaikuError::InvalidCounterLimits(msg) => assert!(msg.contains("position 1")),
            other => panic!("Expected InvalidCounterLimits, got {other:?}"),
        }
    }

    #[test]
    fn test_counter_total_overflow() {
        let counter = CombinationCounter::new(vec![usize::MAX; 4]).unwrap();
        assert_eq!(counter.total(), None);
    }
}
