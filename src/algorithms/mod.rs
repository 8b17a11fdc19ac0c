//! Step trace generators
//!
//! One hand-written generator per algorithm. Each is a pure function from raw
//! input to a complete [`Trace`]:
//!
//! - [`two_sum`]: value → index hash map, first match wins
//! - [`max_min`]: single pass maximum and minimum
//! - [`kth_element`]: kth maximum/minimum via sorting
//! - [`sort_012`]: Dutch national flag partition
//! - [`reverse`]: two pointer in-place reversal
//! - [`rotate`]: cyclic rotation by one
//! - [`union_intersection`]: merge walks over two sorted arrays
//! - [`kadane`]: maximum subarray
//! - [`min_jumps`]: greedy minimum jumps
//!
//! # Totality
//!
//! Generators never panic and never return errors. Empty, out-of-range or
//! otherwise unusable input produces a single terminal step whose
//! description says what was wrong.
//!
//! [`Problem`] is the closed catalog of visualizations and dispatches an
//! [`Input`] to the right generator.

pub mod constants;
pub mod errors;
pub mod input;
pub mod kadane;
pub mod kth_element;
pub mod max_min;
pub mod min_jumps;
pub mod reverse;
pub mod rotate;
pub mod sort_012;
pub mod two_sum;
pub mod union_intersection;

use crate::step::state::{KthState, MergeState, TwoSumState};
use crate::step::Trace;
use errors::InputError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Raw input handed over by the input form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Input {
    /// Primary integer sequence
    pub nums: Vec<i64>,
    /// Second sequence (union/intersection only)
    pub second: Vec<i64>,
    /// Auxiliary scalar: the target for Two Sum, k for kth max/min
    pub scalar: Option<i64>,
}

impl Input {
    pub fn new(nums: Vec<i64>) -> Self {
        Input {
            nums,
            ..Default::default()
        }
    }

    pub fn with_scalar(mut self, scalar: i64) -> Self {
        self.scalar = Some(scalar);
        self
    }

    pub fn with_second(mut self, second: Vec<i64>) -> Self {
        self.second = second;
        self
    }
}

/// Every visualization the engine knows how to trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Problem {
    TwoSum,
    MaxMin,
    KthMaxMin,
    Sort012,
    ReverseArray,
    CyclicRotate,
    Union,
    Intersection,
    UnionIntersection,
    Kadane,
    MinJumps,
}

impl Problem {
    pub const ALL: [Problem; 11] = [
        Problem::TwoSum,
        Problem::MaxMin,
        Problem::KthMaxMin,
        Problem::Sort012,
        Problem::ReverseArray,
        Problem::CyclicRotate,
        Problem::Union,
        Problem::Intersection,
        Problem::UnionIntersection,
        Problem::Kadane,
        Problem::MinJumps,
    ];

    /// Stable command-line identifier
    pub fn id(self) -> &'static str {
        match self {
            Problem::TwoSum => "two-sum",
            Problem::MaxMin => "max-min",
            Problem::KthMaxMin => "kth-max-min",
            Problem::Sort012 => "sort-012",
            Problem::ReverseArray => "reverse-array",
            Problem::CyclicRotate => "cyclic-rotate",
            Problem::Union => "union",
            Problem::Intersection => "intersection",
            Problem::UnionIntersection => "union-intersection",
            Problem::Kadane => "kadane",
            Problem::MinJumps => "min-jumps",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Problem::TwoSum => "Two Sum",
            Problem::MaxMin => "Find Maximum and Minimum",
            Problem::KthMaxMin => "Kth Maximum and Minimum",
            Problem::Sort012 => "Sort 0s, 1s and 2s",
            Problem::ReverseArray => "Reverse an Array",
            Problem::CyclicRotate => "Cyclically Rotate by One",
            Problem::Union => "Union of Sorted Arrays",
            Problem::Intersection => "Intersection of Sorted Arrays",
            Problem::UnionIntersection => "Union and Intersection of Sorted Arrays",
            Problem::Kadane => "Maximum Subarray (Kadane)",
            Problem::MinJumps => "Minimum Jumps to Reach the End",
        }
    }

    /// Name of the auxiliary scalar, if this problem takes one
    pub fn scalar_name(self) -> Option<&'static str> {
        match self {
            Problem::TwoSum => Some("target"),
            Problem::KthMaxMin => Some("k"),
            _ => None,
        }
    }

    /// Whether this problem reads [`Input::second`]
    pub fn needs_second(self) -> bool {
        matches!(
            self,
            Problem::Union | Problem::Intersection | Problem::UnionIntersection
        )
    }

    /// Playback tick interval at 1x speed
    pub fn base_interval(self) -> Duration {
        if self.needs_second() {
            constants::SLOW_BASE_INTERVAL
        } else {
            constants::BASE_INTERVAL
        }
    }

    /// Unroll the algorithm over `input` into a complete trace
    pub fn generate(self, input: &Input) -> Trace {
        let nums = &input.nums;
        let trace = match self {
            Problem::TwoSum => match input.scalar {
                Some(target) => two_sum::generate(nums, target),
                None => Trace::invalid(
                    TwoSumState {
                        array: nums.clone(),
                        ..Default::default()
                    },
                    "Two Sum needs a target value.",
                ),
            },
            Problem::MaxMin => max_min::generate(nums),
            Problem::KthMaxMin => match input.scalar {
                Some(k) => kth_element::generate(nums, k),
                None => Trace::invalid(
                    KthState {
                        array: nums.clone(),
                        ..Default::default()
                    },
                    "Kth max/min needs a value for k.",
                ),
            },
            Problem::Sort012 => sort_012::generate(nums),
            Problem::ReverseArray => reverse::generate(nums),
            Problem::CyclicRotate => rotate::generate(nums),
            Problem::Union => union_intersection::union(nums, &input.second),
            Problem::Intersection => union_intersection::intersection(nums, &input.second),
            Problem::UnionIntersection => {
                if nums.is_empty() && input.second.is_empty() {
                    Trace::invalid(
                        MergeState::default(),
                        "Both arrays are empty; their union and intersection are empty.",
                    )
                } else {
                    union_intersection::generate(nums, &input.second)
                }
            }
            Problem::Kadane => kadane::generate(nums),
            Problem::MinJumps => min_jumps::generate(nums),
        };
        tracing::debug!(problem = self.id(), steps = trace.len(), "generated trace");
        trace
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Problem {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Problem::ALL
            .into_iter()
            .find(|p| p.id() == wanted)
            .ok_or_else(|| InputError::UnknownProblem(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_ids_round_trip() {
        for p in Problem::ALL {
            assert_eq!(p.id().parse::<Problem>(), Ok(p));
        }
        assert_eq!("TWO_SUM".parse::<Problem>(), Ok(Problem::TwoSum));
        assert!("bubble-sort".parse::<Problem>().is_err());
    }

    #[test]
    fn test_missing_scalar_is_single_step() {
        let trace = Problem::TwoSum.generate(&Input::new(vec![1, 2]));
        assert_eq!(trace.len(), 1);
        assert!(trace.last().is_complete);
    }
}
