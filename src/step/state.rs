//! Algorithm-specific snapshot shapes
//!
//! Every generator keeps one of these structs as its live working state and
//! clones it into each recorded [`Step`](super::Step). [`StepState`] is the
//! closed set of shapes the viewer knows how to draw.

use rustc_hash::FxHashMap;

/// Two Sum: the input, the running value → index map and the current probe
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TwoSumState {
    pub array: Vec<i64>,
    pub target: i64,
    pub index: Option<usize>,
    pub complement: Option<i64>,
    pub hash_map: FxHashMap<i64, usize>,
}

/// Find max/min: running extremes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MaxMinState {
    pub array: Vec<i64>,
    pub index: Option<usize>,
    pub max: Option<i64>,
    pub min: Option<i64>,
}

/// Kth max/min: the input, its sorted copy and the two answers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KthState {
    pub array: Vec<i64>,
    pub k: i64,
    pub sorted_array: Option<Vec<i64>>,
    pub kth_min: Option<i64>,
    pub kth_max: Option<i64>,
}

/// Dutch national flag pointers.
///
/// `high` is signed: it drops to -1 when the last unexamined slot held a 2.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sort012State {
    pub array: Vec<i64>,
    pub low: usize,
    pub mid: usize,
    pub high: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReverseState {
    pub array: Vec<i64>,
    pub left: usize,
    pub right: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RotateState {
    pub array: Vec<i64>,
    pub index: Option<usize>,
    pub last: Option<i64>,
}

/// Which half of the union/intersection walk a merge step belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePhase {
    #[default]
    Union,
    Intersection,
    Done,
}

/// Merge walk over two sorted arrays
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeState {
    pub arr1: Vec<i64>,
    pub arr2: Vec<i64>,
    pub i: usize,
    pub j: usize,
    pub union: Vec<i64>,
    pub intersection: Vec<i64>,
    pub phase: MergePhase,
}

/// Kadane running sums plus the best subarray bounds seen so far
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KadaneState {
    pub array: Vec<i64>,
    pub index: Option<usize>,
    pub current_sum: i64,
    pub max_sum: i64,
    pub start: usize,
    pub end: usize,
    pub temp_start: usize,
}

/// Greedy jump-range walk
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MinJumpsState {
    pub array: Vec<i64>,
    pub index: Option<usize>,
    pub jumps: usize,
    pub current_end: usize,
    pub farthest: usize,
    pub jump_path: Vec<usize>,
}

/// Snapshot carried by a step, one variant per algorithm family
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepState {
    TwoSum(TwoSumState),
    MaxMin(MaxMinState),
    Kth(KthState),
    Sort012(Sort012State),
    Reverse(ReverseState),
    Rotate(RotateState),
    Merge(MergeState),
    Kadane(KadaneState),
    MinJumps(MinJumpsState),
}

impl StepState {
    /// The primary array shown for this snapshot
    pub fn array(&self) -> &[i64] {
        match self {
            StepState::TwoSum(s) => &s.array,
            StepState::MaxMin(s) => &s.array,
            StepState::Kth(s) => s.sorted_array.as_deref().unwrap_or(&s.array),
            StepState::Sort012(s) => &s.array,
            StepState::Reverse(s) => &s.array,
            StepState::Rotate(s) => &s.array,
            StepState::Merge(s) => &s.arr1,
            StepState::Kadane(s) => &s.array,
            StepState::MinJumps(s) => &s.array,
        }
    }

    /// Named index markers into [`StepState::array`], in display order
    pub fn pointers(&self) -> Vec<(&'static str, usize)> {
        let mut out = Vec::new();
        match self {
            StepState::TwoSum(s) => out.extend(s.index.map(|i| ("i", i))),
            StepState::MaxMin(s) => out.extend(s.index.map(|i| ("i", i))),
            StepState::Kth(s) => {
                let len = s.array.len() as i64;
                if s.sorted_array.is_some() && (1..=len).contains(&s.k) {
                    out.push(("k-min", (s.k - 1) as usize));
                    out.push(("k-max", (len - s.k) as usize));
                }
            }
            StepState::Sort012(s) if !s.array.is_empty() => {
                out.push(("low", s.low));
                out.push(("mid", s.mid));
                if s.high >= 0 {
                    out.push(("high", s.high as usize));
                }
            }
            StepState::Reverse(s) if !s.array.is_empty() => {
                out.push(("left", s.left));
                out.push(("right", s.right));
            }
            StepState::Rotate(s) => out.extend(s.index.map(|i| ("i", i))),
            StepState::Merge(s) => out.push(("i", s.i)),
            StepState::Kadane(s) => out.extend(s.index.map(|i| ("i", i))),
            StepState::MinJumps(s) => {
                out.extend(s.index.map(|i| ("i", i)));
                if !s.array.is_empty() {
                    out.push(("end", s.current_end));
                }
            }
            _ => {}
        }
        out.retain(|&(_, idx)| idx < self.array().len());
        out
    }

    /// Secondary sequences worth showing under the main array
    pub fn extras(&self) -> Vec<(&'static str, Vec<i64>)> {
        match self {
            StepState::Kth(s) => vec![("input", s.array.clone())],
            StepState::Merge(s) => vec![
                ("arr2", s.arr2.clone()),
                ("union", s.union.clone()),
                ("intersection", s.intersection.clone()),
            ],
            StepState::MinJumps(s) => vec![(
                "jump path",
                s.jump_path.iter().map(|&i| i as i64).collect(),
            )],
            StepState::TwoSum(s) => {
                let mut pairs: Vec<(&i64, &usize)> = s.hash_map.iter().collect();
                pairs.sort_by_key(|&(_, &idx)| idx);
                vec![("map keys", pairs.into_iter().map(|(&k, _)| k).collect())]
            }
            _ => Vec::new(),
        }
    }
}

macro_rules! impl_from_state {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for StepState {
                fn from(state: $ty) -> Self {
                    StepState::$variant(state)
                }
            }
        )*
    };
}

impl_from_state! {
    TwoSumState => TwoSum,
    MaxMinState => MaxMin,
    KthState => Kth,
    Sort012State => Sort012,
    ReverseState => Reverse,
    RotateState => Rotate,
    MergeState => Merge,
    KadaneState => Kadane,
    MinJumpsState => MinJumps,
}
