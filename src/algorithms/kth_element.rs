//! Kth maximum and kth minimum by sorting

use crate::step::state::KthState;
use crate::step::{Trace, TraceRecorder, Value, Variables};

pub const VALIDATE: u32 = 1;
pub const INVALID_K: u32 = 2;
pub const SORT: u32 = 3;
pub const KTH_MIN: u32 = 4;
pub const KTH_MAX: u32 = 5;
pub const DONE: u32 = 6;

pub fn generate(nums: &[i64], k: i64) -> Trace {
    let len = nums.len() as i64;
    let mut state = KthState {
        array: nums.to_vec(),
        k,
        ..Default::default()
    };

    if k < 1 || k > len {
        let reason = if nums.is_empty() {
            "The array is empty".to_string()
        } else {
            format!("k must be between 1 and {}", len)
        };
        return TraceRecorder::new().finish(
            INVALID_K,
            &state,
            Variables::new().with("k", k).with("n", nums.len()),
            format!("{}, but k = {}. Nothing to select.", reason, k),
            Value::Null,
        );
    }

    let mut rec = TraceRecorder::new();
    rec.record(
        VALIDATE,
        &state,
        Variables::new().with("k", k).with("n", nums.len()),
        format!("k = {} is within 1..={}.", k, len),
    );

    let mut sorted = nums.to_vec();
    sorted.sort_unstable();
    state.sorted_array = Some(sorted.clone());
    rec.record(
        SORT,
        &state,
        Variables::new().with("sorted", sorted.clone()),
        "Sort the array in ascending order.",
    );

    let min_idx = (k - 1) as usize;
    let kth_min = sorted[min_idx];
    state.kth_min = Some(kth_min);
    rec.record(
        KTH_MIN,
        &state,
        Variables::new()
            .with("k - 1", min_idx)
            .with("kthMin", kth_min),
        format!("The {} smallest element sits at index {}: {}.", ordinal(k), min_idx, kth_min),
    );

    let max_idx = (len - k) as usize;
    let kth_max = sorted[max_idx];
    state.kth_max = Some(kth_max);
    rec.record(
        KTH_MAX,
        &state,
        Variables::new()
            .with("n - k", max_idx)
            .with("kthMax", kth_max),
        format!("The {} largest element sits at index {}: {}.", ordinal(k), max_idx, kth_max),
    );

    rec.finish(
        DONE,
        &state,
        Variables::new()
            .with("kthMax", kth_max)
            .with("kthMin", kth_min),
        format!("{} maximum = {}, {} minimum = {}.", ordinal(k), kth_max, ordinal(k), kth_min),
        Value::from(vec![kth_max, kth_min]),
    )
}

fn ordinal(n: i64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
