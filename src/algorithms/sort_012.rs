//! Sort an array of 0s, 1s and 2s (Dutch national flag)
//!
//! Three pointers: everything before `low` is 0, everything in `low..mid` is 1,
//! everything after `high` is 2. On a 2 the swapped-in value at `mid` has not
//! been examined yet, so `mid` stays put.

use crate::step::state::Sort012State;
use crate::step::{Trace, TraceRecorder, Value, Variables};

pub const INIT: u32 = 1;
pub const LOOP: u32 = 2;
pub const IS_ZERO: u32 = 3;
pub const SWAP_LOW: u32 = 4;
pub const IS_ONE: u32 = 5;
pub const SWAP_HIGH: u32 = 6;
pub const DONE: u32 = 7;

pub fn generate(nums: &[i64]) -> Trace {
    if nums.is_empty() {
        return Trace::invalid(Sort012State::default(), "The array is empty; nothing to sort.");
    }
    if let Some((idx, bad)) = nums.iter().enumerate().find(|(_, v)| !(0..=2).contains(*v)) {
        return Trace::invalid(
            Sort012State {
                array: nums.to_vec(),
                high: nums.len() as i64 - 1,
                ..Default::default()
            },
            format!(
                "Invalid input: nums[{}] = {}. Only 0, 1 and 2 are allowed.",
                idx, bad
            ),
        );
    }

    let mut state = Sort012State {
        array: nums.to_vec(),
        low: 0,
        mid: 0,
        high: nums.len() as i64 - 1,
    };
    let mut rec = TraceRecorder::new();

    let vars = |s: &Sort012State| {
        Variables::new()
            .with("low", s.low)
            .with("mid", s.mid)
            .with("high", s.high)
    };

    rec.record(
        INIT,
        &state,
        vars(&state),
        format!("low = 0, mid = 0, high = {}.", state.high),
    );

    while (state.mid as i64) <= state.high {
        let mid = state.mid;
        let value = state.array[mid];
        rec.record(
            LOOP,
            &state,
            vars(&state).with("nums[mid]", value),
            format!(
                "mid ({}) <= high ({}), examine nums[{}] = {}.",
                mid, state.high, mid, value
            ),
        );

        match value {
            0 => {
                rec.record(
                    IS_ZERO,
                    &state,
                    vars(&state).with("nums[mid]", value),
                    "It is a 0: it belongs in the low region.",
                );
                let low = state.low;
                state.array.swap(low, mid);
                state.low += 1;
                state.mid += 1;
                rec.record(
                    SWAP_LOW,
                    &state,
                    vars(&state),
                    format!(
                        "Swap nums[{}] and nums[{}], then advance low and mid.",
                        low, mid
                    ),
                );
            }
            1 => {
                state.mid += 1;
                rec.record(
                    IS_ONE,
                    &state,
                    vars(&state),
                    "It is a 1: already in place, advance mid.",
                );
            }
            _ => {
                let high = state.high as usize;
                state.array.swap(mid, high);
                state.high -= 1;
                rec.record(
                    SWAP_HIGH,
                    &state,
                    vars(&state),
                    format!(
                        "It is a 2: swap nums[{}] and nums[{}], then shrink high. mid stays to examine the swapped value.",
                        mid, high
                    ),
                );
            }
        }
    }

    let sorted = state.array.clone();
    rec.finish(
        DONE,
        &state,
        vars(&state),
        format!("mid passed high. Sorted: {}.", Value::from(sorted.clone())),
        Value::from(sorted),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_domain_values() {
        let trace = generate(&[0, 1, 3]);
        assert_eq!(trace.len(), 1);
        assert!(trace.last().is_complete);
        assert!(trace.last().description.contains("nums[2] = 3"));
    }

    #[test]
    fn test_single_two_drives_high_negative() {
        let trace = generate(&[2]);
        match &trace.last().state {
            crate::step::StepState::Sort012(s) => assert_eq!(s.high, -1),
            other => panic!("unexpected state {:?}", other),
        }
        assert_eq!(trace.last().result, Some(Value::Array(vec![2])));
    }
}
