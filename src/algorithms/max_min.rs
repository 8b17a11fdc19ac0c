//! Find the maximum and minimum in one pass
//!
//! Both comparisons run on every iteration; they are independent, so a single
//! element can never update both (it is either above the max or below the min
//! or neither).

use crate::step::state::MaxMinState;
use crate::step::{Trace, TraceRecorder, Value, Variables};

pub const INIT: u32 = 1;
pub const LOOP: u32 = 2;
pub const CHECK_MAX: u32 = 3;
pub const UPDATE_MAX: u32 = 4;
pub const CHECK_MIN: u32 = 5;
pub const UPDATE_MIN: u32 = 6;
pub const DONE: u32 = 7;

pub fn generate(nums: &[i64]) -> Trace {
    let Some(&first) = nums.first() else {
        return Trace::invalid(
            MaxMinState::default(),
            "The array is empty, so it has no maximum or minimum.",
        );
    };

    let mut state = MaxMinState {
        array: nums.to_vec(),
        index: Some(0),
        max: Some(first),
        min: Some(first),
    };
    let mut max_val = first;
    let mut min_val = first;
    let mut rec = TraceRecorder::new();

    let vars = |i: usize, max_val: i64, min_val: i64| {
        Variables::new()
            .with("i", i)
            .with("maxVal", max_val)
            .with("minVal", min_val)
    };

    rec.record(
        INIT,
        &state,
        vars(0, max_val, min_val),
        format!("Start with maxVal = minVal = nums[0] = {}.", first),
    );

    for (i, &num) in nums.iter().enumerate().skip(1) {
        state.index = Some(i);
        rec.record(
            LOOP,
            &state,
            vars(i, max_val, min_val),
            format!("Visit index {}: nums[{}] = {}.", i, i, num),
        );

        rec.record(
            CHECK_MAX,
            &state,
            vars(i, max_val, min_val).with("nums[i] > maxVal", num > max_val),
            format!("Is {} greater than maxVal {}? {}.", num, max_val, yes_no(num > max_val)),
        );
        if num > max_val {
            max_val = num;
            state.max = Some(max_val);
            rec.record(
                UPDATE_MAX,
                &state,
                vars(i, max_val, min_val),
                format!("New maximum: maxVal = {}.", max_val),
            );
        }

        rec.record(
            CHECK_MIN,
            &state,
            vars(i, max_val, min_val).with("nums[i] < minVal", num < min_val),
            format!("Is {} less than minVal {}? {}.", num, min_val, yes_no(num < min_val)),
        );
        if num < min_val {
            min_val = num;
            state.min = Some(min_val);
            rec.record(
                UPDATE_MIN,
                &state,
                vars(i, max_val, min_val),
                format!("New minimum: minVal = {}.", min_val),
            );
        }
    }

    state.index = None;
    rec.finish(
        DONE,
        &state,
        Variables::new()
            .with("maxVal", max_val)
            .with("minVal", min_val),
        format!("Done. Maximum = {}, minimum = {}.", max_val, min_val),
        Value::from(vec![max_val, min_val]),
    )
}

fn yes_no(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}
