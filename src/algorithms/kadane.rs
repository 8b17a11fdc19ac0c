//! Kadane's maximum subarray
//!
//! Restart the running subarray only when the element alone is strictly
//! better than extending; replace the best subarray only on a strictly larger
//! sum, so the earliest maximal subarray is kept.

use crate::step::state::KadaneState;
use crate::step::{Trace, TraceRecorder, Value, Variables};

pub const INIT: u32 = 1;
pub const COMPARE: u32 = 2;
pub const RESTART: u32 = 3;
pub const EXTEND: u32 = 4;
pub const CHECK_MAX: u32 = 5;
pub const UPDATE_MAX: u32 = 6;
pub const DONE: u32 = 7;

pub fn generate(nums: &[i64]) -> Trace {
    let Some(&first) = nums.first() else {
        return Trace::invalid(
            KadaneState::default(),
            "The array is empty, so there is no subarray to sum.",
        );
    };

    let mut state = KadaneState {
        array: nums.to_vec(),
        index: Some(0),
        current_sum: first,
        max_sum: first,
        ..Default::default()
    };
    let mut rec = TraceRecorder::new();
    let mut saturated = false;

    let vars = |s: &KadaneState| {
        Variables::new()
            .with("i", s.index)
            .with("currentSum", s.current_sum)
            .with("maxSum", s.max_sum)
            .with("subarray", format!("[{}..={}]", s.start, s.end))
    };

    rec.record(
        INIT,
        &state,
        vars(&state),
        format!("currentSum = maxSum = nums[0] = {}.", first),
    );

    for (i, &num) in nums.iter().enumerate().skip(1) {
        state.index = Some(i);
        // Running sums clamp at the i64 bounds
        let capped = state.current_sum.checked_add(num).is_none();
        let extended = state.current_sum.saturating_add(num);
        saturated |= capped;
        let restart = num > extended;
        rec.record(
            COMPARE,
            &state,
            vars(&state)
                .with("nums[i]", num)
                .with("currentSum + nums[i]", extended),
            format!(
                "Index {}: is nums[i] = {} greater than currentSum + nums[i] = {}{}? {}.",
                i,
                num,
                extended,
                if capped { " (capped at the integer limit)" } else { "" },
                if restart { "Yes" } else { "No" }
            ),
        );

        if restart {
            state.current_sum = num;
            state.temp_start = i;
            rec.record(
                RESTART,
                &state,
                vars(&state),
                format!("Start a new subarray at index {}: currentSum = {}.", i, num),
            );
        } else {
            state.current_sum = extended;
            rec.record(
                EXTEND,
                &state,
                vars(&state),
                format!("Extend the current subarray: currentSum = {}.", extended),
            );
        }

        let improved = state.current_sum > state.max_sum;
        rec.record(
            CHECK_MAX,
            &state,
            vars(&state),
            format!(
                "Is currentSum {} greater than maxSum {}? {}.",
                state.current_sum,
                state.max_sum,
                if improved { "Yes" } else { "No" }
            ),
        );

        if improved {
            state.max_sum = state.current_sum;
            state.start = state.temp_start;
            state.end = i;
            rec.record(
                UPDATE_MAX,
                &state,
                vars(&state),
                format!(
                    "New best: maxSum = {} for subarray [{}..={}].",
                    state.max_sum, state.start, state.end
                ),
            );
        }
    }

    state.index = None;
    let best = &state.array[state.start..=state.end];
    let mut description = format!(
        "Maximum subarray sum is {} from {}.",
        state.max_sum,
        Value::from(best)
    );
    if saturated {
        description.push_str(" Some running sums were capped at the integer limit.");
    }
    let max_sum = state.max_sum;
    rec.finish(DONE, &state, vars(&state), description, Value::Int(max_sum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepState;

    fn bounds(trace: &Trace) -> (usize, usize) {
        match &trace.last().state {
            StepState::Kadane(s) => (s.start, s.end),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_all_negative_picks_largest_element() {
        let trace = generate(&[-3, -1, -2]);
        assert_eq!(trace.last().result, Some(Value::Int(-1)));
        assert_eq!(bounds(&trace), (1, 1));
    }

    #[test]
    fn test_ties_keep_earliest_subarray() {
        // [2] and later [2] both sum to 2
        let trace = generate(&[2, -5, 2]);
        assert_eq!(trace.last().result, Some(Value::Int(2)));
        assert_eq!(bounds(&trace), (0, 0));
    }

    #[test]
    fn test_overflowing_sum_is_reported_as_capped() {
        let trace = generate(&[i64::MAX, 1, -5]);
        assert_eq!(trace.last().result, Some(Value::Int(i64::MAX)));
        let compare = trace
            .iter()
            .find(|s| s.line == COMPARE)
            .expect("compare step");
        assert!(compare.description.contains("capped at the integer limit"));
        assert!(trace.last().description.contains("capped"));
    }

    #[test]
    fn test_in_range_sums_are_not_flagged() {
        let trace = generate(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]);
        assert!(trace.iter().all(|s| !s.description.contains("capped")));
    }

    #[test]
    fn test_equal_restart_prefers_extending() {
        // at index 1: nums[1] = 3, currentSum + nums[1] = 0 + 3 = 3, not strictly greater
        let trace = generate(&[0, 3]);
        assert!(trace.iter().any(|s| s.line == EXTEND));
        assert!(trace.iter().all(|s| s.line != RESTART));
        assert_eq!(bounds(&trace), (0, 1));
    }
}
