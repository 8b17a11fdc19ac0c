//! Cyclically rotate an array right by one position

use crate::step::state::RotateState;
use crate::step::{Trace, TraceRecorder, Value, Variables};

pub const SAVE_LAST: u32 = 1;
pub const LOOP: u32 = 2;
pub const SHIFT: u32 = 3;
pub const PLACE_LAST: u32 = 4;
pub const DONE: u32 = 5;

pub fn generate(nums: &[i64]) -> Trace {
    let mut state = RotateState {
        array: nums.to_vec(),
        index: None,
        last: None,
    };

    let n = nums.len();
    if n <= 1 {
        return TraceRecorder::new().finish(
            DONE,
            &state,
            Variables::new().with("n", n),
            "Rotating an array with at most one element changes nothing.",
            Value::from(nums),
        );
    }

    let mut rec = TraceRecorder::new();
    let last = state.array[n - 1];
    state.last = Some(last);
    rec.record(
        SAVE_LAST,
        &state,
        Variables::new().with("n", n).with("last", last),
        format!("Save the last element: last = nums[{}] = {}.", n - 1, last),
    );

    for i in (1..n).rev() {
        state.index = Some(i);
        rec.record(
            LOOP,
            &state,
            Variables::new().with("i", i).with("last", last),
            format!("i = {}: shift nums[{}] one position right.", i, i - 1),
        );

        state.array[i] = state.array[i - 1];
        rec.record(
            SHIFT,
            &state,
            Variables::new().with("i", i).with("nums[i]", state.array[i]),
            format!("nums[{}] = nums[{}] = {}.", i, i - 1, state.array[i]),
        );
    }

    state.index = Some(0);
    state.array[0] = last;
    rec.record(
        PLACE_LAST,
        &state,
        Variables::new().with("last", last),
        format!("Place the saved value at the front: nums[0] = {}.", last),
    );

    state.index = None;
    let rotated = state.array.clone();
    rec.finish(
        DONE,
        &state,
        Variables::new().with("last", last),
        format!("Rotation complete: {}.", Value::from(rotated.clone())),
        Value::from(rotated),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotates_right_by_one() {
        let trace = generate(&[1, 2, 3, 4, 5]);
        assert_eq!(trace.last().result, Some(Value::Array(vec![5, 1, 2, 3, 4])));
    }

    #[test]
    fn test_shift_order_descends() {
        let trace = generate(&[1, 2, 3]);
        let visited: Vec<i64> = trace
            .iter()
            .filter(|s| s.line == LOOP)
            .filter_map(|s| s.variables.get("i").and_then(|v| v.as_int()))
            .collect();
        assert_eq!(visited, vec![2, 1]);
    }
}
