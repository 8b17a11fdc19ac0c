//! Reverse an array in place with two converging pointers

use crate::step::state::ReverseState;
use crate::step::{Trace, TraceRecorder, Value, Variables};

pub const INIT: u32 = 1;
pub const LOOP: u32 = 2;
pub const SWAP: u32 = 3;
pub const MOVE: u32 = 4;
pub const DONE: u32 = 5;

pub fn generate(nums: &[i64]) -> Trace {
    let mut state = ReverseState {
        array: nums.to_vec(),
        left: 0,
        right: nums.len().saturating_sub(1),
    };

    if nums.len() <= 1 {
        return TraceRecorder::new().finish(
            DONE,
            &state,
            Variables::new().with("n", nums.len()),
            "An array with at most one element is already its own reverse.",
            Value::from(nums),
        );
    }

    let mut rec = TraceRecorder::new();
    let vars = |s: &ReverseState| Variables::new().with("left", s.left).with("right", s.right);

    rec.record(
        INIT,
        &state,
        vars(&state),
        format!("left = 0, right = {}.", state.right),
    );

    while state.left < state.right {
        let (left, right) = (state.left, state.right);
        rec.record(
            LOOP,
            &state,
            vars(&state),
            format!("left ({}) < right ({}), keep going.", left, right),
        );

        state.array.swap(left, right);
        rec.record(
            SWAP,
            &state,
            vars(&state),
            format!(
                "Swap nums[{}] = {} with nums[{}] = {}.",
                left, state.array[right], right, state.array[left]
            ),
        );

        state.left += 1;
        state.right -= 1;
        rec.record(
            MOVE,
            &state,
            vars(&state),
            format!("Move inward: left = {}, right = {}.", state.left, state.right),
        );
    }

    let reversed = state.array.clone();
    rec.finish(
        DONE,
        &state,
        vars(&state),
        format!("Pointers met. Reversed: {}.", Value::from(reversed.clone())),
        Value::from(reversed),
    )
}
