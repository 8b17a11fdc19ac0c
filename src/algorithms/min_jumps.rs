//! Minimum number of jumps to reach the last index (greedy range walk)
//!
//! `current_end` is the far edge of the range reachable with `jumps` jumps;
//! `farthest` is the far edge reachable with one more. Reaching
//! `current_end` forces a jump.

use crate::step::state::MinJumpsState;
use crate::step::{Trace, TraceRecorder, Value, Variables};

pub const SHORT_CIRCUIT: u32 = 1;
pub const INIT: u32 = 2;
pub const EXTEND_REACH: u32 = 3;
pub const RANGE_END: u32 = 4;
pub const JUMP: u32 = 5;
pub const ARRIVED: u32 = 6;
pub const DONE: u32 = 7;
pub const STUCK: u32 = 8;

pub fn generate(nums: &[i64]) -> Trace {
    let n = nums.len();
    let mut state = MinJumpsState {
        array: nums.to_vec(),
        jump_path: vec![0],
        ..Default::default()
    };

    if n <= 1 {
        return TraceRecorder::new().finish(
            SHORT_CIRCUIT,
            &state,
            Variables::new().with("n", n).with("jumps", 0usize),
            "Already standing on the last index: 0 jumps needed.",
            Value::Int(0),
        );
    }

    let mut rec = TraceRecorder::new();
    let vars = |s: &MinJumpsState| {
        Variables::new()
            .with("i", s.index)
            .with("jumps", s.jumps)
            .with("currentEnd", s.current_end)
            .with("farthest", s.farthest)
    };

    rec.record(
        INIT,
        &state,
        vars(&state),
        "jumps = 0, currentEnd = 0, farthest = 0.",
    );

    for i in 0..n - 1 {
        state.index = Some(i);
        let reach = (i as i64).saturating_add(nums[i]);
        if reach > state.farthest as i64 {
            state.farthest = reach as usize;
        }
        rec.record(
            EXTEND_REACH,
            &state,
            vars(&state).with("i + nums[i]", reach),
            format!(
                "From index {} we can reach {}; farthest = {}.",
                i, reach, state.farthest
            ),
        );

        if i != state.current_end {
            continue;
        }

        rec.record(
            RANGE_END,
            &state,
            vars(&state),
            format!("i == currentEnd ({}): the current range is used up, we must jump.", i),
        );

        if state.farthest <= i {
            return rec.finish(
                STUCK,
                &state,
                vars(&state),
                format!("farthest ({}) does not pass index {}: the last index is unreachable.", state.farthest, i),
                Value::Int(-1),
            );
        }

        state.jumps += 1;
        state.current_end = state.farthest;
        state.jump_path.push(state.current_end);
        rec.record(
            JUMP,
            &state,
            vars(&state),
            format!(
                "Jump #{}: currentEnd = farthest = {}.",
                state.jumps, state.current_end
            ),
        );

        if state.current_end >= n - 1 {
            rec.record(
                ARRIVED,
                &state,
                vars(&state),
                format!("currentEnd ({}) covers the last index {}. Stop.", state.current_end, n - 1),
            );
            break;
        }
    }

    state.index = None;
    let jumps = state.jumps;
    rec.finish(
        DONE,
        &state,
        vars(&state),
        format!("Minimum jumps: {}.", jumps),
        Value::Int(jumps as i64),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepState;

    #[test]
    fn test_jump_path_records_boundaries() {
        let trace = generate(&[2, 3, 1, 1, 4]);
        match &trace.last().state {
            StepState::MinJumps(s) => assert_eq!(s.jump_path, vec![0, 2, 4]),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_unreachable_end() {
        let trace = generate(&[1, 0, 3]);
        assert_eq!(trace.last().line, STUCK);
        assert_eq!(trace.last().result, Some(Value::Int(-1)));
    }

    #[test]
    fn test_single_element_needs_no_jumps() {
        let trace = generate(&[7]);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.last().result, Some(Value::Int(0)));
    }
}
