//! Union and intersection of two sorted arrays
//!
//! Both walks use the classic two-pointer merge. The union de-duplicates
//! against the last value it pushed and appends whatever remains of the
//! unexhausted array; the intersection only pushes on equality and has no
//! trailing phase.
//!
//! The union lines and the intersection lines live in two different
//! functions of the same code sample, hence the two separate line ranges.

use crate::step::state::{MergePhase, MergeState};
use crate::step::{Step, StepState, Trace, TraceRecorder, Value, Variables};

pub const UNION_INIT: u32 = 1;
pub const UNION_TAKE_FIRST: u32 = 2;
pub const UNION_TAKE_SECOND: u32 = 3;
pub const UNION_EQUAL: u32 = 4;
pub const UNION_REST_FIRST: u32 = 5;
pub const UNION_REST_SECOND: u32 = 6;
pub const UNION_DONE: u32 = 7;

pub const INTER_INIT: u32 = 11;
pub const INTER_SKIP_FIRST: u32 = 12;
pub const INTER_SKIP_SECOND: u32 = 13;
pub const INTER_EQUAL: u32 = 14;
pub const INTER_DONE: u32 = 15;

pub const RETURN_BOTH: u32 = 20;

/// Full union walk
pub fn union(arr1: &[i64], arr2: &[i64]) -> Trace {
    union_walk(MergeState {
        arr1: arr1.to_vec(),
        arr2: arr2.to_vec(),
        ..Default::default()
    })
    .0
}

/// Full intersection walk
pub fn intersection(arr1: &[i64], arr2: &[i64]) -> Trace {
    intersection_walk(MergeState {
        arr1: arr1.to_vec(),
        arr2: arr2.to_vec(),
        phase: MergePhase::Intersection,
        ..Default::default()
    })
    .0
}

/// Union trace, then intersection trace, then one closing return step
pub fn generate(arr1: &[i64], arr2: &[i64]) -> Trace {
    let (union_trace, after_union) = union_walk(MergeState {
        arr1: arr1.to_vec(),
        arr2: arr2.to_vec(),
        ..Default::default()
    });

    let (inter_trace, mut state) = intersection_walk(MergeState {
        i: 0,
        j: 0,
        phase: MergePhase::Intersection,
        ..after_union
    });

    state.phase = MergePhase::Done;
    let union_val = Value::from(state.union.clone());
    let inter_val = Value::from(state.intersection.clone());
    let finish = Step {
        line: RETURN_BOTH,
        variables: Variables::new()
            .with("union", union_val.clone())
            .with("intersection", inter_val.clone()),
        description: format!("Return union {} and intersection {}.", union_val, inter_val),
        result: Some(Value::Text(format!(
            "union={} intersection={}",
            union_val, inter_val
        ))),
        state: StepState::Merge(state),
        is_complete: true,
        is_solution: false,
    };

    Trace::concat(vec![union_trace, inter_trace], finish)
}

/// Push `value` unless it repeats the last pushed value
fn push_unique(out: &mut Vec<i64>, value: i64) -> bool {
    if out.last() == Some(&value) {
        return false;
    }
    out.push(value);
    true
}

fn pointer_vars(s: &MergeState) -> Variables {
    Variables::new()
        .with("i", s.i)
        .with("j", s.j)
        .with("arr1[i]", s.arr1.get(s.i).copied())
        .with("arr2[j]", s.arr2.get(s.j).copied())
}

fn pushed_or_skipped(pushed: bool, value: i64, target: &str) -> String {
    if pushed {
        format!("push {} to {}", value, target)
    } else {
        format!("{} is already the last {} entry, skip it", value, target)
    }
}

fn union_walk(mut state: MergeState) -> (Trace, MergeState) {
    let mut rec = TraceRecorder::new();
    rec.record(
        UNION_INIT,
        &state,
        pointer_vars(&state),
        "Union: start both pointers at 0 with an empty result.",
    );

    while state.i < state.arr1.len() && state.j < state.arr2.len() {
        let (a, b) = (state.arr1[state.i], state.arr2[state.j]);
        if a < b {
            let pushed = push_unique(&mut state.union, a);
            state.i += 1;
            rec.record(
                UNION_TAKE_FIRST,
                &state,
                pointer_vars(&state),
                format!("{} < {}: {}, advance i.", a, b, pushed_or_skipped(pushed, a, "union")),
            );
        } else if a > b {
            let pushed = push_unique(&mut state.union, b);
            state.j += 1;
            rec.record(
                UNION_TAKE_SECOND,
                &state,
                pointer_vars(&state),
                format!("{} > {}: {}, advance j.", a, b, pushed_or_skipped(pushed, b, "union")),
            );
        } else {
            let pushed = push_unique(&mut state.union, a);
            state.i += 1;
            state.j += 1;
            rec.record(
                UNION_EQUAL,
                &state,
                pointer_vars(&state),
                format!(
                    "{} == {}: {}, advance both pointers.",
                    a,
                    b,
                    pushed_or_skipped(pushed, a, "union")
                ),
            );
        }
    }

    while state.i < state.arr1.len() {
        let a = state.arr1[state.i];
        let pushed = push_unique(&mut state.union, a);
        state.i += 1;
        rec.record(
            UNION_REST_FIRST,
            &state,
            pointer_vars(&state),
            format!("arr2 is exhausted: {}.", pushed_or_skipped(pushed, a, "union")),
        );
    }

    while state.j < state.arr2.len() {
        let b = state.arr2[state.j];
        let pushed = push_unique(&mut state.union, b);
        state.j += 1;
        rec.record(
            UNION_REST_SECOND,
            &state,
            pointer_vars(&state),
            format!("arr1 is exhausted: {}.", pushed_or_skipped(pushed, b, "union")),
        );
    }

    let result = Value::from(state.union.clone());
    let trace = rec.finish(
        UNION_DONE,
        &state,
        Variables::new().with("union", result.clone()),
        format!("Union complete: {}.", result),
        result,
    );
    (trace, state)
}

fn intersection_walk(mut state: MergeState) -> (Trace, MergeState) {
    let mut rec = TraceRecorder::new();
    rec.record(
        INTER_INIT,
        &state,
        pointer_vars(&state),
        "Intersection: reset both pointers to 0 with an empty result.",
    );

    while state.i < state.arr1.len() && state.j < state.arr2.len() {
        let (a, b) = (state.arr1[state.i], state.arr2[state.j]);
        if a < b {
            state.i += 1;
            rec.record(
                INTER_SKIP_FIRST,
                &state,
                pointer_vars(&state),
                format!("{} < {}: {} cannot be common, advance i.", a, b, a),
            );
        } else if a > b {
            state.j += 1;
            rec.record(
                INTER_SKIP_SECOND,
                &state,
                pointer_vars(&state),
                format!("{} > {}: {} cannot be common, advance j.", a, b, b),
            );
        } else {
            let pushed = push_unique(&mut state.intersection, a);
            state.i += 1;
            state.j += 1;
            rec.record(
                INTER_EQUAL,
                &state,
                pointer_vars(&state),
                format!(
                    "{} == {}: {}, advance both pointers.",
                    a,
                    b,
                    pushed_or_skipped(pushed, a, "intersection")
                ),
            );
        }
    }

    let result = Value::from(state.intersection.clone());
    let trace = rec.finish(
        INTER_DONE,
        &state,
        Variables::new().with("intersection", result.clone()),
        format!("Intersection complete: {}.", result),
        result,
    );
    (trace, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_dedups_across_both_arrays() {
        let trace = union(&[1, 1, 2, 4], &[2, 3, 4, 4, 5]);
        assert_eq!(trace.last().result, Some(Value::Array(vec![1, 2, 3, 4, 5])));
    }

    #[test]
    fn test_intersection_dedups_adjacent_matches() {
        let trace = intersection(&[1, 2, 2, 3], &[2, 2, 3, 4]);
        assert_eq!(trace.last().result, Some(Value::Array(vec![2, 3])));
    }

    #[test]
    fn test_intersection_has_no_trailing_phase() {
        let trace = intersection(&[1], &[5, 6, 7]);
        assert!(trace
            .iter()
            .all(|s| s.line != UNION_REST_FIRST && s.line != UNION_REST_SECOND));
        assert_eq!(trace.last().result, Some(Value::Array(Vec::new())));
    }

    #[test]
    fn test_pointer_variables_match_state() {
        let trace = generate(&[1, 2, 4, 6], &[2, 3, 4, 5]);
        for step in trace.iter() {
            let StepState::Merge(state) = &step.state else {
                panic!("unexpected state {:?}", step.state);
            };
            if let Some(i) = step.variables.get("i") {
                assert_eq!(i, &Value::from(state.i), "{}", step.description);
                assert_eq!(step.variables.get("j"), Some(&Value::from(state.j)));
                assert_eq!(
                    step.variables.get("arr1[i]"),
                    Some(&Value::from(state.arr1.get(state.i).copied()))
                );
            }
        }
    }

    #[test]
    fn test_combined_trace_has_one_terminal_step() {
        let combined = generate(&[1, 2, 3], &[2, 3, 4]);
        let u = union(&[1, 2, 3], &[2, 3, 4]);
        let i = intersection(&[1, 2, 3], &[2, 3, 4]);

        assert_eq!(combined.len(), u.len() + i.len() + 1);
        assert_eq!(combined.iter().filter(|s| s.is_terminal()).count(), 1);
        assert_eq!(combined.last().line, RETURN_BOTH);
    }
}
