// Scenario tests for the step trace generators

use algoviz::algorithms::{
    kadane, kth_element, max_min, min_jumps, reverse, rotate, sort_012, two_sum,
    union_intersection, Input, Problem,
};
use algoviz::step::{StepState, Trace, Value};

fn assert_single_terminal_step(trace: &Trace) {
    assert_eq!(trace.len(), 1, "expected one step, got {:#?}", trace);
    assert!(trace[0].is_complete);
}

#[test]
fn test_two_sum_finds_first_pair() {
    let trace = two_sum::generate(&[2, 7, 11, 15], 9);

    let solution = trace.terminal().expect("no terminal step");
    assert!(solution.is_solution);
    assert_eq!(solution.line, two_sum::FOUND);
    assert_eq!(solution.result, Some(Value::Array(vec![0, 1])));

    let last = trace.last();
    assert!(last.is_complete);
    assert_eq!(last.line, two_sum::RETURN_PAIR);
    assert_eq!(last.result, Some(Value::Array(vec![0, 1])));
}

#[test]
fn test_two_sum_line_sequence() {
    let lines: Vec<u32> = two_sum::generate(&[2, 7, 11, 15], 9)
        .iter()
        .map(|s| s.line)
        .collect();
    assert_eq!(
        lines,
        vec![
            two_sum::INIT_MAP,
            two_sum::CHECK_INDEX,
            two_sum::COMPLEMENT,
            two_sum::ADD_TO_MAP,
            two_sum::MAP_UPDATED,
            two_sum::CHECK_INDEX,
            two_sum::COMPLEMENT,
            two_sum::FOUND,
            two_sum::RETURN_PAIR,
        ]
    );
}

#[test]
fn test_two_sum_no_solution_is_terminal() {
    let trace = two_sum::generate(&[1, 2, 3], 100);
    let last = trace.last();
    assert!(last.is_complete);
    assert!(!last.is_solution);
    assert_eq!(last.line, two_sum::NO_SOLUTION);
    assert_eq!(last.result, Some(Value::Null));
}

#[test]
fn test_two_sum_map_grows_one_entry_per_miss() {
    let trace = two_sum::generate(&[1, 2, 3], 100);
    let sizes: Vec<usize> = trace
        .iter()
        .filter(|s| s.line == two_sum::MAP_UPDATED)
        .map(|s| match &s.state {
            StepState::TwoSum(st) => st.hash_map.len(),
            other => panic!("unexpected state {:?}", other),
        })
        .collect();
    assert_eq!(sizes, vec![1, 2, 3]);
}

#[test]
fn test_reverse_scenarios() {
    let trace = reverse::generate(&[1, 2, 3, 4, 5]);
    assert!(trace.last().is_complete);
    assert_eq!(trace.last().state.array(), &[5, 4, 3, 2, 1]);
    assert_eq!(trace[0].state.array(), &[1, 2, 3, 4, 5]);

    let single = reverse::generate(&[5]);
    assert_single_terminal_step(&single);
    assert_eq!(single[0].state.array(), &[5]);
}

#[test]
fn test_sort_012_scenario() {
    let input = [2, 0, 2, 1, 1, 0];
    let trace = sort_012::generate(&input);
    let last = trace.last();
    assert!(last.is_complete);
    assert_eq!(last.state.array(), &[0, 0, 1, 1, 2, 2]);
    assert_eq!(last.result, Some(Value::Array(vec![0, 0, 1, 1, 2, 2])));
}

#[test]
fn test_sort_012_rejects_other_values() {
    assert_single_terminal_step(&sort_012::generate(&[0, 3, 1]));
    assert_single_terminal_step(&sort_012::generate(&[]));
}

#[test]
fn test_kadane_scenario() {
    let trace = kadane::generate(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]);
    let last = trace.last();
    assert!(last.is_complete);
    assert_eq!(last.result, Some(Value::Int(6)));
    match &last.state {
        StepState::Kadane(s) => {
            assert_eq!(s.max_sum, 6);
            assert_eq!((s.start, s.end), (3, 6));
        }
        other => panic!("unexpected state {:?}", other),
    }
}

#[test]
fn test_min_jumps_scenario() {
    let trace = min_jumps::generate(&[2, 3, 1, 1, 4]);
    let last = trace.last();
    assert!(last.is_complete);
    assert_eq!(last.result, Some(Value::Int(2)));
    match &last.state {
        StepState::MinJumps(s) => assert_eq!(s.jumps, 2),
        other => panic!("unexpected state {:?}", other),
    }
}

#[test]
fn test_min_jumps_unreachable() {
    let trace = min_jumps::generate(&[1, 0, 5]);
    assert_eq!(trace.last().line, min_jumps::STUCK);
    assert_eq!(trace.last().result, Some(Value::Int(-1)));
}

#[test]
fn test_kth_scenario() {
    let trace = kth_element::generate(&[7, 10, 4, 3, 20, 15], 3);
    let last = trace.last();
    assert!(last.is_complete);
    assert_eq!(last.result, Some(Value::Array(vec![10, 7])));
    match &last.state {
        StepState::Kth(s) => {
            assert_eq!(s.kth_min, Some(7));
            assert_eq!(s.kth_max, Some(10));
            assert_eq!(s.array, vec![7, 10, 4, 3, 20, 15]);
        }
        other => panic!("unexpected state {:?}", other),
    }
}

#[test]
fn test_kth_out_of_range() {
    for k in [0, 7, -3] {
        let trace = kth_element::generate(&[7, 10, 4, 3, 20, 15], k);
        assert_single_terminal_step(&trace);
        assert_eq!(trace[0].line, kth_element::INVALID_K);
        assert_eq!(trace[0].result, Some(Value::Null));
    }
}

#[test]
fn test_max_min_and_rotate() {
    let trace = max_min::generate(&[3, 5, 1, 8, 2]);
    assert_eq!(trace.last().result, Some(Value::Array(vec![8, 1])));

    let trace = rotate::generate(&[1, 2, 3, 4, 5]);
    assert_eq!(trace.last().state.array(), &[5, 1, 2, 3, 4]);
    assert_single_terminal_step(&rotate::generate(&[]));
}

#[test]
fn test_union_and_intersection() {
    let union = union_intersection::union(&[1, 2, 3, 4, 5], &[1, 2, 3, 6, 7]);
    assert_eq!(
        union.last().result,
        Some(Value::Array(vec![1, 2, 3, 4, 5, 6, 7]))
    );

    let inter = union_intersection::intersection(&[1, 2, 2, 3], &[2, 2, 3, 4]);
    assert_eq!(inter.last().result, Some(Value::Array(vec![2, 3])));
}

#[test]
fn test_combined_trace_has_one_terminal_step() {
    let trace = union_intersection::generate(&[1, 2, 3, 4, 5], &[1, 2, 3, 6, 7]);
    let terminals: Vec<usize> = trace
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_terminal())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(terminals, vec![trace.len() - 1]);
    assert_eq!(trace.last().line, union_intersection::RETURN_BOTH);

    // intersection phase follows the union phase
    let first_inter = trace
        .iter()
        .position(|s| s.line == union_intersection::INTER_INIT)
        .expect("no intersection phase");
    assert!(trace
        .iter()
        .take(first_inter)
        .all(|s| s.line < union_intersection::INTER_INIT));
}

#[test]
fn test_problem_dispatch_handles_missing_scalar() {
    let trace = Problem::KthMaxMin.generate(&Input::new(vec![1, 2, 3]));
    assert_single_terminal_step(&trace);

    let trace = Problem::UnionIntersection.generate(&Input::default());
    assert_single_terminal_step(&trace);
}

#[test]
fn test_every_problem_generates_on_empty_input() {
    for problem in Problem::ALL {
        let trace = problem.generate(&Input::default().with_scalar(1));
        assert!(!trace.is_empty(), "{}", problem);
        assert!(trace.last().is_complete, "{}", problem);
    }
}
