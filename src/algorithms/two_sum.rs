//! Two Sum with a value → index hash map
//!
//! Single left-to-right pass. For each index the trace shows the probe, the
//! complement computation, and then either the match (first match wins and
//! the scan stops) or the insertion of the current value into the map.

use crate::step::state::TwoSumState;
use crate::step::{Trace, TraceRecorder, Value, Variables};

pub const INIT_MAP: u32 = 1;
pub const CHECK_INDEX: u32 = 2;
pub const COMPLEMENT: u32 = 3;
pub const FOUND: u32 = 4;
pub const RETURN_PAIR: u32 = 5;
pub const ADD_TO_MAP: u32 = 6;
pub const MAP_UPDATED: u32 = 7;
pub const NO_SOLUTION: u32 = 8;

pub fn generate(nums: &[i64], target: i64) -> Trace {
    if nums.is_empty() {
        return Trace::invalid(
            TwoSumState {
                target,
                ..Default::default()
            },
            "The array is empty, so no pair can add up to the target.",
        );
    }

    let mut state = TwoSumState {
        array: nums.to_vec(),
        target,
        ..Default::default()
    };
    let mut rec = TraceRecorder::new();

    rec.record(
        INIT_MAP,
        &state,
        Variables::new().with("target", target),
        format!("Create an empty hash map. We are looking for two numbers that add up to {}.", target),
    );

    for (i, &num) in nums.iter().enumerate() {
        state.index = Some(i);
        state.complement = None;
        rec.record(
            CHECK_INDEX,
            &state,
            Variables::new().with("i", i).with("nums[i]", num),
            format!("Check index {}: nums[{}] = {}.", i, i, num),
        );

        // No i64 complement means no partner exists for this value
        let complement = target.checked_sub(num);
        state.complement = complement;
        let vars = Variables::new()
            .with("i", i)
            .with("nums[i]", num)
            .with("complement", complement);
        let narration = match complement {
            Some(c) => format!("complement = {} - {} = {}.", target, num, c),
            None => format!(
                "{} - {} is outside the integer range, so nums[{}] has no partner.",
                target, num, i
            ),
        };
        rec.record(COMPLEMENT, &state, vars.clone(), narration);

        let earlier = complement.and_then(|c| state.hash_map.get(&c).copied());
        if let (Some(complement), Some(earlier)) = (complement, earlier) {
            let pair = vec![earlier as i64, i as i64];
            rec.record_solution(
                FOUND,
                &state,
                vars.clone().with("seen[complement]", earlier),
                format!(
                    "{} is already in the map at index {}: nums[{}] + nums[{}] = {} + {} = {}.",
                    complement, earlier, earlier, i, complement, num, target
                ),
                Value::from(pair.clone()),
            );
            return rec.finish(
                RETURN_PAIR,
                &state,
                vars.with("result", pair.clone()),
                format!("Return [{}, {}].", earlier, i),
                Value::from(pair),
            );
        }

        rec.record(
            ADD_TO_MAP,
            &state,
            vars.clone(),
            match complement {
                Some(c) => format!(
                    "{} is not in the map yet. Store nums[{}] = {} with index {}.",
                    c, i, num, i
                ),
                None => format!("Store nums[{}] = {} with index {}.", i, num, i),
            },
        );
        state.hash_map.insert(num, i);
        rec.record(
            MAP_UPDATED,
            &state,
            vars.with("map size", state.hash_map.len()),
            format!("Map updated: {} → {}. Move on to the next index.", num, i),
        );
    }

    state.index = None;
    state.complement = None;
    rec.finish(
        NO_SOLUTION,
        &state,
        Variables::new().with("target", target),
        format!("Scanned every index. No two numbers add up to {}.", target),
        Value::Null,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_is_followed_by_return() {
        let trace = generate(&[3, 2, 4], 6);
        let n = trace.len();
        assert!(trace[n - 2].is_solution);
        assert_eq!(trace[n - 2].line, FOUND);
        assert!(trace[n - 1].is_complete);
        assert_eq!(trace.last().result, Some(Value::Array(vec![1, 2])));
    }

    #[test]
    fn test_duplicate_values_pair_with_earlier_index() {
        let trace = generate(&[3, 3], 6);
        assert_eq!(trace.last().result, Some(Value::Array(vec![0, 1])));
    }

    #[test]
    fn test_overflowing_complement_never_matches() {
        let trace = generate(&[i64::MIN, i64::MAX], -2);
        assert_eq!(trace.last().line, NO_SOLUTION);
        assert_eq!(trace.last().result, Some(Value::Null));
        let step = trace
            .iter()
            .find(|s| s.line == COMPLEMENT && s.variables.get("complement") == Some(&Value::Null))
            .expect("complement step without a value");
        assert!(step.description.contains("outside the integer range"));
    }

    #[test]
    fn test_extreme_values_still_pair() {
        let trace = generate(&[i64::MIN, 5, i64::MAX], -1);
        assert_eq!(trace.last().result, Some(Value::Array(vec![0, 2])));
    }

    #[test]
    fn test_no_solution_gets_terminal_step() {
        let trace = generate(&[1, 2, 3], 100);
        assert_eq!(trace.last().line, NO_SOLUTION);
        assert!(trace.last().is_complete);
        assert_eq!(trace.last().result, Some(Value::Null));
        assert_eq!(trace.iter().filter(|s| s.is_terminal()).count(), 1);
    }
}
