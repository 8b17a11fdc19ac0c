//! Built-in sample listings and default inputs
//!
//! Every problem ships one listing per [`Language`]; the union and
//! intersection problems share a listing that defines both functions.

use crate::algorithms::{Input, Problem};
use crate::highlight::Language;

macro_rules! listings {
    ($stem:literal) => {
        [
            include_str!(concat!("samples/", $stem, ".cpp")),
            include_str!(concat!("samples/", $stem, ".java")),
            include_str!(concat!("samples/", $stem, ".py")),
            include_str!(concat!("samples/", $stem, ".js")),
        ]
    };
}

const TWO_SUM: [&str; 4] = listings!("two_sum");
const MAX_MIN: [&str; 4] = listings!("max_min");
const KTH_ELEMENT: [&str; 4] = listings!("kth_element");
const SORT_012: [&str; 4] = listings!("sort_012");
const REVERSE: [&str; 4] = listings!("reverse");
const ROTATE: [&str; 4] = listings!("rotate");
const UNION_INTERSECTION: [&str; 4] = listings!("union_intersection");
const KADANE: [&str; 4] = listings!("kadane");
const MIN_JUMPS: [&str; 4] = listings!("min_jumps");

/// Sample listing of `problem` in `language`
pub fn source(problem: Problem, language: Language) -> &'static str {
    let set = match problem {
        Problem::TwoSum => &TWO_SUM,
        Problem::MaxMin => &MAX_MIN,
        Problem::KthMaxMin => &KTH_ELEMENT,
        Problem::Sort012 => &SORT_012,
        Problem::ReverseArray => &REVERSE,
        Problem::CyclicRotate => &ROTATE,
        Problem::Union | Problem::Intersection | Problem::UnionIntersection => {
            &UNION_INTERSECTION
        }
        Problem::Kadane => &KADANE,
        Problem::MinJumps => &MIN_JUMPS,
    };
    let slot = match language {
        Language::Cpp => 0,
        Language::Java => 1,
        Language::Python => 2,
        Language::JavaScript => 3,
    };
    set[slot]
}

/// Input shown when a problem is first opened
pub fn default_input(problem: Problem) -> Input {
    match problem {
        Problem::TwoSum => Input::new(vec![2, 7, 11, 15]).with_scalar(9),
        Problem::MaxMin => Input::new(vec![3, 5, 1, 8, 2]),
        Problem::KthMaxMin => Input::new(vec![7, 10, 4, 3, 20, 15]).with_scalar(3),
        Problem::Sort012 => Input::new(vec![2, 0, 2, 1, 1, 0]),
        Problem::ReverseArray | Problem::CyclicRotate => Input::new(vec![1, 2, 3, 4, 5]),
        Problem::Union | Problem::Intersection | Problem::UnionIntersection => {
            Input::new(vec![1, 2, 3, 4, 5]).with_second(vec![1, 2, 3, 6, 7])
        }
        Problem::Kadane => Input::new(vec![-2, 1, -3, 4, -1, 2, 1, -5, 4]),
        Problem::MinJumps => Input::new(vec![2, 3, 1, 1, 4]),
    }
}
