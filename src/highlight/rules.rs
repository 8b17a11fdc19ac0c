//! Pattern table: (problem, logical line, languages) → source line pattern
//!
//! Patterns are matched against trimmed physical lines. Most rows cover
//! every language with one regex ([`ALL`]); a row is narrowed with [`only`]
//! when the phrasing differs too much. A rule with an anchor only considers
//! lines after the first line matching the anchor.

use super::Language;
use crate::algorithms::{
    kadane, kth_element, max_min, min_jumps, reverse, rotate, sort_012, two_sum,
    union_intersection as ui, Problem,
};

pub(super) const ALL: &[Language] = &[
    Language::Cpp,
    Language::Java,
    Language::Python,
    Language::JavaScript,
];
const C_LIKE: &[Language] = &[Language::Cpp, Language::Java, Language::JavaScript];
const PYTHON: &[Language] = &[Language::Python];

/// One row of the table
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub problem: Problem,
    pub line: u32,
    pub languages: &'static [Language],
    pub anchor: Option<&'static str>,
    pub pattern: &'static str,
}

const fn rule(problem: Problem, line: u32, pattern: &'static str) -> Rule {
    Rule {
        problem,
        line,
        languages: ALL,
        anchor: None,
        pattern,
    }
}

const fn anchored(problem: Problem, line: u32, anchor: &'static str, pattern: &'static str) -> Rule {
    Rule {
        problem,
        line,
        languages: ALL,
        anchor: Some(anchor),
        pattern,
    }
}

const fn only(languages: &'static [Language], rule: Rule) -> Rule {
    Rule { languages, ..rule }
}

const UNION_FN: &str = r"\bfind_?[uU]nion\s*\(";
const INTER_FN: &str = r"\bfind_?[iI]ntersection\s*\(";

// Shared merge-walk shapes (the union and intersection functions are written alike)
const MERGE_INIT: &str = r"^(int\s+|let\s+|var\s+)?i\s*(=\s*0\s*,\s*j|,\s*j\s*=)";
const MERGE_LESS: &str = r"^if\s*\(?\s*arr1\[i\]\s*<\s*arr2\[j\]";
const MERGE_GREATER: &str = r"^(\}\s*)?(else\s+if|elif)\s*\(?\s*arr1\[i\]\s*>\s*arr2\[j\]";
const MERGE_EQUAL: &str = r"^(\}\s*)?else\s*(\{|:)$";
const RETURN_RESULT: &str = r"^return\s+result\b";

use Problem::*;

pub static RULES: &[Rule] = &[
    // Two Sum
    rule(TwoSum, two_sum::INIT_MAP, r"^(unordered_map<.+>\s+|Map<.+>\s+|(const|let|var)\s+)?seen\s*(;|=\s*(\{\}|new\s))"),
    rule(TwoSum, two_sum::CHECK_INDEX, r"^for\s*\(?\s*(int\s+|let\s+|var\s+)?i\b.*nums"),
    rule(TwoSum, two_sum::COMPLEMENT, r"^(int\s+|const\s+|let\s+|var\s+)?complement\s*=\s*target\s*-\s*nums\[i\]"),
    rule(TwoSum, two_sum::FOUND, r"^if\s*\(?\s*(seen\.(count|has|containsKey)\(complement\)|complement\s+in\s+seen)"),
    rule(TwoSum, two_sum::RETURN_PAIR, r"^return\s*(new\s+int\[\]\s*)?[\{\[]\s*seen(\[complement\]|\.get\(complement\))"),
    rule(TwoSum, two_sum::ADD_TO_MAP, r"^seen(\[nums\[i\]\]\s*=\s*i|\.(set|put)\(nums\[i\],\s*i\))"),
    rule(TwoSum, two_sum::MAP_UPDATED, r"^seen(\[nums\[i\]\]\s*=\s*i|\.(set|put)\(nums\[i\],\s*i\))"),
    rule(TwoSum, two_sum::NO_SOLUTION, r"^return\s*(\{\}|\[\]|new\s+int\[0\])"),
    // Find max/min
    rule(MaxMin, max_min::INIT, r"^(int\s+|let\s+|const\s+|var\s+)?max_?[vV]al\s*=\s*nums\[0\]"),
    rule(MaxMin, max_min::LOOP, r"^for\s*\(?\s*(int\s+|let\s+|var\s+)?i\b.*\b1\b.*nums"),
    rule(MaxMin, max_min::CHECK_MAX, r"^if\s*\(?\s*nums\[i\]\s*>\s*max_?[vV]al"),
    rule(MaxMin, max_min::UPDATE_MAX, r"^max_?[vV]al\s*=\s*nums\[i\]"),
    rule(MaxMin, max_min::CHECK_MIN, r"^if\s*\(?\s*nums\[i\]\s*<\s*min_?[vV]al"),
    rule(MaxMin, max_min::UPDATE_MIN, r"^min_?[vV]al\s*=\s*nums\[i\]"),
    rule(MaxMin, max_min::DONE, r"^return\b.*max_?[vV]al"),
    // Kth max/min
    rule(KthMaxMin, kth_element::VALIDATE, r"^if\s*\(?\s*k\s*<\s*1"),
    only(C_LIKE, rule(KthMaxMin, kth_element::INVALID_K, r"^return\s*(\{\s*-1|\[\s*-1|new\s+int\[\]\s*\{\s*-1)")),
    only(PYTHON, rule(KthMaxMin, kth_element::INVALID_K, r"^return\s+None\b")),
    rule(KthMaxMin, kth_element::SORT, r"^(sort\(nums|Arrays\.sort\(nums|nums\.sort\()"),
    rule(KthMaxMin, kth_element::KTH_MIN, r"^(int\s+|const\s+|let\s+|var\s+)?kth_?[mM]in\s*=\s*nums\[k\s*-\s*1\]"),
    rule(KthMaxMin, kth_element::KTH_MAX, r"^(int\s+|const\s+|let\s+|var\s+)?kth_?[mM]ax\s*=\s*nums\["),
    rule(KthMaxMin, kth_element::DONE, r"^return\b.*kth_?[mM]ax"),
    // Sort 0s, 1s and 2s
    rule(Sort012, sort_012::INIT, r"^(int\s+|let\s+|var\s+)?low\b.*\bmid\b.*\bhigh\b"),
    rule(Sort012, sort_012::LOOP, r"^while\s*\(?\s*mid\s*<=\s*high"),
    rule(Sort012, sort_012::IS_ZERO, r"^if\s*\(?\s*nums\[mid\]\s*==+\s*0"),
    rule(Sort012, sort_012::SWAP_LOW, r"^(swap\(nums(\[low\]|,\s*low)|\[?nums\[low\],\s*nums\[mid\]\]?\s*=)"),
    rule(Sort012, sort_012::IS_ONE, r"^(\}\s*)?(else\s+if|elif)\s*\(?\s*nums\[mid\]\s*==+\s*1"),
    rule(Sort012, sort_012::SWAP_HIGH, r"^(swap\(nums(\[mid\]|,\s*mid)|\[?nums\[mid\],\s*nums\[high\]\]?\s*=)"),
    rule(Sort012, sort_012::DONE, r"^return\s+nums\b"),
    // Reverse array
    rule(ReverseArray, reverse::INIT, r"^(int\s+|let\s+|var\s+)?left\s*(=\s*0|,\s*right\s*=)"),
    rule(ReverseArray, reverse::LOOP, r"^while\s*\(?\s*left\s*<\s*right"),
    rule(ReverseArray, reverse::SWAP, r"^(swap\(arr\[left\]|(int\s+)?temp\s*=\s*arr\[left\]|\[?arr\[left\],\s*arr\[right\]\]?\s*=)"),
    only(C_LIKE, rule(ReverseArray, reverse::MOVE, r"^left\+\+")),
    only(PYTHON, rule(ReverseArray, reverse::MOVE, r"^left\s*\+=\s*1")),
    rule(ReverseArray, reverse::DONE, r"^return\s+arr\b"),
    // Cyclic rotation
    rule(CyclicRotate, rotate::SAVE_LAST, r"^(int\s+|const\s+|let\s+|var\s+)?last\s*=\s*arr\["),
    rule(CyclicRotate, rotate::LOOP, r"^for\s*\(?\s*(int\s+|let\s+|var\s+)?i\b.*n\s*-\s*1"),
    rule(CyclicRotate, rotate::SHIFT, r"^arr\[i\]\s*=\s*arr\[i\s*-\s*1\]"),
    rule(CyclicRotate, rotate::PLACE_LAST, r"^arr\[0\]\s*=\s*last"),
    rule(CyclicRotate, rotate::DONE, r"^return\s+arr\b"),
    // Union / intersection
    anchored(UnionIntersection, ui::UNION_INIT, UNION_FN, MERGE_INIT),
    anchored(UnionIntersection, ui::UNION_TAKE_FIRST, UNION_FN, MERGE_LESS),
    anchored(UnionIntersection, ui::UNION_TAKE_SECOND, UNION_FN, MERGE_GREATER),
    anchored(UnionIntersection, ui::UNION_EQUAL, UNION_FN, MERGE_EQUAL),
    anchored(UnionIntersection, ui::UNION_REST_FIRST, UNION_FN, r"^while\s*\(?\s*i\s*<\s*(arr1\.size\(\)|arr1\.length|len\(arr1\))\s*\)?\s*(\{|:)$"),
    anchored(UnionIntersection, ui::UNION_REST_SECOND, UNION_FN, r"^while\s*\(?\s*j\s*<\s*(arr2\.size\(\)|arr2\.length|len\(arr2\))\s*\)?\s*(\{|:)$"),
    anchored(UnionIntersection, ui::UNION_DONE, UNION_FN, RETURN_RESULT),
    anchored(UnionIntersection, ui::INTER_INIT, INTER_FN, MERGE_INIT),
    anchored(UnionIntersection, ui::INTER_SKIP_FIRST, INTER_FN, MERGE_LESS),
    anchored(UnionIntersection, ui::INTER_SKIP_SECOND, INTER_FN, MERGE_GREATER),
    anchored(UnionIntersection, ui::INTER_EQUAL, INTER_FN, MERGE_EQUAL),
    anchored(UnionIntersection, ui::INTER_DONE, INTER_FN, RETURN_RESULT),
    anchored(UnionIntersection, ui::RETURN_BOTH, INTER_FN, RETURN_RESULT),
    // Kadane
    rule(Kadane, kadane::INIT, r"^(int\s+|let\s+|const\s+|var\s+)?current_?[sS]um\s*=\s*nums\[0\]"),
    rule(Kadane, kadane::COMPARE, r"^if\s*\(?\s*nums\[i\]\s*>\s*current_?[sS]um\s*\+\s*nums\[i\]"),
    rule(Kadane, kadane::RESTART, r"^current_?[sS]um\s*=\s*nums\[i\]"),
    rule(Kadane, kadane::EXTEND, r"^current_?[sS]um\s*(=\s*current_?[sS]um\s*\+|\+=)\s*nums\[i\]"),
    rule(Kadane, kadane::CHECK_MAX, r"^if\s*\(?\s*current_?[sS]um\s*>\s*max_?[sS]um"),
    rule(Kadane, kadane::UPDATE_MAX, r"^max_?[sS]um\s*=\s*current_?[sS]um"),
    rule(Kadane, kadane::DONE, r"^return\s+max_?[sS]um"),
    // Minimum jumps
    rule(MinJumps, min_jumps::SHORT_CIRCUIT, r"^if\s*\(?\s*n\s*<=\s*1"),
    rule(MinJumps, min_jumps::INIT, r"^(int\s+|let\s+|var\s+)?jumps\b.*current_?[eE]nd.*farthest"),
    rule(MinJumps, min_jumps::EXTEND_REACH, r"^farthest\s*=\s*(Math\.)?max\(\s*farthest"),
    rule(MinJumps, min_jumps::RANGE_END, r"^if\s*\(?\s*i\s*==+\s*current_?[eE]nd"),
    only(C_LIKE, rule(MinJumps, min_jumps::JUMP, r"^jumps\+\+")),
    only(PYTHON, rule(MinJumps, min_jumps::JUMP, r"^jumps\s*\+=\s*1")),
    rule(MinJumps, min_jumps::ARRIVED, r"^if\s*\(?\s*current_?[eE]nd\s*>=\s*n\s*-\s*1"),
    rule(MinJumps, min_jumps::DONE, r"^return\s+jumps\b"),
    rule(MinJumps, min_jumps::STUCK, r"^if\s*\(?\s*farthest\s*<=\s*i\b"),
];
