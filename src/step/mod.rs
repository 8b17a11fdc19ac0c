// Step model: one frame of an algorithm replay

pub mod state;
pub mod value;

pub use state::StepState;
pub use value::Value;

use std::ops::Index;

/// Ordered named values visible at one instant. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Variables {
    entries: Vec<(String, Value)>,
}

impl Variables {
    pub fn new() -> Self {
        Variables {
            entries: Vec::new(),
        }
    }

    /// Append a named value (builder style)
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.entries.push((name.to_string(), value.into()));
        self
    }

    /// Look up a value by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One immutable animation frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Logical line tag (0 = no associated source line)
    pub line: u32,
    pub variables: Variables,
    pub state: StepState,
    pub description: String,
    pub is_complete: bool,
    pub is_solution: bool,
    pub result: Option<Value>,
}

impl Step {
    /// Whether this step carries a terminal flag
    pub fn is_terminal(&self) -> bool {
        self.is_complete || self.is_solution
    }
}

/// The complete, never-empty sequence of steps for one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// A single terminal step explaining why there is nothing to animate
    pub fn invalid(state: impl Into<StepState>, description: impl Into<String>) -> Self {
        Trace {
            steps: vec![Step {
                line: 0,
                variables: Variables::new(),
                state: state.into(),
                description: description.into(),
                is_complete: true,
                is_solution: false,
                result: Some(Value::Null),
            }],
        }
    }

    /// Concatenate phase traces, dropping every phase's terminal markers.
    /// `finish` becomes the only terminal step of the result.
    pub fn concat(parts: Vec<Trace>, finish: Step) -> Self {
        let mut steps: Vec<Step> = parts
            .into_iter()
            .flat_map(|t| t.steps)
            .map(|mut step| {
                step.is_complete = false;
                step.is_solution = false;
                step.result = None;
                step
            })
            .collect();
        steps.push(finish);
        Trace { steps }
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// The final step (always present)
    pub fn last(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    /// The first terminal step, if any
    pub fn terminal(&self) -> Option<&Step> {
        self.steps.iter().find(|s| s.is_terminal())
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl Index<usize> for Trace {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Records steps from a generator's live working state.
///
/// Every `record*` call clones the state, so later mutation of the working
/// copy never reaches an already emitted step.
#[derive(Debug)]
pub struct TraceRecorder<S> {
    steps: Vec<Step>,
    _state: std::marker::PhantomData<S>,
}

impl<S: Clone + Into<StepState>> TraceRecorder<S> {
    pub fn new() -> Self {
        TraceRecorder {
            steps: Vec::new(),
            _state: std::marker::PhantomData,
        }
    }

    /// Record an intermediate step
    pub fn record(
        &mut self,
        line: u32,
        state: &S,
        variables: Variables,
        description: impl Into<String>,
    ) {
        self.steps.push(Step {
            line,
            variables,
            state: state.clone().into(),
            description: description.into(),
            is_complete: false,
            is_solution: false,
            result: None,
        });
    }

    /// Record a step flagged as the solution, ahead of a trailing return step
    pub fn record_solution(
        &mut self,
        line: u32,
        state: &S,
        variables: Variables,
        description: impl Into<String>,
        result: Value,
    ) {
        self.steps.push(Step {
            line,
            variables,
            state: state.clone().into(),
            description: description.into(),
            is_complete: false,
            is_solution: true,
            result: Some(result),
        });
    }

    /// Append the terminal step and seal the trace
    pub fn finish(
        mut self,
        line: u32,
        state: &S,
        variables: Variables,
        description: impl Into<String>,
        result: Value,
    ) -> Trace {
        self.steps.push(Step {
            line,
            variables,
            state: state.clone().into(),
            description: description.into(),
            is_complete: true,
            is_solution: false,
            result: Some(result),
        });
        Trace { steps: self.steps }
    }

    /// Number of steps recorded so far
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<S: Clone + Into<StepState>> Default for TraceRecorder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::state::ReverseState;
    use super::*;

    #[test]
    fn test_recorder_clones_state() {
        let mut working = ReverseState {
            array: vec![1, 2, 3],
            left: 0,
            right: 2,
        };
        let mut rec = TraceRecorder::new();
        rec.record(1, &working, Variables::new(), "before");
        working.array.swap(0, 2);
        let trace = rec.finish(2, &working, Variables::new(), "after", Value::Null);

        assert_eq!(trace[0].state.array(), &[1, 2, 3]);
        assert_eq!(trace[1].state.array(), &[3, 2, 1]);
        assert!(trace.last().is_complete);
        assert!(!trace[0].is_terminal());
    }

    #[test]
    fn test_concat_keeps_single_terminal() {
        let a = Trace::invalid(ReverseState::default(), "a");
        let b = Trace::invalid(ReverseState::default(), "b");
        let finish = Trace::invalid(ReverseState::default(), "done").last().clone();
        let joined = Trace::concat(vec![a, b], finish);

        assert_eq!(joined.len(), 3);
        assert_eq!(joined.iter().filter(|s| s.is_terminal()).count(), 1);
        assert!(joined.last().is_terminal());
    }

    #[test]
    fn test_variables_keep_insertion_order() {
        let vars = Variables::new().with("z", 1i64).with("a", 2i64);
        let names: Vec<&str> = vars.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["z", "a"]);
        assert_eq!(vars.get("a"), Some(&Value::Int(2)));
    }
}
