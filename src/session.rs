//! One open visualization: problem, input, generated trace and playback
//!
//! [`Session`] is the glue the UI drives. Submitting new input regenerates
//! the trace from scratch and reinstalls the controller, so playback always
//! restarts at step 0, paused.

use crate::algorithms::{Input, Problem};
use crate::catalog;
use crate::highlight::{self, Language};
use crate::playback::{PlaybackController, Speed, Tick};
use crate::step::{Step, Trace};
use std::time::Instant;

#[derive(Debug)]
pub struct Session {
    problem: Problem,
    input: Input,
    trace: Trace,
    controller: PlaybackController,
    language: Language,
}

impl Session {
    pub fn new(problem: Problem, input: Input) -> Self {
        let trace = problem.generate(&input);
        let controller = PlaybackController::new(trace.len(), problem.base_interval());
        Session {
            problem,
            input,
            trace,
            controller,
            language: Language::default(),
        }
    }

    /// Session over the built-in input of `problem`
    pub fn with_default_input(problem: Problem) -> Self {
        Self::new(problem, catalog::default_input(problem))
    }

    pub fn problem(&self) -> Problem {
        self.problem
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Replace the input, regenerate and reset playback to `(0, Paused)`
    pub fn set_input(&mut self, input: Input) {
        self.trace = self.problem.generate(&input);
        self.input = input;
        self.controller
            .install(self.trace.len(), self.problem.base_interval());
    }

    /// Switch problem and load its built-in input
    pub fn set_problem(&mut self, problem: Problem) {
        self.problem = problem;
        self.set_input(catalog::default_input(problem));
    }

    pub fn current_step(&self) -> &Step {
        let idx = self.controller.current_index();
        self.trace.get(idx).unwrap_or_else(|| self.trace.last())
    }

    /// Listing of the current problem in the current language
    pub fn source(&self) -> &'static str {
        catalog::source(self.problem, self.language)
    }

    /// 1-based line of [`Session::source`] to highlight for the current step
    pub fn highlighted_line(&self) -> Option<usize> {
        highlight::highlight(
            self.problem,
            self.current_step().line,
            self.language,
            self.source(),
        )
    }

    pub fn play(&mut self, now: Instant) {
        self.controller.play(now);
    }

    pub fn pause(&mut self) {
        self.controller.pause();
    }

    pub fn step_forward(&mut self) -> bool {
        self.controller.step_forward()
    }

    pub fn step_backward(&mut self) -> bool {
        self.controller.step_backward()
    }

    pub fn rewind_to_start(&mut self) {
        self.controller.rewind_to_start();
    }

    pub fn jump_to_end(&mut self) {
        self.controller.jump_to_end();
    }

    pub fn set_speed(&mut self, speed: Speed, now: Instant) {
        self.controller.set_speed(speed, now);
    }

    pub fn poll(&mut self, now: Instant) -> Tick {
        self.controller.poll(now)
    }
}
