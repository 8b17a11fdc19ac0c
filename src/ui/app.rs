//! Main TUI application state and logic

use crate::algorithms::errors::InputError;
use crate::algorithms::input::parse_sequence;
use crate::algorithms::{Input, Problem};
use crate::playback::Tick;
use crate::session::Session;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Upper bound on how long the loop blocks waiting for a key
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    State,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::State,
            FocusedPane::State => FocusedPane::Source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Nums,
    Second,
    Scalar,
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub kind: FieldKind,
    pub label: &'static str,
    pub text: String,
}

/// Text fields for a custom input, prefilled from the current one
#[derive(Debug, Clone)]
pub struct InputForm {
    pub fields: Vec<FormField>,
    pub focus: usize,
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl InputForm {
    pub fn for_problem(problem: Problem, input: &Input) -> Self {
        let mut fields = vec![FormField {
            kind: FieldKind::Nums,
            label: if problem.needs_second() { "arr1" } else { "nums" },
            text: join(&input.nums),
        }];
        if problem.needs_second() {
            fields.push(FormField {
                kind: FieldKind::Second,
                label: "arr2",
                text: join(&input.second),
            });
        }
        if let Some(name) = problem.scalar_name() {
            fields.push(FormField {
                kind: FieldKind::Scalar,
                label: name,
                text: input.scalar.map(|s| s.to_string()).unwrap_or_default(),
            });
        }
        InputForm { fields, focus: 0 }
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        self.fields.get_mut(self.focus).map(|f| &mut f.text)
    }

    /// Parse every field. Nothing is applied unless all of them are valid.
    pub fn parse(&self) -> Result<Input, InputError> {
        let mut input = Input::default();
        for field in &self.fields {
            match field.kind {
                FieldKind::Nums => input.nums = parse_sequence(&field.text)?,
                // An empty second array is a legitimate union/intersection input
                FieldKind::Second => {
                    input.second = match parse_sequence(&field.text) {
                        Err(InputError::Empty) => Vec::new(),
                        other => other?,
                    }
                }
                FieldKind::Scalar => {
                    let raw = field.text.trim();
                    let value = raw.parse::<i64>().map_err(|_| InputError::InvalidNumber {
                        token: raw.to_string(),
                        position: 1,
                    })?;
                    input.scalar = Some(value);
                }
            }
        }
        Ok(input)
    }
}

/// The main application state
pub struct App {
    pub session: Session,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    pub source_scroll: super::panes::SourceScrollState,

    /// Open custom input form, if any
    pub form: Option<InputForm>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
    pub status_is_error: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            focused_pane: FocusedPane::Source,
            source_scroll: Default::default(),
            form: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            match self.session.poll(now) {
                Tick::Advanced(_) if self.session.controller().is_playing() => {
                    self.set_status("Playing...")
                }
                Tick::Advanced(_) | Tick::Finished => self.set_status("Playback complete"),
                Tick::Idle => {}
            }

            // Wake up in time for the next tick
            let timeout = self
                .session
                .controller()
                .next_due()
                .map(|due| due.saturating_duration_since(now))
                .unwrap_or(POLL_INTERVAL)
                .min(POLL_INTERVAL);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        let language = self.session.language();
        super::panes::render_source_pane(
            frame,
            columns[0],
            self.session.source(),
            language,
            self.session.highlighted_line(),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_state_pane(
            frame,
            columns[1],
            self.session.current_step(),
            self.focused_pane == FocusedPane::State,
        );

        let controller = self.session.controller();
        let status = super::panes::StatusRenderData {
            message: &self.status_message,
            current_step: controller.current_index(),
            total_steps: controller.len(),
            speed: controller.speed(),
            is_playing: controller.is_playing(),
            is_editing: self.form.is_some(),
            is_error: self.status_is_error,
        };
        super::panes::render_status_bar(frame, main_chunks[1], &status);

        if let Some(form) = &self.form {
            super::panes::render_input_form(frame, size, form, self.session.problem().title());
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.form.is_some() {
            self.handle_form_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                if self.session.step_backward() {
                    self.set_status("Stepped backward");
                } else {
                    self.set_status("Already at the first step");
                }
            }
            KeyCode::Right => {
                if self.session.step_forward() {
                    self.set_status("Stepped forward");
                } else {
                    self.set_status("Already at the last step");
                }
            }
            KeyCode::Char(' ') => {
                // 200ms debounce against key repeat
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    let now = Instant::now();
                    self.last_space_press = now;
                    self.session.play(now);
                    if self.session.controller().is_playing() {
                        self.set_status("Playing...");
                    } else {
                        self.set_status("Paused");
                    }
                }
            }
            KeyCode::Enter => {
                self.session.jump_to_end();
                self.set_status("Jumped to end");
            }
            KeyCode::Backspace => {
                self.session.rewind_to_start();
                self.set_status("Jumped to start");
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let speed = self.session.controller().speed().next_preset();
                self.session.set_speed(speed, Instant::now());
                self.set_status(format!("Speed {}", speed));
            }
            KeyCode::Char('-') => {
                let speed = self.session.controller().speed().prev_preset();
                self.session.set_speed(speed, Instant::now());
                self.set_status(format!("Speed {}", speed));
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                let language = self.session.language().next();
                self.session.set_language(language);
                self.set_status(format!("Showing {}", language));
            }
            KeyCode::Char('n') => self.cycle_problem(1),
            KeyCode::Char('p') => self.cycle_problem(Problem::ALL.len() - 1),
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.session.pause();
                self.form = Some(InputForm::for_problem(
                    self.session.problem(),
                    self.session.input(),
                ));
                self.set_status("Editing input");
            }
            _ => {}
        }
    }

    fn cycle_problem(&mut self, offset: usize) {
        let all = Problem::ALL;
        let idx = all
            .iter()
            .position(|&p| p == self.session.problem())
            .unwrap_or(0);
        let problem = all[(idx + offset) % all.len()];
        self.session.set_problem(problem);
        self.set_status(problem.title());
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.form = None;
                self.set_status("Input unchanged");
            }
            KeyCode::Tab => form.next_field(),
            KeyCode::Backspace => {
                if let Some(text) = form.focused_text() {
                    text.pop();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() || " ,-[]".contains(c) => {
                if let Some(text) = form.focused_text() {
                    text.push(c);
                }
            }
            KeyCode::Enter => match form.parse() {
                Ok(input) => {
                    self.form = None;
                    self.session.set_input(input);
                    let steps = self.session.trace().len();
                    tracing::info!(problem = %self.session.problem(), steps, "custom input applied");
                    self.set_status(format!("Generated {} steps", steps));
                }
                Err(e) => {
                    tracing::debug!(error = %e, "rejected custom input");
                    self.set_error(format!("Invalid input: {}", e));
                }
            },
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_form_round_trips_default_input() {
        for problem in Problem::ALL {
            let input = catalog::default_input(problem);
            let form = InputForm::for_problem(problem, &input);
            assert_eq!(form.parse(), Ok(input), "{}", problem);
        }
    }

    #[test]
    fn test_form_rejects_bad_scalar() {
        let mut form = InputForm::for_problem(Problem::TwoSum, &catalog::default_input(Problem::TwoSum));
        form.fields[1].text = "nine".to_string();
        assert!(matches!(form.parse(), Err(InputError::InvalidNumber { .. })));
    }

    #[test]
    fn test_failed_submit_keeps_trace() {
        let mut app = App::new(Session::with_default_input(Problem::Kadane));
        let before = app.session.trace().clone();
        app.handle_key_event(KeyEvent::from(KeyCode::Char('e')));
        if let Some(form) = app.form.as_mut() {
            form.fields[0].text = ", ,".to_string();
        }
        app.handle_key_event(KeyEvent::from(KeyCode::Enter));
        assert!(app.form.is_some());
        assert!(app.status_is_error);
        assert_eq!(app.session.trace(), &before);
    }
}
