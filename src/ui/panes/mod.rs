//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: sample listing with keyword colouring and the current line
//! - [`state`]: array with index markers, secondary sequences, variables and
//!   the step description
//! - [`input`]: the custom input form
//! - [`status`]: status bar with keybindings and playback state
//!
//! Every pane is a stateless `render_*` function; the only state kept between
//! frames is the source pane's scroll offset.

pub mod input;
pub mod source;
pub mod state;
pub mod status;

pub use input::render_input_form;
pub use source::{render_source_pane, SourceScrollState};
pub use state::render_state_pane;
pub use status::{render_status_bar, StatusRenderData};
