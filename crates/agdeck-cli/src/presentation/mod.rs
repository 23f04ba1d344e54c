//! # Presentation Layer
//!
//! An adaptation of **MVVM** with component-based UI state for the TUI.
//!
//! ### Console output (JSON/Text)
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                 ==(Text)==> [ View ] (Display)
//! ```
//!
//! ### Interactive TUI
//!
//! ```text
//! [ Handler ] --> [ App ] --> [ Component ] <-- key events
//!                   ^              |
//!                   |         [ DataTable / OverlayController ] (agdeck-engine)
//!                   +--- DashboardEvent (mpsc)
//! ```
//!
//! ## Rules
//!
//! 1. **ViewModels carry raw data.** `--format json` is an API: counts stay
//!    numbers and missing values stay `null`. Formatted cell text is carried
//!    next to the raw record, never instead of it.
//! 2. **Components own UI state** (selection, overlay phase). Views are
//!    stateless widgets or `Display` impls.
//! 3. **Index safety.** Components clamp their selection against the data
//!    before every render.

pub mod columns;
pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
