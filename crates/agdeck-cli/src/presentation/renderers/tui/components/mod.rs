//! TUI Components
//!
//! Components own UI state and input handling, and render through views.
//!
//! ```rust,ignore
//! impl FooComponent {
//!     pub fn handle_input(&mut self, key: KeyEvent, ...) -> bool { /* consumed? */ }
//!     pub fn render(&mut self, f: &mut Frame, area: Rect, ...) { /* clamp, then draw */ }
//! }
//! ```

pub mod session_detail;
pub mod session_table;

pub use session_detail::SessionDetailComponent;
pub use session_table::SessionTableComponent;
