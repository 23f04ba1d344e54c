mod console;
mod traits;
pub mod tui;

pub use console::ConsoleRenderer;
pub use traits::Renderer;
