pub mod number;
pub mod time;

pub use number::{format_compact, format_cost};
pub use time::{format_duration, format_local_timestamp};
