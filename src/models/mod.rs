pub mod day;
pub mod payload;
pub mod time;
pub mod unavailable;
pub mod week;

pub use day::*;
pub use payload::*;
pub use time::*;
pub use unavailable::*;
pub use week::*;
