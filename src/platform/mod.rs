//! Platform layer: animation clock and the native window loop

pub mod time;
pub mod window;

pub use time::AnimationClock;
pub use window::run;
