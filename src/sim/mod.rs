//! Renderer-free animation state
//!
//! Everything that moves is either a closed-form function of elapsed time
//! (`motion`, `volleyball`) or a small state value folded from input events
//! (`state`, `input`). The only free-running state machine is the shooting star.

pub mod input;
pub mod motion;
pub mod shooting_star;
pub mod state;
pub mod volleyball;

pub use input::{Effect, EventQueue, Flow, InputEvent, Key, drain_events};
pub use shooting_star::{ShootingStar, StarPhase};
pub use state::{FrameTime, SimState, UmbrellaPosition, ViewBounds, ViewState, Viewport};
pub use volleyball::{ArmPose, Rally, ball_position, rally};
