//! Platform abstraction layer
//!
//! The controller never touches browser globals directly. Everything it needs
//! from the host goes through `Environment`:
//! - Screen orientation and rotation
//! - 1 Hz tick scheduling
//! - Rendering the current `View`
//! - Fullscreen requests

pub mod headless;

pub use headless::HeadlessEnvironment;

use crate::sim::{Orientation, ScreenRotation, TimerKind};
use crate::ui::View;

/// Host services used by `GameController`
pub trait Environment {
    /// Current screen shape
    fn orientation(&self) -> Orientation;

    /// Current screen rotation, used to interpret tilt readings
    fn rotation(&self) -> ScreenRotation;

    /// Begin delivering `GameController::timer_tick(timer)` once per second.
    /// Starting a running ticker restarts it.
    fn start_ticker(&mut self, timer: TimerKind);

    /// Stop the ticker. Stopping a stopped ticker is a no-op.
    fn stop_ticker(&mut self, timer: TimerKind);

    /// Show `view`
    fn render(&mut self, view: &View);

    /// Ask for fullscreen (the controller calls this at most once)
    fn request_fullscreen(&mut self);
}
