//! In-memory environment for tests and the native build

use std::collections::HashSet;

use super::Environment;
use crate::sim::{Orientation, ScreenRotation, TimerKind};
use crate::ui::View;

/// Records everything the controller asks of the host
#[derive(Debug, Clone)]
pub struct HeadlessEnvironment {
    pub orientation: Orientation,
    pub rotation: ScreenRotation,
    /// Tickers currently scheduled
    pub tickers: HashSet<TimerKind>,
    /// Every rendered view, oldest first
    pub frames: Vec<View>,
    pub fullscreen_requests: u32,
}

impl HeadlessEnvironment {
    /// A phone lying in landscape, rotated 90°
    pub fn landscape() -> Self {
        Self {
            orientation: Orientation::Landscape,
            rotation: ScreenRotation::Landscape90,
            tickers: HashSet::new(),
            frames: Vec::new(),
            fullscreen_requests: 0,
        }
    }

    pub fn portrait() -> Self {
        Self {
            orientation: Orientation::Portrait,
            rotation: ScreenRotation::Natural,
            ..Self::landscape()
        }
    }

    /// Rotate the simulated device
    pub fn rotate_to(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.rotation = match orientation {
            Orientation::Landscape => ScreenRotation::Landscape90,
            Orientation::Portrait => ScreenRotation::Natural,
        };
    }

    pub fn is_ticking(&self, timer: TimerKind) -> bool {
        self.tickers.contains(&timer)
    }

    /// Most recent frame (blank if nothing rendered yet)
    pub fn view(&self) -> View {
        self.frames.last().cloned().unwrap_or_default()
    }
}

impl Environment for HeadlessEnvironment {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn rotation(&self) -> ScreenRotation {
        self.rotation
    }

    fn start_ticker(&mut self, timer: TimerKind) {
        self.tickers.insert(timer);
    }

    fn stop_ticker(&mut self, timer: TimerKind) {
        self.tickers.remove(&timer);
    }

    fn render(&mut self, view: &View) {
        self.frames.push(view.clone());
    }

    fn request_fullscreen(&mut self) {
        self.fullscreen_requests += 1;
    }
}
