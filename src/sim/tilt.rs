//! Tilt gesture classification
//!
//! A reading is the device's lateral tilt (`gamma`, degrees). Which sign means
//! "forward" depends on which way the phone is lying in landscape, so the
//! classifier also takes the screen rotation.
//!
//! Gestures are edge-triggered: tilting latches a direction, and only the
//! return to neutral resolves it. Holding a tilt therefore scores once.

use serde::{Deserialize, Serialize};

/// Screen rotation relative to the device's natural orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenRotation {
    Natural,
    /// Rotated 90° (landscape, top edge to the left)
    Landscape90,
    UpsideDown,
    /// Rotated 270° / -90° (landscape, top edge to the right)
    Landscape270,
}

impl ScreenRotation {
    /// Map a rotation angle in degrees; -90 and 270 are the same rotation.
    /// Angles that are not a multiple of 90 fall back to `Natural`.
    pub fn from_degrees(degrees: i32) -> Self {
        match degrees.rem_euclid(360) {
            90 => ScreenRotation::Landscape90,
            180 => ScreenRotation::UpsideDown,
            270 => ScreenRotation::Landscape270,
            _ => ScreenRotation::Natural,
        }
    }
}

/// Classified tilt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tilt {
    /// Tipped forward: the player got it
    Down,
    /// Tipped back: the player passed
    Up,
    Neutral,
}

/// Classify a reading. Pure function of its inputs.
pub fn classify(gamma: f64, rotation: ScreenRotation, limit_degrees: f64) -> Tilt {
    let positive = gamma > 0.0 && gamma < limit_degrees;
    let negative = gamma < 0.0 && gamma > -limit_degrees;

    match rotation {
        ScreenRotation::Landscape90 if positive => Tilt::Down,
        ScreenRotation::Landscape90 if negative => Tilt::Up,
        ScreenRotation::Landscape270 if negative => Tilt::Down,
        ScreenRotation::Landscape270 if positive => Tilt::Up,
        _ => Tilt::Neutral,
    }
}

/// What a reading did to the latch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiltEdge {
    /// A direction was newly latched (show feedback)
    Latched(Tilt),
    /// Returned to neutral from a latched direction
    Resolved(Tilt),
    /// Nothing changed
    Hold,
}

/// Remembers the last tilt direction until it resolves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TiltLatch {
    last: Option<Tilt>,
}

impl TiltLatch {
    pub fn latched(&self) -> Option<Tilt> {
        self.last
    }

    pub fn clear(&mut self) {
        self.last = None;
    }

    /// Feed a classified reading
    pub fn update(&mut self, tilt: Tilt) -> TiltEdge {
        match (tilt, self.last) {
            (Tilt::Neutral, Some(latched)) => {
                self.last = None;
                TiltEdge::Resolved(latched)
            }
            (Tilt::Neutral, None) => TiltEdge::Hold,
            (direction, last) if last != Some(direction) => {
                self.last = Some(direction);
                TiltEdge::Latched(direction)
            }
            _ => TiltEdge::Hold,
        }
    }
}
