//! Game logic module
//!
//! Everything here is deterministic given the inputs:
//! - Seeded RNG only
//! - Time arrives as explicit 1 Hz ticks
//! - No DOM or sensor access (see `platform`)

pub mod controller;
pub mod state;
pub mod tilt;
pub mod timer;
pub mod words;

pub use controller::GameController;
pub use state::{
    BankState, EndReason, EntryStatus, GamePhase, Orientation, PlayedEntry, RoundState,
};
pub use tilt::{ScreenRotation, Tilt, TiltEdge, TiltLatch, classify};
pub use timer::{Countdown, CountdownStep, TimerKind};
pub use words::WordBank;
