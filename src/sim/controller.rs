//! Game controller
//!
//! Owns all mutable game state and reacts to the four inputs the host feeds
//! it: word list result, orientation change, timer tick, tilt reading. Each
//! handler runs to completion on the host's single event loop, then renders.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{BankState, EndReason, EntryStatus, GamePhase, Orientation, RoundState};
use super::tilt::{Tilt, TiltEdge, TiltLatch, classify};
use super::timer::{Countdown, CountdownStep, TimerKind};
use super::words::WordBank;
use crate::error::GameError;
use crate::platform::Environment;
use crate::settings::GameConfig;
use crate::ui::{Feedback, Prompt, View};

pub struct GameController {
    config: GameConfig,
    bank: BankState,
    phase: GamePhase,
    round: RoundState,
    pre_round: Countdown,
    round_timer: Countdown,
    latch: TiltLatch,
    rng: Pcg32,
    view: View,
    /// Orientation seen by the previous resize
    last_orientation: Option<Orientation>,
    fullscreen_requested: bool,
}

impl GameController {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            round: RoundState::new(config.round_seconds),
            config,
            bank: BankState::Loading,
            phase: GamePhase::Idle,
            pre_round: Countdown::default(),
            round_timer: Countdown::default(),
            latch: TiltLatch::default(),
            rng: Pcg32::seed_from_u64(seed),
            view: View::default(),
            last_orientation: None,
            fullscreen_requested: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn bank_state(&self) -> &BankState {
        &self.bank
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// True while either countdown is running
    pub fn timer_active(&self) -> bool {
        self.pre_round.is_active() || self.round_timer.is_active()
    }

    /// The word list arrived. Only the first load result counts.
    pub fn words_loaded(&mut self, bank: WordBank, env: &mut impl Environment) {
        if self.bank != BankState::Loading {
            log::warn!("Ignoring duplicate word list result");
            return;
        }
        log::info!("Loaded {} words", bank.len());
        self.bank = BankState::Ready(bank);

        if env.orientation() == Orientation::Landscape {
            self.last_orientation = Some(Orientation::Landscape);
            self.start_session(env);
        }
    }

    /// The word list could not be loaded. The game stays disabled.
    pub fn words_failed(&mut self, err: GameError, env: &mut impl Environment) {
        if self.bank != BankState::Loading {
            log::warn!("Ignoring duplicate word list result: {}", err);
            return;
        }
        log::error!("Failed to load words: {}", err);
        self.bank = BankState::Failed;
        self.view.prompt = Some(Prompt::LoadError);
        self.render(env);
    }

    /// Screen was resized; re-read the orientation and react
    pub fn orientation_changed(&mut self, env: &mut impl Environment) {
        let orientation = env.orientation();
        let previous = self.last_orientation.replace(orientation);

        match orientation {
            Orientation::Landscape => {
                if self.timer_active() || self.bank.bank().is_none() {
                    return;
                }
                // A round that timed out stays on its prompt until the device
                // has been turned upright once
                if self.phase == GamePhase::Ended(EndReason::TimeUp)
                    && previous == Some(Orientation::Landscape)
                {
                    log::debug!("Still landscape after time up, not restarting");
                    return;
                }
                self.start_session(env);
            }
            Orientation::Portrait => {
                self.view.feedback = Feedback::Neutral;
                self.latch.clear();

                if self.timer_active() {
                    self.abort(env);
                } else if !self.round.played().is_empty() {
                    self.show_results();
                } else {
                    self.view.word = None;
                    self.view.score = None;
                    self.view.clock = None;
                    self.view.countdown = None;
                    if self.bank != BankState::Failed {
                        self.view.prompt = Some(Prompt::RotateToLandscape);
                    }
                }
                self.render(env);
            }
        }
    }

    /// One second elapsed on `timer`
    pub fn timer_tick(&mut self, timer: TimerKind, env: &mut impl Environment) {
        match timer {
            TimerKind::PreRound => match self.pre_round.tick() {
                None => log::debug!("Stale countdown tick"),
                Some(CountdownStep::Running(n)) => {
                    self.view.countdown = Some(n);
                    self.render(env);
                }
                Some(CountdownStep::Finished) => {
                    env.stop_ticker(TimerKind::PreRound);
                    self.begin_round(env);
                }
            },
            TimerKind::Round => match self.round_timer.tick() {
                None => log::debug!("Stale round tick"),
                Some(CountdownStep::Running(n)) => {
                    self.round.remaining_seconds = n;
                    self.view.clock = Some(n);
                    self.render(env);
                }
                Some(CountdownStep::Finished) => {
                    env.stop_ticker(TimerKind::Round);
                    self.round.remaining_seconds = 0;
                    self.round.record(EntryStatus::Pending);
                    self.round.current_word = None;
                    self.latch.clear();
                    self.phase = GamePhase::Ended(EndReason::TimeUp);

                    self.view.word = None;
                    self.view.clock = None;
                    self.view.feedback = Feedback::Neutral;
                    self.view.prompt = Some(Prompt::TimeUp);
                    log::info!(
                        "Time up: score {} from {} words",
                        self.round.score,
                        self.round.played().len()
                    );
                    self.render(env);
                }
            },
        }
    }

    /// Lateral tilt reading in degrees; `None` when the sensor has no value
    pub fn tilt(&mut self, gamma: Option<f64>, env: &mut impl Environment) {
        if self.phase != GamePhase::Playing || !self.round_timer.is_active() {
            return;
        }
        let Some(gamma) = gamma else {
            return;
        };

        let tilt = classify(gamma, env.rotation(), self.config.tilt_limit_degrees);
        match self.latch.update(tilt) {
            TiltEdge::Hold => {}
            TiltEdge::Latched(direction) => {
                self.view.feedback = match direction {
                    Tilt::Down => Feedback::Correct,
                    Tilt::Up => Feedback::Incorrect,
                    Tilt::Neutral => Feedback::Neutral,
                };
                self.render(env);
            }
            TiltEdge::Resolved(direction) => {
                let status = match direction {
                    Tilt::Down => EntryStatus::Correct,
                    _ => EntryStatus::Incorrect,
                };
                self.round.record(status);
                log::debug!("{:?}: {:?}", status, self.round.current_word);

                self.view.feedback = Feedback::Neutral;
                self.view.score = Some(self.round.score);
                self.show_next_word();
                self.render(env);
            }
        }
    }

    fn start_session(&mut self, env: &mut impl Environment) {
        if !self.fullscreen_requested {
            self.fullscreen_requested = true;
            env.request_fullscreen();
        }

        self.round = RoundState::new(self.config.round_seconds);
        self.latch.clear();
        self.view = View::default();
        self.phase = GamePhase::Countdown;
        log::info!("Session started");

        if self.config.countdown_seconds == 0 {
            self.begin_round(env);
            return;
        }
        self.pre_round.start(self.config.countdown_seconds);
        self.view.countdown = Some(self.config.countdown_seconds);
        env.start_ticker(TimerKind::PreRound);
        self.render(env);
    }

    fn begin_round(&mut self, env: &mut impl Environment) {
        self.phase = GamePhase::Playing;
        self.round.remaining_seconds = self.config.round_seconds;
        self.round_timer.start(self.config.round_seconds);

        self.view.countdown = None;
        self.view.score = Some(self.round.score);
        self.view.clock = Some(self.round.remaining_seconds);
        self.show_next_word();

        env.start_ticker(TimerKind::Round);
        self.render(env);
    }

    /// Rotated to portrait mid-session
    fn abort(&mut self, env: &mut impl Environment) {
        self.pre_round.cancel();
        self.round_timer.cancel();
        env.stop_ticker(TimerKind::PreRound);
        env.stop_ticker(TimerKind::Round);

        self.round.record(EntryStatus::Pending);
        self.round.current_word = None;
        self.phase = GamePhase::Ended(EndReason::Aborted);
        log::info!(
            "Round aborted: score {} from {} words",
            self.round.score,
            self.round.played().len()
        );
        self.show_results();
    }

    fn show_next_word(&mut self) {
        if let Some(bank) = self.bank.bank() {
            let word = bank.draw(&mut self.rng).to_string();
            self.view.word = Some(word.clone());
            self.round.current_word = Some(word);
        }
        self.latch.clear();
    }

    fn show_results(&mut self) {
        self.view.countdown = None;
        self.view.word = None;
        self.view.clock = None;
        self.view.prompt = Some(Prompt::GameOver);
        self.view.score = Some(self.round.score);
        self.view.results = Some(self.round.played().to_vec());
    }

    fn render(&self, env: &mut impl Environment) {
        env.render(&self.view);
    }
}
