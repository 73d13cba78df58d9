use std::collections::VecDeque;

use super::catalog::{SafeContentOption, SAFE_CONTENT};
use super::clock::Clock;
use super::detector::Detector;

pub const TICK_PERIOD_MS: u64 = 5_000;
pub const SWITCH_DELAY_MS: u64 = 2_000;
pub const CLEAR_DELAY_MS: u64 = 4_000;
pub const HISTORY_CAPACITY: usize = 5;

pub const DETECTED_MESSAGE: &str = "⚠️ Inappropriate Content Detected!";
pub const SWITCHED_MESSAGE: &str = "✅ Switched to Safe Content!";
pub const BLOCKED_MESSAGE: &str = "Harmful content blocked";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionEvent {
    /// Never reused within one sequencer, so it can key list rows.
    pub id: u64,
    pub at_ms: u64,
    pub time: String,
    pub message: String,
    pub content: String,
}

/// What the page renders. Cloned out of the sequencer after every change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SequencerState {
    pub is_running: bool,
    pub is_danger_active: bool,
    pub current_message: String,
    pub active_safe_content: Option<&'static SafeContentOption>,
    pub history: VecDeque<DetectionEvent>,
}

/// Side effects the page has to carry out after a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    RedirectVideo(&'static SafeContentOption),
}

/// Remaining phases of a detection cycle. The alert phase runs inline when
/// the cycle starts, so only the delayed ones are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Switch,
    Clear,
}

impl Phase {
    fn offset_ms(self) -> u64 {
        match self {
            Phase::Switch => SWITCH_DELAY_MS,
            Phase::Clear => CLEAR_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Cycle {
    started_at: u64,
    chosen: &'static SafeContentOption,
    next: Phase,
}

impl Cycle {
    fn due_at(&self) -> u64 {
        self.started_at + self.next.offset_ms()
    }
}

/// The demo's fake detection loop as an explicit deadline-driven state
/// machine. Nothing fires on its own: a driver calls [`Sequencer::poll`]
/// whenever [`Sequencer::next_deadline`] has passed, and everything that is
/// due runs in time order.
pub struct Sequencer<D, C> {
    state: SequencerState,
    detector: D,
    clock: C,
    next_tick_at: Option<u64>,
    cycle: Option<Cycle>,
    recorded: u64,
}

impl<D: Detector, C: Clock> Sequencer<D, C> {
    pub fn new(detector: D, clock: C) -> Self {
        Self {
            state: SequencerState::default(),
            detector,
            clock,
            next_tick_at: None,
            cycle: None,
            recorded: 0,
        }
    }

    pub fn state(&self) -> &SequencerState {
        &self.state
    }

    pub fn is_cycle_pending(&self) -> bool {
        self.cycle.is_some()
    }

    pub fn start(&mut self) {
        if self.state.is_running {
            return;
        }
        self.state.is_running = true;
        self.next_tick_at = Some(self.clock.now_ms() + TICK_PERIOD_MS);
    }

    pub fn stop(&mut self) {
        self.state.is_running = false;
        self.next_tick_at = None;
        self.cycle = None;
        self.state.is_danger_active = false;
        self.state.current_message.clear();
        self.state.active_safe_content = None;
    }

    /// One periodic check. Returns whether a detection cycle started.
    pub fn tick(&mut self) -> bool {
        if !self.state.is_running || self.cycle.is_some() {
            return false;
        }
        if !self.detector.detect() {
            return false;
        }
        self.trigger_cycle()
    }

    /// Starts a detection cycle without consulting the detector. Refused
    /// while stopped or while another cycle still has phases pending.
    pub fn trigger_cycle(&mut self) -> bool {
        if !self.state.is_running || self.cycle.is_some() {
            return false;
        }

        let now = self.clock.now_ms();
        let chosen = &SAFE_CONTENT[self.detector.pick(SAFE_CONTENT.len())];

        self.state.is_danger_active = true;
        self.state.current_message = DETECTED_MESSAGE.to_string();
        self.recorded += 1;
        self.state.history.push_front(DetectionEvent {
            id: self.recorded,
            at_ms: now,
            time: self.clock.display_time(now),
            message: BLOCKED_MESSAGE.to_string(),
            content: chosen.title.to_string(),
        });
        self.state.history.truncate(HISTORY_CAPACITY);

        self.cycle = Some(Cycle {
            started_at: now,
            chosen,
            next: Phase::Switch,
        });
        true
    }

    /// Abandons the current cycle and clears the alert, leaving the
    /// periodic check running.
    pub fn dismiss(&mut self) {
        self.cycle = None;
        self.state.is_danger_active = false;
        self.state.current_message.clear();
    }

    pub fn next_deadline(&self) -> Option<u64> {
        let phase = self.cycle.as_ref().map(Cycle::due_at);
        match (phase, self.next_tick_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Runs every phase and tick due at or before the current clock
    /// reading. Phases win ties with ticks.
    pub fn poll(&mut self) -> Vec<Effect> {
        let now = self.clock.now_ms();
        let mut effects = Vec::new();

        loop {
            let phase_due = self.cycle.as_ref().map(Cycle::due_at).filter(|&at| at <= now);
            let tick_due = self.next_tick_at.filter(|&at| at <= now);

            match (phase_due, tick_due) {
                (Some(p), Some(t)) if p <= t => self.advance_cycle(&mut effects),
                (Some(_), None) => self.advance_cycle(&mut effects),
                (_, Some(t)) => {
                    self.next_tick_at = Some(t + TICK_PERIOD_MS);
                    self.tick_at(t);
                }
                (None, None) => break,
            }
        }

        effects
    }

    fn tick_at(&mut self, at: u64) {
        if self.tick() {
            // A late poll must keep the cycle anchored to the tick that
            // started it, not to the moment the poll ran.
            if let Some(cycle) = self.cycle.as_mut() {
                cycle.started_at = at;
            }
            if let Some(event) = self.state.history.front_mut() {
                event.at_ms = at;
                event.time = self.clock.display_time(at);
            }
        }
    }

    fn advance_cycle(&mut self, effects: &mut Vec<Effect>) {
        let Some(cycle) = self.cycle.as_mut() else {
            return;
        };
        match cycle.next {
            Phase::Switch => {
                self.state.is_danger_active = false;
                self.state.current_message = SWITCHED_MESSAGE.to_string();
                self.state.active_safe_content = Some(cycle.chosen);
                effects.push(Effect::RedirectVideo(cycle.chosen));
                cycle.next = Phase::Clear;
            }
            Phase::Clear => {
                self.state.current_message.clear();
                self.cycle = None;
            }
        }
    }
}
