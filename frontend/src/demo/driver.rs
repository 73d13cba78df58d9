use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use rand::rngs::ThreadRng;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

use super::catalog::SafeContentOption;
use super::clock::{BrowserClock, Clock};
use super::detector::RandomDetector;
use super::sequencer::{Effect, Sequencer, SequencerState};

type DemoSequencer = Sequencer<RandomDetector<ThreadRng>, BrowserClock>;

/// Hands out a ticket per armed wakeup. Only the newest ticket is current;
/// arming again or cancelling makes every earlier one stale.
#[derive(Debug, Clone, Default)]
pub struct WakeupEpoch(Rc<Cell<u64>>);

impl WakeupEpoch {
    pub fn arm(&self) -> u64 {
        let ticket = self.0.get() + 1;
        self.0.set(ticket);
        ticket
    }

    pub fn cancel(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

/// Runs the sequencer on browser timers. Only one wakeup is ever armed:
/// a wakeup whose ticket is no longer current exits without touching the
/// sequencer.
#[derive(Clone)]
pub struct SequencerDriver {
    sequencer: Rc<RefCell<DemoSequencer>>,
    wakeup: WakeupEpoch,
    on_update: Callback<SequencerState>,
    on_redirect: Callback<&'static SafeContentOption>,
}

impl SequencerDriver {
    pub fn new(
        on_update: Callback<SequencerState>,
        on_redirect: Callback<&'static SafeContentOption>,
    ) -> Self {
        Self {
            sequencer: Rc::new(RefCell::new(Sequencer::new(
                RandomDetector::thread_local(),
                BrowserClock,
            ))),
            wakeup: WakeupEpoch::default(),
            on_update,
            on_redirect,
        }
    }

    pub fn start(&self) {
        self.sequencer.borrow_mut().start();
        log::info!("Detection demo started");
        self.pump();
    }

    pub fn stop(&self) {
        self.wakeup.cancel();
        self.sequencer.borrow_mut().stop();
        log::info!("Detection demo stopped");
        let state = self.sequencer.borrow().state().clone();
        self.on_update.emit(state);
    }

    pub fn simulate(&self) {
        {
            let mut sequencer = self.sequencer.borrow_mut();
            if !sequencer.trigger_cycle() {
                if sequencer.is_cycle_pending() {
                    log::debug!("Simulated detection ignored, a cycle is already in flight");
                } else {
                    log::debug!("Simulated detection ignored, demo is not running");
                }
            }
        }
        self.pump();
    }

    pub fn dismiss(&self) {
        self.sequencer.borrow_mut().dismiss();
        self.pump();
    }

    fn pump(&self) {
        let (effects, state, deadline) = {
            let mut sequencer = self.sequencer.borrow_mut();
            let effects = sequencer.poll();
            (effects, sequencer.state().clone(), sequencer.next_deadline())
        };

        for effect in effects {
            match effect {
                Effect::RedirectVideo(option) => {
                    gloo_console::log!("Switching video to", option.title);
                    self.on_redirect.emit(option);
                }
            }
        }
        self.on_update.emit(state);
        self.arm(deadline);
    }

    fn arm(&self, deadline: Option<u64>) {
        let ticket = self.wakeup.arm();

        let Some(deadline) = deadline else {
            return;
        };
        let delay = deadline.saturating_sub(BrowserClock.now_ms());
        let delay = u32::try_from(delay).unwrap_or(u32::MAX);

        let driver = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if driver.wakeup.is_current(ticket) {
                driver.pump();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_makes_the_armed_wakeup_stale() {
        let wakeup = WakeupEpoch::default();
        let ticket = wakeup.arm();
        assert!(wakeup.is_current(ticket));

        wakeup.cancel();
        assert!(!wakeup.is_current(ticket));
    }

    #[test]
    fn rearming_supersedes_the_earlier_wakeup() {
        let wakeup = WakeupEpoch::default();
        let first = wakeup.arm();
        let second = wakeup.arm();
        assert!(!wakeup.is_current(first));
        assert!(wakeup.is_current(second));
    }

    #[test]
    fn clones_share_one_counter() {
        let wakeup = WakeupEpoch::default();
        let ticket = wakeup.arm();
        wakeup.clone().cancel();
        assert!(!wakeup.is_current(ticket));
    }
}
