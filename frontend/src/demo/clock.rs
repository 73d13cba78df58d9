/// Time source for the sequencer. Milliseconds are only compared with each
/// other, so any monotonic origin works.
pub trait Clock {
    fn now_ms(&self) -> u64;

    /// Wall-clock label shown in the detection history.
    fn display_time(&self, at_ms: u64) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn display_time(&self, at_ms: u64) -> String {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(at_ms as f64));
        date.to_locale_time_string("en-US").into()
    }
}

#[cfg(test)]
pub use manual::ManualClock;

#[cfg(test)]
mod manual {
    use super::Clock;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Hand-advanced clock; clones share the same reading.
    #[derive(Debug, Clone, Default)]
    pub struct ManualClock(Rc<Cell<u64>>);

    impl ManualClock {
        pub fn set(&self, ms: u64) {
            self.0.set(ms);
        }

        pub fn advance(&self, ms: u64) {
            self.0.set(self.0.get() + ms);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> u64 {
            self.0.get()
        }

        fn display_time(&self, at_ms: u64) -> String {
            format!("t+{at_ms}ms")
        }
    }
}
