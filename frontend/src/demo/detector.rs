use rand::rngs::ThreadRng;
use rand::Rng;

/// Samples above this count as a detection (40% per tick).
pub const DETECTION_THRESHOLD: f64 = 0.6;

/// Decides whether a tick "finds" harmful content and which safe video
/// replaces it.
pub trait Detector {
    fn detect(&mut self) -> bool;

    /// Index into a catalog of `choices` entries. `choices` is never zero.
    fn pick(&mut self, choices: usize) -> usize;
}

/// The demo's stand-in for a real classifier: a coin weighted by
/// [`DETECTION_THRESHOLD`].
#[derive(Debug, Clone)]
pub struct RandomDetector<R> {
    rng: R,
}

impl<R: Rng> RandomDetector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDetector<ThreadRng> {
    pub fn thread_local() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> Detector for RandomDetector<R> {
    fn detect(&mut self) -> bool {
        let sample: f64 = self.rng.gen();
        sample > DETECTION_THRESHOLD
    }

    fn pick(&mut self, choices: usize) -> usize {
        self.rng.gen_range(0..choices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn detection_rate_is_about_forty_percent() {
        let mut detector = RandomDetector::new(StdRng::seed_from_u64(7));
        let hits = (0..10_000).filter(|_| detector.detect()).count();
        assert!((3_600..4_400).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn pick_reaches_every_index() {
        let mut detector = RandomDetector::new(StdRng::seed_from_u64(42));
        let mut seen = [0usize; 6];
        for _ in 0..600 {
            seen[detector.pick(6)] += 1;
        }
        assert!(seen.iter().all(|&n| n > 50), "{seen:?}");
    }
}
