use std::fmt;
use std::time::{Duration, Instant};

/// Wall-clock time between two `Instant` samples.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Elapsed(Duration);

impl Elapsed {
    pub fn as_secs_f64(&self) -> f64 {
        self.0.as_secs_f64()
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl From<Duration> for Elapsed {
    fn from(duration: Duration) -> Elapsed {
        Elapsed(duration)
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.6}", self.as_secs_f64())
    }
}

#[derive(Debug)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Stopwatch {
        Stopwatch { start: Instant::now() }
    }

    pub fn elapsed(&self) -> Elapsed {
        Elapsed(self.start.elapsed())
    }
}

/// Runs `f` once between two clock reads.
pub fn measure<F, T>(f: F) -> (T, Elapsed)
where
    F: FnOnce() -> T,
{
    let stopwatch = Stopwatch::start();
    let result = f();
    (result, stopwatch.elapsed())
}
