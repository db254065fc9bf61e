use std::fmt;
use std::hint::black_box;
use std::io::Write;

use tracing::{debug, enabled, warn, Level};

use crate::error::Error;
use crate::fib::{fib, FIB_35};
use crate::stats::{fib_counted, Stats};
use crate::stopwatch::{measure, Elapsed};

/// The fixed benchmark input
pub const INPUT: i32 = 35;

#[derive(Clone, Copy, Debug)]
pub struct Report {
    pub n: i32,
    pub value: i32,
    pub elapsed: Elapsed,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "elapsed: {}", self.elapsed)
    }
}

/// Times a single `fib(35)`.
pub fn run() -> Report {
    let report = run_with(INPUT);
    if report.value != FIB_35 {
        warn!(value = report.value, expected = FIB_35, "unexpected result for fib({})", INPUT);
    }
    if enabled!(Level::DEBUG) {
        let stats = call_tree(INPUT);
        debug!(
            num_calls = stats.num_calls.get(),
            num_leaves = stats.num_leaves.get(),
            max_depth = stats.max_depth.get(),
            "call tree of fib({})",
            INPUT
        );
    }
    report
}

pub fn run_with(n: i32) -> Report {
    let (value, elapsed) = measure(|| fib(black_box(n)));
    debug!(n, value, seconds = elapsed.as_secs_f64(), "fib done");
    Report { n, value, elapsed }
}

/// Replays `fib(n)` outside the timed region to record its call tree.
pub fn call_tree(n: i32) -> Stats {
    let stats = Stats::new();
    let _ = fib_counted(n, &stats);
    stats
}

pub fn write_report<W: Write>(w: &mut W, report: &Report) -> Result<(), Error> {
    writeln!(w, "{}", report)?;
    w.flush()?;
    Ok(())
}
