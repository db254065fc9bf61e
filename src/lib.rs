pub mod bench;
pub mod error;
pub mod fib;
pub mod stats;
pub mod stopwatch;

pub use error::Error;
