//! Reference values for checking the recursive implementation.

pub fn fib(n: u64) -> u64 {
    if n < 2 { return n; }
    let mut f = (0, 1);
    for _ in 2..=n { f = (f.1, f.0 + f.1); }
    f.1
}

// Nodes in the call tree of the doubly recursive fib
pub fn num_calls(n: u64) -> u64 {
    2 * fib(n + 1) - 1
}
