/// fib(35), the value the benchmark is expected to produce
pub const FIB_35: i32 = 9_227_465;

/// Naive doubly recursive Fibonacci.
///
/// Inputs below 2 are returned as is, negative ones included.
pub fn fib(n: i32) -> i32 {
    if n < 2 { return n; }
    fib(n - 2) + fib(n - 1)
}
