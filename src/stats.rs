use std::cell::Cell;

/// Shape of one recursive call tree.
#[derive(Debug, Default)]
pub struct Stats {
    pub num_calls: Cell<u64>,
    pub num_leaves: Cell<u64>,
    pub max_depth: Cell<u32>,
}

impl Stats {
    pub fn new() -> Stats {
        Stats::default()
    }

    fn enter(&self, depth: u32) {
        self.num_calls.set(self.num_calls.get() + 1);
        if depth > self.max_depth.get() {
            self.max_depth.set(depth);
        }
    }

    fn leaf(&self) {
        self.num_leaves.set(self.num_leaves.get() + 1);
    }
}

/// Same recurrence as `fib::fib`, recording the call tree in `stats`.
/// Never timed.
pub fn fib_counted(n: i32, stats: &Stats) -> i32 {
    walk(n, 0, stats)
}

fn walk(n: i32, depth: u32, stats: &Stats) -> i32 {
    stats.enter(depth);
    if n < 2 {
        stats.leaf();
        return n;
    }
    walk(n - 2, depth + 1, stats) + walk(n - 1, depth + 1, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fib::fib;

    #[test]
    fn counted_matches_fib() {
        for n in 0..=20 {
            let stats = Stats::new();
            assert_eq!(fib_counted(n, &stats), fib(n));
        }
    }

    #[test]
    fn call_tree_shape() {
        // 2 * fib(n + 1) - 1 nodes, fib(n + 1) of them leaves
        for n in 1..=20 {
            let stats = Stats::new();
            let _ = fib_counted(n, &stats);
            let leaves = fib(n + 1) as u64;
            assert_eq!(stats.num_calls.get(), 2 * leaves - 1);
            assert_eq!(stats.num_leaves.get(), leaves);
            assert_eq!(stats.max_depth.get(), n as u32 - 1);
        }
    }

    #[test]
    fn base_case_is_one_call() {
        let stats = Stats::new();
        assert_eq!(fib_counted(-3, &stats), -3);
        assert_eq!(stats.num_calls.get(), 1);
        assert_eq!(stats.num_leaves.get(), 1);
        assert_eq!(stats.max_depth.get(), 0);
    }
}
