//! Fixed-depth temporal buffer of canonical laser scans.

use std::collections::VecDeque;

/// Most-recent-first buffer of the last `depth` laser scans.
///
/// Once primed, the buffer always holds exactly `depth` scans: `push`
/// drops the oldest entry for every new one, and `reset` refills it with
/// zero scans. The stack starts empty and is primed by the first `push`
/// (or an explicit `reset`), so stale history can never leak across an
/// episode boundary.
#[derive(Clone, Debug)]
pub struct LaserStack {
    scans: VecDeque<Vec<f32>>,
    depth: usize,
}

impl LaserStack {
    /// Create an empty stack that will hold `depth` scans once primed.
    pub fn new(depth: usize) -> Self {
        Self {
            scans: VecDeque::with_capacity(depth),
            depth,
        }
    }

    /// Configured depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of scans currently held (0 before priming, `depth` after).
    #[inline]
    pub fn len(&self) -> usize {
        self.scans.len()
    }

    /// Whether the stack has not been primed yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scans.is_empty()
    }

    /// Refill the buffer with `depth` zero scans of `scan_len` beams.
    pub fn reset(&mut self, scan_len: usize) {
        self.scans.clear();
        for _ in 0..self.depth {
            self.scans.push_back(vec![0.0; scan_len]);
        }
    }

    /// Insert `scan` as the most recent entry, dropping the oldest.
    ///
    /// If the buffer is not primed (empty, or left short by a depth
    /// change), it is zero-reset to the incoming scan's length first, so
    /// the fixed-size invariant holds from the very first push.
    pub fn push(&mut self, scan: Vec<f32>) {
        if self.scans.len() != self.depth {
            self.reset(scan.len());
        }
        self.scans.pop_back();
        self.scans.push_front(scan);
    }

    /// Iterate scans most-recent-first.
    pub fn iter(&self) -> impl Iterator<Item = &[f32]> {
        self.scans.iter().map(|s| s.as_slice())
    }

    /// Most recent scan, if primed.
    pub fn latest(&self) -> Option<&[f32]> {
        self.scans.front().map(|s| s.as_slice())
    }
}
