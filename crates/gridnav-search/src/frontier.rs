//! Frontier ordering policies.
//!
//! The traversal loop is the same for every strategy; only the order in
//! which discovered cells leave the frontier differs. Each policy implements
//! [`Frontier`]:
//!
//! | Policy | Removes | Used by |
//! |---|---|---|
//! | [`FifoFrontier`] | oldest insertion | breadth-first |
//! | [`LifoFrontier`] | newest insertion | depth-first |
//! | [`PriorityFrontier`] | lowest score, oldest first on ties | A*, greedy best-first |

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use gridnav_core::Pos;

use crate::heuristic::Heuristic;

/// The set of discovered, not yet explored cells.
pub trait Frontier {
    /// Queue `pos`, reached from the start in `cost` steps.
    fn insert(&mut self, pos: Pos, cost: u32);

    /// Remove and return the next cell to explore.
    fn remove_next(&mut self) -> Option<Pos>;

    /// Number of queued entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a strictly cheaper route to a cell that is still queued
    /// should replace the recorded one. Only cost-ordered policies need it;
    /// the loop then inserts the cell again and skips the stale entry when
    /// it surfaces.
    fn relaxes(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// FIFO / LIFO
// ---------------------------------------------------------------------------

/// First in, first out.
#[derive(Debug, Clone, Default)]
pub struct FifoFrontier {
    queue: VecDeque<Pos>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    #[inline]
    fn insert(&mut self, pos: Pos, _cost: u32) {
        self.queue.push_back(pos);
    }

    #[inline]
    fn remove_next(&mut self) -> Option<Pos> {
        self.queue.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out.
#[derive(Debug, Clone, Default)]
pub struct LifoFrontier {
    stack: Vec<Pos>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    #[inline]
    fn insert(&mut self, pos: Pos, _cost: u32) {
        self.stack.push(pos);
    }

    #[inline]
    fn remove_next(&mut self) -> Option<Pos> {
        self.stack.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.stack.len()
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// How a [`PriorityFrontier`] scores a queued cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scoring {
    /// `f = g + h`: A*.
    CostPlusEstimate,
    /// `f = h`: greedy best-first.
    Estimate,
}

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// score first and, among equal scores, the earliest insertion.
#[derive(Clone, Copy, Debug)]
struct Entry {
    score: f64,
    seq: u64,
    pos: Pos,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lowest score first, insertion order breaking ties.
#[derive(Debug, Clone)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
    stop: Pos,
    heuristic: Heuristic,
    scoring: Scoring,
}

impl PriorityFrontier {
    pub fn new(stop: Pos, heuristic: Heuristic, scoring: Scoring) -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
            stop,
            heuristic,
            scoring,
        }
    }

    /// A* ordering towards `stop`.
    pub fn astar(stop: Pos, heuristic: Heuristic) -> Self {
        Self::new(stop, heuristic, Scoring::CostPlusEstimate)
    }

    /// Greedy best-first ordering towards `stop`.
    pub fn greedy(stop: Pos, heuristic: Heuristic) -> Self {
        Self::new(stop, heuristic, Scoring::Estimate)
    }

    fn score(&self, pos: Pos, cost: u32) -> f64 {
        let h = self.heuristic.estimate(pos, self.stop);
        match self.scoring {
            Scoring::CostPlusEstimate => f64::from(cost) + h,
            Scoring::Estimate => h,
        }
    }
}

impl Frontier for PriorityFrontier {
    fn insert(&mut self, pos: Pos, cost: u32) {
        let score = self.score(pos, cost);
        self.heap.push(Entry {
            score,
            seq: self.seq,
            pos,
        });
        self.seq += 1;
    }

    #[inline]
    fn remove_next(&mut self) -> Option<Pos> {
        self.heap.pop().map(|e| e.pos)
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    fn relaxes(&self) -> bool {
        self.scoring == Scoring::CostPlusEstimate
    }
}
