use std::cmp::Ordering;
use std::collections::BinaryHeap;

use voxgraph_core::{Grid3, Point3, Shape};

use crate::neighbors::Neighbors;
use crate::traits::Weight;

/// Sentinel parent index for the source and for unreached voxels.
const NO_PARENT: usize = usize::MAX;

/// Priority-queue entry, ordered by tentative distance.
#[derive(Clone, Copy, Debug)]
pub(crate) struct QueueEntry {
    pub(crate) idx: usize,
    pub(crate) dist: f64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest dist first; equal
        // distances pop in ascending index order.
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

/// Working memory for one single-source Dijkstra run.
///
/// Created per call and dropped with it; nothing survives between calls.
pub(crate) struct Search<'a, T> {
    shape: Shape,
    weights: &'a [T],
    pub(crate) dist: Vec<f64>,
    parent: Vec<usize>,
    settled: Vec<bool>,
    open: BinaryHeap<QueueEntry>,
    nbuf: Neighbors,
    pub(crate) popped: usize,
}

impl<'a, T: Weight> Search<'a, T> {
    /// Seed a search at `source`. Parents are only recorded when
    /// `track_parents` is set.
    pub(crate) fn new(grid: &'a Grid3<T>, source: usize, track_parents: bool) -> Self {
        let len = grid.len();
        let mut dist = vec![f64::INFINITY; len];
        dist[source] = 0.0;
        let mut open = BinaryHeap::new();
        open.push(QueueEntry {
            idx: source,
            dist: 0.0,
        });
        Self {
            shape: grid.shape(),
            weights: grid.as_slice(),
            dist,
            parent: if track_parents {
                vec![NO_PARENT; len]
            } else {
                Vec::new()
            },
            settled: vec![false; len],
            open,
            nbuf: Neighbors::new(),
            popped: 0,
        }
    }

    /// Relax until `goal` is settled or the queue is empty.
    ///
    /// Returns `true` if `goal` was reached. With `goal == None` the search
    /// runs to exhaustion and always returns `false`.
    pub(crate) fn run(&mut self, goal: Option<usize>) -> bool {
        while let Some(current) = self.open.pop() {
            let ci = current.idx;
            // Skip stale entries.
            if self.settled[ci] || current.dist > self.dist[ci] {
                continue;
            }
            self.settled[ci] = true;
            self.popped += 1;

            if Some(ci) == goal {
                return true;
            }

            let cp = self.shape.point(ci);
            let current_dist = current.dist;

            for &np in self.nbuf.within(cp, self.shape) {
                let Some(ni) = self.shape.index(np) else {
                    continue;
                };
                if self.settled[ni] {
                    continue;
                }
                let tentative = current_dist + self.weights[ni].weight();
                if tentative >= self.dist[ni] {
                    continue;
                }
                self.dist[ni] = tentative;
                if !self.parent.is_empty() {
                    self.parent[ni] = ci;
                }
                self.open.push(QueueEntry {
                    idx: ni,
                    dist: tentative,
                });
            }
        }
        false
    }

    /// Backtrack from `goal` to the source and return the path source-first.
    pub(crate) fn path_to(&self, goal: usize) -> Vec<Point3> {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            path.push(self.shape.point(ci));
            ci = self.parent[ci];
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_pops_smallest_then_lowest_index() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry { idx: 4, dist: 2.0 });
        heap.push(QueueEntry { idx: 9, dist: 1.0 });
        heap.push(QueueEntry { idx: 3, dist: 1.0 });
        heap.push(QueueEntry {
            idx: 0,
            dist: f64::INFINITY,
        });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.idx)).collect();
        assert_eq!(order, vec![3, 9, 4, 0]);
    }

    #[test]
    fn exhaustive_run_settles_every_voxel() {
        let grid = Grid3::new(Shape::new(3, 3, 3), 1u8);
        let mut search = Search::new(&grid, 0, false);
        assert!(!search.run(None));
        assert_eq!(search.popped, 27);
        assert!(search.dist.iter().all(|d| d.is_finite()));
    }

    #[test]
    fn early_exit_stops_at_goal() {
        let grid = Grid3::new(Shape::new(10, 1, 1), 1u8);
        let mut search = Search::new(&grid, 0, true);
        assert!(search.run(Some(3)));
        assert_eq!(search.popped, 4);
        assert_eq!(search.path_to(3).len(), 4);
        assert_eq!(search.path_to(0), vec![Point3::ZERO]);
    }
}
