//! Indexed binary min-heap keyed by tentative distance.
//!
//! # Layout
//!
//! Two co-indexed containers:
//!
//! ```text
//! slots:    [ (j3, 4) (j0, 7) (j2, ∞) (j1, ∞) ]     binary heap by `dist`
//! position: [ Some(1) Some(3) Some(2) Some(0) ]     JunctionId → slot
//! ```
//!
//! `position[v] == Some(i)` iff `slots[i].junction == v`; an extracted
//! junction maps to `None` for the rest of the heap's life.  Every primitive
//! below restores that invariant before returning, which is what makes
//! `decrease_key` O(log n) instead of a linear scan.
//!
//! Junction ids outside `0..n` (the `n` given to [`IndexedMinHeap::build`])
//! are contract violations and panic.

use tl_core::{Cost, JunctionId, INFINITE_COST};

/// A `(junction, tentative distance)` pair stored in the heap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeapEntry {
    pub junction: JunctionId,
    pub dist:     Cost,
}

/// Binary min-heap over junctions with O(log n) `decrease_key`.
#[derive(Clone, Debug)]
pub struct IndexedMinHeap {
    slots:    Vec<HeapEntry>,
    position: Vec<Option<usize>>,
}

impl IndexedMinHeap {
    /// One entry per junction `0..n`, all at [`INFINITE_COST`], in id order.
    ///
    /// Equal keys already satisfy the heap property, so no sifting is needed.
    pub fn build(n: usize) -> Self {
        let slots = (0..n)
            .map(|i| HeapEntry { junction: JunctionId(i as u32), dist: INFINITE_COST })
            .collect();
        let position = (0..n).map(Some).collect();
        Self { slots, position }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// `true` until `v` has been extracted.
    ///
    /// # Panics
    /// Panics if `v` is outside the range the heap was built for.
    #[inline]
    pub fn contains(&self, v: JunctionId) -> bool {
        self.position[v.index()].is_some()
    }

    /// Current key of `v`, or `None` once extracted.
    pub fn distance(&self, v: JunctionId) -> Option<Cost> {
        self.position[v.index()].map(|i| self.slots[i].dist)
    }

    /// The minimum entry without removing it.
    pub fn peek(&self) -> Option<HeapEntry> {
        self.slots.first().copied()
    }

    /// Remove and return the entry with the smallest distance.
    ///
    /// Ties go to whichever entry the array structure puts at the root, which
    /// is deterministic for a given sequence of operations.
    pub fn extract_min(&mut self) -> Option<HeapEntry> {
        let last = self.slots.pop()?;
        self.position[last.junction.index()] = None;
        if self.slots.is_empty() {
            return Some(last);
        }

        let root = std::mem::replace(&mut self.slots[0], last);
        self.position[root.junction.index()] = None;
        self.position[last.junction.index()] = Some(0);
        self.sift_down(0);
        Some(root)
    }

    /// Lower the key of `v` to `dist` and restore heap order.
    ///
    /// A no-op once `v` has been extracted.  `dist` must not exceed the
    /// current key; that precondition is checked in debug builds.
    ///
    /// # Panics
    /// Panics if `v` is outside the range the heap was built for.
    pub fn decrease_key(&mut self, v: JunctionId, dist: Cost) {
        let Some(mut i) = self.position[v.index()] else {
            return;
        };
        debug_assert!(
            dist <= self.slots[i].dist,
            "decrease_key would raise junction {v} from {} to {dist}",
            self.slots[i].dist
        );
        self.slots[i].dist = dist;

        while i > 0 {
            let parent = (i - 1) / 2;
            if self.slots[i].dist >= self.slots[parent].dist {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    /// Check the position index and heap order.  O(n); meant for tests and
    /// debug assertions.
    pub fn is_consistent(&self) -> bool {
        let indexed_ok = self
            .slots
            .iter()
            .enumerate()
            .all(|(i, e)| self.position.get(e.junction.index()) == Some(&Some(i)));
        let live = self.position.iter().filter(|p| p.is_some()).count();
        let ordered = (1..self.slots.len())
            .all(|i| self.slots[(i - 1) / 2].dist <= self.slots[i].dist);
        indexed_ok && live == self.slots.len() && ordered
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn sift_down(&mut self, mut i: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.slots[left].dist < self.slots[smallest].dist {
                smallest = left;
            }
            if right < len && self.slots[right].dist < self.slots[smallest].dist {
                smallest = right;
            }
            if smallest == i {
                return;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.position[self.slots[a].junction.index()] = Some(a);
        self.position[self.slots[b].junction.index()] = Some(b);
    }
}
