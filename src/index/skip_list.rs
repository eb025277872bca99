//! Span-Indexed Skip List
//!
//! An ordered skip list in the style of a sorted-set engine's internal index.
//! Elements are kept in ascending `Ord` order and every forward edge records
//! its span, so the structure answers rank queries as well as membership.
//!
//! # Span Semantics
//!
//! - `links[level].span` = number of rank positions crossed by following
//!   `links[level].next`, counting the destination node itself.
//! - An edge that runs off the end spans every remaining node, so
//!   `rank(node) + span == len` for the last edge at each level.
//! - Summing spans along any descent from the header gives the 1-based rank
//!   of the node reached.
//!
//! ```text
//! Level 2: HEAD --3--------------------> C ----------------> NULL
//! Level 1: HEAD --1--> A --2-----------> C --1--> D -------> NULL
//! Level 0: HEAD --1--> A --1--> B --1--> C --1--> D --0----> NULL
//!                 (1)      (2)      (3)      (4)
//! ```
//!
//! Level 0 is doubly linked through `backward`, and `tail` names the last
//! node, so neighbour windows and reverse iteration never search.
//!
//! # Operations
//!
//! - `insert(item)`: O(log n) expected, caller guarantees `item` is absent
//! - `remove(&item)`: O(log n) expected, returns the removed element
//! - `contains(&item)` / `rank_of(&item)`: O(log n) expected
//! - `get_by_rank(rank)`: O(log n) expected
//! - `range(start, end)`: O(log n + k)
//! - `neighbors(&item, high, low)`: O(log n + high + low)
//!
//! # Storage
//!
//! Nodes live in an arena and refer to each other by `u32` index. Slot 0 is
//! the header: it holds no element and always owns `MAX_LEVEL` links. Slots of
//! removed nodes go on a free list and are reused by later inserts.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::level::LevelGenerator;
use super::level::RandomLevels;
use super::MAX_LEVEL;

/// Node index type. u32 saves space vs usize on 64-bit.
type Idx = u32;

/// Null index marker.
const NULL: Idx = Idx::MAX;

/// Arena slot of the header node.
const HEAD: Idx = 0;

/// One forward edge of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Link {
    next: Idx,
    span: usize,
}

impl Link {
    const EMPTY: Link = Link { next: NULL, span: 0 };
}

/// A node in the skip list. Most nodes are one or two levels tall, so the
/// links stay inline.
struct Node<T> {
    /// `None` for the header and for free slots.
    item: Option<T>,
    /// Level 0 predecessor, `NULL` for the first node.
    backward: Idx,
    links: SmallVec<[Link; 4]>,
}

impl<T> Node<T> {
    fn new(item: Option<T>, height: usize) -> Self {
        Node {
            item,
            backward: NULL,
            links: SmallVec::from_elem(Link::EMPTY, height),
        }
    }

    fn height(&self) -> usize {
        self.links.len()
    }
}

/// An ordered skip list that tracks the rank of every element.
///
/// `T`'s `Ord` impl defines rank order: the smallest element has rank 1.
/// Elements must be unique under that order; `insert` does not check.
pub struct SkipList<T, L = RandomLevels> {
    /// Arena of nodes; slot 0 is the header.
    nodes: Vec<Node<T>>,
    /// Slots freed by `remove`, reused by `insert`.
    free_list: Vec<Idx>,
    /// Last node at level 0, `NULL` when empty.
    tail: Idx,
    /// Number of elements (not counting the header).
    len: usize,
    /// Number of active levels, at least 1.
    level: usize,
    /// Height source for new nodes.
    levels: L,
}

impl<T> SkipList<T, RandomLevels> {
    /// An empty list drawing heights from an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_levels(RandomLevels::new())
    }
}

impl<T> Default for SkipList<T, RandomLevels> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, L> SkipList<T, L> {
    /// An empty list drawing heights from `levels`.
    pub fn with_levels(levels: L) -> Self {
        Self::with_capacity_and_levels(0, levels)
    }

    /// An empty list with arena room for `capacity` elements.
    pub fn with_capacity_and_levels(capacity: usize, levels: L) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node::new(None, MAX_LEVEL));
        SkipList {
            nodes,
            free_list: Vec::new(),
            tail: NULL,
            len: 0,
            level: 1,
            levels,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of active levels.
    pub fn level(&self) -> usize {
        self.level
    }

    /// The smallest element (rank 1).
    pub fn first(&self) -> Option<&T> {
        match self.node(HEAD).links[0].next {
            NULL => None,
            idx => Some(self.item(idx)),
        }
    }

    /// The largest element (rank `len`).
    pub fn last(&self) -> Option<&T> {
        match self.tail {
            NULL => None,
            idx => Some(self.item(idx)),
        }
    }

    /// Iterate over all elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.node(HEAD).links[0].next,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Drop every element and reset to a single active level.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        for link in self.nodes[HEAD as usize].links.iter_mut() {
            *link = Link::EMPTY;
        }
        self.free_list.clear();
        self.tail = NULL;
        self.len = 0;
        self.level = 1;
    }

    // --- Node access helpers ---

    fn node(&self, idx: Idx) -> &Node<T> {
        &self.nodes[idx as usize]
    }

    fn node_mut(&mut self, idx: Idx) -> &mut Node<T> {
        &mut self.nodes[idx as usize]
    }

    fn item(&self, idx: Idx) -> &T {
        self.node(idx)
            .item
            .as_ref()
            .expect("linked node holds an item")
    }

    fn alloc_node(&mut self, item: T, height: usize) -> Idx {
        if let Some(idx) = self.free_list.pop() {
            let node = self.node_mut(idx);
            node.item = Some(item);
            node.backward = NULL;
            node.links.clear();
            node.links.resize(height, Link::EMPTY);
            idx
        } else {
            let idx = self.nodes.len();
            assert!(idx < NULL as usize, "skip list arena is full");
            self.nodes.push(Node::new(Some(item), height));
            idx as Idx
        }
    }

    /// Find the node at 1-based `rank`.
    fn node_at(&self, rank: usize) -> Option<Idx> {
        if rank == 0 || rank > self.len {
            return None;
        }

        let mut idx = HEAD;
        let mut traversed = 0usize;
        for level in (0..self.level).rev() {
            loop {
                let link = self.node(idx).links[level];
                if link.next == NULL || traversed + link.span > rank {
                    break;
                }
                traversed += link.span;
                idx = link.next;
            }
            if traversed == rank {
                return Some(idx);
            }
        }
        None
    }

    /// Element at 1-based `rank`, or `None` outside `[1, len]`.
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        self.node_at(rank).map(|idx| self.item(idx))
    }

    /// Elements ranked `start..=end` as `(rank, element)` pairs.
    ///
    /// Both bounds are clamped to `[1, len]`; an inverted window is empty.
    pub fn range(&self, start: usize, end: usize) -> Vec<(usize, &T)> {
        let start = start.max(1);
        let end = end.min(self.len);
        if start > end {
            return Vec::new();
        }

        let Some(mut idx) = self.node_at(start) else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(end - start + 1);
        let mut rank = start;
        while idx != NULL && rank <= end {
            out.push((rank, self.item(idx)));
            idx = self.node(idx).links[0].next;
            rank += 1;
        }
        out
    }

    /// Walk the whole structure and panic if any invariant is broken.
    ///
    /// Checks strict ordering, backward links, the tail, the element count,
    /// and the span of every active edge. O(n log n); meant for tests.
    pub fn check_invariants(&self)
    where
        T: Ord,
    {
        assert!(
            (1..=MAX_LEVEL).contains(&self.level),
            "INVARIANT VIOLATED: level={} out of range",
            self.level
        );

        // Invariant 1: level 0 is the full sorted sequence, doubly linked.
        let mut ranks = vec![0usize; self.nodes.len()];
        let mut prev = NULL;
        let mut idx = self.node(HEAD).links[0].next;
        let mut count = 0usize;
        while idx != NULL {
            count += 1;
            ranks[idx as usize] = count;
            assert_eq!(
                self.node(idx).backward,
                prev,
                "INVARIANT VIOLATED: backward link at rank {}",
                count
            );
            if prev != NULL {
                assert!(
                    self.item(prev).cmp(self.item(idx)) == Ordering::Less,
                    "INVARIANT VIOLATED: order broken at rank {}",
                    count
                );
            }
            prev = idx;
            idx = self.node(idx).links[0].next;
        }

        // Invariant 3: len matches the level 0 walk.
        assert_eq!(
            count, self.len,
            "INVARIANT VIOLATED: walk count={} != len()={}",
            count, self.len
        );
        assert_eq!(self.tail, prev, "INVARIANT VIOLATED: tail is not the last node");

        // Invariant 2: every active edge spans exactly the positions it skips.
        for level in 0..self.level {
            let mut idx = HEAD;
            loop {
                let link = self.node(idx).links[level];
                let here = ranks[idx as usize];
                let expected = match link.next {
                    NULL => self.len - here,
                    next => {
                        assert!(
                            self.node(next).height() > level,
                            "INVARIANT VIOLATED: level {} edge to a shorter node",
                            level
                        );
                        ranks[next as usize] - here
                    }
                };
                assert_eq!(
                    link.span, expected,
                    "INVARIANT VIOLATED: span at level {} from rank {}",
                    level, here
                );
                if link.next == NULL {
                    break;
                }
                idx = link.next;
            }
        }

        if self.level > 1 {
            assert_ne!(
                self.node(HEAD).links[self.level - 1].next,
                NULL,
                "INVARIANT VIOLATED: empty top level {}",
                self.level
            );
        }
    }
}

impl<T: Ord, L> SkipList<T, L> {
    /// Descend towards `item`, advancing while the next element is `<= item`.
    /// Returns the matching node and its rank.
    fn locate(&self, item: &T) -> Option<(Idx, usize)> {
        let mut idx = HEAD;
        let mut rank = 0usize;
        for level in (0..self.level).rev() {
            loop {
                let link = self.node(idx).links[level];
                if link.next == NULL || self.item(link.next) > item {
                    break;
                }
                rank += link.span;
                idx = link.next;
            }
            // idx may still be the header here.
            if idx != HEAD && self.item(idx) == item {
                return Some((idx, rank));
            }
        }
        None
    }

    pub fn contains(&self, item: &T) -> bool {
        self.locate(item).is_some()
    }

    /// 1-based rank of the element equal to `item`.
    pub fn rank_of(&self, item: &T) -> Option<usize> {
        self.locate(item).map(|(_, rank)| rank)
    }

    /// The window around `item`: up to `high` elements before it, `item`
    /// itself, then up to `low` elements after it, as `(rank, element)` pairs.
    ///
    /// Empty if `item` is absent. Near either end the window is cut short.
    pub fn neighbors(&self, item: &T, high: usize, low: usize) -> Vec<(usize, &T)> {
        let Some((idx, rank)) = self.locate(item) else {
            return Vec::new();
        };

        let mut above: Vec<Idx> = Vec::new();
        let mut prev = self.node(idx).backward;
        while prev != NULL && above.len() < high {
            above.push(prev);
            prev = self.node(prev).backward;
        }

        let below = low.min(self.len - rank);
        let mut out = Vec::with_capacity(above.len() + 1 + below);
        let first_rank = rank - above.len();
        for (offset, &prev) in above.iter().rev().enumerate() {
            out.push((first_rank + offset, self.item(prev)));
        }
        out.push((rank, self.item(idx)));

        let mut next = self.node(idx).links[0].next;
        let mut next_rank = rank + 1;
        while next != NULL && next_rank <= rank + below {
            out.push((next_rank, self.item(next)));
            next = self.node(next).links[0].next;
            next_rank += 1;
        }
        out
    }

    /// Remove the element equal to `item`, returning it.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let mut update = [HEAD; MAX_LEVEL];
        let mut idx = HEAD;
        for level in (0..self.level).rev() {
            loop {
                let next = self.node(idx).links[level].next;
                if next == NULL || self.item(next) >= item {
                    break;
                }
                idx = next;
            }
            update[level] = idx;
        }

        // Equality is only checked once, at level 0.
        let target = self.node(idx).links[0].next;
        if target == NULL || self.item(target) != item {
            return None;
        }

        for level in 0..self.level {
            let pred = update[level];
            if self.node(pred).links[level].next == target {
                let gone = self.node(target).links[level];
                let link = &mut self.node_mut(pred).links[level];
                link.next = gone.next;
                link.span = link.span + gone.span - 1;
            } else {
                self.node_mut(pred).links[level].span -= 1;
            }
        }

        let next = self.node(target).links[0].next;
        let backward = self.node(target).backward;
        if next != NULL {
            self.node_mut(next).backward = backward;
        } else {
            self.tail = backward;
        }

        while self.level > 1 && self.node(HEAD).links[self.level - 1].next == NULL {
            self.level -= 1;
        }

        self.len -= 1;
        self.free_list.push(target);
        self.node_mut(target).item.take()
    }

    /// Insert `item` with an explicit height, clamped to `1..=MAX_LEVEL`.
    ///
    /// The caller guarantees no equal element is present.
    pub fn insert_with_level(&mut self, item: T, level: usize) {
        let height = level.clamp(1, MAX_LEVEL);

        // Splice point per level and the rank accumulated to reach it.
        let mut update = [HEAD; MAX_LEVEL];
        let mut rank = [0usize; MAX_LEVEL];
        let mut idx = HEAD;
        for level in (0..self.level).rev() {
            rank[level] = if level + 1 == self.level { 0 } else { rank[level + 1] };
            loop {
                let link = self.node(idx).links[level];
                if link.next == NULL || self.item(link.next) >= &item {
                    break;
                }
                rank[level] += link.span;
                idx = link.next;
            }
            update[level] = idx;
        }

        if height > self.level {
            // New levels start at the header and skip everything.
            for level in self.level..height {
                rank[level] = 0;
                update[level] = HEAD;
                self.node_mut(HEAD).links[level].span = self.len;
            }
            log::trace!("skip list grew from {} to {} levels", self.level, height);
            self.level = height;
        }

        let new_idx = self.alloc_node(item, height);

        for level in 0..height {
            let pred = update[level];
            let old = self.node(pred).links[level];
            let skipped = rank[0] - rank[level];
            self.node_mut(new_idx).links[level] = Link {
                next: old.next,
                span: old.span - skipped,
            };
            self.node_mut(pred).links[level] = Link {
                next: new_idx,
                span: skipped + 1,
            };
        }

        // Untouched levels above the new node now skip one more position.
        for level in height..self.level {
            self.node_mut(update[level]).links[level].span += 1;
        }

        self.node_mut(new_idx).backward = if update[0] == HEAD { NULL } else { update[0] };
        let next = self.node(new_idx).links[0].next;
        if next != NULL {
            self.node_mut(next).backward = new_idx;
        } else {
            self.tail = new_idx;
        }

        self.len += 1;
    }
}

impl<T: Ord, L: LevelGenerator> SkipList<T, L> {
    /// Insert `item` with a height drawn from the list's generator.
    ///
    /// The caller guarantees no equal element is present.
    pub fn insert(&mut self, item: T) {
        let height = self.levels.next_level();
        self.insert_with_level(item, height);
    }
}

impl<T: fmt::Debug, L> fmt::Debug for SkipList<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, L> IntoIterator for &'a SkipList<T, L> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over a [`SkipList`], double-ended through the
/// backward links.
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    front: Idx,
    back: Idx,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn item(&self, idx: Idx) -> &'a T {
        let nodes: &'a [Node<T>] = self.nodes;
        nodes[idx as usize]
            .item
            .as_ref()
            .expect("linked node holds an item")
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = self.item(self.front);
        self.front = self.nodes[self.front as usize].links[0].next;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = self.item(self.back);
        self.back = self.nodes[self.back as usize].backward;
        self.remaining -= 1;
        Some(item)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::FixedLevels;

    fn fixed(levels: &[usize]) -> SkipList<u32, FixedLevels> {
        SkipList::with_levels(FixedLevels::new(levels.to_vec()))
    }

    fn collect(list: &SkipList<u32, FixedLevels>) -> Vec<u32> {
        list.iter().copied().collect()
    }

    #[test]
    fn empty_list() {
        let list: SkipList<u32> = SkipList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.level(), 1);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
        assert_eq!(list.get_by_rank(1), None);
        assert_eq!(list.rank_of(&3), None);
        assert!(list.range(1, 10).is_empty());
        assert!(list.neighbors(&3, 5, 5).is_empty());
        assert_eq!(list.iter().next(), None);
        list.check_invariants();
    }

    #[test]
    fn insert_keeps_order_and_ranks() {
        let mut list = fixed(&[1, 3, 2, 1, 4, 1]);
        for x in [50, 10, 40, 20, 60, 30] {
            list.insert(x);
            list.check_invariants();
        }

        assert_eq!(collect(&list), vec![10, 20, 30, 40, 50, 60]);
        for (i, x) in [10, 20, 30, 40, 50, 60].iter().enumerate() {
            assert_eq!(list.rank_of(x), Some(i + 1));
            assert_eq!(list.get_by_rank(i + 1), Some(x));
        }
        assert_eq!(list.level(), 4);
        assert_eq!(list.first(), Some(&10));
        assert_eq!(list.last(), Some(&60));
    }

    #[test]
    fn header_edges_span_everything_when_levels_grow() {
        let mut list = fixed(&[1, 1, 1, 5]);
        for x in [1, 2, 3] {
            list.insert(x);
        }
        assert_eq!(list.level(), 1);

        // A tall node at the end: the header's new levels skip all three.
        list.insert(4);
        assert_eq!(list.level(), 5);
        assert_eq!(list.node(HEAD).links[4].span, 4);
        list.check_invariants();
    }

    #[test]
    fn remove_missing_returns_none() {
        let mut list = fixed(&[2, 1]);
        list.insert(1);
        list.insert(3);
        assert_eq!(list.remove(&2), None);
        assert_eq!(list.remove(&0), None);
        assert_eq!(list.remove(&4), None);
        assert_eq!(list.len(), 2);
        list.check_invariants();
    }

    #[test]
    fn remove_tall_node_shrinks_levels() {
        let mut list = fixed(&[1, 6, 1]);
        list.insert(1);
        list.insert(2);
        list.insert(3);
        assert_eq!(list.level(), 6);

        assert_eq!(list.remove(&2), Some(2));
        assert_eq!(list.level(), 1);
        assert_eq!(collect(&list), vec![1, 3]);
        assert_eq!(list.rank_of(&3), Some(2));
        list.check_invariants();
    }

    #[test]
    fn remove_first_and_last_fix_links() {
        let mut list = fixed(&[2, 1, 3, 1]);
        for x in [1, 2, 3, 4] {
            list.insert(x);
        }

        assert_eq!(list.remove(&1), Some(1));
        list.check_invariants();
        assert_eq!(list.first(), Some(&2));

        assert_eq!(list.remove(&4), Some(4));
        list.check_invariants();
        assert_eq!(list.last(), Some(&3));

        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn remove_everything() {
        let mut list = fixed(&[3, 1, 2, 4, 1]);
        for x in 0..20 {
            list.insert(x);
        }
        for x in (0..20).rev().step_by(3).chain((0..20).step_by(1)) {
            list.remove(&x);
            list.check_invariants();
        }
        assert!(list.is_empty());
        assert_eq!(list.level(), 1);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
    }

    #[test]
    fn insert_then_remove_restores_ranks() {
        let mut list = fixed(&[2, 1, 1, 3, 1]);
        for x in [10, 20, 30, 40] {
            list.insert(x);
        }
        let before: Vec<_> = [10, 20, 30, 40].iter().map(|x| list.rank_of(x)).collect();

        list.insert_with_level(25, 7);
        assert_eq!(list.rank_of(&30), Some(4));
        assert_eq!(list.remove(&25), Some(25));

        let after: Vec<_> = [10, 20, 30, 40].iter().map(|x| list.rank_of(x)).collect();
        assert_eq!(before, after);
        assert_eq!(list.len(), 4);
        list.check_invariants();
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut list = fixed(&[1]);
        for x in 0..8 {
            list.insert(x);
        }
        let arena = list.nodes.len();
        for x in 0..4 {
            list.remove(&x);
        }
        for x in 100..104 {
            list.insert(x);
        }
        assert_eq!(list.nodes.len(), arena);
        list.check_invariants();
    }

    #[test]
    fn insert_with_level_clamps_height() {
        let mut list = fixed(&[1]);
        list.insert_with_level(1, 0);
        list.insert_with_level(2, 1000);
        assert_eq!(list.level(), MAX_LEVEL);
        assert_eq!(list.node(list.tail).height(), MAX_LEVEL);
        list.check_invariants();
    }

    #[test]
    fn contains_matches_membership() {
        let mut list = fixed(&[1, 2, 3]);
        for x in [5, 15, 25] {
            list.insert(x);
        }
        assert!(list.contains(&5));
        assert!(list.contains(&25));
        assert!(!list.contains(&0));
        assert!(!list.contains(&10));
        assert!(!list.contains(&30));
    }

    #[test]
    fn get_by_rank_out_of_range() {
        let mut list = fixed(&[1, 2]);
        list.insert(1);
        list.insert(2);
        assert_eq!(list.get_by_rank(0), None);
        assert_eq!(list.get_by_rank(3), None);
        assert_eq!(list.get_by_rank(2), Some(&2));
    }

    #[test]
    fn range_clamps_bounds() {
        let mut list = fixed(&[2, 1, 3]);
        for x in 1..=6 {
            list.insert(x * 10);
        }

        assert_eq!(list.range(2, 4), vec![(2, &20), (3, &30), (4, &40)]);
        assert_eq!(list.range(0, 2), vec![(1, &10), (2, &20)]);
        assert_eq!(list.range(5, 100), vec![(5, &50), (6, &60)]);
        assert_eq!(list.range(3, 3), vec![(3, &30)]);
        assert!(list.range(4, 3).is_empty());
        assert!(list.range(7, 9).is_empty());
    }

    #[test]
    fn neighbors_in_the_middle() {
        let mut list = fixed(&[1, 2, 1, 3]);
        for x in 1..=9 {
            list.insert(x);
        }
        assert_eq!(
            list.neighbors(&5, 2, 1),
            vec![(3, &3), (4, &4), (5, &5), (6, &6)]
        );
        assert_eq!(list.neighbors(&5, 0, 0), vec![(5, &5)]);
    }

    #[test]
    fn neighbors_cut_short_at_edges() {
        let mut list = fixed(&[2, 1]);
        for x in 1..=5 {
            list.insert(x);
        }
        assert_eq!(list.neighbors(&2, 10, 1), vec![(1, &1), (2, &2), (3, &3)]);
        assert_eq!(list.neighbors(&4, 1, 10), vec![(3, &3), (4, &4), (5, &5)]);
        assert_eq!(list.neighbors(&1, 3, usize::MAX).len(), 5);
        assert!(list.neighbors(&6, 1, 1).is_empty());
    }

    #[test]
    fn iter_both_directions() {
        let mut list = fixed(&[1, 2]);
        for x in [3, 1, 2] {
            list.insert(x);
        }

        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);

        // Restartable: a second pass sees the same sequence.
        let twice: Vec<_> = list.iter().chain(&list).copied().collect();
        assert_eq!(twice, vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn clear_resets() {
        let mut list = fixed(&[4, 1]);
        for x in 0..10 {
            list.insert(x);
        }
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.level(), 1);
        assert_eq!(list.nodes.len(), 1);
        list.check_invariants();

        list.insert(7);
        assert_eq!(list.range(1, 1), vec![(1, &7)]);
        list.check_invariants();
    }

    #[test]
    fn debug_prints_sequence() {
        let mut list = fixed(&[1]);
        list.insert(2);
        list.insert(1);
        assert_eq!(format!("{:?}", list), "[1, 2]");
    }

    #[test]
    fn stress_test() {
        let mut list: SkipList<u32> = SkipList::with_levels(RandomLevels::seeded(1));
        for i in 0..1000u32 {
            // Scatter inserts across the key space.
            list.insert((i * 7919) % 1000);
        }
        assert_eq!(list.len(), 1000);
        list.check_invariants();

        for i in 0..1000u32 {
            assert_eq!(list.get_by_rank(i as usize + 1), Some(&i));
        }

        for i in (0..500u32).map(|i| i * 2) {
            assert_eq!(list.remove(&i), Some(i));
        }
        assert_eq!(list.len(), 500);
        list.check_invariants();

        for i in 0..500u32 {
            let expected = i * 2 + 1;
            assert_eq!(list.rank_of(&expected), Some(i as usize + 1));
        }
    }
}
