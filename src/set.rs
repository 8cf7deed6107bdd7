// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Interval Sets
//!
//! A self-coalescing collection of disjoint closed intervals representing
//! the union of everything inserted so far.
//!
//! The merge algorithm views the stored intervals as partitioning the domain
//! into alternating empty and non-empty regions, numbered left to right
//! starting at zero: region `2*i` is the empty space before stored interval
//! `i`, region `2*i + 1` is that interval itself, and region `2*n` is the
//! empty space after the last of the `n` stored intervals. Classifying the
//! two endpoints of an incoming range into regions determines, in one pass
//! per endpoint, which stored intervals it overlaps; those are removed and
//! replaced by a single coalesced interval.
//!
//! ## Modes
//!
//! - **Continuous** (default): only overlapping ranges are merged. Intervals
//!   that merely touch through the domain's stepping stay separate.
//! - **Discrete**: adjacent intervals — those touching via
//!   `successor`/`predecessor` — are merged as well, and single elements can
//!   be inserted directly. The set never stores two intervals that touch.
//!
//! ## Usage
//!
//! ```rust
//! use rangeset::interval::ClosedInterval;
//! use rangeset::set::IntervalSet;
//!
//! let mut set = IntervalSet::continuous();
//! set.insert(ClosedInterval::new(50, 60));
//! set.insert(ClosedInterval::new(22, 28));
//! set.insert(ClosedInterval::new(1, 26));
//!
//! let stored: Vec<_> = set.iter().cloned().collect();
//! assert_eq!(
//!     stored,
//!     vec![ClosedInterval::new(1, 28), ClosedInterval::new(50, 60)]
//! );
//! ```

use crate::interval::{ClosedInterval, Proximity};
use crate::step::Steppable;
use smallvec::SmallVec;
use std::{fmt, iter::FusedIterator};

/// Number of intervals stored inline before the set spills to the heap.
const INLINE_INTERVALS: usize = 4;

/// An ordered set of disjoint closed intervals over a steppable domain.
///
/// Invariants, upheld after every operation:
///
/// - stored intervals are sorted strictly ascending by minimum;
/// - consecutive intervals are pairwise disjoint (`next.min > prev.max`);
/// - in discrete mode, additionally pairwise non-adjacent
///   (`next.min != successor(prev.max)`).
///
/// The set exclusively owns its interval storage. Merges replace intervals
/// wholesale — remove the overlapped run, insert one coalesced interval —
/// rather than mutating any stored interval in place. Coverage only ever
/// grows: no operation uncovers a previously covered point.
///
/// # Examples
///
/// ```rust
/// # use rangeset::interval::ClosedInterval;
/// # use rangeset::set::IntervalSet;
///
/// let mut set = IntervalSet::discrete();
/// set.insert_point(9);
/// set.insert_point(10);
/// assert_eq!(set.iter().cloned().collect::<Vec<_>>(), vec![ClosedInterval::new(9, 10)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSet<T>
where
    T: Steppable,
{
    intervals: SmallVec<[ClosedInterval<T>; INLINE_INTERVALS]>,
    discrete: bool,
}

impl<T> IntervalSet<T>
where
    T: Steppable,
{
    /// Creates an empty set in continuous mode: only overlapping ranges are
    /// merged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangeset::set::IntervalSet;
    ///
    /// let set: IntervalSet<i64> = IntervalSet::continuous();
    /// assert!(set.is_empty());
    /// assert!(!set.is_discrete());
    /// ```
    #[inline]
    pub fn continuous() -> Self {
        Self {
            intervals: SmallVec::new(),
            discrete: false,
        }
    }

    /// Creates an empty set in discrete mode: adjacent intervals are merged
    /// through the domain's stepping, and single elements can be inserted
    /// via [`insert_point`](Self::insert_point).
    #[inline]
    pub fn discrete() -> Self {
        Self {
            intervals: SmallVec::new(),
            discrete: true,
        }
    }

    /// Returns `true` if the set merges adjacent intervals.
    #[inline]
    pub fn is_discrete(&self) -> bool {
        self.discrete
    }

    /// Returns the number of stored intervals.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the set stores no intervals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns the stored intervals as a slice, sorted ascending by minimum.
    #[inline]
    pub fn as_slice(&self) -> &[ClosedInterval<T>] {
        &self.intervals
    }

    /// Returns `true` if some stored interval contains `value`.
    ///
    /// Binary search over the sorted, disjoint storage: at most one interval
    /// can contain the value, and it is the last one whose minimum does not
    /// exceed it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangeset::interval::ClosedInterval;
    /// # use rangeset::set::IntervalSet;
    ///
    /// let mut set = IntervalSet::continuous();
    /// set.insert(ClosedInterval::new(50, 60));
    /// assert!(set.contains(&55));
    /// assert!(!set.contains(&61));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let candidate = self.intervals.partition_point(|iv| iv.min() <= value);
        candidate > 0 && self.intervals[candidate - 1].contains_point(value)
    }

    /// Returns the index of the region `point` falls into.
    ///
    /// Regions alternate empty/non-empty: `2*i` before stored interval `i`,
    /// `2*i + 1` inside it, `2*n` past the last interval.
    fn region_index(&self, point: &T) -> usize {
        for (i, interval) in self.intervals.iter().enumerate() {
            if point < interval.min() {
                return 2 * i;
            }
            if point <= interval.max() {
                return 2 * i + 1;
            }
        }
        2 * self.intervals.len()
    }

    /// Inserts an interval, coalescing it with every stored interval it
    /// overlaps (and, in discrete mode, touches).
    ///
    /// A single pass over each endpoint classifies the insertion: a range
    /// falling entirely in one empty region is inserted as-is, a range
    /// entirely inside one stored interval is a no-op, and a range spanning
    /// regions absorbs the overlapped run of stored intervals into one
    /// replacement. Cost is `O(n)` in the number of stored intervals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangeset::interval::ClosedInterval;
    /// # use rangeset::set::IntervalSet;
    ///
    /// let mut set = IntervalSet::continuous();
    /// set.insert(ClosedInterval::new(5, 6));
    /// set.insert(ClosedInterval::new(6, 7));
    /// assert_eq!(set.as_slice(), &[ClosedInterval::new(5, 7)]);
    /// ```
    pub fn insert(&mut self, interval: ClosedInterval<T>) {
        // In discrete mode the probes are widened one step so that a range
        // touching a stored interval through the domain's stepping is
        // classified as overlapping and coalesced. The stored endpoints come
        // from the inserted interval or the absorbed ones, never from the
        // probes. At a domain boundary the step is undefined and no neighbor
        // can exist there, so the endpoint itself is the probe.
        let low_probe = if self.discrete {
            interval.min().predecessor().unwrap_or_else(|| interval.min().clone())
        } else {
            interval.min().clone()
        };
        let high_probe = if self.discrete {
            interval.max().successor().unwrap_or_else(|| interval.max().clone())
        } else {
            interval.max().clone()
        };

        let index_s = self.region_index(&low_probe);
        let index_f = self.region_index(&high_probe);

        if index_s == index_f {
            if index_s % 2 == 0 {
                // Both endpoints fall in the same empty region: nothing is
                // overlapped, insert the interval as-is at its sorted slot.
                self.intervals.insert(index_s / 2, interval);
            }
            // Same odd region: the range is subsumed by a stored interval.
        } else {
            // The range crosses at least one stored interval. Take the new
            // minimum from the inserted range if it fell on empty space,
            // otherwise extend left to the first overlapped interval's own
            // minimum; symmetrically for the maximum.
            let first = index_s / 2;
            let last = (index_f - 1) / 2;
            let min = if index_s % 2 == 0 {
                interval.min().clone()
            } else {
                self.intervals[first].min().clone()
            };
            let max = if index_f % 2 == 0 {
                interval.max().clone()
            } else {
                self.intervals[last].max().clone()
            };
            self.intervals.drain(first..=last);
            self.intervals
                .insert(first, ClosedInterval::new_unchecked(min, max));
        }
    }

    /// Inserts a single element.
    ///
    /// In continuous mode this is equivalent to inserting the single-point
    /// interval `[value, value]`. In discrete mode the element is coalesced
    /// with any stored interval it touches: the stored intervals are scanned
    /// for a neighborhood match, every match triggers a merge, and the scan
    /// restarts until a pass finds no neighbor. A single element can
    /// chain-merge through several stored intervals this way. The loop
    /// terminates because every merge strictly reduces the number of stored
    /// intervals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangeset::interval::ClosedInterval;
    /// # use rangeset::set::IntervalSet;
    ///
    /// let mut set = IntervalSet::discrete();
    /// set.insert(ClosedInterval::new(1, 2));
    /// set.insert(ClosedInterval::new(4, 5));
    /// set.insert_point(3);
    /// assert_eq!(set.as_slice(), &[ClosedInterval::new(1, 5)]);
    /// ```
    pub fn insert_point(&mut self, value: T) {
        if !self.discrete {
            self.insert(ClosedInterval::point(value));
            return;
        }
        loop {
            let mut merge = None;
            for interval in &self.intervals {
                match interval.proximity(&value) {
                    Proximity::Within => return,
                    Proximity::Left => {
                        merge = Some(ClosedInterval::new_unchecked(
                            value.clone(),
                            interval.min().clone(),
                        ));
                        break;
                    }
                    Proximity::Right => {
                        merge = Some(ClosedInterval::new_unchecked(
                            interval.max().clone(),
                            value.clone(),
                        ));
                        break;
                    }
                    Proximity::Disjoint => {}
                }
            }
            match merge {
                Some(interval) => self.insert(interval),
                None => break,
            }
        }
        self.insert(ClosedInterval::point(value));
    }

    /// Inserts every interval of `other` into `self`.
    ///
    /// The merge algorithm is confluent — the final disjoint cover depends
    /// only on the union of inserted points, not on insertion order — so the
    /// result is the set union of the two covers. Each insertion costs
    /// `O(n)`, giving `O(n * m)` for `m` inserted intervals; callers merging
    /// very large sets wholesale may prefer to rebuild from sorted input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangeset::interval::ClosedInterval;
    /// # use rangeset::set::IntervalSet;
    ///
    /// let mut a = IntervalSet::continuous();
    /// a.insert(ClosedInterval::new(1, 3));
    /// let mut b = IntervalSet::continuous();
    /// b.insert(ClosedInterval::new(2, 6));
    /// a.union_with(&b);
    /// assert_eq!(a.as_slice(), &[ClosedInterval::new(1, 6)]);
    /// ```
    pub fn union_with(&mut self, other: &IntervalSet<T>) {
        for interval in other.iter() {
            self.insert(interval.clone());
        }
    }

    /// Creates an iterator over the stored intervals in ascending order.
    ///
    /// Reverse traversal is available through `DoubleEndedIterator`
    /// (`set.iter().rev()`). The borrow checker guarantees the set cannot be
    /// mutated while an iterator is alive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangeset::interval::ClosedInterval;
    /// # use rangeset::set::IntervalSet;
    ///
    /// let mut set = IntervalSet::continuous();
    /// set.insert(ClosedInterval::new(4, 5));
    /// set.insert(ClosedInterval::new(1, 2));
    ///
    /// let ascending: Vec<_> = set.iter().map(|iv| *iv.min()).collect();
    /// let descending: Vec<_> = set.iter().rev().map(|iv| *iv.min()).collect();
    /// assert_eq!(ascending, vec![1, 4]);
    /// assert_eq!(descending, vec![4, 1]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.intervals.iter(),
        }
    }
}

/// An iterator over the intervals stored in an [`IntervalSet`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T>
where
    T: Steppable,
{
    inner: std::slice::Iter<'a, ClosedInterval<T>>,
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: Steppable,
{
    type Item = &'a ClosedInterval<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T>
where
    T: Steppable,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T>
where
    T: Steppable,
{
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> where T: Steppable {}

impl<'a, T> IntoIterator for &'a IntervalSet<T>
where
    T: Steppable,
{
    type Item = &'a ClosedInterval<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<ClosedInterval<T>> for IntervalSet<T>
where
    T: Steppable,
{
    fn extend<I: IntoIterator<Item = ClosedInterval<T>>>(&mut self, iter: I) {
        for interval in iter {
            self.insert(interval);
        }
    }
}

impl<T> std::ops::BitOrAssign<&IntervalSet<T>> for IntervalSet<T>
where
    T: Steppable,
{
    /// Set union, shorthand for [`union_with`](IntervalSet::union_with).
    #[inline]
    fn bitor_assign(&mut self, rhs: &IntervalSet<T>) {
        self.union_with(rhs);
    }
}

impl<T> fmt::Display for IntervalSet<T>
where
    T: Steppable + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn iv(min: i32, max: i32) -> ClosedInterval<i32> {
        ClosedInterval::new(min, max)
    }

    /// Checks the structural invariants: sorted strictly ascending by
    /// minimum, pairwise disjoint, and non-adjacent in discrete mode.
    fn assert_invariants<T>(set: &IntervalSet<T>)
    where
        T: Steppable + std::fmt::Debug,
    {
        for pair in set.as_slice().windows(2) {
            assert!(
                pair[0].min() < pair[1].min(),
                "intervals out of order: {:?} then {:?}",
                pair[0],
                pair[1]
            );
            assert!(
                pair[1].min() > pair[0].max(),
                "intervals overlap: {:?} then {:?}",
                pair[0],
                pair[1]
            );
            if set.is_discrete() {
                assert_ne!(
                    pair[0].max().successor().as_ref(),
                    Some(pair[1].min()),
                    "adjacent intervals stored in discrete set: {:?} then {:?}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn test_insert_into_empty() {
        let mut set = IntervalSet::continuous();
        set.insert(iv(5, 6));
        assert_eq!(set.as_slice(), &[iv(5, 6)]);
        assert_invariants(&set);
    }

    #[test]
    fn test_boundary_touch_merges() {
        // 6 is both max of the first range and min of the second, which the
        // region scan classifies as an overlap, not a gap.
        let mut set = IntervalSet::continuous();
        set.insert(iv(5, 6));
        set.insert(iv(6, 7));
        assert_eq!(set.as_slice(), &[iv(5, 7)]);
        assert_invariants(&set);
    }

    #[test]
    fn test_partial_overlap_sequence() {
        let mut set = IntervalSet::continuous();
        set.insert(iv(50, 60));
        assert_eq!(set.as_slice(), &[iv(50, 60)]);
        set.insert(iv(22, 28));
        assert_eq!(set.as_slice(), &[iv(22, 28), iv(50, 60)]);
        set.insert(iv(1, 26));
        assert_eq!(set.as_slice(), &[iv(1, 28), iv(50, 60)]);
        assert_invariants(&set);
    }

    #[test]
    fn test_disjoint_insertions_keep_order() {
        let mut set = IntervalSet::continuous();
        set.insert(iv(40, 50));
        set.insert(iv(0, 5));
        set.insert(iv(20, 25));
        set.insert(iv(60, 70));
        assert_eq!(
            set.as_slice(),
            &[iv(0, 5), iv(20, 25), iv(40, 50), iv(60, 70)]
        );
        assert_invariants(&set);
    }

    #[test]
    fn test_fully_contained_insertion_is_noop() {
        let mut set = IntervalSet::continuous();
        set.insert(iv(22, 28));
        set.insert(iv(23, 25));
        assert_eq!(set.as_slice(), &[iv(22, 28)]);
    }

    #[test]
    fn test_spanning_insertion_swallows_run() {
        let mut set = IntervalSet::continuous();
        set.insert(iv(0, 2));
        set.insert(iv(10, 12));
        set.insert(iv(20, 22));
        set.insert(iv(30, 32));
        set.insert(iv(11, 21));
        assert_eq!(set.as_slice(), &[iv(0, 2), iv(10, 22), iv(30, 32)]);
        assert_invariants(&set);
    }

    #[test]
    fn test_spanning_insertion_covers_everything() {
        let mut set = IntervalSet::continuous();
        set.insert(iv(10, 12));
        set.insert(iv(20, 22));
        set.insert(iv(0, 100));
        assert_eq!(set.as_slice(), &[iv(0, 100)]);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = IntervalSet::continuous();
        set.insert(iv(5, 9));
        set.insert(iv(20, 30));
        let snapshot = set.clone();
        set.insert(iv(5, 9));
        set.insert(iv(20, 30));
        assert_eq!(set, snapshot);
    }

    #[test]
    fn test_contains() {
        let mut set = IntervalSet::continuous();
        set.insert(iv(50, 60));
        assert!(set.contains(&50));
        assert!(set.contains(&55));
        assert!(set.contains(&60));
        assert!(!set.contains(&49));
        assert!(!set.contains(&61));
    }

    #[test]
    fn test_contains_on_empty() {
        let set: IntervalSet<i32> = IntervalSet::continuous();
        assert!(!set.contains(&0));
    }

    #[test]
    fn test_coverage_is_monotone() {
        let mut set = IntervalSet::continuous();
        set.insert(iv(5, 9));
        assert!(set.contains(&7));
        set.insert(iv(100, 200));
        set.insert(iv(8, 30));
        set.insert(iv(0, 1));
        // Earlier coverage survives every later insertion.
        for p in 5..=9 {
            assert!(set.contains(&p));
        }
        assert_invariants(&set);
    }

    #[test]
    fn test_continuous_adjacency_stays_separate() {
        // Without discrete stepping, [5,6] and [7,8] have a gap as far as
        // the order relation is concerned.
        let mut set = IntervalSet::continuous();
        set.insert(iv(5, 6));
        set.insert(iv(7, 8));
        assert_eq!(set.as_slice(), &[iv(5, 6), iv(7, 8)]);
    }

    #[test]
    fn test_discrete_adjacent_intervals_merge() {
        let mut set = IntervalSet::discrete();
        set.insert(iv(5, 6));
        set.insert(iv(7, 8));
        assert_eq!(set.as_slice(), &[iv(5, 8)]);
        assert_invariants(&set);
    }

    #[test]
    fn test_discrete_interval_bridges_two_neighbors() {
        let mut set = IntervalSet::discrete();
        set.insert(iv(1, 2));
        set.insert(iv(4, 5));
        set.insert(iv(8, 9));
        set.insert(iv(3, 6));
        assert_eq!(set.as_slice(), &[iv(1, 6), iv(8, 9)]);
        assert_invariants(&set);
    }

    #[test]
    fn test_discrete_non_adjacent_stays_separate() {
        let mut set = IntervalSet::discrete();
        set.insert(iv(5, 6));
        set.insert(iv(8, 9));
        assert_eq!(set.as_slice(), &[iv(5, 6), iv(8, 9)]);
        assert_invariants(&set);
    }

    #[test]
    fn test_discrete_point_insertion() {
        let mut set = IntervalSet::discrete();
        set.insert_point(9);
        assert_eq!(set.as_slice(), &[iv(9, 9)]);
        set.insert_point(10);
        assert_eq!(set.as_slice(), &[iv(9, 10)]);
        assert_invariants(&set);
    }

    #[test]
    fn test_discrete_point_already_covered() {
        let mut set = IntervalSet::discrete();
        set.insert(iv(5, 9));
        set.insert_point(7);
        assert_eq!(set.as_slice(), &[iv(5, 9)]);
    }

    #[test]
    fn test_discrete_point_chain_merge() {
        // 3 is right-neighbor of [1,2] and left-neighbor of [4,5]; inserting
        // it collapses the whole run.
        let mut set = IntervalSet::discrete();
        set.insert(iv(1, 2));
        set.insert(iv(4, 5));
        set.insert_point(3);
        assert_eq!(set.as_slice(), &[iv(1, 5)]);
        assert_invariants(&set);
    }

    #[test]
    fn test_continuous_point_insertion() {
        let mut set = IntervalSet::continuous();
        set.insert_point(9);
        set.insert_point(11);
        assert_eq!(set.as_slice(), &[iv(9, 9), iv(11, 11)]);
    }

    #[test]
    fn test_discrete_point_at_domain_boundary() {
        let mut set: IntervalSet<u8> = IntervalSet::discrete();
        set.insert(ClosedInterval::new(250u8, 254u8));
        set.insert_point(255u8);
        assert_eq!(set.as_slice(), &[ClosedInterval::new(250u8, 255u8)]);
        set.insert_point(0u8);
        assert_eq!(
            set.as_slice(),
            &[
                ClosedInterval::new(0u8, 0u8),
                ClosedInterval::new(250u8, 255u8)
            ]
        );
        assert_invariants(&set);
    }

    #[test]
    fn test_union_with() {
        let mut a = IntervalSet::continuous();
        a.insert(iv(1, 3));
        a.insert(iv(10, 12));
        let mut b = IntervalSet::continuous();
        b.insert(iv(2, 11));
        b.insert(iv(20, 21));
        a.union_with(&b);
        assert_eq!(a.as_slice(), &[iv(1, 12), iv(20, 21)]);
        assert_invariants(&a);
    }

    #[test]
    fn test_union_is_commutative() {
        let mut a = IntervalSet::continuous();
        a.insert(iv(1, 5));
        a.insert(iv(30, 40));
        let mut b = IntervalSet::continuous();
        b.insert(iv(4, 10));
        b.insert(iv(50, 60));

        let mut ab = a.clone();
        ab.union_with(&b);
        let mut ba = b.clone();
        ba.union_with(&a);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_bitor_assign_unions() {
        let mut a = IntervalSet::continuous();
        a.insert(iv(1, 3));
        let mut b = IntervalSet::continuous();
        b.insert(iv(3, 6));
        a |= &b;
        assert_eq!(a.as_slice(), &[iv(1, 6)]);
    }

    #[test]
    fn test_extend_inserts_each() {
        let mut set = IntervalSet::continuous();
        set.extend([iv(10, 12), iv(1, 2), iv(11, 20)]);
        assert_eq!(set.as_slice(), &[iv(1, 2), iv(10, 20)]);
    }

    #[test]
    fn test_iter_directions() {
        let mut set = IntervalSet::continuous();
        set.insert(iv(4, 5));
        set.insert(iv(1, 2));
        set.insert(iv(7, 9));
        let forward: Vec<_> = set.iter().cloned().collect();
        assert_eq!(forward, vec![iv(1, 2), iv(4, 5), iv(7, 9)]);
        let backward: Vec<_> = set.iter().rev().cloned().collect();
        assert_eq!(backward, vec![iv(7, 9), iv(4, 5), iv(1, 2)]);
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn test_display() {
        let mut set = IntervalSet::continuous();
        assert_eq!(format!("{}", set), "{}");
        set.insert(iv(1, 2));
        set.insert(iv(5, 9));
        assert_eq!(format!("{}", set), "{[1, 2], [5, 9]}");
    }

    #[test]
    fn test_char_domain_set() {
        let mut set = IntervalSet::discrete();
        set.insert(ClosedInterval::new('a', 'c'));
        set.insert(ClosedInterval::new('d', 'f'));
        assert_eq!(set.as_slice(), &[ClosedInterval::new('a', 'f')]);
        assert!(set.contains(&'e'));
        assert!(!set.contains(&'g'));
        assert_invariants(&set);
    }

    #[test]
    fn test_randomized_against_dense_oracle() {
        const DOMAIN: usize = 400;
        let mut rng = StdRng::seed_from_u64(0x5EED_CAFE);
        let mut set = IntervalSet::continuous();
        let mut oracle = [false; DOMAIN];
        for _ in 0..250 {
            let a = rng.gen_range(0..DOMAIN as i32);
            let b = rng.gen_range(0..DOMAIN as i32);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            set.insert(iv(lo, hi));
            for p in lo..=hi {
                oracle[p as usize] = true;
            }
            assert_invariants(&set);
            for (p, covered) in oracle.iter().enumerate() {
                assert_eq!(set.contains(&(p as i32)), *covered, "point {}", p);
            }
        }
    }

    #[test]
    fn test_randomized_discrete_points_against_dense_oracle() {
        const DOMAIN: usize = 128;
        let mut rng = StdRng::seed_from_u64(0xD15C_0DE);
        let mut set: IntervalSet<i32> = IntervalSet::discrete();
        let mut oracle = [false; DOMAIN];
        for _ in 0..300 {
            let p = rng.gen_range(0..DOMAIN as i32);
            set.insert_point(p);
            oracle[p as usize] = true;
            assert_invariants(&set);
            for (q, covered) in oracle.iter().enumerate() {
                assert_eq!(set.contains(&(q as i32)), *covered, "point {}", q);
            }
        }
    }
}
