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

//! # Closed Intervals
//!
//! Immutable closed interval `[min, max]` primitives over a [`Steppable`]
//! domain, with construction-time validation, containment and neighborhood
//! queries, and lazy element iteration.
//!
//! ## Highlights
//!
//! - `new`/`try_new`/`new_unchecked` construction tiers; an interval is never
//!   observable in a partially initialized or reversed state.
//! - [`Proximity`] classification of an external point relative to the
//!   interval, the building block of discrete-mode coalescing.
//! - [`ClosedIntervalIterator`] walks every element of the interval through
//!   the domain's stepping alone, so non-numeric domains work unchanged.
//! - Conversions to and from `std::ops::RangeInclusive`.

use crate::step::Steppable;
use std::{fmt, iter::FusedIterator, ops::RangeInclusive};

/// The error type returned when interval bounds are reversed.
///
/// Carries the offending bounds so callers can report them.
///
/// # Examples
///
/// ```rust
/// # use rangeset::interval::ClosedInterval;
///
/// let err = ClosedInterval::try_new(10, 2).unwrap_err();
/// assert_eq!(err.min, 10);
/// assert_eq!(err.max, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIntervalError<T> {
    /// The lower bound the caller supplied.
    pub min: T,
    /// The upper bound the caller supplied.
    pub max: T,
}

impl<T> fmt::Display for InvalidIntervalError<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid interval: maximum {} is less than minimum {}",
            self.max, self.min
        )
    }
}

impl<T> std::error::Error for InvalidIntervalError<T> where T: fmt::Debug + fmt::Display {}

/// Where an external point lies relative to a closed interval.
///
/// Neighborhood is checked before containment, so a point one step outside
/// the interval is always reported as a neighbor. The two cannot coincide:
/// a point equal to `predecessor(min)` or `successor(max)` is by definition
/// outside `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Proximity {
    /// The point is exactly one step below the interval's minimum.
    Left,
    /// The point is exactly one step above the interval's maximum.
    Right,
    /// The point lies inside the interval.
    Within,
    /// The point neither touches nor lies inside the interval.
    Disjoint,
}

/// A closed interval `[min, max]` over a steppable domain.
///
/// Both bounds are inclusive and `min <= max` always holds; a single-point
/// interval has `min == max`. The value is immutable once constructed — any
/// change is represented by constructing a new interval.
///
/// # Examples
///
/// ```rust
/// # use rangeset::interval::ClosedInterval;
///
/// let iv = ClosedInterval::new(3, 7);
/// assert!(iv.contains_point(&3));
/// assert!(iv.contains_point(&7));
/// assert!(!iv.contains_point(&8));
/// assert_eq!(iv.elements().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7]);
/// ```
// No `Ord` derive: `Ord::min`/`Ord::max` would shadow the inherent
// accessors on owned receivers, and nothing orders intervals themselves.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ClosedInterval<T>
where
    T: Steppable,
{
    min: T,
    max: T,
}

impl<T> ClosedInterval<T>
where
    T: Steppable,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `max < min`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangeset::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(1, 4);
    /// assert_eq!(*iv.min(), 1);
    /// assert_eq!(*iv.max(), 4);
    /// ```
    #[inline]
    pub fn new(min: T, max: T) -> Self {
        assert!(
            min <= max,
            "Invalid interval: max must be greater than or equal to min"
        );
        Self { min, max }
    }

    /// Creates a new `ClosedInterval` if the bounds are valid.
    ///
    /// Returns [`InvalidIntervalError`] if `max < min`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangeset::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(1, 4).is_ok());
    /// assert!(ClosedInterval::try_new(1, 1).is_ok());
    /// assert!(ClosedInterval::try_new(4, 1).is_err());
    /// ```
    #[inline]
    pub fn try_new(min: T, max: T) -> Result<Self, InvalidIntervalError<T>> {
        if min <= max {
            Ok(Self { min, max })
        } else {
            Err(InvalidIntervalError { min, max })
        }
    }

    /// Creates a new `ClosedInterval` without checking invariants in release
    /// builds.
    ///
    /// The caller must ensure `min <= max`. A `debug_assert!` catches
    /// violations during development.
    #[inline]
    pub fn new_unchecked(min: T, max: T) -> Self {
        debug_assert!(
            min <= max,
            "Invalid interval: max must be greater than or equal to min"
        );
        Self { min, max }
    }

    /// Creates a single-point interval `[value, value]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangeset::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::point(9);
    /// assert_eq!(iv, ClosedInterval::new(9, 9));
    /// ```
    #[inline]
    pub fn point(value: T) -> Self {
        Self {
            min: value.clone(),
            max: value,
        }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn min(&self) -> &T {
        &self.min
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub fn max(&self) -> &T {
        &self.max
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangeset::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(50, 60);
    /// assert!(iv.contains_point(&55));
    /// assert!(iv.contains_point(&60));
    /// assert!(!iv.contains_point(&61));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: &T) -> bool {
        self.min <= *value && *value <= self.max
    }

    /// Returns `true` if `other` is entirely contained within `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangeset::interval::ClosedInterval;
    ///
    /// let outer = ClosedInterval::new(0, 10);
    /// assert!(outer.contains_interval(&ClosedInterval::new(2, 8)));
    /// assert!(!outer.contains_interval(&ClosedInterval::new(8, 12)));
    /// ```
    #[inline]
    pub fn contains_interval(&self, other: &Self) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Returns `true` if the two intervals share at least one element.
    ///
    /// Both bounds are inclusive, so intervals meeting at a single point
    /// intersect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangeset::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(5, 6);
    /// assert!(a.intersects(&ClosedInterval::new(6, 7)));
    /// assert!(!a.intersects(&ClosedInterval::new(7, 9)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Classifies `value` relative to this interval.
    ///
    /// Neighborhood wins over containment: [`Proximity::Left`] and
    /// [`Proximity::Right`] are checked first. A bound sitting at a domain
    /// boundary has no neighbor on that side, since the step there is
    /// undefined.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangeset::interval::{ClosedInterval, Proximity};
    ///
    /// let iv = ClosedInterval::new(5, 8);
    /// assert_eq!(iv.proximity(&4), Proximity::Left);
    /// assert_eq!(iv.proximity(&9), Proximity::Right);
    /// assert_eq!(iv.proximity(&6), Proximity::Within);
    /// assert_eq!(iv.proximity(&11), Proximity::Disjoint);
    /// ```
    pub fn proximity(&self, value: &T) -> Proximity {
        if self.min.predecessor().as_ref() == Some(value) {
            Proximity::Left
        } else if self.max.successor().as_ref() == Some(value) {
            Proximity::Right
        } else if self.contains_point(value) {
            Proximity::Within
        } else {
            Proximity::Disjoint
        }
    }

    /// Creates a lazy iterator over every element of the interval, from
    /// `min` to `max` inclusive.
    ///
    /// Each call produces a fresh traversal, so the walk can be restarted by
    /// calling `elements` again. The iterator advances solely through the
    /// domain's stepping and supports reverse traversal via
    /// `DoubleEndedIterator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rangeset::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new('a', 'd');
    /// let forward: String = iv.elements().collect();
    /// let backward: String = iv.elements().rev().collect();
    /// assert_eq!(forward, "abcd");
    /// assert_eq!(backward, "dcba");
    /// ```
    #[inline]
    pub fn elements(&self) -> ClosedIntervalIterator<T> {
        ClosedIntervalIterator {
            front: self.min.clone(),
            back: self.max.clone(),
            exhausted: false,
        }
    }
}

/// An iterator over the elements contained within a [`ClosedInterval`].
///
/// Finite by construction: the walk stops once the two cursors meet, and a
/// cursor that cannot step further ends the traversal.
#[derive(Debug, Clone)]
pub struct ClosedIntervalIterator<T>
where
    T: Steppable,
{
    front: T,
    back: T,
    exhausted: bool,
}

impl<T> Iterator for ClosedIntervalIterator<T>
where
    T: Steppable,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.front.clone();
        if self.front == self.back {
            self.exhausted = true;
        } else {
            match self.front.successor() {
                Some(next) => self.front = next,
                None => self.exhausted = true,
            }
        }
        Some(item)
    }
}

impl<T> DoubleEndedIterator for ClosedIntervalIterator<T>
where
    T: Steppable,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.back.clone();
        if self.front == self.back {
            self.exhausted = true;
        } else {
            match self.back.predecessor() {
                Some(previous) => self.back = previous,
                None => self.exhausted = true,
            }
        }
        Some(item)
    }
}

impl<T> FusedIterator for ClosedIntervalIterator<T> where T: Steppable {}

impl<T> IntoIterator for ClosedInterval<T>
where
    T: Steppable,
{
    type Item = T;
    type IntoIter = ClosedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}

impl<T> IntoIterator for &ClosedInterval<T>
where
    T: Steppable,
{
    type Item = T;
    type IntoIter = ClosedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}

impl<T> fmt::Debug for ClosedInterval<T>
where
    T: Steppable + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("min", &self.min)
            .field("max", &self.max)
            .finish()
    }
}

impl<T> fmt::Display for ClosedInterval<T>
where
    T: Steppable + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl<T> TryFrom<RangeInclusive<T>> for ClosedInterval<T>
where
    T: Steppable,
{
    type Error = InvalidIntervalError<T>;

    #[inline]
    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (min, max) = range.into_inner();
        Self::try_new(min, max)
    }
}

impl<T> From<ClosedInterval<T>> for RangeInclusive<T>
where
    T: Steppable,
{
    #[inline]
    fn from(interval: ClosedInterval<T>) -> Self {
        interval.min..=interval.max
    }
}

impl<T> std::ops::RangeBounds<T> for ClosedInterval<T>
where
    T: Steppable,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.min)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.max)
    }
}
