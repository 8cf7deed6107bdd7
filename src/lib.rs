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

//! # Rangeset
//!
//! A generic, self-coalescing interval set over any totally ordered,
//! steppable domain. The set stores the union of everything inserted so far
//! as the minimal sequence of disjoint closed intervals, merging overlapping
//! (and, in discrete mode, adjacent) ranges automatically on every insertion.
//! It is suited to tracking coverage of an ordered space — allocated address
//! ranges, reserved id blocks, covered time windows — without materializing
//! individual elements.
//!
//! ## Modules
//!
//! - `step`: The [`Steppable`](step::Steppable) domain capability — total
//!   ordering plus checked `successor`/`predecessor` stepping — implemented
//!   for all primitive integers and `char`.
//! - `interval`: Closed interval `[min, max]` primitives with validation,
//!   containment and neighborhood queries, and lazy element iteration
//!   (`Iterator`, `DoubleEndedIterator`, `FusedIterator`).
//! - `set`: The [`IntervalSet`](set::IntervalSet) collection with its
//!   region-index merge algorithm, membership testing, set union, and
//!   ordered traversal.
//!
//! ## Usage
//!
//! ```rust
//! use rangeset::interval::ClosedInterval;
//! use rangeset::set::IntervalSet;
//!
//! let mut set = IntervalSet::continuous();
//! set.insert(ClosedInterval::new(5, 6));
//! set.insert(ClosedInterval::new(6, 7));
//!
//! assert_eq!(set.len(), 1);
//! assert!(set.contains(&6));
//! assert_eq!(format!("{}", set), "{[5, 7]}");
//! ```

pub mod interval;
pub mod set;
pub mod step;
