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

//! # Steppable Domains
//!
//! The domain capability every element type must supply before it can be
//! used in an interval: a total order plus checked `successor`/`predecessor`
//! stepping. Making this a trait bound (rather than runtime dispatch) turns
//! "this type cannot step" into a compile error instead of a failure class.
//!
//! ## Highlights
//!
//! - Stepping past a domain boundary is a defined outcome (`None`), never a
//!   silent wrap or saturation.
//! - Implementations for all primitive integer types are generated through
//!   `num_traits` checked arithmetic.
//! - A `char` implementation (skipping the surrogate gap) demonstrates that
//!   the capability is not tied to numeric types.
//!
//! ## Usage
//!
//! ```rust
//! use rangeset::step::Steppable;
//!
//! assert_eq!(7u8.successor(), Some(8));
//! assert_eq!(u8::MAX.successor(), None);
//! assert_eq!('a'.predecessor(), Some('`'));
//! ```

use num_traits::{CheckedAdd, CheckedSub, One};

/// A totally ordered domain whose elements form a discrete sequence.
///
/// `successor` and `predecessor` move one step through that sequence and
/// return `None` at the respective domain boundary. Interval adjacency
/// detection and element enumeration are built entirely on these two
/// operations, so implementations must uphold the round-trip contract below.
///
/// # Contract
///
/// Wherever both steps are defined,
/// `x.successor().unwrap().predecessor() == Some(x)` and
/// `x.predecessor().unwrap().successor() == Some(x)`, and `successor` is
/// strictly increasing with respect to `Ord`.
///
/// # Examples
///
/// ```rust
/// # use rangeset::step::Steppable;
///
/// assert_eq!(41i32.successor(), Some(42));
/// assert_eq!(42i32.predecessor(), Some(41));
/// assert_eq!(i32::MIN.predecessor(), None);
/// ```
pub trait Steppable: Clone + Ord {
    /// Returns the element immediately after `self`, or `None` if `self` is
    /// the greatest element of the domain.
    fn successor(&self) -> Option<Self>;

    /// Returns the element immediately before `self`, or `None` if `self` is
    /// the least element of the domain.
    fn predecessor(&self) -> Option<Self>;
}

macro_rules! steppable_int_impl {
    ($t:ty) => {
        impl Steppable for $t {
            #[inline(always)]
            fn successor(&self) -> Option<Self> {
                CheckedAdd::checked_add(self, &<$t as One>::one())
            }

            #[inline(always)]
            fn predecessor(&self) -> Option<Self> {
                CheckedSub::checked_sub(self, &<$t as One>::one())
            }
        }
    };
}

steppable_int_impl!(u8);
steppable_int_impl!(u16);
steppable_int_impl!(u32);
steppable_int_impl!(u64);
steppable_int_impl!(u128);
steppable_int_impl!(usize);

steppable_int_impl!(i8);
steppable_int_impl!(i16);
steppable_int_impl!(i32);
steppable_int_impl!(i64);
steppable_int_impl!(i128);
steppable_int_impl!(isize);

/// The `char` sequence follows scalar-value order and skips the surrogate
/// gap `U+D800..=U+DFFF`, so every produced value is a valid `char`.
impl Steppable for char {
    #[inline]
    fn successor(&self) -> Option<Self> {
        let next = if *self == '\u{D7FF}' {
            0xE000
        } else {
            *self as u32 + 1
        };
        char::from_u32(next)
    }

    #[inline]
    fn predecessor(&self) -> Option<Self> {
        let current = *self as u32;
        if current == 0 {
            return None;
        }
        let previous = if current == 0xE000 { 0xD7FF } else { current - 1 };
        char::from_u32(previous)
    }
}
