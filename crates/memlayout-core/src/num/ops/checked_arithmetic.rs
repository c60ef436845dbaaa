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

use crate::num::{
    bits::bit_clear_range, ops::wrapping_arithmetic::wrapping_add, word::UnsignedWord,
};
use core::ops::{Add, Mul};

/// Returns `x + y` if the exact sum fits in `T`, otherwise `None`.
///
/// Overflow is detected from the wrapped sum alone: an unsigned addition
/// overflowed iff the wrapped result is smaller than `x | y`.
///
/// # Examples
///
/// ```rust
/// # use memlayout_core::num::checked_add;
///
/// assert_eq!(checked_add(200_u8, 55), Some(255));
/// assert_eq!(checked_add(200_u8, 56), None);
/// assert_eq!(checked_add(usize::MAX, 0), Some(usize::MAX));
/// ```
#[inline(always)]
pub fn checked_add<T>(x: T, y: T) -> Option<T>
where
    T: UnsignedWord,
{
    let sum = wrapping_add(x, y);
    if sum < (x | y) { None } else { Some(sum) }
}

/// Returns `x * y` if the exact product fits in `T`, otherwise `None`.
///
/// The product is computed with the split-halves technique and never needs a
/// wider intermediate type. Writing `x = xh * 2^h + xl` and
/// `y = yh * 2^h + yl` with `h = T::HALF_BITS`:
///
/// ```text
/// x * y = xh*yh * 2^(2h) + (xh*yl + xl*yh) * 2^h + xl*yl
/// ```
///
/// The first term must vanish, the cross term must fit in `h` bits, and the
/// final addition must not carry out of the word. Every partial product is a
/// product of two half-width values and therefore cannot overflow itself.
///
/// # Examples
///
/// ```rust
/// # use memlayout_core::num::checked_mul;
///
/// assert_eq!(checked_mul(16_u8, 15), Some(240));
/// assert_eq!(checked_mul(16_u8, 16), None);
/// assert_eq!(checked_mul(u128::MAX, 1), Some(u128::MAX));
/// assert_eq!(checked_mul(1_u128 << 64, 1_u128 << 63), Some(1_u128 << 127));
/// assert_eq!(checked_mul(1_u128 << 64, 1_u128 << 64), None);
/// ```
#[inline]
pub fn checked_mul<T>(x: T, y: T) -> Option<T>
where
    T: UnsignedWord,
{
    let x_hi = x.unsigned_shr(T::HALF_BITS);
    let y_hi = y.unsigned_shr(T::HALF_BITS);
    let x_lo = bit_clear_range(x, T::HALF_BITS, T::HALF_BITS);
    let y_lo = bit_clear_range(y, T::HALF_BITS, T::HALF_BITS);

    if x_hi != T::zero() && y_hi != T::zero() {
        return None;
    }

    // At most one of the two cross products is non-zero here.
    let cross = x_hi * y_lo + x_lo * y_hi;
    if cross.unsigned_shr(T::HALF_BITS) != T::zero() {
        return None;
    }

    checked_add(cross.unsigned_shl(T::HALF_BITS), x_lo * y_lo)
}

/// A trait for types that support checked addition by value (no references).
///
/// # Examples
///
/// ```rust
/// # use memlayout_core::num::ops::checked_arithmetic::CheckedAddVal;
/// let a: u8 = 200;
/// let b: u8 = 100;
/// assert_eq!(a.checked_add_val(b), None); // Overflow occurs
/// let c: u8 = 50;
/// assert_eq!(a.checked_add_val(c), Some(250)); // No overflow
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use memlayout_core::num::ops::checked_arithmetic::CheckedMulVal;
///
/// let a: u8 = 20;
/// let b: u8 = 10;
/// assert_eq!(a.checked_mul_val(b), Some(200)); // No overflow
/// let c: u8 = 20;
/// assert_eq!(a.checked_mul_val(c), None); // Overflow occurs (20*20 = 400 > 255)
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

impl<T> CheckedAddVal for T
where
    T: UnsignedWord,
{
    #[inline(always)]
    fn checked_add_val(self, v: T) -> Option<T> {
        checked_add(self, v)
    }
}

impl<T> CheckedMulVal for T
where
    T: UnsignedWord,
{
    #[inline(always)]
    fn checked_mul_val(self, v: T) -> Option<T> {
        checked_mul(self, v)
    }
}
