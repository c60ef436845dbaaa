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

//! # Bit Helpers
//!
//! Small bit-twiddling primitives shared by the arithmetic and layout code:
//! power-of-two detection and masking of contiguous bit ranges. Range helpers
//! never shift by the full width of the word (which would be an arithmetic
//! overflow for primitive shifts); out-of-range counts saturate instead.

use crate::num::word::UnsignedWord;

/// Returns `true` if `n` is a power of two. Zero is not a power of two.
///
/// # Examples
///
/// ```rust
/// # use memlayout_core::num::bits::is_power_of_two;
///
/// assert!(is_power_of_two(1_usize));
/// assert!(is_power_of_two(64_u32));
/// assert!(!is_power_of_two(0_u8));
/// assert!(!is_power_of_two(12_u16));
/// ```
#[inline(always)]
pub fn is_power_of_two<T>(n: T) -> bool
where
    T: UnsignedWord,
{
    n != T::zero() && (n & (n - T::one())) == T::zero()
}

/// Returns a word with the low `n` bits set.
///
/// `n == 0` yields zero and `n >= T::BITS` yields `T::max_value()`.
///
/// # Examples
///
/// ```rust
/// # use memlayout_core::num::bits::low_mask;
///
/// assert_eq!(low_mask::<u8>(3), 0b0000_0111);
/// assert_eq!(low_mask::<u8>(0), 0);
/// assert_eq!(low_mask::<u8>(8), u8::MAX);
/// assert_eq!(low_mask::<u8>(200), u8::MAX);
/// ```
#[inline(always)]
pub fn low_mask<T>(n: u32) -> T
where
    T: UnsignedWord,
{
    if n == 0 {
        T::zero()
    } else if n >= T::BITS {
        T::max_value()
    } else {
        T::max_value().unsigned_shr(T::BITS - n)
    }
}

/// Sets `n` consecutive bits of `value`, starting at bit `offset`.
///
/// Bits that would land at or above `T::BITS` are dropped. An `offset` at or
/// beyond the width leaves `value` unchanged.
///
/// # Examples
///
/// ```rust
/// # use memlayout_core::num::bits::bit_set_range;
///
/// assert_eq!(bit_set_range(0_u8, 2, 3), 0b0001_1100);
/// assert_eq!(bit_set_range(0_u8, 6, 4), 0b1100_0000);
/// assert_eq!(bit_set_range(1_u8, 8, 1), 1);
/// ```
#[inline(always)]
pub fn bit_set_range<T>(value: T, offset: u32, n: u32) -> T
where
    T: UnsignedWord,
{
    if offset >= T::BITS {
        return value;
    }
    value | low_mask::<T>(n).unsigned_shl(offset)
}

/// Clears `n` consecutive bits of `value`, starting at bit `offset`.
///
/// Follows the same saturation rules as [`bit_set_range`].
///
/// # Examples
///
/// ```rust
/// # use memlayout_core::num::bits::bit_clear_range;
///
/// assert_eq!(bit_clear_range(0xFF_u8, 0, 4), 0xF0);
/// assert_eq!(bit_clear_range(0xFFFF_u16, 8, 8), 0x00FF);
/// assert_eq!(bit_clear_range(0xFF_u8, 9, 3), 0xFF);
/// ```
#[inline(always)]
pub fn bit_clear_range<T>(value: T, offset: u32, n: u32) -> T
where
    T: UnsignedWord,
{
    if offset >= T::BITS {
        return value;
    }
    value & !low_mask::<T>(n).unsigned_shl(offset)
}
