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

use crate::num::word::UnsignedWord;
use core::ops::{Add, Sub};

macro_rules! wrapping_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                <$t>::$src_method(self, v)
            }
        }
    };
}

/// Wrapping addition by value (no references).
///
/// The result is `(self + v) mod 2^BITS`; the operation never fails and never
/// panics, regardless of build profile.
///
/// # Examples
///
/// ```rust
/// # use memlayout_core::num::ops::wrapping_arithmetic::WrappingAddVal;
///
/// let a: u8 = 250;
/// let b: u8 = 10;
/// assert_eq!(a.wrapping_add_val(b), 4); // 260 mod 256
/// assert_eq!(1_u8.wrapping_add_val(2), 3);
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping addition by value.
    fn wrapping_add_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, u8, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, u16, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, u32, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, u64, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, usize, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, u128, wrapping_add);

/// Wrapping subtraction by value (no references).
///
/// The result is `(self - v) mod 2^BITS`.
///
/// # Examples
///
/// ```rust
/// # use memlayout_core::num::ops::wrapping_arithmetic::WrappingSubVal;
///
/// let a: u8 = 5;
/// let b: u8 = 10;
/// assert_eq!(a.wrapping_sub_val(b), 251); // -5 mod 256
/// assert_eq!(0_usize.wrapping_sub_val(1), usize::MAX);
/// ```
pub trait WrappingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs wrapping subtraction by value.
    fn wrapping_sub_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, u8, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, u16, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, u32, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, u64, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, usize, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, u128, wrapping_sub);

/// Returns `(x + y) mod 2^BITS`.
///
/// # Examples
///
/// ```rust
/// # use memlayout_core::num::wrapping_add;
///
/// assert_eq!(wrapping_add(usize::MAX, 1), 0);
/// assert_eq!(wrapping_add(40_u32, 2), 42);
/// ```
#[inline(always)]
pub fn wrapping_add<T>(x: T, y: T) -> T
where
    T: UnsignedWord,
{
    x.wrapping_add_val(y)
}

/// Returns `(x - y) mod 2^BITS`.
///
/// # Examples
///
/// ```rust
/// # use memlayout_core::num::wrapping_sub;
///
/// assert_eq!(wrapping_sub(0_usize, 1), usize::MAX);
/// assert_eq!(wrapping_sub(44_u32, 2), 42);
/// ```
#[inline(always)]
pub fn wrapping_sub<T>(x: T, y: T) -> T
where
    T: UnsignedWord,
{
    x.wrapping_sub_val(y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_wrapping_add_boundaries() {
        assert_eq!(wrapping_add(u8::MAX, 1), 0);
        assert_eq!(wrapping_add(u8::MAX, u8::MAX), 254);
        assert_eq!(wrapping_add(u128::MAX, 2), 1);
        assert_eq!(wrapping_add(0_usize, 0), 0);
    }

    #[test]
    fn test_wrapping_sub_boundaries() {
        assert_eq!(wrapping_sub(0_u8, 1), u8::MAX);
        assert_eq!(wrapping_sub(0_u64, u64::MAX), 1);
        assert_eq!(wrapping_sub(7_usize, 7), 0);
    }

    #[test]
    fn test_sub_undoes_add_exhaustive_u8() {
        for x in 0..=u8::MAX {
            for y in 0..=u8::MAX {
                assert_eq!(wrapping_sub(wrapping_add(x, y), y), x);
            }
        }
    }

    #[test]
    fn test_sub_undoes_add_sampled_usize() {
        let mut rng = rng();
        for _ in 0..10_000 {
            let x: usize = rng.r#gen();
            let y: usize = rng.r#gen();
            assert_eq!(wrapping_sub(wrapping_add(x, y), y), x);
        }
    }

    #[test]
    fn test_free_functions_agree_with_traits() {
        let mut rng = rng();
        for _ in 0..1_000 {
            let x: u32 = rng.r#gen();
            let y: u32 = rng.r#gen();
            assert_eq!(wrapping_add(x, y), x.wrapping_add_val(y));
            assert_eq!(wrapping_sub(x, y), x.wrapping_sub_val(y));
        }
    }
}
