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

//! # Fixed-Width Unsigned Words
//!
//! `UnsignedWord` names the set of integer types the layout arithmetic is
//! defined over. Besides the `num_traits` integer interface it exposes the bit
//! width of the type as an associated constant, which the split-halves
//! multiplication and the bit range helpers need without resorting to
//! `size_of` arithmetic at every call site.

use crate::num::ops::wrapping_arithmetic::{WrappingAddVal, WrappingSubVal};
use num_traits::{PrimInt, Unsigned};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// A fixed-width unsigned integer usable by the checked and wrapping
/// arithmetic of this crate.
///
/// # Examples
///
/// ```rust
/// # use memlayout_core::num::word::UnsignedWord;
///
/// assert_eq!(<u8 as UnsignedWord>::BITS, 8);
/// assert_eq!(<u64 as UnsignedWord>::HALF_BITS, 32);
/// assert_eq!(<u16 as UnsignedWord>::LOW_HALF_MASK, 0x00FF);
/// ```
pub trait UnsignedWord:
    PrimInt + Unsigned + WrappingAddVal + WrappingSubVal + Debug + Display + Hash
{
    /// The number of bits in the word.
    const BITS: u32;

    /// Half of `BITS`; the width of each half in split-halves arithmetic.
    const HALF_BITS: u32 = Self::BITS / 2;

    /// A value with the low `HALF_BITS` bits set.
    const LOW_HALF_MASK: Self;
}

macro_rules! impl_unsigned_word_for {
    ($t:ty) => {
        impl UnsignedWord for $t {
            const BITS: u32 = <$t>::BITS;
            const LOW_HALF_MASK: Self = <$t>::MAX >> (<$t>::BITS / 2);
        }
    };
}

impl_unsigned_word_for!(u8);
impl_unsigned_word_for!(u16);
impl_unsigned_word_for!(u32);
impl_unsigned_word_for!(u64);
impl_unsigned_word_for!(u128);
impl_unsigned_word_for!(usize);
