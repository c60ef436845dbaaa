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

//! # Layout
//!
//! `Layout` is an immutable, validated `(size, align)` descriptor of a memory
//! block. Every `Layout` in existence satisfies two invariants:
//!
//! 1. `align` is a power of two (and therefore at least `1`).
//! 2. `size <= usize::MAX - (align - 1)`, so rounding `size` up to a multiple
//!    of `align` can never overflow.
//!
//! The only way to obtain a `Layout` is through the validating constructors
//! `from_size_align` and `from_type`. All composing operations return a
//! `Result`, and a failed composition leaves the receiver untouched.
//!
//! ## Composition
//!
//! - `repeat` / `repeat_packed`: `n` consecutive elements, with or without
//!   inter-element padding.
//! - `extend` / `extend_packed`: one layout followed by another, with or
//!   without the padding the second one needs.
//! - `array`: `repeat` followed by `pad_to_align`.
//!
//! Compositions are order-sensitive: `a.extend(b)` and `b.extend(a)` generally
//! differ because padding depends on which alignment requirement comes second.
//!
//! ```rust
//! use memlayout::layout::Layout;
//!
//! let byte = Layout::from_size_align(1, 1)?;
//! let word = Layout::from_size_align(4, 4)?;
//!
//! let (pair, offset) = byte.extend(word)?;
//! assert_eq!(offset, 4);
//! assert_eq!((pair.size(), pair.align()), (8, 4));
//!
//! let (swapped, offset) = word.extend(byte)?;
//! assert_eq!(offset, 4);
//! assert_eq!((swapped.size(), swapped.align()), (5, 4));
//! assert_eq!(swapped.pad_to_align().size(), 8);
//! # Ok::<(), memlayout::error::LayoutError>(())
//! ```

use crate::error::{
    InvalidLayoutError, InvalidLayoutKind, LayoutError, LayoutOperation, OverflowError,
};
use memlayout_core::num::{
    bits::is_power_of_two, checked_add, checked_mul, wrapping_add, wrapping_sub,
};
use std::{cmp::max, fmt::Display, ptr::NonNull};

/// The size and alignment of a block of memory.
///
/// # Examples
///
/// ```rust
/// # use memlayout::layout::Layout;
///
/// let layout = Layout::from_size_align(12, 4).unwrap();
/// assert_eq!(layout.size(), 12);
/// assert_eq!(layout.align(), 4);
/// assert_eq!(layout.to_string(), "<Layout| size:12, align: 4>");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    size: usize,
    align: usize,
}

#[inline(never)]
#[cold]
fn invalid(size: usize, align: usize, kind: InvalidLayoutKind) -> LayoutError {
    log::trace!("rejected layout (size: {size}, align: {align}): {kind:?}");
    InvalidLayoutError::new(size, align, kind).into()
}

#[inline(never)]
#[cold]
fn overflow(operation: LayoutOperation) -> LayoutError {
    log::trace!("layout size overflow in `{operation}`");
    OverflowError::new(operation).into()
}

impl Layout {
    /// The largest size permitted together with `align`.
    ///
    /// `align` must be non-zero.
    #[inline(always)]
    const fn max_size_for_align(align: usize) -> usize {
        usize::MAX - (align - 1)
    }

    /// Creates a `Layout` from a size and an alignment.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidLayout` if `align` is zero or not a power
    /// of two, or if `size` exceeds `usize::MAX - (align - 1)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use memlayout::layout::Layout;
    ///
    /// assert!(Layout::from_size_align(16, 8).is_ok());
    /// assert!(Layout::from_size_align(16, 0).is_err());
    /// assert!(Layout::from_size_align(16, 12).is_err());
    /// assert!(Layout::from_size_align(usize::MAX - 7, 8).is_ok());
    /// assert!(Layout::from_size_align(usize::MAX - 6, 8).is_err());
    /// ```
    pub fn from_size_align(size: usize, align: usize) -> Result<Self, LayoutError> {
        if align == 0 {
            return Err(invalid(size, align, InvalidLayoutKind::ZeroAlign));
        }
        if !is_power_of_two(align) {
            return Err(invalid(size, align, InvalidLayoutKind::AlignNotPowerOfTwo));
        }
        if size > Self::max_size_for_align(align) {
            return Err(invalid(size, align, InvalidLayoutKind::SizeTooLarge));
        }
        Ok(Self { size, align })
    }

    /// Creates a `Layout` from the intrinsic size and alignment of a type, as
    /// reported by the host's introspection (see `introspect::size_align`).
    ///
    /// # Errors
    ///
    /// Same as [`Layout::from_size_align`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use memlayout::layout::Layout;
    ///
    /// let (size, align) = (std::mem::size_of::<u32>(), std::mem::align_of::<u32>());
    /// let layout = Layout::from_type(size, align).unwrap();
    /// assert_eq!(layout.size(), 4);
    /// ```
    #[inline]
    pub fn from_type(native_size: usize, native_align: usize) -> Result<Self, LayoutError> {
        Self::from_size_align(native_size, native_align)
    }

    /// The size of the memory block in bytes.
    #[inline(always)]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The alignment of the memory block in bytes.
    #[inline(always)]
    pub const fn align(&self) -> usize {
        self.align
    }

    /// Returns the number of bytes needed after `size()` to reach the next
    /// multiple of `align`.
    ///
    /// Returns `0` for `align <= 1`. The computation uses wrapping arithmetic
    /// throughout, so it is defined for every input; for an `align` that is
    /// not a power of two the result carries no meaning.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use memlayout::layout::Layout;
    ///
    /// let layout = Layout::from_size_align(9, 1).unwrap();
    /// assert_eq!(layout.required_padding(8), 7);
    /// assert_eq!(layout.required_padding(16), 7);
    /// assert_eq!(layout.required_padding(1), 0);
    /// assert_eq!(layout.required_padding(0), 0);
    /// ```
    #[inline]
    pub fn required_padding(&self, align: usize) -> usize {
        if align <= 1 {
            return 0;
        }
        let len = self.size;
        let len_rounded_up = wrapping_sub(wrapping_add(len, align), 1) & !wrapping_sub(align, 1);
        wrapping_sub(len_rounded_up, len)
    }

    /// Returns a layout with the same alignment whose size is rounded up to a
    /// multiple of the alignment.
    ///
    /// # Panics
    ///
    /// Panics if `self` does not satisfy the layout invariants. This cannot
    /// happen for a `Layout` obtained from this crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use memlayout::layout::Layout;
    ///
    /// let layout = Layout::from_size_align(13, 8).unwrap().pad_to_align();
    /// assert_eq!((layout.size(), layout.align()), (16, 8));
    /// ```
    pub fn pad_to_align(&self) -> Self {
        let padding = self.required_padding(self.align);
        let padded = checked_add(self.size, padding)
            .map(|size| Self::from_size_align(size, self.align));
        match padded {
            Some(Ok(layout)) => layout,
            _ => panic!(
                "called `Layout::pad_to_align` on a layout that violates its invariants: {}",
                self
            ),
        }
    }

    /// Returns a layout with the same size and an alignment of
    /// `max(self.align(), align)`.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidLayout` if the resulting pair is invalid,
    /// e.g. when `align` exceeds `self.align()` and is not a power of two.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use memlayout::layout::Layout;
    ///
    /// let layout = Layout::from_size_align(6, 2).unwrap();
    /// assert_eq!(layout.align_to(8).unwrap().align(), 8);
    /// assert_eq!(layout.align_to(1).unwrap().align(), 2);
    /// assert!(layout.align_to(12).is_err());
    /// ```
    #[inline]
    pub fn align_to(&self, align: usize) -> Result<Self, LayoutError> {
        Self::from_size_align(self.size, max(self.align, align))
    }

    /// Returns a layout for `n` instances of `self` with padding between
    /// them, together with the stride (the padded size of one element).
    ///
    /// No trailing padding is added after the last element beyond what the
    /// stride already contains.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::Overflow` if the total size does not fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use memlayout::layout::Layout;
    ///
    /// let element = Layout::from_size_align(6, 4).unwrap();
    /// let (layout, stride) = element.repeat(3).unwrap();
    /// assert_eq!(stride, 8);
    /// assert_eq!((layout.size(), layout.align()), (24, 4));
    /// assert!(element.repeat(usize::MAX).is_err());
    /// ```
    pub fn repeat(&self, n: usize) -> Result<(Self, usize), LayoutError> {
        let stride = self.size + self.required_padding(self.align);
        let size = checked_mul(stride, n).ok_or_else(|| overflow(LayoutOperation::Repeat))?;
        let layout = Self::from_size_align(size, self.align)
            .map_err(|_| overflow(LayoutOperation::Repeat))?;
        Ok((layout, stride))
    }

    /// Returns a layout for `n` instances of `self` with no padding between
    /// them.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::Overflow` if the total size does not fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use memlayout::layout::Layout;
    ///
    /// let element = Layout::from_size_align(6, 4).unwrap();
    /// let layout = element.repeat_packed(3).unwrap();
    /// assert_eq!((layout.size(), layout.align()), (18, 4));
    /// ```
    pub fn repeat_packed(&self, n: usize) -> Result<Self, LayoutError> {
        let size =
            checked_mul(self.size, n).ok_or_else(|| overflow(LayoutOperation::RepeatPacked))?;
        Self::from_size_align(size, self.align).map_err(|_| overflow(LayoutOperation::RepeatPacked))
    }

    /// Returns a layout for `self` followed by `next`, with the minimum
    /// padding that places `next` at an offset satisfying its alignment,
    /// together with that offset.
    ///
    /// The resulting alignment is `max(self.align(), next.align())`. No
    /// trailing padding is added; use [`Layout::pad_to_align`] for that.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::Overflow` if the offset or the total size does
    /// not fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use memlayout::layout::Layout;
    ///
    /// let header = Layout::from_size_align(2, 2).unwrap();
    /// let body = Layout::from_size_align(16, 8).unwrap();
    /// let (layout, offset) = header.extend(body).unwrap();
    /// assert_eq!(offset, 8);
    /// assert_eq!((layout.size(), layout.align()), (24, 8));
    /// ```
    pub fn extend(&self, next: Self) -> Result<(Self, usize), LayoutError> {
        let new_align = max(self.align, next.align);
        let padding = self.required_padding(next.align);
        let offset =
            checked_add(self.size, padding).ok_or_else(|| overflow(LayoutOperation::Extend))?;
        let new_size =
            checked_add(offset, next.size).ok_or_else(|| overflow(LayoutOperation::Extend))?;
        let layout = Self::from_size_align(new_size, new_align)
            .map_err(|_| overflow(LayoutOperation::Extend))?;
        Ok((layout, offset))
    }

    /// Returns a layout for `self` immediately followed by `next`, without
    /// any padding. The alignment of `self` is kept unchanged.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::Overflow` if the total size does not fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use memlayout::layout::Layout;
    ///
    /// let tag = Layout::from_size_align(1, 1).unwrap();
    /// let value = Layout::from_size_align(8, 8).unwrap();
    /// let layout = tag.extend_packed(value).unwrap();
    /// assert_eq!((layout.size(), layout.align()), (9, 1));
    /// ```
    pub fn extend_packed(&self, next: Self) -> Result<Self, LayoutError> {
        let new_size = checked_add(self.size, next.size)
            .ok_or_else(|| overflow(LayoutOperation::ExtendPacked))?;
        Self::from_size_align(new_size, self.align)
            .map_err(|_| overflow(LayoutOperation::ExtendPacked))
    }

    /// Returns the layout of an array of `n` elements of `element`, including
    /// trailing padding.
    ///
    /// # Errors
    ///
    /// Propagates the `LayoutError::Overflow` of [`Layout::repeat`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use memlayout::layout::Layout;
    ///
    /// let element = Layout::from_size_align(3, 2).unwrap();
    /// let array = Layout::array(element, 5).unwrap();
    /// assert_eq!((array.size(), array.align()), (20, 2));
    /// ```
    pub fn array(element: Self, n: usize) -> Result<Self, LayoutError> {
        let (layout, _) = element.repeat(n)?;
        Ok(layout.pad_to_align())
    }

    /// Returns a non-null pointer whose address equals `align()`.
    ///
    /// The pointer is well-aligned for this layout but dangling: it must not
    /// be dereferenced. It is useful as a placeholder for zero-sized blocks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use memlayout::layout::Layout;
    ///
    /// let layout = Layout::from_size_align(0, 16).unwrap();
    /// let ptr = layout.dangling();
    /// assert_eq!(ptr.as_ptr() as usize, 16);
    /// assert_eq!(ptr.as_ptr().align_offset(16), 0);
    /// ```
    #[inline]
    pub fn dangling(&self) -> NonNull<u8> {
        // SAFETY: `align` is a power of two, hence never zero.
        unsafe { NonNull::new_unchecked(std::ptr::without_provenance_mut(self.align)) }
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Layout| size:{}, align: {}>", self.size, self.align)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn l(size: usize, align: usize) -> Layout {
        Layout::from_size_align(size, align).unwrap()
    }

    fn kind_of(result: Result<Layout, LayoutError>) -> InvalidLayoutKind {
        match result {
            Err(LayoutError::InvalidLayout(e)) => e.kind,
            other => panic!("expected an invalid layout error, got {other:?}"),
        }
    }

    fn overflow_op<T: std::fmt::Debug>(result: Result<T, LayoutError>) -> LayoutOperation {
        match result {
            Err(LayoutError::Overflow(e)) => e.operation,
            other => panic!("expected an overflow error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_size_align_accepts_iff_size_within_bound() {
        for shift in 0..usize::BITS {
            let align = 1_usize << shift;
            let bound = usize::MAX - (align - 1);
            assert!(Layout::from_size_align(bound, align).is_ok());
            assert!(Layout::from_size_align(0, align).is_ok());
            if bound < usize::MAX {
                assert_eq!(
                    kind_of(Layout::from_size_align(bound + 1, align)),
                    InvalidLayoutKind::SizeTooLarge
                );
                assert_eq!(
                    kind_of(Layout::from_size_align(usize::MAX, align)),
                    InvalidLayoutKind::SizeTooLarge
                );
            }
        }
    }

    #[test]
    fn test_from_size_align_sampled_sizes() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..10_000 {
            let align = 1_usize << rng.gen_range(0..usize::BITS);
            let size: usize = rng.r#gen();
            let valid = size <= usize::MAX - (align - 1);
            assert_eq!(Layout::from_size_align(size, align).is_ok(), valid);
        }
    }

    #[test]
    fn test_from_size_align_rejects_zero_align() {
        assert_eq!(kind_of(Layout::from_size_align(0, 0)), InvalidLayoutKind::ZeroAlign);
        assert_eq!(kind_of(Layout::from_size_align(8, 0)), InvalidLayoutKind::ZeroAlign);
    }

    #[test]
    fn test_from_size_align_rejects_non_power_of_two() {
        for align in [3_usize, 5, 6, 7, 12, 24, 1000, usize::MAX] {
            assert_eq!(
                kind_of(Layout::from_size_align(0, align)),
                InvalidLayoutKind::AlignNotPowerOfTwo,
                "align {align}"
            );
        }
    }

    #[test]
    fn test_from_type_matches_native_types() {
        let layout = Layout::from_type(std::mem::size_of::<u64>(), std::mem::align_of::<u64>());
        assert_eq!(layout, Ok(l(8, std::mem::align_of::<u64>())));
        assert!(Layout::from_type(4, 3).is_err());
    }

    #[test]
    fn test_required_padding_table() {
        assert_eq!(l(0, 8).required_padding(8), 0);
        assert_eq!(l(1, 8).required_padding(8), 7);
        assert_eq!(l(8, 8).required_padding(8), 0);
        assert_eq!(l(9, 8).required_padding(8), 7);
    }

    #[test]
    fn test_required_padding_trivial_aligns() {
        assert_eq!(l(5, 1).required_padding(0), 0);
        assert_eq!(l(5, 1).required_padding(1), 0);
        assert_eq!(l(usize::MAX, 1).required_padding(0), 0);
    }

    #[test]
    fn test_required_padding_wraps_near_max() {
        // (size + align - 1) wraps to zero; the result stays well defined.
        let layout = l(usize::MAX, 1);
        assert_eq!(layout.required_padding(2), 1);
    }

    #[test]
    fn test_pad_to_align_rounds_up() {
        assert_eq!(l(0, 4).pad_to_align(), l(0, 4));
        assert_eq!(l(1, 4).pad_to_align(), l(4, 4));
        assert_eq!(l(5, 4).pad_to_align(), l(8, 4));
        assert_eq!(l(8, 4).pad_to_align(), l(8, 4));
    }

    #[test]
    fn test_pad_to_align_at_size_limit() {
        let align = 4096;
        let layout = l(usize::MAX - (align - 1), align);
        assert_eq!(layout.pad_to_align(), layout);
        let layout = l(usize::MAX - 2 * align + 2, align);
        assert_eq!(layout.pad_to_align().size(), usize::MAX - (align - 1));
    }

    #[test]
    fn test_pad_to_align_idempotent() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10_000 {
            let align = 1_usize << rng.gen_range(0..16_u32);
            let size = rng.gen_range(0..=usize::MAX - (align - 1));
            let once = l(size, align).pad_to_align();
            assert_eq!(once.pad_to_align(), once);
            assert_eq!(once.size() % align, 0);
            assert_eq!(once.align(), align);
        }
    }

    #[test]
    fn test_align_to_keeps_size() {
        let layout = l(3, 1);
        assert_eq!(layout.align_to(16), Ok(l(3, 16)));
        assert_eq!(layout.align_to(0), Ok(layout));
        assert_eq!(
            kind_of(layout.align_to(6)),
            InvalidLayoutKind::AlignNotPowerOfTwo
        );
        assert_eq!(
            kind_of(l(usize::MAX, 1).align_to(2)),
            InvalidLayoutKind::SizeTooLarge
        );
    }

    #[test]
    fn test_extend_inserts_padding() {
        let (layout, offset) = l(1, 1).extend(l(4, 4)).unwrap();
        assert_eq!(offset, 4);
        assert_eq!(layout, l(8, 4));
    }

    #[test]
    fn test_extend_is_order_sensitive() {
        let a = l(1, 1);
        let b = l(4, 4);
        let (ab, _) = a.extend(b).unwrap();
        let (ba, offset) = b.extend(a).unwrap();
        assert_eq!(offset, 4);
        assert_eq!(ba, l(5, 4));
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_extend_zero_sized_tail() {
        let (layout, offset) = l(3, 1).extend(l(0, 8)).unwrap();
        assert_eq!(offset, 8);
        assert_eq!(layout, l(8, 8));
    }

    #[test]
    fn test_extend_overflow() {
        let big = l(usize::MAX - 7, 8);
        assert_eq!(overflow_op(big.extend(l(8, 8))), LayoutOperation::Extend);
        assert_eq!(overflow_op(l(1, 1).extend(big)), LayoutOperation::Extend);
        // The padded offset itself fits but the final pair violates the size bound.
        assert_eq!(
            overflow_op(l(usize::MAX - 15, 1).extend(l(1, 16))),
            LayoutOperation::Extend
        );
    }

    #[test]
    fn test_extend_packed_keeps_alignment() {
        assert_eq!(l(1, 1).extend_packed(l(4, 4)), Ok(l(5, 1)));
        assert_eq!(l(4, 4).extend_packed(l(1, 1)), Ok(l(5, 4)));
    }

    #[test]
    fn test_extend_packed_overflow() {
        assert_eq!(
            overflow_op(l(usize::MAX, 1).extend_packed(l(1, 1))),
            LayoutOperation::ExtendPacked
        );
        assert_eq!(
            overflow_op(l(usize::MAX - 7, 8).extend_packed(l(1, 1))),
            LayoutOperation::ExtendPacked
        );
    }

    #[test]
    fn test_repeat_stride() {
        let (layout, stride) = l(4, 4).repeat(3).unwrap();
        assert_eq!(stride, 4);
        assert_eq!(layout, l(12, 4));
    }

    #[test]
    fn test_repeat_pads_between_elements() {
        let (layout, stride) = l(5, 4).repeat(2).unwrap();
        assert_eq!(stride, 8);
        assert_eq!(layout, l(16, 4));
        let (empty, stride) = l(5, 4).repeat(0).unwrap();
        assert_eq!(stride, 8);
        assert_eq!(empty, l(0, 4));
    }

    #[test]
    fn test_repeat_overflow() {
        assert_eq!(overflow_op(l(2, 2).repeat(usize::MAX)), LayoutOperation::Repeat);
        assert_eq!(
            overflow_op(l(8, 8).repeat(usize::MAX / 8 + 1)),
            LayoutOperation::Repeat
        );
        // The largest stride multiple that fits is exactly the size bound.
        assert_eq!(
            l(1, 8).repeat(usize::MAX / 8),
            Ok((l(usize::MAX - 7, 8), 8))
        );
    }

    #[test]
    fn test_repeat_packed() {
        assert_eq!(l(5, 4).repeat_packed(3), Ok(l(15, 4)));
        assert_eq!(l(0, 4).repeat_packed(usize::MAX), Ok(l(0, 4)));
        assert_eq!(
            overflow_op(l(3, 1).repeat_packed(usize::MAX / 2)),
            LayoutOperation::RepeatPacked
        );
    }

    #[test]
    fn test_array_adds_trailing_padding() {
        assert_eq!(Layout::array(l(4, 4), 3), Ok(l(12, 4)));
        assert_eq!(Layout::array(l(5, 4), 3), Ok(l(24, 4)));
        assert_eq!(Layout::array(l(5, 4), 0), Ok(l(0, 4)));
    }

    #[test]
    fn test_array_propagates_repeat_overflow() {
        assert_eq!(
            overflow_op(Layout::array(l(16, 16), usize::MAX)),
            LayoutOperation::Repeat
        );
    }

    #[test]
    fn test_failed_composition_leaves_receiver_untouched() {
        let layout = l(7, 8);
        let copy = layout;
        assert!(layout.repeat(usize::MAX).is_err());
        assert!(layout.extend(l(usize::MAX, 1)).is_err());
        assert_eq!(layout, copy);
    }

    #[test]
    fn test_struct_composition_int_double_char_int() {
        let int = l(4, 4);
        let double = l(8, 8);
        let chr = l(1, 1);

        let (acc, off_b) = int.extend(double).unwrap();
        let (acc, off_c) = acc.extend(chr).unwrap();
        let (acc, off_d) = acc.extend(int).unwrap();
        let padded = acc.pad_to_align();

        assert_eq!((off_b, off_c, off_d), (8, 16, 20));
        assert_eq!(padded.align(), 8);
        assert_eq!(padded.size(), 24);
    }

    #[test]
    fn test_struct_composition_matches_repr_c() {
        #[allow(dead_code)]
        #[repr(C)]
        struct A {
            a: i32,
            b: f64,
            c: u8,
            d: i32,
        }

        let field = |size, align| Layout::from_type(size, align).unwrap();
        let (acc, _) = field(4, std::mem::align_of::<i32>())
            .extend(field(8, std::mem::align_of::<f64>()))
            .unwrap();
        let (acc, _) = acc.extend(field(1, 1)).unwrap();
        let (acc, _) = acc.extend(field(4, std::mem::align_of::<i32>())).unwrap();
        let padded = acc.pad_to_align();

        assert_eq!(padded.size(), std::mem::size_of::<A>());
        assert_eq!(padded.align(), std::mem::align_of::<A>());
    }

    #[test]
    fn test_dangling_is_aligned_and_non_null() {
        for shift in 0..12 {
            let align = 1_usize << shift;
            let ptr = l(0, align).dangling();
            assert_eq!(ptr.as_ptr() as usize, align);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(l(24, 8).to_string(), "<Layout| size:24, align: 8>");
        assert_eq!(format!("{}", l(0, 1)), "<Layout| size:0, align: 1>");
    }
}
