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

//! Native type introspection.
//!
//! The layout algebra itself never inspects types; it consumes plain
//! `(size, align)` pairs. This module is the single place where such a pair is
//! obtained from the compiler, so that call sites can compute it once (the
//! functions are `const`) and hand it to [`Layout::from_type`].

use crate::{error::LayoutError, layout::Layout};

/// Returns the intrinsic `(size, align)` pair of `T`.
///
/// # Examples
///
/// ```rust
/// # use memlayout::introspect::size_align;
///
/// const PAIR: (usize, usize) = size_align::<u16>();
/// assert_eq!(PAIR, (2, 2));
/// assert_eq!(size_align::<[u8; 3]>(), (3, 1));
/// ```
#[inline(always)]
pub const fn size_align<T>() -> (usize, usize) {
    (std::mem::size_of::<T>(), std::mem::align_of::<T>())
}

/// Returns the validated `Layout` of `T`.
///
/// # Errors
///
/// Forwards the error of [`Layout::from_type`]. Compiler-reported pairs always
/// satisfy the layout invariants, so this only fails for a broken host.
///
/// # Examples
///
/// ```rust
/// # use memlayout::introspect::layout_of;
///
/// let layout = layout_of::<u32>().unwrap();
/// assert_eq!((layout.size(), layout.align()), (4, 4));
/// ```
#[inline]
pub fn layout_of<T>() -> Result<Layout, LayoutError> {
    let (size, align) = size_align::<T>();
    Layout::from_type(size, align)
}
