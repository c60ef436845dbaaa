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

//! # Numeric Operations
//!
//! By-value numeric operation traits for unsigned integer primitives.
//!
//! ## Submodules
//!
//! - `checked_arithmetic`: `CheckedAddVal` and `CheckedMulVal`, returning
//!   `None` when the exact result does not fit in the word.
//! - `wrapping_arithmetic`: `WrappingAddVal` and `WrappingSubVal`, returning the
//!   result modulo `2^BITS`.
//!
//! Both submodules also export generic free functions (`checked_add`,
//! `checked_mul`, `wrapping_add`, `wrapping_sub`) for call sites that prefer
//! function syntax over method syntax.

pub mod checked_arithmetic;
pub mod wrapping_arithmetic;
