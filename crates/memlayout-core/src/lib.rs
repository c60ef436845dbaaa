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

//! # Memlayout Core
//!
//! Overflow-aware unsigned arithmetic underpinning the `memlayout` crate.
//! Size and alignment computations must never silently wrap or trap, so every
//! operation here is either explicitly modular (wrapping) or explicitly
//! fallible (checked, returning `Option<T>`).
//!
//! ## Modules
//!
//! - `num`: The `UnsignedWord` abstraction over fixed-width unsigned integers,
//!   bit helpers (`is_power_of_two`, `low_mask`, `bit_set_range`,
//!   `bit_clear_range`), and by-value arithmetic traits for checked
//!   (`CheckedAddVal`, `CheckedMulVal`) and wrapping (`WrappingAddVal`,
//!   `WrappingSubVal`) operations.
//!
//! ## Purpose
//!
//! Checked multiplication is implemented with the split-halves technique, so it
//! does not depend on a wider intermediate type and behaves identically for
//! every word width, including `u128`.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
