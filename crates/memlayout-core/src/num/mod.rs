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

//! # Numeric Foundations
//!
//! Traits and free functions for fixed-width unsigned arithmetic.
//!
//! ## Submodules
//!
//! - `word`: The `UnsignedWord` trait implemented for `u8`, `u16`, `u32`,
//!   `u64`, `u128` and `usize`, exposing the bit width and half width used by
//!   split-halves arithmetic.
//! - `bits`: Power-of-two checks and bit range masking.
//! - `ops`: Checked and wrapping arithmetic (by value), both as traits and as
//!   generic free functions.
//!
//! ## Motivation
//!
//! Layout arithmetic is dominated by additions and multiplications close to
//! the top of the address space. Keeping the overflow semantics explicit at
//! every call site makes the invariants of the layout algebra easy to audit.

pub mod bits;
pub mod ops;
pub mod word;

pub use ops::checked_arithmetic::{checked_add, checked_mul};
pub use ops::wrapping_arithmetic::{wrapping_add, wrapping_sub};
pub use word::UnsignedWord;
