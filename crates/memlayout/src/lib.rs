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

//! # Memlayout
//!
//! Validated `(size, align)` descriptors of memory blocks and an
//! overflow-safe algebra to pad, repeat and compose them.
//!
//! ## Modules
//!
//! - `layout`: The immutable `Layout` value type with its validating
//!   constructors (`from_size_align`, `from_type`) and composing operations
//!   (`pad_to_align`, `align_to`, `repeat`, `repeat_packed`, `extend`,
//!   `extend_packed`, `array`).
//! - `error`: `LayoutError`, distinguishing invalid `(size, align)` pairs from
//!   arithmetic overflow during composition.
//! - `introspect`: The bridge from Rust types to `(size, align)` pairs
//!   (`size_align::<T>()`, `layout_of::<T>()`).
//! - `has_layout`: `HasLayout<P>`, a value handle (owning or borrowing)
//!   paired with its layout, and the type-erased `LayoutOf` capability.
//! - `builder`: `StructLayoutBuilder`, composing record layouts field by field
//!   and recording field offsets.
//!
//! ## Guarantees
//!
//! No operation allocates, blocks, or mutates a `Layout` in place. Every
//! fallible operation returns a `Result`; a `Layout` value can only be obtained
//! from a successful validation, so a failed construction cannot be silently
//! replaced by a zero layout.
//!
//! Diagnostics are emitted through the `log` facade at `trace` level on
//! failure paths and at `debug` level when a record layout is built.

pub mod builder;
pub mod error;
pub mod has_layout;
pub mod introspect;
pub mod layout;

pub use error::LayoutError;
pub use layout::Layout;
