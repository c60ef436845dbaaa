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

//! # Struct Layout Builder
//!
//! Composes the layout of a record type field by field, the way a C compiler
//! lays out a `struct`: each field is appended with `Layout::extend` (or
//! `Layout::extend_packed` for packed records), its offset is recorded, and
//! the final layout is padded to its own alignment.
//!
//! Composition short-circuits: the first failing field poisons the builder,
//! later fields are ignored, and `build` reports that first error unchanged.
//! A partially composed layout is never returned as a success.
//!
//! ```rust
//! use memlayout::{builder::StructLayoutBuilder, introspect::layout_of};
//!
//! let mut builder = StructLayoutBuilder::new();
//! builder
//!     .with_field(layout_of::<u32>()?)
//!     .with_field(layout_of::<u64>()?)
//!     .with_field(layout_of::<u8>()?);
//! let record = builder.build()?;
//! assert_eq!(record.offsets(), &[0, 8, 16]);
//! assert_eq!(record.layout().size(), 24);
//! # Ok::<(), memlayout::error::LayoutError>(())
//! ```

use crate::{error::LayoutError, has_layout::LayoutOf, layout::Layout};
use smallvec::SmallVec;

type Offsets = SmallVec<[usize; 8]>;

/// The composed layout of a record together with its field offsets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructLayout {
    layout: Layout,
    offsets: Offsets,
}

impl StructLayout {
    /// Composes the given field layouts in order, with padding.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while appending a field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use memlayout::{builder::StructLayout, layout::Layout};
    ///
    /// let fields = [(1, 1), (4, 4), (2, 2)]
    ///     .map(|(size, align)| Layout::from_size_align(size, align).unwrap());
    /// let record = StructLayout::from_fields(fields).unwrap();
    /// assert_eq!(record.offsets(), &[0, 4, 8]);
    /// assert_eq!(record.layout().size(), 12);
    /// ```
    pub fn from_fields<I>(fields: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = Layout>,
    {
        let mut builder = StructLayoutBuilder::new();
        for field in fields {
            builder.field(field)?;
        }
        builder.build()
    }

    /// Composes the given field layouts in order, without padding.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while appending a field.
    pub fn from_packed_fields<I>(fields: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = Layout>,
    {
        let mut builder = StructLayoutBuilder::packed();
        for field in fields {
            builder.field(field)?;
        }
        builder.build()
    }

    /// Returns the layout of the whole record.
    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the byte offset of every field, in declaration order.
    #[inline]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Returns the byte offset of field `index`, or `None` if out of range.
    #[inline]
    pub fn offset(&self, index: usize) -> Option<usize> {
        self.offsets.get(index).copied()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if the record has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl LayoutOf for StructLayout {
    #[inline]
    fn layout(&self) -> Layout {
        self.layout
    }
}

/// Incremental builder for a `StructLayout`.
#[derive(Debug, Clone)]
pub struct StructLayoutBuilder {
    current: Option<Layout>,
    offsets: Offsets,
    packed: bool,
    error: Option<LayoutError>,
}

impl Default for StructLayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StructLayoutBuilder {
    /// Creates a builder that inserts padding between fields and after the
    /// last field.
    pub fn new() -> Self {
        Self {
            current: None,
            offsets: Offsets::new(),
            packed: false,
            error: None,
        }
    }

    /// Creates a builder that places fields back to back. The record keeps an
    /// alignment of `1` and receives no trailing padding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use memlayout::{builder::StructLayoutBuilder, layout::Layout};
    ///
    /// let mut builder = StructLayoutBuilder::packed();
    /// builder.field(Layout::from_size_align(1, 1).unwrap()).unwrap();
    /// let offset = builder.field(Layout::from_size_align(8, 8).unwrap()).unwrap();
    /// assert_eq!(offset, 1);
    /// let record = builder.build().unwrap();
    /// assert_eq!((record.layout().size(), record.layout().align()), (9, 1));
    /// ```
    pub fn packed() -> Self {
        Self {
            packed: true,
            ..Self::new()
        }
    }

    /// Returns `true` if the builder was created with [`StructLayoutBuilder::packed`].
    #[inline]
    pub fn is_packed(&self) -> bool {
        self.packed
    }

    /// Returns the number of fields appended so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if no field has been appended yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Appends a field and returns its offset.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying `extend` / `extend_packed`, or the
    /// error that previously poisoned the builder.
    pub fn field(&mut self, field: Layout) -> Result<usize, LayoutError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        match self.append(field) {
            Ok(offset) => Ok(offset),
            Err(e) => {
                log::trace!(
                    "struct layout poisoned at field {}: {}",
                    self.offsets.len(),
                    e
                );
                self.error = Some(e);
                Err(e)
            }
        }
    }

    /// Appends a field, deferring any error to [`StructLayoutBuilder::build`].
    pub fn with_field(&mut self, field: Layout) -> &mut Self {
        let _ = self.field(field);
        self
    }

    /// Appends several fields, deferring any error to [`StructLayoutBuilder::build`].
    pub fn with_fields<I>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = Layout>,
    {
        for field in fields {
            if self.error.is_some() {
                break;
            }
            let _ = self.field(field);
        }
        self
    }

    fn append(&mut self, field: Layout) -> Result<usize, LayoutError> {
        let base = match self.current {
            Some(layout) => layout,
            None => Layout::from_size_align(0, 1)?,
        };
        let (layout, offset) = if self.packed {
            (base.extend_packed(field)?, base.size())
        } else {
            base.extend(field)?
        };
        self.current = Some(layout);
        self.offsets.push(offset);
        Ok(offset)
    }

    /// Finishes the record.
    ///
    /// Unpacked records are padded to their alignment. An empty record has
    /// layout `(0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while appending fields.
    pub fn build(&self) -> Result<StructLayout, LayoutError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        let layout = match self.current {
            Some(layout) if !self.packed => layout.pad_to_align(),
            Some(layout) => layout,
            None => Layout::from_size_align(0, 1)?,
        };
        log::debug!(
            "built {}struct layout {} with {} fields",
            if self.packed { "packed " } else { "" },
            layout,
            self.offsets.len()
        );
        Ok(StructLayout {
            layout,
            offsets: self.offsets.clone(),
        })
    }
}
