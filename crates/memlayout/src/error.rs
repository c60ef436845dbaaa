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

//! Error types for layout construction and composition.
//!
//! Two failure classes exist. `InvalidLayout` is produced by the validating
//! constructors when an `(size, align)` pair violates the layout invariants.
//! `Overflow` is produced by the composing operations when a size or an
//! intermediate quantity does not fit in `usize`. Neither class mutates or
//! invalidates the receiver of the failed operation.

use std::fmt::Display;

/// Why an `(size, align)` pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidLayoutKind {
    /// The alignment is zero.
    ZeroAlign,
    /// The alignment is not a power of two.
    AlignNotPowerOfTwo,
    /// Rounding the size up to the alignment would exceed `usize::MAX`.
    SizeTooLarge,
}

/// Details about a rejected `(size, align)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidLayoutError {
    /// The requested size in bytes.
    pub size: usize,
    /// The requested alignment in bytes.
    pub align: usize,
    /// The violated invariant.
    pub kind: InvalidLayoutKind,
}

impl InvalidLayoutError {
    #[inline]
    pub(crate) const fn new(size: usize, align: usize, kind: InvalidLayoutKind) -> Self {
        Self { size, align, kind }
    }
}

impl Display for InvalidLayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            InvalidLayoutKind::ZeroAlign => {
                write!(f, "alignment must be non-zero (size {})", self.size)
            }
            InvalidLayoutKind::AlignNotPowerOfTwo => {
                write!(f, "alignment {} is not a power of two", self.align)
            }
            InvalidLayoutKind::SizeTooLarge => write!(
                f,
                "size {} rounded up to alignment {} exceeds usize::MAX",
                self.size, self.align
            ),
        }
    }
}

impl std::error::Error for InvalidLayoutError {}

/// The composing operation that overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutOperation {
    Repeat,
    RepeatPacked,
    Extend,
    ExtendPacked,
}

impl Display for LayoutOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Repeat => "repeat",
            Self::RepeatPacked => "repeat_packed",
            Self::Extend => "extend",
            Self::ExtendPacked => "extend_packed",
        };
        f.write_str(name)
    }
}

/// Details about an arithmetic overflow in a composing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverflowError {
    /// The operation that overflowed.
    pub operation: LayoutOperation,
}

impl OverflowError {
    #[inline]
    pub(crate) const fn new(operation: LayoutOperation) -> Self {
        Self { operation }
    }
}

impl Display for OverflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "layout size overflow in `{}`", self.operation)
    }
}

impl std::error::Error for OverflowError {}

/// The error type for layout construction and composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutError {
    /// The `(size, align)` pair violates the layout invariants.
    InvalidLayout(InvalidLayoutError),
    /// A composing operation exceeded the representable size range.
    Overflow(OverflowError),
}

impl LayoutError {
    /// Returns `true` if this is an `InvalidLayout` error.
    #[inline]
    pub const fn is_invalid_layout(&self) -> bool {
        matches!(self, Self::InvalidLayout(_))
    }

    /// Returns `true` if this is an `Overflow` error.
    #[inline]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLayout(e) => write!(f, "Invalid layout: {}", e),
            Self::Overflow(e) => write!(f, "Overflow: {}", e),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidLayout(e) => Some(e),
            Self::Overflow(e) => Some(e),
        }
    }
}

impl From<InvalidLayoutError> for LayoutError {
    fn from(e: InvalidLayoutError) -> Self {
        Self::InvalidLayout(e)
    }
}

impl From<OverflowError> for LayoutError {
    fn from(e: OverflowError) -> Self {
        Self::Overflow(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_layout_display_mentions_align() {
        let e = LayoutError::from(InvalidLayoutError::new(
            4,
            3,
            InvalidLayoutKind::AlignNotPowerOfTwo,
        ));
        assert_eq!(
            e.to_string(),
            "Invalid layout: alignment 3 is not a power of two"
        );
        assert!(e.is_invalid_layout());
        assert!(!e.is_overflow());
    }

    #[test]
    fn test_overflow_display_names_operation() {
        let e = LayoutError::from(OverflowError::new(LayoutOperation::RepeatPacked));
        assert_eq!(e.to_string(), "Overflow: layout size overflow in `repeat_packed`");
        assert!(e.is_overflow());
    }

    #[test]
    fn test_source_exposes_detail() {
        let detail = OverflowError::new(LayoutOperation::Extend);
        let e = LayoutError::Overflow(detail);
        let source = e.source().expect("overflow error has a source");
        assert_eq!(source.to_string(), detail.to_string());
    }
}
