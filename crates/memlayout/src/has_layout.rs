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

//! # Values Paired With Their Layout
//!
//! A thin adapter that associates a handle to a value with the `Layout` of the
//! value's type. A single generic wrapper, `HasLayout<P>`, covers every
//! ownership mode through the `ValueHandle` capability:
//!
//! | Handle        | Mode      | Who frees the value                 |
//! | :------------ | :-------- | :---------------------------------- |
//! | `Box<T>`      | owning    | the box, when the wrapper is dropped |
//! | `&'a T`       | borrowing | the lender                          |
//! | `&'a mut T`   | borrowing | the lender                          |
//! | `NonNull<T>`  | raw       | the caller                          |
//!
//! The wrapper itself never allocates or frees.
//!
//! For heterogeneous collections, the narrow `LayoutOf` capability exposes
//! only `layout()`, so values of unrelated types can be handled uniformly as
//! `Box<dyn LayoutOf>`.
//!
//! ```rust
//! use memlayout::has_layout::{make_some_has_layout, LayoutOf};
//!
//! let a = 1_u8;
//! let b = 2.0_f64;
//! let c = [0_u16; 3];
//! let erased = vec![
//!     make_some_has_layout(&a)?,
//!     make_some_has_layout(&b)?,
//!     make_some_has_layout(&c)?,
//! ];
//! let total: usize = erased.iter().map(|v| v.layout().size()).sum();
//! assert_eq!(total, 1 + 8 + 6);
//! # Ok::<(), memlayout::error::LayoutError>(())
//! ```

use crate::{error::LayoutError, introspect::layout_of, layout::Layout};
use std::{
    ops::{Deref, DerefMut},
    ptr::NonNull,
};

/// A handle through which a value of type `Target` can be reached.
pub trait ValueHandle {
    /// The type of the value behind the handle.
    type Target;

    /// Returns the address of the value behind the handle.
    fn as_ptr(&self) -> *const Self::Target;
}

impl<T> ValueHandle for Box<T> {
    type Target = T;

    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        &**self
    }
}

impl<T> ValueHandle for &T {
    type Target = T;

    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        *self
    }
}

impl<T> ValueHandle for &mut T {
    type Target = T;

    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        &**self
    }
}

impl<T> ValueHandle for NonNull<T> {
    type Target = T;

    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        NonNull::as_ptr(*self)
    }
}

/// The type-erased capability of anything that knows its `Layout`.
pub trait LayoutOf {
    /// Returns the layout of the described value.
    fn layout(&self) -> Layout;
}

impl LayoutOf for Layout {
    #[inline(always)]
    fn layout(&self) -> Layout {
        *self
    }
}

/// A type-erased value with a known layout.
pub type SomeHasLayout<'a> = Box<dyn LayoutOf + 'a>;

/// A value handle paired with the layout of the value's type.
///
/// # Examples
///
/// ```rust
/// # use memlayout::has_layout::HasLayout;
///
/// let owned = HasLayout::new(Box::new(7_u32)).unwrap();
/// assert_eq!(*owned.get(), 7);
/// assert_eq!(owned.layout().size(), 4);
///
/// let value = 3_u16;
/// let borrowed = HasLayout::new(&value).unwrap();
/// assert_eq!(borrowed.as_ptr(), &value as *const u16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HasLayout<P>
where
    P: ValueHandle,
{
    handle: P,
    layout: Layout,
}

/// A `HasLayout` that owns its value.
pub type OwnedHasLayout<T> = HasLayout<Box<T>>;

/// A `HasLayout` that borrows its value.
pub type BorrowedHasLayout<'a, T> = HasLayout<&'a T>;

impl<P> HasLayout<P>
where
    P: ValueHandle,
{
    /// Pairs `handle` with the layout of its target type.
    ///
    /// # Errors
    ///
    /// Forwards the error of [`layout_of`].
    pub fn new(handle: P) -> Result<Self, LayoutError> {
        let layout = layout_of::<P::Target>()?;
        Ok(Self { handle, layout })
    }

    /// Returns the layout of the target type.
    #[inline(always)]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the address of the value.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const P::Target {
        self.handle.as_ptr()
    }

    /// Returns the underlying handle.
    #[inline(always)]
    pub fn handle(&self) -> &P {
        &self.handle
    }

    /// Consumes the wrapper and returns the underlying handle.
    #[inline(always)]
    pub fn into_handle(self) -> P {
        self.handle
    }
}

impl<T> HasLayout<NonNull<T>> {
    /// Pairs a raw pointer with the layout of `T`.
    ///
    /// Returns `None` if `ptr` is null. The pointee stays owned by the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use memlayout::has_layout::HasLayout;
    ///
    /// let mut value = 5_i64;
    /// let raw = HasLayout::from_raw(&mut value as *mut i64).unwrap();
    /// assert_eq!(raw.layout().size(), 8);
    /// assert!(HasLayout::<std::ptr::NonNull<i64>>::from_raw(std::ptr::null_mut()).is_none());
    /// ```
    pub fn from_raw(ptr: *mut T) -> Option<Self> {
        let ptr = NonNull::new(ptr)?;
        Self::new(ptr).ok()
    }
}

impl<P> HasLayout<P>
where
    P: ValueHandle + Deref<Target = <P as ValueHandle>::Target>,
{
    /// Returns a shared reference to the value.
    #[inline(always)]
    pub fn get(&self) -> &<P as ValueHandle>::Target {
        &self.handle
    }
}

impl<P> HasLayout<P>
where
    P: ValueHandle + DerefMut<Target = <P as ValueHandle>::Target>,
{
    /// Returns a mutable reference to the value.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut <P as ValueHandle>::Target {
        &mut self.handle
    }
}

impl<P> LayoutOf for HasLayout<P>
where
    P: ValueHandle,
{
    #[inline(always)]
    fn layout(&self) -> Layout {
        self.layout
    }
}

/// Pairs `handle` with the layout of its target type.
///
/// # Errors
///
/// Forwards the error of [`HasLayout::new`].
#[inline]
pub fn make_has_layout<P>(handle: P) -> Result<HasLayout<P>, LayoutError>
where
    P: ValueHandle,
{
    HasLayout::new(handle)
}

/// Pairs `handle` with its layout and erases the value type.
///
/// # Errors
///
/// Forwards the error of [`HasLayout::new`].
#[inline]
pub fn make_some_has_layout<'a, P>(handle: P) -> Result<SomeHasLayout<'a>, LayoutError>
where
    P: ValueHandle + 'a,
{
    Ok(Box::new(HasLayout::new(handle)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_owned_reports_target_layout() {
        let owned: OwnedHasLayout<u64> = HasLayout::new(Box::new(9)).unwrap();
        assert_eq!(owned.layout(), layout_of::<u64>().unwrap());
        assert_eq!(*owned.get(), 9);
    }

    #[test]
    fn test_owned_drops_value_with_wrapper() {
        struct Flag<'a>(&'a AtomicBool);
        impl Drop for Flag<'_> {
            fn drop(&mut self) {
                self.0.store(true, Ordering::Relaxed);
            }
        }

        let dropped = AtomicBool::new(false);
        let owned = HasLayout::new(Box::new(Flag(&dropped))).unwrap();
        assert!(!dropped.load(Ordering::Relaxed));
        drop(owned);
        assert!(dropped.load(Ordering::Relaxed));
    }

    #[test]
    fn test_borrowed_points_at_lender() {
        let value = [1_u32, 2, 3];
        let borrowed: BorrowedHasLayout<'_, [u32; 3]> = HasLayout::new(&value).unwrap();
        assert_eq!(borrowed.as_ptr(), &value as *const [u32; 3]);
        assert_eq!(borrowed.layout().size(), 12);
        assert_eq!(borrowed.get()[1], 2);
    }

    #[test]
    fn test_mutable_borrow_allows_writes() {
        let mut value = 10_i32;
        {
            let mut wrapped = HasLayout::new(&mut value).unwrap();
            *wrapped.get_mut() += 5;
        }
        assert_eq!(value, 15);
    }

    #[test]
    fn test_from_raw_rejects_null() {
        assert!(HasLayout::<NonNull<u8>>::from_raw(std::ptr::null_mut()).is_none());
    }

    #[test]
    fn test_from_raw_keeps_address() {
        let mut value = 0_u16;
        let ptr = &mut value as *mut u16;
        let raw = HasLayout::from_raw(ptr).unwrap();
        assert_eq!(raw.as_ptr(), ptr as *const u16);
        assert_eq!(raw.into_handle().as_ptr(), ptr);
    }

    #[test]
    fn test_type_erased_collection() {
        let a = 1_u8;
        let b = 2_u32;
        let erased: Vec<SomeHasLayout<'_>> = vec![
            make_some_has_layout(&a).unwrap(),
            make_some_has_layout(&b).unwrap(),
            make_some_has_layout(Box::new([0_u64; 2])).unwrap(),
            Box::new(Layout::from_size_align(3, 1).unwrap()) as SomeHasLayout<'_>,
        ];
        let sizes: Vec<usize> = erased.iter().map(|v| v.layout().size()).collect();
        assert_eq!(sizes, vec![1, 4, 16, 3]);
    }

    #[test]
    fn test_make_has_layout_matches_new() {
        let value = 'x';
        let a = make_has_layout(&value).unwrap();
        let b = HasLayout::new(&value).unwrap();
        assert_eq!(a, b);
        assert_eq!(*a.handle(), &value);
    }
}
