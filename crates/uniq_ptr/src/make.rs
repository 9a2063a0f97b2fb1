use alloc::alloc::alloc;
use alloc::boxed::Box;
use core::alloc::Layout;
use core::mem::MaybeUninit;
use core::ptr::{self, NonNull};

use thiserror::Error;

use crate::UniquePtr;

// -----------------------------------------------------------------------------
// AllocError

/// The global allocator reported exhaustion.
///
/// Returned by the fallible factories. The infallible ones go through the
/// allocator's own failure protocol
/// ([`handle_alloc_error`](alloc::alloc::handle_alloc_error)) instead, so
/// failure surfaces exactly as the allocator reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("memory allocation of {size} bytes failed")]
pub struct AllocError {
    /// Size of the allocation that failed, in bytes.
    pub size: usize,
}

// -----------------------------------------------------------------------------
// Factories

impl<T> UniquePtr<T> {
    /// Allocates a new `T` on the heap and takes ownership of it.
    ///
    /// Allocation failure is reported through the global allocator's failure
    /// protocol, unmodified; use [`try_new`](Self::try_new) to receive it as
    /// a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniq_ptr::UniquePtr;
    ///
    /// let p = UniquePtr::new(42);
    /// assert_eq!(*p, 42);
    /// ```
    #[inline]
    pub fn new(value: T) -> Self {
        // SAFETY: `Box::into_raw` hands over a uniquely owned single-object
        // allocation, the exact shape `DefaultDelete` releases.
        unsafe { UniquePtr::from_raw(Box::into_raw(Box::new(value))) }
    }

    /// Fallible [`new`](Self::new).
    ///
    /// # Examples
    ///
    /// ```
    /// use uniq_ptr::UniquePtr;
    ///
    /// let p = UniquePtr::try_new(5).unwrap();
    /// assert_eq!(*p, 5);
    /// ```
    pub fn try_new(value: T) -> Result<Self, AllocError> {
        let layout = Layout::new::<T>();
        let ptr = if layout.size() == 0 {
            // Zero-sized values allocate nothing, as with `Box`.
            NonNull::<T>::dangling().as_ptr()
        } else {
            // SAFETY: `layout` has non-zero size.
            let raw = unsafe { alloc(layout) }.cast::<T>();
            if raw.is_null() {
                return Err(AllocError {
                    size: layout.size(),
                });
            }
            raw
        };
        // SAFETY: `ptr` is valid for writes of one `T`.
        unsafe { ptr::write(ptr, value) };
        // SAFETY: The allocation matches what `DefaultDelete` releases.
        Ok(unsafe { UniquePtr::from_raw(ptr) })
    }

    /// Allocates a `T` without initializing it.
    ///
    /// There is no value-initialization guarantee: for trivial contents the
    /// memory is indeterminate until written. Pair with
    /// [`assume_init`](UniquePtr::assume_init) once initialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniq_ptr::UniquePtr;
    ///
    /// let mut p = UniquePtr::<u64>::new_uninit();
    /// p.write(7);
    /// let p = unsafe { p.assume_init() };
    /// assert_eq!(*p, 7);
    /// ```
    pub fn new_uninit() -> UniquePtr<MaybeUninit<T>> {
        // SAFETY: As in `new`; `MaybeUninit` needs no initialization.
        unsafe { UniquePtr::from_raw(Box::into_raw(Box::<T>::new_uninit())) }
    }
}

impl<T> UniquePtr<MaybeUninit<T>> {
    /// Converts to `UniquePtr<T>`, asserting the contents are initialized.
    ///
    /// # Safety
    ///
    /// The contents must be fully initialized.
    pub unsafe fn assume_init(self) -> UniquePtr<T> {
        let raw = self.into_raw().cast::<T>();
        // SAFETY: Same allocation; `MaybeUninit<T>` and `T` have identical
        // layout, and the caller asserts initialization.
        unsafe { UniquePtr::from_raw(raw) }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::string::ToString;
    use core::cell::Cell;

    use super::AllocError;
    use crate::UniquePtr;

    struct CountDrops(Rc<Cell<usize>>);

    impl Drop for CountDrops {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn new_wraps_the_value() {
        let p = UniquePtr::new(42);
        assert_eq!(*p, 42);
    }

    #[test]
    fn scope_end_destroys_exactly_once() {
        let drops = Rc::new(Cell::new(0));
        {
            let _p = UniquePtr::new(CountDrops(drops.clone()));
            assert_eq!(drops.get(), 0);
        }
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn try_new_wraps_the_value() {
        let p = UniquePtr::try_new(5).unwrap();
        assert_eq!(*p, 5);
    }

    #[test]
    fn try_new_handles_zero_sized_values() {
        let p = UniquePtr::try_new(()).unwrap();
        assert!(!p.is_null());
        assert_eq!(*p, ());
    }

    #[test]
    fn try_new_drops_what_it_created() {
        let drops = Rc::new(Cell::new(0));
        drop(UniquePtr::try_new(CountDrops(drops.clone())).unwrap());
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn new_uninit_roundtrips_after_write() {
        let mut p = UniquePtr::<[u8; 3]>::new_uninit();
        p.write([1, 2, 3]);
        let p = unsafe { p.assume_init() };
        assert_eq!(*p, [1, 2, 3]);
    }

    #[test]
    fn alloc_error_reports_the_size() {
        let err = AllocError { size: 16 };
        assert_eq!(err.to_string(), "memory allocation of 16 bytes failed");
    }
}
