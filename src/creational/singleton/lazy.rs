//! `LazySingleton` - double-checked, lock-guarded one-time initialization.
//!
//! The slot is published through an atomic flag. Readers that observe the flag
//! set (acquire) return immediately without touching the lock. Callers that
//! find the slot empty take the lock, re-check the flag, and only then run the
//! initializer. Whoever wins the race publishes with a release store; the
//! losers wake up holding the lock, see the flag, and return the winner's value.
//!
//! # States
//! - 0: Empty (slot uninitialized)
//! - 1: Ready (slot initialized, never written again)

use core::cell::UnsafeCell;
use core::convert::Infallible;
use core::fmt;
use core::mem::MaybeUninit;
use core::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, PoisonError};

use crossbeam_utils::CachePadded;

use crate::error::InitError;

const EMPTY: u8 = 0;
const READY: u8 = 1;

/// A thread-safe cell that constructs its value at most once, on first access.
///
/// Unlike a hidden global, a `LazySingleton` is an ordinary value: it can be
/// owned by a registry, shared by reference across scoped threads, or placed
/// in a `static` (its constructor is `const`).
pub struct LazySingleton<T> {
    state: CachePadded<AtomicU8>,
    lock: Mutex<()>,
    slot: UnsafeCell<MaybeUninit<T>>,
}

// SAFETY: the slot is written once, under the lock, before the release store
// of `READY`; afterwards it is only read. Sharing `&T` across threads requires
// `T: Sync`, and the value may be constructed on one thread and dropped on
// another, which requires `T: Send`. `Send` follows from the fields.
unsafe impl<T: Send + Sync> Sync for LazySingleton<T> {}

impl<T> LazySingleton<T> {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self {
            state: CachePadded::new(AtomicU8::new(EMPTY)),
            lock: Mutex::new(()),
            slot: UnsafeCell::new(MaybeUninit::uninit()),
        }
    }

    /// Returns `true` once the value has been published.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.state.load(Ordering::Acquire) == READY
    }

    /// Returns the value if it has been initialized. Never blocks.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        if self.is_initialized() {
            // SAFETY: `READY` was observed with acquire ordering.
            Some(unsafe { self.get_unchecked() })
        } else {
            None
        }
    }

    /// Returns the value, running `init` if no value exists yet.
    ///
    /// `init` runs on at most one thread, at most once per cell. Callers that
    /// lose the race block until the winner has published, then receive the
    /// winner's value.
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        match self.get_or_try_init(|| Ok::<T, Infallible>(init())) {
            Ok(value) => value,
            Err(err) => match err.into_inner() {},
        }
    }

    /// Returns the value, running the fallible `init` if no value exists yet.
    ///
    /// # Errors
    /// Returns [`InitError::InitializationFailed`] to this caller only when
    /// `init` fails. The slot stays empty, so a later call may retry.
    pub fn get_or_try_init<F, E>(&self, init: F) -> Result<&T, InitError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.get() {
            return Ok(value);
        }
        self.initialize(init)
    }

    #[cold]
    fn initialize<F, E>(&self, init: F) -> Result<&T, InitError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        // A panic inside a previous initializer poisons the mutex but never
        // publishes, so the slot is still consistent.
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        // Double check: another thread may have published while we waited.
        if self.state.load(Ordering::Acquire) == READY {
            // SAFETY: `READY` observed under acquire.
            return Ok(unsafe { self.get_unchecked() });
        }

        let value = init().map_err(InitError::InitializationFailed)?;

        // SAFETY: we hold the lock and the state is `EMPTY`, so no reader can
        // hold a reference into the slot and no other writer exists.
        unsafe { (*self.slot.get()).write(value) };
        self.state.store(READY, Ordering::Release);

        // SAFETY: just published.
        Ok(unsafe { self.get_unchecked() })
    }

    /// Returns a mutable reference to the value, if initialized.
    ///
    /// `&mut self` proves no other thread can observe the slot.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if *self.state.get_mut() == READY {
            // SAFETY: initialized, and access is exclusive.
            Some(unsafe { self.slot.get_mut().assume_init_mut() })
        } else {
            None
        }
    }

    /// Consumes the cell, returning the value if one was constructed.
    pub fn into_inner(mut self) -> Option<T> {
        if *self.state.get_mut() == READY {
            *self.state.get_mut() = EMPTY;
            // SAFETY: initialized; the state reset keeps `Drop` from reading it again.
            Some(unsafe { self.slot.get_mut().assume_init_read() })
        } else {
            None
        }
    }

    /// # Safety
    /// The caller must have observed `READY` with acquire ordering (or hold
    /// the lock after a `READY` store).
    #[inline]
    unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.state.load(Ordering::Relaxed) == READY);
        unsafe { (*self.slot.get()).assume_init_ref() }
    }
}

impl<T> Default for LazySingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LazySingleton<T> {
    fn drop(&mut self) {
        if *self.state.get_mut() == READY {
            // SAFETY: initialized, and we have exclusive access in drop.
            unsafe { self.slot.get_mut().assume_init_drop() };
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LazySingleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_tuple("LazySingleton");
        match self.get() {
            Some(value) => d.field(value),
            None => d.field(&format_args!("<uninit>")),
        };
        d.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Barrier;
    use std::thread;

    fn assert_send_sync<T: Send + Sync>() {}
    fn assert_send<T: Send>() {}

    #[test]
    fn test_lazy_singleton_thread_bounds() {
        assert_send_sync::<LazySingleton<String>>();
        assert_send::<LazySingleton<core::cell::Cell<u8>>>();
        assert_send_sync::<crate::GhostToken<'static>>();
    }

    #[test]
    fn test_lazy_singleton_basic() {
        let cell = LazySingleton::new();
        assert!(!cell.is_initialized());
        assert_eq!(cell.get(), None);

        assert_eq!(*cell.get_or_init(|| 42), 42);
        assert!(cell.is_initialized());
        assert_eq!(*cell.get_or_init(|| 100), 42);
        assert_eq!(cell.get(), Some(&42));
    }

    #[test]
    fn test_lazy_singleton_failure_leaves_slot_empty() {
        let cell: LazySingleton<u32> = LazySingleton::new();

        let err = cell.get_or_try_init(|| Err("boom")).unwrap_err();
        assert_eq!(err, InitError::InitializationFailed("boom"));
        assert!(!cell.is_initialized());

        let value = cell.get_or_try_init(|| Ok::<_, &str>(7)).unwrap();
        assert_eq!(*value, 7);
    }

    #[test]
    fn test_lazy_singleton_panic_does_not_wedge_lock() {
        let cell: LazySingleton<String> = LazySingleton::new();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            cell.get_or_init(|| panic!("initializer panicked"));
        }));
        assert!(result.is_err());
        assert!(!cell.is_initialized());

        assert_eq!(cell.get_or_init(|| "recovered".to_string()), "recovered");
    }

    #[test]
    fn test_lazy_singleton_mut_and_into_inner() {
        let mut cell = LazySingleton::new();
        assert!(cell.get_mut().is_none());
        cell.get_or_init(|| vec![1, 2]);
        cell.get_mut().unwrap().push(3);
        assert_eq!(cell.into_inner(), Some(vec![1, 2, 3]));

        let empty: LazySingleton<Vec<u8>> = LazySingleton::new();
        assert_eq!(empty.into_inner(), None);
    }

    #[test]
    fn test_lazy_singleton_drops_value_once() {
        struct Tracked<'a>(&'a AtomicUsize);
        impl Drop for Tracked<'_> {
            fn drop(&mut self) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let drops = AtomicUsize::new(0);
        {
            let cell = LazySingleton::new();
            cell.get_or_init(|| Tracked(&drops));
            cell.get_or_init(|| Tracked(&drops));
        }
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_lazy_singleton_concurrent_single_construction() {
        const THREADS: usize = 16;
        let cell = LazySingleton::new();
        let constructed = AtomicUsize::new(0);
        let barrier = Barrier::new(THREADS);

        let addrs: Vec<(usize, usize)> = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|i| {
                    let (cell, constructed, barrier) = (&cell, &constructed, &barrier);
                    s.spawn(move || {
                        barrier.wait();
                        let value = cell.get_or_init(|| {
                            constructed.fetch_add(1, Ordering::SeqCst);
                            i
                        });
                        (value as *const usize as usize, *value)
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(constructed.load(Ordering::SeqCst), 1);
        let first = addrs[0];
        assert!(addrs.iter().all(|&a| a == first));
    }
}
