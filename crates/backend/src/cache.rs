//! Lazy caching of resolved values.
//!
//! [`OnceCache`] has the semantics of `std::sync::OnceLock` restricted to
//! `Copy` values, and also works on `no_std` targets.
//!
//! # Caching Strategy
//!
//! - **std**: `OnceLock` for thread-safe lazy initialization
//! - **no_std with atomics**: atomic `UNINIT -> INITING -> READY` state machine
//! - **no_std without atomics**: per-call computation (single-threaded embedded)

#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
use core::cell::UnsafeCell;
#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
use core::mem::MaybeUninit;

/// A once-initialized `Copy` value.
///
/// - Zero-cost after first initialization (one acquire load)
/// - Thread-safe on targets with atomics; the initializer runs at most once
/// - Falls back to per-call computation on targets without atomics
pub struct OnceCache<T: Copy> {
  #[cfg(feature = "std")]
  inner: std::sync::OnceLock<T>,

  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  state: core::sync::atomic::AtomicU8,
  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  value: UnsafeCell<MaybeUninit<T>>,

  #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
  _marker: core::marker::PhantomData<*const T>,
}

// SAFETY: `value` is written exactly once, by the thread that won the
// UNINIT -> INITING transition, and only read after READY is observed with
// acquire ordering. On no-atomic targets the program is single-threaded.
#[allow(unsafe_code)]
#[cfg(not(feature = "std"))]
unsafe impl<T: Copy + Send + Sync> Sync for OnceCache<T> {}
#[allow(unsafe_code)]
#[cfg(not(feature = "std"))]
unsafe impl<T: Copy + Send> Send for OnceCache<T> {}

#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
const UNINIT: u8 = 0;
#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
const INITING: u8 = 1;
#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
const READY: u8 = 2;

impl<T: Copy> OnceCache<T> {
  /// Create a new empty cache.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      #[cfg(feature = "std")]
      inner: std::sync::OnceLock::new(),

      #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
      state: core::sync::atomic::AtomicU8::new(UNINIT),
      #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
      value: UnsafeCell::new(MaybeUninit::uninit()),

      #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
      _marker: core::marker::PhantomData,
    }
  }

  /// Get the cached value, initializing with `f` if not yet set.
  ///
  /// Concurrent first callers block (or spin, on `no_std`) until the winning
  /// initializer has stored its value; all of them observe the same value.
  #[inline]
  pub fn get_or_init(&self, f: impl FnOnce() -> T) -> T {
    #[cfg(feature = "std")]
    {
      *self.inner.get_or_init(f)
    }

    #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
    {
      use core::sync::atomic::Ordering;

      if self.state.load(Ordering::Acquire) != READY
        && self
          .state
          .compare_exchange(UNINIT, INITING, Ordering::AcqRel, Ordering::Acquire)
          .is_ok()
      {
        let value = f();
        // SAFETY: we hold exclusive access while in the INITING state.
        #[allow(unsafe_code)]
        unsafe {
          (*self.value.get()).write(value);
        }
        self.state.store(READY, Ordering::Release);
        return value;
      }

      while self.state.load(Ordering::Acquire) != READY {
        core::hint::spin_loop();
      }
      // SAFETY: the value is initialized once READY is observed.
      #[allow(unsafe_code)]
      unsafe {
        (*self.value.get()).assume_init()
      }
    }

    #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
    {
      f()
    }
  }

  /// The cached value, if initialization has completed.
  #[inline]
  #[must_use]
  pub fn get(&self) -> Option<T> {
    #[cfg(feature = "std")]
    {
      self.inner.get().copied()
    }

    #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
    {
      use core::sync::atomic::Ordering;
      if self.state.load(Ordering::Acquire) == READY {
        // SAFETY: the value is initialized once READY is observed.
        #[allow(unsafe_code)]
        let value = unsafe { (*self.value.get()).assume_init() };
        Some(value)
      } else {
        None
      }
    }

    #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
    {
      None
    }
  }
}

impl<T: Copy> Default for OnceCache<T> {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn initializer_runs_once() {
    static CACHE: OnceCache<(u32, &'static str)> = OnceCache::new();

    assert_eq!(CACHE.get(), None);

    let mut calls = 0;
    let first = CACHE.get_or_init(|| {
      calls += 1;
      (42, "portable")
    });
    let second = CACHE.get_or_init(|| {
      calls += 1;
      (7, "other")
    });

    assert_eq!(first, (42, "portable"));
    assert_eq!(second, first);
    assert_eq!(CACHE.get(), Some(first));
    #[cfg(any(feature = "std", target_has_atomic = "8"))]
    assert_eq!(calls, 1);
  }

  #[cfg(feature = "std")]
  #[test]
  fn concurrent_first_use_agrees() {
    use std::{sync::atomic::AtomicUsize, thread, vec::Vec};

    static CACHE: OnceCache<usize> = OnceCache::new();
    static CALLS: AtomicUsize = AtomicUsize::new(0);

    let handles: Vec<_> = (0..8)
      .map(|i| {
        thread::spawn(move || {
          CACHE.get_or_init(|| {
            CALLS.fetch_add(1, core::sync::atomic::Ordering::SeqCst);
            i
          })
        })
      })
      .collect();

    let seen: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(seen.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(CALLS.load(core::sync::atomic::Ordering::SeqCst), 1);
  }
}
