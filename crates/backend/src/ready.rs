//! Process-wide readiness flag.
//!
//! A [`ReadyFlag`] gates a one-time bootstrap. [`ReadyFlag::init`] runs the
//! bootstrap on the first call only and reports whether the calling thread was
//! the one that ran it; every later call is a no-op that returns `false`.
//! Callers that lose the race still return only after the bootstrap finished,
//! so "returned from `init`" always means "ready".

/// One-shot bootstrap gate.
///
/// # Example
///
/// ```
/// use backend::ReadyFlag;
///
/// static READY: ReadyFlag = ReadyFlag::new();
///
/// assert!(!READY.is_ready());
/// assert!(READY.init(|| {}));
/// assert!(!READY.init(|| unreachable!()));
/// assert!(READY.is_ready());
/// ```
pub struct ReadyFlag {
  #[cfg(feature = "std")]
  once: std::sync::Once,

  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  state: core::sync::atomic::AtomicU8,

  #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
  state: core::cell::Cell<bool>,
}

// SAFETY: on no-atomic targets the program is single-threaded, so the `Cell`
// is never observed from two threads.
#[allow(unsafe_code)]
#[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
unsafe impl Sync for ReadyFlag {}

#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
const UNINIT: u8 = 0;
#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
const INITING: u8 = 1;
#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
const READY: u8 = 2;

impl ReadyFlag {
  /// A flag that has not been initialized yet.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      #[cfg(feature = "std")]
      once: std::sync::Once::new(),

      #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
      state: core::sync::atomic::AtomicU8::new(UNINIT),

      #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
      state: core::cell::Cell::new(false),
    }
  }

  /// Run `bootstrap` if no call has run it yet.
  ///
  /// Returns `true` if this call ran `bootstrap`, `false` if it had already
  /// completed (or was completed concurrently by another thread).
  #[inline]
  pub fn init(&self, bootstrap: impl FnOnce()) -> bool {
    #[cfg(feature = "std")]
    {
      let mut ran = false;
      self.once.call_once(|| {
        bootstrap();
        ran = true;
      });
      ran
    }

    #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
    {
      use core::sync::atomic::Ordering;

      if self.state.load(Ordering::Acquire) == READY {
        return false;
      }
      if self
        .state
        .compare_exchange(UNINIT, INITING, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
      {
        bootstrap();
        self.state.store(READY, Ordering::Release);
        return true;
      }
      while self.state.load(Ordering::Acquire) != READY {
        core::hint::spin_loop();
      }
      false
    }

    #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
    {
      if self.state.get() {
        return false;
      }
      bootstrap();
      self.state.set(true);
      true
    }
  }

  /// Whether the bootstrap has completed.
  #[inline]
  #[must_use]
  pub fn is_ready(&self) -> bool {
    #[cfg(feature = "std")]
    {
      self.once.is_completed()
    }

    #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
    {
      self.state.load(core::sync::atomic::Ordering::Acquire) == READY
    }

    #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
    {
      self.state.get()
    }
  }
}

impl Default for ReadyFlag {
  fn default() -> Self {
    Self::new()
  }
}
