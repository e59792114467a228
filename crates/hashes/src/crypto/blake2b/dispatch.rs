//! Kernel selection.
//!
//! The active compression kernel is resolved once per process and cached.
//! Only the portable kernel exists today, so resolution is a table lookup; the
//! cache keeps engine construction free of repeated selection work once more
//! kernels land.

use backend::OnceCache;

use super::kernels::{ALL, Blake2bKernelId, CompressFn, compress_fn};

#[derive(Clone, Copy)]
struct ActiveDispatch {
  compress: CompressFn,
  name: &'static str,
}

static ACTIVE: OnceCache<ActiveDispatch> = OnceCache::new();

#[inline]
#[must_use]
fn resolve() -> Blake2bKernelId {
  ALL.first().copied().unwrap_or(Blake2bKernelId::Portable)
}

#[inline]
#[must_use]
fn active() -> ActiveDispatch {
  ACTIVE.get_or_init(|| {
    let id = resolve();
    ActiveDispatch {
      compress: compress_fn(id),
      name: id.as_str(),
    }
  })
}

/// Name of the compression kernel engines use in this process.
///
/// ```
/// assert_eq!(hashes::crypto::blake2b::kernel_name(), "portable");
/// ```
#[inline]
#[must_use]
pub fn kernel_name() -> &'static str {
  active().name
}

#[inline]
#[must_use]
pub(crate) fn compress_fn_active() -> CompressFn {
  active().compress
}

/// Resolve the dispatch table now rather than on first use.
#[inline]
pub(crate) fn warm() {
  let _ = active();
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn resolution_is_stable() {
    let first = kernel_name();
    warm();
    assert_eq!(kernel_name(), first);
    assert_eq!(resolve().as_str(), first);
  }
}
