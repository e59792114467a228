use super::state::compress_portable;

/// `(chain value, whole blocks, byte counter, finalization flags, last block length)`.
pub(crate) type CompressFn = fn(&mut [u64; 8], &[u8], &mut [u64; 2], &[u64; 2], u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Blake2bKernelId {
  Portable = 0,
}

pub const ALL: &[Blake2bKernelId] = &[Blake2bKernelId::Portable];

impl Blake2bKernelId {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Portable => "portable",
    }
  }
}

#[must_use]
pub fn id_from_name(name: &str) -> Option<Blake2bKernelId> {
  ALL.iter().copied().find(|id| id.as_str() == name)
}

#[must_use]
pub(crate) fn compress_fn(id: Blake2bKernelId) -> CompressFn {
  match id {
    Blake2bKernelId::Portable => compress_portable,
  }
}
