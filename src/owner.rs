use crate::id::{Gid, ProcessId};
use serde::{Deserialize, Serialize};

/// Owner-computes policy: maps a GID to the process holding its
/// authoritative location entry. The mapping is a pure function of the GID
/// and the process count, so every process resolves the same owner without
/// any communication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnerPolicy {
    /// `gid % n`.
    Modulo,
    /// `(gid / chunk) % n`, i.e. ownership of whole contiguous GID bands.
    /// Pairs with `GidPolicy::Chunked` so that sequentially created elements
    /// don't all ask the same owner.
    Chunked { chunk: u64 },
}

impl OwnerPolicy {
    /// Resolves the process responsible for the authoritative location of
    /// `gid` in a system with `n` processes.
    pub fn owner(&self, gid: Gid, n: usize) -> ProcessId {
        match self {
            Self::Modulo => (gid % n as Gid) as ProcessId,
            Self::Chunked { chunk } => {
                ((gid % (n as Gid * chunk)) / chunk) as ProcessId
            }
        }
    }
}
