use serde::{Deserialize, Serialize};
use std::fmt;

// process ids
pub type ProcessId = u32;
// part ids; local to their owning process
pub type PartId = u32;
// global element identifiers; unique container-wide
pub type Gid = u64;

/// Sentinel marking an unknown/unresolved process.
pub const INVALID_PROCESS: ProcessId = ProcessId::MAX;
/// Sentinel marking a missing part, e.g. at the extremities of the part
/// order.
pub const INVALID_PART: PartId = PartId::MAX;
/// Sentinel used by the degraded boundary fallback meaning "the last part of
/// the previous process", whatever its id there is.
pub const REMOTE_LAST_PART: PartId = PartId::MAX - 1;

/// A `Location` names where an element's data currently resides: the process
/// hosting it and the part within that process. It's a plain descriptive
/// record, safely copyable and cacheable, and it crosses the RMI boundary in
/// every message of this subsystem.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Location {
    process_id: ProcessId,
    part_id: PartId,
}

impl Location {
    /// Creates a new `Location`.
    pub fn new(process_id: ProcessId, part_id: PartId) -> Self {
        Self {
            process_id,
            part_id,
        }
    }

    /// Creates the "unknown" `Location`.
    pub fn invalid() -> Self {
        Self::new(INVALID_PROCESS, INVALID_PART)
    }

    /// Retrieves the process holding the element.
    pub fn process_id(&self) -> ProcessId {
        self.process_id
    }

    /// Retrieves the part holding the element.
    pub fn part_id(&self) -> PartId {
        self.part_id
    }

    /// Checks whether this `Location` points at a known process.
    pub fn is_valid(&self) -> bool {
        self.process_id != INVALID_PROCESS
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "({}, {})", self.process_id, self.part_id)
        } else {
            write!(f, "(invalid)")
        }
    }
}

/// GID allocation policy. Both policies appear in deployed containers and
/// neither is authoritative, so the choice is explicit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GidPolicy {
    /// Process `i` allocates `i`, `i + n`, `i + 2n`, ... GIDs interleave
    /// across processes, matching modulo ownership.
    Stride,
    /// Process `i` allocates from the contiguous band
    /// `[i * chunk, (i + 1) * chunk)`, then jumps `n * chunk` forward to its
    /// next band. Bands match chunked ownership and keep sequentially
    /// created elements from hot-spotting a single owner.
    Chunked { chunk: u64 },
}

/// Generator of fresh GIDs for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GidGen {
    process_id: ProcessId,
    n: usize,
    policy: GidPolicy,
    // last returned gid; `None` until the first allocation
    cursor: Option<Gid>,
    // start of the current band; only meaningful for `Chunked`
    chunk_base: Gid,
}

impl GidGen {
    /// Creates a new generator for `process_id` in a system with `n`
    /// processes.
    pub fn new(process_id: ProcessId, n: usize, policy: GidPolicy) -> Self {
        let chunk_base = match policy {
            GidPolicy::Stride => 0,
            GidPolicy::Chunked { chunk } => process_id as Gid * chunk,
        };
        Self {
            process_id,
            n,
            policy,
            cursor: None,
            chunk_base,
        }
    }

    /// Generates the next GID.
    pub fn next_gid(&mut self) -> Gid {
        let next = match self.policy {
            GidPolicy::Stride => match self.cursor {
                None => self.process_id as Gid,
                Some(last) => last + self.n as Gid,
            },
            GidPolicy::Chunked { chunk } => {
                let last = self.cursor.unwrap_or(self.chunk_base);
                if last + 1 == self.chunk_base + chunk {
                    // local band exhausted; jump to this process' next band
                    self.chunk_base += self.n as Gid * chunk;
                    self.chunk_base
                } else {
                    last + 1
                }
            }
        };
        self.cursor = Some(next);
        next
    }

    /// Generates the next `count` GIDs.
    pub fn next_gids(&mut self, count: usize) -> Vec<Gid> {
        (0..count).map(|_| self.next_gid()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location() {
        let location = Location::new(2, 0);
        assert_eq!(location.process_id(), 2);
        assert_eq!(location.part_id(), 0);
        assert!(location.is_valid());
        assert_eq!(location, Location::new(2, 0));
        assert_ne!(location, Location::new(2, 1));

        // the invalid location is not valid, whatever its part id is
        assert!(!Location::invalid().is_valid());
        assert!(!Location::new(INVALID_PROCESS, 0).is_valid());
    }

    #[test]
    fn location_serialization() {
        // both fields must round-trip exactly through the transport codec
        let locations = vec![
            Location::new(0, 0),
            Location::new(3, 17),
            Location::invalid(),
            Location::new(1, REMOTE_LAST_PART),
        ];
        for location in locations {
            let bytes = bincode::serialize(&location).unwrap();
            let back: Location = bincode::deserialize(&bytes).unwrap();
            assert_eq!(location, back);
        }
    }

    #[test]
    fn stride_gids() {
        let n = 4;
        let mut gen = GidGen::new(2, n, GidPolicy::Stride);
        assert_eq!(gen.next_gid(), 2);
        assert_eq!(gen.next_gid(), 6);
        assert_eq!(gen.next_gid(), 10);
        assert_eq!(gen.next_gids(3), vec![14, 18, 22]);

        // process 0 allocates the multiples of n
        let mut gen = GidGen::new(0, n, GidPolicy::Stride);
        assert_eq!(gen.next_gids(4), vec![0, 4, 8, 12]);
    }

    #[test]
    fn chunked_gids() {
        // chunk 10000, n = 4, process 1: cursor starts at 10000 and the
        // first allocated gid is 10001
        let mut gen = GidGen::new(1, 4, GidPolicy::Chunked { chunk: 10000 });
        assert_eq!(gen.next_gid(), 10001);
        assert_eq!(gen.next_gid(), 10002);
        assert_eq!(gen.next_gid(), 10003);
    }

    #[test]
    fn chunked_gids_rollover() {
        // tiny bands to exercise the band jump: process 0 with chunk 4 in a
        // 2-process system owns bands [0, 4), [8, 12), [16, 20), ...
        let mut gen = GidGen::new(0, 2, GidPolicy::Chunked { chunk: 4 });
        assert_eq!(gen.next_gids(3), vec![1, 2, 3]);
        // band exhausted: jump to the start of the next band
        assert_eq!(gen.next_gid(), 8);
        assert_eq!(gen.next_gids(4), vec![9, 10, 11, 16]);
    }
}
