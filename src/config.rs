use crate::id::GidPolicy;
use crate::owner::OwnerPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// number of processes
    n: usize,
    /// owner-computes policy used to resolve the process tracking a GID
    owner_policy: OwnerPolicy,
    /// policy used to allocate fresh GIDs
    gid_policy: GidPolicy,
}

impl Config {
    /// Create a new `Config` for a system with `n` processes. By default,
    /// ownership is modulo and GIDs are allocated with the stride policy.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "the system needs at least one process");
        Self {
            n,
            owner_policy: OwnerPolicy::Modulo,
            gid_policy: GidPolicy::Stride,
        }
    }

    /// Create a new `Config` where both ownership and GID allocation work on
    /// contiguous bands of `chunk` GIDs.
    pub fn new_chunked(n: usize, chunk: u64) -> Self {
        let mut config = Self::new(n);
        config.set_owner_policy(OwnerPolicy::Chunked { chunk });
        config.set_gid_policy(GidPolicy::Chunked { chunk });
        config
    }

    /// Retrieve the number of processes.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Retrieve the owner policy.
    pub fn owner_policy(&self) -> OwnerPolicy {
        self.owner_policy
    }

    /// Changes the owner policy.
    pub fn set_owner_policy(&mut self, owner_policy: OwnerPolicy) {
        self.owner_policy = owner_policy;
        self.check_chunks();
    }

    /// Retrieve the GID allocation policy.
    pub fn gid_policy(&self) -> GidPolicy {
        self.gid_policy
    }

    /// Changes the GID allocation policy.
    pub fn set_gid_policy(&mut self, gid_policy: GidPolicy) {
        self.gid_policy = gid_policy;
        self.check_chunks();
    }

    fn check_chunks(&self) {
        // mixing band sizes still resolves owners correctly, but allocation
        // no longer lines up with ownership and every add becomes remote
        if let (
            OwnerPolicy::Chunked { chunk: owner_chunk },
            GidPolicy::Chunked { chunk: gid_chunk },
        ) = (self.owner_policy, self.gid_policy)
        {
            if owner_chunk != gid_chunk {
                println!(
                    "WARNING: owner chunk {} and gid chunk {} disagree",
                    owner_chunk, gid_chunk
                );
            }
        }
    }
}
