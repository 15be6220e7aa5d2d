// This module contains the definition of `DistributionCore`.
mod base;

// This module contains the definition of `BoundaryTable`, the part-order
// structure backing global iteration.
mod boundary;

// This module contains the hash-map location/part backend.
mod hashed;

// This module contains the sorted coalescing range backend, for containers
// whose elements are created in contiguous GID bands.
mod ranged;

// Re-exports.
pub use base::{DistributionCore, HashedDistribution, RangedDistribution};
pub use boundary::{BoundaryTable, PartBoundary};
pub use hashed::{HashedParts, HashedStore};
pub use ranged::{GidRange, RangedParts, RangedStore};

use crate::id::{Gid, Location, PartId};

/// Storage strategy for GID-to-location tables. Both the authoritative map
/// and the cache of a `DistributionCore` use the same representation; the
/// two shipped implementations are `HashedStore` (one entry per GID) and
/// `RangedStore` (coalesced contiguous ranges). Whatever the representation,
/// the external semantics are identical, so backends are interchangeable
/// behind `DistributionCore`.
pub trait LocationStore: Default + Send {
    /// Returns the location recorded for `gid`, or `Location::invalid()` if
    /// there is none.
    fn lookup(&self, gid: Gid) -> Location;

    /// Records the location of a new `gid`. Inserting a GID twice is a
    /// caller contract violation; the store keeps the first entry.
    fn insert(&mut self, gid: Gid, location: Location);

    /// Overwrites the location of `gid`, creating the entry if absent.
    fn update(&mut self, gid: Gid, location: Location);

    /// Forgets `gid`. Removing an absent GID is a no-op.
    fn remove(&mut self, gid: Gid);

    /// Drops every entry.
    fn clear(&mut self);

    /// Number of GIDs tracked.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every tracked (gid, location) pair; debug dumps only.
    fn entries(&self) -> Vec<(Gid, Location)>;
}

/// Storage strategy for the local GID-to-part table, the fast path behind
/// `DistributionCore::is_local`.
pub trait PartStore: Default + Send {
    /// Records that `gid` lives in local part `part_id`.
    fn register(&mut self, gid: Gid, part_id: PartId);

    /// Returns the local part hosting `gid`, if any.
    fn part_of(&self, gid: Gid) -> Option<PartId>;

    /// Forgets `gid`. Removing an absent GID is a no-op.
    fn remove(&mut self, gid: Gid);

    /// Drops every entry.
    fn clear(&mut self);
}
