use crate::distribution::{LocationStore, PartStore};
use crate::id::{Gid, Location, PartId};
use crate::HashMap;

/// One entry per GID. The general-purpose backend: no assumption about how
/// GIDs were allocated.
#[derive(Debug, Clone, Default)]
pub struct HashedStore {
    map: HashMap<Gid, Location>,
}

impl LocationStore for HashedStore {
    fn lookup(&self, gid: Gid) -> Location {
        self.map.get(&gid).copied().unwrap_or_else(Location::invalid)
    }

    fn insert(&mut self, gid: Gid, location: Location) {
        self.map.entry(gid).or_insert(location);
    }

    fn update(&mut self, gid: Gid, location: Location) {
        self.map.insert(gid, location);
    }

    fn remove(&mut self, gid: Gid) {
        self.map.remove(&gid);
    }

    fn clear(&mut self) {
        self.map.clear();
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn entries(&self) -> Vec<(Gid, Location)> {
        self.map.iter().map(|(gid, location)| (*gid, *location)).collect()
    }
}

/// Hash-map part table: one entry per locally hosted GID.
#[derive(Debug, Clone, Default)]
pub struct HashedParts {
    map: HashMap<Gid, PartId>,
}

impl PartStore for HashedParts {
    fn register(&mut self, gid: Gid, part_id: PartId) {
        self.map.insert(gid, part_id);
    }

    fn part_of(&self, gid: Gid) -> Option<PartId> {
        self.map.get(&gid).copied()
    }

    fn remove(&mut self, gid: Gid) {
        self.map.remove(&gid);
    }

    fn clear(&mut self) {
        self.map.clear();
    }
}
