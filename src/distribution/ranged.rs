use crate::distribution::{LocationStore, PartStore};
use crate::id::{Gid, Location, PartId};
use serde::{Deserialize, Serialize};

/// A contiguous run of GIDs sharing one location: the half-open interval
/// `[start, start + size)`. Ranges in a table never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GidRange {
    start: Gid,
    size: u64,
    location: Location,
}

impl GidRange {
    /// Creates a new `GidRange`.
    pub fn new(start: Gid, size: u64, location: Location) -> Self {
        Self {
            start,
            size,
            location,
        }
    }

    /// First GID in the range.
    pub fn start(&self) -> Gid {
        self.start
    }

    /// Number of GIDs in the range.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Location shared by every GID in the range.
    pub fn location(&self) -> Location {
        self.location
    }

    /// One past the last GID in the range.
    pub fn end(&self) -> Gid {
        self.start + self.size
    }

    fn contains(&self, gid: Gid) -> bool {
        self.start <= gid && gid < self.end()
    }
}

/// Sorted vector of coalesced ranges. Strictly an optimization over
/// `HashedStore` for containers whose elements are created in contiguous GID
/// bands (arrays, block and block-cyclic matrices): lookup is a binary
/// search over range starts and an insert merges into an adjacent range with
/// the same location whenever it can.
#[derive(Debug, Clone, Default)]
pub struct RangedStore {
    ranges: Vec<GidRange>,
}

impl RangedStore {
    /// Index of the range containing `gid`, if any. A GID at the exact
    /// boundary between two adjacent ranges belongs to the one whose
    /// half-open interval contains it.
    fn find(&self, gid: Gid) -> Option<usize> {
        let pos = self.ranges.partition_point(|range| range.start <= gid);
        match pos.checked_sub(1) {
            Some(idx) if self.ranges[idx].contains(gid) => Some(idx),
            _ => None,
        }
    }

    /// Inserts a whole range, merging with the predecessor and/or successor
    /// when contiguous and co-located. The caller guarantees the new range
    /// does not overlap an existing one.
    pub fn insert_range(&mut self, range: GidRange) {
        if range.size == 0 {
            return;
        }
        let pos = self.ranges.partition_point(|r| r.start <= range.start);
        let merge_prev = pos > 0 && {
            let prev = &self.ranges[pos - 1];
            prev.end() == range.start && prev.location == range.location
        };
        let merge_next = pos < self.ranges.len() && {
            let next = &self.ranges[pos];
            range.end() == next.start && next.location == range.location
        };
        match (merge_prev, merge_next) {
            (true, true) => {
                // the new range bridges its neighbours into a single one
                let next_size = self.ranges[pos].size;
                self.ranges[pos - 1].size += range.size + next_size;
                self.ranges.remove(pos);
            }
            (true, false) => self.ranges[pos - 1].size += range.size,
            (false, true) => {
                let next = &mut self.ranges[pos];
                next.start = range.start;
                next.size += range.size;
            }
            (false, false) => self.ranges.insert(pos, range),
        }
    }

    /// The current range table.
    pub fn ranges(&self) -> &[GidRange] {
        &self.ranges
    }
}

impl LocationStore for RangedStore {
    fn lookup(&self, gid: Gid) -> Location {
        match self.find(gid) {
            Some(idx) => self.ranges[idx].location,
            None => Location::invalid(),
        }
    }

    fn insert(&mut self, gid: Gid, location: Location) {
        if self.find(gid).is_some() {
            // keep the first entry, as the hashed backend does
            return;
        }
        self.insert_range(GidRange::new(gid, 1, location));
    }

    fn update(&mut self, gid: Gid, location: Location) {
        if let Some(idx) = self.find(gid) {
            if self.ranges[idx].location == location {
                return;
            }
            self.remove(gid);
        }
        self.insert_range(GidRange::new(gid, 1, location));
    }

    fn remove(&mut self, gid: Gid) {
        let idx = match self.find(gid) {
            Some(idx) => idx,
            None => return,
        };
        let range = self.ranges[idx];
        // elements before and after `gid` within the range
        let left = gid - range.start;
        let right = range.end() - gid - 1;
        match (left, right) {
            (0, 0) => {
                self.ranges.remove(idx);
            }
            (0, _) => {
                let range = &mut self.ranges[idx];
                range.start += 1;
                range.size -= 1;
            }
            (_, 0) => self.ranges[idx].size -= 1,
            _ => {
                self.ranges[idx].size = left;
                let tail = GidRange::new(gid + 1, right, range.location);
                self.ranges.insert(idx + 1, tail);
            }
        }
    }

    fn clear(&mut self) {
        self.ranges.clear();
    }

    fn len(&self) -> usize {
        self.ranges.iter().map(|range| range.size as usize).sum()
    }

    fn entries(&self) -> Vec<(Gid, Location)> {
        self.ranges
            .iter()
            .flat_map(|range| {
                (range.start..range.end())
                    .map(move |gid| (gid, range.location))
            })
            .collect()
    }
}

/// Range-based part table. Spans of contiguous GIDs registered in the same
/// part coalesce exactly like location ranges do, so the table reuses the
/// range machinery with the part id in the location slot.
#[derive(Debug, Clone, Default)]
pub struct RangedParts {
    spans: RangedStore,
}

impl PartStore for RangedParts {
    fn register(&mut self, gid: Gid, part_id: PartId) {
        // re-registration moves the gid to the new part
        self.spans.remove(gid);
        self.spans.insert_range(GidRange::new(gid, 1, Location::new(0, part_id)));
    }

    fn part_of(&self, gid: Gid) -> Option<PartId> {
        let location = self.spans.lookup(gid);
        if location.is_valid() {
            Some(location.part_id())
        } else {
            None
        }
    }

    fn remove(&mut self, gid: Gid) {
        self.spans.remove(gid);
    }

    fn clear(&mut self) {
        self.spans.clear();
    }
}
