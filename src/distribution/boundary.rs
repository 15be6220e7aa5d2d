use crate::error::DirectoryError;
use crate::id::{Location, PartId, ProcessId, INVALID_PART, REMOTE_LAST_PART};

/// Predecessor and successor of a part in the global part order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartBoundary {
    pub before: Location,
    pub after: Location,
}

impl PartBoundary {
    pub fn new(before: Location, after: Location) -> Self {
        Self { before, after }
    }
}

/// Per-process slice of the global part order: for each locally hosted part,
/// the location of the logically previous and next part. Following `after`
/// links across processes traverses every part exactly once, with
/// `INVALID_PART` at the true global extremities.
///
/// Until boundaries are wired (`valid` is false), queries return
/// `Location(self, INVALID_PART)` rather than reading unset table entries;
/// callers that never wire boundaries can fall back on the degraded
/// `dummy_*` order by (process, part) instead.
#[derive(Debug, Clone)]
pub struct BoundaryTable {
    process_id: ProcessId,
    n: usize,
    parts: Vec<PartBoundary>,
    valid: bool,
}

impl BoundaryTable {
    /// Creates an empty table for `process_id` in a system with `n`
    /// processes.
    pub fn new(process_id: ProcessId, n: usize) -> Self {
        Self {
            process_id,
            n,
            parts: Vec::new(),
            valid: false,
        }
    }

    /// Number of locally hosted parts.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Whether boundaries have been wired.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Marks the table as wired without touching its entries.
    pub fn set_valid(&mut self) {
        self.valid = true;
    }

    /// Appends a slot for a new local part, unwired on both sides, and
    /// returns its part id.
    pub fn push_part(&mut self) -> PartId {
        let part_id = self.parts.len() as PartId;
        let unset = Location::invalid();
        self.parts.push(PartBoundary::new(unset, unset));
        part_id
    }

    /// Default wiring for the one-part-per-process case: the global order is
    /// process 0 part 0, process 1 part 0, ..., process n-1 part 0, with the
    /// extremities left open.
    pub fn init_ring(&mut self) {
        if self.parts.is_empty() {
            self.push_part();
        }
        let before = if self.process_id == 0 {
            Location::new(self.process_id, INVALID_PART)
        } else {
            Location::new(self.process_id - 1, 0)
        };
        let after = if self.process_id as usize == self.n - 1 {
            Location::new(self.process_id, INVALID_PART)
        } else {
            Location::new(self.process_id + 1, 0)
        };
        self.parts[0] = PartBoundary::new(before, after);
        self.valid = true;
    }

    /// Wires both sides of one part and marks the table valid.
    pub fn init_part(
        &mut self,
        part_id: PartId,
        before: Location,
        after: Location,
    ) -> Result<(), DirectoryError> {
        let entry = self.entry_mut(part_id)?;
        *entry = PartBoundary::new(before, after);
        self.valid = true;
        Ok(())
    }

    /// Overwrites one part's boundary entry; does not flip the valid flag.
    pub fn set(
        &mut self,
        part_id: PartId,
        boundary: PartBoundary,
    ) -> Result<(), DirectoryError> {
        let entry = self.entry_mut(part_id)?;
        *entry = boundary;
        Ok(())
    }

    /// Location of the part preceding `part_id` in the global order.
    pub fn begin_info(
        &self,
        part_id: PartId,
    ) -> Result<Location, DirectoryError> {
        if !self.valid {
            return Ok(Location::new(self.process_id, INVALID_PART));
        }
        self.entry(part_id).map(|boundary| boundary.before)
    }

    /// Location of the part following `part_id` in the global order.
    pub fn end_info(
        &self,
        part_id: PartId,
    ) -> Result<Location, DirectoryError> {
        if !self.valid {
            return Ok(Location::new(self.process_id, INVALID_PART));
        }
        self.entry(part_id).map(|boundary| boundary.after)
    }

    /// Degraded-mode successor when boundaries were never wired: next local
    /// part, else the first part of the next process, else the end of the
    /// order.
    pub fn dummy_end_info(&self, part_id: PartId, num_parts: usize) -> Location {
        if (part_id as usize + 1) < num_parts {
            Location::new(self.process_id, part_id + 1)
        } else if ((self.process_id + 1) as usize) < self.n {
            Location::new(self.process_id + 1, 0)
        } else {
            Location::new(self.process_id, INVALID_PART)
        }
    }

    /// Degraded-mode predecessor: previous local part, else the last part of
    /// the previous process, else the start of the order.
    pub fn dummy_begin_info(&self, part_id: PartId) -> Location {
        if part_id > 0 {
            Location::new(self.process_id, part_id - 1)
        } else if self.process_id > 0 {
            Location::new(self.process_id - 1, REMOTE_LAST_PART)
        } else {
            Location::new(self.process_id, INVALID_PART)
        }
    }

    fn entry(&self, part_id: PartId) -> Result<&PartBoundary, DirectoryError> {
        self.parts.get(part_id as usize).ok_or(
            DirectoryError::PartOutOfRange {
                part_id,
                parts: self.parts.len(),
            },
        )
    }

    fn entry_mut(
        &mut self,
        part_id: PartId,
    ) -> Result<&mut PartBoundary, DirectoryError> {
        let parts = self.parts.len();
        self.parts
            .get_mut(part_id as usize)
            .ok_or(DirectoryError::PartOutOfRange { part_id, parts })
    }
}
