use crate::id::ProcessId;

/// Returns an iterator with all process identifiers in a system with `n`
/// processes. Process ids start at 0, matching the owner-computes policies.
pub fn process_ids(n: usize) -> impl Iterator<Item = ProcessId> {
    (0..n).map(|id| id as ProcessId)
}
