use crate::id::PartId;
use std::fmt;

/// Errors reported by the distribution layer.
///
/// An unresolved GID is *not* an error: `lookup` signals it with
/// `Location::invalid()` and callers check `is_valid()`. `DirectoryError`
/// covers the structural conditions the original system terminated the
/// process on; here the embedding application picks its own policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// A part id outside the local boundary table was used. This indicates a
    /// programming bug in the caller, not a runtime condition.
    PartOutOfRange { part_id: PartId, parts: usize },
    /// A location-map dump could not be parsed.
    Malformed(String),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartOutOfRange { part_id, parts } => write!(
                f,
                "part id {} out of range: this process hosts {} part(s)",
                part_id, parts
            ),
            Self::Malformed(msg) => {
                write!(f, "malformed location map dump: {}", msg)
            }
        }
    }
}

impl std::error::Error for DirectoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = DirectoryError::PartOutOfRange {
            part_id: 7,
            parts: 2,
        };
        assert_eq!(
            err.to_string(),
            "part id 7 out of range: this process hosts 2 part(s)"
        );

        let err = DirectoryError::Malformed("missing LOCMAPSTART".to_string());
        assert!(err.to_string().contains("LOCMAPSTART"));
    }
}
