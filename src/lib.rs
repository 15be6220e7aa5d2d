// This module contains the definition of `Config`.
pub mod config;

// This module contains the definition of `DistributionCore`, its storage
// backends and the part-order boundary table.
pub mod distribution;

// This module contains the definition of `DirectoryError`.
pub mod error;

// This module contains identifiers (`ProcessId`, `PartId`, `Gid`), the
// `Location` record and GID allocation.
pub mod id;

// This module contains the definition of `Metrics`.
pub mod metrics;

// This module contains the owner-computes policies.
pub mod owner;

// This module contains the RMI boundary (`RmiChannel`, `RmiHandler`) and a
// deterministic in-process transport.
pub mod rmi;

// This module contains some utilitary functions.
pub mod util;

// Re-export `HashMap` and `HashSet`.
pub use hashbrown::{HashMap, HashSet};
