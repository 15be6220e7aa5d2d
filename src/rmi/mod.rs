// This module contains the definition of `SimTransport` and `SimChannel`.
pub mod sim;

use crate::id::{Gid, Location, ProcessId};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Handle naming one registered object within a process. Object ids are
/// allocated per process in registration order, so SPMD-style symmetric
/// construction yields the same id for the same logical object everywhere.
pub type ObjectId = u64;

/// A remote invocation on another process' distribution tables. Every
/// variant carries only serializable payloads, since requests cross process
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    /// Read the authoritative location of a GID; answered synchronously.
    Lookup(Gid),
    /// Record the location of a newly created GID; fire-and-forget.
    Add(Gid, Location),
    /// Overwrite the location of a GID; fire-and-forget.
    Update(Gid, Location),
    /// Forget a GID; fire-and-forget.
    Delete(Gid),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    Location(Location),
    Ack,
}

/// Incoming-request side of an object registered with a channel. Requests
/// targeting the same object are handled one at a time.
pub trait RmiHandler: Send {
    fn handle(&mut self, request: Request) -> Reply;
}

/// One-sided call and barrier primitive the distribution core depends on.
/// Implementations decide the actual transport; the crate ships a
/// deterministic in-process one in `rmi::sim`.
pub trait RmiChannel: Send + Sync {
    /// This participant's identifier.
    fn process_id(&self) -> ProcessId;

    /// Number of participants; fixed for the lifetime of the channel.
    fn processes(&self) -> usize;

    /// Registers `handler` on this process and returns its handle.
    fn register(&self, handler: Arc<Mutex<dyn RmiHandler>>) -> ObjectId;

    /// Removes a previously registered handler.
    fn unregister(&self, object: ObjectId);

    /// Blocking call: runs `request` on `target`'s object and returns its
    /// reply. A lost or indefinitely delayed invocation blocks the caller
    /// forever; there is no timeout or retry.
    fn sync_call(
        &self,
        target: ProcessId,
        object: ObjectId,
        request: Request,
    ) -> Reply;

    /// Fire-and-forget call: returns once the request is handed to the
    /// transport, with no delivery guarantee until the next `fence`.
    fn async_call(&self, target: ProcessId, object: ObjectId, request: Request);

    /// Global barrier. On return, every async call issued by any process
    /// before the fence has been applied at its destination.
    fn fence(&self);
}
