use crate::config::Config;
use crate::distribution::{
    BoundaryTable, HashedParts, HashedStore, LocationStore, PartBoundary,
    PartStore, RangedParts, RangedStore,
};
use crate::error::DirectoryError;
use crate::id::{Gid, GidGen, Location, PartId, ProcessId, INVALID_PART};
use crate::metrics::{DistributionMetrics, DistributionMetricsKind};
use crate::rmi::{ObjectId, Reply, Request, RmiChannel, RmiHandler};
use parking_lot::Mutex;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{debug, trace};

/// General-purpose distribution: hash-map tables.
pub type HashedDistribution = DistributionCore<HashedStore, HashedParts>;
/// Band-friendly distribution: coalesced range tables.
pub type RangedDistribution = DistributionCore<RangedStore, RangedParts>;

// Per-process tables. Owned by one `DistributionCore` and shared with the
// channel as that core's incoming-request handler, so every access (local or
// remote) goes through one lock.
struct Directory<S, P> {
    process_id: ProcessId,
    // authoritative entries for the gids this process owns
    map: S,
    // last-known locations; hints only, may be stale
    cache: S,
    // gids hosted locally, by part
    parts: P,
    boundary: BoundaryTable,
    metrics: DistributionMetrics,
}

impl<S, P> Directory<S, P>
where
    S: LocationStore,
    P: PartStore,
{
    fn new(process_id: ProcessId, n: usize) -> Self {
        Self {
            process_id,
            map: S::default(),
            cache: S::default(),
            parts: P::default(),
            boundary: BoundaryTable::new(process_id, n),
            metrics: DistributionMetrics::new(),
        }
    }

    fn count(&mut self, kind: DistributionMetricsKind) {
        self.metrics.aggregate(kind, |v| *v += 1);
    }
}

// The same procedures run whether the mutation was issued locally or arrived
// from another process.
impl<S, P> RmiHandler for Directory<S, P>
where
    S: LocationStore,
    P: PartStore,
{
    fn handle(&mut self, request: Request) -> Reply {
        trace!(
            "[distribution] p{}: handling {:?}",
            self.process_id,
            request
        );
        match request {
            Request::Lookup(gid) => Reply::Location(self.map.lookup(gid)),
            Request::Add(gid, location) => {
                self.map.insert(gid, location);
                Reply::Ack
            }
            Request::Update(gid, location) => {
                self.map.update(gid, location);
                Reply::Ack
            }
            Request::Delete(gid) => {
                self.map.remove(gid);
                Reply::Ack
            }
        }
    }
}

/// Location tracking and distribution management for one process'es share of
/// a distributed container.
///
/// Each instance registers itself with its `RmiChannel` on construction and
/// unregisters on drop; with SPMD-style symmetric construction the resulting
/// handle pairs up with the same container's core on every other process.
pub struct DistributionCore<S, P> {
    process_id: ProcessId,
    config: Config,
    gid_gen: GidGen,
    directory: Arc<Mutex<Directory<S, P>>>,
    channel: Arc<dyn RmiChannel>,
    object: ObjectId,
}

impl<S, P> DistributionCore<S, P>
where
    S: LocationStore + 'static,
    P: PartStore + 'static,
{
    /// Creates a new `DistributionCore` on top of `channel` and registers it
    /// for incoming remote invocations.
    pub fn new(config: Config, channel: Arc<dyn RmiChannel>) -> Self {
        assert_eq!(
            config.n(),
            channel.processes(),
            "config and channel disagree on the number of processes"
        );
        let process_id = channel.process_id();
        let directory =
            Arc::new(Mutex::new(Directory::new(process_id, config.n())));
        let handler: Arc<Mutex<dyn RmiHandler>> = directory.clone();
        let object = channel.register(handler);
        let gid_gen = GidGen::new(process_id, config.n(), config.gid_policy());
        Self {
            process_id,
            config,
            gid_gen,
            directory,
            channel,
            object,
        }
    }

    /// This process' identifier.
    pub fn process_id(&self) -> ProcessId {
        self.process_id
    }

    /// The configuration in use.
    pub fn config(&self) -> Config {
        self.config
    }

    /// The channel handle this core is registered under.
    pub fn handle(&self) -> ObjectId {
        self.object
    }

    /// Blocks until every process reached the fence and every prior async
    /// mutation has been applied at its destination.
    pub fn fence(&self) {
        self.channel.fence();
    }

    // ------------------------------------------------------------------
    // element location
    // ------------------------------------------------------------------

    /// Resolves the location of `gid`: local cache first, then the
    /// authoritative map of the gid's owner, remotely if the owner is
    /// another process. Successful resolutions populate the cache; a cache
    /// hit is a hint and may be stale after a redistribution, in which case
    /// the caller re-resolves after flushing. Returns `Location::invalid()`
    /// if the owner has no entry.
    pub fn lookup(&self, gid: Gid) -> Location {
        let mut directory = self.directory.lock();
        let cached = directory.cache.lookup(gid);
        if cached.is_valid() {
            directory.count(DistributionMetricsKind::CacheHit);
            trace!(
                "[distribution] p{}: gid {} cached at {:?}",
                self.process_id,
                gid,
                cached
            );
            return cached;
        }

        let owner = self.owner(gid);
        if owner == self.process_id {
            let location = directory.map.lookup(gid);
            directory.count(DistributionMetricsKind::LocalLookup);
            if location.is_valid() {
                directory.cache.insert(gid, location);
            }
            return location;
        }

        // remote owner: release our tables before blocking on the reply
        drop(directory);
        let reply =
            self.channel
                .sync_call(owner, self.object, Request::Lookup(gid));
        let location = match reply {
            Reply::Location(location) => location,
            Reply::Ack => panic!("lookup should be answered with a location"),
        };

        let mut directory = self.directory.lock();
        directory.count(DistributionMetricsKind::RemoteLookup);
        if location.is_valid() {
            directory.cache.insert(gid, location);
        }
        location
    }

    /// Records the location of a newly created `gid` at its owner. Remote
    /// owners are updated asynchronously: the entry is only guaranteed
    /// visible after the next fence.
    pub fn add_to_location_map(&self, gid: Gid, location: Location) {
        self.apply_or_forward(gid, Request::Add(gid, location));
    }

    /// Overwrites the location of `gid` at its owner, asynchronously if
    /// remote. Updating a never-added gid creates the entry.
    pub fn update_location_map(&self, gid: Gid, location: Location) {
        self.apply_or_forward(gid, Request::Update(gid, location));
    }

    /// Removes `gid` at its owner, asynchronously if remote. Deleting an
    /// absent gid is a silent no-op.
    pub fn delete_from_location_map(&self, gid: Gid) {
        self.apply_or_forward(gid, Request::Delete(gid));
    }

    fn apply_or_forward(&self, gid: Gid, request: Request) {
        let owner = self.owner(gid);
        if owner == self.process_id {
            self.directory.lock().handle(request);
        } else {
            trace!(
                "[distribution] p{}: forwarding {:?} to p{}",
                self.process_id,
                request,
                owner
            );
            self.directory
                .lock()
                .count(DistributionMetricsKind::RemoteMutation);
            self.channel.async_call(owner, self.object, request);
        }
    }

    fn owner(&self, gid: Gid) -> ProcessId {
        self.config.owner_policy().owner(gid, self.config.n())
    }

    // ------------------------------------------------------------------
    // cache bookkeeping
    // ------------------------------------------------------------------

    /// Seeds the cache with a location known out of band.
    pub fn add_to_cache(&self, gid: Gid, location: Location) {
        self.directory.lock().cache.insert(gid, location);
    }

    /// Drops one cached location.
    pub fn delete_from_cache(&self, gid: Gid) {
        self.directory.lock().cache.remove(gid);
    }

    /// Drops every cached location. Called after a redistribution, which
    /// may invalidate every cached entry at once.
    pub fn flush_cache(&self) {
        debug!("[distribution] p{}: flushing cache", self.process_id);
        self.directory.lock().cache.clear();
    }

    /// Drops the local gid-to-part table; redistribution hook.
    pub fn flush_parts_map(&self) {
        self.directory.lock().parts.clear();
    }

    /// Drops the authoritative location map; redistribution hook.
    pub fn flush_location_map(&self) {
        self.directory.lock().map.clear();
    }

    // ------------------------------------------------------------------
    // local parts
    // ------------------------------------------------------------------

    /// Records that `gid` is hosted locally in `part_id`.
    pub fn register_part(&self, gid: Gid, part_id: PartId) {
        self.directory.lock().parts.register(gid, part_id);
    }

    /// Removes `gid` from the local gid-to-part table.
    pub fn delete_from_part_map(&self, gid: Gid) {
        self.directory.lock().parts.remove(gid);
    }

    /// Fast local-ownership probe: the local part hosting `gid`, if the
    /// element lives on this process. Never touches the network.
    pub fn is_local(&self, gid: Gid) -> Option<PartId> {
        self.directory.lock().parts.part_of(gid)
    }

    // ------------------------------------------------------------------
    // gid allocation
    // ------------------------------------------------------------------

    /// Allocates a fresh gid, per the configured policy.
    pub fn next_gid(&mut self) -> Gid {
        self.gid_gen.next_gid()
    }

    /// Allocates `count` fresh gids.
    pub fn next_gids(&mut self, count: usize) -> Vec<Gid> {
        self.gid_gen.next_gids(count)
    }

    // ------------------------------------------------------------------
    // part order
    // ------------------------------------------------------------------

    /// Default part-order wiring for the one-part-per-process case.
    pub fn init_boundary_info(&self) {
        self.directory.lock().boundary.init_ring();
    }

    /// Appends a slot for a new local part and returns its id.
    pub fn push_part(&self) -> PartId {
        self.directory.lock().boundary.push_part()
    }

    /// Wires the predecessor and successor of one local part.
    pub fn init_part_boundary(
        &self,
        part_id: PartId,
        before: Location,
        after: Location,
    ) -> Result<(), DirectoryError> {
        self.directory.lock().boundary.init_part(part_id, before, after)
    }

    /// Overwrites one part's boundary entry.
    pub fn set_part_boundary(
        &self,
        part_id: PartId,
        boundary: PartBoundary,
    ) -> Result<(), DirectoryError> {
        self.directory.lock().boundary.set(part_id, boundary)
    }

    /// Location of the part preceding `part_id` in the global order;
    /// `Location(self, INVALID_PART)` while boundaries are unwired.
    pub fn bd_begin_info(
        &self,
        part_id: PartId,
    ) -> Result<Location, DirectoryError> {
        self.directory.lock().boundary.begin_info(part_id)
    }

    /// Location of the part following `part_id` in the global order;
    /// `Location(self, INVALID_PART)` while boundaries are unwired.
    pub fn bd_end_info(
        &self,
        part_id: PartId,
    ) -> Result<Location, DirectoryError> {
        self.directory.lock().boundary.end_info(part_id)
    }

    /// Degraded-mode successor by (process, part) order.
    pub fn dummy_bd_end_info(
        &self,
        part_id: PartId,
        num_parts: usize,
    ) -> Location {
        self.directory.lock().boundary.dummy_end_info(part_id, num_parts)
    }

    /// Degraded-mode predecessor by (process, part) order.
    pub fn dummy_bd_begin_info(&self, part_id: PartId) -> Location {
        self.directory.lock().boundary.dummy_begin_info(part_id)
    }

    // ------------------------------------------------------------------
    // introspection and debug persistence
    // ------------------------------------------------------------------

    /// Snapshot of the distribution counters.
    pub fn metrics(&self) -> DistributionMetrics {
        self.directory.lock().metrics.clone()
    }

    /// The authoritative entries this process owns.
    pub fn owned_entries(&self) -> Vec<(Gid, Location)> {
        self.directory.lock().map.entries()
    }

    /// Writes the authoritative map as a textual dump:
    /// `LOCMAPSTART`, the entry count, one `gid process_id` pair per line,
    /// `LOCMAPSTOP`. Debug persistence only.
    pub fn write_location_map<W: Write>(
        &self,
        writer: &mut W,
    ) -> io::Result<()> {
        let entries = self.owned_entries();
        writeln!(writer, "LOCMAPSTART")?;
        writeln!(writer, "{}", entries.len())?;
        for (gid, location) in entries {
            writeln!(writer, "{} {}", gid, location.process_id())?;
        }
        writeln!(writer, "LOCMAPSTOP")?;
        Ok(())
    }

    /// Loads a textual dump produced by `write_location_map` into the
    /// authoritative map and returns the number of entries read. The dump
    /// carries no part ids, so entries load as
    /// `Location(process_id, INVALID_PART)`.
    pub fn read_location_map<R: BufRead>(
        &self,
        reader: &mut R,
    ) -> Result<usize, DirectoryError> {
        let mut lines = reader.lines();
        let mut next = |what: &str| match lines.next() {
            Some(Ok(line)) => Ok(line),
            Some(Err(err)) => Err(DirectoryError::Malformed(err.to_string())),
            None => {
                Err(DirectoryError::Malformed(format!("missing {}", what)))
            }
        };

        let header = next("LOCMAPSTART")?;
        if header.trim() != "LOCMAPSTART" {
            return Err(DirectoryError::Malformed(format!(
                "expected LOCMAPSTART, found {:?}",
                header
            )));
        }
        let count: usize = next("entry count")?.trim().parse().map_err(
            |_| DirectoryError::Malformed("bad entry count".to_string()),
        )?;

        let mut directory = self.directory.lock();
        for _ in 0..count {
            let line = next("location entry")?;
            let mut fields = line.split_whitespace();
            let entry = match (fields.next(), fields.next(), fields.next()) {
                (Some(gid), Some(process_id), None) => {
                    gid.parse::<Gid>().ok().zip(
                        process_id.parse::<ProcessId>().ok(),
                    )
                }
                _ => None,
            };
            let (gid, process_id) = entry.ok_or_else(|| {
                DirectoryError::Malformed(format!(
                    "bad location entry {:?}",
                    line
                ))
            })?;
            directory
                .map
                .update(gid, Location::new(process_id, INVALID_PART));
        }

        let footer = next("LOCMAPSTOP")?;
        if footer.trim() != "LOCMAPSTOP" {
            return Err(DirectoryError::Malformed(format!(
                "expected LOCMAPSTOP, found {:?}",
                footer
            )));
        }
        Ok(count)
    }
}

impl<S, P> Drop for DistributionCore<S, P> {
    fn drop(&mut self) {
        // deregistration happens on every exit path
        self.channel.unregister(self.object);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::DistributionMetricsKind as Kind;
    use crate::rmi::sim::SimTransport;
    use crate::util;

    fn hashed_system(config: Config) -> Vec<HashedDistribution> {
        let transport = SimTransport::new(config.n());
        util::process_ids(config.n())
            .map(|process_id| {
                DistributionCore::new(
                    config,
                    Arc::new(transport.channel(process_id)),
                )
            })
            .collect()
    }

    fn ranged_system(config: Config) -> Vec<RangedDistribution> {
        let transport = SimTransport::new(config.n());
        util::process_ids(config.n())
            .map(|process_id| {
                DistributionCore::new(
                    config,
                    Arc::new(transport.channel(process_id)),
                )
            })
            .collect()
    }

    fn counter(
        core: &DistributionCore<impl LocationStore + 'static, impl PartStore + 'static>,
        kind: Kind,
    ) -> u64 {
        core.metrics().get_aggregated(kind).copied().unwrap_or(0)
    }

    #[test]
    fn local_add_and_lookup() {
        let cores = hashed_system(Config::new(1));
        let core = &cores[0];

        assert!(!core.lookup(42).is_valid());
        core.add_to_location_map(42, Location::new(0, 1));
        assert_eq!(core.lookup(42), Location::new(0, 1));
        assert_eq!(counter(core, Kind::LocalLookup), 2);
    }

    #[test]
    fn remote_lookup_round_trip() {
        // 4 processes, modulo ownership: gid 7 is owned by process 3
        let cores = hashed_system(Config::new(4));
        cores[1].add_to_location_map(7, Location::new(1, 0));
        cores[1].fence();

        // process 0 resolves gid 7 with one remote round trip
        assert_eq!(cores[0].lookup(7), Location::new(1, 0));
        assert_eq!(counter(&cores[0], Kind::RemoteLookup), 1);

        // and answers from the cache from then on
        assert_eq!(cores[0].lookup(7), Location::new(1, 0));
        assert_eq!(counter(&cores[0], Kind::CacheHit), 1);
        assert_eq!(counter(&cores[0], Kind::RemoteLookup), 1);
    }

    #[test]
    fn unresolved_gid_is_not_cached() {
        let cores = hashed_system(Config::new(4));
        assert!(!cores[0].lookup(7).is_valid());
        assert!(!cores[0].lookup(7).is_valid());
        // both lookups went remote: failures must not populate the cache
        assert_eq!(counter(&cores[0], Kind::RemoteLookup), 2);
        assert_eq!(counter(&cores[0], Kind::CacheHit), 0);
    }

    #[test]
    fn remote_add_visible_after_fence() {
        let cores = hashed_system(Config::new(4));

        // process 2 adds gid 7; the owner is process 3, so the add travels
        // asynchronously
        cores[2].add_to_location_map(7, Location::new(2, 0));
        assert_eq!(counter(&cores[2], Kind::RemoteMutation), 1);

        // not guaranteed visible yet; after the fence it must be
        assert!(!cores[0].lookup(7).is_valid());
        cores[0].fence();
        assert_eq!(cores[0].lookup(7), Location::new(2, 0));
    }

    #[test]
    fn cache_is_stale_until_flushed() {
        let cores = hashed_system(Config::new(2));

        // gid 4 is owned by process 0
        cores[0].add_to_location_map(4, Location::new(1, 0));
        assert_eq!(cores[1].lookup(4), Location::new(1, 0));

        // the element moves; process 1 still answers from its cache
        cores[0].update_location_map(4, Location::new(0, 1));
        cores[0].fence();
        assert_eq!(cores[1].lookup(4), Location::new(1, 0));

        // the redistribution hook drops the hint and the next lookup
        // re-resolves
        cores[1].flush_cache();
        assert_eq!(cores[1].lookup(4), Location::new(0, 1));
    }

    #[test]
    fn delete_is_idempotent() {
        let cores = hashed_system(Config::new(4));
        // gid 5 is owned by process 1
        cores[1].add_to_location_map(5, Location::new(3, 0));
        cores[1].fence();

        // delete twice from a non-owner, with a fence in between: the
        // second delete is a no-op, not an error
        cores[2].delete_from_location_map(5);
        cores[2].fence();
        cores[2].delete_from_location_map(5);
        cores[2].fence();
        assert!(!cores[0].lookup(5).is_valid());
    }

    #[test]
    fn single_authoritative_owner() {
        let config = Config::new(3);
        let mut cores = hashed_system(config);

        // every process creates a few elements it hosts itself
        let mut all_gids = Vec::new();
        for index in 0..cores.len() {
            let gids = cores[index].next_gids(4);
            for gid in gids {
                let location =
                    Location::new(cores[index].process_id(), 0);
                cores[index].add_to_location_map(gid, location);
                all_gids.push(gid);
            }
        }
        cores[0].fence();

        for gid in all_gids {
            let holders: Vec<_> = cores
                .iter()
                .filter(|core| {
                    core.owned_entries()
                        .iter()
                        .any(|(owned, _)| *owned == gid)
                })
                .map(|core| core.process_id())
                .collect();
            // exactly one process holds the authoritative entry, and it is
            // the one the owner policy names
            assert_eq!(
                holders,
                vec![config.owner_policy().owner(gid, config.n())]
            );
        }
    }

    #[test]
    fn boundary_ring_traversal() {
        let n = 4;
        let cores = hashed_system(Config::new(n));
        for core in &cores {
            core.init_boundary_info();
        }

        // follow successor links from process 0 part 0: every process is
        // visited exactly once before the order ends
        let mut visited = vec![0 as ProcessId];
        let mut current = Location::new(0, 0);
        loop {
            let next = cores[current.process_id() as usize]
                .bd_end_info(current.part_id())
                .unwrap();
            if next.part_id() == INVALID_PART {
                break;
            }
            visited.push(next.process_id());
            current = next;
        }
        assert_eq!(visited, vec![0, 1, 2, 3]);
    }

    #[test]
    fn unwired_boundary_queries() {
        let cores = hashed_system(Config::new(2));
        assert_eq!(
            cores[1].bd_end_info(0).unwrap(),
            Location::new(1, INVALID_PART)
        );
        assert_eq!(
            cores[1].bd_begin_info(0).unwrap(),
            Location::new(1, INVALID_PART)
        );
    }

    #[test]
    fn is_local_probe() {
        let cores = hashed_system(Config::new(2));
        cores[0].register_part(10, 1);
        assert_eq!(cores[0].is_local(10), Some(1));
        assert_eq!(cores[0].is_local(11), None);
        assert_eq!(cores[1].is_local(10), None);

        cores[0].delete_from_part_map(10);
        assert_eq!(cores[0].is_local(10), None);
    }

    #[test]
    fn flushes_reset_tables() {
        let cores = hashed_system(Config::new(1));
        let core = &cores[0];
        core.add_to_location_map(1, Location::new(0, 0));
        core.register_part(1, 0);
        assert_eq!(core.lookup(1), Location::new(0, 0));

        core.flush_cache();
        core.flush_parts_map();
        core.flush_location_map();
        assert!(core.owned_entries().is_empty());
        assert_eq!(core.is_local(1), None);
        assert!(!core.lookup(1).is_valid());
    }

    #[test]
    fn ranged_backend_same_contract() {
        // chunked ownership lines up with chunked allocation: elements a
        // process creates are owned locally
        let config = Config::new_chunked(2, 4);
        let mut cores = ranged_system(config);

        let gids = cores[0].next_gids(3);
        assert_eq!(gids, vec![1, 2, 3]);
        for gid in &gids {
            cores[0].add_to_location_map(*gid, Location::new(0, 0));
        }
        cores[0].fence();

        // no remote mutation was needed
        assert_eq!(counter(&cores[0], Kind::RemoteMutation), 0);

        // and the other process resolves them remotely, same contract as
        // the hashed backend
        assert_eq!(cores[1].lookup(2), Location::new(0, 0));
        assert_eq!(counter(&cores[1], Kind::RemoteLookup), 1);
        assert!(!cores[1].lookup(7).is_valid());

        // delete and re-resolve
        cores[1].delete_from_location_map(2);
        cores[1].fence();
        cores[1].flush_cache();
        assert!(!cores[1].lookup(2).is_valid());
    }

    #[test]
    fn location_map_dump_round_trip() {
        let cores = hashed_system(Config::new(1));
        let core = &cores[0];
        core.add_to_location_map(3, Location::new(0, 2));
        core.add_to_location_map(9, Location::new(0, 0));

        let mut dump = Vec::new();
        core.write_location_map(&mut dump).unwrap();
        let text = String::from_utf8(dump.clone()).unwrap();
        assert!(text.starts_with("LOCMAPSTART\n2\n"));
        assert!(text.ends_with("LOCMAPSTOP\n"));

        // load into a fresh system; part ids are not part of the dump
        let other = hashed_system(Config::new(1));
        let read = other[0]
            .read_location_map(&mut io::Cursor::new(dump))
            .unwrap();
        assert_eq!(read, 2);
        assert_eq!(other[0].lookup(3), Location::new(0, INVALID_PART));
        assert_eq!(other[0].lookup(9), Location::new(0, INVALID_PART));
    }

    #[test]
    fn malformed_dump_is_an_error() {
        let cores = hashed_system(Config::new(1));
        let core = &cores[0];

        let missing_header = "2\n1 0\n2 0\nLOCMAPSTOP\n";
        assert!(matches!(
            core.read_location_map(&mut io::Cursor::new(missing_header)),
            Err(DirectoryError::Malformed(_))
        ));

        let truncated = "LOCMAPSTART\n2\n1 0\n";
        assert!(matches!(
            core.read_location_map(&mut io::Cursor::new(truncated)),
            Err(DirectoryError::Malformed(_))
        ));

        let bad_entry = "LOCMAPSTART\n1\n1 zero\nLOCMAPSTOP\n";
        assert!(matches!(
            core.read_location_map(&mut io::Cursor::new(bad_entry)),
            Err(DirectoryError::Malformed(_))
        ));
    }

    #[test]
    fn drop_unregisters_the_handle() {
        let transport = SimTransport::new(1);
        let config = Config::new(1);
        let first: HashedDistribution = DistributionCore::new(
            config,
            Arc::new(transport.channel(0)),
        );
        assert_eq!(first.handle(), 0);
        drop(first);

        // handles are not reused, and the fresh core is fully functional
        let second: HashedDistribution = DistributionCore::new(
            config,
            Arc::new(transport.channel(0)),
        );
        assert_eq!(second.handle(), 1);
        second.add_to_location_map(0, Location::new(0, 0));
        assert_eq!(second.lookup(0), Location::new(0, 0));
    }
}
