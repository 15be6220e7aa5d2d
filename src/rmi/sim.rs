use crate::id::ProcessId;
use crate::rmi::{ObjectId, Reply, Request, RmiChannel, RmiHandler};
use crate::HashMap;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// Deterministic in-process transport shared by all simulated participants.
///
/// Synchronous calls are delivered immediately; asynchronous calls queue up
/// in arrival order and are applied by `fence`. The transport is driven by a
/// single thread, so the barrier half of `fence` is trivially satisfied and
/// only the delivery guarantee needs work. Every payload round-trips through
/// `bincode`, as it would on a real wire.
pub struct SimTransport {
    n: usize,
    inner: Mutex<Inner>,
}

struct Inner {
    // registered handlers, keyed by (process, object)
    handlers: HashMap<(ProcessId, ObjectId), Arc<Mutex<dyn RmiHandler>>>,
    // next object id, per process
    next_object: HashMap<ProcessId, ObjectId>,
    // async calls not yet applied, in arrival order, already encoded
    pending: VecDeque<(ProcessId, ObjectId, Vec<u8>)>,
}

impl SimTransport {
    /// Creates a transport for `n` processes.
    pub fn new(n: usize) -> Arc<Self> {
        assert!(n > 0, "the system needs at least one process");
        Arc::new(Self {
            n,
            inner: Mutex::new(Inner {
                handlers: HashMap::new(),
                next_object: HashMap::new(),
                pending: VecDeque::new(),
            }),
        })
    }

    /// Returns the channel endpoint of `process_id`.
    pub fn channel(self: &Arc<Self>, process_id: ProcessId) -> SimChannel {
        assert!(
            (process_id as usize) < self.n,
            "process {} does not exist in a system with {} processes",
            process_id,
            self.n
        );
        SimChannel {
            process_id,
            transport: Arc::clone(self),
        }
    }

    fn handler(
        &self,
        target: ProcessId,
        object: ObjectId,
    ) -> Arc<Mutex<dyn RmiHandler>> {
        let inner = self.inner.lock();
        inner
            .handlers
            .get(&(target, object))
            .unwrap_or_else(|| {
                panic!(
                    "object {} should have been registered on process {}",
                    object, target
                )
            })
            .clone()
    }

    fn deliver(&self, target: ProcessId, object: ObjectId, bytes: &[u8]) -> Reply {
        let request: Request = bincode::deserialize(bytes)
            .expect("requests should deserialize on delivery");
        let handler = self.handler(target, object);
        let mut handler = handler.lock();
        handler.handle(request)
    }

    fn drain(&self) {
        // deliveries never enqueue further async calls in this subsystem,
        // but loop anyway so the fence guarantee holds if they ever do
        loop {
            let batch: Vec<_> = {
                let mut inner = self.inner.lock();
                inner.pending.drain(..).collect()
            };
            if batch.is_empty() {
                return;
            }
            for (target, object, bytes) in batch {
                self.deliver(target, object, &bytes);
            }
        }
    }
}

/// Per-process endpoint of a `SimTransport`.
#[derive(Clone)]
pub struct SimChannel {
    process_id: ProcessId,
    transport: Arc<SimTransport>,
}

impl RmiChannel for SimChannel {
    fn process_id(&self) -> ProcessId {
        self.process_id
    }

    fn processes(&self) -> usize {
        self.transport.n
    }

    fn register(&self, handler: Arc<Mutex<dyn RmiHandler>>) -> ObjectId {
        let mut inner = self.transport.inner.lock();
        let object = {
            let next = inner.next_object.entry(self.process_id).or_insert(0);
            let object = *next;
            *next += 1;
            object
        };
        let res = inner.handlers.insert((self.process_id, object), handler);
        assert!(res.is_none());
        object
    }

    fn unregister(&self, object: ObjectId) {
        let mut inner = self.transport.inner.lock();
        inner.handlers.remove(&(self.process_id, object));
    }

    fn sync_call(
        &self,
        target: ProcessId,
        object: ObjectId,
        request: Request,
    ) -> Reply {
        let bytes = bincode::serialize(&request)
            .expect("requests should serialize");
        self.transport.deliver(target, object, &bytes)
    }

    fn async_call(
        &self,
        target: ProcessId,
        object: ObjectId,
        request: Request,
    ) {
        let bytes = bincode::serialize(&request)
            .expect("requests should serialize");
        let mut inner = self.transport.inner.lock();
        inner.pending.push_back((target, object, bytes));
    }

    fn fence(&self) {
        self.transport.drain();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{Gid, Location};

    // toy handler recording every request it sees
    #[derive(Default)]
    struct Recorder {
        seen: Vec<Request>,
    }

    impl RmiHandler for Recorder {
        fn handle(&mut self, request: Request) -> Reply {
            let reply = match request {
                Request::Lookup(gid) => {
                    Reply::Location(Location::new(gid as u32, 0))
                }
                _ => Reply::Ack,
            };
            self.seen.push(request);
            reply
        }
    }

    fn register(
        transport: &Arc<SimTransport>,
        process_id: ProcessId,
    ) -> (SimChannel, ObjectId, Arc<Mutex<Recorder>>) {
        let channel = transport.channel(process_id);
        let recorder = Arc::new(Mutex::new(Recorder::default()));
        let object = channel.register(recorder.clone());
        (channel, object, recorder)
    }

    #[test]
    fn sync_call_delivers_immediately() {
        let transport = SimTransport::new(2);
        let (channel_0, _, _) = register(&transport, 0);
        let (_, object_1, recorder_1) = register(&transport, 1);

        let reply = channel_0.sync_call(1, object_1, Request::Lookup(3));
        assert_eq!(reply, Reply::Location(Location::new(3, 0)));
        assert_eq!(recorder_1.lock().seen, vec![Request::Lookup(3)]);
    }

    #[test]
    fn async_calls_wait_for_fence() {
        let transport = SimTransport::new(2);
        let (channel_0, _, _) = register(&transport, 0);
        let (_, object_1, recorder_1) = register(&transport, 1);

        let location = Location::new(0, 0);
        channel_0.async_call(1, object_1, Request::Add(1, location));
        channel_0.async_call(1, object_1, Request::Add(2, location));

        // nothing applied before the fence
        assert!(recorder_1.lock().seen.is_empty());

        channel_0.fence();

        // applied in arrival order
        assert_eq!(
            recorder_1.lock().seen,
            vec![Request::Add(1, location), Request::Add(2, location)]
        );
    }

    #[test]
    fn object_ids_follow_registration_order() {
        let transport = SimTransport::new(2);
        let channel_0 = transport.channel(0);
        let channel_1 = transport.channel(1);

        // symmetric registration yields matching ids on every process
        for expected in 0..3 as ObjectId {
            let object_0 = channel_0
                .register(Arc::new(Mutex::new(Recorder::default())));
            let object_1 = channel_1
                .register(Arc::new(Mutex::new(Recorder::default())));
            assert_eq!(object_0, expected);
            assert_eq!(object_1, expected);
        }
    }

    #[test]
    fn unregister_frees_the_object() {
        let transport = SimTransport::new(1);
        let (channel, object, _) = register(&transport, 0);
        channel.unregister(object);
        assert!(transport
            .inner
            .lock()
            .handlers
            .get(&(0, object))
            .is_none());
    }

    #[test]
    fn requests_serialize() {
        let gid: Gid = 42;
        let requests = vec![
            Request::Lookup(gid),
            Request::Add(gid, Location::new(1, 2)),
            Request::Update(gid, Location::invalid()),
            Request::Delete(gid),
        ];
        for request in requests {
            let bytes = bincode::serialize(&request).unwrap();
            let back: Request = bincode::deserialize(&bytes).unwrap();
            assert_eq!(request, back);
        }
    }
}
