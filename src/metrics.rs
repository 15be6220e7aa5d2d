use crate::HashMap;
use std::fmt;
use std::hash::Hash;

/// Aggregated counters keyed by kind.
#[derive(Clone)]
pub struct Metrics<K, V> {
    aggregated: HashMap<K, V>,
}

impl<K, V> Metrics<K, V>
where
    K: Hash + Eq,
    V: Default,
{
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            aggregated: HashMap::new(),
        }
    }

    pub fn aggregate<F>(&mut self, kind: K, update: F)
    where
        F: FnOnce(&mut V),
    {
        let current = self.aggregated.entry(kind).or_insert_with(V::default);
        update(current);
    }

    pub fn get_aggregated(&self, kind: K) -> Option<&V> {
        self.aggregated.get(&kind)
    }
}

impl<K, V> fmt::Debug for Metrics<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, value) in self.aggregated.iter() {
            writeln!(f, "{:?}: {:?}", kind, value)?;
        }
        Ok(())
    }
}

/// What the distribution layer counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionMetricsKind {
    /// lookups answered straight from the local cache
    CacheHit,
    /// lookups answered by the local authoritative map
    LocalLookup,
    /// lookups that needed a remote round trip
    RemoteLookup,
    /// add/update/delete shipped to a remote owner
    RemoteMutation,
}

pub type DistributionMetrics = Metrics<DistributionMetricsKind, u64>;
