//! Plan cache: memoizes plan lookups for the lifetime of a client.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, PoisonError};

use crate::domain::{Plan, PlanId};

/// Plan id to [`Plan`] store, shared by all clones of a client.
///
/// Entries are never evicted. The lock is only held for lookups and inserts,
/// never across the fetch, so two concurrent misses for the same id may both
/// fetch; the first stored value wins.
#[derive(Debug, Default)]
pub(crate) struct PlanCache {
    entries: Mutex<HashMap<PlanId, Plan>>,
}

impl PlanCache {
    /// Return the cached plan for `id`, or run `fetch` and remember its result.
    ///
    /// A failed fetch stores nothing.
    pub(crate) async fn get_or_fetch<F, Fut, E>(&self, id: PlanId, fetch: F) -> Result<Plan, E>
    where
        F: FnOnce(PlanId) -> Fut,
        Fut: Future<Output = Result<Plan, E>>,
    {
        if let Some(plan) = self.lookup(id) {
            tracing::debug!(plan_id = %id, "plan cache hit");
            return Ok(plan);
        }

        tracing::debug!(plan_id = %id, "plan cache miss");
        let plan = fetch(id).await?;
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.entry(id).or_insert(plan).clone())
    }

    fn lookup(&self, id: PlanId) -> Option<Plan> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn plan(id: u64) -> Plan {
        Plan {
            id: PlanId::new(id),
            name: format!("plan-{id}"),
            vcpu_count: 1,
            ram: 1024,
            disk: 25,
            bandwidth: "1.00".to_owned(),
            price_per_month: "5.00".to_owned(),
            windows: false,
            plan_type: None,
            available_locations: Vec::new(),
        }
    }

    #[tokio::test]
    async fn same_id_fetches_once() {
        let cache = PlanCache::default();
        let calls = AtomicUsize::new(0);
        let fetch = |id: PlanId| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<_, ()>(plan(id.value())) }
        };

        let first = cache.get_or_fetch(PlanId::new(201), fetch).await.unwrap();
        let second = cache.get_or_fetch(PlanId::new(201), fetch).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn different_ids_fetch_separately() {
        let cache = PlanCache::default();
        let calls = AtomicUsize::new(0);
        let fetch = |id: PlanId| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<_, ()>(plan(id.value())) }
        };

        let first = cache.get_or_fetch(PlanId::new(201), fetch).await.unwrap();
        let second = cache.get_or_fetch(PlanId::new(202), fetch).await.unwrap();

        assert_eq!(first.id, PlanId::new(201));
        assert_eq!(second.id, PlanId::new(202));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_fetch_is_not_cached() {
        let cache = PlanCache::default();

        let err = cache
            .get_or_fetch(PlanId::new(7), |_| async { Err::<Plan, _>("offline") })
            .await
            .unwrap_err();
        assert_eq!(err, "offline");

        let found = cache
            .get_or_fetch(PlanId::new(7), |id| async move {
                Ok::<_, &str>(plan(id.value()))
            })
            .await
            .unwrap();
        assert_eq!(found.id, PlanId::new(7));
    }
}
