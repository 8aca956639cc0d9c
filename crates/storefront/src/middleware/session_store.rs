//! Bounded in-memory session store.
//!
//! Sessions are held in a `moka` cache. Each record is evicted when its own
//! expiry date passes, and the cache never holds more than its capacity, so
//! abandoned carts cannot accumulate for the life of the process.

use std::fmt;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::{Expiry, future::Cache};
use tower_sessions::cookie::time::OffsetDateTime;
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store::{self, SessionStore};

/// Session store backed by a capacity-bounded `moka` cache.
#[derive(Clone)]
pub struct CartSessionStore {
    cache: Cache<Id, Record>,
}

/// Expires each cached record at its session's expiry date.
struct RecordExpiry;

impl RecordExpiry {
    fn remaining(record: &Record) -> Duration {
        Duration::try_from(record.expiry_date - OffsetDateTime::now_utc()).unwrap_or(Duration::ZERO)
    }
}

impl Expiry<Id, Record> for RecordExpiry {
    fn expire_after_create(&self, _id: &Id, record: &Record, _created_at: Instant) -> Option<Duration> {
        Some(Self::remaining(record))
    }

    fn expire_after_update(
        &self,
        _id: &Id,
        record: &Record,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(Self::remaining(record))
    }
}

impl CartSessionStore {
    /// Create a store holding at most `max_sessions` sessions.
    #[must_use]
    pub fn new(max_sessions: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_sessions)
            .expire_after(RecordExpiry)
            .build();

        Self { cache }
    }
}

impl fmt::Debug for CartSessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartSessionStore")
            .field("sessions", &self.cache.entry_count())
            .finish()
    }
}

#[async_trait]
impl SessionStore for CartSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        while self.cache.contains_key(&record.id) {
            record.id = Id::default();
        }
        self.cache.insert(record.id, record.clone()).await;
        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.cache.insert(record.id, record.clone()).await;
        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        Ok(self
            .cache
            .get(session_id)
            .await
            .filter(|record| record.expiry_date > OffsetDateTime::now_utc()))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.cache.invalidate(session_id).await;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tower_sessions::cookie::time::Duration as TimeDuration;

    use super::*;

    fn record(expires_in: TimeDuration) -> Record {
        Record {
            id: Id::default(),
            data: std::collections::HashMap::default(),
            expiry_date: OffsetDateTime::now_utc() + expires_in,
        }
    }

    #[tokio::test]
    async fn test_live_session_round_trip() {
        let store = CartSessionStore::new(10);
        let mut live = record(TimeDuration::hours(1));

        store.create(&mut live).await.unwrap();
        assert_eq!(store.load(&live.id).await.unwrap(), Some(live.clone()));

        store.delete(&live.id).await.unwrap();
        assert_eq!(store.load(&live.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_sessions_are_evicted() {
        let store = CartSessionStore::new(10_000);
        let mut ids = Vec::new();
        for _ in 0..1_000 {
            let stale = record(TimeDuration::days(-1));
            store.save(&stale).await.unwrap();
            ids.push(stale.id);
        }

        store.cache.run_pending_tasks().await;

        assert_eq!(store.cache.entry_count(), 0);
        for id in &ids {
            assert_eq!(store.load(id).await.unwrap(), None);
        }
    }

    #[tokio::test]
    async fn test_capacity_bounds_held_sessions() {
        let store = CartSessionStore::new(50);
        for _ in 0..1_000 {
            store.save(&record(TimeDuration::hours(1))).await.unwrap();
        }

        store.cache.run_pending_tasks().await;

        assert!(store.cache.entry_count() <= 50);
    }
}
