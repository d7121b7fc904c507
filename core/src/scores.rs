//! Best-effort glue to the external user score store. Persistence is never
//! required for gameplay to proceed: reads degrade to zero, failed writes are
//! logged and forgotten.

use slovito_protocol::UserRecord;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("user store unavailable: {0}")]
pub struct StoreError(pub String);

/// The persistence boundary the core consumes: a keyed record store behind
/// some transport. Idempotent-enough, last write wins.
pub trait UserStore {
    fn get_user(&self, name: &str) -> Result<Option<UserRecord>, StoreError>;
    fn put_user(&mut self, name: &str, record: &UserRecord) -> Result<(), StoreError>;
}

/// In-memory reference implementation, also the test double.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserStore {
    users: hashbrown::HashMap<String, UserRecord>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryUserStore {
    fn get_user(&self, name: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.get(name).cloned())
    }

    fn put_user(&mut self, name: &str, record: &UserRecord) -> Result<(), StoreError> {
        self.users.insert(name.to_owned(), record.clone());
        Ok(())
    }
}

/// Applies round score deltas to a user's persisted total.
#[derive(Clone, Debug, Default)]
pub struct ScoreSync<S> {
    store: S,
}

impl<S: UserStore> ScoreSync<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// The user's persisted total; missing users and store failures both read
    /// as zero.
    pub fn total_score(&self, name: &str) -> u64 {
        match self.store.get_user(name) {
            Ok(Some(record)) => record.total_score,
            Ok(None) => 0,
            Err(err) => {
                log::warn!("score lookup failed for {name:?}: {err}");
                0
            }
        }
    }

    /// Read-modify-write of the user's total. Returns the new local total
    /// even when the write did not stick; no retries.
    pub fn add_score(&mut self, name: &str, delta: u64) -> u64 {
        let total = self.total_score(name).saturating_add(delta);
        if let Err(err) = self.store.put_user(name, &UserRecord::new(total)) {
            log::warn!("score update failed for {name:?}: {err}");
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl UserStore for FailingStore {
        fn get_user(&self, _name: &str) -> Result<Option<UserRecord>, StoreError> {
            Err(StoreError("connection refused".to_string()))
        }

        fn put_user(&mut self, _name: &str, _record: &UserRecord) -> Result<(), StoreError> {
            Err(StoreError("connection refused".to_string()))
        }
    }

    #[test]
    fn scores_accumulate_across_rounds() {
        let mut sync = ScoreSync::new(MemoryUserStore::new());
        assert_eq!(sync.total_score("аня"), 0);

        assert_eq!(sync.add_score("аня", 12), 12);
        assert_eq!(sync.add_score("аня", 5), 17);
        assert_eq!(sync.total_score("аня"), 17);
        assert_eq!(sync.total_score("борис"), 0);
    }

    #[test]
    fn store_failures_degrade_to_defaults() {
        let mut sync = ScoreSync::new(FailingStore);
        assert_eq!(sync.total_score("аня"), 0);
        // The local total is still reported; the write is simply lost.
        assert_eq!(sync.add_score("аня", 9), 9);
    }
}
