//! In-process identity store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::identity_repository::{IdentityRepository, StoreError};
use domain::Identity;

/// Identity store kept in memory, with the same email uniqueness rule as
/// the database schema. Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryIdentityStore {
    identities: RwLock<HashMap<Uuid, Identity>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored identities.
    pub async fn len(&self) -> usize {
        self.identities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.identities.read().await.is_empty()
    }
}

fn email_taken_by_other(map: &HashMap<Uuid, Identity>, identity: &Identity) -> bool {
    map.values()
        .any(|stored| stored.email() == identity.email() && stored.id() != identity.id())
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityStore {
    async fn save(&self, identity: &Identity) -> Result<(), StoreError> {
        let mut map = self.identities.write().await;
        if email_taken_by_other(&map, identity) {
            return Err(StoreError::DuplicateEmail);
        }
        map.insert(identity.id(), identity.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Identity>, StoreError> {
        Ok(self.identities.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError> {
        Ok(self
            .identities
            .read()
            .await
            .values()
            .find(|identity| identity.email() == email)
            .cloned())
    }

    async fn update(&self, identity: &Identity) -> Result<(), StoreError> {
        let mut map = self.identities.write().await;
        if email_taken_by_other(&map, identity) {
            return Err(StoreError::DuplicateEmail);
        }
        if let Some(stored) = map.get_mut(&identity.id()) {
            *stored = identity.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.identities.write().await.remove(&id);
        Ok(())
    }
}
