use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::models::ClientProfile;

/// Shareable in-memory profile store for use across async handlers
///
/// Every operation takes the lock exactly once, so a read-modify-write done
/// through [`ProfileStore::update`] cannot interleave with another request.
#[derive(Clone, Default)]
pub struct ProfileStore {
    inner: Arc<Mutex<HashMap<String, ClientProfile>>>,
}

impl ProfileStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the two fixed seed profiles
    pub fn seeded() -> Self {
        Self::from_profiles(seed_profiles())
    }

    /// Create a store keyed by each profile's id
    pub fn from_profiles(profiles: impl IntoIterator<Item = ClientProfile>) -> Self {
        let map = profiles
            .into_iter()
            .map(|profile| (profile.id.clone(), profile))
            .collect();
        Self {
            inner: Arc::new(Mutex::new(map)),
        }
    }

    /// Read a profile by id, returning a copy
    pub async fn get(&self, id: &str) -> Option<ClientProfile> {
        self.inner.lock().await.get(id).cloned()
    }

    /// Insert or replace the full record under `id`
    pub async fn set(&self, id: &str, profile: ClientProfile) {
        self.inner.lock().await.insert(id.to_string(), profile);
        tracing::debug!("Stored profile with id: {}", id);
    }

    /// Remove a profile, returning whether it existed
    pub async fn delete(&self, id: &str) -> bool {
        let removed = self.inner.lock().await.remove(id).is_some();
        tracing::debug!("Delete profile with id: {} (existed: {})", id, removed);
        removed
    }

    /// Run `f` against the stored profile while holding the lock
    ///
    /// # Returns
    /// * `Some(r)` - Profile found, `f` returned `r`
    /// * `None` - No profile under `id`; `f` is not called
    pub async fn update<R>(&self, id: &str, f: impl FnOnce(&mut ClientProfile) -> R) -> Option<R> {
        let mut profiles = self.inner.lock().await;
        profiles.get_mut(id).map(f)
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}

/// Profiles present at process start
pub fn seed_profiles() -> Vec<ClientProfile> {
    vec![
        ClientProfile::new("user1", "User One", "email1@gmail.com", "123"),
        ClientProfile::new("user2", "User Two", "email2@gmail.com", "456"),
    ]
}
