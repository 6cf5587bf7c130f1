//! Session identity store
//!
//! The identity is a bare label chosen at login and kept under
//! [`KEY_USERNAME`] in ephemeral storage. It is never verified: it scopes which
//! videos are fetched and drives the owner-only edit affordance, nothing more.

use std::sync::Arc;

use tracing::{info, warn};

use vidsync_core::domain::UserId;
use vidsync_core::ports::{IClientStorage, KEY_USERNAME};

use crate::CacheError;

/// Reads and writes the signed-in user label
#[derive(Clone)]
pub struct IdentityStore {
    storage: Arc<dyn IClientStorage>,
}

impl IdentityStore {
    pub fn new(storage: Arc<dyn IClientStorage>) -> Self {
        Self { storage }
    }

    /// Signs in as `name`, trimmed
    ///
    /// # Errors
    /// `CacheError::InvalidInput` for a blank name, `CacheError::StorageFailed`
    /// if the label cannot be stored.
    pub async fn login(&self, name: &str) -> Result<UserId, CacheError> {
        let user = UserId::new(name)?;
        self.storage
            .set(KEY_USERNAME, user.as_str())
            .await
            .map_err(|e| CacheError::StorageFailed(e.to_string()))?;
        info!(user = %user, "Signed in");
        Ok(user)
    }

    /// The signed-in user, if any
    pub async fn current(&self) -> Result<Option<UserId>, CacheError> {
        let stored = self
            .storage
            .get(KEY_USERNAME)
            .await
            .map_err(|e| CacheError::StorageFailed(e.to_string()))?;
        Ok(stored.and_then(|name| UserId::new(name).ok()))
    }

    /// The signed-in user, or the `anonymous` label
    pub async fn current_or_anonymous(&self) -> UserId {
        match self.current().await {
            Ok(Some(user)) => user,
            Ok(None) => UserId::anonymous(),
            Err(e) => {
                warn!(error = %e, "Could not read session identity, using anonymous");
                UserId::anonymous()
            }
        }
    }

    /// Signs out, clearing the stored label
    pub async fn logout(&self) -> Result<(), CacheError> {
        self.storage
            .remove(KEY_USERNAME)
            .await
            .map_err(|e| CacheError::StorageFailed(e.to_string()))?;
        info!("Signed out");
        Ok(())
    }
}
