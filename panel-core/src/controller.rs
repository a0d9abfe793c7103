use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{PanelError, TransportError};
use crate::model::{
    Ack, ApiResult, CreateProfileBody, ProfileList, ProfilesPayload, UpdateProfileBody,
};
use crate::store::ProfileStore;
use crate::transport::{Method, Transport};

pub const PROFILES_PATH: &str = "/profiles";

/// Yes/no gate asked before irreversible actions.
#[async_trait(?Send)]
pub trait ConfirmGate {
    async fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

/// Path of a single profile resource, with `name` percent-encoded.
pub fn profile_path(name: &str) -> String {
    format!("{}/{}", PROFILES_PATH, urlencoding::encode(name))
}

/// Trimmed profile name, or a validation error when nothing is left.
pub fn require_name(name: &str) -> Result<&str, PanelError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PanelError::Validation("Enter profile filename".to_string()));
    }
    Ok(name)
}

pub(crate) fn encode<B: Serialize>(body: &B) -> Result<Value, PanelError> {
    serde_json::to_value(body).map_err(|e| TransportError::Encode(e.to_string()).into())
}

pub(crate) fn decode<T: DeserializeOwned>(raw: Value) -> Result<ApiResult<T>, PanelError> {
    serde_json::from_value(raw).map_err(|e| TransportError::Decode(e.to_string()).into())
}

/// Profile CRUD against the server. The store is only ever replaced from a
/// completed fetch; mutations resync instead of editing it.
pub struct ProfileController<T> {
    transport: Rc<T>,
    store: Rc<ProfileStore>,
}

impl<T> Clone for ProfileController<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
            store: Rc::clone(&self.store),
        }
    }
}

impl<T: Transport> ProfileController<T> {
    pub fn new(transport: Rc<T>, store: Rc<ProfileStore>) -> Self {
        Self { transport, store }
    }

    pub fn store(&self) -> &Rc<ProfileStore> {
        &self.store
    }

    pub async fn fetch_all(&self) -> Result<ProfileList, PanelError> {
        let raw = self.transport.call(PROFILES_PATH, Method::Get, None).await?;
        let result: ApiResult<ProfilesPayload> = decode(raw)?;
        if !result.ok {
            let message = result.error_message();
            warn!("Profile list fetch rejected: {}", message);
            return Err(PanelError::LoadFailed(message));
        }

        let profiles = result.data.profiles;
        info!("Loaded {} profiles", profiles.len());
        self.store.replace(profiles.clone());
        Ok(profiles)
    }

    pub async fn create(&self, name: &str, content: &str) -> Result<ProfileList, PanelError> {
        let name = require_name(name)?;
        let body = encode(&CreateProfileBody { name, content })?;

        self.mutate(PROFILES_PATH, Method::Post, Some(body)).await?;
        info!("Created profile '{}'", name);
        self.fetch_all().await
    }

    pub async fn save(&self, name: &str, content: &str) -> Result<ProfileList, PanelError> {
        let name = require_name(name)?;
        let body = encode(&UpdateProfileBody { content })?;

        self.mutate(&profile_path(name), Method::Put, Some(body)).await?;
        info!("Saved profile '{}'", name);
        self.fetch_all().await
    }

    /// Deletes after `gate` agrees, then resyncs. A declined gate sends
    /// nothing and leaves the store as it was.
    ///
    /// An error here may come from the resync after the server already
    /// removed the profile; callers that must react to the removal itself
    /// use [`remove`](Self::remove).
    pub async fn delete(
        &self,
        name: &str,
        gate: &dyn ConfirmGate,
    ) -> Result<DeleteOutcome, PanelError> {
        let outcome = self.remove(name, gate).await?;
        if outcome == DeleteOutcome::Deleted {
            self.fetch_all().await?;
        }
        Ok(outcome)
    }

    /// Confirm and send the DELETE without resyncing. `Deleted` means the
    /// server accepted it.
    pub async fn remove(
        &self,
        name: &str,
        gate: &dyn ConfirmGate,
    ) -> Result<DeleteOutcome, PanelError> {
        let name = require_name(name)?;
        if !gate.confirm(&format!("Delete profile {} ?", name)).await {
            info!("Delete of '{}' declined", name);
            return Ok(DeleteOutcome::Declined);
        }

        self.mutate(&profile_path(name), Method::Delete, None).await?;
        info!("Deleted profile '{}'", name);
        Ok(DeleteOutcome::Deleted)
    }

    /// Client-side view of the cached snapshot; never touches the network.
    pub fn filter_view(&self, query: &str) -> ProfileList {
        self.store.filtered(query)
    }

    async fn mutate(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<(), PanelError> {
        let raw = self.transport.call(path, method, body).await?;
        let result: ApiResult<Ack> = decode(raw)?;
        if result.ok {
            Ok(())
        } else {
            let message = result.error_message();
            warn!("{} {} rejected: {}", method, path, message);
            Err(PanelError::Server(message))
        }
    }
}
