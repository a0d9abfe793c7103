use serde::{Deserialize, Serialize};

/// A named daemon configuration as the server last reported it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub content: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Case-insensitive substring match on name or content.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
    }
}

/// Server-ordered snapshot of every profile.
pub type ProfileList = Vec<Profile>;

/// The `{ ok, error?, ...payload }` envelope every endpoint answers with.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResult<T> {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResult<T> {
    /// Server message for a failed call, `unknown` when the server gave none.
    pub fn error_message(&self) -> String {
        self.error
            .clone()
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Payload of `GET /profiles`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilesPayload {
    #[serde(default)]
    pub profiles: ProfileList,
}

/// Payload of `POST /command`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandPayload {
    #[serde(default)]
    pub resp: Option<String>,
}

/// Payload of the mutation endpoints, which carry nothing beyond the envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ack {}

pub type CommandResult = ApiResult<CommandPayload>;

// -- Request bodies --

#[derive(Debug, Serialize)]
pub struct CreateProfileBody<'a> {
    pub name: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateProfileBody<'a> {
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CommandBody<'a> {
    pub cmd: &'a str,
}
