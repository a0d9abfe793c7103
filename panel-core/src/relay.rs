use std::rc::Rc;

use tracing::{info, warn};

use crate::controller::{decode, encode};
use crate::error::PanelError;
use crate::model::{CommandBody, CommandPayload};
use crate::transport::{Method, Transport};

pub const COMMAND_PATH: &str = "/command";

/// Daemon verb that switches the active profile.
pub const LOAD_PROFILE_VERB: &str = "load-profile";

/// Free-form command channel to the daemon. Holds no state between calls.
pub struct CommandRelay<T> {
    transport: Rc<T>,
}

impl<T> Clone for CommandRelay<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
        }
    }
}

impl<T: Transport> CommandRelay<T> {
    pub fn new(transport: Rc<T>) -> Self {
        Self { transport }
    }

    /// Relay `cmd` and return the daemon's raw reply text.
    pub async fn send(&self, cmd: &str) -> Result<String, PanelError> {
        info!("Relaying command: {}", cmd);
        let body = encode(&CommandBody { cmd })?;
        let raw = self
            .transport
            .call(COMMAND_PATH, Method::Post, Some(body))
            .await?;

        let result = decode::<CommandPayload>(raw)?;
        if !result.ok {
            let message = result.error_message();
            warn!("Command '{}' rejected: {}", cmd, message);
            return Err(PanelError::CommandRejected {
                command: command_verb(cmd).to_string(),
                message,
            });
        }
        Ok(result.data.resp.unwrap_or_default())
    }

    pub async fn load_profile(&self, name: &str) -> Result<String, PanelError> {
        self.send(&load_profile_command(name)).await
    }
}

pub fn load_profile_command(name: &str) -> String {
    format!("{} {}", LOAD_PROFILE_VERB, name)
}

fn command_verb(cmd: &str) -> &str {
    cmd.split_whitespace().next().unwrap_or(cmd)
}
