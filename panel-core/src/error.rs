use thiserror::Error;

/// Failures below the API envelope: the request never produced a JSON body.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Connection failed: request timed out")]
    Timeout,

    #[error("Connection failed: malformed response ({0})")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(String),

    #[error("Invalid API address '{0}'")]
    InvalidUrl(String),
}

#[derive(Debug, Error)]
pub enum PanelError {
    /// Rejected locally, no request was sent.
    #[error("{0}")]
    Validation(String),

    /// The server answered `ok: false`.
    #[error("Error: {0}")]
    Server(String),

    /// The daemon refused a relayed command.
    #[error("Error sending {command}: {message}")]
    CommandRejected { command: String, message: String },

    /// The profile list could not be fetched; the cache is left as it was.
    #[error("Failed to load profiles: {0}")]
    LoadFailed(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl From<PanelError> for String {
    fn from(err: PanelError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_is_prefixed() {
        let err = PanelError::Server("profile exists".to_string());
        assert_eq!(String::from(err), "Error: profile exists");
    }

    #[test]
    fn test_command_rejection_names_the_verb() {
        let err = PanelError::CommandRejected {
            command: "load-profile".to_string(),
            message: "profile not found".to_string(),
        };
        assert_eq!(err.to_string(), "Error sending load-profile: profile not found");
    }

    #[test]
    fn test_transport_errors_read_as_connection_failures() {
        let err: PanelError = TransportError::Timeout.into();
        assert!(err.to_string().starts_with("Connection failed"));

        let err: PanelError = TransportError::Decode("expected value".to_string()).into();
        assert!(err.to_string().starts_with("Connection failed"));
    }
}
