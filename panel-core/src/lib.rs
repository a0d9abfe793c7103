pub mod binder;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod relay;
pub mod store;
pub mod transport;

pub use binder::{Control, Field, PanelSurface, ProfileRow, UiEvent, ViewBinder};
pub use config::{ElementIds, PanelConfig};
pub use controller::{ConfirmGate, DeleteOutcome, ProfileController};
pub use error::{PanelError, TransportError};
pub use model::{ApiResult, CommandResult, Profile, ProfileList};
pub use relay::CommandRelay;
pub use store::ProfileStore;
pub use transport::{HttpTransport, Method, Transport};
