use std::rc::Rc;

use tracing::{info, warn};

use crate::controller::{ConfirmGate, DeleteOutcome, ProfileController};
use crate::error::PanelError;
use crate::model::Profile;
use crate::relay::CommandRelay;
use crate::store::ProfileStore;
use crate::transport::Transport;

/// Text inputs the binder reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Filter,
    Name,
    Content,
    Command,
}

/// Buttons, each bound to exactly one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Refresh,
    Create,
    Save,
    Delete,
    Load,
    SendCommand,
    ClearFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Clicked(Control),
    /// The filter text changed; re-filter the cached list.
    FilterEdited,
    /// Enter in the filter box; re-fetch from the server.
    FilterSubmitted,
    RowSelected(Profile),
    RowLoadRequested(String),
    QuickCommand(String),
}

/// One rendered list entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileRow {
    pub name: String,
    pub content: String,
    pub preview: Vec<String>,
}

impl From<Profile> for ProfileRow {
    fn from(profile: Profile) -> Self {
        let preview = profile.content.lines().map(str::to_string).collect();
        Self {
            name: profile.name,
            content: profile.content,
            preview,
        }
    }
}

impl ProfileRow {
    pub fn profile(&self) -> Profile {
        Profile::new(self.name.clone(), self.content.clone())
    }
}

/// The page the binder drives: named fields, a list container, a status
/// line, blocking notifications and a confirmation prompt.
pub trait PanelSurface: ConfirmGate {
    fn value(&self, field: Field) -> String;
    fn set_value(&self, field: Field, value: &str);
    fn show_rows(&self, rows: Vec<ProfileRow>);
    fn show_status(&self, text: &str);
    fn notify(&self, message: &str);
}

/// Wires surface events to the profile controller and command relay, and
/// rebuilds the list from the store after every successful sync.
pub struct ViewBinder<T, S> {
    controller: ProfileController<T>,
    relay: CommandRelay<T>,
    surface: S,
}

impl<T: Transport, S: PanelSurface> ViewBinder<T, S> {
    pub fn new(transport: T, surface: S) -> Self {
        let transport = Rc::new(transport);
        let store = Rc::new(ProfileStore::new());
        Self {
            controller: ProfileController::new(Rc::clone(&transport), store),
            relay: CommandRelay::new(transport),
            surface,
        }
    }

    pub fn controller(&self) -> &ProfileController<T> {
        &self.controller
    }

    pub fn relay(&self) -> &CommandRelay<T> {
        &self.relay
    }

    pub fn store(&self) -> &Rc<ProfileStore> {
        self.controller.store()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Rows for the current store snapshot and filter text.
    pub fn rows(&self) -> Vec<ProfileRow> {
        self.controller
            .filter_view(&self.surface.value(Field::Filter))
            .into_iter()
            .map(ProfileRow::from)
            .collect()
    }

    pub fn render(&self) {
        self.surface.show_rows(self.rows());
    }

    /// Initial load when the page comes up.
    pub async fn start(&self) {
        self.handle(UiEvent::Clicked(Control::Refresh)).await;
    }

    /// Run the operation bound to `event`. Failures end here: they are
    /// logged and shown to the user, never retried.
    pub async fn handle(&self, event: UiEvent) {
        let result = match event {
            UiEvent::Clicked(Control::Refresh) | UiEvent::FilterSubmitted => {
                self.refresh().await
            }
            UiEvent::Clicked(Control::Create) => self.create().await,
            UiEvent::Clicked(Control::Save) => self.save().await,
            UiEvent::Clicked(Control::Delete) => self.delete().await,
            UiEvent::Clicked(Control::Load) => {
                let name = self.surface.value(Field::Name);
                self.load(name.trim()).await
            }
            UiEvent::Clicked(Control::SendCommand) => {
                let cmd = self.surface.value(Field::Command);
                self.send(cmd.trim()).await
            }
            UiEvent::Clicked(Control::ClearFilter) => {
                self.surface.set_value(Field::Filter, "");
                self.refresh().await
            }
            UiEvent::FilterEdited => {
                self.render();
                Ok(())
            }
            UiEvent::RowSelected(profile) => {
                self.surface.set_value(Field::Name, &profile.name);
                self.surface.set_value(Field::Content, &profile.content);
                Ok(())
            }
            UiEvent::RowLoadRequested(name) => self.load(&name).await,
            UiEvent::QuickCommand(cmd) => self.send(cmd.trim()).await,
        };

        if let Err(err) = result {
            warn!("{}", err);
            self.surface.notify(&err.to_string());
        }
    }

    async fn refresh(&self) -> Result<(), PanelError> {
        self.controller.fetch_all().await?;
        self.render();
        Ok(())
    }

    async fn create(&self) -> Result<(), PanelError> {
        let name = self.surface.value(Field::Name);
        let content = self.surface.value(Field::Content);
        self.controller.create(&name, &content).await?;
        self.render();
        Ok(())
    }

    async fn save(&self) -> Result<(), PanelError> {
        let name = self.surface.value(Field::Name);
        let content = self.surface.value(Field::Content);
        self.controller.save(&name, &content).await?;
        self.render();
        Ok(())
    }

    async fn delete(&self) -> Result<(), PanelError> {
        let name = self.surface.value(Field::Name);
        match self.controller.remove(&name, &self.surface).await? {
            // The profile is gone server-side; clear it even if the resync fails.
            DeleteOutcome::Deleted => {
                self.surface.set_value(Field::Name, "");
                self.surface.set_value(Field::Content, "");
                self.refresh().await?;
            }
            DeleteOutcome::Declined => {}
        }
        Ok(())
    }

    async fn load(&self, name: &str) -> Result<(), PanelError> {
        if name.is_empty() {
            return Ok(());
        }
        let resp = self.relay.load_profile(name).await?;
        info!("Daemon loaded '{}'", name);
        self.surface.show_status(&resp);
        self.surface.notify(&format!("Daemon response:\n{}", resp));
        Ok(())
    }

    async fn send(&self, cmd: &str) -> Result<(), PanelError> {
        if cmd.is_empty() {
            return Ok(());
        }
        let resp = self.relay.send(cmd).await?;
        self.surface.show_status(&resp);
        Ok(())
    }
}
