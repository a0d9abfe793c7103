use std::rc::Rc;

use async_trait::async_trait;
use burn2cool_panel_core::{
    ConfirmGate, Field, HttpTransport, PanelSurface, ProfileRow, ViewBinder,
};
use leptos::prelude::*;

use crate::bridge;

pub type PanelBinder = ViewBinder<HttpTransport, SignalSurface>;

/// Handle the page's event handlers clone the binder out of.
pub type PanelHandle = StoredValue<Rc<PanelBinder>, LocalStorage>;

/// The page's fields, list and status line as signals. The binder writes
/// them; the view renders whatever they hold.
#[derive(Clone, Copy)]
pub struct SignalSurface {
    pub filter: RwSignal<String>,
    pub name: RwSignal<String>,
    pub content: RwSignal<String>,
    pub command: RwSignal<String>,
    pub rows: RwSignal<Vec<ProfileRow>>,
    pub status: RwSignal<String>,
}

impl SignalSurface {
    pub fn new() -> Self {
        Self {
            filter: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            content: RwSignal::new(String::new()),
            command: RwSignal::new(String::new()),
            rows: RwSignal::new(Vec::new()),
            status: RwSignal::new(String::new()),
        }
    }

    fn signal(&self, field: Field) -> RwSignal<String> {
        match field {
            Field::Filter => self.filter,
            Field::Name => self.name,
            Field::Content => self.content,
            Field::Command => self.command,
        }
    }
}

#[async_trait(?Send)]
impl ConfirmGate for SignalSurface {
    async fn confirm(&self, message: &str) -> bool {
        bridge::confirm(message)
    }
}

impl PanelSurface for SignalSurface {
    fn value(&self, field: Field) -> String {
        self.signal(field).get_untracked()
    }

    fn set_value(&self, field: Field, value: &str) {
        self.signal(field).set(value.to_string());
    }

    fn show_rows(&self, rows: Vec<ProfileRow>) {
        self.rows.set(rows);
    }

    fn show_status(&self, text: &str) {
        self.status.set(text.to_string());
    }

    fn notify(&self, message: &str) {
        bridge::alert(message);
    }
}
