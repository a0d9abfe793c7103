#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use burn2cool_panel_core::{
    ConfirmGate, Field, Method, PanelSurface, Profile, ProfileRow, Transport, TransportError,
};
use serde_json::{json, Value};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct DaemonState {
    profiles: RefCell<Vec<Profile>>,
    calls: RefCell<Vec<Call>>,
    offline: Cell<bool>,
    malformed: Cell<bool>,
    list_error: RefCell<Option<String>>,
}

/// In-memory stand-in for the panel API: keeps a profile list, answers with
/// the same envelopes the daemon does and records every request.
#[derive(Clone, Default)]
pub struct FakeDaemon {
    state: Rc<DaemonState>,
}

impl FakeDaemon {
    pub fn with_profiles(profiles: &[(&str, &str)]) -> Self {
        let daemon = Self::default();
        *daemon.state.profiles.borrow_mut() = profiles
            .iter()
            .map(|(name, content)| Profile::new(*name, *content))
            .collect();
        daemon
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.calls.borrow().len()
    }

    pub fn profiles(&self) -> Vec<Profile> {
        self.state.profiles.borrow().clone()
    }

    /// Change server state behind the client's back.
    pub fn insert_directly(&self, name: &str, content: &str) {
        self.state
            .profiles
            .borrow_mut()
            .push(Profile::new(name, content));
    }

    pub fn set_offline(&self, offline: bool) {
        self.state.offline.set(offline);
    }

    pub fn set_malformed(&self, malformed: bool) {
        self.state.malformed.set(malformed);
    }

    pub fn fail_list_with(&self, error: Option<&str>) {
        *self.state.list_error.borrow_mut() = error.map(str::to_string);
    }

    fn answer(&self, method: Method, path: &str, body: Option<&Value>) -> Value {
        let text = |key: &str| -> String {
            body.and_then(|b| b.get(key))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        let mut profiles = self.state.profiles.borrow_mut();

        match (method, path) {
            (Method::Get, "/profiles") => match self.state.list_error.borrow().as_ref() {
                Some(error) => json!({"ok": false, "error": error}),
                None => json!({"ok": true, "profiles": profiles.clone()}),
            },
            (Method::Post, "/profiles") => {
                let name = text("name");
                if profiles.iter().any(|p| p.name == name) {
                    return json!({"ok": false, "error": "profile exists"});
                }
                profiles.push(Profile::new(name, text("content")));
                json!({"ok": true})
            }
            (Method::Post, "/command") => {
                let cmd = text("cmd");
                if let Some(name) = cmd.strip_prefix("load-profile ") {
                    if profiles.iter().any(|p| p.name == name) {
                        json!({"ok": true, "resp": format!("loaded {}", name)})
                    } else {
                        json!({"ok": false, "error": "profile not found"})
                    }
                } else if cmd == "status" {
                    json!({"ok": true, "resp": "temp=55 safe_max=90"})
                } else {
                    json!({"ok": false})
                }
            }
            (method, path) => {
                let Some(encoded) = path.strip_prefix("/profiles/") else {
                    return json!({"ok": false, "error": "not found"});
                };
                let name = urlencoding::decode(encoded)
                    .map(|n| n.into_owned())
                    .unwrap_or_default();
                let Some(index) = profiles.iter().position(|p| p.name == name) else {
                    return json!({"ok": false, "error": "not found"});
                };
                match method {
                    Method::Put => {
                        profiles[index] = Profile::new(name, text("content"));
                        json!({"ok": true})
                    }
                    Method::Delete => {
                        profiles.remove(index);
                        json!({"ok": true})
                    }
                    _ => json!({"ok": false, "error": "method not allowed"}),
                }
            }
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeDaemon {
    async fn call(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        if self.state.offline.get() {
            return Err(TransportError::Connection("connection refused".to_string()));
        }
        self.state.calls.borrow_mut().push(Call {
            method,
            path: path.to_string(),
            body: body.clone(),
        });
        if self.state.malformed.get() {
            return Ok(json!("<html>bad gateway</html>"));
        }
        Ok(self.answer(method, path, body.as_ref()))
    }
}

/// Records everything the binder shows and answers confirmations with a
/// preset value.
pub struct FakeSurface {
    fields: RefCell<HashMap<Field, String>>,
    rows: RefCell<Vec<ProfileRow>>,
    renders: Cell<usize>,
    status: RefCell<Option<String>>,
    notices: RefCell<Vec<String>>,
    prompts: RefCell<Vec<String>>,
    confirm_answer: Cell<bool>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self {
            fields: RefCell::new(HashMap::new()),
            rows: RefCell::new(Vec::new()),
            renders: Cell::new(0),
            status: RefCell::new(None),
            notices: RefCell::new(Vec::new()),
            prompts: RefCell::new(Vec::new()),
            confirm_answer: Cell::new(true),
        }
    }

    pub fn type_into(&self, field: Field, value: &str) {
        self.fields.borrow_mut().insert(field, value.to_string());
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    pub fn rows(&self) -> Vec<ProfileRow> {
        self.rows.borrow().clone()
    }

    pub fn row_names(&self) -> Vec<String> {
        self.rows.borrow().iter().map(|r| r.name.clone()).collect()
    }

    pub fn renders(&self) -> usize {
        self.renders.get()
    }

    pub fn status(&self) -> Option<String> {
        self.status.borrow().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ConfirmGate for FakeSurface {
    async fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }
}

impl PanelSurface for FakeSurface {
    fn value(&self, field: Field) -> String {
        self.fields.borrow().get(&field).cloned().unwrap_or_default()
    }

    fn set_value(&self, field: Field, value: &str) {
        self.type_into(field, value);
    }

    fn show_rows(&self, rows: Vec<ProfileRow>) {
        *self.rows.borrow_mut() = rows;
        self.renders.set(self.renders.get() + 1);
    }

    fn show_status(&self, text: &str) {
        *self.status.borrow_mut() = Some(text.to_string());
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}
