use std::rc::Rc;

use burn2cool_panel_core::ViewBinder;
use leptos::logging::error;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::bridge;
use crate::pages::control_panel::ControlPanelPage;
use crate::surface::{PanelHandle, SignalSurface};

#[component]
pub fn App() -> impl IntoView {
    let config = bridge::load_config();
    let surface = SignalSurface::new();

    let transport = match bridge::build_transport(&config) {
        Ok(t) => t,
        Err(e) => {
            error!("Cannot reach the panel API: {}", e);
            return view! {
                <main class="content">
                    <div class="profile-error">{e.to_string()}</div>
                </main>
            }
            .into_any();
        }
    };

    let panel: PanelHandle = StoredValue::new_local(Rc::new(ViewBinder::new(transport, surface)));

    // Initial profile load on mount
    Effect::new(move |_| {
        let binder = panel.get_value();
        spawn_local(async move {
            binder.start().await;
        });
    });

    view! {
        <main class="content">
            <ControlPanelPage
                panel=panel
                surface=surface
                bindings=config.bindings
                quick_commands=config.quick_commands
            />
        </main>
    }
    .into_any()
}
