use burn2cool_panel_core::{Control, UiEvent};
use leptos::prelude::*;

/// Free-text command entry, preset command buttons and the daemon's last reply.
#[component]
pub fn CommandBar(
    /// Bound to the command input.
    command: RwSignal<String>,
    /// Raw text of the last command response.
    status: RwSignal<String>,
    quick_commands: Vec<String>,
    #[prop(into)] input_id: String,
    #[prop(into)] send_id: String,
    #[prop(into)] status_id: String,
    #[prop(into)] on_event: Callback<UiEvent>,
) -> impl IntoView {
    let send = move || on_event.run(UiEvent::Clicked(Control::SendCommand));

    view! {
        <section class="command-section">
            <h3>"Daemon Command"</h3>
            <div class="input-row">
                <input
                    id=input_id
                    type="text"
                    class="input"
                    placeholder="e.g. status"
                    prop:value=move || command.get()
                    on:input=move |ev| command.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" { send(); }
                    }
                />
                <button id=send_id class="btn btn-primary" on:click=move |_| send()>
                    "Send"
                </button>
            </div>

            {(!quick_commands.is_empty()).then(|| view! {
                <div class="quick-commands">
                    {quick_commands
                        .into_iter()
                        .map(|cmd| {
                            let label = cmd.clone();
                            view! {
                                <button
                                    class="btn btn-small btn-secondary"
                                    on:click=move |_| on_event.run(UiEvent::QuickCommand(cmd.clone()))
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            })}

            <pre id=status_id class="status-box">{move || status.get()}</pre>
        </section>
    }
}
