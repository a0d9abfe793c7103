use burn2cool_panel_core::{Control, ElementIds, ProfileRow, UiEvent};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::command_bar::CommandBar;
use crate::components::profile_row::ProfileRowItem;
use crate::surface::{PanelHandle, SignalSurface};

#[component]
pub fn ControlPanelPage(
    panel: PanelHandle,
    surface: SignalSurface,
    bindings: ElementIds,
    quick_commands: Vec<String>,
) -> impl IntoView {
    let ElementIds {
        refresh,
        create,
        save,
        delete,
        load,
        send_cmd,
        clear_filter,
        filter,
        name,
        content,
        command,
        status,
        list,
    } = bindings;
    let name_label = name.clone();
    let content_label = content.clone();

    // Every control funnels through the binder; each event runs as its own task.
    let dispatch = move |event: UiEvent| {
        let binder = panel.get_value();
        spawn_local(async move {
            binder.handle(event).await;
        });
    };
    let click = move |control: Control| dispatch(UiEvent::Clicked(control));

    let profile_count = move || {
        let shown = surface.rows.with(Vec::len);
        let total = panel.with_value(|b| b.store().len());
        if shown == total {
            format!("{} profiles", total)
        } else {
            format!("{} / {}", shown, total)
        }
    };

    view! {
        <div class="page control-panel-page">
            <h2>"Profiles"</h2>
            <p class="page-description">
                "Browse, edit and load the daemon's throttling profiles."
            </p>

            // Toolbar
            <div class="profile-toolbar">
                <input
                    id=filter
                    type="text"
                    class="profile-filter-input"
                    placeholder="Filter profiles..."
                    prop:value=move || surface.filter.get()
                    on:input=move |ev| {
                        surface.filter.set(event_target_value(&ev));
                        dispatch(UiEvent::FilterEdited);
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" { dispatch(UiEvent::FilterSubmitted); }
                    }
                />
                <button id=clear_filter class="btn btn-secondary" on:click=move |_| click(Control::ClearFilter)>
                    "Clear"
                </button>
                <button id=refresh class="btn btn-secondary" on:click=move |_| click(Control::Refresh)>
                    "Refresh"
                </button>
                <span class="profile-count">{profile_count}</span>
            </div>

            <div class="profile-layout">
                // Profile list
                <div id=list class="profile-list-panel">
                    <For
                        each=move || surface.rows.get()
                        key=|row| row.clone()
                        children=move |row: ProfileRow| {
                            view! {
                                <ProfileRowItem
                                    row=row
                                    on_select=move |row: ProfileRow| dispatch(UiEvent::RowSelected(row.profile()))
                                    on_load=move |name: String| dispatch(UiEvent::RowLoadRequested(name))
                                />
                            }
                        }
                    />
                    <Show when=move || surface.rows.with(Vec::is_empty)>
                        <div class="profile-detail-empty">
                            <span>"No profiles found"</span>
                        </div>
                    </Show>
                </div>

                // Editor
                <div class="profile-detail-panel">
                    <div class="form-group">
                        <label for=name_label>"Profile name"</label>
                        <input
                            id=name
                            type="text"
                            class="input"
                            placeholder="profile filename"
                            prop:value=move || surface.name.get()
                            on:input=move |ev| surface.name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for=content_label>"Content"</label>
                        <textarea
                            id=content
                            class="input profile-content"
                            rows="12"
                            prop:value=move || surface.content.get()
                            on:input=move |ev| surface.content.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="profile-detail-actions">
                        <button id=create class="btn btn-primary" on:click=move |_| click(Control::Create)>
                            "Create"
                        </button>
                        <button id=save class="btn btn-primary" on:click=move |_| click(Control::Save)>
                            "Save"
                        </button>
                        <button id=delete class="btn btn-danger" on:click=move |_| click(Control::Delete)>
                            "Delete"
                        </button>
                        <button id=load class="btn btn-secondary" on:click=move |_| click(Control::Load)>
                            "Load"
                        </button>
                    </div>
                </div>
            </div>

            <CommandBar
                command=surface.command
                status=surface.status
                quick_commands=quick_commands
                input_id=command
                send_id=send_cmd
                status_id=status
                on_event=move |event: UiEvent| dispatch(event)
            />
        </div>
    }
}
