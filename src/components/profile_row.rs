use burn2cool_panel_core::ProfileRow;
use leptos::prelude::*;

/// One entry in the profile list: name, content preview and a Load button.
#[component]
pub fn ProfileRowItem(
    row: ProfileRow,
    /// Clicking the entry copies it into the edit fields.
    #[prop(into)]
    on_select: Callback<ProfileRow>,
    /// Asks the daemon to load this profile.
    #[prop(into)]
    on_load: Callback<String>,
) -> impl IntoView {
    let label = row.name.clone();
    let load_name = row.name.clone();
    let preview = row.preview.clone();

    view! {
        <div class="profile" on:click=move |_| on_select.run(row.clone())>
            <strong class="profile-item-name">{label}</strong>
            <div class="preview">
                {preview
                    .into_iter()
                    .map(|line| view! { <div class="preview-line">{line}</div> })
                    .collect::<Vec<_>>()}
            </div>
            <button
                class="btn btn-small btn-secondary"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_load.run(load_name.clone());
                }
            >
                "Load"
            </button>
        </div>
    }
}
