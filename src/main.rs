mod app;
mod bridge;
mod components;
mod pages;
mod surface;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
