//! Creator Studio WASM entry point

use leptos::prelude::*;
use studio_components::AnalyticsDashboard;
use studio_state::provide_app_state;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("mounting creator studio");
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    provide_app_state();

    view! { <AnalyticsDashboard /> }
}
