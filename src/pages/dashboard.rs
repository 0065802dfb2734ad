//! Dashboard view: header with logout, plus the incidents table.

use leptos::prelude::*;

use crate::app::AppController;
use crate::components::incidents_table::IncidentsTable;

/// Dashboard view — visible only while logged in; polling runs for its
/// lifetime.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let controller = expect_context::<StoredValue<AppController, LocalStorage>>();

    let on_logout = move |_| {
        let controller = controller.with_value(Clone::clone);
        leptos::task::spawn_local(async move {
            controller.logout().await;
        });
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>"Incidents"</h1>
                <button class="btn" id="logout-btn" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <IncidentsTable/>
        </div>
    }
}
