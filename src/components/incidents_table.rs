//! Incidents table, re-rendered from each controller snapshot.

use leptos::prelude::*;

use crate::controller::ViewState;
use crate::net::types::Incident;
use crate::state::incidents::{IncidentStatus, IncidentsState};
use crate::util::time::format_local;

/// Table of monitoring incidents with loading/error/empty placeholders.
#[component]
pub fn IncidentsTable() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();

    view! {
        <table class="incidents-table" id="incidents-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Machine"</th>
                    <th>"Type"</th>
                    <th>"Value"</th>
                    <th>"Started"</th>
                    <th>"Resolved"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let state = view.get().incidents;
                    match state {
                        IncidentsState::Loaded(rows) if !rows.is_empty() => {
                            rows.into_iter().map(incident_row).collect::<Vec<_>>().into_any()
                        }
                        other => {
                            view! {
                                <tr>
                                    <td colspan="7" class="placeholder">
                                        {other.placeholder()}
                                    </td>
                                </tr>
                            }
                                .into_any()
                        }
                    }
                }}
            </tbody>
        </table>
    }
}

/// One table row; resolved time stays empty while the incident is active.
fn incident_row(incident: Incident) -> impl IntoView {
    let status = IncidentStatus::of(&incident);
    view! {
        <tr>
            <td>{incident.id}</td>
            <td>{incident.machine}</td>
            <td>{incident.kind}</td>
            <td>{format!("{}%", incident.value)}</td>
            <td>{format_local(incident.start_time.as_deref())}</td>
            <td>{format_local(incident.end_time.as_deref())}</td>
            <td>
                <span class=status.css_class()>{status.label()}</span>
            </td>
        </tr>
    }
}
