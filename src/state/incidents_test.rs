use super::*;

fn incident(end_time: Option<&str>) -> Incident {
    Incident {
        id: 1,
        machine: "m1".to_owned(),
        kind: "cpu".to_owned(),
        value: 90.0,
        start_time: Some("2024-01-01T00:00:00Z".to_owned()),
        end_time: end_time.map(ToOwned::to_owned),
    }
}

#[test]
fn default_state_shows_the_loading_placeholder() {
    assert_eq!(IncidentsState::default().placeholder(), Some("Loading incidents..."));
}

#[test]
fn failed_state_shows_the_error_placeholder() {
    assert_eq!(
        IncidentsState::Failed.placeholder(),
        Some("Error loading incidents. Please try again.")
    );
}

#[test]
fn empty_result_shows_the_no_incidents_placeholder() {
    assert_eq!(
        IncidentsState::Loaded(Vec::new()).placeholder(),
        Some("No incidents found")
    );
}

#[test]
fn loaded_rows_render_without_a_placeholder() {
    assert_eq!(IncidentsState::Loaded(vec![incident(None)]).placeholder(), None);
}

#[test]
fn missing_end_time_means_active() {
    let status = IncidentStatus::of(&incident(None));
    assert_eq!(status, IncidentStatus::Active);
    assert_eq!(status.label(), "Active");
    assert_eq!(status.css_class(), "status-active");
}

#[test]
fn present_end_time_means_resolved() {
    let status = IncidentStatus::of(&incident(Some("2024-01-02T00:00:00Z")));
    assert_eq!(status, IncidentStatus::Resolved);
    assert_eq!(status.label(), "Resolved");
    assert_eq!(status.css_class(), "status-resolved");
}
