use super::*;

#[test]
fn incident_deserializes_the_service_shape() {
    let json = r#"[{
        "id": 1,
        "machine": "m1",
        "type": "cpu",
        "value": 90.5,
        "start_time": "2024-01-01T00:00:00Z",
        "end_time": null
    }]"#;

    let incidents: Vec<Incident> = serde_json::from_str(json).expect("incident array");
    assert_eq!(incidents.len(), 1);
    assert_eq!(incidents[0].kind, "cpu");
    assert_eq!(incidents[0].value, 90.5);
    assert!(incidents[0].end_time.is_none());
}

#[test]
fn incident_tolerates_an_absent_end_time_field() {
    let json = r#"{"id": 2, "machine": "m2", "type": "mem", "value": 75.0,
                   "start_time": "2024-01-01T00:00:00Z"}"#;

    let incident: Incident = serde_json::from_str(json).expect("incident");
    assert!(incident.end_time.is_none());
}

#[test]
fn error_body_extracts_the_reason() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"error": "Invalid credentials"}"#).expect("error body");
    assert_eq!(body.error, "Invalid credentials");
}

#[test]
fn user_message_prefers_the_server_reason() {
    let err = ApiError::Rejected { message: Some("Username already exists".to_owned()) };
    assert_eq!(err.user_message("Registration failed"), "Username already exists");
}

#[test]
fn user_message_falls_back_when_no_reason_is_given() {
    let err = ApiError::Rejected { message: None };
    assert_eq!(err.user_message("Login failed"), "Login failed");
}

#[test]
fn user_message_wraps_transport_details() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.user_message("Login failed"), "Error: connection refused");
}
