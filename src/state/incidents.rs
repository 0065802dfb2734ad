#[cfg(test)]
#[path = "incidents_test.rs"]
mod incidents_test;

use crate::net::types::Incident;

/// Contents of the incidents table.
///
/// `Loaded` keeps rows in the order the service returned them (newest
/// first). Failures retain no stale rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum IncidentsState {
    #[default]
    Loading,
    Failed,
    Loaded(Vec<Incident>),
}

impl IncidentsState {
    /// Placeholder text spanning the table, or `None` when rows render.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("Loading incidents..."),
            Self::Failed => Some("Error loading incidents. Please try again."),
            Self::Loaded(rows) if rows.is_empty() => Some("No incidents found"),
            Self::Loaded(_) => None,
        }
    }
}

/// Presentational resolution status, derived from the end timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncidentStatus {
    Active,
    Resolved,
}

impl IncidentStatus {
    pub fn of(incident: &Incident) -> Self {
        if incident.end_time.is_none() {
            Self::Active
        } else {
            Self::Resolved
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Resolved => "Resolved",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Active => "status-active",
            Self::Resolved => "status-resolved",
        }
    }
}
