use serde::{Deserialize, Serialize};

use super::config::EnhanceConfiguration;
use super::video_models::SessionDiagnostics;

/// Result returned when an enhancement session is stopped.
///
/// Serializable so hosts can attach it to their recording lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
    /// RFC 3339 timestamp of the first running tick; `None` if the loop
    /// never left idle.
    pub started_at: Option<String>,
    pub duration_secs: f64,
    pub ticks: u64,
    pub frames_enhanced: u64,
    pub frames_passed_through: u64,
    pub fallback_count: u64,
    /// The configuration snapshot in effect when the session stopped.
    pub config: EnhanceConfiguration,
}

impl SessionSummary {
    /// Build a summary from a finished run.
    pub fn from_run(
        started_at: Option<chrono::DateTime<chrono::Utc>>,
        duration_secs: f64,
        diagnostics: &SessionDiagnostics,
        config: EnhanceConfiguration,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            started_at: started_at.map(|t| t.to_rfc3339()),
            duration_secs,
            ticks: diagnostics.ticks,
            frames_enhanced: diagnostics.frames_enhanced,
            frames_passed_through: diagnostics.frames_passed_through,
            fallback_count: diagnostics.fallback_count,
            config,
        }
    }

    /// Pretty-printed JSON for host-side storage or display.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let diagnostics = SessionDiagnostics {
            ticks: 10,
            frames_enhanced: 8,
            ..SessionDiagnostics::default()
        };
        let summary = SessionSummary::from_run(
            Some(chrono::Utc::now()),
            1.5,
            &diagnostics,
            EnhanceConfiguration::low_light(),
        );

        let json = summary.to_json().unwrap();
        let parsed: SessionSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
        assert_eq!(parsed.frames_enhanced, 8);
    }
}
