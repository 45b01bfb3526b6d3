use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Board, Issue};

/// A complete PCB design: the unit of storage, identity and validation.
///
/// `issues` holds the output of the most recent DRC run and is replaced as a
/// whole each time the design is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub id: String,
    pub name: String,
    pub board: Board,
    #[serde(default)]
    pub issues: Vec<Issue>,
    /// Opaque timestamp text; whatever the client sent is kept verbatim.
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Design {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            board: Board::default(),
            issues: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Records a write at `now`, keeping an existing creation time.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        let stamp = now.to_rfc3339();
        self.created_at.get_or_insert_with(|| stamp.clone());
        self.updated_at = Some(stamp);
    }
}

/// Response body for a validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub issues: Vec<Issue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_round_trip_verbatim() {
        let json = r#"{"id":"d1","name":"Test","board":{},"created_at":"2024-05-01","updated_at":"2024-05-01T10:00:00+02:00"}"#;
        let design: Design = serde_json::from_str(json).unwrap();

        assert_eq!(design.created_at.as_deref(), Some("2024-05-01"));

        let value = serde_json::to_value(&design).unwrap();
        assert_eq!(value["created_at"], "2024-05-01");
        assert_eq!(value["updated_at"], "2024-05-01T10:00:00+02:00");
    }

    #[test]
    fn touch_keeps_client_creation_time() {
        let mut design = Design::new("d1", "Test");
        design.created_at = Some("2024-05-01".to_string());

        design.touch(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap());

        assert_eq!(design.created_at.as_deref(), Some("2024-05-01"));
        assert_eq!(design.updated_at.as_deref(), Some("2025-01-02T03:04:05+00:00"));
    }
}
