use serde::{Deserialize, Serialize};

/// The kind of problem a DRC issue reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    #[default]
    UnconnectedNet,
    ShortCircuit,
    ClearanceViolation,
    BoardEdge,
    MissingComponent,
    InvalidConnection,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnconnectedNet => "unconnected_net",
            Self::ShortCircuit => "short_circuit",
            Self::ClearanceViolation => "clearance_violation",
            Self::BoardEdge => "board_edge",
            Self::MissingComponent => "missing_component",
            Self::InvalidConnection => "invalid_connection",
        }
    }
}

/// Issue severity, ordered `Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A single DRC finding.
///
/// Issues are regenerated wholesale on every validation run and replace the
/// design's previous list; they are never edited individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique within one validation run.
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: IssueType,
    pub severity: Severity,
    pub message: String,
    /// Component, net or endpoint ids implicated by this issue.
    #[serde(default)]
    pub related_ids: Vec<String>,
    /// Free-form positional context, e.g. `{"pin": "R1.1", "net1": ..., "net2": ...}`.
    pub location: Option<serde_json::Value>,
}

impl Issue {
    pub fn new(
        id: impl Into<String>,
        kind: IssueType,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            severity,
            message: message.into(),
            related_ids: Vec::new(),
            location: None,
        }
    }

    pub fn related<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn at(mut self, location: serde_json::Value) -> Self {
        self.location = Some(location);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_by_increasing_weight() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn serializes_wire_names() {
        let issue = Issue::new("x", IssueType::ShortCircuit, Severity::Error, "boom")
            .related(["net1", "net2"]);
        let value = serde_json::to_value(&issue).unwrap();

        assert_eq!(value["type"], "short_circuit");
        assert_eq!(value["severity"], "error");
        assert_eq!(value["related_ids"], serde_json::json!(["net1", "net2"]));
    }

    #[test]
    fn missing_type_defaults_to_unconnected_net() {
        let issue: Issue =
            serde_json::from_str(r#"{"id":"a","severity":"warning","message":"m"}"#).unwrap();
        assert_eq!(issue.kind, IssueType::UnconnectedNet);
        assert!(issue.related_ids.is_empty());
    }
}
