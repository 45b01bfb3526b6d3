use serde::{Deserialize, Serialize};

/// Broad area a suggestion concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    Placement,
    Routing,
    Component,
    General,
}

/// An editor action the frontend can offer alongside a suggestion.
///
/// Serialized as `{"type": "add_net", "params": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "params", rename_all = "snake_case")]
pub enum SuggestedAction {
    AddNet {
        name: String,
    },
    AddComponent {
        #[serde(rename = "type")]
        kind: String,
        value: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        near: Option<String>,
    },
    HighlightComponent {
        component_id: String,
    },
}

/// Advisory hint produced by the assistant. Never blocks saving or validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    #[serde(rename = "type")]
    pub category: SuggestionCategory,
    pub message: String,
    pub action: Option<SuggestedAction>,
    #[serde(default)]
    pub related_ids: Vec<String>,
}

impl Suggestion {
    pub fn new(
        id: impl Into<String>,
        category: SuggestionCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            message: message.into(),
            action: None,
            related_ids: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: SuggestedAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn related<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_ids = ids.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

/// Request to explain a DRC error in beginner terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainErrorRequest {
    pub error: String,
    #[serde(default)]
    pub context: serde_json::Map<String, serde_json::Value>,
}

/// A plain-language explanation plus numbered fix steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub explanation: String,
    pub steps: Vec<String>,
}

/// Stages of the guided design workflow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStep {
    PlaceComponents,
    WireComponents,
    CreateBoard,
    PlaceFootprints,
    RouteTraces,
}

impl WorkflowStep {
    /// 1-based position in the workflow.
    pub fn number(&self) -> u8 {
        match self {
            Self::PlaceComponents => 1,
            Self::WireComponents => 2,
            Self::CreateBoard => 3,
            Self::PlaceFootprints => 4,
            Self::RouteTraces => 5,
        }
    }
}

/// The next thing a beginner should do with their design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextAction {
    pub action: WorkflowStep,
    pub message: String,
    pub step: u8,
}
