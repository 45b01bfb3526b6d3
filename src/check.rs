//! Offline checking of design files for the `check` command.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::assistant::SuggestionEngine;
use crate::drc::DrcEngine;
use crate::models::{Design, Issue, Severity, Suggestion};

pub fn load_design(path: &Path) -> Result<Design> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid design JSON in {}", path.display()))
}

/// DRC issues and suggestions for one design.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub design_id: String,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<Suggestion>,
}

impl CheckReport {
    pub fn run(design: &Design, drc: &DrcEngine, assistant: &SuggestionEngine) -> Self {
        Self {
            design_id: design.id.clone(),
            issues: drc.check_design(design),
            suggestions: assistant.suggest(design),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(Issue::is_error)
    }

    pub fn worst_severity(&self) -> Option<Severity> {
        self.issues.iter().map(|i| i.severity).max()
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Design {}", self.design_id);

        if self.issues.is_empty() {
            let _ = writeln!(out, "  No DRC issues found.");
        } else {
            let _ = writeln!(out, "  {} DRC issue(s):", self.issues.len());
            for issue in &self.issues {
                let _ = writeln!(
                    out,
                    "    [{}] {}: {}",
                    issue.severity.as_str(),
                    issue.kind.as_str(),
                    issue.message
                );
            }
        }

        if !self.suggestions.is_empty() {
            let _ = writeln!(out, "  {} suggestion(s):", self.suggestions.len());
            for suggestion in &self.suggestions {
                let _ = writeln!(out, "    - {}", suggestion.message);
            }
        }

        out
    }
}
