//! Design Rule Check engine.
//!
//! A [`DrcEngine`] is a fixed pipeline of [`DesignCheck`]s. Each check is a
//! pure function of the board; the engine concatenates their issues in
//! registration order without deduplicating across checks.
//!
//! The default pipeline is:
//!
//! 1. [`NetConnectivityCheck`]: unconnected nets, then short circuits
//! 2. [`BoardOutlineCheck`]: missing outline
//! 3. [`ComponentPlacementCheck`]: unplaced components (only with an outline)

pub mod connectivity;
pub mod geometry;

use std::sync::Arc;

use crate::models::{Board, Design, Issue, Severity};

pub use connectivity::NetConnectivityCheck;
pub use geometry::{BoardOutlineCheck, ComponentPlacementCheck};

/// A single structural rule over a board.
pub trait DesignCheck: Send + Sync {
    fn id(&self) -> &'static str;
    fn check(&self, board: &Board) -> Vec<Issue>;
}

pub struct DrcEngine {
    checks: Vec<Arc<dyn DesignCheck>>,
}

impl DrcEngine {
    /// An engine with no checks registered.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn with_default_checks() -> Self {
        let mut engine = Self::new();
        engine.add_check(Arc::new(NetConnectivityCheck));
        engine.add_check(Arc::new(BoardOutlineCheck));
        engine.add_check(Arc::new(ComponentPlacementCheck));
        engine
    }

    pub fn add_check(&mut self, check: Arc<dyn DesignCheck>) {
        self.checks.push(check);
    }

    pub fn check_ids(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.id()).collect()
    }

    pub fn check_board(&self, board: &Board) -> Vec<Issue> {
        let mut issues = Vec::new();
        for check in &self.checks {
            let found = check.check(board);
            tracing::trace!(check = check.id(), found = found.len(), "DRC check finished");
            issues.extend(found);
        }
        issues
    }

    pub fn check_design(&self, design: &Design) -> Vec<Issue> {
        let issues = self.check_board(&design.board);
        let errors = count_at(&issues, Severity::Error);
        let warnings = count_at(&issues, Severity::Warning);
        tracing::debug!(
            design_id = %design.id,
            total = issues.len(),
            errors,
            warnings,
            "DRC run complete"
        );
        issues
    }
}

impl Default for DrcEngine {
    fn default() -> Self {
        Self::with_default_checks()
    }
}

fn count_at(issues: &[Issue], severity: Severity) -> usize {
    issues.iter().filter(|i| i.severity == severity).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IssueType, Net};

    struct AlwaysInfo;

    impl DesignCheck for AlwaysInfo {
        fn id(&self) -> &'static str {
            "always_info"
        }

        fn check(&self, _board: &Board) -> Vec<Issue> {
            vec![Issue::new("info", IssueType::InvalidConnection, Severity::Info, "note")]
        }
    }

    #[test]
    fn default_pipeline_order() {
        let engine = DrcEngine::default();
        assert_eq!(
            engine.check_ids(),
            vec!["net_connectivity", "board_outline", "component_placement"]
        );
    }

    #[test]
    fn custom_checks_run_after_defaults() {
        let mut engine = DrcEngine::with_default_checks();
        engine.add_check(Arc::new(AlwaysInfo));

        let issues = engine.check_board(&Board::default());

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].kind, IssueType::BoardEdge);
        assert_eq!(issues[1].id, "info");
    }

    #[test]
    fn empty_engine_finds_nothing() {
        let board = Board {
            nets: vec![Net::new("n1")],
            ..Board::default()
        };
        assert!(DrcEngine::new().check_board(&board).is_empty());
    }
}
