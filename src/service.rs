//! Design operations on top of the store: CRUD, validation and export.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::drc::DrcEngine;
use crate::error::{DesignError, DesignResult};
use crate::models::{Design, Issue};
use crate::store::DesignStore;

#[derive(Clone)]
pub struct DesignService {
    store: DesignStore,
    drc: Arc<DrcEngine>,
}

impl DesignService {
    pub fn new(store: DesignStore, drc: Arc<DrcEngine>) -> Self {
        Self { store, drc }
    }

    pub fn store(&self) -> &DesignStore {
        &self.store
    }

    /// Stores a new design, overwriting any design with the same id.
    /// An empty id is replaced with a fresh UUID.
    pub fn create(&self, mut design: Design) -> Design {
        if design.id.trim().is_empty() {
            design.id = Uuid::new_v4().to_string();
        }
        design.touch(Utc::now());
        self.store.save(design.clone());
        tracing::info!(design_id = %design.id, "Design saved");
        design
    }

    pub fn get(&self, id: &str) -> DesignResult<Design> {
        self.store
            .get(id)
            .ok_or_else(|| DesignError::NotFound(id.to_string()))
    }

    /// Replaces the design stored at `id` with `design` (inserting if absent).
    pub fn update(&self, id: &str, mut design: Design) -> DesignResult<Design> {
        if design.id != id {
            return Err(DesignError::IdMismatch {
                path: id.to_string(),
                body: design.id,
            });
        }
        if design.created_at.is_none() {
            design.created_at = self.store.get(id).and_then(|d| d.created_at);
        }
        design.touch(Utc::now());
        self.store.save(design.clone());
        tracing::info!(design_id = %id, "Design updated");
        Ok(design)
    }

    pub fn delete(&self, id: &str) -> DesignResult<()> {
        if self.store.delete(id) {
            tracing::info!(design_id = %id, "Design deleted");
            Ok(())
        } else {
            Err(DesignError::NotFound(id.to_string()))
        }
    }

    pub fn list(&self) -> Vec<Design> {
        self.store.list_all()
    }

    /// Runs the DRC and stores the resulting issues on the design,
    /// replacing whatever the previous run left there.
    pub fn validate(&self, id: &str) -> DesignResult<Vec<Issue>> {
        let mut design = self.get(id)?;
        let issues = self.drc.check_design(&design);
        design.issues = issues.clone();
        self.store.save(design);
        Ok(issues)
    }

    pub fn export_gerber(&self, _design: &Design) -> DesignResult<Vec<u8>> {
        Err(DesignError::Unimplemented("Gerber export"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Board, IssueType, Net};

    fn service() -> DesignService {
        DesignService::new(DesignStore::new(), Arc::new(DrcEngine::default()))
    }

    #[test]
    fn create_assigns_id_when_blank() {
        let design = service().create(Design::new("", "Untitled"));

        assert!(Uuid::parse_str(&design.id).is_ok());
        assert!(design.created_at.is_some());
        assert_eq!(design.created_at, design.updated_at);
    }

    #[test]
    fn update_rejects_mismatched_ids() {
        let result = service().update("a", Design::new("b", "Other"));

        assert_eq!(
            result,
            Err(DesignError::IdMismatch {
                path: "a".to_string(),
                body: "b".to_string()
            })
        );
    }

    #[test]
    fn update_keeps_original_creation_time() {
        let service = service();
        let created = service.create(Design::new("d1", "First"));

        let updated = service.update("d1", Design::new("d1", "Second")).unwrap();

        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Second");
    }

    #[test]
    fn validate_persists_issues() {
        let service = service();
        let board = Board {
            nets: vec![Net::new("net1").connect("R1.1")],
            ..Board::default()
        };
        service.create(Design::new("d1", "Blinky").with_board(board));

        let issues = service.validate("d1").unwrap();
        let stored = service.get("d1").unwrap();

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].kind, IssueType::UnconnectedNet);
        assert_eq!(issues[1].kind, IssueType::BoardEdge);
        assert_eq!(stored.issues, issues);
    }

    #[test]
    fn validate_unknown_design_is_not_found() {
        assert_eq!(
            service().validate("missing"),
            Err(DesignError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn delete_unknown_design_is_not_found() {
        assert!(matches!(
            service().delete("missing"),
            Err(DesignError::NotFound(_))
        ));
    }

    #[test]
    fn gerber_export_is_unimplemented() {
        let design = Design::new("d1", "Blinky");
        assert_eq!(
            service().export_gerber(&design),
            Err(DesignError::Unimplemented("Gerber export"))
        );
    }
}
