//! Board geometry rules.
//!
//! Placement is checked coarsely: a component counts as on the board once it
//! has any position. True polygon containment is not attempted.

use serde_json::json;

use super::DesignCheck;
use crate::models::{Board, Issue, IssueType, Severity};

#[derive(Debug, Default, Clone, Copy)]
pub struct BoardOutlineCheck;

impl DesignCheck for BoardOutlineCheck {
    fn id(&self) -> &'static str {
        "board_outline"
    }

    fn check(&self, board: &Board) -> Vec<Issue> {
        missing_outline(board).into_iter().collect()
    }
}

/// Only meaningful once an outline exists; yields nothing otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComponentPlacementCheck;

impl DesignCheck for ComponentPlacementCheck {
    fn id(&self) -> &'static str {
        "component_placement"
    }

    fn check(&self, board: &Board) -> Vec<Issue> {
        if !board.has_outline() {
            return Vec::new();
        }
        unplaced_components(board)
    }
}

pub fn missing_outline(board: &Board) -> Option<Issue> {
    if board.has_outline() {
        return None;
    }
    Some(Issue::new(
        "board_outline_missing",
        IssueType::BoardEdge,
        Severity::Error,
        "Board outline is missing. Define board boundaries first.",
    ))
}

pub fn unplaced_components(board: &Board) -> Vec<Issue> {
    board
        .components
        .iter()
        .filter(|c| !c.is_placed())
        .map(|c| {
            Issue::new(
                format!("no_position_{}", c.id),
                IssueType::MissingComponent,
                Severity::Warning,
                format!("Component '{}' has no position defined.", c.id),
            )
            .related([c.id.as_str()])
            .at(json!({ "component_id": c.id }))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Component, Point};

    fn square() -> Vec<Point> {
        vec![Point(0.0, 0.0), Point(50.0, 0.0), Point(50.0, 50.0), Point(0.0, 50.0)]
    }

    #[test]
    fn empty_outline_yields_one_board_edge_error() {
        let board = Board {
            components: vec![Component::new("R1", "resistor")],
            ..Board::default()
        };

        let issues = BoardOutlineCheck.check(&board);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueType::BoardEdge);
        assert_eq!(issues[0].severity, Severity::Error);
        assert!(issues[0].related_ids.is_empty());
    }

    #[test]
    fn outline_present_yields_no_board_edge() {
        let board = Board {
            outline: square(),
            ..Board::default()
        };
        assert!(BoardOutlineCheck.check(&board).is_empty());
    }

    #[test]
    fn placement_check_skips_boards_without_outline() {
        let board = Board {
            components: vec![Component::new("R1", "resistor")],
            ..Board::default()
        };
        assert!(ComponentPlacementCheck.check(&board).is_empty());
    }

    #[test]
    fn unplaced_components_are_warnings() {
        let board = Board {
            outline: square(),
            components: vec![
                Component::new("R1", "resistor").at(10.0, 10.0),
                Component::new("LED1", "led"),
            ],
            ..Board::default()
        };

        let issues = ComponentPlacementCheck.check(&board);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "no_position_LED1");
        assert_eq!(issues[0].kind, IssueType::MissingComponent);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].related_ids, vec!["LED1"]);
    }
}
