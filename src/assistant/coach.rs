//! Error explanations and next-step coaching for the guided workflow.

use crate::models::{Design, Explanation, NextAction, WorkflowStep};

fn steps(lines: [&str; 4]) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect()
}

/// Explains a DRC error message in beginner terms by keyword.
///
/// The first matching topic wins; unknown errors get a generic explanation
/// that quotes the message back.
pub fn explain_error(error: &str) -> Explanation {
    let lower = error.to_lowercase();

    if lower.contains("unconnected") || lower.contains("not connected") {
        return Explanation {
            explanation: "This net (connection) isn't properly wired. Every net needs at least 2 \
                          connections - one component pin connected to another. Think of it like \
                          a wire that needs to connect two points."
                .to_string(),
            steps: steps([
                "Find the net mentioned in the error",
                "Check which component pins should be connected",
                "Draw a wire (connection) between those pins",
                "Run validation again to confirm it's fixed",
            ]),
        };
    }

    if lower.contains("short") {
        return Explanation {
            explanation: "A short circuit means two different nets (connections) are accidentally \
                          touching. This can damage components. Think of it like two wires that \
                          shouldn't touch but do."
                .to_string(),
            steps: steps([
                "Find the pin or connection mentioned in the error",
                "Check if it's connected to multiple nets",
                "Remove the incorrect connection",
                "Make sure each pin connects to only one net",
            ]),
        };
    }

    if lower.contains("outline") || lower.contains("boundary") {
        return Explanation {
            explanation: "Your board needs a defined shape (outline) before you can place \
                          components. The outline is like the edges of your PCB - everything must \
                          fit inside it."
                .to_string(),
            steps: steps([
                "Switch to Board view",
                "Use the 'Draw Board Outline' tool",
                "Draw a rectangle or custom shape for your board",
                "Make sure all components fit inside this outline",
            ]),
        };
    }

    Explanation {
        explanation: format!(
            "This error means: {error}. Check the related components or connections mentioned in \
             the error message and fix them according to the design rules."
        ),
        steps: steps([
            "Read the error message carefully",
            "Find the components or connections mentioned",
            "Fix the issue based on the error description",
            "Run validation again",
        ]),
    }
}

/// Picks the next workflow step from how far the design has got.
pub fn next_action(design: &Design) -> NextAction {
    let board = &design.board;

    let (step, message) = if board.components.is_empty() {
        (
            WorkflowStep::PlaceComponents,
            "Start by placing components on your schematic. Click 'Add Component' to get started.",
        )
    } else if board.nets.is_empty() {
        (
            WorkflowStep::WireComponents,
            "Now connect your components! Use the Wire tool to draw connections between component pins.",
        )
    } else if !board.has_outline() {
        (
            WorkflowStep::CreateBoard,
            "Great! Your schematic is complete. Switch to Board view to place components and route traces.",
        )
    } else if board.components.iter().any(|c| !c.is_placed()) {
        (
            WorkflowStep::PlaceFootprints,
            "Place your component footprints on the board. Drag them to good positions.",
        )
    } else {
        (
            WorkflowStep::RouteTraces,
            "Now route the traces! Connect the pads according to your schematic connections.",
        )
    };

    NextAction {
        action: step,
        message: message.to_string(),
        step: step.number(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Board, Component, Net, Point};

    #[test]
    fn explanations_route_by_keyword() {
        assert!(explain_error("Net 'x' is NOT CONNECTED").explanation.contains("properly wired"));
        assert!(explain_error("Potential short circuit").explanation.contains("short circuit"));
        assert!(explain_error("Board outline is missing").explanation.contains("outline"));
    }

    #[test]
    fn unknown_errors_quote_the_message() {
        let explanation = explain_error("Clearance too small");
        assert!(explanation
            .explanation
            .starts_with("This error means: Clearance too small."));
        assert_eq!(explanation.steps[0], "1. Read the error message carefully");
        assert_eq!(explanation.steps.len(), 4);
    }

    #[test]
    fn workflow_ladder() {
        let mut board = Board::default();
        let step = |board: &Board| next_action(&Design::new("d", "n").with_board(board.clone())).step;

        assert_eq!(step(&board), 1);

        board.components.push(Component::new("R1", "resistor"));
        assert_eq!(step(&board), 2);

        board.nets.push(Net::new("n1").connect("R1.1"));
        assert_eq!(step(&board), 3);

        board.outline = vec![Point(0.0, 0.0), Point(10.0, 0.0), Point(10.0, 10.0)];
        assert_eq!(step(&board), 4);

        board.components[0].position = Some(Point(5.0, 5.0));
        let action = next_action(&Design::new("d", "n").with_board(board));
        assert_eq!(action.action, WorkflowStep::RouteTraces);
        assert_eq!(action.step, 5);
    }
}
