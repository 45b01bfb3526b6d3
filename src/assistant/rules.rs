//! Pattern-based suggestion rules for common beginner mistakes.

use super::Suggester;
use crate::models::{
    ComponentCategory, Design, NetRole, SuggestedAction, Suggestion, SuggestionCategory,
};

/// ICs normally need at least power, ground and one signal net.
const MIN_IC_NETS: usize = 2;

/// Flags ICs and logic gates that appear on fewer than two nets.
pub struct FloatingInputRule;

impl Suggester for FloatingInputRule {
    fn name(&self) -> &'static str {
        "floating_input"
    }

    fn suggest(&self, design: &Design) -> Vec<Suggestion> {
        let board = &design.board;
        board
            .components
            .iter()
            .filter(|c| c.category().has_logic_inputs())
            .filter(|ic| board.nets.iter().filter(|n| n.touches(&ic.id)).count() < MIN_IC_NETS)
            .map(|ic| {
                Suggestion::new(
                    format!("floating_input_{}", ic.id),
                    SuggestionCategory::Component,
                    format!(
                        "Component '{}' may have unconnected input pins. Make sure all required \
                         pins are connected (power, ground, and signal pins).",
                        ic.id
                    ),
                )
                .with_action(SuggestedAction::HighlightComponent {
                    component_id: ic.id.clone(),
                })
                .related([ic.id.as_str()])
            })
            .collect()
    }
}

/// With no capacitor anywhere on the board, every IC gets a decoupling hint.
pub struct MissingDecouplingRule;

impl Suggester for MissingDecouplingRule {
    fn name(&self) -> &'static str {
        "missing_decoupling"
    }

    fn suggest(&self, design: &Design) -> Vec<Suggestion> {
        let components = &design.board.components;
        if components
            .iter()
            .any(|c| c.category() == ComponentCategory::Capacitor)
        {
            return Vec::new();
        }

        components
            .iter()
            .filter(|c| c.category() == ComponentCategory::IntegratedCircuit)
            .map(|ic| {
                Suggestion::new(
                    format!("decoupling_{}", ic.id),
                    SuggestionCategory::Component,
                    format!(
                        "Consider adding a decoupling capacitor (0.1µF) near '{}' to filter power \
                         supply noise. This is a best practice for stable operation.",
                        ic.id
                    ),
                )
                .with_action(SuggestedAction::AddComponent {
                    kind: "capacitor".to_string(),
                    value: "0.1µF".to_string(),
                    near: Some(ic.id.clone()),
                })
                .related([ic.id.as_str()])
            })
            .collect()
    }
}

/// Reminds that power and ground traces should be wider than signals.
pub struct PowerTraceWidthRule;

impl Suggester for PowerTraceWidthRule {
    fn name(&self) -> &'static str {
        "power_trace_width"
    }

    fn suggest(&self, design: &Design) -> Vec<Suggestion> {
        let supply_nets: Vec<&str> = design
            .board
            .nets
            .iter()
            .filter(|n| matches!(n.role(), NetRole::Power | NetRole::Ground))
            .map(|n| n.id.as_str())
            .collect();
        if supply_nets.is_empty() {
            return Vec::new();
        }

        vec![Suggestion::new(
            "power_width_hint",
            SuggestionCategory::Routing,
            "Power and ground traces should be wider than signal traces (typically 0.5mm or \
             more) to handle higher current. Make sure to set appropriate trace widths in Board \
             view.",
        )
        .related(supply_nets)]
    }
}

/// Suggests adding VCC and GND nets when either is missing.
pub struct PowerGroundNetRule;

impl Suggester for PowerGroundNetRule {
    fn name(&self) -> &'static str {
        "power_ground_nets"
    }

    fn suggest(&self, design: &Design) -> Vec<Suggestion> {
        let nets = &design.board.nets;
        let mut suggestions = Vec::new();

        if !nets.iter().any(|n| n.role() == NetRole::Power) {
            suggestions.push(
                Suggestion::new(
                    "suggest_power_net",
                    SuggestionCategory::Component,
                    "Consider adding a power net (VCC/VDD) for your circuit. Most components \
                     need power to work.",
                )
                .with_action(SuggestedAction::AddNet {
                    name: "VCC".to_string(),
                }),
            );
        }

        if !nets.iter().any(|n| n.role() == NetRole::Ground) {
            suggestions.push(
                Suggestion::new(
                    "suggest_ground_net",
                    SuggestionCategory::Component,
                    "Consider adding a ground net (GND). All circuits need a common ground \
                     reference.",
                )
                .with_action(SuggestedAction::AddNet {
                    name: "GND".to_string(),
                }),
            );
        }

        suggestions
    }
}

/// LEDs with no resistor anywhere on the board.
pub struct LedResistorRule;

impl Suggester for LedResistorRule {
    fn name(&self) -> &'static str {
        "led_resistor"
    }

    fn suggest(&self, design: &Design) -> Vec<Suggestion> {
        let components = &design.board.components;
        let leds: Vec<&str> = components
            .iter()
            .filter(|c| c.category() == ComponentCategory::Led)
            .map(|c| c.id.as_str())
            .collect();
        let has_resistor = components
            .iter()
            .any(|c| c.category() == ComponentCategory::Resistor);

        if leds.is_empty() || has_resistor {
            return Vec::new();
        }

        vec![Suggestion::new(
            "suggest_led_resistor",
            SuggestionCategory::Component,
            "LEDs need a current-limiting resistor to prevent damage. Add a resistor in series \
             with your LED.",
        )
        .with_action(SuggestedAction::AddComponent {
            kind: "resistor".to_string(),
            value: "220Ω".to_string(),
            near: None,
        })
        .related(leds)]
    }
}

/// Once parts are being placed, nudge towards grouping related ones.
pub struct PlacementGroupingRule;

impl Suggester for PlacementGroupingRule {
    fn name(&self) -> &'static str {
        "placement_grouping"
    }

    fn suggest(&self, design: &Design) -> Vec<Suggestion> {
        if design.board.placed_components().count() <= 1 {
            return Vec::new();
        }

        vec![Suggestion::new(
            "suggest_placement",
            SuggestionCategory::Placement,
            "Group related components together for shorter traces and better layout.",
        )]
    }
}
