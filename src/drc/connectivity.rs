//! Net connectivity rules: nets that connect too little, and endpoints
//! claimed by more than one net.

use std::collections::HashMap;

use serde_json::json;

use super::DesignCheck;
use crate::models::{Board, Issue, IssueType, Severity};

/// Minimum endpoints for a net to actually connect something.
pub const MIN_NET_CONNECTIONS: usize = 2;

/// Runs the unconnected-net rule, then the short-circuit rule.
#[derive(Debug, Default, Clone, Copy)]
pub struct NetConnectivityCheck;

impl DesignCheck for NetConnectivityCheck {
    fn id(&self) -> &'static str {
        "net_connectivity"
    }

    fn check(&self, board: &Board) -> Vec<Issue> {
        let mut issues = unconnected_nets(board);
        issues.extend(short_circuits(board));
        issues
    }
}

/// One error per net with fewer than two endpoints, in net order.
pub fn unconnected_nets(board: &Board) -> Vec<Issue> {
    board
        .nets
        .iter()
        .filter(|net| net.connection_ids.len() < MIN_NET_CONNECTIONS)
        .map(|net| {
            Issue::new(
                format!("unconnected_{}", net.id),
                IssueType::UnconnectedNet,
                Severity::Error,
                format!(
                    "Net '{}' is not connected properly. Each net needs at least {} connections.",
                    net.label(),
                    MIN_NET_CONNECTIONS
                ),
            )
            .related([net.id.as_str()])
            .at(json!({ "net_id": net.id }))
        })
        .collect()
}

/// One error per endpoint re-claimed by a different net.
///
/// Each endpoint remembers only the first net that claimed it, so a pin
/// listed by three nets yields two issues, both naming the first net. The
/// id ends with the endpoint's position in the net so repeats stay distinct.
pub fn short_circuits(board: &Board) -> Vec<Issue> {
    let mut first_claim: HashMap<&str, &str> = HashMap::new();
    let mut issues = Vec::new();

    for net in &board.nets {
        for (index, endpoint) in net.connection_ids.iter().enumerate() {
            let owner = match first_claim.get(endpoint.as_str()).copied() {
                None => {
                    first_claim.insert(endpoint.as_str(), net.id.as_str());
                    continue;
                }
                Some(owner) if owner == net.id => continue,
                Some(owner) => owner,
            };

            issues.push(
                Issue::new(
                    format!("short_{}_{}_{}_{}", net.id, owner, endpoint, index),
                    IssueType::ShortCircuit,
                    Severity::Error,
                    format!(
                        "Potential short circuit: pin '{}' is connected to multiple nets ('{}' and '{}').",
                        endpoint, net.id, owner
                    ),
                )
                .related([net.id.as_str(), owner, endpoint.as_str()])
                .at(json!({ "pin": endpoint, "net1": net.id, "net2": owner })),
            );
        }
    }

    issues
}
