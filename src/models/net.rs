use serde::{Deserialize, Serialize};

/// Net names recognised as power rails.
pub const POWER_NET_NAMES: &[&str] = &["VCC", "VDD", "POWER"];

/// Net names recognised as ground.
pub const GROUND_NET_NAMES: &[&str] = &["GND", "GROUND"];

/// An electrical connection between component pins.
///
/// Each entry in `connection_ids` is an endpoint formatted as
/// `"<componentId>.<pinName>"`, e.g. `"R1.1"` or `"LED1.anode"`. Nothing here
/// stops two nets from claiming the same endpoint; that is what the
/// short-circuit check looks for. A net with fewer than two endpoints is
/// legal mid-edit and is flagged by the DRC instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Net {
    pub id: String,
    #[serde(default)]
    pub connection_ids: Vec<String>,
    pub name: Option<String>,
}

/// What a net carries, judged from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetRole {
    Power,
    Ground,
    Signal,
}

impl Net {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            connection_ids: Vec::new(),
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn connect(mut self, endpoint: impl Into<String>) -> Self {
        self.connection_ids.push(endpoint.into());
        self
    }

    /// The name if there is one, else the id.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    pub fn role(&self) -> NetRole {
        let Some(name) = self.name.as_deref() else {
            return NetRole::Signal;
        };
        let upper = name.to_uppercase();
        if POWER_NET_NAMES.contains(&upper.as_str()) {
            NetRole::Power
        } else if GROUND_NET_NAMES.contains(&upper.as_str()) {
            NetRole::Ground
        } else {
            NetRole::Signal
        }
    }

    pub fn endpoints(&self) -> impl Iterator<Item = Endpoint<'_>> {
        self.connection_ids.iter().map(|c| Endpoint::parse(c))
    }

    /// Whether any endpoint of this net sits on the given component.
    pub fn touches(&self, component_id: &str) -> bool {
        self.endpoints().any(|e| e.component_id == component_id)
    }
}

/// A parsed `componentId.pinName` reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    pub component_id: &'a str,
    pub pin: &'a str,
}

impl<'a> Endpoint<'a> {
    /// Splits at the first `.`; a reference without one is all component id.
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once('.') {
            Some((component_id, pin)) => Self { component_id, pin },
            None => Self {
                component_id: raw,
                pin: "",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_endpoints() {
        assert_eq!(
            Endpoint::parse("LED1.anode"),
            Endpoint {
                component_id: "LED1",
                pin: "anode"
            }
        );
        assert_eq!(
            Endpoint::parse("J1"),
            Endpoint {
                component_id: "J1",
                pin: ""
            }
        );
    }

    #[test]
    fn classifies_roles_by_name() {
        assert_eq!(Net::new("n1").named("vcc").role(), NetRole::Power);
        assert_eq!(Net::new("n2").named(" VCC").role(), NetRole::Signal);
        assert_eq!(Net::new("n2").named("Ground").role(), NetRole::Ground);
        assert_eq!(Net::new("n3").named("SDA").role(), NetRole::Signal);
        assert_eq!(Net::new("n4").role(), NetRole::Signal);
    }

    #[test]
    fn touches_matches_whole_component_ids() {
        let net = Net::new("n1").connect("U10.3").connect("R1.1");
        assert!(net.touches("U10"));
        assert!(!net.touches("U1"));
    }
}
