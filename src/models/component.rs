use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Component types treated as full integrated circuits.
const IC_TYPES: &[&str] = &["mcu", "ic", "microcontroller"];

/// A 2D coordinate, serialized as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

/// The closed set of component categories the checkers and assistant reason about.
///
/// The category is derived once from the free-text `type` string when a
/// component is deserialized. Anything unrecognised lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentCategory {
    Resistor,
    Led,
    Capacitor,
    IntegratedCircuit,
    LogicGate,
    Other,
}

impl ComponentCategory {
    pub fn classify(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        match lower.as_str() {
            "resistor" => Self::Resistor,
            "led" => Self::Led,
            "gate" => Self::LogicGate,
            s if IC_TYPES.contains(&s) => Self::IntegratedCircuit,
            s if s.contains("cap") => Self::Capacitor,
            _ => Self::Other,
        }
    }

    /// True for anything with input pins that can float: ICs and logic gates.
    pub fn has_logic_inputs(&self) -> bool {
        matches!(self, Self::IntegratedCircuit | Self::LogicGate)
    }
}

/// The free-text component type together with its derived category.
///
/// Serializes as the raw string so designs round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ComponentType {
    raw: String,
    category: ComponentCategory,
}

impl ComponentType {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let category = ComponentCategory::classify(&raw);
        Self { raw, category }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn category(&self) -> ComponentCategory {
        self.category
    }
}

impl From<String> for ComponentType {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for ComponentType {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<ComponentType> for String {
    fn from(value: ComponentType) -> Self {
        value.raw
    }
}

/// A property value: either numeric (e.g. `220.0`) or textual (e.g. `"0805"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
}

/// A named component property such as resistance or package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentProperty {
    pub name: String,
    pub value: PropertyValue,
    pub unit: Option<String>,
}

/// A circuit element on the board. `position` is `None` until it has been placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ComponentType,
    #[serde(default)]
    pub properties: IndexMap<String, ComponentProperty>,
    pub position: Option<Point>,
    /// Degrees.
    pub rotation: Option<f64>,
}

impl Component {
    pub fn new(id: impl Into<String>, kind: impl Into<ComponentType>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            properties: IndexMap::new(),
            position: None,
            rotation: None,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Point(x, y));
        self
    }

    pub fn category(&self) -> ComponentCategory {
        self.kind.category()
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_types_case_insensitively() {
        assert_eq!(ComponentCategory::classify("Resistor"), ComponentCategory::Resistor);
        assert_eq!(ComponentCategory::classify("LED"), ComponentCategory::Led);
        assert_eq!(ComponentCategory::classify("MCU"), ComponentCategory::IntegratedCircuit);
        assert_eq!(ComponentCategory::classify("microcontroller"), ComponentCategory::IntegratedCircuit);
        assert_eq!(ComponentCategory::classify("gate"), ComponentCategory::LogicGate);
        assert_eq!(ComponentCategory::classify("ceramic_cap"), ComponentCategory::Capacitor);
        assert_eq!(ComponentCategory::classify("header"), ComponentCategory::Other);
        assert_eq!(ComponentCategory::classify(" led"), ComponentCategory::Other);
    }

    #[test]
    fn component_type_round_trips_raw_string() {
        let json = r#"{"id":"U1","type":"MCU","position":[1.5,2.0]}"#;
        let component: Component = serde_json::from_str(json).unwrap();

        assert_eq!(component.category(), ComponentCategory::IntegratedCircuit);
        assert_eq!(component.position, Some(Point(1.5, 2.0)));

        let value = serde_json::to_value(&component).unwrap();
        assert_eq!(value["type"], "MCU");
        assert_eq!(value["position"], serde_json::json!([1.5, 2.0]));
    }

    #[test]
    fn property_values_accept_numbers_and_strings() {
        let json = r#"{
            "id": "R1",
            "type": "resistor",
            "properties": {
                "resistance": {"name": "resistance", "value": 220, "unit": "ohm"},
                "package": {"name": "package", "value": "0805"}
            }
        }"#;
        let component: Component = serde_json::from_str(json).unwrap();

        assert_eq!(
            component.properties["resistance"].value,
            PropertyValue::Number(220.0)
        );
        assert_eq!(
            component.properties["package"].value,
            PropertyValue::Text("0805".to_string())
        );
        assert!(component.properties["package"].unit.is_none());
    }
}
