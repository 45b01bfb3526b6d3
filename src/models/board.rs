use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::{Component, Net, Point};

fn default_layers() -> NonZeroU32 {
    NonZeroU32::MIN
}

/// A PCB: outline polygon, the parts on it and the nets between them.
///
/// An empty `outline` means the board shape has not been drawn yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub outline: Vec<Point>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub nets: Vec<Net>,
    #[serde(default = "default_layers")]
    pub layers: NonZeroU32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            outline: Vec::new(),
            components: Vec::new(),
            nets: Vec::new(),
            layers: default_layers(),
        }
    }
}

impl Board {
    pub fn has_outline(&self) -> bool {
        !self.outline.is_empty()
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn net(&self, id: &str) -> Option<&Net> {
        self.nets.iter().find(|n| n.id == id)
    }

    pub fn placed_components(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| c.is_placed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let board: Board = serde_json::from_str("{}").unwrap();
        assert!(board.outline.is_empty());
        assert!(board.components.is_empty());
        assert!(board.nets.is_empty());
        assert_eq!(board.layers.get(), 1);
    }

    #[test]
    fn zero_layers_is_rejected() {
        let result = serde_json::from_str::<Board>(r#"{"layers": 0}"#);
        assert!(result.is_err());
    }
}
