//! Network description shared with the program under test.
//!
//! The JSON field names (`rows`, `viaGlobalId`, `fromGlobalId`,
//! `toGlobalId`, `controllers`, `globalId`) are consumed by external
//! programs and must not change.

use serde::{Deserialize, Serialize};

use crate::constants::{EDGE_PREFIX, VERTEX_PREFIX};

/// Directed edge between two vertices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique edge identifier
    #[serde(rename = "viaGlobalId")]
    pub edge_id: String,

    /// Tail vertex
    #[serde(rename = "fromGlobalId")]
    pub from_id: String,

    /// Head vertex
    #[serde(rename = "toGlobalId")]
    pub to_id: String,
}

/// Distinguished vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controller {
    #[serde(rename = "globalId")]
    pub vertex_id: String,
}

/// Directed graph plus its controller vertices
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub rows: Vec<Edge>,
    pub controllers: Vec<Controller>,
}

impl Edge {
    /// Edge `e_<from>_<to>` between generated vertices `from` and `to`
    pub fn between(from: usize, to: usize) -> Self {
        Self {
            edge_id: edge_name(from, to),
            from_id: vertex_name(from),
            to_id: vertex_name(to),
        }
    }
}

impl Controller {
    pub fn at(vertex: usize) -> Self {
        Self {
            vertex_id: vertex_name(vertex),
        }
    }
}

impl Network {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

/// Identifier of generated vertex `index`
pub fn vertex_name(index: usize) -> String {
    format!("{}{}", VERTEX_PREFIX, index)
}

/// Identifier of the generated edge from `from` to `to`
pub fn edge_name(from: usize, to: usize) -> String {
    format!("{}{}_{}", EDGE_PREFIX, from, to)
}

/// Parse the index back out of a generated vertex identifier
pub fn vertex_index(id: &str) -> Option<usize> {
    id.strip_prefix(VERTEX_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_on_the_wire() {
        let network = Network {
            rows: vec![Edge::between(0, 1)],
            controllers: vec![Controller::at(1)],
        };

        let json = network.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"rows":[{"viaGlobalId":"e_0_1","fromGlobalId":"v_0","toGlobalId":"v_1"}],"controllers":[{"globalId":"v_1"}]}"#
        );
    }

    #[test]
    fn test_parse_hand_written_network() {
        let json = r#"{
            "rows": [{"viaGlobalId": "a", "fromGlobalId": "x", "toGlobalId": "y"}],
            "controllers": []
        }"#;
        let network = Network::from_json(json).unwrap();
        assert_eq!(network.rows[0].edge_id, "a");
        assert_eq!(network.rows[0].to_id, "y");
        assert!(network.controllers.is_empty());
    }

    #[test]
    fn test_vertex_index() {
        assert_eq!(vertex_index("v_17"), Some(17));
        assert_eq!(vertex_index("x_17"), None);
        assert_eq!(vertex_index("v_"), None);
    }
}
