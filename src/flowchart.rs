//! Flowchart data model
//!
//! Request-scoped types exchanged with the front-end renderer. Nothing here is
//! persisted; the caller resubmits the full graph with every edit request.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Node kinds understood by the front-end renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Entry step, rendered as a rounded rectangle
    Input,
    /// Terminal step
    Output,
    /// Ordinary rectangular step block
    Default,
    /// Diamond-shaped branch point; the only type allowed more than one
    /// outgoing edge
    Condition,
}

/// Canvas coordinates of a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Display payload of a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
}

/// A single flowchart step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique within one graph
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub data: NodeData,
    pub position: Position,
}

/// A directed connection between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique within one graph
    pub id: String,
    /// Id of the source node
    pub source: String,
    /// Id of the target node
    pub target: String,
    /// Branch label, e.g. "Yes"/"No" on edges leaving a condition node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Inbound request for `POST /generate-flowchart`
///
/// `nodes` and `edges` carry the caller's current graph when editing an
/// existing flowchart; both absent means generation from scratch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<Edge>>,
}

/// Validated model reply, relayed to the caller without modification
///
/// The model's graph output is deliberately passed through as-is: deep
/// validation of individual nodes and edges is the renderer's concern, and
/// rewriting the object here would strip keys the front-end may rely on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModelReply {
    /// A JSON object carrying `nodes` and `edges`
    Graph(Map<String, Value>),
    /// A JSON object carrying `requires_clarification` and a message for the
    /// user
    Clarification(Map<String, Value>),
}

impl ModelReply {
    /// The underlying JSON object, whichever variant it is
    pub fn as_object(&self) -> &Map<String, Value> {
        match self {
            ModelReply::Graph(map) => map,
            ModelReply::Clarification(map) => map,
        }
    }

    pub fn is_graph(&self) -> bool {
        matches!(self, ModelReply::Graph(_))
    }

    pub fn is_clarification(&self) -> bool {
        matches!(self, ModelReply::Clarification(_))
    }
}
