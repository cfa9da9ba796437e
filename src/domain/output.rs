//! Nested output tree assembled from decoded batch results

use std::collections::BTreeMap;

use alloy_dyn_abi::DynSolValue;

use crate::domain::path::{self, Segment};

/// A node in the assembled output.
///
/// `Null` marks an individual call that failed while `require_all` was false;
/// it is indistinguishable from a call that legitimately produced nothing.
/// A function with one output is unwrapped to a bare `Value`; two or more
/// outputs (and the degenerate zero-output case) stay a `List`.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputNode {
    Null,
    Value(DynSolValue),
    List(Vec<OutputNode>),
    Map(BTreeMap<String, OutputNode>),
}

impl Default for OutputNode {
    fn default() -> Self {
        OutputNode::Map(BTreeMap::new())
    }
}

impl OutputNode {
    /// Empty map node, the usual seed for a batch.
    pub fn map() -> Self {
        Self::default()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, OutputNode::Null)
    }

    pub fn as_value(&self) -> Option<&DynSolValue> {
        match self {
            OutputNode::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[OutputNode]> {
        match self {
            OutputNode::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, OutputNode>> {
        match self {
            OutputNode::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Look up the node at `path`, if the tree has that shape.
    pub fn get(&self, path: &str) -> Option<&OutputNode> {
        let mut node = self;
        for segment in path::parse(path) {
            node = match (&segment, node) {
                (Segment::Key(key), OutputNode::Map(map)) => map.get(key)?,
                (Segment::Index(index), OutputNode::List(list)) => list.get(*index)?,
                _ => return None,
            };
        }
        Some(node)
    }

    /// Write `value` at `path`, creating intermediate maps and lists as
    /// needed. List slots below the written index are padded with `Null`.
    /// An intermediate node of the wrong shape is replaced by a fresh
    /// container. An empty path is a no-op.
    pub fn set(&mut self, path: &str, value: OutputNode) {
        let segments = path::parse(path);
        if segments.is_empty() {
            return;
        }
        set_segments(self, &segments, value);
    }

    /// Project the tree onto JSON for display or serialization.
    ///
    /// Integers render as decimal strings so 256-bit values survive the trip;
    /// byte values render as 0x-prefixed hex.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            OutputNode::Null => serde_json::Value::Null,
            OutputNode::Value(value) => dyn_value_to_json(value),
            OutputNode::List(items) => {
                serde_json::Value::Array(items.iter().map(OutputNode::to_json).collect())
            }
            OutputNode::Map(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, node)| (key.clone(), node.to_json()))
                    .collect(),
            ),
        }
    }
}

fn set_segments(node: &mut OutputNode, segments: &[Segment], value: OutputNode) {
    let Some((head, rest)) = segments.split_first() else {
        *node = value;
        return;
    };

    match head {
        Segment::Key(key) => {
            if !matches!(node, OutputNode::Map(_)) {
                *node = OutputNode::map();
            }
            let OutputNode::Map(map) = node else {
                unreachable!()
            };
            let child = map.entry(key.clone()).or_insert(OutputNode::Null);
            set_segments(child, rest, value);
        }
        Segment::Index(index) => {
            if !matches!(node, OutputNode::List(_)) {
                *node = OutputNode::List(Vec::new());
            }
            let OutputNode::List(list) = node else {
                unreachable!()
            };
            while list.len() <= *index {
                list.push(OutputNode::Null);
            }
            set_segments(&mut list[*index], rest, value);
        }
    }
}

fn dyn_value_to_json(value: &DynSolValue) -> serde_json::Value {
    match value {
        DynSolValue::Bool(b) => serde_json::Value::Bool(*b),
        DynSolValue::Int(i, _) => serde_json::Value::String(i.to_string()),
        DynSolValue::Uint(u, _) => serde_json::Value::String(u.to_string()),
        DynSolValue::FixedBytes(word, size) => {
            let bytes = &word.as_slice()[..(*size).min(32)];
            serde_json::Value::String(format!("0x{}", hex::encode(bytes)))
        }
        DynSolValue::Address(addr) => serde_json::Value::String(addr.to_string()),
        DynSolValue::Function(func) => {
            serde_json::Value::String(format!("0x{}", hex::encode(func.as_slice())))
        }
        DynSolValue::Bytes(bytes) => {
            serde_json::Value::String(format!("0x{}", hex::encode(bytes)))
        }
        DynSolValue::String(s) => serde_json::Value::String(s.clone()),
        DynSolValue::Array(items) | DynSolValue::FixedArray(items) => {
            serde_json::Value::Array(items.iter().map(dyn_value_to_json).collect())
        }
        DynSolValue::Tuple(fields) => {
            serde_json::Value::Array(fields.iter().map(dyn_value_to_json).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    fn uint(n: u64) -> OutputNode {
        OutputNode::Value(DynSolValue::Uint(U256::from(n), 256))
    }

    #[test]
    fn test_set_creates_intermediate_maps() {
        let mut root = OutputNode::map();
        root.set("a.b.c", uint(7));
        assert_eq!(root.get("a.b.c"), Some(&uint(7)));
        assert!(root.get("a.b").unwrap().as_map().is_some());
    }

    #[test]
    fn test_set_index_pads_with_null() {
        let mut root = OutputNode::map();
        root.set("pools[2]", uint(3));
        let pools = root.get("pools").unwrap().as_list().unwrap();
        assert_eq!(pools.len(), 3);
        assert!(pools[0].is_null());
        assert!(pools[1].is_null());
        assert_eq!(pools[2], uint(3));
    }

    #[test]
    fn test_set_last_write_wins() {
        let mut root = OutputNode::map();
        root.set("x", uint(1));
        root.set("x", uint(2));
        assert_eq!(root.get("x"), Some(&uint(2)));
    }

    #[test]
    fn test_set_replaces_wrong_shape_intermediate() {
        let mut root = OutputNode::map();
        root.set("a", uint(1));
        root.set("a.b", uint(2));
        assert_eq!(root.get("a.b"), Some(&uint(2)));
    }

    #[test]
    fn test_set_empty_path_is_noop() {
        let mut root = OutputNode::map();
        root.set("", uint(1));
        assert_eq!(root, OutputNode::map());
    }

    #[test]
    fn test_get_missing_returns_none() {
        let root = OutputNode::map();
        assert!(root.get("a.b").is_none());
        assert!(root.get("a[0]").is_none());
    }

    #[test]
    fn test_to_json_projection() {
        let mut root = OutputNode::map();
        root.set("supply", uint(1000));
        root.set("reserves", OutputNode::List(vec![uint(1), uint(2)]));
        root.set("missing", OutputNode::Null);

        let json = root.to_json();
        assert_eq!(json["supply"], "1000");
        assert_eq!(json["reserves"][1], "2");
        assert!(json["missing"].is_null());
    }

    #[test]
    fn test_to_json_bytes_render_as_hex() {
        let node = OutputNode::Value(DynSolValue::Bytes(vec![0xde, 0xad]));
        assert_eq!(node.to_json(), serde_json::json!("0xdead"));
    }
}
