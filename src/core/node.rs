//! Ordered key-value tree for front matter
//!
//! `serde_yaml::Mapping` deduplicates keys, so front matter is deserialized
//! straight into this tree instead. Mappings are plain vectors of pairs:
//! document order and repeated keys both survive, and keys may themselves
//! be mappings or sequences.

use serde::de::{
    self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor,
};
use std::fmt;

/// A leaf value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
}

impl fmt::Display for Scalar {
    /// Natural textual form; null renders as nothing
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::UInt(u) => write!(f, "{}", u),
            Self::Float(x) => write!(f, "{}", x),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// A node of the front matter tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    Sequence(Vec<Node>),
    Mapping(Mapping),
}

impl Node {
    /// Create a null node
    pub fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    /// Create a string node
    pub fn string(s: impl Into<String>) -> Self {
        Self::Scalar(Scalar::String(s.into()))
    }

    /// Create an integer node
    pub fn int(i: i64) -> Self {
        Self::Scalar(Scalar::Int(i))
    }

    /// Check if this node is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    /// Try to view this node as a mapping
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(m) => Some(m),
            _ => None,
        }
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<Mapping> for Node {
    fn from(mapping: Mapping) -> Self {
        Self::Mapping(mapping)
    }
}

/// Ordered sequence of key/value pairs; keys are not required to be unique
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping {
    entries: Vec<(Node, Node)>,
}

impl Mapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a single pair as a one-element mapping
    pub fn from_pair(key: Node, value: Node) -> Self {
        Self {
            entries: vec![(key, value)],
        }
    }

    /// Append a pair, keeping any earlier pair with the same key
    pub fn push(&mut self, key: Node, value: Node) {
        self.entries.push((key, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (&Node, &Node)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// First value whose key is the given string
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.iter().find_map(|(k, v)| match k {
            Node::Scalar(Scalar::String(s)) if s == key => Some(v),
            _ => None,
        })
    }
}

impl FromIterator<(Node, Node)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (Node, Node)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any YAML value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Node, E> {
        Ok(Scalar::Bool(v).into())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Node, E> {
        Ok(Scalar::Int(v).into())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Node, E> {
        Ok(Scalar::UInt(v).into())
    }

    // Out of 64-bit range: keep the digits
    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Node, E> {
        Ok(Scalar::String(v.to_string()).into())
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Node, E> {
        Ok(Scalar::String(v.to_string()).into())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Node, E> {
        Ok(Scalar::Float(v).into())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Node, E> {
        Ok(Node::string(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Node, E> {
        Ok(Node::string(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::null())
    }

    fn visit_none<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::null())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Node, D::Error> {
        Node::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Node, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Node::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Node, A::Error> {
        MappingVisitor.visit_map(map).map(Node::Mapping)
    }

    // Explicitly tagged values (`!tag value`): the tag is dropped
    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Node, A::Error> {
        let (_tag, variant): (String, _) = data.variant()?;
        variant.newtype_variant()
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct MappingVisitor;

impl<'de> Visitor<'de> for MappingVisitor {
    type Value = Mapping;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a YAML mapping")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Mapping, E> {
        Ok(Mapping::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Mapping, A::Error> {
        let mut mapping = Mapping {
            entries: Vec::with_capacity(map.size_hint().unwrap_or(0)),
        };
        while let Some((key, value)) = map.next_entry::<Node, Node>()? {
            mapping.push(key, value);
        }
        Ok(mapping)
    }
}

impl<'de> Deserialize<'de> for Mapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MappingVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::Null.to_string(), "");
        assert_eq!(Scalar::Bool(true).to_string(), "true");
        assert_eq!(Scalar::Int(-7).to_string(), "-7");
        assert_eq!(Scalar::UInt(42).to_string(), "42");
        assert_eq!(Scalar::Float(1.5).to_string(), "1.5");
        assert_eq!(Scalar::String("x".into()).to_string(), "x");
    }

    #[test]
    fn test_mapping_preserves_order() {
        let mapping: Mapping = serde_yaml::from_str("zeta: 1\nalpha: 2\nmid: 3").unwrap();
        let keys: Vec<String> = mapping
            .iter()
            .map(|(k, _)| match k {
                Node::Scalar(s) => s.to_string(),
                other => panic!("unexpected key {:?}", other),
            })
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_mapping_keeps_duplicate_keys() {
        let mapping: Mapping = serde_yaml::from_str("a: 1\na: 2").unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("a"), Some(&Node::Scalar(Scalar::UInt(1))));
    }

    #[test]
    fn test_nested_values() {
        let mapping: Mapping =
            serde_yaml::from_str("meta:\n  a: 1\ntags: [x, y]\nempty:\nflag: false").unwrap();

        let meta = mapping.get("meta").and_then(Node::as_mapping).unwrap();
        assert_eq!(meta.len(), 1);
        assert_eq!(
            mapping.get("tags"),
            Some(&Node::Sequence(vec![Node::string("x"), Node::string("y")]))
        );
        assert!(mapping.get("empty").unwrap().is_null());
        assert_eq!(mapping.get("flag"), Some(&Node::Scalar(Scalar::Bool(false))));
    }

    #[test]
    fn test_complex_key() {
        let mapping: Mapping = serde_yaml::from_str("? {a: 1}\n: value").unwrap();
        let (key, value) = mapping.iter().next().unwrap();
        assert!(key.as_mapping().is_some());
        assert_eq!(value, &Node::string("value"));
    }

    #[test]
    fn test_tagged_value_keeps_content() {
        let mapping: Mapping = serde_yaml::from_str("when: !date 2024-01-01").unwrap();
        assert_eq!(mapping.get("when"), Some(&Node::string("2024-01-01")));
    }

    #[test]
    fn test_mapping_rejects_sequence() {
        assert!(serde_yaml::from_str::<Mapping>("- a\n- b").is_err());
    }
}
