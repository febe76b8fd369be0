//! YAML front matter parsing
//!
//! A header is read as an ordered mapping first. Some front matter is a
//! single `[key, value]` pair, which the strict mapping read rejects, so a
//! second attempt wraps such a pair as a one-entry mapping.

use crate::core::node::{Mapping, Node};
use crate::error::{MatterTableError, Result};
use log::debug;

/// Parse front matter content (the text between the delimiters)
pub fn parse_front_matter(header: &str) -> Result<Mapping> {
    if header.trim().is_empty() {
        return Ok(Mapping::new());
    }

    let mapping_err = match serde_yaml::from_str::<Mapping>(header) {
        Ok(mapping) => return Ok(mapping),
        Err(e) => e,
    };
    debug!("Front matter is not a mapping ({}), trying a single pair", mapping_err);

    match serde_yaml::from_str::<(Node, Node)>(header) {
        Ok((key, value)) => Ok(Mapping::from_pair(key, value)),
        Err(pair_err) => {
            debug!("Front matter is not a single pair either: {}", pair_err);
            Err(MatterTableError::invalid_front_matter(mapping_err.to_string()))
        }
    }
}
