//! Network file validation logic.
//!
//! Only checks the file itself; the topology is checked by `hn_graph::check`.

use crate::schema::{LATEST_VERSION, NetworkFile};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_network_file(file: &NetworkFile) -> Result<(), ValidationError> {
    if file.version == 0 || file.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    if file.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: file.name.clone(),
            reason: "network name must not be empty".to_string(),
        });
    }

    let mut element_ids = HashSet::new();
    for element in &file.elements {
        if !element_ids.insert(element.id) {
            return Err(ValidationError::DuplicateId {
                id: element.id.to_string(),
                context: format!("network '{}' elements", file.name),
            });
        }
    }

    Ok(())
}
