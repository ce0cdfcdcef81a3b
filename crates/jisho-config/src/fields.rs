use serde::{Deserialize, Serialize};

/// Note field names, an empty name disables that field
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    /// Field read by single-note fill
    pub lookup: String,
    pub word: String,
    pub reading: String,
    pub meaning: String,
}
