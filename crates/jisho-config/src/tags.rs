use serde::{Deserialize, Serialize};

/// Tags applied by batch creation, an empty tag is never applied
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TagsConfig {
    pub added: String,
    pub changed: String,
    pub duplicate: String,
    pub missing: String,
}
