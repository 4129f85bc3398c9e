//! SQL export configuration.

use serde::{Deserialize, Serialize};

fn default_table() -> String {
    "queries".to_owned()
}

fn default_pairs() -> String {
    "{1,2,3,4,5,6}".to_owned()
}

const fn default_kind() -> i64 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ExportConfig {
    /// Target table of the generated `INSERT`.
    #[serde(default = "default_table")]
    pub table: String,

    /// Text prepended to each event title in the `description` column.
    #[serde(default)]
    pub description_prefix: String,

    /// Literal for the `pairs` column (a Postgres array literal).
    #[serde(default = "default_pairs")]
    pub pairs: String,

    /// Value of the `type` column.
    #[serde(default = "default_kind")]
    pub kind: i64,

    /// Value of the `in_charge` column.
    #[serde(default)]
    pub in_charge: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
            description_prefix: String::new(),
            pairs: default_pairs(),
            kind: default_kind(),
            in_charge: String::new(),
        }
    }
}
