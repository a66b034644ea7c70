//! Villain — the subject of a criminal report.

use serde::{Deserialize, Serialize};

use crate::id::VillainId;
use crate::json::null_as_default;

/// A villain as stored in the `Villain` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Villain {
    #[serde(alias = "Id", alias = "ID", deserialize_with = "null_as_default")]
    pub id: VillainId,
    #[serde(alias = "Name", alias = "NAME", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "Universe", alias = "UNIVERSE", deserialize_with = "null_as_default")]
    pub universe: String,
}
