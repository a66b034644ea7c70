//! Hero — the reporting party of a criminal report.

use serde::{Deserialize, Serialize};

use crate::id::HeroId;
use crate::json::null_as_default;

/// A hero as stored in the `Heroes` table.
///
/// Heroes are never mutated through this system; they are only joined into
/// reports. Missing JSON fields decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    #[serde(alias = "Id", alias = "ID", deserialize_with = "null_as_default")]
    pub id: HeroId,
    #[serde(alias = "Name", alias = "NAME", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "Universe", alias = "UNIVERSE", deserialize_with = "null_as_default")]
    pub universe: String,
    #[serde(alias = "Skill", alias = "SKILL", deserialize_with = "null_as_default")]
    pub skill: String,
}
