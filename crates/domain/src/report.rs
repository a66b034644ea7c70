//! Criminal report — a hero's account of an incident involving a villain.

use serde::{Deserialize, Serialize};

use crate::hero::Hero;
use crate::id::ReportId;
use crate::json::null_as_default;
use crate::villain::Villain;

/// A criminal report with its hero and villain embedded.
///
/// Persistence only stores `hero.id` and `villain.id`; the embedded records
/// are rebuilt through a join on read. On create and update the embedded
/// records are echoed back as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriminalReport {
    #[serde(alias = "Id", alias = "ID", deserialize_with = "null_as_default")]
    pub id: ReportId,
    #[serde(alias = "Hero", alias = "HERO", deserialize_with = "null_as_default")]
    pub hero: Hero,
    #[serde(alias = "Villain", alias = "VILLAIN", deserialize_with = "null_as_default")]
    pub villain: Villain,
    #[serde(alias = "Description", alias = "DESCRIPTION", deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(alias = "Incident", alias = "INCIDENT", deserialize_with = "null_as_default")]
    pub incident: String,
}

impl CriminalReport {
    /// Create a builder for constructing a [`CriminalReport`].
    #[must_use]
    pub fn builder() -> CriminalReportBuilder {
        CriminalReportBuilder::default()
    }

    /// Return this report with its identifier replaced by `id`.
    #[must_use]
    pub fn with_id(mut self, id: ReportId) -> Self {
        self.id = id;
        self
    }
}

/// Step-by-step builder for [`CriminalReport`].
#[derive(Debug, Default)]
pub struct CriminalReportBuilder {
    inner: CriminalReport,
}

impl CriminalReportBuilder {
    #[must_use]
    pub fn hero(mut self, hero: Hero) -> Self {
        self.inner.hero = hero;
        self
    }

    #[must_use]
    pub fn villain(mut self, villain: Villain) -> Self {
        self.inner.villain = villain;
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = description.into();
        self
    }

    #[must_use]
    pub fn incident(mut self, incident: impl Into<String>) -> Self {
        self.inner.incident = incident.into();
        self
    }

    /// Consume the builder and return the [`CriminalReport`].
    ///
    /// No invariants are checked here: hero and villain existence is
    /// enforced by the store's foreign keys.
    #[must_use]
    pub fn build(self) -> CriminalReport {
        self.inner
    }
}
