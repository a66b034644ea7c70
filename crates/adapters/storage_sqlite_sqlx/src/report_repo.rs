//! `SQLite` implementation of [`ReportRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use reportdesk_app::ports::ReportRepository;
use reportdesk_domain::error::ReportDeskError;
use reportdesk_domain::hero::Hero;
use reportdesk_domain::id::{HeroId, ReportId, VillainId};
use reportdesk_domain::report::CriminalReport;
use reportdesk_domain::villain::Villain;

use crate::error::StorageError;

/// Wrapper for converting joined report rows into domain [`CriminalReport`].
struct Wrapper(CriminalReport);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<CriminalReport> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let hero = Hero {
            id: HeroId::new(row.try_get("hero_id")?),
            name: row.try_get("hero_name")?,
            universe: row.try_get("hero_universe")?,
            skill: row.try_get("hero_skill")?,
        };
        let villain = Villain {
            id: VillainId::new(row.try_get("villain_id")?),
            name: row.try_get("villain_name")?,
            universe: row.try_get("villain_universe")?,
        };

        Ok(Self(CriminalReport {
            id: ReportId::new(row.try_get("id")?),
            hero,
            villain,
            description: row.try_get("description")?,
            incident: row.try_get("incident")?,
        }))
    }
}

macro_rules! select_joined {
    ($filter:literal) => {
        concat!(
            "SELECT cr.id AS id, cr.description AS description, cr.incident AS incident, ",
            "h.id AS hero_id, h.name AS hero_name, h.universe AS hero_universe, h.skill AS hero_skill, ",
            "v.id AS villain_id, v.name AS villain_name, v.universe AS villain_universe ",
            "FROM CriminalReports cr ",
            "JOIN Heroes h ON cr.hero_id = h.id ",
            "JOIN Villain v ON cr.villain_id = v.id",
            $filter
        )
    };
}

const INSERT: &str =
    "INSERT INTO CriminalReports (hero_id, villain_id, description, incident) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = select_joined!(" WHERE cr.id = ?");
const SELECT_ALL: &str = select_joined!("");
const UPDATE: &str = "UPDATE CriminalReports SET hero_id = ?, villain_id = ?, description = ?, incident = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM CriminalReports WHERE id = ?";

/// `SQLite`-backed criminal report repository.
pub struct SqliteReportRepository {
    pool: SqlitePool,
}

impl SqliteReportRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReportRepository for SqliteReportRepository {
    fn create(
        &self,
        report: CriminalReport,
    ) -> impl Future<Output = Result<CriminalReport, ReportDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(report.hero.id.get())
                .bind(report.villain.id.get())
                .bind(&report.description)
                .bind(&report.incident)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(report.with_id(ReportId::new(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: ReportId,
    ) -> impl Future<Output = Result<Option<CriminalReport>, ReportDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<CriminalReport>, ReportDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        report: CriminalReport,
    ) -> impl Future<Output = Result<CriminalReport, ReportDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(report.hero.id.get())
                .bind(report.villain.id.get())
                .bind(&report.description)
                .bind(&report.incident)
                .bind(report.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                tracing::warn!(report_id = %report.id, "update matched no criminal report");
            }

            Ok(report)
        }
    }

    fn delete(&self, id: ReportId) -> impl Future<Output = Result<(), ReportDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                tracing::warn!(report_id = %id, "delete matched no criminal report");
            }

            Ok(())
        }
    }
}
