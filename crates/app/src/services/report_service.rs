//! Report service — use-cases for managing criminal reports.

use reportdesk_domain::error::{NotFoundError, ReportDeskError};
use reportdesk_domain::id::ReportId;
use reportdesk_domain::report::CriminalReport;

use crate::ports::ReportRepository;

/// Application service for criminal report CRUD operations.
pub struct ReportService<R> {
    repo: R,
}

impl<R: ReportRepository> ReportService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a report by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ReportDeskError::NotFound`] when no report with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_report(&self, id: ReportId) -> Result<CriminalReport, ReportDeskError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "CriminalReport",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all reports. An empty store yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_reports(&self) -> Result<Vec<CriminalReport>, ReportDeskError> {
        self.repo.get_all().await
    }

    /// Persist a new report and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository, e.g. when the
    /// referenced hero or villain does not exist.
    pub async fn create_report(
        &self,
        report: CriminalReport,
    ) -> Result<CriminalReport, ReportDeskError> {
        let created = self.repo.create(report).await?;
        tracing::info!(report_id = %created.id, "criminal report created");
        Ok(created)
    }

    /// Overwrite the report at `id` with `report`.
    ///
    /// Whatever id the caller put in `report` is discarded; the result always
    /// carries `id`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn update_report(
        &self,
        id: ReportId,
        report: CriminalReport,
    ) -> Result<CriminalReport, ReportDeskError> {
        if report.id != id && report.id != ReportId::default() {
            tracing::debug!(path_id = %id, body_id = %report.id, "ignoring id from request body");
        }
        let updated = self.repo.update(report.with_id(id)).await?;
        tracing::info!(report_id = %id, "criminal report updated");
        Ok(updated)
    }

    /// Delete a report by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_report(&self, id: ReportId) -> Result<(), ReportDeskError> {
        self.repo.delete(id).await?;
        tracing::info!(report_id = %id, "criminal report deleted");
        Ok(())
    }
}
