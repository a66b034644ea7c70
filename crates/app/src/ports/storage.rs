//! Storage port — repository trait for criminal report persistence.

use std::future::Future;

use reportdesk_domain::error::ReportDeskError;
use reportdesk_domain::id::ReportId;
use reportdesk_domain::report::CriminalReport;

/// Repository for persisting and querying [`CriminalReport`]s.
///
/// Every method maps to exactly one statement against the store; none of
/// them checks that the referenced hero or villain exists beforehand.
pub trait ReportRepository {
    /// Insert a report and return it with the store-assigned id.
    ///
    /// Only `hero.id`, `villain.id`, `description` and `incident` are
    /// persisted; the incoming `id` is ignored.
    fn create(
        &self,
        report: CriminalReport,
    ) -> impl Future<Output = Result<CriminalReport, ReportDeskError>> + Send;

    /// Get a report, with hero and villain joined in, by its identifier.
    fn get_by_id(
        &self,
        id: ReportId,
    ) -> impl Future<Output = Result<Option<CriminalReport>, ReportDeskError>> + Send;

    /// Get all reports in store order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<CriminalReport>, ReportDeskError>> + Send;

    /// Overwrite the row matching `report.id`.
    ///
    /// Succeeds whether or not a row matched.
    fn update(
        &self,
        report: CriminalReport,
    ) -> impl Future<Output = Result<CriminalReport, ReportDeskError>> + Send;

    /// Delete a report by its identifier.
    ///
    /// Succeeds whether or not a row matched.
    fn delete(&self, id: ReportId) -> impl Future<Output = Result<(), ReportDeskError>> + Send;
}
