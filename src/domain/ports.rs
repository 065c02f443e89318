use crate::domain::model::{
    Employee, PackageRecord, ShipmentView, ShippingStatus, StatusPage, SubmissionRequest,
};
use crate::utils::error::{Result, SelfServiceError};
use async_trait::async_trait;

/// Read-only employee registry plus the append-only submission ledger.
/// The ledger is the sole source of truth for which packages belong to which
/// sender; the upstream shipping service has no sender concept.
pub trait Directory: Send + Sync {
    fn find_employee(&self, id: &str) -> Option<Employee>;

    /// Employees in directory insertion order; doubles as the list of
    /// available receivers.
    fn employees(&self) -> Vec<Employee>;

    /// Appends one ledger entry. No uniqueness check: package names are not
    /// keys, so duplicates are permitted.
    fn append_package(&self, record: PackageRecord);

    /// Snapshot of the full ledger in insertion order, unfiltered.
    fn packages(&self) -> Vec<PackageRecord>;
}

/// Contract of the external shipping service. HTTP status mapping
/// (2xx/400/409/other) lives behind this boundary, see `adapters::shipping`.
#[async_trait]
pub trait ShippingService: Send + Sync {
    /// Submits a shipping order. Returns the upstream confirmation body.
    async fn create_order(&self, request: &SubmissionRequest) -> Result<String>;

    /// Fetches a single shipment by package id; `None` when the upstream has
    /// no matching record.
    async fn order_details(&self, package_id: &str) -> Result<Option<ShipmentView>>;

    /// Fetches shipments in the given status within a pagination window. An
    /// empty vec means the upstream reported no data for that status.
    async fn orders_by_status(
        &self,
        status: ShippingStatus,
        page: StatusPage,
    ) -> Result<Vec<ShipmentView>>;
}

/// Runtime settings shared by the CLI and file-based configs.
pub trait Settings: Send + Sync {
    fn shipping_base_url(&self) -> &str;
    fn status_page(&self) -> StatusPage;
}

/// Notified when a submission's downstream call fails after the ledger entry
/// was already written. The entry is not rolled back; a future extension can
/// use this hook to mark the orphaned record instead of leaving it
/// `IN_PROGRESS` forever.
pub trait SubmissionHook: Send + Sync {
    fn downstream_failed(&self, record: &PackageRecord, error: &SelfServiceError);
}

/// Default hook: log and move on.
pub struct LogOnlyHook;

impl SubmissionHook for LogOnlyHook {
    fn downstream_failed(&self, record: &PackageRecord, error: &SelfServiceError) {
        tracing::warn!(
            "Ledger entry for '{}' (sender {}) is orphaned after downstream failure: {}",
            record.package_name,
            record.sender_id,
            error
        );
    }
}
