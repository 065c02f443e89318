use crate::core::size;
use crate::domain::model::{Employee, PackageRecord, ShippingStatus, SubmissionRequest};
use crate::domain::ports::{Directory, LogOnlyHook, ShippingService, SubmissionHook};
use crate::utils::error::{Result, SelfServiceError};
use std::sync::Arc;

/// Validates a submission against the directory, records it in the local
/// ledger and hands it to the shipping service.
pub struct SubmissionOrchestrator<D: Directory, S: ShippingService> {
    directory: Arc<D>,
    shipping: S,
    hook: Box<dyn SubmissionHook>,
}

impl<D: Directory, S: ShippingService> SubmissionOrchestrator<D, S> {
    pub fn new(directory: Arc<D>, shipping: S) -> Self {
        Self {
            directory,
            shipping,
            hook: Box::new(LogOnlyHook),
        }
    }

    pub fn with_hook(mut self, hook: Box<dyn SubmissionHook>) -> Self {
        self.hook = hook;
        self
    }

    /// Employees from the directory, doubling as the set of valid receivers.
    pub fn available_receivers(&self) -> Vec<Employee> {
        tracing::info!("Retrieving the list of available receivers from the directory");
        self.directory.employees()
    }

    /// Submits a package for shipping. Returns the upstream confirmation.
    ///
    /// The ledger entry is written before the upstream call and is not rolled
    /// back if that call fails; the configured `SubmissionHook` is notified so
    /// an orphaned `IN_PROGRESS` entry can be dealt with later.
    pub async fn submit(
        &self,
        package_name: &str,
        weight_grams: f64,
        sender_id: &str,
        receiver_id: &str,
    ) -> Result<String> {
        tracing::info!("Validating receiver {} against the directory", receiver_id);
        let receiver = self
            .directory
            .find_employee(receiver_id)
            .ok_or(SelfServiceError::ReceiverNotFound)?;
        tracing::debug!("Receiver {} found: {}", receiver_id, receiver.full_name());

        let request = build_request(package_name, &receiver, weight_grams)?;

        let record = PackageRecord {
            package_name: package_name.to_string(),
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.to_string(),
            status: ShippingStatus::InProgress,
            date_registered: chrono::Local::now().date_naive(),
            date_received: None,
        };
        self.directory.append_package(record.clone());

        tracing::info!(
            "Submitting package '{}' ({}) to the shipping service",
            package_name,
            request.package_size
        );
        match self.shipping.create_order(&request).await {
            Ok(confirmation) => {
                tracing::info!("Package '{}' submitted successfully", package_name);
                Ok(confirmation)
            }
            Err(err) => {
                tracing::error!("Package '{}' submission failed: {}", package_name, err);
                self.hook.downstream_failed(&record, &err);
                Err(err)
            }
        }
    }
}

/// Builds the outbound order from the receiver's directory entry. Fails before
/// any side effect when the weight cannot be classified.
fn build_request(
    package_name: &str,
    receiver: &Employee,
    weight_grams: f64,
) -> Result<SubmissionRequest> {
    Ok(SubmissionRequest {
        package_name: package_name.to_string(),
        receiver_name: receiver.full_name(),
        postal_code: receiver.address.zip_code.clone(),
        street_name: receiver.address.street.clone(),
        package_size: size::classify(weight_grams)?,
    })
}
