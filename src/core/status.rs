use crate::domain::model::{ShipmentView, ShippingStatus, StatusPage};
use crate::domain::ports::{Directory, ShippingService};
use crate::utils::error::Result;
use std::collections::HashSet;
use std::sync::Arc;

/// Outcome of reconciling one per-status upstream response against the local
/// ledger. `NoData` (upstream returned nothing, or the ledger has no entries
/// to match against) is distinct from `Matches` with an empty vec, which means
/// everything was filtered out. Only `Matches` contributes to aggregation.
#[derive(Debug, PartialEq)]
pub enum Reconciled {
    NoData,
    Matches(Vec<ShipmentView>),
}

/// Fans out status queries to the shipping service and restricts the results
/// to packages known to the local ledger.
pub struct StatusAggregator<D: Directory, S: ShippingService> {
    directory: Arc<D>,
    shipping: S,
    page: StatusPage,
}

impl<D: Directory, S: ShippingService> StatusAggregator<D, S> {
    pub fn new(directory: Arc<D>, shipping: S, page: StatusPage) -> Self {
        Self {
            directory,
            shipping,
            page,
        }
    }

    /// Lists reconciled shipments for a sender, optionally restricted to one
    /// status. An unrecognized filter falls back to querying every status, the
    /// same as no filter at all; callers get no signal that their filter was
    /// ignored. Kept as-is for compatibility with the existing API behavior.
    pub async fn list_for_sender(
        &self,
        sender_id: &str,
        status_filter: Option<&str>,
    ) -> Result<Vec<ShipmentView>> {
        let statuses: Vec<ShippingStatus> = match status_filter.and_then(ShippingStatus::parse) {
            Some(status) => {
                tracing::info!("Retrieving packages for status {}", status);
                vec![status]
            }
            None => {
                tracing::info!("Retrieving packages across all statuses");
                ShippingStatus::ALL.to_vec()
            }
        };

        // Sequential fan-out; concatenation order follows the fixed status
        // enumeration order.
        let mut aggregated = Vec::new();
        for status in statuses {
            let remote = self.shipping.orders_by_status(status, self.page).await?;
            match self.reconcile(remote) {
                Reconciled::Matches(views) => aggregated.extend(views),
                Reconciled::NoData => {
                    tracing::debug!("No data to reconcile for status {} (sender {})", status, sender_id);
                }
            }
        }
        Ok(aggregated)
    }

    /// Direct passthrough lookup by package id; no reconciliation.
    pub async fn package_details(&self, package_id: &str) -> Result<Option<ShipmentView>> {
        tracing::info!("Retrieving package details for {}", package_id);
        self.shipping.order_details(package_id).await
    }

    /// Restricts upstream shipment views to package names present in the
    /// ledger. Matching is by name across the *entire* ledger, not scoped to
    /// the requesting sender: two senders submitting identically named
    /// packages will see each other's shipments. Known quirk of the name-only
    /// key, kept for compatibility; see the regression test below.
    fn reconcile(&self, remote: Vec<ShipmentView>) -> Reconciled {
        if remote.is_empty() {
            return Reconciled::NoData;
        }
        let ledger = self.directory.packages();
        if ledger.is_empty() {
            return Reconciled::NoData;
        }

        let known_names: HashSet<String> =
            ledger.into_iter().map(|record| record.package_name).collect();
        Reconciled::Matches(
            remote
                .into_iter()
                .filter(|view| known_names.contains(&view.package_name))
                .collect(),
        )
    }
}
