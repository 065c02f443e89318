use crate::domain::model::{ShipmentView, ShippingStatus, StatusPage, SubmissionRequest};
use crate::domain::ports::ShippingService;
use crate::utils::error::{Result, SelfServiceError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

const SHIPPING_ORDERS_PATH: &str = "/shippingOrders";

/// reqwest-backed client for the external shipping service. All HTTP status
/// interpretation lives here; the core only sees the typed contract.
pub struct HttpShippingService {
    client: Client,
    base_url: String,
}

impl HttpShippingService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn orders_url(&self) -> String {
        format!("{}{}", self.base_url, SHIPPING_ORDERS_PATH)
    }
}

#[async_trait]
impl ShippingService for HttpShippingService {
    async fn create_order(&self, request: &SubmissionRequest) -> Result<String> {
        let url = self.orders_url();
        tracing::info!("Invoking shipping service to submit the package: {}", url);

        // Transport failures count as failed submissions, same as a non-2xx.
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| SelfServiceError::SubmissionFailed(e.to_string()))?;

        let status = response.status();
        tracing::debug!("Shipping service responded with {}", status);
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            Ok(body)
        } else if status == StatusCode::BAD_REQUEST || status == StatusCode::CONFLICT {
            Err(SelfServiceError::SubmissionRejected(body))
        } else {
            Err(SelfServiceError::SubmissionFailed(status.to_string()))
        }
    }

    async fn order_details(&self, package_id: &str) -> Result<Option<ShipmentView>> {
        let url = self.orders_url();
        tracing::info!("Fetching package details from {} for {}", url, package_id);

        let response = self
            .client
            .get(&url)
            .query(&[("packageId", package_id)])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SelfServiceError::UnexpectedStatus(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(None);
        }
        let view: ShipmentView = serde_json::from_slice(&bytes)?;
        Ok(Some(view))
    }

    async fn orders_by_status(
        &self,
        status: ShippingStatus,
        page: StatusPage,
    ) -> Result<Vec<ShipmentView>> {
        let url = self.orders_url();
        tracing::info!("Fetching {} packages from {}", status, url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("status", status.as_str().to_string()),
                ("offset", page.offset.to_string()),
                ("limit", page.limit.to_string()),
            ])
            .send()
            .await?;

        let http_status = response.status();
        if http_status == StatusCode::NOT_FOUND || http_status == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        if !http_status.is_success() {
            return Err(SelfServiceError::UnexpectedStatus(http_status.as_u16()));
        }

        // An absent body means "no data for this status", not an error.
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        let views: Vec<ShipmentView> = serde_json::from_slice(&bytes)?;
        Ok(views)
    }
}
