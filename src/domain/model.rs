use serde::{Deserialize, Serialize};
use std::fmt;

/// Directory entry for an employee eligible to send or receive packages.
/// Seeded once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub address: Address,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Shipment status as tracked by the upstream shipping service.
/// `ALL` fixes the enumeration order used when fanning out status queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingStatus {
    InProgress,
    Sent,
    Delivered,
}

impl ShippingStatus {
    pub const ALL: [ShippingStatus; 3] = [
        ShippingStatus::InProgress,
        ShippingStatus::Sent,
        ShippingStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingStatus::InProgress => "IN_PROGRESS",
            ShippingStatus::Sent => "SENT",
            ShippingStatus::Delivered => "DELIVERED",
        }
    }

    /// Case-insensitive parse of a caller-supplied status filter.
    pub fn parse(input: &str) -> Option<ShippingStatus> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(input))
    }
}

impl fmt::Display for ShippingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// T-shirt size category derived from package weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PackageSize {
    S,
    M,
    L,
    XL,
}

impl PackageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageSize::S => "S",
            PackageSize::M => "M",
            PackageSize::L => "L",
            PackageSize::XL => "XL",
        }
    }
}

impl fmt::Display for PackageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Local ledger entry recording a submission attempt. Append-only: entries are
/// never updated or deleted, so `date_received` stays `None` for now (the
/// upstream service owns delivery confirmation and there is no write-back yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRecord {
    pub package_name: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub status: ShippingStatus,
    pub date_registered: chrono::NaiveDate,
    pub date_received: Option<chrono::NaiveDate>,
}

/// Outbound body for `POST /shippingOrders`. Derived per submission, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub package_name: String,
    pub receiver_name: String,
    pub postal_code: String,
    pub street_name: String,
    pub package_size: PackageSize,
}

/// Shipment record as reported by the upstream shipping service. The service
/// has no notion of senders; everything except the package name is optional on
/// the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentView {
    #[serde(default)]
    pub package_id: Option<String>,
    pub package_name: String,
    #[serde(default)]
    pub package_size: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub street_name: Option<String>,
    #[serde(default)]
    pub receiver_name: Option<String>,
    #[serde(default)]
    pub order_status: Option<String>,
    #[serde(default)]
    pub expected_delivery_date: Option<String>,
    #[serde(default)]
    pub actual_delivery_date_time: Option<String>,
}

/// Pagination window forwarded to per-status upstream queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPage {
    pub offset: u32,
    pub limit: u32,
}

impl Default for StatusPage {
    fn default() -> Self {
        Self {
            offset: 1,
            limit: 10,
        }
    }
}
