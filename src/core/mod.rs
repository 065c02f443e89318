pub mod size;
pub mod status;
pub mod submission;

pub use crate::domain::model::{
    Employee, PackageRecord, PackageSize, ShipmentView, ShippingStatus, StatusPage,
    SubmissionRequest,
};
pub use crate::domain::ports::{Directory, Settings, ShippingService, SubmissionHook};
pub use crate::utils::error::Result;
