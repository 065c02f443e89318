use crate::domain::model::PackageSize;
use crate::utils::error::{Result, SelfServiceError};

/// Converts a package weight in grams to a t-shirt size.
///
/// Thresholds are half-open: `[0,200) -> S`, `[200,1000) -> M`,
/// `[1000,10000) -> L`, everything from 10kg up -> XL. Negative (or NaN)
/// weights come back as a typed `InvalidWeight` error so the caller can never
/// feed an error message into a downstream request field.
pub fn classify(weight_grams: f64) -> Result<PackageSize> {
    if weight_grams.is_nan() || weight_grams < 0.0 {
        return Err(SelfServiceError::InvalidWeight(weight_grams));
    }

    let size = if weight_grams < 200.0 {
        PackageSize::S
    } else if weight_grams < 1000.0 {
        PackageSize::M
    } else if weight_grams < 10_000.0 {
        PackageSize::L
    } else {
        PackageSize::XL
    };
    Ok(size)
}
