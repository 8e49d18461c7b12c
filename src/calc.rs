//! Daily claim-resolution targets.

use crate::error::{ClaimsError, ClaimsResult};

/// Fixed month length used for the target horizon.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Average number of claims that must be resolved per day to keep pace with
/// `daily_inflow` and clear `pending_backlog` within `target_months`.
///
/// `target_months` must be positive; the input widgets keep inflow and
/// backlog non-negative, so those are not re-checked here. Returns full
/// precision; callers round for display.
pub fn compute_daily_target(
    daily_inflow: f64,
    pending_backlog: f64,
    target_months: f64,
) -> ClaimsResult<f64> {
    if !target_months.is_finite() || target_months <= 0.0 {
        return Err(ClaimsError::InvalidArgument(format!(
            "target_months must be positive, got {target_months}"
        )));
    }
    if !daily_inflow.is_finite() || !pending_backlog.is_finite() {
        return Err(ClaimsError::InvalidArgument(
            "inflow and backlog must be finite numbers".into(),
        ));
    }

    let total_days = target_months * DAYS_PER_MONTH;
    Ok((pending_backlog + daily_inflow * total_days) / total_days)
}
