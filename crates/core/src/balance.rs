use serde::Serialize;

pub const ANNUAL_CAP_DAYS: u32 = 24;
pub const ANNUAL_ACCRUAL_PER_MONTH: u32 = 2;
pub const SICK_DAYS: u32 = 12;
pub const CASUAL_DAYS: u32 = 10;

/// Leave available after a given length of service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaveBalance {
    pub annual: u32,
    pub sick: u32,
    pub casual: u32,
    pub total: u32,
}

impl LeaveBalance {
    pub fn for_months(months: u32) -> Self {
        let annual = months
            .saturating_mul(ANNUAL_ACCRUAL_PER_MONTH)
            .min(ANNUAL_CAP_DAYS);
        Self {
            annual,
            sick: SICK_DAYS,
            casual: CASUAL_DAYS,
            total: annual + SICK_DAYS + CASUAL_DAYS,
        }
    }
}
