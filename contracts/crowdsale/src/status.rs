//! Status oracle.
//!
//! Pure projection from stored flags and the ledger clock to a
//! [`CampaignStatus`]. Never cached: every read and every guard calls
//! [`derive`] again.

use crate::types::{CampaignConfig, CampaignState, CampaignStatus, SaleConfig};

/// Compute the lifecycle status.
///
/// Precedence is fixed: inactive, then succeeded, then failed. A campaign
/// that reaches its goal on or after the deadline still reports `Succeeded`.
/// Without a sale there is no deadline to check.
pub fn derive(
    selling: bool,
    raised: i128,
    goal: i128,
    end_time: Option<u64>,
    now: u64,
) -> CampaignStatus {
    if !selling {
        return CampaignStatus::Inactive;
    }
    if raised >= goal {
        return CampaignStatus::Succeeded;
    }
    match end_time {
        Some(end) if now > end => CampaignStatus::Failed,
        _ => CampaignStatus::Selling,
    }
}

/// [`derive`] over the stored records of one campaign.
pub fn of(
    config: &CampaignConfig,
    state: &CampaignState,
    sale: Option<&SaleConfig>,
    now: u64,
) -> CampaignStatus {
    derive(
        state.selling,
        state.raised,
        config.goal,
        sale.map(|s| s.end_time),
        now,
    )
}
