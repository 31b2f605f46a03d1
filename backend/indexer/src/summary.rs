//! Per-campaign totals folded from stored events.

use serde::Serialize;

use crate::events::{EventKind, EventRecord};

/// Snapshot of a campaign as seen through its events.
///
/// `selling` is the manager's last start/stop toggle, not the contract's
/// derived status: success and deadline expiry emit no event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CampaignSummary {
    pub campaign_id: String,
    pub goal: Option<i128>,
    pub quantity: Option<i128>,
    pub purchases: u64,
    pub total_raised: i128,
    pub total_rebate: i128,
    pub selling: bool,
    pub claimed: bool,
    pub claimed_amount: Option<i128>,
}

impl CampaignSummary {
    /// Fold `records` (ledger order) for `campaign_id`; other campaigns are skipped.
    pub fn from_records(campaign_id: &str, records: &[EventRecord]) -> Self {
        let mut summary = CampaignSummary {
            campaign_id: campaign_id.to_string(),
            ..Default::default()
        };

        for record in records
            .iter()
            .filter(|r| r.campaign_id.as_deref() == Some(campaign_id))
        {
            match record.kind() {
                EventKind::CampaignCreated => summary.goal = parse_amount(&record.amount),
                EventKind::SaleConfigured => summary.quantity = parse_amount(&record.amount),
                EventKind::SellingStarted => summary.selling = true,
                EventKind::SellingStopped => summary.selling = false,
                EventKind::UnitsPurchased => {
                    summary.purchases += 1;
                    let amount = parse_amount(&record.amount).unwrap_or(0);
                    let rebate = parse_amount(&record.rebate).unwrap_or(0);
                    summary.total_raised = summary.total_raised.saturating_add(amount);
                    summary.total_rebate = summary.total_rebate.saturating_add(rebate);
                }
                EventKind::ProceedsClaimed => {
                    summary.claimed = true;
                    summary.claimed_amount = parse_amount(&record.amount);
                }
                EventKind::Unknown => {}
            }
        }
        summary
    }
}

fn parse_amount(raw: &Option<String>) -> Option<i128> {
    raw.as_deref().and_then(|s| s.parse().ok())
}
