#![allow(dead_code)]

extern crate std;

use crate::types::{CampaignInfo, CampaignStatus, SaleConfig};

/// INV-1: Campaign goal must always be positive.
pub fn assert_goal_positive(id: u64, info: &CampaignInfo) {
    assert!(
        info.goal > 0,
        "INV-1 violated: campaign {} has non-positive goal ({})",
        id,
        info.goal
    );
}

/// INV-2: Raised amount never decreases.
pub fn assert_raised_monotonic(raised_before: i128, raised_after: i128) {
    assert!(
        raised_after >= raised_before,
        "INV-2 violated: raised decreased from {} to {}",
        raised_before,
        raised_after
    );
}

/// INV-3: Sold units never decrease and never exceed the sale quantity.
pub fn assert_sold_within_quantity(sold_before: i128, sold_after: i128, sale: &SaleConfig) {
    assert!(
        sold_after >= sold_before,
        "INV-3 violated: sold decreased from {} to {}",
        sold_before,
        sold_after
    );
    assert!(
        sold_after <= sale.quantity,
        "INV-3 violated: sold {} exceeds quantity {}",
        sold_after,
        sale.quantity
    );
}

/// INV-4: A purchase raises exactly what was paid.
pub fn assert_purchase_invariant(raised_before: i128, raised_after: i128, amount_paid: i128) {
    assert_eq!(
        raised_after,
        raised_before + amount_paid,
        "INV-4 violated: {} + {} != {}",
        raised_before,
        amount_paid,
        raised_after
    );
}

/// INV-5: Campaign ids are sequential starting from 0.
pub fn assert_sequential_ids(ids: &[u64]) {
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(
            *id, i as u64,
            "INV-5 violated: expected id {}, got {}",
            i, id
        );
    }
}

/// INV-6: Sale terms never change once configured.
pub fn assert_sale_immutable(original: &SaleConfig, current: &SaleConfig) {
    assert_eq!(original, current, "INV-6 violated: sale terms changed");
}

/// INV-7: A claimed campaign must have been reported as succeeded.
pub fn assert_claim_requires_success(claimed: bool, status_at_claim: CampaignStatus) {
    if claimed {
        assert_eq!(
            status_at_claim,
            CampaignStatus::Succeeded,
            "INV-7 violated: claimed while {:?}",
            status_at_claim
        );
    }
}
