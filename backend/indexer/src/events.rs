//! Canonical event types emitted by the crowdsale contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/crowdsale/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the crowdsale contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A campaign was opened (`created` topic).
    CampaignCreated,
    /// Sale terms were attached to a campaign (`sale_set` topic).
    SaleConfigured,
    /// The manager turned selling on (`started` topic).
    SellingStarted,
    /// The manager turned selling off (`stopped` topic).
    SellingStopped,
    /// Units were bought (`purchase` topic).
    UnitsPurchased,
    /// Proceeds were paid to the manager (`claimed` topic).
    ProceedsClaimed,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::CampaignCreated,
            "sale_set" => Self::SaleConfigured,
            "started" => Self::SellingStarted,
            "stopped" => Self::SellingStopped,
            "purchase" => Self::UnitsPurchased,
            "claimed" => Self::ProceedsClaimed,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CampaignCreated => "campaign_created",
            Self::SaleConfigured => "sale_configured",
            Self::SellingStarted => "selling_started",
            Self::SellingStopped => "selling_stopped",
            Self::UnitsPurchased => "units_purchased",
            Self::ProceedsClaimed => "proceeds_claimed",
            Self::Unknown => "unknown",
        }
    }

    /// Inverse of [`EventKind::as_str`]; unrecognised strings map to `Unknown`.
    pub fn from_stored(s: &str) -> Self {
        match s {
            "campaign_created" => Self::CampaignCreated,
            "sale_configured" => Self::SaleConfigured,
            "selling_started" => Self::SellingStarted,
            "selling_stopped" => Self::SellingStopped,
            "units_purchased" => Self::UnitsPurchased,
            "proceeds_claimed" => Self::ProceedsClaimed,
            _ => Self::Unknown,
        }
    }
}

/// A fully decoded crowdsale event, ready to be stored in the database.
///
/// Column meaning per kind:
///
/// | kind               | actor    | counterparty | amount      | rebate       |
/// |--------------------|----------|--------------|-------------|--------------|
/// | `campaign_created` | manager  |              | goal        |              |
/// | `sale_configured`  | token    | token owner  | quantity    | rebate %     |
/// | `selling_started`  |          |              |             |              |
/// | `selling_stopped`  |          |              |             |              |
/// | `units_purchased`  | buyer    | inviter      | amount paid | rebate units |
/// | `proceeds_claimed` | manager  |              | amount      |              |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrowdsaleEvent {
    pub event_id: Option<String>,
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub counterparty: Option<String>,
    pub amount: Option<String>,
    pub rebate: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_id: Option<String>,
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub counterparty: Option<String>,
    pub amount: Option<String>,
    pub rebate: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}

impl EventRecord {
    pub fn kind(&self) -> EventKind {
        EventKind::from_stored(&self.event_type)
    }
}
