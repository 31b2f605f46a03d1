//! # Types
//!
//! Shared data structures used across all modules of the crowdsale contract.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A campaign is internally stored as up to three separate ledger entries:
//!
//! - [`CampaignConfig`] — written once by `create`; never mutated.
//! - [`CampaignState`] — written on start/stop, on every purchase and on claim.
//! - [`SaleConfig`] — written once by `configure`; never mutated.
//!
//! A campaign without a sale simply has no `SaleConfig` entry, so "not yet
//! configured" is an explicit `Option::None` rather than a zeroed price.
//!
//! ### Status is derived
//!
//! There is no stored status field. [`CampaignStatus`] is recomputed by
//! [`crate::status::derive`] from the selling flag, the raised amount and the
//! ledger clock every time it is read.

use soroban_sdk::{contracttype, Address, String};

/// Lifecycle status of a campaign, as reported by the status oracle.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum CampaignStatus {
    /// Selling is active, goal not reached, deadline not passed.
    Selling = 0,
    /// Raised amount reached the goal while selling.
    Succeeded = 1,
    /// Deadline passed while selling without reaching the goal.
    Failed = 2,
    /// Never started, or stopped by the manager.
    Inactive = 3,
}

/// Immutable campaign configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u64,
    pub description: String,
    pub manager: Address,
    pub goal: i128,
}

/// Mutable campaign state.
///
/// `raised` and `sold` only ever grow; `claimed` flips to `true` once.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CampaignState {
    pub selling: bool,
    pub raised: i128,
    pub sold: i128,
    pub claimed: bool,
    /// Ledger timestamp of the most recent `start`, 0 if never started.
    pub started_at: u64,
    /// Ledger timestamp of the most recent `stop`, 0 if never stopped.
    pub stopped_at: u64,
}

/// Immutable sale parameters, attached at most once per campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    /// Token contract of the units being sold.
    pub token: Address,
    /// Liquidity source the units are drawn from via allowance.
    pub token_owner: Address,
    /// Base-currency amount per unit.
    pub price: i128,
    /// Cap on units sellable (rebate units excluded).
    pub quantity: i128,
    /// Inviter rebate, percent of units bought (0..=100).
    pub rebate_percent: u32,
    /// Ledger timestamp after which an unfinished sale fails.
    pub end_time: u64,
}

/// Per-unit terms passed to `configure`, grouped like `[price, quantity, rebate]`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleTerms {
    pub price: i128,
    pub quantity: i128,
    pub rebate_percent: u32,
}

/// Public view returned by `info`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignInfo {
    pub description: String,
    pub manager: Address,
    pub goal: i128,
}
