//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the
//! crowdsale contract:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type      | Description                          |
//! |-----------------|-----------|--------------------------------------|
//! | `CampaignCount` | `u64`     | Next campaign id / number of campaigns |
//! | `Currency`      | `Address` | Base-currency token                  |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key             | Type             | Description                       |
//! |-----------------|------------------|-----------------------------------|
//! | `CampConfig(id)`| `CampaignConfig` | Immutable campaign configuration  |
//! | `CampState(id)` | `CampaignState`  | Mutable campaign counters / flags |
//! | `Sale(id)`      | `SaleConfig`     | Immutable sale parameters, if set |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Campaign ids are dense and sequential, so the `CampConfig(0..count)` keys
//! form an append-only arena; nothing is ever removed.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{CampaignConfig, CampaignState, SaleConfig};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Number of campaigns created (Instance).
    CampaignCount,
    /// Base-currency token address (Instance).
    Currency,
    /// Immutable campaign configuration keyed by ID (Persistent).
    CampConfig(u64),
    /// Mutable campaign state keyed by ID (Persistent).
    CampState(u64),
    /// Sale parameters keyed by campaign ID (Persistent, absent until configured).
    Sale(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Number of campaigns created so far.
pub fn campaign_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Reads, increments, and stores the campaign counter.
/// Returns the ID to use for the *current* campaign (pre-increment value).
pub fn get_and_increment_campaign_id(env: &Env) -> Result<u64, Error> {
    let current = campaign_count(env);
    let next = current.checked_add(1).ok_or(Error::Overflow)?;
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &next);
    Ok(current)
}

pub fn has_currency(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Currency)
}

pub fn set_currency(env: &Env, currency: &Address) {
    env.storage().instance().set(&DataKey::Currency, currency);
    bump_instance(env);
}

pub fn get_currency(env: &Env) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Currency)
        .ok_or(Error::NotInitialized)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save the immutable config and the initial state for a new campaign.
pub fn save_campaign(env: &Env, config: &CampaignConfig) {
    let config_key = DataKey::CampConfig(config.id);
    let state_key = DataKey::CampState(config.id);

    env.storage().persistent().set(&config_key, config);
    env.storage()
        .persistent()
        .set(&state_key, &CampaignState::default());
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load only the immutable campaign configuration.
pub fn load_campaign_config(env: &Env, id: u64) -> Result<CampaignConfig, Error> {
    let key = DataKey::CampConfig(id);
    let config: CampaignConfig = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::UnknownCampaign)?;
    bump_persistent(env, &key);
    Ok(config)
}

/// Load only the mutable campaign state.
pub fn load_campaign_state(env: &Env, id: u64) -> Result<CampaignState, Error> {
    let key = DataKey::CampState(id);
    let state: CampaignState = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::UnknownCampaign)?;
    bump_persistent(env, &key);
    Ok(state)
}

/// Save only the mutable campaign state.
pub fn save_campaign_state(env: &Env, id: u64, state: &CampaignState) {
    let key = DataKey::CampState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// Load the sale parameters, `None` while the campaign is unconfigured.
pub fn load_sale(env: &Env, id: u64) -> Option<SaleConfig> {
    let key = DataKey::Sale(id);
    let sale: Option<SaleConfig> = env.storage().persistent().get(&key);
    if sale.is_some() {
        bump_persistent(env, &key);
    }
    sale
}

pub fn has_sale(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Sale(id))
}

/// Attach the sale parameters. Callers guarantee this runs once per campaign.
pub fn save_sale(env: &Env, id: u64, sale: &SaleConfig) {
    let key = DataKey::Sale(id);
    env.storage().persistent().set(&key, sale);
    bump_persistent(env, &key);
}

/// Load config, state and optional sale in one go.
pub fn load_campaign(
    env: &Env,
    id: u64,
) -> Result<(CampaignConfig, CampaignState, Option<SaleConfig>), Error> {
    let config = load_campaign_config(env, id)?;
    let state = load_campaign_state(env, id)?;
    Ok((config, state, load_sale(env, id)))
}
