//! Contract events.
//!
//! Every event is published under the topic `(symbol, campaign_id)` with one
//! of the structs below as its data. Field order and names are part of the
//! wire format read by the indexer.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u64,
    pub goal: i128,
    pub manager: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfigured {
    pub campaign_id: u64,
    pub token: Address,
    pub token_owner: Address,
    pub price: i128,
    pub quantity: i128,
    pub rebate_percent: u32,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SellingStarted {
    pub campaign_id: u64,
    pub start_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SellingStopped {
    pub campaign_id: u64,
    pub stop_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnitsPurchased {
    pub campaign_id: u64,
    pub buyer: Address,
    pub amount_paid: i128,
    pub inviter: Address,
    /// Rebate actually granted, 0 for self-referrals.
    pub rebate_units: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProceedsClaimed {
    pub campaign_id: u64,
    pub manager: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, campaign_id: u64, goal: i128, manager: Address) {
    env.events().publish(
        (symbol_short!("created"), campaign_id),
        CampaignCreated {
            campaign_id,
            goal,
            manager,
        },
    );
}

#[allow(clippy::too_many_arguments)]
pub fn emit_sale_configured(
    env: &Env,
    campaign_id: u64,
    token: Address,
    token_owner: Address,
    price: i128,
    quantity: i128,
    rebate_percent: u32,
    end_time: u64,
) {
    env.events().publish(
        (symbol_short!("sale_set"), campaign_id),
        SaleConfigured {
            campaign_id,
            token,
            token_owner,
            price,
            quantity,
            rebate_percent,
            end_time,
        },
    );
}

pub fn emit_selling_started(env: &Env, campaign_id: u64, start_time: u64) {
    env.events().publish(
        (symbol_short!("started"), campaign_id),
        SellingStarted {
            campaign_id,
            start_time,
        },
    );
}

pub fn emit_selling_stopped(env: &Env, campaign_id: u64, stop_time: u64) {
    env.events().publish(
        (symbol_short!("stopped"), campaign_id),
        SellingStopped {
            campaign_id,
            stop_time,
        },
    );
}

pub fn emit_units_purchased(
    env: &Env,
    campaign_id: u64,
    buyer: Address,
    amount_paid: i128,
    inviter: Address,
    rebate_units: i128,
) {
    env.events().publish(
        (symbol_short!("purchase"), campaign_id),
        UnitsPurchased {
            campaign_id,
            buyer,
            amount_paid,
            inviter,
            rebate_units,
        },
    );
}

pub fn emit_proceeds_claimed(env: &Env, campaign_id: u64, manager: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("claimed"), campaign_id),
        ProceedsClaimed {
            campaign_id,
            manager,
            amount,
        },
    );
}
