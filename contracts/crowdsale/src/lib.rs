//! # Crowdsale Contract
//!
//! Campaign registry plus a token crowd-sale per campaign. Managers open a
//! campaign with a funding goal, attach sale terms once, and toggle selling;
//! anyone can then buy units with the base currency. Once the goal is met the
//! manager claims the proceeds exactly once.
//!
//! | Phase         | Entry Point(s)                                   |
//! |---------------|--------------------------------------------------|
//! | Bootstrap     | [`Crowdsale::init`]                              |
//! | Registration  | [`Crowdsale::create`]                            |
//! | Configuration | [`Crowdsale::configure`]                         |
//! | Lifecycle     | [`Crowdsale::start`], [`Crowdsale::stop`]        |
//! | Settlement    | [`Crowdsale::purchase`]                          |
//! | Withdrawal    | [`Crowdsale::claim`]                             |
//! | Queries       | `info`, `sale_info`, `sold_units`, `raised`, `is_claimed`, `status`, `count`, `available_units`, `currency` |
//!
//! ## Architecture
//!
//! Storage access is delegated to [`storage`], status computation to
//! [`status`], settlement arithmetic and token movements to [`sale`] over the
//! [`ledger::Ledger`] capability. This file holds the entry points, their
//! guards and event emissions.
//!
//! Every entry point either completes or returns an [`Error`]; a failed
//! invocation leaves no writes behind. Counters are written before any token
//! transfer is made, and the host rejects re-entry into this contract from
//! inside a token call.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};

pub mod events;
pub mod ledger;
pub mod sale;
pub mod status;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

use ledger::{Ledger, TokenLedger};
pub use types::{
    CampaignConfig, CampaignInfo, CampaignState, CampaignStatus, SaleConfig, SaleTerms,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidAmount = 1,
    UnknownCampaign = 2,
    NotManager = 3,
    InvalidToken = 4,
    InvalidOwner = 5,
    InvalidPrice = 6,
    InvalidQuantity = 7,
    InvalidDeadline = 8,
    AlreadyConfigured = 9,
    InsufficientAllowance = 10,
    NotConfigured = 11,
    AlreadySelling = 12,
    NotSelling = 13,
    SoldOut = 14,
    NotSuccessful = 15,
    AlreadyClaimed = 16,
    InvalidRebate = 17,
    AlreadyInitialized = 18,
    NotInitialized = 19,
    Overflow = 20,
}

#[contract]
pub struct Crowdsale;

#[contractimpl]
impl Crowdsale {
    // ─────────────────────────────────────────────────────────
    // Bootstrap
    // ─────────────────────────────────────────────────────────

    /// Set the base-currency token used for purchases and payouts.
    ///
    /// Must be called exactly once, in the deployment transaction.
    pub fn init(env: Env, currency: Address) -> Result<(), Error> {
        if storage::has_currency(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::set_currency(&env, &currency);
        Ok(())
    }

    pub fn currency(env: Env) -> Result<Address, Error> {
        storage::get_currency(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Registry
    // ─────────────────────────────────────────────────────────

    /// Open a campaign and return its sequential id.
    ///
    /// `manager = None` makes `creator` the manager.
    pub fn create(
        env: Env,
        creator: Address,
        description: String,
        goal: i128,
        manager: Option<Address>,
    ) -> Result<u64, Error> {
        creator.require_auth();

        if goal <= 0 {
            return Err(Error::InvalidAmount);
        }

        let manager = manager.unwrap_or(creator);
        let id = storage::get_and_increment_campaign_id(&env)?;

        storage::save_campaign(
            &env,
            &CampaignConfig {
                id,
                description,
                manager: manager.clone(),
                goal,
            },
        );

        events::emit_campaign_created(&env, id, goal, manager);
        Ok(id)
    }

    pub fn info(env: Env, campaign_id: u64) -> Result<CampaignInfo, Error> {
        let config = storage::load_campaign_config(&env, campaign_id)?;
        Ok(CampaignInfo {
            description: config.description,
            manager: config.manager,
            goal: config.goal,
        })
    }

    /// Number of campaigns created.
    pub fn count(env: Env) -> u64 {
        storage::campaign_count(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Sale configuration & lifecycle (manager only)
    // ─────────────────────────────────────────────────────────

    /// Attach the sale terms. Locked forever after the first success.
    ///
    /// Guards run in a fixed order: manager, token, owner, price, quantity,
    /// rebate, deadline, already configured, owner allowance. The allowance
    /// only has to cover `quantity`; rebates are checked per purchase.
    pub fn configure(
        env: Env,
        caller: Address,
        campaign_id: u64,
        token: Address,
        token_owner: Address,
        terms: SaleTerms,
        end_time: u64,
    ) -> Result<(), Error> {
        caller.require_auth();
        let config = storage::load_campaign_config(&env, campaign_id)?;
        require_manager(&config, &caller)?;

        let this = env.current_contract_address();
        let is_currency = storage::get_currency(&env).is_ok_and(|c| c == token);
        if token == this || is_currency {
            return Err(Error::InvalidToken);
        }
        if token_owner == this || token_owner == token {
            return Err(Error::InvalidOwner);
        }
        if terms.price <= 0 {
            return Err(Error::InvalidPrice);
        }
        if terms.quantity <= 0 {
            return Err(Error::InvalidQuantity);
        }
        if terms.rebate_percent > 100 {
            return Err(Error::InvalidRebate);
        }
        if end_time <= env.ledger().timestamp() {
            return Err(Error::InvalidDeadline);
        }
        if storage::has_sale(&env, campaign_id) {
            return Err(Error::AlreadyConfigured);
        }
        sale::ensure_allowance(
            &TokenLedger::new(&env, &token),
            &token_owner,
            &this,
            terms.quantity,
        )?;

        let sale = SaleConfig {
            token,
            token_owner,
            price: terms.price,
            quantity: terms.quantity,
            rebate_percent: terms.rebate_percent,
            end_time,
        };
        storage::save_sale(&env, campaign_id, &sale);

        events::emit_sale_configured(
            &env,
            campaign_id,
            sale.token,
            sale.token_owner,
            sale.price,
            sale.quantity,
            sale.rebate_percent,
            sale.end_time,
        );
        Ok(())
    }

    /// Turn selling on. Allowed from any status except `Selling`.
    pub fn start(env: Env, caller: Address, campaign_id: u64) -> Result<(), Error> {
        caller.require_auth();
        let (config, mut state, sale) = storage::load_campaign(&env, campaign_id)?;
        require_manager(&config, &caller)?;

        let sale = sale.ok_or(Error::NotConfigured)?;
        let now = env.ledger().timestamp();
        if status::of(&config, &state, Some(&sale), now) == CampaignStatus::Selling {
            return Err(Error::AlreadySelling);
        }

        state.selling = true;
        state.started_at = now;
        storage::save_campaign_state(&env, campaign_id, &state);

        events::emit_selling_started(&env, campaign_id, now);
        Ok(())
    }

    /// Turn selling off. Only a `Selling` campaign can be stopped.
    pub fn stop(env: Env, caller: Address, campaign_id: u64) -> Result<(), Error> {
        caller.require_auth();
        let (config, mut state, sale) = storage::load_campaign(&env, campaign_id)?;
        require_manager(&config, &caller)?;

        let now = env.ledger().timestamp();
        if status::of(&config, &state, sale.as_ref(), now) != CampaignStatus::Selling {
            return Err(Error::NotSelling);
        }

        state.selling = false;
        state.stopped_at = now;
        storage::save_campaign_state(&env, campaign_id, &state);

        events::emit_selling_stopped(&env, campaign_id, now);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Settlement
    // ─────────────────────────────────────────────────────────

    /// Buy units for `amount_paid` of the base currency.
    ///
    /// `buyer` receives `amount_paid / price` units; a distinct `inviter`
    /// receives the rebate on top. Rebate units are not counted as sold.
    /// Success is not recorded here: the next status read picks it up.
    pub fn purchase(
        env: Env,
        campaign_id: u64,
        inviter: Address,
        amount_paid: i128,
        buyer: Address,
    ) -> Result<(), Error> {
        buyer.require_auth();
        let currency = storage::get_currency(&env)?;
        let (config, mut state, sale) = storage::load_campaign(&env, campaign_id)?;

        let now = env.ledger().timestamp();
        if status::of(&config, &state, sale.as_ref(), now) != CampaignStatus::Selling {
            return Err(Error::NotSelling);
        }
        let sale = sale.ok_or(Error::NotSelling)?;

        let quote = sale::quote(&sale, state.sold, amount_paid, inviter == buyer)?;

        let this = env.current_contract_address();
        let units = TokenLedger::new(&env, &sale.token);
        sale::ensure_allowance(&units, &sale.token_owner, &this, quote.total()?)?;

        state.sold = state
            .sold
            .checked_add(quote.units)
            .ok_or(Error::Overflow)?;
        state.raised = state
            .raised
            .checked_add(amount_paid)
            .ok_or(Error::Overflow)?;
        storage::save_campaign_state(&env, campaign_id, &state);

        TokenLedger::new(&env, &currency).transfer(&buyer, &this, amount_paid);
        sale::deliver(&units, &this, &sale, &quote, &buyer, &inviter);

        events::emit_units_purchased(
            &env,
            campaign_id,
            buyer,
            amount_paid,
            inviter,
            quote.rebate_units,
        );
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Withdrawal
    // ─────────────────────────────────────────────────────────

    /// Pay everything raised to the manager. Succeeds once, and only for a
    /// campaign currently reported as `Succeeded`.
    pub fn claim(env: Env, campaign_id: u64) -> Result<(), Error> {
        let currency = storage::get_currency(&env)?;
        let (config, mut state, sale) = storage::load_campaign(&env, campaign_id)?;
        config.manager.require_auth();

        let now = env.ledger().timestamp();
        if status::of(&config, &state, sale.as_ref(), now) != CampaignStatus::Succeeded {
            return Err(Error::NotSuccessful);
        }
        if state.claimed {
            return Err(Error::AlreadyClaimed);
        }

        state.claimed = true;
        storage::save_campaign_state(&env, campaign_id, &state);

        TokenLedger::new(&env, &currency).transfer(
            &env.current_contract_address(),
            &config.manager,
            state.raised,
        );

        events::emit_proceeds_claimed(&env, campaign_id, config.manager, state.raised);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Sale terms, `None` until `configure` succeeded.
    pub fn sale_info(env: Env, campaign_id: u64) -> Result<Option<SaleConfig>, Error> {
        storage::load_campaign_config(&env, campaign_id)?;
        Ok(storage::load_sale(&env, campaign_id))
    }

    pub fn sold_units(env: Env, campaign_id: u64) -> Result<i128, Error> {
        Ok(storage::load_campaign_state(&env, campaign_id)?.sold)
    }

    pub fn raised(env: Env, campaign_id: u64) -> Result<i128, Error> {
        Ok(storage::load_campaign_state(&env, campaign_id)?.raised)
    }

    pub fn is_claimed(env: Env, campaign_id: u64) -> Result<bool, Error> {
        Ok(storage::load_campaign_state(&env, campaign_id)?.claimed)
    }

    pub fn status(env: Env, campaign_id: u64) -> Result<CampaignStatus, Error> {
        let (config, state, sale) = storage::load_campaign(&env, campaign_id)?;
        Ok(status::of(
            &config,
            &state,
            sale.as_ref(),
            env.ledger().timestamp(),
        ))
    }

    /// Units the sale could still deliver: bounded by the remaining quantity
    /// and by the owner's current allowance and balance. 0 when unconfigured.
    pub fn available_units(env: Env, campaign_id: u64) -> Result<i128, Error> {
        let state = storage::load_campaign_state(&env, campaign_id)?;
        Ok(match storage::load_sale(&env, campaign_id) {
            Some(sale) => sale::available_units(
                &TokenLedger::new(&env, &sale.token),
                &sale,
                state.sold,
                &env.current_contract_address(),
            ),
            None => 0,
        })
    }
}

fn require_manager(config: &CampaignConfig, caller: &Address) -> Result<(), Error> {
    if *caller != config.manager {
        return Err(Error::NotManager);
    }
    Ok(())
}
