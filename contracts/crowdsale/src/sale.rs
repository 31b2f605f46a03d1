//! Crowd-sale settlement.
//!
//! Purchase settlement is split into three steps so the contract can write
//! its own counters between the checks and the external transfers:
//!
//! 1. [`quote`] — unit count, oversell and rebate arithmetic (pure).
//! 2. [`ensure_allowance`] — the token owner still covers units + rebate.
//! 3. [`deliver`] — the actual `transfer_from` calls.

use soroban_sdk::Address;

use crate::ledger::Ledger;
use crate::types::SaleConfig;
use crate::Error;

/// Outcome of pricing one purchase.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Quote {
    /// Units delivered to the buyer and counted as sold.
    pub units: i128,
    /// Bonus units for the inviter, not counted as sold.
    pub rebate_units: i128,
}

impl Quote {
    /// Units the token owner has to release for this purchase.
    pub fn total(&self) -> Result<i128, Error> {
        self.units
            .checked_add(self.rebate_units)
            .ok_or(Error::Overflow)
    }
}

/// Price a purchase of `amount_paid` against a sale with `sold` units gone.
///
/// Units are `amount_paid / price`, floored. Zero (or negative) units, or
/// more units than remain under `quantity`, is `SoldOut`. The rebate is
/// `units * rebate_percent / 100`, floored, and zero for self-referrals.
pub fn quote(
    sale: &SaleConfig,
    sold: i128,
    amount_paid: i128,
    self_referral: bool,
) -> Result<Quote, Error> {
    let units = amount_paid / sale.price;
    if units <= 0 {
        return Err(Error::SoldOut);
    }
    let sold_after = sold.checked_add(units).ok_or(Error::Overflow)?;
    if sold_after > sale.quantity {
        return Err(Error::SoldOut);
    }

    let rebate_units = if self_referral {
        0
    } else {
        units
            .checked_mul(sale.rebate_percent as i128)
            .ok_or(Error::Overflow)?
            / 100
    };

    Ok(Quote {
        units,
        rebate_units,
    })
}

/// Fail with `InsufficientAllowance` unless `owner` lets `spender` move `amount`.
pub fn ensure_allowance<L: Ledger>(
    ledger: &L,
    owner: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), Error> {
    if ledger.allowance(owner, spender) < amount {
        return Err(Error::InsufficientAllowance);
    }
    Ok(())
}

/// Release the quoted units from the token owner.
pub fn deliver<L: Ledger>(
    ledger: &L,
    spender: &Address,
    sale: &SaleConfig,
    quote: &Quote,
    buyer: &Address,
    inviter: &Address,
) {
    ledger.transfer_from(spender, &sale.token_owner, buyer, quote.units);
    if quote.rebate_units > 0 {
        ledger.transfer_from(spender, &sale.token_owner, inviter, quote.rebate_units);
    }
}

/// Units that could still be delivered right now.
pub fn available_units<L: Ledger>(
    ledger: &L,
    sale: &SaleConfig,
    sold: i128,
    spender: &Address,
) -> i128 {
    let remaining = sale.quantity - sold;
    let allowance = ledger.allowance(&sale.token_owner, spender);
    let balance = ledger.balance(&sale.token_owner);
    remaining.min(allowance).min(balance).max(0)
}
