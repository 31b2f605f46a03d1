//! Ledger capability.
//!
//! The sale never touches balances directly; it only goes through [`Ledger`].
//! On chain this is any SEP-41 token via [`TokenLedger`]. Tests plug in an
//! in-memory ledger instead.
//!
//! A failed transfer traps, which aborts the enclosing invocation and rolls
//! back every write made by it.

use soroban_sdk::{token, Address, Env};

pub trait Ledger {
    fn balance(&self, holder: &Address) -> i128;

    fn allowance(&self, owner: &Address, spender: &Address) -> i128;

    /// Move `amount` from `owner` to `to`, spending `spender`'s allowance.
    fn transfer_from(&self, spender: &Address, owner: &Address, to: &Address, amount: i128);

    /// Move `amount` held by `from` to `to`.
    fn transfer(&self, from: &Address, to: &Address, amount: i128);
}

/// [`Ledger`] backed by a deployed token contract.
pub struct TokenLedger<'a> {
    client: token::Client<'a>,
}

impl<'a> TokenLedger<'a> {
    pub fn new(env: &Env, token: &Address) -> Self {
        TokenLedger {
            client: token::Client::new(env, token),
        }
    }
}

impl Ledger for TokenLedger<'_> {
    fn balance(&self, holder: &Address) -> i128 {
        self.client.balance(holder)
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> i128 {
        self.client.allowance(owner, spender)
    }

    fn transfer_from(&self, spender: &Address, owner: &Address, to: &Address, amount: i128) {
        self.client.transfer_from(spender, owner, to, &amount);
    }

    fn transfer(&self, from: &Address, to: &Address, amount: i128) {
        self.client.transfer(from, to, &amount);
    }
}
