extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, String, Symbol, TryIntoVal, Val,
};

use crate::events::{
    CampaignCreated, ProceedsClaimed, SaleConfigured, SellingStarted, SellingStopped,
    UnitsPurchased,
};
use crate::{Crowdsale, CrowdsaleClient, SaleTerms};

fn setup() -> (Env, CrowdsaleClient<'static>, token::StellarAssetClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(5_000);
    let contract_id = env.register(Crowdsale, ());
    let client = CrowdsaleClient::new(&env, &contract_id);

    let token_admin = Address::generate(&env);
    let currency = env.register_stellar_asset_contract_v2(token_admin).address();
    client.init(&currency);
    let currency_sac = token::StellarAssetClient::new(&env, &currency);
    (env, client, currency_sac)
}

fn create_token<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    let addr = env.register_stellar_asset_contract_v2(admin.clone());
    token::Client::new(env, &addr.address())
}

/// Assert the last event came from the contract under `(topic, campaign_id)`
/// and return its data.
fn last_event_data(env: &Env, client: &CrowdsaleClient, topic: Symbol, campaign_id: u64) -> Val {
    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![env, topic.into_val(env), campaign_id.into_val(env)];
    assert_eq!(last_event.1, expected_topics);
    last_event.2
}

/// Campaign 0 with a configured sale of `units`, owned by `owner`.
fn configured(
    env: &Env,
    client: &CrowdsaleClient,
    manager: &Address,
    goal: i128,
) -> (u64, token::Client<'static>, Address) {
    let token_admin = Address::generate(env);
    let units = create_token(env, &token_admin);
    let owner = Address::generate(env);
    token::StellarAssetClient::new(env, &units.address).mint(&owner, &1_000);
    units.approve(&owner, &client.address, &1_000, &10_000);

    let id = client.create(manager, &String::from_str(env, "event campaign"), &goal, &None);
    client.configure(
        manager,
        &id,
        &units.address,
        &owner,
        &SaleTerms {
            price: 2,
            quantity: 100,
            rebate_percent: 10,
        },
        &(env.ledger().timestamp() + 1_000),
    );
    (id, units, owner)
}

#[test]
fn test_campaign_created_event() {
    let (env, client, _) = setup();
    let creator = Address::generate(&env);

    let id = client.create(&creator, &String::from_str(&env, ""), &30, &None);

    let data: CampaignCreated = last_event_data(&env, &client, symbol_short!("created"), id)
        .try_into_val(&env)
        .unwrap();
    assert_eq!(
        data,
        CampaignCreated {
            campaign_id: id,
            goal: 30,
            manager: creator,
        }
    );
}

#[test]
fn test_sale_configured_event() {
    let (env, client, _) = setup();
    let manager = Address::generate(&env);

    let (id, units, owner) = configured(&env, &client, &manager, 50);

    let data: SaleConfigured = last_event_data(&env, &client, symbol_short!("sale_set"), id)
        .try_into_val(&env)
        .unwrap();
    assert_eq!(
        data,
        SaleConfigured {
            campaign_id: id,
            token: units.address.clone(),
            token_owner: owner,
            price: 2,
            quantity: 100,
            rebate_percent: 10,
            end_time: 6_000,
        }
    );
}

#[test]
fn test_start_and_stop_events_carry_timestamps() {
    let (env, client, _) = setup();
    let manager = Address::generate(&env);
    let (id, _, _) = configured(&env, &client, &manager, 50);

    client.start(&manager, &id);
    let started: SellingStarted = last_event_data(&env, &client, symbol_short!("started"), id)
        .try_into_val(&env)
        .unwrap();
    assert_eq!(
        started,
        SellingStarted {
            campaign_id: id,
            start_time: 5_000,
        }
    );

    env.ledger().set_timestamp(5_042);
    client.stop(&manager, &id);
    let stopped: SellingStopped = last_event_data(&env, &client, symbol_short!("stopped"), id)
        .try_into_val(&env)
        .unwrap();
    assert_eq!(
        stopped,
        SellingStopped {
            campaign_id: id,
            stop_time: 5_042,
        }
    );
}

#[test]
fn test_purchase_event_reports_granted_rebate() {
    let (env, client, currency_sac) = setup();
    let manager = Address::generate(&env);
    let (id, _, _) = configured(&env, &client, &manager, 500);
    client.start(&manager, &id);

    let buyer = Address::generate(&env);
    let inviter = Address::generate(&env);
    currency_sac.mint(&buyer, &40);

    client.purchase(&id, &inviter, &20, &buyer);
    let data: UnitsPurchased = last_event_data(&env, &client, symbol_short!("purchase"), id)
        .try_into_val(&env)
        .unwrap();
    assert_eq!(
        data,
        UnitsPurchased {
            campaign_id: id,
            buyer: buyer.clone(),
            amount_paid: 20,
            inviter: inviter.clone(),
            rebate_units: 1,
        }
    );

    client.purchase(&id, &buyer, &20, &buyer);
    let data: UnitsPurchased = last_event_data(&env, &client, symbol_short!("purchase"), id)
        .try_into_val(&env)
        .unwrap();
    assert_eq!(data.inviter, buyer);
    assert_eq!(data.rebate_units, 0);
}

#[test]
fn test_proceeds_claimed_event() {
    let (env, client, currency_sac) = setup();
    let manager = Address::generate(&env);
    let (id, _, _) = configured(&env, &client, &manager, 20);
    client.start(&manager, &id);

    let buyer = Address::generate(&env);
    currency_sac.mint(&buyer, &20);
    client.purchase(&id, &buyer, &20, &buyer);
    client.claim(&id);

    let data: ProceedsClaimed = last_event_data(&env, &client, symbol_short!("claimed"), id)
        .try_into_val(&env)
        .unwrap();
    assert_eq!(
        data,
        ProceedsClaimed {
            campaign_id: id,
            manager,
            amount: 20,
        }
    );
}
