use sale_token::{SaleToken, SaleTokenClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};
use token_sale::{
    ConversionRate, EarlyClose, SaleCaps, SaleConfig, SaleWindow, TokenSaleContract,
    TokenSaleContractClient,
};

pub struct SaleTest<'a> {
    pub env: &'a Env,
    pub sale: TokenSaleContractClient<'a>,
    pub sale_id: Address,
    pub token: SaleTokenClient<'a>,
    pub native: token::Client<'a>,
    pub native_admin: token::StellarAssetClient<'a>,
    pub controller: Address,
    pub beneficiary: Address,
}

impl<'a> SaleTest<'a> {
    pub fn contributor(&self, funds: i128) -> Address {
        let contributor = Address::generate(self.env);
        self.native_admin.mint(&contributor, &funds);
        contributor
    }

    pub fn at(&self, timestamp: u64) {
        self.env.ledger().with_mut(|li| li.timestamp = timestamp);
    }
}

/// Sale over `[1_000, 2_000)` paying 2.5 tokens (7 decimals) per native unit,
/// soft cap 1_000, hard cap 5_000, at most 2_000 per contributor.
pub fn setup_sale<'a>(env: &'a Env, token_supply_cap: Option<i128>) -> SaleTest<'a> {
    env.mock_all_auths();

    let token_admin = Address::generate(env);
    let controller = Address::generate(env);
    let beneficiary = Address::generate(env);

    let native_id = env
        .register_stellar_asset_contract_v2(Address::generate(env))
        .address();

    let token_id = env.register_contract(None, SaleToken);
    let token = SaleTokenClient::new(env, &token_id);
    token.initialize(
        &token_admin,
        &7,
        &String::from_str(env, "Sale Token"),
        &String::from_str(env, "SALE"),
        &token_supply_cap,
    );

    let sale_id = env.register_contract(None, TokenSaleContract);
    let sale = TokenSaleContractClient::new(env, &sale_id);
    sale.initialize(&SaleConfig {
        window: SaleWindow {
            start: 1_000,
            end: 2_000,
        },
        rate: ConversionRate {
            tokens_per_unit: 25_000_000,
            decimals: 7,
        },
        caps: SaleCaps {
            min_contribution: 10,
            max_per_contributor: 2_000,
            soft_cap: 1_000,
            hard_cap: 5_000,
        },
        beneficiary: beneficiary.clone(),
        controller: controller.clone(),
        native_asset: native_id.clone(),
        token_issuer: token_id,
        controller_registry: None,
        contributor_gate: None,
        early_close: EarlyClose::HardCapOnly,
    });
    token.set_issuer(&sale_id);

    SaleTest {
        env,
        sale,
        sale_id,
        token,
        native: token::Client::new(env, &native_id),
        native_admin: token::StellarAssetClient::new(env, &native_id),
        controller,
        beneficiary,
    }
}
