#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, Address,
    Env, String,
};


contractmeta!(
    key = "Description",
    val = "Sale Token - issuance capability credited by a token sale"
);

const DAY_IN_LEDGERS: u32 = 17_280;
const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const BUMP_THRESHOLD: u32 = BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    IssuerNotSet = 3,
    InvalidAmount = 4,
    SupplyCapExceeded = 5,
    InsufficientBalance = 6,
}

#[derive(Clone)]
#[contracttype]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Metadata,
    Issuer,
    SupplyCap,
    TotalSupply,
    Balance(Address),
}

#[contract]
pub struct SaleToken;

fn read_admin(env: &Env) -> Result<Address, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(TokenError::NotInitialized)
}

fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_AMOUNT);
}

fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

#[contractimpl]
impl SaleToken {
    pub fn initialize(
        env: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
        supply_cap: Option<i128>,
    ) -> Result<(), TokenError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(TokenError::AlreadyInitialized);
        }
        admin.require_auth();

        if matches!(supply_cap, Some(cap) if cap <= 0) {
            return Err(TokenError::InvalidAmount);
        }

        let metadata = TokenMetadata {
            decimal,
            name,
            symbol,
        };
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Metadata, &metadata);
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);
        if let Some(cap) = supply_cap {
            env.storage().instance().set(&DataKey::SupplyCap, &cap);
        }
        env.storage()
            .instance()
            .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
        Ok(())
    }

    /// Grant the issuance capability to `issuer`, replacing any previous holder.
    pub fn set_issuer(env: Env, issuer: Address) -> Result<(), TokenError> {
        let admin = read_admin(&env)?;
        admin.require_auth();

        env.storage().instance().set(&DataKey::Issuer, &issuer);
        env.events()
            .publish(("TOKEN", symbol_short!("ISSUER")), (admin, issuer));
        Ok(())
    }

    pub fn issuer(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Issuer)
    }

    /// Mint `amount` to `to`. Only the configured issuer may call this.
    pub fn credit_tokens(env: Env, to: Address, amount: i128) -> Result<(), TokenError> {
        read_admin(&env)?;
        let issuer: Address = env
            .storage()
            .instance()
            .get(&DataKey::Issuer)
            .ok_or(TokenError::IssuerNotSet)?;
        issuer.require_auth();

        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }

        let supply = read_total_supply(&env)
            .checked_add(amount)
            .ok_or(TokenError::SupplyCapExceeded)?;
        let cap: Option<i128> = env.storage().instance().get(&DataKey::SupplyCap);
        if matches!(cap, Some(cap) if supply > cap) {
            return Err(TokenError::SupplyCapExceeded);
        }

        let balance = read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(TokenError::SupplyCapExceeded)?;
        write_balance(&env, &to, balance);
        env.storage().instance().set(&DataKey::TotalSupply, &supply);

        env.events()
            .publish(("TOKEN", symbol_short!("CREDIT")), (to, amount));
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }

        let from_balance = read_balance(&env, &from);
        if from_balance < amount {
            return Err(TokenError::InsufficientBalance);
        }
        write_balance(&env, &from, from_balance - amount);
        let to_balance = read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(TokenError::InvalidAmount)?;
        write_balance(&env, &to, to_balance);

        env.events()
            .publish(("TOKEN", symbol_short!("TRANSFER")), (from, to, amount));
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn supply_cap(env: Env) -> Option<i128> {
        env.storage().instance().get(&DataKey::SupplyCap)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Self::metadata(&env).map(|m| m.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Self::metadata(&env).map(|m| m.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Self::metadata(&env).map(|m| m.decimal)
    }
}

impl SaleToken {
    fn metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
        env.storage()
            .instance()
            .get(&DataKey::Metadata)
            .ok_or(TokenError::NotInitialized)
    }
}
