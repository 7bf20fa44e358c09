use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

pub const LOG_INFO: Symbol = symbol_short!("LOG_INFO");
pub const LOG_WARN: Symbol = symbol_short!("LOG_WARN");

/// Structured log entry published under ("LOG", <level>).
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct StructuredLog {
    pub operation: String,
    pub actor: Option<Address>,
    pub amount: Option<i128>,
    pub timestamp: u64,
}

fn publish(
    env: &Env,
    level: Symbol,
    operation: &str,
    actor: Option<Address>,
    amount: Option<i128>,
    timestamp: u64,
) {
    env.events().publish(
        ("LOG", level),
        StructuredLog {
            operation: String::from_str(env, operation),
            actor,
            amount,
            timestamp,
        },
    );
}

pub fn info(env: &Env, operation: &str, actor: Option<Address>, amount: Option<i128>, timestamp: u64) {
    publish(env, LOG_INFO, operation, actor, amount, timestamp);
}

pub fn warn(env: &Env, operation: &str, actor: Option<Address>, amount: Option<i128>, timestamp: u64) {
    publish(env, LOG_WARN, operation, actor, amount, timestamp);
}
