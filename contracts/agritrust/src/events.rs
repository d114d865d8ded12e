//! Typed contract events.
//!
//! Every state transition publishes one event so the off-chain REST and
//! WebSocket layers can mirror the ledger without polling: `prod_reg` and
//! `prod_ver` feed the producer screens, `minted` and `stage` feed batch
//! tracking, `quality` and `fairness` feed the assessment dashboards.
//! Oracle set changes are emitted by [`crate::access`] directly.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProducerRegistered {
    pub producer: Address,
    pub name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProducerVerified {
    pub producer: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchMinted {
    pub token_id: u64,
    pub batch_id: String,
    pub producer: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QualityAssessed {
    pub token_id: u64,
    pub score: u32,
    pub oracle: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FairnessAssessed {
    pub token_id: u64,
    pub score: u32,
    pub oracle: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StageUpdated {
    pub token_id: u64,
    pub stage: String,
}

pub fn emit_producer_registered(env: &Env, producer: Address, name: String) {
    let topics = (symbol_short!("prod_reg"), producer.clone());
    let data = ProducerRegistered { producer, name };
    env.events().publish(topics, data);
}

pub fn emit_producer_verified(env: &Env, producer: Address) {
    let topics = (symbol_short!("prod_ver"), producer.clone());
    let data = ProducerVerified { producer };
    env.events().publish(topics, data);
}

pub fn emit_batch_minted(env: &Env, token_id: u64, batch_id: String, producer: Address) {
    let topics = (symbol_short!("minted"), token_id);
    let data = BatchMinted {
        token_id,
        batch_id,
        producer,
    };
    env.events().publish(topics, data);
}

pub fn emit_quality_assessed(env: &Env, token_id: u64, score: u32, oracle: Address) {
    let topics = (symbol_short!("quality"), token_id);
    let data = QualityAssessed {
        token_id,
        score,
        oracle,
    };
    env.events().publish(topics, data);
}

pub fn emit_fairness_assessed(env: &Env, token_id: u64, score: u32, oracle: Address) {
    let topics = (symbol_short!("fairness"), token_id);
    let data = FairnessAssessed {
        token_id,
        score,
        oracle,
    };
    env.events().publish(topics, data);
}

pub fn emit_stage_updated(env: &Env, token_id: u64, stage: String) {
    let topics = (symbol_short!("stage"), token_id);
    let data = StageUpdated { token_id, stage };
    env.events().publish(topics, data);
}
