//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by AgriTrust:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key          | Type  | Description                          |
//! |--------------|-------|--------------------------------------|
//! | `TokenCount` | `u64` | Last issued token id (0 before mint) |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                  | Type                    | Description                     |
//! |----------------------|-------------------------|---------------------------------|
//! | `Producer(addr)`     | `Producer`              | Producer profile                |
//! | `BatchConfig(id)`    | `BatchConfig`           | Immutable batch data            |
//! | `BatchState(id)`     | `BatchState`            | Mutable scores + current stage  |
//! | `BatchTrail(id)`     | `Vec<SupplyChainEvent>` | Append-only stage history       |
//! | `BatchId(batch_id)`  | `u64`                   | Human id → token id index       |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! ## Token id allocation
//!
//! `next_token_id` pre-increments, so the first minted batch gets id 1 and
//! id 0 stays free as the "not found" sentinel the off-chain layer relies on.
//!
//! ## Trail growth
//!
//! `BatchTrail` grows without bound: each stage update rewrites the whole
//! vector one entry longer. This is inherited behavior, kept on purpose; a
//! batch's journey is short-lived in practice, but the cost of `update_stage`
//! rises linearly with trail length.

use soroban_sdk::{contracttype, Address, Env, String, Vec};

use crate::types::{Batch, BatchConfig, BatchState, Producer, SupplyChainEvent};
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

/// All registry storage keys.
///
/// The instance-tier `TokenCount` lives as long as the contract. The
/// persistent-tier keys hold per-producer and per-batch data with
/// independent TTLs. (Owner and oracle keys live in [`crate::access`].)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Global auto-increment counter for token ids (Instance).
    TokenCount,
    /// Producer profile keyed by address (Persistent).
    Producer(Address),
    /// Immutable batch data keyed by token id (Persistent).
    BatchConfig(u64),
    /// Mutable batch state keyed by token id (Persistent).
    BatchState(u64),
    /// Append-only supply-chain trail keyed by token id (Persistent).
    BatchTrail(u64),
    /// Human-readable batch id → token id index (Persistent).
    BatchId(String),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Atomically increment the token counter and return the new id.
/// The first call returns 1; id 0 is never issued.
pub fn next_token_id(env: &Env) -> u64 {
    bump_instance(env);
    let next = token_count(env) + 1;
    env.storage().instance().set(&DataKey::TokenCount, &next);
    next
}

/// Total number of batches minted so far.
pub fn token_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TokenCount)
        .unwrap_or(0)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ─────────────────────────────────────────────────────────
// Producers
// ─────────────────────────────────────────────────────────

/// Returns `true` if `address` already has a producer record.
pub fn has_producer(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Producer(address.clone()))
}

/// Read the producer record for `address`, returning `None` if unregistered.
pub fn get_producer(env: &Env, address: &Address) -> Option<Producer> {
    let key = DataKey::Producer(address.clone());
    let producer: Option<Producer> = env.storage().persistent().get(&key);
    if producer.is_some() {
        bump_persistent(env, &key);
    }
    producer
}

/// Persist a producer record. Overwrites any existing record.
pub fn save_producer(env: &Env, address: &Address, producer: &Producer) {
    let key = DataKey::Producer(address.clone());
    env.storage().persistent().set(&key, producer);
    bump_persistent(env, &key);
}

// ─────────────────────────────────────────────────────────
// Batches
// ─────────────────────────────────────────────────────────

/// Save a freshly minted batch: immutable config, initial mutable state,
/// the one-entry trail, and the human id index, in that order.
pub fn save_new_batch(
    env: &Env,
    config: &BatchConfig,
    state: &BatchState,
    harvest_event: &SupplyChainEvent,
) {
    let config_key = DataKey::BatchConfig(config.token_id);
    let state_key = DataKey::BatchState(config.token_id);
    let trail_key = DataKey::BatchTrail(config.token_id);
    let index_key = DataKey::BatchId(config.batch_id.clone());

    env.storage().persistent().set(&config_key, config);
    env.storage().persistent().set(&state_key, state);

    let mut trail: Vec<SupplyChainEvent> = Vec::new(env);
    trail.push_back(harvest_event.clone());
    env.storage().persistent().set(&trail_key, &trail);

    env.storage().persistent().set(&index_key, &config.token_id);

    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
    bump_persistent(env, &trail_key);
    bump_persistent(env, &index_key);
}

/// Load the full `Batch` by combining config and state.
/// Panics with `Error::NotFound` if the token id was never issued.
pub fn load_batch(env: &Env, token_id: u64) -> Batch {
    let config = load_batch_config(env, token_id);
    let state = load_batch_state(env, token_id);
    Batch::from_parts(config, state)
}

/// Load only the immutable batch config.
/// Panics with `Error::NotFound` for unknown token ids.
pub fn load_batch_config(env: &Env, token_id: u64) -> BatchConfig {
    let key = DataKey::BatchConfig(token_id);
    match env.storage().persistent().get(&key) {
        Some(config) => {
            bump_persistent(env, &key);
            config
        }
        None => soroban_sdk::panic_with_error!(env, Error::NotFound),
    }
}

/// Load only the mutable batch state.
/// Panics with `Error::NotFound` for unknown token ids.
pub fn load_batch_state(env: &Env, token_id: u64) -> BatchState {
    let key = DataKey::BatchState(token_id);
    match env.storage().persistent().get(&key) {
        Some(state) => {
            bump_persistent(env, &key);
            state
        }
        None => soroban_sdk::panic_with_error!(env, Error::NotFound),
    }
}

/// Save only the mutable batch state (optimized for scoring/stage updates).
pub fn save_batch_state(env: &Env, token_id: u64, state: &BatchState) {
    let key = DataKey::BatchState(token_id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

// ─────────────────────────────────────────────────────────
// Supply-chain trail
// ─────────────────────────────────────────────────────────

/// Read the ordered trail for `token_id`.
/// Panics with `Error::NotFound` for unknown token ids.
pub fn load_trail(env: &Env, token_id: u64) -> Vec<SupplyChainEvent> {
    let key = DataKey::BatchTrail(token_id);
    match env.storage().persistent().get(&key) {
        Some(trail) => {
            bump_persistent(env, &key);
            trail
        }
        None => soroban_sdk::panic_with_error!(env, Error::NotFound),
    }
}

/// Append one event to the trail for `token_id` and return the new length.
pub fn append_trail_event(env: &Env, token_id: u64, event: &SupplyChainEvent) -> u32 {
    let key = DataKey::BatchTrail(token_id);
    let mut trail = load_trail(env, token_id);
    trail.push_back(event.clone());
    env.storage().persistent().set(&key, &trail);
    bump_persistent(env, &key);
    trail.len()
}

// ─────────────────────────────────────────────────────────
// Human id index
// ─────────────────────────────────────────────────────────

/// Returns `true` if `batch_id` has already been used by a mint.
pub fn has_batch_id(env: &Env, batch_id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::BatchId(batch_id.clone()))
}

/// Resolve a human-readable batch id to its token id. `None` if unused.
pub fn lookup_batch_id(env: &Env, batch_id: &String) -> Option<u64> {
    let key = DataKey::BatchId(batch_id.clone());
    let token_id: Option<u64> = env.storage().persistent().get(&key);
    if token_id.is_some() {
        bump_persistent(env, &key);
    }
    token_id
}
