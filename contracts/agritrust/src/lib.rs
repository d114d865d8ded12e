//! # AgriTrust Registry Contract
//!
//! This is the root crate of the **AgriTrust** agricultural supply-chain
//! registry. It exposes the single Soroban contract `AgriTrust` whose entry
//! points cover a batch's whole journey from farm to shelf:
//!
//! | Phase          | Entry Point(s)                                        |
//! |----------------|-------------------------------------------------------|
//! | Bootstrap      | [`AgriTrust::init`]                                   |
//! | Producers      | `register_producer`, `verify_producer`, `get_producer`, `is_verified` |
//! | Oracle admin   | `add_oracle`, `remove_oracle`, `is_oracle`            |
//! | Minting        | [`AgriTrust::mint_batch`]                             |
//! | Scoring        | `update_quality_score`, `update_fairness_score`       |
//! | Tracking       | `update_stage`, `get_supply_chain_events`             |
//! | Queries        | `get_batch`, `batch_id_to_token_id`, `owner`, `name`, `symbol`, `token_uri`, `owner_of`, `total_supply` |
//!
//! ## Architecture
//!
//! Authorization is fully delegated to [`access`]. Storage access is fully
//! delegated to [`storage`]. This file contains **only** the public entry
//! points, input validation, and event emissions; no storage reads or
//! writes happen here directly.
//!
//! Every mutating entry point takes the caller explicitly, requires its
//! signature via `require_auth`, and checks the relevant access tier before
//! touching state. A failed check panics with a typed [`Error`] and the host
//! rolls the transaction back, so state transitions are all-or-nothing.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env, String, Vec};

pub mod access;
pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use types::{Batch, BatchConfig, BatchState, Producer, SupplyChainEvent};

/// Token collection name, fixed at compile time.
const TOKEN_NAME: &str = "TraceChain";
/// Token collection symbol, fixed at compile time.
const TOKEN_SYMBOL: &str = "TRACE";

/// Stage tag of the implicit event appended at mint time.
const STAGE_HARVESTED: &str = "harvested";
/// Description of the implicit mint-time event.
const HARVEST_DESCRIPTION: &str = "Batch harvested and registered";

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    AlreadyRegistered = 2,
    NotOwner = 3,
    NotVerified = 4,
    DuplicateBatchId = 5,
    NotAuthorizedOracle = 6,
    InvalidScore = 7,
    NotAuthorized = 8,
    NotFound = 9,
    InvalidQuantity = 10,
    InvalidBatchId = 11,
}

#[contract]
pub struct AgriTrust;

#[contractimpl]
impl AgriTrust {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract and set its owner.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    ///
    /// - `owner` becomes the admin tier (producer verification, oracle
    ///   management) and must sign the transaction.
    pub fn init(env: Env, owner: Address) {
        owner.require_auth();
        access::init_owner(&env, &owner);
    }

    /// Return the contract owner. Panics with `Error::NotFound` before init.
    pub fn owner(env: Env) -> Address {
        match access::get_owner(&env) {
            Some(owner) => owner,
            None => panic_with_error!(&env, Error::NotFound),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Producer registry
    // ─────────────────────────────────────────────────────────

    /// Register the caller as a producer.
    ///
    /// Each address can register at most once; a second call panics with
    /// `Error::AlreadyRegistered` and leaves the first record unchanged.
    /// New producers start unverified and cannot mint until the owner
    /// verifies them.
    pub fn register_producer(env: Env, caller: Address, name: String, location: String) {
        caller.require_auth();

        if storage::has_producer(&env, &caller) {
            panic_with_error!(&env, Error::AlreadyRegistered);
        }

        let producer = Producer {
            name: name.clone(),
            location,
            is_verified: false,
            registered_at: env.ledger().timestamp(),
        };
        storage::save_producer(&env, &caller, &producer);

        events::emit_producer_registered(&env, caller, name);
    }

    /// Mark a registered producer as verified.
    ///
    /// - `caller` must be the contract owner (`Error::NotOwner`).
    /// - `producer` must have a record (`Error::NotFound`).
    /// - Re-verifying an already-verified producer is a no-op, not an error;
    ///   the `prod_ver` event is only emitted on the actual transition.
    pub fn verify_producer(env: Env, caller: Address, producer: Address) {
        caller.require_auth();
        access::require_owner(&env, &caller);

        let mut record = match storage::get_producer(&env, &producer) {
            Some(record) => record,
            None => panic_with_error!(&env, Error::NotFound),
        };
        if record.is_verified {
            return;
        }

        record.is_verified = true;
        storage::save_producer(&env, &producer, &record);

        events::emit_producer_verified(&env, producer);
    }

    /// Return the producer record for `address`, or `None` if unregistered.
    pub fn get_producer(env: Env, address: Address) -> Option<Producer> {
        storage::get_producer(&env, &address)
    }

    /// Return `true` if `address` is a verified producer.
    pub fn is_verified(env: Env, address: Address) -> bool {
        storage::get_producer(&env, &address)
            .map(|p| p.is_verified)
            .unwrap_or(false)
    }

    // ─────────────────────────────────────────────────────────
    // Oracle management
    // ─────────────────────────────────────────────────────────

    /// Add `oracle` to the authorized scoring set. Owner-only.
    pub fn add_oracle(env: Env, caller: Address, oracle: Address) {
        caller.require_auth();
        access::add_oracle(&env, &caller, &oracle);
    }

    /// Remove `oracle` from the authorized scoring set. Owner-only.
    /// Removing a non-member is a no-op.
    pub fn remove_oracle(env: Env, caller: Address, oracle: Address) {
        caller.require_auth();
        access::remove_oracle(&env, &caller, &oracle);
    }

    /// Return `true` if `address` is an authorized oracle.
    pub fn is_oracle(env: Env, address: Address) -> bool {
        access::is_oracle(&env, &address)
    }

    // ─────────────────────────────────────────────────────────
    // Batch minting
    // ─────────────────────────────────────────────────────────

    /// Mint a token for a harvested batch and return its token id.
    ///
    /// - `caller` must be a registered, verified producer (`Error::NotVerified`).
    /// - `batch_id` must be non-empty (`Error::InvalidBatchId`) and unused
    ///   (`Error::DuplicateBatchId`); a failed mint does not advance the
    ///   token counter.
    /// - `quantity` must be non-zero (`Error::InvalidQuantity`).
    ///
    /// The new batch starts in the `"harvested"` stage with a one-entry
    /// trail recording the caller as actor. Emits a `minted` event carrying
    /// `(token_id, batch_id, producer)`.
    pub fn mint_batch(
        env: Env,
        caller: Address,
        batch_id: String,
        product_type: String,
        quantity: u64,
        harvest_date: u64,
        location: String,
        token_uri: String,
    ) -> u64 {
        caller.require_auth();
        access::require_verified_producer(&env, &caller);

        if batch_id.len() == 0 {
            panic_with_error!(&env, Error::InvalidBatchId);
        }
        if quantity == 0 {
            panic_with_error!(&env, Error::InvalidQuantity);
        }
        if storage::has_batch_id(&env, &batch_id) {
            panic_with_error!(&env, Error::DuplicateBatchId);
        }

        let token_id = storage::next_token_id(&env);
        let config = BatchConfig {
            token_id,
            batch_id: batch_id.clone(),
            producer: caller.clone(),
            product_type,
            quantity,
            harvest_date,
            origin: location.clone(),
            token_uri,
        };
        let state = BatchState {
            quality_score: None,
            fairness_score: None,
            current_stage: String::from_str(&env, STAGE_HARVESTED),
        };
        let harvest_event = SupplyChainEvent {
            stage: String::from_str(&env, STAGE_HARVESTED),
            location,
            actor: caller.to_string(),
            description: String::from_str(&env, HARVEST_DESCRIPTION),
            timestamp: env.ledger().timestamp(),
        };
        storage::save_new_batch(&env, &config, &state, &harvest_event);

        events::emit_batch_minted(&env, token_id, batch_id, caller);
        token_id
    }

    /// Return the full batch record for `token_id`.
    /// Panics with `Error::NotFound` for unknown ids.
    pub fn get_batch(env: Env, token_id: u64) -> Batch {
        storage::load_batch(&env, token_id)
    }

    /// Resolve a human-readable batch id to its token id.
    /// Returns `None` for unused ids; token id 0 is never issued.
    pub fn batch_id_to_token_id(env: Env, batch_id: String) -> Option<u64> {
        storage::lookup_batch_id(&env, &batch_id)
    }

    // ─────────────────────────────────────────────────────────
    // Oracle scoring
    // ─────────────────────────────────────────────────────────

    /// Record a quality score for a batch.
    ///
    /// - `caller` must be an authorized oracle (`Error::NotAuthorizedOracle`).
    /// - `score` must be within `0..=100` (`Error::InvalidScore`).
    ///
    /// Overwrites any prior score; only the latest value is kept. Emits a
    /// `quality` event carrying `(token_id, score)`.
    pub fn update_quality_score(env: Env, caller: Address, token_id: u64, score: u32) {
        caller.require_auth();
        access::require_oracle(&env, &caller);
        Self::require_valid_score(&env, score);

        let mut state = storage::load_batch_state(&env, token_id);
        state.quality_score = Some(score);
        storage::save_batch_state(&env, token_id, &state);

        events::emit_quality_assessed(&env, token_id, score, caller);
    }

    /// Record a fairness score for a batch.
    ///
    /// Same gating and overwrite semantics as [`AgriTrust::update_quality_score`];
    /// emits a `fairness` event.
    pub fn update_fairness_score(env: Env, caller: Address, token_id: u64, score: u32) {
        caller.require_auth();
        access::require_oracle(&env, &caller);
        Self::require_valid_score(&env, score);

        let mut state = storage::load_batch_state(&env, token_id);
        state.fairness_score = Some(score);
        storage::save_batch_state(&env, token_id, &state);

        events::emit_fairness_assessed(&env, token_id, score, caller);
    }

    // ─────────────────────────────────────────────────────────
    // Supply-chain tracking
    // ─────────────────────────────────────────────────────────

    /// Move a batch to a new supply-chain stage.
    ///
    /// - `caller` must be the batch's minting producer (`Error::NotAuthorized`).
    ///
    /// Sets `current_stage` to `stage` and appends exactly one trail entry
    /// with a ledger-assigned timestamp. Emits a `stage` event carrying
    /// `(token_id, stage)`.
    pub fn update_stage(
        env: Env,
        caller: Address,
        token_id: u64,
        stage: String,
        location: String,
        actor: String,
        description: String,
    ) {
        caller.require_auth();

        let config = storage::load_batch_config(&env, token_id);
        if config.producer != caller {
            panic_with_error!(&env, Error::NotAuthorized);
        }

        let mut state = storage::load_batch_state(&env, token_id);
        state.current_stage = stage.clone();
        storage::save_batch_state(&env, token_id, &state);

        let event = SupplyChainEvent {
            stage: stage.clone(),
            location,
            actor,
            description,
            timestamp: env.ledger().timestamp(),
        };
        storage::append_trail_event(&env, token_id, &event);

        events::emit_stage_updated(&env, token_id, stage);
    }

    /// Return the full ordered trail for `token_id`, oldest first.
    /// Panics with `Error::NotFound` for unknown ids.
    pub fn get_supply_chain_events(env: Env, token_id: u64) -> Vec<SupplyChainEvent> {
        storage::load_trail(&env, token_id)
    }

    // ─────────────────────────────────────────────────────────
    // Token metadata
    // ─────────────────────────────────────────────────────────

    /// Collection name.
    pub fn name(env: Env) -> String {
        String::from_str(&env, TOKEN_NAME)
    }

    /// Collection symbol.
    pub fn symbol(env: Env) -> String {
        String::from_str(&env, TOKEN_SYMBOL)
    }

    /// Metadata URI for `token_id`. Panics with `Error::NotFound` for
    /// unknown ids.
    pub fn token_uri(env: Env, token_id: u64) -> String {
        storage::load_batch_config(&env, token_id).token_uri
    }

    /// Owning producer of `token_id`. Panics with `Error::NotFound` for
    /// unknown ids. Batch tokens are bound to their minting producer; there
    /// is no transfer operation.
    pub fn owner_of(env: Env, token_id: u64) -> Address {
        storage::load_batch_config(&env, token_id).producer
    }

    /// Total number of batches minted.
    pub fn total_supply(env: Env) -> u64 {
        storage::token_count(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn require_valid_score(env: &Env, score: u32) {
        if score > 100 {
            panic_with_error!(env, Error::InvalidScore);
        }
    }
}
