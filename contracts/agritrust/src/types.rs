//! # Types
//!
//! Shared data structures used across all modules of the AgriTrust registry.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Batch` is internally stored as two separate ledger entries:
//!
//! - [`BatchConfig`] — written once at mint; never mutated.
//! - [`BatchState`] — written on every score update and stage transition.
//!
//! The public API exposes the reconstructed [`Batch`] struct for convenience.
//! Oracle scoring and stage updates are the high-frequency writes here, and
//! rewriting the full batch record (strings for product type, locations and
//! the metadata URI) on each of them would be wasteful. `BatchState` carries
//! only the two scores and the current stage tag.
//!
//! ### Scores are `Option<u32>`
//!
//! A freshly minted batch has no quality or fairness assessment. Rather than
//! overloading `0` (a legal score), the unassessed state is `None`. Oracles
//! overwrite the latest value directly; no score history is retained.

use soroban_sdk::{contracttype, Address, String};

/// A registered producer profile, keyed by the producer's address.
///
/// Created by `register_producer`, mutated only by the contract owner's
/// `verify_producer` call, never deleted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Producer {
    /// Display name of the farm or business.
    pub name: String,
    /// Free-form location string ("California, USA").
    pub location: String,
    /// Set to `true` by the contract owner; gates batch minting.
    pub is_verified: bool,
    /// Ledger timestamp of registration.
    pub registered_at: u64,
}

/// Immutable batch data, written once at mint.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchConfig {
    /// Sequential token id, starting at 1 (0 is the "not found" sentinel).
    pub token_id: u64,
    /// Human-readable batch identifier ("B001"), unique across all batches.
    pub batch_id: String,
    /// Address of the verified producer that minted the batch.
    pub producer: Address,
    /// What was harvested ("Organic Tomatoes").
    pub product_type: String,
    /// Harvested quantity; must be non-zero.
    pub quantity: u64,
    /// Unix timestamp of the harvest, supplied by the producer.
    pub harvest_date: u64,
    /// Where the batch originated.
    pub origin: String,
    /// Metadata pointer (typically an HTTPS or IPFS URI).
    pub token_uri: String,
}

/// Mutable batch data, updated by oracles and stage transitions.
///
/// Kept small so frequent writes are cheap.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchState {
    /// Latest oracle quality score in `0..=100`, `None` until assessed.
    pub quality_score: Option<u32>,
    /// Latest oracle fairness score in `0..=100`, `None` until assessed.
    pub fairness_score: Option<u32>,
    /// Tag of the most recent supply-chain stage ("harvested" at mint).
    pub current_stage: String,
}

/// Full on-chain representation of a harvested batch.
///
/// Used as the public API return type; reconstructed internally from the
/// split `BatchConfig` + `BatchState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Batch {
    pub token_id: u64,
    pub batch_id: String,
    pub producer: Address,
    pub product_type: String,
    pub quantity: u64,
    pub harvest_date: u64,
    pub origin: String,
    pub token_uri: String,
    pub quality_score: Option<u32>,
    pub fairness_score: Option<u32>,
    pub current_stage: String,
}

impl Batch {
    /// Reassemble the public view from its two storage entries.
    pub fn from_parts(config: BatchConfig, state: BatchState) -> Self {
        Batch {
            token_id: config.token_id,
            batch_id: config.batch_id,
            producer: config.producer,
            product_type: config.product_type,
            quantity: config.quantity,
            harvest_date: config.harvest_date,
            origin: config.origin,
            token_uri: config.token_uri,
            quality_score: state.quality_score,
            fairness_score: state.fairness_score,
            current_stage: state.current_stage,
        }
    }
}

/// One entry of a batch's append-only supply-chain trail.
///
/// The first entry is always the implicit "harvested" event created at mint
/// time; every `update_stage` call appends exactly one more.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupplyChainEvent {
    /// Stage tag ("harvested", "processed", "shipped", "delivered", ...).
    pub stage: String,
    /// Where the transition happened.
    pub location: String,
    /// Who performed it — an address string or a descriptive label.
    pub actor: String,
    /// Free-form description of the transition.
    pub description: String,
    /// Ledger timestamp assigned when the event was recorded.
    pub timestamp: u64,
}
