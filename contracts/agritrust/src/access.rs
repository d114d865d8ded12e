//! # Access control
//!
//! Manages the three access tiers enforced by AgriTrust:
//!
//! ```text
//! Owner (admin)
//!     ├── Oracle set          (score writers, owner-managed)
//!     └── Verified producers  (batch minters, owner-verified)
//! ```
//!
//! ## Storage layout
//!
//! - `AccessKey::Owner`        → `Address`  (the one and only contract owner)
//! - `AccessKey::Oracle(addr)` → `bool`     (membership marker in the oracle set)
//!
//! Producer records themselves live in [`crate::storage`]; this module only
//! provides the verification gate over them.
//!
//! ## Event emissions
//!
//! Oracle set mutations emit `ora_add` / `ora_del` so off-chain indexers can
//! reconstruct the authorized set without storing a membership list on-chain.
//!
//! ## Threat model notes
//!
//! - The owner is fixed at `init` and cannot be changed afterwards; there is
//!   no transfer path, matching the source contract's `Ownable` usage.
//! - Oracles cannot grant or revoke other oracles; only the owner can.
//! - Producer verification is one-way: there is no unverify operation.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::storage;
use crate::Error;

// ─────────────────────────────────────────────────────────
// Storage keys
// ─────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AccessKey {
    /// The one and only contract owner.
    Owner,
    /// Marks an address as an authorized scoring oracle.
    Oracle(Address),
}

// ─────────────────────────────────────────────────────────
// Initialisation
// ─────────────────────────────────────────────────────────

/// Set the contract owner. Must be called exactly once (during contract
/// initialisation). Panics with `Error::AlreadyInitialized` if called again.
pub fn init_owner(env: &Env, owner: &Address) {
    if env.storage().instance().has(&AccessKey::Owner) {
        fail(env, Error::AlreadyInitialized);
    }
    env.storage().instance().set(&AccessKey::Owner, owner);
}

/// Read the owner address, returning `None` before init.
pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&AccessKey::Owner)
}

// ─────────────────────────────────────────────────────────
// Oracle set
// ─────────────────────────────────────────────────────────

/// Add `oracle` to the authorized set. Re-adding is a no-op.
///
/// Emits an `ora_add` event on first addition.
pub fn add_oracle(env: &Env, owner: &Address, oracle: &Address) {
    require_owner(env, owner);
    if !is_oracle(env, oracle) {
        env.storage()
            .persistent()
            .set(&AccessKey::Oracle(oracle.clone()), &true);
        env.events()
            .publish((symbol_short!("ora_add"), oracle.clone()), owner.clone());
    }
}

/// Remove `oracle` from the authorized set. Removing an address that is not
/// in the set is a no-op.
///
/// Emits an `ora_del` event if the address was a member.
pub fn remove_oracle(env: &Env, owner: &Address, oracle: &Address) {
    require_owner(env, owner);
    if is_oracle(env, oracle) {
        env.storage()
            .persistent()
            .remove(&AccessKey::Oracle(oracle.clone()));
        env.events()
            .publish((symbol_short!("ora_del"), oracle.clone()), owner.clone());
    }
}

/// Returns `true` if `address` is in the authorized oracle set.
pub fn is_oracle(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&AccessKey::Oracle(address.clone()))
}

// ─────────────────────────────────────────────────────────
// Access guards (called from lib.rs handlers)
// ─────────────────────────────────────────────────────────

/// Assert that `caller` is the contract owner.
/// Panics with `Error::NotOwner` on failure (including before init).
pub fn require_owner(env: &Env, caller: &Address) {
    match get_owner(env) {
        Some(ref owner) if owner == caller => {}
        _ => fail(env, Error::NotOwner),
    }
}

/// Assert that `caller` is an authorized oracle.
/// Panics with `Error::NotAuthorizedOracle` on failure.
pub fn require_oracle(env: &Env, caller: &Address) {
    if !is_oracle(env, caller) {
        fail(env, Error::NotAuthorizedOracle);
    }
}

/// Assert that `caller` is a registered producer with `is_verified == true`.
/// Panics with `Error::NotVerified` for both unregistered and unverified
/// callers; registration without verification grants no minting rights.
pub fn require_verified_producer(env: &Env, caller: &Address) {
    match storage::get_producer(env, caller) {
        Some(producer) if producer.is_verified => {}
        _ => fail(env, Error::NotVerified),
    }
}

/// Thin wrapper so the guards can panic with a typed error without
/// importing the macro at every call site.
#[inline(always)]
fn fail(env: &Env, err: Error) -> ! {
    soroban_sdk::panic_with_error!(env, err)
}
