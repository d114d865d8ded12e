#![allow(dead_code)]

extern crate std;

use soroban_sdk::{Env, String, Vec};

use crate::types::{Batch, SupplyChainEvent};

/// INV-1: Stored scores are always within the valid assessment range.
pub fn assert_scores_in_range(batch: &Batch) {
    if let Some(score) = batch.quality_score {
        assert!(
            score <= 100,
            "INV-1 violated: batch {} has quality score {} > 100",
            batch.token_id,
            score
        );
    }
    if let Some(score) = batch.fairness_score {
        assert!(
            score <= 100,
            "INV-1 violated: batch {} has fairness score {} > 100",
            batch.token_id,
            score
        );
    }
}

/// INV-2: Token ids start at 1; 0 is reserved as the "not found" sentinel.
pub fn assert_token_id_nonzero(batch: &Batch) {
    assert!(
        batch.token_id > 0,
        "INV-2 violated: batch has reserved token id 0"
    );
}

/// INV-3: Minted quantity is always non-zero.
pub fn assert_quantity_positive(batch: &Batch) {
    assert!(
        batch.quantity > 0,
        "INV-3 violated: batch {} has zero quantity",
        batch.token_id
    );
}

/// INV-4: The trail is non-empty and always opens with the implicit
/// "harvested" event created at mint time.
pub fn assert_trail_well_formed(env: &Env, trail: &Vec<SupplyChainEvent>) {
    assert!(!trail.is_empty(), "INV-4 violated: empty supply-chain trail");
    let first = trail.get(0).unwrap();
    assert_eq!(
        first.stage,
        String::from_str(env, "harvested"),
        "INV-4 violated: first trail entry is not the harvest event"
    );
}

/// INV-5: The batch's current stage mirrors the newest trail entry.
pub fn assert_stage_matches_trail(batch: &Batch, trail: &Vec<SupplyChainEvent>) {
    let last = trail.last().unwrap();
    assert_eq!(
        batch.current_stage, last.stage,
        "INV-5 violated: current_stage diverged from the trail for batch {}",
        batch.token_id
    );
}

/// INV-6: Trail growth — after a successful `update_stage` the trail is
/// exactly one entry longer.
pub fn assert_trail_appended(len_before: u32, len_after: u32) {
    assert_eq!(
        len_after,
        len_before + 1,
        "INV-6 violated: trail grew from {} to {} in one update",
        len_before,
        len_after
    );
}

/// INV-7: Token ids are sequential starting from 1.
pub fn assert_sequential_ids(ids: &[u64]) {
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(
            *id,
            i as u64 + 1,
            "INV-7 violated: expected token id {}, got {}",
            i as u64 + 1,
            id
        );
    }
}

/// INV-8: Batch data immutability — fields written at mint (identity,
/// producer, product data, metadata URI) never change afterwards.
pub fn assert_batch_immutable_fields(original: &Batch, current: &Batch) {
    assert_eq!(
        original.token_id, current.token_id,
        "INV-8 violated: token id changed"
    );
    assert_eq!(
        original.batch_id, current.batch_id,
        "INV-8 violated: batch id changed"
    );
    assert_eq!(
        original.producer, current.producer,
        "INV-8 violated: producer changed"
    );
    assert_eq!(
        original.product_type, current.product_type,
        "INV-8 violated: product type changed"
    );
    assert_eq!(
        original.quantity, current.quantity,
        "INV-8 violated: quantity changed"
    );
    assert_eq!(
        original.harvest_date, current.harvest_date,
        "INV-8 violated: harvest date changed"
    );
    assert_eq!(
        original.origin, current.origin,
        "INV-8 violated: origin changed"
    );
    assert_eq!(
        original.token_uri, current.token_uri,
        "INV-8 violated: token URI changed"
    );
}

/// Run all stateless batch invariants.
pub fn assert_all_batch_invariants(batch: &Batch) {
    assert_token_id_nonzero(batch);
    assert_quantity_positive(batch);
    assert_scores_in_range(batch);
}
