extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{BatchMinted, ProducerVerified, QualityAssessed, StageUpdated};
use crate::{AgriTrust, AgriTrustClient};

fn setup_with_init() -> (Env, AgriTrustClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(AgriTrust, ());
    let client = AgriTrustClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    client.init(&owner);
    (env, client, owner)
}

fn verified_producer(env: &Env, client: &AgriTrustClient, owner: &Address) -> Address {
    let producer = Address::generate(env);
    client.register_producer(
        &producer,
        &String::from_str(env, "Green Valley Farm"),
        &String::from_str(env, "California, USA"),
    );
    client.verify_producer(owner, &producer);
    producer
}

fn mint_b001(env: &Env, client: &AgriTrustClient, producer: &Address) -> u64 {
    client.mint_batch(
        producer,
        &String::from_str(env, "B001"),
        &String::from_str(env, "Organic Tomatoes"),
        &500u64,
        &1_705_305_600u64,
        &String::from_str(env, "Green Valley Farm"),
        &String::from_str(env, "uri"),
    )
}

#[test]
fn test_producer_verified_event() {
    let (env, client, owner) = setup_with_init();
    let producer = Address::generate(&env);
    client.register_producer(
        &producer,
        &String::from_str(&env, "Green Valley Farm"),
        &String::from_str(&env, "California, USA"),
    );

    client.verify_producer(&owner, &producer);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("prod_ver"), producer)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("prod_ver").into_val(&env),
        producer.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: ProducerVerified struct
    let event_data: ProducerVerified = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ProducerVerified {
            producer: producer.clone(),
        }
    );
}

#[test]
fn test_batch_minted_event() {
    let (env, client, owner) = setup_with_init();
    let producer = verified_producer(&env, &client, &owner);

    let token_id = mint_b001(&env, &client, &producer);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("minted"), token_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("minted").into_val(&env),
        token_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: BatchMinted struct
    let event_data: BatchMinted = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        BatchMinted {
            token_id,
            batch_id: String::from_str(&env, "B001"),
            producer: producer.clone(),
        }
    );
}

#[test]
fn test_quality_assessed_event() {
    let (env, client, owner) = setup_with_init();
    let producer = verified_producer(&env, &client, &owner);
    let oracle = Address::generate(&env);
    client.add_oracle(&owner, &oracle);
    let token_id = mint_b001(&env, &client, &producer);

    client.update_quality_score(&oracle, &token_id, &85);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("quality"), token_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("quality").into_val(&env),
        token_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: QualityAssessed struct
    let event_data: QualityAssessed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        QualityAssessed {
            token_id,
            score: 85,
            oracle: oracle.clone(),
        }
    );
}

#[test]
fn test_stage_updated_event() {
    let (env, client, owner) = setup_with_init();
    let producer = verified_producer(&env, &client, &owner);
    let token_id = mint_b001(&env, &client, &producer);

    client.update_stage(
        &producer,
        &token_id,
        &String::from_str(&env, "processed"),
        &String::from_str(&env, "Processing Center"),
        &String::from_str(&env, "Processor"),
        &String::from_str(&env, "Batch processed and packaged"),
    );

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("stage"), token_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("stage").into_val(&env),
        token_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: StageUpdated struct
    let event_data: StageUpdated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        StageUpdated {
            token_id,
            stage: String::from_str(&env, "processed"),
        }
    );
}
