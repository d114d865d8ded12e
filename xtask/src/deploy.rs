//! Contract deployment and artifact recording.
//!
//! Wraps stellar-cli to build, deploy, and initialise the AgriTrust
//! contract, then records a per-network JSON artifact:
//!
//! ```json
//! {
//!   "contractAddress": "C...",
//!   "network": "testnet",
//!   "deployer": "G...",
//!   "deploymentTime": "2026-08-29T12:00:00Z",
//!   "contractName": "AgriTrust",
//!   "tokenName": "TraceChain",
//!   "tokenSymbol": "TRACE"
//! }
//! ```
//!
//! The camelCase field names are part of the artifact contract: the
//! frontend's API client reads this file to locate the contract on each
//! network, so renames here are breaking changes.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use xshell::{cmd, Shell};

pub const CONTRACT_NAME: &str = "AgriTrust";
pub const TOKEN_NAME: &str = "TraceChain";
pub const TOKEN_SYMBOL: &str = "TRACE";

const WASM_PATH: &str = "target/wasm32-unknown-unknown/release/agritrust.wasm";

/// The per-network deployment artifact, serialized as camelCase JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentInfo {
    pub contract_address: String,
    pub network: String,
    pub deployer: String,
    /// ISO-8601 UTC timestamp of the deployment.
    pub deployment_time: String,
    pub contract_name: String,
    pub token_name: String,
    pub token_symbol: String,
}

/// Options for the `deploy` command.
pub struct DeployArgs {
    pub network: String,
    pub source_account: String,
    pub rpc_url: Option<String>,
    /// When set, record this contract instead of deploying a new one.
    pub contract_id: Option<String>,
    pub out_dir: PathBuf,
}

/// Build the contract wasm.
pub fn build() -> Result<()> {
    let sh = Shell::new().context("failed to create shell")?;
    cmd!(sh, "stellar contract build")
        .run()
        .context("contract build failed")?;
    Ok(())
}

/// Deploy (or record) the contract and write the deployment artifact.
pub fn run(args: DeployArgs) -> Result<()> {
    let sh = Shell::new().context("failed to create shell")?;

    let deployer = resolve_deployer(&sh, &args.source_account)?;

    let contract_address = match &args.contract_id {
        Some(id) => {
            println!("Recording existing contract {id}...");
            id.clone()
        }
        None => {
            println!("Deploying {CONTRACT_NAME} contract to {}...", args.network);
            build()?;
            let address = deploy_contract(&sh, &args)?;
            println!("{CONTRACT_NAME} deployed to: {address}");
            init_contract(&sh, &args, &address, &deployer)?;
            address
        }
    };

    let info = DeploymentInfo {
        contract_address,
        network: args.network.clone(),
        deployer,
        deployment_time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        contract_name: CONTRACT_NAME.to_string(),
        token_name: TOKEN_NAME.to_string(),
        token_symbol: TOKEN_SYMBOL.to_string(),
    };

    let path = write_artifact(&args.out_dir, &info)?;

    println!("\nDeployment Summary:");
    println!("{}", serde_json::to_string_pretty(&info)?);
    println!("\nDeployment info saved to: {}", path.display());
    Ok(())
}

/// Deploy the built wasm and return the new contract address.
fn deploy_contract(sh: &Shell, args: &DeployArgs) -> Result<String> {
    let network = &args.network;
    let source = &args.source_account;
    let rpc: Vec<&str> = match &args.rpc_url {
        Some(url) => vec!["--rpc-url", url],
        None => vec![],
    };
    let address = cmd!(
        sh,
        "stellar contract deploy --wasm {WASM_PATH} --network {network} --source-account {source} {rpc...}"
    )
    .read()
    .context("contract deploy failed")?;
    Ok(address.trim().to_string())
}

/// Invoke `init`, making the deployer the contract owner.
fn init_contract(sh: &Shell, args: &DeployArgs, address: &str, deployer: &str) -> Result<()> {
    let network = &args.network;
    let source = &args.source_account;
    let rpc: Vec<&str> = match &args.rpc_url {
        Some(url) => vec!["--rpc-url", url],
        None => vec![],
    };
    cmd!(
        sh,
        "stellar contract invoke --id {address} --network {network} --source-account {source} {rpc...} -- init --owner {deployer}"
    )
    .run()
    .context("contract init failed")?;
    println!("Contract owner: {deployer}");
    Ok(())
}

/// Resolve the deployer address: a raw G... address is used as-is, an
/// identity name is looked up through stellar-cli.
fn resolve_deployer(sh: &Shell, source: &str) -> Result<String> {
    if source.starts_with('G') && source.len() == 56 {
        return Ok(source.to_string());
    }
    let address = cmd!(sh, "stellar keys address {source}")
        .read()
        .with_context(|| format!("failed to resolve identity '{source}'"))?;
    Ok(address.trim().to_string())
}

/// Write `<out_dir>/<network>.json` and return the path.
fn write_artifact(out_dir: &PathBuf, info: &DeploymentInfo) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let path = out_dir.join(format!("{}.json", info.network));
    let json = serde_json::to_string_pretty(info)?;
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
