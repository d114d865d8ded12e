//! Development automation tasks for AgriTrust.
//!
//! # Usage
//!
//! ```bash
//! cargo xtask <command> [options]
//! ```
//!
//! # Commands
//!
//! - `build` - Build the contract wasm
//! - `deploy --network <net>` - Deploy the contract, initialise it, and
//!   record the deployment artifact under `deployments/<net>.json`

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod deploy;

/// Development automation for AgriTrust.
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development automation tasks for AgriTrust", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available xtask commands.
#[derive(Subcommand)]
enum Commands {
    /// Build the contract wasm with stellar-cli.
    Build,

    /// Deploy the contract and record the deployment artifact.
    ///
    /// Builds and deploys the contract, invokes `init` with the deployer
    /// identity, and writes a per-network JSON artifact consumed by the
    /// off-chain frontend and backend.
    Deploy {
        /// Target network ("testnet", "futurenet", "mainnet", ...).
        #[arg(long)]
        network: String,

        /// Identity name or G... address that signs the deployment.
        #[arg(long, env = "STELLAR_SOURCE_ACCOUNT")]
        source_account: String,

        /// Override the network's RPC endpoint.
        #[arg(long, env = "STELLAR_RPC_URL")]
        rpc_url: Option<String>,

        /// Record an already-deployed contract instead of deploying a new
        /// one (skips build, deploy, and init).
        #[arg(long)]
        contract_id: Option<String>,

        /// Directory the per-network artifact is written to.
        #[arg(long, default_value = "deployments")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build => deploy::build(),
        Commands::Deploy {
            network,
            source_account,
            rpc_url,
            contract_id,
            out_dir,
        } => deploy::run(deploy::DeployArgs {
            network,
            source_account,
            rpc_url,
            contract_id,
            out_dir,
        }),
    }
}
