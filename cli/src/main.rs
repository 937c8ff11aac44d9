// Copyright (c) 2026 microledger contributors. MIT License.
// See LICENSE for details.

//! # microledger CLI
//!
//! Entry point for the `microledger` binary. Parses CLI arguments,
//! initializes logging, and dispatches to one of:
//!
//! - `validate` — check an address or seed
//! - `decode`   — print the kind and payload of any StrKey
//! - `encode`   — turn a hex payload into a StrKey
//! - `keygen`   — generate a random keypair
//! - `fund`     — ask test-network friendbot for lumens
//! - `version`  — print build version information

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;

use microledger::horizon::{error_string, FriendbotClient};
use microledger::strkey::{decode_any, encode, validate_address, validate_seed};
use microledger::Keypair;

use cli::{Commands, MicroledgerCli};

#[tokio::main]
async fn main() {
    let cli = MicroledgerCli::parse();
    logging::init_logging("microledger=info,microledger_cli=info", cli.log_format);

    let verbose = cli.verbose_errors;
    let result = match cli.command {
        Commands::Validate(args) => validate(&args.text),
        Commands::Decode(args) => decode(&args.text),
        Commands::Encode(args) => encode_payload(args),
        Commands::Keygen => keygen(),
        Commands::Fund(args) => fund(args).await,
        Commands::Version => {
            print_version();
            Ok(())
        }
    };

    if let Err(err) = result {
        let as_std: &(dyn std::error::Error + 'static) = err.as_ref();
        eprintln!("error: {}", error_string(as_std, verbose));
        std::process::exit(1);
    }
}

/// Reports which kind `text` is, or fails with the address error.
fn validate(text: &str) -> Result<()> {
    match validate_address(text) {
        Ok(_) => println!("valid address"),
        Err(address_err) => {
            if validate_seed(text).is_ok() {
                println!("valid seed");
            } else {
                tracing::debug!(error = %address_err, "validation failed");
                return Err(address_err).context("not a valid address or seed");
            }
        }
    }
    Ok(())
}

fn decode(text: &str) -> Result<()> {
    let (kind, payload) = decode_any(text).context("failed to decode strkey")?;
    println!("kind    : {}", kind);
    println!("payload : {}", hex::encode(payload));
    Ok(())
}

fn encode_payload(args: cli::EncodeArgs) -> Result<()> {
    let payload = hex::decode(args.payload_hex.trim()).context("payload is not valid hex")?;
    let text = encode(args.kind, &payload)?;
    println!("{}", text);
    Ok(())
}

fn keygen() -> Result<()> {
    let kp = Keypair::random();
    tracing::info!(address = %kp.address(), "keypair generated");
    println!("Address : {}", kp.address());
    println!("Seed    : {}", kp.seed().to_strkey());
    Ok(())
}

async fn fund(args: cli::FundArgs) -> Result<()> {
    let client = FriendbotClient::with_base_url(&args.horizon_url);
    tracing::info!(address = %args.address, horizon = %client.base_url(), "requesting friendbot funding");

    let body = client.fund(&args.address).await?;
    println!("{}", body);
    Ok(())
}

fn print_version() {
    println!("microledger {}", env!("CARGO_PKG_VERSION"));
    println!("rustc       {}", rustc_version());
}

/// Returns the Rust compiler version used to build this binary.
fn rustc_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}
