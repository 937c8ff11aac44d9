//! # CLI Interface
//!
//! Defines the command-line argument structure for `microledger` using
//! `clap` derive.

use clap::{Args, Parser, Subcommand};
use microledger::strkey::VersionByte;

use crate::logging::LogFormat;

/// StrKey validation, key generation, and test-network funding.
#[derive(Parser, Debug)]
#[command(
    name = "microledger",
    about = "Stellar address helpers: validate, decode, encode, keygen, fund",
    version,
    propagate_version = true
)]
pub struct MicroledgerCli {
    /// Log output format.
    #[arg(
        long,
        global = true,
        value_enum,
        env = "MICROLEDGER_LOG_FORMAT",
        default_value = "pretty"
    )]
    pub log_format: LogFormat,

    /// Show Horizon problem detail and the full error chain on failure.
    #[arg(long, global = true)]
    pub verbose_errors: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether a string is a valid address or seed.
    Validate(ValidateArgs),
    /// Decode any StrKey and print its kind and hex payload.
    Decode(DecodeArgs),
    /// Encode a hex payload as a StrKey.
    Encode(EncodeArgs),
    /// Generate a random keypair and print its address and seed.
    Keygen,
    /// Fund an address on the test network via friendbot.
    Fund(FundArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// The address (`G...`) or seed (`S...`) to check.
    pub text: String,
}

/// Arguments for `decode`.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// The StrKey to decode.
    pub text: String,
}

/// Arguments for `encode`.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Kind of key: account, muxed-account, seed, pre-auth-tx, sha256-hash.
    #[arg(long, short = 'k', default_value = "account")]
    pub kind: VersionByte,

    /// Hex-encoded payload.
    pub payload_hex: String,
}

/// Arguments for `fund`.
#[derive(Args, Debug)]
pub struct FundArgs {
    /// Account address to fund.
    pub address: String,

    /// Horizon server hosting friendbot.
    #[arg(
        long,
        env = "MICROLEDGER_HORIZON_URL",
        default_value = microledger::config::TESTNET_HORIZON_URL
    )]
    pub horizon_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        MicroledgerCli::command().debug_assert();
    }

    #[test]
    fn parses_encode_kind() {
        let cli = MicroledgerCli::parse_from(["microledger", "encode", "--kind", "seed", "00"]);
        match cli.command {
            Commands::Encode(args) => assert_eq!(args.kind, VersionByte::Seed),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn fund_defaults_to_testnet() {
        let cli = MicroledgerCli::parse_from(["microledger", "fund", "GABC"]);
        match cli.command {
            Commands::Fund(args) => {
                assert_eq!(args.horizon_url, "https://horizon-testnet.stellar.org")
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
