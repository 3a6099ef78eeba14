//! `vaddr`: a command-line harness over `vaddr-kernel`'s search driver.
//!
//! This is test/demo tooling, not a production wallet-recovery host: it
//! reads a plain-text word list from disk, picks a random 32-byte starting
//! point (or accepts one explicitly for reproducible runs), and reports
//! whatever the search driver finds.

mod error;
mod wordlist;

use clap::{Parser, Subcommand};
use error::{CliError, CliResult};
use rand::RngCore;
use std::path::PathBuf;
use tracing::info;
use vaddr_kernel::{derive_address, Condition, SearchConfig, SearchDriver};

#[derive(Parser)]
#[command(name = "vaddr")]
#[command(about = "Brute-force vanity Ethereum address search")]
#[command(version)]
struct Cli {
    /// Path to a plain-text word list, one word per line, exactly 2048 lines.
    #[arg(long, global = true)]
    wordlist: PathBuf,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for an address matching a condition.
    Search {
        /// Hex-encoded 32-byte starting entropy. Random if omitted.
        #[arg(long)]
        base_entropy: Option<String>,

        /// Number of parallel lanes.
        #[arg(long, default_value_t = 1024)]
        num_threads: u32,

        /// How many candidates a lane checks between early-exit-flag polls.
        /// Must be a power of two.
        #[arg(long, default_value_t = 4096)]
        check_interval: u32,

        /// Require this hex byte string as the address prefix.
        #[arg(long)]
        prefix: Option<String>,

        /// Require this hex byte string as the address suffix.
        #[arg(long)]
        suffix: Option<String>,

        /// Require at least this many leading zero hex nibbles.
        #[arg(long)]
        leading_zeros_min: Option<u8>,

        /// Require exactly this many leading zero hex nibbles.
        #[arg(long)]
        leading_zeros_exact: Option<u8>,
    },

    /// Derive the address for a single 32-byte entropy value.
    Derive {
        /// Hex-encoded 32-byte entropy.
        entropy: String,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .compact()
        .init();
}

fn parse_hex32(input: &str) -> CliResult<[u8; 32]> {
    let bytes = parse_hex(input)?;
    bytes
        .try_into()
        .map_err(|v: Vec<u8>| CliError::Condition(format!("expected 32 bytes, got {}", v.len())))
}

fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let input = input.strip_prefix("0x").unwrap_or(input);
    if input.len() % 2 != 0 {
        return Err(CliError::Condition("hex string has odd length".into()));
    }
    (0..input.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&input[i..i + 2], 16)
                .map_err(|_| CliError::Condition(format!("invalid hex byte at offset {i}")))
        })
        .collect()
}

fn build_condition(
    prefix: Option<String>,
    suffix: Option<String>,
    leading_zeros_min: Option<u8>,
    leading_zeros_exact: Option<u8>,
) -> CliResult<u64> {
    match (prefix, suffix, leading_zeros_min, leading_zeros_exact) {
        (Some(p), None, None, None) => {
            Condition::encode_prefix(&parse_hex(&p)?).map_err(|e| CliError::Condition(e.to_string()))
        }
        (None, Some(s), None, None) => {
            Condition::encode_suffix(&parse_hex(&s)?).map_err(|e| CliError::Condition(e.to_string()))
        }
        (None, None, Some(n), None) => Ok(Condition::encode_leading_zeros_min(n)),
        (None, None, None, Some(n)) => Ok(Condition::encode_leading_zeros_exact(n)),
        _ => Err(CliError::Condition(
            "exactly one of --prefix, --suffix, --leading-zeros-min, --leading-zeros-exact is required".into(),
        )),
    }
}

fn run_search(
    wordlist_path: PathBuf,
    base_entropy: Option<String>,
    num_threads: u32,
    check_interval: u32,
    prefix: Option<String>,
    suffix: Option<String>,
    leading_zeros_min: Option<u8>,
    leading_zeros_exact: Option<u8>,
) -> CliResult<()> {
    let words = wordlist::load(&wordlist_path)?;
    let wordlist = wordlist::as_str_refs(&words);

    let base_entropy = match base_entropy {
        Some(hex) => parse_hex32(&hex)?,
        None => {
            let mut bytes = [0u8; 32];
            rand::thread_rng().fill_bytes(&mut bytes);
            bytes
        }
    };

    let condition = build_condition(prefix, suffix, leading_zeros_min, leading_zeros_exact)?;
    let config = SearchConfig::new(
        base_entropy,
        num_threads,
        condition,
        check_interval,
        [0; 20],
        [0; 20],
    )?;

    info!(num_threads, check_interval, "starting search");
    let driver = SearchDriver::new(&config, &wordlist)?;
    driver.run();

    match driver.result() {
        Some(result) => {
            let address: String = result.eth_address.iter().map(|b| format!("{b:02x}")).collect();
            let entropy: String = result.result_entropy.iter().map(|b| format!("{b:02x}")).collect();
            println!("found by lane {}", result.found_by_thread);
            println!("entropy: {entropy}");
            println!("address: 0x{address}");
        }
        None => println!("search space exhausted without a match"),
    }

    let total: u64 = driver.checked_counts().iter().sum();
    info!(total_checked = total, "search finished");
    Ok(())
}

fn run_derive(wordlist_path: PathBuf, entropy_hex: String) -> CliResult<()> {
    let words = wordlist::load(&wordlist_path)?;
    let wordlist = wordlist::as_str_refs(&words);
    let entropy = parse_hex32(&entropy_hex)?;
    let address = derive_address(&entropy, &wordlist);
    let hex: String = address.iter().map(|b| format!("{b:02x}")).collect();
    println!("0x{hex}");
    Ok(())
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Search {
            base_entropy,
            num_threads,
            check_interval,
            prefix,
            suffix,
            leading_zeros_min,
            leading_zeros_exact,
        } => run_search(
            cli.wordlist,
            base_entropy,
            num_threads,
            check_interval,
            prefix,
            suffix,
            leading_zeros_min,
            leading_zeros_exact,
        ),
        Commands::Derive { entropy } => run_derive(cli.wordlist, entropy),
    }
}
