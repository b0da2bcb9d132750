use anyhow::{bail, Context};
use chainlab_address::{decode_check, MockKeypair, Network};
use chainlab_crypto::{base58, sha256};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

/// Maximum number of keypairs per `address new` invocation.
const MAX_KEYPAIRS: usize = 100;

#[derive(Parser, Debug)]
#[command(
    name = "chainlab",
    about = "Educational blockchain demos: Base58 conversion, SHA-256 hashing, mock addresses"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode hex bytes as a Base58 string
    Encode {
        /// Hex input (whitespace ignored, e.g. "00f54a58...")
        hex: String,
    },
    /// Decode a Base58 string to lowercase hex
    Decode {
        /// Base58 input
        base58: String,
    },
    /// Print SHA-256 and double SHA-256 of the input
    Hash {
        /// Treat the input as hex bytes instead of UTF-8 text
        #[arg(long = "hex", default_value_t = false)]
        hex: bool,
        /// Input text (or hex with --hex)
        input: String,
    },
    /// Mock address tools (educational only)
    Address {
        #[command(subcommand)]
        command: AddressCommand,
    },
}

#[derive(Subcommand, Debug)]
enum AddressCommand {
    /// Generate mock keypairs. Never use the output for real funds
    New {
        /// Use the testnet version byte (0x6f) instead of mainnet (0x00)
        #[arg(long = "testnet", default_value_t = false)]
        testnet: bool,

        /// Number of keypairs to generate
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: usize,

        /// 32-byte hex seed for deterministic output
        #[arg(long = "seed")]
        seed: Option<String>,

        /// Emit JSON instead of the human-readable listing
        #[arg(long = "json", default_value_t = false)]
        json: bool,
    },
    /// Validate a Base58Check address and print its version and payload
    Check {
        /// Address to validate
        address: String,
    },
}

/// Parse hex input, ignoring whitespace between digits.
fn parse_hex(input: &str) -> anyhow::Result<Vec<u8>> {
    let compact: String = input.split_whitespace().collect();
    hex::decode(&compact).context("invalid hex input")
}

/// Parse the `--seed` argument into a ChaCha20 seed.
fn parse_seed(seed: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = parse_hex(seed)?;
    let seed: [u8; 32] = bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| anyhow::anyhow!("seed must be 32 bytes, got {}", bytes.len()))?;
    Ok(seed)
}

fn run_encode(hex_input: &str) -> anyhow::Result<()> {
    let bytes = parse_hex(hex_input)?;
    println!("{}", base58::encode(&bytes));
    Ok(())
}

fn run_decode(base58_input: &str) -> anyhow::Result<()> {
    let bytes = base58::decode(base58_input.trim())?;
    println!("{}", hex::encode(bytes));
    Ok(())
}

fn run_hash(input: &str, hex_input: bool) -> anyhow::Result<()> {
    let bytes = if hex_input {
        parse_hex(input)?
    } else {
        input.as_bytes().to_vec()
    };

    println!("Input:          {} bytes", bytes.len());
    println!("SHA-256:        {}", hex::encode(sha256::sha256(&bytes)));
    println!("Double SHA-256: {}", hex::encode(sha256::sha256d(&bytes)));
    Ok(())
}

#[derive(Serialize)]
struct KeypairRecord {
    network: &'static str,
    address: String,
    public_key: String,
    private_key: String,
}

impl KeypairRecord {
    fn new(keypair: &MockKeypair, network: Network) -> Self {
        Self {
            network: match network {
                Network::Mainnet => "mainnet",
                Network::Testnet => "testnet",
            },
            address: keypair.address().to_string(),
            public_key: hex::encode(keypair.public_key()),
            private_key: hex::encode(keypair.private_key()),
        }
    }
}

fn run_address_new(
    network: Network,
    count: usize,
    seed: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    if count == 0 {
        bail!("-n/--count must be at least 1");
    }
    if count > MAX_KEYPAIRS {
        bail!("-n/--count {} exceeds maximum of {}", count, MAX_KEYPAIRS);
    }

    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(ChaCha20Rng::from_seed(parse_seed(seed)?)),
        None => Box::new(rand::thread_rng()),
    };

    eprintln!("Warning: mock keys for demonstration only. Never use them for real funds.");

    let records: Vec<KeypairRecord> = (0..count)
        .map(|_| KeypairRecord::new(&MockKeypair::generate(&mut rng, network), network))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for (i, record) in records.iter().enumerate() {
        if count > 1 {
            println!();
            println!("=== Keypair {} ===", i + 1);
        }
        println!("Network:     {}", record.network);
        println!("Address:     {}", record.address);
        println!("Public key:  {}", record.public_key);
        println!("Private key: {}", record.private_key);
    }
    Ok(())
}

fn run_address_check(address: &str) -> anyhow::Result<()> {
    let (version, payload) = decode_check(address.trim())?;
    println!("Valid Base58Check");
    println!("Version: 0x{:02x}", version);
    println!("Payload: {}", hex::encode(payload));
    Ok(())
}

fn main() {
    let args = Args::parse();

    let result = match args.command {
        Command::Encode { hex } => run_encode(&hex),
        Command::Decode { base58 } => run_decode(&base58),
        Command::Hash { hex, input } => run_hash(&input, hex),
        Command::Address { command } => match command {
            AddressCommand::New {
                testnet,
                count,
                seed,
                json,
            } => {
                let network = if testnet {
                    Network::Testnet
                } else {
                    Network::Mainnet
                };
                run_address_new(network, count, seed.as_deref(), json)
            }
            AddressCommand::Check { address } => run_address_check(&address),
        },
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_ignores_whitespace() {
        assert_eq!(parse_hex("00 ff\t0a").unwrap(), vec![0x00, 0xff, 0x0a]);
    }

    #[test]
    fn test_parse_hex_rejects_odd_length() {
        assert!(parse_hex("abc").is_err());
        assert!(parse_hex("zz").is_err());
    }

    #[test]
    fn test_parse_seed_length_checked() {
        assert!(parse_seed(&"ab".repeat(32)).is_ok());
        assert!(parse_seed("abcd").is_err());
    }

    #[test]
    fn test_deterministic_records_under_seed() {
        let seed = parse_seed(&"11".repeat(32)).unwrap();
        let mut rng1 = ChaCha20Rng::from_seed(seed);
        let mut rng2 = ChaCha20Rng::from_seed(seed);
        let a = MockKeypair::generate(&mut rng1, Network::Mainnet);
        let b = MockKeypair::generate(&mut rng2, Network::Mainnet);
        assert_eq!(a.address(), b.address());
    }
}
