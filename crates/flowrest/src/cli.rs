use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flowrest_core::Network;

/// flowrest: query a Flow access node over its REST API.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Named network to talk to: localhost, testnet or mainnet.
    #[arg(long, default_value = "localhost", env = "FLOWREST_NETWORK")]
    pub network: Network,

    /// REST base URL (for example `http://localhost:8888/v1`).
    /// Takes precedence over `--network`.
    #[arg(long, env = "FLOWREST_URL")]
    pub url: Option<String>,

    /// Connect timeout in seconds.
    #[arg(long, default_value = "10")]
    pub connect_timeout: u64,

    /// Whole-request timeout in seconds.
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Latest finalized block.
    LatestBlock,

    /// Block by id.
    Block { id: String },

    /// Blocks at the given heights (comma-separated or repeated).
    Blocks {
        #[arg(required = true, value_delimiter = ',')]
        heights: Vec<u64>,
    },

    /// Blocks between two heights, inclusive.
    BlockRange { start: u64, end: u64 },

    /// Transaction by id.
    Transaction { id: String },

    /// Execution result of a transaction.
    TransactionResult { id: String },

    /// Account by address, with keys and contracts.
    Account { address: String },

    /// Events of a type between two heights, inclusive.
    EventsRange {
        event_type: String,
        start: u64,
        end: u64,
    },

    /// Events of a type in the given blocks.
    Events {
        event_type: String,
        #[arg(required = true, value_delimiter = ',')]
        block_ids: Vec<String>,
    },

    /// Collection by id, with its transactions.
    Collection { id: String },

    /// Execution results for the given blocks.
    ExecutionResults {
        #[arg(required = true, value_delimiter = ',')]
        block_ids: Vec<String>,
    },

    /// Run a read-only script.
    ExecuteScript {
        /// Path to the script source.
        file: PathBuf,

        /// JSON-Cadence argument, e.g. `{"type":"Int","value":"1"}` (repeatable).
        #[arg(long = "arg")]
        args: Vec<String>,
    },

    /// Submit a signed transaction read from a JSON file.
    Submit { file: PathBuf },
}
