use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "observer", version, about = "Smart contract power-structure and vulnerability analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Analyze a contract source file from the command line
    Analyze(AnalyzeArgs),
    /// Look up an address in the vulnerable contract catalog
    Lookup(LookupArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Listen address (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port (overrides config)
    #[arg(long)]
    pub port: Option<u16>,

    /// SQLite database path for exploit submissions (overrides config)
    #[arg(long)]
    pub db: Option<String>,

    /// Directory of static front-end files (overrides config)
    #[arg(long)]
    pub public_dir: Option<String>,
}

#[derive(Args, Clone)]
pub struct AnalyzeArgs {
    /// Solidity source file
    pub file: String,

    /// On-chain address of the contract
    #[arg(short, long)]
    pub address: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Only run the local pattern matcher and cross-reference; no model call
    #[arg(long)]
    pub offline: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct LookupArgs {
    /// Contract address (0x + 40 hex digits)
    pub address: String,

    /// YAML configuration file (for an extra contracts catalog)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
