//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for liveqa
#[derive(Parser, Debug)]
#[command(name = "liveqa")]
#[command(author, version, about = "Race answer producers against a time budget")]
#[command(long_about = r#"
liveqa serves questions over HTTP and answers each one by racing several
answer producers against a hard time budget.

Each producer runs two fallback stages:
1. Retrieval: remote retriever, then a canned passage
2. Summarization: remote summarizer, then a canned summary

The most recent answer available when the budget expires (or when every
producer has finished) is returned as an XML document.

Configuration files are loaded from (in priority order):
1. LIVEQA_* environment variables
2. --config <path>     Explicit config file
3. ./liveqa.toml       Project-level config
4. ~/.config/liveqa/config.toml   Global config

Example:
  liveqa --producer producers/emory.json --timeout-ms 50000
  liveqa -p a.json -p b.json --listen 0.0.0.0:8080 -v
"#)]
pub struct Cli {
    /// Address to listen on (overrides `listen`)
    #[arg(short, long, value_name = "ADDR")]
    pub listen: Option<String>,

    /// Producer descriptor file (can be specified multiple times, overrides `producers`)
    #[arg(short, long, value_name = "PATH")]
    pub producer: Vec<PathBuf>,

    /// Dispatch budget per question in milliseconds (overrides `timeout_ms`)
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// JSONL file receiving one record per answer (overrides `answer_log`)
    #[arg(long, value_name = "PATH")]
    pub answer_log: Option<PathBuf>,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
