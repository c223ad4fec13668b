pub mod ports;
pub mod sweep;
pub mod urlenc;
pub mod usergen;
pub mod users;
pub mod wordlist;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sweepr_common::config::DEFAULT_WORKERS;
use sweepr_common::network::range::AddressRange;

#[derive(Parser)]
#[command(name = "sweepr")]
#[command(about = "Recon utilities built around a concurrent host-liveness sweeper.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sweep a subnet for live hosts
    #[command(alias = "s")]
    Sweep {
        /// Network to sweep, e.g. 192.168.1.0/24 (prompted for when omitted)
        target: Option<AddressRange>,
        /// Maximum number of probes in flight at once
        #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
        workers: usize,
        /// Per-probe timeout in seconds
        #[arg(short, long, default_value_t = 1)]
        timeout: u64,
        /// Only print the final summary
        #[arg(short, long)]
        quiet: bool,
    },
    /// URL-encode or decode a string
    #[command(alias = "u")]
    Urlenc {
        /// Decode instead of encode
        #[arg(short, long)]
        decode: bool,
        text: String,
    },
    /// Generate username permutations from "First Last" names
    #[command(alias = "g")]
    Usergen {
        /// File of names, one per line (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output wordlist file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Extract open TCP ports from normal-format nmap output
    #[command(alias = "p")]
    Ports {
        /// An `nmap -oN` output file
        file: PathBuf,
    },
    /// Extract valid usernames from Kerbrute/Responder output
    #[command(alias = "k")]
    Users {
        /// Kerbrute or Responder log file
        #[arg(short, long)]
        input: PathBuf,
        /// Output username wordlist file
        #[arg(short, long)]
        output: PathBuf,
        /// Echo usernames starting with PREFIX (case-insensitive)
        #[arg(short = 'a', long = "starts-with", value_name = "PREFIX")]
        starts_with: Option<String>,
        /// Echo usernames ending with SUFFIX (case-insensitive)
        #[arg(short = 'e', long = "ends-with", value_name = "SUFFIX")]
        ends_with: Option<String>,
    },
    /// Expand a wordlist into multi-word password candidates
    #[command(alias = "w")]
    Wordlist {
        /// File of candidate words, one per line
        #[arg(short, long)]
        input: PathBuf,
        /// Output file for the combinations
        #[arg(short, long)]
        output: PathBuf,
        /// Minimum number of words per combination
        #[arg(long, default_value_t = 1)]
        min: usize,
        /// Maximum number of words per combination
        #[arg(long, default_value_t = 4)]
        max: usize,
        /// Separator placed between words
        #[arg(long, default_value = "")]
        separator: String,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
