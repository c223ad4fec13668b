use std::path::Path;

use anyhow::Context;
use regex::Regex;
use sweepr_common::warn;

/// Matches nmap normal-output port lines such as `135/tcp  open  msrpc`.
const OPEN_PORT_PATTERN: &str = r"^(\d+)/tcp\s+open\s+\S+";

pub fn run(file: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read nmap output {}", file.display()))?;

    let pattern = Regex::new(OPEN_PORT_PATTERN).context("invalid port pattern")?;
    let ports = extract_open_ports(&pattern, &content);

    if ports.is_empty() {
        warn!("No open TCP ports found in {}", file.display());
    } else {
        // Comma-joined so the list can be fed straight back into `nmap -p`.
        println!("{}", ports.join(","));
    }
    Ok(())
}

fn extract_open_ports(pattern: &Regex, output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| pattern.captures(line.trim()))
        .map(|caps| caps[1].to_string())
        .collect()
}
