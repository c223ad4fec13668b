//! Kerbrute/Responder username extractor.
//!
//! Pulls `VALID USERNAME: user@domain` hits out of an enumeration log,
//! picks the most frequently seen domain, and writes a wordlist with the
//! domain on the first line followed by the unique local parts in order of
//! first appearance.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use regex::Regex;
use sweepr_common::{info, success, warn};

const VALID_USER_PATTERN: &str = r"(?i)VALID USERNAME:\s*([^\s@]+)@([^\s\])]+)";

pub fn run(
    input: &Path,
    output: &Path,
    starts_with: Option<&str>,
    ends_with: Option<&str>,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read input file {}", input.display()))?;

    let pattern = Regex::new(VALID_USER_PATTERN).context("invalid username pattern")?;
    let entries = extract_users(&pattern, &content);

    let domain = most_common_domain(&entries);
    let users = unique_locals(&entries);

    write_output(output, domain.as_deref(), &users)?;

    if users.is_empty() {
        // The header-only output file is still created, but an empty
        // extraction is a failed run.
        anyhow::bail!("no usernames found in {}", input.display());
    }
    success!("{} usernames saved to '{}'", users.len(), output.display());

    if starts_with.is_some() || ends_with.is_some() {
        let matched = filter_names(&users, starts_with, ends_with);
        if matched.is_empty() {
            warn!("No usernames matched the given filters");
        } else {
            info!("Matched usernames:");
            for name in matched {
                println!("{name}");
            }
        }
    }

    Ok(())
}

/// (local part, domain) per hit, in log order.
fn extract_users(pattern: &Regex, content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .filter_map(|line| pattern.captures(line))
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Most frequently seen domain; the earliest-seen one wins ties.
fn most_common_domain(entries: &[(String, String)]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for (_, domain) in entries {
        *counts.entry(domain).or_default() += 1;
    }

    let best = counts.values().copied().max()?;
    entries
        .iter()
        .map(|(_, domain)| domain)
        .find(|domain| counts[domain.as_str()] == best)
        .cloned()
}

fn unique_locals(entries: &[(String, String)]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .map(|(local, _)| local)
        .filter(|local| seen.insert(local.as_str()))
        .cloned()
        .collect()
}

fn write_output(output: &Path, domain: Option<&str>, users: &[String]) -> anyhow::Result<()> {
    let file = File::create(output)
        .with_context(|| format!("failed to create output file {}", output.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}:", domain.unwrap_or("unknown_domain"))?;
    for user in users {
        writeln!(writer, "{user}")?;
    }
    writer.flush()?;
    Ok(())
}

fn filter_names<'a>(
    names: &'a [String],
    starts_with: Option<&str>,
    ends_with: Option<&str>,
) -> Vec<&'a str> {
    let prefix = starts_with.map(str::to_lowercase);
    let suffix = ends_with.map(str::to_lowercase);

    names
        .iter()
        .map(String::as_str)
        .filter(|name| {
            let lower = name.to_lowercase();
            prefix.as_deref().is_none_or(|p| lower.starts_with(p))
                && suffix.as_deref().is_none_or(|s| lower.ends_with(s))
        })
        .collect()
}
