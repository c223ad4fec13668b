//! Wordlist combination generator.
//!
//! Expands a list of candidate words into every ordered combination (with
//! repetition) of the requested lengths, the raw material for hashcat rule
//! passes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use sweepr_common::{info, success};

pub fn run(
    input: &Path,
    output: &Path,
    min: usize,
    max: usize,
    separator: &str,
) -> anyhow::Result<()> {
    if min < 1 {
        anyhow::bail!("minimum combination length must be at least 1");
    }
    if max < min {
        anyhow::bail!("maximum combination length must not be smaller than the minimum");
    }

    let content = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read wordlist {}", input.display()))?;
    let words = parse_words(&content);
    info!("Loaded {} words from '{}'", words.len(), input.display());

    let file = File::create(output)
        .with_context(|| format!("failed to create output file {}", output.display()))?;
    let mut writer = BufWriter::new(file);

    let mut total: usize = 0;
    for length in min..=max {
        let combos = combinations(&words, length, separator);
        info!("Length {length}: {} combinations", combos.len());
        for combo in &combos {
            writeln!(writer, "{combo}")?;
        }
        total += combos.len();
    }
    writer.flush()?;

    success!("Generated {} combinations in '{}'", total, output.display());
    Ok(())
}

fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// All ordered combinations of `length` words, repetition allowed,
/// in wordlist order.
fn combinations(words: &[String], length: usize, separator: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut stack: Vec<&str> = Vec::with_capacity(length);
    build(words, length, separator, &mut stack, &mut out);
    out
}

fn build<'a>(
    words: &'a [String],
    remaining: usize,
    separator: &str,
    stack: &mut Vec<&'a str>,
    out: &mut Vec<String>,
) {
    if remaining == 0 {
        out.push(stack.join(separator));
        return;
    }

    for word in words {
        stack.push(word);
        build(words, remaining - 1, separator, stack, out);
        stack.pop();
    }
}
