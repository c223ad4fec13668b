//! Name-to-username permutation generator.
//!
//! Turns "First Last" lines into the username spellings commonly seen in
//! corporate directories (jsmith, j.smith, smithj, johnsmi, ...), written
//! out as a sorted, de-duplicated wordlist.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use sweepr_common::success;

pub fn run(input: Option<&Path>, output: &Path) -> anyhow::Result<()> {
    let names: Vec<String> = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            BufReader::new(file).lines().collect::<io::Result<_>>()?
        }
        None => io::stdin().lock().lines().collect::<io::Result<_>>()?,
    };

    let usernames = generate(&names);

    let file = File::create(output)
        .with_context(|| format!("failed to create output file {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    for username in &usernames {
        writeln!(writer, "{username}")?;
    }
    writer.flush()?;

    success!(
        "Generated {} unique usernames in '{}'",
        usernames.len(),
        output.display()
    );
    Ok(())
}

fn generate(lines: &[String]) -> BTreeSet<String> {
    let mut usernames = BTreeSet::new();

    for line in lines {
        let mut parts = line.split_whitespace();
        let Some(first) = parts.next() else { continue };
        let rest: String = parts.collect();
        if rest.is_empty() {
            // A lone first name has no surname to permute against.
            continue;
        }
        usernames.extend(variations(first, &rest));
    }

    usernames
}

fn variations(first_raw: &str, last_raw: &str) -> BTreeSet<String> {
    let first = first_raw.to_lowercase();
    let last = last_raw.to_lowercase();
    let fi = initial(&first);
    let li = initial(&last);

    let mut set = BTreeSet::new();

    set.extend([
        first.clone(),
        last.clone(),
        format!("{first}{last}"),
        format!("{last}{first}"),
        format!("{fi}{last}"),
        format!("{last}{fi}"),
        format!("{fi}{li}"),
        format!("{li}{fi}"),
    ]);

    set.extend([
        format!("{first}.{last}"),
        format!("{last}.{first}"),
        format!("{fi}.{last}"),
        format!("{last}.{fi}"),
        format!("{first}.{li}"),
        format!("{li}.{first}"),
    ]);

    // Truncated-surname forms: benwill, bwill, willben, willb, ...
    for len in 3..=7 {
        if last.chars().count() >= len {
            let cut = prefix(&last, len);
            set.extend([
                format!("{first}{cut}"),
                format!("{fi}{cut}"),
                format!("{cut}{first}"),
                format!("{cut}{fi}"),
            ]);
        }
    }

    // First name plus the first few surname letters: benw, benwi, benwil.
    let partial_max = last.chars().count().min(3);
    for len in 1..=partial_max {
        set.insert(format!("{first}{}", prefix(&last, len)));
    }

    if first.chars().count() > 1 {
        set.insert(format!("{}{last}", prefix(&first, 3)));
    }
    if last.chars().count() > 1 {
        set.insert(format!("{first}{}", prefix(&last, 3)));
        set.insert(format!("{fi}{}", prefix(&last, 4)));
    }

    set
}

fn initial(name: &str) -> String {
    name.chars().take(1).collect()
}

fn prefix(name: &str, len: usize) -> String {
    name.chars().take(len).collect()
}
