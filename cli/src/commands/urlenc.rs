use anyhow::Context;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Everything except unreserved characters and `/` gets escaped, which is
/// the conventional default for encoding a path-ish payload.
const ESCAPED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

pub fn run(decode: bool, text: &str) -> anyhow::Result<()> {
    let output = if decode { decode_str(text)? } else { encode_str(text) };
    println!("{output}");
    Ok(())
}

fn encode_str(text: &str) -> String {
    utf8_percent_encode(text, ESCAPED).to_string()
}

fn decode_str(text: &str) -> anyhow::Result<String> {
    let decoded = percent_decode_str(text)
        .decode_utf8()
        .context("decoded input is not valid UTF-8")?;
    Ok(decoded.into_owned())
}
