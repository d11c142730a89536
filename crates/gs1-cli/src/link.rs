//! # Parse-Link Subcommand
//!
//! `gs1vc parse-link <uri>` prints the parsed identifier as JSON.

use std::io::Write;

use clap::Args;

use gs1_digital_link::parse_gs1_digital_link;

/// Arguments for the parse-link subcommand.
#[derive(Args, Debug)]
pub struct ParseLinkArgs {
    /// Digital Link URI or bare path such as `01/04270005112602`.
    pub uri: String,
}

/// Parse the link and write the result to `out`. Returns whether the
/// link is valid.
pub fn run_parse_link(args: &ParseLinkArgs, out: &mut impl Write) -> anyhow::Result<bool> {
    let value = parse_gs1_digital_link(&args.uri);
    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)?;
    Ok(value.is_valid())
}
