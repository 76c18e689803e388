//! Print the capability report a host would see before its GL context exists.
//!
//! Usage: cargo run -p glinfo --example print_report -- [settings.json] [--json]
//!
//! No GL context is created here, so the probe is always detached: only the
//! `platform` setting is used and `initialized` is ignored.

use anyhow::Result;
use glinfo::{CapabilityProbe, ProbeSettings};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|arg| arg == "--json");
    let settings = match args.iter().find(|arg| !arg.starts_with("--")) {
        Some(path) => ProbeSettings::load(path)?,
        None => ProbeSettings::default(),
    };

    if settings.initialized {
        tracing::debug!("no GL context in this demo, ignoring initialized = true");
    }
    let probe = CapabilityProbe::detached(settings.resolved_platform());
    tracing::info!(platform = %probe.platform(), dialect = ?probe.dialect(), "probing");

    let report = probe.build_report();
    if as_json {
        println!("{}", report.to_json_pretty()?);
    } else {
        println!("{}", report.render_text());
    }
    println!("Meets minimum version: {}", report.meets_minimum_version());
    println!("Binding: {}", probe.binding_version().as_deref().unwrap_or("none"));

    Ok(())
}
