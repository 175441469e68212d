// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `vizir_grammar`.
//!
//! Compiles a partial spec against canned field statistics and prints the resolved
//! spec, the per-channel metadata, and the minimized spec. Set `RUST_LOG=debug` to
//! see the compiler's tracing output.

use serde_json::json;
use tracing_subscriber::EnvFilter;
use vizir_grammar::{Compiled, Compiler, FieldStatistics, FieldStats};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let spec = json!({
        "marktype": "bar",
        "encodings": {
            "x": {"name": "date", "type": "T", "timeUnit": "month"},
            "y": {"name": "price", "type": "Q", "bin": {"maxbins": 20}},
            "color": {"name": "date", "type": "T", "timeUnit": "day"},
            "row": {"name": "date", "type": "T", "timeUnit": "year"}
        },
        "config": {
            "monthScaleLabel": [
                "January", "February", "March", "April", "May", "June", "July",
                "August", "September", "October", "November", "December"
            ]
        }
    });

    let stats = FieldStatistics::new()
        .with("date", FieldStats::distinct(1_461).with_missing(2))
        .with("year_date", FieldStats::distinct(5))
        .with("price", FieldStats::distinct(310).with_extent(3.5, 712.0));

    let compiler = Compiler::new();
    let compiled = compiler.compile(&spec, &stats)?;
    tracing::info!(
        channels = compiled.encodings.len(),
        valid = compiled.is_valid(),
        "compiled sample spec"
    );

    println!("resolved spec:");
    println!("{}", serde_json::to_string_pretty(&compiled.spec)?);
    print_metadata(&compiled)?;

    println!("minimized spec:");
    println!(
        "{}",
        serde_json::to_string_pretty(&compiler.minimize(&compiled.spec))?
    );

    // An invalid spec still compiles; its violations are reported alongside.
    let broken = json!({"encodings": {"shape": {"name": "price", "type": "Q"}}});
    let compiled = compiler.compile(&broken, &stats)?;
    tracing::info!(errors = compiled.errors.len(), "compiled invalid spec");
    println!("{} validation errors:", compiled.errors.len());
    for error in &compiled.errors {
        println!("  {error}");
    }

    Ok(())
}

fn print_metadata(compiled: &Compiled) -> Result<(), serde_json::Error> {
    for (channel, metadata) in &compiled.encodings {
        println!("{channel}: {}", serde_json::to_string(metadata)?);
    }
    Ok(())
}
