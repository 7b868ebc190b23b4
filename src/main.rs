// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use clap::Parser;
use log::debug;

use induce::{
    lms_suffix_array, read_source, render_bwt, render_slots, render_suffix_array, suffix_array,
    Bwt, Report,
};

mod cli;
use cli::inspect::Inspection;
use cli::{Cli, CliError, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::logger::init(cli.verbose) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&cli.command_or_default(), cli.json) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(command: &Commands, json: bool) -> Result<(), CliError> {
    let text = read_source(command.file().map(|p| p.as_path()))?;
    debug!("read {} bytes", text.len());

    let mut stdout = io::stdout().lock();
    match command {
        Commands::Sa { .. } => {
            let sa = suffix_array(&text);
            if json {
                let report = Report::new(text.len()).with_suffix_array(sa);
                stdout.write_all(report.to_json()?.as_bytes())?;
            } else {
                stdout.write_all(render_suffix_array(&sa).as_bytes())?;
            }
        }
        Commands::Bwt { .. } => {
            let bwt = Bwt::transform(&text);
            if json {
                let report = Report::new(text.len()).with_bwt(&bwt);
                stdout.write_all(report.to_json()?.as_bytes())?;
            } else {
                stdout.write_all(&render_bwt(&bwt))?;
            }
        }
        Commands::Lms { .. } => {
            let slots = lms_suffix_array(&text);
            if json {
                let report = Report::new(text.len()).with_lms(slots);
                stdout.write_all(report.to_json()?.as_bytes())?;
            } else {
                stdout.write_all(render_slots(&slots).as_bytes())?;
            }
        }
        Commands::Inspect { .. } => {
            let inspection = Inspection::run(&text);
            if json {
                stdout.write_all(inspection.report().to_json()?.as_bytes())?;
            } else {
                inspection.print();
            }
            stdout.flush()?;
            return inspection.outcome();
        }
    }
    stdout.flush()?;
    Ok(())
}
