// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Custom cargo commands for the induce crate.
//!
//! Usage:
//!   cargo xtask verify          - Run full verification suite
//!   cargo xtask test            - Run all tests
//!   cargo xtask check           - Quick check (build + check + test + clippy)
//!   cargo xtask bench           - Run benchmarks
//!   cargo xtask kani            - Run Kani model checking proofs
//!   cargo xtask fuzz <TARGET> [SECS] - Run one fuzz target (nightly)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default fuzzing budget per target.
const FUZZ_SECONDS: &str = "60";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("kani") => kani()?,
        Some("fuzz") => {
            let target = args.get(1).context("usage: cargo xtask fuzz <TARGET> [SECS]")?;
            let secs = args.get(2).map(String::as_str).unwrap_or(FUZZ_SECONDS);
            fuzz(target, secs)?;
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify               Run full verification suite (markers + tests + clippy + fuzz registry)
  test                 Run all Rust tests
  check                Quick check (lib build + check + test + clippy)
  bench                Run benchmarks
  kani                 Run Kani proofs in kani-proofs/
  fuzz <TARGET> [SECS] Run a cargo-fuzz target (default 60s, needs nightly)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("induce Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running release-mode tests (contracts off)...");
    run_cargo(&["test", "--quiet", "--release", "--test", "property"])?;
    println!("✓ Release property tests passed\n");

    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[5/5] Checking fuzz target registration...");
    verify_fuzz_targets()?;
    println!("✓ Every fuzz target is registered\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/4] cargo build --lib...");
    run_cargo(&["build", "--lib"])?;

    println!("[2/4] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[3/4] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[4/4] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run the Kani harnesses
fn kani() -> Result<()> {
    let dir = project_root()?.join("kani-proofs");
    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&dir)
        .status()
        .context("Failed to run cargo kani (is kani-verifier installed?)")?;

    if !status.success() {
        bail!("Kani proofs failed");
    }
    Ok(())
}

/// Run one fuzz target for a fixed time
fn fuzz(target: &str, secs: &str) -> Result<()> {
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", secs);

    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", &max_time])
        .current_dir(&root)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} found a failure", target);
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

/// Every file in fuzz/fuzz_targets must have a [[bin]] entry.
fn verify_fuzz_targets() -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    let manifest = std::fs::read_to_string(fuzz_dir.join("Cargo.toml"))
        .context("Failed to read fuzz/Cargo.toml")?;

    for name in fuzz_target_names(&fuzz_dir.join("fuzz_targets"))? {
        let entry = format!("path = \"fuzz_targets/{}.rs\"", name);
        if !manifest.contains(&entry) {
            bail!("fuzz target {} has no [[bin]] entry in fuzz/Cargo.toml", name);
        }
    }
    Ok(())
}

fn fuzz_target_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("Failed to read {:?}", dir))? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "rs") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
