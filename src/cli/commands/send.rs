//! Send command implementation
//!
//! This module implements the `send` command: read the input table, build
//! one load payload per row, submit each to the load API, and persist the
//! per-row outcomes to the results CSV.

use crate::adapters::api::HttpLoadApi;
use crate::adapters::table::{read_records, write_results};
use crate::config::load_config;
use crate::core::batch::BatchRunner;
use crate::core::build::build_load_payload;
use chrono::Utc;
use clap::Args;
use std::sync::Arc;

/// Arguments for the send command
#[derive(Args, Debug)]
pub struct SendArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - build and report payloads without submitting
    #[arg(long)]
    pub dry_run: bool,

    /// Override input table path
    #[arg(long)]
    pub input: Option<String>,

    /// Override results file path
    #[arg(long)]
    pub output: Option<String>,
}

impl SendArgs {
    /// Execute the send command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting send command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Configuration error");
                eprintln!("Configuration error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply CLI overrides
        if let Some(input) = &self.input {
            tracing::info!(input = %input, "Overriding input path from CLI");
            config.input.path = input.clone();
        }

        if let Some(output) = &self.output {
            tracing::info!(output = %output, "Overriding results path from CLI");
            config.output.results_path = output.clone();
        }

        // Dry run mode
        if self.dry_run {
            tracing::info!("Dry run mode enabled - nothing will be submitted");
            println!("🔍 DRY RUN MODE - payloads will be built but not submitted");
            println!();
            return self.execute_dry_run(&config);
        }

        // Credentials warning before any processing
        if !config.api.has_credentials() {
            println!("WARNING: API credentials not set!");
            println!("The API requires Basic Authentication.");
            println!("Please set your credentials using one of these methods:");
            println!("  1. Set environment variables:");
            println!("     export LOADSEND_API_USERNAME='your_username'");
            println!("     export LOADSEND_API_PASSWORD='your_password'");
            println!("  2. Add username/password to the [api] section of {config_path}");
            println!();
            println!("Continuing without authentication (requests will likely fail with 401)...");
            println!();
        }

        // Confirmation prompt (unless --yes)
        if !self.yes {
            println!("Send Configuration:");
            println!("  Endpoint: {}", config.api.endpoint);
            println!("  Input: {}", config.input.path);
            println!("  Results: {}", config.output.results_path);
            println!();
            print!("Proceed with submission? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Send cancelled.");
                return Ok(0);
            }
        }

        // Read the input table
        println!("Reading input table...");
        let records = match read_records(&config.input.path) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(error = %e, path = %config.input.path, "Failed to read input");
                eprintln!("Failed to read input table: {e}");
                return Ok(4); // Setup error exit code
            }
        };
        println!("Found {} test cases", records.len());
        println!();
        println!("Processing and sending requests...");
        println!();

        // Create the API client
        let api = match HttpLoadApi::new(config.api.clone()) {
            Ok(api) => Arc::new(api),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create API client");
                eprintln!("Failed to create API client: {e}");
                return Ok(4);
            }
        };

        // Run the batch
        let runner = BatchRunner::new(
            api,
            config.input.id_column.clone(),
            config.output.response_truncate_chars,
        );
        let summary = runner.run(&records).await;

        // Display summary
        println!();
        println!("{}", "=".repeat(60));
        println!("SUMMARY");
        println!("{}", "=".repeat(60));
        println!("Total: {}", summary.total);
        println!("Successful: {}", summary.successful);
        println!("Failed: {}", summary.failed);

        // Persist the results CSV
        if let Err(e) = write_results(&config.output.results_path, &summary.results) {
            tracing::error!(error = %e, path = %config.output.results_path, "Failed to write results");
            eprintln!("Failed to write results file: {e}");
            return Ok(5); // Fatal error exit code
        }
        println!();
        println!("Results saved to {}", config.output.results_path);

        // List failed cases
        if summary.failed > 0 {
            println!();
            println!("Failed cases:");
            for result in summary.failed_results() {
                println!("  - {}: {}", result.test_case_id, result.response);
            }
        }

        Ok(if summary.is_successful() { 0 } else { 1 })
    }

    /// Build every payload without submitting anything
    fn execute_dry_run(&self, config: &crate::config::LoadsendConfig) -> anyhow::Result<i32> {
        let records = match read_records(&config.input.path) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Failed to read input table: {e}");
                return Ok(4);
            }
        };
        println!("Found {} test cases", records.len());
        println!();

        let mut failed = 0usize;
        for (idx, record) in records.iter().enumerate() {
            let test_case_id = record
                .text(&config.input.id_column)
                .unwrap_or_else(|| format!("ROW_{}", idx + 1));

            match build_load_payload(record, Utc::now()) {
                Ok(payload) => {
                    println!(
                        "  ✓ {test_case_id}: {} stop(s), carrier: {}",
                        payload.stops.len(),
                        if payload.carrier.is_some() { "yes" } else { "no" }
                    );
                }
                Err(e) => {
                    failed += 1;
                    println!("  ✗ {test_case_id}: {e}");
                }
            }
        }

        println!();
        println!(
            "Dry run complete: {} payload(s) built, {} failed",
            records.len() - failed,
            failed
        );

        Ok(if failed == 0 { 0 } else { 1 })
    }
}
