//! Command-line entry point for the Payroll Validator.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_validator::api::{AppState, create_router};
use payroll_validator::config::{PolicyLoader, ValidationPolicy};
use payroll_validator::error::{EngineError, EngineResult};
use payroll_validator::loader::DatasetLoader;
use payroll_validator::models::ValidationOutcome;
use payroll_validator::report::export_error_report;
use payroll_validator::validation::ValidationEngine;

#[derive(Parser)]
#[command(
    name = "payroll-validator",
    version,
    about = "Detect payroll data errors before processing"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a payroll CSV file
    Validate {
        /// Payroll CSV file to check
        file: PathBuf,

        /// YAML policy enabling optional rules
        #[arg(short, long)]
        policy: Option<PathBuf>,

        /// Write the error report CSV to this path
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Serve the validation API over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,

        /// YAML policy enabling optional rules
        #[arg(short, long)]
        policy: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_message(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> EngineResult<()> {
    match cli.command {
        Commands::Validate {
            file,
            policy,
            export,
            format,
        } => {
            let engine = ValidationEngine::new(load_policy(policy.as_deref())?);
            let dataset = DatasetLoader::load_path(&file)?;
            let outcome = engine.validate(&dataset);

            match format {
                OutputFormat::Table => print_tables(&outcome),
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&outcome).map_err(|e| {
                        EngineError::ExportError {
                            message: e.to_string(),
                        }
                    })?;
                    println!("{json}");
                }
            }

            if let Some(path) = export {
                export_error_report(&path, &outcome.details)?;
            }
        }
        Commands::Serve { addr, policy } => {
            let engine = ValidationEngine::new(load_policy(policy.as_deref())?);
            let router = create_router(AppState::new(engine));

            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .map_err(|e| EngineError::ServerError {
                    addr: addr.to_string(),
                    message: format!("cannot bind: {e}"),
                })?;
            info!(%addr, "Payroll validator listening");
            axum::serve(listener, router)
                .await
                .map_err(|e| EngineError::ServerError {
                    addr: addr.to_string(),
                    message: e.to_string(),
                })?;
        }
    }

    Ok(())
}

fn error_message(err: &EngineError) -> String {
    format!("error: {err}")
}

fn load_policy(path: Option<&Path>) -> EngineResult<ValidationPolicy> {
    match path {
        Some(path) => Ok(PolicyLoader::load(path)?.into_policy()),
        None => Ok(ValidationPolicy::default()),
    }
}

fn print_tables(outcome: &ValidationOutcome) {
    let metrics = &outcome.metrics;
    println!("Total Employees:     {}", metrics.total_employees);
    println!("Total Payroll:       ${:.2}", metrics.total_payroll.round_dp(2));
    println!("Avg Hours/Employee:  {:.1}", metrics.avg_hours.round_dp(1));
    println!("Errors Detected:     {}", metrics.errors_found);
    println!();

    if outcome.is_clean() {
        println!("No errors detected. All payroll data passed validation checks.");
        return;
    }

    println!("{:<26} {:>6}  {:<9} {}", "Error Type", "Count", "Severity", "Style");
    for violation in &outcome.summary {
        println!(
            "{:<26} {:>6}  {:<9} {}",
            violation.rule.name(),
            violation.affected_count,
            violation.severity.as_str(),
            violation.severity.style_token()
        );
    }
    println!();

    println!(
        "{:<12} {:<24} {:<16} {:<18} {}",
        "Employee ID", "Employee Name", "Error Type", "Value", "Expected"
    );
    for entry in &outcome.details {
        let row = entry.to_report_row();
        println!(
            "{:<12} {:<24} {:<16} {:<18} {}",
            row.employee_id, row.employee_name, row.error_type, row.value, row.expected
        );
    }
}
