//! Command-line access to the person registry.
//!
//! Usage:
//!
//! ```text
//! persons [-v...] <command> [args]
//! ```
//!
//! Commands mirror the record service: `create`, `list`, `get`, `update`, and
//! `delete`. Database settings come from `DATABASE_URL` and the optional
//! `DATABASE_POOL_SIZE`, read from the environment or a `.env` file.
//! Successful results are printed to stdout as JSON; failures are logged and
//! reported through the exit code:
//!
//! | Exit code | Meaning |
//! | --- | --- |
//! | 0 | success |
//! | 1 | configuration, connection, output, or internal storage failure |
//! | 2 | invalid input or duplicate CPF/email |
//! | 3 | person not found |

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use person_registry::config::{ConfigError, DatabaseConfig};
use person_registry::person::{
    adapters::postgres::PostgresPersonRepository,
    domain::{PersonChanges, PersonId},
    ports::PersonRepositoryError,
    services::{CreatePersonRequest, ErrorKind, PersonRecordService, PersonServiceError},
};
use person_registry::telemetry;
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Parser)]
#[command(name = "persons", version, about = "Manage registered person records")]
struct Cli {
    /// Increase log verbosity (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Register a new person
    Create {
        /// Full name
        #[arg(long)]
        name: String,
        /// Taxpayer number, with or without punctuation
        #[arg(long)]
        cpf: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        birth_date: NaiveDate,
        /// Contact email address
        #[arg(long)]
        email: String,
    },
    /// List every registered person
    List,
    /// Show one person
    Get {
        /// Person identifier
        id: i32,
    },
    /// Change selected fields of a person
    Update {
        /// Person identifier
        id: i32,
        #[command(flatten)]
        fields: UpdateFields,
    },
    /// Delete a person
    Delete {
        /// Person identifier
        id: i32,
    },
}

#[derive(Debug, clap::Args)]
struct UpdateFields {
    /// Replacement name
    #[arg(long)]
    name: Option<String>,
    /// Replacement taxpayer number
    #[arg(long)]
    cpf: Option<String>,
    /// Replacement date of birth (YYYY-MM-DD)
    #[arg(long)]
    birth_date: Option<NaiveDate>,
    /// Replacement email address
    #[arg(long)]
    email: Option<String>,
}

impl From<UpdateFields> for PersonChanges {
    fn from(fields: UpdateFields) -> Self {
        let UpdateFields {
            name,
            cpf,
            birth_date,
            email,
        } = fields;
        Self {
            name,
            cpf,
            birth_date,
            email,
        }
    }
}

/// Errors that end a command.
#[derive(Debug, Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to connect to the database: {0}")]
    Connect(#[source] PersonRepositoryError),
    #[error(transparent)]
    Service(#[from] PersonServiceError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    const fn exit_status(&self) -> u8 {
        match self {
            Self::Service(err) => match err.kind() {
                ErrorKind::ValidationFailed | ErrorKind::DuplicateField => 2,
                ErrorKind::NotFound => 3,
                ErrorKind::InternalFailure => 1,
            },
            Self::Config(_) | Self::Connect(_) | Self::Output(_) | Self::Encode(_) => 1,
        }
    }
}

#[derive(Debug, Serialize)]
struct AffectedOutput {
    affected: usize,
}

#[tokio::main]
async fn main() -> Result<ExitCode, BoxError> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose)?;

    match run(cli.command).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            error!(error = %err, "command failed");
            Ok(ExitCode::from(err.exit_status()))
        }
    }
}

async fn run(command: Command) -> Result<(), CliError> {
    let config = DatabaseConfig::from_env()?;
    let repository = PostgresPersonRepository::connect(&config).map_err(CliError::Connect)?;
    let service = PersonRecordService::new(Arc::new(repository));

    match command {
        Command::Create {
            name,
            cpf,
            birth_date,
            email,
        } => {
            let request = CreatePersonRequest::new(name, cpf, birth_date, email);
            emit(&service.create(request).await?)
        }
        Command::List => emit(&service.find_all().await?),
        Command::Get { id } => emit(&service.find_one(PersonId::new(id)).await?),
        Command::Update { id, fields } => {
            let changes = PersonChanges::from(fields);
            let affected = service.update(PersonId::new(id), &changes).await?;
            emit(&AffectedOutput {
                affected: affected.count(),
            })
        }
        Command::Delete { id } => {
            let affected = service.remove(PersonId::new(id)).await?;
            emit(&AffectedOutput {
                affected: affected.count(),
            })
        }
    }
}

fn emit(value: &impl Serialize) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
