//! Database migration commands.

use clap::{Args, Subcommand};

use super::Context;
use crate::output;
use sso_core::error::AppError;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Apply all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, ctx: &Context) -> Result<(), AppError> {
    match &args.command {
        MigrateCommand::Run => {
            sso_database::run_migrations(ctx.db.pool()).await?;
            output::print_success("All migrations applied.");
        }
    }

    Ok(())
}
