//! Admin check command.

use clap::{Args, Subcommand};

use super::Context;
use crate::output;
use sso_auth::error::op;
use sso_core::error::AppError;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Print whether a user has the admin flag
    Check {
        /// User ID
        user_id: i64,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, ctx: &Context) -> Result<(), AppError> {
    match &args.command {
        AdminCommand::Check { user_id } => {
            let auth = ctx.authenticator();
            let is_admin = ctx.with_deadline(op::IS_ADMIN, auth.is_admin(*user_id)).await?;

            output::print_value("is_admin", &is_admin, ctx.format);
        }
    }

    Ok(())
}
