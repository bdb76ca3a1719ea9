//! User registration and login commands.

use clap::{Args, Subcommand};

use super::{Context, read_password};
use crate::output;
use sso_auth::error::op;
use sso_core::error::AppError;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Register a new user and print its ID
    Register {
        /// Email address
        email: String,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Log in and print a session token for an app
    Login {
        /// Email address
        email: String,
        /// ID of the app the token is issued for
        #[arg(short, long)]
        app_id: i32,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute user commands
pub async fn execute(args: &UserArgs, ctx: &Context) -> Result<(), AppError> {
    let auth = ctx.authenticator();

    match &args.command {
        UserCommand::Register { email, password } => {
            let password = read_password(password.as_deref(), true)?;
            let user_id = ctx
                .with_deadline(op::REGISTER, auth.register(email, &password))
                .await?;

            output::print_value("user_id", &user_id, ctx.format);
        }
        UserCommand::Login {
            email,
            app_id,
            password,
        } => {
            let password = read_password(password.as_deref(), false)?;
            let token = ctx
                .with_deadline(op::LOGIN, auth.login(email, &password, *app_id))
                .await?;

            output::print_value("token", &token, ctx.format);
        }
    }

    Ok(())
}
