//! Session token inspection commands.

use clap::{Args, Subcommand};

use super::Context;
use crate::output::OutputFormat;
use sso_auth::JwtDecoder;
use sso_core::error::AppError;
use sso_database::AppRepository;

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Verify a token against its app's secret and print its claims
    Verify {
        /// Encoded session token
        token: String,
    },
}

/// Execute token commands
pub async fn execute(args: &TokenArgs, ctx: &Context) -> Result<(), AppError> {
    match &args.command {
        TokenCommand::Verify { token } => {
            let apps = AppRepository::new(ctx.db.pool().clone());
            let decoder = JwtDecoder::new();
            let claims = ctx
                .with_deadline("token.verify", decoder.verify(token, &apps))
                .await?;

            match ctx.format {
                OutputFormat::Table => {
                    println!("User ID:    {}", claims.uid);
                    println!("Email:      {}", claims.email);
                    println!("App ID:     {}", claims.app_id);
                    match claims.expires_at() {
                        Some(at) => println!("Expires at: {}", at.to_rfc3339()),
                        None => println!("Expires at: {} (unix seconds)", claims.exp),
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&claims)?);
                }
            }
        }
    }

    Ok(())
}
