//! Client app management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::{self, OutputFormat};
use sso_core::error::AppError;
use sso_database::AppRepository;

/// Arguments for app commands
#[derive(Debug, Args)]
pub struct AppArgs {
    /// App subcommand
    #[command(subcommand)]
    pub command: AppCommand,
}

/// App subcommands
#[derive(Debug, Subcommand)]
pub enum AppCommand {
    /// Register a client app
    Create {
        /// Unique app name
        name: String,
        /// Signing secret (random if not provided)
        #[arg(short, long)]
        secret: Option<String>,
    },
    /// List registered apps
    List,
}

/// App display row for table output. Secrets are never listed.
#[derive(Debug, Serialize, Tabled)]
struct AppRow {
    /// App ID
    id: i32,
    /// App name
    name: String,
}

/// Shown once, right after creation.
#[derive(Debug, Serialize)]
struct CreatedApp {
    id: i32,
    name: String,
    secret: String,
}

/// Execute app commands
pub async fn execute(args: &AppArgs, ctx: &Context) -> Result<(), AppError> {
    let repo = AppRepository::new(ctx.db.pool().clone());

    match &args.command {
        AppCommand::Create { name, secret } => {
            let secret = secret.clone().unwrap_or_else(generate_secret);
            let app = repo.create(name, &secret).await?;
            tracing::info!(app_id = app.id, name = %app.name, "App registered");

            match ctx.format {
                OutputFormat::Table => {
                    output::print_success(&format!("App '{}' created with ID {}", app.name, app.id));
                    println!("Secret (shown once): {}", secret);
                }
                OutputFormat::Json => {
                    let created = CreatedApp {
                        id: app.id,
                        name: app.name,
                        secret,
                    };
                    println!("{}", serde_json::to_string_pretty(&created)?);
                }
            }
        }
        AppCommand::List => {
            let rows: Vec<AppRow> = repo
                .list()
                .await?
                .into_iter()
                .map(|a| AppRow {
                    id: a.id,
                    name: a.name,
                })
                .collect();

            output::print_list(&rows, ctx.format);
        }
    }

    Ok(())
}

/// 64 hex characters of randomness.
fn generate_secret() -> String {
    format!(
        "{}{}",
        uuid::Uuid::new_v4().simple(),
        uuid::Uuid::new_v4().simple()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_secrets_are_unique_hex() {
        let a = generate_secret();
        let b = generate_secret();

        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
