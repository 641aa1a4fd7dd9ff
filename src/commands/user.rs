//! User commands.

use chrono::Utc;
use clap::Args;

use vfs_core::VfsResult;

use crate::commands::Services;
use crate::output;

/// Arguments for `register`.
#[derive(Args)]
pub struct RegisterArgs {
    /// Name of the user to register
    pub username: String,
}

pub async fn register(services: &Services, args: &RegisterArgs) -> VfsResult<()> {
    match services.users.register(&args.username, Utc::now()).await {
        Ok(_) => {
            output::print_success(&format!("Add {} successfully.", args.username));
            Ok(())
        }
        Err(err) => output::render_domain_error(err),
    }
}
