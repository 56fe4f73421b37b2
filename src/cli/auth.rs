//! Login, logout and whoami

use clap::Args;

use super::{prompt_line, CliContext};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::Credentials;

/// Arguments for `spendwise login`
#[derive(Args, Debug, Default)]
pub struct LoginArgs {
    /// Username (prompted for when omitted)
    #[arg(short, long)]
    pub username: Option<String>,
    /// Password (prompted for, hidden, when omitted)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Log in and remember the session
pub async fn handle_login(ctx: &CliContext<'_>, args: LoginArgs) -> SpendwiseResult<()> {
    let username = match args.username {
        Some(u) => u,
        None => prompt_line("Username: ")?,
    };
    let password = match args.password {
        Some(p) => p,
        None => rpassword::prompt_password("Password: ")
            .map_err(|e| SpendwiseError::Io(format!("Failed to read password: {}", e)))?,
    };

    let credentials = Credentials::new(username, password);
    let session = ctx
        .auth()
        .login(&credentials)
        .await
        .map_err(SpendwiseError::into_login_failure)?;

    println!("Welcome back, {}!", session.user.display_name());
    Ok(())
}

/// Forget the stored session
pub fn handle_logout(ctx: &CliContext<'_>) -> SpendwiseResult<()> {
    if ctx.auth().logout()? {
        println!("Logged out.");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

/// Show the signed-in user
pub fn handle_whoami(ctx: &CliContext<'_>) -> SpendwiseResult<()> {
    let session = ctx.require_session()?;
    println!("Logged in as {}", session);
    println!("  User ID: {}", session.user.id);
    Ok(())
}
