//! Account CLI commands
//!
//! Sign-up, sign-in/out, and profile management. Identity is an opaque local
//! session marker; there is no password handling here.

use clap::Subcommand;

use crate::error::PlannerResult;
use crate::services::{ProfileService, ProfileUpdate};
use crate::session::SessionStore;
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new profile and sign in
    SignUp {
        /// Unique username
        username: String,
        /// Full display name
        #[arg(short, long, default_value = "")]
        full_name: String,
    },

    /// Sign in as an existing user
    SignIn {
        /// Username of the profile
        username: String,
    },

    /// Sign out
    SignOut,

    /// Show the signed-in profile
    Show,

    /// Update profile fields
    Update {
        /// Full display name
        #[arg(long)]
        full_name: Option<String>,
        /// Personal website URL
        #[arg(long)]
        website: Option<String>,
        /// Avatar image URL
        #[arg(long)]
        avatar_url: Option<String>,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    session: &SessionStore,
    cmd: AccountCommands,
) -> PlannerResult<()> {
    let profile_service = ProfileService::new(storage);

    match cmd {
        AccountCommands::SignUp { username, full_name } => {
            let profile = profile_service.sign_up(&username, &full_name)?;
            session.sign_in(profile.id)?;
            println!("Welcome, {}! You are now signed in.", profile.username);
        }
        AccountCommands::SignIn { username } => {
            match profile_service.find_by_username(&username)? {
                Some(profile) => {
                    session.sign_in(profile.id)?;
                    println!("Signed in as {}.", profile.username);
                }
                None => {
                    println!(
                        "No profile named '{}'. Run 'campus account sign-up {}' to create one.",
                        username, username
                    );
                }
            }
        }
        AccountCommands::SignOut => {
            session.sign_out()?;
            println!("Signed out.");
        }
        AccountCommands::Show => {
            let user = session.require_user(storage)?;
            let profile = profile_service.get(user)?;

            println!("Profile:   {}", profile.id);
            println!("Username:  {}", profile.username);
            if !profile.full_name.is_empty() {
                println!("Name:      {}", profile.full_name);
            }
            if !profile.website.is_empty() {
                println!("Website:   {}", profile.website);
            }
            if !profile.avatar_url.is_empty() {
                println!("Avatar:    {}", profile.avatar_url);
            }
        }
        AccountCommands::Update {
            full_name,
            website,
            avatar_url,
        } => {
            let user = session.require_user(storage)?;
            let update = ProfileUpdate {
                full_name,
                website,
                avatar_url,
            };
            if update.is_empty() {
                println!("Nothing to update. Pass --full-name, --website, or --avatar-url.");
                return Ok(());
            }
            let profile = profile_service.update(user, update)?;
            println!("Profile updated for {}.", profile.username);
        }
    }

    Ok(())
}
