// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::LedgerClient;
use crate::error::LedgerError;
use crate::models::UserProfile;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(sub),
        Some(("set", sub)) => set(&LedgerClient::from_config()?, sub),
        _ => Ok(()),
    }
}

fn show(sub: &clap::ArgMatches) -> Result<()> {
    let client = match LedgerClient::from_config() {
        Ok(client) => client,
        Err(LedgerError::ServiceUnavailable) => {
            println!("Not connected to a ledger service (run 'rupeeclip connect' first)");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(principal) = sub.get_one::<String>("user") {
        match client.get_user_profile(principal)? {
            Some(profile) => println!("{}: {}", principal, profile.name),
            None => println!("No profile for {}", principal),
        }
        return Ok(());
    }

    match client.get_caller_user_profile()? {
        Some(profile) => {
            let role = client.get_caller_user_role()?;
            println!(
                "{}",
                pretty_table(
                    &["Name", "Role"],
                    vec![vec![profile.name, role.as_str().to_string()]],
                )
            );
        }
        None => {
            // Null profile is the onboarding signal, not an error.
            println!("No profile yet. Run 'rupeeclip profile set --name <name>' to finish onboarding.");
        }
    }
    Ok(())
}

fn set(client: &LedgerClient, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().clone();
    client.save_caller_user_profile(&UserProfile { name: name.clone() })?;
    println!("Profile saved for {}", name);
    Ok(())
}
