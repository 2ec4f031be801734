// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::LedgerClient;
use crate::error::LedgerError;
use crate::models::UserRole;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => show(),
        Some(("check-admin", _)) => check_admin(),
        Some(("assign", sub)) => assign(&LedgerClient::from_config()?, sub),
        _ => Ok(()),
    }
}

fn connected() -> Result<Option<LedgerClient>> {
    match LedgerClient::from_config() {
        Ok(client) => Ok(Some(client)),
        Err(LedgerError::ServiceUnavailable) => {
            println!("Not connected to a ledger service (run 'rupeeclip connect' first)");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn show() -> Result<()> {
    if let Some(client) = connected()? {
        println!("Role: {}", client.get_caller_user_role()?.as_str());
    }
    Ok(())
}

fn check_admin() -> Result<()> {
    if let Some(client) = connected()? {
        let is_admin = client.is_caller_admin()?;
        println!("Caller {} an admin", if is_admin { "is" } else { "is not" });
    }
    Ok(())
}

fn assign(client: &LedgerClient, sub: &clap::ArgMatches) -> Result<()> {
    let principal = sub.get_one::<String>("user").unwrap();
    let role: UserRole = sub.get_one::<String>("role").unwrap().parse()?;
    client.assign_user_role(principal, role)?;
    println!("Assigned role '{}' to {}", role.as_str(), principal);
    Ok(())
}
