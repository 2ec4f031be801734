// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use rupeeclip::{cli, commands, config};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("connect", sub)) => {
            let url = sub.get_one::<String>("url").unwrap().clone();
            let token = sub.get_one::<String>("token").cloned();
            config::save(&config::Config {
                service_url: url.clone(),
                token,
            })?;
            println!("Connected to {}", url);
        }
        Some(("tx", sub)) => commands::transactions::handle(sub)?,
        Some(("report", sub)) => commands::reports::handle(sub)?,
        Some(("export", sub)) => commands::exporter::handle(sub)?,
        Some(("profile", sub)) => commands::profile::handle(sub)?,
        Some(("role", sub)) => commands::roles::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
