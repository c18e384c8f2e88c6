use crate::board::Board;
use crate::prelude::{eprintln, println, *};
use postboard_core::types::User;
use std::sync::Arc;

#[derive(Debug, clap::Args, Clone)]
pub struct UsersOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: UsersOptions, global: crate::Global) -> Result<()> {
    let source = global.source()?;
    let base = source.base().to_string();
    if global.verbose {
        eprintln!("Fetching users from {}", base);
    }

    let board = Board::new(Arc::new(source));
    let (users, _menu) = board
        .init_page()
        .await
        .ok_or_else(|| eyre!("Failed to fetch users from {}", base))?;

    if options.json {
        let json = serde_json::to_string_pretty(&users)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        users_table(&users).printstd();
    }

    Ok(())
}

fn users_table(users: &[User]) -> prettytable::Table {
    let mut table = crate::prelude::new_table();
    table.set_titles(prettytable::row!["ID", "Name", "Company", "Catch Phrase"]);
    for user in users {
        table.add_row(prettytable::row![
            user.id,
            user.name,
            user.company.name,
            user.company.catch_phrase
        ]);
    }
    table
}
