use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_add(
    ctx: CommandContext,
    name: String,
    genre: String,
    author: Option<String>,
    json: bool,
) -> Result<()> {
    let book = ctx.catalog.add_book(name, genre, author);

    // Write back only when a records file is already on disk; seed-backed
    // runs stay in memory.
    let records_path = ctx.config.records_path(&ctx.root);
    if records_path.exists() {
        ctx.catalog.to_records().save(&records_path)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        println!("{} {} {}", "Added".green(), book.id.cyan(), book.name);
    }
    Ok(())
}
