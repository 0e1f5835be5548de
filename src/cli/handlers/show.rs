use anyhow::Result;
use colored::Colorize;

use crate::error::CatalogError;

use super::CommandContext;

pub fn handle_show(ctx: CommandContext, id: String, json: bool) -> Result<()> {
    let book = ctx
        .catalog
        .book(&id)
        .ok_or(CatalogError::NotFound(id))?;
    let author = book
        .author_id
        .as_deref()
        .and_then(|id| ctx.catalog.author(id));

    if json {
        let value = serde_json::json!({
            "book": book,
            "author": author,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{} {}", book.id.cyan().bold(), book.name.bold());
    println!("Genre:  {}", book.genre.blue());
    match author {
        Some(a) => println!("Author: {} ({} stars)", a.name, a.star),
        None => println!("Author: -"),
    }
    Ok(())
}
