use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_books(ctx: CommandContext, json: bool) -> Result<()> {
    let books = ctx.catalog.books();

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    if books.is_empty() {
        println!("No books in the catalog.");
        return Ok(());
    }

    for book in &books {
        let author = book
            .author_id
            .as_deref()
            .and_then(|id| ctx.catalog.author(id));
        let author_name = author.map_or_else(|| "-".to_string(), |a| a.name);
        println!(
            "{} [{}] {} by {}",
            book.id.cyan(),
            book.genre.blue(),
            book.name.bold(),
            author_name
        );
    }
    Ok(())
}

pub fn handle_authors(ctx: CommandContext, json: bool) -> Result<()> {
    let authors = ctx.catalog.authors();

    if json {
        println!("{}", serde_json::to_string_pretty(&authors)?);
        return Ok(());
    }

    if authors.is_empty() {
        println!("No authors in the catalog.");
        return Ok(());
    }

    for author in &authors {
        let count = ctx.catalog.books_by_author(&author.id).len();
        println!(
            "{} {} ({} stars, {} books)",
            author.id.cyan(),
            author.name.bold(),
            author.star,
            count
        );
    }
    Ok(())
}
