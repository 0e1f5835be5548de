use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, handle_add, handle_authors, handle_books, handle_init, handle_mutate,
    handle_query, handle_serve, handle_show,
};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::ShelfConfig;
use bookshelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    if let Commands::Init = cli.command {
        return handle_init();
    }

    let cwd = std::env::current_dir()?;
    let (config, root) =
        ShelfConfig::load_or_default(&cwd).context("Failed to load bookshelf configuration")?;
    let ctx = CommandContext::new(config, root)?;

    match cli.command {
        Commands::Init => unreachable!("handled above"),
        Commands::Books { json } => handle_books(ctx, json),
        Commands::Authors { json } => handle_authors(ctx, json),
        Commands::Show { id, json } => handle_show(ctx, id, json),
        Commands::Add {
            name,
            genre,
            author,
            json,
        } => handle_add(ctx, name, genre, author, json),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Serve { port } => handle_serve(ctx, port),
    }
}
