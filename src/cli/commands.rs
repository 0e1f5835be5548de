use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(
    author,
    version,
    about = "A small GraphQL book catalog service and CLI"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write structured JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a catalog project in the current directory
    Init,

    /// List all books
    #[command(visible_alias = "ls")]
    Books {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all authors
    Authors {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a book with its resolved author
    Show {
        /// Book id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a book to the catalog
    Add {
        /// Book title
        name: String,

        /// Genre
        genre: String,

        /// Author id (optional; not checked against the author records)
        #[arg(short, long)]
        author: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Execute a GraphQL query and print the JSON response
    Query {
        /// Selection set, e.g. '{ books { id name } }' or 'books { id }'
        query: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation and print the JSON response
    Mutate {
        /// Selection set, e.g. 'addBook(name: "Dune", genre: "Sci-Fi") { id }'
        mutation: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Serve the GraphQL API over HTTP
    Serve {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
