use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use movie_rpc::{Director, MovieClient, MovieInfo, DEFAULT_ENDPOINT};
use movie_store::Movie;

mod demo;

/// Movie catalogue client
#[derive(Parser)]
#[command(name = "movie-client")]
#[command(about = "Talk to the movie catalogue gRPC server", long_about = None)]
struct Cli {
    /// Server endpoint
    #[arg(short, long, global = true, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Deadline for each call, in seconds
    #[arg(
        long,
        global = true,
        default_value = "5",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    deadline_secs: u64,

    /// Print records as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every operation once (the default)
    Demo,

    /// List all movies
    List,

    /// Show one movie
    Get {
        #[arg(long)]
        id: String,
    },

    /// Add a movie; the server assigns the id
    Create {
        #[command(flatten)]
        movie: MovieFields,
    },

    /// Replace the movie with the given id
    Update {
        #[arg(long)]
        id: String,

        #[command(flatten)]
        movie: MovieFields,
    },

    /// Remove a movie
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(clap::Args)]
struct MovieFields {
    #[arg(long)]
    title: String,

    #[arg(long, default_value = "")]
    isbn: String,

    /// Director's first name
    #[arg(long, default_value = "")]
    first: String,

    /// Director's last name
    #[arg(long, default_value = "")]
    last: String,
}

impl MovieFields {
    fn into_info(self, id: String) -> MovieInfo {
        MovieInfo {
            id,
            isbn: self.isbn,
            title: self.title,
            director: Some(Director {
                firstname: self.first,
                lastname: self.last,
            }),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let deadline = Duration::from_secs(cli.deadline_secs);

    let mut client = MovieClient::connect(cli.endpoint.clone(), deadline)
        .await
        .with_context(|| format!("Cannot dial {}", cli.endpoint))?;
    info!(
        "Connected to {} (deadline {:?} per call)",
        client.endpoint(),
        client.deadline()
    );

    // Dispatch to appropriate command handler
    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            let report = demo::run_demo(&mut client).await?;
            info!("Demo finished: {:?}", report);
        }
        Commands::List => {
            let movies = client.list_movies().await.context("Failed to list movies")?;
            print_movies(&movies, cli.json)?;
        }
        Commands::Get { id } => {
            let movie = client.get_movie(&id).await.context("Failed to get movie")?;
            if movie == MovieInfo::default() {
                println!("{}", format!("No movie with id {}", id).yellow());
            } else {
                print_movies(&[movie], cli.json)?;
            }
        }
        Commands::Create { movie } => {
            let id = client
                .create_movie(movie.into_info(String::new()))
                .await
                .context("Failed to create movie")?;
            println!("{} Created movie {}", "✓".green(), id.bold());
        }
        Commands::Update { id, movie } => {
            let updated = client
                .update_movie(movie.into_info(id.clone()))
                .await
                .context("Failed to update movie")?;
            print_status("Updated", &id, updated);
        }
        Commands::Delete { id } => {
            let deleted = client
                .delete_movie(&id)
                .await
                .context("Failed to delete movie")?;
            print_status("Deleted", &id, deleted);
        }
    }

    Ok(())
}

fn print_status(action: &str, id: &str, applied: bool) {
    if applied {
        println!("{} {} movie {}", "✓".green(), action, id.bold());
    } else {
        println!("{}", format!("No movie with id {}", id).yellow());
    }
}

/// Print movies as a table-ish list, or as a JSON array
fn print_movies(movies: &[MovieInfo], json: bool) -> Result<()> {
    let movies: Vec<Movie> = movies.iter().cloned().map(Movie::from).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&movies)?);
        return Ok(());
    }

    println!("{}", format!("{} movies:", movies.len()).bold().blue());
    for movie in &movies {
        println!(
            "{:>6}  {} [ISBN {}] dir. {}",
            movie.id.green(),
            movie.title,
            movie.isbn,
            movie.director_name()
        );
    }
    Ok(())
}
