// CLI modules
mod cli;

use clap::{Parser, Subcommand};
use cli::{args::Args, op::Op, Book, Init, Navigate, Routes, Session, Version};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

command_enum! {
    (Book, Book),
    (Init, Init),
    (Navigate, Navigate),
    (Routes, Routes),
    (Session, Session),
    (Version, Version),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Logs go to stderr so command output on stdout stays clean
    let (non_blocking_writer, log_guard) = tracing_appender::non_blocking(std::io::stderr());
    let log_level = args.log_level;
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();

    // Resolve catalog URL: explicit flag > config catalog_url > Google Books
    let catalog_url = cli::op::resolve_catalog_url(args.catalog_url, args.config_path.clone());

    // Build context - always has a catalog client initialized
    let ctx = match cli::op::OpContext::new(catalog_url, args.config_path) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: Failed to create catalog client: {}", e);
            std::process::exit(1);
        }
    };

    let code = match args.command.execute(&ctx).await {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    // Flush buffered logs before exiting
    drop(log_guard);
    std::process::exit(code);
}
