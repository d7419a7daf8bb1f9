use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use resource_cursor::sample::generate_resources;
use resource_cursor::{
    parse_date, DigitalLibrary, IteratorOptions, LibraryConfig, Paginated, Resource, Traversal,
};

#[derive(Parser, Debug)]
#[command(name = "resource-cursor", about = "Walk a resource library with named traversal strategies")]
struct Cli {
    /// Use N generated resources instead of the curated sample.
    #[arg(long, global = true)]
    generated: Option<usize>,

    /// Seed for `random` and for generated resources.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Date treated as today (YYYY-MM-DD) by `recent` strategies.
    #[arg(long, global = true, value_parser = parse_reference_date)]
    reference_date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the registered strategies.
    Strategies,
    /// Traverse the library with one strategy and print every step.
    Walk {
        /// Strategy name (unknown names fall back to forward).
        strategy: String,
        /// Stop after this many steps.
        #[arg(long)]
        limit: Option<usize>,
        /// After reaching the end, step back to the start.
        #[arg(long)]
        backwards: bool,
        /// Resources per page for `paginated`.
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Print counts by type and the mean rating.
    Info,
    /// Print a single resource.
    Show {
        /// Resource id.
        id: String,
    },
}

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();
    let mut library = build_library(&cli);

    match cli.command {
        Commands::Strategies => run_strategies(&library),
        Commands::Walk {
            strategy,
            limit,
            backwards,
            page_size,
        } => run_walk(&mut library, &strategy, limit, backwards, page_size),
        Commands::Info => run_info(&library),
        Commands::Show { id } => run_show(&library, &id)?,
    }

    Ok(())
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

fn parse_reference_date(input: &str) -> Result<NaiveDate, String> {
    parse_date(input).map_err(|err| err.to_string())
}

fn build_library(cli: &Cli) -> DigitalLibrary {
    let mut config = LibraryConfig::default();
    if let Some(date) = cli.reference_date {
        config = config.with_reference_date(date);
    }
    if let Some(seed) = cli.seed {
        config = config.with_shuffle_seed(seed);
    }

    let mut library = DigitalLibrary::with_config(config);
    match cli.generated {
        Some(count) => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            library.extend(generate_resources(count, &mut rng));
        }
        None => library.extend(resource_cursor::sample::sample_resources()),
    }
    library
}

fn run_strategies(library: &DigitalLibrary) {
    for info in library.strategies() {
        println!("{:<22}{}", info.name, info.description);
    }
}

fn run_walk(
    library: &mut DigitalLibrary,
    strategy: &str,
    limit: Option<usize>,
    backwards: bool,
    page_size: Option<usize>,
) {
    let mut options = IteratorOptions::default();
    if let Some(size) = page_size {
        options = options.with_page_size(size);
    }
    let mut iterator = library.create_iterator(strategy, options);
    let limit = limit.unwrap_or(usize::MAX);

    println!(
        "{} ({:?}): {} units",
        strategy,
        iterator.kind(),
        iterator.total_size()
    );

    let mut steps = 0;
    while steps < limit && iterator.next().is_some() {
        steps += 1;
        match iterator.as_paginated() {
            Some(pages) => print_page(pages),
            None => print_step(iterator.position(), iterator.current()),
        }
    }

    if backwards {
        while iterator.previous().is_some() {
            match iterator.as_paginated() {
                Some(pages) => print_page(pages),
                None => print_step(iterator.position(), iterator.current()),
            }
        }
    }

    if !iterator.has_next() {
        println!("-- end of traversal after {} steps", steps);
    }
}

fn run_info(library: &DigitalLibrary) {
    let info = library.library_info();
    println!("resources\t{}", info.total_resources);
    println!("books\t\t{}", info.book_count);
    println!("magazines\t{}", info.magazine_count);
    println!("audiobooks\t{}", info.audiobook_count);
    println!("avg rating\t{:.2}", info.average_rating);
}

fn run_show(library: &DigitalLibrary, id: &str) -> Result<()> {
    let resource = library
        .find_resource_by_id(id)
        .with_context(|| format!("no resource with id '{}'", id))?;
    print_resource(resource);
    Ok(())
}

fn print_step(position: isize, resource: Option<&Resource>) {
    if let Some(resource) = resource {
        print!("[{:>3}] ", position);
        print_resource(resource);
    }
}

fn print_page(pages: &Paginated<Resource>) {
    if let Some(range) = pages.current_range() {
        println!(
            "page {}/{} (items {}-{} of {})",
            pages.page_number(),
            pages.page_count(),
            range.from,
            range.to,
            range.total
        );
    }
    for resource in pages.current_page() {
        print!("      ");
        print_resource(resource);
    }
}

fn print_resource(resource: &Resource) {
    let rating = resource
        .rating
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{}\t{}\t{}\t{}\t{}\tpop={}\trating={}",
        resource.id,
        resource.kind,
        resource.publish_date,
        resource.title,
        resource.author,
        resource.popularity,
        rating
    );
}
