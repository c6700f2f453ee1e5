use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use listing_loader::{load_listings, Listing, Timestamp};
use listing_pipeline::filters::unix_now;
use listing_pipeline::FilterConfig;
use rand::Rng;
use std::path::PathBuf;
use std::time::Instant;

/// Listing Filter - filter classified-ad listings by price, age and keywords
#[derive(Parser)]
#[command(name = "listing-filter")]
#[command(about = "Filter classified-ad listings by price, recency and title keywords", long_about = None)]
struct Cli {
    /// Path to the listing feed (.dat or .json)
    #[arg(short, long, default_value = "data/listings.dat")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the listings that pass every filter
    Filter(FilterArgs),

    /// Run benchmark to compare sequential and parallel filtering
    Benchmark {
        /// Number of synthetic listings to generate
        #[arg(long, default_value = "1000000")]
        listings: usize,

        /// Number of timed runs per strategy
        #[arg(long, default_value = "5")]
        runs: usize,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// JSON filter config; flags below override or extend it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lowest accepted price (inclusive)
    #[arg(long)]
    min_price: Option<f64>,

    /// Highest accepted price (inclusive)
    #[arg(long)]
    max_price: Option<f64>,

    /// Oldest accepted listing age in seconds (inclusive)
    #[arg(long)]
    max_age: Option<f64>,

    /// Substring the title must contain (repeatable)
    #[arg(long = "include")]
    includes: Vec<String>,

    /// Whole word the title must not contain (repeatable)
    #[arg(long = "exclude")]
    excludes: Vec<String>,

    /// Search term; every word becomes a required keyword
    #[arg(long)]
    search: Option<String>,

    /// Reference time (Unix seconds) for the age check, defaults to now
    #[arg(long)]
    now: Option<Timestamp>,

    /// Evaluate listings on all cores
    #[arg(long)]
    parallel: bool,

    /// Maximum number of listings to print
    #[arg(long)]
    limit: Option<usize>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Filter(args) => handle_filter(cli.data_file, args)?,
        Commands::Benchmark { listings, runs } => handle_benchmark(listings, runs)?,
    }

    Ok(())
}

/// Merge the optional config file with the command-line flags.
fn resolve_config(args: &FilterArgs) -> Result<FilterConfig> {
    let mut config = match &args.config {
        Some(path) => FilterConfig::load(path)
            .with_context(|| format!("Failed to load filter config {}", path.display()))?,
        None => FilterConfig::default(),
    };

    if args.min_price.is_some() {
        config.min_price = args.min_price;
    }
    if args.max_price.is_some() {
        config.max_price = args.max_price;
    }
    if args.max_age.is_some() {
        config.max_age_seconds = args.max_age;
    }
    config.must_include.extend(args.includes.iter().cloned());
    if let Some(term) = &args.search {
        config
            .must_include
            .extend(term.split_whitespace().map(str::to_string));
    }
    config.must_exclude.extend(args.excludes.iter().cloned());

    Ok(config)
}

/// Handle the 'filter' command
fn handle_filter(data_file: PathBuf, args: FilterArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let now = args.now.unwrap_or_else(unix_now);
    let pipeline = config.build_pipeline(now);

    println!("Loading listings from {}...", data_file.display());
    let start = Instant::now();
    let listings = load_listings(&data_file)
        .with_context(|| format!("Failed to load listings from {}", data_file.display()))?;
    println!(
        "{} Loaded {} listings in {:?}",
        "✓".green(),
        listings.len(),
        start.elapsed()
    );

    let total = listings.len();
    let start = Instant::now();
    let filtered = if args.parallel {
        pipeline.par_apply(listings)
    } else {
        pipeline.apply(listings)
    };
    tracing::info!(
        "Filtered {} -> {} listings in {:?}",
        total,
        filtered.len(),
        start.elapsed()
    );

    print_listings(&filtered, now, args.limit);
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(count: usize, runs: usize) -> Result<()> {
    anyhow::ensure!(runs > 0, "--runs must be at least 1");

    let now = unix_now();
    println!("Generating {} synthetic listings...", count);
    let listings = synthetic_listings(count, now);

    let config = FilterConfig {
        min_price: Some(50.0),
        max_price: Some(500.0),
        max_age_seconds: Some(7.0 * 86_400.0),
        must_include: vec!["for".to_string()],
        must_exclude: vec!["scam".to_string(), "broken".to_string()],
    };
    let pipeline = config.build_pipeline(now);

    let mut sequential = Vec::with_capacity(runs);
    let mut parallel = Vec::with_capacity(runs);
    let mut kept = 0;
    for _ in 0..runs {
        let start = Instant::now();
        kept = pipeline.apply(listings.clone()).len();
        sequential.push(start.elapsed());

        let start = Instant::now();
        let parallel_kept = pipeline.par_apply(listings.clone()).len();
        parallel.push(start.elapsed());

        anyhow::ensure!(
            parallel_kept == kept,
            "parallel run kept {} listings, sequential kept {}",
            parallel_kept,
            kept
        );
    }

    let seq_avg = sequential.iter().sum::<std::time::Duration>() / runs as u32;
    let par_avg = parallel.iter().sum::<std::time::Duration>() / runs as u32;

    println!("{}", "Benchmark results:".bold().blue());
    println!("Listings kept: {} of {}", kept, count);
    println!("Sequential average: {:?}", seq_avg);
    println!("Parallel average:   {:?}", par_avg);
    println!(
        "Throughput: {:.0} listings/second sequential, {:.0} listings/second parallel",
        count as f64 / seq_avg.as_secs_f64(),
        count as f64 / par_avg.as_secs_f64()
    );
    println!(
        "Speedup: {:.2}x",
        seq_avg.as_secs_f64() / par_avg.as_secs_f64()
    );

    Ok(())
}

fn synthetic_listings(count: usize, now: Timestamp) -> Vec<Listing> {
    const TITLES: [&str; 8] = [
        "Running shoes for sale",
        "Mountain bike for commuting",
        "Vintage camera",
        "Broken laptop for parts",
        "Totally not a scam deal",
        "Oak dining table for six",
        "Scammer-proof safe for sale",
        "Guitar amp",
    ];

    let mut rng = rand::rng();
    (0..count)
        .map(|i| {
            Listing::new(
                i as u64,
                TITLES[rng.random_range(0..TITLES.len())],
                rng.random_range(0.0..1_000.0),
                now - rng.random_range(0..30 * 86_400),
            )
        })
        .collect()
}

/// Helper function to format and print listings
fn print_listings(listings: &[Listing], now: Timestamp, limit: Option<usize>) {
    println!(
        "{}",
        format!("{} matching listings:", listings.len()).bold().blue()
    );
    for (rank, listing) in listings
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
    {
        println!(
            "{}. [{}] {} - {:.2} (posted {} ago)",
            (rank + 1).to_string().green(),
            listing.id,
            listing.name,
            listing.price,
            format_age(listing.age_seconds(now))
        );
    }
}

/// Compact human-readable age, e.g. "3d 4h" or "12m".
fn format_age(seconds: i64) -> String {
    if seconds < 0 {
        return "0s".to_string();
    }
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3600;
    let minutes = (seconds % 3600) / 60;
    match (days, hours, minutes) {
        (0, 0, 0) => format!("{}s", seconds),
        (0, 0, m) => format!("{}m", m),
        (0, h, _) => format!("{}h", h),
        (d, h, _) => format!("{}d {}h", d, h),
    }
}
