use clap::{Parser, Subcommand};
use seeded_bloom_rs::{
    BloomFilter, BloomFilterOps, BloomFilterStats, common::bits2hr,
    optimal_bit_vector_size, optimal_num_hashes, parse_capacity,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the bit vector size and hash count for a configuration
    Params {
        /// Expected number of items
        #[arg(short, long, default_value = "10000", allow_negative_numbers = true)]
        capacity: i64,

        /// False positive rate (between 0 and 1)
        #[arg(short, long, default_value = "0.01")]
        fpr: f64,
    },

    /// Build an in-memory filter, add elements, then check elements
    Probe {
        /// Expected number of items
        #[arg(short, long, default_value = "10000", allow_negative_numbers = true)]
        capacity: i64,

        /// False positive rate (between 0 and 1)
        #[arg(short, long, default_value = "0.01")]
        fpr: f64,

        /// Element to add, may be repeated
        #[arg(short, long)]
        add: Vec<String>,

        /// Element to check, may be repeated
        #[arg(short = 'q', long)]
        check: Vec<String>,
    },

    /// Fill a filter to capacity and measure its false positive rate
    Fpr {
        /// Expected number of items
        #[arg(short, long, default_value = "10000", allow_negative_numbers = true)]
        capacity: i64,

        /// False positive rate (between 0 and 1)
        #[arg(short, long, default_value = "0.01")]
        fpr: f64,

        /// Number of non-member elements to test
        #[arg(short, long, default_value = "100000")]
        samples: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Params { capacity, fpr } => {
            let capacity = parse_capacity(capacity)?;
            let bit_vector_size = optimal_bit_vector_size(capacity, fpr)?;
            let num_hashes = optimal_num_hashes(bit_vector_size, capacity)?;

            println!("Capacity: {capacity}");
            println!("False positive rate: {fpr}");
            println!("Bit vector size: {bit_vector_size}");
            println!("Hash functions: {num_hashes}");
            println!("Memory: {}", bits2hr(bit_vector_size));
        }
        Commands::Probe {
            capacity,
            fpr,
            add,
            check,
        } => {
            let mut filter = BloomFilter::with_rate(parse_capacity(capacity)?, fpr)?;
            for element in &add {
                filter.add(element.as_bytes())?;
                debug!(element = %element, "Added element");
            }
            info!(
                added = filter.insert_count(),
                bits_set = filter.bits_set(),
                "Filter populated"
            );

            for element in &check {
                if filter.check(element.as_bytes())? {
                    println!("{element}: probably present");
                } else {
                    println!("{element}: definitely absent");
                }
            }
        }
        Commands::Fpr {
            capacity,
            fpr,
            samples,
        } => {
            let capacity = parse_capacity(capacity)?;
            let mut filter = BloomFilter::with_rate(capacity, fpr)?;
            for i in 0..capacity {
                filter.add(format!("member_{i}").as_bytes())?;
            }
            info!(
                fill_ratio = filter.fill_ratio(),
                "Inserted {capacity} members"
            );

            let mut false_positives = 0usize;
            for i in 0..samples {
                if filter.check(format!("outsider_{i}").as_bytes())? {
                    false_positives += 1;
                }
            }
            let observed = false_positives as f64 / samples.max(1) as f64;

            println!("Bit vector size: {}", filter.bit_vector_size());
            println!("Hash functions: {}", filter.num_hashes());
            println!("False positives: {false_positives}/{samples}");
            println!("Target FPR: {:.4}%", fpr * 100.0);
            println!("Observed FPR: {:.4}%", observed * 100.0);
            println!(
                "Estimated FPR: {:.4}%",
                filter.estimated_false_positive_rate() * 100.0
            );
        }
    }

    Ok(())
}
