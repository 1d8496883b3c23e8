use clap::Parser;

use memocache::harness::{compare, measure_series, HarnessConfig};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Fibonacci input to time.
    #[arg(value_name = "INT", default_value = "35", allow_negative_numbers = true)]
    n: i64,

    /// Number of timed runs averaged per variant.
    #[clap(long, value_name = "INT", default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    trials: u32,

    /// Capacity of the LRU cache. Kept small on purpose; it is not sized to the recursion depth.
    #[clap(long, value_name = "INT", default_value = "5")]
    lru_capacity: u64,

    /// Also time every input from 0 to N, uncached against cached.
    #[clap(long)]
    series: bool,

    /// Log at debug level.
    #[clap(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> HarnessConfig {
        HarnessConfig {
            n: self.n,
            trials: self.trials,
            lru_capacity: self.lru_capacity,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = if args.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = args.config();
    log::debug!("config = {:?}", config);

    let comparison = compare(&config)?;
    println!(
        "Execution time without cache: {:.2e}",
        comparison.uncached.as_secs_f64()
    );
    println!(
        "Execution time with cache: {:.2e}",
        comparison.unbounded.as_secs_f64()
    );
    println!(
        "Execution time with LRU cache: {:.2e}",
        comparison.lru.as_secs_f64()
    );
    println!();

    println!(
        "Speedup cache over no-cache: x{:.2e}",
        comparison.speedup_unbounded().round()
    );
    println!(
        "Speedup LRU cache over no-cache (max size {}): x{:.2e}",
        comparison.lru_capacity,
        comparison.speedup_lru().round()
    );

    if args.series {
        println!();
        let inputs: Vec<i64> = (0..=config.n).collect();
        let series = measure_series(config.trials, &inputs)?;
        let secs = |durations: &[std::time::Duration]| -> Vec<f64> {
            durations.iter().map(|d| d.as_secs_f64()).collect()
        };
        println!("{:?}", series.inputs);
        println!("{:?}", secs(&series.uncached));
        println!("{:?}", secs(&series.cached));
    }

    Ok(())
}
