#[macro_use]
extern crate anyhow;
extern crate clap;
extern crate diskpoints;
extern crate log4rs;
#[macro_use]
extern crate log;

use anyhow::Context;
use clap::Parser;
use diskpoints::demo::PointDemo;
use diskpoints::render::render;
use diskpoints::samplers::independent::IndependentSampler;
use diskpoints::samplers::Sampler;
use diskpoints::stats::DiskStats;
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

const LOG_PATTERN: &str = "{l} {M} - {m}{n}";

#[derive(Debug, Parser)]
#[command(author, version, about = "Random points in a circle: naive vs uniform sampling", long_about = None)]
pub struct Cli {
    /// Output image file (png or pfm)
    #[arg(long, short, value_name = "FILE", default_value = "points.png")]
    output: String,
    /// Random number generator seed
    #[arg(long, short)]
    seed: Option<u64>,
    /// Read key commands from stdin ('a' regenerates the points)
    #[arg(long, short)]
    interactive: bool,
    /// Logs
    #[arg(long, short)]
    log: Option<String>,
    /// Verbose output
    #[arg(long, short)]
    verbose: bool,
}

fn setup_logging(
    log: Option<String>,
    level: LevelFilter,
) -> anyhow::Result<log4rs::Handle> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let stderr = Appender::builder()
        .filter(Box::new(ThresholdFilter::new(level)))
        .build("stderr", Box::new(stderr));
    let config = if let Some(log) = log {
        // Pattern: https://docs.rs/log4rs/*/log4rs/encode/pattern/index.html
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(&log)
            .with_context(|| format!("cannot open log file {}", log))?;
        Config::builder()
            .appender(Appender::builder().build("logfile", Box::new(logfile)))
            .appender(stderr)
            .build(
                Root::builder()
                    .appender("logfile")
                    .appender("stderr")
                    .build(LevelFilter::Trace),
            )
            .map_err(|e| anyhow!("invalid logging configuration: {}", e))?
    } else {
        Config::builder()
            .appender(stderr)
            .build(Root::builder().appender("stderr").build(LevelFilter::Trace))
            .map_err(|e| anyhow!("invalid logging configuration: {}", e))?
    };
    Ok(log4rs::init_config(config)?)
}

/// Render the current points and write them to `output`
fn display(demo: &PointDemo, output: &str) -> anyhow::Result<()> {
    for set in demo.sets().iter() {
        let stats = DiskStats::compute(set.circle(), set.points(), 8);
        info!(
            "{:?}: {} points, {:.1}% within half radius, max distance {:.3}, sector deviation {:.1}%",
            set.method(),
            stats.count,
            stats.inner_fraction * 100.0,
            stats.max_distance,
            stats.angle_deviation() * 100.0
        );
    }
    let img = render(demo);
    img.save(output)
        .with_context(|| format!("cannot save image {}", output))?;
    info!("Save image: {}", output);
    Ok(())
}

fn run(cli: &Cli, sampler: &mut dyn Sampler) -> anyhow::Result<()> {
    let mut demo = PointDemo::new();
    demo.regenerate(sampler);
    display(&demo, &cli.output)?;

    if !cli.interactive {
        return Ok(());
    }
    info!("Press 'a' then enter to regenerate the points (end of input quits)");
    let stdin = std::io::stdin();
    let nb_refresh = demo.run_keys(stdin.lock(), sampler, |d: &PointDemo| {
        display(d, &cli.output)
    })?;
    info!("Session done, {} refresh", nb_refresh);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    /////////////// Setup logging system
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _handle = match setup_logging(cli.log.clone(), level) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("Impossible to setup the logging: {}", e);
            std::process::exit(1);
        }
    };

    //////////////// Random number generator
    let mut sampler = match cli.seed {
        Some(seed) => {
            info!("Seed: {}", seed);
            IndependentSampler::from_seed(seed)
        }
        None => IndependentSampler::default(),
    };

    if let Err(e) = run(&cli, &mut sampler) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
