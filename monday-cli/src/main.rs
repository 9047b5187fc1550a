mod host;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use log::LevelFilter;
use std::path::PathBuf;

use host::{BlockingHost, CooperativeHost};
use monday_game::constants::DEFAULT_SAVE_FILE;
use monday_game::{Engine, EngineConfig, EngineError, FileStorage, Host, LoadOutcome};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum IoMode {
    /// Blocking stdin/stdout driven by a minimal executor
    Blocking,
    /// Async stdin/stdout on a single-threaded tokio runtime
    Cooperative,
}

#[derive(Debug, Parser)]
#[command(name = "monday", version)]
#[command(about = "MONDAY - a modern adventure of epic proportions")]
struct Args {
    /// Where progress is saved (encrypted)
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    save_file: PathBuf,

    /// Delay multiplier; 0 disables pacing delays
    #[arg(long)]
    pace: Option<f32>,

    /// Terminal I/O implementation
    #[arg(long, value_enum, default_value_t = IoMode::Blocking)]
    io: IoMode,

    /// JSON engine configuration; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the stats report and exit
    #[arg(long, conflicts_with = "clear_stats")]
    show_stats: bool,

    /// Clear saved progress and exit
    #[arg(long)]
    clear_stats: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args)?;
    let mut engine = Engine::new(FileStorage::new(&args.save_file), config)
        .context("story script failed validation")?;

    if engine.load() == LoadOutcome::Disabled {
        println!("Note that progress will not be saved.");
    }

    if args.clear_stats {
        engine
            .clear_progress()
            .with_context(|| format!("clearing {}", args.save_file.display()))?;
        println!("Save cleared.");
        return Ok(());
    }

    if !args.show_stats {
        announce_banner();
    }

    let result = match args.io {
        IoMode::Blocking => {
            let mut host = BlockingHost::stdio();
            futures::executor::block_on(play(&mut engine, &mut host, args.show_stats))
        }
        IoMode::Cooperative => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("starting tokio runtime")?;
            runtime.block_on(async {
                let mut host = CooperativeHost::stdio();
                play(&mut engine, &mut host, args.show_stats).await
            })
        }
    };

    match result {
        Err(error) if error.is_input_closed() => {
            log::info!("input closed; leaving");
            Ok(())
        }
        other => other.context("game aborted"),
    }
}

async fn play<H: Host + ?Sized>(
    engine: &mut Engine<FileStorage>,
    host: &mut H,
    stats_only: bool,
) -> Result<(), EngineError> {
    if stats_only {
        engine.show_stats(host).await
    } else {
        engine.run(host).await
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn load_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(pace) = args.pace {
        config.pace = pace;
    }
    anyhow::ensure!(
        config.pace.is_finite() && config.pace >= 0.0,
        "pace must be a non-negative number, got {}",
        config.pace
    );
    Ok(config)
}

fn announce_banner() {
    println!("{}", "MONDAY: Special Edition".bright_yellow().bold());
    println!("{}", "=======================".yellow());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_file() {
        let path = std::env::temp_dir().join(format!(
            "monday-config-{}.json",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        std::fs::write(&path, r#"{"pace": 0.25}"#).unwrap();

        let args = Args::parse_from(["monday", "--config", path.to_str().unwrap()]);
        assert!((load_config(&args).unwrap().pace - 0.25).abs() < f32::EPSILON);

        let args = Args::parse_from(["monday", "--config", path.to_str().unwrap(), "--pace", "0"]);
        assert!(load_config(&args).unwrap().pace.abs() < f32::EPSILON);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn rejects_negative_pace() {
        let args = Args::parse_from(["monday", "--pace=-1"]);
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["monday"]);
        assert_eq!(args.save_file, PathBuf::from(DEFAULT_SAVE_FILE));
        assert!(matches!(args.io, IoMode::Blocking));
        assert!((load_config(&args).unwrap().pace - 1.0).abs() < f32::EPSILON);
    }
}
