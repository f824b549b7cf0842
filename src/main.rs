use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use loopscope::engine::{play_to_end, MIN_TICK_INTERVAL};
use loopscope::script::{builtin, BUILTIN_SCRIPTS};
use loopscope::{util, App, Config, Phase, StepScript, Visualizer, VisualizerState};

/// Step through the JavaScript event loop one operation at a time
#[derive(Parser, Debug)]
#[command(name = "loopscope", version, about)]
struct Cli {
    /// Data directory for config and logs (default: ~/.loopscope)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file to use instead of <data-dir>/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive visualizer (default)
    Tui {
        /// Built-in script name or path to a TOML script
        #[arg(long)]
        script: Option<String>,

        /// Delay between steps when running all, in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Play a script without a terminal UI and print the result
    Run {
        /// Built-in script name or path to a TOML script
        #[arg(long)]
        script: Option<String>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Stop after this many steps
        #[arg(long)]
        steps: Option<usize>,

        /// Also print the operations each step performs
        #[arg(short, long)]
        verbose: bool,
    },
    /// List built-in scripts
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Final state of a headless run
#[derive(Debug, Serialize)]
struct RunReport<'a> {
    script: &'a str,
    phase: Phase,
    total_steps: usize,
    applied: Vec<&'a str>,
    state: &'a VisualizerState,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir.clone());

    // Initialize logging to file (<data-dir>/logs/loopscope.log)
    fs::create_dir_all(util::logs_dir()).context("failed to create log directory")?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())
        .context("failed to open log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };

    match cli.command.unwrap_or(Command::Tui {
        script: None,
        interval_ms: None,
    }) {
        Command::Tui {
            script,
            interval_ms,
        } => {
            let mut config = config;
            if let Some(script) = script {
                config = config.with_script(script);
            }
            if let Some(interval_ms) = interval_ms {
                config = config.with_interval_ms(interval_ms);
            }
            let script = load_script(&config.script)?;
            let mut app = App::new(config, script);
            app.run().await
        }
        Command::Run {
            script,
            format,
            steps,
            verbose,
        } => {
            let reference = script.unwrap_or_else(|| config.script.clone());
            let script = load_script(&reference)?;
            run_headless(script, format, steps, verbose).await
        }
        Command::List => {
            list_builtins();
            Ok(())
        }
    }
}

fn load_script(reference: &str) -> Result<Arc<StepScript>> {
    let script = StepScript::resolve(reference)
        .with_context(|| format!("failed to load script '{}'", reference))?;
    Ok(Arc::new(script))
}

async fn run_headless(
    script: Arc<StepScript>,
    format: Format,
    steps: Option<usize>,
    verbose: bool,
) -> Result<()> {
    let mut visualizer = Visualizer::new(script);
    let print_steps = format == Format::Text;

    match steps {
        Some(limit) => {
            for _ in 0..limit {
                if !visualizer.advance() {
                    break;
                }
                if print_steps {
                    print_step(&visualizer, verbose);
                }
            }
        }
        None => {
            play_to_end(&mut visualizer, MIN_TICK_INTERVAL, |vis| {
                if print_steps {
                    print_step(vis, verbose);
                }
            })
            .await;
        }
    }

    match format {
        Format::Text => print_summary(&visualizer),
        Format::Json => {
            let report = RunReport {
                script: visualizer.script().name(),
                phase: visualizer.phase(),
                total_steps: visualizer.len(),
                applied: visualizer
                    .script()
                    .iter()
                    .take(visualizer.cursor())
                    .map(|step| step.description.as_str())
                    .collect(),
                state: visualizer.state(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn print_step(visualizer: &Visualizer, verbose: bool) {
    let Some(step) = visualizer.last_applied() else {
        return;
    };
    let width = visualizer.len().to_string().len();
    println!(
        "[{:>width$}/{}] {}",
        visualizer.cursor(),
        visualizer.len(),
        step.description,
        width = width
    );
    if verbose {
        for op in &step.ops {
            println!("        · {}", op.label());
        }
    }
}

fn print_summary(visualizer: &Visualizer) {
    let state = visualizer.state();
    let join = |items: Vec<&str>| {
        if items.is_empty() {
            "(empty)".to_string()
        } else {
            items.join(", ")
        }
    };

    println!();
    println!(
        "{}: step {}/{} ({})",
        visualizer.script().name(),
        visualizer.cursor(),
        visualizer.len(),
        visualizer.phase().label()
    );
    println!(
        "call stack: {}",
        join(state.call_stack.iter().rev().map(String::as_str).collect())
    );
    println!(
        "microtasks: {}",
        join(state.microtask_queue.iter().map(String::as_str).collect())
    );
    println!(
        "macrotasks: {}",
        join(state.macrotask_queue.iter().map(String::as_str).collect())
    );
    println!("output:");
    for line in &state.output {
        println!("  {}", line);
    }
}

fn list_builtins() {
    let name_width = BUILTIN_SCRIPTS
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);
    for (name, summary) in BUILTIN_SCRIPTS {
        let steps = builtin(name).map(|script| script.len()).unwrap_or(0);
        println!(
            "{:<name_width$}  {:>2} steps  {}",
            name,
            steps,
            summary,
            name_width = name_width
        );
    }
}
