use anyhow::{anyhow, bail, Context, Result};
use bigo_analyzer::{analyze, sample, samples};
use bigo_core::{
    comparison_table, growth_curve, AnalysisResult, BigOConfig, ComplexityClass, ConfigManager,
    Confidence, FileWatcher, LoggingConfig, SnippetWatcher,
};
use clap::{Parser, Subcommand, ValueEnum};
use colored::{ColoredString, Colorize};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tabled::{settings::Style, Table, Tabled};
use tracing::{debug, info};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, Registry};

#[derive(Parser)]
#[command(name = "bigo")]
#[command(about = "BigO - heuristic time and space complexity estimates for code snippets", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format (json, pretty, table); defaults to the configured format
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Config file to use instead of .bigo.toml / ~/.bigo/config.toml
    #[arg(long, global = true, env = "BIGO_CONFIG")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose output (debug logging to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
    Table,
}

impl OutputFormat {
    fn from_config(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "table" => OutputFormat::Table,
            _ => OutputFormat::Pretty,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a snippet from a file, stdin or the sample library
    Analyze {
        /// Source file; reads stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Analyze a built-in sample by name instead
        #[arg(short, long, conflicts_with = "file")]
        sample: Option<String>,
    },

    /// List the built-in samples with their estimates
    Samples,

    /// Growth curve of a complexity class, e.g. "O(n log n)"
    Curve {
        /// Complexity class
        class: String,
    },

    /// All complexity classes ranked by weight
    Compare,

    /// Re-analyze a file whenever it changes
    Watch {
        /// File to watch
        file: PathBuf,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a default config file
    Init {
        /// Target path
        #[arg(short, long, default_value = ".bigo.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

// Output structures
#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct SampleRow {
    #[tabled(rename = "Sample")]
    name: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Space")]
    space: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
}

#[derive(Tabled)]
struct CurveRow {
    x: u32,
    y: f64,
}

#[derive(Tabled)]
struct ComparisonTableRow {
    #[tabled(rename = "Complexity")]
    complexity: String,
    #[tabled(rename = "Weight")]
    weight: u8,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Description")]
    description: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let manager = match &cli.config {
        Some(path) => ConfigManager::load_from(path),
        None => ConfigManager::load(),
    }
    .context("Failed to load configuration")?;
    let config = manager.config();

    init_tracing(&config.logging, cli.verbose);
    if let Some(path) = manager.config_path() {
        debug!("using config file {}", path.display());
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format = cli
        .output
        .unwrap_or_else(|| OutputFormat::from_config(&config.output.format));

    match &cli.command {
        Commands::Analyze { file, sample } => {
            let code = read_input(file.as_deref(), sample.as_deref())?;
            config.analysis.check_input(&code)?;
            let result = analyze(&code);
            print_analysis(format, &result)
        }
        Commands::Samples => print_samples(format),
        Commands::Curve { class } => {
            let class: ComplexityClass = class.parse().map_err(|e: String| anyhow!(e))?;
            print_curve(format, class)
        }
        Commands::Compare => print_comparison(format),
        Commands::Watch { file } => watch_file(file, config, format),
        Commands::Config(cmd) => execute_config_command(cmd, config),
    }
}

fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let env_filter = || {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
        }
    };

    let registry = Registry::default().with(env_filter());
    match logging.format.as_str() {
        "json" => {
            let subscriber = registry.with(fmt::layer().json().with_writer(std::io::stderr));
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        "compact" => {
            let subscriber = registry.with(fmt::layer().compact().with_writer(std::io::stderr));
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        _ => {
            let subscriber = registry.with(fmt::layer().pretty().with_writer(std::io::stderr));
            tracing::subscriber::set_global_default(subscriber).ok();
        }
    }
}

fn read_input(file: Option<&Path>, sample_name: Option<&str>) -> Result<String> {
    if let Some(name) = sample_name {
        let found = sample(name).ok_or_else(|| {
            let known: Vec<&str> = samples().iter().map(|s| s.name).collect();
            anyhow!("Unknown sample '{}'. Available: {}", name, known.join(", "))
        })?;
        return Ok(found.code.to_string());
    }

    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut code = String::new();
            std::io::stdin()
                .read_to_string(&mut code)
                .context("Failed to read stdin")?;
            Ok(code)
        }
    }
}

fn watch_file(file: &Path, config: &BigOConfig, format: OutputFormat) -> Result<()> {
    let watcher = SnippetWatcher::new(file)
        .with_debounce(Duration::from_millis(config.watch.debounce_ms));
    println!(
        "{} {} {}",
        "Watching".cyan().bold(),
        watcher.path().display(),
        "(Ctrl+C to stop)".dimmed()
    );

    let (tx, rx) = crossbeam_channel::unbounded();
    let handle = std::thread::spawn(move || watcher.watch(tx));

    for change in rx.iter() {
        if change.is_blank() {
            info!("snippet is empty, nothing to analyze");
            println!("{}", "(empty snippet)".dimmed());
            continue;
        }
        if let Err(e) = config.analysis.check_input(&change.content) {
            eprintln!("{} {}", "Skipped:".yellow().bold(), e);
            continue;
        }
        println!("\n{}", "─".repeat(40).dimmed());
        print_analysis(format, &analyze(&change.content))?;
    }

    handle
        .join()
        .map_err(|_| anyhow!("watcher thread panicked"))??;
    Ok(())
}

fn execute_config_command(cmd: &ConfigCommands, config: &BigOConfig) -> Result<()> {
    match cmd {
        ConfigCommands::Init { path, force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            ConfigManager::create_default_config(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} {}", "Created".green().bold(), path.display());
            Ok(())
        }
        ConfigCommands::Show => {
            print!("{}", toml::to_string_pretty(config)?);
            Ok(())
        }
    }
}

fn class_colored(class: ComplexityClass) -> ColoredString {
    let label = class.to_string();
    match class.weight() {
        1..=2 => label.green().bold(),
        3..=4 => label.yellow().bold(),
        _ => label.red().bold(),
    }
}

fn confidence_colored(confidence: Confidence) -> ColoredString {
    let label = confidence.to_string().to_uppercase();
    match confidence {
        Confidence::High => label.green(),
        Confidence::Medium => label.yellow(),
        Confidence::Low => label.red(),
    }
}

fn print_analysis(format: OutputFormat, result: &AnalysisResult) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Pretty => {
            println!(
                "{}: {} ({})",
                "Language".cyan().bold(),
                result.language,
                result.language_support
            );
            println!("{}: {}", "Time".cyan().bold(), class_colored(result.time_complexity));
            println!("{}: {}", "Space".cyan().bold(), class_colored(result.space_complexity));
            println!("{}: {}", "Confidence".cyan().bold(), confidence_colored(result.confidence));
            if !result.patterns.is_empty() {
                println!("{}:", "Patterns".cyan().bold());
                for pattern in &result.patterns {
                    println!("  - {}", pattern);
                }
            }
            println!("{}: {}", "Explanation".cyan().bold(), result.explanation);
            if let Some(warning) = &result.warning {
                println!("{} {}", "Warning:".yellow().bold(), warning);
            }
        }
        OutputFormat::Table => {
            let mut rows = vec![
                FieldRow {
                    field: "Language".into(),
                    value: format!("{} ({})", result.language, result.language_support),
                },
                FieldRow {
                    field: "Time".into(),
                    value: result.time_complexity.to_string(),
                },
                FieldRow {
                    field: "Space".into(),
                    value: result.space_complexity.to_string(),
                },
                FieldRow {
                    field: "Confidence".into(),
                    value: result.confidence.to_string(),
                },
                FieldRow {
                    field: "Patterns".into(),
                    value: result.patterns.join("\n"),
                },
            ];
            if let Some(warning) = &result.warning {
                rows.push(FieldRow {
                    field: "Warning".into(),
                    value: warning.clone(),
                });
            }
            println!("{}", Table::new(rows).with(Style::rounded()));
        }
    }
    Ok(())
}

fn print_samples(format: OutputFormat) -> Result<()> {
    let analyzed: Vec<(&str, AnalysisResult)> = samples()
        .iter()
        .map(|s| (s.name, analyze(s.code)))
        .collect();

    match format {
        OutputFormat::Json => {
            let value: Vec<serde_json::Value> = samples()
                .iter()
                .zip(&analyzed)
                .map(|(s, (_, result))| {
                    serde_json::json!({
                        "name": s.name,
                        "code": s.code,
                        "result": result,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Pretty => {
            for (name, result) in &analyzed {
                println!(
                    "{:<24} {} time, {} space",
                    name.bold(),
                    class_colored(result.time_complexity),
                    class_colored(result.space_complexity)
                );
            }
        }
        OutputFormat::Table => {
            let rows: Vec<SampleRow> = analyzed
                .iter()
                .map(|(name, result)| SampleRow {
                    name: name.to_string(),
                    time: result.time_complexity.to_string(),
                    space: result.space_complexity.to_string(),
                    confidence: result.confidence.to_string(),
                })
                .collect();
            println!("{}", Table::new(rows).with(Style::rounded()));
        }
    }
    Ok(())
}

fn print_curve(format: OutputFormat, class: ComplexityClass) -> Result<()> {
    let points = growth_curve(class);
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "complexity": class,
                    "profile": class.profile(),
                    "points": points,
                }))?
            );
        }
        OutputFormat::Pretty => {
            println!("{} {}", class_colored(class), class.profile().description.dimmed());
            let peak = points.iter().map(|p| p.y).fold(f64::MIN, f64::max).max(1.0);
            for point in &points {
                let width = ((point.y / peak) * 40.0).round() as usize;
                println!("{:>3} {:>10.2} {}", point.x, point.y, "█".repeat(width));
            }
        }
        OutputFormat::Table => {
            let rows: Vec<CurveRow> = points.iter().map(|p| CurveRow { x: p.x, y: p.y }).collect();
            println!("{}", Table::new(rows).with(Style::rounded()));
        }
    }
    Ok(())
}

fn print_comparison(format: OutputFormat) -> Result<()> {
    let table = comparison_table();
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        OutputFormat::Pretty => {
            for row in &table {
                println!(
                    "{:>2}  {:<12} {}",
                    row.weight,
                    class_colored(row.complexity),
                    row.description
                );
            }
        }
        OutputFormat::Table => {
            let rows: Vec<ComparisonTableRow> = table
                .iter()
                .map(|row| ComparisonTableRow {
                    complexity: row.complexity.to_string(),
                    weight: row.weight,
                    color: row.color.to_string(),
                    description: row.description.to_string(),
                })
                .collect();
            println!("{}", Table::new(rows).with(Style::rounded()));
        }
    }
    Ok(())
}
