//! Lucid: Content Quality Analyzer CLI

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use lucid::analyzer::AnalysisEngine;
use lucid::config::{build_ignore_set, is_ignored, load_config, starter_config, Config, CONFIG_FILENAME};
use lucid::reporter::{ConsoleReporter, JsonReporter};
use lucid::watcher::DocumentWatcher;
use lucid::ContentReport;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

/// Lucid: Content Quality Analyzer for plain text
#[derive(Parser, Debug)]
#[command(name = "lucid")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Document or directory to analyze, or `-` for stdin
    #[arg(required = true)]
    path: Option<PathBuf>,

    /// Keywords to measure, comma separated (the first one drives the keyword score)
    #[arg(long, short, value_delimiter = ',')]
    keywords: Vec<String>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum overall score (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (one line per document)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .lucidrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip part-of-speech tagging
    #[arg(long)]
    no_tagger: bool,

    /// Watch for file changes and re-analyze
    #[arg(long)]
    watch: bool,

    /// Run analysis in parallel (default for directories with many files)
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .lucidrc.json with sensible defaults
    Init {
        /// Minimum score threshold (e.g. 70)
        #[arg(long)]
        threshold: Option<u8>,

        /// Default keywords, comma separated
        #[arg(long, value_delimiter = ',')]
        keywords: Vec<String>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

/// Documents above this count are analyzed in parallel without `--parallel`
const PARALLEL_THRESHOLD: usize = 10;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    logging::init_logging(args.verbose, args.quiet);

    if let Some(Commands::Init {
        threshold,
        ref keywords,
        ref dir,
    }) = args.command
    {
        return run_init(threshold, keywords, dir.as_deref());
    }

    let Some(path) = args.path.clone() else {
        anyhow::bail!("a document path is required");
    };

    let is_stdin = path.as_os_str() == "-";
    let work_dir = if is_stdin {
        std::env::current_dir().context("Failed to get current directory")?
    } else if path.is_file() {
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf()
    } else {
        path.clone()
    };

    // CLI flags override config file
    let config = load_config(&work_dir, args.config.as_deref())?.merge_with_cli(
        args.threshold,
        &args.keywords,
        args.no_tagger,
    );

    if config.keywords.is_empty() && config.overrides.iter().all(|o| o.keywords.is_none()) {
        log::warn!("no keywords given; keyword score will be 0 (use --keywords)");
    }

    let engine = AnalysisEngine::new();

    if args.watch {
        if is_stdin {
            anyhow::bail!("--watch cannot be used with stdin");
        }
        return run_watch(&args, &path, &engine, &config);
    }

    if is_stdin {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        let report = engine.analyze_source(&text, Path::new("-"), Some(&config))?;
        let reports = vec![report];
        output(&args, &reports);
        return Ok(finish(&args, &config, &reports, false));
    }

    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    let documents = collect_documents(&path, ignore_set.as_ref(), &config)?;
    if documents.is_empty() {
        eprintln!("{}: No documents found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    // Set up parallel processing
    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let use_parallel = args.parallel || documents.len() > PARALLEL_THRESHOLD;
    log::debug!(
        "analyzing {} document(s){}",
        documents.len(),
        if use_parallel { " in parallel" } else { "" }
    );

    let (reports, had_errors) = if use_parallel {
        analyze_files_parallel(&engine, &documents, &config, args.quiet)
    } else {
        analyze_files_sequential(&engine, &documents, &config, args.quiet)
    };

    if reports.is_empty() {
        eprintln!("{}: All documents failed to analyze", "Error".red());
        return Ok(ExitCode::from(2));
    }

    output(&args, &reports);
    Ok(finish(&args, &config, &reports, had_errors))
}

/// Print reports in the format chosen by the flags
fn output(args: &Args, reports: &[ContentReport]) {
    let stats = AnalysisEngine::aggregate_stats(reports);

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if reports.len() == 1 {
            println!("{}", reporter.report(&reports[0]));
        } else {
            println!("{}", reporter.report_with_summary(reports, &stats));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for report in reports {
            reporter.report_quiet(report);
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }

        if reports.len() == 1 {
            reporter.report(&reports[0]);
        } else {
            reporter.report_many(reports, &stats);
        }
    }
}

/// Exit code from the threshold check and any analysis errors
fn finish(args: &Args, config: &Config, reports: &[ContentReport], had_errors: bool) -> ExitCode {
    let (score, threshold) = if reports.len() == 1 {
        let report = &reports[0];
        (
            report.summary.overall_score,
            config.effective_for_file(&report.file_path).threshold,
        )
    } else {
        (
            AnalysisEngine::aggregate_stats(reports).average_score,
            config.threshold,
        )
    };

    if let Some(threshold) = threshold {
        if score < threshold {
            if !args.quiet && !args.json {
                eprintln!(
                    "\n{}: Score {} is below threshold {}",
                    "Failed".red().bold(),
                    score,
                    threshold
                );
            }
            return ExitCode::from(1);
        }
    }

    if had_errors {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}

fn run_init(threshold: Option<u8>, keywords: &[String], dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let threshold_value = threshold.unwrap_or(70);
    std::fs::write(&config_path, starter_config(threshold_value, keywords)).with_context(|| {
        format!("Failed to write config to {}", config_path.display())
    })?;

    let keywords_value = if keywords.is_empty() {
        "none".to_string()
    } else {
        keywords.join(",")
    };
    println!(
        "{}: Created {} with threshold={}, keywords={}",
        "Done".green().bold(),
        config_path.display(),
        threshold_value,
        keywords_value
    );
    Ok(ExitCode::SUCCESS)
}

fn run_watch(args: &Args, path: &Path, engine: &AnalysisEngine, config: &Config) -> Result<ExitCode> {
    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    let watcher = DocumentWatcher::watch(path, &config.document_extensions())
        .context("Failed to create file watcher")?;
    eprintln!("{}: Watching for changes... (Ctrl+C to stop)", "Info".blue());

    loop {
        let paths = watcher.next_changes();
        if paths.is_empty() {
            continue;
        }
        let filtered = paths.into_iter().filter(|p| {
            ignore_set
                .as_ref()
                .map(|set| !is_ignored(p, set))
                .unwrap_or(true)
        });
        for changed in filtered {
            match engine.analyze_file(&changed, Some(config)) {
                Ok(report) => {
                    if args.json {
                        println!("{}", JsonReporter::new().report(&report));
                    } else if args.quiet {
                        ConsoleReporter::new().report_quiet(&report);
                    } else {
                        ConsoleReporter::new().report(&report);
                    }
                }
                Err(e) => {
                    eprintln!("{}: {}: {:#}", "Error".red(), changed.display(), e);
                }
            }
        }
    }
}

fn collect_documents(
    path: &Path,
    ignore_set: Option<&globset::GlobSet>,
    config: &Config,
) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        if let Some(set) = ignore_set {
            if is_ignored(path, set) {
                return Ok(vec![]);
            }
        }
        // an explicitly named file is analyzed whatever its extension
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let file_path = entry.path();
        if is_document(file_path, config) {
            if let Some(set) = ignore_set {
                if is_ignored(file_path, set) {
                    continue;
                }
            }
            files.push(file_path.to_path_buf());
        }
    }

    // Sort for consistent output
    files.sort();

    Ok(files)
}

fn is_document(path: &Path, config: &Config) -> bool {
    if path
        .components()
        .any(|c| c.as_os_str() == "node_modules")
    {
        return false;
    }
    config.is_document(path)
}

fn analyze_files_sequential(
    engine: &AnalysisEngine,
    files: &[PathBuf],
    config: &Config,
    quiet: bool,
) -> (Vec<ContentReport>, bool) {
    let mut had_errors = false;
    let mut reports = Vec::with_capacity(files.len());

    for file in files {
        match engine.analyze_file(file, Some(config)) {
            Ok(report) => reports.push(report),
            Err(e) => {
                had_errors = true;
                if !quiet {
                    eprintln!("{}: {:#}", "Error".red(), e);
                }
            }
        }
    }

    (reports, had_errors)
}

/// Analyze files in parallel; output order follows `files`
fn analyze_files_parallel(
    engine: &AnalysisEngine,
    files: &[PathBuf],
    config: &Config,
    quiet: bool,
) -> (Vec<ContentReport>, bool) {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    let had_errors = AtomicBool::new(false);

    let reports: Vec<_> = files
        .par_iter()
        .filter_map(|file| match engine.analyze_file(file, Some(config)) {
            Ok(report) => Some(report),
            Err(e) => {
                had_errors.store(true, Ordering::Relaxed);
                if !quiet {
                    eprintln!("{}: {:#}", "Error".red(), e);
                }
                None
            }
        })
        .collect();

    (reports, had_errors.load(Ordering::Relaxed))
}
