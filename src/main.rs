//! promptgrade: Prompt Quality Analyzer CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use promptgrade::analyzer::{read_prompt_file, PromptAnalyzer};
use promptgrade::config::{
    build_ignore_set, is_ignored, load_config, starter_config, Config, CONFIG_FILENAME,
};
use promptgrade::enhancer::{PromptEnhancer, SeededPicker};
use promptgrade::reporter::{ConsoleReporter, JsonReporter};
use promptgrade::watcher::{is_prompt_file, PromptWatcher};
use promptgrade::FileReport;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

/// Label used for prompts read from stdin
const STDIN_LABEL: &str = "-";
/// Label used for prompts given with --text
const TEXT_LABEL: &str = "<text>";

/// promptgrade: score prompts and suggest a stronger rewrite
#[derive(Parser, Debug)]
#[command(name = "promptgrade")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Prompt file or directory to analyze, `-` for stdin (omit when using --text or a subcommand)
    #[arg(required_unless_present = "text", conflicts_with = "text")]
    path: Option<PathBuf>,

    /// Analyze this prompt text instead of a file
    #[arg(long)]
    text: Option<String>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum score threshold (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (minimal output)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output
    #[arg(long, short)]
    verbose: bool,

    /// Also rewrite each prompt, targeting its weak dimensions
    #[arg(long, short)]
    enhance: bool,

    /// Seed for the enhancer's phrase choices (same seed, same rewrite)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Path to config file (default: search .promptgraderc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reject prompts longer than N characters
    #[arg(long, value_name = "N")]
    max_length: Option<usize>,

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
    /// Run the tool server (stdio JSON-RPC)
    Mcp,

    /// Create .promptgraderc.json with sensible defaults
    Init {
        /// Minimum score threshold (e.g. 70)
        #[arg(long)]
        threshold: Option<u8>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Show before/after prompt examples
    Examples {
        /// Output format as JSON
        #[arg(long, short)]
        json: bool,
    },
}

/// Where the prompts come from
enum Input {
    Text(String),
    Stdin,
    Path(PathBuf),
}

/// Shared state for analyzing (and optionally enhancing) one prompt at a time
struct Grader {
    analyzer: PromptAnalyzer,
    enhancer: Option<PromptEnhancer>,
    max_length: usize,
    seed: Option<u64>,
}

impl Grader {
    fn new(config: &Config, enhance: bool) -> Self {
        Self {
            analyzer: PromptAnalyzer::new(config.lexicon()),
            enhancer: enhance.then(|| PromptEnhancer::new(config.lexicon())),
            max_length: config.effective_max_length(),
            seed: config.seed,
        }
    }

    /// Score `text`; with enhancement on, rewrite it using the fresh scores.
    /// `index` keeps seeded rewrites stable per file in parallel runs.
    fn grade(&self, label: impl Into<PathBuf>, text: &str, index: usize) -> Result<FileReport> {
        let mut result = self.analyzer.analyze_text(label, text, self.max_length)?;
        if let Some(ref enhancer) = self.enhancer {
            let mut picker = match self.seed {
                Some(seed) => SeededPicker::for_item(seed, index),
                None => SeededPicker::from_entropy(),
            };
            result.enhancement = Some(enhancer.enhance_report(text, &result.report, &mut picker));
        }
        Ok(result)
    }

    fn grade_file(&self, path: &Path, index: usize) -> Result<FileReport> {
        let prompt = read_prompt_file(path)?;
        self.grade(path, &prompt, index)
    }
}

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

    if let Some(ref cmd) = args.command {
        return match cmd {
            Commands::Mcp => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                let config = load_config(&cwd, args.config.as_deref())?;
                promptgrade::mcp::run_mcp_server(&config)?;
                Ok(ExitCode::SUCCESS)
            }
            Commands::Init { threshold, dir } => run_init(*threshold, dir.as_deref()),
            Commands::Examples { json } => run_examples(*json),
        };
    }

    let input = match (&args.text, &args.path) {
        (Some(text), _) => Input::Text(text.clone()),
        (None, Some(path)) if path.as_os_str() == STDIN_LABEL => Input::Stdin,
        (None, Some(path)) => Input::Path(path.clone()),
        (None, None) => anyhow::bail!("Provide a prompt file, a directory, `-` or --text"),
    };

    // Resolve work directory for config search
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let work_dir = match input {
        Input::Path(ref path) if path.is_file() => path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.clone()),
        Input::Path(ref path) if path.is_dir() => path.clone(),
        _ => cwd.clone(),
    };

    // Load config (CLI flags override config file)
    let config = load_config(&work_dir, args.config.as_deref())?.merge_with_cli(
        args.threshold,
        args.max_length,
        args.seed,
    );

    if args.watch {
        return match input {
            Input::Path(ref path) => run_watch(&args, &config, path),
            _ => anyhow::bail!("--watch needs a prompt file or directory"),
        };
    }

    let grader = Grader::new(&config, args.enhance);

    let (results, had_errors) = match input {
        Input::Text(ref text) => (vec![grader.grade(TEXT_LABEL, text.trim(), 0)?], false),
        Input::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read prompt from stdin")?;
            (vec![grader.grade(STDIN_LABEL, text.trim(), 0)?], false)
        }
        Input::Path(ref path) => {
            let ignore_set = if config.ignore.is_empty() {
                None
            } else {
                Some(build_ignore_set(&config.ignore)?)
            };
            let patterns = config.get_prompt_patterns();
            let files = collect_prompt_files(path, ignore_set.as_ref(), &patterns)?;

            if files.is_empty() {
                eprintln!("{}: No prompt files found", "Warning".yellow());
                return Ok(ExitCode::from(2));
            }

            // Set up parallel processing
            if let Some(jobs) = args.jobs {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(jobs)
                    .build_global()
                    .ok();
            }

            if args.parallel || files.len() > 10 {
                grade_files_parallel(&grader, &files, args.quiet)
            } else {
                grade_files_sequential(&grader, &files, args.quiet)
            }
        }
    };

    if results.is_empty() {
        eprintln!("{}: All files failed to analyze", "Error".red());
        return Ok(ExitCode::from(2));
    }

    let stats = PromptAnalyzer::aggregate_stats(&results);

    // Output results
    if args.json {
        let reporter = JsonReporter::new().pretty();
        if results.len() == 1 {
            println!("{}", reporter.report(&results[0]));
        } else {
            println!("{}", reporter.report_with_summary(&results, &stats));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for result in &results {
            reporter.report_quiet(result);
        }
    } else {
        let mut reporter = ConsoleReporter::new().with_lexicon(config.lexicon());
        if args.verbose {
            reporter = reporter.verbose();
        }

        if results.len() == 1 {
            reporter.report(&results[0]);
        } else {
            reporter.report_many(&results, &stats);
        }
    }

    // Check threshold (config or CLI)
    if let Some(threshold) = config.threshold {
        let score = if results.len() == 1 {
            results[0].report.total_score
        } else {
            stats.average_score
        };

        if score < threshold {
            if !args.quiet && !args.json {
                eprintln!(
                    "\n{}: Score {} is below threshold {}",
                    "Failed".red().bold(),
                    score,
                    threshold
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    if had_errors {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_init(threshold: Option<u8>, dir: Option<&Path>) -> Result<ExitCode> {
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
    std::fs::write(&config_path, starter_config(threshold_value))
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {} with threshold={}",
        "Done".green().bold(),
        config_path.display(),
        threshold_value
    );
    Ok(ExitCode::SUCCESS)
}

fn run_examples(json: bool) -> Result<ExitCode> {
    let examples = promptgrade::showcase::examples();
    if json {
        println!("{}", JsonReporter::new().pretty().render(examples));
    } else {
        ConsoleReporter::new().report_examples(examples);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_watch(args: &Args, config: &Config, path: &Path) -> Result<ExitCode> {
    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };
    let patterns = config.get_prompt_patterns();
    let grader = Grader::new(config, args.enhance);
    let mut reporter = ConsoleReporter::new().with_lexicon(config.lexicon());
    if args.verbose {
        reporter = reporter.verbose();
    }

    let watcher = PromptWatcher::watch(path, &patterns).context("Failed to create file watcher")?;
    eprintln!("{}: Watching for changes... (Ctrl+C to stop)", "Info".blue());

    loop {
        let paths = watcher.next_changes();
        let filtered = paths.into_iter().filter(|p| {
            ignore_set
                .as_ref()
                .map(|set| !is_ignored(p, set))
                .unwrap_or(true)
        });
        for (index, path) in filtered.enumerate() {
            match grader.grade_file(&path, index) {
                Ok(result) => {
                    if args.quiet {
                        reporter.report_quiet(&result);
                    } else {
                        reporter.report(&result);
                    }
                }
                Err(e) => {
                    eprintln!("{}: {}: {:#}", "Error".red(), path.display(), e);
                }
            }
        }
    }
}

/// A file given directly is always analyzed; directories are walked for prompt files.
fn collect_prompt_files(
    path: &Path,
    ignore_set: Option<&globset::GlobSet>,
    patterns: &[&str],
) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        if let Some(set) = ignore_set {
            if is_ignored(path, set) {
                return Ok(vec![]);
            }
        }
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
    {
        let file_path = entry.path();
        if !entry.file_type().is_file() || !is_prompt_file(file_path, patterns) {
            continue;
        }
        if let Some(set) = ignore_set {
            if is_ignored(file_path, set) {
                continue;
            }
        }
        files.push(file_path.to_path_buf());
    }

    // Sort for consistent output
    files.sort();

    Ok(files)
}

fn grade_files_sequential(
    grader: &Grader,
    files: &[PathBuf],
    quiet: bool,
) -> (Vec<FileReport>, bool) {
    let mut results = Vec::new();
    let mut had_errors = false;

    for (index, file) in files.iter().enumerate() {
        match grader.grade_file(file, index) {
            Ok(result) => results.push(result),
            Err(e) => {
                if !quiet {
                    eprintln!(
                        "{}: Failed to analyze {}: {:#}",
                        "Error".red(),
                        file.display(),
                        e
                    );
                }
                had_errors = true;
            }
        }
    }

    (results, had_errors)
}

fn grade_files_parallel(grader: &Grader, files: &[PathBuf], quiet: bool) -> (Vec<FileReport>, bool) {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    let had_errors = AtomicBool::new(false);

    // Indexed collect keeps the sorted file order
    let results: Vec<FileReport> = files
        .par_iter()
        .enumerate()
        .filter_map(|(index, file)| match grader.grade_file(file, index) {
            Ok(result) => Some(result),
            Err(e) => {
                had_errors.store(true, Ordering::Relaxed);
                if !quiet {
                    eprintln!(
                        "{}: Failed to analyze {}: {:#}",
                        "Error".red(),
                        file.display(),
                        e
                    );
                }
                None
            }
        })
        .collect();

    (results, had_errors.load(Ordering::Relaxed))
}
