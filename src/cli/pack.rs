//! Scan targets and write the header and chunk parts

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use super::utils::{parse_csv, parse_repeated_csv};
use crate::chunk::{pack_files, ChunkSink, DirectorySink, PackTotals, WriterSink};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{Config, FilterConfig, DEFAULT_OUTPUT_DIR};
use crate::render::{tree_renderer_for, PromptHeader, TreeMode};
use crate::scan::{collect_eligible, describe_patterns, parse_target};
use crate::utils::{clean_label, display_path, resolve_path};
use tracing::warn;

/// Target value that removes the output directory instead of scanning.
const CLEAR_TARGET: &str = "clear";

#[derive(Args)]
pub struct PackArgs {
    /// Targets: 'path' or 'path:pattern1,pattern2', or 'clear' to remove the output directory
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Directory to print a filtered tree from
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub tree_dir: Option<PathBuf>,

    /// Directory to print a full tree from
    #[arg(short = 't', long = "tree", value_name = "DIR")]
    pub full_tree_dir: Option<PathBuf>,

    /// Include scanned file list in 000.txt
    #[arg(short = 'f', long)]
    pub files: bool,

    /// Ignore masks (glob). Can be repeated or comma-separated
    #[arg(short = 'i', long, value_name = "MASKS")]
    pub ignore: Vec<String>,

    /// Comma-separated extensions to ignore
    #[arg(short = 'm', long, value_name = "EXTS")]
    pub miss: Option<String>,

    /// Comma-separated extensions to include
    #[arg(short = 'o', long, value_name = "EXTS")]
    pub only: Option<String>,

    /// Separate files into chunks of N*1000 lines (default 10)
    #[arg(short = 's', long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub sep: Option<u32>,

    /// Use 'git ls-files' as the file universe
    #[arg(long)]
    pub git: bool,

    /// Write all output to stdout instead of the output directory
    #[arg(long)]
    pub stdout: bool,

    /// Do not write contents; print a summary then exit
    #[arg(long = "dry")]
    pub dry_run: bool,

    /// Less console noise
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to config file (defaults to ./vibe.toml when present)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory for chunk files
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

pub fn run(args: PackArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let cwd = cwd.canonicalize().unwrap_or(cwd);

    if args.targets.iter().any(|t| t == CLEAR_TARGET) {
        let output_dir = clear_target_dir(&cwd, &args);
        return super::clear::run(&resolve_path(&cwd, &output_dir), &output_dir);
    }

    let file_config = load_config(&cwd, args.config.as_deref())?;
    let cli_overrides = CliOverrides {
        output_dir: args.output_dir.clone(),
        chunk_multiplier: args.sep,
        include_file_list: args.files.then_some(true),
        use_git: args.git.then_some(true),
        quiet: args.quiet.then_some(true),
        ignore_masks: parse_repeated_csv(&args.ignore),
        exclude_extensions: parse_csv(&args.miss),
        only_extensions: parse_csv(&args.only),
    };
    let config = merge_cli_with_config(file_config, cli_overrides);
    let output_dir = resolve_path(&cwd, &config.output_dir);

    let filter = FilterConfig::from_config(&config);
    let renderer = tree_renderer_for(&config, &filter);
    let render_tree = |dir: &Path, mode: TreeMode| {
        renderer.render_labeled(&resolve_path(&cwd, dir), &clean_label(dir), mode)
    };
    let tree_lines = args.tree_dir.as_deref().map(|dir| render_tree(dir, TreeMode::Filtered));
    let full_tree_lines = args.full_tree_dir.as_deref().map(|dir| render_tree(dir, TreeMode::Full));

    let files = collect_targets(&args.targets, &cwd, &config, &filter);

    if args.dry_run {
        print_dry_run(&files, &cwd, tree_lines.as_deref(), full_tree_lines.as_deref());
        return Ok(());
    }

    let header = PromptHeader {
        prompt: config.prompt_text(),
        files: config.include_file_list.then_some(files.as_slice()),
        tree: tree_lines.as_deref(),
        full_tree: full_tree_lines.as_deref(),
        display_base: &cwd,
    };

    let totals = if args.stdout {
        let mut sink = WriterSink::new(std::io::stdout());
        write_parts(&mut sink, &header, &files, config.max_lines(), &cwd)?
    } else {
        let mut sink = DirectorySink::recreate(&output_dir)?;
        write_parts(&mut sink, &header, &files, config.max_lines(), &cwd)
            .with_context(|| format!("Failed to write chunks to {}", sink.dir().display()))?
    };

    print_summary(&files, &totals, &cwd);
    Ok(())
}

/// Output directory for `clear`; an unloadable config falls back to the default.
fn clear_target_dir(cwd: &Path, args: &PackArgs) -> PathBuf {
    if let Some(dir) = &args.output_dir {
        return dir.clone();
    }
    match load_config(cwd, args.config.as_deref()) {
        Ok(config) => config.output_dir,
        Err(err) => {
            warn!("Ignoring config for clear: {err}");
            PathBuf::from(DEFAULT_OUTPUT_DIR)
        }
    }
}

/// Eligible files across all targets (default `.`), sorted and deduplicated.
fn collect_targets(
    targets: &[String],
    cwd: &Path,
    config: &Config,
    filter: &FilterConfig,
) -> Vec<PathBuf> {
    let default_targets = [".".to_string()];
    let targets = if targets.is_empty() { &default_targets[..] } else { targets };

    let specs: Vec<_> = targets.iter().map(|t| parse_target(t, cwd)).collect();
    if !config.quiet {
        for spec in &specs {
            println!(
                "Scanning {} with patterns: {}",
                spec.directory.display(),
                describe_patterns(spec)
            );
        }
    }
    collect_eligible(&specs, filter, config.use_git)
}

fn write_parts<S: ChunkSink>(
    sink: &mut S,
    header: &PromptHeader<'_>,
    files: &[PathBuf],
    max_lines: usize,
    cwd: &Path,
) -> Result<PackTotals> {
    sink.write_part(0, &header.render())?;
    Ok(pack_files(files, max_lines, cwd, sink)?)
}

fn print_dry_run(
    files: &[PathBuf],
    cwd: &Path,
    tree_lines: Option<&[String]>,
    full_tree_lines: Option<&[String]>,
) {
    println!("Files: {}", files.len());
    for path in files {
        println!("- {}", display_path(path, cwd));
    }
    if let Some(lines) = tree_lines.filter(|l| !l.is_empty()) {
        println!("\nTree (filtered):\n");
        println!("{}", lines.join("\n"));
    }
    if let Some(lines) = full_tree_lines.filter(|l| !l.is_empty()) {
        println!("\nTree (full):\n");
        println!("{}", lines.join("\n"));
    }
}

fn print_summary(files: &[PathBuf], totals: &PackTotals, cwd: &Path) {
    println!();
    println!("--- Scan summary ---");
    println!("Files scanned: {}", files.len());
    println!("Total lines:   {}", totals.lines);
    println!("Total bytes:   {}", totals.bytes);
    println!("Chunks written:{:>4}", totals.chunks);
    if !files.is_empty() {
        println!();
        println!("Files:");
        for path in files {
            println!("- {}", display_path(path, cwd));
        }
    }
}
