//! pagewise - windowed pagination for item collections.
//!
//! Usage:
//!   pagewise window --total N [--page P] [--size S]   Show the page window
//!   pagewise controls --total N [--page P] [--size S] Show the control strip
//!   pagewise slice [FILE] [--page P] [--size S]       Page through lines of a file
//!   pagewise --help                                   Show help

use std::io::BufRead;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result, bail};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

use pagewise_core::{PagerConfig, PaginationDescriptor, compute_descriptor, load_config};
use pagewise_pager::{COMPONENT, Pager, PagerControls};

#[derive(Parser)]
#[command(
    name = "pagewise",
    version,
    about = "Windowed pagination for item collections",
    long_about = "pagewise computes which page numbers to show and which items belong \
                  to a page.\n\n\
                  Set RUST_LOG=debug to trace page requests."
)]
struct Cli {
    /// Pager configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone, Copy)]
struct PageArgs {
    /// Page number (defaults to the configured initial page)
    #[arg(short, long)]
    page: Option<usize>,

    /// Items per page (defaults to the configured page size)
    #[arg(short, long)]
    size: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the descriptor for one page
    Window {
        /// Total number of items
        #[arg(short, long)]
        total: usize,

        #[command(flatten)]
        page: PageArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the control strip for one page
    Controls {
        /// Total number of items
        #[arg(short, long)]
        total: usize,

        #[command(flatten)]
        page: PageArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Page through the lines of a file (stdin when omitted)
    Slice {
        /// Input file, one item per line
        input: Option<PathBuf>,

        #[command(flatten)]
        page: PageArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref())?;

    match cli.command {
        Command::Window {
            total,
            page,
            format,
        } => run_window(total, page, config, format),
        Command::Controls {
            total,
            page,
            format,
        } => run_controls(total, page, config, format),
        Command::Slice {
            input,
            page,
            format,
        } => run_slice(input.as_deref(), page, config, format),
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(path: Option<&Path>) -> Result<PagerConfig> {
    match path {
        Some(path) => {
            let config = load_config(path)?;
            tracing::debug!(path = %path.display(), ?config, "loaded config");
            Ok(config)
        }
        None => Ok(PagerConfig::default()),
    }
}

/// Apply `--size` on top of the file config and validate the result.
fn effective_config(mut config: PagerConfig, args: PageArgs) -> Result<PagerConfig> {
    if let Some(size) = args.size {
        config.page_size = Some(size);
    }
    config.validate(COMPONENT)?;
    Ok(config)
}

fn describe(total: usize, args: PageArgs, config: &PagerConfig) -> PaginationDescriptor {
    let page = args.page.or(config.initial_page);
    compute_descriptor(total, page, config.page_size, &config.window)
}

/// Print the descriptor for one page.
fn run_window(total: usize, args: PageArgs, config: PagerConfig, format: OutputFormat) -> Result<()> {
    let config = effective_config(config, args)?;
    let descriptor = describe(total, args, &config);

    match format {
        OutputFormat::Text => print_descriptor(&descriptor),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&descriptor)?),
    }

    Ok(())
}

/// Print the control strip for one page.
fn run_controls(total: usize, args: PageArgs, config: PagerConfig, format: OutputFormat) -> Result<()> {
    let config = effective_config(config, args)?;
    let descriptor = describe(total, args, &config);
    let controls = PagerControls::from_descriptor(&descriptor);

    match (format, controls) {
        (OutputFormat::Text, Some(controls)) => println!("{controls}"),
        (OutputFormat::Text, None) => println!("(single page)"),
        (OutputFormat::Json, controls) => {
            let controls: Vec<_> = controls.iter().flat_map(|c| c.iter().copied()).collect();
            println!("{}", serde_json::to_string_pretty(&controls)?);
        }
    }

    Ok(())
}

/// Load lines, mount a pager and print the requested page.
fn run_slice(
    input: Option<&Path>,
    args: PageArgs,
    config: PagerConfig,
    format: OutputFormat,
) -> Result<()> {
    let config = effective_config(config, args)?;
    let items = read_lines(input)?;
    tracing::debug!(items = items.len(), "loaded items");

    let selected = slice_page(items, args, config)?;

    match format {
        OutputFormat::Text => match &selected {
            Some((descriptor, shown)) => {
                print_descriptor(descriptor);
                println!();
                for line in shown {
                    println!("{line}");
                }
            }
            None => println!("(no items)"),
        },
        OutputFormat::Json => {
            let (descriptor, shown) = selected.unzip();
            let output = serde_json::json!({
                "descriptor": descriptor,
                "items": shown.unwrap_or_default(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Mount a pager on `items` at `--page` (or the initial page) and return
/// the descriptor with the emitted lines. `None` when there are no items.
fn slice_page(
    items: Vec<String>,
    args: PageArgs,
    config: PagerConfig,
) -> Result<Option<(PaginationDescriptor, Vec<String>)>> {
    if items.is_empty() {
        return Ok(None);
    }

    let initial_page = config.effective_initial_page();
    let mut shown: Vec<String> = Vec::new();
    let mut pager = Pager::new(items, config, |page: &[String]| shown = page.to_vec())?;

    let selected = match args.page {
        Some(page) => pager.mount_at(page),
        None => pager.mount(),
    };
    if !selected {
        let pages = pager.page_count();
        match args.page {
            Some(page) => bail!("Page {page} is out of range (1..={pages})"),
            None => bail!("Initial page {initial_page} exceeds {pages} pages"),
        }
    }

    let descriptor = pager.descriptor().cloned();
    drop(pager);
    Ok(descriptor.map(|descriptor| (descriptor, shown)))
}

fn read_lines(input: Option<&Path>) -> Result<Vec<String>> {
    match input {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(content.lines().map(str::to_string).collect())
        }
        None => std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .context("Failed to read stdin"),
    }
}

fn print_descriptor(d: &PaginationDescriptor) {
    println!("{}", "─".repeat(50));
    println!(" Page {} of {}", d.current_page, d.total_pages);
    let range = d.item_range();
    if range.is_empty() {
        println!(" No items on this page ({} total)", d.total_items);
    } else {
        println!(
            " Items {}-{} of {} ({} per page)",
            range.start + 1,
            range.end,
            d.total_items,
            d.page_size
        );
    }
    println!(" Window: {}", d.pages.iter().join(" "));
    println!("{}", "─".repeat(50));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_window_args() {
        let cli = Cli::parse_from(["pagewise", "window", "--total", "100", "-p", "4", "-s", "20"]);
        match cli.command {
            Command::Window { total, page, .. } => {
                assert_eq!(total, 100);
                assert_eq!(page.page, Some(4));
                assert_eq!(page.size, Some(20));
            }
            _ => panic!("expected window"),
        }
    }

    #[test]
    fn test_size_override_is_validated() {
        let args = PageArgs {
            page: None,
            size: Some(0),
        };
        assert!(effective_config(PagerConfig::default(), args).is_err());
    }

    fn lines_file(dir: &TempDir, lines: usize) -> PathBuf {
        let path = dir.path().join("items.txt");
        let content = (1..=lines).map(|i| format!("line {i}")).join("\n");
        fs::write(&path, content).unwrap();
        path
    }

    fn page_args(page: Option<usize>) -> PageArgs {
        PageArgs { page, size: None }
    }

    #[test]
    fn test_read_lines_from_file() {
        let dir = TempDir::new().unwrap();
        let path = lines_file(&dir, 3);
        let lines = read_lines(Some(&path)).unwrap();
        assert_eq!(lines, vec!["line 1", "line 2", "line 3"]);
    }

    #[test]
    fn test_read_lines_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(read_lines(Some(&dir.path().join("absent.txt"))).is_err());
    }

    #[test]
    fn test_slice_valid_page() {
        let dir = TempDir::new().unwrap();
        let items = read_lines(Some(&lines_file(&dir, 25))).unwrap();

        let (descriptor, shown) = slice_page(items, page_args(Some(3)), PagerConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(descriptor.current_page, 3);
        assert_eq!(descriptor.total_pages, 3);
        assert_eq!(shown, (21..=25).map(|i| format!("line {i}")).collect::<Vec<_>>());
    }

    #[test]
    fn test_slice_out_of_range_page() {
        let dir = TempDir::new().unwrap();
        let items = read_lines(Some(&lines_file(&dir, 25))).unwrap();

        let err = slice_page(items, page_args(Some(4)), PagerConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Page 4 is out of range (1..=3)");
    }

    #[test]
    fn test_slice_empty_file() {
        let dir = TempDir::new().unwrap();
        let items = read_lines(Some(&lines_file(&dir, 0))).unwrap();
        assert!(items.is_empty());
        assert!(slice_page(items, page_args(None), PagerConfig::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_slice_requested_page_with_unreachable_initial_page() {
        let dir = TempDir::new().unwrap();
        let items = read_lines(Some(&lines_file(&dir, 30))).unwrap();
        let config = PagerConfig::default().with_initial_page(5);

        let (descriptor, shown) = slice_page(items.clone(), page_args(Some(1)), config.clone())
            .unwrap()
            .unwrap();
        assert_eq!(descriptor.current_page, 1);
        assert_eq!(descriptor.total_pages, 3);
        assert_eq!(shown.len(), 10);

        let err = slice_page(items, page_args(None), config).unwrap_err();
        assert_eq!(err.to_string(), "Initial page 5 exceeds 3 pages");
    }

    #[test]
    fn test_describe_uses_configured_initial_page() {
        let config = PagerConfig::default().with_initial_page(3);
        let args = PageArgs {
            page: None,
            size: None,
        };
        assert_eq!(describe(100, args, &config).current_page, 3);
    }
}
