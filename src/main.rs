use chrono::Local;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use streamlens::{Dashboard, DashboardParams};

#[derive(Parser, Debug)]
#[command(name = "streamlens")]
#[command(author, version, about = "Explore a streaming catalog: content mix, release timing, genre clusters, sentiment")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Catalog CSV to analyze
    path: Option<PathBuf>,

    /// Restrict to these content types (comma-separated, default: all)
    #[arg(short, long)]
    types: Option<String>,

    /// Output report file (.html, .json, .csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for auto-generated reports
    #[arg(long, default_value = "streamlens-reports")]
    report_dir: PathBuf,

    /// Don't auto-generate an HTML report
    #[arg(long)]
    no_report: bool,

    /// Don't prompt to open the report
    #[arg(long)]
    no_open: bool,

    /// Print every aggregation table, not just the headline ones
    #[arg(short, long)]
    verbose: bool,

    /// Only show the summary line
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive web dashboard
    Serve {
        /// Catalog CSV to serve
        path: PathBuf,

        /// Port to listen on
        #[arg(short, long, default_value = "3001")]
        port: u16,
    },
}

fn main() {
    let args = Args::parse();

    if let Some(Command::Serve { path, port }) = args.command {
        if let Err(e) = streamlens::serve::start(port, path) {
            eprintln!("Server error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let path = match args.path.clone() {
        Some(p) => p,
        None => {
            eprintln!("Usage: streamlens <CATALOG.csv>");
            eprintln!("Run 'streamlens --help' for more options.");
            std::process::exit(1);
        }
    };

    let params = DashboardParams {
        types: args.types.as_deref().map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect()
        }),
    };

    if !args.quiet {
        eprintln!("\x1b[1mStreamlens - Catalog Dashboard\x1b[0m");
        eprintln!("{}", "─".repeat(70));
    }

    // Clustering and sentiment dominate the run on big catalogs; show a
    // spinner rather than guessing at row counts up front.
    let spinner = if !args.quiet {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("static template"),
        );
        pb.set_message(format!("analyzing {}", path.display()));
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    } else {
        None
    };

    let dashboard = match Dashboard::build(&path, &params) {
        Ok(dashboard) => dashboard,
        Err(e) => {
            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    print_summary(&dashboard, args.verbose, args.quiet);

    // Determine report path
    let report_path = if let Some(ref output) = args.output {
        Some(output.clone())
    } else if !args.no_report {
        // Auto-generate report
        std::fs::create_dir_all(&args.report_dir).ok();
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("streamlens_report_{}.html", timestamp);
        Some(args.report_dir.join(filename))
    } else {
        None
    };

    // Generate report
    if let Some(ref output_path) = report_path {
        if let Err(e) = streamlens::report::generate(output_path, &dashboard) {
            eprintln!("Failed to write report: {}", e);
            std::process::exit(1);
        }
        if !args.quiet {
            eprintln!("\n\x1b[32mReport saved: {}\x1b[0m", output_path.display());
        }

        // Open report
        if !args.no_open && !args.quiet {
            eprint!("\nOpen report in browser? [Y/n] ");
            io::stderr().flush().ok();

            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_ok() {
                let input = input.trim().to_lowercase();
                if input.is_empty() || input == "y" || input == "yes" {
                    if let Err(e) = open::that(output_path) {
                        eprintln!("Failed to open report: {}", e);
                    }
                }
            }
        }
    }

    if !args.quiet {
        eprintln!("\n\x1b[90mAnalysis complete.\x1b[0m");
    }
}

fn print_summary(dashboard: &Dashboard, verbose: bool, quiet: bool) {
    if quiet {
        eprintln!(
            "{} titles ({}), {} rows dropped",
            dashboard.total_titles,
            dashboard.selected_types.join(", "),
            dashboard.dropped_rows
        );
        return;
    }

    eprintln!(
        "Loaded {} title(s), selected types: {}",
        dashboard.total_titles,
        dashboard.selected_types.join(", ")
    );
    if dashboard.dropped_rows > 0 {
        eprintln!(
            "\x1b[33mDropped {} row(s) with unparseable dates\x1b[0m",
            dashboard.dropped_rows
        );
    }
    if let (Some(first), Some(last)) = (&dashboard.first_added, &dashboard.last_added) {
        eprintln!("Added between {} and {}", first, last);
    }

    print_table("Content types", &dashboard.type_counts);
    print_table("Top genres", &dashboard.top_genres);

    if verbose {
        print_table("Top countries", &dashboard.top_countries);
        print_table("Ratings", &dashboard.rating_counts);
        print_table("Top actors", &dashboard.top_actors);
        print_table("By calendar month", &dashboard.month_counts);

        eprintln!("\n\x1b[1mGenre clusters:\x1b[0m");
        for (i, (count, terms)) in dashboard
            .genre_clusters
            .counts
            .iter()
            .zip(&dashboard.genre_clusters.top_terms)
            .enumerate()
        {
            eprintln!(
                "  cluster {}  {:>6}  {}",
                i,
                count,
                truncate(&terms.join(", "), 40)
            );
        }

        eprintln!("\n\x1b[1mMean sentiment by rating:\x1b[0m");
        for entry in &dashboard.sentiment_by_rating {
            eprintln!("  {:<12} {:+.3}", entry.label, entry.mean);
        }
    }
}

fn print_table(title: &str, entries: &[streamlens::stats::CountEntry]) {
    eprintln!("\n\x1b[1m{}:\x1b[0m", title);
    for entry in entries {
        eprintln!("  {:<30} {:>6}", truncate(&entry.label, 30), entry.count);
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
