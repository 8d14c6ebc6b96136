//! vintage CLI - outline to vintage textbook conversion tool
//!
//! A command-line tool for turning plain-text outlines into styled HTML
//! ready to be printed or paginated into a PDF.

use clap::{ArgAction, Args, Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use vintage::{
    ContentType, DirectoryExporter, DocumentStatistics, ExportOutcome, Exporter, HtmlFileTarget,
    LoadOptions, RenderOptions, Vintage,
};

/// Plain-text outline to vintage textbook HTML
#[derive(Parser)]
#[command(
    name = "vintage",
    version,
    about = "Turn plain-text outlines into vintage textbook documents",
    long_about = "vintage - Outline to vintage textbook converter.\n\n\
                  Reads outlines written with '# ' title, '## ' chapter, '### ' section,\n\
                  '* ' bullet and **bold** markers, and writes styled HTML ready for PDF.\n\n\
                  Usage:\n  \
                  vintage <file>             Convert next to the input file\n  \
                  vintage html <file>        Print HTML to stdout\n  \
                  vintage stats <file>       Show document statistics\n  \
                  vintage preview <file>     Show the first lines of an outline"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (for default conversion)
    #[arg(global = false)]
    input: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one or more outlines to HTML files
    ///
    /// Each output is named after its input file: notes.txt becomes
    /// notes.html. Inputs sharing a name get a numeric suffix (notes_2.html).
    Convert {
        /// Input file paths
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Copy the result into this directory after rendering
        #[arg(long)]
        export: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Convert an outline to HTML
    Html {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Show outline statistics
    Stats {
        /// Input file path
        input: PathBuf,

        /// Output statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the first lines of an outline
    Preview {
        /// Input file path
        input: PathBuf,

        /// Number of lines to show
        #[arg(short = 'n', long, default_value_t = vintage::PREVIEW_LINES)]
        lines: usize,
    },

    /// Dump the classified outline as JSON
    Json {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

/// Options shared by the rendering commands
#[derive(Args, Clone, Default)]
struct StyleArgs {
    /// Cover title when the outline has no '# ' line (default: file name)
    #[arg(long)]
    title: Option<String>,

    /// Cover subtitle
    #[arg(long)]
    subtitle: Option<String>,

    /// Omit the table of contents
    #[arg(long)]
    no_contents: bool,

    /// Insert outline text without HTML escaping
    #[arg(long)]
    no_escape: bool,

    /// Replace invalid byte sequences instead of failing
    #[arg(long)]
    lenient: bool,
}

impl StyleArgs {
    fn builder(&self) -> Vintage {
        let mut options = RenderOptions::default();
        if let Some(ref subtitle) = self.subtitle {
            options = options.with_subtitle(subtitle.clone());
        }
        if self.no_contents {
            options = options.without_contents();
        }
        if self.no_escape {
            options = options.without_escaping();
        }

        let mut builder = Vintage::new().with_render_options(options);
        if let Some(ref title) = self.title {
            builder = builder.with_fallback_title(title.clone());
        }
        if self.lenient {
            builder = builder.with_load_options(LoadOptions::default().lenient());
        }
        builder
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(command) = cli.command else {
        // Default command: vintage <file>
        if let Some(input) = cli.input {
            let output = input
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            return run_convert(&[input], &output, None, &StyleArgs::default());
        }

        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Convert {
            inputs,
            output,
            export,
            style,
        } => {
            run_convert(&inputs, &output, export.as_ref(), &style)?;
        }

        Commands::Html {
            input,
            output,
            style,
        } => {
            let pb = create_spinner("Reading outline...");

            let loaded = style.builder().load(&input)?;
            pb.set_message("Generating HTML...");
            let html = loaded.to_html();

            pb.finish_and_clear();
            write_output(output.as_ref(), &html)?;

            if let Some(path) = output {
                println!(
                    "{} Converted to HTML: {}",
                    "✓".green().bold(),
                    path.display()
                );
            }
        }

        Commands::Stats { input, json } => {
            let stats = vintage::statistics(&input)?;
            let size = fs::metadata(&input)?.len();

            if json {
                let mut value = serde_json::to_value(stats)?;
                value["size_bytes"] = size.into();
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", "Document Statistics".cyan().bold());
                println!("{}", "─".repeat(40));
                println!(
                    "{}: {}",
                    "File".bold(),
                    input.file_name().unwrap_or_default().to_string_lossy()
                );
                println!("{}: {}", "Size".bold(), format_size(size));
                print_statistics(&stats);
            }
        }

        Commands::Preview { input, lines } => {
            let loaded = Vintage::new().load(&input)?;
            println!("{}", "Preview".cyan().bold());
            println!("{}", "─".repeat(40));
            println!("{}", vintage::preview(loaded.text(), lines));
        }

        Commands::Json {
            input,
            output,
            compact,
        } => {
            let loaded = Vintage::new().load(&input)?;

            let json = if compact {
                serde_json::to_string(loaded.outline())?
            } else {
                serde_json::to_string_pretty(loaded.outline())?
            };

            write_output(output.as_ref(), &json)?;
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

/// Convert outlines into the output directory, optionally exporting them
///
/// Outputs are named after their inputs whether one or many are given.
fn run_convert(
    inputs: &[PathBuf],
    output: &PathBuf,
    export: Option<&PathBuf>,
    style: &StyleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let builder = style.builder();
    let target = HtmlFileTarget::new(output);

    if let [input] = inputs {
        let pb = create_spinner("Reading outline...");

        let loaded = builder.load(input)?;
        pb.set_message("Generating HTML...");
        let path = loaded.render_as(&target, &vintage::output_names(inputs)[0])?;

        pb.finish_and_clear();

        println!("{}", "Conversion Complete".green().bold());
        println!("{}", "─".repeat(40));
        println!("{}: {}", "Title".bold(), loaded.title());
        println!("{}: {}", "Output".bold(), path.display());

        if let Some(dir) = export {
            export_file(&path, dir)?;
        }

        println!("\n{}", "Document Statistics".cyan().bold());
        println!("{}", "─".repeat(40));
        print_statistics(&loaded.statistics());
        return Ok(());
    }

    let pb = create_spinner(&format!("Converting {} outlines...", inputs.len()));
    let results = builder.convert_batch(inputs, &target);
    pb.finish_and_clear();

    let mut failed = 0;
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(path) => {
                println!("  {} {}", "✓".green(), path.display());
                if let Some(dir) = export {
                    export_file(&path, dir)?;
                }
            }
            Err(e) => {
                failed += 1;
                println!("  {} {}: {}", "✗".red(), input.display(), e);
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} outlines failed", failed, inputs.len()).into());
    }
    Ok(())
}

fn export_file(path: &PathBuf, dir: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    match DirectoryExporter::new(dir).export(path, ContentType::Html)? {
        ExportOutcome::Exported(saved) => {
            println!("{}: {}", "Exported".bold(), saved.display());
        }
        ExportOutcome::Cancelled => {
            println!("{} Export cancelled", "!".yellow().bold());
        }
    }
    Ok(())
}

fn print_statistics(stats: &DocumentStatistics) {
    println!("{}: {}", "Lines".bold(), stats.lines);
    println!("{}: {}", "Chapters".bold(), stats.chapters);
    println!("{}: {}", "Sections".bold(), stats.sections);
    println!("{}: {}", "Bullets".bold(), stats.bullets);
}

fn format_size(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

fn print_version() {
    println!("{} {}", "vintage".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Plain-text outlines to vintage textbook HTML");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
