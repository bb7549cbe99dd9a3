use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hacfg_parser::ConfigDocument;

mod report;

#[derive(Parser)]
#[command(name = "hacfg")]
#[command(about = "Inspect sections of a rendered HAProxy configuration", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize every section found in the configuration
    Sections(FileArgs),

    /// Print the global section
    Global(FileArgs),

    /// Print the defaults section
    Defaults(FileArgs),

    /// Print one frontend by exact name
    Frontend(NamedArgs),

    /// Print one backend by exact name
    Backend(NamedArgs),

    /// Print every frontend whose name contains a substring
    Frontends(FilterArgs),

    /// Print every backend whose name contains a substring
    Backends(FilterArgs),
}

#[derive(Args)]
struct FileArgs {
    /// Path to the rendered configuration file
    config: PathBuf,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct NamedArgs {
    /// Path to the rendered configuration file
    config: PathBuf,

    /// Section name exactly as it appears on the header line
    name: String,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct FilterArgs {
    /// Path to the rendered configuration file
    config: PathBuf,

    /// Substring to match against section names (matches all when omitted)
    #[arg(default_value = "")]
    name_substr: String,

    /// Print matching names without their content
    #[arg(long)]
    names_only: bool,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Auto-enable quiet mode when --json is used (to keep stdout clean for JSON parsing)
    let json_output = match &cli.command {
        Commands::Sections(args) | Commands::Global(args) | Commands::Defaults(args) => args.json,
        Commands::Frontend(args) | Commands::Backend(args) => args.json,
        Commands::Frontends(args) | Commands::Backends(args) => args.json,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Sections(args) => run_sections(args)?,
        Commands::Global(args) => run_global(args)?,
        Commands::Defaults(args) => run_defaults(args)?,
        Commands::Frontend(args) => run_frontend(args)?,
        Commands::Backend(args) => run_backend(args)?,
        Commands::Frontends(args) => run_frontends(args)?,
        Commands::Backends(args) => run_backends(args)?,
    }

    Ok(())
}

fn load(config: &Path) -> Result<ConfigDocument> {
    let doc = hacfg_parser::parse_file(config)?;
    if doc.is_empty() {
        log::warn!("{}: no recognizable sections", config.display());
    }
    Ok(doc)
}

fn run_sections(args: FileArgs) -> Result<()> {
    let doc = load(&args.config)?;
    println!("{}", report::render_summary(&doc, args.json)?);
    Ok(())
}

fn run_global(args: FileArgs) -> Result<()> {
    let doc = load(&args.config)?;
    println!("{}", report::render_lines(&doc.global, args.json)?);
    Ok(())
}

fn run_defaults(args: FileArgs) -> Result<()> {
    let doc = load(&args.config)?;
    println!("{}", report::render_lines(&doc.defaults, args.json)?);
    Ok(())
}

fn run_frontend(args: NamedArgs) -> Result<()> {
    let doc = load(&args.config)?;
    let lines = doc.frontend(&args.name).ok_or_else(|| {
        anyhow::anyhow!("no frontend named {:?} in {}", args.name, args.config.display())
    })?;
    println!("{}", report::render_lines(lines, args.json)?);
    Ok(())
}

fn run_backend(args: NamedArgs) -> Result<()> {
    let doc = load(&args.config)?;
    let lines = doc.backend(&args.name).ok_or_else(|| {
        anyhow::anyhow!("no backend named {:?} in {}", args.name, args.config.display())
    })?;
    println!("{}", report::render_lines(lines, args.json)?);
    Ok(())
}

fn run_frontends(args: FilterArgs) -> Result<()> {
    let doc = load(&args.config)?;
    let matched = doc.frontends_matching(&args.name_substr);
    log::debug!("{} frontends match {:?}", matched.len(), args.name_substr);
    println!("{}", report::render_blocks("frontend", &matched, args.json, args.names_only)?);
    Ok(())
}

fn run_backends(args: FilterArgs) -> Result<()> {
    let doc = load(&args.config)?;
    let matched = doc.backends_matching(&args.name_substr);
    log::debug!("{} backends match {:?}", matched.len(), args.name_substr);
    println!("{}", report::render_blocks("backend", &matched, args.json, args.names_only)?);
    Ok(())
}
