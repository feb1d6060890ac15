use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "vsml", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a document into an operation graph.
    Compile(CompileArgs),
    /// Print the stable fingerprint of a document's graph.
    Fingerprint(FingerprintArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Dump,
    Json,
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Dump)]
    format: Format,

    /// Compile sibling subtrees in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct FingerprintArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Fingerprint(args) => cmd_fingerprint(args),
    }
}

fn compile(in_path: &Path, opts: vsml::CompileOpts) -> anyhow::Result<vsml::RenderGraph> {
    let doc = vsml::Document::from_path(in_path)?;
    let base = in_path.parent().unwrap_or_else(|| Path::new("."));
    let graph = vsml::compile_document(&doc, base, opts)
        .with_context(|| format!("compile '{}'", in_path.display()))?;
    Ok(graph)
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let graph = compile(
        &args.in_path,
        vsml::CompileOpts {
            parallel: args.parallel,
            threads: args.threads,
        },
    )?;

    let kind = match args.format {
        Format::Dump => vsml::BackendKind::Dump,
        Format::Json => vsml::BackendKind::Json,
    };
    let text = vsml::create_backend(kind).lower(&graph)?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, text).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn cmd_fingerprint(args: FingerprintArgs) -> anyhow::Result<()> {
    let graph = compile(&args.in_path, vsml::CompileOpts::default())?;
    println!("{}", graph.fingerprint());
    Ok(())
}
