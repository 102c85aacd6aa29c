use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use caller_codegen_lib::generate_sources;
use caller_ir::CallerConfig;
use caller_parser::{run_pass, CancelToken, TypeUniverse};

mod sources;

#[derive(Parser)]
#[command(name = "caller-codegen")]
#[command(about = "Generate caller code from service declarations")]
struct Args {
    /// Input source file or directory
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Global base address applied to services without an override
    #[arg(short, long)]
    base_address: Option<String>,

    /// Caller name (defaults to "Default")
    #[arg(short, long)]
    name: Option<String>,

    /// Also write the assembled bundle as caller.json
    #[arg(long)]
    bundle_json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("📖 Reading sources: {}", args.input.display());
    let sources = sources::collect(&args.input)?;

    println!("🔍 Scanning {} files...", sources.len());
    let universe = TypeUniverse::from_sources(sources.iter().map(String::as_str))
        .map_err(|e| anyhow::anyhow!("failed to parse input source: {e}"))?;

    let config = CallerConfig {
        name: args.name,
        base_address: args.base_address,
    };
    let outcome = run_pass(&universe, config, &CancelToken::new());

    for diagnostic in outcome.diagnostics.iter() {
        eprintln!("{diagnostic}");
    }

    println!(
        "🎨 Generating callers for {} services...",
        outcome.bundle.services.len()
    );
    let files = generate_sources(&outcome.bundle)?;

    println!("💾 Writing to: {}", args.output.display());
    std::fs::create_dir_all(&args.output)?;
    for file in &files {
        std::fs::write(args.output.join(&file.path), &file.content)?;
    }
    if args.bundle_json {
        let json = serde_json::to_string_pretty(&outcome.bundle)?;
        std::fs::write(args.output.join("caller.json"), json)?;
    }

    println!("✅ Done!");
    Ok(())
}
