//! cabalize CLI - Generate Cabal package descriptions from package.toml

use anyhow::Result;
use cabalize::util::diagnostic::ManifestParseError;
use cabalize::GlobalContext;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    // Parse CLI
    let cli = Cli::parse();

    let mut ctx = match GlobalContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    };
    ctx.set_verbose(cli.verbose);
    ctx.set_color(!cli.no_color);

    init_logging(&ctx);

    if let Err(e) = run(&ctx, cli.command) {
        report_error(&ctx, e);
        std::process::exit(1);
    }
}

fn init_logging(ctx: &GlobalContext) {
    let filter = if ctx.is_verbose() {
        EnvFilter::new("cabalize=debug")
    } else {
        EnvFilter::new("cabalize=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(ctx.color())
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn report_error(ctx: &GlobalContext, e: anyhow::Error) {
    // Manifest syntax errors get the annotated source snippet
    match e.downcast::<ManifestParseError>() {
        Ok(diag) if ctx.color() => eprintln!("{:?}", miette::Report::new(diag)),
        Ok(diag) => eprintln!("error: {}", diag),
        Err(e) => eprintln!("error: {:#}", e),
    }
}

fn run(ctx: &GlobalContext, command: Commands) -> Result<()> {
    match command {
        Commands::Init(args) => commands::init::execute(ctx, args),
        Commands::Generate(args) => commands::generate::execute(ctx, args),
        Commands::Modules(args) => commands::modules::execute(ctx, args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
