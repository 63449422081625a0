//! `cabalize generate` command

use anyhow::Result;

use crate::cli::GenerateArgs;
use cabalize::ops::generate::{generate, GenerateOptions, OutputFormat};
use cabalize::util::GlobalContext;

use super::manifest_path;

/// Translate command-line arguments into generate options.
fn options(args: &GenerateArgs) -> GenerateOptions {
    GenerateOptions {
        format: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Cabal
        },
        output: args.output.clone(),
        to_stdout: args.stdout,
        ..Default::default()
    }
}

pub fn execute(ctx: &GlobalContext, args: GenerateArgs) -> Result<()> {
    let manifest_path = manifest_path(ctx, args.manifest_path.clone())?;
    let root = manifest_path.parent().unwrap_or(ctx.cwd());

    // Config supplies rendering and assembly settings
    let config = ctx.config(root);
    let opts = GenerateOptions {
        render: config.render_options(),
        assemble: config.assemble_options(),
        ..options(&args)
    };

    let result = generate(&manifest_path, &opts)?;

    match result.written {
        Some(path) => eprintln!("   Generated {} ({})", result.package, path.display()),
        None => print!("{}", result.contents),
    }

    Ok(())
}
