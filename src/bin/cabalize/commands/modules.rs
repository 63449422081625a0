//! `cabalize modules` command
//!
//! Prints every target with the modules that would be listed for it.

use std::fmt::Write;

use anyhow::Result;

use crate::cli::ModulesArgs;
use cabalize::core::module::ModuleName;
use cabalize::core::package::Package;
use cabalize::ops::generate::resolve_package;
use cabalize::util::GlobalContext;

use super::manifest_path;

fn push_modules(out: &mut String, label: &str, modules: &[ModuleName]) {
    writeln!(out, "  {}:", label).unwrap();
    if modules.is_empty() {
        writeln!(out, "    (none)").unwrap();
    }
    for module in modules {
        writeln!(out, "    {}", module).unwrap();
    }
}

/// Format the module listing for a resolved package.
pub fn format_modules(package: &Package) -> String {
    let mut out = String::new();

    if let Some(library) = &package.library {
        writeln!(out, "library").unwrap();
        push_modules(&mut out, "exposed-modules", &library.modules.exposed_modules);
        push_modules(&mut out, "other-modules", &library.modules.other_modules);
    }

    for (kind, targets) in [("executable", &package.executables), ("test-suite", &package.tests)] {
        for target in targets {
            writeln!(out, "{} {} (main: {})", kind, target.name, target.main).unwrap();
            push_modules(&mut out, "other-modules", &target.other_modules);
        }
    }

    out
}

pub fn execute(ctx: &GlobalContext, args: ModulesArgs) -> Result<()> {
    let manifest_path = manifest_path(ctx, args.manifest_path)?;
    let root = manifest_path.parent().unwrap_or(ctx.cwd());
    let config = ctx.config(root);

    let package = resolve_package(&manifest_path, &config.assemble_options())?;
    tracing::debug!("resolved {}", package);

    print!("{}", format_modules(&package));
    Ok(())
}
