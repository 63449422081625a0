//! Render a resolved [`Package`] as a `.cabal` file or JSON.

use std::fmt::Write;

use anyhow::{Context, Result};

use crate::core::package::{BuildSettings, Executable, Package};

/// Options controlling `.cabal` output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Indentation of fields inside a stanza.
    pub indent: usize,
    /// Value of the `cabal-version` field.
    pub cabal_version: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent: 2,
            cabal_version: ">= 1.10".to_string(),
        }
    }
}

/// Accumulates the fields of one section.
struct Stanza {
    indent: String,
    out: String,
}

impl Stanza {
    fn new(indent: usize) -> Self {
        Stanza {
            indent: " ".repeat(indent),
            out: String::new(),
        }
    }

    fn field(&mut self, name: &str, value: Option<&str>) {
        let Some(value) = value else { return };
        let mut lines = value.lines();
        let first = lines.next().unwrap_or_default();
        writeln!(self.out, "{}{}: {}", self.indent, name, first).unwrap();
        for line in lines {
            let line = if line.trim().is_empty() { "." } else { line };
            writeln!(self.out, "{}  {}", self.indent, line).unwrap();
        }
    }

    fn list<S: AsRef<str>>(&mut self, name: &str, values: &[S]) {
        if values.is_empty() {
            return;
        }
        writeln!(self.out, "{}{}:", self.indent, name).unwrap();
        for value in values {
            writeln!(self.out, "{}    {}", self.indent, value.as_ref()).unwrap();
        }
    }

    fn inline<S: AsRef<str>>(&mut self, name: &str, values: &[S]) {
        if values.is_empty() {
            return;
        }
        let joined: Vec<&str> = values.iter().map(AsRef::as_ref).collect();
        writeln!(self.out, "{}{}: {}", self.indent, name, joined.join(" ")).unwrap();
    }

    fn dependencies(&mut self, groups: &[Vec<String>]) {
        for group in groups {
            writeln!(self.out, "{}build-depends:", self.indent).unwrap();
            for (i, dep) in group.iter().enumerate() {
                let sep = if i == 0 { "  " } else { ", " };
                writeln!(self.out, "{}  {}{}", self.indent, sep, dep).unwrap();
            }
        }
    }

    fn build_info(&mut self, settings: &BuildSettings) {
        self.dependencies(&settings.dependencies);
        self.inline("ghc-options", &settings.ghc_options);
        self.inline("default-extensions", &settings.default_extensions);
        self.field("default-language", Some("Haskell2010"));
    }
}

/// Render the package as a `.cabal` file.
pub fn render_cabal(pkg: &Package, opts: &RenderOptions) -> String {
    let mut header = Stanza::new(0);
    header.field("name", Some(pkg.name.as_str()));
    header.field("version", Some(pkg.version.as_str()));
    header.field("synopsis", pkg.synopsis.as_deref());
    header.field("description", pkg.description.as_deref());
    header.field("category", pkg.category.as_deref());
    header.field("homepage", pkg.homepage.as_deref());
    header.field("bug-reports", pkg.bug_reports.as_deref());
    header.field("author", pkg.author.as_deref());
    header.field("maintainer", pkg.maintainer.as_deref());
    header.field("copyright", pkg.copyright.as_deref());
    header.field("license", pkg.license.as_deref());
    header.field("license-file", pkg.license_file.as_deref());
    header.field("build-type", Some("Simple"));
    header.field("cabal-version", Some(opts.cabal_version.as_str()));

    let mut sections = vec![header.out];

    if let Some(repo) = &pkg.source_repository {
        let mut stanza = Stanza::new(opts.indent);
        stanza.field("type", Some("git"));
        stanza.field("location", Some(repo.as_str()));
        sections.push(format!("source-repository head\n{}", stanza.out));
    }

    if let Some(library) = &pkg.library {
        let mut stanza = Stanza::new(opts.indent);
        stanza.list("hs-source-dirs", &library.settings.source_dirs);
        stanza.list("exposed-modules", &library.modules.exposed_modules);
        stanza.list("other-modules", &library.modules.other_modules);
        stanza.build_info(&library.settings);
        sections.push(format!("library\n{}", stanza.out));
    }

    for exe in &pkg.executables {
        sections.push(render_executable("executable", exe, None, opts));
    }

    for test in &pkg.tests {
        sections.push(render_executable(
            "test-suite",
            test,
            Some("exitcode-stdio-1.0"),
            opts,
        ));
    }

    sections.join("\n")
}

fn render_executable(
    kind: &str,
    exe: &Executable,
    test_type: Option<&str>,
    opts: &RenderOptions,
) -> String {
    let mut stanza = Stanza::new(opts.indent);
    stanza.field("type", test_type);
    stanza.field("main-is", Some(exe.main.as_str()));
    stanza.list("hs-source-dirs", &exe.settings.source_dirs);
    stanza.list("other-modules", &exe.other_modules);
    stanza.build_info(&exe.settings);
    format!("{} {}\n{}", kind, exe.name, stanza.out)
}

/// Render the package as pretty-printed JSON.
pub fn render_json(pkg: &Package) -> Result<String> {
    serde_json::to_string_pretty(pkg).context("failed to serialize package")
}
