use std::io::{self, Write as _};
use std::process::ExitCode;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;
use uast_errors::{Diagnostic, Renderer};
use uast_inputs::SourceFile;
use uast_mapper::{Config, Strictness};
use uast_tree::Kind;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Maps Go source files to generic trees.
#[derive(Parser)]
#[command(version)]
struct Options {
    /// Go files to map, `-` reads standard input.
    #[arg(required_unless_present = "kinds")]
    paths: Vec<Utf8PathBuf>,
    /// Print the native syntax tree instead of the generic tree.
    #[arg(short, long)]
    dump_ast: bool,
    /// Print the generic tree as an indented dump instead of JSON.
    #[arg(short, long)]
    text: bool,
    /// Keep going on text the tree does not account for.
    #[arg(long)]
    relaxed: bool,
    /// Print every node kind and exit.
    #[arg(short, long)]
    kinds: bool,
}

impl Options {
    fn config(&self) -> Config {
        let strictness = if self.relaxed { Strictness::Relaxed } else { Strictness::Strict };
        Config { strictness }
    }
}

enum Report {
    Output(String),
    Failed(String),
}

fn main() -> anyhow::Result<ExitCode> {
    let options = Options::parse();
    init_logging();

    let mut stdout = io::stdout().lock();
    if options.kinds {
        for kind in Kind::ALL {
            writeln!(stdout, "{}", kind.as_str())?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let reports = options.paths.par_iter().map(|path| run(path, &options)).collect::<Vec<_>>();

    let mut failed = false;
    for report in reports {
        match report {
            Ok(Report::Output(output)) => writeln!(stdout, "{output}")?,
            Ok(Report::Failed(diagnostic)) => {
                failed = true;
                eprintln!("{diagnostic}");
            }
            Err(error) => {
                failed = true;
                eprintln!("error: {error:#}");
            }
        }
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("UAST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn run(path: &Utf8Path, options: &Options) -> anyhow::Result<Report> {
    let file = SourceFile::read(path).with_context(|| format!("failed to read `{path}`"))?;

    let renderer = Renderer::styled();
    let render = |diagnostic: &Diagnostic| {
        diagnostic.render(&renderer, file.path().as_str(), file.text()).to_string()
    };

    let ast = match uast_parse::parse(file.text()) {
        Ok(ast) => ast,
        Err(diagnostic) => return Ok(Report::Failed(render(&diagnostic))),
    };
    if options.dump_ast {
        return Ok(Report::Output(format!("{ast:#?}")));
    }

    let uast = match uast_mapper::map_file(&file, &ast, options.config()) {
        Ok(uast) => uast,
        Err(error) => {
            tracing::debug!(%path, %error, "mapping failed");
            return Ok(Report::Failed(render(&error.to_diagnostic())));
        }
    };

    let output = if options.text {
        uast.tree.dump()
    } else {
        uast.document().to_json().with_context(|| format!("failed to serialize `{path}`"))?
    };
    Ok(Report::Output(output))
}
