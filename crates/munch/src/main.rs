use std::process::ExitCode;

use anyhow::Context as _;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use mimalloc::MiMalloc;
use munch::demo;
use munch_errors::Renderer;
use munch_parse::render;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(version, about = "Tokenize and parse source files of the demo language")]
struct Options {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Give up once the input nests deeper than this
    #[arg(long, global = true, default_value_t = munch_parse::DEFAULT_DEPTH_LIMIT)]
    depth_limit: usize,

    /// Give up once this many rules are being matched inside each other
    #[arg(long, global = true, default_value_t = munch_parse::DEFAULT_RECURSION_LIMIT)]
    recursion_limit: usize,

    /// Render diagnostics without colors
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print every token of a file
    Tokens { path: Utf8PathBuf },
    /// Print the syntax tree of a file and report what could not be parsed
    Tree { path: Utf8PathBuf },
}

fn main() -> anyhow::Result<ExitCode> {
    let options = Options::parse();
    setup_logging(options.verbose);

    match &options.command {
        Command::Tokens { path } => {
            let text = read(path)?;
            let tokens = demo::lexer().tokenize(&text)?;

            for token in tokens {
                println!("{:?} {:?}", token.kind, token.text);
            }

            Ok(ExitCode::SUCCESS)
        }
        Command::Tree { path } => {
            let text = read(path)?;
            let tokens = demo::lexer().tokenize(&text)?;

            let language = demo::language();
            let parse = munch_parse::Parser::new(&language.grammar)
                .with_depth_limit(options.depth_limit)
                .with_recursion_limit(options.recursion_limit)
                .parse(language.page, &tokens)?;
            tracing::info!(%path, errors = parse.errors().len(), "parsed file");

            print!("{}", render::tree(parse.tree(), &tokens));

            let renderer = if options.plain { Renderer::plain() } else { Renderer::styled() };
            for error in parse.errors() {
                let diagnostic = error.to_diagnostic(&tokens);
                eprintln!("{}", diagnostic.render(&renderer, path.as_str(), &text));
            }

            Ok(if parse.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

fn read(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read `{path}`"))
}

fn setup_logging(verbose: u8) {
    use tracing_subscriber::{
        EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    };

    let filter = EnvFilter::new(match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    });

    let formatter =
        tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry().with(formatter).with(filter).init();
}
