use clap::{value_parser, Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, info, Level};

use lapel::classify::classify;
use lapel::config::{self, Settings};
use lapel::evaluator::Evaluator;
use lapel::rendering::{splice, Html, Identity, Latex, Render, Terminal};
use lapel::scanning::Scanner;
use lapel::spans::{Markdown, SpanSource};

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("lapel")
        .version(VERSION)
        .propagate_version(true)
        .about("Inline calculations in the code spans of Markdown notes.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log what the scanner and evaluator are doing to standard error."),
        )
        .subcommand(
            Command::new("render")
                .about("Show the document with its calculations computed")
                .arg(
                    Arg::new("cursor")
                        .long("cursor")
                        .value_parser(value_parser!(usize))
                        .help("Byte offset of the cursor. Snippets near it are left as written. Without it no snippet is considered to be under edit."),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(["plain", "terminal", "latex", "html"])
                        .help("How to present results. The default is terminal colours when writing to a terminal, plain text otherwise."),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("JSON file with settings for number format, precision, slack, and caching."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The Markdown document to render. Use - to read from standard input."),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report every snippet whose calculation fails")
                .arg(
                    Arg::new("concise")
                        .long("concise")
                        .action(ArgAction::SetTrue)
                        .help("One line per problem rather than showing the offending line."),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("JSON file with settings for number format, precision, slack, and caching."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The Markdown document to check. Use - to read from standard input."),
                ),
        )
        .subcommand(
            Command::new("eval")
                .about("Compute snippets given on the command line, in order")
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("JSON file with settings for number format, precision, slack, and caching."),
                )
                .arg(
                    Arg::new("snippet")
                        .required(true)
                        .num_args(1..)
                        .help("Snippets such as 'x := 5' or 'x^2 =?'. Later snippets see earlier declarations."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("render", submatches)) => {
            let filename = filename(submatches);
            let settings = settings(submatches);
            let document = document(filename);

            let cursor = submatches
                .get_one::<usize>("cursor")
                .copied()
                .unwrap_or(usize::MAX);

            let renderer: Box<dyn Render> = match submatches
                .get_one::<String>("output")
                .map(String::as_str)
            {
                Some("plain") => Box::new(Identity),
                Some("terminal") => Box::new(Terminal),
                Some("latex") => Box::new(Latex),
                Some("html") => Box::new(Html),
                _ => {
                    if std::io::stdout().is_terminal() {
                        Box::new(Terminal)
                    } else {
                        Box::new(Identity)
                    }
                }
            };

            info!("Rendering file: {}", filename.display());

            let mut scanner = Scanner::with_settings(&settings);
            let decorations = scanner.update(&document, Some(cursor), &Markdown);
            let result = splice(&document, decorations, renderer.as_ref());

            print!("{}", result);
        }
        Some(("check", submatches)) => {
            let filename = filename(submatches);
            let settings = settings(submatches);
            let document = document(filename);
            let concise = submatches.get_flag("concise");

            info!("Checking file: {}", filename.display());

            let spans = Markdown.spans(&document);
            let mut scanner = Scanner::with_settings(&settings);
            let reports = scanner.check(&document, &spans);

            let mut computed = 0;
            let mut failed = 0;

            for report in &reports {
                match &report.outcome {
                    Some(Ok(shown)) => {
                        debug!("{}: {}", report.span.start, shown);
                        computed += 1;
                    }
                    Some(Err(error)) => {
                        failed += 1;
                        if concise {
                            eprintln!(
                                "{}",
                                problem::concise_evaluation_error(
                                    error,
                                    &report.span,
                                    filename,
                                    &document
                                )
                            );
                        } else {
                            eprintln!(
                                "{}\n",
                                problem::full_evaluation_error(
                                    error,
                                    &report.span,
                                    filename,
                                    &document
                                )
                            );
                        }
                    }
                    None => {}
                }
            }

            info!(
                "{} of {} snippets computed, {} failed",
                computed,
                reports.len(),
                failed
            );

            if failed > 0 {
                std::process::exit(1);
            }
        }
        Some(("eval", submatches)) => {
            let settings = settings(submatches);
            let mut evaluator = Evaluator::new();
            evaluator.configure(&settings);

            let mut failed = false;

            if let Some(snippets) = submatches.get_many::<String>("snippet") {
                for snippet in snippets {
                    match evaluator.compute(&classify(snippet)) {
                        Some(Ok(shown)) => println!("{}", shown),
                        Some(Err(error)) => {
                            eprintln!("{}: {}: {}", "error".bright_red(), snippet, error);
                            failed = true;
                        }
                        None => {
                            eprintln!(
                                "{}: {}: {}",
                                "error".bright_red(),
                                snippet,
                                "not a declaration, equation, or expression".bold()
                            );
                            failed = true;
                        }
                    }
                }
            }

            if failed {
                std::process::exit(1);
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: lapel [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn filename(submatches: &clap::ArgMatches) -> &Path {
    // clap enforces presence; "-" stands in should it ever be absent
    match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => Path::new("-"),
    }
}

fn settings(submatches: &clap::ArgMatches) -> Settings {
    match submatches.get_one::<String>("config") {
        Some(filename) => {
            let filename = Path::new(filename);
            match config::load_settings(filename) {
                Ok(settings) => settings,
                Err(error) => {
                    eprintln!("{}", problem::concise_loading_error(&error));
                    std::process::exit(1);
                }
            }
        }
        None => Settings::default(),
    }
}

fn document(filename: &Path) -> String {
    match config::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}
