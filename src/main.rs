//! microdom - render JSON document templates to HTML

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use microdom::RenderRequest;

#[derive(Parser)]
#[command(name = "microdom")]
#[command(version, about = "Render JSON document templates to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    microdom page.json                 Print page.json as HTML
    microdom page.json -o page.html    Write HTML to page.html
    cat page.json | microdom -         Read the template from stdin")]
struct Cli {
    /// Template file (JSON), or `-` for stdin
    #[arg(value_name = "TEMPLATE")]
    input: String,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Override the template's doctype keyword
    #[arg(long, value_name = "KEYWORD")]
    doctype: Option<String>,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let request = RenderRequest {
        input: cli.input,
        output: cli.output,
        doctype: cli.doctype,
    };

    match request.run(io::stdin().lock(), io::stdout().lock()) {
        Ok(bytes) => {
            if let Some(ref path) = request.output
                && !cli.quiet
            {
                eprintln!("Wrote {bytes} bytes to {path}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG takes precedence when set.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
