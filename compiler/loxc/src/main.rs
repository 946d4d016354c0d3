//! The `lox` command-line interpreter.

use std::process::ExitCode;

use loxc::commands::{explain_error, lex_file, parse_file, run_file, run_repl};
use loxc::tracing_setup::init_tracing;
use loxc::{Command, Config, EXIT_USAGE};

fn main() -> ExitCode {
    init_tracing();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!();
            eprintln!("Run `lox help` for usage.");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let code = match &config.command {
        Command::Repl => run_repl(config.color),
        Command::Run(path) => run_file(path, config.color),
        Command::Lex(path) => lex_file(path, config.color),
        Command::Parse(path) => parse_file(path, config.color),
        Command::Explain(code) => explain_error(code),
        Command::Help => {
            print_usage();
            0
        }
        Command::Version => {
            println!("lox {}", env!("CARGO_PKG_VERSION"));
            0
        }
    };
    ExitCode::from(code)
}

fn print_usage() {
    println!("Lox tree-walking interpreter");
    println!();
    println!("Usage: lox [options] [command]");
    println!();
    println!("Commands:");
    println!("  (none)               Start the interactive prompt");
    println!("  <file.lox>           Run a script");
    println!("  run <file.lox>       Run a script");
    println!("  lex <file.lox>       Print the token stream");
    println!("  parse <file.lox>     Print each statement in prefix form");
    println!("  explain <code>       Explain an error code (e.g., E1004)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>       Diagnostic colors: auto (default), always, never");
    println!();
    println!("Exit codes:");
    println!("  0   success");
    println!("  64  usage error");
    println!("  65  syntax error in the script");
    println!("  66  script could not be read");
    println!("  70  runtime error");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=lox_eval=debug) to trace execution on stderr.");
}
