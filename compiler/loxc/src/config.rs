//! Command-line configuration.
//!
//! Parsed by hand: a handful of subcommands and one flag don't warrant
//! an argument-parsing dependency.

use std::path::PathBuf;

use lox_diagnostic::emitter::{ColorMode, ParseColorModeError};
use thiserror::Error;

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactive prompt; the default with no arguments.
    Repl,
    /// Run a script (`lox <file>` or `lox run <file>`).
    Run(PathBuf),
    /// Dump the token stream.
    Lex(PathBuf),
    /// Dump each parsed statement in prefix form.
    Parse(PathBuf),
    /// Print the documentation for an error code.
    Explain(String),
    Help,
    Version,
}

/// A usage error; the binary exits with 64.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown option `{0}`")]
    UnknownFlag(String),
    #[error("{0}")]
    InvalidColor(#[from] ParseColorModeError),
    #[error("`--color` needs a value (auto, always, or never)")]
    MissingColor,
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    pub color: ColorMode,
}

impl Config {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut color = ColorMode::Auto;
        let mut positional = Vec::new();
        let mut flag_command = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if let Some(value) = arg.strip_prefix("--color=") {
                color = value.parse()?;
            } else if arg == "--color" {
                let value = args.next().ok_or(ConfigError::MissingColor)?;
                color = value.parse()?;
            } else if arg == "-h" || arg == "--help" {
                flag_command = Some(Command::Help);
            } else if arg == "-V" || arg == "--version" {
                flag_command = Some(Command::Version);
            } else if arg.starts_with('-') && arg != "-" {
                return Err(ConfigError::UnknownFlag(arg));
            } else {
                positional.push(arg);
            }
        }

        let command = match flag_command {
            Some(command) => command,
            None => parse_command(positional)?,
        };
        Ok(Config { command, color })
    }
}

fn parse_command(positional: Vec<String>) -> Result<Command, ConfigError> {
    let mut rest = positional.into_iter();
    let Some(first) = rest.next() else {
        return Ok(Command::Repl);
    };

    let command = match first.as_str() {
        "run" => Command::Run(required(&mut rest, "run", "a file path")?.into()),
        "lex" => Command::Lex(required(&mut rest, "lex", "a file path")?.into()),
        "parse" => Command::Parse(required(&mut rest, "parse", "a file path")?.into()),
        "explain" => Command::Explain(required(&mut rest, "explain", "an error code")?),
        "help" => Command::Help,
        "version" => Command::Version,
        "repl" => Command::Repl,
        _ => Command::Run(PathBuf::from(first)),
    };

    match rest.next() {
        Some(extra) => Err(ConfigError::UnexpectedArgument(extra)),
        None => Ok(command),
    }
}

fn required(
    rest: &mut impl Iterator<Item = String>,
    command: &'static str,
    what: &'static str,
) -> Result<String, ConfigError> {
    rest.next()
        .ok_or(ConfigError::MissingArgument { command, what })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        Config::from_args(args.iter().map(ToString::to_string))
    }

    fn command(args: &[&str]) -> Command {
        match parse(args) {
            Ok(config) => config.command,
            Err(error) => panic!("{args:?} failed: {error}"),
        }
    }

    #[test]
    fn test_no_arguments_starts_repl() {
        assert_eq!(command(&[]), Command::Repl);
    }

    #[test]
    fn test_bare_path_runs_file() {
        assert_eq!(command(&["hello.lox"]), Command::Run("hello.lox".into()));
        assert_eq!(command(&["run", "hello.lox"]), Command::Run("hello.lox".into()));
    }

    #[test]
    fn test_subcommands() {
        assert_eq!(command(&["lex", "a.lox"]), Command::Lex("a.lox".into()));
        assert_eq!(command(&["parse", "a.lox"]), Command::Parse("a.lox".into()));
        assert_eq!(command(&["explain", "E1004"]), Command::Explain("E1004".into()));
        assert_eq!(command(&["help"]), Command::Help);
        assert_eq!(command(&["--version"]), Command::Version);
    }

    #[test]
    fn test_color_flag_forms() {
        let config = parse(&["--color=never", "a.lox"]).unwrap();
        assert_eq!(config.color, ColorMode::Never);
        let config = parse(&["a.lox", "--color", "always"]).unwrap();
        assert_eq!(config.color, ColorMode::Always);
        assert_eq!(parse(&["a.lox"]).unwrap().color, ColorMode::Auto);
    }

    #[test]
    fn test_usage_errors() {
        assert_eq!(
            parse(&["--verbose"]),
            Err(ConfigError::UnknownFlag("--verbose".into()))
        );
        assert_eq!(parse(&["--color"]), Err(ConfigError::MissingColor));
        assert!(matches!(
            parse(&["--color=rainbow"]),
            Err(ConfigError::InvalidColor(_))
        ));
        assert_eq!(
            parse(&["run"]),
            Err(ConfigError::MissingArgument {
                command: "run",
                what: "a file path",
            })
        );
        assert_eq!(
            parse(&["a.lox", "b.lox"]),
            Err(ConfigError::UnexpectedArgument("b.lox".into()))
        );
    }
}
