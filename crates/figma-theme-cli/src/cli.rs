//! Command-line arguments and input selection.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use figma_theme::ThemeOptions;
use figma_theme_input::env::{EnvOverlay, EnvReader, RealEnv};
use figma_theme_input::{DocumentSource, FigmaApiSource, FileSource, StdinSource, FIGMA_TOKEN};
use simplelog::LevelFilter;

use crate::error::UsageError;

/// Convert a Figma file export into a nested JSON color theme.
#[derive(Debug, Parser)]
#[command(
    name = "figma-theme",
    version,
    about,
    after_help = "Downloading with --id needs an API token, from --token or the FIGMA_TOKEN \
                  environment variable (a .env file in the current directory is read too)."
)]
pub struct Cli {
    /// Exported Figma JSON file, or `-` to read stdin
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Write the theme to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Download the Figma file with this id instead of reading a file
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// API token for --id, overriding FIGMA_TOKEN
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Keep style metadata instead of bare colors
    #[arg(long)]
    pub metadata: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level for the stderr logger.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Transform options derived from the flags.
    pub fn theme_options(&self) -> ThemeOptions {
        ThemeOptions::new().metadata(self.metadata)
    }

    /// Choose where the document comes from, reading the process environment.
    pub fn source(&self) -> anyhow::Result<Box<dyn DocumentSource>> {
        self.source_in(RealEnv)
    }

    /// Choose where the document comes from, with `--token` layered over `env`.
    pub fn source_in<E: EnvReader>(&self, env: E) -> anyhow::Result<Box<dyn DocumentSource>> {
        match (&self.id, &self.file) {
            (Some(_), Some(_)) => Err(UsageError::FileWithId.into()),
            (Some(id), None) => {
                let mut env = EnvOverlay::new(env);
                if let Some(token) = &self.token {
                    env = env.with_var(FIGMA_TOKEN, token.as_str());
                }
                Ok(Box::new(FigmaApiSource::from_env(id.as_str(), &env)?))
            }
            (None, Some(path)) if path.as_os_str() == "-" => Ok(Box::new(StdinSource::new())),
            (None, Some(path)) => Ok(Box::new(FileSource::new(path.clone()))),
            (None, None) => Err(UsageError::NoInput.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figma_theme_input::{InputError, MockEnv};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("figma-theme").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parses_all_flags() {
        let cli = parse(&[
            "--pretty",
            "--metadata",
            "-vv",
            "-o",
            "theme.json",
            "figma-file.json",
        ]);
        assert!(cli.pretty);
        assert!(cli.metadata);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.out, Some(PathBuf::from("theme.json")));
        assert_eq!(cli.file, Some(PathBuf::from("figma-file.json")));
    }

    #[test]
    fn test_verbosity_maps_to_levels() {
        assert_eq!(parse(&[]).log_level(), LevelFilter::Warn);
        assert_eq!(parse(&["-v"]).log_level(), LevelFilter::Info);
        assert_eq!(parse(&["-vv"]).log_level(), LevelFilter::Debug);
        assert_eq!(parse(&["-vvvv"]).log_level(), LevelFilter::Trace);
    }

    #[test]
    fn test_metadata_flag_reaches_options() {
        assert!(parse(&["--metadata"]).theme_options().metadata);
        assert!(!parse(&[]).theme_options().metadata);
    }

    #[test]
    fn test_file_selects_file_source() {
        let source = parse(&["figma-file.json"]).source_in(MockEnv::new()).unwrap();
        assert_eq!(source.name(), "file");
    }

    #[test]
    fn test_dash_selects_stdin() {
        let source = parse(&["-"]).source_in(MockEnv::new()).unwrap();
        assert_eq!(source.name(), "stdin");
    }

    #[test]
    fn test_id_with_token_flag_selects_api() {
        let source = parse(&["--id", "abc123", "--token", "secret"])
            .source_in(MockEnv::new())
            .unwrap();
        assert_eq!(source.name(), "figma-api");
    }

    #[test]
    fn test_id_with_env_token_selects_api() {
        let env = MockEnv::new().with_var(FIGMA_TOKEN, "secret");
        let source = parse(&["--id", "abc123"]).source_in(env).unwrap();
        assert_eq!(source.name(), "figma-api");
    }

    #[test]
    fn test_empty_token_flag_shadows_env() {
        let env = MockEnv::new().with_var(FIGMA_TOKEN, "secret");
        let err = parse(&["--id", "abc123", "--token", ""])
            .source_in(env)
            .err()
            .unwrap();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::MissingToken)
        ));
    }

    #[test]
    fn test_id_without_any_token_is_missing_token() {
        let err = parse(&["--id", "abc123"])
            .source_in(MockEnv::new())
            .err()
            .unwrap();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::MissingToken)
        ));
    }

    #[test]
    fn test_id_with_file_is_rejected() {
        let err = parse(&["--id", "abc123", "--token", "secret", "figma-file.json"])
            .source_in(MockEnv::new())
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "you may not specify an input file when using --id"
        );
    }

    #[test]
    fn test_no_input_is_rejected() {
        let err = parse(&[]).source_in(MockEnv::new()).err().unwrap();
        assert_eq!(
            err.to_string(),
            "you must specify a file to parse or a Figma file to download"
        );
    }
}
