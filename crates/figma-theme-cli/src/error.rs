//! User-facing error messages.

use figma_theme::ThemeError;
use figma_theme_input::InputError;

/// Invalid combinations of arguments.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("you may not specify an input file when using --id")]
    FileWithId,

    #[error("you must specify a file to parse or a Figma file to download")]
    NoInput,
}

/// Render an error the way it is shown on stderr.
///
/// Usage, input and malformed-document errors are shown as their own
/// message. Anything else is reported as fatal with its cause chain.
pub fn report(err: &anyhow::Error) -> String {
    if err.downcast_ref::<UsageError>().is_some() || err.downcast_ref::<InputError>().is_some() {
        return err.to_string();
    }
    match err.downcast_ref::<ThemeError>() {
        Some(theme_err) if theme_err.is_malformed() => theme_err.to_string(),
        _ => format!("A fatal error occurred: {:#}", err),
    }
}
