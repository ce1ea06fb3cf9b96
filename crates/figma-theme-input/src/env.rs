//! Process-environment seams.
//!
//! Sources never touch `std::io::stdin` or `std::env` directly; they go
//! through [`StdinReader`] and [`EnvReader`] so tests can swap in
//! [`MockStdin`] and [`MockEnv`].

use std::collections::HashMap;
use std::io::{self, IsTerminal, Read};

/// Where [`StdinSource`](crate::StdinSource) gets its bytes.
pub trait StdinReader: Send + Sync {
    /// True when stdin is attached to a TTY rather than a pipe or file.
    fn is_terminal(&self) -> bool;

    /// Drain stdin to a string.
    fn read_to_string(&self) -> io::Result<String>;
}

/// Variable lookup used by [`FigmaApiSource::from_env`](crate::FigmaApiSource::from_env).
pub trait EnvReader: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// The process's real stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_to_string(&self) -> io::Result<String> {
        let mut text = String::new();
        io::stdin().lock().read_to_string(&mut text)?;
        Ok(text)
    }
}

/// The process's real environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Explicit values layered over another [`EnvReader`].
///
/// The CLI uses this to let `--token` take precedence over `FIGMA_TOKEN`.
///
/// ```
/// use figma_theme_input::env::{EnvOverlay, EnvReader, MockEnv};
///
/// let base = MockEnv::new().with_var("FIGMA_TOKEN", "from-env");
/// let env = EnvOverlay::new(base).with_var("FIGMA_TOKEN", "from-flag");
/// assert_eq!(env.var("FIGMA_TOKEN").as_deref(), Some("from-flag"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvOverlay<E> {
    overrides: HashMap<String, String>,
    base: E,
}

impl<E: EnvReader> EnvOverlay<E> {
    pub fn new(base: E) -> Self {
        Self {
            overrides: HashMap::new(),
            base,
        }
    }

    /// Shadow `name` in the base environment.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(name.into(), value.into());
        self
    }
}

impl<E: EnvReader> EnvReader for EnvOverlay<E> {
    fn var(&self, name: &str) -> Option<String> {
        match self.overrides.get(name) {
            Some(value) => Some(value.clone()),
            None => self.base.var(name),
        }
    }
}

/// Canned stdin for tests.
#[derive(Debug, Clone)]
pub struct MockStdin {
    terminal: bool,
    outcome: Result<String, io::ErrorKind>,
}

impl MockStdin {
    /// An interactive terminal that yields EOF straight away.
    pub fn terminal() -> Self {
        Self {
            terminal: true,
            outcome: Ok(String::new()),
        }
    }

    /// A pipe carrying `content`.
    pub fn piped(content: impl Into<String>) -> Self {
        Self {
            terminal: false,
            outcome: Ok(content.into()),
        }
    }

    /// A pipe that closes without sending anything.
    pub fn piped_empty() -> Self {
        Self::piped("")
    }

    /// A pipe whose read fails, e.g. on bytes that are not UTF-8.
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            terminal: false,
            outcome: Err(kind),
        }
    }
}

impl StdinReader for MockStdin {
    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn read_to_string(&self) -> io::Result<String> {
        self.outcome
            .clone()
            .map_err(|kind| io::Error::new(kind, "mock stdin read failed"))
    }
}

/// Canned environment for tests.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
