//! Interactive collection of a theme request
//!
//! Questions go through the [`Prompter`] trait so the collector can be
//! driven by stdin, a script, or a mock.

use crate::error::{Result, ThemeError};
use crate::request::{ThemeId, ThemeName, ThemeRequest, parse_flag};
use crate::scaffold::ThemeScaffolder;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use std::io::{self, BufRead, Write};
use tracing::debug;

#[cfg(test)]
use mockall::automock;

/// Question for the theme id
pub const THEME_ID_QUESTION: &str = "Enter unique theme id";

/// Question for the display name
pub const THEME_NAME_QUESTION: &str = "Enter a theme display name";

/// Question for the distribution flag
pub const DISTRIBUTED_QUESTION: &str =
    "Is this theme being developed for use by all clients of web profiles (true/false)?";

/// Source of operator answers
#[cfg_attr(test, automock)]
pub trait Prompter {
    /// Ask a question; `None` means the input ended before an answer
    fn ask(&mut self, question: &str) -> io::Result<Option<String>>;
}

/// Line based prompter over any reader/writer pair
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
    styled: bool,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    /// Create an unstyled prompter
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            styled: false,
        }
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter on the process's stdin/stdout, styled when stdout is a terminal
    pub fn stdio() -> Self {
        let stdout = io::stdout();
        let styled = stdout.is_tty();
        Self {
            reader: io::stdin().lock(),
            writer: stdout,
            styled,
        }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        if self.styled {
            write!(self.writer, "{} ", format!("{question}:").cyan().bold())?;
        } else {
            write!(self.writer, "{question}: ")?;
        }
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Ask a required question, treating end of input as a missing field
fn ask_required<P: Prompter + ?Sized>(
    prompter: &mut P,
    field: &'static str,
    question: &str,
) -> Result<String> {
    prompter
        .ask(question)
        .map_err(ThemeError::Prompt)?
        .ok_or_else(|| ThemeError::validation(field, "a value is required"))
}

/// Prompt for every field, validate it, and make sure the theme is new
pub fn collect_request<P: Prompter + ?Sized>(
    prompter: &mut P,
    scaffolder: &ThemeScaffolder,
) -> Result<ThemeRequest> {
    let theme_id = ThemeId::parse(&ask_required(prompter, "themeId", THEME_ID_QUESTION)?)?;
    let theme_name =
        ThemeName::parse(&ask_required(prompter, "themeName", THEME_NAME_QUESTION)?)?;
    let is_distributed = parse_flag(
        "isDistributed",
        &ask_required(prompter, "isDistributed", DISTRIBUTED_QUESTION)?,
    )?;

    scaffolder.check_destination(&theme_id)?;
    debug!(
        "Collected theme request {} ({}), distributed: {}",
        theme_id, theme_name, is_distributed
    );

    Ok(ThemeRequest::new(theme_id, theme_name, is_distributed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::{TempDir, tempdir};

    fn setup() -> (TempDir, ThemeScaffolder) {
        let root = tempdir().unwrap();
        let scaffolder =
            ThemeScaffolder::new(root.path().join("themes"), root.path().join("template"));
        (root, scaffolder)
    }

    fn mock_answers(id: &'static str, name: &'static str, flag: &'static str) -> MockPrompter {
        let mut mock = MockPrompter::new();
        mock.expect_ask()
            .withf(|q: &str| q == THEME_ID_QUESTION)
            .times(1)
            .returning(move |_| Ok(Some(id.to_string())));
        mock.expect_ask()
            .withf(|q: &str| q == THEME_NAME_QUESTION)
            .returning(move |_| Ok(Some(name.to_string())));
        mock.expect_ask()
            .withf(|q: &str| q == DISTRIBUTED_QUESTION)
            .returning(move |_| Ok(Some(flag.to_string())));
        mock
    }

    #[test]
    fn test_collect_valid_request() {
        let (_root, scaffolder) = setup();
        let mut prompter = mock_answers("acme", "Acme Theme", "false");

        let request = collect_request(&mut prompter, &scaffolder).unwrap();

        assert_eq!(request.theme_id.as_str(), "acme");
        assert_eq!(request.theme_name.as_str(), "Acme Theme");
        assert!(!request.is_distributed);
    }

    #[test]
    fn test_collect_rejects_default_id() {
        let (_root, scaffolder) = setup();
        let mut prompter = mock_answers("default", "Acme Theme", "true");

        let err = collect_request(&mut prompter, &scaffolder).unwrap_err();

        assert!(matches!(err, ThemeError::Validation { field: "themeId", .. }));
    }

    #[test]
    fn test_collect_rejects_invalid_id() {
        let (_root, scaffolder) = setup();
        let mut prompter = mock_answers("my theme!", "Acme Theme", "true");

        let err = collect_request(&mut prompter, &scaffolder).unwrap_err();

        assert!(matches!(err, ThemeError::Validation { field: "themeId", .. }));
    }

    #[test]
    fn test_collect_rejects_bad_flag() {
        let (_root, scaffolder) = setup();
        let mut prompter = mock_answers("acme", "Acme Theme", "sometimes");

        let err = collect_request(&mut prompter, &scaffolder).unwrap_err();

        assert!(matches!(
            err,
            ThemeError::Validation {
                field: "isDistributed",
                ..
            }
        ));
    }

    #[test]
    fn test_collect_rejects_existing_theme() {
        let (_root, scaffolder) = setup();
        fs::create_dir_all(scaffolder.themes_dir().join("foo")).unwrap();
        let mut prompter = mock_answers("foo", "Foo", "false");

        let err = collect_request(&mut prompter, &scaffolder).unwrap_err();

        assert!(matches!(err, ThemeError::DuplicateTheme { .. }));
        // Nothing was copied
        assert!(fs::read_dir(scaffolder.themes_dir().join("foo")).unwrap().next().is_none());
    }

    #[test]
    fn test_end_of_input_is_a_missing_field() {
        let (_root, scaffolder) = setup();
        let mut mock = MockPrompter::new();
        mock.expect_ask().returning(|_| Ok(None));

        let err = collect_request(&mut mock, &scaffolder).unwrap_err();

        assert!(matches!(err, ThemeError::Validation { field: "themeId", .. }));
    }

    #[test]
    fn test_prompt_io_error() {
        let (_root, scaffolder) = setup();
        let mut mock = MockPrompter::new();
        mock.expect_ask()
            .returning(|_| Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed")));

        let err = collect_request(&mut mock, &scaffolder).unwrap_err();

        assert!(matches!(err, ThemeError::Prompt(_)));
    }

    #[test]
    fn test_line_prompter_reads_answers() {
        let input = Cursor::new("acme\n  Acme Theme  \r\ny\n");
        let mut output = Vec::new();
        let (_root, scaffolder) = setup();

        let request = {
            let mut prompter = LinePrompter::new(input, &mut output);
            collect_request(&mut prompter, &scaffolder).unwrap()
        };

        assert_eq!(request.theme_id.as_str(), "acme");
        assert_eq!(request.theme_name.as_str(), "Acme Theme");
        assert!(request.is_distributed);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains(THEME_ID_QUESTION));
        assert!(transcript.contains(DISTRIBUTED_QUESTION));
    }

    #[test]
    fn test_line_prompter_end_of_input() {
        let mut prompter = LinePrompter::new(Cursor::new(""), Vec::new());
        assert_eq!(prompter.ask("anything").unwrap(), None);
    }

    #[test]
    fn test_empty_line_is_a_missing_field() {
        let (_root, scaffolder) = setup();
        let mut prompter = LinePrompter::new(Cursor::new("\n"), Vec::new());

        let err = collect_request(&mut prompter, &scaffolder).unwrap_err();

        assert!(matches!(err, ThemeError::Validation { field: "themeId", .. }));
    }
}
