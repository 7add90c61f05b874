//! Theme template set and placeholder substitution
//!
//! Templates are plain files containing literal tokens. Substitution is a
//! straight find-and-replace; there is no templating language.

use crate::error::{Result, ThemeError};
use crate::request::ThemeRequest;
use std::fs;
use std::path::Path;

/// Token replaced by the theme id
pub const THEME_ID_TOKEN: &str = "{{THEME_ID}}";

/// Token replaced by the theme display name
pub const DISPLAY_NAME_TOKEN: &str = "{{DISPLAY_NAME}}";

/// One file of the theme template set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFile {
    Readme,
    Css,
    Js,
    PackageJson,
}

impl TemplateFile {
    /// Every template file, in generation order
    pub const ALL: [TemplateFile; 4] = [
        TemplateFile::Readme,
        TemplateFile::Css,
        TemplateFile::Js,
        TemplateFile::PackageJson,
    ];

    /// File name inside the template directory
    pub fn source_name(self) -> &'static str {
        match self {
            TemplateFile::Readme => "README.md",
            TemplateFile::Css => "theme.css",
            TemplateFile::Js => "theme.js",
            TemplateFile::PackageJson => "package.json",
        }
    }

    /// File name inside the generated theme directory
    pub fn destination_name(self, request: &ThemeRequest) -> String {
        match self {
            TemplateFile::Readme => "README.md".to_string(),
            TemplateFile::Css => format!("{}.css", request.theme_id),
            TemplateFile::Js => format!("{}.js", request.theme_id),
            TemplateFile::PackageJson => "package.json".to_string(),
        }
    }

    /// Token/value pairs applied after copying; empty means a verbatim copy
    pub fn substitutions(self, request: &ThemeRequest) -> Vec<(&'static str, String)> {
        match self {
            TemplateFile::Readme | TemplateFile::Css => Vec::new(),
            TemplateFile::Js => vec![(THEME_ID_TOKEN, request.theme_id.to_string())],
            TemplateFile::PackageJson => vec![
                (THEME_ID_TOKEN, request.theme_id.to_string()),
                (DISPLAY_NAME_TOKEN, request.theme_name.to_string()),
            ],
        }
    }

    /// Whether this file belongs to the request's output
    pub fn applies_to(self, request: &ThemeRequest) -> bool {
        match self {
            TemplateFile::PackageJson => request.is_distributed,
            _ => true,
        }
    }

    /// Built-in content written by `init`
    pub fn default_content(self) -> &'static str {
        match self {
            TemplateFile::Readme => include_str!("../templates/README.md"),
            TemplateFile::Css => include_str!("../templates/theme.css"),
            TemplateFile::Js => include_str!("../templates/theme.js"),
            TemplateFile::PackageJson => include_str!("../templates/package.json"),
        }
    }
}

/// Template files that a request generates, in order
pub fn files_for(request: &ThemeRequest) -> Vec<TemplateFile> {
    TemplateFile::ALL
        .into_iter()
        .filter(|file| file.applies_to(request))
        .collect()
}

/// Replace every occurrence of each token, returning the new text and the
/// total number of replacements
pub fn replace_tokens(content: &str, pairs: &[(&str, String)]) -> (String, usize) {
    let mut output = content.to_string();
    let mut replaced = 0;

    for (token, value) in pairs {
        let count = output.matches(token).count();
        if count > 0 {
            output = output.replace(token, value);
            replaced += count;
        }
    }

    (output, replaced)
}

/// Rewrite `path` in place, failing when none of the tokens were present
pub fn substitute_file(path: &Path, pairs: &[(&str, String)]) -> Result<usize> {
    let content = fs::read_to_string(path)
        .map_err(|e| ThemeError::io(format!("failed to read {}", path.display()), e))?;

    let (updated, replaced) = replace_tokens(&content, pairs);
    if replaced == 0 {
        let tokens = pairs
            .iter()
            .map(|(token, _)| *token)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(ThemeError::Substitution {
            file: path.to_path_buf(),
            tokens,
        });
    }

    fs::write(path, updated)
        .map_err(|e| ThemeError::io(format!("failed to write {}", path.display()), e))?;

    Ok(replaced)
}
