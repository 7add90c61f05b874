//! Theme directory generation
//!
//! Copies the template set into `<themes_dir>/<theme_id>/` and applies the
//! placeholder substitutions. Files are assembled in a hidden staging
//! directory inside the themes root and renamed into place only once every
//! file has been produced, so a failed run never leaves a partial theme.

use crate::config::Config;
use crate::error::{Result, ThemeError};
use crate::request::{ThemeId, ThemeRequest};
use crate::template::{self, TemplateFile};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Prefix of staging directories; hidden so listings skip them
const STAGING_PREFIX: &str = ".staging-";

/// One file written for a theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub template: TemplateFile,
    /// Final location inside the theme directory
    pub path: PathBuf,
    /// Number of placeholder replacements made (0 for verbatim copies)
    pub replacements: usize,
}

/// Outcome of a successful scaffold
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub theme_id: ThemeId,
    pub directory: PathBuf,
    pub files: Vec<GeneratedFile>,
}

/// An existing theme under the themes root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSummary {
    pub id: String,
    pub path: PathBuf,
    pub is_distributed: bool,
    /// `displayName` from `package.json`, when present
    pub display_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageDescriptor {
    display_name: Option<String>,
}

/// Generates theme directories from a template directory
#[derive(Debug, Clone)]
pub struct ThemeScaffolder {
    themes_dir: PathBuf,
    template_dir: PathBuf,
}

impl ThemeScaffolder {
    pub fn new(themes_dir: impl Into<PathBuf>, template_dir: impl Into<PathBuf>) -> Self {
        Self {
            themes_dir: themes_dir.into(),
            template_dir: template_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.themes_dir.clone(), config.template_dir.clone())
    }

    pub fn themes_dir(&self) -> &Path {
        &self.themes_dir
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Directory a theme id maps to
    pub fn destination(&self, id: &ThemeId) -> PathBuf {
        self.themes_dir.join(id.as_str())
    }

    /// Fail with [`ThemeError::DuplicateTheme`] if the theme already exists
    pub fn check_destination(&self, id: &ThemeId) -> Result<PathBuf> {
        let destination = self.destination(id);
        if destination.exists() {
            return Err(ThemeError::DuplicateTheme {
                id: id.to_string(),
                path: destination,
            });
        }
        Ok(destination)
    }

    /// Generate every file the request needs
    pub fn create(&self, request: &ThemeRequest) -> Result<ScaffoldReport> {
        let destination = self.destination(&request.theme_id);
        self.ensure_absent(request, &destination)?;

        fs::create_dir_all(&self.themes_dir).map_err(|e| {
            ThemeError::io(
                format!("failed to create themes directory {}", self.themes_dir.display()),
                e,
            )
        })?;

        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(&self.themes_dir)
            .map_err(|e| ThemeError::io("failed to create staging directory", e))?;
        debug!("Staging {} in {}", request.theme_id, staging.path().display());

        // Dropping `staging` on any error below removes everything written so far
        let staged = template::files_for(request)
            .into_iter()
            .map(|file| self.generate_file(staging.path(), file, request))
            .collect::<Result<Vec<_>>>()?;
        debug_assert_eq!(staged.len(), request.expected_file_count());

        self.ensure_absent(request, &destination)?;

        let staging_path = staging.keep();
        if let Err(e) = fs::rename(&staging_path, &destination) {
            let _ = fs::remove_dir_all(&staging_path);
            return Err(ThemeError::io(
                format!("failed to move theme into {}", destination.display()),
                e,
            ));
        }

        let files = staged
            .into_iter()
            .map(|generated| GeneratedFile {
                path: destination.join(generated.template.destination_name(request)),
                ..generated
            })
            .collect();

        info!("Successfully created new theme {}", request.theme_id);

        Ok(ScaffoldReport {
            theme_id: request.theme_id.clone(),
            directory: destination,
            files,
        })
    }

    fn ensure_absent(&self, request: &ThemeRequest, destination: &Path) -> Result<()> {
        if destination.exists() {
            return Err(ThemeError::DestinationExists {
                id: request.theme_id.to_string(),
                path: destination.to_path_buf(),
            });
        }
        Ok(())
    }

    /// Copy one template into `dir` and apply its substitutions
    fn generate_file(
        &self,
        dir: &Path,
        file: TemplateFile,
        request: &ThemeRequest,
    ) -> Result<GeneratedFile> {
        let name = file.destination_name(request);
        let source = self.template_dir.join(file.source_name());
        let target = dir.join(&name);

        info!("Copying {}...", name);
        fs::copy(&source, &target).map_err(|e| ThemeError::Copy {
            from: source.clone(),
            to: self.destination(&request.theme_id).join(&name),
            source: e,
        })?;
        info!("Successfully copied {}", name);

        let pairs = file.substitutions(request);
        let replacements = if pairs.is_empty() {
            0
        } else {
            info!("Updating {}...", name);
            let count = template::substitute_file(&target, &pairs).map_err(|e| match e {
                ThemeError::Substitution { tokens, .. } => ThemeError::Substitution {
                    file: self.destination(&request.theme_id).join(&name),
                    tokens,
                },
                other => other,
            })?;
            info!("Successfully updated {} with specified values", name);
            count
        };

        if file == TemplateFile::PackageJson {
            check_package_json(&target);
        }

        Ok(GeneratedFile {
            template: file,
            path: target,
            replacements,
        })
    }
}

/// Warn when the generated descriptor is not valid JSON
fn check_package_json(path: &Path) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    if let Err(e) = serde_json::from_str::<serde_json::Value>(&content) {
        warn!("{} is not valid JSON: {}", path.display(), e);
    }
}

/// List themes under `themes_dir`, sorted by id
///
/// A missing themes directory yields an empty list.
pub fn list_themes(themes_dir: &Path) -> Result<Vec<ThemeSummary>> {
    if !themes_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(themes_dir).map_err(|e| {
        ThemeError::io(format!("failed to read {}", themes_dir.display()), e)
    })?;

    let mut themes = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            ThemeError::io(format!("failed to read {}", themes_dir.display()), e)
        })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let id = entry.file_name().to_string_lossy().to_string();
        if id.starts_with('.') {
            continue;
        }

        let package_path = path.join(TemplateFile::PackageJson.source_name());
        let is_distributed = package_path.is_file();
        let display_name = if is_distributed {
            fs::read_to_string(&package_path)
                .ok()
                .and_then(|content| serde_json::from_str::<PackageDescriptor>(&content).ok())
                .and_then(|descriptor| descriptor.display_name)
        } else {
            None
        };

        themes.push(ThemeSummary {
            id,
            path,
            is_distributed,
            display_name,
        });
    }

    themes.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(themes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{DISPLAY_NAME_TOKEN, THEME_ID_TOKEN};
    use tempfile::{TempDir, tempdir};

    /// Temp workspace with the built-in templates and an empty themes root
    fn setup() -> (TempDir, ThemeScaffolder) {
        let root = tempdir().unwrap();
        let template_dir = root.path().join("template");
        fs::create_dir_all(&template_dir).unwrap();
        for file in TemplateFile::ALL {
            fs::write(template_dir.join(file.source_name()), file.default_content()).unwrap();
        }
        let scaffolder = ThemeScaffolder::new(root.path().join("themes"), template_dir);
        (root, scaffolder)
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_create_local_theme() {
        let (_root, scaffolder) = setup();
        let request = ThemeRequest::from_raw("acme", "Acme Theme", false).unwrap();

        let report = scaffolder.create(&request).unwrap();

        let dir = scaffolder.themes_dir().join("acme");
        assert_eq!(report.directory, dir);
        assert_eq!(report.files.len(), 3);
        assert_eq!(entries(&dir), vec!["README.md", "acme.css", "acme.js"]);
        assert!(!dir.join("package.json").exists());

        let js = fs::read_to_string(dir.join("acme.js")).unwrap();
        assert!(!js.contains(THEME_ID_TOKEN));
        assert!(js.contains("acme"));
    }

    #[test]
    fn test_create_distributed_theme() {
        let (_root, scaffolder) = setup();
        let request = ThemeRequest::from_raw("acme", "Acme Theme", true).unwrap();

        let report = scaffolder.create(&request).unwrap();

        let dir = scaffolder.themes_dir().join("acme");
        assert_eq!(report.files.len(), 4);
        assert_eq!(
            entries(&dir),
            vec!["README.md", "acme.css", "acme.js", "package.json"]
        );

        let package = fs::read_to_string(dir.join("package.json")).unwrap();
        assert!(!package.contains(THEME_ID_TOKEN));
        assert!(!package.contains(DISPLAY_NAME_TOKEN));
        assert!(package.contains("Acme Theme"));
    }

    #[test]
    fn test_report_paths_point_into_destination() {
        let (_root, scaffolder) = setup();
        let request = ThemeRequest::from_raw("acme", "Acme Theme", true).unwrap();

        let report = scaffolder.create(&request).unwrap();

        for file in &report.files {
            assert!(file.path.starts_with(&report.directory));
            assert!(file.path.exists());
        }
        let js = report
            .files
            .iter()
            .find(|f| f.template == TemplateFile::Js)
            .unwrap();
        assert!(js.replacements > 0);
        let readme = report
            .files
            .iter()
            .find(|f| f.template == TemplateFile::Readme)
            .unwrap();
        assert_eq!(readme.replacements, 0);
    }

    #[test]
    fn test_readme_and_css_are_verbatim() {
        let (_root, scaffolder) = setup();
        let request = ThemeRequest::from_raw("acme", "Acme Theme", false).unwrap();

        scaffolder.create(&request).unwrap();

        let dir = scaffolder.themes_dir().join("acme");
        assert_eq!(
            fs::read_to_string(dir.join("README.md")).unwrap(),
            TemplateFile::Readme.default_content()
        );
        assert_eq!(
            fs::read_to_string(dir.join("acme.css")).unwrap(),
            TemplateFile::Css.default_content()
        );
    }

    #[test]
    fn test_check_destination_rejects_existing_theme() {
        let (_root, scaffolder) = setup();
        fs::create_dir_all(scaffolder.themes_dir().join("foo")).unwrap();

        let err = scaffolder
            .check_destination(&ThemeId::parse("foo").unwrap())
            .unwrap_err();

        assert!(matches!(err, ThemeError::DuplicateTheme { .. }));
    }

    #[test]
    fn test_create_rejects_existing_destination() {
        let (_root, scaffolder) = setup();
        let existing = scaffolder.themes_dir().join("acme");
        fs::create_dir_all(&existing).unwrap();
        fs::write(existing.join("keep.txt"), "mine").unwrap();

        let request = ThemeRequest::from_raw("acme", "Acme Theme", false).unwrap();
        let err = scaffolder.create(&request).unwrap_err();

        assert!(matches!(err, ThemeError::DestinationExists { .. }));
        assert_eq!(entries(&existing), vec!["keep.txt"]);
    }

    #[test]
    fn test_missing_template_leaves_nothing_behind() {
        let (_root, scaffolder) = setup();
        fs::remove_file(scaffolder.template_dir().join("theme.css")).unwrap();

        let request = ThemeRequest::from_raw("acme", "Acme Theme", false).unwrap();
        let err = scaffolder.create(&request).unwrap_err();

        match err {
            ThemeError::Copy { from, to, .. } => {
                assert!(from.ends_with("theme.css"));
                assert!(to.ends_with("acme/acme.css"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!scaffolder.themes_dir().join("acme").exists());
        assert!(entries(scaffolder.themes_dir()).is_empty());
    }

    #[test]
    fn test_template_drift_is_a_substitution_error() {
        let (_root, scaffolder) = setup();
        fs::write(
            scaffolder.template_dir().join("theme.js"),
            "console.log('no token');",
        )
        .unwrap();

        let request = ThemeRequest::from_raw("acme", "Acme Theme", false).unwrap();
        let err = scaffolder.create(&request).unwrap_err();

        match err {
            ThemeError::Substitution { file, .. } => assert!(file.ends_with("acme/acme.js")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(entries(scaffolder.themes_dir()).is_empty());
    }

    #[test]
    fn test_package_json_needs_only_one_token() {
        let (_root, scaffolder) = setup();
        fs::write(
            scaffolder.template_dir().join("package.json"),
            r#"{"displayName": "{{DISPLAY_NAME}}"}"#,
        )
        .unwrap();

        let request = ThemeRequest::from_raw("acme", "Acme Theme", true).unwrap();
        let report = scaffolder.create(&request).unwrap();

        assert_eq!(report.files.len(), 4);
    }

    #[test]
    fn test_list_themes() {
        let (_root, scaffolder) = setup();
        scaffolder
            .create(&ThemeRequest::from_raw("zeta", "Zeta", false).unwrap())
            .unwrap();
        scaffolder
            .create(&ThemeRequest::from_raw("acme", "Acme Theme", true).unwrap())
            .unwrap();
        fs::create_dir_all(scaffolder.themes_dir().join(".staging-leftover")).unwrap();
        fs::write(scaffolder.themes_dir().join("notes.txt"), "x").unwrap();

        let themes = list_themes(scaffolder.themes_dir()).unwrap();

        assert_eq!(themes.len(), 2);
        assert_eq!(themes[0].id, "acme");
        assert!(themes[0].is_distributed);
        assert_eq!(themes[0].display_name.as_deref(), Some("Acme Theme"));
        assert_eq!(themes[1].id, "zeta");
        assert!(!themes[1].is_distributed);
        assert!(themes[1].display_name.is_none());
    }

    #[test]
    fn test_list_themes_missing_dir() {
        let root = tempdir().unwrap();
        let themes = list_themes(&root.path().join("nope")).unwrap();
        assert!(themes.is_empty());
    }
}
