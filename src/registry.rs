//! Theme registration contract of the host page
//!
//! Generated theme scripts register a render function on the host page's
//! theme registry. This module models that contract with an explicit
//! registry object instead of a global namespace.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// A web profile supplied by the host page
pub trait WebProfile {
    /// Render the profile to markup
    fn render(&self) -> String;
}

/// Render function registered for a theme
pub type RenderFn = Box<dyn Fn(&dyn WebProfile) -> String + Send + Sync>;

/// Failures while installing a theme
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// The host page has not loaded the web profiles asset
    #[error("profiles namespace does not exist; load the web profiles asset first")]
    MissingNamespace,

    /// The namespace has no theme registry
    #[error("profiles namespace has no themes registry; load the web profiles asset first")]
    MissingThemes,

    /// The theme was included twice on the same page
    #[error("theme {0} is already registered; include each theme only once per page")]
    AlreadyRegistered(String),

    /// No render function for the requested theme
    #[error("theme {0} is not registered")]
    NotRegistered(String),
}

/// Render functions keyed by theme id
#[derive(Default)]
pub struct ThemeRegistry {
    themes: HashMap<String, RenderFn>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `render` under `id`; ids can only be registered once
    pub fn register(
        &mut self,
        id: impl Into<String>,
        render: RenderFn,
    ) -> Result<(), RegistrationError> {
        let id = id.into();
        if self.themes.contains_key(&id) {
            return Err(RegistrationError::AlreadyRegistered(id));
        }
        self.themes.insert(id, render);
        Ok(())
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.themes.contains_key(id)
    }

    /// Render `profile` with the theme registered under `id`
    pub fn render(&self, id: &str, profile: &dyn WebProfile) -> Result<String, RegistrationError> {
        let render = self
            .themes
            .get(id)
            .ok_or_else(|| RegistrationError::NotRegistered(id.to_string()))?;
        Ok(render(profile))
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&String> = self.themes.keys().collect();
        ids.sort();
        f.debug_struct("ThemeRegistry").field("themes", &ids).finish()
    }
}

/// The host page's profiles namespace
#[derive(Debug, Default)]
pub struct ProfileNamespace {
    pub themes: Option<ThemeRegistry>,
}

impl ProfileNamespace {
    /// Namespace with an empty theme registry
    pub fn with_registry() -> Self {
        Self {
            themes: Some(ThemeRegistry::new()),
        }
    }
}

/// Register a theme whose render function delegates to the profile itself
///
/// Mirrors what a generated theme script does at load time.
pub fn install_theme(
    namespace: Option<&mut ProfileNamespace>,
    id: &str,
) -> Result<(), RegistrationError> {
    let namespace = namespace.ok_or(RegistrationError::MissingNamespace)?;
    let themes = namespace
        .themes
        .as_mut()
        .ok_or(RegistrationError::MissingThemes)?;

    themes.register(id, Box::new(|profile: &dyn WebProfile| profile.render()))
}
