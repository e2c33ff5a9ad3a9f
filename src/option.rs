use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::scheme::ColorScheme;

/// A color scheme plus the preferences-UI-only record of where its
/// definition came from.
///
/// The provenance fields are runtime state set by the scheme loader; they
/// are never part of the definition itself, so serialization skips them.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct ColorSchemeOption {
    pub scheme:             ColorScheme,
    /// Whether this definition was loaded from a bundled resource.
    #[serde(skip)]
    pub loaded_from_bundle: bool,
    /// Complete path of the file this instance was loaded from, if any.
    #[serde(skip)]
    pub source_file:        Option<PathBuf>
}

/// Compares the scheme content only. Two instances holding the same colors
/// are equal no matter where each was loaded from, which is what the
/// preferences UI needs when it checks a user copy against a bundled
/// original.
impl PartialEq for ColorSchemeOption {
    fn eq(&self, other: &Self) -> bool {
        self.scheme == other.scheme
    }
}

impl ColorSchemeOption {
    /// A scheme created in the preferences UI, not read from anywhere.
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            loaded_from_bundle: false,
            source_file: None
        }
    }

    pub fn bundled(scheme: ColorScheme) -> Self {
        Self {
            loaded_from_bundle: true,
            ..Self::new(scheme)
        }
    }

    pub fn from_file(scheme: ColorScheme, path: impl Into<PathBuf>) -> Self {
        Self {
            source_file: Some(path.into()),
            ..Self::new(scheme)
        }
    }

    pub fn is_user_defined(&self) -> bool {
        !self.loaded_from_bundle
    }
}
