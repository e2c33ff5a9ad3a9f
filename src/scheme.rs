use indexmap::IndexMap;
use log::warn;
use once_cell::sync::Lazy;
use peniko::{color::palette, Color};
use serde::{Deserialize, Serialize};

/// The built-in scheme every lookup falls back to.
pub static DEFAULT_COLOR_SCHEME: Lazy<ColorScheme> = Lazy::new(|| ColorScheme {
    name:          "Default".to_owned(),
    high_contrast: None,
    ui:            [
        ("editor.background", Color::from_rgb8(0xFA, 0xFA, 0xFA)),
        ("editor.foreground", Color::from_rgb8(0x38, 0x3A, 0x42)),
        ("editor.caret", Color::from_rgb8(0x52, 0x6F, 0xFF)),
        ("editor.selection", Color::from_rgb8(0xE5, 0xE5, 0xE6)),
        ("editor.current-line", Color::from_rgb8(0xF2, 0xF2, 0xF2)),
        ("editor.link", Color::from_rgb8(0x40, 0x78, 0xF2)),
        ("editor.dim", Color::from_rgb8(0xA0, 0xA1, 0xA7)),
        ("editor.sticky-header", Color::from_rgb8(0xFA, 0xFA, 0xFA)),
    ]
    .map(|(k, v)| (k.to_owned(), v))
    .into(),
    syntax:        [
        ("comment", Color::from_rgb8(0xA0, 0xA1, 0xA7)),
        ("constant", Color::from_rgb8(0x98, 0x68, 0x01)),
        ("keyword", Color::from_rgb8(0xA6, 0x26, 0xA4)),
        ("function", Color::from_rgb8(0x40, 0x78, 0xF2)),
        ("string", Color::from_rgb8(0x50, 0xA1, 0x4F)),
        ("type", Color::from_rgb8(0xC1, 0x84, 0x01)),
        ("variable", Color::from_rgb8(0xE4, 0x56, 0x49)),
        ("number", Color::from_rgb8(0x98, 0x68, 0x01)),
        ("field", Color::from_rgb8(0xE4, 0x56, 0x49)),
        ("embedded", Color::from_rgb8(0x01, 0x84, 0xBC)),
    ]
    .map(|(k, v)| (k.to_owned(), v))
    .into()
});

/// A named set of colors used to render source code and the editor chrome.
///
/// This is the value the preferences UI edits and the scheme loader fills
/// in; how definitions are found and parsed lives with the loader.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ColorScheme {
    pub name:          String,
    pub high_contrast: Option<bool>,
    pub ui:            IndexMap<String, Color>,
    pub syntax:        IndexMap<String, Color>
}

impl Default for ColorScheme {
    fn default() -> Self {
        DEFAULT_COLOR_SCHEME.clone()
    }
}

impl ColorScheme {
    /// Returns the UI color registered under `name`, falling back to the
    /// default scheme when this scheme does not define it.
    pub fn ui_color(&self, name: &str) -> Color {
        match self
            .ui
            .get(name)
            .or_else(|| DEFAULT_COLOR_SCHEME.ui.get(name))
        {
            Some(color) => *color,
            None => {
                warn!("no ui color named {name}");
                palette::css::HOT_PINK
            }
        }
    }

    pub fn syntax_color(&self, name: &str) -> Option<Color> {
        match name {
            "boolean" => self.syntax.get("constant").copied(),
            _ => self.syntax.get(name).copied()
        }
    }
}
