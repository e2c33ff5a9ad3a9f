pub mod option;
pub mod scheme;

pub use peniko::Color;

pub use crate::{
    option::ColorSchemeOption,
    scheme::{ColorScheme, DEFAULT_COLOR_SCHEME}
};
