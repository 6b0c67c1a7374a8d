//! Color names and the color function table
//!
//! The renderer never styles text itself. It asks a [`ColorTable`] for the
//! function registered under a [`ColorName`] and applies it. The host decides
//! whether that means ANSI escapes ([`ColorTable::ansi`]) or nothing at all
//! ([`ColorTable::plain`]).

use super::error::{FormatterError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Styling function applied to one piece of output
pub type ColorFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    RedBright,
    GreenBright,
    YellowBright,
    BlueBright,
    MagentaBright,
    CyanBright,
    WhiteBright,
}

impl ColorName {
    pub const ALL: [ColorName; 16] = [
        ColorName::Black,
        ColorName::Red,
        ColorName::Green,
        ColorName::Yellow,
        ColorName::Blue,
        ColorName::Magenta,
        ColorName::Cyan,
        ColorName::White,
        ColorName::Gray,
        ColorName::RedBright,
        ColorName::GreenBright,
        ColorName::YellowBright,
        ColorName::BlueBright,
        ColorName::MagentaBright,
        ColorName::CyanBright,
        ColorName::WhiteBright,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Black => "black",
            ColorName::Red => "red",
            ColorName::Green => "green",
            ColorName::Yellow => "yellow",
            ColorName::Blue => "blue",
            ColorName::Magenta => "magenta",
            ColorName::Cyan => "cyan",
            ColorName::White => "white",
            ColorName::Gray => "gray",
            ColorName::RedBright => "redBright",
            ColorName::GreenBright => "greenBright",
            ColorName::YellowBright => "yellowBright",
            ColorName::BlueBright => "blueBright",
            ColorName::MagentaBright => "magentaBright",
            ColorName::CyanBright => "cyanBright",
            ColorName::WhiteBright => "whiteBright",
        }
    }

    #[cfg(feature = "console")]
    fn ansi_color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            ColorName::Black => Black,
            ColorName::Red => Red,
            ColorName::Green => Green,
            ColorName::Yellow => Yellow,
            ColorName::Blue => Blue,
            ColorName::Magenta => Magenta,
            ColorName::Cyan => Cyan,
            ColorName::White => White,
            ColorName::Gray => BrightBlack,
            ColorName::RedBright => BrightRed,
            ColorName::GreenBright => BrightGreen,
            ColorName::YellowBright => BrightYellow,
            ColorName::BlueBright => BrightBlue,
            ColorName::MagentaBright => BrightMagenta,
            ColorName::CyanBright => BrightCyan,
            ColorName::WhiteBright => BrightWhite,
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ColorName::ALL
            .into_iter()
            .find(|name| {
                name.as_str().eq_ignore_ascii_case(s) || (s == "grey" && *name == ColorName::Gray)
            })
            .ok_or_else(|| format!("Invalid color name: '{}'", s))
    }
}

/// Mapping from color name to styling function
#[derive(Clone, Default)]
pub struct ColorTable {
    functions: HashMap<ColorName, ColorFn>,
}

impl ColorTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table where every color leaves the text untouched
    pub fn plain() -> Self {
        let identity: ColorFn = Arc::new(|text: &str| text.to_string());
        Self {
            functions: ColorName::ALL
                .into_iter()
                .map(|name| (name, Arc::clone(&identity)))
                .collect(),
        }
    }

    /// Table emitting ANSI escape sequences
    ///
    /// Honors the `NO_COLOR`/`CLICOLOR_FORCE` handling of the `colored` crate.
    #[cfg(feature = "console")]
    pub fn ansi() -> Self {
        use colored::Colorize;

        Self {
            functions: ColorName::ALL
                .into_iter()
                .map(|name| {
                    let color = name.ansi_color();
                    let paint: ColorFn = Arc::new(move |text: &str| text.color(color).to_string());
                    (name, paint)
                })
                .collect(),
        }
    }

    /// ANSI table when `colorize` is set, plain table otherwise
    pub fn for_output(colorize: bool) -> Self {
        #[cfg(feature = "console")]
        if colorize {
            return Self::ansi();
        }
        #[cfg(not(feature = "console"))]
        let _ = colorize;
        Self::plain()
    }

    /// Register (or replace) the function for one color
    #[must_use]
    pub fn with_color<F>(mut self, name: ColorName, paint: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.functions.insert(name, Arc::new(paint));
        self
    }

    pub fn get(&self, name: ColorName) -> Result<&ColorFn> {
        self.functions
            .get(&name)
            .ok_or_else(|| FormatterError::missing_color(name.as_str()))
    }

    /// Apply the function registered for `name`
    pub fn paint(&self, name: ColorName, text: &str) -> Result<String> {
        Ok(self.get(name)?(text))
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl fmt::Debug for ColorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.functions.keys().map(|name| name.as_str()).collect();
        names.sort_unstable();
        f.debug_struct("ColorTable").field("colors", &names).finish()
    }
}
