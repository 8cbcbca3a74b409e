//! # Display Flags
//!
//! Independent boolean switches toggled by the front end's buttons.

use crate::error::ViewError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the display switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayFlag {
    /// Vertex and apex labels.
    ShowLabels,
    /// Hover highlighting of faces.
    HighlightMode,
    /// Semi-transparent faces.
    TransparentMode,
    /// Height line from apex to base center.
    HeightVisible,
}

impl DisplayFlag {
    /// Every flag.
    pub const ALL: [DisplayFlag; 4] = [
        DisplayFlag::ShowLabels,
        DisplayFlag::HighlightMode,
        DisplayFlag::TransparentMode,
        DisplayFlag::HeightVisible,
    ];

    /// Name used by the front end.
    pub fn name(self) -> &'static str {
        match self {
            DisplayFlag::ShowLabels => "showLabels",
            DisplayFlag::HighlightMode => "highlightMode",
            DisplayFlag::TransparentMode => "transparentMode",
            DisplayFlag::HeightVisible => "heightVisible",
        }
    }
}

impl fmt::Display for DisplayFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DisplayFlag {
    type Err = ViewError;

    /// Parses a front-end flag name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use limas_view::DisplayFlag;
    ///
    /// let flag: DisplayFlag = "highlightMode".parse().unwrap();
    /// assert_eq!(flag, DisplayFlag::HighlightMode);
    /// assert!("wireframe".parse::<DisplayFlag>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisplayFlag::ALL
            .into_iter()
            .find(|flag| flag.name() == s)
            .ok_or_else(|| ViewError::UnknownFlag { name: s.to_string() })
    }
}

/// Current value of every display flag. All start off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFlags {
    /// Vertex and apex labels.
    pub show_labels: bool,
    /// Hover highlighting of faces.
    pub highlight_mode: bool,
    /// Semi-transparent faces.
    pub transparent_mode: bool,
    /// Height line from apex to base center.
    pub height_visible: bool,
}

impl DisplayFlags {
    /// Reads one flag.
    pub fn get(&self, flag: DisplayFlag) -> bool {
        match flag {
            DisplayFlag::ShowLabels => self.show_labels,
            DisplayFlag::HighlightMode => self.highlight_mode,
            DisplayFlag::TransparentMode => self.transparent_mode,
            DisplayFlag::HeightVisible => self.height_visible,
        }
    }

    /// Writes one flag and returns its previous value.
    pub fn set(&mut self, flag: DisplayFlag, value: bool) -> bool {
        let slot = match flag {
            DisplayFlag::ShowLabels => &mut self.show_labels,
            DisplayFlag::HighlightMode => &mut self.highlight_mode,
            DisplayFlag::TransparentMode => &mut self.transparent_mode,
            DisplayFlag::HeightVisible => &mut self.height_visible,
        };
        std::mem::replace(slot, value)
    }
}
