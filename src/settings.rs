//! Generator settings
//!
//! Only where sheets are written and which styles run are adjustable.
//! Character appearance is fixed.

use crate::constants::OUTPUT_DIR;
use crate::generate::Style;
use std::path::PathBuf;

/// What a generator run produces and where
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    /// Directory receiving the PNG files (created if missing)
    pub output_dir: PathBuf,
    /// Styles to generate, in order
    pub styles: Vec<Style>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(OUTPUT_DIR),
            styles: Style::ALL.to_vec(),
        }
    }
}

impl GeneratorSettings {
    /// Same output directory, single style
    pub fn only(mut self, style: Style) -> Self {
        self.styles = vec![style];
        self
    }

    /// Pull `--out <dir>` out of an argument list, leaving the rest in place.
    ///
    /// Returns an error message when `--out` has no value.
    pub fn take_output_arg(mut self, args: &mut Vec<String>) -> Result<Self, String> {
        if let Some(i) = args.iter().position(|a| a == "--out" || a == "-o") {
            let dir = args
                .get(i + 1)
                .cloned()
                .ok_or_else(|| format!("'{}' requires a directory", args[i]))?;
            args.drain(i..=i + 1);
            self.output_dir = PathBuf::from(dir);
        }
        Ok(self)
    }
}
