//! Character sprite sheet generation
//!
//! One PNG strip per character style:
//! - Stick figure (line art with an outlined head)
//! - Pixel character (filled blocks)
//! - Silhouette (single filled polygon)

pub mod pixel;
pub mod silhouette;
pub mod stick_figure;

use crate::frames::FrameName;
use crate::settings::GeneratorSettings;
use crate::sheet::SpriteSheet;
use image::{ImageFormat, RgbaImage};
use log::{debug, info};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while writing sprite sheets
#[derive(Debug, thiserror::Error)]
pub enum SpriteError {
    #[error("Could not create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Drawing style of a character sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    StickFigure,
    Pixel,
    Silhouette,
}

impl Style {
    /// Generation order
    pub const ALL: [Style; 3] = [Style::StickFigure, Style::Pixel, Style::Silhouette];

    pub fn name(self) -> &'static str {
        match self {
            Style::StickFigure => "stick_figure",
            Style::Pixel => "pixel",
            Style::Silhouette => "silhouette",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Style::StickFigure => "stick_figure_character.png",
            Style::Pixel => "pixel_character.png",
            Style::Silhouette => "silhouette_character.png",
        }
    }

    /// Parse a style from its name or a short alias
    pub fn from_name(name: &str) -> Option<Style> {
        match name {
            "stick_figure" | "stick" => Some(Style::StickFigure),
            "pixel" => Some(Style::Pixel),
            "silhouette" => Some(Style::Silhouette),
            _ => None,
        }
    }

    /// Draw a single frame of this style onto a blank frame raster
    pub fn draw_frame(self, frame: &mut RgbaImage, name: FrameName) {
        match self {
            Style::StickFigure => stick_figure::draw_frame(frame, name),
            Style::Pixel => pixel::draw_frame(frame, name),
            Style::Silhouette => silhouette::draw_frame(frame, name),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render a full sheet in memory
pub fn render(style: Style) -> SpriteSheet {
    SpriteSheet::compose(|frame, name| style.draw_frame(frame, name))
}

/// Render `style` and write it as a PNG to `output_path`, creating the parent
/// directory if needed
pub fn generate(style: Style, output_path: &Path) -> Result<(), SpriteError> {
    if let Some(parent) = output_path.parent() {
        ensure_dir(parent)?;
    }

    let sheet = render(style);
    sheet
        .image()
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|source| SpriteError::Encode {
            path: output_path.to_path_buf(),
            source,
        })?;

    info!("Created: {} ({})", output_path.display(), style);
    Ok(())
}

/// Generate the given styles into `output_dir`, returning the written paths
/// in order
pub fn generate_styles(styles: &[Style], output_dir: &Path) -> Result<Vec<PathBuf>, SpriteError> {
    ensure_dir(output_dir)?;

    let mut written = Vec::with_capacity(styles.len());
    for &style in styles {
        let path = output_dir.join(style.file_name());
        generate(style, &path)?;
        written.push(path);
    }
    Ok(written)
}

/// Generate every style into `output_dir`
pub fn generate_all(output_dir: &Path) -> Result<Vec<PathBuf>, SpriteError> {
    generate_styles(&Style::ALL, output_dir)
}

/// Generate whatever `settings` asks for
pub fn run(settings: &GeneratorSettings) -> Result<Vec<PathBuf>, SpriteError> {
    info!(
        "Generating {} sprite sheet(s) into {}",
        settings.styles.len(),
        settings.output_dir.display()
    );
    generate_styles(&settings.styles, &settings.output_dir)
}

/// Idempotent directory creation
fn ensure_dir(dir: &Path) -> Result<(), SpriteError> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| SpriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!("Created directory {}", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::opaque_pixels;
    use crate::constants::{SHEET_HEIGHT, SHEET_WIDTH};

    /// Fresh, empty scratch directory unique to one test
    fn scratch_dir(test_name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "character_sprites_{}_{}",
            test_name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_style_names_round_trip() {
        for style in Style::ALL {
            assert_eq!(Style::from_name(style.name()), Some(style));
        }
        assert_eq!(Style::from_name("stick"), Some(Style::StickFigure));
        assert_eq!(Style::from_name("watercolor"), None);
    }

    #[test]
    fn test_render_dimensions_and_background() {
        for style in Style::ALL {
            let sheet = render(style);
            let img = sheet.image();
            assert_eq!(img.dimensions(), (SHEET_WIDTH, SHEET_HEIGHT));
            // Corners of every frame are empty
            for name in FrameName::ALL {
                let tile = sheet.tile(name);
                assert_eq!(tile.get_pixel(0, 0)[3], 0, "{} {}", style, name);
                assert_eq!(tile.get_pixel(31, 47)[3], 0, "{} {}", style, name);
                assert!(opaque_pixels(&tile) > 0, "{} {} is empty", style, name);
            }
            // Anything drawn is fully opaque
            assert!(img.pixels().all(|p| p[3] == 0 || p[3] == 255));
        }
    }

    #[test]
    fn test_poses_distinct_per_style() {
        for style in Style::ALL {
            let sheet = render(style);
            let idle = sheet.tile(FrameName::Idle);
            let walk = sheet.tile(FrameName::Walk1);
            let jump = sheet.tile(FrameName::Jump);
            assert_ne!(idle, walk, "{}", style);
            assert_ne!(idle, jump, "{}", style);
            assert_ne!(walk, jump, "{}", style);
        }
    }

    #[test]
    fn test_adjacent_walk_frames_differ_for_articulated_styles() {
        for style in [Style::StickFigure, Style::Pixel] {
            let sheet = render(style);
            for pair in [FrameName::Walk1, FrameName::Walk2, FrameName::Walk3, FrameName::Walk4]
                .windows(2)
            {
                assert_ne!(sheet.tile(pair[0]), sheet.tile(pair[1]), "{}", style);
            }
        }
    }

    #[test]
    fn test_silhouette_walk_frames_identical() {
        let sheet = render(Style::Silhouette);
        let walk1 = sheet.tile(FrameName::Walk1);
        for name in [FrameName::Walk2, FrameName::Walk3, FrameName::Walk4] {
            assert_eq!(sheet.tile(name), walk1);
        }
    }

    #[test]
    fn test_generate_all_writes_three_pngs() {
        let dir = scratch_dir("generate_all");
        let written = generate_all(&dir).unwrap();

        assert_eq!(written.len(), 3);
        assert_eq!(
            file_names(&dir),
            [
                "pixel_character.png",
                "silhouette_character.png",
                "stick_figure_character.png"
            ]
        );

        for path in &written {
            let img = image::open(path).unwrap().to_rgba8();
            assert_eq!(img.dimensions(), (192, 48));
            assert_eq!(img.get_pixel(0, 0)[3], 0);
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_rerun_is_idempotent_and_deterministic() {
        let dir = scratch_dir("rerun");
        let first = generate_all(&dir).unwrap();
        let bytes: Vec<Vec<u8>> = first.iter().map(|p| fs::read(p).unwrap()).collect();

        // Directory already exists on the second run
        let second = generate_all(&dir).unwrap();
        assert_eq!(first, second);
        for (path, before) in second.iter().zip(&bytes) {
            assert_eq!(&fs::read(path).unwrap(), before, "{}", path.display());
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_saved_png_matches_render() {
        let dir = scratch_dir("matches_render");
        let path = dir.join(Style::Pixel.file_name());
        generate(Style::Pixel, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(&decoded, render(Style::Pixel).image());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_run_single_style() {
        let dir = scratch_dir("run_single");
        let settings = GeneratorSettings {
            output_dir: dir.clone(),
            ..GeneratorSettings::default()
        }
        .only(Style::Silhouette);

        let written = run(&settings).unwrap();
        assert_eq!(written, vec![dir.join("silhouette_character.png")]);
        assert_eq!(file_names(&dir), ["silhouette_character.png"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_generate_fails_when_dir_is_a_file() {
        let dir = scratch_dir("blocked");
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("sprites");
        fs::write(&blocker, b"not a directory").unwrap();

        let err = generate_all(&blocker).unwrap_err();
        assert!(matches!(err, SpriteError::CreateDir { .. }));

        let _ = fs::remove_dir_all(&dir);
    }
}
