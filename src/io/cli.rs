//! Command-line interface for tile-set synthesis runs

use crate::geometry::style::{LineStyle, StyleParams};
use crate::io::configuration::{
    CornerStyle, Settings, TransitionMode, DEFAULT_AMPLITUDE, DEFAULT_BAND_WIDTH, DEFAULT_JITTER,
    DEFAULT_PALETTE, DEFAULT_STAIR_STEP, DEFAULT_TEXTURE_SCALE, DEFAULT_TILE_SIZE,
    DEFAULT_WAVELENGTH,
};
use crate::io::error::Result;
use crate::io::export::{synthesize_tile_set_with_progress, RunSummary, TexturePaths};
use crate::io::progress::ProgressManager;
use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Line style selector at the CLI surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LineStyleArg {
    /// Render the base boundary unmodified
    #[value(name = "straight_line")]
    StraightLine,
    /// Sine-wave displacement
    #[value(name = "wavy_smooth")]
    WavySmooth,
    /// Hash-driven step displacement
    #[value(name = "craggy")]
    Craggy,
    /// Triangle-wave displacement
    #[value(name = "zigzag")]
    Zigzag,
}

impl From<LineStyleArg> for LineStyle {
    fn from(arg: LineStyleArg) -> Self {
        match arg {
            LineStyleArg::StraightLine => Self::StraightLine,
            LineStyleArg::WavySmooth => Self::WavySmooth,
            LineStyleArg::Craggy => Self::Craggy,
            LineStyleArg::Zigzag => Self::Zigzag,
        }
    }
}

// Display renders the value name so clap can show enum defaults
impl fmt::Display for LineStyleArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(LineStyle::from(*self).as_str())
    }
}

/// Corner style selector at the CLI surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CornerStyleArg {
    /// Beveled wedge turns (default)
    #[value(name = "stepped")]
    Stepped,
    /// Rounded wedge turns
    #[value(name = "quarter")]
    Quarter,
    /// Accepted for compatibility; behaves as stepped
    #[value(name = "square")]
    Square,
}

impl From<CornerStyleArg> for CornerStyle {
    fn from(arg: CornerStyleArg) -> Self {
        match arg {
            CornerStyleArg::Stepped => Self::Stepped,
            CornerStyleArg::Quarter => Self::Quarter,
            CornerStyleArg::Square => Self::Square,
        }
    }
}

impl fmt::Display for CornerStyleArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(CornerStyle::from(*self).as_str())
    }
}

#[derive(Parser)]
#[command(name = "coastile")]
#[command(
    author,
    version,
    about = "Generate a 16-tile blob autotile set blending two materials"
)]
/// Command-line arguments for the tile-set synthesis tool
pub struct Cli {
    /// Output directory for the generated tile set
    #[arg(value_name = "OUTPUT_DIR")]
    pub output: PathBuf,

    /// Primary material texture (PNG); absent samples transparent
    #[arg(short = 'a', long)]
    pub material_a: Option<PathBuf>,

    /// Secondary material texture (PNG); absent samples transparent
    #[arg(short = 'b', long)]
    pub material_b: Option<PathBuf>,

    /// Transition-band texture composited over the boundary
    #[arg(short = 't', long)]
    pub transition: Option<PathBuf>,

    /// Tile edge length in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Transition band width in pixels
    #[arg(long, default_value_t = DEFAULT_BAND_WIDTH)]
    pub band_width: u32,

    /// Corner routing style
    #[arg(long, value_enum, default_value_t = CornerStyleArg::Stepped)]
    pub corner_style: CornerStyleArg,

    /// Boundary line style
    #[arg(long, value_enum, default_value_t = LineStyleArg::StraightLine)]
    pub line_style: LineStyleArg,

    /// Texture sampling scale factor
    #[arg(long, default_value_t = DEFAULT_TEXTURE_SCALE)]
    pub texture_scale: f64,

    /// Peak line-style displacement in pixels
    #[arg(long, default_value_t = DEFAULT_AMPLITUDE)]
    pub amplitude: f64,

    /// Line-style waveform period in pixels
    #[arg(long, default_value_t = DEFAULT_WAVELENGTH)]
    pub wavelength: f64,

    /// Craggy per-sample wobble in pixels
    #[arg(long, default_value_t = DEFAULT_JITTER)]
    pub jitter: f64,

    /// Craggy stair-step quantization in pixels (0 disables)
    #[arg(long, default_value_t = DEFAULT_STAIR_STEP)]
    pub stair_step: f64,

    /// Palette name recorded in the manifest
    #[arg(long, default_value = DEFAULT_PALETTE)]
    pub palette: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Regenerate even if the output manifest already exists
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Assemble the run settings this invocation describes
    pub fn settings(&self) -> Settings {
        Settings {
            tile_size: self.tile_size,
            band_width: self.band_width,
            corner_style: self.corner_style.into(),
            line_style: self.line_style.into(),
            texture_scale: self.texture_scale,
            transition_mode: TransitionMode::Texture,
            palette_name: self.palette.clone(),
            modulation: StyleParams {
                amplitude: self.amplitude,
                wavelength: self.wavelength,
                jitter: self.jitter,
                stair_step: self.stair_step,
            },
        }
    }

    /// The source texture paths this invocation names
    pub fn texture_paths(&self) -> TexturePaths {
        TexturePaths {
            material_a: self.material_a.clone(),
            material_b: self.material_b.clone(),
            transition: self.transition.clone(),
        }
    }
}

/// Drives one synthesis run from parsed CLI arguments
pub struct RunProcessor {
    cli: Cli,
}

impl RunProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the run
    ///
    /// Skips the run when the output manifest already exists, unless
    /// `--force` was given.
    ///
    /// # Errors
    ///
    /// Returns an error if synthesis or any output write fails.
    // Allow print for user feedback on run progress and results
    #[allow(clippy::print_stderr)]
    pub fn process(&self) -> Result<()> {
        let settings = self.cli.settings();
        let manifest_path = self.cli.output.join(settings.manifest_file_name());

        if manifest_path.exists() && !self.cli.force {
            if !self.cli.quiet {
                eprintln!(
                    "Skipping: {} (manifest exists, use --force to regenerate)",
                    manifest_path.display()
                );
            }
            return Ok(());
        }

        let progress = if self.cli.quiet {
            ProgressManager::disabled()
        } else {
            ProgressManager::new()
        };

        let start_time = Instant::now();
        let summary = synthesize_tile_set_with_progress(
            &self.cli.output,
            &self.cli.texture_paths(),
            &settings,
            &progress,
        )?;

        if !self.cli.quiet {
            Self::report(&summary, start_time.elapsed().as_secs_f64());
        }

        Ok(())
    }

    // Allow print for user feedback on completed runs
    #[allow(clippy::print_stderr)]
    fn report(summary: &RunSummary, elapsed_seconds: f64) {
        eprintln!(
            "Wrote {} tiles, {}, {}, {} in {elapsed_seconds:.2}s",
            summary.tile_files.len(),
            summary.sheet_file.display(),
            summary.rules_file.display(),
            summary.manifest_file.display()
        );
    }
}
