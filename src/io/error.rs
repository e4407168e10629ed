//! Error types for grid, session and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all simulation operations
#[derive(Debug)]
pub enum LifeError {
    /// Grid dimension is zero or exceeds the supported maximum
    InvalidSize {
        /// Requested side length
        size: usize,
        /// Largest accepted side length
        max: usize,
    },

    /// Cell coordinates fall outside the grid
    OutOfBounds {
        /// Row index
        x: usize,
        /// Column index
        y: usize,
        /// Side length of the grid
        size: usize,
    },

    /// Preset coordinate cannot be placed on the active grid
    ///
    /// Only raised under [`CoordinatePolicy::Strict`]; the skipping policy
    /// reports the same coordinates through a `PresetReport` instead.
    ///
    /// [`CoordinatePolicy::Strict`]: crate::engine::presets::CoordinatePolicy::Strict
    InvalidPresetCoordinate {
        /// Row coordinate as written in the preset
        x: i32,
        /// Column coordinate as written in the preset
        y: i32,
        /// Side length of the grid
        size: usize,
    },

    /// No preset is registered under the requested name
    UnknownPreset {
        /// Name that failed to resolve
        name: String,
    },

    /// Operation is only permitted while the simulation is stopped
    SimulationRunning {
        /// Operation that was rejected
        operation: &'static str,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Drawing to the terminal failed
    Terminal {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, max } => {
                write!(f, "Invalid grid size {size} (must be between 1 and {max})")
            }
            Self::OutOfBounds { x, y, size } => {
                write!(f, "Cell ({x}, {y}) is outside the {size}x{size} grid")
            }
            Self::InvalidPresetCoordinate { x, y, size } => {
                write!(
                    f,
                    "Preset coordinate ({x}, {y}) does not fit the {size}x{size} grid"
                )
            }
            Self::UnknownPreset { name } => write!(f, "Unknown preset '{name}'"),
            Self::SimulationRunning { operation } => {
                write!(f, "Cannot {operation} while the simulation is running")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Terminal { source } => write!(f, "Terminal output failed: {source}"),
        }
    }
}

impl std::error::Error for LifeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::Terminal { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for simulation results
pub type Result<T> = std::result::Result<T, LifeError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LifeError {
    LifeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap a terminal I/O failure
pub const fn terminal_error(source: std::io::Error) -> LifeError {
    LifeError::Terminal { source }
}
