use radar_data::InvalidScanLength;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, RadarError>;

#[derive(Debug, thiserror::Error)]
pub enum RadarError {
    #[error("No scan arrived within {0:?}.")]
    AcquisitionTimeout(Duration),
    #[error("The scan source has stopped producing sweeps.")]
    SourceDisconnected,
    #[error(transparent)]
    InvalidScanLength(#[from] InvalidScanLength),
    #[error("Failed to parse {}:{line}. {reason}", .path.display())]
    ReplayParse {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    #[error("No recorded sweep found in {}.", .0.display())]
    EmptyReplay(PathBuf),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Display error: {0}")]
    Display(String),
    #[error(transparent)]
    ConfigParse(#[from] toml::de::Error),
    #[error(transparent)]
    ConfigSerialize(#[from] toml::ser::Error),
    #[error(transparent)]
    IoError(#[from] io::Error),
}

impl RadarError {
    /// Acquisition failures skip the current frame; everything else ends the loop.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RadarError::AcquisitionTimeout(_) | RadarError::SourceDisconnected
        )
    }
}
