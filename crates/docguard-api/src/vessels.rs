//! Approved vessel list loading

use docguard_domain::ApprovedVessels;
use std::path::Path;
use thiserror::Error;

/// Errors loading the approved vessel list
#[derive(Debug, Error)]
pub enum VesselListError {
    /// Failed to read the file
    #[error("Failed to read vessel list {path}: {source}")]
    Read {
        /// File that could not be read
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// File is not a JSON array of strings
    #[error("Vessel list {path} is not a JSON array of strings: {source}")]
    Parse {
        /// File that could not be parsed
        path: String,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

/// Load approved vessel names from a JSON array file
pub fn load_vessels<P: AsRef<Path>>(path: P) -> Result<ApprovedVessels, VesselListError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let contents = std::fs::read_to_string(path).map_err(|source| VesselListError::Read {
        path: display.clone(),
        source,
    })?;

    parse_vessels(&contents).map_err(|source| VesselListError::Parse {
        path: display,
        source,
    })
}

/// Parse approved vessel names from JSON text
pub fn parse_vessels(contents: &str) -> Result<ApprovedVessels, serde_json::Error> {
    let names: Vec<String> = serde_json::from_str(contents)?;
    Ok(ApprovedVessels::new(names))
}
