//! Startup errors
//!
//! The running simulation has no failure paths; everything here happens
//! before the first frame.

use thiserror::Error;

use crate::assets::AssetError;
use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Assets(#[from] AssetError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_startup_errors() {
        let err: Error = AssetError::NotFound("ship.png".into()).into();
        assert!(matches!(err, Error::Assets(_)));
        assert_eq!(err.to_string(), "Asset not found: ship.png");

        let err: Error = SettingsError::Invalid {
            field: "target_fps",
            reason: "must be positive".into(),
        }
        .into();
        assert!(err.to_string().contains("target_fps"));
    }
}
