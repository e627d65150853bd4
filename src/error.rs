// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A scan target or selected path does not exist.
    DirectoryNotFound(PathBuf),
    /// A thumbnail tile was resolved against a catalog it was not built from.
    StaleTileReference { generation: u64, current: u64 },
}

impl Error {
    /// Returns the i18n message key used when this error is shown as a caption.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "caption-io-error",
            Error::Config(_) => "caption-config-error",
            Error::DirectoryNotFound(_) => "caption-directory-not-found",
            Error::StaleTileReference { .. } => "caption-stale-tile",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::DirectoryNotFound(path) => {
                write!(f, "Directory not found: {}", path.display())
            }
            Error::StaleTileReference {
                generation,
                current,
            } => write!(
                f,
                "Stale tile reference: built for catalog {}, current is {}",
                generation, current
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn directory_not_found_mentions_path() {
        let err = Error::DirectoryNotFound(PathBuf::from("/nowhere/photos"));
        assert!(format!("{}", err).contains("/nowhere/photos"));
    }

    #[test]
    fn stale_tile_reports_both_generations() {
        let err = Error::StaleTileReference {
            generation: 2,
            current: 5,
        };
        let text = format!("{}", err);
        assert!(text.contains('2'));
        assert!(text.contains('5'));
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            Error::Io(String::new()).i18n_key(),
            Error::Config(String::new()).i18n_key(),
            Error::DirectoryNotFound(PathBuf::new()).i18n_key(),
            Error::StaleTileReference {
                generation: 0,
                current: 1,
            }
            .i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
