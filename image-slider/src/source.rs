//! Image sources accepted by the slider.
use std::{path::PathBuf, sync::Arc};

/// Specifies where a slide's image comes from.
///
/// Decoding and caching are left to the host; the slider only carries the
/// descriptor through to the view tree and to `on_press`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ImageSource {
    /// A remote or bundled URI. Plain strings convert into this variant.
    Uri(Arc<str>),
    /// A local file path.
    Path(PathBuf),
    /// Raw encoded bytes, shared cheaply between slides and ghost copies.
    Bytes(Arc<[u8]>),
}

impl ImageSource {
    /// Returns the URI if this source is one.
    pub fn uri(&self) -> Option<&str> {
        match self {
            Self::Uri(uri) => Some(uri),
            _ => None,
        }
    }
}

impl From<&str> for ImageSource {
    fn from(uri: &str) -> Self {
        Self::Uri(Arc::from(uri))
    }
}

impl From<String> for ImageSource {
    fn from(uri: String) -> Self {
        Self::Uri(Arc::from(uri))
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(Arc::from(bytes))
    }
}
