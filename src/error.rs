//! Error types for the restyle pipeline.
//!
//! Only two things can fail: getting the source pixels, and getting a
//! surface to draw on (or encoding what was drawn). Blank images, missing
//! eyes and bad style values are handled with fallbacks and never surface
//! here.

/// Broad category of a [`StyleError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source image could not be read, fetched or decoded
    InputAcquisition,
    /// No drawing surface could be allocated, or the result could not be encoded
    Rendering,
}

/// Errors returned by the restyle pipeline
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// The input bytes are not a decodable image
    #[error("Failed to decode source image: {0}")]
    Decode(#[from] image::ImageError),

    /// The input could not be read from disk
    #[error("Failed to read source image: {0}")]
    Io(#[from] std::io::Error),

    /// The input could not be fetched over the network
    #[error("Failed to fetch source image: {0}")]
    Fetch(String),

    /// A drawing surface or clip mask of this size could not be allocated
    #[error("Cannot allocate {width}x{height} drawing surface")]
    Surface {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// The rendered surface could not be encoded
    #[error("Failed to encode styled image: {0}")]
    Encode(String),
}

impl StyleError {
    /// Which of the two failure categories this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            StyleError::Decode(_) | StyleError::Io(_) | StyleError::Fetch(_) => {
                ErrorKind::InputAcquisition
            }
            StyleError::Surface { .. } | StyleError::Encode(_) => ErrorKind::Rendering,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let io = StyleError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.kind(), ErrorKind::InputAcquisition);
        assert_eq!(StyleError::Fetch("timeout".into()).kind(), ErrorKind::InputAcquisition);
        assert_eq!(
            StyleError::Surface { width: 0, height: 10 }.kind(),
            ErrorKind::Rendering
        );
        assert_eq!(StyleError::Encode("bad".into()).kind(), ErrorKind::Rendering);
    }

    #[test]
    fn test_surface_message() {
        let err = StyleError::Surface { width: 0, height: 12 };
        assert_eq!(err.to_string(), "Cannot allocate 0x12 drawing surface");
    }
}
