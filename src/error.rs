/// Message used when the input cannot hold the magic and `DDS_HEADER`.
pub(crate) const REASON_HEADER: &str =
    "file is smaller than the minimum size of a .dds file (magic + 124 byte header)";

/// Message used when the pixel format announces a DX10 header that does not fit.
pub(crate) const REASON_DX10_HEADER: &str = "header includes the fourCC code 'DX10' but the file \
     is not big enough to contain a 20 byte DDS_HEADER_DXT10";

/// Errors from DDS decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DdsError {
    #[error("{reason}: need {needed} bytes, got {actual}")]
    TooSmall {
        needed: usize,
        actual: usize,
        reason: &'static str,
    },

    #[error(
        "the first four bytes do not contain the magic 'DDS ' (0x20534444), found {found:#010x}"
    )]
    BadMagic { found: u32 },

    #[error(
        "pitch could not be manually calculated, so the payload size is unknown; \
         retry with manual pitch calculation disabled or with an explicit block size"
    )]
    PitchUndeterminable,
}

impl DdsError {
    pub(crate) fn header_too_small(actual: usize) -> Self {
        DdsError::TooSmall {
            needed: crate::header::DDS_HEADER_SIZE,
            actual,
            reason: REASON_HEADER,
        }
    }

    pub(crate) fn dx10_too_small(actual: usize) -> Self {
        DdsError::TooSmall {
            needed: crate::header::DDS_HEADER_SIZE + crate::dx10::DX10_HEADER_SIZE,
            actual,
            reason: REASON_DX10_HEADER,
        }
    }
}
