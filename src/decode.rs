use alloc::borrow::Cow;

use crate::dx10::DdsHeaderDxt10;
use crate::error::DdsError;
use crate::header::{DDS_HEADER_SIZE, DDS_MAGIC, DdsHeader, HEADER_WORDS, read_words};
use crate::payload::{data_offset, payload_size, split_payload};

/// A decoded DDS file. Payloads may be borrowed (zero-copy) or owned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DdsFile<'a> {
    /// Always [`DDS_MAGIC`].
    pub magic: u32,
    pub header: DdsHeader,
    pub header_dxt10: Option<DdsHeaderDxt10>,
    data: Cow<'a, [u8]>,
    data2: Cow<'a, [u8]>,
}

impl<'a> DdsFile<'a> {
    /// The main surface payload (`bdata`), possibly truncated.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Bytes after the main surface (`bdata2`): mip levels, faces, slices.
    pub fn data2(&self) -> &[u8] {
        &self.data2
    }

    /// Offset of [`Self::data`] within the input: 128, or 148 with a DX10 header.
    pub fn data_offset(&self) -> usize {
        data_offset(self.header_dxt10.is_some())
    }

    /// Take ownership of the payloads (copies if borrowed).
    pub fn into_owned(self) -> DdsFile<'static> {
        DdsFile {
            magic: self.magic,
            header: self.header,
            header_dxt10: self.header_dxt10,
            data: Cow::Owned(self.data.into_owned()),
            data2: Cow::Owned(self.data2.into_owned()),
        }
    }

    /// Whether the payloads are borrowed (zero-copy from input).
    pub fn is_borrowed(&self) -> bool {
        matches!(self.data, Cow::Borrowed(_)) && matches!(self.data2, Cow::Borrowed(_))
    }

    pub(crate) fn borrowed(
        header: DdsHeader,
        header_dxt10: Option<DdsHeaderDxt10>,
        data: &'a [u8],
        data2: &'a [u8],
    ) -> Self {
        Self {
            magic: DDS_MAGIC,
            header,
            header_dxt10,
            data: Cow::Borrowed(data),
            data2: Cow::Borrowed(data2),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DdsFile<'_> {
    /// Payloads are written as `{ "byteLength": n }` rather than raw bytes.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        #[derive(serde::Serialize)]
        struct ByteLength {
            #[serde(rename = "byteLength")]
            byte_length: usize,
        }

        let mut state = serializer.serialize_struct("DdsFile", 5)?;
        state.serialize_field("magic", &self.magic)?;
        state.serialize_field("header", &self.header)?;
        state.serialize_field("header_dxt10", &self.header_dxt10)?;
        state.serialize_field("data", &ByteLength { byte_length: self.data.len() })?;
        state.serialize_field("data2", &ByteLength { byte_length: self.data2.len() })?;
        state.end()
    }
}

/// Decode options for a DDS buffer.
///
/// ```
/// use zendds::DecodeRequest;
///
/// # let bytes: &[u8] = &[];
/// // Trust `dwPitchOrLinearSize` instead of recomputing the pitch.
/// let result = DecodeRequest::new(bytes).with_manual_pitch(false).decode();
/// assert!(result.is_err());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    manual_pitch: bool,
    block_size: Option<u32>,
}

impl<'a> DecodeRequest<'a> {
    /// Manual pitch calculation on, block size looked up from the format.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            manual_pitch: true,
            block_size: None,
        }
    }

    /// Compute the pitch from the format (default) instead of trusting the
    /// declared pitch when `DDSD_PITCH` is set.
    ///
    /// A declared linear size (`DDSD_LINEARSIZE`) is always trusted.
    pub fn with_manual_pitch(mut self, manual_pitch: bool) -> Self {
        self.manual_pitch = manual_pitch;
        self
    }

    /// Bytes per 4x4 block to use when computing the pitch, replacing the
    /// lookup from the FourCC / DXGI format. `0` forces the uncompressed
    /// formulas.
    pub fn with_block_size(mut self, block_size: u32) -> Self {
        self.block_size = Some(block_size);
        self
    }

    /// Decode the buffer.
    pub fn decode(self) -> Result<DdsFile<'a>, DdsError> {
        let data = self.data;
        let head = data
            .first_chunk::<DDS_HEADER_SIZE>()
            .ok_or_else(|| DdsError::header_too_small(data.len()))?;
        let words: [u32; HEADER_WORDS] = read_words(head);

        if words[0] != DDS_MAGIC {
            return Err(DdsError::BadMagic { found: words[0] });
        }

        let header = DdsHeader::from_words(&words);
        debug!(
            "DDS {}x{} fourcc {} ({} bytes)",
            header.width,
            header.height,
            header.pixel_format.four_cc,
            data.len()
        );

        let header_dxt10 = if header.has_dx10_header() {
            let header_dxt10 = DdsHeaderDxt10::read(data)?;
            debug!("DX10 header, dxgi format {}", header_dxt10.dxgi_format.0);
            Some(header_dxt10)
        } else {
            None
        };

        let size = payload_size(
            &header,
            header_dxt10.as_ref(),
            self.manual_pitch,
            self.block_size,
        )?;
        let offset = data_offset(header_dxt10.is_some());
        let (main, rest) = split_payload(data, offset, size);
        if (main.len() as u64) < size {
            debug!("payload truncated: expected {size} bytes, got {}", main.len());
        }

        Ok(DdsFile::borrowed(header, header_dxt10, main, rest))
    }
}

/// Decode a DDS buffer with default options.
pub fn decode(data: &[u8]) -> Result<DdsFile<'_>, DdsError> {
    DecodeRequest::new(data).decode()
}

/// Cheap check for the `"DDS "` magic and a full header.
pub fn likely_dds(data: &[u8]) -> bool {
    data.first_chunk::<4>()
        .is_some_and(|magic| u32::from_le_bytes(*magic) == DDS_MAGIC)
        && data.len() >= DDS_HEADER_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn minimal(flags: u32, height: u32, pitch_or_linear_size: u32) -> Vec<u8> {
        let mut data = vec![0u8; DDS_HEADER_SIZE];
        data[0..4].copy_from_slice(&DDS_MAGIC.to_le_bytes());
        data[8..12].copy_from_slice(&flags.to_le_bytes());
        data[12..16].copy_from_slice(&height.to_le_bytes());
        data[20..24].copy_from_slice(&pitch_or_linear_size.to_le_bytes());
        data
    }

    #[test]
    fn too_small_is_checked_before_magic() {
        let err = decode(&[0u8; 127]).unwrap_err();
        assert!(matches!(err, DdsError::TooSmall { needed: 128, actual: 127, .. }));
    }

    #[test]
    fn bad_magic_reports_found_value() {
        let mut data = minimal(0x80000, 1, 1);
        data[0] = b'X';
        assert_eq!(
            decode(&data).unwrap_err(),
            DdsError::BadMagic { found: 0x2053_4458 }
        );
    }

    #[test]
    fn header_only_linear_size_clamps_payload() {
        let data = minimal(0x80000, 4, 64);
        let file = decode(&data).unwrap();
        assert_eq!(file.magic, DDS_MAGIC);
        assert!(file.data().is_empty());
        assert!(file.data2().is_empty());
        assert_eq!(file.data_offset(), 128);
        assert!(file.header_dxt10.is_none());
    }

    #[test]
    fn payload_and_remainder_borrow_input() {
        let mut data = minimal(0x80000, 1, 4);
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        let file = decode(&data).unwrap();
        assert_eq!(file.data(), &[1, 2, 3, 4]);
        assert_eq!(file.data2(), &[5, 6]);
        assert!(file.is_borrowed());
        assert_eq!(file.data().as_ptr(), data[128..].as_ptr());
    }

    #[test]
    fn into_owned_keeps_everything() {
        let owned = {
            let mut data = minimal(0x80000, 1, 2);
            data.extend_from_slice(&[9, 8, 7]);
            let borrowed = decode(&data).unwrap();
            let owned = borrowed.clone().into_owned();
            assert_eq!(owned, borrowed);
            owned
        };
        assert!(!owned.is_borrowed());
        assert_eq!(owned.data(), &[9, 8]);
        assert_eq!(owned.data2(), &[7]);
    }

    #[test]
    fn options_reach_payload_sizing() {
        // DDSD_PITCH with declared pitch 10; manual pitch over 2 px at 8 bpp is 2.
        let mut data = minimal(0x8, 1, 10);
        data[16..20].copy_from_slice(&2u32.to_le_bytes());
        data[88..92].copy_from_slice(&8u32.to_le_bytes());
        data.extend_from_slice(&[0xAA; 12]);

        assert_eq!(decode(&data).unwrap().data().len(), 2);
        let declared = DecodeRequest::new(&data).with_manual_pitch(false).decode().unwrap();
        assert_eq!(declared.data().len(), 10);
        let blocks = DecodeRequest::new(&data).with_block_size(8).decode().unwrap();
        assert_eq!(blocks.data().len(), 8);
    }

    #[test]
    fn likely_dds_checks_magic_and_length() {
        assert!(likely_dds(&minimal(0, 0, 0)));
        assert!(!likely_dds(&minimal(0, 0, 0)[..127]));
        assert!(!likely_dds(&[0u8; 128]));
        assert!(!likely_dds(&[]));
    }
}
