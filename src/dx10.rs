//! `DDS_HEADER_DXT10`, present when the pixel format FourCC is `DX10`.
//!
//! <https://learn.microsoft.com/en-us/windows/win32/direct3ddds/dds-header-dxt10>

use crate::error::DdsError;
use crate::flags::flag_set;
use crate::format::DxgiFormat;
use crate::header::{DDS_HEADER_SIZE, read_words};

/// Size of `DDS_HEADER_DXT10` on disk.
pub const DX10_HEADER_SIZE: usize = 20;

flag_set! {
    /// `DDS_HEADER_DXT10.miscFlag`.
    pub struct MiscFlags {
        /// `DDS_RESOURCE_MISC_TEXTURECUBE`
        texture_cube = 0x4,
    }
}

flag_set! {
    /// `DDS_HEADER_DXT10.miscFlags2`, decomposed with the bitmask test.
    ///
    /// The alpha mode is an enumeration, so these booleans are not exclusive:
    /// `unknown` (mask 0) is always true and `opaque` (mask 3) also sets
    /// `straight` and `premultiplied`. Use [`DdsHeaderDxt10::alpha_mode`] for
    /// the actual mode.
    pub struct AlphaModeFlags {
        /// `DDS_ALPHA_MODE_UNKNOWN`
        unknown = 0x0,
        /// `DDS_ALPHA_MODE_STRAIGHT`
        straight = 0x1,
        /// `DDS_ALPHA_MODE_PREMULTIPLIED`
        premultiplied = 0x2,
        /// `DDS_ALPHA_MODE_OPAQUE`
        opaque = 0x3,
        /// `DDS_ALPHA_MODE_CUSTOM`
        custom = 0x4,
    }
}

/// `D3D10_RESOURCE_DIMENSION`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u32)]
pub enum ResourceDimension {
    Unknown = 0,
    Buffer = 1,
    Texture1D = 2,
    Texture2D = 3,
    Texture3D = 4,
}

impl TryFrom<u32> for ResourceDimension {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Unknown,
            1 => Self::Buffer,
            2 => Self::Texture1D,
            3 => Self::Texture2D,
            4 => Self::Texture3D,
            other => return Err(other),
        })
    }
}

/// `DDS_ALPHA_MODE`, stored in `miscFlags2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u32)]
pub enum AlphaMode {
    Unknown = 0,
    Straight = 1,
    Premultiplied = 2,
    Opaque = 3,
    Custom = 4,
}

impl TryFrom<u32> for AlphaMode {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Unknown,
            1 => Self::Straight,
            2 => Self::Premultiplied,
            3 => Self::Opaque,
            4 => Self::Custom,
            other => return Err(other),
        })
    }
}

/// The `DDS_HEADER_DXT10` structure.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DdsHeaderDxt10 {
    pub dxgi_format: DxgiFormat,
    /// Raw `D3D10_RESOURCE_DIMENSION`; see [`Self::resource_dimension`].
    pub resource_dimension: u32,
    pub misc_flag: MiscFlags,
    pub array_size: u32,
    pub misc_flags2: AlphaModeFlags,
    /// Raw `miscFlags2`; see [`Self::alpha_mode`].
    pub misc_flags2_bits: u32,
}

impl DdsHeaderDxt10 {
    /// Decodes the extension header that follows the main header.
    ///
    /// Fails with [`DdsError::TooSmall`] when `data` ends before byte 148.
    pub(crate) fn read(data: &[u8]) -> Result<Self, DdsError> {
        let bytes = data
            .get(DDS_HEADER_SIZE..DDS_HEADER_SIZE + DX10_HEADER_SIZE)
            .ok_or_else(|| DdsError::dx10_too_small(data.len()))?;
        let words: [u32; DX10_HEADER_SIZE / 4] = read_words(bytes);

        Ok(Self {
            dxgi_format: DxgiFormat(words[0]),
            resource_dimension: words[1],
            misc_flag: MiscFlags::from_bits(words[2]),
            array_size: words[3],
            misc_flags2: AlphaModeFlags::from_bits(words[4]),
            misc_flags2_bits: words[4],
        })
    }

    /// The typed resource dimension, `None` for values outside the enumeration.
    pub fn resource_dimension(&self) -> Option<ResourceDimension> {
        ResourceDimension::try_from(self.resource_dimension).ok()
    }

    /// The alpha mode compared by equality, `None` for values outside the
    /// enumeration.
    pub fn alpha_mode(&self) -> Option<AlphaMode> {
        AlphaMode::try_from(self.misc_flags2_bits).ok()
    }
}
