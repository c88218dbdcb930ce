//! Four-character codes, DXGI formats and the block-size tables.
//!
//! Two separate tables resolve a block size: the DXGI table, consulted only
//! when the FourCC is `DX10`, and the legacy FourCC table. A size of 0 means
//! "not block compressed"; it is never an error.

use core::fmt;

/// A four-character code stored as a little-endian `u32`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct FourCC(pub u32);

impl FourCC {
    /// `"DDS "`, the file magic.
    pub const DDS: Self = Self::from_bytes(*b"DDS ");
    /// BC1.
    pub const DXT1: Self = Self::from_bytes(*b"DXT1");
    /// BC2, premultiplied alpha.
    pub const DXT2: Self = Self::from_bytes(*b"DXT2");
    /// BC2.
    pub const DXT3: Self = Self::from_bytes(*b"DXT3");
    /// BC3, premultiplied alpha.
    pub const DXT4: Self = Self::from_bytes(*b"DXT4");
    /// BC3.
    pub const DXT5: Self = Self::from_bytes(*b"DXT5");
    /// BC4.
    pub const ATI1: Self = Self::from_bytes(*b"ATI1");
    /// BC5.
    pub const ATI2: Self = Self::from_bytes(*b"ATI2");
    /// A `DDS_HEADER_DXT10` follows the main header.
    pub const DX10: Self = Self::from_bytes(*b"DX10");
    /// R8G8_B8G8, legacy UYVY-style packing.
    pub const RGBG: Self = Self::from_bytes(*b"RGBG");
    /// G8R8_G8B8, legacy YUY2-style packing.
    pub const GRGB: Self = Self::from_bytes(*b"GRGB");

    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(bytes))
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

impl From<u32> for FourCC {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            for b in bytes {
                write!(f, "{}", b as char)?;
            }
            Ok(())
        } else {
            write!(f, "{:#010x}", self.0)
        }
    }
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCC({self})")
    }
}

/// A `DXGI_FORMAT` value from the DX10 header.
///
/// Unlisted values are valid; the constants only name the formats this
/// crate classifies plus the common uncompressed ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct DxgiFormat(pub u32);

impl DxgiFormat {
    pub const UNKNOWN: Self = Self(0);
    pub const R32G32B32A32_FLOAT: Self = Self(2);
    pub const R16G16B16A16_FLOAT: Self = Self(10);
    pub const R8G8B8A8_TYPELESS: Self = Self(27);
    pub const R8G8B8A8_UNORM: Self = Self(28);
    pub const R8G8B8A8_UNORM_SRGB: Self = Self(29);
    pub const R8_UNORM: Self = Self(61);
    pub const R8G8_B8G8_UNORM: Self = Self(68);
    pub const G8R8_G8B8_UNORM: Self = Self(69);
    pub const BC1_TYPELESS: Self = Self(70);
    pub const BC1_UNORM: Self = Self(71);
    pub const BC1_UNORM_SRGB: Self = Self(72);
    pub const BC2_TYPELESS: Self = Self(73);
    pub const BC2_UNORM: Self = Self(74);
    pub const BC2_UNORM_SRGB: Self = Self(75);
    pub const BC3_TYPELESS: Self = Self(76);
    pub const BC3_UNORM: Self = Self(77);
    pub const BC3_UNORM_SRGB: Self = Self(78);
    pub const BC4_TYPELESS: Self = Self(79);
    pub const BC4_UNORM: Self = Self(80);
    pub const BC4_SNORM: Self = Self(81);
    pub const BC5_TYPELESS: Self = Self(82);
    pub const BC5_UNORM: Self = Self(83);
    pub const BC5_SNORM: Self = Self(84);
    pub const B5G6R5_UNORM: Self = Self(85);
    pub const B8G8R8A8_UNORM: Self = Self(87);
    pub const B8G8R8A8_TYPELESS: Self = Self(90);
    pub const B8G8R8A8_UNORM_SRGB: Self = Self(91);
    pub const BC6H_TYPELESS: Self = Self(94);
    pub const BC6H_UF16: Self = Self(95);
    pub const BC6H_SF16: Self = Self(96);
    pub const BC7_TYPELESS: Self = Self(97);
    pub const BC7_UNORM: Self = Self(98);
    pub const BC7_UNORM_SRGB: Self = Self(99);
    pub const YUY2: Self = Self(107);

    /// The `DXGI_FORMAT_` suffix for named constants.
    pub fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::UNKNOWN => "UNKNOWN",
            Self::R32G32B32A32_FLOAT => "R32G32B32A32_FLOAT",
            Self::R16G16B16A16_FLOAT => "R16G16B16A16_FLOAT",
            Self::R8G8B8A8_TYPELESS => "R8G8B8A8_TYPELESS",
            Self::R8G8B8A8_UNORM => "R8G8B8A8_UNORM",
            Self::R8G8B8A8_UNORM_SRGB => "R8G8B8A8_UNORM_SRGB",
            Self::R8_UNORM => "R8_UNORM",
            Self::R8G8_B8G8_UNORM => "R8G8_B8G8_UNORM",
            Self::G8R8_G8B8_UNORM => "G8R8_G8B8_UNORM",
            Self::BC1_TYPELESS => "BC1_TYPELESS",
            Self::BC1_UNORM => "BC1_UNORM",
            Self::BC1_UNORM_SRGB => "BC1_UNORM_SRGB",
            Self::BC2_TYPELESS => "BC2_TYPELESS",
            Self::BC2_UNORM => "BC2_UNORM",
            Self::BC2_UNORM_SRGB => "BC2_UNORM_SRGB",
            Self::BC3_TYPELESS => "BC3_TYPELESS",
            Self::BC3_UNORM => "BC3_UNORM",
            Self::BC3_UNORM_SRGB => "BC3_UNORM_SRGB",
            Self::BC4_TYPELESS => "BC4_TYPELESS",
            Self::BC4_UNORM => "BC4_UNORM",
            Self::BC4_SNORM => "BC4_SNORM",
            Self::BC5_TYPELESS => "BC5_TYPELESS",
            Self::BC5_UNORM => "BC5_UNORM",
            Self::BC5_SNORM => "BC5_SNORM",
            Self::B5G6R5_UNORM => "B5G6R5_UNORM",
            Self::B8G8R8A8_UNORM => "B8G8R8A8_UNORM",
            Self::B8G8R8A8_TYPELESS => "B8G8R8A8_TYPELESS",
            Self::B8G8R8A8_UNORM_SRGB => "B8G8R8A8_UNORM_SRGB",
            Self::BC6H_TYPELESS => "BC6H_TYPELESS",
            Self::BC6H_UF16 => "BC6H_UF16",
            Self::BC6H_SF16 => "BC6H_SF16",
            Self::BC7_TYPELESS => "BC7_TYPELESS",
            Self::BC7_UNORM => "BC7_UNORM",
            Self::BC7_UNORM_SRGB => "BC7_UNORM_SRGB",
            Self::YUY2 => "YUY2",
            _ => return None,
        })
    }
}

impl From<u32> for DxgiFormat {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Bytes per 4x4 block, or 0 when the format is not block compressed.
///
/// `dxgi_format` is only consulted when `four_cc` is [`FourCC::DX10`].
pub fn block_size(four_cc: FourCC, dxgi_format: Option<DxgiFormat>) -> u32 {
    if four_cc == FourCC::DX10 {
        dxgi_format.map_or(0, dxgi_block_size)
    } else {
        four_cc_block_size(four_cc)
    }
}

fn dxgi_block_size(format: DxgiFormat) -> u32 {
    match format {
        DxgiFormat::BC1_TYPELESS
        | DxgiFormat::BC1_UNORM
        | DxgiFormat::BC1_UNORM_SRGB
        | DxgiFormat::BC4_TYPELESS
        | DxgiFormat::BC4_UNORM
        | DxgiFormat::BC4_SNORM => 8,
        DxgiFormat::BC2_TYPELESS
        | DxgiFormat::BC2_UNORM
        | DxgiFormat::BC2_UNORM_SRGB
        | DxgiFormat::BC3_TYPELESS
        | DxgiFormat::BC3_UNORM
        | DxgiFormat::BC3_UNORM_SRGB
        | DxgiFormat::BC5_TYPELESS
        | DxgiFormat::BC5_UNORM
        | DxgiFormat::BC5_SNORM
        | DxgiFormat::BC6H_TYPELESS
        | DxgiFormat::BC6H_UF16
        | DxgiFormat::BC6H_SF16
        | DxgiFormat::BC7_TYPELESS
        | DxgiFormat::BC7_UNORM
        | DxgiFormat::BC7_UNORM_SRGB => 16,
        _ => 0,
    }
}

fn four_cc_block_size(four_cc: FourCC) -> u32 {
    match four_cc {
        FourCC::DXT1 | FourCC::ATI1 => 8,
        FourCC::DXT2 | FourCC::DXT3 | FourCC::DXT4 | FourCC::DXT5 | FourCC::ATI2 => 16,
        _ => 0,
    }
}

/// Whether the format packs two pixels into four bytes (RGBG/GRGB/YUY2).
pub fn is_legacy_packed(four_cc: FourCC, dxgi_format: Option<DxgiFormat>) -> bool {
    matches!(four_cc, FourCC::RGBG | FourCC::GRGB)
        || matches!(
            dxgi_format,
            Some(DxgiFormat::R8G8_B8G8_UNORM | DxgiFormat::G8R8_G8B8_UNORM | DxgiFormat::YUY2)
        )
}
