//! `DDS_HEADER` and `DDS_PIXELFORMAT`.
//!
//! <https://learn.microsoft.com/en-us/windows/win32/direct3ddds/dds-header>

use crate::flags::flag_set;
use crate::format::FourCC;

/// `"DDS "` read as a little-endian `u32`.
pub const DDS_MAGIC: u32 = 0x2053_4444;

/// Magic plus the 124 byte `DDS_HEADER`; also the payload offset without DX10.
pub const DDS_HEADER_SIZE: usize = 128;

/// Number of `u32` words in the magic plus header region.
pub(crate) const HEADER_WORDS: usize = DDS_HEADER_SIZE / 4;

flag_set! {
    /// `DDS_HEADER.dwFlags`: which members contain valid data.
    pub struct DdsFlags {
        /// `DDSD_CAPS`
        caps = 0x1,
        /// `DDSD_HEIGHT`
        height = 0x2,
        /// `DDSD_WIDTH`
        width = 0x4,
        /// `DDSD_PITCH`: `pitch_or_linear_size` is a row pitch.
        pitch = 0x8,
        /// `DDSD_PIXELFORMAT`
        pixel_format = 0x1000,
        /// `DDSD_MIPMAPCOUNT`
        mipmap_count = 0x20000,
        /// `DDSD_LINEARSIZE`: `pitch_or_linear_size` is the top level size in bytes.
        linear_size = 0x80000,
        /// `DDSD_DEPTH`
        depth = 0x800000,
    }
}

flag_set! {
    /// `DDS_PIXELFORMAT.dwFlags`.
    pub struct PixelFormatFlags {
        /// `DDPF_ALPHAPIXELS`
        alpha_pixels = 0x1,
        /// `DDPF_ALPHA`
        alpha = 0x2,
        /// `DDPF_FOURCC`: `four_cc` is valid.
        fourcc = 0x4,
        /// `DDPF_RGB`
        rgb = 0x40,
        /// `DDPF_YUV`
        yuv = 0x200,
        /// `DDPF_LUMINANCE`
        luminance = 0x20000,
    }
}

flag_set! {
    /// `DDS_HEADER.dwCaps`.
    pub struct DdsCaps {
        /// `DDSCAPS_COMPLEX`
        complex = 0x8,
        /// `DDSCAPS_MIPMAP`
        mipmap = 0x400000,
        /// `DDSCAPS_TEXTURE`
        texture = 0x1000,
    }
}

flag_set! {
    /// `DDS_HEADER.dwCaps2`: cubemap faces and volume textures.
    pub struct DdsCaps2 {
        /// `DDSCAPS2_CUBEMAP`
        cubemap = 0x200,
        /// `DDSCAPS2_CUBEMAP_POSITIVEX`
        cubemap_positive_x = 0x400,
        /// `DDSCAPS2_CUBEMAP_NEGATIVEX`
        cubemap_negative_x = 0x800,
        /// `DDSCAPS2_CUBEMAP_POSITIVEY`
        cubemap_positive_y = 0x1000,
        /// `DDSCAPS2_CUBEMAP_NEGATIVEY`
        cubemap_negative_y = 0x2000,
        /// `DDSCAPS2_CUBEMAP_POSITIVEZ`
        cubemap_positive_z = 0x4000,
        /// `DDSCAPS2_CUBEMAP_NEGATIVEZ`
        cubemap_negative_z = 0x8000,
        /// `DDSCAPS2_VOLUME`
        volume = 0x200000,
    }
}

/// The `DDS_HEADER` structure, without the leading magic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DdsHeader {
    /// Structure size; 124 in well-formed files. Not validated.
    pub size: u32,
    pub flags: DdsFlags,
    pub height: u32,
    pub width: u32,
    /// Row pitch when `flags.pitch`, top level byte size when `flags.linear_size`.
    pub pitch_or_linear_size: u32,
    pub depth: u32,
    pub mipmap_count: u32,
    /// Opaque, kept verbatim.
    pub reserved1: [u32; 11],
    pub pixel_format: DdsPixelFormat,
    pub caps: DdsCaps,
    pub caps2: DdsCaps2,
    /// Opaque, kept verbatim.
    pub caps3: u32,
    /// Opaque, kept verbatim.
    pub caps4: u32,
    /// Opaque, kept verbatim.
    pub reserved2: u32,
}

/// The `DDS_PIXELFORMAT` structure nested in [`DdsHeader`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DdsPixelFormat {
    /// Structure size; 32 in well-formed files. Not validated.
    pub size: u32,
    pub flags: PixelFormatFlags,
    pub four_cc: FourCC,
    pub rgb_bit_count: u32,
    pub r_bit_mask: u32,
    pub g_bit_mask: u32,
    pub b_bit_mask: u32,
    pub a_bit_mask: u32,
}

impl DdsHeader {
    /// Size of the structure on disk.
    pub const SIZE: usize = 124;

    /// Builds the header from the magic plus header words.
    ///
    /// Word 0 is the magic and is left to the caller.
    pub(crate) fn from_words(words: &[u32; HEADER_WORDS]) -> Self {
        let mut reserved1 = [0u32; 11];
        reserved1.copy_from_slice(&words[8..19]);

        Self {
            size: words[1],
            flags: DdsFlags::from_bits(words[2]),
            height: words[3],
            width: words[4],
            pitch_or_linear_size: words[5],
            depth: words[6],
            mipmap_count: words[7],
            reserved1,
            pixel_format: DdsPixelFormat {
                size: words[19],
                flags: PixelFormatFlags::from_bits(words[20]),
                four_cc: FourCC(words[21]),
                rgb_bit_count: words[22],
                r_bit_mask: words[23],
                g_bit_mask: words[24],
                b_bit_mask: words[25],
                a_bit_mask: words[26],
            },
            caps: DdsCaps::from_bits(words[27]),
            caps2: DdsCaps2::from_bits(words[28]),
            caps3: words[29],
            caps4: words[30],
            reserved2: words[31],
        }
    }

    /// Whether a `DDS_HEADER_DXT10` follows this header.
    pub fn has_dx10_header(&self) -> bool {
        self.pixel_format.flags.fourcc && self.pixel_format.four_cc == FourCC::DX10
    }
}

/// Reads consecutive little-endian words from the start of `bytes`.
///
/// Words past the end of `bytes` stay zero.
pub(crate) fn read_words<const N: usize>(bytes: &[u8]) -> [u32; N] {
    let mut words = [0u32; N];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}
