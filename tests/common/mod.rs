//! Builds synthetic DDS files for integration tests.
#![allow(dead_code)]

use zendds::{DDS_MAGIC, DxgiFormat, FourCC};

pub const DDSD_CAPS: u32 = 0x1;
pub const DDSD_HEIGHT: u32 = 0x2;
pub const DDSD_WIDTH: u32 = 0x4;
pub const DDSD_PITCH: u32 = 0x8;
pub const DDSD_PIXELFORMAT: u32 = 0x1000;
pub const DDSD_MIPMAPCOUNT: u32 = 0x20000;
pub const DDSD_LINEARSIZE: u32 = 0x80000;

pub const DDPF_ALPHAPIXELS: u32 = 0x1;
pub const DDPF_FOURCC: u32 = 0x4;
pub const DDPF_RGB: u32 = 0x40;

pub const DDSCAPS_TEXTURE: u32 = 0x1000;
pub const DDSCAPS2_CUBEMAP: u32 = 0x200;

/// Field-by-field description of a DDS file, written in on-disk order.
#[derive(Clone, Debug, Default)]
pub struct DdsBuilder {
    pub magic: Option<u32>,
    pub size: u32,
    pub flags: u32,
    pub height: u32,
    pub width: u32,
    pub pitch_or_linear_size: u32,
    pub depth: u32,
    pub mipmap_count: u32,
    pub reserved1: [u32; 11],
    pub pf_flags: u32,
    pub four_cc: u32,
    pub rgb_bit_count: u32,
    pub masks: [u32; 4],
    pub caps: u32,
    pub caps2: u32,
    pub caps3: u32,
    pub caps4: u32,
    pub reserved2: u32,
    pub dx10: Option<[u32; 5]>,
    pub payload: Vec<u8>,
}

impl DdsBuilder {
    fn base(width: u32, height: u32) -> Self {
        Self {
            size: 124,
            flags: DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT,
            width,
            height,
            caps: DDSCAPS_TEXTURE,
            ..Self::default()
        }
    }

    /// Legacy FourCC texture with `DDSD_LINEARSIZE` unset, so the pitch is computed.
    pub fn four_cc(code: FourCC, width: u32, height: u32) -> Self {
        Self {
            pf_flags: DDPF_FOURCC,
            four_cc: code.0,
            ..Self::base(width, height)
        }
    }

    /// DX10 texture with the given DXGI format.
    pub fn dx10(format: DxgiFormat, width: u32, height: u32) -> Self {
        Self {
            pf_flags: DDPF_FOURCC,
            four_cc: FourCC::DX10.0,
            dx10: Some([format.0, 3, 0, 1, 0]),
            ..Self::base(width, height)
        }
    }

    /// Uncompressed RGBA8 texture declaring its pitch.
    pub fn rgba8(width: u32, height: u32) -> Self {
        Self {
            flags: DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT | DDSD_PITCH,
            pitch_or_linear_size: width * 4,
            pf_flags: DDPF_RGB | DDPF_ALPHAPIXELS,
            rgb_bit_count: 32,
            masks: [0x0000_00FF, 0x0000_FF00, 0x00FF_0000, 0xFF00_0000],
            ..Self::base(width, height)
        }
    }

    /// Appends `len` bytes of a counting pattern.
    pub fn with_payload(mut self, len: usize) -> Self {
        self.payload = (0..len).map(|i| (i % 251) as u8).collect();
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut words = vec![
            self.magic.unwrap_or(DDS_MAGIC),
            self.size,
            self.flags,
            self.height,
            self.width,
            self.pitch_or_linear_size,
            self.depth,
            self.mipmap_count,
        ];
        words.extend_from_slice(&self.reserved1);
        words.extend_from_slice(&[32, self.pf_flags, self.four_cc, self.rgb_bit_count]);
        words.extend_from_slice(&self.masks);
        words.extend_from_slice(&[
            self.caps,
            self.caps2,
            self.caps3,
            self.caps4,
            self.reserved2,
        ]);
        if let Some(dx10) = self.dx10 {
            words.extend_from_slice(&dx10);
        }

        let mut out: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        out.extend_from_slice(&self.payload);
        out
    }
}
