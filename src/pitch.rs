//! Row pitch calculation.
//!
//! Microsoft recommends computing the pitch instead of trusting
//! `dwPitchOrLinearSize`:
//! <https://learn.microsoft.com/en-us/windows/win32/direct3ddds/dx-graphics-dds-pguide>

use crate::format::{DxgiFormat, FourCC, block_size, is_legacy_packed};

/// The formula used to compute a row pitch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PitchFormula {
    /// `((width + 3) / 4) * block_size`
    BlockCompressed { block_size: u32 },
    /// `((width + 1) >> 1) * 4`
    LegacyPacked,
    /// `(width * bits_per_pixel + 7) / 8`
    BitsPerPixel,
}

impl PitchFormula {
    /// Picks the formula for a format.
    ///
    /// `block_size_override` replaces the table lookup when `Some`, including
    /// `Some(0)`, which forces the non-block formulas.
    pub fn select(
        block_size_override: Option<u32>,
        four_cc: FourCC,
        dxgi_format: Option<DxgiFormat>,
    ) -> Self {
        let block_size = block_size_override.unwrap_or_else(|| block_size(four_cc, dxgi_format));
        if block_size > 0 {
            PitchFormula::BlockCompressed { block_size }
        } else if is_legacy_packed(four_cc, dxgi_format) {
            PitchFormula::LegacyPacked
        } else {
            PitchFormula::BitsPerPixel
        }
    }

    /// Bytes per row. Computed in `u64`, so it cannot overflow for `u32` inputs.
    pub fn row_pitch(self, width: u32, bits_per_pixel: u32) -> u64 {
        let width = u64::from(width);
        match self {
            PitchFormula::BlockCompressed { block_size } => {
                width.div_ceil(4) * u64::from(block_size)
            }
            PitchFormula::LegacyPacked => ((width + 1) >> 1) * 4,
            PitchFormula::BitsPerPixel => (width * u64::from(bits_per_pixel) + 7) / 8,
        }
    }
}

/// Row pitch in bytes for the given format. Zero means it cannot be determined.
pub fn row_pitch(
    block_size_override: Option<u32>,
    width: u32,
    bits_per_pixel: u32,
    four_cc: FourCC,
    dxgi_format: Option<DxgiFormat>,
) -> u64 {
    let formula = PitchFormula::select(block_size_override, four_cc, dxgi_format);
    let pitch = formula.row_pitch(width, bits_per_pixel);
    trace!("pitch formula {formula:?} for width {width}, {bits_per_pixel} bpp: {pitch} bytes");
    pitch
}
