//! Payload boundaries: how many bytes after the headers belong to the main
//! surface, and what is left over.

use crate::dx10::{DX10_HEADER_SIZE, DdsHeaderDxt10};
use crate::error::DdsError;
use crate::header::{DDS_HEADER_SIZE, DdsHeader};
use crate::pitch::row_pitch;

/// Byte offset of the payload.
pub(crate) fn data_offset(has_dx10_header: bool) -> usize {
    if has_dx10_header {
        DDS_HEADER_SIZE + DX10_HEADER_SIZE
    } else {
        DDS_HEADER_SIZE
    }
}

/// Size in bytes of the main payload.
///
/// In priority order: the declared linear size, the declared pitch times the
/// height (only with `manual_pitch` off), or the computed pitch times the
/// height.
pub(crate) fn payload_size(
    header: &DdsHeader,
    header_dxt10: Option<&DdsHeaderDxt10>,
    manual_pitch: bool,
    block_size: Option<u32>,
) -> Result<u64, DdsError> {
    let height = u64::from(header.height);

    if header.flags.linear_size {
        debug!("payload size from linear size: {}", header.pitch_or_linear_size);
        return Ok(u64::from(header.pitch_or_linear_size));
    }

    if header.flags.pitch && !manual_pitch {
        debug!(
            "payload size from declared pitch {} x height {height}",
            header.pitch_or_linear_size
        );
        return Ok(u64::from(header.pitch_or_linear_size) * height);
    }

    let pitch = row_pitch(
        block_size,
        header.width,
        header.pixel_format.rgb_bit_count,
        header.pixel_format.four_cc,
        header_dxt10.map(|h| h.dxgi_format),
    );
    if pitch == 0 {
        return Err(DdsError::PitchUndeterminable);
    }
    debug!("payload size from computed pitch {pitch} x height {height}");
    // Saturates; `split_payload` clamps an oversized result to the input.
    Ok(pitch.saturating_mul(height))
}

/// Splits everything from `offset` into `size` payload bytes and the rest.
///
/// Both bounds are clamped to `data`, so a truncated file yields a short
/// payload and an empty remainder.
pub(crate) fn split_payload(data: &[u8], offset: usize, size: u64) -> (&[u8], &[u8]) {
    let start = offset.min(data.len());
    let end = usize::try_from(size)
        .ok()
        .and_then(|size| start.checked_add(size))
        .map_or(data.len(), |end| end.min(data.len()));
    (&data[start..end], &data[end..])
}
