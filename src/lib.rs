//! # zendds
//!
//! DDS (DirectDraw Surface) texture container decoder.
//!
//! Decodes the 128 byte header, the optional `DDS_HEADER_DXT10` extension
//! and the payload boundaries into typed structures. Flag words are
//! decomposed into records of named booleans.
//!
//! ## Zero-Copy Decoding
//!
//! Pixel data is never interpreted. [`DdsFile::data`] and [`DdsFile::data2`]
//! borrow directly from the input; call [`DdsFile::into_owned`] to detach
//! them.
//!
//! ## Payload Size
//!
//! The size of the main surface is taken from, in order:
//! - `dwPitchOrLinearSize` when `DDSD_LINEARSIZE` is set,
//! - `dwPitchOrLinearSize * height` when `DDSD_PITCH` is set and manual pitch
//!   calculation is turned off,
//! - a computed pitch times the height otherwise. The pitch comes from the
//!   block size of the FourCC / DXGI format, the legacy packed YUV rule, or
//!   the bit count.
//!
//! Everything after the main surface (further mip levels, cube faces, array
//! slices) is returned as [`DdsFile::data2`].
//!
//! ## Non-Goals
//!
//! - Encoding DDS files
//! - Decompressing BCn blocks or converting pixels
//! - Validating header fields beyond what is needed to find the payload
//!
//! ## Usage
//!
//! ```no_run
//! use zendds::DecodeRequest;
//!
//! let data: &[u8] = &[]; // your .dds bytes
//!
//! let file = zendds::decode(data)?;
//! println!(
//!     "{}x{} {}",
//!     file.header.width, file.header.height, file.header.pixel_format.four_cc
//! );
//! if let Some(dx10) = &file.header_dxt10 {
//!     println!("{:?} {:?}", dx10.dxgi_format.name(), dx10.alpha_mode());
//! }
//!
//! // Force an 8 byte block size when the format is mislabeled.
//! let file = DecodeRequest::new(data).with_block_size(8).decode()?;
//! println!("{} payload bytes", file.data().len());
//! # Ok::<(), zendds::DdsError>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod diag;

mod decode;
mod dx10;
mod error;
mod flags;
mod format;
mod header;
mod payload;
mod pitch;

// Re-exports
pub use decode::{DdsFile, DecodeRequest, decode, likely_dds};
pub use dx10::{
    AlphaMode, AlphaModeFlags, DX10_HEADER_SIZE, DdsHeaderDxt10, MiscFlags, ResourceDimension,
};
pub use error::DdsError;
pub use flags::is_flag_set;
pub use format::{DxgiFormat, FourCC, block_size, is_legacy_packed};
pub use header::{
    DDS_HEADER_SIZE, DDS_MAGIC, DdsCaps, DdsCaps2, DdsFlags, DdsHeader, DdsPixelFormat,
    PixelFormatFlags,
};
pub use pitch::{PitchFormula, row_pitch};
