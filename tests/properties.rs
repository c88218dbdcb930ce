//! Properties that hold for arbitrary input.

mod common;

use common::*;
use proptest::prelude::*;
use zendds::*;

proptest! {
    #[test]
    fn short_input_is_too_small(data in proptest::collection::vec(any::<u8>(), 0..128)) {
        let err = decode(&data).unwrap_err();
        let is_too_small = matches!(err, DdsError::TooSmall { needed: 128, .. });
        prop_assert!(is_too_small);
    }

    #[test]
    fn wrong_magic_is_bad_magic(
        magic in any::<u32>().prop_filter("not DDS", |m| *m != DDS_MAGIC),
        tail in proptest::collection::vec(any::<u8>(), 124..400),
    ) {
        let mut data = magic.to_le_bytes().to_vec();
        data.extend_from_slice(&tail);
        prop_assert_eq!(decode(&data).unwrap_err(), DdsError::BadMagic { found: magic });
    }

    #[test]
    fn arbitrary_bytes_after_magic_never_panic(
        tail in proptest::collection::vec(any::<u8>(), 0..600),
        manual_pitch in any::<bool>(),
        block_size in proptest::option::of(any::<u32>()),
    ) {
        let mut data = DDS_MAGIC.to_le_bytes().to_vec();
        data.extend_from_slice(&tail);
        let mut request = DecodeRequest::new(&data).with_manual_pitch(manual_pitch);
        if let Some(block_size) = block_size {
            request = request.with_block_size(block_size);
        }
        if let Ok(file) = request.decode() {
            let offset = file.data_offset();
            prop_assert_eq!(offset + file.data().len() + file.data2().len(), data.len());
            prop_assert_eq!(file.header_dxt10.is_some(), file.header.has_dx10_header());
        }
    }

    #[test]
    fn dx10_presence_follows_flag_and_code(
        fourcc_flag in any::<bool>(),
        dx10_code in any::<bool>(),
        dxgi in 0u32..120,
    ) {
        let mut builder = DdsBuilder::dx10(DxgiFormat(dxgi), 4, 4).with_payload(64);
        builder.rgb_bit_count = 32;
        if !fourcc_flag {
            builder.pf_flags = 0;
        }
        if !dx10_code {
            builder.four_cc = FourCC::DXT1.0;
        }
        let data = builder.build();
        let file = decode(&data).unwrap();
        let expected = fourcc_flag && dx10_code;
        prop_assert_eq!(file.header_dxt10.is_some(), expected);
        prop_assert_eq!(file.data_offset(), if expected { 148 } else { 128 });
    }

    #[test]
    fn flag_records_match_is_flag_set(bits in any::<u32>()) {
        let flags = DdsFlags::from_bits(bits);
        prop_assert_eq!(flags.linear_size, is_flag_set(bits, 0x80000));
        prop_assert_eq!(flags.pitch, is_flag_set(bits, 0x8));
        let caps2 = DdsCaps2::from_bits(bits);
        prop_assert_eq!(caps2.volume, bits & 0x200000 != 0);
        let alpha = AlphaModeFlags::from_bits(bits);
        prop_assert!(alpha.unknown);
    }

    #[test]
    fn exactly_one_pitch_formula(
        override_size in proptest::option::of(prop_oneof![Just(0u32), Just(8), Just(16)]),
        code in prop_oneof![
            Just(FourCC::DXT1), Just(FourCC::DXT5), Just(FourCC::RGBG),
            Just(FourCC::DX10), Just(FourCC(0)),
        ],
        dxgi in proptest::option::of(0u32..120),
        width in 0u32..4096,
        bpp in 0u32..128,
    ) {
        let dxgi = dxgi.map(DxgiFormat);
        let formula = PitchFormula::select(override_size, code, dxgi);
        let expected = match formula {
            PitchFormula::BlockCompressed { block_size } => {
                prop_assert!(block_size > 0);
                u64::from(width.div_ceil(4)) * u64::from(block_size)
            }
            PitchFormula::LegacyPacked => {
                prop_assert!(is_legacy_packed(code, dxgi));
                u64::from((width + 1) >> 1) * 4
            }
            PitchFormula::BitsPerPixel => (u64::from(width) * u64::from(bpp) + 7) / 8,
        };
        prop_assert_eq!(row_pitch(override_size, width, bpp, code, dxgi), expected);
    }
}
