#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Default options must never panic
    let default = zendds::decode(data);

    // Every option combination must never panic either
    for manual_pitch in [true, false] {
        for block_size in [None, Some(0), Some(8), Some(16), Some(u32::MAX)] {
            let mut request = zendds::DecodeRequest::new(data).with_manual_pitch(manual_pitch);
            if let Some(block_size) = block_size {
                request = request.with_block_size(block_size);
            }
            if let Ok(file) = request.decode() {
                assert_eq!(
                    file.data_offset() + file.data().len() + file.data2().len(),
                    data.len()
                );
            }
        }
    }

    if let Ok(file) = default {
        let owned = file.clone().into_owned();
        assert_eq!(owned, file);
        assert!(zendds::likely_dds(data));
    }
});
