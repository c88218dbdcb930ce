#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(fields: &[(usize, u32)]) -> Vec<u8> {
    let mut dds = vec![0u8; 128];
    dds[0..4].copy_from_slice(b"DDS ");
    dds[4..8].copy_from_slice(&124u32.to_le_bytes()); // dwSize
    dds[76..80].copy_from_slice(&32u32.to_le_bytes()); // ddspf.dwSize
    for &(offset, value) in fields {
        dds[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }
    dds
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // DXT1 8x8, linear size 32
    let mut dxt1 = header(&[(8, 0x81007), (12, 8), (16, 8), (20, 32), (80, 0x4)]);
    dxt1[84..88].copy_from_slice(b"DXT1");
    dxt1.extend_from_slice(&[0x55; 40]);
    fs::write(format!("{dir}/dxt1_8x8.dds"), dxt1).unwrap();

    // RGBA8 2x2 with declared pitch
    let mut rgba = header(&[
        (8, 0x100F), (12, 2), (16, 2), (20, 8), (80, 0x41), (88, 32),
        (92, 0xFF), (96, 0xFF00), (100, 0xFF_0000), (104, 0xFF00_0000),
    ]);
    rgba.extend_from_slice(&[0x80; 16]);
    fs::write(format!("{dir}/rgba8_2x2.dds"), rgba).unwrap();

    // DX10 BC7 4x4, one mip
    let mut bc7 = header(&[(8, 0x1007), (12, 4), (16, 4), (80, 0x4)]);
    bc7[84..88].copy_from_slice(b"DX10");
    for word in [98u32, 3, 0, 1, 1] {
        bc7.extend_from_slice(&word.to_le_bytes());
    }
    bc7.extend_from_slice(&[0xAA; 16]);
    fs::write(format!("{dir}/dx10_bc7_4x4.dds"), bc7).unwrap();

    // GRGB 4x2 legacy packed
    let mut grgb = header(&[(8, 0x1007), (12, 2), (16, 4), (80, 0x4)]);
    grgb[84..88].copy_from_slice(b"GRGB");
    grgb.extend_from_slice(&[0x10; 16]);
    fs::write(format!("{dir}/grgb_4x2.dds"), grgb).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_magic.bin"), b"DDS ").unwrap();
    let mut dx10_short = header(&[(8, 0x1007), (80, 0x4)]);
    dx10_short[84..88].copy_from_slice(b"DX10");
    dx10_short.extend_from_slice(&[0; 19]);
    fs::write(format!("{dir}/dx10_truncated.bin"), dx10_short).unwrap();
    fs::write(format!("{dir}/unknown_fourcc.bin"), {
        let mut dds = header(&[(8, 0x1007), (12, 4), (16, 4), (80, 0x4)]);
        dds[84..88].copy_from_slice(b"ZZZZ");
        dds
    })
    .unwrap();

    println!("Generated seed corpus in {dir}/");
}
