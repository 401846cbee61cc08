//! End to end frame conversion tests against known 16x4 reference frames

use yuvconv::{
    convert_frame, Conversion, ConversionSpec, ConvertError, Direction, PixelFormat,
};

const WIDTH: usize = 16;
const HEIGHT: usize = 4;

fn unhex(s: &str) -> Vec<u8> {
    let digits: String = s.chars().filter(|c| c.is_ascii_hexdigit()).collect();
    assert!(digits.len() % 2 == 0, "odd number of hex digits");

    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            let s = std::str::from_utf8(pair).unwrap();
            u8::from_str_radix(s, 16).unwrap()
        })
        .collect()
}

fn check(
    src_format: PixelFormat,
    src_hex: &str,
    conversion: Option<Conversion>,
    dst_format: PixelFormat,
    expected_hex: &str,
) {
    let src = unhex(src_hex);
    let expected = unhex(expected_hex);

    let got = convert_frame(
        &src,
        WIDTH,
        HEIGHT,
        src_format,
        None,
        conversion.map(ConversionSpec::new),
        dst_format,
    )
    .unwrap();

    assert_eq!(
        got, expected,
        "{src_format} -> {dst_format} with {conversion:?}"
    );
}

// 16x4 luma ramp with a chroma gradient, yuv420p layout
const GRADIENT_YUV420P: &str = "
    908d 8a88 8583 807e 7b79 7674 716f 6c6a
    908d 8a88 8583 807e 7b79 7674 716f 6c6a
    908d 8a88 8583 807e 7b79 7674 716f 6c6a
    908d 8a88 8583 807e 7b79 7674 716f 6c6a
    354a 5f74 8a9f b4ca 354a 5f74 8a9f b4ca
    354d 657d 95ad c5dd 354d 657d 95ad c5dd
";

// the same frame in nv12 layout
const GRADIENT_NV12: &str = "
    908d 8a88 8583 807e 7b79 7674 716f 6c6a
    908d 8a88 8583 807e 7b79 7674 716f 6c6a
    908d 8a88 8583 807e 7b79 7674 716f 6c6a
    908d 8a88 8583 807e 7b79 7674 716f 6c6a
    3535 4a4d 5f65 747d 8a95 9fad b4c5 cadd
    3535 4a4d 5f65 747d 8a95 9fad b4c5 cadd
";

// the same frame in yuv444p layout
const GRADIENT_YUV444P: &str = "
    908d 8a88 8583 807e 7b79 7674 716f 6c6a
    908d 8a88 8583 807e 7b79 7674 716f 6c6a
    908d 8a88 8583 807e 7b79 7674 716f 6c6a
    908d 8a88 8583 807e 7b79 7674 716f 6c6a
    3535 4a4a 5f5f 7474 8a8a 9f9f b4b4 caca
    3535 4a4a 5f5f 7474 8a8a 9f9f b4b4 caca
    3535 4a4a 5f5f 7474 8a8a 9f9f b4b4 caca
    3535 4a4a 5f5f 7474 8a8a 9f9f b4b4 caca
    3535 4d4d 6565 7d7d 9595 adad c5c5 dddd
    3535 4d4d 6565 7d7d 9595 adad c5c5 dddd
    3535 4d4d 6565 7d7d 9595 adad c5c5 dddd
    3535 4d4d 6565 7d7d 9595 adad c5c5 dddd
";

// the same frame in yuyv422 layout (chroma of odd rows is dropped)
const GRADIENT_YUYV422: &str = "
    9035 8d35 8a4a 884d 855f 8365 8074 7e7d
    7b8a 7995 769f 74ad 71b4 6fc5 6cca 6add
    9035 8d35 8a4a 884d 855f 8365 8074 7e7d
    7b8a 7995 769f 74ad 71b4 6fc5 6cca 6add
    9035 8d35 8a4a 884d 855f 8365 8074 7e7d
    7b8a 7995 769f 74ad 71b4 6fc5 6cca 6add
    9035 8d35 8a4a 884d 855f 8365 8074 7e7d
    7b8a 7995 769f 74ad 71b4 6fc5 6cca 6add
";

// hdtv luma ramp with a wider chroma gradient, nv12 layout
const HDTV_GRADIENT_NV12: &str = "
    aca5 9f99 928c 8680 7973 6d67 605a 544e
    aca5 9f99 928c 8680 7973 6d67 605a 544e
    aca5 9f99 928c 8680 7973 6d67 605a 544e
    aca5 9f99 928c 8680 7973 6d67 605a 544e
    2929 4143 5a5e 7379 8b94 a4af bdca d6e5
    2929 4143 5a5e 7379 8b94 a4af bdca d6e5
";

// the gradients mapped to rgba by each matrix variant. Each frame is
// both the expected yuv2rgb output and the rgb2yuv input of the matching
// variant below.
const SDTV_BASIC_RGBA: &str = "
    cc5c fbff c959 f8ff e140 ffff df3e ffff
    f824 ffff f622 ffff ff09 ffff ff07 ffff
    ff00 ffff ff00 ffff ff00 ffff ff00 ffff
    ff00 ffff ff00 ffff ff00 ffff ff00 ffff
    cc5c fbff c959 f8ff e140 ffff df3e ffff
    f824 ffff f622 ffff ff09 ffff ff07 ffff
    ff00 ffff ff00 ffff ff00 ffff ff00 ffff
    ff00 ffff ff00 ffff ff00 ffff ff00 ffff
    cc5c fbff c959 f8ff e140 ffff df3e ffff
    f824 ffff f622 ffff ff09 ffff ff07 ffff
    ff00 ffff ff00 ffff ff00 ffff ff00 ffff
    ff00 ffff ff00 ffff ff00 ffff ff00 ffff
    cc5c fbff c959 f8ff e140 ffff df3e ffff
    f824 ffff f622 ffff ff09 ffff ff07 ffff
    ff00 ffff ff00 ffff ff00 ffff ff00 ffff
    ff00 ffff ff00 ffff ff00 ffff ff00 ffff
";

const SDTV_ANALOG_RGBA: &str = "
    26df 0bff 23dc 08ff 42c0 2aff 40be 28ff
    5fa3 4aff 5da1 48ff 7b86 6aff 7984 68ff
    9868 8cff 9666 8aff b54b acff b349 aaff
    d12d cdff cf2b cbff ee10 efff ec0e edff
    26df 0bff 23dc 08ff 42c0 2aff 40be 28ff
    5fa3 4aff 5da1 48ff 7b86 6aff 7984 68ff
    9868 8cff 9666 8aff b54b acff b349 aaff
    d12d cdff cf2b cbff ee10 efff ec0e edff
    26df 0bff 23dc 08ff 42c0 2aff 40be 28ff
    5fa3 4aff 5da1 48ff 7b86 6aff 7984 68ff
    9868 8cff 9666 8aff b54b acff b349 aaff
    d12d cdff cf2b cbff ee10 efff ec0e edff
    26df 0bff 23dc 08ff 42c0 2aff 40be 28ff
    5fa3 4aff 5da1 48ff 7b86 6aff 7984 68ff
    9868 8cff 9666 8aff b54b acff b349 aaff
    d12d cdff cf2b cbff ee10 efff ec0e edff
";

const SDTV_DIGITAL_RGBA: &str = "
    1def 10ff 19eb 10ff 3ccc 21ff 3aca 1eff
    5dab 45ff 5aa8 43ff 7d89 6aff 7b87 67ff
    9e67 90ff 9b65 8eff be46 b5ff bc43 b2ff
    df24 d9ff dc22 d7ff eb02 ebff fd00 feff
    1def 10ff 19eb 10ff 3ccc 21ff 3aca 1eff
    5dab 45ff 5aa8 43ff 7d89 6aff 7b87 67ff
    9e67 90ff 9b65 8eff be46 b5ff bc43 b2ff
    df24 d9ff dc22 d7ff eb02 ebff fd00 feff
    1def 10ff 19eb 10ff 3ccc 21ff 3aca 1eff
    5dab 45ff 5aa8 43ff 7d89 6aff 7b87 67ff
    9e67 90ff 9b65 8eff be46 b5ff bc43 b2ff
    df24 d9ff dc22 d7ff eb02 ebff fd00 feff
    1def 10ff 19eb 10ff 3ccc 21ff 3aca 1eff
    5dab 45ff 5aa8 43ff 7d89 6aff 7b87 67ff
    9e67 90ff 9b65 8eff be46 b5ff bc43 b2ff
    df24 d9ff dc22 d7ff eb02 ebff fd00 feff
";

const SDTV_COMPUTER_RGBA: &str = "
    1def 00ff 19eb 00ff 3ccc 21ff 3aca 1eff
    5dab 45ff 5aa8 43ff 7d89 6aff 7b87 67ff
    9e67 90ff 9b65 8eff be46 b5ff bc43 b2ff
    df24 d9ff dc22 d7ff ff02 ffff fd00 feff
    1def 00ff 19eb 00ff 3ccc 21ff 3aca 1eff
    5dab 45ff 5aa8 43ff 7d89 6aff 7b87 67ff
    9e67 90ff 9b65 8eff be46 b5ff bc43 b2ff
    df24 d9ff dc22 d7ff ff02 ffff fd00 feff
    1def 00ff 19eb 00ff 3ccc 21ff 3aca 1eff
    5dab 45ff 5aa8 43ff 7d89 6aff 7b87 67ff
    9e67 90ff 9b65 8eff be46 b5ff bc43 b2ff
    df24 d9ff dc22 d7ff ff02 ffff fd00 feff
    1def 00ff 19eb 00ff 3ccc 21ff 3aca 1eff
    5dab 45ff 5aa8 43ff 7d89 6aff 7b87 67ff
    9e67 90ff 9b65 8eff be46 b5ff bc43 b2ff
    df24 d9ff dc22 d7ff ff02 ffff fd00 feff
";

const HDTV_BASIC_RGBA: &str = "
    e093 ffff d98c fcff f477 ffff ee71 ffff
    ff5a ffff ff54 ffff ff3f ffff ff39 ffff
    ff22 ffff ff1c ffff ff07 ffff ff01 ffff
    ff00 ffff ff00 ffff ff00 ffff ff00 ffff
    e093 ffff d98c fcff f477 ffff ee71 ffff
    ff5a ffff ff54 ffff ff3f ffff ff39 ffff
    ff22 ffff ff1c ffff ff07 ffff ff01 ffff
    ff00 ffff ff00 ffff ff00 ffff ff00 ffff
    e093 ffff d98c fcff f477 ffff ee71 ffff
    ff5a ffff ff54 ffff ff3f ffff ff39 ffff
    ff22 ffff ff1c ffff ff07 ffff ff01 ffff
    ff00 ffff ff00 ffff ff00 ffff ff00 ffff
    e093 ffff d98c fcff f477 ffff ee71 ffff
    ff5a ffff ff54 ffff ff3f ffff ff39 ffff
    ff22 ffff ff1c ffff ff07 ffff ff01 ffff
    ff00 ffff ff00 ffff ff00 ffff ff00 ffff
";

const HDTV_ANALOG_RGBA: &str = "
    22e4 0aff 1bdd 03ff 3ec7 2aff 38c1 24ff
    5ca9 4bff 56a3 45ff 7a8b 6dff 7485 67ff
    986d 8dff 9267 87ff b750 afff b14a a9ff
    d431 d1ff ce2b cbff f314 f3ff ed0e edff
    22e4 0aff 1bdd 03ff 3ec7 2aff 38c1 24ff
    5ca9 4bff 56a3 45ff 7a8b 6dff 7485 67ff
    986d 8dff 9267 87ff b750 afff b14a a9ff
    d431 d1ff ce2b cbff f314 f3ff ed0e edff
    22e4 0aff 1bdd 03ff 3ec7 2aff 38c1 24ff
    5ca9 4bff 56a3 45ff 7a8b 6dff 7485 67ff
    986d 8dff 9267 87ff b750 afff b14a a9ff
    d431 d1ff ce2b cbff f314 f3ff ed0e edff
    22e4 0aff 1bdd 03ff 3ec7 2aff 38c1 24ff
    5ca9 4bff 56a3 45ff 7a8b 6dff 7485 67ff
    986d 8dff 9267 87ff b750 afff b14a a9ff
    d431 d1ff ce2b cbff f314 f3ff ed0e edff
";

const HDTV_DIGITAL_RGBA: &str = "
    19f6 10ff 11ee 10ff 39d4 21ff 32cd 1aff
    5ab1 47ff 53aa 40ff 7c8f 6dff 7588 66ff
    9e6d 91ff 9766 8aff c04b b8ff b944 b1ff
    e128 deff da21 d7ff eb06 ebff fd10 feff
    19f6 10ff 11ee 10ff 39d4 21ff 32cd 1aff
    5ab1 47ff 53aa 40ff 7c8f 6dff 7588 66ff
    9e6d 91ff 9766 8aff c04b b8ff b944 b1ff
    e128 deff da21 d7ff eb06 ebff fd10 feff
    19f6 10ff 11ee 10ff 39d4 21ff 32cd 1aff
    5ab1 47ff 53aa 40ff 7c8f 6dff 7588 66ff
    9e6d 91ff 9766 8aff c04b b8ff b944 b1ff
    e128 deff da21 d7ff eb06 ebff fd10 feff
    19f6 10ff 11ee 10ff 39d4 21ff 32cd 1aff
    5ab1 47ff 53aa 40ff 7c8f 6dff 7588 66ff
    9e6d 91ff 9766 8aff c04b b8ff b944 b1ff
    e128 deff da21 d7ff eb06 ebff fd10 feff
";

const HDTV_COMPUTER_RGBA: &str = "
    19f6 00ff 11ee 00ff 39d4 21ff 32cd 1aff
    5ab1 46ff 53aa 3fff 7c8f 6dff 7588 66ff
    9e6d 91ff 9766 8aff c04b b8ff b944 b1ff
    e128 deff da21 d7ff ff06 ffff fd00 feff
    19f6 00ff 11ee 00ff 39d4 21ff 32cd 1aff
    5ab1 46ff 53aa 3fff 7c8f 6dff 7588 66ff
    9e6d 91ff 9766 8aff c04b b8ff b944 b1ff
    e128 deff da21 d7ff ff06 ffff fd00 feff
    19f6 00ff 11ee 00ff 39d4 21ff 32cd 1aff
    5ab1 46ff 53aa 3fff 7c8f 6dff 7588 66ff
    9e6d 91ff 9766 8aff c04b b8ff b944 b1ff
    e128 deff da21 d7ff ff06 ffff fd00 feff
    19f6 00ff 11ee 00ff 39d4 21ff 32cd 1aff
    5ab1 46ff 53aa 3fff 7c8f 6dff 7588 66ff
    9e6d 91ff 9766 8aff c04b b8ff b944 b1ff
    e128 deff da21 d7ff ff06 ffff fd00 feff
";

#[test]
fn yuv420p_to_yuv420p_is_identity() {
    check(
        PixelFormat::Yuv420p,
        GRADIENT_YUV420P,
        None,
        PixelFormat::Yuv420p,
        GRADIENT_YUV420P,
    );
}

#[test]
fn yuv420p_to_nv12_interleaves_chroma() {
    check(
        PixelFormat::Yuv420p,
        GRADIENT_YUV420P,
        None,
        PixelFormat::Nv12,
        GRADIENT_NV12,
    );
}

#[test]
fn nv12_to_yuv420p_deinterleaves_chroma() {
    check(
        PixelFormat::Nv12,
        GRADIENT_NV12,
        None,
        PixelFormat::Yuv420p,
        GRADIENT_YUV420P,
    );
}

#[test]
fn yuv420p_to_yuv444p_upsamples_chroma() {
    check(
        PixelFormat::Yuv420p,
        GRADIENT_YUV420P,
        None,
        PixelFormat::Yuv444p,
        GRADIENT_YUV444P,
    );
}

#[test]
fn yuv444p_to_yuv420p_keeps_last_chroma_of_each_block() {
    check(
        PixelFormat::Yuv444p,
        GRADIENT_YUV444P,
        None,
        PixelFormat::Yuv420p,
        GRADIENT_YUV420P,
    );
}

#[test]
fn yuv444p_to_nv12() {
    check(
        PixelFormat::Yuv444p,
        GRADIENT_YUV444P,
        None,
        PixelFormat::Nv12,
        GRADIENT_NV12,
    );
}

#[test]
fn yuv444p_to_yuyv422_packs_samples() {
    check(
        PixelFormat::Yuv444p,
        GRADIENT_YUV444P,
        None,
        PixelFormat::Yuyv422,
        GRADIENT_YUYV422,
    );
}

#[test]
fn yuyv422_to_yuv444p_unpacks_samples() {
    check(
        PixelFormat::Yuyv422,
        GRADIENT_YUYV422,
        None,
        PixelFormat::Yuv444p,
        GRADIENT_YUV444P,
    );
}

#[test]
fn rgba_to_rgba_keeps_alpha() {
    let rgba = "
        9a00 0aff 9a00 0aff 9b00 0bff 9b00 0bff
        9c00 0cff 9d00 0dff 9d00 0dff 9e00 0eff
        9e00 0eff 9f00 0fff a000 10ff a000 10ff
        a100 11ff a100 11ff a200 12ff a300 13ff
        9a00 0aff 9a00 0aff 9b00 0bff 9b00 0bff
        9c00 0cff 9d00 0dff 9d00 0dff 9e00 0eff
        9e00 0eff 9f00 0fff a000 10ff a000 10ff
        a100 11ff a100 11ff a200 12ff a300 13ff
        9a00 ffff 9a00 ffff 9b00 ffff 9b00 ffff
        9c00 ffff 9d00 ffff 9d00 ffff 9e00 ffff
        9e00 ffff 9f00 ffff a000 ffff a000 ffff
        a100 ffff a100 ffff a200 ffff a300 ffff
        9a00 ffff 9a00 ffff 9b00 ffff 9b00 ffff
        9c00 ffff 9d00 ffff 9d00 ffff 9e00 ffff
        9e00 ffff 9f00 ffff a000 ffff a000 ffff
        a100 ffff a100 ffff a200 ffff a300 ffff
    ";

    check(PixelFormat::Rgba, rgba, None, PixelFormat::Rgba, rgba);
}

#[test]
fn nv12_to_rgba_sdtv_basic() {
    check(
        PixelFormat::Nv12,
        GRADIENT_NV12,
        Some(Conversion::SdtvBasic),
        PixelFormat::Rgba,
        SDTV_BASIC_RGBA,
    );
}

#[test]
fn rgba_to_nv12_sdtv_basic() {
    check(
        PixelFormat::Rgba,
        SDTV_BASIC_RGBA,
        Some(Conversion::SdtvBasic),
        PixelFormat::Nv12,
        "
        8f8c 8584 7c7a 6e6d 6969 6969 6969 6969
        8f8c 8584 7c7a 6e6d 6969 6969 6969 6969
        8f8c 8584 7c7a 6e6d 6969 6969 6969 6969
        8f8c 8584 7c7a 6e6d 6969 6969 6969 6969
        3434 3c4f 416c 477f 4983 4983 4983 4983
        3434 3c4f 416c 477f 4983 4983 4983 4983
        ",
    );
}

#[test]
fn nv12_to_rgba_sdtv_analog() {
    check(
        PixelFormat::Nv12,
        GRADIENT_NV12,
        Some(Conversion::SdtvAnalog),
        PixelFormat::Rgba,
        SDTV_ANALOG_RGBA,
    );
}

#[test]
fn rgba_to_nv12_sdtv_analog() {
    check(
        PixelFormat::Rgba,
        SDTV_ANALOG_RGBA,
        Some(Conversion::SdtvAnalog),
        PixelFormat::Nv12,
        "
        8f8c 8987 8482 7f7d 7a78 7573 706e 6b69
        8f8c 8987 8482 7f7d 7a78 7573 706e 6b69
        8f8c 8987 8482 7f7d 7a78 7573 706e 6b69
        8f8c 8987 8482 7f7d 7a78 7573 706e 6b69
        3534 4a4d 5e65 737c 8995 9ead b4c5 c9dc
        3534 4a4d 5e65 737c 8995 9ead b4c5 c9dc
        ",
    );
}

#[test]
fn nv12_to_rgba_sdtv_digital() {
    check(
        PixelFormat::Nv12,
        GRADIENT_NV12,
        Some(Conversion::SdtvDigital),
        PixelFormat::Rgba,
        SDTV_DIGITAL_RGBA,
    );
}

#[test]
fn rgba_to_nv12_sdtv_digital() {
    check(
        PixelFormat::Rgba,
        SDTV_DIGITAL_RGBA,
        Some(Conversion::SdtvDigital),
        PixelFormat::Nv12,
        "
        908d 8987 8482 7f7c 7a78 7572 6f6e 6369
        908d 8987 8482 7f7c 7a78 7572 6f6e 6369
        908d 8987 8482 7f7c 7a78 7572 6f6e 6369
        908d 8987 8482 7f7c 7a78 7572 6f6e 6369
        3e33 494c 5f64 737d 8995 9ead b3c4 cadc
        3e33 494c 5f64 737d 8995 9ead b3c4 cadc
        ",
    );
}

#[test]
fn nv12_to_rgba_sdtv_computer() {
    check(
        PixelFormat::Nv12,
        GRADIENT_NV12,
        Some(Conversion::SdtvComputer),
        PixelFormat::Rgba,
        SDTV_COMPUTER_RGBA,
    );
}

#[test]
fn rgba_to_nv12_sdtv_computer() {
    check(
        PixelFormat::Rgba,
        SDTV_COMPUTER_RGBA,
        Some(Conversion::SdtvComputer),
        PixelFormat::Nv12,
        "
        8f8c 8987 8482 7f7d 7a78 7573 706e 6b69
        8f8c 8987 8482 7f7d 7a78 7573 706e 6b69
        8f8c 8987 8482 7f7d 7a78 7573 706e 6b69
        8f8c 8987 8482 7f7d 7a78 7573 706e 6b69
        3734 494c 5f64 737d 8a94 9ead b3c4 cadd
        3734 494c 5f64 737d 8a94 9ead b3c4 cadd
        ",
    );
}

#[test]
fn nv12_to_rgba_hdtv_basic() {
    check(
        PixelFormat::Nv12,
        HDTV_GRADIENT_NV12,
        Some(Conversion::HdtvBasic),
        PixelFormat::Rgba,
        HDTV_BASIC_RGBA,
    );
}

#[test]
fn rgba_to_nv12_hdtv_basic() {
    check(
        PixelFormat::Rgba,
        HDTV_BASIC_RGBA,
        Some(Conversion::HdtvBasic),
        PixelFormat::Nv12,
        "
        aba4 9b95 8884 7571 605c 4d49 4848 4848
        aba4 9b95 8884 7571 605c 4d49 4848 4848
        aba4 9b95 8884 7571 605c 4d49 4848 4848
        aba4 9b95 8884 7571 605c 4d49 4848 4848
        2929 3144 395f 426e 4c7e 558d 558e 558e
        2929 3144 395f 426e 4c7e 558d 558e 558e
        ",
    );
}

#[test]
fn nv12_to_rgba_hdtv_analog() {
    check(
        PixelFormat::Nv12,
        HDTV_GRADIENT_NV12,
        Some(Conversion::HdtvAnalog),
        PixelFormat::Rgba,
        HDTV_ANALOG_RGBA,
    );
}

#[test]
fn rgba_to_nv12_hdtv_analog() {
    check(
        PixelFormat::Rgba,
        HDTV_ANALOG_RGBA,
        Some(Conversion::HdtvAnalog),
        PixelFormat::Nv12,
        "
        aaa3 9e98 918b 857f 7872 6c66 5f59 534d
        aaa3 9e98 918b 857f 7872 6c66 5f59 534d
        aaa3 9e98 918b 857f 7872 6c66 5f59 534d
        aaa3 9e98 918b 857f 7872 6c66 5f59 534d
        2929 4142 595d 7278 8b94 a3af bdca d5e5
        2929 4142 595d 7278 8b94 a3af bdca d5e5
        ",
    );
}

#[test]
fn nv12_to_rgba_hdtv_digital() {
    check(
        PixelFormat::Nv12,
        HDTV_GRADIENT_NV12,
        Some(Conversion::HdtvDigital),
        PixelFormat::Rgba,
        HDTV_DIGITAL_RGBA,
    );
}

#[test]
fn rgba_to_nv12_hdtv_digital() {
    check(
        PixelFormat::Rgba,
        HDTV_DIGITAL_RGBA,
        Some(Conversion::HdtvDigital),
        PixelFormat::Nv12,
        "
        aca5 9e98 918b 847e 7872 6c66 5f59 4c57
        aca5 9e98 918b 847e 7872 6c66 5f59 4c57
        aca5 9e98 918b 847e 7872 6c66 5f59 4c57
        aca5 9e98 918b 847e 7872 6c66 5f59 4c57
        3427 4042 595d 7379 8a94 a4ae bdc9 d0de
        3427 4042 595d 7379 8a94 a4ae bdc9 d0de
        ",
    );
}

#[test]
fn nv12_to_rgba_hdtv_computer() {
    check(
        PixelFormat::Nv12,
        HDTV_GRADIENT_NV12,
        Some(Conversion::HdtvComputer),
        PixelFormat::Rgba,
        HDTV_COMPUTER_RGBA,
    );
}

#[test]
fn rgba_to_nv12_hdtv_computer() {
    check(
        PixelFormat::Rgba,
        HDTV_COMPUTER_RGBA,
        Some(Conversion::HdtvComputer),
        PixelFormat::Nv12,
        "
        aba5 9e98 918b 857f 7872 6c66 5f59 524e
        aba5 9e98 918b 857f 7872 6c66 5f59 524e
        aba5 9e98 918b 857f 7872 6c66 5f59 524e
        aba5 9e98 918b 857f 7872 6c66 5f59 524e
        2d28 4143 595e 7279 8a94 a4af bdc9 d5e4
        2d28 4143 595e 7279 8a94 a4af bdc9 d5e4
        ",
    );
}

#[test]
fn overflow_aborts_the_whole_frame() {
    // yiq of pure green produces a negative I component
    let rgba = vec![
        0, 255, 0, 255, //
        0, 255, 0, 255, //
        0, 255, 0, 255, //
        0, 255, 0, 255,
    ];

    let err = convert_frame(
        &rgba,
        2,
        2,
        PixelFormat::Rgba,
        None,
        Some(ConversionSpec::new(Conversion::Yiq)),
        PixelFormat::Yuv444p,
    )
    .unwrap_err();

    assert_eq!(
        err,
        ConvertError::Overflow {
            conversion: Conversion::Yiq,
            direction: Direction::Rgb2Yuv,
            a: 0,
            b: 255,
            c: 0,
        }
    );
}

#[test]
fn unit_refuses_cross_family_directions() {
    let rgba = vec![0u8; PixelFormat::Rgba.buffer_size(2, 2)];

    let err = convert_frame(
        &rgba,
        2,
        2,
        PixelFormat::Rgba,
        None,
        Some(ConversionSpec::new(Conversion::Unit)),
        PixelFormat::Yuv444p,
    )
    .unwrap_err();

    assert_eq!(
        err,
        ConvertError::UnsupportedDirection {
            conversion: Conversion::Unit,
            direction: Direction::Rgb2Yuv,
        }
    );
}

#[test]
fn dimension_and_buffer_validation() {
    let buf = vec![0u8; 96];

    assert_eq!(
        convert_frame(
            &buf,
            0,
            4,
            PixelFormat::Yuv420p,
            None,
            None,
            PixelFormat::Nv12
        ),
        Err(ConvertError::InvalidDimensions)
    );

    assert_eq!(
        convert_frame(
            &buf,
            15,
            4,
            PixelFormat::Yuv420p,
            None,
            None,
            PixelFormat::Nv12
        ),
        Err(ConvertError::OddDimensions {
            format: PixelFormat::Yuv420p,
            width: 15,
            height: 4,
        })
    );

    assert_eq!(
        convert_frame(
            &buf,
            16,
            8,
            PixelFormat::Yuv420p,
            None,
            None,
            PixelFormat::Nv12
        ),
        Err(ConvertError::InvalidBufferSize {
            format: PixelFormat::Yuv420p,
            width: 16,
            height: 8,
            expected: 192,
            got: 96,
        })
    );
}

#[test]
fn forced_direction_overrides_format_families() {
    // same layout in and out, but the samples go through the color matrix
    let src = unhex(GRADIENT_NV12);

    let reinterpreted = convert_frame(
        &src,
        WIDTH,
        HEIGHT,
        PixelFormat::Nv12,
        Some(Direction::Yuv2Rgb),
        Some(ConversionSpec::new(Conversion::SdtvComputer)),
        PixelFormat::Nv12,
    )
    .unwrap();

    assert_ne!(reinterpreted, src);
}

#[cfg(feature = "multi-thread")]
#[test]
fn multi_thread_output_matches_single_thread() {
    use yuvconv::convert_frame_multi_thread;

    let src = unhex(GRADIENT_NV12);

    let single = convert_frame(
        &src,
        WIDTH,
        HEIGHT,
        PixelFormat::Nv12,
        None,
        Some(ConversionSpec::new(Conversion::SdtvComputer)),
        PixelFormat::Rgba,
    )
    .unwrap();

    let multi = convert_frame_multi_thread(
        &src,
        WIDTH,
        HEIGHT,
        PixelFormat::Nv12,
        None,
        Some(ConversionSpec::new(Conversion::SdtvComputer)),
        PixelFormat::Rgba,
    )
    .unwrap();

    assert_eq!(single, multi);
}

#[cfg(feature = "multi-thread")]
#[test]
fn multi_thread_reports_overflow() {
    use yuvconv::convert_frame_multi_thread;

    let rgba = vec![0u8, 255, 0, 255].repeat(16 * 4);

    let err = convert_frame_multi_thread(
        &rgba,
        16,
        4,
        PixelFormat::Rgba,
        None,
        Some(ConversionSpec::new(Conversion::Yiq)),
        PixelFormat::Yuv444p,
    )
    .unwrap_err();

    assert!(matches!(err, ConvertError::Overflow { .. }));
}
