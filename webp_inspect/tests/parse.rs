use webp_inspect::{
    BackgroundColor, Diagnostic, FourCc, ScanEnd, Variant, WebpDocument, WebpParseError,
    report::Report,
};

fn logger() {
    _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::max())
        .format_file(true)
        .format_line_number(true)
        .try_init();
}

/// A `VP8 ` chunk with 14 bytes of payload, and a file size field of 26.
#[test]
fn simple_lossy_file() {
    logger();

    let mut bytes = b"RIFF".to_vec();
    bytes.extend(26_u32.to_le_bytes());
    bytes.extend_from_slice(b"WEBP");
    bytes.extend_from_slice(b"VP8 ");
    bytes.extend(14_u32.to_le_bytes());
    bytes.extend([0_u8; 14]);

    let doc: WebpDocument = webp_inspect::parse(&bytes).unwrap();

    assert_eq!(doc.variant(), Variant::Lossy);
    assert_eq!(doc.variant_header.payload_size, 14);
    assert_eq!(doc.container_header.declared_file_size, 30);
    assert!(doc.extended_features.is_none());
    assert!(doc.canvas.is_none());
    assert!(doc.animation.is_none());

    // the stored size doesn't count `RIFF` or itself, so 34 bytes is right
    assert_eq!(bytes.len(), 34);
    assert!(doc.is_clean(), "{:?}", doc.diagnostics);
}

#[test]
fn well_formed_files_are_clean() {
    logger();

    let bytes = make_webp_sample(vec![(b"VP8L", [0x2F_u8, 0, 0, 0, 0].as_slice())]);
    let doc = webp_inspect::parse(&bytes).unwrap();

    assert_eq!(doc.variant(), Variant::Lossless);
    assert!(doc.is_clean(), "{:?}", doc.diagnostics);
    assert_eq!(
        u64::from(doc.container_header.declared_file_size) + 4,
        bytes.len() as u64
    );
}

#[test]
fn extended_still_image() {
    logger();

    let vp8x = vp8x(0b0011_1100, 1023, 767);
    let bytes = make_webp_sample(vec![
        (b"VP8X", vp8x.as_slice()),
        (b"ICCP", [0_u8; 12].as_slice()),
        (b"VP8 ", [0_u8; 7].as_slice()),
        (b"EXIF", [0_u8; 3].as_slice()),
    ]);

    let doc = webp_inspect::parse(&bytes).unwrap();
    assert_eq!(doc.variant(), Variant::Extended);

    let features = doc.extended_features.unwrap();
    assert!(features.icc());
    assert!(features.alpha());
    assert!(features.exif());
    assert!(features.xmp());
    assert!(!features.animation());

    let canvas = doc.canvas.unwrap();
    assert_eq!((canvas.width, canvas.height), (1024, 768));

    assert!(doc.animation.is_none());
    assert!(doc.is_clean());
}

#[test]
fn animated_file() {
    logger();

    let vp8x = vp8x(0b0001_0010, 99, 49);
    let anim = anim_payload([0xFF, 0x80, 0x00, 0xFF], 7);
    let frame_a = anmf_payload((0, 0), (100, 50), 40, 0b00, 10);
    let frame_b = anmf_payload((5, 10), (20, 20), 80, 0b11, 4);
    let frame_c = anmf_payload((1, 1), (2, 2), 120, 0b10, 0);

    let bytes = make_webp_sample(vec![
        (b"VP8X", vp8x.as_slice()),
        (b"ANIM", anim.as_slice()),
        (b"ANMF", frame_a.as_slice()),
        (b"ANMF", frame_b.as_slice()),
        (b"ANMF", frame_c.as_slice()),
    ]);

    let doc = webp_inspect::parse(&bytes).unwrap().with_source_path("spinner.webp");
    assert!(doc.extended_features.unwrap().animation());
    assert_eq!(doc.canvas.unwrap().width, 100);

    let animation = doc.animation.as_ref().unwrap();
    assert_eq!(
        animation.background_color,
        BackgroundColor::from_bgra([0xFF, 0x80, 0x00, 0xFF])
    );
    assert_eq!(animation.loop_count, 7);
    assert!(!animation.loops_forever());
    assert_eq!(animation.scan_end, ScanEnd::ReachedFileSize);

    let frames = &animation.frames;
    assert_eq!(frames.len(), 3);

    assert_eq!(frames[0].offset, 44);
    assert_eq!((frames[0].frame_width, frames[0].frame_height), (100, 50));
    assert_eq!(frames[0].frame_duration, 40);
    assert_eq!(frames[0].payload_bytes(&bytes).len(), 10);

    // frame a's payload is 26 bytes, so b starts 34 bytes after it
    assert_eq!(frames[1].offset, 44 + 34);
    assert_eq!((frames[1].x_offset(), frames[1].y_offset()), (10, 20));
    assert!(frames[1].blending_method);
    assert!(frames[1].disposal_method);

    assert_eq!(frames[2].offset, 44 + 34 + 28);
    assert_eq!(frames[2].frame_duration, 120);

    // all of the durations, in display order
    let durations: Vec<u32> = frames.iter().map(|f| f.frame_duration).collect();
    assert_eq!(durations, vec![40, 80, 120]);

    let text = Report(&doc).to_string();
    assert!(text.starts_with("Path: spinner.webp\n"));
    assert_eq!(text.matches("Animation frame:").count(), 3);
    assert!(text.contains("Background color (BGRA): [255, 128, 0, 255]"));
}

/// Frames followed by metadata chunks stop the scan without failing.
#[test]
fn animation_followed_by_metadata() {
    logger();

    let vp8x = vp8x(0b0000_1010, 9, 9);
    let anim = anim_payload([0; 4], 0);
    let frame = anmf_payload((0, 0), (10, 10), 100, 0, 4);

    let bytes = make_webp_sample(vec![
        (b"VP8X", vp8x.as_slice()),
        (b"ANIM", anim.as_slice()),
        (b"ANMF", frame.as_slice()),
        (b"ANMF", frame.as_slice()),
        (b"EXIF", [1_u8, 2, 3, 4, 5, 6].as_slice()),
    ]);

    let doc = webp_inspect::parse(&bytes).unwrap();
    let animation = doc.animation.as_ref().unwrap();

    assert_eq!(animation.frames.len(), 2);
    assert!(animation.loops_forever());

    let exif_offset = (44 + 2 * (8 + 20)) as u32;
    assert_eq!(
        animation.scan_end,
        ScanEnd::UnexpectedTag {
            offset: exif_offset,
            found: FourCc::new(*b"EXIF"),
        }
    );
    assert_eq!(
        doc.diagnostics,
        vec![Diagnostic::AnimationChainBroken {
            offset: exif_offset,
            found: FourCc::new(*b"EXIF"),
        }]
    );
}

/// Bytes past the declared size are reported, but the file still parses.
#[test]
fn trailing_bytes_are_reported() {
    logger();

    let mut bytes = b"RIFF".to_vec();
    bytes.extend(26_u32.to_le_bytes());
    bytes.extend_from_slice(b"WEBP");
    bytes.extend_from_slice(b"VP8 ");
    bytes.extend(14_u32.to_le_bytes());
    bytes.extend([0_u8; 20]);
    assert_eq!(bytes.len(), 40);

    let doc = webp_inspect::parse(&bytes).unwrap();
    assert_eq!(doc.variant(), Variant::Lossy);
    assert_eq!(doc.container_header.declared_file_size, 30);
    assert!(!doc.is_clean());
    assert_eq!(
        doc.diagnostics,
        vec![Diagnostic::FileSizeMismatch {
            expected_len: 34,
            actual_len: 40,
        }]
    );
}

/// A file cut short is fine as long as every field we read is still there.
#[test]
fn short_file_with_all_fields_is_reported() {
    logger();

    let mut bytes = b"RIFF".to_vec();
    bytes.extend(26_u32.to_le_bytes());
    bytes.extend_from_slice(b"WEBP");
    bytes.extend_from_slice(b"VP8 ");
    bytes.extend(14_u32.to_le_bytes());
    bytes.extend([0_u8; 4]);
    assert_eq!(bytes.len(), 24);

    let doc = webp_inspect::parse(&bytes).unwrap();
    assert_eq!(doc.variant(), Variant::Lossy);
    assert_eq!(doc.variant_header.payload_size, 14);
    assert_eq!(
        doc.diagnostics,
        vec![Diagnostic::FileSizeMismatch {
            expected_len: 34,
            actual_len: 24,
        }]
    );

    let text = Report(&doc).to_string();
    assert!(
        text.contains("Warning: File header implies a length of `34` bytes"),
        "{text}"
    );
}

#[test]
fn unknown_variant_is_reported() {
    logger();

    let bytes = make_webp_sample(vec![(b"VP9 ", [0_u8; 8].as_slice())]);
    let doc = webp_inspect::parse(&bytes).unwrap();

    assert_eq!(doc.variant(), Variant::Unknown(FourCc::new(*b"VP9 ")));
    assert!(doc.extended_features.is_none());
    assert_eq!(
        doc.diagnostics,
        vec![Diagnostic::UnknownVariant(FourCc::new(*b"VP9 "))]
    );
}

#[test]
fn wrong_format_tag_still_parses() {
    logger();

    let mut bytes = make_webp_sample(vec![(b"VP8 ", [0_u8; 4].as_slice())]);
    bytes[8..12].copy_from_slice(b"WAVE");

    assert!(!webp_inspect::magic_number(&bytes));

    let doc = webp_inspect::parse(&bytes).unwrap();
    assert_eq!(doc.variant(), Variant::Lossy);
    assert_eq!(
        doc.diagnostics,
        vec![Diagnostic::UnexpectedFormatTag(FourCc::new(*b"WAVE"))]
    );
}

#[test]
fn short_inputs_are_truncated() {
    logger();

    // no header
    for len in 0..12 {
        let bytes = vec![0_u8; len];
        assert!(matches!(
            webp_inspect::parse(&bytes),
            Err(WebpParseError::TruncatedInput { .. })
        ));
    }

    // a header, but no variant chunk
    let bytes = b"RIFF\x04\x00\x00\x00WEBP";
    assert!(matches!(
        webp_inspect::parse(bytes),
        Err(WebpParseError::TruncatedInput { offset: 12, .. })
    ));

    // `VP8X` whose payload is cut off anywhere before the canvas size ends
    let vp8x = vp8x(0, 0, 0);
    let full = make_webp_sample(vec![(b"VP8X", vp8x.as_slice())]);
    for len in 16..30 {
        assert!(
            matches!(
                webp_inspect::parse(&&full[..len]),
                Err(WebpParseError::TruncatedInput { .. })
            ),
            "{len} bytes of `VP8X` file should be truncated"
        );
    }
    assert!(webp_inspect::parse(&full).is_ok());
}

/// An animation flag with no `ANIM` chunk behind it can't be parsed.
#[test]
fn animation_flag_without_chunks_is_truncated() {
    logger();

    let vp8x = vp8x(0b0000_0010, 0, 0);
    let bytes = make_webp_sample(vec![(b"VP8X", vp8x.as_slice())]);

    assert!(matches!(
        webp_inspect::parse(&bytes),
        Err(WebpParseError::TruncatedInput { offset: 30, .. })
    ));
}

/// helper: create the `VP8X` chunk payload
fn vp8x(flags: u8, width_minus_one: u32, height_minus_one: u32) -> Vec<u8> {
    let mut bytes = vec![flags, 0, 0, 0];
    bytes.extend_from_slice(&width_minus_one.to_le_bytes()[..3]);
    bytes.extend_from_slice(&height_minus_one.to_le_bytes()[..3]);
    bytes
}

/// helper: create the `ANIM` chunk payload
fn anim_payload(bgra: [u8; 4], loop_count: u16) -> Vec<u8> {
    let mut bytes = bgra.to_vec();
    bytes.extend(loop_count.to_le_bytes());
    bytes
}

/// helper: create an `ANMF` chunk payload with `data_len` bytes of frame data
fn anmf_payload(
    (x, y): (u32, u32),
    (width, height): (u32, u32),
    duration: u32,
    flags: u8,
    data_len: usize,
) -> Vec<u8> {
    let mut bytes = Vec::new();
    for value in [x, y, width - 1, height - 1, duration] {
        bytes.extend_from_slice(&value.to_le_bytes()[..3]);
    }
    bytes.push(flags);
    bytes.extend(std::iter::repeat_n(0xAB_u8, data_len));
    bytes
}

/// helper: build a file to make these tests readable
fn make_webp_sample(chunks: Vec<(&[u8; 4], &[u8])>) -> Vec<u8> {
    let mut bytes = Vec::new();

    // add the file header
    bytes.extend_from_slice(b"RIFF");
    bytes.extend([0; 4]); // we'll fill this in just a sec
    bytes.extend_from_slice(b"WEBP");

    // make each chunk
    for (chunk_fourcc, chunk_data) in chunks.iter() {
        bytes.extend_from_slice(chunk_fourcc.as_slice());
        bytes.extend((chunk_data.len() as u32).to_le_bytes());
        bytes.extend_from_slice(chunk_data);

        // add an extra padding byte if the size is odd
        if chunk_data.len() % 2 != 0 {
            bytes.push(0_u8);
        }
    }

    // with all chunks done, we set the file size
    let total_size_of_chunks: u32 = (bytes.len() as u32) - 8_u32;
    bytes[4..8].copy_from_slice(&total_size_of_chunks.to_le_bytes());

    bytes
}
