//! A human-readable dump of a parsed file's structure.
//!
//! Mostly useful for debugging, or for checking that a file is laid out the
//! way you think it is. The exact text may change between versions.

use core::fmt::{self, Display, Formatter};

use webp_inspect_types::{AnimationFrame, AnimationMeta, ExtendedFeatures, WebpDocument};

/// Displays a [`WebpDocument`] as an indented report.
///
/// ```
/// # let bytes: &[u8] = b"RIFF\x1a\x00\x00\x00WEBPVP8 \x0e\x00\x00\x00\
/// #     \x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00";
/// let doc = webp_inspect::parse(&bytes).unwrap();
/// let text = webp_inspect::report::Report(&doc).to_string();
/// assert!(text.contains("Tag: VP8 "));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Report<'doc>(pub &'doc WebpDocument);

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let doc: &WebpDocument = self.0;

        match &doc.source_path {
            Some(path) => writeln!(f, "Path: {}", path.display())?,
            None => writeln!(f, "Path: (none)")?,
        }

        let header = &doc.container_header;
        writeln!(f, "Header:")?;
        writeln!(f, "\t{}", header.riff_tag)?;
        writeln!(f, "\t{}", header.declared_file_size)?;
        writeln!(f, "\t{}", header.format_tag)?;

        writeln!(f, "Variant chunk:")?;
        writeln!(f, "\tTag: {}", doc.variant_header.tag)?;
        writeln!(f, "\tChunk size: {}", doc.variant_header.payload_size)?;

        if let Some(features) = &doc.extended_features {
            extended(f, features)?;
        }

        if let Some(canvas) = &doc.canvas {
            writeln!(f, "Canvas: {}x{}", canvas.width, canvas.height)?;
        }

        if let Some(animation) = &doc.animation {
            anim(f, animation)?;
        }

        for diagnostic in &doc.diagnostics {
            writeln!(f, "Warning: {diagnostic}")?;
        }

        Ok(())
    }
}

fn extended(f: &mut Formatter<'_>, features: &ExtendedFeatures) -> fmt::Result {
    writeln!(f, "Extended fields:")?;
    writeln!(f, "\tFlags: {:08b}", features.flags())?;
    writeln!(f, "\tICC: {}", features.icc())?;
    writeln!(f, "\tAlpha: {}", features.alpha())?;
    writeln!(f, "\tExif: {}", features.exif())?;
    writeln!(f, "\tXMP: {}", features.xmp())?;
    writeln!(f, "\tAnimation: {}", features.animation())
}

fn anim(f: &mut Formatter<'_>, animation: &AnimationMeta) -> fmt::Result {
    let [blue, green, red, alpha] = animation.background_color.to_bgra();

    writeln!(f, "Animation chunk:")?;
    writeln!(f, "\tTag: {}", animation.header.tag)?;
    writeln!(f, "\tChunk size: {}", animation.header.payload_size)?;
    writeln!(
        f,
        "\tBackground color (BGRA): [{}, {}, {}, {}]",
        blue, green, red, alpha
    )?;
    writeln!(f, "\tLoop count: {}", animation.loop_count)?;
    writeln!(f, "\tLast position: {}", animation.last_parsed_offset)?;

    for frame in &animation.frames {
        anmf(f, frame)?;
    }

    Ok(())
}

fn anmf(f: &mut Formatter<'_>, frame: &AnimationFrame) -> fmt::Result {
    writeln!(f, "\tAnimation frame:")?;
    writeln!(f, "\t\tTag: {}", frame.header.tag)?;
    writeln!(f, "\t\tChunk size: {}", frame.header.payload_size)?;
    writeln!(f, "\t\tFrame X: {}", frame.frame_x)?;
    writeln!(f, "\t\tFrame Y: {}", frame.frame_y)?;
    writeln!(f, "\t\tFrame width: {}", frame.frame_width)?;
    writeln!(f, "\t\tFrame height: {}", frame.frame_height)?;
    writeln!(f, "\t\tFrame duration: {}", frame.frame_duration)?;
    writeln!(f, "\t\tBlending method: {}", frame.blending_method)?;
    writeln!(f, "\t\tDisposal method: {}", frame.disposal_method)
}
