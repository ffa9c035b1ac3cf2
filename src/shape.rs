//! Access to the shaping engine.
//!
//! [`Shaper`] wraps rustybuzz with the fixed configuration overhang probing
//! shapes under: right-to-left direction, Arabic script, default-ignorable
//! glyphs removed from the output.

use std::convert::TryFrom;

use rustybuzz::ttf_parser::{GlyphId, Tag};
use rustybuzz::{BufferFlags, Direction, Face, Feature, UnicodeBuffer, Variation};

use crate::classes::GlyphAlias;
use crate::error::ShapingError;

/// One glyph of a shaped run, in logical order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShapedGlyph {
    /// Canonicalized glyph name.
    pub name: String,
    pub glyph: u16,
    /// Horizontal advance after shaping, in design units.
    pub advance: i32,
}

/// A feature setting passed to the engine for one shape call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FeatureSetting {
    pub tag: [u8; 4],
    pub value: u32,
}

/// The shaping operations rule generation needs from an engine.
pub trait ShapingEngine {
    /// Shape `text` and return the glyph run in logical order.
    ///
    /// `text` must be non-empty. Failure is fatal to the whole generation
    /// pass; there is no per-candidate recovery.
    fn shape(
        &mut self,
        text: &str,
        features: &[FeatureSetting],
    ) -> Result<Vec<ShapedGlyph>, ShapingError>;

    /// The glyph's un-shaped horizontal advance.
    fn intrinsic_advance(&self, glyph: u16) -> Result<i32, ShapingError>;

    /// The glyph's un-shaped horizontal advance with a variation axis applied.
    fn intrinsic_advance_at(
        &self,
        glyph: u16,
        axis: &str,
        value: f32,
    ) -> Result<i32, ShapingError>;
}

/// Shaping engine backed by rustybuzz.
pub struct Shaper<'a> {
    data: &'a [u8],
    face: Face<'a>,
    // Reused across shape calls; fully reset before each use.
    buffer: Option<UnicodeBuffer>,
    aliases: Vec<GlyphAlias>,
}

impl<'a> Shaper<'a> {
    pub fn new(data: &'a [u8], aliases: Vec<GlyphAlias>) -> Result<Shaper<'a>, ShapingError> {
        let face = Face::from_slice(data, 0).ok_or(ShapingError::BadFace)?;
        Ok(Shaper {
            data,
            face,
            buffer: Some(UnicodeBuffer::new()),
            aliases,
        })
    }

    fn glyph_name(&self, glyph: u16) -> String {
        match self.face.glyph_name(GlyphId(glyph)) {
            Some(name) => canonical_name(name, &self.aliases),
            None => format!("gid{}", glyph),
        }
    }
}

impl ShapingEngine for Shaper<'_> {
    fn shape(
        &mut self,
        text: &str,
        features: &[FeatureSetting],
    ) -> Result<Vec<ShapedGlyph>, ShapingError> {
        if text.is_empty() {
            return Err(ShapingError::EmptyText);
        }

        let mut buffer = self.buffer.take().unwrap_or_else(UnicodeBuffer::new);
        buffer.push_str(text);
        buffer.set_direction(Direction::RightToLeft);
        buffer.set_script(rustybuzz::script::ARABIC);
        buffer.set_flags(BufferFlags::REMOVE_DEFAULT_IGNORABLES);

        let features = features
            .iter()
            .map(|setting| Feature::new(Tag::from_bytes(&setting.tag), setting.value, ..))
            .collect::<Vec<_>>();
        let glyphs = rustybuzz::shape(&self.face, &features, buffer);

        // The engine emits right-to-left output in visual order; reverse it
        // back to logical order.
        let mut run = Vec::with_capacity(glyphs.glyph_infos().len());
        for (info, pos) in glyphs
            .glyph_infos()
            .iter()
            .zip(glyphs.glyph_positions())
            .rev()
        {
            let glyph =
                u16::try_from(info.glyph_id).map_err(|_| ShapingError::BadGlyphIndex)?;
            run.push(ShapedGlyph {
                name: self.glyph_name(glyph),
                glyph,
                advance: pos.x_advance,
            });
        }

        self.buffer = Some(glyphs.clear());
        Ok(run)
    }

    fn intrinsic_advance(&self, glyph: u16) -> Result<i32, ShapingError> {
        self.face
            .glyph_hor_advance(GlyphId(glyph))
            .map(i32::from)
            .ok_or(ShapingError::MissingAdvance(glyph))
    }

    fn intrinsic_advance_at(
        &self,
        glyph: u16,
        axis: &str,
        value: f32,
    ) -> Result<i32, ShapingError> {
        let tag = Tag::from_bytes_lossy(axis.as_bytes());
        if !self.face.variation_axes().into_iter().any(|a| a.tag == tag) {
            return Err(ShapingError::MissingAxis(axis.to_string()));
        }

        // The base face stays at the default axis position; the override gets
        // its own view over the same data.
        let mut face = Face::from_slice(self.data, 0).ok_or(ShapingError::BadFace)?;
        face.set_variations(&[Variation { tag, value }]);
        face.glyph_hor_advance(GlyphId(glyph))
            .map(i32::from)
            .ok_or(ShapingError::MissingAdvance(glyph))
    }
}

/// Collapse the engine's per-context glyph names to the reduced vocabulary
/// the rule format uses. Names matching no prefix pass through unchanged.
fn canonical_name(name: &str, aliases: &[GlyphAlias]) -> String {
    for entry in aliases {
        if name.starts_with(entry.prefix.as_str()) {
            return entry.alias.clone();
        }
    }
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aliases() -> Vec<GlyphAlias> {
        vec![
            GlyphAlias::new("behDotless-ar.init", "@beh.init"),
            GlyphAlias::new("behDotless-ar.medi", "@beh.medi"),
        ]
    }

    #[test]
    fn test_canonical_name_aliased() {
        assert_eq!(
            canonical_name("behDotless-ar.init.wide", &aliases()),
            "@beh.init"
        );
        assert_eq!(canonical_name("behDotless-ar.medi", &aliases()), "@beh.medi");
    }

    #[test]
    fn test_canonical_name_pass_through() {
        assert_eq!(
            canonical_name("yehbarree-ar.fina", &aliases()),
            "yehbarree-ar.fina"
        );
    }
}
