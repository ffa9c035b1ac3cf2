//! Shared test code: a shaping engine backed by in-memory metric tables.

use std::collections::HashMap;

use overhang_fea::classes::{Axis, Config};
use overhang_fea::error::ShapingError;
use overhang_fea::shape::{FeatureSetting, ShapedGlyph, ShapingEngine};

pub struct Letter {
    pub glyph: u16,
    pub name: &'static str,
    pub advance: i32,
}

/// Each letter shapes to a single glyph with a fixed advance; the zero-width
/// joiner is dropped from output like any default ignorable.
pub struct SyntheticEngine {
    letters: HashMap<char, Letter>,
    intrinsic: HashMap<u16, i32>,
    intrinsic_high: HashMap<u16, i32>,
}

impl SyntheticEngine {
    pub fn new() -> Self {
        SyntheticEngine {
            letters: HashMap::new(),
            intrinsic: HashMap::new(),
            intrinsic_high: HashMap::new(),
        }
    }

    pub fn letter(mut self, ch: char, glyph: u16, name: &'static str, advance: i32) -> Self {
        self.letters.insert(
            ch,
            Letter {
                glyph,
                name,
                advance,
            },
        );
        self
    }

    /// Un-shaped advance at the default axis position.
    pub fn intrinsic(mut self, glyph: u16, advance: i32) -> Self {
        self.intrinsic.insert(glyph, advance);
        self
    }

    /// Un-shaped advance at the high end of the design axis.
    pub fn intrinsic_high(mut self, glyph: u16, advance: i32) -> Self {
        self.intrinsic_high.insert(glyph, advance);
        self
    }
}

impl ShapingEngine for SyntheticEngine {
    fn shape(
        &mut self,
        text: &str,
        _features: &[FeatureSetting],
    ) -> Result<Vec<ShapedGlyph>, ShapingError> {
        if text.is_empty() {
            return Err(ShapingError::EmptyText);
        }
        Ok(text
            .chars()
            .filter(|&ch| ch != '\u{200D}')
            .map(|ch| {
                let letter = self
                    .letters
                    .get(&ch)
                    .unwrap_or_else(|| panic!("letter {:?} not in synthetic tables", ch));
                ShapedGlyph {
                    name: letter.name.to_string(),
                    glyph: letter.glyph,
                    advance: letter.advance,
                }
            })
            .collect())
    }

    fn intrinsic_advance(&self, glyph: u16) -> Result<i32, ShapingError> {
        self.intrinsic
            .get(&glyph)
            .copied()
            .ok_or(ShapingError::MissingAdvance(glyph))
    }

    fn intrinsic_advance_at(
        &self,
        glyph: u16,
        axis: &str,
        _value: f32,
    ) -> Result<i32, ShapingError> {
        if axis != "MSHQ" {
            return Err(ShapingError::MissingAxis(axis.to_string()));
        }
        self.intrinsic_high
            .get(&glyph)
            .copied()
            .ok_or(ShapingError::MissingAdvance(glyph))
    }
}

/// Baseline configuration over a synthetic letter repertoire: `a`/`b` stand
/// in for the join-neutral context letters, `h` for hah and `y` for
/// yeh barree.
pub fn config() -> Config {
    Config {
        overhangers: vec!["h".to_string()],
        dual_joiners: vec!['a'],
        hah: 'h',
        yeh_barree: 'y',
        threshold: 50,
        quantum: 10,
        max_context: 8,
        extended_final_prefix: "yehbarree.fina".to_string(),
        axis: Axis {
            tag: "MSHQ".to_string(),
            low: 10,
            high: 100,
        },
        aliases: Vec::new(),
    }
}
