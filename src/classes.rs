//! Letter-class and glyph-alias configuration.
//!
//! The groupings here must agree with the font's actual glyph metrics:
//! letters with near-identical shaping advances share one representative,
//! which keeps both the candidate space and the emitted lookup small. The
//! generator trusts these tables; it does not verify them against the font.

/// Maps a positional-variant glyph-name prefix to the class alias used in
/// emitted rules.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GlyphAlias {
    pub prefix: String,
    pub alias: String,
}

impl GlyphAlias {
    pub fn new(prefix: &str, alias: &str) -> Self {
        GlyphAlias {
            prefix: prefix.to_string(),
            alias: alias.to_string(),
        }
    }
}

/// A design axis of a variable font with the two values an axis-conditioned
/// adjustment is recorded at.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Axis {
    pub tag: String,
    pub low: i32,
    pub high: i32,
}

/// Configuration for one generation pass.
#[derive(Debug, Clone)]
pub struct Config {
    /// Letterforms known to overhang the advance of the preceding run.
    /// Entries are strings, not chars: the joiner-suffixed forms are two
    /// scalar values.
    pub overhangers: Vec<String>,
    /// Join-neutral context letters, one representative per advance group.
    pub dual_joiners: Vec<char>,
    /// The hah letter, used by the pruning rules.
    pub hah: char,
    /// The yeh barree letter, used by pruning rule A.
    pub yeh_barree: char,
    /// Minimum adjustment, in design units, for a rule to be emitted.
    pub threshold: i32,
    /// Adjustments are rounded to the nearest multiple of this.
    pub quantum: i32,
    /// Upper bound on context length; reaching it is an error, not
    /// truncation. A correctly grouped font terminates far below it.
    pub max_context: usize,
    /// Glyph-name prefix identifying the extended final form whose
    /// adjustment is axis-conditioned.
    pub extended_final_prefix: String,
    pub axis: Axis,
    pub aliases: Vec<GlyphAlias>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            overhangers: vec![
                "\u{62D}".to_string(),
                "\u{62D}\u{200D}".to_string(),
                "\u{6D2}".to_string(),
            ],
            // Lam is covered by the dotless beh representative, tah and kaf
            // by sad.
            dual_joiners: vec![
                '\u{66E}', '\u{62D}', '\u{633}', '\u{635}', '\u{639}', '\u{6A1}', '\u{645}',
                '\u{647}',
            ],
            hah: '\u{62D}',
            yeh_barree: '\u{6D2}',
            threshold: 50,
            quantum: 10,
            max_context: 16,
            extended_final_prefix: "yehbarree-ar.fina".to_string(),
            axis: Axis {
                tag: "MSHQ".to_string(),
                low: 10,
                high: 100,
            },
            aliases: vec![
                GlyphAlias::new("behDotless-ar.init", "@beh.init"),
                GlyphAlias::new("behDotless-ar.medi", "@beh.medi"),
                GlyphAlias::new("sad-ar.init", "@sad.init"),
                GlyphAlias::new("sad-ar.medi", "@sad.medi"),
                GlyphAlias::new("hah-ar.init", "@hah.init"),
                GlyphAlias::new("hah-ar.medi", "@hah.medi"),
                GlyphAlias::new("seen-ar.medi", "@seen.medi"),
            ],
        }
    }
}
