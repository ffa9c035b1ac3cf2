//! Rule formatting and feature-file output.

use std::fmt;
use std::io::{self, Write};

use crate::adjust::Adjustment;
use crate::shape::ShapedGlyph;

const LOOKUP_NAME: &str = "overhang";

/// One positioning rule: the adjustment is applied to the anchor glyph when
/// the remaining glyphs of the run follow it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Rule {
    pub anchor: String,
    pub adjustment: Adjustment,
    pub lookahead: Vec<String>,
}

impl Rule {
    /// Anchor a rule on the first glyph of `run`, with the rest as lookahead.
    pub fn new(run: &[ShapedGlyph], adjustment: Adjustment) -> Rule {
        let mut names = run.iter().map(|glyph| glyph.name.clone());
        Rule {
            anchor: names.next().unwrap_or_default(),
            adjustment,
            lookahead: names.collect(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pos {}' {}", self.anchor, self.adjustment)?;
        for glyph in &self.lookahead {
            write!(f, " {}'", glyph)?;
        }
        write!(f, ";")
    }
}

/// Write the full rule set as a mark-ignoring lookup block, preceded by a
/// generated-file warning. Rules are written in generation order; they are
/// never merged or rewritten.
pub fn write_feature<W: Write>(mut w: W, rules: &[Rule]) -> io::Result<()> {
    writeln!(w, "# THIS FILE IS AUTO GENERATED, DO NOT EDIT")?;
    writeln!(w)?;
    writeln!(w, "lookup {} {{", LOOKUP_NAME)?;
    writeln!(w, "  lookupflag IgnoreMarks;")?;
    for rule in rules {
        writeln!(w, "\t{}", rule)?;
    }
    writeln!(w, "}} {};", LOOKUP_NAME)?;
    writeln!(w)
}
