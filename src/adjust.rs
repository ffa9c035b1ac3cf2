//! Overhang adjustment calculation.

use std::fmt;

use crate::classes::Config;
use crate::error::ShapingError;
use crate::shape::{ShapedGlyph, ShapingEngine};

/// Positioning correction for one shaped run, in font design units.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Adjustment {
    Scalar(i32),
    /// The correction at the low and high ends of a design axis, for final
    /// forms whose metrics vary along it.
    Conditioned {
        axis: String,
        axis_low: i32,
        axis_high: i32,
        low: i32,
        high: i32,
    },
}

impl Adjustment {
    /// The value the emission threshold is compared against: the scalar, or
    /// the low end of a conditioned pair.
    pub fn primary(&self) -> i32 {
        match *self {
            Adjustment::Scalar(value) => value,
            Adjustment::Conditioned { low, .. } => low,
        }
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Adjustment::Scalar(value) => value.fmt(f),
            Adjustment::Conditioned {
                axis,
                axis_low,
                axis_high,
                low,
                high,
            } => write!(
                f,
                "({}={}:{} {}={}:{})",
                axis, axis_low, low, axis, axis_high, high
            ),
        }
    }
}

/// Compute the overhang compensation for a shaped run: the intrinsic advance
/// of the final glyph less the advance the whole run was allotted.
pub fn compute<E: ShapingEngine>(
    engine: &E,
    run: &[ShapedGlyph],
    config: &Config,
) -> Result<Adjustment, ShapingError> {
    let last = run.last().ok_or(ShapingError::EmptyText)?;
    let shaped: i32 = run.iter().map(|glyph| glyph.advance).sum();
    let overhang = engine.intrinsic_advance(last.glyph)?;
    let adjustment = round_to(overhang - shaped, config.quantum);

    if last.name.starts_with(&config.extended_final_prefix) {
        let axis = &config.axis;
        let overhang_high =
            engine.intrinsic_advance_at(last.glyph, &axis.tag, axis.high as f32)?;
        Ok(Adjustment::Conditioned {
            axis: axis.tag.clone(),
            axis_low: axis.low,
            axis_high: axis.high,
            low: adjustment,
            high: round_to(adjustment + (overhang_high - overhang), config.quantum),
        })
    } else {
        Ok(Adjustment::Scalar(adjustment))
    }
}

/// Round to the nearest multiple of `quantum`, ties away from zero.
pub fn round_to(value: i32, quantum: i32) -> i32 {
    if quantum <= 1 {
        return value;
    }
    let half = quantum / 2;
    if value < 0 {
        -((-value + half) / quantum * quantum)
    } else {
        (value + half) / quantum * quantum
    }
}
