//! Candidate-sequence enumeration and rule generation.
//!
//! For each overhanging letter the search grows the run of join-neutral
//! context letters one at a time, shaping every combination at the current
//! length, and stops at the first length where no candidate clears the
//! emission threshold.

use itertools::Itertools;
use log::{debug, info};

use crate::adjust;
use crate::classes::Config;
use crate::error::GenerateError;
use crate::fea::Rule;
use crate::shape::{FeatureSetting, ShapingEngine};

// Kerning between context letters would contaminate the measured overhang.
const KERN_OFF: &[FeatureSetting] = &[FeatureSetting {
    tag: *b"kern",
    value: 0,
}];

/// Run the full generation pass and return the rules in emission order.
///
/// Enumeration order is deterministic: overhangers in configured order,
/// context length increasing, context letters in configured order. Output
/// order is part of the generated artifact.
pub fn generate<E: ShapingEngine>(
    engine: &mut E,
    config: &Config,
) -> Result<Vec<Rule>, GenerateError> {
    let mut rules = Vec::new();
    for overhanger in &config.overhangers {
        generate_overhanger(engine, config, overhanger, &mut rules)?;
    }
    info!("generated {} rules", rules.len());
    Ok(rules)
}

fn generate_overhanger<E: ShapingEngine>(
    engine: &mut E,
    config: &Config,
    overhanger: &str,
    rules: &mut Vec<Rule>,
) -> Result<(), GenerateError> {
    for repeats in 0..=config.max_context {
        let mut emitted = 0usize;
        let contexts = (0..=repeats)
            .map(|_| config.dual_joiners.iter().copied())
            .multi_cartesian_product();
        for context in contexts {
            let mut text: String = context.into_iter().collect();
            text.push_str(overhanger);
            if prune(&text, config) {
                continue;
            }

            let run = engine.shape(&text, KERN_OFF)?;
            let adjustment = adjust::compute(engine, &run, config)?;
            if adjustment.primary() < config.threshold {
                continue;
            }

            rules.push(Rule::new(&run, adjustment));
            emitted += 1;
        }
        debug!(
            "overhanger '{}': {} rules with {} context letters",
            overhanger,
            emitted,
            repeats + 1
        );
        if emitted == 0 {
            return Ok(());
        }
    }

    Err(GenerateError::SearchLimit {
        overhanger: overhanger.to_string(),
        max_context: config.max_context,
    })
}

/// Candidates whose adjustment is already covered by another rule.
fn prune(text: &str, config: &Config) -> bool {
    // A hah anywhere in the sequence gets its own rule, so a compound rule
    // for a yeh-barree ending is redundant unless the hah immediately
    // precedes the yeh barree.
    let adjacent: String = [config.hah, config.yeh_barree].iter().collect();
    if text.contains(config.hah)
        && text.ends_with(config.yeh_barree)
        && !text.ends_with(adjacent.as_str())
    {
        return true;
    }

    // With more than one hah, the rule for the first one is enough.
    text.matches(config.hah).count() > 1
}
