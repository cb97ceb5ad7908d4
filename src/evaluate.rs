use std::time::Instant;

use crate::types::Evaluation;
use crate::{RuleDefinition, RuleError, Value};

pub(crate) fn invoke<E, T>(
    description: &str,
    definition: &RuleDefinition<E, T>,
    input: &Value,
) -> Result<T, RuleError> {
    let (extracted, matched) = run_test(description, definition, input)?;
    tracing::trace!(rule = description, matched, "rule evaluated");
    Ok(produce(definition, &extracted, matched))
}

pub(crate) fn matches<E, T>(
    description: &str,
    definition: &RuleDefinition<E, T>,
    input: &Value,
) -> Result<bool, RuleError> {
    run_test(description, definition, input).map(|(_, matched)| matched)
}

pub(crate) fn evaluate_detailed<E, T>(
    description: &str,
    definition: &RuleDefinition<E, T>,
    input: &Value,
) -> Result<Evaluation<T>, RuleError> {
    let start = Instant::now();
    let (extracted, matched) = run_test(description, definition, input)?;
    let value = produce(definition, &extracted, matched);
    let duration = start.elapsed();
    tracing::trace!(rule = description, matched, ?duration, "rule evaluated");
    Ok(Evaluation::new(description.to_owned(), matched, value, duration))
}

/// Extract exactly once, then test.
fn run_test<E, T>(
    description: &str,
    definition: &RuleDefinition<E, T>,
    input: &Value,
) -> Result<(E, bool), RuleError> {
    let extracted = (definition.extract)(input).map_err(|err| {
        tracing::debug!(rule = description, error = %err, "extraction failed");
        err
    })?;
    let matched = definition.test.test(&extracted);
    Ok((extracted, matched))
}

fn produce<E, T>(definition: &RuleDefinition<E, T>, extracted: &E, matched: bool) -> T {
    if matched {
        (definition.on_match)(extracted)
    } else {
        (definition.on_no_match)(extracted)
    }
}
