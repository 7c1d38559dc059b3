//! Transition-table compiler
//!
//! Parses symbolic rules, fixes the connectivity arity from the first rule,
//! then normalizes the list into a way-aligned, power-of-two-deep ROM image.

use cellrom_spec::{ceil_log2, Arity, Rule, RuleTable, STEP_OVERHEAD_CYCLES};
use logos::Logos;

use crate::error::{CompileError, Result};
use crate::lexer::Token;

/// Compile the transition-table source into a padded [`RuleTable`].
///
/// `origin` is the file name used in error messages; `ways` is the parallel
/// lookup width of the ROM and must be at least 1.
///
/// The returned table always has a rule count divisible by `ways` and an
/// address count that is an exact power of two; both paddings reuse rule 0
/// and are logged as informational, not errors.
pub fn compile_rules(source: &str, origin: &str, ways: usize) -> Result<RuleTable> {
    debug_assert!(ways >= 1);

    let mut rules: Vec<Rule> = Vec::new();
    let mut arity: Option<Arity> = None;
    // Same floor as the grid loader
    let mut max_value = 1u64;

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let Some(parsed) = parse_rule_line(raw, origin, line)? else {
            continue; // Blank or comment-only line
        };

        let fixed = *arity.get_or_insert(if parsed.inputs.len() == 5 {
            Arity::Five
        } else {
            Arity::Nine
        });
        if parsed.inputs.len() != fixed.inputs() {
            return Err(CompileError::ArityMismatch {
                origin: origin.to_string(),
                line,
                expected: fixed.inputs(),
                found: parsed.inputs.len(),
            });
        }

        for &value in &parsed.inputs {
            if value > max_value {
                max_value = value;
            }
        }
        if parsed.output > max_value {
            max_value = parsed.output;
        }
        rules.push(parsed);
    }

    tracing::info!("ROM ways set: {ways}");
    tracing::info!("explicit transition rules parsed: {}", rules.len());

    let arity = match arity {
        Some(arity) => arity,
        None => {
            tracing::info!("zero explicit rules found; adding one default five-connected rule");
            rules.push(Rule::default_five());
            Arity::Five
        }
    };
    let rule_zero = rules[0].clone();

    if rules.len() % ways != 0 {
        let padding = ways - rules.len() % ways;
        tracing::info!("adding {padding} copies of rule 0 to make the rule count divisible by {ways} ways");
        rules.extend(std::iter::repeat(rule_zero.clone()).take(padding));
    }

    let valid_addresses = rules.len() / ways;
    let address_width = ceil_log2(valid_addresses);
    let target_addresses = 1usize << address_width;
    if target_addresses > valid_addresses {
        tracing::info!(
            "adding {} way-groups of rule 0 to make the ROM depth a power of two",
            target_addresses - valid_addresses
        );
        rules.extend(std::iter::repeat(rule_zero).take((target_addresses - valid_addresses) * ways));
    }

    tracing::info!("valid ROM items probed per step: {valid_addresses}");
    tracing::info!(
        "cycles per calculation step: {valid_addresses}+{STEP_OVERHEAD_CYCLES}={}",
        valid_addresses + STEP_OVERHEAD_CYCLES
    );

    Ok(RuleTable::new(
        rules,
        arity,
        ways,
        address_width,
        valid_addresses,
        max_value,
    ))
}

/// Parse one `<inputs> : <output>` line; `Ok(None)` for lines holding no
/// tokens at all.
fn parse_rule_line(raw: &str, origin: &str, line: usize) -> Result<Option<Rule>> {
    let malformed = |message: String| CompileError::MalformedRule {
        origin: origin.to_string(),
        line,
        message,
    };

    let mut inputs = Vec::new();
    let mut output = None;
    let mut seen_colon = false;

    let mut lexer = Token::lexer(raw);
    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Number(value)) => {
                if !seen_colon {
                    inputs.push(value);
                } else if output.is_none() {
                    output = Some(value);
                } else {
                    return Err(malformed("more than one output value".to_string()));
                }
            }
            Ok(Token::Colon) => {
                if seen_colon {
                    return Err(malformed("more than one ':' separator".to_string()));
                }
                seen_colon = true;
            }
            Err(()) => {
                return Err(malformed(format!("invalid token '{}'", lexer.slice())));
            }
        }
    }

    if !seen_colon && inputs.is_empty() {
        return Ok(None);
    }
    if !seen_colon {
        return Err(malformed("missing ':' separator".to_string()));
    }
    let output = output.ok_or_else(|| malformed("missing output value".to_string()))?;

    Ok(Some(Rule { inputs, output }))
}
