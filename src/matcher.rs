//! Matcher primitives and combinators for the gigline grammars.
//!
//! A matcher is a pure function from an input string to either a consumed
//! prefix plus the remaining text, or a failure carrying the original input.
//! Grammars are built by composing matchers with the combinators below;
//! nothing here holds state, so every matcher is safe to share across
//! threads and reuse between parse calls.

use std::sync::Arc;

/// Result of applying a matcher: `Ok((matched, remainder))` on success,
/// `Err(original_input)` on failure.
///
/// The failure case always carries the exact input the matcher was given,
/// never a partially consumed remainder. `alternation` and `scan_until`
/// rely on this to retry from the same position.
pub type MatchResult<'a> = Result<(&'a str, &'a str), &'a str>;

/// A composable text matcher.
///
/// Matchers are values: cheap to clone (shared behind an `Arc`) and built
/// up from the primitives and combinators in this module. All success
/// results are zero-copy slices of the input string.
#[derive(Clone)]
pub struct Matcher(Arc<dyn for<'a> Fn(&'a str) -> MatchResult<'a> + Send + Sync>);

impl Matcher {
    fn new(f: impl for<'a> Fn(&'a str) -> MatchResult<'a> + Send + Sync + 'static) -> Self {
        Matcher(Arc::new(f))
    }

    /// Apply this matcher to `input`.
    pub fn apply<'a>(&self, input: &'a str) -> MatchResult<'a> {
        (self.0)(input)
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Matcher(..)")
    }
}

/// Match the exact string `expected` at the start of the input.
///
/// On success the matched text equals `expected` and the remainder starts
/// right after it; otherwise fails with the untouched input.
pub fn literal(expected: impl Into<String>) -> Matcher {
    let expected = expected.into();
    Matcher::new(move |input| {
        if input.starts_with(expected.as_str()) {
            Ok((&input[..expected.len()], &input[expected.len()..]))
        } else {
            Err(input)
        }
    })
}

/// Match a single decimal digit (`0`-`9`) at the start of the input.
///
/// Fails on empty input and on any non-digit first character.
pub fn digit() -> Matcher {
    Matcher::new(|input| match input.chars().next() {
        Some(c) if c.is_ascii_digit() => Ok((&input[..1], &input[1..])),
        _ => Err(input),
    })
}

/// Match the entire remaining input, leaving an empty remainder.
///
/// Never fails, including on empty input.
pub fn any() -> Matcher {
    Matcher::new(|input| Ok((input, &input[input.len()..])))
}

/// Apply each matcher in order to the progressively shrinking remainder,
/// concatenating all matched text.
///
/// If any step fails, the whole sequence fails with the original input
/// given to the sequence, not the intermediate remainder.
pub fn sequence(matchers: Vec<Matcher>) -> Matcher {
    Matcher::new(move |input| {
        let mut rest = input;
        for m in &matchers {
            match m.apply(rest) {
                Ok((_, remainder)) => rest = remainder,
                Err(_) => return Err(input),
            }
        }
        // Each step consumed a prefix of the previous remainder, so the
        // combined match is the prefix of the original input up to `rest`.
        Ok((&input[..input.len() - rest.len()], rest))
    })
}

/// Try each matcher against the same input in listed order and return the
/// first success.
///
/// Order matters: grammars rely on earlier entries taking precedence over
/// later, more general ones. Fails with the original input if every
/// alternative fails.
pub fn alternation(matchers: Vec<Matcher>) -> Matcher {
    Matcher::new(move |input| {
        for m in &matchers {
            if let Ok(hit) = m.apply(input) {
                return Ok(hit);
            }
        }
        Err(input)
    })
}

/// Return the inner match if it succeeds, otherwise an empty match with the
/// input unchanged. Optional never fails.
pub fn optional(matcher: Matcher) -> Matcher {
    Matcher::new(move |input| match matcher.apply(input) {
        Ok(hit) => Ok(hit),
        Err(_) => Ok((&input[..0], input)),
    })
}

/// Apply the matcher repeatedly, accumulating matched text, until it fails
/// or the input is exhausted. Fails only if zero repetitions succeeded.
pub fn one_or_more(matcher: Matcher) -> Matcher {
    Matcher::new(move |input| {
        let mut rest = input;
        let mut count = 0usize;
        while !rest.is_empty() {
            match matcher.apply(rest) {
                Ok((matched, remainder)) => {
                    // A zero-width match would never advance; stop there.
                    if matched.is_empty() {
                        break;
                    }
                    rest = remainder;
                    count += 1;
                }
                Err(_) => break,
            }
        }
        if count == 0 {
            Err(input)
        } else {
            Ok((&input[..input.len() - rest.len()], rest))
        }
    })
}

/// Scan forward through `input` one character position at a time, looking
/// for the first position where `matcher` succeeds.
///
/// Returns everything before that position as the matched prefix and the
/// substring from that position onward as the remainder. Fails with the
/// original input if no position up to and including the last character
/// succeeds. Cost is linear in the input length times the matcher cost.
pub fn scan_until<'a>(matcher: &Matcher, input: &'a str) -> MatchResult<'a> {
    for (pos, _) in input.char_indices() {
        if matcher.apply(&input[pos..]).is_ok() {
            return Ok((&input[..pos], &input[pos..]));
        }
    }
    Err(input)
}
