//! Route string parser.
//!
//! Splits a free-text route into departure and arrival airport codes.
//! Pilots write routes with a mix of separators (hyphens, typographic
//! dashes pasted from planning tools, arrows, slashes, plain spaces), so
//! the tokenizer treats any run of those characters as one separator.
//! Intermediate waypoints are discarded: only the endpoints are modeled.

const EN_DASH: char = '\u{2013}';
const EM_DASH: char = '\u{2014}';

/// Departure/arrival endpoints parsed from a route string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRoute {
    pub from: Option<String>,
    pub to: Option<String>,
}

fn is_route_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | EN_DASH | EM_DASH | '>' | '/')
}

/// Parse a route string into its endpoints.
///
/// Empty or absent input yields `{None, None}`. A single token is a
/// same-field circuit and fills both endpoints. With multiple tokens the
/// first and last survive; waypoints in between are dropped. Surviving
/// tokens are uppercased.
pub fn parse_route(route: Option<&str>) -> ParsedRoute {
    let Some(raw) = route else {
        return ParsedRoute::default();
    };

    let tokens: Vec<String> = raw
        .split(is_route_separator)
        .filter(|token| !token.is_empty())
        .map(str::to_uppercase)
        .collect();

    match tokens.as_slice() {
        [] => ParsedRoute::default(),
        [only] => ParsedRoute { from: Some(only.clone()), to: Some(only.clone()) },
        [first, .., last] => ParsedRoute { from: Some(first.clone()), to: Some(last.clone()) },
    }
}
