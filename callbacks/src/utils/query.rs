use std::collections::HashMap;

use snafu::{ResultExt, Snafu};

use crate::utils::glob_match;

/// Query parameters as a map of name to the ordered list of its values.
/// HTTP allows a parameter name to repeat; both the count and the order of
/// the repeated values are significant when matching.
pub type QueryParams = HashMap<String, Vec<String>>;

#[derive(Debug, Snafu)]
#[snafu(display("Invalid query string: {}", query))]
pub struct QueryError {
    query: String,
    source: std::string::FromUtf8Error,
}

/// Splits off and parses the query part of a URL.
///
/// Returns the URL without its query part, plus the parsed parameters. A
/// URL without a query part yields an empty map.
pub fn extract_query_params(url: &str) -> Result<(&str, QueryParams), QueryError> {
    let Some((base, query)) = url.split_once('?') else {
        return Ok((url, QueryParams::new()));
    };

    let mut params = QueryParams::new();
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (name, value) = match pair.split_once('=') {
            Some((name, value)) => (name, value),
            None => (pair, ""),
        };
        let name = decode_component(name).context(QuerySnafu { query })?;
        let value = decode_component(value).context(QuerySnafu { query })?;
        params.entry(name).or_default().push(value);
    }

    Ok((base, params))
}

// Form decoding: '+' is a space, then percent sequences
fn decode_component(value: &str) -> Result<String, std::string::FromUtf8Error> {
    let value = value.replace('+', " ");
    Ok(urlencoding::decode(&value)?.into_owned())
}

/// Compares candidate query parameters against pattern query parameters.
///
/// Both sides must carry exactly the same parameter names, each name must
/// carry the same number of values, and each candidate value must match the
/// pattern value at the same position, where `*` in a pattern value matches
/// any run of characters. A candidate with a missing or extra parameter
/// never matches, so a client cannot widen a match by appending parameters.
pub fn validate_query_params(pattern: &QueryParams, input: &QueryParams) -> bool {
    if pattern.len() != input.len() {
        return false;
    }

    for (name, expected) in pattern.iter() {
        let Some(actual) = input.get(name) else {
            return false;
        };
        if expected.len() != actual.len() {
            return false;
        }
        let values_match = expected
            .iter()
            .zip(actual.iter())
            .all(|(pattern_value, value)| glob_match(pattern_value, value));
        if !values_match {
            return false;
        }
    }

    true
}
