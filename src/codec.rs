//! Query-string codec for deposit inputs
//!
//! Wire format (all keys optional on decode):
//!
//! ```text
//! ?principal=<number>&rate=<number>&tenure=<number>&tenureUnit=<years|months>&compounding=<monthly|quarterly|half-yearly|yearly>
//! ```
//!
//! Decoding is partial: a missing or malformed field is simply left out
//! of the returned [`PartialDepositInput`]. Filling the gaps is up to
//! the caller.

use crate::models::{Compounding, DepositInput, PartialDepositInput, TenureUnit};
use url::Url;

pub const KEY_PRINCIPAL: &str = "principal";
pub const KEY_RATE: &str = "rate";
pub const KEY_TENURE: &str = "tenure";
pub const KEY_TENURE_UNIT: &str = "tenureUnit";
pub const KEY_COMPOUNDING: &str = "compounding";

/// Decoded query pairs, in the order they appeared
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// First value for `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Encode an input as a query string (no leading `?`).
///
/// Keys are always emitted in the same order. Numbers use the shortest
/// decimal form that parses back to the same value.
pub fn to_query_string(input: &DepositInput) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(KEY_PRINCIPAL, &input.principal.to_string())
        .append_pair(KEY_RATE, &input.annual_rate_percent.to_string())
        .append_pair(KEY_TENURE, &input.tenure_value.to_string())
        .append_pair(KEY_TENURE_UNIT, input.tenure_unit.as_str())
        .append_pair(KEY_COMPOUNDING, input.compounding.as_str())
        .finish()
}

/// Split a raw query string into decoded pairs. A leading `?` is ignored.
pub fn parse_query(query: &str) -> QueryParams {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// Decode whatever valid fields `params` carries
pub fn from_query_params(params: &QueryParams) -> PartialDepositInput {
    PartialDepositInput {
        principal: params.get(KEY_PRINCIPAL).and_then(parse_number),
        annual_rate_percent: params.get(KEY_RATE).and_then(parse_number),
        tenure_value: params.get(KEY_TENURE).and_then(parse_number),
        tenure_unit: params
            .get(KEY_TENURE_UNIT)
            .and_then(|v| v.parse::<TenureUnit>().ok()),
        compounding: params
            .get(KEY_COMPOUNDING)
            .and_then(|v| v.parse::<Compounding>().ok()),
    }
}

/// Decode a full link (`https://host/path?...#frag`) or a bare query string.
///
/// Anything that does not parse as an absolute URL is read as a query in
/// its entirety, so a literal `?` inside a value never truncates it.
pub fn decode_url(url_or_query: &str) -> PartialDepositInput {
    let params = match Url::parse(url_or_query) {
        Ok(url) => url.query_pairs().into_owned().collect(),
        Err(_) => parse_query(url_or_query),
    };
    from_query_params(&params)
}

/// Build a shareable link: `base` with its query and fragment replaced
pub fn shareable_url(base: &str, input: &DepositInput) -> Result<String, url::ParseError> {
    let mut url = Url::parse(base)?;
    url.set_fragment(None);
    url.set_query(Some(&to_query_string(input)));
    Ok(url.into())
}

/// Finite numbers only; blanks, `NaN` and `inf` are rejected
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
