use core::fmt;

use crate::constants::SIGN_FIELD;
use crate::params::ParameterSet;

/**
    Deterministic `key=value&...` serialization of a [`ParameterSet`],
    the exact byte string the platform digests and signs.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalString(String);

impl CanonicalString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/**
    Canonicalize a parameter set.

    Keys are visited in ascending byte-wise order. A field is skipped when:
      - its key is `sign`
      - its value is absent / null
      - its rendered text is empty or whitespace-only
    Surviving fields are joined as `key=value` with `&`, no trailing separator.
    An empty or fully skipped set yields the empty string.
*/
pub fn canonicalize(params: &ParameterSet) -> CanonicalString {
    let mut out = String::new();
    for (key, value) in params.iter() {
        if key == SIGN_FIELD {
            continue;
        }
        let Some(text) = value.render() else {
            continue;
        };
        if text.trim().is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(key);
        out.push('=');
        out.push_str(&text);
    }
    CanonicalString(out)
}
