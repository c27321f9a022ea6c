//! Normalization of the `broadAncestryIds` filter parameter.

/// Raw ancestry filter as it arrives from a caller: missing, one value, or a
/// repeated parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AncestryIdsParam {
    #[default]
    Absent,
    Single(String),
    Many(Vec<String>),
}

impl AncestryIdsParam {
    /// Builds the parameter from every value collected for the key.
    #[must_use]
    pub fn from_values(mut values: Vec<String>) -> Self {
        match values.len() {
            0 => Self::Absent,
            1 => Self::Single(values.remove(0)),
            _ => Self::Many(values),
        }
    }

    /// Ordered ids with duplicates kept and unparseable tokens dropped.
    /// An empty result means "no filter".
    #[must_use]
    pub fn normalize(&self) -> Vec<i64> {
        match self {
            Self::Absent => Vec::new(),
            Self::Single(raw) => parse_id_list(raw),
            Self::Many(values) => values.iter().flat_map(|raw| parse_id_list(raw)).collect(),
        }
    }
}

impl From<Option<&str>> for AncestryIdsParam {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Absent, |raw| Self::Single(raw.to_string()))
    }
}

/// Splits a comma-separated list and keeps the tokens that start with a
/// non-negative integer.
#[must_use]
pub fn parse_id_list(raw: &str) -> Vec<i64> {
    raw.split(',').filter_map(parse_id_token).collect()
}

/// Reads an optional sign and the leading decimal digits of the trimmed
/// token, ignoring whatever follows (`"2.0"` is 2, `"12abc"` is 12).
fn parse_id_token(token: &str) -> Option<i64> {
    let token = token.trim();
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value = rest[..digits_len].parse::<i64>().ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}
