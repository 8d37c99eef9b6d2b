use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Identifier of a user as sent by the API: usually a number, sometimes a string.
///
/// Anything else (fractions, integers past `i64`, `null`, a missing field)
/// lands in `Other` so the rest of the page still decodes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
    Other(Value),
}

impl Default for UserId {
    fn default() -> Self {
        Self::Other(Value::Null)
    }
}

enum SortKey {
    Numeric(f64),
    Text(String),
    Other(String),
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            Self::Numeric(_) => 0,
            Self::Text(_) => 1,
            Self::Other(_) => 2,
        }
    }
}

impl UserId {
    fn sort_key(&self) -> SortKey {
        let numeric = match self {
            Self::Number(n) => Some(*n as f64),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Other(value) => value.as_f64(),
        };
        match numeric.filter(|n| n.is_finite()) {
            Some(n) => SortKey::Numeric(n),
            None => match self {
                Self::Text(s) => SortKey::Text(s.clone()),
                _ => SortKey::Other(self.to_string()),
            },
        }
    }

    /// Total order over identifiers.
    ///
    /// Numeric ids (numbers of any kind and numeric strings) compare by value
    /// and sort below non-numeric strings, which compare lexicographically.
    /// `null`, booleans and missing ids sort above everything else.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.sort_key(), other.sort_key()) {
            (SortKey::Numeric(a), SortKey::Numeric(b)) => a.total_cmp(&b),
            (SortKey::Text(a), SortKey::Text(b)) | (SortKey::Other(a), SortKey::Other(b)) => {
                a.cmp(&b)
            }
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
            Self::Other(Value::Null) => Ok(()),
            Self::Other(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: UserId,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    /// Avatar URL, or `None` when the API sent nothing usable.
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// One page of the paginated users endpoint. Only `data` is read.
#[derive(Debug, Deserialize)]
pub struct UsersPage {
    pub data: Vec<User>,
}

/// Sorts users by identifier, highest first. Equal ids keep their order.
pub fn sort_descending(users: &mut [User]) {
    users.sort_by(|a, b| b.id.compare(&a.id));
}
