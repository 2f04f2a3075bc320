//! Map keys for the Options container.
//!
//! Keys are either text or integers. Text keys behave like ordinary map
//! keys; integer keys give a node list-like behavior, with [`Options::push`]
//! appending under the next free index.
//!
//! [`Options::push`]: super::Options::push

use std::fmt;

/// A key in an [`Options`](super::Options) node: either text or an integer index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Key {
    /// Ordinary string key
    Text(String),
    /// Integer key, used for list-style entries
    Index(i64),
}

impl Key {
    /// Returns the text form of this key, if it is a text key
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Key::Text(s) => Some(s),
            Key::Index(_) => None,
        }
    }

    /// Returns the integer form of this key, if it is an index key
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Index(n) => Some(*n),
            Key::Text(_) => None,
        }
    }

    /// Returns true if this is an integer key
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Text(s) => write!(f, "{s}"),
            Key::Index(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Text(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Text(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::Text(value.clone())
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Index(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Index(value as i64)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Index(value as i64)
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        match self {
            Key::Text(s) => s == other,
            Key::Index(_) => false,
        }
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for Key {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Key::Index(n) => n == other,
            Key::Text(_) => false,
        }
    }
}
