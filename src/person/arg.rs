//! Constructor arguments and identity normalization.

use crate::error::PersonError;
use std::fmt;
use std::str::FromStr;

/// A loosely typed constructor argument.
///
/// Constructors take `impl Into<Arg>` so callers feeding data from an
/// untyped source (form fields, scripting bindings) get a
/// [`PersonError::InvalidArgumentType`] instead of a conversion panic.
/// Plain Rust callers just pass `&str` or `String`.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    None,
}

impl Arg {
    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Text(_) => "str",
            Arg::Int(_) => "int",
            Arg::Float(_) => "float",
            Arg::Bool(_) => "bool",
            Arg::None => "NoneType",
        }
    }

    /// Extracts the text, or fails with `InvalidArgumentType` for `field`.
    pub(crate) fn into_text(self, field: &'static str) -> Result<String, PersonError> {
        match self {
            Arg::Text(s) => Ok(s),
            other => Err(PersonError::InvalidArgumentType {
                field,
                found: other.type_name(),
            }),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Text(s.to_owned())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Text(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Text(s.clone())
    }
}

impl From<i64> for Arg {
    fn from(v: i64) -> Self {
        Arg::Int(v)
    }
}

impl From<i32> for Arg {
    fn from(v: i32) -> Self {
        Arg::Int(v.into())
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Arg::Float(v)
    }
}

impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        Arg::Bool(v)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(v: Option<T>) -> Self {
        v.map_or(Arg::None, Into::into)
    }
}

/// Trims and title-cases a name.
///
/// A character following a cased letter is lowercased; any other
/// character starts a word and is title-cased. Caseless characters
/// (digits, punctuation, CJK) pass through and end the current word.
///
/// ```
/// use u_gradebook::person::normalize_name;
///
/// assert_eq!(normalize_name("  иван "), "Иван");
/// assert_eq!(normalize_name("o'NEIL"), "O'Neil");
/// assert_eq!(normalize_name("anna-maria"), "Anna-Maria");
/// ```
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_cased = false;
    for ch in raw.trim().chars() {
        if prev_cased {
            out.extend(ch.to_lowercase());
        } else {
            // Title case: first char of the uppercase mapping, rest lowered ("ß" -> "Ss").
            let mut upper = ch.to_uppercase();
            if let Some(first) = upper.next() {
                out.push(first);
                out.extend(upper.flat_map(char::to_lowercase));
            }
        }
        prev_cased = ch.is_lowercase() || ch.is_uppercase();
    }
    out
}

/// Student gender, one of exactly two codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Gender {
    /// Code `М`.
    Male,
    /// Code `Ж`.
    Female,
}

impl Gender {
    /// The single-letter code this gender is stored and displayed as.
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "М",
            Gender::Female => "Ж",
        }
    }
}

impl FromStr for Gender {
    type Err = PersonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "М" => Ok(Gender::Male),
            "Ж" => Ok(Gender::Female),
            _ => Err(PersonError::InvalidArgumentValue {
                field: "gender",
                value: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = PersonError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Gender> for String {
    fn from(g: Gender) -> Self {
        g.code().to_owned()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
