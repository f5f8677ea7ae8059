use serde::Deserialize;

/// Identifiers and fees show up either as JSON strings or as bare numbers
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl TextOrNumber {
    pub fn into_string(self) -> String {
        match self {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }
    }
}

impl From<TextOrNumber> for String {
    fn from(value: TextOrNumber) -> Self {
        value.into_string()
    }
}
