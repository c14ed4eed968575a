//! The in-progress property listing and its form fields.
//!
//! A [`PropertyDraft`] holds the five text inputs of the add-property
//! form. Values are kept verbatim: the asking price stays a
//! currency-formatted string and nothing is trimmed or validated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Caption of the form's submit button.
pub const SUBMIT_LABEL: &str = "Submit";

// ---------------------------------------------------------------------------
// FieldName
// ---------------------------------------------------------------------------

/// One of the five inputs on the add-property form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Title,
    AskingPrice,
    Description,
    Address,
    Img,
}

impl FieldName {
    /// All fields in the order they appear on the form.
    pub const ALL: [FieldName; 5] = [
        FieldName::Title,
        FieldName::AskingPrice,
        FieldName::Description,
        FieldName::Address,
        FieldName::Img,
    ];

    /// Key used for this field in the JSON request body.
    pub fn wire_key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::AskingPrice => "askingPrice",
            Self::Description => "description",
            Self::Address => "address",
            Self::Img => "img",
        }
    }

    /// Label rendered next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::AskingPrice => "Asking Price",
            Self::Description => "Description",
            Self::Address => "Address",
            Self::Img => "Image URL",
        }
    }

    /// Short keyword a user (or a test) can find the input by.
    fn keyword(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::AskingPrice => "price",
            Self::Description => "description",
            Self::Address => "address",
            Self::Img => "image",
        }
    }

    fn snake_name(self) -> &'static str {
        match self {
            Self::AskingPrice => "asking_price",
            other => other.wire_key(),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_key())
    }
}

impl FromStr for FieldName {
    type Err = CoreError;

    /// Accepts the wire key (`askingPrice`), the snake_case name
    /// (`asking_price`) or the lookup keyword (`price`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        FieldName::ALL
            .into_iter()
            .find(|field| {
                needle.eq_ignore_ascii_case(field.wire_key())
                    || needle.eq_ignore_ascii_case(field.snake_name())
                    || needle.eq_ignore_ascii_case(field.keyword())
            })
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// PropertyDraft
// ---------------------------------------------------------------------------

/// Unsaved values of the add-property form.
///
/// Every key is always serialized, so a draft that was never edited
/// produces five empty strings on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyDraft {
    pub title: String,
    #[serde(rename = "askingPrice")]
    pub asking_price: String,
    pub description: String,
    pub address: String,
    pub img: String,
}

impl PropertyDraft {
    /// Create an empty draft, as the form does when it is first shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one field. The last value written wins.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Current value of one field.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Title => &self.title,
            FieldName::AskingPrice => &self.asking_price,
            FieldName::Description => &self.description,
            FieldName::Address => &self.address,
            FieldName::Img => &self.img,
        }
    }

    /// `true` when no field holds any text.
    pub fn is_blank(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::Title => &mut self.title,
            FieldName::AskingPrice => &mut self.asking_price,
            FieldName::Description => &mut self.description,
            FieldName::Address => &mut self.address,
            FieldName::Img => &mut self.img,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
