//! Declarative construction attributes.
//!
//! An [`AttributeSet`] is the key→value bag a host layout description hands
//! to a widget at construction time. Widgets read the keys they recognize and
//! ignore the rest, matching platform styling-system conventions.

use gatebar_ui_graphics::Dp;

#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Dp(Dp),
    Str(String),
    Bool(bool),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeSet {
    entries: Vec<(String, AttrValue)>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, replacing any previous value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: AttrValue) {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn with_dp(mut self, key: impl Into<String>, value: Dp) -> Self {
        self.set(key, AttrValue::Dp(value));
        self
    }

    pub fn with_str(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, AttrValue::Str(value.into()));
        self
    }

    pub fn with_bool(mut self, key: impl Into<String>, value: bool) -> Self {
        self.set(key, AttrValue::Bool(value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn dp(&self, key: &str) -> Option<Dp> {
        match self.get(key) {
            Some(AttrValue::Dp(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(AttrValue::Str(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn boolean(&self, key: &str) -> Option<bool> {
        match self.get(key) {
            Some(AttrValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
