use std::fmt::{Display, Formatter};

use crate::{AnimationStyle, StyleResult, ANIMATION_NAME};

/// An in-memory inline style declaration, the body of a `style="..."` attribute.
///
/// Declarations keep the order they were first set in. Setting a property again overwrites its value in place.
/// Values are stored exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    /// Create an empty declaration list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the body of a `style` attribute, eg `color: red; animation-name: pulse`.
    ///
    /// Malformed declarations (no `:` or an empty property name) are skipped.
    pub fn parse(source: &str) -> Self {
        let mut style = Self::new();

        for declaration in source.split(';') {
            let declaration = declaration.trim();
            if declaration.is_empty() {
                continue;
            }

            match declaration.split_once(':') {
                Some((name, value)) if !name.trim().is_empty() => {
                    style.set_property(name.trim(), value.trim());
                }
                _ => tracing::debug!("Skipping malformed style declaration {declaration:?}"),
            }
        }

        style
    }

    /// Set `name` to `value`, replacing the previous value if the property is already declared
    pub fn set_property(&mut self, name: &str, value: &str) {
        match self.declarations.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => {
                existing.clear();
                existing.push_str(value);
            }
            None => self.declarations.push((name.to_string(), value.to_string())),
        }
    }

    /// Get the value of `name`, if declared
    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// The number of declared properties
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether no properties are declared
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterate over `(name, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl AnimationStyle for InlineStyle {
    fn animation_name(&self) -> Option<String> {
        self.get_property(ANIMATION_NAME).map(str::to_string)
    }

    fn try_set_animation_name(&mut self, animation_name: &str) -> StyleResult<()> {
        self.set_property(ANIMATION_NAME, animation_name);
        Ok(())
    }
}

/// Written the same way the SSR renderer writes a style attribute: `name:value;` per declaration
impl Display for InlineStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (name, value) in self.iter() {
            write!(f, "{name}:{value};")?;
        }
        Ok(())
    }
}
