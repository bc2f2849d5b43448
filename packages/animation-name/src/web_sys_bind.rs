//! `AnimationStyle` for the browser DOM

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Element, HtmlElement, SvgElement};

use crate::{AnimationStyle, StyleError, StyleResult, ANIMATION_NAME};

impl From<JsValue> for StyleError {
    fn from(value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
        };
        StyleError::Rejected(message)
    }
}

impl AnimationStyle for CssStyleDeclaration {
    fn animation_name(&self) -> Option<String> {
        self.get_property_value(ANIMATION_NAME)
            .ok()
            .filter(|name| !name.is_empty())
    }

    fn try_set_animation_name(&mut self, animation_name: &str) -> StyleResult<()> {
        self.set_property(ANIMATION_NAME, animation_name)?;
        Ok(())
    }
}

impl AnimationStyle for HtmlElement {
    fn animation_name(&self) -> Option<String> {
        self.style().animation_name()
    }

    fn try_set_animation_name(&mut self, animation_name: &str) -> StyleResult<()> {
        self.style().try_set_animation_name(animation_name)
    }
}

impl AnimationStyle for SvgElement {
    fn animation_name(&self) -> Option<String> {
        self.style().animation_name()
    }

    fn try_set_animation_name(&mut self, animation_name: &str) -> StyleResult<()> {
        self.style().try_set_animation_name(animation_name)
    }
}

/// Only HTML and SVG elements carry an inline style declaration
fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    element.dyn_ref::<SvgElement>().map(|svg| svg.style())
}

impl AnimationStyle for Element {
    fn animation_name(&self) -> Option<String> {
        inline_style(self)?.animation_name()
    }

    fn try_set_animation_name(&mut self, animation_name: &str) -> StyleResult<()> {
        inline_style(self)
            .ok_or(StyleError::NoInlineStyle)?
            .try_set_animation_name(animation_name)
    }
}
