use crate::StyleResult;

/// The CSS property written by [`set_animation_name`]
pub const ANIMATION_NAME: &str = "animation-name";

/// An element whose inline `animation-name` can be read and written.
///
/// Different renderers back this with different handles: a DOM node in the browser, an in-memory declaration list
/// for headless and server rendering. The trait is object safe so renderers can hand out `Box<dyn AnimationStyle>`.
pub trait AnimationStyle {
    /// The current inline `animation-name`, or `None` if the element has none set
    fn animation_name(&self) -> Option<String>;

    /// Write the inline `animation-name`, replacing any previous value.
    ///
    /// The name is passed through untouched. Implementations must not trim, validate or normalize it.
    fn try_set_animation_name(&mut self, animation_name: &str) -> StyleResult<()>;
}

impl<T: AnimationStyle + ?Sized> AnimationStyle for Box<T> {
    fn animation_name(&self) -> Option<String> {
        (**self).animation_name()
    }

    fn try_set_animation_name(&mut self, animation_name: &str) -> StyleResult<()> {
        (**self).try_set_animation_name(animation_name)
    }
}

/// Set the `animation-name` of `element` if it is present.
///
/// An absent element (not mounted yet, or already removed) is skipped without touching anything. A present element
/// has its `animation-name` overwritten with `animation_name`, whatever it contains. This never panics: if the element
/// refuses the write, the failure is logged and dropped.
pub fn set_animation_name<E>(element: Option<&mut E>, animation_name: &str)
where
    E: AnimationStyle + ?Sized,
{
    let Some(element) = element else {
        tracing::trace!("No element to set animation-name {animation_name:?} on, skipping");
        return;
    };

    match element.try_set_animation_name(animation_name) {
        Ok(()) => tracing::trace!("Set animation-name to {animation_name:?}"),
        Err(err) => tracing::error!("Failed to set animation-name to {animation_name:?}: {err}"),
    }
}
