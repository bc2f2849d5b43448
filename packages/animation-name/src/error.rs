use thiserror::Error;

/// The result of a style mutation on an element handle
pub type StyleResult<T = ()> = Result<T, StyleError>;

/// Why an element refused a style mutation.
///
/// These only surface through [`AnimationStyle::try_set_animation_name`](crate::AnimationStyle::try_set_animation_name).
/// [`set_animation_name`](crate::set_animation_name) logs them and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StyleError {
    /// The element does not expose an inline style declaration (for example a MathML or generic XML element)
    #[error("element does not expose an inline style declaration")]
    NoInlineStyle,

    /// The host style declaration threw while assigning the property
    #[error("style declaration rejected the assignment: {0}")]
    Rejected(String),
}
