use dioxus_html::MountedData;

use crate::set_animation_name;

/// Set the `animation-name` of an element captured from an `onmounted` event.
///
/// Pass `None` while the element has not mounted yet. Handles produced by a renderer other than `dioxus-web` have
/// no DOM node behind them and are skipped the same way.
///
/// ```rust, ignore
/// let mut card = use_signal(|| None::<Rc<MountedData>>);
///
/// rsx! {
///     div { onmounted: move |evt| card.set(Some(evt.data())) }
///     button {
///         onclick: move |_| set_mounted_animation_name(card.read().as_deref(), "shake"),
///         "Shake"
///     }
/// }
/// ```
pub fn set_mounted_animation_name(element: Option<&MountedData>, animation_name: &str) {
    let mut node = element.and_then(|mounted| {
        let node = mounted.downcast::<web_sys::Element>().cloned();
        if node.is_none() {
            tracing::debug!("Mounted element is not backed by a web-sys node");
        }
        node
    });

    set_animation_name(node.as_mut(), animation_name);
}
