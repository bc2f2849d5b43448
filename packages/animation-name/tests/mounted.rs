#![cfg(feature = "mounted")]

use dioxus_animation_name::set_mounted_animation_name;
use dioxus_html::MountedData;

#[test]
fn unmounted_element_is_skipped() {
    set_mounted_animation_name(None, "pulse");
}

#[test]
fn non_web_renderer_is_treated_as_absent() {
    // a renderer with no DOM node behind its mounted handle
    let mounted = MountedData::from(());
    set_mounted_animation_name(Some(&mounted), "pulse");
    assert!(mounted.downcast::<web_sys::Element>().is_none());
}
