use dioxus_animation_name::{set_animation_name, AnimationStyle, InlineStyle};
use proptest::prelude::*;

/// Property names and values as they show up in real `style` attributes
fn arb_style() -> impl Strategy<Value = InlineStyle> {
    prop::collection::vec(("[a-z][a-z-]{0,15}", "[a-zA-Z0-9 #.%()-]{0,12}"), 0..6).prop_map(
        |declarations| {
            let mut style = InlineStyle::new();
            for (name, value) in declarations {
                style.set_property(&name, &value);
            }
            style
        },
    )
}

proptest! {
    #[test]
    fn absent_element_is_untouched(name in any::<String>()) {
        let mut element: Option<InlineStyle> = None;
        set_animation_name(element.as_mut(), &name);
        prop_assert_eq!(element, None);
    }

    #[test]
    fn present_element_holds_exact_name(mut style in arb_style(), name in any::<String>()) {
        set_animation_name(Some(&mut style), &name);
        prop_assert_eq!(style.animation_name(), Some(name));
    }

    #[test]
    fn setting_twice_matches_setting_once(style in arb_style(), name in any::<String>()) {
        let mut once = style.clone();
        set_animation_name(Some(&mut once), &name);

        let mut twice = style;
        set_animation_name(Some(&mut twice), &name);
        set_animation_name(Some(&mut twice), &name);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn last_write_wins(mut style in arb_style(), first in any::<String>(), second in any::<String>()) {
        set_animation_name(Some(&mut style), &first);
        set_animation_name(Some(&mut style), &second);
        prop_assert_eq!(style.animation_name(), Some(second));
    }
}
