use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IconProps {
    pub name: AttrValue,
    #[prop_or(20)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Icon looked up by name, same names the site design uses. Unknown names
/// render a neutral bullet instead of breaking the layout.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <span
            class={classes!("icon", props.class.clone())}
            style={format!("font-size: {}px", props.size)}
            aria-hidden="true"
        >
            { glyph(&props.name) }
        </span>
    }
}

fn glyph(name: &str) -> &'static str {
    match name {
        "Flame" => "🔥",
        "ShoppingCart" => "🛒",
        "ShoppingBag" => "🛍️",
        "Gift" => "🎁",
        "TrendingUp" => "📈",
        "Clock" => "🕐",
        "MapPin" => "📍",
        "Utensils" => "🍢",
        "Phone" => "📞",
        "Mail" => "✉️",
        "ArrowRight" => "→",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::glyph;

    #[test]
    fn known_names_resolve() {
        for name in [
            "Flame",
            "ShoppingCart",
            "ShoppingBag",
            "Gift",
            "TrendingUp",
            "Clock",
            "MapPin",
            "Utensils",
            "Phone",
            "Mail",
            "ArrowRight",
        ] {
            assert_ne!(glyph(name), "•", "no glyph for {}", name);
        }
    }

    #[test]
    fn unknown_names_fall_back_to_a_bullet() {
        assert_eq!(glyph("NoSuchIcon"), "•");
    }
}
