use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::Icon;
use crate::utils::constants::CONTACT_PHONE_HREF;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroProps {
    /// Smooth-scrolls the menu section into view.
    pub on_browse_menu: Callback<MouseEvent>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="hero">
            <div class="hero-content">
                <h2>{"Настоящий шашлык с доставкой за 40 минут! 🔥"}</h2>
                <p>
                    {"Свежее мясо, маринованное по авторским рецептам. \
                      Готовим на углях и доставляем горячим прямо к вам."}
                </p>
                <div class="hero-actions">
                    <button class="btn btn-secondary btn-lg" onclick={props.on_browse_menu.clone()}>
                        <Icon name="ShoppingCart" size={24} />
                        {"Смотреть меню"}
                    </button>
                    <a class="btn btn-outline btn-lg" href={CONTACT_PHONE_HREF}>
                        <Icon name="Phone" size={24} />
                        {"Позвонить"}
                    </a>
                </div>
            </div>
        </section>
    }
}
