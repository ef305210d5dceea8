use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::Icon;

#[derive(Properties, PartialEq, Clone)]
pub struct PromoBannerProps {
    /// Opens the cart sheet.
    pub on_order_now: Callback<MouseEvent>,
}

#[function_component(PromoBanner)]
pub fn promo_banner(props: &PromoBannerProps) -> Html {
    html! {
        <section id="promo" class="promo-section">
            <div class="promo-banner">
                <div class="promo-text">
                    <Icon name="Gift" size={40} />
                    <div>
                        <h3>{"Скидка 20% на первый заказ!"}</h3>
                        <p>{"Промокод: ПЕРВЫЙ20"}</p>
                    </div>
                </div>
                <button class="btn btn-secondary btn-lg" onclick={props.on_order_now.clone()}>
                    {"Заказать сейчас"}
                </button>
            </div>
        </section>
    }
}
