use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::Icon;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#menu", "Меню"),
    ("#delivery", "Доставка"),
    ("#about", "О нас"),
    ("#promo", "Акции"),
    ("#contacts", "Контакты"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub total_count: u32,
    pub on_toggle_cart: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="app-header">
            <div class="header-inner">
                <div class="logo">
                    <Icon name="Flame" size={32} class="logo-icon" />
                    <h1>{"Шашлык Express"}</h1>
                </div>
                <nav class="main-nav">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} key={*href}>{ *label }</a>
                    })}
                </nav>
                <button class="btn btn-cart" onclick={props.on_toggle_cart.clone()}>
                    <Icon name="ShoppingCart" />
                    {"Корзина"}
                    if props.total_count > 0 {
                        <span class="cart-badge">{ props.total_count }</span>
                    }
                </button>
            </div>
        </header>
    }
}
