use yew::prelude::*;

use crate::components::icon::Icon;
use crate::models::MenuItem;
use crate::utils::format_price;

#[derive(Properties, PartialEq, Clone)]
pub struct MenuCardProps {
    pub item: MenuItem,
    pub index: usize,
    pub on_add: Callback<MenuItem>,
}

#[function_component(MenuCard)]
pub fn menu_card(props: &MenuCardProps) -> Html {
    let item = &props.item;

    let on_add_click = {
        let on_add = props.on_add.clone();
        let item = item.clone();
        Callback::from(move |_: MouseEvent| {
            on_add.emit(item.clone());
        })
    };

    // Staggered entrance, one card after another
    let card_style = format!("animation-delay: {}ms", props.index * 100);

    html! {
        <article class="menu-card" style={card_style}>
            <div class="menu-card-photo">
                <img src={item.image.clone()} alt={item.name.clone()} loading="lazy" />
                if item.is_popular {
                    <span class="popular-badge">
                        <Icon name="TrendingUp" size={14} />
                        {"Популярное"}
                    </span>
                }
            </div>
            <div class="menu-card-body">
                <h3>{ &item.name }</h3>
                <p class="menu-card-description">{ &item.description }</p>
                <div class="menu-card-price">
                    <span class="price">{ format_price(item.price) }</span>
                    <span class="weight">{ &item.weight }</span>
                </div>
            </div>
            <div class="menu-card-footer">
                <button class="btn btn-primary btn-block" onclick={on_add_click}>
                    {"+ В корзину"}
                </button>
            </div>
        </article>
    }
}
