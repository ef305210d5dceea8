use yew::prelude::*;

use crate::components::menu_card::MenuCard;
use crate::models::MenuItem;

#[derive(Properties, PartialEq, Clone)]
pub struct MenuSectionProps {
    pub items: Vec<MenuItem>,
    pub on_add: Callback<MenuItem>,
}

#[function_component(MenuSection)]
pub fn menu_section(props: &MenuSectionProps) -> Html {
    html! {
        <section id="menu" class="menu-section">
            <div class="section-heading">
                <h2>{"Наше меню"}</h2>
                <p>{"Выбирай лучшие шашлыки в городе"}</p>
            </div>
            <div class="menu-grid">
                { for props.items.iter().enumerate().map(|(index, item)| html! {
                    <MenuCard
                        key={item.id.to_string()}
                        item={item.clone()}
                        {index}
                        on_add={props.on_add.clone()}
                    />
                })}
            </div>
        </section>
    }
}
