use yew::prelude::*;

use crate::components::icon::Icon;

const DELIVERY_POINTS: [(&str, &str, &str); 3] = [
    ("Clock", "40 минут", "Среднее время доставки по городу"),
    ("MapPin", "Зона доставки", "Бесплатная доставка от 1000 ₽"),
    ("Utensils", "Горячим", "Термосумки сохраняют температуру"),
];

#[function_component(DeliverySection)]
pub fn delivery_section() -> Html {
    html! {
        <section id="delivery" class="delivery-section">
            <h2>{"Доставка"}</h2>
            <div class="delivery-grid">
                { for DELIVERY_POINTS.iter().map(|(icon, title, text)| html! {
                    <div class="delivery-card" key={*title}>
                        <Icon name={*icon} size={48} />
                        <h3>{ *title }</h3>
                        <p>{ *text }</p>
                    </div>
                })}
            </div>
        </section>
    }
}
