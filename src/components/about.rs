use yew::prelude::*;

const STATS: [(&str, &str); 4] = [
    ("9+", "лет опыта"),
    ("50К+", "заказов"),
    ("4.9", "рейтинг"),
    ("15+", "позиций"),
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="about-section">
            <h2>{"О нас"}</h2>
            <p class="about-text">
                {"Мы готовим шашлык с 2015 года. Наша команда мастеров мангала \
                  использует только свежее мясо высшего качества и авторские \
                  маринады. Каждая порция готовится на настоящих древесных углях \
                  прямо перед доставкой."}
            </p>
            <div class="stats-grid">
                { for STATS.iter().map(|(value, label)| html! {
                    <div class="stat" key={*label}>
                        <p class="stat-value">{ *value }</p>
                        <p class="stat-label">{ *label }</p>
                    </div>
                })}
            </div>
        </section>
    }
}
