use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="app-footer">
            <p>{"© 2024 Шашлык Express. Все права защищены."}</p>
        </footer>
    }
}
