use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::{use_cart, use_sheet};
use crate::models::full_menu;

use super::{
    AboutSection, CartSheet, ContactsSection, DeliverySection, Footer, Header, Hero, MenuSection,
    PromoBanner,
};

#[function_component(App)]
pub fn app() -> Html {
    let menu = full_menu();

    // Session-local page state: the cart and the slide-over panel
    let cart = use_cart();
    let sheet = use_sheet();

    let on_browse_menu = Callback::from(|_: MouseEvent| {
        scroll_to_section("menu");
    });

    html! {
        <div class="page">
            <Header
                total_count={cart.total_count}
                on_toggle_cart={sheet.toggle.clone()}
            />
            <Hero on_browse_menu={on_browse_menu} />
            <PromoBanner on_order_now={sheet.show.clone()} />
            <MenuSection items={menu} on_add={cart.add.clone()} />
            <DeliverySection />
            <AboutSection />
            <ContactsSection />
            <Footer />
            <CartSheet
                open={sheet.open}
                lines={cart.lines.clone()}
                total_price={cart.total_price}
                on_add={cart.add.clone()}
                on_remove={cart.remove.clone()}
                on_close={sheet.close.clone()}
            />
        </div>
    }
}

/// Smooth-scroll an in-page section into view.
fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(section) = document.get_element_by_id(id) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}
