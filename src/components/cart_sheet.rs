use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::Icon;
use crate::models::{CartLine, MenuItem};
use crate::utils::format_price;

#[derive(Properties, PartialEq, Clone)]
pub struct CartSheetProps {
    pub open: bool,
    pub lines: Vec<CartLine>,
    pub total_price: u32,
    pub on_add: Callback<MenuItem>,
    pub on_remove: Callback<u32>,
    pub on_close: Callback<MouseEvent>,
}

/// Slide-over order panel: current lines with quantity controls and the
/// running total. Checkout is not wired to anything yet.
#[function_component(CartSheet)]
pub fn cart_sheet(props: &CartSheetProps) -> Html {
    let on_checkout = Callback::from(|_: MouseEvent| {
        log::info!("🧾 Checkout pressed — order submission not implemented");
    });

    html! {
        <>
            <div
                class={classes!("cart-backdrop", props.open.then_some("active"))}
                onclick={props.on_close.clone()}
            ></div>
            <aside class={classes!("cart-sheet", props.open.then_some("open"))}>
                <div class="cart-sheet-header">
                    <h3>{"Ваш заказ"}</h3>
                    <button class="btn-close" onclick={props.on_close.clone()}>{"✕"}</button>
                </div>
                {
                    if props.lines.is_empty() {
                        html! {
                            <div class="cart-empty">
                                <Icon name="ShoppingBag" size={48} />
                                <p>{"Корзина пуста"}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <>
                                <div class="cart-lines">
                                    { for props.lines.iter().map(|line| render_line(line, props)) }
                                </div>
                                <div class="separator"></div>
                                <div class="cart-total">
                                    <span>{"Итого:"}</span>
                                    <span>{ format_price(props.total_price) }</span>
                                </div>
                                <button class="btn btn-primary btn-lg btn-block" onclick={on_checkout}>
                                    {"Оформить заказ"}
                                    <Icon name="ArrowRight" size={20} />
                                </button>
                            </>
                        }
                    }
                }
            </aside>
        </>
    }
}

fn render_line(line: &CartLine, props: &CartSheetProps) -> Html {
    let on_plus = {
        let on_add = props.on_add.clone();
        let item = line.item.clone();
        Callback::from(move |_: MouseEvent| {
            on_add.emit(item.clone());
        })
    };

    let on_minus = {
        let on_remove = props.on_remove.clone();
        let id = line.item.id;
        Callback::from(move |_: MouseEvent| {
            on_remove.emit(id);
        })
    };

    html! {
        <div class="cart-line" key={line.item.id.to_string()}>
            <img src={line.item.image.clone()} alt={line.item.name.clone()} />
            <div class="cart-line-info">
                <h4>{ &line.item.name }</h4>
                <p>{ format_price(line.item.price) }</p>
            </div>
            <div class="cart-line-qty">
                <button class="btn-qty" onclick={on_minus}>{"−"}</button>
                <span class="qty">{ line.quantity }</span>
                <button class="btn-qty" onclick={on_plus}>{"+"}</button>
            </div>
        </div>
    }
}
