use yew::prelude::*;

use crate::models::{Cart, CartLine, MenuItem};

/// Cart state for the page session. Mutations go through the callbacks so
/// every consumer re-renders from the same `use_state` handle.
pub struct UseCartHandle {
    pub lines: Vec<CartLine>,
    pub total_price: u32,
    pub total_count: u32,
    pub add: Callback<MenuItem>,
    pub remove: Callback<u32>,
}

#[hook]
pub fn use_cart() -> UseCartHandle {
    let cart = use_state(Cart::default);

    // Add one unit (new line or quantity bump)
    let add = {
        let cart = cart.clone();
        Callback::from(move |item: MenuItem| {
            log::info!("🛒 + {}", item.name);
            let mut next = (*cart).clone();
            next.add(item);
            cart.set(next);
        })
    };

    // Remove one unit (line dropped at quantity 1)
    let remove = {
        let cart = cart.clone();
        Callback::from(move |id: u32| {
            log::info!("🛒 - item {}", id);
            let mut next = (*cart).clone();
            next.remove(id);
            cart.set(next);
        })
    };

    UseCartHandle {
        lines: cart.lines().to_vec(),
        total_price: cart.total_price(),
        total_count: cart.total_count(),
        add,
        remove,
    }
}
