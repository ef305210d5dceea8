use web_sys::MouseEvent;
use yew::prelude::*;

pub struct UseSheetHandle {
    pub open: bool,
    pub toggle: Callback<MouseEvent>,
    pub show: Callback<MouseEvent>,
    pub close: Callback<MouseEvent>,
}

/// Open/closed state of the slide-over cart panel.
#[hook]
pub fn use_sheet() -> UseSheetHandle {
    let open = use_state(|| false);

    // Toggle from the header button
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*open;
            open.set(next);
            update_body_scroll(next);
        })
    };

    // Open directly ("Заказать сейчас")
    let show = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(true);
            update_body_scroll(true);
        })
    };

    // Close from the backdrop or the panel button
    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            update_body_scroll(false);
        })
    };

    UseSheetHandle {
        open: *open,
        toggle,
        show,
        close,
    }
}

/// The page behind the panel must not scroll while it is open.
fn update_body_scroll(open: bool) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(body) = document.body() {
                if open {
                    let _ = body.class_list().add_1("no-scroll");
                } else {
                    let _ = body.class_list().remove_1("no-scroll");
                }
            }
        }
    }
}
