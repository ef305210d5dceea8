mod components;
mod hooks;
mod models;
mod utils;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🔥 Shashlik Express starting...");

    yew::Renderer::<App>::new().render();
}
