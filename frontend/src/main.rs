use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod helpers;
mod xlsx;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
