mod api;
mod app;
mod components;
mod utils;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(app::App);
}
