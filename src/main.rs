mod app_router;
mod auth;
mod core;
mod gestures;
mod persisted;
mod persisted_store;
mod yew_app;

use yew_app::App;

fn main() {
    persisted_store::bootstrap();
    yew::Renderer::<App>::new().render();
}
