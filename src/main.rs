mod app_config;
mod boot;
mod contact_runtime;
mod icons;
mod reveal_runtime;
mod scroll_runtime;
mod theme_store;
mod yew_app;

use boot::{BootFailure, BootStage};

fn main() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        boot::fail(BootFailure::NoWindow);
        return;
    };
    boot::enter(BootStage::Config);
    let _ = app_config::site_config();

    let Some(root) = document.get_element_by_id("app") else {
        boot::fail(BootFailure::NoRoot);
        return;
    };
    boot::enter(BootStage::Mount);
    yew::Renderer::<yew_app::App>::with_root(root).render();
}
