use std::rc::Rc;

mod components;
mod config;
mod contact;
mod content;
mod diag;
mod dom;
mod error;
mod model;
mod state;
mod util;

use components::{App, AppProps};
use config::SiteConfig;

fn main() {
    let config = Rc::new(SiteConfig::from_page());
    let Some(root) = dom::mount_point() else {
        diag::console_error!("No <body> to mount the site chrome into");
        return;
    };
    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
