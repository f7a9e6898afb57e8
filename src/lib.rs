pub mod consts;
pub mod form;
pub mod lists;
pub mod page;
pub mod surface;
pub mod templates;
pub mod utils;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;
