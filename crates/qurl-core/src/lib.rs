pub mod expand;
pub mod logging;
pub mod store;
pub mod template;
