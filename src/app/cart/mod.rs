//! 购物车

pub mod model;
pub mod service;

pub use model::CartLine;
pub use service::CartStore;
