//! Pages
//!
//! One top-level component per dashboard tab.

mod analytics;
pub mod data;
pub mod economy;
pub mod markets;

pub use data::DataDashboard;
pub use economy::EconomyDashboard;
pub use markets::MarketsDashboard;
