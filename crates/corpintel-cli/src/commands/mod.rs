//! Command implementations.

pub mod analyze;
pub mod configure;
pub mod lookup;
pub mod route;

pub use self::analyze::execute_analyze;
pub use self::configure::execute_config;
pub use self::lookup::{execute_companies, execute_competitors, execute_subsidiaries};
pub use self::route::execute_route;
