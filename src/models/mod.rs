pub mod blueprints;
pub mod response;

pub use blueprints::*;
pub use response::*;
