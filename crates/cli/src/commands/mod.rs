pub mod check;
pub mod clear_cache;
pub mod model;
pub mod resolve;

pub use check::check_command;
pub use clear_cache::clear_cache_command;
pub use model::model_command;
pub use resolve::resolve_command;
