pub mod serde_helpers;
pub mod text;

pub use text::humanize;
