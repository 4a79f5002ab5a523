//! The resolution passes, in the order the resolver runs them
//!
//! Each pass relies on the output of every pass before it; see
//! [`crate::pipeline::ResolverBuilder`] for the order.

pub mod action_pass;
pub mod default_pass;
pub mod design_pass;
pub mod field_resolver;
pub mod menu_pass;
pub mod metadata_pass;
pub mod normalizer;
pub mod property_pass;
pub mod sort;
pub mod template_pass;
pub mod view_pass;

pub use action_pass::ActionPass;
pub use default_pass::DefaultPass;
pub use design_pass::DesignPass;
pub use field_resolver::{FieldContext, FieldResolver};
pub use menu_pass::MenuPass;
pub use metadata_pass::MetadataPass;
pub use normalizer::NormalizerPass;
pub use property_pass::PropertyPass;
pub use template_pass::TemplatePass;
pub use view_pass::ViewPass;
