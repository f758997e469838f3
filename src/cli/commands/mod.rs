//! CLI command implementations

pub mod add;
pub mod compute;
pub mod new;
pub mod rm;
pub mod set_kind;
pub mod show;
pub mod validate;
