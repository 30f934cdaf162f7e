//! User domain entities.

pub mod model;
pub mod role;

pub use model::{PasswordChange, UserProfile};
pub use role::Role;
