//! Shared value types.

pub mod toast;

pub use toast::{ToastId, ToastLevel, ToastOptions};
