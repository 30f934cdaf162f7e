//! Dialog primitives.

pub mod delete_confirm;
pub mod modal;

pub use delete_confirm::{ConfirmOutcome, DeleteConfirmModal};
pub use modal::{CloseReason, MODAL_TITLE_ID, Modal, ModalContent};
