pub mod button;
pub mod confirm;
pub mod icons;
pub mod modal;

pub use button::{Button, ButtonVariant};
pub use confirm::Confirm;
pub use modal::Modal;
