pub mod footer;
pub mod modal;
pub mod nav;
pub mod toast;
pub mod tournaments;
