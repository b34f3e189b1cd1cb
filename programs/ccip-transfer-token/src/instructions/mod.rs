pub mod initialize_controller;
pub mod initialize_vault;
pub mod build_message_and_calculate_transfer_fee;
pub mod transfer_ccip;

pub use initialize_controller::*;
pub use initialize_vault::*;
pub use build_message_and_calculate_transfer_fee::*;
pub use transfer_ccip::*;
