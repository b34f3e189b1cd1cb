pub mod controller;
pub mod svm_2_any_message;
pub mod evm_extra_args;
pub mod transfer_quote;
pub mod transfer_request;

pub use controller::*;
pub use svm_2_any_message::*;
pub use evm_extra_args::*;
pub use transfer_quote::*;
pub use transfer_request::*;
