use anchor_lang::prelude::*;

#[error_code]
pub enum CcipTransferTokenError {
    #[msg("Receiver address is the zero address")]
    InvalidReceiver,
    #[msg("Destination chain is not supported by the router")]
    ChainNotSupported,
    #[msg("Native payment does not cover the router fee")]
    CannotPayFees,
    #[msg("Token mint is zero or does not match the provided accounts")]
    InvalidToken,
    #[msg("Router account is not the configured router")]
    InvalidRouter,
    #[msg("Fee receiver is not the router's native fee receiver")]
    InvalidFeeReceiver,
    #[msg("Router returned missing or malformed return data")]
    InvalidRouterResponse,
    #[msg("Controller does not hold enough lamports to forward the fee")]
    InsufficientNativeCustody,
    #[msg("Failed to serialize router instruction arguments")]
    MessageEncodingFailed,
}

/// `ChainNotSupported` carrying the rejected selector.
pub fn chain_not_supported(destination_chain_selector: u64) -> Error {
    msg!(
        "Error: destination chain ({}) is not supported",
        destination_chain_selector
    );
    error!(CcipTransferTokenError::ChainNotSupported)
        .with_values((destination_chain_selector, "supported chain"))
}

/// `CannotPayFees` carrying the required fee and the supplied payment, in that order.
pub fn cannot_pay_fees(required: u64, supplied: u64) -> Error {
    msg!(
        "Error: native payment ({}) is below the router fee ({})",
        supplied,
        required
    );
    error!(CcipTransferTokenError::CannotPayFees).with_values((required, supplied))
}
