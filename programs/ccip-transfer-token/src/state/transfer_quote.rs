use anchor_lang::prelude::*;

use crate::state::SVM2AnyMessage;

/// Message and the fee the router quoted for it. Never cached across calls.
#[derive(Debug, Clone, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct TransferQuote {
    pub fee: u64,
    pub message: SVM2AnyMessage,
}

/// Return data of the router's `get_fee`.
#[derive(Debug, Clone, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct GetFeeResult {
    pub token: Pubkey,
    pub amount: u64,
    pub juels: u128,
}
