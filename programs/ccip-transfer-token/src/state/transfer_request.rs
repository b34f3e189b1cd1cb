use anchor_lang::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRequest {
    pub destination_chain_selector: u64,
    pub receiver: [u8; 20],
    pub token: Pubkey,
    pub amount: u64,
    /// Lamports the caller attached to cover the router fee
    pub native_payment: u64,
}
