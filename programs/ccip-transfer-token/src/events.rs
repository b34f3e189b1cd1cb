use anchor_lang::prelude::*;

/// Emitted once the router accepted a token transfer
#[event]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBridged {
    /// Identifier returned by the router's `ccip_send`
    pub message_id: [u8; 32],
    pub destination_chain_selector: u64,
    pub receiver: [u8; 20],
    /// Lamports forwarded to the router
    pub fee: u64,
    pub amount: u64,
}
