use anchor_lang::prelude::*;

/// One leg of value moving with a message.
#[derive(Debug, Clone, PartialEq, Eq, AnchorSerialize, AnchorDeserialize, Default)]
pub struct SVMTokenAmount {
    /// SPL mint being bridged
    pub token: Pubkey,
    /// Zero is allowed and moves nothing
    pub amount: u64,
}

/// Outbound CCIP message, in the layout the router's `get_fee` and `ccip_send` expect.
#[derive(Debug, Clone, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct SVM2AnyMessage {
    /// ABI-encoded receiver on the destination chain
    pub receiver: Vec<u8>,
    pub data: Vec<u8>,
    pub token_amounts: Vec<SVMTokenAmount>,
    /// `Pubkey::default()` pays the fee in lamports
    pub fee_token: Pubkey,
    pub extra_args: Vec<u8>,
}
