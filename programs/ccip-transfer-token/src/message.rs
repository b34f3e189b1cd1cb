//! Outbound message construction and fee quoting.
//!
//! The adapter only sends single-token, data-less transfers paid in lamports, so
//! everything but the receiver and the token amount is fixed.

use anchor_lang::prelude::*;

use solabi::{encode::encode, Address};

use crate::{
    constants::NATIVE_FEE_TOKEN,
    router::Router,
    state::{EVMExtraArgsV1, SVM2AnyMessage, SVMTokenAmount, TransferQuote},
};

/// `abi.encode(receiver)`: the address left-padded to one 32-byte word.
pub fn encode_receiver(receiver: [u8; 20]) -> Vec<u8> {
    encode(&(Address(receiver),))
}

pub fn build_message(receiver: [u8; 20], token: Pubkey, amount: u64) -> SVM2AnyMessage {
    SVM2AnyMessage {
        receiver: encode_receiver(receiver),
        data: Vec::new(),
        token_amounts: vec![SVMTokenAmount { token, amount }],
        fee_token: NATIVE_FEE_TOKEN,
        extra_args: EVMExtraArgsV1::default().to_bytes(),
    }
}

/// Builds the message for one transfer and asks the router what sending it costs.
///
/// Neither the selector nor the receiver is validated here. Router failures are
/// returned unchanged.
pub fn build_message_and_fee<R: Router + ?Sized>(
    router: &R,
    destination_chain_selector: u64,
    receiver: [u8; 20],
    token: Pubkey,
    amount: u64,
) -> Result<TransferQuote> {
    let message = build_message(receiver, token, amount);
    let fee = router.get_fee(destination_chain_selector, &message)?;

    Ok(TransferQuote { fee, message })
}
