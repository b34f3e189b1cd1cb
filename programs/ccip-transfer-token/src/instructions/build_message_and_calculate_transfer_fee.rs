use anchor_lang::prelude::*;

use crate::{
    constants::CONTROLLER_SEED,
    error::CcipTransferTokenError,
    message::build_message_and_fee,
    router::RouterCpi,
    state::{Controller, TransferQuote},
};

/// Read-only preview of the message and fee `transfer_ccip` would use.
#[derive(Accounts)]
pub struct BuildMessageAndCalculateTransferFee<'info> {
    #[account(
        seeds = [CONTROLLER_SEED],
        bump = controller.bump,
    )]
    pub controller: Account<'info, Controller>,

    /// CHECK: the configured CCIP router program
    #[account(address = controller.router @ CcipTransferTokenError::InvalidRouter)]
    pub router: UncheckedAccount<'info>,

    /// CHECK: router PDA of the destination chain, validated by the router
    pub dest_chain_state: UncheckedAccount<'info>,
}

pub(crate) fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, BuildMessageAndCalculateTransferFee<'info>>,
    destination_chain_selector: u64,
    receiver: [u8; 20],
    token: Pubkey,
    amount: u64,
) -> Result<TransferQuote> {
    let router = RouterCpi {
        program: ctx.accounts.router.to_account_info(),
        controller: ctx.accounts.controller.to_account_info(),
        controller_bump: ctx.accounts.controller.bump,
        dest_chain_state: ctx.accounts.dest_chain_state.to_account_info(),
        fee_receiver: None,
        remaining_accounts: ctx.remaining_accounts.to_vec(),
    };

    build_message_and_fee(&router, destination_chain_selector, receiver, token, amount)
}
