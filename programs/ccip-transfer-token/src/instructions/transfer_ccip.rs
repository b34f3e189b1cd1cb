use anchor_lang::{prelude::*, system_program};

use anchor_spl::{
    token::Token,
    token_interface::{Mint, TokenAccount},
};

use crate::{
    constants::{CONTROLLER_SEED, FEE_BILLING_SIGNER_SEED, NATIVE_FEE_RECEIVER_SEED, VAULT_SEED},
    custody::SplCustody,
    error::CcipTransferTokenError,
    orchestrator::TransferOrchestrator,
    router::RouterCpi,
    state::{Controller, TransferRequest},
};

#[derive(Accounts)]
pub struct TransferCcip<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONTROLLER_SEED],
        bump = controller.bump,
    )]
    pub controller: Account<'info, Controller>,

    #[account(
        mut,
        constraint = from.mint == mint.key() @ CcipTransferTokenError::InvalidToken,
        constraint = from.owner == authority.key(),
    )]
    pub from: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [
            VAULT_SEED,
            mint.key().as_ref(),
        ],
        bump,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    /// CHECK: the configured CCIP router program
    #[account(address = controller.router @ CcipTransferTokenError::InvalidRouter)]
    pub router: UncheckedAccount<'info>,

    /// CHECK: router PDA of the destination chain, checked when asking whether the chain is supported
    pub dest_chain_state: UncheckedAccount<'info>,

    /// CHECK: router PDA that pulls the transferred tokens as the vault's delegate
    #[account(
        seeds = [FEE_BILLING_SIGNER_SEED],
        bump,
        seeds::program = controller.router,
    )]
    pub router_fee_billing_signer: UncheckedAccount<'info>,

    /// CHECK: router PDA that collects the forwarded fee
    #[account(
        mut,
        seeds = [NATIVE_FEE_RECEIVER_SEED],
        bump,
        seeds::program = controller.router,
    )]
    pub fee_receiver: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Program<'info, Token>,
}

pub(crate) fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, TransferCcip<'info>>,
    destination_chain_selector: u64,
    receiver: [u8; 20],
    token: Pubkey,
    amount: u64,
    native_payment: u64,
) -> Result<[u8; 32]> {
    // The attached payment lands with the controller; only the fee leaves it.
    if native_payment > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.authority.to_account_info(),
                    to: ctx.accounts.controller.to_account_info(),
                },
            ),
            native_payment,
        )?;
    }

    let controller_bump = ctx.accounts.controller.bump;

    let router = RouterCpi {
        program: ctx.accounts.router.to_account_info(),
        controller: ctx.accounts.controller.to_account_info(),
        controller_bump,
        dest_chain_state: ctx.accounts.dest_chain_state.to_account_info(),
        fee_receiver: Some(ctx.accounts.fee_receiver.to_account_info()),
        remaining_accounts: ctx.remaining_accounts.to_vec(),
    };

    let custody = SplCustody {
        token_program: ctx.accounts.token_program.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        decimals: ctx.accounts.mint.decimals,
        from: ctx.accounts.from.to_account_info(),
        authority: ctx.accounts.authority.to_account_info(),
        vault: ctx.accounts.vault.to_account_info(),
        controller: ctx.accounts.controller.to_account_info(),
        controller_bump,
        router_signer: ctx.accounts.router_fee_billing_signer.to_account_info(),
    };

    let bridged = TransferOrchestrator::new(router, custody).transfer(TransferRequest {
        destination_chain_selector,
        receiver,
        token,
        amount,
        native_payment,
    })?;

    Ok(bridged.message_id)
}
