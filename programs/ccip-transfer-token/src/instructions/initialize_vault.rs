use anchor_lang::prelude::*;
use anchor_spl::{
    token::Token,
    token_interface::{Mint, TokenAccount},
};

use crate::{
    constants::{CONTROLLER_SEED, VAULT_SEED},
    state::Controller,
};

/// Creates the controller-owned token account that holds custody of `mint` during transfers.
#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        seeds = [CONTROLLER_SEED],
        bump = controller.bump,
    )]
    pub controller: Account<'info, Controller>,

    #[account(
        init,
        seeds = [
            VAULT_SEED,
            mint.key().as_ref(),
        ],
        bump,
        payer = payer,
        token::mint = mint,
        token::authority = controller,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    pub system_program: Program<'info, System>,

    pub token_program: Program<'info, Token>,
}

pub(crate) fn handler(ctx: Context<InitializeVault>) -> Result<()> {
    msg!(
        "Vault {} initialized for mint {}",
        ctx.accounts.vault.key(),
        ctx.accounts.mint.key()
    );

    Ok(())
}
