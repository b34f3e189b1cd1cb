use anchor_lang::prelude::*;

use crate::{
    constants::CONTROLLER_SEED,
    error::CcipTransferTokenError,
    state::Controller,
};

#[derive(Accounts)]
pub struct InitializeController<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        seeds = [CONTROLLER_SEED],
        bump,
        payer = payer,
        space = Controller::SPACE,
    )]
    pub controller: Account<'info, Controller>,

    pub system_program: Program<'info, System>,
}

/// Pins the CCIP router for the lifetime of the program; there is no instruction to change it.
pub(crate) fn handler(ctx: Context<InitializeController>, router: Pubkey) -> Result<()> {
    require_keys_neq!(router, Pubkey::default(), CcipTransferTokenError::InvalidRouter);
    require_keys_neq!(router, crate::ID, CcipTransferTokenError::InvalidRouter);

    let controller = &mut ctx.accounts.controller;

    controller.bump = ctx.bumps.controller;
    controller.router = router;

    msg!("Controller initialized with router {}", router);

    Ok(())
}
