use anchor_lang::prelude::*;

use crate::constants::ANCHOR_DISCRIMINATOR;

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Controller {
    pub bump: u8,

    /// CCIP router program every transfer is dispatched through, fixed at initialization
    pub router: Pubkey,
}

impl Controller {
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR + Controller::INIT_SPACE;
}
