use anchor_lang::prelude::*;

pub mod constants;
pub mod custody;
pub mod error;
pub mod events;
pub mod instructions;
pub mod message;
pub mod orchestrator;
pub mod router;
pub mod state;

mod journal;

#[cfg(test)]
mod testing;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("6wQvzB5Sx4Ndx5Hm8h1RQoFyWJmRKNtK7TTJQxT4m9pT");

#[program]
pub mod ccip_transfer_token {
    use super::*;

    pub fn initialize_controller(ctx: Context<InitializeController>, router: Pubkey) -> Result<()> {
        initialize_controller::handler(ctx, router)
    }

    pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
        initialize_vault::handler(ctx)
    }

    pub fn build_message_and_calculate_transfer_fee<'info>(
        ctx: Context<'_, '_, '_, 'info, BuildMessageAndCalculateTransferFee<'info>>,
        destination_chain_selector: u64,
        receiver: [u8; 20],
        token: Pubkey,
        amount: u64,
    ) -> Result<TransferQuote> {
        build_message_and_calculate_transfer_fee::handler(
            ctx,
            destination_chain_selector,
            receiver,
            token,
            amount,
        )
    }

    pub fn transfer_ccip<'info>(
        ctx: Context<'_, '_, '_, 'info, TransferCcip<'info>>,
        destination_chain_selector: u64,
        receiver: [u8; 20],
        token: Pubkey,
        amount: u64,
        native_payment: u64,
    ) -> Result<[u8; 32]> {
        transfer_ccip::handler(
            ctx,
            destination_chain_selector,
            receiver,
            token,
            amount,
            native_payment,
        )
    }
}
