use anchor_lang::{
    prelude::*,
    solana_program::{
        hash::hash,
        instruction::{AccountMeta, Instruction},
        program::{get_return_data, invoke_signed},
    },
};

use crate::{
    constants::{CONTROLLER_SEED, DEST_CHAIN_STATE_SEED, NATIVE_FEE_RECEIVER_SEED},
    error::CcipTransferTokenError,
    state::{GetFeeResult, SVM2AnyMessage},
};

/// The cross-chain transport every transfer is dispatched through.
pub trait Router {
    fn is_chain_supported(&self, destination_chain_selector: u64) -> Result<bool>;

    /// Fee in lamports for sending `message`. Must not mutate router state.
    fn get_fee(&self, destination_chain_selector: u64, message: &SVM2AnyMessage) -> Result<u64>;

    /// Dispatches `message`, paying `value` lamports, and returns the message id.
    fn ccip_send(
        &mut self,
        destination_chain_selector: u64,
        message: SVM2AnyMessage,
        value: u64,
    ) -> Result<[u8; 32]>;
}

#[derive(AnchorSerialize)]
struct GetFeeArgs {
    dest_chain_selector: u64,
    message: SVM2AnyMessage,
}

#[derive(AnchorSerialize)]
struct CcipSendArgs {
    dest_chain_selector: u64,
    message: SVM2AnyMessage,
    token_indexes: Vec<u8>,
}

/// [`Router`] backed by CPI into the configured CCIP router program.
///
/// Every account in `remaining_accounts` is passed through to the router, in order,
/// after the controller. The token accounts for the single transferred token are
/// expected at the start of that list.
pub struct RouterCpi<'info> {
    pub program: AccountInfo<'info>,
    pub controller: AccountInfo<'info>,
    pub controller_bump: u8,
    pub dest_chain_state: AccountInfo<'info>,
    /// Router PDA receiving the forwarded fee. Only needed for dispatch.
    pub fee_receiver: Option<AccountInfo<'info>>,
    pub remaining_accounts: Vec<AccountInfo<'info>>,
}

impl<'info> RouterCpi<'info> {
    fn invoke<T: AnchorDeserialize>(
        &self,
        name: &str,
        args: &impl AnchorSerialize,
        sign_as_controller: bool,
    ) -> Result<T> {
        let mut accounts = vec![AccountMeta {
            pubkey: *self.controller.key,
            is_signer: sign_as_controller,
            is_writable: false,
        }];
        accounts.extend(self.remaining_accounts.iter().map(|account| AccountMeta {
            pubkey: *account.key,
            is_signer: account.is_signer,
            is_writable: account.is_writable,
        }));

        let instruction = Instruction {
            program_id: *self.program.key,
            accounts,
            data: instruction_data(name, args)?,
        };

        let mut account_infos = vec![self.controller.clone()];
        account_infos.extend(self.remaining_accounts.iter().cloned());

        let bump = [self.controller_bump];
        let signer_seeds: &[&[&[u8]]] = &[&[CONTROLLER_SEED, &bump]];
        invoke_signed(&instruction, &account_infos, signer_seeds)?;

        let (program_id, data) = get_return_data().ok_or_else(|| {
            msg!("Error: router returned no data from `{}`", name);
            error!(CcipTransferTokenError::InvalidRouterResponse)
        })?;
        require_keys_eq!(
            program_id,
            *self.program.key,
            CcipTransferTokenError::InvalidRouterResponse
        );

        T::deserialize(&mut data.as_slice()).map_err(|e| {
            msg!("Error: Invalid router response ({:?})", e);
            error!(CcipTransferTokenError::InvalidRouterResponse)
        })
    }

    /// The fee receiver, provided it is the router's native fee PDA.
    fn fee_receiver(&self) -> Result<&AccountInfo<'info>> {
        let fee_receiver = self
            .fee_receiver
            .as_ref()
            .ok_or_else(|| error!(CcipTransferTokenError::InvalidFeeReceiver))?;

        let (expected, _) =
            Pubkey::find_program_address(&[NATIVE_FEE_RECEIVER_SEED], self.program.key);
        if *fee_receiver.key != expected {
            msg!(
                "Error: fee receiver ({}) is not the router's ({})",
                fee_receiver.key,
                expected
            );
            return Err(error!(CcipTransferTokenError::InvalidFeeReceiver)
                .with_pubkeys((*fee_receiver.key, expected)));
        }

        Ok(fee_receiver)
    }

    fn forward_fee(&self, value: u64) -> Result<()> {
        if value == 0 {
            return Ok(());
        }

        let fee_receiver = self.fee_receiver()?;

        let rent_exempt = Rent::get()?.minimum_balance(self.controller.data_len());
        let available = self.controller.lamports().saturating_sub(rent_exempt);
        if available < value {
            msg!(
                "Error: controller holds {} spendable lamports, fee is {}",
                available,
                value
            );
            return Err(error!(CcipTransferTokenError::InsufficientNativeCustody)
                .with_values((value, available)));
        }

        **self.controller.try_borrow_mut_lamports()? -= value;
        **fee_receiver.try_borrow_mut_lamports()? += value;

        Ok(())
    }
}

impl<'info> Router for RouterCpi<'info> {
    fn is_chain_supported(&self, destination_chain_selector: u64) -> Result<bool> {
        let (expected, _) = Pubkey::find_program_address(
            &[
                DEST_CHAIN_STATE_SEED,
                destination_chain_selector.to_le_bytes().as_ref(),
            ],
            self.program.key,
        );

        Ok(expected == *self.dest_chain_state.key
            && self.dest_chain_state.owner == self.program.key
            && !self.dest_chain_state.data_is_empty())
    }

    fn get_fee(&self, destination_chain_selector: u64, message: &SVM2AnyMessage) -> Result<u64> {
        let args = GetFeeArgs {
            dest_chain_selector: destination_chain_selector,
            message: message.clone(),
        };
        let result: GetFeeResult = self.invoke("get_fee", &args, false)?;

        Ok(result.amount)
    }

    fn ccip_send(
        &mut self,
        destination_chain_selector: u64,
        message: SVM2AnyMessage,
        value: u64,
    ) -> Result<[u8; 32]> {
        self.forward_fee(value)?;

        let args = CcipSendArgs {
            dest_chain_selector: destination_chain_selector,
            message,
            token_indexes: vec![0],
        };

        self.invoke("ccip_send", &args, true)
    }
}

/// Anchor instruction data: `sha256("global:<name>")[..8]` followed by the Borsh arguments.
fn instruction_data(name: &str, args: &impl AnchorSerialize) -> Result<Vec<u8>> {
    let preimage = format!("global:{}", name);
    let mut data = hash(preimage.as_bytes()).to_bytes()[..8].to_vec();

    args.serialize(&mut data).map_err(|e| {
        msg!("Error: cannot serialize `{}` arguments ({:?})", name, e);
        error!(CcipTransferTokenError::MessageEncodingFailed)
    })?;

    Ok(data)
}
