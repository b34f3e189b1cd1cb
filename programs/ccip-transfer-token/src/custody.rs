use anchor_lang::{prelude::*, solana_program::program_option::COption};

use anchor_spl::{token, token_interface::TokenAccount};

use crate::{constants::CONTROLLER_SEED, error::CcipTransferTokenError};

/// Token balance held by the adapter on behalf of a caller, and the router's right to spend it.
pub trait Custody {
    /// Moves `amount` from the caller into custody, consuming whatever approval the caller
    /// granted the adapter for it.
    fn pull(&mut self, token: Pubkey, amount: u64) -> Result<()>;

    /// Undoes a [`Custody::pull`]: returns `amount` to the caller and restores the approval
    /// the pull consumed.
    fn release(&mut self, token: Pubkey, amount: u64) -> Result<()>;

    /// The router's allowance over custody, or `None` when the router is not the delegate.
    fn router_delegation(&self, token: Pubkey) -> Result<Option<u64>>;

    /// Sets the router's allowance over custody to exactly `amount`.
    fn approve_router(&mut self, token: Pubkey, amount: u64) -> Result<()>;

    /// Removes any spending right over custody.
    fn revoke_router(&mut self, token: Pubkey) -> Result<()>;
}

/// [`Custody`] over an SPL vault owned by the controller PDA.
///
/// The caller signs the pull directly, so no approval is consumed and `release` has
/// only the balance to return. The vault is only ever delegated to the router.
pub struct SplCustody<'info> {
    pub token_program: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub decimals: u8,
    /// Caller's token account
    pub from: AccountInfo<'info>,
    pub authority: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
    pub controller: AccountInfo<'info>,
    pub controller_bump: u8,
    /// Router signer allowed to pull from the vault
    pub router_signer: AccountInfo<'info>,
}

impl<'info> SplCustody<'info> {
    fn check_mint(&self, token: Pubkey) -> Result<()> {
        require_keys_eq!(token, *self.mint.key, CcipTransferTokenError::InvalidToken);
        Ok(())
    }
}

impl<'info> Custody for SplCustody<'info> {
    fn pull(&mut self, token: Pubkey, amount: u64) -> Result<()> {
        self.check_mint(token)?;

        token::transfer_checked(
            CpiContext::new(
                self.token_program.clone(),
                token::TransferChecked {
                    from: self.from.clone(),
                    to: self.vault.clone(),
                    authority: self.authority.clone(),
                    mint: self.mint.clone(),
                },
            ),
            amount,
            self.decimals,
        )
    }

    fn release(&mut self, token: Pubkey, amount: u64) -> Result<()> {
        self.check_mint(token)?;

        let bump = [self.controller_bump];
        let controller_signer_seeds: &[&[&[u8]]] = &[&[CONTROLLER_SEED, &bump]];

        token::transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                token::TransferChecked {
                    from: self.vault.clone(),
                    to: self.from.clone(),
                    authority: self.controller.clone(),
                    mint: self.mint.clone(),
                },
                controller_signer_seeds,
            ),
            amount,
            self.decimals,
        )
    }

    fn router_delegation(&self, token: Pubkey) -> Result<Option<u64>> {
        self.check_mint(token)?;

        let data = self.vault.try_borrow_data()?;
        let vault = TokenAccount::try_deserialize(&mut &data[..])?;

        if vault.delegate == COption::Some(*self.router_signer.key) {
            Ok(Some(vault.delegated_amount))
        } else {
            Ok(None)
        }
    }

    fn approve_router(&mut self, token: Pubkey, amount: u64) -> Result<()> {
        self.check_mint(token)?;

        let bump = [self.controller_bump];
        let controller_signer_seeds: &[&[&[u8]]] = &[&[CONTROLLER_SEED, &bump]];

        // SPL `approve` replaces the delegated amount, it never adds to it.
        token::approve(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                token::Approve {
                    to: self.vault.clone(),
                    delegate: self.router_signer.clone(),
                    authority: self.controller.clone(),
                },
                controller_signer_seeds,
            ),
            amount,
        )
    }

    fn revoke_router(&mut self, token: Pubkey) -> Result<()> {
        self.check_mint(token)?;

        let bump = [self.controller_bump];
        let controller_signer_seeds: &[&[&[u8]]] = &[&[CONTROLLER_SEED, &bump]];

        token::revoke(CpiContext::new_with_signer(
            self.token_program.clone(),
            token::Revoke {
                source: self.vault.clone(),
                authority: self.controller.clone(),
            },
            controller_signer_seeds,
        ))
    }
}
