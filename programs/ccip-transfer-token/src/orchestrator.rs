//! The transfer flow: validate, take custody, approve the router, dispatch, emit.
//!
//! Custody mutations are journaled and reverted when a later step fails, so a failed
//! transfer leaves custody and allowance as they were even on a host that does not
//! roll back on its own.

use anchor_lang::prelude::*;

use crate::{
    constants::ZERO_EVM_ADDRESS,
    custody::Custody,
    error::{cannot_pay_fees, chain_not_supported, CcipTransferTokenError},
    events::TokenBridged,
    journal::{Journal, Staged},
    message::build_message_and_fee,
    router::Router,
    state::{SVM2AnyMessage, TransferQuote, TransferRequest},
};

pub struct TransferOrchestrator<R, C> {
    router: R,
    custody: C,
}

impl<R: Router, C: Custody> TransferOrchestrator<R, C> {
    pub fn new(router: R, custody: C) -> Self {
        Self { router, custody }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn custody(&self) -> &C {
        &self.custody
    }

    pub fn quote(
        &self,
        destination_chain_selector: u64,
        receiver: [u8; 20],
        token: Pubkey,
        amount: u64,
    ) -> Result<TransferQuote> {
        build_message_and_fee(
            &self.router,
            destination_chain_selector,
            receiver,
            token,
            amount,
        )
    }

    /// Bridges `request.amount` of `request.token` and returns the emitted event.
    ///
    /// Only the quoted fee is forwarded to the router; any excess native payment stays
    /// with the adapter.
    pub fn transfer(&mut self, request: TransferRequest) -> Result<TokenBridged> {
        let TransferRequest {
            destination_chain_selector,
            receiver,
            token,
            amount,
            native_payment,
        } = request;

        require!(
            receiver != ZERO_EVM_ADDRESS,
            CcipTransferTokenError::InvalidReceiver
        );

        if !self.router.is_chain_supported(destination_chain_selector)? {
            return Err(chain_not_supported(destination_chain_selector));
        }

        let TransferQuote { fee, message } =
            self.quote(destination_chain_selector, receiver, token, amount)?;

        if native_payment < fee {
            return Err(cannot_pay_fees(fee, native_payment));
        }

        require_keys_neq!(token, Pubkey::default(), CcipTransferTokenError::InvalidToken);

        let mut journal = Journal::new(token);
        let message_id = match self.dispatch(
            &mut journal,
            destination_chain_selector,
            token,
            amount,
            message,
            fee,
        ) {
            Ok(message_id) => message_id,
            Err(e) => {
                journal.unwind(&mut self.custody);
                return Err(e);
            }
        };

        let bridged = TokenBridged {
            message_id,
            destination_chain_selector,
            receiver,
            fee,
            amount,
        };
        emit!(bridged.clone());

        Ok(bridged)
    }

    fn dispatch(
        &mut self,
        journal: &mut Journal,
        destination_chain_selector: u64,
        token: Pubkey,
        amount: u64,
        message: SVM2AnyMessage,
        fee: u64,
    ) -> Result<[u8; 32]> {
        self.custody.pull(token, amount)?;
        journal.record(Staged::Pulled { amount });

        let previous = self.custody.router_delegation(token)?;
        self.custody.approve_router(token, amount)?;
        journal.record(Staged::Approved { previous });

        self.router
            .ccip_send(destination_chain_selector, message, fee)
    }
}
