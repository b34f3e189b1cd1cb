//! In-memory router and custody sharing one token ledger.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use anchor_lang::{prelude::*, solana_program::program_error::ProgramError};

use crate::{
    custody::Custody, orchestrator::TransferOrchestrator, router::Router, state::SVM2AnyMessage,
};

pub const SELECTOR: u64 = 1001033144;

/// `0x0BF3dE8c5D3e8A2B34D2BEeB17ABfCeBaf363A59`
pub const RECEIVER: [u8; 20] = [
    0x0b, 0xf3, 0xde, 0x8c, 0x5d, 0x3e, 0x8a, 0x2b, 0x34, 0xd2, 0xbe, 0xeb, 0x17, 0xab, 0xfc,
    0xeb, 0xaf, 0x36, 0x3a, 0x59,
];

pub const INSUFFICIENT_FUNDS: u32 = 1;
pub const INSUFFICIENT_ALLOWANCE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holder {
    Caller,
    Adapter,
    Router,
}

#[derive(Debug, Default)]
pub struct Ledger {
    balances: HashMap<(Pubkey, Holder), u64>,
    /// What the caller approved the adapter to pull
    caller_allowances: HashMap<Pubkey, u64>,
    /// Absent when the router is not the delegate
    router_allowances: HashMap<Pubkey, u64>,
}

impl Ledger {
    pub fn shared() -> Rc<RefCell<Ledger>> {
        Rc::new(RefCell::new(Ledger::default()))
    }

    /// Creates a token, credits the caller and approves the adapter.
    pub fn fund_caller(&mut self, balance: u64, approved: u64) -> Pubkey {
        let token = Pubkey::new_unique();
        self.balances.insert((token, Holder::Caller), balance);
        self.caller_allowances.insert(token, approved);
        token
    }

    pub fn balance(&self, token: Pubkey, holder: Holder) -> u64 {
        self.balances.get(&(token, holder)).copied().unwrap_or(0)
    }

    pub fn caller_allowance(&self, token: Pubkey) -> u64 {
        self.caller_allowances.get(&token).copied().unwrap_or(0)
    }

    pub fn router_allowance(&self, token: Pubkey) -> u64 {
        self.router_delegation(token).unwrap_or(0)
    }

    pub fn router_delegation(&self, token: Pubkey) -> Option<u64> {
        self.router_allowances.get(&token).copied()
    }

    pub fn set_router_allowance(&mut self, token: Pubkey, amount: u64) {
        self.router_allowances.insert(token, amount);
    }

    fn move_balance(&mut self, token: Pubkey, from: Holder, to: Holder, amount: u64) -> Result<()> {
        let available = self.balance(token, from);
        if available < amount {
            return Err(ProgramError::Custom(INSUFFICIENT_FUNDS).into());
        }
        self.balances.insert((token, from), available - amount);
        *self.balances.entry((token, to)).or_insert(0) += amount;
        Ok(())
    }
}

pub struct MockCustody {
    ledger: Rc<RefCell<Ledger>>,
    approve_error: Option<ProgramError>,
}

impl MockCustody {
    pub fn new(ledger: &Rc<RefCell<Ledger>>) -> Self {
        Self {
            ledger: ledger.clone(),
            approve_error: None,
        }
    }

    pub fn failing_approve(mut self, error: ProgramError) -> Self {
        self.approve_error = Some(error);
        self
    }
}

impl Custody for MockCustody {
    fn pull(&mut self, token: Pubkey, amount: u64) -> Result<()> {
        let mut ledger = self.ledger.borrow_mut();
        let approved = ledger.caller_allowance(token);
        if approved < amount {
            return Err(ProgramError::Custom(INSUFFICIENT_ALLOWANCE).into());
        }
        ledger.move_balance(token, Holder::Caller, Holder::Adapter, amount)?;
        ledger.caller_allowances.insert(token, approved - amount);
        Ok(())
    }

    fn release(&mut self, token: Pubkey, amount: u64) -> Result<()> {
        let mut ledger = self.ledger.borrow_mut();
        ledger.move_balance(token, Holder::Adapter, Holder::Caller, amount)?;
        *ledger.caller_allowances.entry(token).or_insert(0) += amount;
        Ok(())
    }

    fn router_delegation(&self, token: Pubkey) -> Result<Option<u64>> {
        Ok(self.ledger.borrow().router_delegation(token))
    }

    fn approve_router(&mut self, token: Pubkey, amount: u64) -> Result<()> {
        if let Some(error) = self.approve_error.take() {
            return Err(error.into());
        }
        self.ledger.borrow_mut().set_router_allowance(token, amount);
        Ok(())
    }

    fn revoke_router(&mut self, token: Pubkey) -> Result<()> {
        self.ledger.borrow_mut().router_allowances.remove(&token);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub destination_chain_selector: u64,
    pub message: SVM2AnyMessage,
    pub value: u64,
}

pub struct MockRouter {
    ledger: Rc<RefCell<Ledger>>,
    supports_chains: bool,
    fee: u64,
    message_id: [u8; 32],
    pulls_tokens: bool,
    fee_error: Option<ProgramError>,
    send_error: Option<ProgramError>,
    quoted: RefCell<Vec<(u64, SVM2AnyMessage)>>,
    sent: Vec<SentMessage>,
}

impl MockRouter {
    pub fn new(ledger: &Rc<RefCell<Ledger>>) -> Self {
        let mut message_id = [0u8; 32];
        message_id[31] = 1;

        Self {
            ledger: ledger.clone(),
            supports_chains: true,
            fee: 0,
            message_id,
            pulls_tokens: false,
            fee_error: None,
            send_error: None,
            quoted: RefCell::new(Vec::new()),
            sent: Vec::new(),
        }
    }

    pub fn with_fee(mut self, fee: u64) -> Self {
        self.fee = fee;
        self
    }

    pub fn with_message_id(mut self, message_id: [u8; 32]) -> Self {
        self.message_id = message_id;
        self
    }

    pub fn without_chains(mut self) -> Self {
        self.supports_chains = false;
        self
    }

    /// Consume the approved allowance on dispatch, like the real router does.
    pub fn pulling_tokens(mut self) -> Self {
        self.pulls_tokens = true;
        self
    }

    pub fn failing_fee(mut self, error: ProgramError) -> Self {
        self.fee_error = Some(error);
        self
    }

    pub fn failing_send(mut self, error: ProgramError) -> Self {
        self.send_error = Some(error);
        self
    }

    pub fn quoted(&self) -> Vec<(u64, SVM2AnyMessage)> {
        self.quoted.borrow().clone()
    }

    pub fn sent(&self) -> &[SentMessage] {
        &self.sent
    }
}

impl Router for MockRouter {
    fn is_chain_supported(&self, _destination_chain_selector: u64) -> Result<bool> {
        Ok(self.supports_chains)
    }

    fn get_fee(&self, destination_chain_selector: u64, message: &SVM2AnyMessage) -> Result<u64> {
        if let Some(error) = &self.fee_error {
            return Err(error.clone().into());
        }
        self.quoted
            .borrow_mut()
            .push((destination_chain_selector, message.clone()));
        Ok(self.fee)
    }

    fn ccip_send(
        &mut self,
        destination_chain_selector: u64,
        message: SVM2AnyMessage,
        value: u64,
    ) -> Result<[u8; 32]> {
        if let Some(error) = &self.send_error {
            return Err(error.clone().into());
        }

        if self.pulls_tokens {
            let mut ledger = self.ledger.borrow_mut();
            for token_amount in &message.token_amounts {
                let allowance = ledger.router_allowance(token_amount.token);
                if allowance < token_amount.amount {
                    return Err(ProgramError::Custom(INSUFFICIENT_ALLOWANCE).into());
                }
                ledger.move_balance(
                    token_amount.token,
                    Holder::Adapter,
                    Holder::Router,
                    token_amount.amount,
                )?;
                ledger.set_router_allowance(token_amount.token, allowance - token_amount.amount);
            }
        }

        self.sent.push(SentMessage {
            destination_chain_selector,
            message,
            value,
        });
        Ok(self.message_id)
    }
}

pub fn orchestrator(
    ledger: &Rc<RefCell<Ledger>>,
    router: MockRouter,
) -> TransferOrchestrator<MockRouter, MockCustody> {
    TransferOrchestrator::new(router, MockCustody::new(ledger))
}
