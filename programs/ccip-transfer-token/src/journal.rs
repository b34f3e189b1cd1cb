use anchor_lang::prelude::*;

use crate::custody::Custody;

/// A custody mutation already applied during a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Staged {
    Pulled { amount: u64 },
    /// `previous` is `None` when the router was not the delegate before the approval
    Approved { previous: Option<u64> },
}

/// Undo log of the custody mutations made by one transfer.
///
/// Dropping the journal commits. [`Journal::unwind`] reverts the entries newest first.
#[derive(Debug)]
pub(crate) struct Journal {
    token: Pubkey,
    entries: Vec<Staged>,
}

impl Journal {
    pub(crate) fn new(token: Pubkey) -> Self {
        Self {
            token,
            entries: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, entry: Staged) {
        self.entries.push(entry);
    }

    /// Best effort: an entry that fails to revert is logged and the rest are still attempted.
    pub(crate) fn unwind<C: Custody + ?Sized>(self, custody: &mut C) {
        for entry in self.entries.into_iter().rev() {
            let reverted = match entry {
                Staged::Approved {
                    previous: Some(amount),
                } => custody.approve_router(self.token, amount),
                Staged::Approved { previous: None } => custody.revoke_router(self.token),
                Staged::Pulled { amount } => custody.release(self.token, amount),
            };

            if let Err(e) = reverted {
                msg!("Error: failed to revert {:?} ({:?})", entry, e);
            }
        }
    }
}
