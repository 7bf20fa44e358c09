//! Authoritative accounting for the sale.
//!
//! Aggregate totals live in instance storage and are written back with the
//! rest of the [`Sale`](crate::storage::Sale); contributor records live in
//! persistent storage, one entry per contributor. Every mutation computes all
//! new values with checked arithmetic before writing anything, so an error
//! leaves both untouched.

use crate::errors::Error;
use crate::storage;
use crate::types::{ContributorRecord, SaleTotals};
use soroban_sdk::{Address, Env};

#[derive(Clone, Debug)]
pub struct Ledger {
    totals: SaleTotals,
}

impl Ledger {
    pub fn new(totals: SaleTotals) -> Self {
        Ledger { totals }
    }

    pub fn totals(&self) -> &SaleTotals {
        &self.totals
    }

    pub fn record_of(&self, env: &Env, contributor: &Address) -> Option<ContributorRecord> {
        storage::get_record(env, contributor)
    }

    /// Record an accepted purchase. Callers must have passed the window and
    /// cap checks; nothing here re-validates them.
    pub fn credit(
        &mut self,
        env: &Env,
        contributor: &Address,
        native_amount: i128,
        token_amount: i128,
    ) -> Result<ContributorRecord, Error> {
        let existing = self.record_of(env, contributor);
        let is_new = existing.is_none();
        let mut record = existing.unwrap_or(ContributorRecord {
            contributor: contributor.clone(),
            contributed: 0,
            entitlement: 0,
            refunded: false,
        });

        record.contributed = record
            .contributed
            .checked_add(native_amount)
            .ok_or(Error::RateOverflow)?;
        record.entitlement = record
            .entitlement
            .checked_add(token_amount)
            .ok_or(Error::RateOverflow)?;

        let mut totals = self.totals.clone();
        totals.total_raised = totals
            .total_raised
            .checked_add(native_amount)
            .ok_or(Error::RateOverflow)?;
        totals.total_issued = totals
            .total_issued
            .checked_add(token_amount)
            .ok_or(Error::RateOverflow)?;
        totals.custody = totals
            .custody
            .checked_add(native_amount)
            .ok_or(Error::RateOverflow)?;
        if is_new {
            totals.contributors = totals
                .contributors
                .checked_add(1)
                .ok_or(Error::RateOverflow)?;
        }

        storage::set_record(env, &record);
        self.totals = totals;
        Ok(record)
    }

    /// Flag `record` as refunded and take its contribution out of custody.
    /// Raised and issued totals stay as they were.
    pub fn mark_refunded(
        &mut self,
        env: &Env,
        mut record: ContributorRecord,
    ) -> Result<i128, Error> {
        if record.refunded {
            return Err(Error::AlreadyRefunded);
        }
        let custody = self
            .totals
            .custody
            .checked_sub(record.contributed)
            .filter(|left| *left >= 0)
            .ok_or(Error::RateOverflow)?;

        record.refunded = true;
        storage::set_record(env, &record);
        self.totals.custody = custody;
        Ok(record.contributed)
    }

    /// Empty custody, returning what it held.
    pub fn release_custody(&mut self) -> i128 {
        core::mem::take(&mut self.totals.custody)
    }
}
