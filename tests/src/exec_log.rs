use crate::logging_backend::Call;

use fieldmap_core::{schema::TableId, Operation};
use std::sync::{Arc, Mutex};

/// A wrapper around the call log that provides a clean API for tests
pub struct ExecLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl ExecLog {
    pub(crate) fn new(calls: Arc<Mutex<Vec<Call>>>) -> Self {
        Self { calls }
    }

    /// Get the number of logged calls
    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }

    /// Count mutations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| match call {
                Call::Exec { operation, .. } => predicate(operation),
                _ => false,
            })
            .count()
    }

    /// Number of mutations issued, accepted or not
    pub fn mutations(&self) -> usize {
        self.count(|_| true)
    }

    /// Check if any mutation matches the given predicate
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Operation) -> bool,
    {
        self.count(predicate) > 0
    }

    /// Check if there's a DeleteFieldDimension operation
    pub fn has_delete_dimension(&self) -> bool {
        self.any(|op| matches!(op, Operation::DeleteFieldDimension(_)))
    }

    /// Check if there's an UpdateFieldDimension operation
    pub fn has_update_dimension(&self) -> bool {
        self.any(|op| matches!(op, Operation::UpdateFieldDimension(_)))
    }

    /// Check if there's an UpdateFieldValues operation
    pub fn has_update_values(&self) -> bool {
        self.any(|op| matches!(op, Operation::UpdateFieldValues(_)))
    }

    /// Number of table fetches
    pub fn table_fetches(&self, table: TableId) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| matches!(call, Call::FetchTable { table: t, .. } if *t == table))
            .count()
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.calls.lock().unwrap().clear();
    }

    /// Remove and return the first call from the log
    /// Returns None if the log is empty
    pub fn pop(&mut self) -> Option<Call> {
        let mut calls = self.calls.lock().unwrap();
        if calls.is_empty() {
            None
        } else {
            Some(calls.remove(0))
        }
    }

    /// Remove and return the first call, which must be a mutation
    pub fn pop_op(&mut self) -> (Operation, bool) {
        match self.pop() {
            Some(Call::Exec { operation, ok }) => (operation, ok),
            call => panic!("expected a mutation; got {call:?}"),
        }
    }

    /// Get access to all calls for custom assertions
    pub fn with_calls<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[Call]) -> R,
    {
        let calls = self.calls.lock().unwrap();
        f(&calls)
    }
}
