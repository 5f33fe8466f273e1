use crate::domain::model::Customer;
use crate::domain::ports::{ObjectTransport, StringTransport};
use crate::utils::error::{AdapterError, Result};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One call received by a [`MemoryTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Object(Customer),
    Payload(String),
}

#[derive(Debug, Default)]
struct State {
    deliveries: Vec<Delivery>,
    fail_next: Option<String>,
}

/// In-memory transport implementing both capabilities.
///
/// Every successful call is recorded in order. [`fail_next`](Self::fail_next) arms a
/// one-shot failure that is returned instead of recording the next delivery.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    name: String,
    state: Mutex<State>,
}

impl MemoryTransport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Mutex::new(State::default()),
        }
    }

    pub fn fail_next(&self, message: impl Into<String>) {
        self.state().fail_next = Some(message.into());
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.state().deliveries.clone()
    }

    pub fn len(&self) -> usize {
        self.state().deliveries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // State updates never panic midway, so a poisoned lock still guards consistent data.
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, delivery: Delivery) -> Result<()> {
        let mut state = self.state();

        if let Some(message) = state.fail_next.take() {
            tracing::debug!(transport = %self.name, "Injected failure: {}", message);
            return Err(AdapterError::transport(&self.name, message));
        }

        state.deliveries.push(delivery);
        Ok(())
    }
}

impl ObjectTransport for MemoryTransport {
    fn send(&self, customer: Customer) -> Result<()> {
        self.record(Delivery::Object(customer))
    }
}

impl StringTransport for MemoryTransport {
    fn send(&self, payload: String) -> Result<()> {
        self.record(Delivery::Payload(payload))
    }
}
