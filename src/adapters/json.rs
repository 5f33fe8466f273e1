use crate::domain::model::Customer;
use crate::domain::ports::{SendData, StringTransport};
use crate::utils::error::Result;

/// Serializes customers to compact JSON for transports that only accept strings.
///
/// Keys follow the declared field order of [`Customer`], e.g. `{"Name":"Alice","Id":1}`.
/// If serialization fails the transport is never called.
#[derive(Debug, Clone)]
pub struct JsonSendAdapter<T: StringTransport> {
    transport: T,
}

impl<T: StringTransport> JsonSendAdapter<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }
}

impl<T: StringTransport> SendData for JsonSendAdapter<T> {
    fn send(&self, customer: Customer) -> Result<()> {
        let payload = serde_json::to_string(&customer).map_err(|e| {
            tracing::error!(customer_id = customer.id, "Failed to serialize customer: {}", e);
            e
        })?;

        tracing::debug!(
            customer_id = customer.id,
            bytes = payload.len(),
            "Forwarding serialized customer to string transport"
        );
        self.transport.send(payload)
    }
}
