use crate::domain::model::Customer;
use crate::domain::ports::{ObjectTransport, SendData};
use crate::utils::error::Result;

/// Forwards customers untouched to a transport that already speaks [`Customer`].
#[derive(Debug, Clone)]
pub struct DirectSendAdapter<T: ObjectTransport> {
    transport: T,
}

impl<T: ObjectTransport> DirectSendAdapter<T> {
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

impl<T: ObjectTransport> SendData for DirectSendAdapter<T> {
    fn send(&self, customer: Customer) -> Result<()> {
        tracing::debug!(customer_id = customer.id, "Forwarding customer to object transport");
        self.transport.send(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AdapterError;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        received: Mutex<Vec<Customer>>,
    }

    impl ObjectTransport for RecordingTransport {
        fn send(&self, customer: Customer) -> Result<()> {
            self.received.lock().unwrap().push(customer);
            Ok(())
        }
    }

    /// Single-threaded collaborator: not `Sync`, shared through `Rc`.
    struct LocalTransport {
        received: Rc<RefCell<Vec<Customer>>>,
    }

    impl ObjectTransport for LocalTransport {
        fn send(&self, customer: Customer) -> Result<()> {
            self.received.borrow_mut().push(customer);
            Ok(())
        }
    }

    struct FailingTransport;

    impl ObjectTransport for FailingTransport {
        fn send(&self, _customer: Customer) -> Result<()> {
            Err(AdapterError::transport("legacy", "queue full"))
        }
    }

    #[test]
    fn test_forwards_customer_once_unchanged() {
        let adapter = DirectSendAdapter::new(RecordingTransport::default());
        let customer = Customer::new("Alice", 1);

        adapter.send(customer.clone()).unwrap();

        let received = adapter.transport().received.lock().unwrap();
        assert_eq!(received.as_slice(), &[customer]);
    }

    #[test]
    fn test_each_send_is_one_delegation() {
        let adapter = DirectSendAdapter::new(RecordingTransport::default());

        adapter.send(Customer::new("Alice", 1)).unwrap();
        adapter.send(Customer::new("Bob", 2)).unwrap();

        let received = adapter.into_inner().received.into_inner().unwrap();
        assert_eq!(received.len(), 2);
        assert_eq!(received[1], Customer::new("Bob", 2));
    }

    #[test]
    fn test_accepts_single_threaded_transport() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let adapter = DirectSendAdapter::new(LocalTransport {
            received: Rc::clone(&received),
        });

        adapter.send(Customer::new("Alice", 1)).unwrap();

        assert_eq!(received.borrow().as_slice(), &[Customer::new("Alice", 1)]);
    }

    #[test]
    fn test_propagates_transport_error() {
        let adapter = DirectSendAdapter::new(FailingTransport);

        let err = adapter.send(Customer::new("Alice", 1)).unwrap_err();

        match err {
            AdapterError::TransportError { transport, message } => {
                assert_eq!(transport, "legacy");
                assert_eq!(message, "queue full");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
