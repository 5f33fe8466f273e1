use crate::domain::model::Customer;
use crate::utils::error::Result;
use std::rc::Rc;
use std::sync::Arc;

/// The capability callers program against: deliver one customer somewhere.
pub trait SendData {
    fn send(&self, customer: Customer) -> Result<()>;
}

/// Third-party transport that accepts the customer value as-is.
///
/// No thread-safety bound: an adapter is exactly as shareable as the transport it wraps.
pub trait ObjectTransport {
    fn send(&self, customer: Customer) -> Result<()>;
}

/// Third-party transport that only accepts a serialized payload.
pub trait StringTransport {
    fn send(&self, payload: String) -> Result<()>;
}

impl<T: ObjectTransport + ?Sized> ObjectTransport for &T {
    fn send(&self, customer: Customer) -> Result<()> {
        ObjectTransport::send(&**self, customer)
    }
}

impl<T: ObjectTransport + ?Sized> ObjectTransport for Box<T> {
    fn send(&self, customer: Customer) -> Result<()> {
        ObjectTransport::send(&**self, customer)
    }
}

impl<T: ObjectTransport + ?Sized> ObjectTransport for Arc<T> {
    fn send(&self, customer: Customer) -> Result<()> {
        ObjectTransport::send(&**self, customer)
    }
}

impl<T: ObjectTransport + ?Sized> ObjectTransport for Rc<T> {
    fn send(&self, customer: Customer) -> Result<()> {
        ObjectTransport::send(&**self, customer)
    }
}

impl<T: StringTransport + ?Sized> StringTransport for &T {
    fn send(&self, payload: String) -> Result<()> {
        StringTransport::send(&**self, payload)
    }
}

impl<T: StringTransport + ?Sized> StringTransport for Box<T> {
    fn send(&self, payload: String) -> Result<()> {
        StringTransport::send(&**self, payload)
    }
}

impl<T: StringTransport + ?Sized> StringTransport for Arc<T> {
    fn send(&self, payload: String) -> Result<()> {
        StringTransport::send(&**self, payload)
    }
}

impl<T: StringTransport + ?Sized> StringTransport for Rc<T> {
    fn send(&self, payload: String) -> Result<()> {
        StringTransport::send(&**self, payload)
    }
}
