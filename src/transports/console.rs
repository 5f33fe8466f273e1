use crate::domain::model::Customer;
use crate::domain::ports::{ObjectTransport, StringTransport};
use crate::utils::error::{AdapterError, Result};
use std::io::{Stdout, Write};
use std::sync::Mutex;

/// Writes one line per delivery to the wrapped writer.
///
/// As an object transport it prints the `Debug` form of the customer; as a string
/// transport it prints the payload verbatim.
#[derive(Debug)]
pub struct ConsoleTransport<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleTransport<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleTransport<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.out
            .into_inner()
            .map_err(|_| AdapterError::transport("console", "writer lock poisoned"))
    }

    fn write_line(&self, line: &str) -> Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| AdapterError::transport("console", "writer lock poisoned"))?;
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> ObjectTransport for ConsoleTransport<W> {
    fn send(&self, customer: Customer) -> Result<()> {
        tracing::debug!(customer_id = customer.id, "Console transport received customer");
        self.write_line(&format!("{:?}", customer))
    }
}

impl<W: Write + Send> StringTransport for ConsoleTransport<W> {
    fn send(&self, payload: String) -> Result<()> {
        tracing::debug!(bytes = payload.len(), "Console transport received payload");
        self.write_line(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_send_writes_debug_line() {
        let transport = ConsoleTransport::new(Vec::new());

        ObjectTransport::send(&transport, Customer::new("Alice", 1)).unwrap();

        let written = String::from_utf8(transport.into_inner().unwrap()).unwrap();
        assert_eq!(written, "Customer { name: \"Alice\", id: 1 }\n");
    }

    #[test]
    fn test_string_send_writes_payload_line() {
        let transport = ConsoleTransport::new(Vec::new());

        StringTransport::send(&transport, "first".to_string()).unwrap();
        StringTransport::send(&transport, "second".to_string()).unwrap();

        let written = String::from_utf8(transport.into_inner().unwrap()).unwrap();
        assert_eq!(written, "first\nsecond\n");
    }
}
