use crate::adapters::{DirectSendAdapter, JsonSendAdapter};
use crate::config::{direct_output_error, SendMode, SendPlan};
use crate::domain::ports::SendData;
use crate::transports::{ConsoleTransport, FileTransport};
use crate::utils::error::Result;

/// Wires the adapter and transport a plan asks for.
///
/// A direct plan with an output path is rejected: the object transport has no file form.
pub fn build_sender(plan: &SendPlan) -> Result<Box<dyn SendData>> {
    let sender: Box<dyn SendData> = match (plan.mode, &plan.output) {
        (SendMode::Direct, Some(path)) => {
            return Err(direct_output_error(
                "transport.output",
                &path.display().to_string(),
            ));
        }
        (SendMode::Direct, None) => Box::new(DirectSendAdapter::new(ConsoleTransport::stdout())),
        (SendMode::Json, Some(path)) => Box::new(JsonSendAdapter::new(FileTransport::new(path))),
        (SendMode::Json, None) => Box::new(JsonSendAdapter::new(ConsoleTransport::stdout())),
    };
    Ok(sender)
}

/// Sends the plan's customer exactly once through `sender`.
pub fn run(plan: SendPlan, sender: &dyn SendData) -> Result<()> {
    tracing::info!(
        mode = %plan.mode,
        customer_id = plan.customer.id,
        "Sending customer"
    );
    sender.send(plan.customer)?;
    tracing::info!("✅ Customer delivered");
    Ok(())
}
