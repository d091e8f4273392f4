use tokio::sync::mpsc;

/// Interrupt notifications consumed by `run_session`. A closed channel means no more
/// interrupts will arrive.
pub type Interrupts = mpsc::Receiver<()>;

/// Forwards every Ctrl-C to the returned receiver. Must be called inside a runtime.
pub fn ctrl_c_interrupts() -> Interrupts {
    let (tx, rx) = mpsc::channel(4);
    tokio::spawn(async move {
        loop {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "cannot listen for interrupts");
                break;
            }
            if tx.send(()).await.is_err() {
                break;
            }
        }
    });
    rx
}
