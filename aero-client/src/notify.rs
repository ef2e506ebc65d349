use tracing::warn;

/// User-facing advisory channel. Invoked with a fixed message when the
/// free-text parser cannot make sense of the input.
pub trait Notifier {
    fn advise(&self, message: &str);
}

/// Writes advisories to stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn advise(&self, message: &str) {
        warn!("Advisory shown to user: {}", message);
        eprintln!("{}", message);
    }
}
