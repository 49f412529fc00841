/// A channel that can carry a short human-readable message.
///
/// Implementations render a delivery receipt; printing it is the caller's
/// business. High-level code holds this trait, never a concrete channel.
pub trait Notifier {
    /// Short channel name, e.g. `"email"`.
    fn channel(&self) -> &'static str;

    /// Deliver `message`, returning the receipt line.
    fn send(&self, message: &str) -> String;
}
