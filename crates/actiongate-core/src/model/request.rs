//! Evaluation request and reserved scope names.

/// Channel used when the dispatcher does not name one.
pub const DEFAULT_CHANNEL: &str = "default";

/// Reserved resource name: the channel-wide wildcard tier.
pub const ANY_RESOURCE: &str = "ANY";

/// One access decision input: who wants which resource on which channel.
///
/// Identity verification is the dispatcher's job; the engine only matches
/// the token it is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRequest<'a> {
    /// Requester identity (session/sender id).
    pub identity: &'a str,
    /// Action being requested.
    pub resource: &'a str,
    /// Channel the interaction arrived on.
    pub channel: &'a str,
}

impl<'a> AccessRequest<'a> {
    /// Request on the default channel.
    pub fn new(identity: &'a str, resource: &'a str) -> Self {
        Self {
            identity,
            resource,
            channel: DEFAULT_CHANNEL,
        }
    }

    /// Scope the request to a specific channel.
    pub fn on_channel(mut self, channel: &'a str) -> Self {
        self.channel = channel;
        self
    }
}
