//! Closing message shown when the user ends the conversation.

use std::fmt::Debug;

/// Produces the farewell text for an ended conversation.
///
/// The default implementation returns fixed text; a model-backed generator
/// can be substituted without touching the state machine.
pub trait FarewellGenerator: Send + Sync + Debug {
    fn farewell(&self) -> String;
}

const FAREWELL_TEXT: &str = "Thank you for using our weather bot. \
We hope you have a wonderful day ahead. Goodbye!";

/// Constant-returning [`FarewellGenerator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticFarewell;

impl FarewellGenerator for StaticFarewell {
    fn farewell(&self) -> String {
        FAREWELL_TEXT.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn farewell_is_fixed_and_non_empty() {
        let first = StaticFarewell.farewell();
        let second = StaticFarewell.farewell();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}
