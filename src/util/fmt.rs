use std::fmt::{self, Debug, Formatter};

/// Writes the contained string verbatim when debug formatted, for building custom debug output out
/// of pre-formatted pieces.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
