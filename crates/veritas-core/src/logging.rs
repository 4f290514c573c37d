//! Log targets used with the [log] macros throughout the crate.
//!
//! No logger is installed by this crate; binaries choose their own.

/// Targets to be used within a [log] macro.
pub mod targets {
    /// Logs related to [tokenization](crate::token::tokenize).
    pub const TOKENIZE: &str = "tokenize";

    /// Logs related to [evaluation](crate::eval).
    pub const EVALUATE: &str = "evaluate";

    /// Logs related to [truth-table assembly](crate::table).
    pub const TABLE: &str = "table";
}
