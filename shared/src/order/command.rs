//! Session commands
//!
//! Every user intent on the storefront (opening an item, tapping `+` on an
//! add-on, confirming, removing a cart line) is sent as one explicit
//! command value and applied by the server's session transitions.

use serde::{Deserialize, Serialize};

/// Command sent by a client against its browsing session
///
/// ```json
/// { "type": "INCREMENT_ADD_ON", "name": "Granola" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionCommand {
    // ========== Draft lifecycle ==========
    /// Open a catalog item for customization (replaces any open draft)
    OpenDraft { item_id: String },
    /// Confirm the open draft into a cart line
    CommitDraft,
    /// Close the open draft without adding anything
    DiscardDraft,

    // ========== Draft editing ==========
    SelectSize { size_key: String },
    IncrementAddOn { name: String },
    DecrementAddOn { name: String },
    IncrementQuantity,
    DecrementQuantity,

    // ========== Cart ==========
    /// Remove a committed line; unknown ids are ignored
    RemoveLine { line_id: String },
}

impl SessionCommand {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            SessionCommand::OpenDraft { .. } => "OPEN_DRAFT",
            SessionCommand::CommitDraft => "COMMIT_DRAFT",
            SessionCommand::DiscardDraft => "DISCARD_DRAFT",
            SessionCommand::SelectSize { .. } => "SELECT_SIZE",
            SessionCommand::IncrementAddOn { .. } => "INCREMENT_ADD_ON",
            SessionCommand::DecrementAddOn { .. } => "DECREMENT_ADD_ON",
            SessionCommand::IncrementQuantity => "INCREMENT_QUANTITY",
            SessionCommand::DecrementQuantity => "DECREMENT_QUANTITY",
            SessionCommand::RemoveLine { .. } => "REMOVE_LINE",
        }
    }
}
