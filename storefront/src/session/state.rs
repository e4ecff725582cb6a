//! One browsing session: a draft slot and a cart

use shared::error::{AppError, AppResult};
use shared::order::{SessionCommand, SessionView};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::draft::{MAX_ADD_ON_ENTRIES, MAX_ADD_ON_NAME_LEN, SelectionDraft};

#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    draft: Option<SelectionDraft>,
    cart: Cart,
    /// Stamp of the last committed line, keeps line ids unique
    last_line_stamp: i64,
    /// Last activity (epoch millis)
    last_seen: i64,
}

impl Session {
    pub fn new(id: impl Into<String>, now: i64) -> Self {
        Self {
            id: id.into(),
            draft: None,
            cart: Cart::new(),
            last_line_stamp: 0,
            last_seen: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn draft(&self) -> Option<&SelectionDraft> {
        self.draft.as_ref()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn last_seen(&self) -> i64 {
        self.last_seen
    }

    pub fn touch(&mut self, now: i64) {
        self.last_seen = self.last_seen.max(now);
    }

    fn draft_mut(&mut self) -> AppResult<&mut SelectionDraft> {
        self.draft.as_mut().ok_or_else(AppError::draft_not_open)
    }

    /// `<item id>-<millis>`, bumped past the previous stamp on collision
    fn next_line_id(&mut self, item_id: &str, now: i64) -> String {
        let stamp = now.max(self.last_line_stamp + 1);
        self.last_line_stamp = stamp;
        format!("{item_id}-{stamp}")
    }

    /// Apply one command
    ///
    /// Errors leave the session unchanged, `last_seen` included.
    pub fn apply(&mut self, command: SessionCommand, catalog: &Catalog, now: i64) -> AppResult<()> {
        self.apply_command(command, catalog, now)?;
        self.touch(now);
        Ok(())
    }

    fn apply_command(
        &mut self,
        command: SessionCommand,
        catalog: &Catalog,
        now: i64,
    ) -> AppResult<()> {
        match command {
            SessionCommand::OpenDraft { item_id } => {
                let item = catalog
                    .item(&item_id)
                    .ok_or_else(|| AppError::product_not_found(&item_id))?;
                if let Some(previous) = &self.draft {
                    tracing::debug!(
                        session_id = %self.id,
                        previous = %previous.item_id(),
                        "Open draft replaced"
                    );
                }
                self.draft = Some(SelectionDraft::open(item, catalog.default_size()));
            }
            SessionCommand::CommitDraft => {
                let draft = self.draft.take().ok_or_else(AppError::draft_not_open)?;
                let line_id = self.next_line_id(draft.item_id(), now);
                let line = draft.commit(catalog, line_id);
                tracing::info!(
                    session_id = %self.id,
                    line_id = %line.id,
                    quantity = line.quantity,
                    "Draft committed to cart"
                );
                self.cart.add_line(line);
            }
            SessionCommand::DiscardDraft => {
                self.draft.take().ok_or_else(AppError::draft_not_open)?;
            }
            SessionCommand::SelectSize { size_key } => {
                let draft = self.draft.as_mut().ok_or_else(AppError::draft_not_open)?;
                if catalog.size(&size_key).is_none() {
                    tracing::warn!(session_id = %self.id, size_key = %size_key, "Unknown size selected");
                }
                draft.select_size(size_key);
            }
            SessionCommand::IncrementAddOn { name } => {
                let draft = self.draft.as_mut().ok_or_else(AppError::draft_not_open)?;
                if name.chars().count() > MAX_ADD_ON_NAME_LEN {
                    return Err(AppError::validation("Add-on name too long")
                        .with_detail("max_len", MAX_ADD_ON_NAME_LEN));
                }
                if draft.add_on_quantity(&name) == 0 && draft.add_ons().len() >= MAX_ADD_ON_ENTRIES {
                    return Err(AppError::validation("Too many distinct add-ons")
                        .with_detail("max_entries", MAX_ADD_ON_ENTRIES));
                }
                draft.increment_add_on(&name);
            }
            SessionCommand::DecrementAddOn { name } => self.draft_mut()?.decrement_add_on(&name),
            SessionCommand::IncrementQuantity => self.draft_mut()?.increment_quantity(),
            SessionCommand::DecrementQuantity => self.draft_mut()?.decrement_quantity(),
            SessionCommand::RemoveLine { line_id } => {
                if !self.cart.remove_line(&line_id) {
                    tracing::debug!(session_id = %self.id, line_id = %line_id, "Remove of unknown line ignored");
                }
            }
        }

        Ok(())
    }

    pub fn view(&self, catalog: &Catalog) -> SessionView {
        SessionView {
            session_id: self.id.clone(),
            draft: self.draft.as_ref().map(|d| d.view(catalog)),
            cart: self.cart.view(),
        }
    }
}
