//! Session store
//!
//! 使用 DashMap 按会话 ID 分片加锁：同一会话的命令串行执行，
//! 不同会话之间互不阻塞。

use std::time::Duration;

use dashmap::DashMap;
use dashmap::mapref::one::RefMut;
use shared::error::{AppError, AppResult};
use shared::order::{CheckoutView, SessionCommand, SessionView};

use super::Session;
use crate::catalog::Catalog;
use crate::checkout::{MessagingLink, format_order};

/// 会话管理器 - 内存中的浏览会话
#[derive(Debug)]
pub struct SessionManager {
    sessions: DashMap<String, Session>,
    idle_timeout: Duration,
}

impl SessionManager {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_timeout,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn is_idle(&self, session: &Session, now: i64) -> bool {
        let idle_ms = i64::try_from(self.idle_timeout.as_millis()).unwrap_or(i64::MAX);
        now.saturating_sub(session.last_seen()) > idle_ms
    }

    /// Look up a live session; an idle one is dropped and reported expired
    fn session_mut(&self, id: &str, now: i64) -> AppResult<RefMut<'_, String, Session>> {
        if self
            .sessions
            .remove_if(id, |_, session| self.is_idle(session, now))
            .is_some()
        {
            tracing::info!(session_id = %id, "Session expired on access");
            return Err(AppError::session_expired(id));
        }
        self.sessions
            .get_mut(id)
            .ok_or_else(|| AppError::session_not_found(id))
    }

    /// 创建新会话
    pub fn create(&self, catalog: &Catalog, now: i64) -> SessionView {
        let id = uuid::Uuid::new_v4().to_string();
        let session = Session::new(id.clone(), now);
        let view = session.view(catalog);
        self.sessions.insert(id.clone(), session);
        tracing::info!(session_id = %id, active = self.sessions.len(), "Session created");
        view
    }

    pub fn view(&self, id: &str, catalog: &Catalog, now: i64) -> AppResult<SessionView> {
        let mut session = self.session_mut(id, now)?;
        session.touch(now);
        Ok(session.view(catalog))
    }

    /// 执行一条会话命令，返回执行后的会话视图
    pub fn apply(
        &self,
        id: &str,
        command: SessionCommand,
        catalog: &Catalog,
        now: i64,
    ) -> AppResult<SessionView> {
        let mut session = self.session_mut(id, now)?;
        let name = command.name();
        if let Err(e) = session.apply(command, catalog, now) {
            tracing::warn!(session_id = %id, command = name, error = %e, "Session command rejected");
            return Err(e);
        }
        tracing::debug!(session_id = %id, command = name, "Session command applied");
        Ok(session.view(catalog))
    }

    /// 生成订单消息；空购物车拒绝结账
    pub fn checkout(&self, id: &str, link: &MessagingLink, now: i64) -> AppResult<CheckoutView> {
        let mut session = self.session_mut(id, now)?;
        session.touch(now);
        if session.cart().is_empty() {
            return Err(AppError::order_empty());
        }
        let view = format_order(session.cart().lines(), link);
        tracing::info!(
            session_id = %id,
            lines = view.lines.len(),
            total = %view.total,
            "Checkout link generated"
        );
        Ok(view)
    }

    pub fn remove(&self, id: &str) -> AppResult<()> {
        match self.sessions.remove(id) {
            Some(_) => {
                tracing::info!(session_id = %id, "Session closed");
                Ok(())
            }
            None => Err(AppError::session_not_found(id)),
        }
    }

    /// 清理空闲会话，返回清理数量
    pub fn evict_idle(&self, now: i64) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !self.is_idle(session, now));
        let evicted = before.saturating_sub(self.sessions.len());
        if evicted > 0 {
            tracing::info!(evicted, active = self.sessions.len(), "Idle sessions evicted");
        }
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::error::ErrorCode;

    const T0: i64 = 1_700_000_000_000;

    fn manager() -> SessionManager {
        SessionManager::new(Duration::from_secs(60))
    }

    fn link() -> MessagingLink {
        MessagingLink::new("https://api.whatsapp.com/send/", "5591985344280")
    }

    fn cmd(json: &str) -> SessionCommand {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_create_and_view() {
        let catalog = Catalog::builtin();
        let sessions = manager();
        let created = sessions.create(&catalog, T0);
        assert!(created.draft.is_none());
        assert!(created.cart.lines.is_empty());

        let view = sessions.view(&created.session_id, &catalog, T0 + 1).unwrap();
        assert_eq!(view.session_id, created.session_id);
        assert_eq!(sessions.len(), 1);
    }

    #[test]
    fn test_unknown_session() {
        let catalog = Catalog::builtin();
        let err = manager().view("nope", &catalog, T0).unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[test]
    fn test_full_flow_to_checkout() {
        let catalog = Catalog::builtin();
        let sessions = manager();
        let id = sessions.create(&catalog, T0).session_id;

        // Line A: ready-made 300ml x1
        sessions.apply(&id, cmd(r#"{"type":"OPEN_DRAFT","item_id":"1"}"#), &catalog, T0).unwrap();
        sessions.apply(&id, cmd(r#"{"type":"SELECT_SIZE","size_key":"300ml"}"#), &catalog, T0).unwrap();
        sessions.apply(&id, cmd(r#"{"type":"COMMIT_DRAFT"}"#), &catalog, T0).unwrap();

        // Line B: custom 500ml + Morango x3
        sessions.apply(&id, cmd(r#"{"type":"OPEN_DRAFT","item_id":"6"}"#), &catalog, T0).unwrap();
        sessions.apply(&id, cmd(r#"{"type":"SELECT_SIZE","size_key":"500ml"}"#), &catalog, T0).unwrap();
        sessions.apply(&id, cmd(r#"{"type":"INCREMENT_ADD_ON","name":"Morango"}"#), &catalog, T0).unwrap();
        sessions.apply(&id, cmd(r#"{"type":"INCREMENT_QUANTITY"}"#), &catalog, T0).unwrap();
        sessions.apply(&id, cmd(r#"{"type":"INCREMENT_QUANTITY"}"#), &catalog, T0).unwrap();
        let view = sessions.apply(&id, cmd(r#"{"type":"COMMIT_DRAFT"}"#), &catalog, T0).unwrap();

        assert!(view.draft.is_none());
        assert_eq!(view.cart.total_items, 4);
        assert_eq!(view.cart.total_price, Decimal::from(78));

        let checkout = sessions.checkout(&id, &link(), T0).unwrap();
        assert_eq!(checkout.total, "78.00");
        assert_eq!(checkout.lines.len(), 2);
    }

    #[test]
    fn test_line_ids_unique_within_same_millisecond() {
        let catalog = Catalog::builtin();
        let sessions = manager();
        let id = sessions.create(&catalog, T0).session_id;

        for _ in 0..3 {
            sessions.apply(&id, cmd(r#"{"type":"OPEN_DRAFT","item_id":"2"}"#), &catalog, T0).unwrap();
            sessions.apply(&id, cmd(r#"{"type":"COMMIT_DRAFT"}"#), &catalog, T0).unwrap();
        }

        let view = sessions.view(&id, &catalog, T0).unwrap();
        let ids: Vec<_> = view.cart.lines.iter().map(|l| l.line.id.clone()).collect();
        assert_eq!(ids[0], format!("2-{T0}"));
        assert_eq!(ids[1], format!("2-{}", T0 + 1));
        assert_eq!(ids[2], format!("2-{}", T0 + 2));
    }

    #[test]
    fn test_draft_commands_require_open_draft() {
        let catalog = Catalog::builtin();
        let sessions = manager();
        let id = sessions.create(&catalog, T0).session_id;

        for json in [
            r#"{"type":"COMMIT_DRAFT"}"#,
            r#"{"type":"DISCARD_DRAFT"}"#,
            r#"{"type":"INCREMENT_QUANTITY"}"#,
            r#"{"type":"SELECT_SIZE","size_key":"300ml"}"#,
        ] {
            let err = sessions.apply(&id, cmd(json), &catalog, T0).unwrap_err();
            assert_eq!(err.code, ErrorCode::DraftNotOpen);
        }
    }

    #[test]
    fn test_open_unknown_item() {
        let catalog = Catalog::builtin();
        let sessions = manager();
        let id = sessions.create(&catalog, T0).session_id;
        let err = sessions
            .apply(&id, cmd(r#"{"type":"OPEN_DRAFT","item_id":"99"}"#), &catalog, T0)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNotFound);
    }

    #[test]
    fn test_discard_and_reopen_resets_draft() {
        let catalog = Catalog::builtin();
        let sessions = manager();
        let id = sessions.create(&catalog, T0).session_id;

        sessions.apply(&id, cmd(r#"{"type":"OPEN_DRAFT","item_id":"6"}"#), &catalog, T0).unwrap();
        sessions.apply(&id, cmd(r#"{"type":"SELECT_SIZE","size_key":"500ml"}"#), &catalog, T0).unwrap();
        sessions.apply(&id, cmd(r#"{"type":"INCREMENT_ADD_ON","name":"Oreo"}"#), &catalog, T0).unwrap();
        let view = sessions.apply(&id, cmd(r#"{"type":"DISCARD_DRAFT"}"#), &catalog, T0).unwrap();
        assert!(view.draft.is_none());
        assert!(view.cart.lines.is_empty());

        let view = sessions
            .apply(&id, cmd(r#"{"type":"OPEN_DRAFT","item_id":"6"}"#), &catalog, T0)
            .unwrap();
        let draft = view.draft.unwrap();
        assert_eq!(draft.size_key, "400ml");
        assert!(draft.add_ons.is_empty());
        assert_eq!(draft.quantity, 1);
    }

    #[test]
    fn test_open_replaces_current_draft() {
        let catalog = Catalog::builtin();
        let sessions = manager();
        let id = sessions.create(&catalog, T0).session_id;

        sessions.apply(&id, cmd(r#"{"type":"OPEN_DRAFT","item_id":"6"}"#), &catalog, T0).unwrap();
        sessions.apply(&id, cmd(r#"{"type":"INCREMENT_ADD_ON","name":"Oreo"}"#), &catalog, T0).unwrap();
        let view = sessions
            .apply(&id, cmd(r#"{"type":"OPEN_DRAFT","item_id":"3"}"#), &catalog, T0)
            .unwrap();
        let draft = view.draft.unwrap();
        assert_eq!(draft.item_id, "3");
        assert!(draft.add_ons.is_empty());
    }

    #[test]
    fn test_remove_unknown_line_is_noop() {
        let catalog = Catalog::builtin();
        let sessions = manager();
        let id = sessions.create(&catalog, T0).session_id;
        sessions.apply(&id, cmd(r#"{"type":"OPEN_DRAFT","item_id":"1"}"#), &catalog, T0).unwrap();
        sessions.apply(&id, cmd(r#"{"type":"COMMIT_DRAFT"}"#), &catalog, T0).unwrap();

        let view = sessions
            .apply(&id, cmd(r#"{"type":"REMOVE_LINE","line_id":"ghost"}"#), &catalog, T0)
            .unwrap();
        assert_eq!(view.cart.lines.len(), 1);

        let line_id = view.cart.lines[0].line.id.clone();
        let view = sessions
            .apply(
                &id,
                SessionCommand::RemoveLine { line_id },
                &catalog,
                T0,
            )
            .unwrap();
        assert!(view.cart.lines.is_empty());
    }

    #[test]
    fn test_checkout_empty_cart_refused() {
        let catalog = Catalog::builtin();
        let sessions = manager();
        let id = sessions.create(&catalog, T0).session_id;
        let err = sessions.checkout(&id, &link(), T0).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);
    }

    #[test]
    fn test_remove_session() {
        let catalog = Catalog::builtin();
        let sessions = manager();
        let id = sessions.create(&catalog, T0).session_id;
        sessions.remove(&id).unwrap();
        assert!(sessions.is_empty());
        assert_eq!(sessions.remove(&id).unwrap_err().code, ErrorCode::SessionNotFound);
    }

    #[test]
    fn test_evict_idle() {
        let catalog = Catalog::builtin();
        let sessions = manager();
        let stale = sessions.create(&catalog, T0).session_id;
        let fresh = sessions.create(&catalog, T0 + 50_000).session_id;

        assert_eq!(sessions.evict_idle(T0 + 60_000), 0);
        assert_eq!(sessions.evict_idle(T0 + 60_001), 1);
        assert_eq!(sessions.len(), 1);
        assert_eq!(
            sessions.view(&stale, &catalog, T0 + 60_001).unwrap_err().code,
            ErrorCode::SessionNotFound
        );
        assert!(sessions.view(&fresh, &catalog, T0 + 60_001).is_ok());
    }

    #[test]
    fn test_activity_keeps_session_alive() {
        let catalog = Catalog::builtin();
        let sessions = manager();
        let id = sessions.create(&catalog, T0).session_id;
        sessions.view(&id, &catalog, T0 + 40_000).unwrap();
        assert_eq!(sessions.evict_idle(T0 + 90_000), 0);
    }

    #[test]
    fn test_expired_on_access() {
        let catalog = Catalog::builtin();
        let sessions = manager();
        let id = sessions.create(&catalog, T0).session_id;
        let err = sessions.view(&id, &catalog, T0 + 120_000).unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionExpired);
        assert!(sessions.is_empty());
    }
}
