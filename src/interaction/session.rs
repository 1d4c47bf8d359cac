//! Session Store
//!
//! Keeps the UI state of every page load in memory. A session is created
//! on the first event that carries its id; when the store is full the
//! least recently used session is evicted.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::dropdown::{DropdownPanel, IndicatorDropdown};
use super::menu::{Click, MenuState, MenuToggle};
use crate::chart::IndicatorRenderer;
use crate::data::IndicatorTable;
use crate::pages::router::Page;

/// Identifier embedded in every rendered page
pub type SessionId = Uuid;

/// UI state of one page load
#[derive(Debug, Default)]
pub struct Session {
    menu: MenuToggle,
    dropdowns: HashMap<Page, IndicatorDropdown>,
}

impl Session {
    pub fn menu(&self) -> &MenuToggle {
        &self.menu
    }

    pub fn on_menu_event(&mut self, event: Option<Click>) -> MenuState {
        self.menu.on_event(event)
    }

    /// The dropdown of a page, created at its default on first use
    pub fn dropdown(
        &mut self,
        panel: DropdownPanel,
        table: &IndicatorTable,
        renderer: &dyn IndicatorRenderer,
    ) -> &mut IndicatorDropdown {
        self.dropdowns
            .entry(panel.page)
            .or_insert_with(|| IndicatorDropdown::new(panel, table, renderer))
    }
}

/// Configuration for the session store
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Sessions kept before the least recently used is evicted
    pub max_sessions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { max_sessions: 1024 }
    }
}

#[derive(Debug, Default)]
struct Sessions {
    by_id: HashMap<SessionId, Session>,
    /// Access order, least recently used first
    order: VecDeque<SessionId>,
}

/// Shared store of sessions
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<Sessions>>,
    config: SessionConfig,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl SessionStore {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(Sessions::default())),
            config,
        }
    }

    /// Fresh id for a new page load
    ///
    /// Nothing is stored until the first event arrives with it.
    pub fn issue(&self) -> SessionId {
        Uuid::new_v4()
    }

    /// Run an event handler against a session under the write lock
    pub async fn with_session<F, R>(&self, id: SessionId, handler: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut sessions = self.sessions.write().await;

        if sessions.by_id.contains_key(&id) {
            if let Some(pos) = sessions.order.iter().position(|known| *known == id) {
                sessions.order.remove(pos);
            }
            sessions.order.push_back(id);
        } else {
            while sessions.by_id.len() >= self.config.max_sessions.max(1) {
                let Some(oldest) = sessions.order.pop_front() else {
                    break;
                };
                sessions.by_id.remove(&oldest);
                tracing::debug!(session_id = %oldest, "Session evicted");
            }

            sessions.by_id.insert(id, Session::default());
            sessions.order.push_back(id);
            tracing::debug!(session_id = %id, "Session created");
        }

        let Sessions { by_id, .. } = &mut *sessions;
        match by_id.get_mut(&id) {
            Some(session) => handler(session),
            None => handler(&mut Session::default()),
        }
    }

    pub async fn contains(&self, id: &SessionId) -> bool {
        self.sessions.read().await.by_id.contains_key(id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
