//! Generic paginated CRUD panel controller
//!
//! One instance per admin page. The controller mediates between the list
//! view, the form panel and the backend: fetch a page, open a form, submit
//! it, reload. All the per-resource pages in the old console were hand
//! written copies of exactly this loop.

use std::sync::Arc;

use tokio::sync::RwLock;

use ops_console_api::{ApiError, ListQuery, ResourceBackend, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

use crate::error::{ConsoleError, ConsoleResult};
use crate::resource::{Draft, Resource};
use crate::traits::{ConfirmPrompt, NotificationSink};
use crate::types::{ListPage, PanelMode, PanelState};

struct ControllerState<R: Resource> {
    list: ListPage<R>,
    search: Option<String>,
    panel: PanelState,
    form: Option<R::Form>,
    /// Set while a submit or remove awaits the backend. A second one is
    /// rejected instead of racing the first.
    in_flight: bool,
}

/// Mediator for "list a paginated resource, create/edit it via a form
/// panel, delete with confirmation".
///
/// Capabilities are injected at construction; nothing here touches global
/// state. Every network operation is fire-and-forget: no retry, no
/// timeout, errors are terminal for the attempt and surfaced through the
/// notification sink, after which the controller remains fully usable.
pub struct CrudPanelController<R: Resource> {
    backend: Arc<dyn ResourceBackend>,
    notifier: Arc<dyn NotificationSink>,
    confirm: Arc<dyn ConfirmPrompt>,
    state: RwLock<ControllerState<R>>,
}

impl<R: Resource> CrudPanelController<R> {
    /// Create a controller with the default page size.
    #[must_use]
    pub fn new(
        backend: Arc<dyn ResourceBackend>,
        notifier: Arc<dyn NotificationSink>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            backend,
            notifier,
            confirm,
            state: RwLock::new(ControllerState {
                list: ListPage::empty(DEFAULT_PAGE_SIZE),
                search: None,
                panel: PanelState::closed(),
                form: None,
                in_flight: false,
            }),
        }
    }

    /// Override the page size before first use.
    #[must_use]
    pub fn with_page_size(self, page_size: u32) -> Self {
        let Self {
            backend,
            notifier,
            confirm,
            state,
        } = self;
        let mut state = state.into_inner();
        state.list.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        Self {
            backend,
            notifier,
            confirm,
            state: RwLock::new(state),
        }
    }

    // ===== List / pagination =====

    /// Fetch `page` and replace the list state.
    ///
    /// On any failure the prior list state is left untouched; the error is
    /// surfaced and returned. The stored page number is the requested one,
    /// even when the response turns out empty.
    pub async fn load_page(&self, page: u32) -> ConsoleResult<()> {
        let query = {
            let state = self.state.read().await;
            ListQuery {
                page,
                page_size: state.list.page_size,
                search: state.search.clone(),
            }
            .validated(MAX_PAGE_SIZE)
        };

        let envelope = match self.backend.list(R::PREFIX, R::LIST_KEY, &query).await {
            Ok(envelope) => envelope,
            Err(e) => return Err(self.surface(ConsoleError::Load(e))),
        };

        let items: Result<Vec<R>, _> = envelope
            .items
            .into_iter()
            .map(serde_json::from_value)
            .collect();
        let items = match items {
            Ok(items) => items,
            Err(e) => {
                return Err(self.surface(ConsoleError::Load(ApiError::Parse {
                    detail: e.to_string(),
                })))
            }
        };

        let mut state = self.state.write().await;
        state.list = ListPage {
            items,
            total_records: envelope.total,
            page: query.page,
            page_size: query.page_size,
        };
        Ok(())
    }

    /// Switch to page `page` and load it.
    ///
    /// A no-op when the page is out of `[1, total_pages]` or already
    /// current: state unchanged, no request issued.
    pub async fn change_page(&self, page: u32) -> ConsoleResult<()> {
        {
            let state = self.state.read().await;
            let total = state.list.total_pages();
            if page < 1 || page > total || page == state.list.page {
                return Ok(());
            }
        }
        self.load_page(page).await
    }

    /// Set the search term used by subsequent loads. `None` clears it.
    pub async fn set_search(&self, term: Option<String>) {
        let mut state = self.state.write().await;
        state.search = term.filter(|t| !t.is_empty());
    }

    // ===== Panel lifecycle =====

    /// Open the panel with an empty form. No network call.
    pub async fn open_create(&self) {
        let mut state = self.state.write().await;
        state.form = Some(R::Form::default());
        state.panel = PanelState::open(PanelMode::Create, format!("Create {}", R::LABEL));
    }

    /// Open the panel with a shallow copy of `record`.
    ///
    /// The copy is the form buffer; mutating it never touches the listed
    /// record. A successful save reloads the list instead.
    pub async fn open_edit(&self, record: &R) {
        let mut state = self.state.write().await;
        state.form = Some(record.to_form());
        state.panel = PanelState::open(PanelMode::Edit, format!("Edit {}", R::LABEL));
    }

    /// Close the panel and discard the form buffer.
    pub async fn close_panel(&self) {
        let mut state = self.state.write().await;
        state.form = None;
        state.panel = PanelState::closed();
    }

    /// Mutate the open form buffer in place (what the form view writes
    /// through). Ignored while the panel is closed.
    pub async fn update_form<F>(&self, mutate: F)
    where
        F: FnOnce(&mut R::Form),
    {
        let mut state = self.state.write().await;
        if let Some(form) = state.form.as_mut() {
            mutate(form);
        }
    }

    // ===== Mutations =====

    /// Validate and save the open form.
    ///
    /// Required-field failures issue no network call and leave the panel
    /// open. Otherwise the buffer goes out as `POST {prefix}` (create) or
    /// `PUT {prefix}/{id}` (edit). On success the panel closes, the current
    /// page reloads and a success notification fires; on failure the panel
    /// stays open for another attempt.
    pub async fn submit(&self) -> ConsoleResult<()> {
        let form = {
            let mut state = self.state.write().await;
            if state.in_flight {
                log::debug!("submit ignored: {} operation already in flight", R::LABEL);
                return Err(ConsoleError::OperationInFlight);
            }
            let Some(form) = state.form.clone() else {
                log::debug!("submit ignored: no open {} panel", R::LABEL);
                return Ok(());
            };
            if let Some(field) = form.missing_required() {
                drop(state);
                return Err(self.surface(ConsoleError::Validation { field }));
            }
            state.in_flight = true;
            form
        };

        let result = match serde_json::to_value(&form) {
            Ok(body) => match form.id() {
                Some(id) => self.backend.update(R::PREFIX, &id.to_string(), &body).await,
                None => self.backend.create(R::PREFIX, &body).await,
            },
            Err(e) => Err(ApiError::Parse {
                detail: e.to_string(),
            }),
        };

        let page = {
            let mut state = self.state.write().await;
            state.in_flight = false;
            if let Err(e) = result {
                drop(state);
                return Err(self.surface(ConsoleError::Save(e)));
            }
            state.form = None;
            state.panel = PanelState::closed();
            state.list.page
        };

        // A reload failure surfaces its own notification; the save itself
        // succeeded, so the outcome reported here is still success.
        let _ = self.load_page(page).await;

        let verb = if form.id().is_some() {
            "updated"
        } else {
            "created"
        };
        self.notifier.success(&format!("{} {verb}", R::LABEL));
        Ok(())
    }

    /// Delete the record with `id` after a synchronous confirmation.
    ///
    /// A declined prompt is a complete no-op. On success the current page
    /// reloads; the page number is deliberately not decremented when the
    /// last item of a trailing page goes away, matching the console's
    /// long-standing behavior (the user lands on an empty page and pages
    /// back manually).
    pub async fn remove(&self, id: u64) -> ConsoleResult<()> {
        {
            let state = self.state.read().await;
            if state.in_flight {
                log::debug!("remove ignored: {} operation already in flight", R::LABEL);
                return Err(ConsoleError::OperationInFlight);
            }
        }
        if !self.confirm.confirm(&format!("Delete this {}?", R::LABEL)) {
            log::debug!("delete of {} {id} declined", R::LABEL);
            return Ok(());
        }

        {
            // Re-check under the write lock: a submit may have started while
            // the prompt was up.
            let mut state = self.state.write().await;
            if state.in_flight {
                return Err(ConsoleError::OperationInFlight);
            }
            state.in_flight = true;
        }
        let result = self.backend.delete(R::PREFIX, &id.to_string()).await;
        self.state.write().await.in_flight = false;

        if let Err(e) = result {
            return Err(self.surface(ConsoleError::Delete(e)));
        }

        let page = self.state.read().await.list.page;
        let _ = self.load_page(page).await;

        self.notifier.success(&format!("{} deleted", R::LABEL));
        Ok(())
    }

    // ===== Accessors =====

    /// Snapshot of the current list page.
    pub async fn snapshot(&self) -> ListPage<R> {
        self.state.read().await.list.clone()
    }

    /// Current panel state.
    pub async fn panel(&self) -> PanelState {
        self.state.read().await.panel.clone()
    }

    /// Copy of the open form buffer, if any.
    pub async fn form(&self) -> Option<R::Form> {
        self.state.read().await.form.clone()
    }

    /// Current page number.
    pub async fn page(&self) -> u32 {
        self.state.read().await.list.page
    }

    /// Whether a submit or remove is awaiting the backend.
    pub async fn is_busy(&self) -> bool {
        self.state.read().await.in_flight
    }

    /// Log and surface an error, then hand it back to the caller.
    fn surface(&self, err: ConsoleError) -> ConsoleError {
        if err.is_expected() {
            log::warn!("[{}] {err}", R::LABEL);
        } else {
            log::error!("[{}] {err}", R::LABEL);
        }
        self.notifier.error(&err.to_string());
        err
    }
}
