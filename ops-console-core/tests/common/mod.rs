#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]
//! Shared mocks for controller integration tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::{Notify, RwLock};

use ops_console_api::{ApiError, ApiResult, ListEnvelope, ListQuery, ResourceBackend};
use ops_console_core::traits::{ConfirmPrompt, NotificationSink};

/// One recorded backend invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    List {
        prefix: String,
        page: u32,
        page_size: u32,
        search: Option<String>,
    },
    Create {
        prefix: String,
    },
    Update {
        prefix: String,
        id: String,
    },
    Delete {
        prefix: String,
        id: String,
    },
}

/// Stateful in-memory backend.
///
/// Holds the full record set and serves real pages from it, so flows like
/// "delete the last item of page 3, then reload page 3" behave the way the
/// live backend would. Every call is recorded; failures can be scripted
/// per operation.
pub struct MockBackend {
    records: RwLock<Vec<Value>>,
    next_id: RwLock<u64>,
    calls: RwLock<Vec<BackendCall>>,
    fail_list: RwLock<Option<ApiError>>,
    fail_create: RwLock<Option<ApiError>>,
    fail_update: RwLock<Option<ApiError>>,
    fail_delete: RwLock<Option<ApiError>>,
    /// When set, `create` parks on this gate until notified. Used to hold a
    /// submit in flight while asserting the re-entrancy guard.
    create_gate: RwLock<Option<Arc<Notify>>>,
}

impl MockBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            records: RwLock::new(Vec::new()),
            next_id: RwLock::new(1),
            calls: RwLock::new(Vec::new()),
            fail_list: RwLock::new(None),
            fail_create: RwLock::new(None),
            fail_update: RwLock::new(None),
            fail_delete: RwLock::new(None),
            create_gate: RwLock::new(None),
        })
    }

    pub async fn seed(&self, records: Vec<Value>) {
        let max_id = records
            .iter()
            .filter_map(|r| r.get("id").and_then(Value::as_u64))
            .max()
            .unwrap_or(0);
        *self.next_id.write().await = max_id + 1;
        *self.records.write().await = records;
    }

    pub async fn set_fail_list(&self, err: Option<ApiError>) {
        *self.fail_list.write().await = err;
    }

    pub async fn set_fail_create(&self, err: Option<ApiError>) {
        *self.fail_create.write().await = err;
    }

    pub async fn set_fail_delete(&self, err: Option<ApiError>) {
        *self.fail_delete.write().await = err;
    }

    pub async fn set_create_gate(&self, gate: Arc<Notify>) {
        *self.create_gate.write().await = Some(gate);
    }

    pub async fn calls(&self) -> Vec<BackendCall> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl ResourceBackend for MockBackend {
    async fn list(
        &self,
        prefix: &str,
        _list_key: &str,
        query: &ListQuery,
    ) -> ApiResult<ListEnvelope> {
        self.calls.write().await.push(BackendCall::List {
            prefix: prefix.to_owned(),
            page: query.page,
            page_size: query.page_size,
            search: query.search.clone(),
        });
        if let Some(err) = self.fail_list.read().await.clone() {
            return Err(err);
        }

        let records = self.records.read().await;
        let total = records.len() as u64;
        let start = ((query.page - 1) * query.page_size) as usize;
        let end = (start + query.page_size as usize).min(records.len());
        let items = if start < records.len() {
            records[start..end].to_vec()
        } else {
            Vec::new()
        };
        Ok(ListEnvelope { items, total })
    }

    async fn create(&self, prefix: &str, body: &Value) -> ApiResult<()> {
        self.calls.write().await.push(BackendCall::Create {
            prefix: prefix.to_owned(),
        });
        if let Some(err) = self.fail_create.read().await.clone() {
            return Err(err);
        }
        let gate = self.create_gate.read().await.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let mut record = body.clone();
        let mut next_id = self.next_id.write().await;
        record["id"] = json!(*next_id);
        *next_id += 1;
        self.records.write().await.push(record);
        Ok(())
    }

    async fn update(&self, prefix: &str, id: &str, body: &Value) -> ApiResult<()> {
        self.calls.write().await.push(BackendCall::Update {
            prefix: prefix.to_owned(),
            id: id.to_owned(),
        });
        if let Some(err) = self.fail_update.read().await.clone() {
            return Err(err);
        }

        let id: u64 = id.parse().map_err(|_| ApiError::Status {
            status: 400,
            message: "bad id".into(),
        })?;
        let mut records = self.records.write().await;
        match records
            .iter_mut()
            .find(|r| r.get("id").and_then(Value::as_u64) == Some(id))
        {
            Some(slot) => {
                let mut record = body.clone();
                record["id"] = json!(id);
                *slot = record;
                Ok(())
            }
            None => Err(ApiError::Status {
                status: 404,
                message: "not found".into(),
            }),
        }
    }

    async fn delete(&self, prefix: &str, id: &str) -> ApiResult<()> {
        self.calls.write().await.push(BackendCall::Delete {
            prefix: prefix.to_owned(),
            id: id.to_owned(),
        });
        if let Some(err) = self.fail_delete.read().await.clone() {
            return Err(err);
        }

        let id: u64 = id.parse().map_err(|_| ApiError::Status {
            status: 400,
            message: "bad id".into(),
        })?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.get("id").and_then(Value::as_u64) != Some(id));
        if records.len() == before {
            return Err(ApiError::Status {
                status: 404,
                message: "not found".into(),
            });
        }
        Ok(())
    }
}

/// Notification sink that records everything it is shown.
#[derive(Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<(bool, String)>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(ok, _)| *ok)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(ok, _)| !*ok)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl NotificationSink for RecordingSink {
    fn success(&self, message: &str) {
        self.messages.lock().unwrap().push((true, message.into()));
    }

    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push((false, message.into()));
    }
}

/// Confirm prompt with a fixed answer, recording each question asked.
pub struct AnswerConfirm {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl AnswerConfirm {
    pub fn yes() -> Arc<Self> {
        Arc::new(Self {
            answer: true,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn no() -> Arc<Self> {
        Arc::new(Self {
            answer: false,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl ConfirmPrompt for AnswerConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().unwrap().push(message.into());
        self.answer
    }
}

/// A minimal channel record as the backend would list it.
pub fn channel_json(id: u64, name: &str) -> Value {
    json!({ "id": id, "name": name })
}

/// `count` channels with ids `1..=count`.
pub fn seed_channels(count: u64) -> Vec<Value> {
    (1..=count)
        .map(|i| channel_json(i, &format!("channel-{i}")))
        .collect()
}
