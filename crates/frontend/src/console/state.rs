//! Request orchestrator of the console
//!
//! ```text
//!  select_endpoint ──► Idle ──begin_execute──► Loading ──complete──► Success
//!        ▲                                        │                   Error
//!        └────────────────────────────────────────┴───────────────────┘
//! ```
//!
//! The await happens outside the state: `begin_execute` hands out a
//! [`PendingRequest`], the caller runs it through the client and feeds the
//! outcome back with `complete`. While a request is loading further
//! `begin_execute` calls are ignored. Selecting an endpoint (or `reset`)
//! invalidates the outstanding ticket so a late result is dropped.

use super::api::GroceryApiClient;
use contracts::catalog::{descriptor, EndpointDescriptor};
use contracts::{ApiRequest, ApiResult, EndpointKind, FormValues, HttpTransport};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestState {
    pub selected: Option<EndpointKind>,
    pub parameters: FormValues,
    pub status: RequestStatus,
    pub result: Option<Value>,
    pub error_message: Option<String>,
}

/// Identifies one `begin_execute` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub ticket: RequestTicket,
    pub request: ApiRequest,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestConsole {
    state: RequestState,
    next_ticket: u64,
    in_flight: Option<RequestTicket>,
}

impl RequestConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn selected(&self) -> Option<EndpointKind> {
        self.state.selected
    }

    pub fn selected_descriptor(&self) -> Option<&'static EndpointDescriptor> {
        self.state.selected.map(descriptor)
    }

    pub fn status(&self) -> RequestStatus {
        self.state.status
    }

    pub fn is_loading(&self) -> bool {
        self.state.status == RequestStatus::Loading
    }

    /// Current text of a form field, empty when unset
    pub fn parameter(&self, name: &str) -> String {
        self.state.parameters.get(name).cloned().unwrap_or_default()
    }

    pub fn select_endpoint(&mut self, kind: EndpointKind) {
        log::debug!("select endpoint {}", kind);
        self.in_flight = None;
        self.state = RequestState {
            selected: Some(kind),
            ..RequestState::default()
        };
    }

    /// Store the raw text of one field; an empty value clears it
    pub fn set_parameter(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.state.parameters.remove(name);
        } else {
            self.state.parameters.insert(name.to_string(), value);
        }
    }

    /// Back to `Idle`, keeping the selection and the form
    pub fn reset(&mut self) {
        self.in_flight = None;
        self.state.status = RequestStatus::Idle;
        self.state.result = None;
        self.state.error_message = None;
    }

    /// Enter `Loading` and hand out the request to perform
    ///
    /// Returns `None` (and leaves the state untouched) when nothing is
    /// selected or a request is already loading.
    pub fn begin_execute(&mut self) -> Option<PendingRequest> {
        let kind = self.state.selected?;
        if self.is_loading() {
            log::debug!("{} already loading, execute ignored", kind);
            return None;
        }

        self.next_ticket += 1;
        let ticket = RequestTicket(self.next_ticket);
        self.in_flight = Some(ticket);

        self.state.status = RequestStatus::Loading;
        self.state.result = None;
        self.state.error_message = None;

        Some(PendingRequest {
            ticket,
            request: ApiRequest::from_form(kind, &self.state.parameters),
        })
    }

    /// Apply the outcome of a pending request
    ///
    /// Returns `false` when the ticket is no longer current (the user selected
    /// another endpoint or reset meanwhile); the outcome is then discarded.
    pub fn complete(&mut self, ticket: RequestTicket, outcome: ApiResult<Value>) -> bool {
        if self.in_flight != Some(ticket) {
            log::debug!("stale response for ticket {:?} dropped", ticket);
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(payload) => {
                self.state.status = RequestStatus::Success;
                self.state.result = Some(payload);
            }
            Err(e) => {
                log::warn!("request failed: {}", e);
                self.state.status = RequestStatus::Error;
                self.state.error_message = Some(e.to_string());
            }
        }
        true
    }

    /// `begin_execute` + client call + `complete` in one step
    pub async fn execute<T: HttpTransport>(&mut self, client: &GroceryApiClient<T>) -> bool {
        let Some(pending) = self.begin_execute() else {
            return false;
        };
        let outcome = client.execute(&pending.request).await;
        self.complete(pending.ticket, outcome)
    }
}
