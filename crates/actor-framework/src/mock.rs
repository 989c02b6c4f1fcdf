//! # Mock Framework
//!
//! Test doubles for code that talks to a [`ResourceClient`] without a real actor behind it.
//!
//! | | `MockClient` | Real actor |
//! |---|---|---|
//! | **State** | scripted replies | real store |
//! | **Determinism** | fully deterministic | subject to the scheduler |
//! | **Error injection** | `return_err` | needs a specific state |
//! | **Use case** | logic *around* a client | the entity itself, or the full system |
//!
//! ## Scripted replies
//!
//! [`MockClient`] answers requests from a FIFO of expectations. A request that does not
//! match the next expectation (wrong kind or wrong id) gets no reply, so the caller sees
//! [`FrameworkError::ActorDropped`], and [`MockClient::verify`] reports the mismatch.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::ActorEntity;
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Desk { id: u32 }
//! #[derive(Debug)] struct DeskCreate;
//! #[derive(Debug)] enum DeskAction {}
//! #[derive(Debug, thiserror::Error)] #[error("desk error")] struct DeskError;
//!
//! #[async_trait]
//! impl ActorEntity for Desk {
//!     type Id = u32; type Create = DeskCreate; type Update = (); type Action = DeskAction;
//!     type ActionResult = (); type Filter = (); type Context = (); type Error = DeskError;
//!     fn from_create_params(id: u32, _: DeskCreate) -> Result<Self, DeskError> { Ok(Self { id }) }
//!     fn matches(&self, _: &()) -> bool { true }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), DeskError> { Ok(()) }
//!     async fn handle_action(&mut self, a: DeskAction, _: &()) -> Result<(), DeskError> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Desk>::new();
//!     mock.expect_get(4).return_ok(Some(Desk { id: 4 }));
//!     mock.expect_find().return_ok(vec![]);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(4).await.unwrap(), Some(Desk { id: 4 }));
//!     assert!(client.find(()).await.unwrap().is_empty());
//!     mock.verify();
//! }
//! ```
//!
//! ## Channel-level helpers
//!
//! [`create_mock_client`] hands back the raw receiver; [`expect_action`] and friends pull
//! the next request off it so a test can inspect the payload and answer by hand.

use crate::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One scripted reply, consumed in FIFO order.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    Find {
        response: Result<Vec<T>, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Expectation::Get { id, .. } => format!("Get({id})"),
            Expectation::Create { .. } => "Create".to_string(),
            Expectation::Update { id, .. } => format!("Update({id})"),
            Expectation::Delete { id, .. } => format!("Delete({id})"),
            Expectation::Action { id, .. } => format!("Action({id})"),
            Expectation::Find { .. } => "Find".to_string(),
        }
    }
}

fn describe_request<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { params, .. } => format!("Create({params:?})"),
        ResourceRequest::Get { id, .. } => format!("Get({id})"),
        ResourceRequest::Update { id, update, .. } => format!("Update({id}, {update:?})"),
        ResourceRequest::Delete { id, .. } => format!("Delete({id})"),
        ResourceRequest::Action { id, action, .. } => format!("Action({id}, {action:?})"),
        ResourceRequest::Find { filter, .. } => format!("Find({filter:?})"),
    }
}

struct MockState<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    failures: Vec<String>,
}

type SharedState<T> = Arc<Mutex<MockState<T>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    state: SharedState<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let state: SharedState<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            failures: Vec::new(),
        }));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = task_state.lock().unwrap().expectations.pop_front();
                let description = describe_request(&request);

                let mismatch = match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: want, response }),
                    ) if id == want => {
                        let _ = respond_to.send(response);
                        None
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                        None
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: want, response }),
                    ) if id == want => {
                        let _ = respond_to.send(response);
                        None
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: want, response }),
                    ) if id == want => {
                        let _ = respond_to.send(response);
                        None
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) if id == want => {
                        let _ = respond_to.send(response);
                        None
                    }
                    (
                        ResourceRequest::Find { respond_to, .. },
                        Some(Expectation::Find { response }),
                    ) => {
                        let _ = respond_to.send(response);
                        None
                    }
                    (request, expected) => Some((request, expected)),
                };

                // Record the failure before the unanswered request is dropped, so the
                // caller's `ActorDropped` never races ahead of `verify`.
                if let Some((request, expected)) = mismatch {
                    let failure = format!(
                        "unexpected request {description}, expected {}",
                        expected.map_or_else(|| "nothing".to_string(), |e| e.describe())
                    );
                    task_state.lock().unwrap().failures.push(failure);
                    drop(request);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(&self.state, move |response| Expectation::Get { id, response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(&self.state, |response| Expectation::Create { response })
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.state, move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(&self.state, move |response| Expectation::Delete { id, response })
    }

    /// Expects an `action` operation for `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(&self.state, move |response| Expectation::Action { id, response })
    }

    /// Expects a `find` operation.
    pub fn expect_find(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(&self.state, |response| Expectation::Find { response })
    }

    /// Verifies that every expectation was consumed and no request was unexpected.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.failures.is_empty() {
            panic!("Mock received unexpected requests: {:?}", state.failures);
        }
        if !state.expectations.is_empty() {
            let remaining: Vec<String> = state.expectations.iter().map(|e| e.describe()).collect();
            panic!("Not all expectations were met. Remaining: {remaining:?}");
        }
    }
}

/// Completes a scripted expectation with its reply.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    state: SharedState<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        state: &SharedState<T>,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            state: state.clone(),
            make: Box::new(make),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.state.lock().unwrap().expectations.push_back(expectation);
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client whose requests land on the returned receiver.
///
/// Useful when a test wants to inspect payloads (e.g. which `CourseAction` a client
/// sent) rather than just script replies.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Returns the next message if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the next message if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next message if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Returns the next message if it is a Find request.
pub async fn expect_find<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Filter, oneshot::Sender<Result<Vec<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Find { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}
