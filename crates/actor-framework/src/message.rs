//! # Generic Messages
//!
//! The request envelope exchanged between a [`ResourceClient`](crate::ResourceClient) and
//! its [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants are the lifecycle of any stored record:
///
/// - **Create**: builds a record from [`ActorEntity::Create`] and assigns the next id.
/// - **Get**: fetches one record by id.
/// - **Update**: applies [`ActorEntity::Update`] to one record.
/// - **Delete**: removes one record.
/// - **Action**: runs a custom [`ActorEntity::Action`] against one record.
/// - **Find**: returns every record selected by an [`ActorEntity::Filter`], in id order.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Find {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
}
