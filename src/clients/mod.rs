//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each wrapper turns the generic request/response calls into the operations its store
//! offers, and maps [`FrameworkError`](actor_framework::FrameworkError) into the store's
//! own error type. Entity errors come back typed; a missing id becomes `NotFound`.

pub mod course_client;
pub mod enrollment_client;
pub mod student_client;
pub mod waitlist_client;

pub use course_client::*;
pub use enrollment_client::*;
pub use student_client::*;
pub use waitlist_client::*;
