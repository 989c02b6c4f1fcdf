//! # System Lifecycle
//!
//! Starting, wiring and stopping the four store actors.
//!
//! 1. **Actor Creation** - each `*_actor::new` returns an actor and its typed client
//! 2. **Start** - every actor is spawned on its own task; none needs a context
//! 3. **Wiring** - the [`Registrar`](crate::registrar::Registrar) receives clones of all four clients
//! 4. **Shutdown** - dropping every client closes the mailboxes; each actor logs its final
//!    state and exits, and [`RegistrationSystem::shutdown`] awaits the tasks
//!
//! [`setup_tracing`] installs the log subscriber used by the binary.

pub mod registration_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use registration_system::RegistrationSystem;
