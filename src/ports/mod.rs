//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (identifiers, webhook delivery). Implementations live
//! in `src/adapters/`.

pub mod id_gen;
pub mod webhook;

pub use id_gen::IdGenerator;
pub use webhook::{
    DeliveryFuture, DeliveryOutcome, DeliveryRequest, HttpMethod, ProbeFuture, WebhookTransport,
};
