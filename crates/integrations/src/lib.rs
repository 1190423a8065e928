//! External collaborators of the backend API.
//!
//! Route handlers only see the [`InferenceProvider`] and
//! [`DatastoreStatusProvider`] traits. The implementations shipped here are
//! placeholders: they never open a connection and answer from configuration
//! alone, so a real backend can be swapped in without touching the routes.

pub mod datastore;
pub mod error;
pub mod inference;

pub use datastore::{
    DatastoreState, DatastoreStatus, DatastoreStatusProvider, StaticDatastoreStatus,
};
pub use error::IntegrationError;
pub use inference::{Completion, InferenceProvider, MockInferenceProvider};
