//! Domain models for the fabriq backend and their test-data factories.
//!
//! Each model implements [`fabriq_core::HasFactory`], exposing the namespace
//! its factory identifier is derived from. Persistence, relationships, and
//! attribute casting live elsewhere; these are the plain data shapes plus the
//! metadata the factory convention needs.

pub mod factories;
pub mod fake;
pub mod report;
pub mod sample;
pub mod subscriber;
pub mod tag;
pub mod user;

pub use factories::{
    register_defaults, ReportFactory, SampleModelFactory, SubscriberFactory, TagFactory,
    UserFactory,
};
pub use report::Report;
pub use sample::SampleModel;
pub use subscriber::Subscriber;
pub use tag::Tag;
pub use user::User;
