//! Concrete factories for the domain models.
//!
//! One factory per model, each producing a default attribute set with fresh
//! fake data per call. [`register_defaults`] binds every factory into a
//! registry under its model's derived identifier, so convention-based lookup
//! works out of the box.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use fabriq_core::{
    derive_factory_identifier, FactoryRegistry, FactoryResult, HasFactory, ModelFactory,
};

use crate::fake;
use crate::{Report, SampleModel, Subscriber, Tag, User};

/// Factory for [`Subscriber`]
pub struct SubscriberFactory;

impl ModelFactory for SubscriberFactory {
    fn model_name(&self) -> &str {
        "Subscriber"
    }

    fn definition(&self) -> HashMap<String, Value> {
        HashMap::from([
            ("id".to_string(), json!(Uuid::new_v4())),
            ("email".to_string(), json!(fake::random_email())),
            (
                "first_name".to_string(),
                json!(fake::random_string(Some("first"))),
            ),
            (
                "last_name".to_string(),
                json!(fake::random_string(Some("last"))),
            ),
            ("form_id".to_string(), Value::Null),
            ("user_id".to_string(), json!(Uuid::new_v4())),
        ])
    }
}

/// Factory for [`User`]
pub struct UserFactory;

impl ModelFactory for UserFactory {
    fn model_name(&self) -> &str {
        "User"
    }

    fn definition(&self) -> HashMap<String, Value> {
        HashMap::from([
            ("id".to_string(), json!(Uuid::new_v4())),
            (
                "name".to_string(),
                json!(format!("Test User {}", fake::random_string(None))),
            ),
            ("email".to_string(), json!(fake::random_email())),
            (
                "password".to_string(),
                json!(fake::random_string(Some("hashed"))),
            ),
            ("email_verified_at".to_string(), json!(Utc::now())),
        ])
    }
}

/// Factory for [`Tag`]
pub struct TagFactory;

impl ModelFactory for TagFactory {
    fn model_name(&self) -> &str {
        "Tag"
    }

    fn definition(&self) -> HashMap<String, Value> {
        HashMap::from([
            ("id".to_string(), json!(Uuid::new_v4())),
            ("name".to_string(), json!(fake::random_string(Some("tag")))),
            ("user_id".to_string(), json!(Uuid::new_v4())),
        ])
    }
}

/// Factory for [`Report`]
pub struct ReportFactory;

impl ModelFactory for ReportFactory {
    fn model_name(&self) -> &str {
        "Report"
    }

    fn definition(&self) -> HashMap<String, Value> {
        HashMap::from([
            ("id".to_string(), json!(Uuid::new_v4())),
            (
                "title".to_string(),
                json!(fake::random_string(Some("report"))),
            ),
            ("generated_at".to_string(), json!(Utc::now())),
        ])
    }
}

/// Factory for [`SampleModel`]
pub struct SampleModelFactory;

impl ModelFactory for SampleModelFactory {
    fn model_name(&self) -> &str {
        "SampleModel"
    }

    fn definition(&self) -> HashMap<String, Value> {
        HashMap::from([
            ("id".to_string(), json!(Uuid::new_v4())),
            (
                "label".to_string(),
                json!(fake::random_string(Some("sample"))),
            ),
        ])
    }
}

/// Bind one factory instance per domain model under its derived identifier.
pub fn register_defaults(registry: &FactoryRegistry) -> FactoryResult<()> {
    bind::<Subscriber>(registry, Arc::new(SubscriberFactory))?;
    bind::<User>(registry, Arc::new(UserFactory))?;
    bind::<Tag>(registry, Arc::new(TagFactory))?;
    bind::<Report>(registry, Arc::new(ReportFactory))?;
    bind::<SampleModel>(registry, Arc::new(SampleModelFactory))?;
    Ok(())
}

fn bind<M: HasFactory>(
    registry: &FactoryRegistry,
    factory: Arc<dyn ModelFactory>,
) -> FactoryResult<()> {
    let identifier = derive_factory_identifier(&M::namespace())?;
    registry.bind_instance(identifier, factory)
}
