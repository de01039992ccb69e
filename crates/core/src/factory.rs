use std::collections::HashMap;

use serde_json::Value;

/// A factory able to produce attribute sets for one model type.
///
/// Object-safe on purpose: the container stores heterogeneous factories behind
/// `Arc<dyn ModelFactory>` and hands them back verbatim. Everything here is
/// synchronous; factories build in-memory attribute data only.
pub trait ModelFactory: Send + Sync {
    /// Bare name of the model this factory builds
    fn model_name(&self) -> &str;

    /// Default attribute set for a new model instance
    fn definition(&self) -> HashMap<String, Value>;

    /// Produce one attribute set, with `overrides` winning over the definition
    fn make(&self, overrides: HashMap<String, Value>) -> HashMap<String, Value> {
        let mut attributes = self.definition();
        attributes.extend(overrides);
        attributes
    }
}

impl std::fmt::Debug for dyn ModelFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelFactory")
            .field("model_name", &self.model_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct WidgetFactory;

    impl ModelFactory for WidgetFactory {
        fn model_name(&self) -> &str {
            "Widget"
        }

        fn definition(&self) -> HashMap<String, Value> {
            HashMap::from([
                ("name".to_string(), json!("widget")),
                ("weight".to_string(), json!(10)),
            ])
        }
    }

    #[test]
    fn make_merges_overrides_over_definition() {
        let factory = WidgetFactory;
        let attributes = factory.make(HashMap::from([
            ("weight".to_string(), json!(25)),
            ("color".to_string(), json!("red")),
        ]));

        assert_eq!(attributes.get("name"), Some(&json!("widget")));
        assert_eq!(attributes.get("weight"), Some(&json!(25)));
        assert_eq!(attributes.get("color"), Some(&json!("red")));
    }

    #[test]
    fn make_without_overrides_equals_definition() {
        let factory = WidgetFactory;

        assert_eq!(factory.make(HashMap::new()), factory.definition());
    }
}
