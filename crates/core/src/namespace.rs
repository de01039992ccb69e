use std::fmt;

/// Root prefix shared by every derived factory identifier.
const FACTORIES_ROOT: [&str; 2] = ["Database", "Factories"];

/// Suffix appended to the model segment when deriving a factory identifier.
const FACTORY_SUFFIX: &str = "Factory";

/// Fully-qualified namespace location of a model type.
///
/// Segment index 1 is the "domain" segment and the last segment is the model
/// segment; interior segments carry no meaning for factory lookup. The rule is
/// positional by design: the domain is always the second segment, never "the
/// segment before `Models`".
///
/// Paths of any length are constructible; the minimum-length invariant
/// (2 segments) is enforced where the convention is applied, in
/// [`crate::resolver::derive_factory_identifier`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacePath {
    segments: Vec<String>,
}

impl NamespacePath {
    /// Create a path from its segments
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a `::`-separated path string, ignoring empty segments
    pub fn parse(path: &str) -> Self {
        Self::new(path.split("::").filter(|segment| !segment.is_empty()))
    }

    /// All segments, in order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the path has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The domain segment (index 1). `None` when the path is too short for
    /// the convention.
    pub fn domain(&self) -> Option<&str> {
        if self.segments.len() < 2 {
            return None;
        }
        self.segments.get(1).map(String::as_str)
    }

    /// The model segment (last). `None` when the path is too short for the
    /// convention.
    pub fn model_name(&self) -> Option<&str> {
        if self.segments.len() < 2 {
            return None;
        }
        self.segments.last().map(String::as_str)
    }
}

impl fmt::Display for NamespacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("::"))
    }
}

/// Derived lookup key for a model factory.
///
/// Always of the form `Database.Factories.<Domain>.<ModelName>Factory`,
/// dot-joined. The rendered string is part of the observable contract:
/// resolution failures embed it verbatim for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FactoryIdentifier(String);

impl FactoryIdentifier {
    /// Build the identifier for a domain and model name
    pub fn new(domain: &str, model_name: &str) -> Self {
        Self(format!(
            "{}.{}.{}.{}{}",
            FACTORIES_ROOT[0], FACTORIES_ROOT[1], domain, model_name, FACTORY_SUFFIX
        ))
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FactoryIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FactoryIdentifier {
    fn from(identifier: &str) -> Self {
        Self(identifier.to_string())
    }
}

impl From<String> for FactoryIdentifier {
    fn from(identifier: String) -> Self {
        Self(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_double_colon() {
        let path = NamespacePath::parse("Domain::Accounting::Reports::Models::Report");

        assert_eq!(
            path.segments(),
            &["Domain", "Accounting", "Reports", "Models", "Report"]
        );
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn parse_ignores_empty_segments() {
        let path = NamespacePath::parse("Domain::::Sample::Models::SampleModel");

        assert_eq!(path.segments(), &["Domain", "Sample", "Models", "SampleModel"]);
    }

    #[test]
    fn domain_is_the_second_segment() {
        let path = NamespacePath::parse("Domain::Accounting::Reports::Models::Report");

        assert_eq!(path.domain(), Some("Accounting"));
        assert_eq!(path.model_name(), Some("Report"));
    }

    #[test]
    fn accessors_are_undefined_below_two_segments() {
        let path = NamespacePath::parse("Ghost");

        assert_eq!(path.domain(), None);
        assert_eq!(path.model_name(), None);
    }

    #[test]
    fn two_segment_path_uses_the_same_segment_for_domain_and_model() {
        let path = NamespacePath::new(["Domain", "User"]);

        assert_eq!(path.domain(), Some("User"));
        assert_eq!(path.model_name(), Some("User"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let path = NamespacePath::parse("Domain::Sample::Models::SampleModel");

        assert_eq!(path.to_string(), "Domain::Sample::Models::SampleModel");
        assert_eq!(NamespacePath::parse(&path.to_string()), path);
    }

    #[test]
    fn identifier_is_dot_joined_with_factory_suffix() {
        let identifier = FactoryIdentifier::new("Accounting", "Report");

        assert_eq!(
            identifier.as_str(),
            "Database.Factories.Accounting.ReportFactory"
        );
        assert_eq!(identifier.to_string(), identifier.as_str());
    }

    #[test]
    fn identifier_from_raw_string_compares_equal_to_derived() {
        let derived = FactoryIdentifier::new("Sample", "SampleModel");
        let raw = FactoryIdentifier::from("Database.Factories.Sample.SampleModelFactory");

        assert_eq!(derived, raw);
    }
}
