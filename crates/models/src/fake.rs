//! Fake-data helpers shared by the model factories.

/// Generate a random test string with optional prefix
pub fn random_string(prefix: Option<&str>) -> String {
    use rand::Rng;
    let suffix: String = rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();

    match prefix {
        Some(p) => format!("{}_{}", p, suffix),
        None => suffix,
    }
}

/// Generate a random test email
pub fn random_email() -> String {
    format!("test_{}@example.com", random_string(None).to_lowercase())
}
