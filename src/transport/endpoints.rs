//! Endpoint path helpers for the Gemini API.

/// Base path for models endpoints.
pub const MODELS: &str = "/models";

/// Constructs a path for the generateContent endpoint.
///
/// ```
/// use calorie_lens::transport::endpoints;
///
/// let path = endpoints::generate_content("gemini-1.5-flash");
/// assert_eq!(path, "/models/gemini-1.5-flash:generateContent");
/// ```
pub fn generate_content(model: &str) -> String {
    format!("{MODELS}/{model}:generateContent")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_content_path() {
        assert_eq!(
            generate_content("gemini-1.5-flash"),
            "/models/gemini-1.5-flash:generateContent"
        );
    }
}
