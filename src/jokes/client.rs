use color_eyre::eyre::Result;
use serde::Deserialize;

use crate::jokes::Category;

pub const DEFAULT_ENDPOINT: &str = "https://v2.jokeapi.dev/joke";

/// Shown in place of a joke whenever a fetch fails, regardless of cause.
pub const FETCH_FAILED_MESSAGE: &str = "Oops, could not fetch a joke. Please try again.";

/// The only shape we accept: a single-part joke. Anything else (API error
/// payloads, two-part jokes, truncated bodies) fails deserialization and is
/// treated as a fetch failure.
#[derive(Debug, Deserialize)]
struct JokeResponse {
    joke: String,
}

/// Thin client over the joke API. `reqwest::Client` is cheap to clone and
/// lazy about connections, so construction never touches the network.
#[derive(Clone, Debug)]
pub struct JokeClient {
    endpoint: String,
    client: reqwest::Client,
}

impl JokeClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// The GET URL for a single-part joke in `category`.
    pub fn request_url(&self, category: Category) -> String {
        format!("{}/{category}?type=single", self.endpoint)
    }

    /// Fetch one joke. Network errors, non-success statuses and malformed
    /// bodies all surface as `Err`.
    pub async fn fetch(&self, category: Category) -> Result<String> {
        let url = self.request_url(category);
        log::debug!("GET {url}");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;
        parse_joke(&body)
    }
}

impl Default for JokeClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// Extract the `joke` field from a response body.
pub fn parse_joke(body: &str) -> Result<String> {
    let parsed: JokeResponse = serde_json::from_str(body)?;
    Ok(parsed.joke)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Category::Any, "https://v2.jokeapi.dev/joke/Any?type=single")]
    #[case(
        Category::Programming,
        "https://v2.jokeapi.dev/joke/Programming?type=single"
    )]
    #[case(Category::Pun, "https://v2.jokeapi.dev/joke/Pun?type=single")]
    fn test_request_url(#[case] category: Category, #[case] expected: &str) {
        let client = JokeClient::default();
        assert_eq!(client.request_url(category), expected);
    }

    #[test]
    fn test_request_url_custom_endpoint() {
        let client = JokeClient::new("http://localhost:8080/joke");
        assert_eq!(
            client.request_url(Category::Misc),
            "http://localhost:8080/joke/Misc?type=single"
        );
    }

    #[test]
    fn test_parse_joke() {
        let body = r#"{
            "error": false,
            "category": "Programming",
            "type": "single",
            "joke": "Why do programmers prefer dark mode? Because light attracts bugs.",
            "id": 42,
            "safe": true,
            "lang": "en"
        }"#;
        assert_eq!(
            parse_joke(body).unwrap(),
            "Why do programmers prefer dark mode? Because light attracts bugs."
        );
    }

    #[rstest]
    #[case(r#"{"error": true, "message": "No jokes found"}"#)]
    #[case(r#"{"type": "twopart", "setup": "Knock knock", "delivery": "..."}"#)]
    #[case("not json at all")]
    #[case("")]
    fn test_parse_joke_rejects_malformed_bodies(#[case] body: &str) {
        assert!(parse_joke(body).is_err());
    }
}
