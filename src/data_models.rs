use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Used when the provider reports no total at all. The provider gives no
/// meaningful estimate in that case; this is a display placeholder only.
pub const DEFAULT_TOTAL_RESULTS: u64 = 1000;

/// Response body of the external search provider. Only the fields we
/// display are modelled; everything else is ignored.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawProviderResult {
    #[serde(default)]
    pub organic: Vec<OrganicResult>,
    pub search_parameters: Option<ResultCount>,
    pub search_information: Option<ResultCount>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrganicResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    pub displayed_url: Option<String>,
    #[serde(default)]
    pub snippet: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResultCount {
    pub total_results: Option<Value>,
}

impl ResultCount {
    /// Providers send the count either as a number or as a numeric string.
    /// Zero counts as missing so the next source gets a chance.
    fn value(&self) -> Option<u64> {
        let count = match self.total_results.as_ref()? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
            Value::String(s) => s.trim().replace(',', "").parse::<u64>().ok(),
            _ => None,
        }?;
        (count > 0).then_some(count)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedResultItem {
    pub title: String,
    pub link: String,
    pub display_link: String,
    pub snippet: String,
}

impl From<OrganicResult> for NormalizedResultItem {
    fn from(result: OrganicResult) -> Self {
        let display_link = match result.displayed_url {
            Some(shown) if !shown.is_empty() => shown,
            _ => host_of(&result.link).unwrap_or_else(|| result.link.clone()),
        };
        NormalizedResultItem {
            title: result.title,
            link: result.link,
            display_link,
            snippet: result.snippet,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub items: Vec<NormalizedResultItem>,
    pub total_results: u64,
    /// Seconds spent waiting on the provider.
    pub search_time: f64,
}

impl SearchResponse {
    pub fn from_provider(raw: RawProviderResult, search_time: f64) -> SearchResponse {
        let total_results = raw
            .search_parameters
            .as_ref()
            .and_then(ResultCount::value)
            .or_else(|| raw.search_information.as_ref().and_then(ResultCount::value))
            .unwrap_or(DEFAULT_TOTAL_RESULTS);

        SearchResponse {
            items: raw.organic.into_iter().map(Into::into).collect(),
            total_results,
            search_time,
        }
    }
}

fn host_of(link: &str) -> Option<String> {
    Url::parse(link)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawProviderResult {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn normalizes_single_result() {
        let response = SearchResponse::from_provider(
            raw(json!({
                "organic": [{"title": "A", "link": "https://x.com/a", "snippet": "s"}],
                "searchParameters": {"totalResults": 42}
            })),
            0.25,
        );

        assert_eq!(
            response.items,
            vec![NormalizedResultItem {
                title: "A".into(),
                link: "https://x.com/a".into(),
                display_link: "x.com".into(),
                snippet: "s".into(),
            }]
        );
        assert_eq!(response.total_results, 42);
        assert_eq!(response.search_time, 0.25);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let response = SearchResponse::from_provider(
            raw(json!({"organic": [{"title": "A", "link": "https://x.com/a", "snippet": "s"}]})),
            0.0,
        );
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["items"][0]["displayLink"], "x.com");
        assert_eq!(value["totalResults"], 1000);
        assert!(value["searchTime"].is_number());
    }

    #[test]
    fn displayed_url_wins_over_hostname() {
        let item: NormalizedResultItem = OrganicResult {
            title: "Rust".into(),
            link: "https://www.rust-lang.org/learn".into(),
            displayed_url: Some("rust-lang.org › learn".into()),
            snippet: String::new(),
        }
        .into();
        assert_eq!(item.display_link, "rust-lang.org › learn");
    }

    #[test]
    fn empty_displayed_url_falls_back_to_hostname() {
        let item: NormalizedResultItem = OrganicResult {
            link: "https://docs.rs/tokio".into(),
            displayed_url: Some(String::new()),
            ..Default::default()
        }
        .into();
        assert_eq!(item.display_link, "docs.rs");
    }

    #[test]
    fn unparsable_link_is_shown_verbatim() {
        let item: NormalizedResultItem = OrganicResult {
            link: "not a url".into(),
            ..Default::default()
        }
        .into();
        assert_eq!(item.display_link, "not a url");
    }

    #[test]
    fn preserves_count_and_order() {
        let response = SearchResponse::from_provider(
            raw(json!({
                "organic": [
                    {"title": "3", "link": "https://c.com"},
                    {"title": "1", "link": "https://a.com"},
                    {"title": "2", "link": "https://b.com"},
                    {"title": "1", "link": "https://a.com"}
                ]
            })),
            0.0,
        );
        let titles: Vec<&str> = response.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["3", "1", "2", "1"]);
    }

    #[test]
    fn missing_organic_is_empty() {
        let response = SearchResponse::from_provider(raw(json!({})), 0.0);
        assert!(response.items.is_empty());
    }

    #[test]
    fn total_results_fallback_order() {
        let both = raw(json!({
            "searchParameters": {"totalResults": 7},
            "searchInformation": {"totalResults": 9}
        }));
        assert_eq!(SearchResponse::from_provider(both, 0.0).total_results, 7);

        let info_only = raw(json!({"searchInformation": {"totalResults": "1,234"}}));
        assert_eq!(SearchResponse::from_provider(info_only, 0.0).total_results, 1234);

        let params_without_count = raw(json!({
            "searchParameters": {"q": "cats"},
            "searchInformation": {"totalResults": 9}
        }));
        assert_eq!(
            SearchResponse::from_provider(params_without_count, 0.0).total_results,
            9
        );

        let none = raw(json!({"searchParameters": {"q": "cats"}}));
        assert_eq!(
            SearchResponse::from_provider(none, 0.0).total_results,
            DEFAULT_TOTAL_RESULTS
        );
    }

    #[test]
    fn zero_count_is_treated_as_missing() {
        let zero = raw(json!({
            "searchParameters": {"totalResults": 0},
            "searchInformation": {"totalResults": 5}
        }));
        assert_eq!(SearchResponse::from_provider(zero, 0.0).total_results, 5);
    }
}
