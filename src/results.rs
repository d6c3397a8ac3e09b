//! State machine behind the results page.
//!
//! The page is driven by the `q` value in its URL. Every non-empty query
//! change issues a [`FetchTicket`]; a fetch result is only applied if it
//! carries the most recently issued ticket, so a slow answer for an old
//! query can never replace the answer for the current one.

use std::fmt;

use serde::Serialize;

use crate::data_models::SearchResponse;
use crate::error::ClientFetchError;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResultsState {
    /// No query in the URL. Nothing is fetched.
    #[default]
    Idle,
    Loading { query: String },
    Results { query: String, response: SearchResponse },
    Empty { query: String },
    Error { query: String, message: String },
}

impl ResultsState {
    pub fn kind(&self) -> StateKind {
        match self {
            ResultsState::Idle => StateKind::Idle,
            ResultsState::Loading { .. } => StateKind::Loading,
            ResultsState::Results { .. } => StateKind::Results,
            ResultsState::Empty { .. } => StateKind::Empty,
            ResultsState::Error { .. } => StateKind::Error,
        }
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            ResultsState::Idle => None,
            ResultsState::Loading { query }
            | ResultsState::Results { query, .. }
            | ResultsState::Empty { query }
            | ResultsState::Error { query, .. } => Some(query),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StateKind {
    Idle,
    Loading,
    Results,
    Empty,
    Error,
}

/// Identity of one issued fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    query: String,
}

impl FetchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug, Default)]
pub struct ResultsPage {
    generation: u64,
    state: ResultsState,
}

impl ResultsPage {
    pub fn new() -> ResultsPage {
        ResultsPage::default()
    }

    pub fn state(&self) -> &ResultsState {
        &self.state
    }

    /// Points the page at a new `q` value.
    ///
    /// Returns the ticket for the fetch the caller must now issue, or `None`
    /// when no fetch is needed (no query, or the same query is already shown).
    pub fn set_query(&mut self, q: Option<&str>) -> Option<FetchTicket> {
        let Some(query) = q.filter(|q| !q.is_empty()) else {
            // Drop whatever is still in flight.
            self.generation += 1;
            self.state = ResultsState::Idle;
            return None;
        };

        if self.state.query() == Some(query) {
            return None;
        }
        Some(self.reload(query))
    }

    /// Starts a fetch for `query` even if it is the one already shown, as a
    /// form resubmission does.
    pub fn reload(&mut self, query: &str) -> FetchTicket {
        self.generation += 1;
        self.state = ResultsState::Loading {
            query: query.to_string(),
        };
        FetchTicket {
            generation: self.generation,
            query: query.to_string(),
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Applies the outcome of a fetch. Returns `false` if the ticket was
    /// superseded and the outcome was discarded.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<SearchResponse, ClientFetchError>,
    ) -> bool {
        if !self.is_current(&ticket) {
            tracing::debug!(query = %ticket.query, "discarding stale search result");
            return false;
        }

        let query = ticket.query;
        self.state = match outcome {
            Ok(response) if response.items.is_empty() => ResultsState::Empty { query },
            Ok(response) => ResultsState::Results { query, response },
            Err(err) => {
                tracing::error!("Failed to fetch search results: {err}");
                ResultsState::Error {
                    query,
                    message: err.to_string(),
                }
            }
        };
        true
    }
}

/// `1234567` -> `1,234,567`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn summary_line(response: &SearchResponse) -> String {
    format!(
        "About {} results ({:.2} seconds)",
        format_count(response.total_results),
        response.search_time
    )
}

/// Terminal rendering, used by the `query` subcommand.
impl fmt::Display for ResultsPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            ResultsState::Idle => writeln!(f, "Enter a query to search the web."),
            ResultsState::Loading { query } => writeln!(f, "Searching for \"{query}\"..."),
            ResultsState::Empty { query } => {
                writeln!(f, "No results found for \"{query}\"")?;
                writeln!(f, "Try different keywords or check your spelling.")
            }
            ResultsState::Error { message, .. } => {
                writeln!(f, "Error: {message}")?;
                writeln!(f, "Please try again later or modify your search query.")
            }
            ResultsState::Results { response, .. } => {
                writeln!(f, "{}", summary_line(response))?;
                for item in &response.items {
                    writeln!(f)?;
                    let shown = if item.display_link.is_empty() {
                        &item.link
                    } else {
                        &item.display_link
                    };
                    writeln!(f, "{shown}")?;
                    writeln!(f, "{}", item.title)?;
                    writeln!(f, "  {}", item.link)?;
                    writeln!(f, "{}", item.snippet)?;
                }
                Ok(())
            }
        }
    }
}
