//! Stand-ins for the listings page, TMDb and the notifier
//!
//! - [`FakeSearch`] / [`StaticListings`] / [`RecordingNotifier`]: in-process
//!   trait implementations for driving the resolver and pipeline directly
//! - [`FakeServer`]: an axum server on 127.0.0.1 that answers like the
//!   listings page and TMDb's `/search/movie`, for exercising the real HTTP
//!   clients

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::{Query, RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};

use reelscout::models::{ListingEntry, RatingQuery, SearchCandidate, SearchResponse};
use reelscout::services::{
    DeliveryReceipt, ListingError, ListingSource, MetadataSearch, Notifier, NotifyError,
    OutgoingMessage, TmdbError,
};

// ============================================================================
// In-process fakes
// ============================================================================

/// Scripted answer for one query
#[derive(Debug, Clone)]
pub enum FakeReply {
    Found(SearchResponse),
    Status(u16),
    Unreachable,
}

/// Metadata search answering from a script, recording every query
#[derive(Default)]
pub struct FakeSearch {
    replies: HashMap<(String, String), FakeReply>,
    queries: Mutex<Vec<RatingQuery>>,
}

impl FakeSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exactly the given candidates (total_results = candidates.len())
    pub fn with_candidates(mut self, title: &str, year: &str, candidates: &[(u64, f64)]) -> Self {
        let results: Vec<SearchCandidate> = candidates
            .iter()
            .map(|&(id, vote_average)| SearchCandidate {
                id,
                vote_average,
                overview: format!("Overview of {}", title),
            })
            .collect();
        let response = SearchResponse {
            total_results: results.len() as u64,
            results,
        };
        self.replies
            .insert((title.to_string(), year.to_string()), FakeReply::Found(response));
        self
    }

    pub fn with_status(mut self, title: &str, year: &str, status: u16) -> Self {
        self.replies
            .insert((title.to_string(), year.to_string()), FakeReply::Status(status));
        self
    }

    pub fn with_unreachable(mut self, title: &str, year: &str) -> Self {
        self.replies
            .insert((title.to_string(), year.to_string()), FakeReply::Unreachable);
        self
    }

    pub fn queries(&self) -> Vec<RatingQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetadataSearch for FakeSearch {
    async fn search_movie(&self, query: &RatingQuery) -> Result<SearchResponse, TmdbError> {
        self.queries.lock().unwrap().push(query.clone());

        match self.replies.get(&(query.title.clone(), query.year.clone())) {
            Some(FakeReply::Found(response)) => Ok(response.clone()),
            Some(FakeReply::Status(status)) => Err(TmdbError::ApiError(*status, String::new())),
            Some(FakeReply::Unreachable) => {
                Err(TmdbError::NetworkError("connection refused".to_string()))
            }
            None => Ok(SearchResponse {
                total_results: 0,
                results: Vec::new(),
            }),
        }
    }
}

/// Listing source returning a fixed list
pub struct StaticListings(pub Vec<ListingEntry>);

#[async_trait]
impl ListingSource for StaticListings {
    async fn fetch_listings(&self) -> Result<Vec<ListingEntry>, ListingError> {
        Ok(self.0.clone())
    }
}

/// Notifier that keeps delivered messages in memory
#[derive(Default)]
pub struct RecordingNotifier {
    delivered: Mutex<Vec<OutgoingMessage>>,
}

impl RecordingNotifier {
    pub fn delivered(&self) -> Vec<OutgoingMessage> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn deliver(&self, message: &OutgoingMessage) -> Result<DeliveryReceipt, NotifyError> {
        let mut delivered = self.delivered.lock().unwrap();
        delivered.push(message.clone());
        Ok(DeliveryReceipt {
            location: format!("memory:{}", delivered.len()),
        })
    }
}

// ============================================================================
// HTTP fake
// ============================================================================

struct FakeState {
    listing_status: StatusCode,
    listing_html: String,
    /// title → (status, body)
    search: HashMap<String, (StatusCode, Value)>,
    search_requests: Mutex<Vec<String>>,
}

/// Local server playing both the listings page and TMDb
pub struct FakeServer {
    base_url: String,
    state: Arc<FakeState>,
}

impl FakeServer {
    /// Start serving; `search` maps a decoded title to a status + JSON body.
    /// Titles not listed get an empty result set.
    pub async fn start(
        listing_status: u16,
        listing_html: &str,
        search: Vec<(&str, u16, Value)>,
    ) -> Self {
        let state = Arc::new(FakeState {
            listing_status: StatusCode::from_u16(listing_status).unwrap(),
            listing_html: listing_html.to_string(),
            search: search
                .into_iter()
                .map(|(title, status, body)| {
                    (title.to_string(), (StatusCode::from_u16(status).unwrap(), body))
                })
                .collect(),
            search_requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/movies/", get(listing_page))
            .route("/3/search/movie", get(search_movie))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn listing_url(&self) -> String {
        format!("{}/movies/?sort=release-date", self.base_url)
    }

    pub fn metadata_base_url(&self) -> String {
        format!("{}/3", self.base_url)
    }

    /// Raw query strings received on `/3/search/movie`, in arrival order
    pub fn search_requests(&self) -> Vec<String> {
        self.state.search_requests.lock().unwrap().clone()
    }
}

/// TMDb-shaped body with one candidate per `(id, vote_average)`
pub fn tmdb_body(candidates: &[(u64, f64, &str)]) -> Value {
    let results: Vec<Value> = candidates
        .iter()
        .map(|(id, vote_average, overview)| {
            json!({
                "adult": false,
                "id": id,
                "vote_average": vote_average,
                "overview": overview,
            })
        })
        .collect();

    json!({
        "page": 1,
        "total_pages": 1,
        "total_results": results.len(),
        "results": results,
    })
}

async fn listing_page(State(state): State<Arc<FakeState>>) -> Response {
    (state.listing_status, Html(state.listing_html.clone())).into_response()
}

async fn search_movie(
    State(state): State<Arc<FakeState>>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state
        .search_requests
        .lock()
        .unwrap()
        .push(raw.unwrap_or_default());

    let title = params.get("query").cloned().unwrap_or_default();
    let (status, body) = state
        .search
        .get(&title)
        .cloned()
        .unwrap_or_else(|| (StatusCode::OK, tmdb_body(&[])));

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body.to_string(),
    )
        .into_response()
}
