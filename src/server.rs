//! HTTP surface: SEO artifacts and the JSON back-ends of the site widgets.

use crate::catalog::Catalog;
use crate::conditions::{build_dashboard, CourseCondition};
use crate::config::Config;
use crate::countdown::time_left;
use crate::i18n::{AlternatesResolver, LanguageSwitcher, LocaleRegistry, PathError};
use crate::planner::{find_best_match, MatchOutcome, PlannerQuery, PlannerRequest, QueryError};
use crate::search::{post_count_by_category, search_posts};
use crate::seo::{self, schema, PageMetadata};
use crate::weather::WeatherClient;
use anyhow::Context;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, Request, State};
use axum::http::header::{self, HeaderName, HeaderValue};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "SAMEORIGIN"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    (
        "strict-transport-security",
        "max-age=63072000; includeSubDomains; preload",
    ),
    (
        "permissions-policy",
        "camera=(), microphone=(), geolocation=(self)",
    ),
];

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Query(#[from] QueryError),

    /// Planner body that does not deserialise
    #[error("{0}")]
    MalformedQuery(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Path(_) => (StatusCode::BAD_REQUEST, "invalid_path"),
            ApiError::Query(_) | ApiError::MalformedQuery(_) => {
                (StatusCode::BAD_REQUEST, "invalid_query")
            }
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };

        let message = match &self {
            ApiError::Internal(e) => {
                error!("Request failed: {:#}", e);
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({
            "ok": false,
            "error": { "code": code, "message": message },
        });

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedQuery(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    pub registry: Arc<LocaleRegistry>,
    pub resolver: Arc<AlternatesResolver>,
    pub weather: Arc<WeatherClient>,
}

impl AppState {
    pub fn new(
        config: Config,
        catalog: Catalog,
        registry: Arc<LocaleRegistry>,
    ) -> anyhow::Result<Self> {
        let resolver = AlternatesResolver::new(config.site_origin.clone(), registry.clone());
        let weather = WeatherClient::from_config(&config)?;

        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            registry,
            resolver: Arc::new(resolver),
            weather: Arc::new(weather),
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/sitemap.xml", get(sitemap))
        .route("/feed", get(feed))
        .route("/api/alternates", get(alternates))
        .route("/api/metadata", get(metadata))
        .route("/api/switcher", get(switcher))
        .route("/api/planner", post(planner))
        .route("/api/search", get(search))
        .route("/api/conditions", get(conditions))
        .route("/api/countdown", get(countdown))
        .route("/api/courses/:slug/schema", get(course_schema))
        .route("/api/blog/:slug/schema", get(post_schema))
        .route("/api/schema/website", get(website_schema))
        .route("/api/schema/courses", get(course_list_schema))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            redirect_legacy_hosts,
        ));

    for &(name, value) in SECURITY_HEADERS {
        router = router.layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Permanently redirect retired hostnames to the canonical origin, keeping
/// path and query.
async fn redirect_legacy_hosts(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok());

    if let Some(host) = host.filter(|h| state.config.is_legacy_host(h)) {
        let path_and_query = request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let location = format!("{}{}", state.config.site_origin, path_and_query);
        info!("Redirecting legacy host {} to {}", host, location);
        return Redirect::permanent(&location).into_response();
    }

    next.run(request).await
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn sitemap(State(state): State<AppState>) -> ApiResult<Response> {
    let paths = state
        .catalog
        .content_paths(&state.registry)
        .context("Catalog produced an invalid content path")?;
    let entries = seo::build_sitemap(&state.resolver, &paths, Utc::now());
    let xml = seo::render_sitemap_xml(&entries)?;

    Ok((
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    )
        .into_response())
}

async fn feed(State(state): State<AppState>) -> ApiResult<Response> {
    let channel = seo::build_feed(
        &state.resolver,
        &state.catalog.posts,
        state.config.feed_limit,
        Utc::now(),
    )
    .context("Catalog post does not form a valid feed link")?;

    Ok((
        [
            (header::CONTENT_TYPE, seo::feed::FEED_CONTENT_TYPE),
            (header::CACHE_CONTROL, seo::feed::FEED_CACHE_CONTROL),
        ],
        seo::render_feed(&channel),
    )
        .into_response())
}

#[derive(Debug, Deserialize)]
struct PathParams {
    #[serde(default)]
    path: String,
}

async fn alternates(
    State(state): State<AppState>,
    params: Result<Query<PathParams>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(params) = params?;
    let path = state.resolver.parse_path(&params.path)?;
    let alternates = state.resolver.resolve(&path);

    Ok(Json(json!({
        "path": path,
        "canonical": alternates.canonical(),
        "alternates": alternates,
    })))
}

#[derive(Debug, Deserialize)]
struct MetadataParams {
    #[serde(default)]
    path: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}

async fn metadata(
    State(state): State<AppState>,
    params: Result<Query<MetadataParams>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(params) = params?;
    let metadata = PageMetadata::for_request_path(
        &state.resolver,
        &params.path,
        params.title,
        params.description,
    )?;
    let head = metadata.render_head_links();

    Ok(Json(json!({ "metadata": metadata, "head": head })))
}

async fn switcher(
    State(state): State<AppState>,
    params: Result<Query<PathParams>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(params) = params?;
    let links = LanguageSwitcher::new(&state.resolver).links(&params.path)?;
    Ok(Json(json!({ "links": links })))
}

async fn planner(
    State(state): State<AppState>,
    body: Result<Json<PlannerRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(request) = body?;
    let locale = request.locale.clone().unwrap_or_default();
    let query = PlannerQuery::try_from(request)?;

    let itineraries = state
        .resolver
        .parse_path("/itineraries")
        .context("Itineraries page path rejected by the locale registry")?;
    let browse_url = state.resolver.localized_url(&itineraries, &locale);

    let body = match find_best_match(&query, &state.catalog.itineraries) {
        MatchOutcome::Matched { plan, score } => {
            let course_names: Vec<&str> = plan
                .courses
                .iter()
                .filter_map(|slug| state.catalog.course(slug))
                .map(|course| course.name.as_str())
                .collect();

            json!({
                "query": query,
                "plan": plan,
                "score": score,
                "course_names": course_names,
                "browse_url": browse_url,
            })
        }
        MatchOutcome::NoMatch => json!({
            "query": query,
            "plan": null,
            "score": null,
            "browse_url": browse_url,
        }),
    };

    Ok(Json(body))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(params) = params?;
    let results = search_posts(&state.catalog.posts, &params.q);
    let counts = post_count_by_category(&state.catalog.posts);

    Ok(Json(json!({
        "query": params.q.trim(),
        "total": results.len(),
        "results": results,
        "category_counts": counts,
    })))
}

#[derive(Debug, Deserialize)]
struct ConditionParams {
    condition: Option<String>,
}

async fn conditions(
    State(state): State<AppState>,
    params: Result<Query<ConditionParams>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(params) = params?;
    let filter = params
        .condition
        .as_deref()
        .filter(|c| !c.is_empty() && *c != "all")
        .map(str::parse::<CourseCondition>)
        .transpose()
        .map_err(ApiError::BadRequest)?;

    let weather = state.weather.current().await;
    let mut dashboard = build_dashboard(&state.catalog.conditions, weather);
    if filter.is_some() {
        dashboard.courses = dashboard.filtered(filter).into_iter().cloned().collect();
    }

    Ok(Json(json!(dashboard)))
}

async fn countdown(State(state): State<AppState>) -> Json<Value> {
    let left = time_left(Utc::now(), state.config.open_start);

    Json(json!({
        "target": state.config.open_start.to_rfc3339(),
        "started": left.is_over(),
        "time_left": left,
    }))
}

#[derive(Debug, Deserialize)]
struct SchemaParams {
    format: Option<String>,
}

fn schema_response(value: Value, params: &SchemaParams) -> Response {
    match params.format.as_deref() {
        Some("script") => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            schema::to_script_tag(&value),
        )
            .into_response(),
        _ => Json(value).into_response(),
    }
}

async fn course_schema(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    params: Result<Query<SchemaParams>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(params) = params?;
    let course = state
        .catalog
        .course(&slug)
        .ok_or_else(|| ApiError::NotFound(format!("course '{}' not found", slug)))?;
    let value = schema::golf_course(&state.resolver, course)
        .context("Course slug does not form a valid page path")?;

    Ok(schema_response(value, &params))
}

async fn post_schema(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    params: Result<Query<SchemaParams>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(params) = params?;
    let post = state
        .catalog
        .post(&slug)
        .ok_or_else(|| ApiError::NotFound(format!("post '{}' not found", slug)))?;
    let category = state.catalog.category(&post.category_slug);
    let value = schema::article(&state.resolver, post, category)
        .context("Post slug does not form a valid page path")?;

    Ok(schema_response(value, &params))
}

async fn website_schema(
    State(state): State<AppState>,
    params: Result<Query<SchemaParams>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(params) = params?;
    let value = schema::website(&state.resolver).context("Site root path rejected")?;

    Ok(schema_response(value, &params))
}

async fn course_list_schema(
    State(state): State<AppState>,
    params: Result<Query<SchemaParams>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(params) = params?;
    let value = schema::course_list(&state.resolver, &state.catalog.courses)
        .context("Course slug does not form a valid page path")?;

    Ok(schema_response(value, &params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{BudgetTier, SkillTier};
    use axum::body::Body;
    use axum::http::{Method, Request as HttpRequest};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(weather_api_url: &str) -> Config {
        Config {
            site_origin: "https://example.test".to_string(),
            weather_api_url: weather_api_url.to_string(),
            ..Config::default()
        }
    }

    fn test_app_with(config: Config, catalog: Catalog) -> Router {
        let state = AppState::new(config, catalog, LocaleRegistry::shared()).unwrap();
        build_router(state)
    }

    fn test_app_with_config(config: Config) -> Router {
        test_app_with(config, Catalog::bundled().unwrap())
    }

    fn test_app() -> Router {
        test_app_with_config(test_config("http://127.0.0.1:9/v1/forecast"))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(HttpRequest::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> Response {
        let request = HttpRequest::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    // ==================== Middleware Tests ====================

    #[tokio::test]
    async fn test_health_has_security_headers() {
        let response = get(test_app(), "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        for &(name, value) in SECURITY_HEADERS {
            assert_eq!(response.headers().get(name).unwrap(), value);
        }
    }

    #[tokio::test]
    async fn test_legacy_host_is_permanently_redirected() {
        let request = HttpRequest::builder()
            .uri("/courses/hillside?ref=old")
            .header(header::HOST, "sefton-links.vercel.app")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.test/courses/hillside?ref=old"
        );
        assert!(response.headers().contains_key("strict-transport-security"));
    }

    #[tokio::test]
    async fn test_canonical_host_is_not_redirected() {
        let request = HttpRequest::builder()
            .uri("/health")
            .header(header::HOST, "www.seftonlinks.com")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    // ==================== SEO Route Tests ====================

    #[tokio::test]
    async fn test_sitemap_route() {
        let response = get(test_app(), "/sitemap.xml").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/xml; charset=utf-8"
        );
        let xml = body_text(response).await;
        assert!(xml.contains("<loc>https://example.test/ar/courses/formby</loc>"));
    }

    #[tokio::test]
    async fn test_feed_route_headers() {
        let response = get(test_app(), "/feed").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/rss+xml; charset=utf-8"
        );
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=3600, s-maxage=3600"
        );
        assert!(body_text(response).await.contains("<link>https://example.test/blog</link>"));
    }

    #[tokio::test]
    async fn test_alternates_route() {
        let response = get(test_app(), "/api/alternates?path=/courses/formby").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["path"], "/courses/formby");
        assert_eq!(json["alternates"]["de"], "https://example.test/de/courses/formby");
        assert_eq!(json["alternates"]["x-default"], "https://example.test/courses/formby");
        assert_eq!(json["alternates"].as_object().unwrap().len(), 22);
    }

    #[tokio::test]
    async fn test_alternates_route_rejects_locale_prefix() {
        let response = get(test_app(), "/api/alternates?path=/de/courses").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], "invalid_path");
    }

    #[tokio::test]
    async fn test_metadata_route() {
        let response = get(test_app(), "/api/metadata?path=/ar/blog&title=Blog").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["metadata"]["html_lang"], "ar");
        assert_eq!(json["metadata"]["dir"], "rtl");
        assert_eq!(json["metadata"]["canonical"], "https://example.test/ar/blog");
        assert!(json["head"]
            .as_str()
            .unwrap()
            .contains(r#"hreflang="ja" href="https://example.test/ja/blog""#));
    }

    #[tokio::test]
    async fn test_switcher_route() {
        let response = get(test_app(), "/api/switcher?path=/fr/the-open-2026").await;
        let json = body_json(response).await;
        let links = json["links"].as_array().unwrap();

        assert_eq!(links.len(), 18);
        assert_eq!(links[0]["href"], "https://example.test/the-open-2026");
        let active: Vec<_> = links.iter().filter(|l| l["active"] == true).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0]["locale"], "fr");
    }

    // ==================== Widget Route Tests ====================

    #[tokio::test]
    async fn test_planner_match() {
        let response = post_json(
            test_app(),
            "/api/planner",
            json!({ "days": 3, "budget": "standard", "skill": "any" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["plan"]["id"], "3-day-classic");
        assert_eq!(json["score"], 23);
        assert_eq!(json["course_names"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_planner_no_match_is_not_an_error() {
        // No plan shares length, budget or skill with the request
        let mut catalog = Catalog::bundled().unwrap();
        catalog.itineraries.retain(|plan| plan.budget != BudgetTier::Premium);
        for plan in &mut catalog.itineraries {
            plan.skill = SkillTier::MidHigh;
        }
        let app = test_app_with(test_config("http://127.0.0.1:9/v1/forecast"), catalog);

        let response = post_json(
            app,
            "/api/planner",
            json!({ "days": 10, "budget": "premium", "skill": "low" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json["plan"].is_null());
        assert!(json["score"].is_null());
        assert_eq!(json["browse_url"], "https://example.test/itineraries");
    }

    #[tokio::test]
    async fn test_planner_budget_and_skill_match_without_length() {
        let response = post_json(
            test_app(),
            "/api/planner",
            json!({ "days": 10, "budget": "premium", "skill": "low" }),
        )
        .await;
        let json = body_json(response).await;

        assert_eq!(json["plan"]["id"], "2-day-highlights");
        assert_eq!(json["score"], 13);
    }

    #[tokio::test]
    async fn test_planner_browse_url_follows_page_locale() {
        let response = post_json(
            test_app(),
            "/api/planner",
            json!({ "days": 3, "budget": "standard", "skill": "any", "locale": "de" }),
        )
        .await;
        let json = body_json(response).await;
        assert_eq!(json["browse_url"], "https://example.test/de/itineraries");

        let response = post_json(
            test_app(),
            "/api/planner",
            json!({ "days": 3, "budget": "standard", "skill": "any", "locale": "en-GB" }),
        )
        .await;
        let json = body_json(response).await;
        assert_eq!(json["browse_url"], "https://example.test/itineraries");
    }

    #[tokio::test]
    async fn test_planner_malformed_body_uses_error_envelope() {
        for body in [
            json!({ "days": "3", "budget": "value", "skill": "any" }),
            json!({ "budget": "value", "skill": "any" }),
        ] {
            let response = post_json(test_app(), "/api/planner", body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let json = body_json(response).await;
            assert_eq!(json["ok"], false);
            assert_eq!(json["error"]["code"], "invalid_query");
            assert!(!json["error"]["message"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_planner_without_json_content_type_uses_error_envelope() {
        let request = HttpRequest::builder()
            .method(Method::POST)
            .uri("/api/planner")
            .body(Body::from("days=3"))
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "invalid_query");
    }

    #[tokio::test]
    async fn test_undecodable_query_string_uses_error_envelope() {
        let response = get(test_app(), "/api/alternates?path=/a&path=/b").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], "bad_request");
    }

    #[tokio::test]
    async fn test_planner_rejects_zero_days() {
        let response = post_json(
            test_app(),
            "/api/planner",
            json!({ "days": 0, "budget": "value", "skill": "any" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "invalid_query");
    }

    #[tokio::test]
    async fn test_search_route() {
        let response = get(test_app(), "/api/search?q=HILLSIDE").await;
        let json = body_json(response).await;

        let results = json["results"].as_array().unwrap();
        assert!(!results.is_empty());
        assert_eq!(json["total"], results.len());
        assert_eq!(json["category_counts"]["course-reviews"], 4);
    }

    #[tokio::test]
    async fn test_conditions_route_with_weather() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "current": { "windspeed_10m": 21.7, "winddirection_10m": 270.0 }
            })))
            .mount(&mock_server)
            .await;

        let app = test_app_with_config(test_config(&format!("{}/v1/forecast", mock_server.uri())));
        let json = body_json(get(app, "/api/conditions?condition=wet").await).await;

        assert_eq!(json["wind_speed_mph"], 22);
        assert_eq!(json["wind_direction"], "W");
        assert_eq!(json["courses"].as_array().unwrap().len(), 1);
        assert_eq!(json["courses"][0]["slug"], "west-lancashire");
    }

    #[tokio::test]
    async fn test_conditions_route_rejects_unknown_filter() {
        let response = get(test_app(), "/api/conditions?condition=muddy").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_countdown_route() {
        let json = body_json(get(test_app(), "/api/countdown").await).await;

        assert_eq!(json["target"], "2026-07-16T06:30:00+00:00");
        assert!(json["time_left"]["days"].is_i64());
    }

    #[tokio::test]
    async fn test_course_schema_route() {
        let response = get(test_app(), "/api/courses/formby/schema").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["@graph"][0]["@type"], "GolfCourse");

        let response = get(test_app(), "/api/courses/formby/schema?format=script").await;
        assert!(body_text(response)
            .await
            .starts_with(r#"<script type="application/ld+json">"#));
    }

    #[tokio::test]
    async fn test_unknown_course_schema_is_404() {
        let response = get(test_app(), "/api/courses/st-andrews/schema").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn test_post_and_site_schema_routes() {
        let json = body_json(get(test_app(), "/api/blog/links-golf-for-beginners/schema").await).await;
        assert_eq!(json["@type"], "Article");

        let json = body_json(get(test_app(), "/api/schema/website").await).await;
        assert_eq!(json["@graph"][0]["url"], "https://example.test");

        let json = body_json(get(test_app(), "/api/schema/courses").await).await;
        assert_eq!(json["numberOfItems"], 6);
    }
}
