//! In-memory fake of a slice of the Harvest v1 API.
//!
//! Covers clients, projects, the `/daily` timesheet endpoints and
//! `/account/who_am_i`, with the vendor's envelopes, `Location` headers and
//! string-typed daily ids. Every route requires either basic auth for the
//! configured account or its bearer token.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

pub const SUBDOMAIN: &str = "acme";
pub const USERNAME: &str = "admin@acme.test";
pub const PASSWORD: &str = "secret";
pub const ACCESS_TOKEN: &str = "test-token";
const TIMESTAMP: &str = "2024-01-01T00:00:00Z";

/// Credentials the fake accepts.
#[derive(Clone, Debug)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub access_token: String,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            username: USERNAME.to_string(),
            password: PASSWORD.to_string(),
            access_token: ACCESS_TOKEN.to_string(),
        }
    }
}

impl Account {
    fn accepts(&self, authorization: &str) -> bool {
        let basic = format!("Basic {}", STANDARD.encode(format!("{}:{}", self.username, self.password)));
        let bearer = format!("Bearer {}", self.access_token);
        authorization == basic || authorization == bearer
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Client {
    pub id: u64,
    pub name: String,
    pub active: bool,
    pub currency: Option<String>,
    pub details: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Deserialize)]
pub struct ClientInput {
    pub name: Option<String>,
    pub active: Option<bool>,
    pub currency: Option<String>,
    pub details: Option<String>,
}

#[derive(Deserialize)]
pub struct ClientEnvelope {
    pub client: ClientInput,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub client_id: u64,
    pub name: String,
    pub code: Option<String>,
    pub active: bool,
    pub billable: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Deserialize)]
pub struct ProjectInput {
    pub client_id: u64,
    pub name: String,
    pub code: Option<String>,
    pub billable: Option<bool>,
}

#[derive(Deserialize)]
pub struct ProjectEnvelope {
    pub project: ProjectInput,
}

#[derive(Clone, Debug)]
pub struct DayEntry {
    pub id: u64,
    pub project_id: u64,
    pub task_id: u64,
    pub spent_at: NaiveDate,
    pub hours: f64,
    pub notes: Option<String>,
    pub running: bool,
}

impl DayEntry {
    /// Daily endpoints render ids as strings.
    fn to_json(&self) -> Value {
        let timer_started_at = self.running.then_some(TIMESTAMP);
        json!({
            "id": self.id.to_string(),
            "project_id": self.project_id.to_string(),
            "task_id": self.task_id.to_string(),
            "spent_at": self.spent_at,
            "hours": self.hours,
            "notes": self.notes,
            "timer_started_at": timer_started_at,
            "created_at": TIMESTAMP,
            "updated_at": TIMESTAMP,
        })
    }
}

#[derive(Deserialize)]
pub struct DayEntryInput {
    pub project_id: u64,
    pub task_id: u64,
    pub spent_at: NaiveDate,
    #[serde(default)]
    pub hours: f64,
    pub notes: Option<String>,
}

#[derive(Default)]
pub struct Db {
    next_id: u64,
    clients: BTreeMap<u64, Client>,
    projects: BTreeMap<u64, Project>,
    entries: BTreeMap<u64, DayEntry>,
}

impl Db {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone)]
pub struct AppState {
    db: Arc<RwLock<Db>>,
    account: Arc<Account>,
}

pub fn app() -> Router {
    app_with(Account::default())
}

pub fn app_with(account: Account) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(Db::default())),
        account: Arc::new(account),
    };
    Router::new()
        .route("/clients", get(list_clients).post(create_client))
        .route("/clients/{id}", get(get_client).put(update_client).delete(delete_client))
        .route("/clients/{id}/toggle", post(toggle_client))
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/{id}", get(get_project).delete(delete_project))
        .route("/projects/{id}/toggle", put(toggle_project))
        .route("/daily/add", post(add_entry))
        .route("/daily/show/{id}", get(show_entry))
        .route("/daily/timer/{id}", get(toggle_timer))
        .route("/daily/delete/{id}", delete(delete_entry))
        .route("/daily/{day}/{year}", get(daily))
        .route("/account/who_am_i", get(who_am_i))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock harvest listening");
    }
    axum::serve(listener, app()).await
}

async fn require_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| state.account.accepts(value));
    if !authorized {
        debug!(uri = %request.uri(), "rejecting unauthenticated request");
        return (StatusCode::UNAUTHORIZED, "authentication failed").into_response();
    }
    next.run(request).await
}

fn created(location: String) -> Response {
    let mut headers = HeaderMap::new();
    if let Ok(value) = location.parse() {
        headers.insert(header::LOCATION, value);
    }
    (StatusCode::CREATED, headers).into_response()
}

// --- clients ---

async fn list_clients(State(state): State<AppState>) -> Json<Vec<Value>> {
    let db = state.db.read().await;
    Json(db.clients.values().map(|c| json!({ "client": c })).collect())
}

async fn create_client(State(state): State<AppState>, Json(input): Json<ClientEnvelope>) -> Response {
    let Some(name) = input.client.name else {
        return (StatusCode::BAD_REQUEST, "name can't be blank").into_response();
    };
    let mut db = state.db.write().await;
    let id = db.next_id();
    db.clients.insert(
        id,
        Client {
            id,
            name,
            active: input.client.active.unwrap_or(true),
            currency: input.client.currency,
            details: input.client.details,
            created_at: TIMESTAMP.to_string(),
            updated_at: TIMESTAMP.to_string(),
        },
    );
    created(format!("/clients/{id}"))
}

async fn get_client(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    let db = state.db.read().await;
    db.clients
        .get(&id)
        .map(|c| Json(json!({ "client": c })))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<ClientEnvelope>,
) -> Result<StatusCode, StatusCode> {
    let mut db = state.db.write().await;
    let client = db.clients.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.client.name {
        client.name = name;
    }
    if let Some(active) = input.client.active {
        client.active = active;
    }
    if input.client.currency.is_some() {
        client.currency = input.client.currency;
    }
    if input.client.details.is_some() {
        client.details = input.client.details;
    }
    Ok(StatusCode::OK)
}

async fn delete_client(State(state): State<AppState>, Path(id): Path<u64>) -> StatusCode {
    let mut db = state.db.write().await;
    if db.projects.values().any(|p| p.client_id == id) {
        return StatusCode::BAD_REQUEST;
    }
    db.clients.remove(&id).map(|_| StatusCode::OK).unwrap_or(StatusCode::NOT_FOUND)
}

async fn toggle_client(State(state): State<AppState>, Path(id): Path<u64>) -> StatusCode {
    let mut db = state.db.write().await;
    match db.clients.get_mut(&id) {
        Some(client) => {
            client.active = !client.active;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

// --- projects ---

#[derive(Deserialize)]
struct ProjectQuery {
    client: Option<u64>,
}

async fn list_projects(State(state): State<AppState>, Query(query): Query<ProjectQuery>) -> Json<Vec<Value>> {
    let db = state.db.read().await;
    Json(
        db.projects
            .values()
            .filter(|p| query.client.map_or(true, |client| p.client_id == client))
            .map(|p| json!({ "project": p }))
            .collect(),
    )
}

async fn create_project(State(state): State<AppState>, Json(input): Json<ProjectEnvelope>) -> Response {
    let mut db = state.db.write().await;
    if !db.clients.contains_key(&input.project.client_id) {
        return (StatusCode::BAD_REQUEST, "client does not exist").into_response();
    }
    let id = db.next_id();
    db.projects.insert(
        id,
        Project {
            id,
            client_id: input.project.client_id,
            name: input.project.name,
            code: input.project.code,
            active: true,
            billable: input.project.billable.unwrap_or(true),
            created_at: TIMESTAMP.to_string(),
            updated_at: TIMESTAMP.to_string(),
        },
    );
    created(format!("/projects/{id}"))
}

async fn get_project(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    let db = state.db.read().await;
    db.projects
        .get(&id)
        .map(|p| Json(json!({ "project": p })))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn delete_project(State(state): State<AppState>, Path(id): Path<u64>) -> StatusCode {
    let mut db = state.db.write().await;
    db.projects.remove(&id).map(|_| StatusCode::OK).unwrap_or(StatusCode::NOT_FOUND)
}

async fn toggle_project(State(state): State<AppState>, Path(id): Path<u64>) -> StatusCode {
    let mut db = state.db.write().await;
    match db.projects.get_mut(&id) {
        Some(project) => {
            project.active = !project.active;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

// --- daily ---

async fn add_entry(State(state): State<AppState>, Json(input): Json<DayEntryInput>) -> Response {
    let mut db = state.db.write().await;
    if !db.projects.contains_key(&input.project_id) {
        return (StatusCode::BAD_REQUEST, "project does not exist").into_response();
    }
    let id = db.next_id();
    let entry = DayEntry {
        id,
        project_id: input.project_id,
        task_id: input.task_id,
        spent_at: input.spent_at,
        hours: input.hours,
        notes: input.notes,
        running: false,
    };
    let body = entry.to_json();
    db.entries.insert(id, entry);
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn show_entry(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    let db = state.db.read().await;
    db.entries
        .get(&id)
        .map(|e| Json(e.to_json()))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn toggle_timer(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    let mut db = state.db.write().await;
    let entry = db.entries.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    entry.running = !entry.running;
    Ok(Json(entry.to_json()))
}

async fn delete_entry(State(state): State<AppState>, Path(id): Path<u64>) -> StatusCode {
    let mut db = state.db.write().await;
    db.entries.remove(&id).map(|_| StatusCode::OK).unwrap_or(StatusCode::NOT_FOUND)
}

async fn daily(State(state): State<AppState>, Path((day, year)): Path<(u32, i32)>) -> Result<Json<Value>, StatusCode> {
    let for_day = NaiveDate::from_yo_opt(year, day).ok_or(StatusCode::BAD_REQUEST)?;
    let db = state.db.read().await;
    let entries: Vec<Value> = db
        .entries
        .values()
        .filter(|e| e.spent_at.ordinal() == for_day.ordinal() && e.spent_at.year() == for_day.year())
        .map(DayEntry::to_json)
        .collect();
    let projects: Vec<Value> = db
        .projects
        .values()
        .filter(|p| p.active)
        .map(|p| {
            json!({
                "id": p.id,
                "name": p.name,
                "code": p.code,
                "billable": p.billable,
                "client_id": p.client_id,
                "client": db.clients.get(&p.client_id).map(|c| c.name.clone()),
                "tasks": [],
            })
        })
        .collect();
    Ok(Json(json!({ "for_day": for_day, "day_entries": entries, "projects": projects })))
}

// --- account ---

async fn who_am_i(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "company": {
            "name": "Acme Inc",
            "base_uri": format!("https://{SUBDOMAIN}.harvestapp.com"),
            "full_domain": format!("{SUBDOMAIN}.harvestapp.com"),
            "active": true,
            "week_start_day": "Monday",
            "time_format": "decimal",
            "clock": "24h",
        },
        "user": {
            "id": 1,
            "email": state.account.username,
            "first_name": "Ada",
            "last_name": "Admin",
            "admin": true,
            "timezone": "UTC",
        }
    }))
}
