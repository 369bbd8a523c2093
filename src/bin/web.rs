//! Single binary web server: schedule sessions via REST, JSON in and out.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tennis_schedule_web::{
    extend_session, start_session, CourtConfig, FixedPair, Group, Pattern, Player,
    ScheduleSession, SessionId,
};

/// Per-session entry: schedule data + its RNG + last activity time (for auto-cleanup).
struct SessionEntry {
    session: ScheduleSession,
    /// Session-local randomness; seeding it makes the whole schedule reproducible.
    rng: StdRng,
    last_activity: Instant,
}

/// In-memory state: many sessions by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<SessionId, SessionEntry>>>;

/// Inactivity threshold: sessions not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Pool and court limits enforced at the API boundary (the engine assumes them).
const MIN_PLAYERS: u32 = 2;
const MAX_PLAYERS: u32 = 50;
const MAX_COURTS: u32 = 5;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateSessionBody {
    /// Players are registered as P1..Pn with ids 1..=n.
    player_count: u32,
    /// Optional group per player, parallel to ids 1..=player_count.
    #[serde(default)]
    groups: Vec<Group>,
    #[serde(default)]
    singles_courts: u32,
    #[serde(default)]
    doubles_courts: u32,
    #[serde(default)]
    pattern: Pattern,
    #[serde(default)]
    fixed_pairs: Vec<FixedPair>,
    /// Fixed seed for a reproducible schedule; omitted means entropy-seeded.
    seed: Option<u64>,
}

/// Path segment: session id (e.g. /api/sessions/{id})
#[derive(Deserialize)]
struct SessionPath {
    id: SessionId,
}

/// Caller-side validation the engine does not re-check.
fn validate_create(body: &CreateSessionBody) -> Result<(), String> {
    if body.player_count < MIN_PLAYERS || body.player_count > MAX_PLAYERS {
        return Err(format!(
            "Player count must be between {} and {}",
            MIN_PLAYERS, MAX_PLAYERS
        ));
    }
    if body.singles_courts > MAX_COURTS || body.doubles_courts > MAX_COURTS {
        return Err(format!("At most {} courts per kind", MAX_COURTS));
    }
    let total = body.singles_courts + body.doubles_courts;
    if total == 0 || total > MAX_COURTS {
        return Err(format!("Total courts must be between 1 and {}", MAX_COURTS));
    }
    let required = body.singles_courts * 2 + body.doubles_courts * 4;
    if required > body.player_count {
        return Err(format!(
            "Court configuration needs {} players but only {} registered",
            required, body.player_count
        ));
    }
    if !body.groups.is_empty() && body.groups.len() != body.player_count as usize {
        return Err("Group list must have one entry per player".to_string());
    }
    if body.pattern != Pattern::Random && !body.groups.iter().any(|g| *g != Group::None) {
        return Err("Separate and mixed patterns require group assignments".to_string());
    }
    Ok(())
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tennis-schedule-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a session and generate its first three rounds
/// (client stores the returned id for subsequent requests).
#[post("/api/sessions")]
async fn api_create_session(state: AppState, body: Json<CreateSessionBody>) -> HttpResponse {
    if let Err(msg) = validate_create(&body) {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": msg }));
    }
    let players: Vec<Player> = (1..=body.player_count)
        .map(|id| {
            let group = body
                .groups
                .get(id as usize - 1)
                .copied()
                .unwrap_or(Group::None);
            Player::with_group(id, format!("P{}", id), group)
        })
        .collect();
    let court_config = CourtConfig {
        singles: body.singles_courts,
        doubles: body.doubles_courts,
    };
    let mut session =
        match ScheduleSession::new(players, court_config, body.pattern, body.fixed_pairs.clone()) {
            Ok(s) => s,
            Err(e) => {
                return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
            }
        };
    let mut rng = match body.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    if let Err(e) = start_session(&mut session, &mut rng) {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
    }
    let id = session.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        SessionEntry {
            session,
            rng,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(&g.get(&id).unwrap().session)
}

/// Get a session by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/sessions/{id}")]
async fn api_get_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.session)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    }
}

/// Generate the next batch of three rounds for a session.
#[post("/api/sessions/{id}/rounds")]
async fn api_extend_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    match extend_session(&mut entry.session, &mut entry.rng) {
        Ok(()) => HttpResponse::Ok().json(&entry.session),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Per-player participation summary over the session's rounds.
#[get("/api/sessions/{id}/players")]
async fn api_session_players(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(entry.session.player_summaries())
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    }
}

/// Drop a session.
#[delete("/api/sessions/{id}")]
async fn api_delete_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(&path.id) {
        Some(_) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<SessionId, SessionEntry>::new()));

    // Background task: every 30 minutes, remove sessions inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!(
                    "Cleaned up {} inactive session(s) (no activity for 12h)",
                    removed
                );
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_create_session)
            .service(api_get_session)
            .service(api_extend_session)
            .service(api_session_players)
            .service(api_delete_session)
    })
    .bind(bind)?
    .run()
    .await
}
