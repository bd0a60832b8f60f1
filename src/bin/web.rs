//! Single binary web server: run batch simulations over a REST API.
//! Run with: cargo run --release --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080). SIM_* variables set request defaults.

use actix_web::{
    get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tournament_sim::{
    default_roster, simulate_formats, write_csv, BatchConfig, FormatKind, Report, ReportId,
    ServerConfig, SimulationConfig, WinModel,
};

/// Stored report + last activity time (for auto-cleanup).
struct ReportEntry {
    report: Report,
    last_activity: Instant,
}

/// In-memory reports by id. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<ReportId, ReportEntry>>>;

/// Request defaults taken from SIM_* at startup.
type Defaults = Data<SimulationConfig>;

/// Inactivity threshold: reports not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Upper bound on runs per format for a single request.
const MAX_RUNS: u64 = 1_000_000;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(serde::Serialize)]
struct FormatInfo {
    key: &'static str,
    name: &'static str,
}

#[derive(Deserialize, Default)]
struct SimulationBody {
    #[serde(default)]
    formats: Option<Vec<FormatKind>>,
    #[serde(default)]
    runs: Option<u64>,
    #[serde(default)]
    model: Option<WinModel>,
    #[serde(default)]
    seed: Option<u64>,
}

/// Path segment: report id (e.g. /api/simulations/{id})
#[derive(Deserialize)]
struct ReportPath {
    id: ReportId,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-sim",
    })
}

/// Formats that can be simulated.
#[get("/api/formats")]
async fn api_formats() -> impl Responder {
    let formats: Vec<FormatInfo> = FormatKind::ALL
        .iter()
        .map(|k| FormatInfo {
            key: k.key(),
            name: k.name(),
        })
        .collect();
    HttpResponse::Ok().json(formats)
}

/// Run a batch simulation and store its report (returns it with id).
#[post("/api/simulations")]
async fn api_create_simulation(state: AppState, defaults: Defaults, body: Option<Json<SimulationBody>>) -> HttpResponse {
    let body = body.map(Json::into_inner).unwrap_or_default();
    let formats = body.formats.unwrap_or_else(|| defaults.formats.clone());
    let model = body.model.unwrap_or(defaults.model);
    let batch = BatchConfig {
        runs: body.runs.unwrap_or(defaults.runs).min(MAX_RUNS),
        workers: defaults.workers,
        seed: body.seed.or(defaults.seed),
    };

    let job = tokio::task::spawn_blocking(move || {
        let roster = default_roster(16);
        simulate_formats(&formats, &roster, &model, &batch)
    });
    let report = match job.await {
        Ok(Ok(report)) => report,
        Ok(Err(e)) => return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
        Err(e) => {
            log::error!("simulation task failed: {}", e);
            return HttpResponse::InternalServerError().body("simulation failed");
        }
    };

    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let id = report.id;
    let response = HttpResponse::Ok().json(&report);
    g.insert(
        id,
        ReportEntry {
            report,
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a report by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/simulations/{id}")]
async fn api_get_simulation(state: AppState, path: Path<ReportPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.report)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No report" })),
    }
}

/// Per-seed championship rates of a report as CSV.
#[get("/api/simulations/{id}/csv")]
async fn api_get_simulation_csv(state: AppState, path: Path<ReportPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No report" })),
    };
    entry.last_activity = Instant::now();
    let mut buf = Vec::new();
    match write_csv(&entry.report, &mut buf) {
        Ok(()) => HttpResponse::Ok().content_type("text/csv; charset=utf-8").body(buf),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server = ServerConfig::from_env();
    let defaults = match SimulationConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };
    let bind = (server.host.clone(), server.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<ReportId, ReportEntry>::new()));
    let defaults = Data::new(defaults);

    // Background task: every 30 minutes, remove reports inactive for 12+ hours
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
                log::info!("Cleaned up {} inactive report(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(defaults.clone())
            .service(api_health)
            .service(api_formats)
            .service(api_create_simulation)
            .service(api_get_simulation)
            .service(api_get_simulation_csv)
    })
    .bind(bind)?
    .run()
    .await
}
