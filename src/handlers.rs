use actix_web::{web, HttpResponse, Responder};
use log::error;

use crate::domain::pipeline::run_model;
use crate::domain::solver::Solver;
use crate::models::ModelRequest;

// ---------- Route handlers ----------

/// POST /run
pub async fn run(req: web::Json<ModelRequest>, solver: web::Data<dyn Solver>) -> impl Responder {
    let request = req.into_inner();

    // The solve blocks for as long as the solver needs, keep it off the workers
    let result = web::block(move || run_model(&request, solver.get_ref())).await;

    match result {
        Ok(Ok(response)) => HttpResponse::Ok().json(response),
        Ok(Err(input_error)) => HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": input_error.to_string() })),
        Err(blocking_error) => {
            error!("Model run did not complete: {}", blocking_error);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Something went wrong" }))
        }
    }
}

/// GET /health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

/// GET /docs
pub async fn docs() -> impl Responder {
    let docs_html = include_str!("../static/docs.html");
    HttpResponse::Ok()
        .content_type("text/html")
        .body(docs_html)
}

/// GET / - Redirect to docs
pub async fn root_redirect() -> impl Responder {
    HttpResponse::Found()
        .append_header(("Location", "/docs"))
        .finish()
}

/// JSON extractor settings; malformed bodies become 400 with an `error` field
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _| {
            let err_string = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(serde_json::json!({ "error": err_string })),
            )
            .into()
        })
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root_redirect))
        .route("/run", web::post().to(run))
        .route("/health", web::get().to(health_check))
        .route("/docs", web::get().to(docs));
}
