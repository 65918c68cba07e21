use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderValue, Method, StatusCode},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use kociemba::facelet::FaceCube;
use kociemba::scramble::{random_scramble, scramble_to_str};
use kociemba::solver::{solve, SolveOptions, Tables};
use kociemba::{serialize::serialize, CubieCube};

#[tokio::main]
async fn main() {
    println!("Building move and pruning tables...");
    let tables = Arc::new(Tables::new().expect("table construction is a fixed deterministic computation"));

    let cors = CorsLayer::new()
        .allow_origin("http://127.0.0.1:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET]);

    let app = Router::new()
        .route("/", get(index))
        .route("/solve/:facelets", get(solve_handler))
        .route("/scramble", get(scramble_handler))
        .fallback(index)
        .layer(cors)
        .with_state(tables);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:32125")
        .await
        .unwrap();
    println!("listening on http://{}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}

async fn index() -> Html<&'static str> {
    Html(
        "<p>Solve a cube: http://localhost:32125/solve/&lt;54-character facelet string&gt;</p>\
         <p>Get a scramble: <a href=\"http://localhost:32125/scramble\">http://localhost:32125/scramble</a></p>",
    )
}

#[derive(Serialize)]
struct ScrambleResponse {
    scramble: String,
}

async fn scramble_handler() -> Json<ScrambleResponse> {
    let moves = random_scramble(25);
    Json(ScrambleResponse {
        scramble: scramble_to_str(&moves),
    })
}

#[derive(Serialize)]
struct SolveResponse {
    solution: String,
    move_count: usize,
}

async fn solve_handler(
    Path(facelets): Path<String>,
    State(tables): State<Arc<Tables>>,
) -> Result<Json<SolveResponse>, (StatusCode, String)> {
    let bad_request = |msg: String| (StatusCode::BAD_REQUEST, msg);

    let face_cube = FaceCube::try_from(facelets.as_str()).map_err(|e| bad_request(e.to_string()))?;
    let cube = CubieCube::try_from(&face_cube).map_err(|e| bad_request(e.to_string()))?;

    let solution = solve(&cube, &tables, &SolveOptions::default())
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    Ok(Json(SolveResponse {
        solution: serialize(&solution),
        move_count: solution.len(),
    }))
}
