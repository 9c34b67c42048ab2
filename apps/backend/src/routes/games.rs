//! Game HTTP routes: start, inspect, answer, play again.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{GameSession, Outcome, PlayerName};
use crate::error::AppError;
use crate::extractors::{parse_player_name, PlayerPath, ValidatedJson};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct StartGameRequest {
    player_name: String,
}

#[derive(Debug, Deserialize)]
struct AnswerRequest {
    answer: String,
}

/// Public view of a session.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub player_name: String,
    pub level: u32,
    pub sequence: Vec<u32>,
    pub game_over: bool,
}

impl SessionView {
    fn new(name: &PlayerName, session: &GameSession) -> Self {
        Self {
            player_name: name.to_string(),
            level: session.level(),
            sequence: session.sequence().to_vec(),
            game_over: session.is_game_over(),
        }
    }
}

/// `{correct: true, level, sequence}` or `{correct: false, final_score, correct_sequence}`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnswerResponse {
    Correct {
        correct: bool,
        level: u32,
        sequence: Vec<u32>,
    },
    Incorrect {
        correct: bool,
        final_score: i64,
        correct_sequence: Vec<u32>,
    },
}

impl From<Outcome> for AnswerResponse {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Advanced { level, sequence } => AnswerResponse::Correct {
                correct: true,
                level,
                sequence,
            },
            Outcome::GameOver {
                final_score,
                correct_sequence,
            } => AnswerResponse::Incorrect {
                correct: false,
                final_score,
                correct_sequence,
            },
        }
    }
}

/// POST /api/games
async fn start_game(
    body: ValidatedJson<StartGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let name = parse_player_name(&body.player_name)?;
    let session = app_state.games.start_game(&name).await;
    Ok(HttpResponse::Created().json(SessionView::new(&name, &session)))
}

/// GET /api/games/{player_name}
async fn get_game(
    player: PlayerPath,
    app_state: web::Data<AppState>,
) -> Result<web::Json<SessionView>, AppError> {
    let name = player.into_inner();
    let session = app_state.games.session(&name)?;
    Ok(web::Json(SessionView::new(&name, &session)))
}

/// POST /api/games/{player_name}/answer
///
/// Wrong or unparsable answers are a 200 with `correct: false`.
async fn submit_answer(
    player: PlayerPath,
    body: ValidatedJson<AnswerRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<AnswerResponse>, AppError> {
    let name = player.into_inner();
    let submission = app_state.games.submit_answer(&name, &body.answer)?;
    Ok(web::Json(AnswerResponse::from(submission.outcome)))
}

/// POST /api/games/{player_name}/restart
async fn restart_game(
    player: PlayerPath,
    app_state: web::Data<AppState>,
) -> Result<web::Json<SessionView>, AppError> {
    let name = player.into_inner();
    let session = app_state.games.play_again(&name);
    Ok(web::Json(SessionView::new(&name, &session)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(start_game)))
        .service(web::resource("/{player_name}").route(web::get().to(get_game)))
        .service(web::resource("/{player_name}/answer").route(web::post().to(submit_answer)))
        .service(web::resource("/{player_name}/restart").route(web::post().to(restart_game)));
}
