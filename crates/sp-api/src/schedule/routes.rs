use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use sp_db::{
    models::{NewStudySession, StudySession},
    repositories::session,
};
use sp_scheduler::{ExistingBooking, ScheduleError};
use uuid::Uuid;

use crate::{
    ApiState,
    error::ApiError,
    metrics::{GenerationOutcome, record_schedule_generation},
    validation,
};

use super::model::{GenerateScheduleRequest, GenerateScheduleResponse, SessionRangeQuery};

/// Create the schedule routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route(
            "/study-plans/{study_plan_id}/schedule",
            post(generate_schedule),
        )
        .route("/users/{user_id}/sessions", get(list_sessions))
}

/// Generate and persist a study schedule.
///
/// The request is checked before any database work. Generation then runs
/// inside a transaction holding the user's schedule lock, so the booking
/// snapshot can't go stale before the new sessions are written. Sessions are
/// committed all together or not at all.
async fn generate_schedule(
    State(state): State<ApiState>,
    Path(study_plan_id): Path<Uuid>,
    Json(payload): Json<GenerateScheduleRequest>,
) -> Result<(StatusCode, Json<GenerateScheduleResponse>), ApiError> {
    let request = payload.into_schedule_request(study_plan_id);
    let user_id = request.user_id;

    let checked = validation::validate_schedule_range(
        request.start_date,
        request.end_date,
        state.schedule_max_range_days,
    )
    .and_then(|()| sp_scheduler::validate_request(&request).map_err(ApiError::from));
    if let Err(e) = checked {
        tracing::debug!(%user_id, %study_plan_id, error = %e, "Rejected schedule request");
        record_schedule_generation(GenerationOutcome::Rejected, 0, 0.0);
        return Err(e);
    }

    let mut tx = state.pool.begin().await?;
    session::lock_user_schedule(&mut *tx, user_id).await?;

    let existing: Vec<ExistingBooking> =
        session::list_bookings_in_range(&mut *tx, user_id, request.start_date, request.end_date)
            .await?
            .into_iter()
            .map(ExistingBooking::from)
            .collect();

    let started = Instant::now();
    let generated = sp_scheduler::generate(&request, &existing);
    let elapsed = started.elapsed().as_secs_f64();

    let generated = match generated {
        Ok(sessions) => sessions,
        Err(e) => {
            let outcome = if matches!(e, ScheduleError::Unsatisfiable) {
                GenerationOutcome::Unsatisfiable
            } else {
                GenerationOutcome::Rejected
            };
            tracing::info!(
                %user_id,
                %study_plan_id,
                existing = existing.len(),
                outcome = outcome.as_str(),
                "Schedule generation failed"
            );
            record_schedule_generation(outcome, 0, elapsed);
            // Dropping the transaction rolls it back and releases the lock
            return Err(e.into());
        }
    };

    let mut stored: Vec<StudySession> = Vec::with_capacity(generated.len());
    for generated_session in &generated {
        let row = session::insert_session(&mut *tx, &NewStudySession::from(generated_session))
            .await?;
        stored.push(row);
    }
    tx.commit().await?;

    let total_hours: f64 = stored.iter().map(|s| s.duration_hours).sum();
    tracing::info!(
        %user_id,
        %study_plan_id,
        existing = existing.len(),
        sessions = stored.len(),
        total_hours,
        "Schedule generated"
    );
    record_schedule_generation(GenerationOutcome::Success, stored.len(), elapsed);

    Ok((
        StatusCode::CREATED,
        Json(GenerateScheduleResponse {
            study_plan_id,
            total_hours,
            sessions: stored,
        }),
    ))
}

async fn list_sessions(
    State(state): State<ApiState>,
    Path(user_id): Path<Uuid>,
    Query(range): Query<SessionRangeQuery>,
) -> Result<Json<Vec<StudySession>>, ApiError> {
    validation::validate_listing_range(range.start, range.end)?;

    let sessions =
        session::list_sessions_in_range(&state.pool, user_id, range.start, range.end).await?;

    Ok(Json(sessions))
}
