mod common;

use axum::http::StatusCode;
use pearldecor_core::UserRole;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

use common::{
    create_test_admin, create_test_client, get_request, json_request, read_json, setup_test_app,
    token_for,
};

async fn count_rows(pool: &PgPool, table: &str, client_id: i32) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {} WHERE client_id = $1", table);
    sqlx::query_scalar(&sql)
        .bind(client_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_note_and_list(pool: PgPool) {
    let (admin, _) = create_test_admin(&pool).await;
    let (client_user, client_id) = create_test_client(&pool, "Rosa").await;
    let admin_token = token_for(admin.id, UserRole::Admin);

    let before: chrono::DateTime<chrono::Utc> = sqlx::query_scalar(
        "UPDATE client_details SET updated_at = NOW() - INTERVAL '1 day' WHERE id = $1 RETURNING updated_at",
    )
    .bind(client_id)
    .fetch_one(&pool)
    .await
    .unwrap();

    let response = setup_test_app(pool.clone())
        .oneshot(json_request(
            "POST",
            &format!("/clients/{}/add_note", client_id),
            Some(&admin_token),
            &json!({"note": "Prefers ivory linens"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Note added to client");

    let after: chrono::DateTime<chrono::Utc> =
        sqlx::query_scalar("SELECT updated_at FROM client_details WHERE id = $1")
            .bind(client_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(after > before + chrono::Duration::hours(23));

    // Any authenticated user can read the notes.
    let client_token = token_for(client_user.id, UserRole::Client);
    let response = setup_test_app(pool.clone())
        .oneshot(get_request(
            &format!("/clients/{}/notes", client_id),
            Some(&client_token),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let notes = body["notes"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["note"], "Prefers ivory linens");
    assert_eq!(notes[0]["employee_id"], admin.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_client_is_not_found(pool: PgPool) {
    let (admin, _) = create_test_admin(&pool).await;
    let token = token_for(admin.id, UserRole::Admin);

    for request in [
        get_request("/clients/9999/notes", Some(&token)),
        get_request("/clients/9999/feedbacks", Some(&token)),
        get_request("/clients/9999/report", Some(&token)),
        json_request("POST", "/clients/9999/add_note", Some(&token), &json!({"note": "x"})),
    ] {
        let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = read_json(response).await;
        assert_eq!(body["message"], "Client not found");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_owner_can_submit_feedback(pool: PgPool) {
    let (client_user, client_id) = create_test_client(&pool, "Rosa").await;
    let token = token_for(client_user.id, UserRole::Client);

    let response = setup_test_app(pool.clone())
        .oneshot(json_request(
            "POST",
            &format!("/clients/{}/feedback", client_id),
            Some(&token),
            &json!({"feedback": "Lovely centrepieces"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Feedback submitted");

    let response = setup_test_app(pool.clone())
        .oneshot(get_request(
            &format!("/clients/{}/feedbacks", client_id),
            Some(&token),
        ))
        .await
        .unwrap();

    let body = read_json(response).await;
    let feedbacks = body["feedbacks"].as_array().unwrap();
    assert_eq!(feedbacks.len(), 1);
    assert_eq!(feedbacks[0]["feedback"], "Lovely centrepieces");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_non_owner_feedback_is_not_found_and_not_written(pool: PgPool) {
    let (_, client_id) = create_test_client(&pool, "Rosa").await;
    let (intruder, _) = create_test_client(&pool, "Other").await;
    let token = token_for(intruder.id, UserRole::Client);

    let response = setup_test_app(pool.clone())
        .oneshot(json_request(
            "POST",
            &format!("/clients/{}/feedback", client_id),
            Some(&token),
            &json!({"feedback": "Not mine to give"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Client not found or unauthorized");
    assert_eq!(count_rows(&pool, "feedbacks", client_id).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_report_counts_match_recorded_items(pool: PgPool) {
    let (admin, _) = create_test_admin(&pool).await;
    let (client_user, client_id) = create_test_client(&pool, "Rosa").await;
    let admin_token = token_for(admin.id, UserRole::Admin);
    let client_token = token_for(client_user.id, UserRole::Client);

    for details in ["Wedding package", "Reception florals"] {
        let response = setup_test_app(pool.clone())
            .oneshot(json_request(
                "POST",
                &format!("/clients/{}/contracts", client_id),
                Some(&admin_token),
                &json!({"contract_details": details}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = setup_test_app(pool.clone())
        .oneshot(json_request(
            "POST",
            &format!("/clients/{}/feedback", client_id),
            Some(&client_token),
            &json!({"feedback": "Great first call"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    for note in ["Call back Monday", "Budget confirmed", "Venue booked"] {
        let response = setup_test_app(pool.clone())
            .oneshot(json_request(
                "POST",
                &format!("/clients/{}/add_note", client_id),
                Some(&admin_token),
                &json!({"note": note}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = setup_test_app(pool.clone())
        .oneshot(get_request(
            &format!("/clients/{}/report", client_id),
            Some(&admin_token),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["client"]["name"], "Rosa");
    assert_eq!(body["contracts"].as_array().unwrap().len(), 2);
    assert_eq!(body["feedbacks"].as_array().unwrap().len(), 1);
    assert_eq!(body["meetings"].as_array().unwrap().len(), 0);
    assert_eq!(body["notes"].as_array().unwrap().len(), 3);
    assert_eq!(body["contracts"][0]["details"], "Wedding package");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_meeting_defaults_to_scheduling_admin(pool: PgPool) {
    // Client first, so the admin's user id differs from its employee row id.
    let (_, client_id) = create_test_client(&pool, "Rosa").await;
    let (admin, employee_row_id) = create_test_admin(&pool).await;
    assert_ne!(admin.id, employee_row_id);
    let token = token_for(admin.id, UserRole::Admin);

    let response = setup_test_app(pool.clone())
        .oneshot(json_request(
            "POST",
            &format!("/clients/{}/meetings", client_id),
            Some(&token),
            &json!({"scheduled_at": "2024-05-01T10:00:00Z", "details": "Venue walkthrough"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let response = setup_test_app(pool.clone())
        .oneshot(get_request(&format!("/clients/{}/report", client_id), Some(&token)))
        .await
        .unwrap();
    let body = read_json(response).await;
    let meetings = body["meetings"].as_array().unwrap();
    assert_eq!(meetings.len(), 1);
    assert_eq!(meetings[0]["employee_id"], admin.id);
    assert_eq!(meetings[0]["details"], "Venue walkthrough");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_meeting_with_unknown_employee_is_not_found(pool: PgPool) {
    let (admin, _) = create_test_admin(&pool).await;
    let (_, client_id) = create_test_client(&pool, "Rosa").await;
    let token = token_for(admin.id, UserRole::Admin);

    let response = setup_test_app(pool.clone())
        .oneshot(json_request(
            "POST",
            &format!("/clients/{}/meetings", client_id),
            Some(&token),
            &json!({"scheduled_at": "2024-05-01T10:00:00Z", "employee_id": 4242}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Employee not found");
    assert_eq!(count_rows(&pool, "meetings", client_id).await, 0);
}
