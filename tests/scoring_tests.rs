// tests/scoring_tests.rs

use std::sync::Arc;

use leadscope_backend::{
    config::Config, models::question::QuestionBank, routes, state::AppState, store::SessionStore,
};

async fn spawn_app() -> String {
    let config = Config {
        port: 0,
        rust_log: "error".to_string(),
        session_ttl_secs: 600,
        frontend_origin: "http://localhost:5173".to_string(),
    };

    let state = AppState {
        bank: Arc::new(QuestionBank::builtin()),
        sessions: SessionStore::new(),
        config,
    };

    let app = routes::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

async fn create_session(client: &reqwest::Client, address: &str) -> String {
    let body = client
        .post(&format!("{}/api/sessions", address))
        .send()
        .await
        .unwrap()
        .json::<serde_json::Value>()
        .await
        .unwrap();
    body["session_id"].as_str().unwrap().to_string()
}

async fn current_view(client: &reqwest::Client, address: &str, id: &str) -> serde_json::Value {
    client
        .get(&format!("{}/api/sessions/{}", address, id))
        .send()
        .await
        .unwrap()
        .json::<serde_json::Value>()
        .await
        .unwrap()
}

async fn answer(client: &reqwest::Client, address: &str, id: &str, option_index: usize) {
    let response = client
        .post(&format!("{}/api/sessions/{}/answer", address, id))
        .json(&serde_json::json!({"option_index": option_index}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

async fn next(client: &reqwest::Client, address: &str, id: &str) -> serde_json::Value {
    client
        .post(&format!("{}/api/sessions/{}/next", address, id))
        .send()
        .await
        .unwrap()
        .json::<serde_json::Value>()
        .await
        .unwrap()
}

async fn results(client: &reqwest::Client, address: &str, id: &str) -> serde_json::Value {
    client
        .get(&format!("{}/api/sessions/{}/results", address, id))
        .send()
        .await
        .unwrap()
        .json::<serde_json::Value>()
        .await
        .unwrap()
}

/// Walks the whole quiz answering every question with `pick(options_len)`.
/// Returns the final view (the results screen).
async fn run_through(
    client: &reqwest::Client,
    address: &str,
    id: &str,
    pick: impl Fn(usize) -> Option<usize>,
) -> serde_json::Value {
    let mut view = current_view(client, address, id).await;
    while view["stage"] == "question" {
        let options = view["question"]["options"].as_array().unwrap().len();
        if let Some(index) = pick(options) {
            answer(client, address, id, index).await;
        }
        view = next(client, address, id).await;
    }
    view
}

#[tokio::test]
async fn top_answers_reach_full_marks_on_every_dimension() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let id = create_session(&client, &address).await;

    // Act: always choose the highest option
    let view = run_through(&client, &address, &id, |options| Some(options - 1)).await;

    // Assert: normalization puts every dimension at exactly 100%
    assert_eq!(view["stage"], "results");
    let report = &view["report"];
    for entry in report["dimensions"].as_array().unwrap() {
        let percent = entry["percent"].as_f64().unwrap();
        assert!(
            (percent - 100.0).abs() < 1e-9,
            "{} reported {}%",
            entry["code"],
            percent
        );
    }
    for value in report["chart"]["values"].as_array().unwrap() {
        assert!((value.as_f64().unwrap() - 100.0).abs() < 1e-9);
    }
}

#[tokio::test]
async fn skipping_every_question_scores_zero() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let id = create_session(&client, &address).await;

    // Act: never answer, just pass through
    let view = run_through(&client, &address, &id, |_| None).await;

    // Assert
    assert_eq!(view["stage"], "results");
    for entry in view["report"]["dimensions"].as_array().unwrap() {
        assert_eq!(entry["score"].as_f64().unwrap(), 0.0);
        assert_eq!(entry["percent"].as_f64().unwrap(), 0.0);
        assert!(entry["recommendation"].as_str().is_some());
    }
}

#[tokio::test]
async fn re_answering_matches_a_single_clean_answer() {
    // Arrange: two sessions, one of which changes its mind on question 1
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let wavering = create_session(&client, &address).await;
    let decisive = create_session(&client, &address).await;

    // Act
    answer(&client, &address, &wavering, 1).await;
    answer(&client, &address, &wavering, 2).await;
    answer(&client, &address, &wavering, 3).await;
    let wavering_results = run_through(&client, &address, &wavering, |_| None).await;

    answer(&client, &address, &decisive, 3).await;
    let decisive_results = run_through(&client, &address, &decisive, |_| None).await;

    // Assert: only the final choice contributes; earlier clicks leave no trace
    assert_eq!(wavering_results["report"], decisive_results["report"]);
}

#[tokio::test]
async fn results_expose_scores_chart_and_recommendations() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let id = create_session(&client, &address).await;

    // Act: a mixed run, then fetch the report directly
    run_through(&client, &address, &id, |options| Some(options / 2)).await;
    let report = results(&client, &address, &id).await;

    // Assert
    let dimensions = report["dimensions"].as_array().unwrap();
    assert_eq!(dimensions.len(), 6);
    for entry in dimensions {
        let percent = entry["percent"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&percent));
        assert!(entry["score"].as_f64().unwrap() >= 0.0);
        assert!(entry["name"].as_str().is_some());
        assert!(entry["recommendation"].as_str().is_some());
    }
    let axes = report["chart"]["axes"].as_array().unwrap();
    let values = report["chart"]["values"].as_array().unwrap();
    assert_eq!(axes.len(), 6);
    assert_eq!(values.len(), 6);
    assert_eq!(axes[0], "Strategic Leadership");
    assert_eq!(report["chart"]["max"].as_f64().unwrap(), 100.0);
}

#[tokio::test]
async fn reset_starts_a_fresh_attempt() {
    // Arrange: complete a full run with top answers
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let id = create_session(&client, &address).await;
    run_through(&client, &address, &id, |options| Some(options - 1)).await;

    // Act
    let view = client
        .post(&format!("{}/api/sessions/{}/reset", address, id))
        .send()
        .await
        .unwrap()
        .json::<serde_json::Value>()
        .await
        .unwrap();

    // Assert: back to the first question with nothing carried over
    assert_eq!(view["stage"], "question");
    assert_eq!(view["progress"]["position"], 1);
    assert_eq!(view["progress"]["answered"], 0);
    assert_eq!(view["selected_option"], serde_json::Value::Null);

    // A pass-through run after reset scores zero everywhere
    let rerun = run_through(&client, &address, &id, |_| None).await;
    for entry in rerun["report"]["dimensions"].as_array().unwrap() {
        assert_eq!(entry["percent"].as_f64().unwrap(), 0.0);
    }
}
