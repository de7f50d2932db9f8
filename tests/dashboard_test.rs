mod common;

use std::time::Duration;

use actorcharts::{
    config::Config,
    dashboard::{
        Dashboard, ACTOR_DETAILS_FAILED, NO_ACTORS_FOUND, NO_BOX_OFFICE_DATA, NO_POPULAR_ACTORS,
        NO_RATING_DATA, POPULAR_ACTORS_FAILED, SEARCH_FAILED,
    },
    panels::chart_panel::ChartHandle,
    views::chart_view::{BOX_OFFICE_CHART_TITLE, RATING_CHART_TITLE},
};
use common::{closed_base_url, config_for, resource, TestServer};

async fn backend() -> TestServer {
    TestServer::start(|target| match target {
        "/api/popular-actors" => (200, "[]".to_string()),
        t if t.starts_with("/api/search-actor") && t.contains("zzz") => (200, "[]".to_string()),
        t if t.starts_with("/api/search-actor") => (
            200,
            r#"[{"name": "Emma Stone", "id": 2}, {"name": "Emma Watson", "id": 9}]"#.to_string(),
        ),
        "/api/actor/Emma%20Stone" => (200, resource("actor_emma_stone.json")),
        "/api/charts-data/Emma%20Stone" => (200, resource("charts_emma_stone.json")),
        "/api/actor/Quiet%20Actor" => (200, r#"{"name": "Quiet Actor", "movies": []}"#.to_string()),
        "/api/charts-data/Quiet%20Actor" => (200, "{}".to_string()),
        "/api/actor/Broken%20Charts" => (200, r#"{"name": "Broken Charts"}"#.to_string()),
        "/api/charts-data/Broken%20Charts" => (500, r#"{"error": "boom"}"#.to_string()),
        "/api/actor/New%20Face" => (
            200,
            r#"{"name": "New Face", "total_movies": 1,
                "analysis": {"career_score": 12, "productivity": 0, "commercial_success": 0}}"#
                .to_string(),
        ),
        "/api/charts-data/New%20Face" => (200, "{}".to_string()),
        _ => (404, r#"{"error": "Actor not found"}"#.to_string()),
    })
    .await
}

fn dashboard_for(config: Config) -> Dashboard {
    Dashboard::new(config).unwrap()
}

#[tokio::test]
async fn empty_lists_render_placeholders() {
    let server = backend().await;
    let dashboard = dashboard_for(server.config());

    assert!(dashboard.load_popular().await.contains(NO_POPULAR_ACTORS));
    assert!(dashboard
        .search("zzz")
        .await
        .unwrap()
        .contains(NO_ACTORS_FOUND));
}

#[tokio::test]
async fn blank_search_is_not_sent() {
    let server = backend().await;
    let dashboard = dashboard_for(server.config());

    assert!(dashboard.search("   ").await.is_none());
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn search_lists_results() {
    let server = backend().await;
    let dashboard = dashboard_for(server.config());

    let panel = dashboard.search(" emma ").await.unwrap();
    assert!(panel.contains("Emma Stone  (ID: 2)"));
    assert!(panel.contains("Emma Watson  (ID: 9)"));
    assert_eq!(server.requests(), vec!["/api/search-actor?q=emma"]);
}

#[tokio::test]
async fn unreachable_backend_never_fails_the_session() {
    let base_url = closed_base_url().await;
    let mut dashboard = dashboard_for(config_for(&base_url, &[]));

    assert!(dashboard.load_popular().await.contains(POPULAR_ACTORS_FAILED));
    assert!(dashboard.search("emma").await.unwrap().contains(SEARCH_FAILED));
    assert!(dashboard
        .select_actor("Emma Stone".to_string())
        .await
        .contains(ACTOR_DETAILS_FAILED));
}

#[tokio::test]
async fn selecting_an_actor_draws_both_charts() {
    let server = backend().await;
    let mut dashboard = dashboard_for(server.config());

    let panel = dashboard.select_actor("Emma Stone".to_string()).await;

    assert!(panel.contains("Career Score: 72.4/100 (good)"));
    assert!(panel.contains("- Pursue more dramatic roles"));
    assert!(panel.contains(RATING_CHART_TITLE));
    assert!(panel.contains(BOX_OFFICE_CHART_TITLE));
    assert!(panel.contains("Birdman or (The..."));

    let rating_chart = dashboard.rating_panel().chart().unwrap();
    let rendered = rating_chart.render();
    let easy_a = rendered.find("Easy A").unwrap();
    let la_la_land = rendered.find("La La Land").unwrap();
    assert!(easy_a < la_la_land);
    assert!(dashboard.box_office_panel().placeholder().is_none());
}

#[tokio::test]
async fn numeric_productivity_still_shows_details() {
    let server = backend().await;
    let mut dashboard = dashboard_for(server.config());

    let panel = dashboard.select_actor("New Face".to_string()).await;

    assert!(!panel.contains(ACTOR_DETAILS_FAILED));
    assert!(panel.contains("New Face"));
    assert!(panel.contains("Productivity:     0"));
    assert!(panel.contains("Career Score: 12/100"));
}

#[tokio::test]
async fn missing_application_error_is_shown_verbatim() {
    let server = backend().await;
    let mut dashboard = dashboard_for(server.config());

    let panel = dashboard.select_actor("Nobody".to_string()).await;
    assert!(panel.contains("Actor not found"));
}

#[tokio::test]
async fn actor_without_progression_gets_chart_placeholders() {
    let server = backend().await;
    let mut dashboard = dashboard_for(server.config());

    dashboard.select_actor("Emma Stone".to_string()).await;
    assert!(dashboard.rating_panel().chart().is_some());

    let panel = dashboard.select_actor("Quiet Actor".to_string()).await;
    assert!(panel.contains(NO_RATING_DATA));
    assert!(panel.contains(NO_BOX_OFFICE_DATA));
    assert!(dashboard.rating_panel().chart().is_none());
    assert!(dashboard.box_office_panel().chart().is_none());
}

#[tokio::test]
async fn charts_failure_keeps_details() {
    let server = backend().await;
    let mut dashboard = dashboard_for(server.config());

    let panel = dashboard.select_actor("Broken Charts".to_string()).await;
    assert!(panel.contains("Broken Charts"));
    assert_eq!(dashboard.rating_panel().placeholder(), Some(NO_RATING_DATA));
    assert_eq!(
        dashboard.box_office_panel().placeholder(),
        Some(NO_BOX_OFFICE_DATA)
    );
}

#[tokio::test]
async fn superseded_selection_is_dropped() {
    let server = backend().await;
    let mut dashboard = dashboard_for(server.config());

    let first = dashboard.start_selection("Emma Stone".to_string());
    let second = dashboard.start_selection("Quiet Actor".to_string());

    // The newer selection finishes first; the older response arrives late.
    let second = second.await;
    let first = tokio::time::timeout(Duration::from_secs(10), first)
        .await
        .unwrap();

    assert!(dashboard.show_selection(first).is_none());
    let panel = dashboard.show_selection(second).unwrap();
    assert!(panel.contains("Quiet Actor"));
    assert!(dashboard.rating_panel().chart().is_none());
}

#[tokio::test]
async fn selection_exports_series_when_configured() {
    let server = backend().await;
    let export_dir = tempfile::tempdir().unwrap();
    let export_path = export_dir.path().to_str().unwrap().to_string();
    let mut dashboard = dashboard_for(config_for(
        &server.base_url,
        &[
            ("ACTORCHARTS_EXPORT_DIR", export_path.as_str()),
            ("ACTORCHARTS_TOP_N", "2"),
        ],
    ));

    dashboard.select_actor("Emma Stone".to_string()).await;

    let ratings = std::fs::read_to_string(export_dir.path().join("emma_stone_ratings.csv")).unwrap();
    assert_eq!(ratings.lines().count(), 5);
    assert_eq!(ratings.lines().nth(1), Some("2010,7,Easy A"));

    let box_office =
        std::fs::read_to_string(export_dir.path().join("emma_stone_box_office.csv")).unwrap();
    assert_eq!(box_office.lines().count(), 3);
    assert!(box_office.lines().nth(1).unwrap().starts_with("La La Land,449,"));

    let page = std::fs::read_to_string(export_dir.path().join("emma_stone_charts.html")).unwrap();
    assert!(page.contains("<title>Emma Stone</title>"));
    assert!(page.contains("document.getElementById(\"rating-chart\")"));
    assert!(page.contains("document.getElementById(\"box-office-chart\")"));
    assert!(page.contains("\"max\":10"));
}
