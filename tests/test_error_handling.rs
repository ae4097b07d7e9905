use mealdb::{MealDb, MealDbError};
use mockito::Matcher;

#[tokio::test]
async fn test_unreachable_server_is_a_fetch_error() {
    // Port 1 is never listening.
    let client = MealDb::with_base_url("http://127.0.0.1:1");
    let result = client.random().await;

    assert!(matches!(result, Err(MealDbError::FetchError(_))));
}

#[tokio::test]
async fn test_non_json_body_is_a_parse_error() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/random.php")
        .with_status(404)
        .with_header("content-type", "text/html")
        .with_body("<html><body><h1>404 Not Found</h1></body></html>")
        .create();

    let client = MealDb::with_base_url(server.url());
    let result = client.random().await;

    assert!(matches!(result, Err(MealDbError::ParseError(_))));
}

#[tokio::test]
async fn test_server_error_with_null_meals_is_no_results() {
    let mut server = mockito::Server::new_async().await;

    // The status line is not consulted; only the body shape counts.
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals":null}"#)
        .create();

    let client = MealDb::with_base_url(server.url());
    let result = client.search("anything").await;

    assert!(matches!(result, Err(MealDbError::NoResults)));
}

#[tokio::test]
async fn test_empty_body_is_no_results() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/random.php")
        .with_status(200)
        .with_body("")
        .create();

    let client = MealDb::with_base_url(server.url());
    let result = client.random().await;

    assert!(matches!(result, Err(MealDbError::NoResults)));
}

#[tokio::test]
async fn test_empty_string_payload_is_no_results() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals":""}"#)
        .create();

    let client = MealDb::with_base_url(server.url());
    let result = client.search("anything").await;

    assert!(matches!(result, Err(MealDbError::NoResults)));
}

#[tokio::test]
async fn test_missing_payload_field_is_no_results() {
    let mut server = mockito::Server::new_async().await;

    // categories.php answered with a meals envelope.
    let _m = server
        .mock("GET", "/categories.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals":[{"idMeal":"52771"}]}"#)
        .create();

    let client = MealDb::with_base_url(server.url());
    let result = client.meal_categories().await;

    assert!(matches!(result, Err(MealDbError::NoResults)));
}

#[tokio::test]
async fn test_no_results_display_message() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals":null}"#)
        .create();

    let client = MealDb::with_base_url(server.url());
    let err = client.search("zzzzz").await.unwrap_err();

    assert_eq!(err.to_string(), "no results found");
}

#[tokio::test]
async fn test_fetch_error_display_includes_the_cause() {
    let client = MealDb::with_base_url("http://127.0.0.1:1");
    let err = client.random().await.unwrap_err();

    assert!(err.to_string().starts_with("Failed to fetch from the API:"));
}
