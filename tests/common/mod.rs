//! Shared fixtures for the API Challenges suite: endpoint URLs, the tracking
//! token, and a scripted HTTP collaborator modeling the remote services so
//! the suite runs without network access.

use serde_json::{json, Value};
use verisnap::http::{ApiResponse, Method, ScriptedClient};

pub const URL: &str = "https://apichallenges.herokuapp.com/";
pub const URL_ZIP: &str = "http://api.zippopotam.us/fi/00380";

pub const TRACKING_CODE: &str = "e0a13374-e994-4522-830e-16933f345a55";

pub fn todos_url() -> String {
    format!("{URL}todos")
}

pub fn challenges_url() -> String {
    format!("{URL}challenges")
}

pub fn challenger_url() -> String {
    format!("{URL}challenger")
}

/// Body served by the postal-code lookup for `fi/00380`.
pub fn zip_body() -> Value {
    json!({
        "post code": "00380",
        "country": "Finland",
        "country abbreviation": "FI",
        "places": [
            {
                "place name": "Helsinki",
                "longitude": "24.8957",
                "state": "Uusimaa",
                "state abbreviation": "",
                "latitude": "60.2052"
            }
        ]
    })
}

fn challenges_body() -> Value {
    json!({
        "challenges": [
            {
                "id": 1,
                "name": "POST /challenger (201)",
                "description": "Issue a POST request on the `/challenger` end point, with no body, to create a new challenger session",
                "status": true
            },
            {
                "id": 2,
                "name": "GET /challenges (200)",
                "description": "Issue a GET request on the `/challenges` end point",
                "status": true
            },
            {
                "id": 3,
                "name": "GET /todos (200)",
                "description": "Issue a GET request on the `/todos` end point",
                "status": false
            }
        ]
    })
}

fn todos_body() -> Value {
    json!({
        "todos": [
            {"id": 2, "title": "file paperwork", "doneStatus": true, "description": ""},
            {"id": 4, "title": "process payments", "doneStatus": false, "description": ""},
            {"id": 7, "title": "scan paperwork", "doneStatus": false, "description": ""}
        ]
    })
}

fn todo_4_body() -> Value {
    json!({
        "todos": [
            {"id": 4, "title": "process payments", "doneStatus": false, "description": ""}
        ]
    })
}

fn todos_not_done_body() -> Value {
    json!({
        "todos": [
            {"id": 4, "title": "process payments", "doneStatus": false, "description": ""},
            {"id": 7, "title": "scan paperwork", "doneStatus": false, "description": ""}
        ]
    })
}

/// Scripted collaborator covering every route the suite exercises.
pub fn challenge_client() -> ScriptedClient {
    let zip_response = ApiResponse::new(200)
        .with_header("Date", "Tue, 05 May 2020 18:00:00 GMT")
        .with_header("Last-Modified", "Tue, 05 May 2020 17:32:10 GMT")
        .with_header("Server", "cloudflare")
        .with_json(&zip_body());

    ScriptedClient::new()
        .route(Method::Get, URL_ZIP, zip_response)
        .route(
            Method::Post,
            challenger_url(),
            ApiResponse::new(201).with_header("X-CHALLENGER", TRACKING_CODE),
        )
        .route(
            Method::Get,
            challenges_url(),
            ApiResponse::new(200).with_json(&challenges_body()),
        )
        .route(
            Method::Get,
            todos_url(),
            ApiResponse::new(200).with_json(&todos_body()),
        )
        .route(Method::Get, format!("{URL}todo"), ApiResponse::new(404))
        .route(
            Method::Get,
            format!("{}/4", todos_url()),
            ApiResponse::new(200).with_json(&todo_4_body()),
        )
        .route(Method::Get, format!("{}/40", todos_url()), ApiResponse::new(404))
        .route(
            Method::Get,
            format!("{}?doneStatus=false", todos_url()),
            ApiResponse::new(200).with_json(&todos_not_done_body()),
        )
}
