mod common;

use anyhow::Result;
use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::json;

use algoviz::remote::{CatalogApi, CatalogClient};

fn catalog_router() -> axum::Router {
    axum::Router::new()
        .route(
            "/categories",
            get(|| async {
                Json(json!({
                    "categories": [
                        {"key": "sorting", "name": "Sorting"},
                        {"key": "search", "name": "Search"},
                    ]
                }))
            }),
        )
        .route(
            "/algorithms/:category/:algorithm",
            get(
                |Path((category, algorithm)): Path<(String, String)>| async move {
                    if category == "sorting" && algorithm == "bubble-sort" {
                        Json(json!({
                            "algorithm": {
                                "titles": ["Sorting", "Bubble Sort"],
                                "files": [
                                    {
                                        "name": "README.md",
                                        "content": "# Bubble Sort\n\nSwap adjacent elements until sorted.\n"
                                    },
                                    {"name": "code.js", "content": "// bubble sort\n"}
                                ]
                            }
                        }))
                        .into_response()
                    } else {
                        StatusCode::NOT_FOUND.into_response()
                    }
                },
            ),
        )
}

#[test]
fn categories_and_algorithm_fetch() -> Result<()> {
    let service = common::spawn(catalog_router())?;
    let client = CatalogClient::new(service.base_url.clone())?;

    let categories = client.get_categories()?;
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].key, "sorting");
    assert_eq!(categories[0].name, "Sorting");

    let algorithm = client.get_algorithm("sorting", "bubble-sort")?;
    assert_eq!(algorithm.titles, vec!["Sorting", "Bubble Sort"]);
    assert_eq!(algorithm.files.len(), 2);
    assert_eq!(algorithm.files[1].name, "code.js");

    Ok(())
}

#[test]
fn unknown_algorithm_is_an_error() -> Result<()> {
    let service = common::spawn(catalog_router())?;
    let client = CatalogClient::new(service.base_url.clone())?;

    assert!(client.get_algorithm("sorting", "quantum-sort").is_err());
    Ok(())
}
