mod common;

use anyhow::Result;
use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::json;

use algoviz::model::Locator;
use algoviz::remote::{CatalogClient, GistClient};
use algoviz::store::LocalStore;
use algoviz::workspace::{AlwaysDiscard, Workbench};

fn services_router() -> axum::Router {
    axum::Router::new()
        .route(
            "/categories",
            get(|| async {
                Json(json!({"categories": [{"key": "sorting", "name": "Sorting"}]}))
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
        .route(
            "/gists/:id",
            get(|Path(id): Path<String>| async move {
                if id == "abc123" {
                    Json(json!({
                        "id": "abc123",
                        "description": "My Paper",
                        "files": {
                            "algorithm-visualizer": {"filename": "algorithm-visualizer", "content": ""},
                            "README.md": {
                                "filename": "README.md",
                                "content": "# My Paper\n\nA tiny demo.\n"
                            },
                            "code.js": {"filename": "code.js", "content": "// demo\n"}
                        }
                    }))
                    .into_response()
                } else {
                    StatusCode::NOT_FOUND.into_response()
                }
            }),
        )
}

fn bench_against(base_url: &str) -> Result<(Workbench, tempfile::TempDir)> {
    let tmp = tempfile::tempdir()?;
    let store = LocalStore::open_or_init(tmp.path())?;
    let catalog = CatalogClient::new(base_url.to_string())?;
    let gists = GistClient::new(base_url.to_string())?;
    let bench = Workbench::new(
        Box::new(catalog),
        Box::new(gists),
        Box::new(AlwaysDiscard),
        store,
        "js",
    );
    Ok((bench, tmp))
}

#[test]
fn startup_loads_route_and_categories() -> Result<()> {
    let service = common::spawn(services_router())?;
    let (mut bench, _tmp) = bench_against(&service.base_url)?;

    bench.startup(&Locator::catalog("sorting", "bubble-sort"));

    assert_eq!(bench.titles(), ["Sorting", "Bubble Sort"]);
    assert_eq!(bench.locator(), &Locator::catalog("sorting", "bubble-sort"));
    assert_eq!(bench.panes().active_tab, Some(1)); // code.js matches "js"
    assert!(bench.is_saved());
    assert_eq!(bench.window_title(), "Sorting - Bubble Sort");
    assert_eq!(bench.description(), "Swap adjacent elements until sorted.");
    assert_eq!(bench.categories().len(), 1);
    Ok(())
}

#[test]
fn gist_load_refines_away_the_marker_file() -> Result<()> {
    let service = common::spawn(services_router())?;
    let (mut bench, _tmp) = bench_against(&service.base_url)?;

    bench.load_algorithm(Locator::gist("abc123"), true);

    assert_eq!(bench.titles(), ["Scratch Paper", "My Paper"]);
    let names: Vec<&str> = bench.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["README.md", "code.js"]);
    assert_eq!(bench.panes().active_tab, Some(1));
    assert_eq!(bench.description(), "A tiny demo.");
    assert!(bench.is_saved());
    Ok(())
}

#[test]
fn unknown_gist_falls_back_to_welcome() -> Result<()> {
    let service = common::spawn(services_router())?;
    let (mut bench, _tmp) = bench_against(&service.base_url)?;

    bench.load_algorithm(Locator::gist("nope"), true);

    assert_eq!(bench.titles(), ["Algorithm Visualizer"]);
    assert_eq!(bench.locator(), &Locator::None);
    assert_eq!(bench.files().len(), 1);
    assert_eq!(bench.files()[0].name, "README.md");
    assert!(bench.is_saved());
    Ok(())
}
