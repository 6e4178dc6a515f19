// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{build_server, create_test_app, test_settings, TRUSTED_DOMAIN};
use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const SCHOLAR_PAGE: &str = r##"
<html><body>
<div class="gs_r gs_or gs_scl">
  <div class="gs_ri">
    <h3 class="gs_rt"><a href="https://example.org/old">An older study</a></h3>
    <div class="gs_a">A Author - Journal of Things, 2010 - example.org</div>
    <div class="gs_rs">Findings from a long time ago.</div>
    <div class="gs_fl"><a href="#">Save</a> <a href="#">Cite</a> <a href="/scholar?cites=1">Cited by 10</a></div>
  </div>
</div>
<div class="gs_r gs_or gs_scl">
  <div class="gs_ri">
    <h3 class="gs_rt"><a href="https://example.org/popular">A popular paper</a></h3>
    <div class="gs_a">B Author - Conference on Stuff, 2020 - example.org</div>
    <div class="gs_rs">Widely cited results.</div>
    <div class="gs_fl"><a href="#">Save</a> <a href="#">Cite</a> <a href="/scholar?cites=2">Cited by 5000</a></div>
  </div>
</div>
</body></html>
"##;

fn youtube_search_body() -> Value {
    json!({
        "nextPageToken": "CDIQAA",
        "items": [
            {
                "id": { "kind": "youtube#video", "videoId": "low" },
                "snippet": {
                    "title": "Small channel video",
                    "thumbnails": { "medium": { "url": "https://i.ytimg.com/vi/low/mqdefault.jpg" } }
                }
            },
            {
                "id": { "kind": "youtube#channel", "channelId": "UC123" },
                "snippet": { "title": "A channel", "thumbnails": {} }
            },
            {
                "id": { "kind": "youtube#video", "videoId": "high" },
                "snippet": {
                    "title": "Popular video",
                    "thumbnails": { "default": { "url": "https://i.ytimg.com/vi/high/default.jpg" } }
                }
            }
        ]
    })
}

// === Query validation ===

#[tokio::test]
async fn test_missing_query_returns_plain_400_on_every_endpoint() {
    let app = create_test_app().await;

    for endpoint in ["/search", "/articles", "/papers", "/blogs"] {
        let response = app.server.get(endpoint).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{}", endpoint);
        assert_eq!(response.text(), "Please provide a search term");
    }
}

#[tokio::test]
async fn test_empty_query_returns_400_without_upstream_call() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.upstream)
        .await;

    let response = app.server.get("/articles").add_query_param("q", "").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Please provide a search term");
}

// === /search ===

#[tokio::test]
async fn test_search_videos_merges_statistics_and_ranks() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .and(query_param("part", "snippet"))
        .and(query_param("maxResults", "50"))
        .and(query_param("q", "rust async"))
        .and(query_param("key", "yt-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(youtube_search_body()))
        .expect(1)
        .mount(&app.upstream)
        .await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/videos"))
        .and(query_param("part", "statistics"))
        .and(query_param("id", "low,high"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "statistics": { "viewCount": "100", "likeCount": "10" } },
                { "statistics": { "viewCount": "90000", "likeCount": "4500" } }
            ]
        })))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = app
        .server
        .get("/search")
        .add_query_param("q", "rust async")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let videos = body["youtube"].as_array().unwrap();
    assert_eq!(videos.len(), 2);

    assert_eq!(videos[0]["title"], "Popular video");
    assert_eq!(videos[0]["url"], "https://www.youtube.com/watch?v=high");
    assert_eq!(videos[0]["thumbnail"], "https://i.ytimg.com/vi/high/default.jpg");
    assert_eq!(videos[0]["views"], 90000);
    assert_eq!(videos[0]["likes"], 4500);
    assert_eq!(videos[0]["nextPageToken"], "CDIQAA");

    assert_eq!(videos[1]["title"], "Small channel video");
    assert_eq!(videos[1]["thumbnail"], "https://i.ytimg.com/vi/low/mqdefault.jpg");
}

#[tokio::test]
async fn test_search_videos_forwards_page_token() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .and(query_param("pageToken", "CDIQAA"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = app
        .server
        .get("/search")
        .add_query_param("q", "rust")
        .add_query_param("pageToken", "CDIQAA")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_search_videos_without_hits_skips_statistics_call() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&app.upstream)
        .await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(0)
        .mount(&app.upstream)
        .await;

    let response = app.server.get("/search").add_query_param("q", "zzzz").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "youtube": [] }));
}

#[tokio::test]
async fn test_search_videos_upstream_failure_returns_500() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .respond_with(ResponseTemplate::new(403).set_body_string("quotaExceeded"))
        .mount(&app.upstream)
        .await;

    let response = app.server.get("/search").add_query_param("q", "rust").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Could not fetch YouTube data" })
    );
}

#[tokio::test]
async fn test_search_videos_without_api_key_returns_500() {
    let upstream = wiremock::MockServer::start().await;
    let mut settings = test_settings(&upstream.uri());
    settings.youtube.api_key = None;
    let server = build_server(&settings);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let response = server.get("/search").add_query_param("q", "rust").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Could not fetch YouTube data" })
    );
}

// === /articles ===

#[tokio::test]
async fn test_articles_ranked_with_next_start_index() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .and(query_param("q", "ownership"))
        .and(query_param("key", "cse-key"))
        .and(query_param("cx", "cse-cx"))
        .and(query_param("start", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "title": "Short",
                    "link": "https://random.example/a",
                    "snippet": "tiny",
                    "displayLink": "random.example"
                },
                {
                    "title": "Trusted",
                    "link": format!("https://{}/b", TRUSTED_DOMAIN),
                    "snippet": "abcdefgh",
                    "displayLink": TRUSTED_DOMAIN
                },
                {
                    "title": "Long",
                    "link": "https://random.example/c",
                    "snippet": "a rather longer snippet",
                    "displayLink": "random.example"
                }
            ]
        })))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = app
        .server
        .get("/articles")
        .add_query_param("q", "ownership")
        .add_query_param("start", "5")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["nextStartIndex"], 15);

    let titles: Vec<&str> = body["articles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    // 23 chars, 8 + 10 trusted bonus, 4 chars
    assert_eq!(titles, vec!["Long", "Trusted", "Short"]);
    assert_eq!(body["articles"][1]["source"], TRUSTED_DOMAIN);
}

#[tokio::test]
async fn test_articles_invalid_start_defaults_to_first_page() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .and(query_param("start", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "title": "t", "link": "https://x.example", "snippet": "s", "displayLink": "x.example" }]
        })))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = app
        .server
        .get("/articles")
        .add_query_param("q", "rust")
        .add_query_param("start", "abc")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["nextStartIndex"], 11);
}

#[tokio::test]
async fn test_articles_without_items_returns_500() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "searchInformation": { "totalResults": "0" }
        })))
        .mount(&app.upstream)
        .await;

    let response = app.server.get("/articles").add_query_param("q", "qwerty").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Could not fetch articles from Google Custom Search" })
    );
}

// === /papers ===

#[tokio::test]
async fn test_papers_extracted_and_ranked() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/scholar"))
        .and(query_param("q", "transformers"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SCHOLAR_PAGE))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = app
        .server
        .get("/papers")
        .add_query_param("q", "transformers")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let papers = body["papers"].as_array().unwrap();
    assert_eq!(papers.len(), 2);

    assert_eq!(papers[0]["title"], "A popular paper");
    assert_eq!(papers[0]["url"], "https://example.org/popular");
    assert_eq!(papers[0]["summary"], "Widely cited results.");
    assert_eq!(papers[0]["citations"], 5000);
    assert_eq!(papers[0]["year"], 2020);

    assert_eq!(papers[1]["title"], "An older study");
    assert_eq!(papers[1]["citations"], 10);
}

#[tokio::test]
async fn test_papers_without_results_returns_404() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/scholar"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&app.upstream)
        .await;

    let response = app.server.get("/papers").add_query_param("q", "nothing").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "No papers found" })
    );
}

#[tokio::test]
async fn test_papers_upstream_failure_returns_500() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/scholar"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&app.upstream)
        .await;

    let response = app.server.get("/papers").add_query_param("q", "rust").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Could not fetch academic papers" })
    );
}

// === /blogs ===

#[tokio::test]
async fn test_blogs_appends_marker_and_filters() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .and(query_param("q", "tokio blog"))
        .and(query_param("start", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "title": "Tokio internals",
                    "link": "https://someone.dev/blog/tokio",
                    "snippet": "Deep dive",
                    "displayLink": "someone.dev",
                    "pagemap": { "cse_image": [{ "src": "https://someone.dev/cover.png" }] }
                },
                {
                    "title": "Docs page",
                    "link": "https://docs.rs/tokio",
                    "snippet": "API reference",
                    "displayLink": "docs.rs"
                },
                {
                    "title": "Forum",
                    "link": "https://forum.example/t/1",
                    "snippet": "First post in the thread",
                    "displayLink": "forum.example"
                }
            ]
        })))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let response = app.server.get("/blogs").add_query_param("q", "tokio").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["nextStartIndex"], 11);

    let blogs = body["blogs"].as_array().unwrap();
    assert_eq!(blogs.len(), 2);
    assert_eq!(blogs[0]["title"], "Tokio internals");
    assert_eq!(blogs[0]["imageUrl"], "https://someone.dev/cover.png");
    assert_eq!(blogs[1]["title"], "Forum");
    assert!(blogs[1]["imageUrl"].is_null());
}

#[tokio::test]
async fn test_blogs_without_items_returns_empty_list() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&app.upstream)
        .await;

    let response = app
        .server
        .get("/blogs")
        .add_query_param("q", "obscure")
        .add_query_param("start", "21")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "blogs": [], "nextStartIndex": 31 })
    );
}

#[tokio::test]
async fn test_blogs_upstream_failure_returns_500() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.upstream)
        .await;

    let response = app.server.get("/blogs").add_query_param("q", "rust").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Could not fetch blog posts" })
    );
}
