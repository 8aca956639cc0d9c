//! Integration tests for browsing the catalog and using the cart.

#![allow(clippy::unwrap_used)]

use moon_flowers_integration_tests::TestServer;
use reqwest::{Client, StatusCode, header};

async fn get_text(client: &Client, server: &TestServer, path: &str) -> (StatusCode, String) {
    let resp = client.get(server.url(path)).send().await.unwrap();
    let status = resp.status();
    (status, resp.text().await.unwrap())
}

async fn add(client: &Client, server: &TestServer, product_id: &str) -> reqwest::Response {
    client
        .post(server.url("/cart/add"))
        .form(&[("product_id", product_id), ("occasion", "all")])
        .send()
        .await
        .unwrap()
}

async fn update(client: &Client, server: &TestServer, product_id: &str, delta: &str) {
    let resp = client
        .post(server.url("/cart/update"))
        .form(&[("product_id", product_id), ("delta", delta)])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/cart");
}

async fn cart_count(client: &Client, server: &TestServer) -> String {
    let (status, body) = get_text(client, server, "/cart/count").await;
    assert_eq!(status, StatusCode::OK);
    body.trim().to_string()
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::start().await.unwrap();
    let client = server.visitor().unwrap();

    let (status, body) = get_text(&client, &server, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_every_section_renders() {
    let server = TestServer::start().await.unwrap();
    let client = server.visitor().unwrap();

    for (path, heading) in [
        ("/", "Букеты, которые говорят больше слов"),
        ("/catalog", "Наш каталог"),
        ("/about", "О магазине"),
        ("/delivery", "Доставка"),
        ("/reviews", "Отзывы"),
        ("/contacts", "Контакты"),
        ("/cart", "Корзина пуста"),
    ] {
        let (status, body) = get_text(&client, &server, path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(body.contains(heading), "{path} should contain {heading}");
    }
}

#[tokio::test]
async fn test_catalog_filter() {
    let server = TestServer::start().await.unwrap();
    let client = server.visitor().unwrap();

    let (_, all) = get_text(&client, &server, "/catalog?occasion=all").await;
    assert_eq!(all.matches("class=\"card product-card\"").count(), 8);

    let (_, birthday) = get_text(&client, &server, "/catalog?occasion=birthday").await;
    assert_eq!(birthday.matches("class=\"card product-card\"").count(), 3);
    for id in [2, 6, 8] {
        assert!(birthday.contains(&format!("id=\"product-{id}\"")));
    }

    let (_, sympathy) = get_text(&client, &server, "/catalog?occasion=sympathy").await;
    assert_eq!(sympathy.matches("class=\"card product-card\"").count(), 1);
    assert!(sympathy.contains("id=\"product-7\""));
}

#[tokio::test]
async fn test_catalog_rejects_unknown_occasion() {
    let server = TestServer::start().await.unwrap();
    let client = server.visitor().unwrap();

    let (status, body) = get_text(&client, &server, "/catalog?occasion=graduation").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("unknown occasion: graduation"));
}

#[tokio::test]
async fn test_cart_walkthrough() {
    let server = TestServer::start().await.unwrap();
    let client = server.visitor().unwrap();

    let resp = add(&client, &server, "1").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()[header::LOCATION],
        "/catalog?occasion=all#product-1"
    );
    add(&client, &server, "1").await;
    add(&client, &server, "2").await;

    assert_eq!(cart_count(&client, &server).await, "<span class=\"badge\" id=\"cart-count\">3</span>");

    let (_, cart) = get_text(&client, &server, "/cart").await;
    assert!(cart.contains("id=\"cart-item-1\""));
    assert!(cart.contains("id=\"cart-item-2\""));
    assert!(cart.contains("14 200 ₽"));

    update(&client, &server, "1", "-2").await;

    let (_, cart) = get_text(&client, &server, "/cart").await;
    assert!(!cart.contains("id=\"cart-item-1\""));
    assert!(cart.contains("5 200 ₽"));
    assert_eq!(cart_count(&client, &server).await, "<span class=\"badge\" id=\"cart-count\">1</span>");
}

#[tokio::test]
async fn test_add_keeps_catalog_filter() {
    let server = TestServer::start().await.unwrap();
    let client = server.visitor().unwrap();

    let resp = client
        .post(server.url("/cart/add"))
        .form(&[("product_id", "3"), ("occasion", "wedding")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()[header::LOCATION],
        "/catalog?occasion=wedding#product-3"
    );
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let server = TestServer::start().await.unwrap();
    let client = server.visitor().unwrap();

    let resp = add(&client, &server, "99").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(cart_count(&client, &server).await, "");
}

#[tokio::test]
async fn test_update_missing_product_is_ignored() {
    let server = TestServer::start().await.unwrap();
    let client = server.visitor().unwrap();

    add(&client, &server, "4").await;
    update(&client, &server, "5", "3").await;

    let (_, cart) = get_text(&client, &server, "/cart").await;
    assert!(cart.contains("id=\"cart-item-4\""));
    assert!(!cart.contains("id=\"cart-item-5\""));
    assert!(cart.contains("3 900 ₽"));
}

#[tokio::test]
async fn test_place_order_leaves_cart_alone() {
    let server = TestServer::start().await.unwrap();
    let client = server.visitor().unwrap();

    add(&client, &server, "6").await;
    add(&client, &server, "6").await;

    let resp = client.post(server.url("/cart/order")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/cart");

    let (_, cart) = get_text(&client, &server, "/cart").await;
    assert!(cart.contains("11 000 ₽"));
    assert_eq!(cart_count(&client, &server).await, "<span class=\"badge\" id=\"cart-count\">2</span>");
}

#[tokio::test]
async fn test_visitors_have_separate_carts() {
    let server = TestServer::start().await.unwrap();
    let alice = server.visitor().unwrap();
    let bob = server.visitor().unwrap();

    add(&alice, &server, "1").await;

    assert_eq!(cart_count(&alice, &server).await, "<span class=\"badge\" id=\"cart-count\">1</span>");
    assert_eq!(cart_count(&bob, &server).await, "");
}

#[tokio::test]
async fn test_header_badge_and_active_section() {
    let server = TestServer::start().await.unwrap();
    let client = server.visitor().unwrap();

    add(&client, &server, "8").await;

    let (_, page) = get_text(&client, &server, "/delivery").await;
    assert!(page.contains("<span class=\"badge\">1</span>"));
    assert!(page.contains("href=\"/delivery\" class=\"active\" aria-current=\"page\""));
}

#[tokio::test]
async fn test_responses_carry_security_headers_and_request_id() {
    let server = TestServer::start().await.unwrap();
    let client = server.visitor().unwrap();

    let resp = client
        .get(server.url("/"))
        .header("x-request-id", "integration-1")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.headers()["x-request-id"], "integration-1");
    assert_eq!(resp.headers()["x-frame-options"], "DENY");
    assert!(
        resp.headers()[header::CONTENT_SECURITY_POLICY]
            .to_str()
            .unwrap()
            .contains("script-src 'none'")
    );
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let server = TestServer::start().await.unwrap();
    let client = server.visitor().unwrap();

    let (_, page) = get_text(&client, &server, "/").await;
    let href = page
        .split("<link rel=\"stylesheet\" href=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .unwrap()
        .to_string();

    let (status, css) = get_text(&client, &server, &href).await;
    assert_eq!(status, StatusCode::OK);
    assert!(css.contains(".product-grid"));
}

#[tokio::test]
async fn test_reviews_show_star_ratings() {
    let server = TestServer::start().await.unwrap();
    let client = server.visitor().unwrap();

    let (status, page) = get_text(&client, &server, "/reviews").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page.matches("aria-label=\"Оценка 5 из 5\">★★★★★</span>").count(), 3);
}
