use super::*;

const RESUME_FILE: &str = "TANMAY SHARMA_2K22_EC_238.pdf";

fn test_options(site_root: &Path) -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("portfolio")
        .site_root(site_root.to_string_lossy().as_ref())
        .build()
}

/// Serve `app` on an ephemeral port and return its base URL.
async fn spawn_app(public_dir: &Path, site_root: &Path) -> String {
    let router = app(test_options(site_root), public_dir);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

#[tokio::test(flavor = "multi_thread")]
async fn healthz_returns_ok() {
    let public = tempfile::tempdir().expect("tempdir");
    let site = tempfile::tempdir().expect("tempdir");
    let base = spawn_app(public.path(), site.path()).await;

    let resp = reqwest::get(format!("{base}/healthz")).await.expect("request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test(flavor = "multi_thread")]
async fn resume_is_served_from_public_dir() {
    let public = tempfile::tempdir().expect("tempdir");
    let site = tempfile::tempdir().expect("tempdir");
    std::fs::write(public.path().join(RESUME_FILE), b"%PDF-1.4 test").expect("write resume");
    let base = spawn_app(public.path(), site.path()).await;

    let resp = reqwest::get(format!("{base}/TANMAY%20SHARMA_2K22_EC_238.pdf"))
        .await
        .expect("request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.bytes().await.expect("body").as_ref(), b"%PDF-1.4 test");
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_resume_is_a_plain_not_found() {
    let public = tempfile::tempdir().expect("tempdir");
    let site = tempfile::tempdir().expect("tempdir");
    let base = spawn_app(public.path(), site.path()).await;

    let resp = reqwest::get(format!("{base}/TANMAY%20SHARMA_2K22_EC_238.pdf"))
        .await
        .expect("request");
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn root_renders_portfolio_page() {
    let public = tempfile::tempdir().expect("tempdir");
    let site = tempfile::tempdir().expect("tempdir");
    let base = spawn_app(public.path(), site.path()).await;

    let resp = reqwest::get(format!("{base}/")).await.expect("request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(body.contains("Selected Projects"));
    assert_eq!(body.matches("class=\"project-card\"").count(), client::data::PROJECTS.len());
    assert!(body.contains("application/ld+json"));
}
