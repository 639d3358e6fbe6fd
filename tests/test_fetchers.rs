use recipe_report::fetchers::{fetcher_for, FileFetcher, PageFetcher, RequestFetcher};
use recipe_report::{extract_from_location, ReportError, Settings};
use std::path::PathBuf;

fn create_recipe_html(json_ld: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Recipe Page</title>
            <script type="application/ld+json">
                {json_ld}
            </script>
        </head>
        <body>
            <h1>Recipe</h1>
        </body>
        </html>
        "#
    )
}

fn temp_page(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("recipe-report-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn test_extract_from_url() {
    let mut server = mockito::Server::new_async().await;
    let json_ld = r#"
    {
        "@context": "https://schema.org/",
        "@type": "Recipe",
        "name": "Dishoom's House Black Daal",
        "cookTime": "PT5H",
        "prepTime": "PT15M",
        "totalTime": "PT5H15M",
        "recipeIngredient": ["300g whole black urad daal", "90g unsalted butter"],
        "recipeYield": 8
    }
    "#;

    let _m = server
        .mock("GET", "/recipe")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(create_recipe_html(json_ld))
        .create_async()
        .await;

    let url = format!("{}/recipe", server.url());
    let extraction = extract_from_location(&url, &Settings::default()).await.unwrap();

    assert!(extraction.report.contains("RECIPE: Dishoom's House Black Daal\n"));
    assert!(extraction.report.contains(
        "Prep Time: 15 minutes\nCook Time: 5 hours\nTotal Time: 5 hours 15 minutes\nServings: 8\n"
    ));
    assert!(extraction.report.contains("2. 90g unsalted butter\n"));
}

#[tokio::test]
async fn test_http_error_status() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/missing")
        .with_status(404)
        .create_async()
        .await;

    let url = format!("{}/missing", server.url());
    let fetcher = RequestFetcher::new(&Settings::default()).unwrap();
    let result = fetcher.fetch(&url).await;

    assert!(matches!(
        result,
        Err(ReportError::HttpStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/page")
        .match_header("user-agent", "TestAgent/2.0")
        .with_status(200)
        .with_body("<html><body><h1>Soup</h1></body></html>")
        .create_async()
        .await;

    let settings = Settings {
        user_agent: "TestAgent/2.0".to_string(),
        ..Settings::default()
    };
    let url = format!("{}/page", server.url());
    let extraction = extract_from_location(&url, &settings).await.unwrap();

    assert_eq!(extraction.record.name.as_deref(), Some("Soup"));
}

#[tokio::test]
async fn test_url_without_recipe() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/blog")
        .with_status(200)
        .with_body("<html><body><p>Just a post.</p></body></html>")
        .create_async()
        .await;

    let url = format!("{}/blog", server.url());
    let result = extract_from_location(&url, &Settings::default()).await;

    let error = result.unwrap_err();
    assert!(matches!(error, ReportError::NoRecipeFound));
    assert_eq!(error.to_string(), "No recipe found on this page");
}

#[tokio::test]
async fn test_extract_from_file() {
    let path = temp_page(
        "page.html",
        &create_recipe_html(r#"{"@type": "Recipe", "name": "Saved Page Stew"}"#),
    );

    let location = path.to_string_lossy().to_string();
    let extraction = extract_from_location(&location, &Settings::default())
        .await
        .unwrap();

    assert_eq!(extraction.record.name.as_deref(), Some("Saved Page Stew"));
    std::fs::remove_file(path).unwrap();
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let result = FileFetcher.fetch("/definitely/not/here/recipe.html").await;
    assert!(matches!(result, Err(ReportError::IoError(_))));
}

#[tokio::test]
async fn test_fetcher_for_local_path() {
    let path = temp_page("fetcher-for.html", "<h1>Local</h1>");
    let location = path.to_string_lossy().to_string();

    let fetcher = fetcher_for(&location, &Settings::default()).unwrap();
    let html = fetcher.fetch(&location).await.unwrap();

    assert_eq!(html, "<h1>Local</h1>");
    std::fs::remove_file(path).unwrap();
}
