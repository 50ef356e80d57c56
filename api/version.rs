use sdk_version_reporter::registry::manifest::runtime_registry;
use sdk_version_reporter::reporter::VersionReporter;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
    run(handler).await
}

/// GET /api/version — Report the bundled AWS SDK version.
///
/// The request is ignored entirely; the response depends only on the
/// library metadata embedded in the artifact at build time. When the SDK
/// version cannot be resolved, the error propagates to the hosting runtime
/// and the invocation fails.
pub async fn handler(_req: Request) -> Result<Response<Body>, Error> {
    let reporter = VersionReporter::default();
    let report = reporter.report(&runtime_registry()).map_err(|err| {
        tracing::error!(library = reporter.target(), "version lookup failed: {err}");
        Error::from(err)
    })?;
    tracing::info!(library = reporter.target(), "reported bundled SDK version");

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(&report)?))?)
}
