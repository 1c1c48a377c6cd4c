use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Extension, Router,
};
use tower::ServiceExt;

use buffr_tenancy::auth::{self, Claims};
use buffr_tenancy::middleware::scope_context_middleware;
use buffr_tenancy::scope::{Role, ScopeContext};

// Honors RUST_LOG so rejected-auth events are visible when debugging a test
// failure. try_init because every test in the binary calls this.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

// The handlers below stand in for the platform's API routes: they read the
// ScopeContext the middleware injected into request extensions.

async fn whoami(Extension(ctx): Extension<ScopeContext>) -> String {
    format!("{}:{}", ctx.tenant_id, ctx.user_id)
}

fn app() -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .layer(middleware::from_fn(scope_context_middleware))
}

#[tokio::test]
async fn missing_authorization_header_is_rejected() -> Result<()> {
    init_tracing();
    let res = app()
        .oneshot(Request::builder().uri("/whoami").body(Body::empty())?)
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    let payload: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(payload["code"], "UNAUTHORIZED");
    assert_eq!(payload["error"], true);
    Ok(())
}

#[tokio::test]
async fn garbage_token_is_rejected() -> Result<()> {
    init_tracing();
    let res = app()
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header("authorization", "Bearer not-a-jwt")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn non_bearer_scheme_is_rejected() -> Result<()> {
    init_tracing();
    let res = app()
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header("authorization", "Basic dXNlcjpwYXNz")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn valid_token_injects_scope_context() -> Result<()> {
    init_tracing();
    let claims = Claims::new("tenant-etuna", "user-maria", Role::Manager)
        .with_business("etuna-guesthouse");
    let token = auth::generate_jwt(&claims)?;

    let res = app()
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(res.status(), StatusCode::OK);

    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    assert_eq!(&body[..], b"tenant-etuna:user-maria");
    Ok(())
}

#[tokio::test]
async fn claims_round_trip_preserves_scoping_fields() -> Result<()> {
    init_tracing();
    let claims = Claims::new("tenant-etuna", "user-maria", Role::Manager)
        .with_business("etuna-guesthouse")
        .with_department("housekeeping");
    let token = auth::generate_jwt(&claims)?;

    let decoded = auth::validate_jwt(&token)?;
    assert_eq!(decoded.tenant_id, "tenant-etuna");
    assert_eq!(decoded.role, Role::Manager);
    assert_eq!(decoded.business_id.as_deref(), Some("etuna-guesthouse"));
    assert_eq!(decoded.department_id.as_deref(), Some("housekeeping"));
    Ok(())
}
