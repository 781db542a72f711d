use axum::{
    Router,
    body::Body,
    http::{self, header},
    middleware,
};
use tower::ServiceBuilder;
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::{
    adapters::{
        self,
        http::{app_state::AppState, middleware::request_locals_middleware},
    },
    infra::config::{StaticAssets, StaticRoute},
};

pub fn create_app(app_state: AppState) -> Router {
    let security = app_state.config.security_headers.clone();
    let static_routes = static_router(&app_state.config.static_assets);

    // Static assets are merged after the locals middleware is applied so
    // they are served straight from disk.
    Router::new()
        .merge(adapters::http::routes::router())
        .layer(middleware::from_fn(request_locals_middleware))
        .with_state(app_state)
        .merge(static_routes)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &http::Request<Body>| {
                        tracing::info_span!(
                            "http-request",
                            method = %request.method(),
                            uri = %request.uri(),
                            version = ?request.version(),
                            request_id = tracing::field::Empty
                        )
                    }),
                )
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::CONTENT_SECURITY_POLICY,
                    security.content_security_policy,
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_CONTENT_TYPE_OPTIONS,
                    security.content_type_options,
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_FRAME_OPTIONS,
                    security.frame_options,
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::REFERRER_POLICY,
                    security.referrer_policy,
                )),
        )
}

fn static_router(assets: &StaticAssets) -> Router {
    let Some(dir) = &assets.dir else {
        return Router::new();
    };

    assets
        .routes()
        .into_iter()
        .fold(Router::new(), |router, route| match route {
            StaticRoute::File(path) => {
                let file = dir.join(path.trim_start_matches('/'));
                router.route_service(&path, ServeFile::new(file))
            }
            StaticRoute::Dir(prefix) => {
                let root = dir.join(prefix.trim_start_matches('/'));
                router.nest_service(&prefix, ServeDir::new(root))
            }
        })
}
