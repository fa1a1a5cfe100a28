use crate::{
    api::{reports, supervisor},
    auth::middleware::auth_middleware,
    config::Config,
    store::ReportStore,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};

// Helper to build per-scope limiter
fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);
    let cfg = GovernorConfigBuilder::default()
        .milliseconds_per_request(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .expect("per_millisecond and burst_size are non-zero");
    Governor::new(&cfg)
}

pub fn configure<S: ReportStore>(cfg: &mut web::ServiceConfig, config: Config) {
    let protected_limiter = build_limiter(config.rate_protected_per_min);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware)) // authentication
            .wrap(protected_limiter) // rate limiting
            .service(
                web::scope("/reports")
                    // /reports
                    .service(web::resource("").route(web::get().to(reports::list_reports)))
                    // /reports/wage-summary
                    .service(
                        web::resource("/wage-summary")
                            .route(web::get().to(reports::wage_summary::<S>)),
                    )
                    // /reports/export-all
                    .service(
                        web::resource("/export-all")
                            .route(web::get().to(reports::export_all::<S>)),
                    ),
            )
            .service(
                web::scope("/supervisor")
                    // /supervisor/profile
                    .service(
                        web::resource("/profile").route(web::get().to(supervisor::profile::<S>)),
                    )
                    // /supervisor/employees/export
                    .service(
                        web::resource("/employees/export")
                            .route(web::get().to(supervisor::export_employees::<S>)),
                    )
                    // /supervisor/activity/export
                    .service(
                        web::resource("/activity/export")
                            .route(web::get().to(supervisor::export_activity::<S>)),
                    ),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::bearer;
    use crate::model::{employee, role::Role};
    use crate::store::memory::MemoryStore;
    use actix_web::{App, http::StatusCode, test, web::Data};
    use std::net::SocketAddr;

    fn peer() -> SocketAddr {
        "127.0.0.1:40000".parse().unwrap()
    }

    #[actix_web::test]
    async fn protected_scope_requires_bearer_token() {
        let config = Config::for_tests();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(MemoryStore::default()))
                .app_data(Data::new(config.clone()))
                .configure(|cfg| configure::<MemoryStore>(cfg, config.clone())),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/reports")
            .peer_addr(peer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn routes_reach_handlers_through_middleware() {
        let config = Config::for_tests();
        let mut alice = employee::sample("E1", "Alice");
        alice.supervisor_id = Some("S1".into());
        let store = MemoryStore::default().with_employee("C1", alice);

        let app = test::init_service(
            App::new()
                .app_data(Data::new(store))
                .app_data(Data::new(config.clone()))
                .configure(|cfg| configure::<MemoryStore>(cfg, config.clone())),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/supervisor/profile")
            .peer_addr(peer())
            .insert_header(bearer(Role::Supervisor, "S1", "C1"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["stats"]["total_assigned"], 1);
        assert_eq!(body["name"], serde_json::Value::Null);
    }
}
