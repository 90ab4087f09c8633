use crate::api::dashboard;
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::{Context, Result};

pub type DashboardLimiter = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter allowing `requests_per_min` with an equal burst.
pub fn build_limiter(requests_per_min: u32) -> Result<DashboardLimiter> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        (60_000 / requests_per_min as u64).max(1)
    };
    GovernorConfigBuilder::default()
        .milliseconds_per_request(per_ms)
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .context("Invalid dashboard rate limit")
}

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str, limiter: &DashboardLimiter) {
    cfg.service(
        web::scope(api_prefix)
            .wrap(Governor::new(limiter)) // rate limiting
            .configure(employee_routes),
    );
}

/// Dashboard routes, relative to the API prefix.
pub fn employee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1/employees/{employee_id}")
            // /leave-dashboard
            .service(
                web::resource("/leave-dashboard").route(web::get().to(dashboard::leave_dashboard)),
            )
            // /leave-dashboard/apply
            .service(
                web::resource("/leave-dashboard/apply")
                    .route(web::post().to(dashboard::apply_for_leave)),
            )
            // /leave-history
            .service(web::resource("/leave-history").route(web::get().to(dashboard::leave_history)))
            // /leave-hours
            .service(web::resource("/leave-hours").route(web::get().to(dashboard::leave_hours))),
    );
}
