use crate::cli::ServeArgs;
use crate::infra::{default_eligibility_config, AppState, InMemoryLoanRepository};
use crate::routes::with_loan_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use loan_screen::config::AppConfig;
use loan_screen::error::AppError;
use loan_screen::screening::{GradeResolver, LoanScreeningService, SimulatedCrimeDataSource};
use loan_screen::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryLoanRepository::default());
    let resolver = Arc::new(GradeResolver::new(SimulatedCrimeDataSource));
    let screening_service = Arc::new(LoanScreeningService::new(
        repository,
        resolver,
        default_eligibility_config(),
    ));

    let auth = Arc::new(config.auth.clone());
    if !auth.required() {
        info!("APP_API_KEY not set, loan routes are unauthenticated");
    }

    let app = with_loan_routes(screening_service, auth)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "loan screening service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
