//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::server::handlers::{health_check, not_found};
use crate::server::middleware::{RequestLoggingMiddleware, error_envelope};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_cors::Cors;
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with production wiring
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");
        let state = AppState::from_config(config)?;
        Ok(Self::with_state(state))
    }

    /// Create a server around prepared state
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config.gateway.server.clone(),
            state,
        }
    }

    /// Build the CORS middleware from configuration
    pub(crate) fn build_cors(config: &ServerConfig) -> Cors {
        let cors_config = &config.cors;
        if !cors_config.enabled {
            return Cors::default();
        }

        let mut cors = Cors::default();

        cors = if cors_config.allows_all_origins() {
            cors.allow_any_origin()
        } else {
            cors_config
                .allowed_origins
                .iter()
                .fold(cors, |cors, origin| cors.allowed_origin(origin))
        };

        let methods: Vec<actix_web::http::Method> = cors_config
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse().ok())
            .collect();
        cors = if methods.is_empty() {
            cors.allow_any_method()
        } else {
            cors.allowed_methods(methods)
        };

        let headers: Vec<actix_web::http::header::HeaderName> = cors_config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        cors = if headers.is_empty() {
            cors.allow_any_header()
        } else {
            cors.allowed_headers(headers)
        };

        cors = cors.max_age(cors_config.max_age);

        if cors_config.allow_credentials {
            cors = cors.supports_credentials();
        }

        cors
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let server_config = &state.config.gateway.server;
        let cors = Self::build_cors(server_config);
        let json_config = routes::json_config(server_config.max_body_size);

        App::new()
            .app_data(state)
            .app_data(json_config)
            .wrap(cors)
            .wrap(error_envelope())
            .wrap(RequestLoggingMiddleware)
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Server", "transcript-gateway")))
            .route("/health", web::get().to(health_check))
            .configure(routes::configure_routes)
            .default_service(web::to(not_found))
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;
        let workers = self.config.worker_count();

        info!(workers, "Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
