mod error;
mod event;
mod shared;
mod status;
mod user;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
pub use error::PlannerError;
pub use event::{EventQueryService, EventServiceError};
use planner_infra::PlannerContext;
use std::net::TcpListener;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    event::configure_routes(cfg);
    status::configure_routes(cfg);
    user::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: PlannerContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context).await?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(context: PlannerContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        info!("Listening on port: {}", port);

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
