//! src/startup.rs
use crate::backend::BackendClient;
use crate::configuration::Settings;
use crate::routes::{health_check, landing_form, signup, unsubscribe, unsubscribe_form};
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build(config: Settings) -> Result<Application, std::io::Error> {
    let tcp_listener = TcpListener::bind(config.application.address())?;
    let port = tcp_listener.local_addr()?.port();

    let backend = BackendClient::from(config.backend);

    let server = run(tcp_listener, backend)?;

    Ok(Application { port, server })
}

pub fn run(listener: TcpListener, backend: BackendClient) -> Result<Server, std::io::Error> {
    let backend = web::Data::new(backend);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))

            // serving HTML pages
            .route("/", web::get().to(landing_form))
            .route("/", web::post().to(signup))
            .route("/unsubscribe", web::get().to(unsubscribe_form))
            .route("/unsubscribe", web::post().to(unsubscribe))

            .app_data(backend.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
