use crate::admin::{AdminCommand, SessionStatus};
use crate::server::{ServerCommand, ServerTx};
use actix_web::{error, web, HttpResponse, Result};

pub fn configure_status_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/status").route(web::get().to(status)));
}

async fn status(srv_tx: web::Data<ServerTx>) -> Result<HttpResponse> {
    let (tx, rx) = tokio::sync::oneshot::channel::<SessionStatus>();

    srv_tx
        .get_ref()
        .clone()
        .send(ServerCommand::Admin(AdminCommand::GetSessionStatus { tx }))
        .map_err(|_| error::ErrorInternalServerError("Internal Server Error"))?;

    let status = rx
        .await
        .map_err(|_| error::ErrorInternalServerError("Receiver await error"))?;

    Ok(HttpResponse::Ok().json(status))
}
