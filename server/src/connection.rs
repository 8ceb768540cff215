use std::time::Instant;

use actix::{Actor, ActorContext, AsyncContext, Handler, Message, Running, StreamHandler};
use actix_web::web::Bytes;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;

use system::uuid::Uuid;
use system::{ClientEvent, ConnectionId, ServerEvent};

use crate::config::HeartbeatConfig;
use crate::connection_tx_storage::ConnectionTx;
use crate::server::{ServerCommand, ServerTx};

#[derive(Debug)]
pub enum ConnectionCommand {
    Connect {
        connection_id: ConnectionId,
        tx: ConnectionTx,
    },
    Disconnect {
        from: ConnectionId,
    },
    ClientEvent {
        from: ConnectionId,
        event: ClientEvent,
    },
}

#[derive(Message)]
#[rtype(result = "()")]
struct ConnectionActorMessage(ServerEvent);

enum Reply {
    Nothing,
    Pong(Bytes),
    Close(Option<ws::CloseReason>),
}

struct ConnectionActor {
    connection_id: ConnectionId,
    srv_tx: ServerTx,
    heartbeat: HeartbeatConfig,
    last_seen: Instant,
}

impl ConnectionActor {
    fn send_to_server(&mut self, command: ConnectionCommand) {
        if self
            .srv_tx
            .send(ServerCommand::Connection(command))
            .is_err()
        {
            log::error!(
                "Server loop is gone, dropping command of connection {}",
                self.connection_id
            );
        }
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(self.heartbeat.interval, |act, ctx| {
            if act.is_timed_out(Instant::now()) {
                log::info!("Connection {} timed out", act.connection_id);
                ctx.stop();
                return;
            }
            ctx.ping(b"");
        });
    }

    fn is_timed_out(&self, now: Instant) -> bool {
        now.duration_since(self.last_seen) > self.heartbeat.client_timeout
    }

    /// Any frame from the peer counts as a sign of life.
    fn receive(&mut self, msg: ws::Message, now: Instant) -> Reply {
        self.last_seen = now;
        match msg {
            ws::Message::Ping(msg) => Reply::Pong(msg),
            ws::Message::Text(text) => {
                self.ingress(&text);
                Reply::Nothing
            }
            ws::Message::Binary(bin) => {
                log::debug!("Ignoring binary frame of size {}", bin.len());
                Reply::Nothing
            }
            ws::Message::Close(reason) => Reply::Close(reason),
            _ => Reply::Nothing,
        }
    }

    fn ingress(&mut self, text: &str) {
        match ClientEvent::from_json(text) {
            Ok(event) => {
                log::debug!("Ingress {:?}", event);
                let from = self.connection_id;
                self.send_to_server(ConnectionCommand::ClientEvent { from, event });
            }
            Err(err) => log::warn!(
                "Ignoring frame from connection {}: {}",
                self.connection_id,
                err
            ),
        }
    }
}

impl Actor for ConnectionActor {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<ServerEvent>();

        let connection_id = self.connection_id;
        self.send_to_server(ConnectionCommand::Connect { connection_id, tx });
        self.start_heartbeat(ctx);

        let addr = ctx.address().recipient();

        tokio::spawn(async move {
            log::debug!("connection green thread - started");
            while let Some(event) = rx.recv().await {
                if addr.do_send(ConnectionActorMessage(event)).is_err() {
                    break;
                }
            }
            log::debug!("connection green thread - terminated");
        });
    }

    fn stopping(&mut self, _: &mut Self::Context) -> Running {
        let from = self.connection_id;
        self.send_to_server(ConnectionCommand::Disconnect { from });
        Running::Stop
    }
}

/// Ingress
impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ConnectionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(msg) => match self.receive(msg, Instant::now()) {
                Reply::Pong(msg) => ctx.pong(&msg),
                Reply::Close(reason) => {
                    ctx.close(reason);
                    ctx.stop();
                }
                Reply::Nothing => (),
            },
            Err(err) => {
                log::warn!("Connection {} failed: {}", self.connection_id, err);
                ctx.stop();
            }
        }
    }
}

/// Egress
impl Handler<ConnectionActorMessage> for ConnectionActor {
    type Result = ();

    fn handle(
        &mut self,
        msg: ConnectionActorMessage,
        ctx: &mut ws::WebsocketContext<Self>,
    ) -> Self::Result {
        let server_event = &msg.0;
        log::debug!("Egress {:?}", server_event);
        match server_event.to_json() {
            Ok(text) => ctx.text(text),
            Err(err) => log::error!("Failed to encode {:?}: {}", server_event, err),
        }
    }
}

pub async fn ws_index(
    req: HttpRequest,
    stream: web::Payload,
    srv_tx: web::Data<ServerTx>,
    heartbeat: web::Data<HeartbeatConfig>,
) -> Result<HttpResponse, Error> {
    ws::start(
        ConnectionActor {
            connection_id: Uuid::new_v4(),
            srv_tx: srv_tx.get_ref().clone(),
            heartbeat: *heartbeat.get_ref(),
            last_seen: Instant::now(),
        },
        &req,
        stream,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc::unbounded_channel;

    fn actor_last_seen_at(last_seen: Instant) -> ConnectionActor {
        let (srv_tx, _srv_rx) = unbounded_channel();
        ConnectionActor {
            connection_id: Uuid::new_v4(),
            srv_tx,
            heartbeat: HeartbeatConfig {
                interval: Duration::from_secs(5),
                client_timeout: Duration::from_secs(10),
            },
            last_seen,
        }
    }

    #[test]
    fn it_times_out_silent_peer() {
        let start = Instant::now();
        let actor = actor_last_seen_at(start);
        assert!(!actor.is_timed_out(start + Duration::from_secs(10)));
        assert!(actor.is_timed_out(start + Duration::from_secs(11)));
    }

    #[test]
    fn it_counts_binary_frames_as_activity() {
        let start = Instant::now();
        let mut actor = actor_last_seen_at(start);
        let later = start + Duration::from_secs(9);

        let reply = actor.receive(ws::Message::Binary(Bytes::from_static(b"\x00")), later);

        assert!(matches!(reply, Reply::Nothing));
        assert!(!actor.is_timed_out(start + Duration::from_secs(15)));
    }

    #[test]
    fn it_answers_ping_with_same_payload() {
        let start = Instant::now();
        let mut actor = actor_last_seen_at(start);

        match actor.receive(ws::Message::Ping(Bytes::from_static(b"hi")), start) {
            Reply::Pong(payload) => assert_eq!(&payload[..], b"hi"),
            _ => panic!("ping must be answered"),
        }
    }
}
