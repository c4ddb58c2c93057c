use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::framer::Framer;
use crate::http::parser::parse_http_request;
use crate::http::writer::ResponseWriter;
use crate::server::access_log;
use crate::server::handler::StaticHandler;

const READ_CHUNK: usize = 4096;

pub struct Connection<S> {
    stream: S,
    peer: Option<SocketAddr>,
    framer: Framer,
    handler: Arc<StaticHandler>,
    state: ConnectionState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Reading,
    Processing,
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: Option<SocketAddr>, handler: Arc<StaticHandler>) -> Self {
        Self {
            stream,
            peer,
            framer: Framer::new(),
            handler,
            state: ConnectionState::Reading,
        }
    }

    /// Serves the connection until the buffered requests are answered or the
    /// peer goes away. Resets and broken pipes are not reported as errors.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let result = self.drive().await;

        self.state = ConnectionState::Closed;
        self.framer.clear();

        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(error = %e, "shutdown after close failed");
        }

        match result {
            Err(e) if is_disconnect(&e) => {
                tracing::debug!(peer = ?self.peer, error = %e, "peer disconnected");
                Ok(())
            }
            other => other,
        }
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            match self.state {
                ConnectionState::Reading => {
                    self.state = if self.read_more().await? {
                        ConnectionState::Processing
                    } else {
                        ConnectionState::Closed
                    };
                }

                ConnectionState::Processing => {
                    let mut answered = 0;

                    // Frame N+1 is not parsed until frame N's response is written.
                    while let Some(frame) = self.framer.next_frame() {
                        self.serve_frame(&frame).await?;
                        answered += 1;
                    }

                    // A partial frame keeps the connection open until it
                    // completes or the peer hangs up.
                    self.state = if answered > 0 && self.framer.buffered().is_empty() {
                        ConnectionState::Closed
                    } else {
                        ConnectionState::Reading
                    };
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads one chunk into the framer. Returns `false` once the peer has
    /// closed its side.
    async fn read_more(&mut self) -> anyhow::Result<bool> {
        let mut temp = [0u8; READ_CHUNK];
        let n = self.stream.read(&mut temp).await?;

        if n == 0 {
            return Ok(false);
        }

        self.framer.extend(&temp[..n]);
        Ok(true)
    }

    async fn serve_frame(&mut self, frame: &[u8]) -> anyhow::Result<()> {
        let started = Instant::now();

        let request = parse_http_request(frame);
        let response = self.handler.handle(&request).await;

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream).await?;

        access_log::record(self.peer, &request, &response, started.elapsed());
        Ok(())
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }
}

/// True for errors that only mean the peer went away.
pub fn is_disconnect(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>().is_some_and(|e| {
        matches!(
            e.kind(),
            io::ErrorKind::ConnectionReset
                | io::ErrorKind::ConnectionAborted
                | io::ErrorKind::BrokenPipe
                | io::ErrorKind::UnexpectedEof
        )
    })
}
