use std::collections::BTreeSet;
use std::sync::{Arc, MutexGuard};

use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

use super::frame::ClientFrame;
use super::state::{ConnectionState, StateCell};
use super::{Feed, MessageHandler};
use crate::config::StreamConfig;
use crate::errors::{FmpError, Result};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

enum Command {
    Frame(ClientFrame),
    Close,
}

/// Why the receive loop stopped pumping a socket.
enum Exit {
    Stopped,
    Dropped,
}

enum Reconnect {
    Connected(Box<Socket>),
    Stopped,
    GaveUp,
}

/// A running receive task and the channel feeding it outgoing frames.
struct Connection {
    commands: mpsc::UnboundedSender<Command>,
    task: JoinHandle<()>,
}

impl Connection {
    fn is_live(&self) -> bool {
        !self.commands.is_closed() && !self.task.is_finished()
    }
}

/// State shared between the client and its receive task.
struct Shared {
    config: StreamConfig,
    handler: Arc<dyn MessageHandler>,
    state: StateCell,
    subscriptions: std::sync::Mutex<BTreeSet<String>>,
}

impl Shared {
    fn lock_subscriptions(&self) -> MutexGuard<'_, BTreeSet<String>> {
        self.subscriptions.lock().unwrap_or_else(|poisoned| {
            warn!("Stream subscriptions mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn report(&self, error: FmpError) {
        warn!("Stream error on {}: {}", self.config.url, error);
        self.handler.on_error(&error);
    }
}

/// Client for one real-time feed.
///
/// `start` opens the socket, sends the login frame and spawns the receive
/// task; every inbound frame is then handed to the [`MessageHandler`] as-is.
/// `stop` closes the socket and waits for the receive task to exit.
///
/// ```no_run
/// use fmp_client::stream::StreamClient;
///
/// # async fn run() -> fmp_client::Result<()> {
/// let stream = StreamClient::equities("demo", |message: String| println!("{message}"));
/// stream.start().await?;
/// stream.subscribe("aapl").await?;
/// // ...
/// stream.stop().await;
/// # Ok(())
/// # }
/// ```
pub struct StreamClient {
    shared: Arc<Shared>,
    connection: Mutex<Option<Connection>>,
}

impl StreamClient {
    pub fn new(config: StreamConfig, handler: impl MessageHandler) -> Self {
        Self::with_handler(config, Arc::new(handler))
    }

    pub fn with_handler(config: StreamConfig, handler: Arc<dyn MessageHandler>) -> Self {
        Self {
            shared: Arc::new(Shared {
                config,
                handler,
                state: StateCell::new(),
                subscriptions: std::sync::Mutex::new(BTreeSet::new()),
            }),
            connection: Mutex::new(None),
        }
    }

    /// Client for the US equities feed.
    pub fn equities(api_key: impl Into<String>, handler: impl MessageHandler) -> Self {
        Self::new(StreamConfig::new(Feed::Equities, api_key), handler)
    }

    /// Client for the crypto feed.
    pub fn crypto(api_key: impl Into<String>, handler: impl MessageHandler) -> Self {
        Self::new(StreamConfig::new(Feed::Crypto, api_key), handler)
    }

    /// Client for the forex feed.
    pub fn forex(api_key: impl Into<String>, handler: impl MessageHandler) -> Self {
        Self::new(StreamConfig::new(Feed::Forex, api_key), handler)
    }

    pub fn url(&self) -> &str {
        &self.shared.config.url
    }

    pub fn state(&self) -> ConnectionState {
        self.shared.state.get()
    }

    /// Tickers currently subscribed, sorted.
    pub fn subscriptions(&self) -> Vec<String> {
        self.shared.lock_subscriptions().iter().cloned().collect()
    }

    /// Opens the connection and logs in.
    ///
    /// Returns once the login frame has been sent and the receive task is
    /// running. Calling `start` on a running stream does nothing.
    pub async fn start(&self) -> Result<()> {
        let mut connection = self.connection.lock().await;

        if connection.as_ref().is_some_and(Connection::is_live) {
            debug!("Stream to {} is already running", self.url());
            return Ok(());
        }
        if let Some(stale) = connection.take() {
            // The task has finished; this only collects it.
            let _ = stale.task.await;
            self.shared.state.mark_disconnected();
        }

        self.shared.state.transition(ConnectionState::Connecting)?;
        let socket = match open(&self.shared).await {
            Ok(socket) => socket,
            Err(e) => {
                self.shared.state.mark_disconnected();
                return Err(e);
            }
        };
        self.shared.state.transition(ConnectionState::Streaming)?;

        let (commands, receiver) = mpsc::unbounded_channel();
        let task = tokio::spawn(receive_loop(self.shared.clone(), socket, receiver));
        *connection = Some(Connection { commands, task });

        info!("Stream connected to {}", self.url());
        Ok(())
    }

    /// Subscribes to updates for `ticker`.
    pub async fn subscribe(&self, ticker: impl Into<String>) -> Result<()> {
        let ticker = ticker.into();

        let connection = self.connection.lock().await;
        let connection = live(&connection)?;

        // Queue before recording: a replay that sees the ticker also sees its frame.
        connection
            .commands
            .send(Command::Frame(ClientFrame::subscribe(ticker.as_str())))
            .map_err(|_| FmpError::NotConnected)?;
        self.shared.lock_subscriptions().insert(ticker);
        Ok(())
    }

    /// Stops updates for `ticker`.
    pub async fn unsubscribe(&self, ticker: impl Into<String>) -> Result<()> {
        let ticker = ticker.into();

        let connection = self.connection.lock().await;
        let connection = live(&connection)?;

        self.shared.lock_subscriptions().remove(&ticker);
        connection
            .commands
            .send(Command::Frame(ClientFrame::unsubscribe(ticker)))
            .map_err(|_| FmpError::NotConnected)
    }

    /// Closes the connection and waits for the receive task to exit.
    ///
    /// No handler callback runs after `stop` returns.
    pub async fn stop(&self) {
        let mut connection = self.connection.lock().await;
        let Some(Connection { commands, task }) = connection.take() else {
            return;
        };

        let state = &self.shared.state;
        if !state.transition_from(ConnectionState::Streaming, ConnectionState::Closing) {
            state.transition_from(ConnectionState::Authenticated, ConnectionState::Closing);
        }

        let _ = commands.send(Command::Close);
        drop(commands);
        if let Err(e) = task.await {
            warn!("Stream task for {} ended abnormally: {}", self.url(), e);
        }

        state.mark_disconnected();
        self.shared.lock_subscriptions().clear();
        info!("Stream to {} stopped", self.url());
    }
}

impl std::fmt::Debug for StreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamClient")
            .field("url", &self.shared.config.url)
            .field("state", &self.state())
            .field("subscriptions", &self.subscriptions())
            .finish_non_exhaustive()
    }
}

fn live(connection: &Option<Connection>) -> Result<&Connection> {
    connection
        .as_ref()
        .filter(|c| c.is_live())
        .ok_or(FmpError::NotConnected)
}

fn text_frame(frame: &ClientFrame) -> Result<Message> {
    Ok(Message::Text(frame.to_text()?.into()))
}

/// Connects within the configured timeout and logs in.
async fn open(shared: &Shared) -> Result<Socket> {
    let url = shared.config.url.as_str();
    let (mut socket, _) = tokio::time::timeout(shared.config.connect_timeout, connect_async(url))
        .await
        .map_err(|_| FmpError::Timeout {
            endpoint: url.to_string(),
        })??;

    socket
        .send(text_frame(&ClientFrame::login(shared.config.api_key.as_str()))?)
        .await?;
    shared.state.transition(ConnectionState::Authenticated)?;

    Ok(socket)
}

/// Opens a fresh socket, replays the recorded subscriptions and flushes the
/// frames queued meanwhile. Returns `None` when a close was requested.
async fn resume(
    shared: &Shared,
    commands: &mut mpsc::UnboundedReceiver<Command>,
    queued: &mut Vec<ClientFrame>,
) -> Result<Option<Socket>> {
    let mut socket = open(shared).await?;

    let replayed = shared.lock_subscriptions().clone();
    for ticker in &replayed {
        socket
            .send(text_frame(&ClientFrame::subscribe(ticker.as_str()))?)
            .await?;
    }

    // Drained only after the snapshot above.
    while let Ok(command) = commands.try_recv() {
        match command {
            Command::Frame(frame) => queued.push(frame),
            Command::Close => {
                if let Err(e) = socket.close(None).await {
                    debug!("Error while closing stream: {}", e);
                }
                return Ok(None);
            }
        }
    }
    for frame in pending_frames(std::mem::take(queued), &replayed) {
        socket.send(text_frame(&frame)?).await?;
    }

    Ok(Some(socket))
}

/// Frames queued while the socket was down that the replay did not cover.
fn pending_frames(queued: Vec<ClientFrame>, replayed: &BTreeSet<String>) -> Vec<ClientFrame> {
    queued
        .into_iter()
        .filter(|frame| match frame {
            ClientFrame::Subscribe { ticker } => !replayed.contains(ticker),
            ClientFrame::Unsubscribe { ticker } => replayed.contains(ticker),
            ClientFrame::Login { .. } => false,
        })
        .collect()
}

async fn receive_loop(
    shared: Arc<Shared>,
    mut socket: Socket,
    mut commands: mpsc::UnboundedReceiver<Command>,
) {
    loop {
        match pump(&shared, &mut socket, &mut commands).await {
            Exit::Stopped => break,
            Exit::Dropped => {
                shared.state.mark_disconnected();
                match reconnect(&shared, &mut commands).await {
                    Reconnect::Connected(next) => socket = *next,
                    Reconnect::Stopped => break,
                    Reconnect::GaveUp => {
                        shared.lock_subscriptions().clear();
                        break;
                    }
                }
            }
        }
    }

    // Senders must see a closed channel before the close callback runs.
    drop(commands);
    shared.state.mark_disconnected();
    shared.handler.on_close();
    debug!("Stream receive task for {} exited", shared.config.url);
}

async fn pump(
    shared: &Shared,
    socket: &mut Socket,
    commands: &mut mpsc::UnboundedReceiver<Command>,
) -> Exit {
    loop {
        tokio::select! {
            command = commands.recv() => match command {
                Some(Command::Frame(frame)) => match text_frame(&frame) {
                    Ok(message) => {
                        if let Err(e) = socket.send(message).await {
                            shared.report(e.into());
                            return Exit::Dropped;
                        }
                    }
                    Err(e) => shared.report(e),
                },
                Some(Command::Close) | None => {
                    if let Err(e) = socket.close(None).await {
                        debug!("Error while closing stream: {}", e);
                    }
                    return Exit::Stopped;
                }
            },
            message = socket.next() => match message {
                Some(Ok(Message::Text(text))) => shared.handler.on_message(text.as_str().to_owned()),
                Some(Ok(Message::Binary(bytes))) => match std::str::from_utf8(&bytes) {
                    Ok(text) => shared.handler.on_message(text.to_owned()),
                    Err(_) => warn!("Dropping non UTF-8 binary frame ({} bytes)", bytes.len()),
                },
                Some(Ok(Message::Close(frame))) => {
                    info!("Stream {} closed by server: {:?}", shared.config.url, frame);
                    return Exit::Dropped;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    shared.report(e.into());
                    return Exit::Dropped;
                }
                None => {
                    info!("Stream {} ended", shared.config.url);
                    return Exit::Dropped;
                }
            },
        }
    }
}

async fn reconnect(
    shared: &Shared,
    commands: &mut mpsc::UnboundedReceiver<Command>,
) -> Reconnect {
    let policy = &shared.config.reconnect;
    let mut queued = Vec::new();

    for attempt in 1..=policy.max_attempts {
        let delay = policy.delay_for(attempt);
        info!(
            "Reconnecting to {} in {:?} ({}/{})",
            shared.config.url, delay, attempt, policy.max_attempts
        );

        let sleep = tokio::time::sleep(delay);
        tokio::pin!(sleep);
        loop {
            tokio::select! {
                _ = &mut sleep => break,
                command = commands.recv() => match command {
                    Some(Command::Frame(frame)) => queued.push(frame),
                    Some(Command::Close) | None => return Reconnect::Stopped,
                },
            }
        }

        if let Err(e) = shared.state.transition(ConnectionState::Connecting) {
            warn!("Abandoning reconnect to {}: {}", shared.config.url, e);
            return Reconnect::Stopped;
        }

        match resume(shared, commands, &mut queued).await {
            Ok(None) => return Reconnect::Stopped,
            Ok(Some(socket)) => {
                return match shared.state.transition(ConnectionState::Streaming) {
                    Ok(()) => {
                        info!("Reconnected to {}", shared.config.url);
                        Reconnect::Connected(Box::new(socket))
                    }
                    Err(e) => {
                        warn!("Abandoning reconnect to {}: {}", shared.config.url, e);
                        Reconnect::Stopped
                    }
                };
            }
            Err(e) => {
                shared.report(e);
                shared.state.mark_disconnected();
            }
        }
    }

    if policy.is_enabled() {
        warn!(
            "Giving up on {} after {} reconnect attempts",
            shared.config.url, policy.max_attempts
        );
    }
    Reconnect::GaveUp
}
