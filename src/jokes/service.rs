use tokio::sync::mpsc;

use crate::{action::Action, jokes::Category, jokes::JokeClient};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JokeCommand {
    Fetch { category: Category },
}

impl JokeCommand {
    pub fn fetch(category: Category) -> Self {
        Self::Fetch { category }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fetch { .. } => "Fetch",
        }
    }
}

/// JokeService performs HTTP fetches off the UI loop.
///
/// Commands arrive over an mpsc channel, results go back to the app as
/// actions. One command is handled at a time; the UI decides whether to
/// dispatch while a fetch is already in flight.
pub struct JokeService {
    client: JokeClient,
    // Incoming channels
    cmd_rx: mpsc::UnboundedReceiver<JokeCommand>,
    terminate_rx: mpsc::UnboundedReceiver<()>,
    // Outgoing channel for results and status updates
    action_tx: mpsc::UnboundedSender<Action>,
}

pub type NewJokeService = (
    mpsc::UnboundedSender<JokeCommand>, // cmd_tx - fetches to perform
    mpsc::UnboundedSender<()>,          // terminate_tx - shutdown signal
    JokeService,
);

impl JokeService {
    pub fn new(client: JokeClient, action_tx: mpsc::UnboundedSender<Action>) -> NewJokeService {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (terminate_tx, terminate_rx) = mpsc::unbounded_channel();

        (
            cmd_tx,
            terminate_tx,
            Self {
                client,
                cmd_rx,
                terminate_rx,
                action_tx,
            },
        )
    }

    /// Run the JokeService in a background task
    pub fn run(mut self) {
        tokio::spawn(async move {
            if let Err(e) = self.run_service().await {
                log::error!("JokeService error: {e}");
                let _ = self
                    .action_tx
                    .send(Action::Error(format!("JokeService error: {e}")));
            }
        });
    }

    /// Main service loop
    async fn run_service(&mut self) -> crate::Result<()> {
        loop {
            tokio::select! {
                cmd = self.cmd_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd).await,
                    None => break,
                },
                _ = self.terminate_rx.recv() => {
                    log::info!("JokeService received termination signal");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Handle a JokeCommand and report the outcome as actions.
    async fn handle_command(&mut self, cmd: JokeCommand) {
        log::debug!("Handling JokeCommand: {cmd:?}");

        match cmd {
            JokeCommand::Fetch { category } => match self.client.fetch(category).await {
                Ok(joke) => {
                    let _ = self.action_tx.send(Action::JokeLoaded(joke));
                    let _ = self
                        .action_tx
                        .send(Action::SystemMessage(format!("[Fetched] {category}")));
                }
                Err(e) => {
                    log::error!("Joke fetch failed: {e}");
                    let _ = self.action_tx.send(Action::JokeFailed);
                    let _ = self
                        .action_tx
                        .send(Action::SystemMessage(format!("[Fetch failed] {category}")));
                }
            },
        }
    }
}
