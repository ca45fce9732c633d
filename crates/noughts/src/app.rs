//! Read-render loop.

use crate::input::{parse_command, Command};
use crate::presenter::Presenter;
use crate::session::Session;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument};

const PROMPT: &str = "Your move (1-9, n = new game, q = quit): ";

/// Runs the game until `quit` or end of input.
///
/// Every line is parsed as a [`Command`]; invalid moves are ignored and the
/// board is simply shown again.
#[instrument(skip_all)]
pub async fn run<R, W>(
    session: &mut Session,
    presenter: Presenter,
    input: R,
    mut output: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    show(&mut output, presenter, session, true).await?;

    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Command::Quit => {
                info!("Player quit");
                break;
            }
            Command::Restart => session.restart(),
            Command::Unknown => debug!(%line, "Unrecognized input"),
            Command::Place(position) => {
                if session.player_move(position).is_ok() && session.opponent_to_move() {
                    show(&mut output, presenter, session, false).await?;
                    output.write_all(b"Computer is thinking...\n").await?;
                    output.flush().await?;
                    session.opponent_turn().await;
                }
            }
        }
        show(&mut output, presenter, session, true).await?;
    }

    Ok(())
}

async fn show<W>(
    output: &mut W,
    presenter: Presenter,
    session: &Session,
    prompt: bool,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    output
        .write_all(presenter.screen(session.state()).as_bytes())
        .await?;
    if prompt {
        let text = if session.state().is_over() {
            "Game over (n = new game, q = quit): "
        } else {
            PROMPT
        };
        output.write_all(text.as_bytes()).await?;
    }
    output.flush().await?;
    Ok(())
}
