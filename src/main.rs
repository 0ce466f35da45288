//! Terminal front end for the staff advisor.

use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

use staff_advisor::adapters::terminal::render_message;
use staff_advisor::adapters::{KeywordAnalysisEngine, TerminalRenderer};
use staff_advisor::application::SessionController;
use staff_advisor::config::{AppConfig, LoggingConfig};
use staff_advisor::domain::conversation::ConversationSession;
use staff_advisor::domain::reference::ReferenceData;
use staff_advisor::domain::staff::StaffFunction;

const HELP: &str = "명령어: /function <작전|군수|인사|행정|정보>, /history, /help, /quit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    config.validate()?;

    let reference = match config.advisor.reference_data_path() {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading reference data");
            ReferenceData::load(path)?
        }
        None => ReferenceData::sample(),
    };

    let engine = KeywordAnalysisEngine::new(Arc::new(reference))
        .with_latency(config.advisor.simulated_latency());
    let session = ConversationSession::new(config.advisor.initial_staff_function)?;
    let controller = SessionController::new(session, Arc::new(engine));

    for message in &controller.snapshot().await.messages {
        print!("{}", render_message(message));
    }
    println!("{}", HELP);
    controller.subscribe(Arc::new(TerminalRenderer::new(std::io::stdout())));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(controller.current_function().await)?;
        let Some(line) = next_line(&mut lines).await else {
            break;
        };
        let line = line.trim();

        match line.split_once(' ').map_or((line, ""), |(cmd, rest)| (cmd, rest.trim())) {
            ("/quit" | "/exit", _) => break,
            ("/help", _) => println!("{}", HELP),
            ("/history", _) => {
                for message in &controller.snapshot().await.messages {
                    print!("{}", render_message(message));
                }
            }
            ("/function", tag) => match tag.parse::<StaffFunction>() {
                Ok(function) => {
                    if let Err(err) = controller.select_staff_function(function).await {
                        println!("{}", err);
                    }
                }
                Err(err) => println!("{}", err),
            },
            _ => match controller.submit(line).await {
                Ok(outcome) => {
                    if let Err(err) = outcome.wait().await {
                        tracing::error!(error = %err, "Submission did not complete");
                    }
                }
                Err(err) => println!("{}", err),
            },
        }
    }

    tracing::info!("Session closed");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Reads the next input line, skipping lines that are not valid UTF-8.
///
/// Returns `None` at end of input or on an unrecoverable read error.
async fn next_line<R: AsyncBufRead + Unpin>(lines: &mut Lines<R>) -> Option<String> {
    loop {
        match lines.next_line().await {
            Ok(line) => return line,
            Err(err) if err.kind() == std::io::ErrorKind::InvalidData => {
                tracing::warn!(error = %err, "Skipping unreadable input line");
            }
            Err(err) => {
                tracing::error!(error = %err, "Input stream failed");
                return None;
            }
        }
    }
}

fn prompt(function: StaffFunction) -> std::io::Result<()> {
    let mut out = std::io::stdout();
    write!(out, "{}> ", function.display_name())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_utf8_line_is_skipped() {
        let input: &[u8] = &[0xff, 0xfe, b'\n', b'h', b'i', b'\n'];
        let mut lines = BufReader::new(input).lines();

        assert_eq!(next_line(&mut lines).await.as_deref(), Some("hi"));
        assert_eq!(next_line(&mut lines).await, None);
    }

    #[tokio::test]
    async fn korean_input_reads_through() {
        let input = "정찰 요청\n/quit\n".as_bytes();
        let mut lines = BufReader::new(input).lines();

        assert_eq!(next_line(&mut lines).await.as_deref(), Some("정찰 요청"));
        assert_eq!(next_line(&mut lines).await.as_deref(), Some("/quit"));
        assert_eq!(next_line(&mut lines).await, None);
    }
}
