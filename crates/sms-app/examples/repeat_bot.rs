//! Demo keyword application: HELP and REPEAT over the console transport.
//!
//! Reads one message per line from stdin as if it came from a fixed caller:
//!
//! ```text
//! cargo run --example repeat_bot
//! HELP
//! REPEAT 3 hi
//! HELP; REPEAT 2 bye
//! ```

use std::io::BufRead;
use std::sync::Arc;

use keyword_router::KeywordRouter;
use mock_transport::ConsoleTransport;
use sms_app::SmsApplication;
use sms_core::{FnHandler, HandlerError, Outcome};

const CALLER: &str = "+15551234567";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let router = KeywordRouter::builder()
        .scope(["HELP"])
        .blank(FnHandler::new("help", |_ctx, _args| {
            Ok(Outcome::Respond(
                "Commands: HELP, REPEAT <NUMBER> <STRING>".to_string(),
            ))
        }))
        .finish()
        .scope(["REPEAT"])
        .route(
            "(numbers) (.+)",
            FnHandler::new("repeat", |_ctx, args: Vec<String>| {
                let count: usize = args[0]
                    .parse()
                    .map_err(|_| HandlerError::BadCapture(args[0].clone()))?;
                Ok(Outcome::Respond(vec![args[1].clone(); count].join(" ")))
            }),
        )
        .catch_all(FnHandler::new("repeat-usage", |_ctx, _args| {
            Ok(Outcome::CallerError(
                "Usage: REPEAT <NUMBER> <STRING>".to_string(),
            ))
        }))
        .finish()
        .build()?;

    let app = SmsApplication::builder(Arc::new(ConsoleTransport))
        .router(router)
        .fallback(FnHandler::new("confused", |_ctx, _args| {
            Ok(Outcome::Respond("I don't understand; try HELP".to_string()))
        }))
        .build();

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        app.incoming(CALLER, &line).await?;
    }

    Ok(())
}
