//! End-to-end pipeline tests over a recording transport.

use std::sync::{Arc, Mutex};

use keyword_router::KeywordRouter;
use mock_transport::{FailingTransport, RecordingTransport};
use sms_app::{Hooks, SmsApplication};
use sms_core::{FnHandler, HandlerError, Outcome, TransactionId};

fn repeat_router() -> KeywordRouter {
    KeywordRouter::builder()
        .scope(["HELP"])
        .blank(FnHandler::new("help", |_ctx, _args| {
            Ok(Outcome::Respond("Here is some help".to_string()))
        }))
        .finish()
        .scope(["REPEAT"])
        .route(
            "(numbers) (.+)",
            FnHandler::new("repeat", |_ctx, args: Vec<String>| {
                let count: usize = args[0]
                    .parse()
                    .map_err(|_| HandlerError::BadCapture(args[0].clone()))?;
                let reply = vec![args[1].clone(); count].join(" ");
                Ok(Outcome::Respond(reply))
            }),
        )
        .catch_all(FnHandler::new("repeat-usage", |_ctx, _args| {
            Ok(Outcome::CallerError(
                "Usage: REPEAT <NUMBER> <STRING>".to_string(),
            ))
        }))
        .finish()
        .build()
        .expect("router")
}

#[tokio::test]
async fn test_repeat_reply() {
    let transport = Arc::new(RecordingTransport::new());
    let app = SmsApplication::builder(transport.clone())
        .router(repeat_router())
        .build();

    app.incoming("+15551234567", "REPEAT 3 hi").await.unwrap();

    let sent = transport.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].body, "hi hi hi");
    // destination normalized to external form at the transport call
    assert_eq!(sent[0].destination, "+15551234567");
}

#[tokio::test]
async fn test_help_blank_reply() {
    let transport = Arc::new(RecordingTransport::new());
    let app = SmsApplication::builder(transport.clone())
        .router(repeat_router())
        .build();

    app.incoming("+15551234567", "HELP").await.unwrap();

    assert_eq!(
        transport.sent_bodies().await,
        vec!["Here is some help".to_string()]
    );
}

#[tokio::test]
async fn test_bare_prefix_hits_catch_all() {
    let transport = Arc::new(RecordingTransport::new());
    let app = SmsApplication::builder(transport.clone())
        .router(repeat_router())
        .build();

    app.incoming("+15551234567", "REPEAT").await.unwrap();

    assert_eq!(
        transport.sent_bodies().await,
        vec!["Usage: REPEAT <NUMBER> <STRING>".to_string()]
    );
}

#[tokio::test]
async fn test_chunks_dispatched_in_order_with_shared_transaction() {
    let transactions: Arc<Mutex<Vec<TransactionId>>> = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&transactions);

    let router = KeywordRouter::builder()
        .scope(["HELP"])
        .blank(FnHandler::new("help", move |ctx, _args| {
            seen.lock().unwrap().push(ctx.transaction);
            Ok(Outcome::Respond("Here is some help".to_string()))
        }))
        .finish()
        .scope(["REPEAT"])
        .route(
            "(numbers) (.+)",
            FnHandler::new("repeat", {
                let seen = Arc::clone(&transactions);
                move |ctx, args: Vec<String>| {
                    seen.lock().unwrap().push(ctx.transaction);
                    assert!(ctx.is_virtual);
                    let count: usize = args[0].parse().unwrap();
                    Ok(Outcome::Respond(vec![args[1].clone(); count].join(" ")))
                }
            }),
        )
        .finish()
        .build()
        .unwrap();

    let transport = Arc::new(RecordingTransport::new());
    let app = SmsApplication::builder(transport.clone())
        .router(router)
        .build();

    app.incoming("+15551234567", "HELP; REPEAT 3 hi").await.unwrap();

    // both chunks handled, in order
    assert_eq!(
        transport.sent_bodies().await,
        vec!["Here is some help".to_string(), "hi hi hi".to_string()]
    );

    // same transaction across chunks, and in the assignable range
    let transactions = transactions.lock().unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0], transactions[1]);
    assert!(
        (TransactionId::MIN..=TransactionId::MAX).contains(&transactions[0].value())
    );
}

#[tokio::test]
async fn test_top_level_transactions_are_independent() {
    let transactions: Arc<Mutex<Vec<TransactionId>>> = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&transactions);

    let router = KeywordRouter::builder()
        .route(
            "ping",
            FnHandler::new("ping", move |ctx, _args| {
                seen.lock().unwrap().push(ctx.transaction);
                Ok(Outcome::Complete)
            }),
        )
        .build()
        .unwrap();

    let transport = Arc::new(RecordingTransport::new());
    let app = SmsApplication::builder(transport).router(router).build();

    // enough calls that two identical random ids in a row would be a bug
    for _ in 0..8 {
        app.incoming("+15551234567", "ping").await.unwrap();
    }

    let transactions = transactions.lock().unwrap();
    assert_eq!(transactions.len(), 8);
    assert!(
        transactions.windows(2).any(|pair| pair[0] != pair[1]),
        "every call drew the same transaction id"
    );
}

#[tokio::test]
async fn test_no_match_goes_to_fallback() {
    let transport = Arc::new(RecordingTransport::new());
    let app = SmsApplication::builder(transport.clone())
        .router(repeat_router())
        .fallback(FnHandler::new("fallback", |_ctx, args: Vec<String>| {
            Ok(Outcome::Respond(format!("I don't understand {:?}", args[0])))
        }))
        .build();

    app.incoming("+15551234567", "GIBBERISH 42").await.unwrap();

    assert_eq!(
        transport.sent_bodies().await,
        vec!["I don't understand \"GIBBERISH 42\"".to_string()]
    );
}

#[tokio::test]
async fn test_no_router_uses_fallback_directly() {
    let transport = Arc::new(RecordingTransport::new());
    let app = SmsApplication::builder(transport.clone())
        .fallback(FnHandler::new("echo", |_ctx, args: Vec<String>| {
            Ok(Outcome::Respond(args[0].clone()))
        }))
        .build();

    app.incoming("+15551234567", "anything at all").await.unwrap();

    assert_eq!(
        transport.sent_bodies().await,
        vec!["anything at all".to_string()]
    );
}

#[tokio::test]
async fn test_default_fallback_sends_nothing() {
    let transport = Arc::new(RecordingTransport::new());
    let app = SmsApplication::builder(transport.clone()).build();

    app.incoming("+15551234567", "anything").await.unwrap();

    assert!(transport.sent().await.is_empty());
}

#[tokio::test]
async fn test_caller_sees_normalized_internal_number() {
    let transport = Arc::new(RecordingTransport::new());
    let app = SmsApplication::builder(transport.clone())
        .router(
            KeywordRouter::builder()
                .route(
                    "whoami",
                    FnHandler::new("whoami", |ctx, _args| {
                        Ok(Outcome::Respond(ctx.caller.clone()))
                    }),
                )
                .build()
                .unwrap(),
        )
        .build();

    app.incoming("+15551234567", "whoami").await.unwrap();

    // handler saw the stripped form; the wire got the external form back
    let sent = transport.sent().await;
    assert_eq!(sent[0].body, "15551234567");
    assert_eq!(sent[0].destination, "+15551234567");
}

#[tokio::test]
async fn test_transport_failure_is_contained() {
    let app = SmsApplication::builder(Arc::new(FailingTransport))
        .router(repeat_router())
        .build();

    // the send fails but the pipeline must not surface it
    app.incoming("+15551234567", "HELP").await.unwrap();
}

#[tokio::test]
async fn test_handler_failure_propagates() {
    let router = KeywordRouter::builder()
        .route(
            "crash",
            FnHandler::new("crash", |_ctx, _args| {
                Err(HandlerError::Failed("database unreachable".to_string()))
            }),
        )
        .build()
        .unwrap();

    let transport = Arc::new(RecordingTransport::new());
    let app = SmsApplication::builder(transport.clone()).router(router).build();

    let err = app.incoming("+15551234567", "crash").await.unwrap_err();
    assert!(err.to_string().contains("crash"));
    assert!(transport.sent().await.is_empty());
}

#[tokio::test]
async fn test_hook_ordering() {
    let events: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let record = |events: &Arc<Mutex<Vec<String>>>, label: &'static str| {
        let events = Arc::clone(events);
        move |_dest: &str, _body: &str| events.lock().unwrap().push(label.to_string())
    };

    let hooks = Hooks::new()
        .on_before_incoming({
            let events = Arc::clone(&events);
            move |_ctx, _caller, _text| events.lock().unwrap().push("before_incoming".to_string())
        })
        .on_after_incoming({
            let events = Arc::clone(&events);
            move |_ctx, _caller, _text| events.lock().unwrap().push("after_incoming".to_string())
        })
        .on_before_outgoing(record(&events, "before_outgoing"))
        .on_after_outgoing(record(&events, "after_outgoing"));

    let router = KeywordRouter::builder()
        .scope(["HELP"])
        .blank(FnHandler::new("help", {
            let events = Arc::clone(&events);
            move |_ctx, _args| {
                events.lock().unwrap().push("handle".to_string());
                Ok(Outcome::Respond("Here is some help".to_string()))
            }
        }))
        .finish()
        .build()
        .unwrap();

    let transport = Arc::new(RecordingTransport::new());
    let app = SmsApplication::builder(transport)
        .router(router)
        .hooks(hooks)
        .build();

    app.incoming("+15551234567", "HELP").await.unwrap();

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            "before_incoming",
            "handle",
            "before_outgoing",
            "after_outgoing",
            "after_incoming",
        ]
    );
}

#[tokio::test]
async fn test_incoming_hooks_see_raw_text_once() {
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let hooks = Hooks::new().on_before_incoming({
        let seen = Arc::clone(&seen);
        move |_ctx, _caller, text| seen.lock().unwrap().push(text.to_string())
    });

    let transport = Arc::new(RecordingTransport::new());
    let app = SmsApplication::builder(transport)
        .router(repeat_router())
        .hooks(hooks)
        .build();

    app.incoming("+15551234567", "HELP; REPEAT 3 hi").await.unwrap();

    // the hook fires once for the top-level message, not per chunk
    assert_eq!(*seen.lock().unwrap(), vec!["HELP; REPEAT 3 hi".to_string()]);
}

#[tokio::test]
async fn test_flush_delegates_to_transport() {
    let transport = Arc::new(RecordingTransport::new());
    let app = SmsApplication::builder(transport.clone()).build();

    app.gateway().send("15551234567", "queued", true).await;
    assert_eq!(transport.pending_count().await, 1);

    app.flush().await.unwrap();
    assert_eq!(transport.pending_count().await, 0);
    assert_eq!(transport.sent_bodies().await, vec!["queued".to_string()]);
}

#[tokio::test]
async fn test_gateway_trims_trailing_whitespace_and_joins_lines() {
    let transport = Arc::new(RecordingTransport::new());
    let app = SmsApplication::builder(transport.clone()).build();

    app.gateway().send("15551234567", "hi hi hi ", false).await;
    app.gateway()
        .send_lines(
            "15551234567",
            &["line one".to_string(), "line two".to_string()],
            false,
        )
        .await;

    assert_eq!(
        transport.sent_bodies().await,
        vec!["hi hi hi".to_string(), "line one\nline two".to_string()]
    );
}
