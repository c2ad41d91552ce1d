//! Lifecycle tests: bind, serve, timeout policy, terminal errors.

use std::time::Duration;

use shopfront::http::routes;
use shopfront::{ServeError, Server, TimeoutPolicy};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

mod common;

#[tokio::test]
async fn accepts_connections_and_serves_requests() {
    let h = common::harness(28561);
    let server = Server::new(h.ctx.clone(), routes(h.ctx.clone()));
    tokio::spawn(server.serve());
    common::wait_for_listener(28561).await;

    let response = reqwest::get("http://127.0.0.1:28561/").await.unwrap();
    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("storefront v"), "body: {body}");

    assert!(h
        .info
        .contents()
        .contains("Listening in development mode on port 28561"));
    assert!(h.errors.is_empty());
}

#[tokio::test]
async fn occupied_port_surfaces_bind_error() {
    let h = common::harness(28562);
    let _holder = tokio::net::TcpListener::bind("0.0.0.0:28562").await.unwrap();

    let err = Server::new(h.ctx.clone(), routes(h.ctx.clone()))
        .serve()
        .await
        .unwrap_err();
    assert!(matches!(err, ServeError::Bind { port: 28562, .. }), "err: {err}");

    // The startup line is emitted before the bind attempt.
    assert!(h.info.contents().contains("port 28562"));
}

#[tokio::test]
async fn idle_connection_closed_without_touching_active_ones() {
    let h = common::harness(28563);
    let policy = TimeoutPolicy {
        idle: Duration::from_millis(200),
        ..TimeoutPolicy::default()
    };
    let server = Server::new(h.ctx.clone(), routes(h.ctx.clone())).with_timeouts(policy);
    tokio::spawn(server.serve());
    common::wait_for_listener(28563).await;

    let mut idle_conn = TcpStream::connect("127.0.0.1:28563").await.unwrap();

    // A second connection keeps making requests while the first sits
    // silent past its deadline.
    let mut active_conn = TcpStream::connect("127.0.0.1:28563").await.unwrap();
    let request = b"GET /healthz HTTP/1.1\r\nHost: localhost\r\n\r\n";
    for _ in 0..6 {
        active_conn.write_all(request).await.unwrap();
        let mut buf = [0u8; 1024];
        let n = active_conn.read(&mut buf).await.unwrap();
        assert!(n > 0);
        assert!(buf.starts_with(b"HTTP/1.1 200"), "unexpected response");
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    // The idle connection is gone: EOF or reset, depending on timing.
    let mut buf = [0u8; 1];
    let closed = tokio::time::timeout(Duration::from_secs(2), idle_conn.read(&mut buf))
        .await
        .expect("idle connection was not closed");
    match closed {
        Ok(0) | Err(_) => {}
        Ok(n) => panic!("idle connection produced {n} unexpected bytes"),
    }

    // The active connection survived its neighbor's teardown.
    active_conn.write_all(request).await.unwrap();
    let mut buf = [0u8; 1024];
    let n = active_conn.read(&mut buf).await.unwrap();
    assert!(buf[..n].starts_with(b"HTTP/1.1 200"));

    // An idle drop is a per-connection condition, not a process error.
    assert!(h.errors.is_empty(), "errors: {}", h.errors.contents());
}

#[tokio::test]
async fn slow_headers_terminated_quietly() {
    let h = common::harness(28564);
    let policy = TimeoutPolicy {
        read_header: Duration::from_millis(200),
        ..TimeoutPolicy::default()
    };
    let server = Server::new(h.ctx.clone(), routes(h.ctx.clone())).with_timeouts(policy);
    tokio::spawn(server.serve());
    common::wait_for_listener(28564).await;

    // Trickle half a request line and stall.
    let mut slow = TcpStream::connect("127.0.0.1:28564").await.unwrap();
    slow.write_all(b"GET / HTTP/1.1\r\nHost: loc").await.unwrap();

    let mut buf = [0u8; 256];
    let closed = tokio::time::timeout(Duration::from_secs(3), slow.read(&mut buf))
        .await
        .expect("slow-header connection was not terminated");
    match closed {
        Ok(0) | Err(_) => {}
        // hyper may write a 408 before closing; either way the
        // connection must be over.
        Ok(_) => {
            let eof = tokio::time::timeout(Duration::from_secs(3), slow.read(&mut buf))
                .await
                .expect("slow-header connection was not terminated");
            assert!(matches!(eof, Ok(0) | Err(_)));
        }
    }

    // Still serving, and nothing hit the error sink.
    let response = reqwest::get("http://127.0.0.1:28564/healthz").await.unwrap();
    assert_eq!(response.status(), 200);
    assert!(h.errors.is_empty(), "errors: {}", h.errors.contents());
}
