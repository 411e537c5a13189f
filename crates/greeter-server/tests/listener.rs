use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use greeter_core::{Error, ListenerConfig};
use greeter_server::listener;

/// Start a server on an ephemeral loopback port. Sending on the returned
/// channel triggers graceful shutdown.
async fn spawn_server() -> (String, oneshot::Sender<()>, JoinHandle<Result<(), Error>>) {
    let listener = listener::bind(&ListenerConfig::new("127.0.0.1", 0))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(listener::serve_with_shutdown(listener, async {
        let _ = rx.await;
    }));

    (format!("http://{addr}"), tx, handle)
}

#[tokio::test]
async fn serves_both_endpoints_over_tcp() {
    let (base, shutdown, handle) = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/api/express")).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), r#"{"message":"Hello from Express!"}"#);

    let resp = client
        .get(format!("{base}/api/express/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), r#"{"status":"ok"}"#);

    shutdown.send(()).unwrap();
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn accepts_concurrent_connections() {
    let (base, shutdown, handle) = spawn_server().await;

    let mut tasks = Vec::new();
    for _ in 0..16 {
        let url = format!("{base}/api/express/health");
        tasks.push(tokio::spawn(async move {
            // Separate clients so each request opens its own connection.
            let resp = reqwest::Client::new().get(url).send().await.unwrap();
            (resp.status(), resp.text().await.unwrap())
        }));
    }

    for task in tasks {
        let (status, body) = task.await.unwrap();
        assert_eq!(status, reqwest::StatusCode::OK);
        assert_eq!(body, r#"{"status":"ok"}"#);
    }

    shutdown.send(()).unwrap();
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn bind_fails_when_port_in_use() {
    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = taken.local_addr().unwrap().port();

    let err = listener::bind(&ListenerConfig::new("127.0.0.1", port))
        .await
        .unwrap_err();

    match err {
        Error::Bind { addr, .. } => assert_eq!(addr, format!("127.0.0.1:{port}")),
        other => panic!("expected bind error, got {other:?}"),
    }
}

#[tokio::test]
async fn bind_rejects_invalid_host() {
    let err = listener::bind(&ListenerConfig::new("not a host", 3000))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Bind { .. }));
}

#[tokio::test]
async fn shutdown_stops_accepting() {
    let (base, shutdown, handle) = spawn_server().await;

    shutdown.send(()).unwrap();
    handle.await.unwrap().unwrap();

    let result = reqwest::Client::new()
        .get(format!("{base}/api/express"))
        .send()
        .await;
    assert!(result.is_err());
}
