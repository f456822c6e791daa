use contas_api::{
    Client, ContasApiError, Request,
    endpoints::{EntryId, FilterCriteria},
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};

/// Serve one request with a canned JSON response. The handle yields the
/// request line that was received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        let mut buf = [0u8; 1024];
        while !received.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&received)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (base_url, handle)
}

#[tokio::test]
async fn delete_with_message_body_succeeds() {
    let (base_url, server) =
        serve_once("200 OK", r#"{"message": "Gasto deleted successfully"}"#).await;
    let client = Client::new(&base_url);

    let response = client
        .send(Request::purchases().delete(EntryId::from(1)))
        .await
        .unwrap();

    assert_eq!(response.message.as_deref(), Some("Gasto deleted successfully"));
    assert_eq!(server.await.unwrap(), "DELETE /api/gastos/1 HTTP/1.1");
}

#[tokio::test]
async fn list_sends_filter_query_and_decodes_rows() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"[{"id": 3, "data": "2024-01-10", "categoria": "Lazer", "descricao": "Cinema", "valor": 40.0}]"#,
    )
    .await;
    let client = Client::new(&base_url);

    let filter = FilterCriteria::new().start("2024-01-01").category("Lazer");
    let entries = client.send(Request::bills().list(filter)).await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, EntryId::from(3));
    assert_eq!(entries[0].description, "Cinema");
    assert_eq!(
        server.await.unwrap(),
        "GET /api/despesas?data_inicio=2024-01-01&categoria=Lazer HTTP/1.1"
    );
}

#[tokio::test]
async fn rejected_save_carries_backend_message() {
    let (base_url, _server) =
        serve_once("400 Bad Request", r#"{"error": "Valor must be positive"}"#).await;
    let client = Client::new(&base_url);

    let entry = contas_api::endpoints::entries::NewEntry::new(
        chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        "Outros",
        "Teste",
        0.0,
    );
    let err = client
        .send(Request::purchases().create(entry))
        .await
        .unwrap_err();

    assert!(matches!(err, ContasApiError::Backend { .. }));
    assert_eq!(err.backend_message(), Some("Valor must be positive"));
}
