use chrono::{NaiveDate, TimeZone, Utc};
use interbank_api::{
    Client, Config, DateRange, Environment, Error, ReceivedPixFilter, Scope, StatementFilter,
    TimeRange,
};
use interbank_api::types::{OperationType, TransactionType};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client_for(server: &MockServer) -> Client {
    let config = Config::new("client-id", "client-secret", Environment::Sandbox)
        .with_account_number("12345678")
        .with_base_url(&server.uri())
        .unwrap();
    Client::new(config).unwrap()
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/v2/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("token.json")))
        .mount(server)
        .await;
}

fn march() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    )
}

#[tokio::test]
async fn get_balance_success() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/banking/v2/saldo"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("x-conta-corrente", "12345678"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("balance.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let balance = client.banking().balance(None).await.unwrap();
    assert_eq!(balance.available, 15230.42);
    assert_eq!(balance.blocked_judicially, 120.0);
}

#[tokio::test]
async fn token_is_requested_once_per_scope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/token"))
        .and(body_string_contains("scope=extrato.read"))
        .and(body_string_contains("client_id=client-id"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("token.json")))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/banking/v2/saldo"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("balance.json")))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.banking().balance(None).await.unwrap();
    client.banking().balance(None).await.unwrap();
}

#[tokio::test]
async fn token_failure_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/token"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"title":"Credenciais inválidas"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.banking().balance(None).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(err.message().contains("extrato.read"));
    assert_eq!(err.detail(), Some(&json!({"title": "Credenciais inválidas"})));
}

#[tokio::test]
async fn get_statement_success() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/banking/v2/extrato"))
        .and(query_param("dataInicio", "2024-03-01"))
        .and(query_param("dataFim", "2024-03-31"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("statement.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let statement = client.banking().statement(&march()).await.unwrap();
    assert_eq!(statement.entries.len(), 2);
    assert_eq!(statement.entries[1].operation_type, OperationType::Debit);
}

#[tokio::test]
async fn enriched_statement_walks_all_pages() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server).await;

    for (page, fixture) in [
        ("0", "enriched_statement_page_0.json"),
        ("1", "enriched_statement_page_1.json"),
    ] {
        Mock::given(method("GET"))
            .and(path("/banking/v2/extrato/completo"))
            .and(query_param("tipoTransacao", "PIX"))
            .and(query_param("pagina", page))
            .and(query_param("tamanhoPagina", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture(fixture)))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = client_for(&mock_server);
    let filter = StatementFilter::default().with_transaction_type(TransactionType::Pix);
    let transactions = client
        .banking()
        .enriched_statement(&march(), Some(&filter))
        .await
        .unwrap();

    let ids: Vec<_> = transactions
        .iter()
        .map(|t| t.id.as_deref().unwrap())
        .collect();
    assert_eq!(ids, vec!["b5a7f6c2-1", "b5a7f6c2-2", "b5a7f6c2-3"]);
}

#[tokio::test]
async fn enriched_statement_fails_when_a_page_fails() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/banking/v2/extrato/completo"))
        .and(query_param("pagina", "0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("enriched_statement_page_0.json")),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/banking/v2/extrato/completo"))
        .and(query_param("pagina", "1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .banking()
        .enriched_statement(&march(), None)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(err.detail().is_none());
}

#[tokio::test]
async fn bad_request_keeps_error_detail() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/banking/v2/extrato"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(load_fixture("error_bad_request.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.banking().statement(&march()).await.unwrap_err();

    assert!(matches!(err, Error::Transport { .. }));
    assert_eq!(err.message(), "Request failed with status 400");
    let detail = err.detail().unwrap();
    assert_eq!(detail["title"], "Requisição inválida");
    assert_eq!(detail["violacoes"][0]["propriedade"], "dataInicio");
}

#[tokio::test]
async fn malformed_json_is_decode_error() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/banking/v2/saldo"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.banking().balance(None).await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.detail().is_none());
}

#[tokio::test]
async fn list_charges_success() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/cobranca/v3/cobrancas"))
        .and(query_param("dataInicial", "2024-03-01"))
        .and(query_param("paginacao.paginaAtual", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("charges_page.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let charges = client.billing().list(&march(), None).await.unwrap();
    assert_eq!(charges.len(), 1);
    assert_eq!(charges[0].charge.your_number, "INV-0042");
    assert_eq!(charges[0].pix.as_ref().unwrap().txid, "tx5f0e1c2a");
}

#[tokio::test]
async fn save_charge_pdf_writes_file() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/cobranca/v3/cobrancas/5f0e1c2a/pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pdf": "JVBERi0xLjQK"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("cobranca.pdf");
    client.billing().save_pdf("5f0e1c2a", &file).await.unwrap();
    assert_eq!(std::fs::read(&file).unwrap(), b"%PDF-1.4\n");
}

#[tokio::test]
async fn create_pix_charge_with_txid() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server).await;

    Mock::given(method("PUT"))
        .and(path("/pix/v2/cob/tx0001"))
        .and(body_string_contains(r#""chave":"chave@example.com""#))
        .respond_with(ResponseTemplate::new(201).set_body_string(load_fixture("pix_charge.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let charge = interbank_api::types::NewPixCharge {
        amount: interbank_api::types::PixAmount {
            original: "37.00".to_string(),
            change_mode: None,
        },
        key: "chave@example.com".to_string(),
        ..Default::default()
    };
    let created = client
        .pix()
        .create_charge(Some("tx0001"), &charge)
        .await
        .unwrap();
    assert_eq!(created.txid, "tx0001");
    assert_eq!(created.debtor.unwrap().name, "Maria Souza");
}

#[tokio::test]
async fn list_received_pix_with_filter() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/pix/v2/pix"))
        .and(query_param("inicio", "2024-05-01T00:00:00Z"))
        .and(query_param("devolucaoPresente", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("received_pix.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let range = TimeRange::new(
        Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 5, 31, 23, 59, 59).unwrap(),
    );
    let filter = ReceivedPixFilter::default().with_devolution_present(true);
    let received = client
        .pix()
        .list_received(&range, Some(&filter))
        .await
        .unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].devolutions[0].amount, "7.00");
}

#[tokio::test]
async fn webhook_lifecycle() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server).await;
    let key = "6f1c2d3e-aaaa-4bbb-8ccc-000000000001";

    Mock::given(method("PUT"))
        .and(path(format!("/pix/v2/webhook/{}", key)))
        .and(body_json(json!({"webhookUrl": "https://hooks.example.com/inter"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/pix/v2/webhook/{}", key)))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("webhook.json")))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/pix/v2/webhook/{}", key)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let webhooks = client.pix().webhooks();
    webhooks
        .include(key, "https://hooks.example.com/inter", Scope::PixWebhookWrite)
        .await
        .unwrap();
    let webhook = webhooks.retrieve(key, Scope::PixWebhookRead).await.unwrap();
    assert_eq!(webhook.url, "https://hooks.example.com/inter");
    assert!(webhook.created_at.is_some());
    webhooks.delete(key, Scope::PixWebhookWrite).await.unwrap();
}

#[tokio::test]
async fn webhook_retrieve_not_found() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/banking/v2/webhooks/pix-pagamento"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"title":"Webhook não encontrado"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .banking()
        .webhooks()
        .retrieve("pix-pagamento", Scope::BankingWebhookRead)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.detail().unwrap()["title"], "Webhook não encontrado");
}
