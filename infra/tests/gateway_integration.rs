//! End-to-end wiring of store, templates, session, and delivery

use std::path::PathBuf;
use std::sync::Arc;

use cr_core::errors::{DeliveryError, DomainError};
use cr_core::services::otp::{OtpRequest, OtpService, OtpServiceConfig};
use cr_core::templates::TemplateRenderer;
use cr_infra::{load_template_table, FileOtpStore, MockDeliveryService, SessionMonitor};
use cr_shared::config::AppConfig;

struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("coderelay-test-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

async fn build_gateway(
    dir: &TempDir,
    monitor: SessionMonitor,
) -> (
    OtpService<FileOtpStore, MockDeliveryService>,
    Arc<MockDeliveryService>,
) {
    let config = AppConfig::default();

    let store = Arc::new(
        FileOtpStore::open_with_capacity(dir.path.join("otp_store.json"), config.otp.capacity)
            .await
            .unwrap(),
    );
    let delivery = Arc::new(MockDeliveryService::with_monitor(monitor));
    let table = load_template_table(&config.template).await.unwrap();

    let service = OtpService::new(
        store,
        delivery.clone(),
        TemplateRenderer::new(table),
        OtpServiceConfig::from_app_config(&config.otp, &config.template),
    );
    (service, delivery)
}

#[tokio::test]
async fn test_full_issue_deliver_verify_flow() {
    let dir = TempDir::new();
    let (service, delivery) = build_gateway(&dir, SessionMonitor::ready()).await;

    let request = OtpRequest::new("+15551234567")
        .with_template("login")
        .with_company("Acme")
        .with_variable("name", "Alex");
    let delivered = service.request_and_deliver(&request).await.unwrap();

    assert_eq!(delivered.code.len(), 6);
    assert!(delivered.message.contains("*Alex*"));
    assert!(delivered.message.contains("*Acme*"));

    let sent = delivery.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].message, delivered.message);

    assert!(service
        .verify_otp("+15551234567", &delivered.code)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_issued_code_verifies_even_when_channel_not_paired() {
    let dir = TempDir::new();
    let monitor = SessionMonitor::new();
    let (service, delivery) = build_gateway(&dir, monitor.clone()).await;

    let err = service
        .request_and_deliver(&OtpRequest::new("+15551234567"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Delivery(DeliveryError::ChannelNotReady)
    ));
    assert_eq!(delivery.message_count(), 0);

    // The code was persisted before the send attempt and is still usable
    let active = service.list_active().await.unwrap();
    assert_eq!(active.len(), 1);
    let code = active[0].code.clone();
    assert!(service.verify_otp("+15551234567", &code).await.unwrap());

    // After pairing, delivery works
    monitor.mark_ready();
    service
        .request_and_deliver(&OtpRequest::new("+15551234567"))
        .await
        .unwrap();
    assert_eq!(delivery.message_count(), 1);
}

#[tokio::test]
async fn test_custom_template_file_overrides_builtin() {
    let dir = TempDir::new();

    let template_path = dir.path.join("templates.json");
    std::fs::write(
        &template_path,
        br#"{"default": "Code {{otp}} from {{company}}, valid {{expiry}} min"}"#,
    )
    .unwrap();

    let mut config = AppConfig::default();
    config.template.path = Some(template_path);

    let store = Arc::new(
        FileOtpStore::open(dir.path.join("otp_store.json"))
            .await
            .unwrap(),
    );
    let delivery = Arc::new(MockDeliveryService::new());
    let table = load_template_table(&config.template).await.unwrap();
    let service = OtpService::new(
        store,
        delivery,
        TemplateRenderer::new(table),
        OtpServiceConfig::from_app_config(&config.otp, &config.template),
    );

    let issued = service
        .request_otp(&OtpRequest::new("+15551234567"))
        .await
        .unwrap();
    assert!(issued
        .message
        .starts_with(&format!("Code *{}* from *Your Company*", issued.code)));
}
