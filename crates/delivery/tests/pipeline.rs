#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Pipeline scenario tests against fake channel implementations.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use {
    remessa_channels::{
        DeliverableFile, EmailSender, Error, FileFetcher, MessagingChannel, PackageCatalog,
        ResolvedRecord, Result,
    },
    remessa_delivery::DeliveryPipeline,
};

/// Shared log of outbound calls, in order.
type CallLog = Arc<Mutex<Vec<String>>>;

struct FakeFetcher {
    log: CallLog,
    fail: bool,
}

#[async_trait]
impl FileFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.log.lock().unwrap().push(format!("fetch {url}"));
        if self.fail {
            return Err(Error::download("status 404"));
        }
        Ok(b"%PDF-1.4 fake".to_vec())
    }
}

struct FakeMessaging {
    log: CallLog,
    fail_text: bool,
    fail_document: bool,
}

#[async_trait]
impl MessagingChannel for FakeMessaging {
    async fn send_text(&self, phone: &str, message: &str) -> Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(format!("send_text {phone} {message}"));
        if self.fail_text {
            return Err(Error::messaging("status 500"));
        }
        Ok(())
    }

    async fn send_document(&self, phone: &str, file: &DeliverableFile) -> Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(format!("send_document {phone} {}", file.filename));
        if self.fail_document {
            return Err(Error::messaging("status 500"));
        }
        Ok(())
    }
}

struct FakeEmail {
    log: CallLog,
    fail: bool,
}

#[async_trait]
impl EmailSender for FakeEmail {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        _html_body: &str,
        attachment: &DeliverableFile,
    ) -> Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(format!("email {to} {subject} {}", attachment.filename));
        if self.fail {
            return Err(Error::email("authentication failed"));
        }
        Ok(())
    }
}

struct Harness {
    pipeline: DeliveryPipeline,
    log: CallLog,
}

fn harness(fail_fetch: bool, fail_text: bool, fail_document: bool, fail_email: bool) -> Harness {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let catalog = Arc::new(PackageCatalog::from_entries([
        ("Light Trimestral", "https://files.test/light.pdf"),
        ("VIP Anual", "https://files.test/vip.pdf"),
    ]));
    let pipeline = DeliveryPipeline::new(
        catalog,
        Arc::new(FakeFetcher {
            log: Arc::clone(&log),
            fail: fail_fetch,
        }),
        Arc::new(FakeMessaging {
            log: Arc::clone(&log),
            fail_text,
            fail_document,
        }),
        Arc::new(FakeEmail {
            log: Arc::clone(&log),
            fail: fail_email,
        }),
    );
    Harness { pipeline, log }
}

fn record() -> ResolvedRecord {
    ResolvedRecord {
        email: "a@b.com".into(),
        phone: "551199999999".into(),
        full_name: "Maria Silva".into(),
        package_label: "Light Trimestral".into(),
    }
}

#[tokio::test]
async fn happy_path_runs_all_steps_in_order() {
    let h = harness(false, false, false, false);
    let receipt = h.pipeline.deliver(&record()).await.unwrap();
    assert_eq!(receipt.filename, "Light Trimestral.pdf");
    assert_eq!(receipt.package_label, "Light Trimestral");

    let log = h.log.lock().unwrap();
    assert_eq!(log.len(), 4);
    assert_eq!(log[0], "fetch https://files.test/light.pdf");
    assert!(log[1].starts_with("send_text 551199999999 Oi Maria,"));
    assert_eq!(log[2], "send_document 551199999999 Light Trimestral.pdf");
    assert_eq!(
        log[3],
        "email a@b.com Seu arquivo solicitado Light Trimestral.pdf"
    );
}

#[tokio::test]
async fn missing_field_fails_before_any_call() {
    let h = harness(false, false, false, false);
    let mut r = record();
    r.phone = String::new();
    match h.pipeline.deliver(&r).await {
        Err(Error::Validation { field }) => assert_eq!(field, "phone"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(h.log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_package_fails_before_download() {
    let h = harness(false, false, false, false);
    let mut r = record();
    r.package_label = "Unknown Package".into();
    match h.pipeline.deliver(&r).await {
        Err(Error::UnknownPackage { label }) => assert_eq!(label, "Unknown Package"),
        other => panic!("expected unknown package error, got {other:?}"),
    }
    assert!(h.log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn download_failure_stops_before_messaging() {
    let h = harness(true, false, false, false);
    match h.pipeline.deliver(&record()).await {
        Err(Error::Download { .. }) => {},
        other => panic!("expected download error, got {other:?}"),
    }
    assert_eq!(h.log.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn text_send_failure_stops_before_document_and_email() {
    let h = harness(false, true, false, false);
    match h.pipeline.deliver(&record()).await {
        Err(Error::MessagingChannel { .. }) => {},
        other => panic!("expected messaging error, got {other:?}"),
    }
    let log = h.log.lock().unwrap();
    assert_eq!(log.len(), 2);
    assert!(log[1].starts_with("send_text"));
}

#[tokio::test]
async fn document_send_failure_leaves_text_delivered() {
    let h = harness(false, false, true, false);
    match h.pipeline.deliver(&record()).await {
        Err(Error::MessagingChannel { .. }) => {},
        other => panic!("expected messaging error, got {other:?}"),
    }
    let log = h.log.lock().unwrap();
    assert_eq!(log.len(), 3);
    assert!(log[1].starts_with("send_text"));
    assert!(log[2].starts_with("send_document"));
}

#[tokio::test]
async fn email_failure_surfaces_after_messaging_succeeded() {
    let h = harness(false, false, false, true);
    match h.pipeline.deliver(&record()).await {
        Err(Error::EmailChannel { .. }) => {},
        other => panic!("expected email error, got {other:?}"),
    }
    assert_eq!(h.log.lock().unwrap().len(), 4);
}
