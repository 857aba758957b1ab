//! KYC 上传接口测试 (multipart)

mod common;

use common::{multipart_request, pdf_bytes, png_bytes, send_request, spawn_app};
use http::StatusCode;
use serde_json::{Value, json};

fn json_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn test_full_submission_goes_under_review() {
    let app = spawn_app().await;

    let (_, state) = app.get("/api/kyc").await;
    assert_eq!(state["status"], "not_submitted");

    let request = multipart_request(
        "/api/kyc",
        &[
            ("aadhaar", "aadhaar.pdf", pdf_bytes()),
            ("pan", "pan.png", png_bytes()),
            ("fssai", "fssai.pdf", pdf_bytes()),
            ("kitchen_photos", "kitchen-1.png", png_bytes()),
            ("kitchen_photos", "kitchen-2.png", png_bytes()),
        ],
    );
    let (status, bytes) = send_request(&app.app, request).await;
    assert_eq!(status, StatusCode::OK);
    let body = json_body(&bytes);
    assert_eq!(body["status"], "under_review");
    assert_eq!(body["documents"].as_array().unwrap().len(), 5);
    assert!(body["submitted_at"].is_i64());

    // Content-addressed under WORK_DIR/uploads
    let stored = body["documents"][0]["stored_as"].as_str().unwrap();
    assert!(app.dir.path().join("uploads").join(stored).exists());

    let request = multipart_request("/api/kyc", &[("pan", "pan.pdf", pdf_bytes())]);
    let (status, bytes) = send_request(&app.app, request).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json_body(&bytes)["code"], 7202);
}

#[tokio::test]
async fn test_missing_documents_are_listed() {
    let app = spawn_app().await;

    let request = multipart_request(
        "/api/kyc",
        &[
            ("aadhar", "aadhaar.pdf", pdf_bytes()),
            ("pan", "pan.pdf", pdf_bytes()),
        ],
    );
    let (status, bytes) = send_request(&app.app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body = json_body(&bytes);
    assert_eq!(body["code"], 7201);
    assert_eq!(body["details"]["missing"], json!(["fssai", "kitchen_photos"]));

    let (_, state) = app.get("/api/kyc").await;
    assert_eq!(state["status"], "not_submitted");
}

#[tokio::test]
async fn test_kitchen_photo_must_be_image() {
    let app = spawn_app().await;

    let request = multipart_request(
        "/api/kyc",
        &[
            ("aadhaar", "aadhaar.pdf", pdf_bytes()),
            ("pan", "pan.pdf", pdf_bytes()),
            ("fssai", "fssai.pdf", pdf_bytes()),
            ("kitchen_photos", "kitchen.pdf", pdf_bytes()),
        ],
    );
    let (status, _) = send_request(&app.app, request).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}
