//! Integration tests for session token verification.

mod common;

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use sso_auth::{Claims, JwtDecoder};
use sso_core::error::ErrorKind;

use common::{APP_SECRET, BrokenStore, MemoryStore, authenticator};

fn sign(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn claims(app_id: i32, exp: i64) -> Claims {
    Claims {
        uid: 1,
        app_id,
        exp,
        email: "a@x.com".to_string(),
    }
}

#[tokio::test]
async fn accepts_token_signed_with_app_secret() {
    let store = MemoryStore::seeded();
    let exp = Utc::now().timestamp() + 60;
    let token = sign(&claims(1, exp), APP_SECRET);

    let decoded = JwtDecoder::new().verify(&token, store.as_ref()).await.unwrap();
    assert_eq!(decoded, claims(1, exp));
    assert!(!decoded.is_expired());
}

#[tokio::test]
async fn rejects_expired_token() {
    let store = MemoryStore::seeded();
    let token = sign(&claims(1, Utc::now().timestamp() - 60), APP_SECRET);

    let err = JwtDecoder::new().verify(&token, store.as_ref()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
    assert!(err.message.contains("expired"));
}

#[tokio::test]
async fn rejects_token_at_its_expiry_instant() {
    let store = MemoryStore::seeded();
    let token = sign(&claims(1, Utc::now().timestamp()), APP_SECRET);

    let err = JwtDecoder::new().verify(&token, store.as_ref()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
    assert!(err.message.contains("expired"));
}

#[tokio::test]
async fn rejects_wrong_secret() {
    let store = MemoryStore::seeded();
    let token = sign(&claims(1, Utc::now().timestamp() + 60), "forged-secret");

    let err = JwtDecoder::new().verify(&token, store.as_ref()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
}

#[tokio::test]
async fn rejects_token_for_unknown_app() {
    let store = MemoryStore::seeded();
    let token = sign(&claims(77, Utc::now().timestamp() + 60), APP_SECRET);

    let err = JwtDecoder::new().verify(&token, store.as_ref()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
}

#[tokio::test]
async fn rejects_retargeted_app_claim() {
    let store = MemoryStore::seeded();
    store.add_app(2, "mobile", "mobile-secret");
    let auth = authenticator(&store);
    auth.register("a@x.com", "pw123").await.unwrap();
    let token = auth.login("a@x.com", "pw123", 1).await.unwrap();

    // Re-sign the same claims under app 2's ID with app 1's secret.
    let decoder = JwtDecoder::new();
    let mut forged = decoder.verify(&token, store.as_ref()).await.unwrap();
    forged.app_id = 2;
    let forged = sign(&forged, APP_SECRET);

    let err = decoder.verify(&forged, store.as_ref()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
}

#[tokio::test]
async fn rejects_malformed_token() {
    let store = MemoryStore::seeded();

    let err = JwtDecoder::new()
        .verify("not.a.token", store.as_ref())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
}

#[tokio::test]
async fn app_lookup_failure_is_internal() {
    let token = sign(&claims(1, Utc::now().timestamp() + 60), APP_SECRET);
    let broken = Arc::new(BrokenStore);

    let err = JwtDecoder::new().verify(&token, broken.as_ref()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Internal);
}
