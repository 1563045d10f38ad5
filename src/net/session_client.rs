//! Authenticated REST transport with transparent token refresh.
//!
//! Every private-API request goes through [`SessionClient`]: it attaches the
//! bearer token from the [`Session`] handle it was built over, and when the
//! server answers 401 it renews the token once and replays the request. The
//! refresh itself is serialized by the sibling coordinator module so a burst
//! of 401s causes exactly one `POST /api/auth/refresh`.
//!
//! All HTTP is gated behind `#[cfg(feature = "hydrate")]`; on the server the
//! methods return an error without touching the network.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses become [`ApiError::Status`] carrying the server's
//! message. A failed refresh expires the session exactly once (the request
//! that owned the refresh call does it) and fails every parked request with
//! the same error.

#![allow(clippy::unused_async)]

#[path = "session_client_refresh.rs"]
mod session_client_refresh;

#[cfg(test)]
#[path = "session_client_test.rs"]
mod session_client_test;

#[cfg(feature = "hydrate")]
use self::session_client_refresh::RefreshCoordinator;
#[cfg(feature = "hydrate")]
use self::session_client_refresh::RefreshDirective;
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::error::status_error;
#[cfg(feature = "hydrate")]
use crate::net::types::RefreshResponse;
use crate::state::session::Session;
#[cfg(feature = "hydrate")]
use std::sync::{Arc, Mutex, PoisonError};

#[cfg(feature = "hydrate")]
const REFRESH_ENDPOINT: &str = "/api/auth/refresh";

/// Outcome a parked request receives when the in-flight refresh ends. The
/// renewed token is read from the session, not the channel.
#[cfg(feature = "hydrate")]
type RefreshWaiter = futures::channel::oneshot::Sender<Result<(), ApiError>>;

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// REST client for the private API.
///
/// Cheap to clone; clones share the refresh coordinator, which is what keeps
/// concurrent 401s from stampeding the refresh endpoint.
#[derive(Clone)]
pub struct SessionClient {
    session: Session,
    #[cfg(feature = "hydrate")]
    coordinator: Arc<Mutex<RefreshCoordinator<RefreshWaiter>>>,
}

impl SessionClient {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            #[cfg(feature = "hydrate")]
            coordinator: Arc::new(Mutex::new(RefreshCoordinator::new())),
        }
    }

    /// The session handle this client reads tokens from and signs out of.
    #[must_use]
    pub fn session(&self) -> Session {
        self.session
    }

    /// Run a client-scoped async task in the browser. Off-browser the task
    /// is dropped unstarted, so call sites need no gating of their own.
    pub fn spawn<F, Fut>(&self, task: F)
    where
        F: FnOnce(SessionClient) -> Fut,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(task(self.clone()));
        #[cfg(not(feature = "hydrate"))]
        let _ = task;
    }

    /// Restore a session from the refresh cookie at app start.
    ///
    /// Shows the snapshot profile optimistically, renews the access token,
    /// then confirms identity against the server. Every path resolves the
    /// session's loading gate: no cookies means staying anonymous, a failed
    /// renewal or profile fetch signs the stale session out.
    #[cfg(feature = "hydrate")]
    pub async fn rehydrate(&self) {
        if !crate::util::cookies::has_session_cookies() {
            self.session.finish_loading();
            return;
        }
        self.session.restore_snapshot();
        let token = match refresh_access_token().await {
            Ok(token) => token,
            Err(err) => {
                log::warn!("session rehydration failed: {err}");
                self.session.expire();
                return;
            }
        };
        // fetch_me needs the renewed token in place to authenticate.
        self.session.store_access_token(&token);
        match crate::net::users::fetch_me(self).await {
            Ok(user) => self.session.sign_in(user, token),
            Err(err) => {
                log::warn!("profile fetch after token renewal failed: {err}");
                self.session.expire();
            }
        }
    }

    /// `GET {path}`, decoding a JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-success statuses,
    /// and undecodable bodies.
    pub async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let response = self.request_with_refresh::<()>(Verb::Get, path, None).await?;
            read_json(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(not_in_browser())
        }
    }

    /// `POST {path}` with a JSON body, decoding a JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-success statuses,
    /// and undecodable bodies.
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        #[cfg(feature = "hydrate")]
        {
            let response = self.request_with_refresh(Verb::Post, path, Some(body)).await?;
            read_json(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(not_in_browser())
        }
    }

    /// `POST {path}` without a body, decoding a JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-success statuses,
    /// and undecodable bodies.
    pub async fn post_empty<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let response = self.request_with_refresh::<()>(Verb::Post, path, None).await?;
            read_json(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(not_in_browser())
        }
    }

    /// `PUT {path}` with a JSON body, decoding a JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-success statuses,
    /// and undecodable bodies.
    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        #[cfg(feature = "hydrate")]
        {
            let response = self.request_with_refresh(Verb::Put, path, Some(body)).await?;
            read_json(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(not_in_browser())
        }
    }

    /// `DELETE {path}`, expecting a success status with no meaningful body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-success
    /// statuses.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self.request_with_refresh::<()>(Verb::Delete, path, None).await?;
            read_ok(response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(not_in_browser())
        }
    }

    /// Send a request, renewing the access token and replaying once if the
    /// server answers 401.
    #[cfg(feature = "hydrate")]
    async fn request_with_refresh<B>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<&B>,
    ) -> Result<gloo_net::http::Response, ApiError>
    where
        B: serde::Serialize,
    {
        let mut retried = false;
        loop {
            let response = self.dispatch(verb, path, body).await?;
            if response.status() != 401 {
                return Ok(response);
            }
            let directive =
                self.coordinator.lock().unwrap_or_else(PoisonError::into_inner).on_unauthorized(retried);
            match directive {
                // Replayed already: the 401 is terminal and surfaces as-is.
                RefreshDirective::PassThrough => return Ok(response),
                RefreshDirective::Begin => {
                    let outcome = refresh_access_token().await;
                    if let Ok(token) = &outcome {
                        // The session must hold the new token before any
                        // parked request wakes and replays.
                        self.session.store_access_token(token);
                    }
                    let signal = outcome.as_ref().map(|_| ()).map_err(Clone::clone);
                    let waiters =
                        self.coordinator.lock().unwrap_or_else(PoisonError::into_inner).complete();
                    for waiter in waiters {
                        let _ = waiter.send(signal.clone());
                    }
                    if let Err(err) = outcome {
                        log::warn!("token refresh failed, signing out: {err}");
                        self.session.expire();
                        return Err(err);
                    }
                    retried = true;
                }
                RefreshDirective::Wait => {
                    let (sender, receiver) = futures::channel::oneshot::channel();
                    self.coordinator.lock().unwrap_or_else(PoisonError::into_inner).park(sender);
                    match receiver.await {
                        Ok(Ok(())) => retried = true,
                        Ok(Err(err)) => return Err(err),
                        Err(_) => return Err(ApiError::SessionExpired),
                    }
                }
            }
        }
    }

    #[cfg(feature = "hydrate")]
    async fn dispatch<B>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<&B>,
    ) -> Result<gloo_net::http::Response, ApiError>
    where
        B: serde::Serialize,
    {
        let mut builder = match verb {
            Verb::Get => gloo_net::http::Request::get(path),
            Verb::Post => gloo_net::http::Request::post(path),
            Verb::Put => gloo_net::http::Request::put(path),
            Verb::Delete => gloo_net::http::Request::delete(path),
        };
        if let Some(token) = self.session.access_token() {
            builder = builder.header("Authorization", &bearer_header(&token));
        }
        let sent = match body {
            Some(payload) => {
                builder
                    .json(payload)
                    .map_err(|e| ApiError::Decode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        sent.map_err(|e| ApiError::Network(e.to_string()))
    }
}

/// Renew the access token. The refresh token rides along as an HTTP-only
/// cookie, so the request carries no body and no bearer header.
#[cfg(feature = "hydrate")]
async fn refresh_access_token() -> Result<String, ApiError> {
    let response = gloo_net::http::Request::post(REFRESH_ENDPOINT)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(status_error(response.status(), &body));
    }
    let body: RefreshResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body.access_token)
}

/// Decode a JSON body, mapping non-success statuses to [`ApiError::Status`].
#[cfg(feature = "hydrate")]
pub(super) async fn read_json<T>(response: gloo_net::http::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(status_error(response.status(), &body));
    }
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Discard the body, mapping non-success statuses to [`ApiError::Status`].
#[cfg(feature = "hydrate")]
pub(super) async fn read_ok(response: gloo_net::http::Response) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(response.status(), &body))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(not(feature = "hydrate"))]
pub(super) fn not_in_browser() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}
