//! The per-request hook state machine.

use portcullis_core::{normalize_username, Principal};
use portcullis_credential::CredentialSuite;
use portcullis_policy::{can_read, can_write, rewrite};
use regex::Regex;
use tracing::{debug, warn};

use crate::config::{ClientIdPolicy, DispatcherConfig};
use crate::directory::PrincipalDirectory;
use crate::request::{HookRequest, TopicClaim};
use crate::response::{HookResponse, TopicGrant};

/// Evaluates broker hooks against a principal directory.
///
/// Each [`dispatch`](Self::dispatch) call is an independent, read-mostly
/// evaluation with no state shared between requests; dropping the returned
/// future abandons the evaluation without producing a verdict. Denials of
/// every kind are structured [`HookResponse`] payloads; nothing in here
/// faults the hook call itself.
pub struct HookDispatcher<D> {
    directory: D,
    credentials: CredentialSuite,
    config: DispatcherConfig,
}

impl<D: PrincipalDirectory> HookDispatcher<D> {
    /// Dispatcher with the default credential suite and configuration.
    pub fn new(directory: D) -> Self {
        Self::with_config(directory, CredentialSuite::default(), DispatcherConfig::default())
    }

    /// Dispatcher with an explicit credential suite and configuration.
    pub fn with_config(directory: D, credentials: CredentialSuite, config: DispatcherConfig) -> Self {
        Self {
            directory,
            credentials,
            config,
        }
    }

    /// The underlying directory.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Evaluate one hook invocation to a decision payload.
    pub async fn dispatch(&self, request: HookRequest) -> HookResponse {
        let username = normalize_username(request.username());

        let principal = match self.directory.find_principal(&username).await {
            Ok(Some(principal)) => principal,
            Ok(None) => {
                debug!(%username, "hook for unknown or disabled principal");
                return HookResponse::denied(format!("the user '{username}' is unknown"));
            }
            Err(err) => {
                // Fail closed, and keep lookup faults indistinguishable from
                // unknown users on the wire.
                warn!(%username, %err, "principal lookup failed");
                return HookResponse::denied(format!("the user '{username}' is unknown"));
            }
        };

        match request {
            HookRequest::Register {
                password, client_id, ..
            } => {
                self.register(
                    &principal,
                    password.as_deref().unwrap_or(""),
                    client_id.trim(),
                )
                .await
            }
            HookRequest::Subscribe { topics, .. } => self.subscribe(&principal, topics),
            HookRequest::Publish { topic, .. } => self.publish(&principal, &topic),
        }
    }

    async fn register(
        &self,
        principal: &Principal,
        password: &str,
        client_id: &str,
    ) -> HookResponse {
        let verification = self.credentials.verify(password, &principal.password_hash);
        if !verification.is_valid {
            debug!(username = %principal.username, "password verification failed");
            return HookResponse::denied(format!(
                "the password for user '{}' is invalid",
                principal.username
            ));
        }

        if verification.needs_rehash {
            self.rehash(principal, password).await;
        }

        if self.client_id_allowed(principal, client_id) {
            HookResponse::Ok
        } else {
            HookResponse::denied(format!(
                "the client id '{}' for user '{}' is not allowed",
                client_id, principal.username
            ))
        }
    }

    /// Recompute the stored hash under the preferred scheme and persist it.
    /// Best-effort: the registration outcome is already decided when this
    /// runs, and a persistence failure must not change it.
    async fn rehash(&self, principal: &Principal, password: &str) {
        let new_hash = match self.credentials.hash(password) {
            Ok(new_hash) => new_hash,
            Err(err) => {
                warn!(username = %principal.username, %err, "password rehash failed");
                return;
            }
        };

        match self
            .directory
            .persist_password_hash(&principal.username, &new_hash)
            .await
        {
            Ok(()) => debug!(username = %principal.username, "password hash upgraded"),
            Err(err) => {
                warn!(username = %principal.username, %err, "rehashed password was not persisted");
            }
        }
    }

    fn client_id_allowed(&self, principal: &Principal, client_id: &str) -> bool {
        let Some(pattern) = principal
            .client_id_pattern
            .as_deref()
            .filter(|pattern| !pattern.trim().is_empty())
        else {
            return true;
        };

        match self.config.client_id_policy {
            ClientIdPolicy::OccurrenceCount => match Regex::new(pattern) {
                Ok(regex) => regex.find_iter(client_id).count() == 1,
                Err(err) => {
                    warn!(username = %principal.username, %err, "invalid client id pattern");
                    false
                }
            },
            ClientIdPolicy::FullMatch => match Regex::new(&format!("^(?:{pattern})$")) {
                Ok(regex) => regex.is_match(client_id),
                Err(err) => {
                    warn!(username = %principal.username, %err, "invalid client id pattern");
                    false
                }
            },
        }
    }

    fn subscribe(&self, principal: &Principal, topics: Vec<TopicClaim>) -> HookResponse {
        let grants = topics
            .into_iter()
            .map(|claim| {
                let topic = rewrite(principal, &claim.topic).into_owned();
                if can_read(principal, &topic) {
                    TopicGrant::granted(topic, claim.qos)
                } else {
                    debug!(username = %principal.username, %topic, "subscription suppressed");
                    TopicGrant::denied(topic)
                }
            })
            .collect();
        HookResponse::Subscriptions(grants)
    }

    fn publish(&self, principal: &Principal, topic: &str) -> HookResponse {
        let topic = rewrite(principal, topic);
        if can_write(principal, &topic) {
            HookResponse::Publish {
                topic: topic.into_owned(),
            }
        } else {
            debug!(username = %principal.username, topic = %topic, "publish denied");
            HookResponse::denied(format!(
                "no permission for '{}' to publish to topic '{}'",
                principal.username, topic
            ))
        }
    }
}
