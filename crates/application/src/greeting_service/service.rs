use std::sync::Arc;

use tahniyat_core::{AppError, AppResult, NonEmptyString};
use tahniyat_domain::{ClientId, GreetingOptions, SecurityAction, SecurityLogEntry, UsageLogEntry};

use super::config::GreetingPolicyConfig;
use super::policy::{ContentPolicy, ensure_closing_phrase, is_refusal};
use super::ports::{ClientStateStore, GenerationRequest, GreetingGenerator};
use super::prompt::build_system_instruction;

/// Result of a successful generation.
///
/// `warning` is present only on the topic-lock path: the refusal text is
/// returned as a successful reply while the block flag is set as a side
/// effect.
#[derive(Debug, Clone)]
pub struct GreetingReply {
    /// The generated (or refusal) text, already normalized.
    pub greeting: String,
    /// Set when the request tripped the post-generation topic lock.
    pub warning: Option<String>,
}

/// Application service for greeting generation.
#[derive(Clone)]
pub struct GreetingService {
    store: Arc<dyn ClientStateStore>,
    generator: Arc<dyn GreetingGenerator>,
    policy: ContentPolicy,
    config: GreetingPolicyConfig,
}

impl GreetingService {
    /// Creates a greeting service over the given store and generator ports.
    #[must_use]
    pub fn new(
        store: Arc<dyn ClientStateStore>,
        generator: Arc<dyn GreetingGenerator>,
        config: GreetingPolicyConfig,
    ) -> Self {
        let policy = ContentPolicy::new(config.blocked_keywords.clone());

        Self {
            store,
            generator,
            policy,
            config,
        }
    }

    /// Handles one greeting request for the given client identity.
    ///
    /// Enforcement order is fixed: quota, block flag, prompt validation,
    /// content filter, generation, topic-lock post-check, normalization,
    /// quota update, usage logging. The quota check and the later increment
    /// are separate store operations; concurrent requests from one identity
    /// can both pass the check. Each individual store operation is atomic.
    pub async fn generate_greeting(
        &self,
        client: &ClientId,
        prompt: &str,
        options: &GreetingOptions,
    ) -> AppResult<GreetingReply> {
        if let Some(count) = self.store.request_count(client).await? {
            if count >= self.config.max_requests_per_window {
                return Err(AppError::RateLimited(
                    "Rate limit exceeded. Please try again later.".to_owned(),
                ));
            }
        }

        if self.store.is_blocked(client).await? {
            return Err(AppError::Forbidden(
                "Your access to this service has been temporarily suspended due to \
                 suspicious activity."
                    .to_owned(),
            ));
        }

        let prompt = NonEmptyString::new(prompt)
            .map_err(|_| AppError::Validation("Prompt is required".to_owned()))?;

        if self.policy.is_violation(prompt.as_str()) {
            self.block_and_log(client, prompt.as_str(), SecurityAction::Blocked)
                .await?;
            return Err(AppError::Forbidden(
                "This service is exclusively for Eid greetings. Your request has been \
                 flagged and temporarily blocked."
                    .to_owned(),
            ));
        }

        let system_instruction = build_system_instruction(&self.config, options);
        let generated = self
            .generator
            .generate(GenerationRequest {
                system_instruction,
                prompt: prompt.as_str().to_owned(),
            })
            .await?;

        // Second-order policy violation: the model refused a non-Eid request.
        // The refusal text is still a 200 reply, but the caller gets blocked.
        if is_refusal(&generated) {
            self.block_and_log(client, prompt.as_str(), SecurityAction::BlockedNonEid)
                .await?;
            return Ok(GreetingReply {
                greeting: generated,
                warning: Some(
                    "Your account has been temporarily blocked for requesting non-Eid \
                     content."
                        .to_owned(),
                ),
            });
        }

        let greeting = ensure_closing_phrase(generated);

        self.store
            .record_request(client, self.config.window_seconds)
            .await?;

        let usage = UsageLogEntry::new(
            client,
            options,
            prompt.as_str().chars().count(),
            greeting.chars().count(),
        );
        self.store.append_usage_log(&usage).await?;

        Ok(GreetingReply {
            greeting,
            warning: None,
        })
    }

    async fn block_and_log(
        &self,
        client: &ClientId,
        prompt: &str,
        action: SecurityAction,
    ) -> AppResult<()> {
        self.store
            .block_client(client, self.config.block_ttl_seconds)
            .await?;

        let entry = SecurityLogEntry::new(client, prompt, action);
        self.store.append_security_log(&entry).await
    }
}
