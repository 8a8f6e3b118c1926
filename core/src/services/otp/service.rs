//! Main OTP service implementation

use std::collections::HashMap;
use std::sync::Arc;

use cr_shared::utils::{is_blank, is_valid_media_url, mask_identity};

use crate::domain::entities::OtpRecord;
use crate::errors::{DomainResult, ValidationError};
use crate::templates::{TemplateRenderer, DEFAULT_TEMPLATE_KEY};

use super::config::OtpServiceConfig;
use super::generator::generate_code;
use super::traits::{DeliveryServiceTrait, OtpStoreTrait};
use super::types::{OtpDelivery, OtpIssued, OtpRequest};

/// OTP service orchestrating generation, storage, rendering, and delivery
///
/// The service performs no I/O of its own beyond the store and delivery
/// collaborators. All request validation happens here, before the store is
/// touched, so any transport layered on top inherits the same contract.
pub struct OtpService<S, D>
where
    S: OtpStoreTrait,
    D: DeliveryServiceTrait,
{
    /// Store owning the outstanding OTP records
    store: Arc<S>,
    /// Outbound messaging transport
    delivery: Arc<D>,
    /// Template renderer over the immutable template table
    renderer: TemplateRenderer,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<S, D> OtpService<S, D>
where
    S: OtpStoreTrait,
    D: DeliveryServiceTrait,
{
    /// Create a new OTP service
    pub fn new(
        store: Arc<S>,
        delivery: Arc<D>,
        renderer: TemplateRenderer,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            store,
            delivery,
            renderer,
            config,
        }
    }

    /// Issue a fresh code for the request's identity and render its message
    ///
    /// This method:
    /// 1. Validates the request (identity present, positive length, media
    ///    URL shape) before touching the store
    /// 2. Generates a secure numeric code
    /// 3. Persists it, superseding any prior code for the identity
    /// 4. Renders the delivery text from the template table
    ///
    /// The rendered message is returned to the caller; actually sending it
    /// is a separate step (`request_and_deliver`), so a delivery outage never
    /// blocks issuance.
    pub async fn request_otp(&self, request: &OtpRequest) -> DomainResult<OtpIssued> {
        self.validate_request(request)?;

        let length = request.length.unwrap_or(self.config.default_length);
        let ttl_minutes = request.ttl_minutes.unwrap_or(self.config.default_ttl_minutes);
        let code = generate_code(length)?;

        self.store.issue(&request.identity, &code, ttl_minutes).await?;

        tracing::info!(
            identity = %mask_identity(&request.identity),
            ttl_minutes,
            event = "otp_issued",
            "Issued new OTP"
        );

        let message = self.render_message(request, &code, ttl_minutes);
        Ok(OtpIssued { code, message })
    }

    /// Issue a code and hand the rendered message to the transport
    ///
    /// A delivery failure propagates to the caller, but only after the
    /// record has been persisted: the code remains verifiable even when the
    /// send failed, since redelivery is a separate concern.
    pub async fn request_and_deliver(&self, request: &OtpRequest) -> DomainResult<OtpDelivery> {
        let issued = self.request_otp(request).await?;

        let message_id = self
            .delivery
            .send(&request.identity, &issued.message, request.media_url.as_deref())
            .await
            .map_err(|e| {
                tracing::warn!(
                    identity = %mask_identity(&request.identity),
                    provider = self.delivery.provider_name(),
                    error = %e,
                    event = "otp_delivery_failed",
                    "OTP delivery failed; code remains verifiable"
                );
                e
            })?;

        tracing::info!(
            identity = %mask_identity(&request.identity),
            provider = self.delivery.provider_name(),
            message_id = %message_id,
            event = "otp_delivered",
            "OTP message handed to transport"
        );

        Ok(OtpDelivery {
            code: issued.code,
            message: issued.message,
            message_id,
        })
    }

    /// Verify a candidate code for an identity
    ///
    /// `Ok(false)` is the expected outcome for a wrong code, a missing
    /// record, or one that just expired; those cases are indistinguishable
    /// to the caller on purpose.
    pub async fn verify_otp(&self, identity: &str, candidate: &str) -> DomainResult<bool> {
        if is_blank(identity) {
            return Err(ValidationError::RequiredField {
                field: "identity".to_string(),
            }
            .into());
        }
        if is_blank(candidate) {
            return Err(ValidationError::RequiredField {
                field: "code".to_string(),
            }
            .into());
        }

        let consumed = self.store.verify(identity, candidate).await?;

        if consumed {
            tracing::info!(
                identity = %mask_identity(identity),
                event = "otp_verified",
                "OTP verified and consumed"
            );
        } else {
            tracing::warn!(
                identity = %mask_identity(identity),
                event = "otp_verification_failed",
                "OTP verification failed"
            );
        }

        Ok(consumed)
    }

    /// Snapshot of the unexpired records, for diagnostics only
    ///
    /// Must be gated behind the same trust boundary as issuance by whatever
    /// transport exposes it.
    pub async fn list_active(&self) -> DomainResult<Vec<OtpRecord>> {
        Ok(self.store.list_active().await?)
    }

    fn validate_request(&self, request: &OtpRequest) -> Result<(), ValidationError> {
        if is_blank(&request.identity) {
            return Err(ValidationError::RequiredField {
                field: "identity".to_string(),
            });
        }

        if request.length == Some(0) {
            return Err(ValidationError::InvalidCodeLength { length: 0 });
        }

        if let Some(url) = request.media_url.as_deref() {
            if !is_valid_media_url(url) {
                return Err(ValidationError::InvalidMediaUrl {
                    url: url.to_string(),
                });
            }
        }

        Ok(())
    }

    fn render_message(&self, request: &OtpRequest, code: &str, ttl_minutes: i64) -> String {
        let mut vars: HashMap<String, String> = request.variables.clone();
        vars.insert("otp".to_string(), code.to_string());
        vars.insert("expiry".to_string(), ttl_minutes.to_string());
        vars.insert(
            "company".to_string(),
            request
                .company
                .clone()
                .unwrap_or_else(|| self.config.company_name.clone()),
        );

        let key = request.template_key.as_deref().unwrap_or(DEFAULT_TEMPLATE_KEY);
        self.renderer.render(key, &vars)
    }
}
