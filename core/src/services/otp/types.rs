//! Request and result types for the OTP service

use std::collections::HashMap;

/// A request to issue (and possibly deliver) a one-time passcode
#[derive(Debug, Clone)]
pub struct OtpRequest {
    /// Recipient address the code is bound to (required)
    pub identity: String,
    /// Code length in digits; service default when `None`
    pub length: Option<usize>,
    /// Minutes until expiry; service default when `None`
    pub ttl_minutes: Option<i64>,
    /// Template key; the `default` template when `None`
    pub template_key: Option<String>,
    /// Company name for `{{company}}`; configured fallback when `None`
    pub company: Option<String>,
    /// Optional media attachment URL forwarded to the transport
    pub media_url: Option<String>,
    /// Extra template variables, matched by exact placeholder name
    pub variables: HashMap<String, String>,
}

impl OtpRequest {
    /// A request for `identity` with every option left at its default
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            length: None,
            ttl_minutes: None,
            template_key: None,
            company: None,
            media_url: None,
            variables: HashMap::new(),
        }
    }

    pub fn with_template(mut self, key: impl Into<String>) -> Self {
        self.template_key = Some(key.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }
}

/// An issued passcode and its rendered delivery text
#[derive(Debug, Clone)]
pub struct OtpIssued {
    /// The generated code, already persisted in the store
    pub code: String,
    /// The rendered message text
    pub message: String,
}

/// An issued passcode that was also handed to the transport
#[derive(Debug, Clone)]
pub struct OtpDelivery {
    /// The generated code
    pub code: String,
    /// The rendered message text
    pub message: String,
    /// The transport's message identifier
    pub message_id: String,
}
