//! Flash Messages
//!
//! Server-style redirects hand the app a route of the form
//! `/dashboard?toast=success&message=Amount+changed+successfully`. The
//! `message` parameter turns into a one-shot toast; `toast` names its
//! severity and defaults to informational when missing or unrecognized.
//! The query string is consumed during parsing, so the resulting
//! [`RouteRequest`] carries only the bare path and the flash never fires
//! twice.

use crate::error::{SharedError, SharedResult};
use tracing::warn;
use url::Url;

/// Query parameter naming the flash severity.
pub const FLASH_SEVERITY_PARAM: &str = "toast";

/// Query parameter carrying the flash message text.
pub const FLASH_MESSAGE_PARAM: &str = "message";

/// Base used to resolve app-relative routes.
const ROUTE_BASE: &str = "app://bajeti/";

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Parse a severity name. Returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(Severity::Success),
            "error" => Some(Severity::Error),
            "warning" => Some(Severity::Warning),
            "info" => Some(Severity::Info),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// A one-shot notification extracted from a launch route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashParams {
    pub severity: Severity,
    pub message: String,
}

/// A parsed launch route: the target path plus an optional flash message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    /// Path portion of the route, query stripped.
    pub path: String,
    /// Flash message carried by the query, if any.
    pub flash: Option<FlashParams>,
}

impl RouteRequest {
    /// Parse a route string such as `/login` or
    /// `/dashboard?toast=success&message=Saved`.
    ///
    /// Percent- and plus-encoded message text is decoded. A `message`
    /// parameter produces a flash; a lone `toast` parameter does not. Any
    /// other query parameters are dropped along with the flash pair.
    pub fn parse(raw: &str) -> SharedResult<Self> {
        let base = Url::parse(ROUTE_BASE).map_err(|e| SharedError::Internal {
            message: format!("route base failed to parse: {}", e),
        })?;
        let url = base
            .join(raw.trim())
            .map_err(|e| SharedError::InvalidFormat {
                message: format!("invalid route '{}': {}", raw, e),
            })?;

        let mut severity = None;
        let mut message = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                FLASH_SEVERITY_PARAM => {
                    severity = Severity::parse(&value);
                    if severity.is_none() {
                        warn!("Unknown flash severity '{}', falling back to info", value);
                    }
                }
                FLASH_MESSAGE_PARAM => message = Some(value.into_owned()),
                _ => {}
            }
        }

        let flash = message.map(|message| FlashParams {
            severity: severity.unwrap_or(Severity::Info),
            message,
        });

        Ok(Self {
            path: url.path().to_string(),
            flash,
        })
    }

    /// Take the flash message, leaving the route without one.
    pub fn take_flash(&mut self) -> Option<FlashParams> {
        self.flash.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_plain_route_has_no_flash() {
        let route = RouteRequest::parse("/login").unwrap();
        assert_eq!(route.path, "/login");
        assert!(route.flash.is_none());
    }

    #[test]
    fn test_flash_with_severity() {
        let route =
            RouteRequest::parse("/dashboard?toast=success&message=Amount+changed+successfully")
                .unwrap();
        assert_eq!(route.path, "/dashboard");
        let flash = route.flash.unwrap();
        assert_eq!(flash.severity, Severity::Success);
        assert_eq!(flash.message, "Amount changed successfully");
    }

    #[test]
    fn test_message_is_percent_decoded() {
        let route = RouteRequest::parse("/dashboard?message=Allocation%20removed").unwrap();
        assert_eq!(route.flash.unwrap().message, "Allocation removed");
    }

    #[test]
    fn test_severity_defaults_to_info() {
        let route = RouteRequest::parse("/dashboard?message=Hello").unwrap();
        assert_eq!(route.flash.unwrap().severity, Severity::Info);
    }

    #[test]
    fn test_unknown_severity_falls_back_to_info() {
        let route = RouteRequest::parse("/dashboard?toast=loud&message=Hello").unwrap();
        assert_eq!(route.flash.unwrap().severity, Severity::Info);
    }

    #[test]
    fn test_severity_without_message_is_not_a_flash() {
        let route = RouteRequest::parse("/dashboard?toast=success").unwrap();
        assert!(route.flash.is_none());
    }

    #[test]
    fn test_query_is_stripped_from_path() {
        let route = RouteRequest::parse("/profile?message=Saved&other=kept").unwrap();
        assert_eq!(route.path, "/profile");
        // The full query is consumed, not just the flash pair.
        assert!(!route.path.contains('?'));
    }

    #[test]
    fn test_take_flash_consumes_once() {
        let mut route = RouteRequest::parse("/dashboard?message=Once").unwrap();
        assert!(route.take_flash().is_some());
        assert!(route.take_flash().is_none());
    }

    #[test]
    fn test_severity_parse_round_trip() {
        for severity in [
            Severity::Success,
            Severity::Error,
            Severity::Warning,
            Severity::Info,
        ] {
            assert_eq!(Severity::parse(severity.as_str()), Some(severity));
        }
        assert_matches!(Severity::parse("shouty"), None);
    }
}
