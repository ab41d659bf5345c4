//! URI guards.
//!
//! Guards work against any [`UriInfo`]. With the `http` feature,
//! `http::Uri` implements it. Relative URIs have no scheme, host or port;
//! checks on those components treat them as absent.
//!
//! Scheme and host comparisons ignore ASCII case. Default messages show the
//! expected scheme upper-cased and the expected host lower-cased.

use crate::messages::{render, MessageKey};
use crate::{ErrorKind, GateState, Guard, GuardError};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

// ============================================================================
// Schemes
// ============================================================================

/// Well-known URI scheme names.
#[derive(Debug, Clone, Copy)]
pub struct UriScheme;

impl UriScheme {
    /// `http`
    pub const HTTP: &'static str = "http";
    /// `https`
    pub const HTTPS: &'static str = "https";
    /// `ftp`
    pub const FTP: &'static str = "ftp";
    /// `ftps`
    pub const FTPS: &'static str = "ftps";
    /// `sftp`
    pub const SFTP: &'static str = "sftp";
    /// `file`
    pub const FILE: &'static str = "file";

    /// Port implied by `scheme` when none is given.
    pub fn default_port(scheme: &str) -> Option<u16> {
        const PORTS: &[(&str, u16)] = &[
            ("http", 80),
            ("https", 443),
            ("ws", 80),
            ("wss", 443),
            ("ftp", 21),
            ("ftps", 990),
            ("sftp", 22),
        ];
        PORTS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(scheme))
            .map(|(_, port)| *port)
    }
}

// ============================================================================
// Host Name Types
// ============================================================================

/// Shape of a URI host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UriHostNameType {
    /// No host, or one that could not be classified.
    Unknown,
    /// A host that is neither a DNS name nor an IP address.
    Basic,
    /// A DNS name.
    Dns,
    /// An IPv4 address.
    IPv4,
    /// An IPv6 address.
    IPv6,
}

impl UriHostNameType {
    /// Classify a host as it appears in a URI.
    pub fn classify(host: Option<&str>) -> Self {
        let Some(host) = host.filter(|h| !h.is_empty()) else {
            return Self::Unknown;
        };
        let unbracketed = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);
        if unbracketed.parse::<Ipv6Addr>().is_ok() {
            return Self::IPv6;
        }
        if host.parse::<Ipv4Addr>().is_ok() {
            return Self::IPv4;
        }
        let is_dns = host.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        });
        if is_dns { Self::Dns } else { Self::Basic }
    }

    /// Display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Basic => "Basic",
            Self::Dns => "Dns",
            Self::IPv4 => "IPv4",
            Self::IPv6 => "IPv6",
        }
    }
}

impl fmt::Display for UriHostNameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// UriInfo
// ============================================================================

/// Read-only view of a parsed URI.
///
/// Implementors supply the components; the derived properties have
/// defaults built from them.
pub trait UriInfo: fmt::Display {
    /// Scheme, absent for relative references.
    fn scheme(&self) -> Option<&str>;

    /// Host as written (IPv6 literals keep their brackets).
    fn host(&self) -> Option<&str>;

    /// Port written in the URI, if any.
    fn explicit_port(&self) -> Option<u16>;

    /// Path component.
    fn path(&self) -> &str;

    /// Whether the URI has a scheme.
    #[inline]
    fn is_absolute(&self) -> bool {
        self.scheme().is_some()
    }

    /// Effective port: the explicit one, else the scheme's default.
    fn port(&self) -> Option<u16> {
        self.explicit_port()
            .or_else(|| self.scheme().and_then(UriScheme::default_port))
    }

    /// Whether the effective port is the scheme's default.
    fn is_default_port(&self) -> bool {
        if !self.is_absolute() {
            return false;
        }
        match self.explicit_port() {
            None => true,
            Some(port) => self.scheme().and_then(UriScheme::default_port) == Some(port),
        }
    }

    /// Shape of the host.
    #[inline]
    fn host_name_type(&self) -> UriHostNameType {
        UriHostNameType::classify(self.host())
    }

    /// Whether `other` lies under this URI: same scheme, host and port, and
    /// `other`'s path starts with this path up to its last `/`.
    fn is_base_of(&self, other: &dyn UriInfo) -> bool {
        let same_origin = match (self.scheme(), other.scheme()) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        } && match (self.host(), other.host()) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            (None, None) => true,
            _ => false,
        } && self.port() == other.port();
        if !same_origin {
            return false;
        }
        let base = self.path();
        let prefix = base.rfind('/').map_or("", |i| &base[..=i]);
        other.path().starts_with(prefix)
    }

    /// Whether this is a `file` URI.
    #[inline]
    fn is_file(&self) -> bool {
        self.scheme().is_some_and(|s| s.eq_ignore_ascii_case(UriScheme::FILE))
    }

    /// Whether this is a UNC path (`\\server\share`).
    #[inline]
    fn is_unc(&self) -> bool {
        false
    }

    /// Whether the host refers to this machine.
    ///
    /// Host-less `file` URIs are local.
    fn is_loopback(&self) -> bool {
        match self.host().filter(|h| !h.is_empty()) {
            None => self.is_file(),
            Some(host) => {
                let unbracketed = host
                    .strip_prefix('[')
                    .and_then(|h| h.strip_suffix(']'))
                    .unwrap_or(host);
                host.eq_ignore_ascii_case("localhost")
                    || unbracketed.parse::<Ipv6Addr>().is_ok_and(|ip| ip.is_loopback())
                    || host.parse::<Ipv4Addr>().is_ok_and(|ip| ip.is_loopback())
            }
        }
    }
}

impl<U: UriInfo + ?Sized> UriInfo for &U {
    fn scheme(&self) -> Option<&str> {
        (**self).scheme()
    }
    fn host(&self) -> Option<&str> {
        (**self).host()
    }
    fn explicit_port(&self) -> Option<u16> {
        (**self).explicit_port()
    }
    fn path(&self) -> &str {
        (**self).path()
    }
    fn is_absolute(&self) -> bool {
        (**self).is_absolute()
    }
    fn port(&self) -> Option<u16> {
        (**self).port()
    }
    fn is_default_port(&self) -> bool {
        (**self).is_default_port()
    }
    fn host_name_type(&self) -> UriHostNameType {
        (**self).host_name_type()
    }
    fn is_base_of(&self, other: &dyn UriInfo) -> bool {
        (**self).is_base_of(other)
    }
    fn is_file(&self) -> bool {
        (**self).is_file()
    }
    fn is_unc(&self) -> bool {
        (**self).is_unc()
    }
    fn is_loopback(&self) -> bool {
        (**self).is_loopback()
    }
}

#[cfg(feature = "http")]
impl UriInfo for http::Uri {
    #[inline]
    fn scheme(&self) -> Option<&str> {
        self.scheme_str()
    }

    #[inline]
    fn host(&self) -> Option<&str> {
        http::Uri::host(self)
    }

    #[inline]
    fn explicit_port(&self) -> Option<u16> {
        self.port_u16()
    }

    #[inline]
    fn path(&self) -> &str {
        http::Uri::path(self)
    }
}

// ============================================================================
// Guards
// ============================================================================

impl<'a, T, E, G> Guard<'a, T, E, G>
where
    T: UriInfo,
    E: From<GuardError>,
    G: GateState<'a>,
{
    #[inline]
    fn check_uri<P>(self, violated: P, key: MessageKey) -> Result<T, E>
    where
        P: FnOnce(&T) -> bool,
    {
        self.check(violated, ErrorKind::BadArgument, |_| render(key, &[]))
    }

    /// Raise when the URI is absolute.
    pub fn if_absolute(self) -> Result<T, E> {
        self.check_uri(|u| u.is_absolute(), MessageKey::UriIsAbsolute)
    }

    /// Raise when the URI is relative.
    pub fn if_relative(self) -> Result<T, E> {
        self.check_uri(|u| !u.is_absolute(), MessageKey::UriIsRelative)
    }

    /// Raise when the scheme is `scheme`.
    pub fn if_scheme_is(self, scheme: &str) -> Result<T, E> {
        self.check(
            |u| scheme_matches(u, scheme),
            ErrorKind::BadArgument,
            |_| render(MessageKey::UriSchemeIs, &[&scheme.to_uppercase()]),
        )
    }

    /// Raise unless the scheme is `scheme`.
    pub fn if_scheme_is_not(self, scheme: &str) -> Result<T, E> {
        self.check(
            |u| !scheme_matches(u, scheme),
            ErrorKind::BadArgument,
            |_| render(MessageKey::UriSchemeIsNot, &[&scheme.to_uppercase()]),
        )
    }

    /// Raise when the effective port is `port`.
    pub fn if_port_is(self, port: u16) -> Result<T, E> {
        self.check(
            |u| u.port() == Some(port),
            ErrorKind::BadArgument,
            |_| render(MessageKey::UriPortIs, &[&port]),
        )
    }

    /// Raise unless the effective port is `port`.
    pub fn if_port_is_not(self, port: u16) -> Result<T, E> {
        self.check(
            |u| u.port() != Some(port),
            ErrorKind::BadArgument,
            |_| render(MessageKey::UriPortIsNot, &[&port]),
        )
    }

    /// Raise when the port is the scheme's default.
    pub fn if_port_is_default(self) -> Result<T, E> {
        self.check_uri(|u| u.is_default_port(), MessageKey::UriPortIsDefault)
    }

    /// Raise when the port is not the scheme's default.
    pub fn if_port_is_not_default(self) -> Result<T, E> {
        self.check_uri(|u| !u.is_default_port(), MessageKey::UriPortIsNotDefault)
    }

    /// Raise when the host is `host`.
    pub fn if_host_is(self, host: &str) -> Result<T, E> {
        self.check(
            |u| host_matches(u, host),
            ErrorKind::BadArgument,
            |_| render(MessageKey::UriHostIs, &[&host.to_lowercase()]),
        )
    }

    /// Raise unless the host is `host`.
    pub fn if_host_is_not(self, host: &str) -> Result<T, E> {
        self.check(
            |u| !host_matches(u, host),
            ErrorKind::BadArgument,
            |_| render(MessageKey::UriHostIsNot, &[&host.to_lowercase()]),
        )
    }

    /// Raise when the host is of `kind`.
    pub fn if_host_name_type_is(self, kind: UriHostNameType) -> Result<T, E> {
        self.check(
            |u| u.host_name_type() == kind,
            ErrorKind::BadArgument,
            |_| render(MessageKey::UriHostNameTypeIs, &[&kind]),
        )
    }

    /// Raise unless the host is of `kind`.
    pub fn if_host_name_type_is_not(self, kind: UriHostNameType) -> Result<T, E> {
        self.check(
            |u| u.host_name_type() != kind,
            ErrorKind::BadArgument,
            |_| render(MessageKey::UriHostNameTypeIsNot, &[&kind]),
        )
    }

    /// Raise when this URI is a base of `other`.
    pub fn if_base_of<O: UriInfo + ?Sized>(self, other: &O) -> Result<T, E> {
        self.check(
            |u| u.is_base_of(&other),
            ErrorKind::BadArgument,
            |u| render(MessageKey::UriIsBaseOf, &[u, &other]),
        )
    }

    /// Raise unless this URI is a base of `other`.
    pub fn if_not_base_of<O: UriInfo + ?Sized>(self, other: &O) -> Result<T, E> {
        self.check(
            |u| !u.is_base_of(&other),
            ErrorKind::BadArgument,
            |u| render(MessageKey::UriIsNotBaseOf, &[u, &other]),
        )
    }

    /// Raise when the URI is a `file` URI.
    pub fn if_file(self) -> Result<T, E> {
        self.check_uri(|u| u.is_file(), MessageKey::UriIsFile)
    }

    /// Raise unless the URI is a `file` URI.
    pub fn if_not_file(self) -> Result<T, E> {
        self.check_uri(|u| !u.is_file(), MessageKey::UriIsNotFile)
    }

    /// Raise when the URI is a UNC path.
    pub fn if_unc(self) -> Result<T, E> {
        self.check_uri(|u| u.is_unc(), MessageKey::UriIsUnc)
    }

    /// Raise unless the URI is a UNC path.
    pub fn if_not_unc(self) -> Result<T, E> {
        self.check_uri(|u| !u.is_unc(), MessageKey::UriIsNotUnc)
    }

    /// Raise when the host refers to this machine.
    pub fn if_loopback(self) -> Result<T, E> {
        self.check_uri(|u| u.is_loopback(), MessageKey::UriIsLoopback)
    }

    /// Raise unless the host refers to this machine.
    pub fn if_not_loopback(self) -> Result<T, E> {
        self.check_uri(|u| !u.is_loopback(), MessageKey::UriIsNotLoopback)
    }
}

fn scheme_matches<U: UriInfo + ?Sized>(uri: &U, scheme: &str) -> bool {
    uri.scheme().is_some_and(|s| s.eq_ignore_ascii_case(scheme))
}

fn host_matches<U: UriInfo + ?Sized>(uri: &U, host: &str) -> bool {
    uri.host().is_some_and(|h| h.eq_ignore_ascii_case(host))
}
