//! The page a reader is running on. Stands in for the browser's `window.location`.

use std::str::FromStr;

use http::Uri;

use crate::error::Error;

#[derive(Debug, Clone)]
pub struct Location {
    href: String,
    uri: Uri,
}

impl Location {
    /// Parse an absolute url. Relative references have no origin and are rejected.
    pub fn parse(href: &str) -> Result<Self, Error> {
        let uri: Uri = href.parse().map_err(|_| Error::InvalidLocation)?;

        if uri.scheme().is_none() || uri.host().is_none() {
            return Err(Error::InvalidLocation);
        }

        Ok(Location {
            href: href.to_string(),
            uri,
        })
    }

    /// The full url, exactly as given.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The query string without its leading `?`. Never includes a fragment.
    pub fn query(&self) -> &str {
        self.uri.query().unwrap_or("")
    }

    /// `scheme://host[:port]`, lowercased, leaving out the port when it is the scheme's default.
    pub fn origin(&self) -> String {
        let scheme = self.uri.scheme_str().unwrap_or_default().to_ascii_lowercase();
        let host = self.uri.host().unwrap_or_default().to_ascii_lowercase();

        match self.uri.port_u16() {
            Some(80) if scheme == "http" => format!("{scheme}://{host}"),
            Some(443) if scheme == "https" => format!("{scheme}://{host}"),
            Some(port) => format!("{scheme}://{host}:{port}"),
            None => format!("{scheme}://{host}"),
        }
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_query_from_href() {
        let location = Location::parse("https://study.example.com/page?hitId=H1&x=2#top").unwrap();

        assert_eq!(
            location.href(),
            "https://study.example.com/page?hitId=H1&x=2#top"
        );
        assert_eq!(location.query(), "hitId=H1&x=2");
    }

    #[test]
    fn no_query_is_empty() {
        let location = Location::parse("http://localhost:8080/index.html").unwrap();

        assert_eq!(location.query(), "");
    }

    #[test]
    fn origin_drops_default_ports() {
        let a = Location::parse("http://example.com:80/a").unwrap();
        let b = Location::parse("https://example.com:8443/b").unwrap();
        let c = Location::parse("https://example.com/c?d=e").unwrap();

        assert_eq!(a.origin(), "http://example.com");
        assert_eq!(b.origin(), "https://example.com:8443");
        assert_eq!(c.origin(), "https://example.com");
    }

    #[test]
    fn origin_host_is_case_insensitive() {
        let upper = Location::parse("https://Study.EXAMPLE.com/p?a=1").unwrap();
        let lower = Location::parse("https://study.example.com/q").unwrap();

        assert_eq!(upper.origin(), "https://study.example.com");
        assert_eq!(upper.origin(), lower.origin());
    }

    #[test]
    fn relative_urls_are_rejected() {
        assert_eq!(
            Location::parse("/page?a=1").unwrap_err(),
            Error::InvalidLocation
        );
        assert!("not a url".parse::<Location>().is_err());
    }
}
