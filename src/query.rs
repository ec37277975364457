use std::collections::HashMap;

use crate::{error::Error, location::Location, url_decoding};

/// Decoded parameter name to decoded value.
pub type ParameterMap = HashMap<String, String>;

/// Everything after the first `?` of `url`, or `None` if there is no `?`.
fn query_of(url: &str) -> Option<&str> {
    url.split_once('?').map(|(_, query)| query)
}

/// Decode a bare query string such as `a=1&b=2`.
pub fn parse_query(query: &str) -> Result<ParameterMap, Error> {
    url_decoding::map(query)
}

/// Decode the parameters of an explicit url. A url without `?` has no parameters.
pub fn extract_parameters_from(url: &str) -> Result<ParameterMap, Error> {
    match query_of(url) {
        Some(query) => parse_query(query),
        None => Ok(ParameterMap::new()),
    }
}

/// Reads query parameters from an explicit url, or from the current page when none is given.
#[derive(Debug, Clone)]
pub struct QueryStringReader {
    location: Location,
}

impl QueryStringReader {
    pub fn new(location: Location) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// With `None` the current page's search component is used, not a re-split of its href.
    pub fn extract_parameters(&self, url: Option<&str>) -> Result<ParameterMap, Error> {
        match url {
            Some(url) => extract_parameters_from(url),
            None => parse_query(self.location.query()),
        }
    }

    pub fn get_parameter(&self, url: Option<&str>, name: &str) -> Result<Option<String>, Error> {
        let mut parameters = self.extract_parameters(url)?;

        Ok(parameters.remove(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(href: &str) -> QueryStringReader {
        QueryStringReader::new(Location::parse(href).unwrap())
    }

    #[test]
    fn explicit_url() {
        let params = extract_parameters_from("http://x/?a=hello+world&b=%26").unwrap();

        assert_eq!(params.get("a").map(String::as_str), Some("hello world"));
        assert_eq!(params.get("b").map(String::as_str), Some("&"));
    }

    #[test]
    fn no_question_mark_is_empty() {
        assert!(extract_parameters_from("").unwrap().is_empty());
        assert!(extract_parameters_from("http://x/page").unwrap().is_empty());
        assert!(extract_parameters_from("http://x/page?").unwrap().is_empty());
    }

    #[test]
    fn everything_after_first_question_mark() {
        let params = extract_parameters_from("http://x/?q=why?&r=1").unwrap();

        assert_eq!(params.get("q").map(String::as_str), Some("why?"));
        assert_eq!(params.get("r").map(String::as_str), Some("1"));
    }

    #[test]
    fn current_page_uses_search_only() {
        let reader = reader("https://study.example.com/task?workerId=W%201#done=yes");

        let params = reader.extract_parameters(None).unwrap();

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("workerId").map(String::as_str), Some("W 1"));
    }

    #[test]
    fn explicit_url_wins_over_current_page() {
        let reader = reader("https://study.example.com/task?name=Page");

        assert_eq!(
            reader.get_parameter(Some("http://x/?name=Bob"), "name").unwrap(),
            Some("Bob".to_string())
        );
        assert_eq!(
            reader.get_parameter(None, "name").unwrap(),
            Some("Page".to_string())
        );
    }

    #[test]
    fn missing_parameter_is_none() {
        let reader = reader("https://study.example.com/");

        assert_eq!(
            reader.get_parameter(Some("http://x/?name=Bob"), "missing").unwrap(),
            None
        );
        assert_eq!(reader.get_parameter(None, "name").unwrap(), None);
    }

    #[test]
    fn decoding_errors_propagate() {
        let reader = reader("https://study.example.com/");

        assert!(reader.get_parameter(Some("http://x/?a=%E0%A4%A"), "a").is_err());
        assert!(parse_query("bad%=1").is_err());
    }

    #[test]
    fn input_is_not_mutated() {
        let url = String::from("http://x/?a=1+2");
        let _ = extract_parameters_from(&url).unwrap();

        assert_eq!(url, "http://x/?a=1+2");
    }
}
