use serde_json::{json, Value};
use std::fmt;

pub const BASE_URL: &str = "http://localhost:8000";
pub const API_BASE_PATH: &str = "/api/v1";
pub const API_KEY: &str = "call_me_api_key_secret";
pub const USER: &str = "call-me";
pub const CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// One call against the API. Built once per run, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Request {
    fn new(method: Method, endpoint: &str) -> Self {
        Self {
            method,
            path: format!("{}/{}", API_BASE_PATH, endpoint),
            headers: vec![
                ("Authorization".to_string(), API_KEY.to_string()),
                ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
            ],
            query: vec![],
            body: None,
        }
    }

    /// `POST /api/v1/connected` with `{"user": "call-me"}`.
    pub fn connected_post() -> Self {
        Self {
            body: Some(json!({ "user": USER })),
            ..Self::new(Method::Post, "connected")
        }
    }

    /// `GET /api/v1/connected?user=call-me`
    pub fn connected_get() -> Self {
        Self {
            query: vec![("user".to_string(), USER.to_string())],
            ..Self::new(Method::Get, "connected")
        }
    }

    pub fn users() -> Self {
        Self::new(Method::Get, "users")
    }
}

pub type ResponseJson = Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_carries_user_in_body_only() {
        let req = Request::connected_post();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path, "/api/v1/connected");
        assert_eq!(req.body, Some(json!({ "user": "call-me" })));
        assert!(req.query.is_empty());
    }

    #[test]
    fn get_carries_user_in_query_only() {
        let req = Request::connected_get();
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path, "/api/v1/connected");
        assert_eq!(req.query, vec![("user".to_string(), "call-me".to_string())]);
        assert!(req.body.is_none());
    }

    #[test]
    fn every_call_is_authorized() {
        for req in [
            Request::connected_post(),
            Request::connected_get(),
            Request::users(),
        ] {
            assert!(req
                .headers
                .contains(&("Authorization".to_string(), API_KEY.to_string())));
            assert!(req
                .headers
                .contains(&("Content-Type".to_string(), CONTENT_TYPE.to_string())));
        }
    }

    #[test]
    fn method_displays_as_verb() {
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Get.to_string(), "GET");
    }
}
