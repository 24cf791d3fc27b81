//! API Configuration
//!
//! Endpoint paths used by the admin pages. Defaults match the service
//! mounted at `/api/v1`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::model::ObjectId;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Pagination for the list call; unset values fall back to server defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl ListQuery {
    /// Read `skip`/`limit` from a page query string such as `?skip=20&limit=10`.
    /// Unknown keys and non-numeric values are ignored.
    pub fn from_query_string(search: &str) -> Self {
        let mut query = ListQuery::default();
        for pair in search.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let Ok(value) = value.parse::<u32>() else {
                continue;
            };
            match key {
                "skip" => query.skip = Some(value),
                "limit" => query.limit = Some(value),
                _ => {}
            }
        }
        query
    }

    fn to_query_string(self) -> String {
        let params: Vec<String> = [("skip", self.skip), ("limit", self.limit)]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, v)))
            .collect();
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix of the REST API, without trailing slash
    pub base_path: String,
    /// Prefix of the per-object edit view
    pub edit_path: String,
    pub list_query: ListQuery,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: "/api/v1".to_string(),
            edit_path: "/object/edit".to_string(),
            list_query: ListQuery::default(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_list_query(mut self, list_query: ListQuery) -> Self {
        self.list_query = list_query;
        self
    }

    pub fn objects_url(&self) -> String {
        format!("{}/objects", self.base_path)
    }

    pub fn list_url(&self, query: ListQuery) -> String {
        format!("{}{}", self.objects_url(), query.to_query_string())
    }

    pub fn object_url(&self, id: &ObjectId) -> String {
        format!("{}/{}", self.objects_url(), encode_segment(id))
    }

    /// Navigation target of the row's Edit link
    pub fn edit_href(&self, id: &ObjectId) -> String {
        format!("{}/{}", self.edit_path, encode_segment(id))
    }
}

fn encode_segment(id: &ObjectId) -> String {
    utf8_percent_encode(&id.to_string(), PATH_SEGMENT).to_string()
}
