//! Turns a `RestRequest` into a plain-data `HttpRequest`.
//!
//! # Design
//! `RestClient` holds a `base_url` and a list of default parameters. It
//! carries no other state, and `build` takes the request by reference, so
//! one client can build any number of requests. The caller executes the
//! actual HTTP round-trip.
//!
//! Parameter placement:
//! - `UrlSegment` replaces `{name}` in the resource, percent-encoded.
//! - `QueryString` always goes to the query string.
//! - `GetOrPost` goes to a form body for POST/PUT/PATCH without an explicit
//!   body, and to the query string otherwise.
//! - `Header` becomes a header, in insertion order.
//! - `RequestBody` becomes the body; its name is the content type.

use url::form_urlencoded;

use crate::error::RequestError;
use crate::http::HttpRequest;
use crate::parameter::{ParamValue, Parameter, ParameterKind};
use crate::request::{check_header, RestRequest};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Builds `HttpRequest` values against a fixed base URL.
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    default_parameters: Vec<Parameter>,
}

impl RestClient {
    /// Create a client for `base_url`. Trailing slashes are stripped.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_parameters: Vec::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_parameters(&self) -> &[Parameter] {
        &self.default_parameters
    }

    /// Header sent with every request that does not set it itself.
    pub fn add_default_header(&mut self, name: impl Into<String>, value: &str) -> Result<&mut Self, RequestError> {
        self.add_default_parameter(name, value, ParameterKind::Header)
    }

    /// Parameter applied to every request lacking one with the same name and kind.
    ///
    /// Header names match case-insensitively. A default `RequestBody` replaces
    /// any earlier default body and is only used when the request has none.
    pub fn add_default_parameter(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
        kind: ParameterKind,
    ) -> Result<&mut Self, RequestError> {
        let param = Parameter::new(name, value, kind);
        match kind {
            ParameterKind::Header => check_header(&param.name, &param.value.to_string())?,
            ParameterKind::RequestBody => {
                self.default_parameters.retain(|p| p.kind != ParameterKind::RequestBody);
            }
            _ => {}
        }
        self.default_parameters.push(param);
        Ok(self)
    }

    /// Build an `HttpRequest` for `request`, merged with this client's defaults.
    ///
    /// Never fails: every parameter already passed validation when it was
    /// added. The caller is responsible for executing the returned request.
    pub fn build(&self, request: &RestRequest) -> HttpRequest {
        let params = self.merged_parameters(request);
        let method = request.method();

        let mut url = join_url(&self.base_url, &resolve_segments(request.resource(), &params));

        let body_param = params.iter().find(|p| p.kind == ParameterKind::RequestBody);
        let form_body = method.has_body() && body_param.is_none();

        let query: Vec<&Parameter> = params
            .iter()
            .copied()
            .filter(|p| match p.kind {
                ParameterKind::QueryString => true,
                ParameterKind::GetOrPost => !form_body,
                _ => false,
            })
            .collect();
        if !query.is_empty() {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&encode_pairs(&query));
        }

        let mut headers: Vec<(String, String)> = params
            .iter()
            .filter(|p| p.kind == ParameterKind::Header)
            .map(|p| (p.name.clone(), p.value.to_string()))
            .collect();
        let has_content_type = headers.iter().any(|(k, _)| k.eq_ignore_ascii_case("content-type"));

        let (content_type, body) = match body_param {
            Some(param) => (Some(param.name.clone()), Some(param.value.to_string())),
            None if form_body => {
                let fields: Vec<&Parameter> = params
                    .iter()
                    .copied()
                    .filter(|p| p.kind == ParameterKind::GetOrPost)
                    .collect();
                if fields.is_empty() {
                    (None, None)
                } else {
                    (Some(FORM_CONTENT_TYPE.to_string()), Some(encode_pairs(&fields)))
                }
            }
            None => (None, None),
        };
        if let (Some(content_type), false) = (content_type, has_content_type) {
            headers.push(("Content-Type".to_string(), content_type));
        }

        log::trace!("built {method} {url}");
        HttpRequest {
            method,
            url,
            headers,
            body,
        }
    }

    /// Request parameters followed by defaults the request does not override.
    fn merged_parameters<'a>(&'a self, request: &'a RestRequest) -> Vec<&'a Parameter> {
        let own = request.parameters();
        let defaults = self
            .default_parameters
            .iter()
            .filter(|d| !own.iter().any(|p| overrides(p, d)));
        own.iter().chain(defaults).collect()
    }
}

/// Whether a request parameter takes the place of a client default.
fn overrides(own: &Parameter, default: &Parameter) -> bool {
    if own.kind != default.kind {
        return false;
    }
    match own.kind {
        ParameterKind::Header => own.name.eq_ignore_ascii_case(&default.name),
        ParameterKind::RequestBody => true,
        _ => own.name == default.name,
    }
}

fn resolve_segments(resource: &str, params: &[&Parameter]) -> String {
    let mut path = resource.to_string();
    for param in params.iter().filter(|p| p.kind == ParameterKind::UrlSegment) {
        let placeholder = format!("{{{}}}", param.name);
        path = path.replace(&placeholder, &encode_segment(&param.value.to_string()));
    }
    if let Some(start) = path.find('{') {
        if path[start..].contains('}') {
            log::debug!("unresolved placeholder left in resource {path:?}");
        }
    }
    path
}

fn join_url(base_url: &str, resource: &str) -> String {
    let resource = resource.trim_start_matches('/');
    if resource.is_empty() {
        base_url.to_string()
    } else {
        format!("{base_url}/{resource}")
    }
}

/// Percent-encode a path segment. Spaces become `%20`, not `+`.
fn encode_segment(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn encode_pairs(params: &[&Parameter]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for param in params {
        serializer.append_pair(&param.name, &param.value.to_string());
    }
    serializer.finish()
}
