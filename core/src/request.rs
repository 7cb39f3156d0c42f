//! The `RestRequest` parameter store.
//!
//! # Design
//! A request is a resource path, a method and an ordered list of parameters.
//! Adding a parameter either appends it or fails immediately; nothing is
//! deduplicated and insertion order is what `RestClient::build` sees.
//!
//! `Host` headers are the only values validated on insertion. Every path that
//! can add a header (`add_header`, `add_headers`, `add_parameter_of_kind`)
//! goes through `check_header` so the rule cannot be bypassed.

use serde::Serialize;
use serde_json::Value;

use crate::error::RequestError;
use crate::host::is_valid_host;
use crate::http::Method;
use crate::parameter::{ParamValue, Parameter, ParameterKind};

const JSON_CONTENT_TYPE: &str = "application/json";

/// A REST request under construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestRequest {
    resource: String,
    method: Method,
    parameters: Vec<Parameter>,
}

impl RestRequest {
    /// Create a request for `resource`.
    ///
    /// A query component (`path?a=1&b=2`) is split off the resource and each
    /// pair becomes a `QueryString` parameter, taken verbatim. `None` gives an
    /// empty resource.
    pub fn new<'a>(resource: impl Into<Option<&'a str>>) -> Self {
        let mut request = Self::default();
        let Some(resource) = resource.into() else {
            return request;
        };

        match resource.split_once('?') {
            Some((path, query)) => {
                request.resource = path.to_string();
                for (name, value) in parse_query(query) {
                    request.add_query_parameter(name, value);
                }
            }
            None => request.resource = resource.to_string(),
        }
        request
    }

    /// Set the HTTP method. Requests default to `GET`.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Resource path with any query component already split off.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// All parameters, in insertion order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// First parameter with the given name, in insertion order.
    pub fn find_parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn parameters_of_kind(&self, kind: ParameterKind) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(move |p| p.kind == kind)
    }

    /// Add a `GetOrPost` parameter.
    pub fn add_parameter(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.push(Parameter::new(name, value, ParameterKind::GetOrPost))
    }

    pub fn add_query_parameter(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> &mut Self {
        self.push(Parameter::new(name, value, ParameterKind::QueryString))
    }

    /// Add a value for a `{name}` placeholder in the resource.
    pub fn add_url_segment(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.push(Parameter::new(name, value, ParameterKind::UrlSegment))
    }

    /// Add a header. A `Host` header must be a valid host, optionally with a port.
    pub fn add_header(&mut self, name: impl Into<String>, value: &str) -> Result<&mut Self, RequestError> {
        let name = name.into();
        check_header(&name, value)?;
        Ok(self.push(Parameter::new(name, value, ParameterKind::Header)))
    }

    /// Add several headers. Stops at the first rejected one; earlier headers are kept.
    pub fn add_headers<'a, I>(&mut self, headers: I) -> Result<&mut Self, RequestError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in headers {
            self.add_header(name, value)?;
        }
        Ok(self)
    }

    /// Add a parameter of any kind.
    ///
    /// `Header` parameters are validated like `add_header`; a `RequestBody`
    /// replaces any previous body like `add_body`.
    pub fn add_parameter_of_kind(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
        kind: ParameterKind,
    ) -> Result<&mut Self, RequestError> {
        let param = Parameter::new(name, value, kind);
        match kind {
            ParameterKind::Header => check_header(&param.name, &param.value.to_string())?,
            ParameterKind::RequestBody => return Ok(self.replace_body(param)),
            _ => {}
        }
        Ok(self.push(param))
    }

    /// Set the raw request body. Replaces any previous body.
    pub fn add_body(&mut self, content_type: &str, body: impl Into<String>) -> &mut Self {
        self.replace_body(Parameter::new(
            content_type,
            ParamValue::Text(body.into()),
            ParameterKind::RequestBody,
        ))
    }

    /// Serialize `body` as JSON and set it as the request body.
    pub fn add_json_body<T: Serialize + ?Sized>(&mut self, body: &T) -> Result<&mut Self, RequestError> {
        let json = serde_json::to_string(body)?;
        Ok(self.add_body(JSON_CONTENT_TYPE, json))
    }

    /// Add one `GetOrPost` parameter per field of `obj`.
    ///
    /// `None` fields are skipped, arrays are joined with `,` and nested
    /// objects are rendered as compact JSON.
    pub fn add_object<T: Serialize + ?Sized>(&mut self, obj: &T) -> Result<&mut Self, RequestError> {
        self.add_object_with_whitelist(obj, &[])
    }

    /// Like `add_object`, limited to the named fields. An empty list means all fields.
    pub fn add_object_with_whitelist<T: Serialize + ?Sized>(
        &mut self,
        obj: &T,
        whitelist: &[&str],
    ) -> Result<&mut Self, RequestError> {
        let fields = match serde_json::to_value(obj)? {
            Value::Object(fields) => fields,
            other => {
                return Err(RequestError::invalid_argument(
                    "obj",
                    format!("expected a struct or map, got {}", json_kind(&other)),
                ));
            }
        };

        for (name, value) in fields {
            if !whitelist.is_empty() && !whitelist.contains(&name.as_str()) {
                continue;
            }
            if let Some(value) = flatten(&value) {
                self.push(Parameter::new(name, value, ParameterKind::GetOrPost));
            }
        }
        Ok(self)
    }

    fn replace_body(&mut self, body: Parameter) -> &mut Self {
        self.parameters.retain(|p| p.kind != ParameterKind::RequestBody);
        self.push(body)
    }

    fn push(&mut self, param: Parameter) -> &mut Self {
        self.parameters.push(param);
        self
    }
}

/// Reject `Host` headers that are not a valid host value.
pub(crate) fn check_header(name: &str, value: &str) -> Result<(), RequestError> {
    if name == "Host" && !is_valid_host(value) {
        log::debug!("rejected Host header value {value:?}");
        return Err(RequestError::invalid_argument(
            "value",
            format!("{value:?} is not a valid Host header value"),
        ));
    }
    Ok(())
}

fn parse_query(query: &str) -> impl Iterator<Item = (&str, &str)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .filter(|(name, _)| !name.is_empty())
}

fn flatten(value: &Value) -> Option<ParamValue> {
    match value {
        Value::Null => None,
        Value::Array(items) => {
            let joined = items.iter().map(render_element).collect::<Vec<_>>().join(",");
            Some(ParamValue::Text(joined))
        }
        Value::Object(_) => Some(ParamValue::Text(value.to_string())),
        scalar => Some(scalar_value(scalar)),
    }
}

fn render_element(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
        scalar => scalar_value(scalar).to_string(),
    }
}

fn scalar_value(value: &Value) -> ParamValue {
    match value {
        Value::Bool(b) => ParamValue::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                ParamValue::Integer(i)
            } else if let Some(u) = n.as_u64() {
                ParamValue::Unsigned(u)
            } else if let Some(x) = n.as_f64() {
                ParamValue::Float(x)
            } else {
                ParamValue::Text(n.to_string())
            }
        }
        Value::String(s) => ParamValue::Text(s.clone()),
        other => ParamValue::Text(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
