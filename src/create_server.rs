use crate::{error::Error, logger::Logger, server::Server, state::State};
use hyper::{Body, Response, StatusCode};
use serde::Serialize;
use serde_json::json;
use std::{collections::HashMap, sync::Arc};

macro_rules! unwrap {
    ( $x:expr ) => {{
        match $x {
            Ok(result) => result,
            Err(error) => return respond_error(error),
        }
    }};
}

#[derive(Debug, Serialize)]
struct AlphabetSummary {
    symbols: String,
    length: usize,
    max_encoded_length: usize,
    max_symbol_width: usize,
}

fn parse_parameter<'a>(parameters: &'a HashMap<String, String>, name: &str) -> Result<&'a str, Error> {
    parameters
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| Error::new(format!("Missing {} parameter", name)))
}

fn parse_strings_from_body(body: &[u8]) -> Result<Vec<String>, Error> {
    let body = std::str::from_utf8(body).map_err(|_| Error::new("Invalid utf8 body"))?;
    let json: serde_json::Value = serde_json::from_str(body).map_err(|_| Error::new("Invalid JSON body"))?;
    let array = json.as_array().ok_or_else(|| Error::new("Expecting array in JSON body"))?;
    array
        .iter()
        .map(|value| match value.as_str() {
            Some(value) => Ok(value.to_string()),
            None => Err(Error::new("Expecting array of strings in JSON body")),
        })
        .collect()
}

fn format_pair(uuid: String, short: String) -> serde_json::Value {
    json!({ "uuid": uuid, "short": short })
}

fn encode(state: &State, uuid: &str) -> Result<serde_json::Value, Error> {
    let (uuid, short) = state.encode(uuid)?;
    Ok(format_pair(uuid, short))
}

fn decode(state: &State, short: &str) -> Result<serde_json::Value, Error> {
    let uuid = state.decode(short)?;
    Ok(format_pair(uuid, short.to_string()))
}

fn respond(status: StatusCode, value: serde_json::Value) -> Response<Body> {
    let mut response = Response::new(Body::from(value.to_string()));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(hyper::header::CONTENT_TYPE, hyper::header::HeaderValue::from_static("application/json"));
    response
}

fn respond_ok(value: serde_json::Value) -> Response<Body> {
    respond(StatusCode::OK, value)
}

fn respond_error(error: Error) -> Response<Body> {
    respond(StatusCode::BAD_REQUEST, json!({"message": error.to_string()}))
}

pub fn create_server(state: Arc<State>, logger: Logger) -> Server<State> {
    let mut server = Server::new(state, logger);

    server.get("/alphabet", |_request, _parameters, _body, state| async move {
        let alphabet = state.alphabet();
        let summary = AlphabetSummary {
            symbols: alphabet.to_string(),
            length: alphabet.len(),
            max_encoded_length: alphabet.max_encoded_length(),
            max_symbol_width: alphabet.max_symbol_width(),
        };
        respond_ok(json!(summary))
    });

    server.get("/encode/{uuid}", |_request, parameters, _body, state| async move {
        let uuid = unwrap!(parse_parameter(&parameters, "uuid"));
        respond_ok(unwrap!(encode(&state, uuid)))
    });

    server.get("/decode/{short}", |_request, parameters, _body, state| async move {
        let short = unwrap!(parse_parameter(&parameters, "short"));
        respond_ok(unwrap!(decode(&state, short)))
    });

    server.post("/encode", |_request, _parameters, body, state| async move {
        let uuids = unwrap!(parse_strings_from_body(&body));
        let pairs: Result<Vec<_>, Error> = uuids.iter().map(|uuid| encode(&state, uuid)).collect();
        respond_ok(json!(unwrap!(pairs)))
    });

    server.post("/decode", |_request, _parameters, body, state| async move {
        let shorts = unwrap!(parse_strings_from_body(&body));
        let pairs: Result<Vec<_>, Error> = shorts.iter().map(|short| decode(&state, short)).collect();
        respond_ok(json!(unwrap!(pairs)))
    });

    server
}
