// system-tests/tests/helpers/stub.rs
// ============================================================================
// Module: Stub Booking Target
// Description: In-process imitation of the booking service for system tests.
// Purpose: Serve the booking API semantics the probe verifies, with switches
//          for deliberate contract drift.
// Dependencies: serde_json, tiny_http
// ============================================================================

//! ## Overview
//! The stub speaks the booking target's dialect: token auth over a cookie,
//! numeric booking identifiers, `201` for a successful delete, and `405` for
//! authorized operations on missing bookings. Authorization is checked
//! before existence, so an invalid token yields `403` whether or not the
//! addressed booking exists. Behavior switches let a suite make the stub
//! drift from that contract on purpose.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::io::Cursor;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;

use serde_json::Value;
use serde_json::json;
use tiny_http::Header;
use tiny_http::Method;
use tiny_http::Request;
use tiny_http::Response;
use tiny_http::Server;
use tiny_http::StatusCode;

// ============================================================================
// SECTION: Behavior
// ============================================================================

/// Poll interval for the shutdown flag while waiting for requests.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Behavior switches for the stub booking target.
pub struct StubBehavior {
    /// Username accepted by the auth endpoint.
    pub username: String,
    /// Password accepted by the auth endpoint.
    pub password: String,
    /// Status code returned by a successful delete.
    pub delete_status: u16,
    /// Replaces the stored first name in read responses when set.
    pub read_firstname_override: Option<String>,
}

impl StubBehavior {
    /// Behavior matching the real booking target.
    pub fn faithful() -> Self {
        Self {
            username: "admin".to_string(),
            password: "password123".to_string(),
            delete_status: 201,
            read_firstname_override: None,
        }
    }
}

// ============================================================================
// SECTION: State
// ============================================================================

/// Mutable state of one stub instance.
struct StubState {
    /// Stored bookings keyed by generated identifier.
    bookings: BTreeMap<i64, Value>,
    /// Tokens issued by the auth endpoint.
    tokens: BTreeSet<String>,
    /// Next booking identifier to hand out.
    next_booking_id: i64,
    /// Next token suffix to hand out.
    next_token_id: u64,
}

impl StubState {
    fn new() -> Self {
        Self {
            bookings: BTreeMap::new(),
            tokens: BTreeSet::new(),
            next_booking_id: 1,
            next_token_id: 1,
        }
    }

    fn issue_token(&mut self) -> String {
        let token = format!("stubtoken{}", self.next_token_id);
        self.next_token_id += 1;
        self.tokens.insert(token.clone());
        token
    }

    fn store_booking(&mut self, booking: Value) -> i64 {
        let id = self.next_booking_id;
        self.next_booking_id += 1;
        self.bookings.insert(id, booking);
        id
    }
}

// ============================================================================
// SECTION: Server Handle
// ============================================================================

/// Handle for a running stub; dropping it shuts the server down.
pub struct StubServer {
    /// Base URL the probe should target.
    base_url: String,
    /// Raised to stop the serving loop.
    stop: Arc<AtomicBool>,
    /// Serving thread, joined on drop.
    join: Option<thread::JoinHandle<()>>,
}

impl StubServer {
    /// Spawns a stub on an ephemeral loopback port.
    pub fn spawn(behavior: StubBehavior) -> Result<Self, String> {
        let server =
            Server::http("127.0.0.1:0").map_err(|err| format!("bind stub server: {err}"))?;
        let addr = server
            .server_addr()
            .to_ip()
            .ok_or_else(|| "stub server bound to a non-ip address".to_string())?;
        let base_url = format!("http://{addr}");
        let stop = Arc::new(AtomicBool::new(false));
        let worker_stop = Arc::clone(&stop);
        let join = thread::spawn(move || serve(&server, &behavior, &worker_stop));
        Ok(Self {
            base_url,
            stop,
            join: Some(join),
        })
    }

    /// Returns the stub's base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

// ============================================================================
// SECTION: Serving Loop
// ============================================================================

/// Accepts requests until the stop flag is raised.
fn serve(server: &Server, behavior: &StubBehavior, stop: &AtomicBool) {
    let mut state = StubState::new();
    while !stop.load(Ordering::SeqCst) {
        match server.recv_timeout(POLL_INTERVAL) {
            Ok(Some(request)) => handle_request(request, &mut state, behavior),
            Ok(None) => {}
            Err(_) => break,
        }
    }
}

/// Routes one request and sends its response.
fn handle_request(mut request: Request, state: &mut StubState, behavior: &StubBehavior) {
    let body = read_json_body(&mut request);
    let token = cookie_token(&request);
    let url = request.url().to_string();
    let segments: Vec<&str> = url.trim_start_matches('/').split('/').collect();
    let response = match (request.method(), segments.as_slice()) {
        (Method::Post, ["auth"]) => handle_auth(state, behavior, body.as_ref()),
        (Method::Post, ["booking"]) => handle_create(state, body),
        (Method::Get, ["booking", id]) => handle_read(state, behavior, id),
        (Method::Put, ["booking", id]) => handle_update(state, token.as_deref(), id, body),
        (Method::Delete, ["booking", id]) => {
            handle_delete(state, behavior, token.as_deref(), id)
        }
        _ => text_response(404, "Not Found"),
    };
    let _ = request.respond(response);
}

// ============================================================================
// SECTION: Endpoint Handlers
// ============================================================================

/// Issues a token for matching credentials, or explains the denial.
fn handle_auth(
    state: &mut StubState,
    behavior: &StubBehavior,
    body: Option<&Value>,
) -> Response<Cursor<Vec<u8>>> {
    let credentials_match = body.is_some_and(|body| {
        field_str(body, "username") == Some(behavior.username.as_str())
            && field_str(body, "password") == Some(behavior.password.as_str())
    });
    if credentials_match {
        let token = state.issue_token();
        json_response(200, &json!({ "token": token }))
    } else {
        json_response(200, &json!({ "reason": "Bad credentials" }))
    }
}

/// Stores a booking and returns its generated identifier.
fn handle_create(state: &mut StubState, body: Option<Value>) -> Response<Cursor<Vec<u8>>> {
    let Some(booking) = body else {
        return text_response(400, "Bad Request");
    };
    let id = state.store_booking(booking.clone());
    json_response(200, &json!({ "bookingid": id, "booking": booking }))
}

/// Returns a stored booking, applying any configured drift.
fn handle_read(state: &StubState, behavior: &StubBehavior, id: &str) -> Response<Cursor<Vec<u8>>> {
    let Some(id) = parse_id(id) else {
        return text_response(404, "Not Found");
    };
    match state.bookings.get(&id) {
        Some(booking) => {
            let mut rendered = booking.clone();
            if let Some(firstname) = behavior.read_firstname_override.as_deref()
                && let Some(field) = rendered.get_mut("firstname")
            {
                *field = Value::String(firstname.to_string());
            }
            json_response(200, &rendered)
        }
        None => text_response(404, "Not Found"),
    }
}

/// Replaces a stored booking, checking authorization before existence.
fn handle_update(
    state: &mut StubState,
    token: Option<&str>,
    id: &str,
    body: Option<Value>,
) -> Response<Cursor<Vec<u8>>> {
    if !token_is_valid(state, token) {
        return text_response(403, "Forbidden");
    }
    let Some(id) = parse_id(id) else {
        return text_response(405, "Method Not Allowed");
    };
    let Some(booking) = body else {
        return text_response(400, "Bad Request");
    };
    let Some(slot) = state.bookings.get_mut(&id) else {
        return text_response(405, "Method Not Allowed");
    };
    *slot = booking.clone();
    json_response(200, &booking)
}

/// Removes a stored booking, checking authorization before existence.
fn handle_delete(
    state: &mut StubState,
    behavior: &StubBehavior,
    token: Option<&str>,
    id: &str,
) -> Response<Cursor<Vec<u8>>> {
    if !token_is_valid(state, token) {
        return text_response(403, "Forbidden");
    }
    let Some(id) = parse_id(id) else {
        return text_response(405, "Method Not Allowed");
    };
    if state.bookings.remove(&id).is_none() {
        return text_response(405, "Method Not Allowed");
    }
    text_response(behavior.delete_status, "Created")
}

// ============================================================================
// SECTION: Request Helpers
// ============================================================================

/// Checks a cookie token against the issued set.
fn token_is_valid(state: &StubState, token: Option<&str>) -> bool {
    token.is_some_and(|token| state.tokens.contains(token))
}

/// Reads and parses the request body as JSON.
fn read_json_body(request: &mut Request) -> Option<Value> {
    let mut raw = String::new();
    request.as_reader().read_to_string(&mut raw).ok()?;
    serde_json::from_str(&raw).ok()
}

/// Extracts the token cookie from request headers.
fn cookie_token(request: &Request) -> Option<String> {
    request.headers().iter().find_map(|header| {
        if header.field.equiv("Cookie") {
            header
                .value
                .as_str()
                .split(';')
                .find_map(|part| part.trim().strip_prefix("token=").map(str::to_string))
        } else {
            None
        }
    })
}

/// Reads a string field from a JSON object.
fn field_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Parses a numeric booking identifier from a path segment.
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

// ============================================================================
// SECTION: Response Helpers
// ============================================================================

/// Builds a JSON response with the booking target's content type.
fn json_response(status: u16, value: &Value) -> Response<Cursor<Vec<u8>>> {
    let mut response = Response::from_string(value.to_string()).with_status_code(StatusCode(status));
    if let Ok(header) = Header::from_bytes("Content-Type", "application/json; charset=utf-8") {
        response.add_header(header);
    }
    response
}

/// Builds a plain-text response.
fn text_response(status: u16, message: &str) -> Response<Cursor<Vec<u8>>> {
    Response::from_string(message).with_status_code(StatusCode(status))
}
