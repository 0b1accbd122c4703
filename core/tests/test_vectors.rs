//! Replay the JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file names the credentials to configure and a list of cases.
//! A case names a handler call and its arguments, the responses the transport
//! hands back in order, the requests it must see, and either the expected
//! result or the expected error. Results are compared as a subset of the
//! serialized value, and request bodies as parsed JSON, so field ordering
//! never matters.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, Utc};
use harvest_core::{
    Client, Config, Error, Harvest, HttpRequest, HttpResponse, Invoice, InvoiceCategory, InvoiceFilter,
    InvoiceMessage, InvoicePayment, InvoiceState, ReportFilter, Result, TimeEntry, Transport,
};
use pretty_assertions::assert_eq;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

/// Hands out scripted responses and keeps every request it was given.
#[derive(Default)]
struct Replay {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl Transport for Replay {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Transport("replay exhausted".to_string()))
    }
}

fn response(scripted: &Value) -> HttpResponse {
    let headers = scripted["headers"]
        .as_array()
        .map(|pairs| pairs.iter().map(pair).collect())
        .unwrap_or_default();
    let body = match &scripted["body"] {
        Value::Null => String::new(),
        Value::String(raw) => raw.clone(),
        other => other.to_string(),
    };
    HttpResponse {
        status: scripted["status"].as_u64().unwrap() as u16,
        headers,
        body,
    }
}

fn pair(value: &Value) -> (String, String) {
    let arr = value.as_array().unwrap();
    (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
}

fn config(settings: &Value) -> Config {
    match settings["access_token"].as_str() {
        Some(token) => Config::oauth(token),
        None => Config::basic(
            settings["subdomain"].as_str().unwrap(),
            settings["username"].as_str().unwrap(),
            settings["password"].as_str().unwrap(),
        ),
    }
}

// ---------------------------------------------------------------------------
// Argument helpers
// ---------------------------------------------------------------------------

fn id(args: &Value, key: &str) -> u64 {
    args[key].as_u64().unwrap_or_else(|| panic!("missing numeric arg {key}"))
}

fn date(args: &Value, key: &str) -> NaiveDate {
    args[key].as_str().unwrap().parse().unwrap()
}

fn instant(value: &Value) -> Option<DateTime<Utc>> {
    value.as_str().map(|raw| raw.parse().unwrap())
}

fn model<T: DeserializeOwned>(args: &Value, key: &str) -> T {
    serde_json::from_value(args[key].clone()).unwrap()
}

fn report_filter(args: &Value) -> ReportFilter {
    let f = &args["filter"];
    ReportFilter {
        user_id: f["user_id"].as_u64(),
        billable: f["billable"].as_bool(),
        only_billed: f["only_billed"].as_bool().unwrap_or(false),
        only_unbilled: f["only_unbilled"].as_bool().unwrap_or(false),
        is_closed: f["is_closed"].as_bool(),
        updated_since: instant(&f["updated_since"]),
    }
}

fn invoice_filter(args: &Value) -> InvoiceFilter {
    let f = &args["filter"];
    InvoiceFilter {
        page: f["page"].as_u64().map(|page| page as u32),
        status: f
            .get("status")
            .map(|status| serde_json::from_value::<InvoiceState>(status.clone()).unwrap()),
        client_id: f["client_id"].as_u64(),
        updated_since: instant(&f["updated_since"]),
        from: f["from"].as_str().map(|raw| raw.parse().unwrap()),
        to: f["to"].as_str().map(|raw| raw.parse().unwrap()),
    }
}

fn to_json<T: Serialize>(result: Result<T>) -> Result<Value> {
    result.map(|value| serde_json::to_value(value).unwrap())
}

/// Run the handler call a case names.
fn dispatch(h: &Harvest, call: &str, args: &Value) -> Result<Value> {
    let user = args["user_id"].as_u64();
    match call {
        "clients.all" => to_json(h.clients().all()),
        "clients.all_since" => to_json(h.clients().all_since(instant(&args["since"]).unwrap())),
        "clients.find" => to_json(h.clients().find(id(args, "id"))),
        "clients.create" => to_json(h.clients().create(&model::<Client>(args, "client"))),
        "clients.update" => to_json(h.clients().update(id(args, "id"), &model::<Client>(args, "client"))),
        "clients.delete" => to_json(h.clients().delete(id(args, "id"))),
        "clients.toggle" => to_json(h.clients().toggle(id(args, "id"))),
        "clients.deactivate" => to_json(h.clients().deactivate(id(args, "id"))),

        "time.daily" => to_json(h.time().daily(date(args, "date"), user)),
        "time.all" => to_json(h.time().all(date(args, "date"), user)),
        "time.trackable_projects" => to_json(h.time().trackable_projects(date(args, "date"), user)),
        "time.find" => to_json(h.time().find(id(args, "id"), user)),
        "time.toggle" => to_json(h.time().toggle(id(args, "id"), user)),
        "time.create" => to_json(h.time().create(&model::<TimeEntry>(args, "entry"), user)),
        "time.update" => to_json(h.time().update(id(args, "id"), &model::<TimeEntry>(args, "entry"), user)),
        "time.delete" => to_json(h.time().delete(id(args, "id"), user)),

        "reports.time_by_project" => to_json(h.reports().time_by_project(
            id(args, "project_id"),
            date(args, "from"),
            date(args, "to"),
            &report_filter(args),
        )),
        "reports.time_by_user" => to_json(h.reports().time_by_user(
            id(args, "user_id"),
            date(args, "from"),
            date(args, "to"),
            &report_filter(args),
        )),
        "reports.expenses_by_project" => to_json(h.reports().expenses_by_project(
            id(args, "project_id"),
            date(args, "from"),
            date(args, "to"),
            &report_filter(args),
        )),
        "reports.expenses_by_user" => to_json(h.reports().expenses_by_user(
            id(args, "user_id"),
            date(args, "from"),
            date(args, "to"),
            &report_filter(args),
        )),
        "reports.projects_by_client" => to_json(h.reports().projects_by_client(id(args, "client_id"))),

        "invoices.all" => to_json(h.invoices().all(&invoice_filter(args))),
        "invoices.create" => to_json(h.invoices().create(&model::<Invoice>(args, "invoice"))),
        "invoice_categories.create" => {
            to_json(h.invoice_categories().create(&model::<InvoiceCategory>(args, "category")))
        }
        "invoice_payments.create" => to_json(h.invoice_payments().create(&model::<InvoicePayment>(args, "payment"))),
        "invoice_payments.delete" => to_json(h.invoice_payments().delete(id(args, "invoice_id"), id(args, "id"))),
        "invoice_messages.mark_as_sent" => {
            to_json(h.invoice_messages().mark_as_sent(&model::<InvoiceMessage>(args, "message")))
        }
        "invoice_messages.mark_as_closed" => {
            to_json(h.invoice_messages().mark_as_closed(id(args, "invoice_id"), args["body"].as_str()))
        }
        "invoice_messages.re_open" => to_json(h.invoice_messages().re_open(id(args, "invoice_id"))),

        "account.who_am_i" => to_json(h.account().who_am_i()),
        "account.rate_limit_status" => to_json(h.account().rate_limit_status()),
        "users.reset_password" => to_json(h.users().reset_password(id(args, "id"))),

        other => panic!("unknown call in vector: {other}"),
    }
}

fn describe(err: &Error) -> Value {
    match err {
        Error::Configuration(msg) => json!({ "kind": "Configuration", "message": msg }),
        Error::InvalidUrl { url, reason } => json!({ "kind": "InvalidUrl", "url": url, "reason": reason }),
        Error::BadRequest { body } => json!({ "kind": "BadRequest", "body": body }),
        Error::AuthenticationFailed => json!({ "kind": "AuthenticationFailed" }),
        Error::NotFound => json!({ "kind": "NotFound" }),
        Error::Server { body } => json!({ "kind": "Server", "body": body }),
        Error::Unavailable => json!({ "kind": "Unavailable" }),
        Error::RateLimited { retry_after } => json!({ "kind": "RateLimited", "retry_after": retry_after }),
        Error::Http { status, body } => json!({ "kind": "Http", "status": status, "body": body }),
        Error::MissingLocation(location) => json!({ "kind": "MissingLocation", "location": location }),
        Error::Transport(msg) => json!({ "kind": "Transport", "message": msg }),
        Error::Deserialization(msg) => json!({ "kind": "Deserialization", "message": msg }),
        Error::Serialization(msg) => json!({ "kind": "Serialization", "message": msg }),
    }
}

/// Every key in `expected` must match `actual`; extra keys in `actual` are fine.
fn assert_subset(actual: &Value, expected: &Value, at: &str) {
    match (actual, expected) {
        (Value::Object(actual), Value::Object(expected)) => {
            for (key, want) in expected {
                let got = actual.get(key).unwrap_or(&Value::Null);
                assert_subset(got, want, &format!("{at}.{key}"));
            }
        }
        (Value::Array(actual), Value::Array(expected)) => {
            assert_eq!(actual.len(), expected.len(), "{at}: length");
            for (i, (got, want)) in actual.iter().zip(expected).enumerate() {
                assert_subset(got, want, &format!("{at}[{i}]"));
            }
        }
        _ => assert_eq!(actual, expected, "{at}"),
    }
}

fn check_request(req: &HttpRequest, expected: &Value, name: &str) {
    assert_eq!(req.method.as_str(), expected["method"].as_str().unwrap(), "{name}: method");
    assert_eq!(req.url, expected["url"].as_str().unwrap(), "{name}: url");

    if let Some(headers) = expected["headers"].as_array() {
        for (key, value) in headers.iter().map(pair) {
            assert_eq!(req.header(&key), Some(value.as_str()), "{name}: header {key}");
        }
    }

    match &expected["body"] {
        Value::Null => assert_eq!(req.body, None, "{name}: body"),
        want => {
            let got: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&got, want, "{name}: body");
        }
    }
}

fn run_vectors(raw: &str) {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let cases = vectors["cases"].as_array().unwrap();
    assert!(!cases.is_empty());

    for case in cases {
        let name = case["name"].as_str().unwrap();
        let replay = Arc::new(Replay::default());
        for scripted in case["responses"].as_array().unwrap() {
            replay.responses.lock().unwrap().push_back(response(scripted));
        }

        let harvest = Harvest::with_transport(config(&vectors["config"]), replay.clone()).unwrap();
        let outcome = dispatch(&harvest, case["call"].as_str().unwrap(), &case["args"]);

        let expected_requests = case["expected_requests"].as_array().unwrap();
        let requests = replay.requests.lock().unwrap().clone();
        assert_eq!(requests.len(), expected_requests.len(), "{name}: request count");
        for (req, want) in requests.iter().zip(expected_requests) {
            check_request(req, want, name);
        }
        assert!(replay.responses.lock().unwrap().is_empty(), "{name}: unused responses");

        match (outcome, case.get("expected_error")) {
            (Ok(value), None) => assert_subset(&value, &case["expected"], name),
            (Err(err), Some(want)) => assert_subset(&describe(&err), want, name),
            (Ok(value), Some(want)) => panic!("{name}: expected error {want}, got {value}"),
            (Err(err), None) => panic!("{name}: unexpected error {err:?}"),
        }
    }
}

#[test]
fn clients_test_vectors() {
    run_vectors(include_str!("../../test-vectors/clients.json"));
}

#[test]
fn time_test_vectors() {
    run_vectors(include_str!("../../test-vectors/time.json"));
}

#[test]
fn reports_test_vectors() {
    run_vectors(include_str!("../../test-vectors/reports.json"));
}

#[test]
fn invoices_test_vectors() {
    run_vectors(include_str!("../../test-vectors/invoices.json"));
}

#[test]
fn account_test_vectors() {
    run_vectors(include_str!("../../test-vectors/account.json"));
}
