//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use todo_core::{
    ApiClient, Entity, HttpMethod, HttpRequest, HttpResponse, Resource, Target, TargetDraft, Todo, TodoDraft,
    TransportError,
};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> ApiClient {
    ApiClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn parse_resource(s: &str) -> Resource {
    match s {
        "Targets" => Resource::Targets,
        "Todo" => Resource::Todos,
        other => panic!("unknown resource: {other}"),
    }
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn check_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

    if let Some(headers) = expected.get("headers") {
        let expected_headers: Vec<(String, String)> = headers
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");
    }

    match expected.get("body") {
        Some(body) => {
            let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn check_error(name: &str, err: TransportError, expected: &str) {
    match expected {
        "Status" => assert!(matches!(err, TransportError::Status { .. }), "{name}: expected Status"),
        "Decode" => assert!(matches!(err, TransportError::Decode(_)), "{name}: expected Decode"),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let raw = include_str!("../../test-vectors/create.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let title = input["title"].as_str().unwrap().to_string();
        let description = input["description"].as_str().unwrap().to_string();

        let resource = parse_resource(case["resource"].as_str().unwrap());
        let (req, parsed) = match resource {
            Resource::Targets => {
                let draft = TargetDraft { title, description };
                let req = c.build_create(resource, &Target::payload(&draft)).unwrap();
                let parsed = c.parse_entity::<Target>(simulated_response(case)).unwrap();
                (req, serde_json::to_value(parsed).unwrap())
            }
            Resource::Todos => {
                let draft = TodoDraft {
                    title,
                    description,
                    target_id: input["targetId"].as_i64().unwrap(),
                };
                let req = c.build_create(resource, &Todo::payload(&draft)).unwrap();
                let parsed = c.parse_entity::<Todo>(simulated_response(case)).unwrap();
                (req, serde_json::to_value(parsed).unwrap())
            }
        };

        check_request(name, &req, &case["expected_request"]);
        assert_eq!(parsed, case["expected_result"], "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let resource = parse_resource(case["resource"].as_str().unwrap());

        let req = c.build_list(resource);
        check_request(name, &req, &case["expected_request"]);

        let response = simulated_response(case);
        let parsed = match resource {
            Resource::Targets => c
                .parse_list::<Target>(response)
                .map(|items| serde_json::to_value(items).unwrap()),
            Resource::Todos => c
                .parse_list::<Todo>(response)
                .map(|items| serde_json::to_value(items).unwrap()),
        };

        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, parsed.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            assert_eq!(parsed.unwrap(), case["expected_result"], "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let raw = include_str!("../../test-vectors/update.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let resource = parse_resource(case["resource"].as_str().unwrap());
        let input = case["input"].clone();

        let (req, parsed) = match resource {
            Resource::Targets => {
                let target: Target = serde_json::from_value(input).unwrap();
                let req = c.build_update(resource, target.id, &target).unwrap();
                let parsed = c
                    .parse_entity::<Target>(simulated_response(case))
                    .map(|target| serde_json::to_value(target).unwrap());
                (req, parsed)
            }
            Resource::Todos => {
                let todo: Todo = serde_json::from_value(input).unwrap();
                let req = c.build_update(resource, todo.id, &todo).unwrap();
                let parsed = c
                    .parse_entity::<Todo>(simulated_response(case))
                    .map(|todo| serde_json::to_value(todo).unwrap());
                (req, parsed)
            }
        };

        check_request(name, &req, &case["expected_request"]);
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, parsed.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            assert_eq!(parsed.unwrap(), case["expected_result"], "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let raw = include_str!("../../test-vectors/delete.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let resource = parse_resource(case["resource"].as_str().unwrap());
        let id = case["input_id"].as_i64().unwrap();

        let req = c.build_delete(resource, id);
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_delete(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            assert!(result.is_ok(), "{name}: expected success");
        }
    }
}
