//! Integration tests for the MCP server.
//! Exercises ToolServer from outside the crate and the `mcp` subcommand over stdio.

use promptgrade::config::Config;
use promptgrade::mcp::{JsonRpcRequest, ToolServer};
use serde_json::json;
use std::io::Write;
use std::process::{Command, Stdio};

fn make_request(method: &str, params: Option<serde_json::Value>) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: Some("2.0".to_string()),
        id: Some(json!(1)),
        method: method.to_string(),
        params,
    }
}

/// Call a tool and decode the JSON carried in its text content
fn call_tool(server: &ToolServer, name: &str, arguments: serde_json::Value) -> serde_json::Value {
    let req = make_request("tools/call", Some(json!({ "name": name, "arguments": arguments })));
    let resp = server.handle_request(&req);
    assert!(resp.error.is_none());
    let result = resp.result.expect("expected result");
    assert!(result.get("isError").is_none(), "tool failed: {}", result);
    let text = result["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

#[test]
fn mcp_tools_list_returns_all_tools() {
    let resp = ToolServer::default().handle_request(&make_request("tools/list", None));
    let result = resp.result.expect("expected result");
    let names: Vec<&str> = result["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["analyze_prompt", "enhance_prompt", "list_examples"]);
}

#[test]
fn mcp_analyze_then_enhance_round_trip() {
    let server = ToolServer::default();
    let report = call_tool(&server, "analyze_prompt", json!({ "prompt": "Tell me about dogs" }));
    assert_eq!(report["totalScore"], 0);

    // The full report is accepted as the analysis argument
    let enhanced = call_tool(
        &server,
        "enhance_prompt",
        json!({ "prompt": "Tell me about dogs", "analysis": report, "seed": 3 }),
    );
    assert_eq!(enhanced["original"], "Tell me about dogs");
    assert_ne!(enhanced["enhanced"], "Tell me about dogs");
    assert!(!enhanced["improvements"].as_array().unwrap().is_empty());

    let again = call_tool(
        &server,
        "enhance_prompt",
        json!({ "prompt": "Tell me about dogs", "analysis": report, "seed": 3 }),
    );
    assert_eq!(enhanced, again);
}

#[test]
fn mcp_config_max_length_applies() {
    let config = Config {
        max_length: Some(10),
        ..Config::default()
    };
    let server = ToolServer::new(&config);
    let req = make_request(
        "tools/call",
        Some(json!({ "name": "analyze_prompt", "arguments": { "prompt": "Tell me about dogs" } })),
    );
    let result = server.handle_request(&req).result.unwrap();
    assert_eq!(result["isError"], true);
    assert!(result["content"][0]["text"].as_str().unwrap().contains("too long"));
}

#[test]
fn mcp_subcommand_over_stdio() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_promptgrade"))
        .arg("mcp")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn promptgrade mcp");

    {
        let stdin = child.stdin.as_mut().unwrap();
        writeln!(stdin, r#"{{"jsonrpc":"2.0","id":1,"method":"initialize"}}"#).unwrap();
        writeln!(stdin).unwrap();
        writeln!(stdin, "not json").unwrap();
        writeln!(
            stdin,
            r#"{{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{{"name":"analyze_prompt","arguments":{{"prompt":"Explain tides"}}}}}}"#
        )
        .unwrap();
        writeln!(stdin, r#"{{"jsonrpc":"2.0","id":3,"method":"shutdown/now"}}"#).unwrap();
    }
    // Closing stdin ends the server loop
    drop(child.stdin.take());

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 4, "blank lines get no response");

    assert_eq!(lines[0]["id"], 1);
    assert_eq!(lines[0]["result"]["serverInfo"]["name"], "promptgrade");

    assert_eq!(lines[1]["error"]["code"], -32700);

    assert_eq!(lines[2]["id"], 2);
    let text = lines[2]["result"]["content"][0]["text"].as_str().unwrap();
    let report: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(report["scores"]["clarity"], 10);

    assert_eq!(lines[3]["error"]["code"], -32601);
}
