//! MCP (Model Context Protocol) server for editor and agent integration.
//!
//! Exposes tools: analyze_prompt, enhance_prompt, list_examples.

use crate::analyzer::PromptAnalyzer;
use crate::config::Config;
use crate::enhancer::{PromptEnhancer, SeededPicker};
use crate::input::validate_prompt;
use crate::showcase;
use crate::PriorScores;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, Write};

/// MCP JSON-RPC request
#[derive(Debug, Deserialize, Serialize)]
pub struct JsonRpcRequest {
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,
    pub id: Option<serde_json::Value>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// MCP JSON-RPC response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

const PARSE_ERROR: i32 = -32700;
const METHOD_NOT_FOUND: i32 = -32601;

/// Tool definition for MCP tools/list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolDef {
    name: String,
    description: String,
    input_schema: InputSchema,
}

#[derive(Debug, Serialize)]
struct InputSchema {
    #[serde(rename = "type")]
    typ: &'static str,
    properties: serde_json::Value,
    required: Vec<&'static str>,
}

/// Stateless tool handler: an analyzer and an enhancer built from one config
pub struct ToolServer {
    analyzer: PromptAnalyzer,
    enhancer: PromptEnhancer,
    max_length: usize,
    seed: Option<u64>,
}

impl ToolServer {
    pub fn new(config: &Config) -> Self {
        Self {
            analyzer: PromptAnalyzer::new(config.lexicon()),
            enhancer: PromptEnhancer::new(config.lexicon()),
            max_length: config.effective_max_length(),
            seed: config.seed,
        }
    }

    /// Handle a single JSON-RPC request and return a response.
    pub fn handle_request(&self, req: &JsonRpcRequest) -> JsonRpcResponse {
        let id = req.id.clone();
        let result = match req.method.as_str() {
            "initialize" => serde_json::json!({
                "protocolVersion": "0.1.0",
                "capabilities": { "tools": {} },
                "serverInfo": { "name": "promptgrade", "version": env!("CARGO_PKG_VERSION") }
            }),
            "tools/list" => serde_json::json!({ "tools": tool_defs() }),
            "tools/call" => self.call_tool(req.params.as_ref()),
            other => {
                return JsonRpcResponse {
                    jsonrpc: "2.0",
                    id,
                    result: None,
                    error: Some(JsonRpcError {
                        code: METHOD_NOT_FOUND,
                        message: format!("Method not found: {}", other),
                    }),
                }
            }
        };

        JsonRpcResponse {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn call_tool(&self, params: Option<&serde_json::Value>) -> serde_json::Value {
        // Some clients wrap the call inside a "params" key
        let (name, args) = params
            .and_then(|p| p.get("params").or(Some(p)))
            .map(|p| {
                let name = p.get("name").and_then(|n| n.as_str()).unwrap_or("");
                let args = p
                    .get("arguments")
                    .and_then(|a| a.as_object())
                    .cloned()
                    .unwrap_or_default();
                (name, args)
            })
            .unwrap_or(("", serde_json::Map::new()));

        let result = match name {
            "analyze_prompt" => self.run_analyze(&args),
            "enhance_prompt" => self.run_enhance(&args),
            "list_examples" => serde_json::to_value(showcase::examples()).map_err(Into::into),
            _ => Err(anyhow::anyhow!("Unknown tool: {}", name)),
        };

        match result {
            Ok(val) => serde_json::json!({
                "content": [{ "type": "text", "text": serde_json::to_string(&val).unwrap_or_else(|_| "{}".to_string()) }]
            }),
            Err(e) => serde_json::json!({
                "content": [{ "type": "text", "text": format!("Error: {:#}", e) }],
                "isError": true
            }),
        }
    }

    /// The `prompt` argument, rejected when blank or longer than `max_length`
    fn prompt_arg(
        args: &serde_json::Map<String, serde_json::Value>,
        max_length: usize,
    ) -> anyhow::Result<&str> {
        let prompt = args.get("prompt").and_then(|v| v.as_str()).unwrap_or("");
        validate_prompt(prompt, max_length)?;
        Ok(prompt)
    }

    fn run_analyze(
        &self,
        args: &serde_json::Map<String, serde_json::Value>,
    ) -> anyhow::Result<serde_json::Value> {
        let prompt = Self::prompt_arg(args, self.max_length)?;
        Ok(serde_json::to_value(self.analyzer.analyze(prompt))?)
    }

    fn run_enhance(
        &self,
        args: &serde_json::Map<String, serde_json::Value>,
    ) -> anyhow::Result<serde_json::Value> {
        // Only analysis is length-limited
        let prompt = Self::prompt_arg(args, usize::MAX)?;
        let prior = match args.get("analysis") {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => Some(parse_prior(value)?),
        };

        let seed = args.get("seed").and_then(|v| v.as_u64()).or(self.seed);
        let mut picker = match seed {
            Some(seed) => SeededPicker::new(seed),
            None => SeededPicker::from_entropy(),
        };

        let result = self.enhancer.enhance(prompt, prior.as_ref(), &mut picker);
        Ok(serde_json::to_value(result)?)
    }
}

impl Default for ToolServer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Accept either bare prior scores or a full score report
fn parse_prior(value: &serde_json::Value) -> anyhow::Result<PriorScores> {
    if let Some(scores) = value.get("scores") {
        let mut prior: PriorScores = serde_json::from_value(scores.clone())
            .context("Invalid analysis: scores must hold clarity, specificity, context, structure")?;
        prior.total_score = value
            .get("totalScore")
            .and_then(|t| t.as_u64())
            .map(|t| t.min(u8::MAX as u64) as u8);
        return Ok(prior);
    }
    serde_json::from_value(value.clone())
        .context("Invalid analysis: expected clarity, specificity, context, structure")
}

fn tool_defs() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "analyze_prompt".to_string(),
            description: "Score a prompt on clarity, specificity, context and structure"
                .to_string(),
            input_schema: InputSchema {
                typ: "object",
                properties: serde_json::json!({
                    "prompt": { "type": "string", "description": "Prompt text to score" }
                }),
                required: vec!["prompt"],
            },
        },
        ToolDef {
            name: "enhance_prompt".to_string(),
            description: "Rewrite a prompt, targeting the dimensions that scored low"
                .to_string(),
            input_schema: InputSchema {
                typ: "object",
                properties: serde_json::json!({
                    "prompt": { "type": "string", "description": "Prompt text to rewrite" },
                    "analysis": { "type": "object", "description": "Scores from analyze_prompt (without it the prompt is returned unchanged)" },
                    "seed": { "type": "number", "description": "Seed for reproducible choices" }
                }),
                required: vec!["prompt"],
            },
        },
        ToolDef {
            name: "list_examples".to_string(),
            description: "List before/after example prompts".to_string(),
            input_schema: InputSchema {
                typ: "object",
                properties: serde_json::json!({}),
                required: vec![],
            },
        },
    ]
}

/// Run the MCP server loop (stdin / stdout).
pub fn run_mcp_server(config: &Config) -> anyhow::Result<()> {
    let server = ToolServer::new(config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let reader = BufReader::new(stdin.lock());

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<JsonRpcRequest>(&line) {
            Ok(req) => server.handle_request(&req),
            Err(e) => JsonRpcResponse {
                jsonrpc: "2.0",
                id: None,
                result: None,
                error: Some(JsonRpcError {
                    code: PARSE_ERROR,
                    message: format!("Parse error: {}", e),
                }),
            },
        };

        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }
    Ok(())
}
