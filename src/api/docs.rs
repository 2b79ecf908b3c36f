//! API documentation page / API文档页面

use axum::response::{Html, Redirect};

/// GET / - redirect to the documentation page / 重定向到文档页
pub async fn root() -> Redirect {
    Redirect::temporary("/docs")
}

/// GET /docs - static API reference / 静态API参考
pub async fn api_docs() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

const DOCS_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>String Analysis Service - API</title>
<style>
body { font-family: sans-serif; max-width: 860px; margin: 2em auto; padding: 0 1em; color: #222; }
code { background: #f4f4f4; padding: 2px 5px; border-radius: 3px; }
table { border-collapse: collapse; width: 100%; }
td, th { border: 1px solid #ddd; padding: 6px 10px; text-align: left; vertical-align: top; }
th { background: #f4f4f4; }
</style>
</head>
<body>
<h1>String Analysis Service</h1>
<p>Stores text strings, derives properties for each (length, palindrome check,
unique characters, word count, SHA-256 hash, character frequencies), and
answers structured or natural-language queries over the stored set.</p>
<table>
<tr><th>Method</th><th>Path</th><th>Description</th></tr>
<tr><td>POST</td><td><code>/strings</code></td>
<td>Store a string. Body: <code>{"value": "..."}</code>. 201 with the record;
422 if the value is empty; 409 if already stored.</td></tr>
<tr><td>GET</td><td><code>/strings/{value}</code></td>
<td>Fetch the record whose raw value equals the path segment. 404 if absent.</td></tr>
<tr><td>GET</td><td><code>/strings</code></td>
<td>List records. Optional params: <code>is_palindrome</code>,
<code>min_length</code>, <code>max_length</code>, <code>word_count</code>,
<code>contains_character</code>. 400 on negative numbers or a
multi-character <code>contains_character</code>.</td></tr>
<tr><td>GET</td><td><code>/strings/filter-by-natural-language?query=...</code></td>
<td>Heuristic query, e.g. <code>two word palindromes longer than 5</code>.
400 when no known phrase matches.</td></tr>
<tr><td>DELETE</td><td><code>/strings/{value}</code></td>
<td>Remove the record. 204 on success, 404 if absent.</td></tr>
<tr><td>GET</td><td><code>/api/health</code></td>
<td>Service status, version and stored record count.</td></tr>
</table>
</body>
</html>
"#;
