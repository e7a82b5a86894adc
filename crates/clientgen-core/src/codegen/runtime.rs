//! Runtime helper placed at the top of every generated client.

use serde_json::Value as JsonValue;

const REQUEST_FUNCTION: &str = r#"
const genericJSONRequest = async (
  url: string,
  method: string,
  {
    data,
    query,
  }: Partial<{
    data: { [k: string]: any };
    query: { [k: string]: string };
  }> = {}
) => {
  const body = data ? JSON.stringify(data) : undefined;
  const queryString = query
    ? "?" +
      Object.entries(query)
        .map(([k, v]) => [k, encodeURIComponent(v)].join("="))
        .join("&")
    : "";
  const response = await fetch(url + queryString, {
    method,
    headers: { "Content-Type": "application/json" },
    body,
  });

  if (!response.ok) {
    throw new Error(await response.text());
  }

  return response.json();
};
"#;

/// Helper text: the generic JSON request function followed by the `host`
/// constant every generated URL is built from.
pub fn runtime_helper(host: &str) -> String {
    // A JSON string literal is also a valid TypeScript string literal
    let host = JsonValue::from(host);
    format!("{REQUEST_FUNCTION}\nconst host = {host};\n")
}
