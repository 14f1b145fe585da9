use std::collections::HashMap;

use serde_json::Value;

/// Context mapping attached to a log event. Insertion order is irrelevant.
pub type Context = HashMap<String, Value>;

/// Return the context with `key` removed, everything else untouched.
pub fn omit_key(mut context: Context, key: &str) -> Context {
    context.remove(key);
    context
}

/// Fetch a string value for `key`, falling back to `default` when the key is
/// absent or holds a non-string value.
pub fn get_or_default(context: &Context, key: &str, default: String) -> String {
    context
        .get(key)
        .and_then(Value::as_str)
        .map_or(default, str::to_string)
}
