//! Rendering of the generated configuration script.

/// Renders the full contents of the generated script.
///
/// The values are substituted verbatim, without escaping; a value that
/// itself contains a double quote yields a structurally broken script.
pub fn env_script(api_key: &str, model: &str) -> String {
    format!(
        "// Auto-generated from .env\nwindow.ENV = {{\n    OPENAI_API_KEY: \"{}\",\n    OPENAI_MODEL: \"{}\"\n}};\n",
        api_key, model
    )
}
