//! Dashboard JavaScript
//!
//! Only loads the WASM bundle; `#[wasm_bindgen(start)]` takes over from there.

/// Module script importing the wasm-bindgen glue at `bundle`
pub fn bootstrap_script(bundle: &str) -> String {
    // JSON string literal doubles as a JS string literal; `<\/` keeps a
    // `</script>` in the path from closing the inline script
    let bundle = serde_json::Value::from(bundle)
        .to_string()
        .replace("</", "<\\/");
    format!(
        r#"import init from {bundle};

init().catch((error) => {{
    console.error("Failed to start dashboard:", error);
    const panel = document.getElementById("errorState");
    document.getElementById("loadingState").style.display = "none";
    document.getElementById("errorMessage").textContent = String(error);
    panel.style.display = "block";
}});"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_is_quoted() {
        let script = bootstrap_script("/static/pkg/crypto_dashboard.js");
        assert!(script.starts_with(r#"import init from "/static/pkg/crypto_dashboard.js";"#));
    }

    #[test]
    fn test_bundle_cannot_close_script_tag() {
        let script = bootstrap_script(r#"/pkg/x.js"</script><script>alert(1)</script>"#);
        assert!(!script.contains("</script>"));
        assert!(script.contains(r#"import init from "/pkg/x.js\"<\/script><script>alert(1)<\/script>";"#));
    }
}
