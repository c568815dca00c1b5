use std::path::PathBuf;

pub fn default_version() -> u32 {
    1
}

pub fn default_store() -> PathBuf {
    PathBuf::from("plans.json")
}

pub fn default_report_dir() -> PathBuf {
    PathBuf::from("reports")
}

pub fn default_true() -> bool {
    true
}

pub fn default_temperature() -> f32 {
    0.7
}

pub fn default_max_output_tokens() -> u32 {
    2000
}

pub fn default_timeout_sec() -> u64 {
    60
}

pub fn default_gemini_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1/models".to_string()
}

pub fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

pub fn default_gemini_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

pub fn default_claude_binary() -> PathBuf {
    // Check common install location first
    if let Some(home) = std::env::var_os("HOME") {
        let local_path = PathBuf::from(home).join(".claude/local/claude");
        if local_path.exists() {
            return local_path;
        }
    }
    PathBuf::from("claude")
}

pub fn default_claude_model() -> String {
    "sonnet".to_string()
}
