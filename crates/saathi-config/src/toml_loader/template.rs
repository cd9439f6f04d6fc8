//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Saathi Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[model]
# name = "llama3.1"                    # any model pulled into Ollama
# base_url = "http://127.0.0.1:11434"
# temperature = 0.0                    # 0.0-2.0
# top_p = 0.0                          # 0.0-1.0
# request_timeout_secs = 120           # 5-600

[agent]
# max_rounds = 5                       # model calls per turn, 1-20
# system_prompt = "You are ..."        # replaces the built-in persona

[tools]
# timeout_secs = 20                    # per tool call, 1-300

[tools.web_search]
# enabled = true
# max_results = 3                      # 1-10
# endpoint = "https://html.duckduckgo.com/html/"
# api_key = ""                         # or SAATHI_SEARCH_API_KEY

[speech]
# engine = "say"                       # say, echo, none
# voice = "Samantha"
# case_matching = "exact"              # exact, insensitive
# code_blocks = "speak"                # speak, skip

[logging]
# level = "INFO"                       # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
