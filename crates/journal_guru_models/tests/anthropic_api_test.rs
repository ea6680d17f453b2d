use journal_guru_models::{AnthropicClient, AnthropicConfig, TextGenerator};
use std::env;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_anthropic_simple_generation() {
    let _ = dotenvy::dotenv();
    let api_key =
        env::var("ANTHROPIC_API_KEY").expect("ANTHROPIC_API_KEY must be set for API tests");

    let config = AnthropicConfig::builder()
        .api_key(api_key)
        .build()
        .expect("Valid config");
    let client = AnthropicClient::new(config).expect("Client builds");

    let text = client
        .generate_text("Say 'test' and nothing else.", "claude-sonnet-4-20250514", 32)
        .await
        .expect("API call succeeded");

    assert!(!text.is_empty());
    println!("Response: {:?}", text);
}
