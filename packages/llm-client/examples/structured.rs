//! JSON-mode completion example

use llm_client::{strip_code_blocks, LlmClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("LLM_API_KEY")?;
    let client = LlmClient::new(
        "https://openrouter.ai/api/v1",
        "meta-llama/llama-3.3-70b-instruct",
    );

    let system = "You decide whether two names refer to the same technology. \
                  Respond with JSON: {\"equivalent\": boolean}";
    let user = "Name A: \"JS\"\nName B: \"JavaScript\"";

    let content = client.complete_json(&api_key, system, user).await?;
    let parsed: serde_json::Value = serde_json::from_str(strip_code_blocks(&content))?;

    println!("Raw: {content}");
    println!("Equivalent: {}", parsed["equivalent"]);

    Ok(())
}
